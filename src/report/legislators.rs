use arrow::{
    array::{ArrayRef, Int64Array, StringArray, UInt64Array},
    datatypes::{DataType, Field, Schema as ArrowSchema},
};
use std::sync::Arc;
use tracing::debug;

use crate::load::{Legislator, VoteResult};
use crate::relational::{group_sum, inner_join};
use crate::report::classify::classify;
use crate::write::ReportTable;

/// One row of `legislators-support-oppose-count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegislatorReportRow {
    pub id: i64,
    pub name: String,
    pub num_supported_bills: u64,
    pub num_opposed_bills: u64,
}

impl ReportTable for LegislatorReportRow {
    const NAME: &'static str = "legislators-support-oppose-count";

    fn schema() -> ArrowSchema {
        ArrowSchema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("name", DataType::Utf8, false),
            Field::new("num_supported_bills", DataType::UInt64, false),
            Field::new("num_opposed_bills", DataType::UInt64, false),
        ])
    }

    fn to_arrays(rows: &[Self]) -> Vec<ArrayRef> {
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.id))),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.name.as_str()),
            )),
            Arc::new(UInt64Array::from_iter_values(
                rows.iter().map(|r| r.num_supported_bills),
            )),
            Arc::new(UInt64Array::from_iter_values(
                rows.iter().map(|r| r.num_opposed_bills),
            )),
        ]
    }
}

/// Support/oppose counts per legislator.
///
/// 1) inner-join vote results to legislators on `legislator_id = id`
/// 2) classify each joined row
/// 3) group by `(legislator_id, name)` and sum the indicators
///
/// A legislator shows up iff at least one vote result names them, whatever
/// the vote_type. Rows come out ordered by `(id, name)`.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(legislators = legislators.len(), vote_results = vote_results.len())
)]
pub fn legislators_support_oppose_count(
    legislators: &[Legislator],
    vote_results: &[VoteResult],
) -> Vec<LegislatorReportRow> {
    let joined = inner_join(vote_results, legislators, |vr| vr.legislator_id, |l| l.id);
    debug!(matched = joined.len(), "joined vote results to legislators");

    let classified = classify(&joined);

    let groups = group_sum(
        &classified,
        |c| (c.row.0.legislator_id, c.row.1.name.clone()),
        |c| c.tally(),
    );

    groups
        .into_iter()
        .map(|((id, name), tally)| LegislatorReportRow {
            id,
            name,
            num_supported_bills: tally.supported,
            num_opposed_bills: tally.opposed,
        })
        .collect()
}
