use arrow::{
    array::{ArrayRef, Int64Array, StringArray, UInt64Array},
    datatypes::{DataType, Field, Schema as ArrowSchema},
};
use std::sync::Arc;
use tracing::debug;

use crate::load::{Bill, Legislator, Vote, VoteResult};
use crate::relational::{group_sum, inner_join, left_join, Tally};
use crate::report::classify::classify;
use crate::write::ReportTable;

/// Sponsor name used when `sponsor_id` is null or names no legislator.
pub const UNKNOWN_SPONSOR: &str = "Unknown";

/// One row of the `bills` report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillReportRow {
    pub id: i64,
    pub title: String,
    pub primary_sponsor: String,
    pub supporter_count: u64,
    pub opposer_count: u64,
}

impl ReportTable for BillReportRow {
    const NAME: &'static str = "bills";

    fn schema() -> ArrowSchema {
        ArrowSchema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("title", DataType::Utf8, false),
            Field::new("primary_sponsor", DataType::Utf8, false),
            Field::new("supporter_count", DataType::UInt64, false),
            Field::new("opposer_count", DataType::UInt64, false),
        ])
    }

    fn to_arrays(rows: &[Self]) -> Vec<ArrayRef> {
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.id))),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.title.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.primary_sponsor.as_str()),
            )),
            Arc::new(UInt64Array::from_iter_values(
                rows.iter().map(|r| r.supporter_count),
            )),
            Arc::new(UInt64Array::from_iter_values(
                rows.iter().map(|r| r.opposer_count),
            )),
        ]
    }
}

/// Per-bill counts before the sponsor lookup.
#[derive(Debug)]
struct BillStats {
    bill_id: i64,
    title: String,
    sponsor_id: Option<i64>,
    tally: Tally,
}

/// Supporter/opposer counts per bill, with the sponsor's name attached.
///
/// 1) inner-join vote results → votes (`vote_id = id`) → bills (`bill_id = id`)
/// 2) classify each row of the chain
/// 3) group by `(bill_id, title, sponsor_id)` and sum the indicators
/// 4) left-join the groups to legislators on `sponsor_id = id`,
///    falling back to "Unknown"
///
/// Bills nobody voted on never appear. Rows come out ordered by bill id.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(bills = bills.len(), votes = votes.len(), vote_results = vote_results.len())
)]
pub fn bill_support_oppose_count(
    legislators: &[Legislator],
    bills: &[Bill],
    votes: &[Vote],
    vote_results: &[VoteResult],
) -> Vec<BillReportRow> {
    let with_votes = inner_join(vote_results, votes, |vr| vr.vote_id, |v| v.id);
    let chain = inner_join(&with_votes, bills, |pair| pair.1.bill_id, |b| b.id);
    debug!(
        with_votes = with_votes.len(),
        with_bills = chain.len(),
        "joined vote results through votes to bills"
    );

    let classified = classify(&chain);

    let stats: Vec<BillStats> = group_sum(
        &classified,
        |c| (c.row.1.id, c.row.1.title.clone(), c.row.1.sponsor_id),
        |c| c.tally(),
    )
    .into_iter()
    .map(|((bill_id, title, sponsor_id), tally)| BillStats {
        bill_id,
        title,
        sponsor_id,
        tally,
    })
    .collect();

    left_join(&stats, legislators, |s| s.sponsor_id, |l| l.id)
        .into_iter()
        .map(|(s, sponsor)| {
            if sponsor.is_none() {
                debug!(bill_id = s.bill_id, sponsor_id = ?s.sponsor_id, "sponsor not found");
            }
            BillReportRow {
                id: s.bill_id,
                title: s.title.clone(),
                primary_sponsor: sponsor
                    .map(|l| l.name.clone())
                    .unwrap_or_else(|| UNKNOWN_SPONSOR.to_string()),
                supporter_count: s.tally.supported,
                opposer_count: s.tally.opposed,
            }
        })
        .collect()
}
