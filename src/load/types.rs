use serde::{Deserialize, Deserializer};

use super::{InputRecord, TableName};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Legislator {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Bill {
    pub id: i64,
    pub title: String,
    /// Empty cell → no sponsor on record. The column itself is required.
    #[serde(deserialize_with = "nullable_i64")]
    pub sponsor_id: Option<i64>,
}

// A plain `Option` field would default to `None` when its column is absent.
fn nullable_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Option::<i64>::deserialize(d)
}

/// One voting event on one bill.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vote {
    pub id: i64,
    pub bill_id: i64,
}

/// A single legislator's stance in a single vote.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoteResult {
    pub id: i64,
    pub legislator_id: i64,
    pub vote_id: i64,
    pub vote_type: i64,
}

impl InputRecord for Legislator {
    const TABLE: TableName = TableName::Legislators;
}

impl InputRecord for Bill {
    const TABLE: TableName = TableName::Bills;
}

impl InputRecord for Vote {
    const TABLE: TableName = TableName::Votes;
}

impl InputRecord for VoteResult {
    const TABLE: TableName = TableName::VoteResults;
}
