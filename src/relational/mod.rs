//! Just enough relational algebra for the reports: hash joins on a key
//! and an ordered group-by with an additive reducer.

pub mod group;
pub mod join;

use std::ops::AddAssign;

pub use group::group_sum;
pub use join::{inner_join, left_join};

/// Support/oppose counts summed by both reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub supported: u64,
    pub opposed: u64,
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.supported += rhs.supported;
        self.opposed += rhs.opposed;
    }
}
