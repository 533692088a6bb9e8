use crate::load::VoteResult;
use crate::relational::Tally;

pub const SUPPORT_VOTE_TYPE: i64 = 1;
pub const OPPOSE_VOTE_TYPE: i64 = 2;

/// Anything carrying a vote_type code.
pub trait HasVoteType {
    fn vote_type(&self) -> i64;
}

impl HasVoteType for VoteResult {
    fn vote_type(&self) -> i64 {
        self.vote_type
    }
}

impl<T: HasVoteType + ?Sized> HasVoteType for &T {
    fn vote_type(&self) -> i64 {
        (**self).vote_type()
    }
}

// Joined rows carry the vote result on the left.
impl<A: HasVoteType, B> HasVoteType for (A, B) {
    fn vote_type(&self) -> i64 {
        self.0.vote_type()
    }
}

/// A row with its support/oppose indicators attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<T> {
    pub row: T,
    pub is_support: u64,
    pub is_oppose: u64,
}

impl<T> Classified<T> {
    pub fn tally(&self) -> Tally {
        Tally {
            supported: self.is_support,
            opposed: self.is_oppose,
        }
    }
}

/// Attach indicators to every row, preserving length and order.
/// Codes other than support/oppose get 0 for both.
pub fn classify<T: HasVoteType>(rows: &[T]) -> Vec<Classified<&T>> {
    rows.iter()
        .map(|row| {
            let vote_type = row.vote_type();
            Classified {
                row,
                is_support: u64::from(vote_type == SUPPORT_VOTE_TYPE),
                is_oppose: u64::from(vote_type == OPPOSE_VOTE_TYPE),
            }
        })
        .collect()
}
