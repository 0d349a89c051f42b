use std::cmp::Ordering;

use crate::core::types::DocId;

/// Document id extended with the scan sentinels.
///
/// Values sit on one ordered line:
///
/// ```text
/// MatchNone < Excluded(hi) < Excluded(lo) < Begin < Doc(lo) < Doc(hi) < End < MatchAll
/// ```
///
/// An `Excluded(id)` occupies the negated position of its id, so between two
/// exclusions the larger id orders lower. During evaluation every value
/// means "the next candidate at which this sub-expression can still hold":
/// `meet` keeps the further-ahead bound, `join` the nearer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtDocId {
    /// True for no document. Absorbing under `meet`.
    MatchNone,
    /// True everywhere except the carried id.
    Excluded(DocId),
    /// Before the first real document; scans start at its successor.
    Begin,
    /// An ordinary document id.
    Doc(DocId),
    /// Past the last real document; exhausted cursors report this.
    End,
    /// True for every document. Absorbing under `join`.
    MatchAll,
}

impl ExtDocId {
    fn rank(self) -> u8 {
        match self {
            ExtDocId::MatchNone => 0,
            ExtDocId::Excluded(_) => 1,
            ExtDocId::Begin => 2,
            ExtDocId::Doc(_) => 3,
            ExtDocId::End => 4,
            ExtDocId::MatchAll => 5,
        }
    }

    /// Logical NOT.
    ///
    /// `End` complements to `MatchAll`: once an operand has no further
    /// matches, its negation holds for every remaining candidate.
    pub fn complement(self) -> Self {
        match self {
            ExtDocId::MatchNone => ExtDocId::MatchAll,
            ExtDocId::MatchAll => ExtDocId::MatchNone,
            ExtDocId::Doc(id) => ExtDocId::Excluded(id),
            ExtDocId::Excluded(id) => ExtDocId::Doc(id),
            ExtDocId::Begin => ExtDocId::Begin,
            ExtDocId::End => ExtDocId::MatchAll,
        }
    }

    /// AND: the next candidate at which both operands can still hold.
    ///
    /// Mutually exclusive operands collapse to `MatchNone`; otherwise the
    /// further-ahead of the two bounds wins, which is what lets the scan
    /// skip the whole gap in one step.
    pub fn meet(self, other: Self) -> Self {
        match (self, other) {
            (ExtDocId::MatchNone, _) | (_, ExtDocId::MatchNone) => ExtDocId::MatchNone,
            (ExtDocId::MatchAll, x) | (x, ExtDocId::MatchAll) => x,
            (a, b) if b == a.complement() => ExtDocId::MatchNone,
            (a, b) => a.max(b),
        }
    }

    /// OR: the nearest candidate at which either operand can hold.
    ///
    /// An operand and its complement cover everything, so they collapse to
    /// `MatchAll`; otherwise the nearer bound wins.
    pub fn join(self, other: Self) -> Self {
        match (self, other) {
            (ExtDocId::MatchAll, _) | (_, ExtDocId::MatchAll) => ExtDocId::MatchAll,
            (ExtDocId::MatchNone, x) | (x, ExtDocId::MatchNone) => x,
            (a, b) if b == a.complement() => ExtDocId::MatchAll,
            (a, b) => a.min(b),
        }
    }
}

impl Ord for ExtDocId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ExtDocId::Doc(a), ExtDocId::Doc(b)) => a.cmp(b),
            (ExtDocId::Excluded(a), ExtDocId::Excluded(b)) => b.cmp(a),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for ExtDocId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
