use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::index::inverted::Term;

/// One step of a postfix query program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Push the term's cursor position for the current candidate.
    Push(Term),
    /// Pop one value, push its complement.
    Not,
    /// Pop two values, push their meet.
    And,
    /// Pop two values, push their join.
    Or,
}

/// Parsed query: postfix instructions plus the distinct terms referenced.
///
/// Immutable once parsed; the evaluator re-runs the instructions from the
/// start for every candidate id, and uses the term set to know which
/// cursors an evaluation needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProgram {
    pub instructions: Vec<Instruction>,
    pub terms: BTreeSet<Term>,
}
