use std::collections::HashMap;

use log::{debug, trace};

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::extid::ExtDocId;
use crate::core::types::DocId;
use crate::index::inverted::{InvertedIndex, Term};
use crate::index::posting::PostingsCursor;
use crate::query::parser::QueryParser;
use crate::query::program::{Instruction, QueryProgram};

/// Evaluates boolean keyword queries against an inverted index, one
/// candidate document at a time.
///
/// Per candidate the postfix program is re-run against a value stack; the
/// single value left over is the verdict. A verdict naming an id ahead of
/// the candidate lets the scan jump the whole unmatched gap at once, which
/// is what keeps conjunctions over sparse terms cheap.
pub struct SearchEngine {
    index: InvertedIndex,
    parser: QueryParser,
}

impl SearchEngine {
    pub fn new(index: InvertedIndex) -> Self {
        SearchEngine {
            index,
            parser: QueryParser::new(),
        }
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Parse `query` and return the ascending ids of matching documents.
    pub fn search(&self, query: &str) -> Result<Vec<DocId>> {
        let program = self.parser.parse(query)?;
        self.execute(&program)
    }

    /// Run a parsed program over the index.
    ///
    /// Cursors are allocated fresh per call, so one engine can serve any
    /// number of evaluations (including the same program twice) without
    /// cross-query interference.
    pub fn execute(&self, program: &QueryProgram) -> Result<Vec<DocId>> {
        let mut cursors: HashMap<&Term, PostingsCursor<'_>> =
            HashMap::with_capacity(program.terms.len());
        for term in &program.terms {
            let list = self.index.postings(term).ok_or_else(|| {
                Error::new(
                    ErrorKind::UnknownTerm,
                    format!("term '{}' is not in the index", term),
                )
            })?;
            cursors.insert(term, list.cursor());
        }

        let ceiling = self.index.doc_ceiling();
        debug!(
            "scanning candidates 1..{} with {} cursors",
            ceiling.0,
            cursors.len()
        );

        let mut hits = Vec::new();
        let mut stack: Vec<ExtDocId> = Vec::with_capacity(program.instructions.len());
        let mut candidate = DocId(1);

        while candidate < ceiling {
            stack.clear();
            for instruction in &program.instructions {
                match instruction {
                    Instruction::Push(term) => {
                        let cursor = cursors.get_mut(term).ok_or_else(|| {
                            Error::new(
                                ErrorKind::UnknownTerm,
                                format!("term '{}' has no cursor", term),
                            )
                        })?;
                        stack.push(cursor.advance_to(candidate));
                    }
                    Instruction::Not => {
                        let a = pop(&mut stack)?;
                        stack.push(a.complement());
                    }
                    Instruction::And => {
                        let b = pop(&mut stack)?;
                        let a = pop(&mut stack)?;
                        stack.push(a.meet(b));
                    }
                    Instruction::Or => {
                        let b = pop(&mut stack)?;
                        let a = pop(&mut stack)?;
                        stack.push(a.join(b));
                    }
                }
            }

            let verdict = pop(&mut stack)?;
            if !stack.is_empty() {
                return Err(Error::new(
                    ErrorKind::InvalidArgument,
                    format!("{} operands left on the stack after evaluation", stack.len()),
                ));
            }
            trace!("candidate {} -> {:?}", candidate, verdict);

            match verdict {
                ExtDocId::MatchNone | ExtDocId::Begin => candidate.0 += 1,
                ExtDocId::MatchAll => {
                    hits.push(candidate);
                    candidate.0 += 1;
                }
                ExtDocId::Excluded(id) => {
                    if id != candidate {
                        hits.push(candidate);
                    }
                    candidate.0 += 1;
                }
                ExtDocId::Doc(id) if id == candidate => {
                    hits.push(candidate);
                    candidate.0 += 1;
                }
                // The verdict names the next id the expression can hold at;
                // everything before it is skipped in one step. Cursors never
                // trail the candidate, so the remaining arm only advances.
                ExtDocId::Doc(id) if id > candidate => candidate = id,
                ExtDocId::Doc(_) => candidate.0 += 1,
                ExtDocId::End => break,
            }
        }

        debug!("scan finished with {} hits", hits.len());
        Ok(hits)
    }
}

fn pop(stack: &mut Vec<ExtDocId>) -> Result<ExtDocId> {
    stack.pop().ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidArgument,
            "query program underflows its evaluation stack",
        )
    })
}
