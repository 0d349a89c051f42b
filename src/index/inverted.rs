use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::index::posting::PostingList;

/// Query keyword.
///
/// Two terms are the same term exactly when their text is byte-equal;
/// ordering and hashing follow the text as well. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Term(String);

impl Term {
    pub fn new(text: &str) -> Self {
        Term(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Characters a keyword may consist of. The query tokenizer and
    /// `InvertedIndex::index_text` share this rule, so every indexed term
    /// stays reachable from query syntax.
    pub fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-memory inverted index: term → sorted posting list.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<Term, PostingList>,
    max_doc_id: u64,
    doc_ceiling: Option<DocId>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
            max_doc_id: 0,
            doc_ceiling: None,
        }
    }

    /// Register `doc_id` in `term`'s posting list.
    pub fn insert(&mut self, term: &str, doc_id: DocId) -> Result<()> {
        if doc_id.0 == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "document id 0 is reserved for the scan origin",
            ));
        }
        self.postings.entry(Term::new(term)).or_default().insert(doc_id);
        self.max_doc_id = self.max_doc_id.max(doc_id.0);
        Ok(())
    }

    /// Index every alphanumeric/underscore run of `text` under `doc_id`.
    pub fn index_text(&mut self, doc_id: DocId, text: &str) -> Result<()> {
        for word in text.split(|c: char| !Term::is_word_char(c)) {
            if !word.is_empty() {
                self.insert(word, doc_id)?;
            }
        }
        Ok(())
    }

    pub fn postings(&self, term: &Term) -> Option<&PostingList> {
        self.postings.get(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.postings.keys()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// First id past every real document: where scans stop.
    /// Derived from the largest inserted id unless a wider ceiling was set.
    pub fn doc_ceiling(&self) -> DocId {
        self.doc_ceiling.unwrap_or(DocId(self.max_doc_id + 1))
    }

    /// Declare an id space wider than the inserted postings. Ids at or
    /// above the ceiling are unreachable by any scan.
    pub fn set_doc_ceiling(&mut self, ceiling: DocId) -> Result<()> {
        if ceiling.0 <= self.max_doc_id {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!(
                    "ceiling {} does not cover inserted id {}",
                    ceiling.0, self.max_doc_id
                ),
            ));
        }
        self.doc_ceiling = Some(ceiling);
        Ok(())
    }
}
