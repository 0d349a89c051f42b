pub mod core;
pub mod index;
pub mod query;
pub mod search;

/*
┌──────────────────────────── QUANDEX STRUCT ARCHITECTURE ─────────────────────────────┐

┌─────────────────────────────────── CORE LAYER ───────────────────────────────────────┐
│  ┌──────────────────┐  ┌────────────────────────────────────────────────┐            │
│  │ struct DocId     │  │ enum ExtDocId                                  │            │
│  │ • 0: u64         │  │ • MatchNone | Excluded(DocId) | Begin          │            │
│  └──────────────────┘  │ • Doc(DocId) | End | MatchAll                  │            │
│  ┌──────────────────┐  │ • complement() / meet() / join() / Ord         │            │
│  │ struct Error     │  └────────────────────────────────────────────────┘            │
│  │ • kind, context  │                                                                │
│  └──────────────────┘                                                                │
└──────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────── INDEX LAYER ──────────────────────────────────────┐
│  ┌──────────────────────┐  ┌──────────────────────┐  ┌─────────────────────────┐     │
│  │ struct InvertedIndex │  │ struct PostingList   │  │ struct PostingsCursor   │     │
│  │ • postings: HashMap  │──│ • doc_ids: Vec<DocId>│──│ • doc_ids: &[DocId]     │     │
│  │ • max_doc_id         │  │   (sorted, deduped)  │  │ • pos (per evaluation)  │     │
│  │ • doc_ceiling        │  └──────────────────────┘  └─────────────────────────┘     │
│  └──────────────────────┘                                                            │
└──────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── QUERY / SEARCH LAYER ─────────────────────────────────┐
│  ┌──────────────────────┐  ┌──────────────────────┐  ┌─────────────────────────┐     │
│  │ struct QueryParser   │  │ struct QueryProgram  │  │ struct SearchEngine     │     │
│  │ • tokenize           │──│ • instructions (RPN) │──│ • candidate scan        │     │
│  │ • or/and/unit descent│  │ • terms: BTreeSet    │  │ • verdict stack         │     │
│  └──────────────────────┘  └──────────────────────┘  └─────────────────────────┘     │
└──────────────────────────────────────────────────────────────────────────────────────┘

  InvertedIndex ──contains──> PostingList ──lends──> PostingsCursor
  QueryParser ──produces──> QueryProgram ──executed_by──> SearchEngine
*/
