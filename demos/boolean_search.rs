/// Boolean keyword search demo
///
/// Builds a small in-memory inverted index and evaluates either the query
/// given on the command line or a handful of representative ones:
///
/// ```text
/// cargo run --example boolean_search -- '(cat | door) & !batman'
/// ```
use quandex::core::types::DocId;
use quandex::index::inverted::InvertedIndex;
use quandex::search::executor::SearchEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut index = InvertedIndex::new();
    for (term, ids) in [
        ("cat", &[1u64, 4, 7][..]),
        ("door", &[1, 2, 5, 34]),
        ("occasion", &[4, 6, 8, 9, 10, 13, 19]),
        ("actual", &[13, 17, 19]),
        ("batman", &[1, 5, 6, 9, 10]),
        ("main", &[6, 11]),
    ] {
        for &id in ids {
            index.insert(term, DocId(id))?;
        }
    }

    let engine = SearchEngine::new(index);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let queries: Vec<String> = if args.is_empty() {
        [
            "cat & door",
            "cat | batman",
            "!cat & door",
            "(cat | door) & !batman",
            "occasion & !actual",
        ]
        .iter()
        .map(|q| q.to_string())
        .collect()
    } else {
        vec![args.join(" ")]
    };

    for query in &queries {
        println!("query: [{}]", query);
        match engine.search(query) {
            Ok(hits) => {
                let ids: Vec<u64> = hits.iter().map(DocId::value).collect();
                println!("found: {}", serde_json::to_string(&ids)?);
            }
            Err(err) => println!("error: {}", err),
        }
    }

    Ok(())
}
