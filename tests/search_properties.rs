use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quandex::core::error::ErrorKind;
use quandex::core::types::DocId;
use quandex::index::inverted::InvertedIndex;
use quandex::query::parser::QueryParser;
use quandex::query::program::QueryProgram;
use quandex::search::executor::SearchEngine;

const CAT: &[u64] = &[1, 4, 7];
const DOOR: &[u64] = &[1, 2, 5, 34];
const BATMAN: &[u64] = &[1, 5, 6, 9, 10];

fn engine() -> SearchEngine {
    let mut index = InvertedIndex::new();
    for (term, ids) in [("cat", CAT), ("door", DOOR), ("batman", BATMAN)] {
        for &id in ids {
            index.insert(term, DocId(id)).unwrap();
        }
    }
    SearchEngine::new(index)
}

fn ids(result: Vec<DocId>) -> Vec<u64> {
    result.iter().map(DocId::value).collect()
}

fn search(engine: &SearchEngine, query: &str) -> Vec<u64> {
    ids(engine.search(query).unwrap())
}

#[test]
fn single_term_equals_its_postings() {
    let engine = engine();
    assert_eq!(search(&engine, "cat"), CAT);
    assert_eq!(search(&engine, "door"), DOOR);
    assert_eq!(search(&engine, "batman"), BATMAN);
}

#[test]
fn negation_is_the_range_complement() {
    let engine = engine();
    let ceiling = engine.index().doc_ceiling().value();
    assert_eq!(ceiling, 35);

    let expected: Vec<u64> = (1..ceiling).filter(|id| !CAT.contains(id)).collect();
    assert_eq!(search(&engine, "!cat"), expected);
}

#[test]
fn conjunction_and_disjunction_match_set_algebra() {
    let engine = engine();

    let cat: HashSet<u64> = CAT.iter().copied().collect();
    let door: HashSet<u64> = DOOR.iter().copied().collect();

    let mut intersection: Vec<u64> = cat.intersection(&door).copied().collect();
    intersection.sort_unstable();
    assert_eq!(search(&engine, "cat & door"), intersection);

    let mut union: Vec<u64> = cat.union(&door).copied().collect();
    union.sort_unstable();
    assert_eq!(search(&engine, "cat | door"), union);
}

#[test]
fn operators_are_commutative_and_associative() {
    let engine = engine();

    assert_eq!(search(&engine, "cat & door"), search(&engine, "door & cat"));
    assert_eq!(search(&engine, "cat | door"), search(&engine, "door | cat"));
    assert_eq!(
        search(&engine, "(cat & door) & batman"),
        search(&engine, "cat & (door & batman)")
    );
    assert_eq!(
        search(&engine, "(cat | door) | batman"),
        search(&engine, "cat | (door | batman)")
    );
}

#[test]
fn de_morgan_laws_hold() {
    let engine = engine();

    assert_eq!(
        search(&engine, "!(cat & door)"),
        search(&engine, "!cat | !door")
    );
    assert_eq!(
        search(&engine, "!(cat | door)"),
        search(&engine, "!cat & !door")
    );
}

#[test]
fn concrete_scenario_from_the_fixture() {
    let engine = engine();

    assert_eq!(search(&engine, "cat & door"), vec![1]);
    assert_eq!(search(&engine, "cat | batman"), vec![1, 4, 5, 6, 7, 9, 10]);
    assert_eq!(search(&engine, "!cat & door"), vec![2, 5, 34]);
    assert_eq!(
        search(&engine, "(cat | door) & !batman"),
        vec![2, 4, 7, 34]
    );
}

#[test]
fn grouping_changes_results_but_both_match_brute_force() {
    let engine = engine();
    let ceiling = engine.index().doc_ceiling().value();

    let grouped = search(&engine, "(cat | door) & batman");
    let precedence = search(&engine, "cat | (door & batman)");
    assert_ne!(grouped, precedence);

    let truth = |id: u64| (CAT.contains(&id), DOOR.contains(&id), BATMAN.contains(&id));
    let expect = |f: &dyn Fn(bool, bool, bool) -> bool| -> Vec<u64> {
        (1..ceiling)
            .filter(|&id| {
                let (c, d, b) = truth(id);
                f(c, d, b)
            })
            .collect()
    };

    assert_eq!(grouped, expect(&|c, d, b| (c || d) && b));
    assert_eq!(precedence, expect(&|c, d, b| c || (d && b)));
}

#[test]
fn randomized_queries_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..20 {
        let mut index = InvertedIndex::new();
        let mut sets: Vec<HashSet<u64>> = Vec::new();

        for term in ["a", "b", "c"] {
            let mut set = HashSet::new();
            // One guaranteed posting keeps every term known to the index.
            set.insert(rng.gen_range(1..=60));
            for id in 1..=60u64 {
                if rng.gen_bool(0.25) {
                    set.insert(id);
                }
            }
            for &id in &set {
                index.insert(term, DocId(id)).unwrap();
            }
            sets.push(set);
        }

        index.set_doc_ceiling(DocId(61)).unwrap();
        let engine = SearchEngine::new(index);

        let cases: Vec<(&str, Box<dyn Fn(bool, bool, bool) -> bool>)> = vec![
            ("a & b", Box::new(|a, b, _| a && b)),
            ("a | b", Box::new(|a, b, _| a || b)),
            ("!a", Box::new(|a, _, _| !a)),
            ("a & b & c", Box::new(|a, b, c| a && b && c)),
            ("a | b | c", Box::new(|a, b, c| a || b || c)),
            ("(a | b) & !c", Box::new(|a, b, c| (a || b) && !c)),
            ("!(a & b) | c", Box::new(|a, b, c| !(a && b) || c)),
            ("!!a & (b | !c)", Box::new(|a, b, c| a && (b || !c))),
            ("a & !b & !c", Box::new(|a, b, c| a && !b && !c)),
        ];

        for (query, expected_fn) in &cases {
            let expected: Vec<u64> = (1..=60)
                .filter(|id| expected_fn(sets[0].contains(id), sets[1].contains(id), sets[2].contains(id)))
                .collect();
            assert_eq!(
                search(&engine, query),
                expected,
                "query {:?} diverged from brute force in round {}",
                query,
                round
            );
        }
    }
}

#[test]
fn results_are_identical_across_runs() {
    let engine = engine();
    let program = QueryParser::new().parse("(cat | door) & !batman").unwrap();

    let first = engine.execute(&program).unwrap();
    let second = engine.execute(&program).unwrap();
    assert_eq!(first, second);

    assert_eq!(
        search(&engine, "!(cat & door)"),
        search(&engine, "!(cat & door)")
    );
}

#[test]
fn unknown_term_is_an_error() {
    let engine = engine();
    let err = engine.search("cat & unicorn").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownTerm);
}

#[test]
fn malformed_queries_error_instead_of_crashing() {
    let engine = engine();

    for (query, kind) in [
        ("", ErrorKind::EmptyExpression),
        ("   ", ErrorKind::EmptyExpression),
        ("(cat", ErrorKind::UnmatchedParenthesis),
        ("cat)", ErrorKind::UnmatchedParenthesis),
        ("cat &", ErrorKind::UnexpectedToken),
        ("| cat", ErrorKind::UnexpectedToken),
        ("cat door", ErrorKind::UnexpectedToken),
    ] {
        let err = engine.search(query).unwrap_err();
        assert_eq!(err.kind, kind, "query {:?}", query);
    }
}

#[test]
fn parsed_programs_round_trip_through_serde() {
    let program = QueryParser::new().parse("(cat | door) & !batman").unwrap();
    let json = serde_json::to_string(&program).unwrap();
    let back: QueryProgram = serde_json::from_str(&json).unwrap();
    assert_eq!(program, back);
}

#[test]
fn index_text_feeds_the_same_engine() {
    let mut index = InvertedIndex::new();
    index.index_text(DocId(1), "the cat sat by the door").unwrap();
    index.index_text(DocId(2), "the door was open").unwrap();
    index.index_text(DocId(3), "a cat, again").unwrap();

    let engine = SearchEngine::new(index);
    assert_eq!(search(&engine, "cat"), vec![1, 3]);
    assert_eq!(search(&engine, "cat & door"), vec![1]);
    assert_eq!(search(&engine, "door & !cat"), vec![2]);
}
