use crate::report::OrderedTally;
use pretty_assertions::assert_eq;

#[test]
fn keeps_first_insertion_order() {
    let mut tally: OrderedTally<u64> = OrderedTally::new();

    for key in ["zeta", "alpha", "mid", "alpha", "zeta", "omega"] {
        *tally.entry(key) += 1;
    }

    assert_eq!(
        tally.into_entries(),
        vec![
            ("zeta".to_string(), 2),
            ("alpha".to_string(), 2),
            ("mid".to_string(), 1),
            ("omega".to_string(), 1),
        ]
    );
}

#[test]
fn entry_starts_from_default() {
    let mut tally: OrderedTally<Vec<u8>> = OrderedTally::default();

    assert!(tally.entry("k").is_empty());
    tally.entry("k").push(1);
    tally.entry("k").push(2);

    assert_eq!(tally.into_entries(), vec![("k".to_string(), vec![1, 2])]);
}

#[test]
fn empty_tally_has_no_entries() {
    let tally: OrderedTally<u64> = OrderedTally::new();

    assert!(tally.into_entries().is_empty());
}
