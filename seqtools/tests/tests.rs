use seqtools::{seq, InvalidCount, Sequence};
use static_assertions::assert_impl_all;

assert_impl_all!(Sequence<i32>: Send, Sync, Clone, Default);
assert_impl_all!(Sequence<String>: std::fmt::Debug, std::fmt::Display);
assert_impl_all!(InvalidCount: std::error::Error, Send, Sync);

#[test]
fn pipeline_combines_combinators() {
    let total = seq![1, 2, 3, 4, 5]
        .map(|x| x * x)
        .filter(|&x| x % 2 == 1)
        .reduce(0, |acc, x| acc + x);

    // 1 + 9 + 25
    assert_eq!(35, total);
}

#[test]
fn combinators_never_mutate_the_receiver() {
    let seq = seq![1, 2, 3];

    let _ = seq.map(|x| x + 1);
    let _ = seq.filter(|&x| x > 1);
    let _ = seq.reduce(0, |acc, x| acc + x);
    seq.for_each(|_| {});

    assert_eq!("[1, 2, 3]", seq.to_string());
}

#[test]
fn seq_macro_matches_explicit_construction() {
    let empty: Sequence<u32> = seq![];

    assert_eq!(empty, Sequence::new());
    assert_eq!(seq![1, 2, 3], Sequence::from_values([1, 2, 3]));
    assert_eq!(seq![1, 2, 3,], Sequence::from_values([1, 2, 3]));
}

#[test]
fn generate_is_usable_with_owned_state() {
    let mut remaining = vec!["c", "b", "a"];
    let seq = Sequence::generate(3, || remaining.pop().unwrap());

    assert_eq!(seq, seq!["a", "b", "c"]);
}

#[test]
fn try_generate_surfaces_invalid_count() {
    let err = Sequence::<u32>::try_generate(-3, || 0).unwrap_err();

    assert_eq!(-3, err.count);
    assert_eq!("invalid element count: -3", err.to_string());

    let seq = Sequence::try_generate(2, || 9).unwrap();
    assert_eq!(seq, seq![9, 9]);
}

#[test]
fn display_of_mapped_sequence() {
    let seq = Sequence::from_values([1, 2, 3]).map(|x| x * 2);

    assert_eq!("[2, 4, 6]", seq.to_string());
}

#[test]
fn works_with_non_copy_elements() {
    let seq = seq![String::from("ab"), String::from("cde")];
    let lengths = seq.map(String::len);

    assert_eq!(lengths, seq![2, 3]);
    assert_eq!(seq.filter(|s| s.len() > 2), seq![String::from("cde")]);
    assert_eq!("[ab, cde]", seq.to_string());
}
