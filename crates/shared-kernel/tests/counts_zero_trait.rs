// crates/shared-kernel/tests/counts_zero_trait.rs
use num_traits::Zero;
use wordtally_shared_kernel::{CharCount, LineCount, WordCount};

#[test]
fn zero_trait_consistency() {
    let mut line = LineCount::from(5);
    line.set_zero();
    assert!(line.is_zero());
    assert_eq!(line, LineCount::ZERO);
    assert_eq!(LineCount::zero(), LineCount::ZERO);

    assert_eq!(CharCount::zero(), CharCount::ZERO);
    assert!(CharCount::ZERO.is_zero());

    assert_eq!(WordCount::zero(), WordCount::ZERO);
    assert!(WordCount::ZERO.is_zero());
}

#[test]
fn default_matches_zero() {
    assert_eq!(LineCount::default(), LineCount::zero());
    assert_eq!(CharCount::default(), CharCount::zero());
    assert_eq!(WordCount::default(), WordCount::zero());
}

#[test]
fn increment_saturates() {
    let mut chars = CharCount::from(usize::MAX);
    chars.increment();
    assert_eq!(chars, usize::MAX);

    let mut words = WordCount::ZERO;
    words.increment();
    words.increment();
    assert_eq!(words, 2usize);
}

#[test]
fn bulk_addition_saturates_like_increment() {
    let mut lines = LineCount::from(usize::MAX - 1);
    lines += 5usize;
    assert_eq!(lines, usize::MAX);

    let mut chars = CharCount::from(usize::MAX);
    chars += CharCount::from(1);
    assert_eq!(chars, usize::MAX);

    assert_eq!(WordCount::from(usize::MAX) + 1usize, usize::MAX);
    assert_eq!(WordCount::from(usize::MAX) + WordCount::from(7), usize::MAX);
    let total: WordCount = [WordCount::from(usize::MAX), WordCount::from(2)].iter().sum();
    assert_eq!(total, usize::MAX);
}
