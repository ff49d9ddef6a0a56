// crates/domain/src/frequency.rs
use std::{cmp::Ordering, collections::VecDeque, fmt, io};

use wordtally_shared_kernel::{DomainError, DomainResult, WordCount};

use crate::{analytics::SortKey, model::WordFrequency};

/// Hook for callers that want to see table mutations (e.g. to log them).
///
/// Both methods default to no-ops.
pub trait TableObserver {
    fn on_insert(&self, _entry: &WordFrequency) {}
    fn on_increment(&self, _entry: &WordFrequency) {}
}

/// Unique words with their occurrence counts.
///
/// New words go to the front, so until [`FrequencyTable::sort`] runs the
/// table iterates most-recently-inserted first. Lookup is a linear scan.
#[derive(Default)]
pub struct FrequencyTable {
    entries: VecDeque<WordFrequency>,
    observer: Option<Box<dyn TableObserver>>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: impl TableObserver + 'static) -> Self {
        Self {
            entries: VecDeque::new(),
            observer: Some(Box::new(observer)),
        }
    }

    /// Exact, case-sensitive match.
    pub fn lookup(&self, word: &str) -> Option<&WordFrequency> {
        self.entries.iter().find(|e| e.word() == word)
    }

    /// Bumps `word` if present, otherwise stores it with a count of one.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfMemory`] when the table or the word's
    /// storage cannot grow. The table is left unchanged in that case.
    pub fn insert(&mut self, word: &str) -> DomainResult<()> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.word() == word) {
            entry.bump();
            if let Some(observer) = &self.observer {
                observer.on_increment(entry);
            }
            return Ok(());
        }

        let oom = |source| DomainError::OutOfMemory { bytes: word.len(), source };
        let mut owned = String::new();
        owned.try_reserve_exact(word.len()).map_err(oom)?;
        owned.push_str(word);
        self.entries.try_reserve(1).map_err(oom)?;
        self.entries.push_front(WordFrequency::first_sighting(owned));

        if let (Some(observer), Some(entry)) = (&self.observer, self.entries.front()) {
            observer.on_insert(entry);
        }
        Ok(())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of words inserted.
    pub fn total(&self) -> WordCount {
        self.entries.iter().map(|e| WordCount::new(e.count())).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordFrequency> {
        self.entries.iter()
    }

    /// Stable sort with a caller-supplied comparator.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&WordFrequency, &WordFrequency) -> Ordering,
    {
        self.entries.make_contiguous().sort_by(compare);
    }

    pub fn sort(&mut self, key: SortKey) {
        if key == SortKey::Insertion {
            return;
        }
        self.sort_by(|a, b| key.compare(a, b));
    }

    /// Writes `<count>\t<word>\n` per entry, in current order.
    ///
    /// # Errors
    ///
    /// Propagates any error from `sink`.
    pub fn write_to<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(sink, "{entry}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrequencyTable")
            .field("entries", &self.entries)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn table_of(words: &[&str]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for w in words {
            table.insert(w).unwrap();
        }
        table
    }

    fn pairs(table: &FrequencyTable) -> Vec<(String, usize)> {
        table.iter().map(|e| (e.word().to_string(), e.count())).collect()
    }

    #[test]
    fn same_word_twice_is_one_entry() {
        let table = table_of(&["echo", "echo"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("echo").map(WordFrequency::count), Some(2));
    }

    #[test]
    fn different_words_are_separate_entries() {
        let table = table_of(&["left", "right"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 2usize);
    }

    #[test]
    fn new_words_go_to_the_front() {
        let table = table_of(&["first", "second", "first", "third"]);
        let words: Vec<_> = table.iter().map(WordFrequency::word).collect();
        assert_eq!(words, vec!["third", "second", "first"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = table_of(&["word"]);
        assert!(table.lookup("word").is_some());
        assert!(table.lookup("Word").is_none());
        assert!(table.lookup("missing").is_none());
    }

    #[test]
    fn sort_by_count_then_word() {
        let mut table = table_of(&["b", "a", "c", "c", "b", "d", "c"]);
        table.sort(SortKey::Count);
        assert_eq!(
            pairs(&table),
            vec![
                ("c".to_string(), 3),
                ("b".to_string(), 2),
                ("a".to_string(), 1),
                ("d".to_string(), 1),
            ]
        );
    }

    #[test]
    fn sort_alphabetically() {
        let mut table = table_of(&["pear", "apple", "fig"]);
        table.sort(SortKey::Word);
        let words: Vec<_> = table.iter().map(WordFrequency::word).collect();
        assert_eq!(words, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn insertion_sort_key_keeps_order() {
        let mut table = table_of(&["x", "y", "z"]);
        let before = pairs(&table);
        table.sort(SortKey::Insertion);
        assert_eq!(pairs(&table), before);
    }

    #[test]
    fn custom_comparator_is_honoured() {
        let mut table = table_of(&["aaa", "b", "cc"]);
        table.sort_by(|a, b| a.word().len().cmp(&b.word().len()));
        let words: Vec<_> = table.iter().map(WordFrequency::word).collect();
        assert_eq!(words, vec!["b", "cc", "aaa"]);
    }

    #[test]
    fn write_to_emits_count_tab_word() {
        let mut table = table_of(&["a", "a", "b"]);
        table.sort(SortKey::Count);
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\ta\n1\tb\n");
    }

    #[test]
    fn empty_table_writes_nothing() {
        let table = FrequencyTable::new();
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert!(out.is_empty());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0usize);
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl TableObserver for Recorder {
        fn on_insert(&self, entry: &WordFrequency) {
            self.0.borrow_mut().push(format!("insert {}", entry.word()));
        }

        fn on_increment(&self, entry: &WordFrequency) {
            self.0.borrow_mut().push(format!("bump {} {}", entry.word(), entry.count()));
        }
    }

    #[test]
    fn observer_sees_every_mutation() {
        let recorder = Recorder::default();
        let mut table = FrequencyTable::with_observer(recorder.clone());
        table.insert("x").unwrap();
        table.insert("x").unwrap();
        table.insert("y").unwrap();
        assert_eq!(
            *recorder.0.borrow(),
            vec!["insert x", "bump x 2", "insert y"]
        );
    }
}
