//! Monotonic caching over a forward-only producer.
//!
//! [`LazySeq`] gives random re-peek access over an iterator while
//! guaranteeing each underlying element is produced at most once. The
//! parser leans on this: its cursor only moves forward, but the current
//! token is inspected several times before being consumed.

/// A lazily materialized, permanently cached view of an iterator.
pub struct LazySeq<I: Iterator> {
    iter: I,
    cache: Vec<I::Item>,
}

impl<I: Iterator> LazySeq<I> {
    pub fn new(iter: I) -> Self {
        LazySeq {
            iter,
            cache: Vec::new(),
        }
    }

    /// Get the element at `index`, pulling from the producer as needed.
    ///
    /// Returns `None` when the producer exhausts before reaching `index`.
    /// Once produced, an element stays cached and is returned without
    /// re-invoking the producer.
    pub fn get(&mut self, index: usize) -> Option<&I::Item> {
        while self.cache.len() <= index {
            self.cache.push(self.iter.next()?);
        }
        Some(&self.cache[index])
    }

    /// Number of elements produced so far.
    pub fn produced(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Iterator that counts how many times it is pulled.
    struct Counting<'a> {
        inner: std::ops::Range<u32>,
        pulls: &'a mut usize,
    }

    impl Iterator for Counting<'_> {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            *self.pulls += 1;
            self.inner.next()
        }
    }

    #[test]
    fn pulls_up_to_requested_index() {
        let mut seq = LazySeq::new(0..10u32);
        assert_eq!(seq.get(3), Some(&3));
        assert_eq!(seq.produced(), 4);
    }

    #[test]
    fn out_of_range_returns_none() {
        let mut seq = LazySeq::new(0..3u32);
        assert_eq!(seq.get(3), None);
        assert_eq!(seq.get(100), None);
        // Elements before the end are still there.
        assert_eq!(seq.get(2), Some(&2));
    }

    #[test]
    fn each_element_produced_at_most_once() {
        let mut pulls = 0;
        let mut seq = LazySeq::new(Counting {
            inner: 0..5,
            pulls: &mut pulls,
        });

        assert_eq!(seq.get(2), Some(&2));
        assert_eq!(seq.get(2), Some(&2));
        assert_eq!(seq.get(0), Some(&0));
        assert_eq!(seq.get(4), Some(&4));
        drop(seq);

        // 5 values, each pulled exactly once.
        assert_eq!(pulls, 5);
    }

    #[test]
    fn exhaustion_probe_does_not_repull() {
        let mut pulls = 0;
        let mut seq = LazySeq::new(Counting {
            inner: 0..2,
            pulls: &mut pulls,
        });

        assert_eq!(seq.get(5), None);
        assert_eq!(seq.get(5), None);
        drop(seq);

        // 2 values + 1 exhaustion probe, then one more probe on the
        // second get. Ranges keep answering None, so this stays bounded.
        assert_eq!(pulls, 4);
    }
}
