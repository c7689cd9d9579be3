//! Iterator adaptor grouping a flat sequence into consecutive pairs.

/// Yields `(first, second)` tuples from consecutive elements of `inner`.
///
/// An unpaired final element is never yielded. It is kept and can be
/// retrieved with [`Pairs::remainder`] once iteration has finished.
#[derive(Debug)]
pub struct Pairs<I: Iterator> {
    inner: I,
    remainder: Option<I::Item>,
}

impl<I: Iterator> Pairs<I> {
    pub fn new(inner: I) -> Self {
        Pairs {
            inner,
            remainder: None,
        }
    }

    /// The trailing element left without a partner, if any.
    pub fn remainder(&self) -> Option<&I::Item> {
        self.remainder.as_ref()
    }
}

impl<I: Iterator> Iterator for Pairs<I> {
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.inner.next()?;
        match self.inner.next() {
            Some(second) => Some((first, second)),
            None => {
                self.remainder = Some(first);
                None
            }
        }
    }
}

/// Extension trait adding `.pairs()` to any iterator.
pub trait PairsExt: Iterator + Sized {
    fn pairs(self) -> Pairs<Self> {
        Pairs::new(self)
    }
}

impl<I: Iterator> PairsExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_length() {
        let mut pairs = vec![1, 2, 3, 4].into_iter().pairs();
        assert_eq!(pairs.next(), Some((1, 2)));
        assert_eq!(pairs.next(), Some((3, 4)));
        assert_eq!(pairs.next(), None);
        assert!(pairs.remainder().is_none());
    }

    #[test]
    fn test_odd_length_keeps_remainder() {
        let mut pairs = (1..=5).pairs();
        let collected: Vec<_> = pairs.by_ref().collect();
        assert_eq!(collected, vec![(1, 2), (3, 4)]);
        assert_eq!(pairs.remainder(), Some(&5));
    }

    #[test]
    fn test_empty() {
        let mut pairs = std::iter::empty::<u8>().pairs();
        assert_eq!(pairs.next(), None);
        assert!(pairs.remainder().is_none());
    }
}
