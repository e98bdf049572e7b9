//! Name collation.
//!
//! Names sort with the Unicode Collation Algorithm so that accented names
//! land next to their unaccented neighbours instead of after `Z`.

use std::cmp::Ordering;

/// Orders two display names.
pub trait Collation {
    fn compare(&mut self, a: &str, b: &str) -> Ordering;
}

/// Default collation backed by `feruca` (CLDR root tailoring).
pub struct UnicodeCollator {
    inner: feruca::Collator,
}

impl UnicodeCollator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: feruca::Collator::default(),
        }
    }
}

impl Default for UnicodeCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl Collation for UnicodeCollator {
    fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}

/// Plain code-point ordering, for callers that want byte order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytewiseCollator;

impl Collation for BytewiseCollator {
    fn compare(&mut self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut collator = UnicodeCollator::new();
        assert_eq!(collator.compare("Éther", "Fantom"), Ordering::Less);
        assert_eq!(BytewiseCollator.compare("Éther", "Fantom"), Ordering::Greater);
    }

    #[test]
    fn case_does_not_dominate_ordering() {
        let mut collator = UnicodeCollator::new();
        assert_eq!(collator.compare("aave", "Bitcoin"), Ordering::Less);
        assert_eq!(collator.compare("Bitcoin", "Bitcoin"), Ordering::Equal);
    }
}
