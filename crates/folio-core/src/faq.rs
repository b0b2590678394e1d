//! FAQ accordion: at most one entry open

/// Accordion over `len` entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    /// All entries closed
    #[inline]
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the open entry
    #[inline]
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Whether entry `index` is open
    #[inline]
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index` (closing any other) or close it if already open
    ///
    /// Out-of-range indexes are ignored. Returns whether `index` is open
    /// afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
        self.is_open(index)
    }

    /// Close everything
    pub fn close_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_open_entry() {
        let mut faq = FaqAccordion::new(4);
        assert!(faq.toggle(1));
        assert!(faq.toggle(2));
        assert!(!faq.is_open(1));
        assert_eq!(faq.open_index(), Some(2));
    }

    #[test]
    fn toggle_closes_open_entry() {
        let mut faq = FaqAccordion::new(4);
        faq.toggle(0);
        assert!(!faq.toggle(0));
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn out_of_range_ignored() {
        let mut faq = FaqAccordion::new(2);
        faq.toggle(1);
        assert!(!faq.toggle(7));
        assert_eq!(faq.open_index(), Some(1));
    }
}
