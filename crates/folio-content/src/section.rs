//! Section - navigation anchors of the single-page layout

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// A named anchor in the scrollable document
///
/// `id` must match exactly one element id in the rendered document;
/// `label` is the text shown in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Section {
    /// Anchor identifier (unique within the page)
    pub id: &'static str,
    /// Display text
    pub label: &'static str,
}

impl Section {
    /// Create a section
    #[inline]
    #[must_use]
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.label, self.id)
    }
}

static SECTIONS: [Section; 5] = [
    Section::new("about", "About"),
    Section::new("skills", "Skills"),
    Section::new("experience", "Work"),
    Section::new("faq", "Q&A"),
    Section::new("contact", "Contact"),
];

/// Navigation sections in display order
#[inline]
#[must_use]
pub fn sections() -> &'static [Section] {
    &SECTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<_> = sections().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), sections().len());
    }

    #[test]
    fn section_display() {
        assert_eq!(Section::new("faq", "Q&A").to_string(), "Q&A (#faq)");
    }
}
