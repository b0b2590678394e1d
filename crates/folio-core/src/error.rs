//! Error types for Folio Core
//!
//! Errors only arise while wiring the page together (bad configuration,
//! malformed section tables) or from explicit user input (contact form).
//! Runtime viewport conditions such as a missing anchor or an absent
//! intersection capability degrade to visual no-ops instead of errors.

use crate::contact::ContactField;

/// Main folio error type
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// Configuration could not be loaded or is out of range
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Section table is malformed
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Contact form rejected
    #[error("contact error: {0}")]
    Contact(#[from] ContactError),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Visibility threshold outside (0, 1]
    #[error("reveal threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    /// Root margin string not understood
    #[error("invalid root margin: {0:?}")]
    InvalidRootMargin(String),

    /// A numeric value is out of range
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Dotted config path
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Tracing filter directive not understood
    #[error("invalid log filter {filter:?}: {reason}")]
    InvalidLogFilter {
        /// The rejected directive
        filter: String,
        /// Parser message
        reason: String,
    },
}

/// Section table errors, raised when a navigator is constructed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Section id is empty
    #[error("section {label:?} has an empty id")]
    EmptySectionId {
        /// Label of the offending section
        label: String,
    },

    /// Two sections share an id
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
}

/// Contact form errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// A required field is blank
    #[error("{0} is required")]
    MissingField(ContactField),
}

/// Viewport adapter errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    /// Host has no intersection observation capability
    #[error("visibility observation unsupported")]
    ObservationUnsupported,

    /// Element is not present in the document
    #[error("unknown element: {0}")]
    UnknownElement(String),
}

impl ViewportError {
    /// Whether a reveal target should be shown anyway
    ///
    /// Only a missing capability fails open. An element absent from the
    /// document has nothing to show, so its target stays hidden.
    #[inline]
    #[must_use]
    pub fn fails_open(&self) -> bool {
        matches!(self, Self::ObservationUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_capability_fails_open() {
        assert!(ViewportError::ObservationUnsupported.fails_open());
        assert!(!ViewportError::UnknownElement("ghost".to_string()).fails_open());
    }
}
