//! Folio Content
//!
//! Read-only content tables compiled into the delivered page.
//!
//! # Overview
//!
//! - **Section**: ordered navigation anchors of the single-page layout
//! - **Profile**: bio, contact details, skill areas, experience, education
//! - **Project**: the portfolio gallery table
//! - **Faq**: question/answer pairs for the accordion
//!
//! Nothing here is mutable; controllers in `folio-core` borrow these tables
//! for the lifetime of the page.
//!
//! # Example
//!
//! ```rust
//! use folio_content::{sections, projects};
//!
//! assert_eq!(sections()[0].id, "about");
//! assert!(projects().iter().any(|p| p.category == "fintech"));
//! ```

#![warn(missing_docs)]

pub mod faq;
pub mod profile;
pub mod project;
pub mod section;

// Re-exports
pub use faq::{faqs, Faq};
pub use profile::{profile, Contact, Education, Job, JobProject, Profile, SkillArea};
pub use project::{projects, Project};
pub use section::{sections, Section};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
