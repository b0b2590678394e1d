//! Folio Core
//!
//! Host-agnostic controllers behind a single-page portfolio:
//! - **Reveal**: one-shot, intersection-driven reveal of content blocks
//! - **Navigation**: section anchors, smooth scrolling, navbar flags
//! - **Contact**: presence-checked handoff to a messaging deep link
//!
//! Everything that touches a rendering environment goes through the
//! [`ViewportAdapter`] trait, so the controllers run unchanged against a
//! browser binding or an in-memory fake.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_core::prelude::*;
//! use std::sync::Arc;
//!
//! let viewport: Arc<dyn ViewportAdapter> = Arc::new(host_viewport());
//! let page = Page::mount(viewport, FolioConfig::new())?;
//!
//! page.navigate_to("experience");
//! assert!(!page.navigator().is_menu_open());
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod contact;
pub mod error;
pub mod faq;
pub mod gallery;
pub mod logging;
pub mod navigation;
pub mod page;
pub mod reveal;
pub mod router;
pub mod styles;
pub mod subscription;
pub mod viewport;

// Re-exports
pub use config::{ContactConfig, FolioConfig, GalleryConfig, NavigationConfig, RevealConfig};
pub use contact::{ContactField, ContactForm, ContactHandoff};
pub use error::{ConfigError, ContactError, FolioError, NavigationError, ViewportError};
pub use faq::FaqAccordion;
pub use gallery::Gallery;
pub use navigation::{MenuMode, NavigateOutcome, NavigationState, SectionNavigator};
pub use page::Page;
pub use reveal::{stagger_delay, RevealController, RevealOptions, RevealState, RevealTarget};
pub use router::{Route, Router};
pub use styles::{stylesheet, stylesheet_css, RevealStyle, StyleSheet};
pub use subscription::Subscription;
pub use viewport::{
    intersection_ratio, BrowsingContext, ElementId, IntersectionEntry, ObserveOptions, Rect,
    RootMargin, ScrollBehavior, ScrollCallback, ViewportAdapter, VisibilityCallback, Watch,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for hosting the page
    pub use crate::{
        ContactField, ElementId, FolioConfig, FolioError, NavigateOutcome, Page, RevealController,
        RevealOptions, Route, SectionNavigator, Subscription, ViewportAdapter,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
