//! Section navigation controller
//!
//! Translates "go to section" intents into smooth scrolls and mirrors the
//! scroll offset back into navbar state. State is two independent flags:
//! the mobile menu latch and the scrolled-past-threshold flag.

use crate::config::NavigationConfig;
use crate::error::NavigationError;
use crate::subscription::Subscription;
use crate::viewport::{ScrollBehavior, ScrollCallback, ViewportAdapter};
use folio_content::Section;
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// Transient navbar flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Mobile menu expanded
    pub is_menu_open: bool,
    /// Scroll offset beyond the configured threshold
    pub is_scrolled_past_threshold: bool,
}

impl NavigationState {
    fn apply_scroll(&mut self, offset: f64, threshold: f64) {
        self.is_scrolled_past_threshold = offset > threshold;
    }
}

/// Result of [`SectionNavigator::navigate_to`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// Scroll issued
    Scrolled,
    /// No element with that id; nothing scrolled
    MissingAnchor,
}

/// How the link list is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// All links visible in the bar
    Inline,
    /// Links behind the menu button
    Collapsible,
}

/// Navigation controller for one page
pub struct SectionNavigator {
    viewport: Arc<dyn ViewportAdapter>,
    sections: IndexMap<&'static str, Section>,
    config: NavigationConfig,
    state: Arc<Mutex<NavigationState>>,
    _scroll: Subscription,
}

impl SectionNavigator {
    /// Build a navigator and start listening to scroll
    ///
    /// # Errors
    /// [`NavigationError::EmptySectionId`] or
    /// [`NavigationError::DuplicateSection`] for a malformed table.
    pub fn new(
        viewport: Arc<dyn ViewportAdapter>,
        sections: impl IntoIterator<Item = Section>,
        config: NavigationConfig,
    ) -> Result<Self, NavigationError> {
        let mut table = IndexMap::new();
        for section in sections {
            if section.id.is_empty() {
                return Err(NavigationError::EmptySectionId {
                    label: section.label.to_string(),
                });
            }
            if table.insert(section.id, section).is_some() {
                return Err(NavigationError::DuplicateSection(section.id.to_string()));
            }
        }

        let state = Arc::new(Mutex::new(NavigationState::default()));
        state
            .lock()
            .apply_scroll(viewport.scroll_offset(), config.scroll_threshold_px);
        let scroll = viewport.on_scroll(scroll_listener(
            Arc::downgrade(&state),
            config.scroll_threshold_px,
        ));

        tracing::debug!(sections = table.len(), "navigator ready");
        Ok(Self {
            viewport,
            sections: table,
            config,
            state,
            _scroll: scroll,
        })
    }

    /// Sections in display order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Look up a section by id
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    /// Snapshot of the navbar flags
    #[inline]
    #[must_use]
    pub fn state(&self) -> NavigationState {
        *self.state.lock()
    }

    /// Mobile menu expanded
    #[inline]
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.state.lock().is_menu_open
    }

    /// Navbar should be opaque
    #[inline]
    #[must_use]
    pub fn is_scrolled_past_threshold(&self) -> bool {
        self.state.lock().is_scrolled_past_threshold
    }

    /// Smooth-scroll to an anchor and close the menu
    ///
    /// A missing anchor is a silent no-op apart from closing the menu.
    pub fn navigate_to(&self, id: &str) -> NavigateOutcome {
        self.close_menu();
        if self.viewport.scroll_to_element(id, ScrollBehavior::Smooth) {
            tracing::info!(section = id, "navigating");
            NavigateOutcome::Scrolled
        } else {
            tracing::debug!(section = id, "no anchor, ignoring navigation");
            NavigateOutcome::MissingAnchor
        }
    }

    /// Recompute the scrolled flag for `offset`
    ///
    /// Adapters that deliver scroll events through
    /// [`ViewportAdapter::on_scroll`] never need this; the navigator's own
    /// listener applies the same rule. Hosts without a scroll event source
    /// (polling, server-driven replays) push offsets through here instead.
    pub fn on_scroll(&self, offset: f64) {
        self.state
            .lock()
            .apply_scroll(offset, self.config.scroll_threshold_px);
    }

    /// Flip the mobile menu; returns the new value
    pub fn toggle_menu(&self) -> bool {
        let mut state = self.state.lock();
        state.is_menu_open = !state.is_menu_open;
        state.is_menu_open
    }

    /// Collapse the mobile menu
    pub fn close_menu(&self) {
        self.state.lock().is_menu_open = false;
    }

    /// Clear transient state, e.g. when the route changes
    pub fn reset(&self) {
        let offset = self.viewport.scroll_offset();
        let mut state = self.state.lock();
        *state = NavigationState::default();
        state.apply_scroll(offset, self.config.scroll_threshold_px);
    }

    /// Section whose anchor has most recently passed under the navbar
    ///
    /// `None` above the first anchor. Sections whose anchors are missing
    /// from the document are skipped.
    #[must_use]
    pub fn active_section(&self) -> Option<&Section> {
        let line = self.viewport.scroll_offset() + self.config.nav_height_px;
        self.sections
            .values()
            .filter_map(|s| self.viewport.element_top(s.id).map(|top| (s, top)))
            .filter(|(_, top)| *top <= line)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(s, _)| s)
    }

    /// Whether `id` is the highlighted link
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section().is_some_and(|s| s.id == id)
    }

    /// Presentation of the link list for the current pointer
    #[must_use]
    pub fn menu_mode(&self) -> MenuMode {
        if self.viewport.matches_coarse_pointer() {
            MenuMode::Collapsible
        } else {
            MenuMode::Inline
        }
    }
}

impl std::fmt::Debug for SectionNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionNavigator")
            .field("sections", &self.sections.keys().collect::<Vec<_>>())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

fn scroll_listener(state: Weak<Mutex<NavigationState>>, threshold: f64) -> ScrollCallback {
    Box::new(move |offset| {
        if let Some(state) = state.upgrade() {
            state.lock().apply_scroll(offset, threshold);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let mut state = NavigationState::default();
        state.apply_scroll(50.0, 50.0);
        assert!(!state.is_scrolled_past_threshold);
        state.apply_scroll(50.5, 50.0);
        assert!(state.is_scrolled_past_threshold);
        state.apply_scroll(0.0, 50.0);
        assert!(!state.is_scrolled_past_threshold);
    }

    #[test]
    fn listener_outliving_state_is_inert() {
        let state = Arc::new(Mutex::new(NavigationState::default()));
        let mut listener = scroll_listener(Arc::downgrade(&state), 10.0);
        listener(100.0);
        assert!(state.lock().is_scrolled_past_threshold);
        drop(state);
        listener(0.0);
    }
}
