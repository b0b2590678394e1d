//! Viewport adapter - the host rendering environment as a capability
//!
//! Controllers never touch a document directly. A host (browser binding,
//! headless renderer, test fake) implements [`ViewportAdapter`] and the
//! controllers drive it through these operations:
//!
//! - scroll listening ([`ViewportAdapter::on_scroll`])
//! - anchor scrolling ([`ViewportAdapter::scroll_to_element`])
//! - pointer media query ([`ViewportAdapter::matches_coarse_pointer`])
//! - one-shot visibility watches ([`ViewportAdapter::observe`])
//! - opening external links ([`ViewportAdapter::open_external`])
//!
//! Hosts must invoke callbacks outside of any lock guarding their own
//! registries so a callback may register or dispose subscriptions.

use crate::error::{ConfigError, ViewportError};
use crate::subscription::Subscription;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Identifier of an element in the host document
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(String);

impl ElementId {
    /// Create element id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw id
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ElementId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a programmatic scroll moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Animated; completes over several frames
    Smooth,
    /// Jump immediately
    Instant,
}

/// Where an external link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowsingContext {
    /// New tab or window
    New,
    /// Replace the current page
    Current,
}

/// Vertical extent in document coordinates (px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Distance from document top
    pub top: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create rect
    #[inline]
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Margin applied to the viewport before intersection is computed
///
/// CSS `rootMargin` semantics: positive values grow the effective
/// viewport, negative values shrink it. Only `top` and `bottom` affect the
/// vertical geometry computed by [`intersection_ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    /// Top edge (px)
    pub top: f64,
    /// Right edge (px)
    pub right: f64,
    /// Bottom edge (px)
    pub bottom: f64,
    /// Left edge (px)
    pub left: f64,
}

impl RootMargin {
    /// Margin with explicit edges
    #[inline]
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Parse a CSS-style margin: one to four `px` lengths
    ///
    /// # Errors
    /// [`ConfigError::InvalidRootMargin`] on empty input, more than four
    /// values, or a value that is not a pixel length.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRootMargin(input.to_string());

        let values = input
            .split_whitespace()
            .map(|part| {
                let number = part.strip_suffix("px").unwrap_or(part);
                if number != part || number == "0" {
                    number.parse::<f64>().ok().filter(|v| v.is_finite())
                } else {
                    None
                }
            })
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(invalid)?;

        match values.as_slice() {
            [all] => Ok(Self::new(*all, *all, *all, *all)),
            [vertical, horizontal] => Ok(Self::new(*vertical, *horizontal, *vertical, *horizontal)),
            [top, horizontal, bottom] => Ok(Self::new(*top, *horizontal, *bottom, *horizontal)),
            [top, right, bottom, left] => Ok(Self::new(*top, *right, *bottom, *left)),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for RootMargin {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RootMargin {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

impl Display for RootMargin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px {}px {}px", self.top, self.right, self.bottom, self.left)
    }
}

/// Fraction of `element` inside `viewport` after applying `margin`
///
/// Returns a value in `[0, 1]`. Zero-height elements count as fully
/// visible when their top lies within the effective viewport.
#[must_use]
pub fn intersection_ratio(element: Rect, viewport: Rect, margin: RootMargin) -> f64 {
    let root_top = viewport.top - margin.top;
    let root_bottom = viewport.bottom() + margin.bottom;
    if root_bottom <= root_top {
        return 0.0;
    }

    if element.height <= 0.0 {
        let inside = element.top >= root_top && element.top <= root_bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    let visible = element.bottom().min(root_bottom) - element.top.max(root_top);
    (visible / element.height).clamp(0.0, 1.0)
}

/// Options for a visibility watch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    /// Visible fraction that counts as "seen"
    pub threshold: f64,
    /// Adjustment of the effective viewport
    pub root_margin: RootMargin,
}

/// One visibility observation delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Visible fraction of the element, `[0, 1]`
    pub ratio: f64,
    /// Host clock at observation time (ms)
    pub time_ms: f64,
}

/// What a visibility callback wants after handling an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    /// Keep delivering entries
    Keep,
    /// Stop watching this element
    Release,
}

/// Scroll listener; receives the vertical offset (px)
pub type ScrollCallback = Box<dyn FnMut(f64) + Send>;

/// Visibility listener
pub type VisibilityCallback = Box<dyn FnMut(IntersectionEntry) -> Watch + Send>;

/// Capabilities of the host rendering environment
pub trait ViewportAdapter: Send + Sync {
    /// Monotonic host clock (ms)
    fn now_ms(&self) -> f64;

    /// Current vertical scroll offset (px)
    fn scroll_offset(&self) -> f64;

    /// Listen for scroll offset changes
    fn on_scroll(&self, callback: ScrollCallback) -> Subscription;

    /// Scroll so the element's top meets the viewport top
    ///
    /// Returns `false` without scrolling when no element carries `id`.
    /// A smooth scroll issued while another is running redirects it.
    fn scroll_to_element(&self, id: &str, behavior: ScrollBehavior) -> bool;

    /// Document-relative top of an element, if present
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Whether the primary pointer is coarse (touch)
    fn matches_coarse_pointer(&self) -> bool;

    /// Start watching an element's visibility
    ///
    /// # Errors
    /// [`ViewportError::ObservationUnsupported`] when the host has no
    /// intersection capability, [`ViewportError::UnknownElement`] when the
    /// element is absent.
    fn observe(
        &self,
        element: &ElementId,
        options: ObserveOptions,
        on_visible: VisibilityCallback,
    ) -> Result<Subscription, ViewportError>;

    /// Hand a URL to the host; fire-and-forget
    fn open_external(&self, url: &str, context: BrowsingContext);
}
