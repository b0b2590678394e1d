//! Reveal controller - one-shot, intersection-driven presentation
//!
//! A [`RevealTarget`] wraps one content block. It starts in the pre-reveal
//! presentation, asks the host to watch the block's visibility, and latches
//! to revealed the first time the visible fraction reaches its threshold.
//! The latch never reverts; the watch is released as soon as it fires and
//! in any case when the target is dropped.
//!
//! Hosts without intersection observation fail open: the target starts
//! revealed so no content is ever hidden for good.

use crate::config::RevealConfig;
use crate::styles::{RevealStyle, Transition};
use crate::subscription::Subscription;
use crate::viewport::{
    ElementId, IntersectionEntry, ObserveOptions, RootMargin, ViewportAdapter, VisibilityCallback,
    Watch,
};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// Latch state of a reveal target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    /// Not yet seen
    Hidden,
    /// Seen; `at_ms` is the host time of the triggering observation
    Revealed {
        /// Host clock when the latch closed
        at_ms: f64,
    },
}

impl RevealState {
    /// Whether the latch has closed
    #[inline]
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self, Self::Revealed { .. })
    }

    /// Close the latch; returns `false` if it was already closed
    pub fn latch(&mut self, at_ms: f64) -> bool {
        match self {
            Self::Hidden => {
                *self = Self::Revealed { at_ms };
                true
            }
            Self::Revealed { .. } => false,
        }
    }
}

/// Per-target overrides
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RevealOptions {
    /// Transition start delay (ms)
    pub delay_ms: u32,
    /// Visible fraction override
    pub threshold: Option<f64>,
    /// Root margin override
    pub root_margin: Option<RootMargin>,
}

impl RevealOptions {
    /// Defaults from the controller's config
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With delay
    #[inline]
    #[must_use]
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// With threshold
    ///
    /// Clamped into (0, 1] at mount; a non-finite value falls back to the
    /// controller's configured threshold.
    #[inline]
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// With root margin
    #[inline]
    #[must_use]
    pub fn with_root_margin(mut self, margin: RootMargin) -> Self {
        self.root_margin = Some(margin);
        self
    }
}

fn effective_threshold(requested: Option<f64>, default: f64) -> f64 {
    requested
        .filter(|t| t.is_finite())
        .map_or(default, |t| t.clamp(f64::MIN_POSITIVE, 1.0))
}

/// Delay for the `index`-th sibling in a staggered group
#[inline]
#[must_use]
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}

/// Mounts reveal targets against a viewport
#[derive(Clone)]
pub struct RevealController {
    viewport: Arc<dyn ViewportAdapter>,
    config: RevealConfig,
}

impl RevealController {
    /// Create controller
    #[inline]
    #[must_use]
    pub fn new(viewport: Arc<dyn ViewportAdapter>, config: RevealConfig) -> Self {
        Self { viewport, config }
    }

    /// Controller configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Wrap a content block
    ///
    /// Registers the visibility watch immediately. If the host has no
    /// visibility observation the target is returned already revealed; if
    /// the element is absent it stays hidden and unwatched.
    pub fn mount(&self, element: impl Into<ElementId>, options: RevealOptions) -> RevealTarget {
        let element = element.into();
        let latch = Arc::new(Mutex::new(RevealState::Hidden));
        let observe = ObserveOptions {
            threshold: effective_threshold(options.threshold, self.config.threshold),
            root_margin: options.root_margin.unwrap_or(self.config.root_margin),
        };

        let callback = latch_callback(Arc::downgrade(&latch), observe.threshold, element.clone());
        let subscription = match self.viewport.observe(&element, observe, callback) {
            Ok(subscription) => {
                tracing::debug!(%element, threshold = observe.threshold, "reveal target mounted");
                Some(subscription)
            }
            Err(e) if e.fails_open() => {
                tracing::warn!(%element, error = %e, "visibility observation unavailable, revealing immediately");
                latch.lock().latch(self.viewport.now_ms());
                None
            }
            Err(e) => {
                tracing::warn!(%element, error = %e, "cannot watch element, leaving it hidden");
                None
            }
        };

        RevealTarget {
            element,
            delay_ms: options.delay_ms,
            duration_ms: self.config.duration_ms,
            offset_px: self.config.offset_px,
            easing: self.config.easing.clone(),
            latch,
            subscription,
        }
    }

    /// Mount a group of siblings with delays `0, step, 2*step, ...`
    pub fn mount_staggered<I, E>(&self, elements: I) -> Vec<RevealTarget>
    where
        I: IntoIterator<Item = E>,
        E: Into<ElementId>,
    {
        let step = self.config.stagger_step_ms;
        elements
            .into_iter()
            .enumerate()
            .map(|(i, element)| self.mount(element, RevealOptions::new().with_delay(stagger_delay(i, step))))
            .collect()
    }
}

impl std::fmt::Debug for RevealController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealController")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn latch_callback(latch: Weak<Mutex<RevealState>>, threshold: f64, element: ElementId) -> VisibilityCallback {
    Box::new(move |entry: IntersectionEntry| {
        let Some(latch) = latch.upgrade() else {
            return Watch::Release;
        };
        if entry.ratio < threshold {
            return Watch::Keep;
        }
        if latch.lock().latch(entry.time_ms) {
            tracing::debug!(%element, ratio = entry.ratio, "revealed");
        }
        Watch::Release
    })
}

/// One wrapped content block
///
/// Owns its visibility watch; dropping the target (or calling
/// [`RevealTarget::unmount`]) releases it exactly once.
#[derive(Debug)]
pub struct RevealTarget {
    element: ElementId,
    delay_ms: u32,
    duration_ms: u32,
    offset_px: f64,
    easing: String,
    latch: Arc<Mutex<RevealState>>,
    subscription: Option<Subscription>,
}

impl RevealTarget {
    /// Wrapped element
    #[inline]
    #[must_use]
    pub fn element(&self) -> &ElementId {
        &self.element
    }

    /// Stagger delay (ms)
    #[inline]
    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Current latch state
    #[inline]
    #[must_use]
    pub fn state(&self) -> RevealState {
        *self.latch.lock()
    }

    /// Whether the block has been revealed
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state().is_revealed()
    }

    /// Whether a host watch is still pending
    #[inline]
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active) && !self.is_visible()
    }

    /// Host time at which the reveal transition begins
    #[must_use]
    pub fn transition_starts_at(&self) -> Option<f64> {
        match self.state() {
            RevealState::Hidden => None,
            RevealState::Revealed { at_ms } => Some(at_ms + f64::from(self.delay_ms)),
        }
    }

    /// Current presentation
    #[must_use]
    pub fn style(&self) -> RevealStyle {
        let (opacity, translate_y_px) = if self.is_visible() {
            (1.0, 0.0)
        } else {
            (0.0, self.offset_px)
        };
        RevealStyle {
            opacity,
            translate_y_px,
            transition: Transition {
                duration_ms: self.duration_ms,
                delay_ms: self.delay_ms,
                easing: self.easing.clone(),
            },
        }
    }

    /// Tear down the block
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for RevealTarget {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
            tracing::debug!(element = %self.element, "reveal watch released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn latch_closes_once() {
        let mut state = RevealState::Hidden;
        assert!(state.latch(10.0));
        assert!(!state.latch(20.0));
        assert_eq!(state, RevealState::Revealed { at_ms: 10.0 });
    }

    #[test]
    fn stagger_delays() {
        let delays: Vec<_> = (0..4).map(|i| stagger_delay(i, 150)).collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
        assert_eq!(stagger_delay(usize::MAX, 150), u32::MAX);
    }

    #[test]
    fn threshold_override_normalized() {
        assert!((effective_threshold(None, 0.1) - 0.1).abs() < f64::EPSILON);
        assert!((effective_threshold(Some(0.4), 0.1) - 0.4).abs() < f64::EPSILON);
        assert!((effective_threshold(Some(7.0), 0.1) - 1.0).abs() < f64::EPSILON);
        assert!(effective_threshold(Some(-1.0), 0.1) > 0.0);
        assert!((effective_threshold(Some(f64::NAN), 0.1) - 0.1).abs() < f64::EPSILON);
        assert!((effective_threshold(Some(f64::INFINITY), 0.1) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn callback_after_target_gone_releases() {
        let latch = Arc::new(Mutex::new(RevealState::Hidden));
        let mut cb = latch_callback(Arc::downgrade(&latch), 0.1, ElementId::from("gone"));
        drop(latch);
        assert_eq!(cb(IntersectionEntry { ratio: 1.0, time_ms: 0.0 }), Watch::Release);
    }

    #[test]
    fn callback_keeps_watching_below_threshold() {
        let latch = Arc::new(Mutex::new(RevealState::Hidden));
        let mut cb = latch_callback(Arc::downgrade(&latch), 0.5, ElementId::from("card"));
        assert_eq!(cb(IntersectionEntry { ratio: 0.2, time_ms: 1.0 }), Watch::Keep);
        assert!(!latch.lock().is_revealed());
        assert_eq!(cb(IntersectionEntry { ratio: 0.5, time_ms: 2.0 }), Watch::Release);
        assert_eq!(*latch.lock(), RevealState::Revealed { at_ms: 2.0 });
    }

    proptest! {
        #[test]
        fn prop_latch_is_monotonic(
            ratios in proptest::collection::vec(0.0f64..=1.0, 1..64),
            threshold in 0.01f64..=1.0,
        ) {
            let latch = Arc::new(Mutex::new(RevealState::Hidden));
            let mut cb = latch_callback(Arc::downgrade(&latch), threshold, ElementId::from("p"));
            let mut seen = false;
            for (i, ratio) in ratios.into_iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let _ = cb(IntersectionEntry { ratio, time_ms: i as f64 });
                let now = latch.lock().is_revealed();
                prop_assert!(!(seen && !now));
                seen = now;
            }
        }
    }
}
