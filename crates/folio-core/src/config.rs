//! Folio configuration
//!
//! Presentation tuning values (visibility threshold, margins, durations,
//! scroll threshold) and the contact/gallery endpoints. Defaults mirror the
//! delivered page; hosts may override any subset from TOML.

use crate::error::ConfigError;
use crate::logging;
use crate::viewport::RootMargin;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Reveal controller tuning
    pub reveal: RevealConfig,
    /// Navigation controller tuning
    pub navigation: NavigationConfig,
    /// Contact handoff endpoints
    pub contact: ContactConfig,
    /// Gallery screenshot service
    pub gallery: GalleryConfig,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl FolioConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML, otherwise whatever
    /// [`FolioConfig::validate`] reports.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// With reveal tuning
    #[inline]
    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }

    /// With navigation tuning
    #[inline]
    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationConfig) -> Self {
        self.navigation = navigation;
        self
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Check value ranges
    ///
    /// # Errors
    /// The first out-of-range value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reveal.validate()?;
        self.navigation.validate()?;
        self.contact.validate()?;
        logging::parse_filter(&self.log_filter)?;
        Ok(())
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            navigation: NavigationConfig::default(),
            contact: ContactConfig::default(),
            gallery: GalleryConfig::default(),
            log_filter: "folio=info".to_string(),
        }
    }
}

/// Reveal controller tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Default visible fraction that triggers a reveal
    pub threshold: f64,
    /// Default root margin
    pub root_margin: RootMargin,
    /// Transition duration (ms)
    pub duration_ms: u32,
    /// Pre-reveal vertical offset (px)
    pub offset_px: f64,
    /// Delay added per sibling when staggering (ms)
    pub stagger_step_ms: u32,
    /// CSS easing function
    pub easing: String,
}

impl RevealConfig {
    /// With threshold
    #[inline]
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// With root margin
    #[inline]
    #[must_use]
    pub fn with_root_margin(mut self, margin: RootMargin) -> Self {
        self.root_margin = margin;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if !self.offset_px.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "reveal.offset_px",
                reason: "must be finite".to_string(),
            });
        }
        if self.easing.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "reveal.easing",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::new(0.0, 0.0, -50.0, 0.0),
            duration_ms: 800,
            offset_px: 20.0,
            stagger_step_ms: 150,
            easing: "ease-out".to_string(),
        }
    }
}

/// Navigation controller tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Offset past which the navbar turns opaque (px)
    pub scroll_threshold_px: f64,
    /// Height of the fixed navbar, used for active-link detection (px)
    pub nav_height_px: f64,
}

impl NavigationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("navigation.scroll_threshold_px", self.scroll_threshold_px),
            ("navigation.nav_height_px", self.nav_height_px),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be a non-negative length, got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
            nav_height_px: 80.0,
        }
    }
}

/// Contact handoff endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// WhatsApp number, international format without `+`
    pub whatsapp_number: String,
    /// Public email
    pub email: String,
    /// Public phone (display form)
    pub phone: String,
}

impl ContactConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let number = &self.whatsapp_number;
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                field: "contact.whatsapp_number",
                reason: format!("expected digits only, got {number:?}"),
            });
        }
        Ok(())
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        let contact = folio_content::profile().contact;
        Self {
            whatsapp_number: "254704662432".to_string(),
            email: contact.email.to_string(),
            phone: contact.phone.to_string(),
        }
    }
}

/// Screenshot service used for gallery thumbnails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Service endpoint
    pub screenshot_endpoint: String,
    /// API key
    pub screenshot_key: String,
    /// Capture size, `WIDTHxHEIGHT`
    pub dimension: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            screenshot_endpoint: "https://api.screenshotmachine.com/".to_string(),
            screenshot_key: "b99e88".to_string(),
            dimension: "1024x768".to_string(),
        }
    }
}
