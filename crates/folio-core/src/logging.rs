//! Tracing setup for hosts that do not install their own subscriber

use crate::error::ConfigError;
use tracing_subscriber::EnvFilter;

/// Parse a filter directive
///
/// # Errors
/// [`ConfigError::InvalidLogFilter`] when `filter` is not a valid
/// directive.
pub fn parse_filter(filter: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(filter).map_err(|e| ConfigError::InvalidLogFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })
}

/// Install a fmt subscriber filtered by `filter`
///
/// Returns `Ok(false)` when a global subscriber is already installed,
/// which leaves the existing one in place.
///
/// # Errors
/// [`ConfigError::InvalidLogFilter`] when `filter` is not a valid
/// directive.
pub fn init(filter: &str) -> Result<bool, ConfigError> {
    let env_filter = parse_filter(filter)?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        let _ = init("folio=debug").unwrap();
        assert!(!init("folio=debug").unwrap());
    }

    #[test]
    fn bad_directive_rejected() {
        let err = init("folio=loud").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFilter { .. }));
    }

    #[test]
    fn parse_accepts_default_directive() {
        assert!(parse_filter("folio=info").is_ok());
        assert!(parse_filter("folio_core=debug,warn").is_ok());
    }
}
