//! Sidebar configuration.
//!
//! Defaults match the shipped sidebar; each value can be overridden from the
//! process environment.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Environment variable overriding [`SidebarConfig::fallback_price_ceiling`].
pub const ENV_FALLBACK_PRICE_CEILING: &str = "STOREFRONT_FALLBACK_PRICE_CEILING";

/// Environment variable overriding [`SidebarConfig::price_step`].
pub const ENV_PRICE_STEP: &str = "STOREFRONT_PRICE_STEP";

/// Tunables for the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Price ceiling used when the product list is empty.
    pub fallback_price_ceiling: f64,
    /// Granularity of the price slider.
    pub price_step: f64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            fallback_price_ceiling: 2000.0,
            price_step: 5.0,
        }
    }
}

impl SidebarConfig {
    /// Load configuration from the process environment.
    ///
    /// Unset variables keep their defaults; set-but-invalid variables are an
    /// error rather than being silently ignored.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_FALLBACK_PRICE_CEILING) {
            config.fallback_price_ceiling = parse_non_negative(ENV_FALLBACK_PRICE_CEILING, &raw)?;
            tracing::debug!(
                fallback_price_ceiling = config.fallback_price_ceiling,
                "fallback price ceiling overridden from environment"
            );
        }

        if let Some(raw) = lookup(ENV_PRICE_STEP) {
            let step = parse_non_negative(ENV_PRICE_STEP, &raw)?;
            if step == 0.0 {
                return Err(DomainError::invariant(format!(
                    "{ENV_PRICE_STEP} must be greater than zero"
                )));
            }
            config.price_step = step;
            tracing::debug!(price_step = step, "price step overridden from environment");
        }

        Ok(config)
    }
}

fn parse_non_negative(key: &str, raw: &str) -> DomainResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| DomainError::validation(format!("{key}: {e}")))?;

    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{key} must be a finite, non-negative number (got {raw})"
        )));
    }

    Ok(value)
}
