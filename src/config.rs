//! Retry-policy configuration
//!
//! The [`RetryPolicy`] holds the three bounded retry counts the transfer
//! orchestrator works with. It is loaded once at process start (from CLI
//! flags or a deserialized configuration section), then shared read-only by
//! every transfer invocation.

use serde::Deserialize;
use tracing::warn;

/// Default retry count applied to every operation when not configured
pub const DEFAULT_RETRY_COUNT: u32 = 3;

/// Bounded retry counts for the three mutating ledger operations
///
/// The counts name the operation, not the transfer direction: leg 1 (the
/// source-ledger decrease) is always bounded by `withdraw_retries` and leg 2
/// (the destination-ledger increase) by `deposit_retries`, whichever way the
/// transfer flows. `rollback_retries` bounds the compensation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawRetryPolicy")]
pub struct RetryPolicy {
    /// Retry budget for the source-ledger decrease (leg 1)
    pub withdraw_retries: u32,
    /// Retry budget for the destination-ledger increase (leg 2)
    pub deposit_retries: u32,
    /// Retry budget for the compensating rollback
    pub rollback_retries: u32,
}

/// Deserialization shape for [`RetryPolicy`]
///
/// Deserialized counts go through [`RetryPolicy::new`] so an explicit zero
/// gets the same default fallback as a missing field.
#[derive(Deserialize)]
#[serde(default)]
struct RawRetryPolicy {
    withdraw_retries: u32,
    deposit_retries: u32,
    rollback_retries: u32,
}

impl Default for RawRetryPolicy {
    fn default() -> Self {
        Self {
            withdraw_retries: DEFAULT_RETRY_COUNT,
            deposit_retries: DEFAULT_RETRY_COUNT,
            rollback_retries: DEFAULT_RETRY_COUNT,
        }
    }
}

impl From<RawRetryPolicy> for RetryPolicy {
    fn from(raw: RawRetryPolicy) -> Self {
        RetryPolicy::new(
            raw.withdraw_retries,
            raw.deposit_retries,
            raw.rollback_retries,
        )
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            withdraw_retries: DEFAULT_RETRY_COUNT,
            deposit_retries: DEFAULT_RETRY_COUNT,
            rollback_retries: DEFAULT_RETRY_COUNT,
        }
    }
}

impl RetryPolicy {
    /// Create a RetryPolicy with custom counts
    ///
    /// Retry counts must be positive; a zero count would make every transfer
    /// fail without ever touching a ledger, so zeroes fall back to
    /// [`DEFAULT_RETRY_COUNT`] with a warning.
    pub fn new(withdraw_retries: u32, deposit_retries: u32, rollback_retries: u32) -> Self {
        Self {
            withdraw_retries: positive_or_default(withdraw_retries, "withdraw_retries"),
            deposit_retries: positive_or_default(deposit_retries, "deposit_retries"),
            rollback_retries: positive_or_default(rollback_retries, "rollback_retries"),
        }
    }
}

fn positive_or_default(count: u32, name: &str) -> u32 {
    if count == 0 {
        warn!(
            "Invalid {} (0), using default ({})",
            name, DEFAULT_RETRY_COUNT
        );
        DEFAULT_RETRY_COUNT
    } else {
        count
    }
}
