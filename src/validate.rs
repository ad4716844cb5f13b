//! Word validation boundary
//!
//! The core never owns a word list. Submitted words go to an external
//! boolean-returning service keyed by word string and language; the only
//! thing the core insists on is that a transport failure stays distinct from
//! a "not a word" verdict. `validate_with_retry` is the host-side driver:
//! bounded retries with exponential backoff, then a typed network outcome.

use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::types::{Language, VALIDATE_BASE_DELAY_MS, VALIDATE_MAX_RETRIES};

/// Transient transport failure while reaching the validator.
///
/// Never conflated with a confirmed-invalid word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("word service unreachable: {reason}")]
pub struct ValidateError {
    pub reason: String,
}

impl ValidateError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Final verdict fed back into the submission state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid,
    /// Transport failed after every retry; the submission stays retryable
    NetworkError,
}

/// External word-list service.
///
/// Called with the lower-cased validation string. Implementations must be
/// idempotent and side-effect free from the core's perspective.
pub trait WordValidator {
    fn validate(&self, word: &str, language: Language) -> Result<bool, ValidateError>;
}

/// Retry bounds for the validation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: VALIDATE_MAX_RETRIES,
            base_delay: Duration::from_millis(VALIDATE_BASE_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Backoff before retry `attempt` (0-based): base * 2^attempt
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

/// Drive one validation to a final outcome.
///
/// Transient failures are retried up to `policy.max_retries` times with
/// exponential backoff; a definitive true/false from the service short-circuits.
pub fn validate_with_retry(
    validator: &dyn WordValidator,
    word: &str,
    language: Language,
    policy: &RetryPolicy,
) -> ValidationOutcome {
    for attempt in 0..=policy.max_retries {
        match validator.validate(word, language) {
            Ok(true) => return ValidationOutcome::Valid,
            Ok(false) => return ValidationOutcome::Invalid,
            Err(err) if attempt < policy.max_retries => {
                warn!(word, attempt, %err, "word check failed, backing off");
                thread::sleep(policy.backoff(attempt));
            }
            Err(err) => {
                warn!(word, attempt, %err, "word check failed, giving up");
            }
        }
    }
    ValidationOutcome::NetworkError
}
