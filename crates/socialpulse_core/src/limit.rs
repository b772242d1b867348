//! Advisory character-limit feedback for the topic field.

/// Remaining characters at or below which the field is flagged as near its limit.
pub const NEAR_LIMIT_THRESHOLD: i64 = 20;

/// Where a text sits relative to a platform's limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LimitStatus {
    /// Comfortably within the limit
    #[display("ok")]
    Ok,
    /// Within the limit by at most [`NEAR_LIMIT_THRESHOLD`] characters
    #[display("near limit")]
    NearLimit,
    /// Past the limit
    #[display("over limit")]
    OverLimit,
}

/// Character-limit measurement of a piece of text.
///
/// Lengths count Unicode scalar values. The measurement never blocks
/// anything; callers use it for display only.
///
/// # Examples
///
/// ```
/// use socialpulse_core::{CharLimit, LimitStatus};
///
/// let limit = CharLimit::measure("hello", 280);
/// assert_eq!(limit.remaining, 275);
/// assert_eq!(limit.status, LimitStatus::Ok);
///
/// let over = CharLimit::measure("x".repeat(290).as_str(), 280);
/// assert_eq!(over.remaining, -10);
/// assert_eq!(over.status, LimitStatus::OverLimit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharLimit {
    /// Platform maximum
    pub max_length: usize,
    /// Characters currently used
    pub length: usize,
    /// `max_length - length`, negative when over
    pub remaining: i64,
    /// Classification of `remaining`
    pub status: LimitStatus,
}

impl CharLimit {
    /// Measure `text` against `max_length`.
    pub fn measure(text: &str, max_length: usize) -> Self {
        let length = text.chars().count();
        let remaining = max_length as i64 - length as i64;
        let status = if remaining < 0 {
            LimitStatus::OverLimit
        } else if remaining <= NEAR_LIMIT_THRESHOLD {
            LimitStatus::NearLimit
        } else {
            LimitStatus::Ok
        };
        Self {
            max_length,
            length,
            remaining,
            status,
        }
    }

    /// True when `0 <= remaining <= 20`.
    pub fn is_near_limit(&self) -> bool {
        self.status == LimitStatus::NearLimit
    }

    /// True when `remaining < 0`.
    pub fn is_over_limit(&self) -> bool {
        self.status == LimitStatus::OverLimit
    }

    /// Counter text shown under the topic field.
    pub fn summary(&self) -> String {
        if self.is_over_limit() {
            format!("{} characters over limit", self.remaining.unsigned_abs())
        } else {
            format!("{} characters remaining", self.remaining)
        }
    }
}
