//! Parameter validation for commands that take a quiz id.
//!
//! The parse is deliberately lenient: it reads the leading integer of the
//! argument and ignores whatever follows, so `show 3abc` shows quiz 3. Ids are
//! never checked against the store here; an id with no record is reported by
//! the command as not found.

use crate::error::{QuizzError, Result};
use crate::model::QuizId;

pub fn validate_id(arg: Option<&str>) -> Result<QuizId> {
    let raw = match arg.map(str::trim_start) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(QuizzError::MissingParameter),
    };

    let (negative, digits) = match raw.as_bytes()[0] {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(QuizzError::NotANumber);
    }

    // Runs of digits past i64 saturate and fail later as a store lookup.
    let value = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    Ok(if negative { -value } else { value })
}
