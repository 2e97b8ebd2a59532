//! Premium parse-and-validate
//!
//! The creation form accepts the premium as a JSON number or a numeric
//! string. Either way it must come out as a finite, non-negative
//! amount before it is allowed into the store; bad input rejects the
//! submission instead of smuggling a NaN sentinel in.

use serde::Deserialize;
use thiserror::Error;

/// Premium validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PremiumError {
    /// Value could not be parsed as a number
    #[error("premium is not a number: '{0}'")]
    NotANumber(String),

    /// Value parsed but is NaN or infinite
    #[error("premium is not a finite amount")]
    NotFinite,

    /// Value is below zero
    #[error("premium must be non-negative, got {0}")]
    Negative(f64),
}

/// Raw premium as it arrives on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PremiumInput {
    Number(f64),
    Text(String),
}

/// Validate a premium input into a stored amount.
pub fn parse(input: &PremiumInput) -> Result<f64, PremiumError> {
    let amount = match input {
        PremiumInput::Number(n) => *n,
        PremiumInput::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| PremiumError::NotANumber(s.clone()))?,
    };

    if !amount.is_finite() {
        return Err(PremiumError::NotFinite);
    }
    if amount < 0.0 {
        return Err(PremiumError::Negative(amount));
    }
    Ok(amount)
}
