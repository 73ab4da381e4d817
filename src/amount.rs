//! Monetary amount with exactly 2 decimal places.
//!
//! Wraps `rust_decimal` so every amount handed to a payment method is
//! non-negative and already rounded to cents.

use crate::error::{PaymentError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A non-negative monetary amount kept at exactly 2 decimal places.
///
/// Values with more precision are rounded half-to-even (banker's rounding),
/// so `0.125` becomes `0.12` and `0.135` becomes `0.14`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use payment_methods::Amount;
///
/// let amount = Amount::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
///
/// let amount = Amount::try_from(1234.567).unwrap();
/// assert_eq!(amount.to_string(), "1234.57");
///
/// assert!(Amount::from_str("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Rounding rule applied to values with more than [`Self::SCALE`] decimals.
    pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates an amount from a `Decimal`, rounding to 2 decimal places.
    ///
    /// Fails with [`PaymentError::NegativeAmount`] if `value` is below zero.
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PaymentError::NegativeAmount(value.to_string()));
        }

        let mut rounded = value.round_dp_with_strategy(Self::SCALE, Self::ROUNDING);
        rounded.rescale(Self::SCALE);
        // "-0" parses as zero but keeps its sign bit
        rounded.set_sign_positive(true);
        Ok(Amount(rounded))
    }

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<f64> for Amount {
    type Error = PaymentError;

    /// Converts through the shortest decimal text that round-trips to `value`,
    /// so `1234.567` is treated as `1234.567` and not its binary approximation.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(PaymentError::InvalidAmount(value.to_string()));
        }
        if value < 0.0 {
            return Err(PaymentError::NegativeAmount(value.to_string()));
        }
        if value >= DECIMAL_LIMIT {
            return Err(PaymentError::AmountOutOfRange(format!("{:e}", value)));
        }
        // rounds to 0.00 half-to-even; also keeps tiny values from printing 300+ digits
        if value <= HALF_CENT {
            return Ok(Amount::ZERO);
        }
        Amount::from_str(&value.to_string())
    }
}

/// 2^96, the first integer `Decimal` cannot hold. Exactly representable as `f64`.
const DECIMAL_LIMIT: f64 = 79_228_162_514_264_337_593_543_950_336.0;

const HALF_CENT: f64 = 0.005;

/// Integer parts up to this many digits always fit in a `Decimal`.
const SAFE_INTEGER_DIGITS: usize = 28;

/// Longest amount text echoed back in an error message.
const MAX_ECHO: usize = 32;

fn echo(text: &str) -> String {
    match text.char_indices().nth(MAX_ECHO) {
        Some((idx, _)) => format!("{:?}...", &text[..idx]),
        None => format!("{:?}", text),
    }
}

/// Splits plain decimal text (`-?digits(.digits)?`) into sign and integer digits.
/// Returns `None` for anything else.
fn plain_decimal(text: &str) -> Option<(bool, &str)> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !fraction.map_or(true, all_digits) {
        return None;
    }
    Some((negative, integer))
}

impl FromStr for Amount {
    type Err = PaymentError;

    /// Accepts plain decimal text such as `10`, `10.5` or `0.125`.
    /// Digit separators (`1_000`, `1,000`), exponents (`1e3`) and a leading
    /// `+` are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (negative, integer) = match plain_decimal(trimmed) {
            Some(parts) => parts,
            None => return Err(PaymentError::InvalidAmount(echo(trimmed))),
        };

        let decimal = match Decimal::from_str(trimmed) {
            Ok(decimal) => decimal,
            Err(_) if negative => return Err(PaymentError::NegativeAmount(echo(trimmed))),
            Err(e) if integer.trim_start_matches('0').len() > SAFE_INTEGER_DIGITS => {
                return Err(PaymentError::AmountOutOfRange(format!(
                    "{}: {}",
                    echo(trimmed),
                    e
                )))
            }
            Err(e) => {
                return Err(PaymentError::InvalidAmount(format!(
                    "{}: {}",
                    echo(trimmed),
                    e
                )))
            }
        };
        Amount::new(decimal)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}
