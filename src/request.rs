//! Payment request models for CSV parsing.

use crate::amount::Amount;
use crate::error::{PaymentError, Result};
use crate::kind::PaymentKind;
use serde::Deserialize;
use std::str::FromStr;

/// Raw payment request as read from CSV.
///
/// Both fields are kept as strings so a bad row can be reported with a
/// precise message instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct PaymentRecord {
    /// Method name: credit_card, boleto, pix (or an accepted alias)
    pub method: String,

    /// Amount in reais, non-negative
    pub amount: Option<String>,
}

impl PaymentRecord {
    /// Parses the raw CSV record into a typed request.
    ///
    /// `row` is only used to label the error.
    pub fn parse(&self, row: usize) -> Result<PaymentRequest> {
        let kind = PaymentKind::from_str(&self.method).map_err(|e| invalid(row, e))?;

        let amount_str = match self.amount.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => {
                return Err(PaymentError::InvalidRecord {
                    row,
                    message: "missing amount".to_string(),
                })
            }
        };
        let amount = Amount::from_str(amount_str).map_err(|e| invalid(row, e))?;

        Ok(PaymentRequest { kind, amount })
    }
}

fn invalid(row: usize, err: PaymentError) -> PaymentError {
    PaymentError::InvalidRecord {
        row,
        message: err.to_string(),
    }
}

/// A validated request ready for processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentRequest {
    pub kind: PaymentKind,
    pub amount: Amount,
}

impl PaymentRequest {
    /// Runs the request through its payment method.
    pub fn process(&self) -> String {
        self.kind.process_payment(self.amount)
    }
}
