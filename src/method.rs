//! The payment capability and its three implementations.

use crate::amount::Amount;
use std::fmt;

/// Currency marker printed in front of every amount.
pub const CURRENCY_MARKER: &str = "R$";

/// A way of paying for something.
///
/// Implementors only name themselves through [`label`](Self::label); the
/// confirmation text produced by [`process_payment`](Self::process_payment)
/// is shared. Processing is pure: the same method and amount always produce
/// the same string.
///
/// The capability itself is not a value and cannot be built directly, only
/// its concrete implementations can:
///
/// ```compile_fail
/// use payment_methods::PaymentMethod;
///
/// let method = PaymentMethod;
/// ```
///
/// ```
/// use payment_methods::{Amount, CreditCardPayment, PaymentMethod};
///
/// let amount = Amount::try_from(10.5).unwrap();
/// let message = CreditCardPayment.process_payment(amount);
/// assert_eq!(message, "Pagamento com cartão de crédito: R$10.50");
/// ```
pub trait PaymentMethod: fmt::Debug + Send + Sync {
    /// Human-readable name of the method, in Portuguese.
    fn label(&self) -> &'static str;

    /// Returns the confirmation for a payment of `amount`.
    fn process_payment(&self, amount: Amount) -> String {
        format!(
            "Pagamento com {}: {}{}",
            self.label(),
            CURRENCY_MARKER,
            amount
        )
    }
}

/// Credit card payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreditCardPayment;

/// Bank slip (boleto bancário) payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoletoPayment;

/// Pix instant payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixPayment;

impl PaymentMethod for CreditCardPayment {
    fn label(&self) -> &'static str {
        "cartão de crédito"
    }
}

impl PaymentMethod for BoletoPayment {
    fn label(&self) -> &'static str {
        "boleto bancário"
    }
}

impl PaymentMethod for PixPayment {
    fn label(&self) -> &'static str {
        "Pix"
    }
}
