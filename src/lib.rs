//! # Payment Methods
//!
//! One payment capability, [`PaymentMethod`], with three interchangeable
//! implementations: [`CreditCardPayment`], [`BoletoPayment`] and
//! [`PixPayment`]. Each turns an [`Amount`] into a confirmation message.
//!
//! ## Design Principles
//!
//! - **Exact cents**: amounts use `rust_decimal`, rounded half-to-even to 2 places
//! - **Validated input**: negative or non-finite amounts never reach a method
//! - **Pure processing**: the same method and amount always give the same text
//! - **Runtime selection**: [`PaymentKind`] picks a method by name
//!
//! ## Example
//!
//! ```
//! use payment_methods::{Amount, PaymentKind};
//! use std::str::FromStr;
//!
//! let kind = PaymentKind::from_str("pix").unwrap();
//! let amount = Amount::from_str("1234.567").unwrap();
//! assert_eq!(kind.process_payment(amount), "Pagamento com Pix: R$1234.57");
//! ```

pub mod amount;
pub mod batch;
pub mod error;
pub mod kind;
pub mod method;
pub mod request;

pub use amount::Amount;
pub use batch::{PaymentBatch, ProcessedPayment};
pub use error::{PaymentError, Result};
pub use kind::PaymentKind;
pub use method::{
    BoletoPayment, CreditCardPayment, PaymentMethod, PixPayment, CURRENCY_MARKER,
};
pub use request::{PaymentRecord, PaymentRequest};

/// One-line description of the capability and its implementations,
/// printed by the binary at startup.
pub fn startup_banner() -> &'static str {
    "payment capability 'PaymentMethod' is defined with implementations: \
     'CreditCardPayment', 'BoletoPayment', 'PixPayment'"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_banner_names_all_types() {
        let banner = startup_banner();
        for name in ["PaymentMethod", "CreditCardPayment", "BoletoPayment", "PixPayment"] {
            assert!(banner.contains(name), "missing {} in {}", name, banner);
        }
        assert!(!banner.contains('\n'));
    }
}
