//! Runtime selection of a payment method.

use crate::amount::Amount;
use crate::error::PaymentError;
use crate::method::{BoletoPayment, CreditCardPayment, PaymentMethod, PixPayment};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The known payment methods, for picking one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    CreditCard,
    Boleto,
    Pix,
}

impl PaymentKind {
    /// Every kind, in declaration order.
    pub const ALL: [PaymentKind; 3] = [
        PaymentKind::CreditCard,
        PaymentKind::Boleto,
        PaymentKind::Pix,
    ];

    /// Canonical snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentKind::CreditCard => "credit_card",
            PaymentKind::Boleto => "boleto",
            PaymentKind::Pix => "pix",
        }
    }

    /// Builds the method implementation for this kind.
    pub fn method(self) -> Box<dyn PaymentMethod> {
        match self {
            PaymentKind::CreditCard => Box::new(CreditCardPayment),
            PaymentKind::Boleto => Box::new(BoletoPayment),
            PaymentKind::Pix => Box::new(PixPayment),
        }
    }

    /// Processes `amount` with the method for this kind.
    pub fn process_payment(self, amount: Amount) -> String {
        self.method().process_payment(amount)
    }
}

impl FromStr for PaymentKind {
    type Err = PaymentError;

    /// Case-insensitive; also accepts a few common aliases for credit card.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit_card" | "credit-card" | "creditcard" | "card" | "cartao" | "cartão" => {
                Ok(PaymentKind::CreditCard)
            }
            "boleto" => Ok(PaymentKind::Boleto),
            "pix" => Ok(PaymentKind::Pix),
            _ => Err(PaymentError::UnknownMethod(s.trim().to_string())),
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_canonical_names() {
        for kind in PaymentKind::ALL {
            assert_eq!(PaymentKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_aliases_and_case() {
        assert_eq!(
            PaymentKind::from_str("  Credit-Card ").unwrap(),
            PaymentKind::CreditCard
        );
        assert_eq!(PaymentKind::from_str("CARTAO").unwrap(), PaymentKind::CreditCard);
        assert_eq!(PaymentKind::from_str("PIX").unwrap(), PaymentKind::Pix);
        assert_eq!(PaymentKind::from_str("Boleto").unwrap(), PaymentKind::Boleto);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        match PaymentKind::from_str(" paypal ") {
            Err(PaymentError::UnknownMethod(name)) => assert_eq!(name, "paypal"),
            other => panic!("Expected UnknownMethod, got {:?}", other),
        }
        assert!(PaymentKind::from_str("").is_err());
    }

    #[test]
    fn test_method_labels_are_distinct() {
        let labels: HashSet<_> = PaymentKind::ALL.iter().map(|k| k.method().label()).collect();
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(PaymentKind::CreditCard.to_string(), "credit_card");
        assert_eq!(PaymentKind::Pix.to_string(), "pix");
    }

    #[test]
    fn test_serde_names_through_csv() {
        let input = "credit_card,10.5\nboleto,0\npix,1234.567\npaypal,1\npix,-1\n";
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(input.as_bytes());
        let rows: Vec<_> = reader.deserialize::<(PaymentKind, Amount)>().collect();

        let (kind, amount) = rows[0].as_ref().unwrap();
        assert_eq!(*kind, PaymentKind::CreditCard);
        assert_eq!(amount.to_string(), "10.50");
        assert_eq!(rows[1].as_ref().unwrap().0, PaymentKind::Boleto);
        assert_eq!(rows[2].as_ref().unwrap().1.to_string(), "1234.57");
        assert!(rows[3].is_err());
        assert!(rows[4].is_err());

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        for kind in PaymentKind::ALL {
            writer.serialize((kind, Amount::ZERO)).unwrap();
        }
        let written = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(written, "credit_card,0.00\nboleto,0.00\npix,0.00\n");
    }
}
