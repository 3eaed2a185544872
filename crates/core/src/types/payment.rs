//! Simulated payment intents.

use serde::{Deserialize, Serialize};

use super::id::PaymentIntentId;
use super::status::PaymentStatus;

/// A simulated record of an attempted payment charge.
///
/// Intents are a stand-in for a real payment gateway integration and are
/// deliberately never linked back to a stored shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub id: PaymentIntentId,
    /// Amount in integer cents.
    pub amount: i64,
    /// Lowercase ISO currency code, e.g. "usd".
    pub currency: String,
    pub status: PaymentStatus,
    /// Paired 1:1 with `id`; the browser-side confirmation token.
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_intent_wire_format() {
        let intent = PaymentIntent {
            id: PaymentIntentId::new("pi_0123456789abcdef"),
            amount: 1149,
            currency: "usd".to_string(),
            status: PaymentStatus::RequiresPaymentMethod,
            client_secret: "pi_0123456789abcdef_secret_a1b2c3d4".to_string(),
        };
        let json = serde_json::to_value(&intent).expect("serialize");
        assert_eq!(json["id"], "pi_0123456789abcdef");
        assert_eq!(json["amount"], 1149);
        assert_eq!(json["status"], "requires_payment_method");
        assert_eq!(json["clientSecret"], "pi_0123456789abcdef_secret_a1b2c3d4");
    }
}
