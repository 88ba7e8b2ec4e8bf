//! Stored-value loyalty cards.

use serde::{Deserialize, Serialize};

use super::{lenient, lenient_string};

/// A stored-value card registered to the account.
///
/// Projection of the `me/cards` entries. The balance is kept as the JSON
/// number upstream sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyCard {
    /// Card name.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Card identifier, used as the tender id when submitting an order.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_id: Option<String>,

    /// Printed card number.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_number: Option<String>,

    /// User-assigned nickname.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub nickname: Option<String>,

    /// Current balance.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance: Option<serde_json::Number>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_projection_drops_extra_fields() {
        let cards: Vec<LoyaltyCard> = serde_json::from_value(json!([{
            "name": "A",
            "cardId": "1",
            "cardNumber": "111",
            "nickname": "n",
            "balance": 5,
            "extra": "x"
        }]))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&cards).unwrap(),
            json!([{"name": "A", "cardId": "1", "cardNumber": "111", "nickname": "n", "balance": 5}])
        );
    }

    #[test]
    fn test_card_balance_keeps_decimal() {
        let card: LoyaltyCard = serde_json::from_value(json!({"balance": 12.75})).unwrap();
        assert_eq!(card.balance.and_then(|b| b.as_f64()), Some(12.75));
    }

    #[test]
    fn test_card_projection_tolerates_unexpected_types() {
        let card: LoyaltyCard = serde_json::from_value(json!({
            "cardId": 77,
            "cardNumber": 6_000_123,
            "nickname": {"text": "n"},
            "balance": "12.75"
        }))
        .unwrap();

        assert_eq!(card.card_id.as_deref(), Some("77"));
        assert_eq!(card.card_number.as_deref(), Some("6000123"));
        assert!(card.nickname.is_none());
        assert!(card.balance.is_none());
    }

    #[test]
    fn test_card_missing_fields_are_none() {
        let card: LoyaltyCard = serde_json::from_value(json!({"cardId": "9"})).unwrap();
        assert_eq!(card.card_id.as_deref(), Some("9"));
        assert!(card.name.is_none());
        assert!(card.balance.is_none());
    }
}
