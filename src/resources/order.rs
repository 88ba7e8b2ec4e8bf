//! Order history and cart conversion.
//!
//! A [`Basket`] is the upstream description of a past order. It is turned
//! into a [`Cart`], the body the pricing endpoint accepts, by
//! [`convert_order_to_cart`].

use serde::{Deserialize, Serialize};

use super::{lenient, lenient_default, lenient_string};

/// A previous order's basket as returned by the order history endpoint.
///
/// `preparation` and `items` are typed; every other upstream field is kept
/// in `extra` so the basket serializes back to what upstream sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Basket {
    /// How the order is handed over (e.g., `"InStore"`).
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub preparation: Option<String>,

    /// Line items.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<Vec<BasketItem>>,

    /// Remaining upstream fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A basket line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BasketItem {
    /// Number of units ordered.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<u32>,

    /// Product reference.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub commerce: Option<Commerce>,

    /// Remaining upstream fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Product reference of a basket line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Commerce {
    /// Stock keeping unit.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sku: Option<String>,

    /// Remaining upstream fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The body sent to the pricing endpoint.
///
/// # Example
///
/// ```rust
/// use starbucks_api::resources::{convert_order_to_cart, Basket};
/// use serde_json::json;
///
/// let basket: Basket = serde_json::from_value(json!({
///     "preparation": "pickup",
///     "items": [{"quantity": 2, "commerce": {"sku": "SKU1"}}]
/// }))
/// .unwrap();
///
/// let cart = convert_order_to_cart(&basket);
/// assert_eq!(
///     serde_json::to_value(&cart).unwrap(),
///     json!({
///         "cart": {"offers": [], "items": [{"quantity": 2, "sku": "SKU1"}]},
///         "delivery": {"deliveryType": "pickup"}
///     })
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Cart {
    /// Offers and items.
    pub cart: CartContents,
    /// Delivery mode.
    pub delivery: Delivery,
}

/// Contents of a [`Cart`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CartContents {
    /// Applied offers. Always empty for carts built from past orders.
    #[serde(default)]
    pub offers: Vec<serde_json::Value>,
    /// Items to price.
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// A cart line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CartItem {
    /// Number of units.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<u32>,
    /// Stock keeping unit.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sku: Option<String>,
}

/// Delivery mode of a [`Cart`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// Copied from the basket's `preparation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<String>,
}

/// Converts a past order's basket into a cart for the pricing endpoint.
///
/// Keeps each item's quantity and SKU and the basket's preparation mode.
/// A basket without items yields a cart without items.
#[must_use]
pub fn convert_order_to_cart(order: &Basket) -> Cart {
    let items = order
        .items
        .iter()
        .flatten()
        .map(|item| CartItem {
            quantity: item.quantity,
            sku: item.commerce.as_ref().and_then(|c| c.sku.clone()),
        })
        .collect();

    Cart {
        cart: CartContents {
            offers: Vec::new(),
            items,
        },
        delivery: Delivery {
            delivery_type: order.preparation.clone(),
        },
    }
}

/// Wire shape of the `me/orders` response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderHistory {
    #[serde(default, deserialize_with = "lenient_default")]
    order_history_items: Vec<OrderHistoryItem>,
}

#[derive(Debug, Deserialize)]
struct OrderHistoryItem {
    #[serde(default, deserialize_with = "lenient")]
    basket: Option<Basket>,
}

impl OrderHistory {
    /// Returns the basket of the most recent order, if any.
    pub(crate) fn into_last_basket(self) -> Option<Basket> {
        self.order_history_items
            .into_iter()
            .next()
            .and_then(|item| item.basket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::project;
    use serde_json::json;

    fn basket(value: serde_json::Value) -> Basket {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_convert_order_to_cart() {
        let order = basket(json!({
            "preparation": "pickup",
            "items": [{"quantity": 2, "commerce": {"sku": "SKU1"}}]
        }));

        assert_eq!(
            serde_json::to_value(convert_order_to_cart(&order)).unwrap(),
            json!({
                "cart": {"offers": [], "items": [{"quantity": 2, "sku": "SKU1"}]},
                "delivery": {"deliveryType": "pickup"}
            })
        );
    }

    #[test]
    fn test_convert_order_without_items_has_empty_items() {
        let cart = convert_order_to_cart(&basket(json!({"preparation": "InStore"})));
        assert!(cart.cart.items.is_empty());
        assert!(cart.cart.offers.is_empty());
        assert_eq!(cart.delivery.delivery_type.as_deref(), Some("InStore"));
    }

    #[test]
    fn test_convert_order_without_preparation() {
        let cart = convert_order_to_cart(&basket(json!({"items": []})));
        assert!(cart.delivery.delivery_type.is_none());
        assert_eq!(
            serde_json::to_value(&cart).unwrap(),
            json!({"cart": {"offers": [], "items": []}, "delivery": {}})
        );
    }

    #[test]
    fn test_convert_order_drops_item_details() {
        let order = basket(json!({
            "items": [
                {
                    "quantity": 1,
                    "commerce": {"sku": "11032614", "price": 4.45},
                    "product": {"name": "Latte"},
                    "childItems": [{"quantity": 1}]
                },
                {"product": {"name": "No quantity or sku"}}
            ]
        }));

        let cart = convert_order_to_cart(&order);
        assert_eq!(
            cart.cart.items,
            vec![
                CartItem {
                    quantity: Some(1),
                    sku: Some("11032614".to_string()),
                },
                CartItem::default(),
            ]
        );
    }

    #[test]
    fn test_convert_order_tolerates_unexpected_types() {
        let order = basket(json!({
            "preparation": 3,
            "items": [
                {"quantity": "two", "commerce": {"sku": 11_032_614}},
                {"quantity": 1, "commerce": "missing"}
            ]
        }));

        let cart = convert_order_to_cart(&order);
        assert_eq!(cart.delivery.delivery_type.as_deref(), Some("3"));
        assert_eq!(
            cart.cart.items,
            vec![
                CartItem {
                    quantity: None,
                    sku: Some("11032614".to_string()),
                },
                CartItem {
                    quantity: Some(1),
                    sku: None,
                },
            ]
        );
    }

    #[test]
    fn test_basket_with_non_list_items_has_no_items() {
        let cart = convert_order_to_cart(&basket(json!({"items": {"0": {"quantity": 1}}})));
        assert!(cart.cart.items.is_empty());
    }

    #[test]
    fn test_basket_round_trips_unknown_fields() {
        let original = json!({
            "preparation": "InStore",
            "items": [{"quantity": 1, "commerce": {"sku": "A", "price": 3}, "product": {"id": 7}}],
            "total": 3
        });
        let parsed = basket(original.clone());
        assert_eq!(serde_json::to_value(&parsed).unwrap(), original);
    }

    #[test]
    fn test_order_history_first_basket() {
        let history: OrderHistory = project(
            json!({"orderHistoryItems": [
                {"basket": {"preparation": "InStore"}},
                {"basket": {"preparation": "DriveThru"}}
            ]}),
            "me/orders",
        )
        .unwrap();

        let last = history.into_last_basket().unwrap();
        assert_eq!(last.preparation.as_deref(), Some("InStore"));
    }

    #[test]
    fn test_order_history_empty_or_missing() {
        let history: OrderHistory = project(json!({"orderHistoryItems": []}), "me/orders").unwrap();
        assert!(history.into_last_basket().is_none());

        let history: OrderHistory = project(json!({}), "me/orders").unwrap();
        assert!(history.into_last_basket().is_none());

        let history: OrderHistory = project(json!({"orderHistoryItems": [{}]}), "me/orders").unwrap();
        assert!(history.into_last_basket().is_none());
    }
}
