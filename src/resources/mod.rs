//! Typed projections of Starbucks API payloads.
//!
//! Upstream responses are much larger than what the client exposes. Each type
//! in this module selects a fixed subset of fields, and every field is
//! optional: a field missing upstream is `None` in the projection and is
//! omitted again when the projection is serialized. A field of an
//! unexpected JSON type is read as missing rather than failing the call;
//! text fields keep numeric values as their decimal text.
//!
//! - [`Store`] and [`StoreQuery`]: nearby store lookup
//! - [`LoyaltyCard`]: stored-value cards
//! - [`Basket`], [`Cart`] and [`convert_order_to_cart`]: reordering
//! - [`PricedOrder`], [`Tender`] and [`SubmitOrderRequest`]: checkout

mod card;
mod checkout;
mod order;
mod store;

pub use card::LoyaltyCard;
pub use checkout::{PricedOrder, PricedStore, PricedSummary, SubmitOrderRequest, Tender};
pub use order::{
    convert_order_to_cart, Basket, BasketItem, Cart, CartContents, CartItem, Commerce, Delivery,
};
pub use store::{Store, StoreQuery};

pub(crate) use order::OrderHistory;
pub(crate) use store::NearbyStoresResponse;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::clients::InvalidResponseError;

/// Deserializes a response body into a projection.
///
/// A `null` body (empty upstream response) yields the projection's default.
pub(crate) fn project<T>(body: serde_json::Value, path: &str) -> Result<T, InvalidResponseError>
where
    T: DeserializeOwned + Default,
{
    if body.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(body).map_err(|e| InvalidResponseError {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Treats `null` or a value of the wrong JSON type the same as a missing field.
pub(crate) fn lenient_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Reads an optional field, mapping a value of the wrong JSON type to `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Reads an optional text field. Numbers and booleans are kept as their
/// JSON text; objects, arrays and `null` become `None`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Wrapper {
        #[serde(default, deserialize_with = "lenient_default")]
        values: Vec<u32>,
        #[serde(default, deserialize_with = "lenient_string")]
        label: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        count: Option<u32>,
    }

    #[test]
    fn test_project_null_body_is_default() {
        let wrapper: Wrapper = project(serde_json::Value::Null, "test").unwrap();
        assert_eq!(wrapper, Wrapper::default());
    }

    #[test]
    fn test_project_reports_path_on_mismatch() {
        let err = project::<Vec<u32>>(json!({"values": [1]}), "me/cards").unwrap_err();
        assert_eq!(err.path, "me/cards");
    }

    #[test]
    fn test_lenient_default_ignores_wrong_type() {
        let wrapper: Wrapper = serde_json::from_value(json!({"values": "nope"})).unwrap();
        assert!(wrapper.values.is_empty());

        let wrapper: Wrapper = serde_json::from_value(json!({"values": {"a": 1}})).unwrap();
        assert!(wrapper.values.is_empty());
    }

    #[test]
    fn test_lenient_string_keeps_scalars_as_text() {
        let wrapper: Wrapper = serde_json::from_value(json!({"label": 1234})).unwrap();
        assert_eq!(wrapper.label.as_deref(), Some("1234"));

        let wrapper: Wrapper = serde_json::from_value(json!({"label": true})).unwrap();
        assert_eq!(wrapper.label.as_deref(), Some("true"));

        let wrapper: Wrapper = serde_json::from_value(json!({"label": {"nested": 1}})).unwrap();
        assert!(wrapper.label.is_none());

        let wrapper: Wrapper = serde_json::from_value(json!({"label": null})).unwrap();
        assert!(wrapper.label.is_none());
    }

    #[test]
    fn test_lenient_maps_wrong_type_to_none() {
        let wrapper: Wrapper = serde_json::from_value(json!({"count": "three"})).unwrap();
        assert!(wrapper.count.is_none());

        let wrapper: Wrapper = serde_json::from_value(json!({"count": 3})).unwrap();
        assert_eq!(wrapper.count, Some(3));
    }

    #[test]
    fn test_lenient_default_handles_null_and_missing() {
        let wrapper: Wrapper = serde_json::from_value(json!({"values": null})).unwrap();
        assert!(wrapper.values.is_empty());

        let wrapper: Wrapper = serde_json::from_value(json!({})).unwrap();
        assert!(wrapper.values.is_empty());

        let wrapper: Wrapper = serde_json::from_value(json!({"values": [1, 2]})).unwrap();
        assert_eq!(wrapper.values, vec![1, 2]);
    }
}
