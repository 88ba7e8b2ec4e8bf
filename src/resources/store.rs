//! Store lookup types.

use serde::{Deserialize, Serialize};

use super::{lenient, lenient_default, lenient_string};

/// A store near the requested coordinates.
///
/// Projection of the upstream `stores[].store` record.
///
/// # Example
///
/// ```rust
/// use starbucks_api::resources::Store;
/// use serde_json::json;
///
/// let store: Store = serde_json::from_value(json!({
///     "id": "1234",
///     "name": "Brooklyn Heights",
///     "storeNumber": "7890-12345",
///     "phoneNumber": "555-0100"
/// }))
/// .unwrap();
///
/// assert_eq!(store.store_number.as_deref(), Some("7890-12345"));
/// assert!(store.address.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Upstream store identifier.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// Display name.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Store number, used to address pricing and submission endpoints.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub store_number: Option<String>,

    /// Postal address as returned upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<serde_json::Value>,
}

/// Parameters for a nearby-store search.
///
/// The defaults search a half-mile radius around downtown Brooklyn and
/// return up to 50 stores.
///
/// # Example
///
/// ```rust
/// use starbucks_api::resources::StoreQuery;
///
/// let query = StoreQuery::new(47.6097, -122.3422).limit(10).radius(1.5);
/// assert_eq!(query.latlng(), "47.6097,-122.3422");
///
/// let defaults = StoreQuery::default();
/// assert_eq!(defaults.limit, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreQuery {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Maximum number of stores to return.
    pub limit: u32,
    /// Search radius in miles.
    pub radius: f64,
}

impl StoreQuery {
    /// Default latitude.
    pub const DEFAULT_LATITUDE: f64 = 40.7033;
    /// Default longitude.
    pub const DEFAULT_LONGITUDE: f64 = -73.9881;
    /// Default result limit.
    pub const DEFAULT_LIMIT: u32 = 50;
    /// Default radius in miles.
    pub const DEFAULT_RADIUS: f64 = 0.5;

    /// Creates a query around the given coordinates with default limit and radius.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            limit: Self::DEFAULT_LIMIT,
            radius: Self::DEFAULT_RADIUS,
        }
    }

    /// Sets the maximum number of stores to return.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the search radius in miles.
    #[must_use]
    pub const fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Returns the `latlng` query parameter value.
    #[must_use]
    pub fn latlng(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl Default for StoreQuery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATITUDE, Self::DEFAULT_LONGITUDE)
    }
}

/// Wire shape of the `stores/nearby` response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NearbyStoresResponse {
    #[serde(default, deserialize_with = "lenient_default")]
    stores: Vec<NearbyStore>,
}

#[derive(Debug, Deserialize)]
struct NearbyStore {
    #[serde(default, deserialize_with = "lenient")]
    store: Option<Store>,
}

impl NearbyStoresResponse {
    /// Projects every entry to a [`Store`]; entries without a store become empty projections.
    pub(crate) fn into_stores(self) -> Vec<Store> {
        self.stores
            .into_iter()
            .map(|entry| entry.store.unwrap_or_default())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::project;
    use serde_json::json;

    #[test]
    fn test_store_query_defaults() {
        let query = StoreQuery::default();
        assert_eq!(query.latitude, 40.7033);
        assert_eq!(query.longitude, -73.9881);
        assert_eq!(query.limit, 50);
        assert_eq!(query.radius, 0.5);
        assert_eq!(query.latlng(), "40.7033,-73.9881");
    }

    #[test]
    fn test_store_projection_drops_unknown_fields() {
        let store: Store = serde_json::from_value(json!({
            "id": "1",
            "name": "A",
            "storeNumber": "111-222",
            "address": {"city": "Brooklyn"},
            "hoursNext7Days": []
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&store).unwrap(),
            json!({"id": "1", "name": "A", "storeNumber": "111-222", "address": {"city": "Brooklyn"}})
        );
    }

    #[test]
    fn test_store_projection_keeps_absent_fields_absent() {
        let store: Store = serde_json::from_value(json!({"name": "Only Name"})).unwrap();
        assert_eq!(serde_json::to_value(&store).unwrap(), json!({"name": "Only Name"}));
    }

    #[test]
    fn test_store_projection_tolerates_unexpected_types() {
        let store: Store = serde_json::from_value(json!({
            "id": 1234,
            "name": ["not", "text"],
            "storeNumber": "111-222"
        }))
        .unwrap();

        assert_eq!(store.id.as_deref(), Some("1234"));
        assert!(store.name.is_none());
        assert_eq!(store.store_number.as_deref(), Some("111-222"));
    }

    #[test]
    fn test_nearby_entry_with_non_object_store_is_empty_projection() {
        let response: NearbyStoresResponse = project(
            json!({"stores": [{"store": "closed"}, {"store": {"id": 7}}]}),
            "stores/nearby",
        )
        .unwrap();
        let stores = response.into_stores();
        assert_eq!(stores[0], Store::default());
        assert_eq!(stores[1].id.as_deref(), Some("7"));
    }

    #[test]
    fn test_nearby_response_without_stores_is_empty() {
        let response: NearbyStoresResponse = project(json!({}), "stores/nearby").unwrap();
        assert!(response.into_stores().is_empty());

        let response: NearbyStoresResponse =
            project(json!({"stores": null}), "stores/nearby").unwrap();
        assert!(response.into_stores().is_empty());

        let response: NearbyStoresResponse =
            project(serde_json::Value::Null, "stores/nearby").unwrap();
        assert!(response.into_stores().is_empty());
    }

    #[test]
    fn test_nearby_entry_without_store_is_empty_projection() {
        let response: NearbyStoresResponse =
            project(json!({"stores": [{"distance": 0.1}]}), "stores/nearby").unwrap();
        assert_eq!(response.into_stores(), vec![Store::default()]);
    }
}
