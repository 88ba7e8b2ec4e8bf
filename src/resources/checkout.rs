//! Checkout types: priced orders and submissions.
//!
//! Pricing a cart returns a [`PricedOrder`], an upstream-issued quote that
//! must be passed back unchanged to submit the order. Its fields can be read
//! but not modified from outside the crate.

use serde::{Deserialize, Serialize};

use super::{lenient, lenient_string};
use crate::clients::InvalidHttpRequestError;

/// Tender type for stored-value card payments.
pub const STORED_VALUE_TENDER: &str = "SVC";

/// A price quote for a cart at a specific store.
///
/// Projection of the pricing response to exactly `orderToken`,
/// `summary.totalAmount`, `store.storeNumber` and `signature`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricedOrder {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    order_token: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    summary: Option<PricedSummary>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    store: Option<PricedStore>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    signature: Option<String>,
}

/// The `summary` part of a [`PricedOrder`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricedSummary {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    total_amount: Option<serde_json::Number>,
}

/// The `store` part of a [`PricedOrder`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PricedStore {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    store_number: Option<String>,
}

impl PricedOrder {
    /// Drops nested objects that carry none of the projected fields.
    pub(crate) fn normalized(mut self) -> Self {
        if self
            .summary
            .as_ref()
            .map_or(false, |s| s.total_amount.is_none())
        {
            self.summary = None;
        }
        if self
            .store
            .as_ref()
            .map_or(false, |s| s.store_number.is_none())
        {
            self.store = None;
        }
        self
    }

    /// Returns the order token.
    #[must_use]
    pub fn order_token(&self) -> Option<&str> {
        self.order_token.as_deref()
    }

    /// Returns the quoted total.
    #[must_use]
    pub fn total_amount(&self) -> Option<&serde_json::Number> {
        self.summary.as_ref().and_then(|s| s.total_amount.as_ref())
    }

    /// Returns the number of the store the quote is for.
    #[must_use]
    pub fn store_number(&self) -> Option<&str> {
        self.store.as_ref().and_then(|s| s.store_number.as_deref())
    }

    /// Returns the quote signature.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Builds the submission body paying the full total with one card.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::IncompletePricedOrder`] if the quote
    /// has no total.
    pub fn submit_request(
        &self,
        card_id: &str,
    ) -> Result<SubmitOrderRequest, InvalidHttpRequestError> {
        let amount = self
            .total_amount()
            .ok_or(InvalidHttpRequestError::IncompletePricedOrder {
                field: "summary.totalAmount",
            })?;

        Ok(SubmitOrderRequest {
            signature: self.signature.clone(),
            tenders: vec![Tender::stored_value(amount.clone(), card_id)],
        })
    }
}

/// A payment instrument attached to an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    /// Amount charged to this tender.
    pub amount_to_charge: serde_json::Number,
    /// Tender type (`"SVC"` for stored-value cards).
    #[serde(rename = "type")]
    pub tender_type: String,
    /// Card identifier.
    pub id: String,
}

impl Tender {
    /// Creates a stored-value card tender.
    #[must_use]
    pub fn stored_value(amount_to_charge: serde_json::Number, card_id: impl Into<String>) -> Self {
        Self {
            amount_to_charge,
            tender_type: STORED_VALUE_TENDER.to_string(),
            id: card_id.into(),
        }
    }
}

/// Body of an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitOrderRequest {
    /// Signature of the priced order being submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Payment instruments.
    pub tenders: Vec<Tender>,
}
