//! Form field mappings.
//!
//! A field mapping pairs an `<input id="...">` with the literal value to type
//! into it. Entries keep the order of the JSON file because the checkout form
//! reacts to fields being filled in sequence.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Errors raised while validating a field mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// A key the suite relies on is absent.
    #[error("missing required field `{0}`")]
    MissingKey(&'static str),
    /// A value is an object, array or null instead of text.
    #[error("field `{0}` must be a string or number")]
    NonScalar(String),
}

/// Ordered input-id to value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct FieldMapping(Vec<(String, String)>);

impl FieldMapping {
    /// Build a mapping from pairs, keeping their order.
    #[must_use]
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Value for an input id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn require(&self, key: &'static str) -> Result<&str, MappingError> {
        self.get(key).ok_or(MappingError::MissingKey(key))
    }
}

impl TryFrom<Map<String, Value>> for FieldMapping {
    type Error = MappingError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => Ok((key, s)),
                Value::Number(n) => Ok((key, n.to_string())),
                Value::Bool(b) => Ok((key, b.to_string())),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    Err(MappingError::NonScalar(key))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Checkout form values (`cart_mapping.json`).
///
/// The `bill_name` input doubles as the name the order is listed under in
/// the admin order table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FieldMapping")]
pub struct CheckoutForm {
    fields: FieldMapping,
}

impl CheckoutForm {
    /// Input id holding the billing name.
    pub const BILL_NAME: &'static str = "bill_name";

    /// All fields to type, in order.
    #[must_use]
    pub const fn fields(&self) -> &FieldMapping {
        &self.fields
    }

    /// Name the order is billed to.
    #[must_use]
    pub fn bill_name(&self) -> &str {
        self.fields.get(Self::BILL_NAME).unwrap_or_default()
    }
}

impl TryFrom<FieldMapping> for CheckoutForm {
    type Error = MappingError;

    fn try_from(fields: FieldMapping) -> Result<Self, Self::Error> {
        fields.require(Self::BILL_NAME)?;
        Ok(Self { fields })
    }
}

/// Coupon form values (`coupon_mapping.json`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FieldMapping")]
pub struct CouponForm {
    fields: FieldMapping,
}

impl CouponForm {
    /// Input id holding the coupon name shown in the listing.
    pub const NAME: &'static str = "ModuleCouponName";

    /// All fields to type, in order.
    #[must_use]
    pub const fn fields(&self) -> &FieldMapping {
        &self.fields
    }

    /// Coupon name expected in the admin listing.
    #[must_use]
    pub fn name(&self) -> &str {
        self.fields.get(Self::NAME).unwrap_or_default()
    }
}

impl TryFrom<FieldMapping> for CouponForm {
    type Error = MappingError;

    fn try_from(fields: FieldMapping) -> Result<Self, Self::Error> {
        fields.require(Self::NAME)?;
        Ok(Self { fields })
    }
}
