use aws_sdk_dynamodb::types::AttributeValue;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;

/// A DynamoDB item: a map from attribute name to typed attribute value.
///
/// Items are built from plain Rust structs through `serde_dynamo`, so the
/// attribute names and types follow the struct's serde representation.
/// A `String` field becomes an `S` attribute, numbers become `N`, and so on.
///
/// # Primary Key
///
/// - Every item in a table is uniquely identified by its primary key.
/// - The primary key can be simple (partition key only) or composite (partition key and sort key).
/// - A put with an existing primary key replaces the stored item.
///
/// # Item Size Limit
///
/// - The maximum item size in DynamoDB is 400 KB, including both attribute names and values.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) attributes: HashMap<String, AttributeValue>,
}

impl Item {
    /// Serializes `value` into an item.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_dynamo::Error> {
        let attributes = serde_dynamo::to_item(value)?;
        Ok(Self { attributes })
    }

    /// Deserializes the item back into a typed value.
    #[allow(dead_code)]
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_dynamo::Error> {
        serde_dynamo::from_item(self.attributes.clone())
    }

    /// Gets the value of an attribute as a string.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a string.
    #[allow(dead_code)]
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.attributes.get(key).and_then(|av| av.as_s().ok())
    }
}
