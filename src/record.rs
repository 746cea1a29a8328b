use std::fmt;

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::dynamodb::Item;
use crate::error::RowError;

/// CSV column holding the partition key value.
pub const PARTITION_KEY_COLUMN: &str = "partition_key";

/// Value written to the sort key of every item.
pub const RANGE_KEY_VALUE: &str = "i";

/// One CSV row viewed through the header line.
///
/// Rows may be shorter or longer than the header. Missing trailing columns
/// read as absent; extra values are kept so diagnostics show the whole row.
pub struct Record<'h> {
    headers: &'h StringRecord,
    fields: StringRecord,
}

impl<'h> Record<'h> {
    pub fn new(headers: &'h StringRecord, fields: StringRecord) -> Self {
        Self { headers, fields }
    }

    /// Value of the named column. With duplicate header names the last one wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        let index = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| *header == column)
            .map(|(index, _)| index)
            .last()?;
        self.fields.get(index)
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (header, value) in self.headers.iter().zip(self.fields.iter()) {
            map.entry(&header, &value);
        }
        if self.fields.len() > self.headers.len() {
            let extra: Vec<&str> = self.fields.iter().skip(self.headers.len()).collect();
            map.entry(&"<extra>", &extra);
        }
        map.finish()
    }
}

/// The item written for each row: the row's partition key plus a fixed sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetItem {
    pub hash_key: String,
    pub range_key: String,
}

impl TargetItem {
    pub fn new(hash_key: impl Into<String>) -> Self {
        Self {
            hash_key: hash_key.into(),
            range_key: RANGE_KEY_VALUE.to_string(),
        }
    }

    /// Copies the `partition_key` column verbatim. Every other column is dropped.
    pub fn from_record(record: &Record<'_>) -> Result<Self, RowError> {
        let value = record
            .get(PARTITION_KEY_COLUMN)
            .ok_or(RowError::MissingField(PARTITION_KEY_COLUMN))?;
        if value.is_empty() {
            return Err(RowError::EmptyField(PARTITION_KEY_COLUMN));
        }
        Ok(Self::new(value))
    }

    pub fn to_item(&self) -> Result<Item, RowError> {
        Ok(Item::from_serializable(self)?)
    }
}
