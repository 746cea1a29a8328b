use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use crate::dynamodb::Item;
use crate::error::WriteError;
use crate::importer::ItemWriter;

/// DynamoDB client wrapper used by the importer.
///
/// Holds a single `aws_sdk_dynamodb::Client` built from the ambient AWS
/// configuration (region, credentials and an optional `AWS_ENDPOINT_URL`
/// for DynamoDB Local). Requests are sent one at a time; the SDK's own
/// timeout and retry settings apply to each call.
///
/// # Operations
/// - **Put**: upsert an item. A put with an existing primary key replaces the stored item.
/// - **Get**: retrieve an item by its primary key
///
/// # Error Handling
///
/// `put_item` reports failures as [`WriteError`], separating errors the
/// service reported (throttling, validation, missing table, permissions)
/// from requests that never got a service response.
#[derive(Debug)]
pub struct DynamoDb {
    client: Client,
}

impl DynamoDb {
    /// Creates a new `DynamoDb` instance.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Gets an item from a DynamoDB table.
    #[allow(dead_code)]
    pub async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>> {
        let response = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(key.attributes))
            .send()
            .await?;

        Ok(response.item.map(|attrs| Item { attributes: attrs }))
    }
}

#[async_trait]
impl ItemWriter for DynamoDb {
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), WriteError> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item.attributes))
            .send()
            .await?;

        debug!("Item put into '{table_name}'");
        Ok(())
    }
}
