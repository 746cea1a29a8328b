//! # DynamoDB Module
//!
//! Thin layer over the AWS SDK used to write imported rows.
//!
//! ## Components
//!
//! - `DynamoDb`: A client wrapper that implements [`ItemWriter`](crate::importer::ItemWriter).
//! - `Item`: A DynamoDB item built from any `serde::Serialize` value.
//!
//! ## Usage
//!
//! The client reads its settings from the standard AWS environment:
//!
//! - `AWS_ACCESS_KEY_ID`: Your AWS access key ID.
//! - `AWS_SECRET_ACCESS_KEY`: Your AWS secret access key.
//! - `AWS_REGION`: The AWS region where your DynamoDB tables are located.
//!
//! Optionally, you can also set:
//! - `AWS_SESSION_TOKEN`: If you're using temporary credentials.
//! - `AWS_ENDPOINT_URL`: For using a custom endpoint (e.g., for local development).
//!
//! ## Example
//!
//! ```ignore
//! let config = aws_config::load_from_env().await;
//! let ddb = DynamoDb::new(&config);
//!
//! let item = Item::from_serializable(&TargetItem::new("p1"))?;
//! ddb.put_item("imports", item).await?;
//! ```

mod client;
mod item;

pub use client::DynamoDb;
pub use item::Item;
