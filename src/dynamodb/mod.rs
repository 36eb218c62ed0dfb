//! # DynamoDB Module
//!
//! Read-only access to Amazon DynamoDB tables.
//!
//! ## Components
//!
//! - `DynamoDb`: A client wrapper issuing one API call per operation.
//! - `Item`: An attribute map as returned by the store, convertible to JSON.
//! - `TableMetadata`: A serializable snapshot of a DescribeTable response.
//! - `TableStats`: The six-field summary projected from `TableMetadata`.
//!
//! ## Usage
//!
//! Credentials are resolved by the AWS default provider chain. Besides a named
//! profile, the following environment variables are honoured (a `.env` file is
//! loaded at startup):
//!
//! - `AWS_ACCESS_KEY_ID`: Your AWS access key ID.
//! - `AWS_SECRET_ACCESS_KEY`: Your AWS secret access key.
//! - `AWS_SESSION_TOKEN`: If you're using temporary credentials.
//! - `AWS_ENDPOINT_URL`: For using a custom endpoint (e.g., DynamoDB Local).

mod client;
mod item;
mod table;

pub use client::DynamoDb;
pub use item::Item;
pub use table::{TableMetadata, TableStats};
