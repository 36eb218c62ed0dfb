use async_trait::async_trait;

use crate::dynamodb::{Item, TableMetadata};
use crate::error::StoreError;

/// Equality query against a secondary index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexQuery<'a> {
    pub table: &'a str,
    pub index: &'a str,
    pub partition_key: &'a str,
    pub partition_value: &'a str,
    pub limit: u32,
    /// Sort descending on the index sort key.
    pub newest_first: bool,
}

/// The remote calls the inspector needs, one round trip each.
///
/// Implementations report failures as-is; deciding what to do with them is left
/// to the caller.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_tables(&self) -> Result<Vec<String>, StoreError>;

    async fn describe_table(&self, table: &str) -> Result<TableMetadata, StoreError>;

    /// Reads a single page of at most `limit` items.
    async fn scan(&self, table: &str, limit: u32) -> Result<Vec<Item>, StoreError>;

    async fn query_index(&self, query: &IndexQuery<'_>) -> Result<Vec<Item>, StoreError>;

    async fn get_item(&self, table: &str, key: &Item) -> Result<Option<Item>, StoreError>;
}
