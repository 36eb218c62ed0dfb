use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client};
use tracing::debug;

use crate::dynamodb::{Item, TableMetadata};
use crate::error::StoreError;
use crate::store::{IndexQuery, Store};

/// DynamoDB client wrapper for read-only inspection.
///
/// Every method maps to exactly one API call and never follows pagination
/// tokens: a scan or query returns the first page only, so a table larger than
/// the requested limit is truncated rather than read in full.
///
/// # Operations
///
/// - **ListTables**: names of the tables visible to the credentials
/// - **DescribeTable**: status, size and key schema of one table
/// - **Scan**: first page of items, no key condition
/// - **Query**: first page of items matching a partition key on an index
/// - **GetItem**: one item by primary key
///
/// # Example
///
/// ```rust
/// let config = aws_config::load_from_env().await;
/// let ddb = DynamoDb::new(&config);
/// ddb.check_auth().await?;
/// let names = ddb.list_tables().await?;
/// ```
#[derive(Debug, Clone)]
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

    /// Verifies credentials and reachability with a minimal `ListTables` call.
    pub async fn check_auth(&self) -> Result<(), StoreError> {
        self.client
            .list_tables()
            .limit(1)
            .send()
            .await
            .map_err(StoreError::from_sdk)?;
        Ok(())
    }
}

/// The SDK takes page sizes as `i32`.
fn page_limit(limit: u32) -> i32 {
    i32::try_from(limit).unwrap_or(i32::MAX)
}

#[async_trait]
impl Store for DynamoDb {
    async fn list_tables(&self) -> Result<Vec<String>, StoreError> {
        debug!("ListTables");
        let output = self
            .client
            .list_tables()
            .send()
            .await
            .map_err(StoreError::from_sdk)?;
        Ok(output.table_names.unwrap_or_default())
    }

    async fn describe_table(&self, table: &str) -> Result<TableMetadata, StoreError> {
        debug!("DescribeTable '{table}'");
        let output = self
            .client
            .describe_table()
            .table_name(table)
            .send()
            .await
            .map_err(StoreError::from_sdk)?;

        output
            .table
            .as_ref()
            .map(TableMetadata::from)
            .ok_or_else(|| StoreError::NotFound(format!("no description returned for '{table}'")))
    }

    async fn scan(&self, table: &str, limit: u32) -> Result<Vec<Item>, StoreError> {
        debug!("Scan '{table}' (limit {limit})");
        let output = self
            .client
            .scan()
            .table_name(table)
            .limit(page_limit(limit))
            .send()
            .await
            .map_err(StoreError::from_sdk)?;

        Ok(output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(Item::from)
            .collect())
    }

    async fn query_index(&self, query: &IndexQuery<'_>) -> Result<Vec<Item>, StoreError> {
        debug!(
            "Query '{}' on index '{}' ({} = {})",
            query.table, query.index, query.partition_key, query.partition_value
        );
        let output = self
            .client
            .query()
            .table_name(query.table)
            .index_name(query.index)
            .key_condition_expression("#pk = :pkval")
            .expression_attribute_names("#pk", query.partition_key)
            .expression_attribute_values(
                ":pkval",
                AttributeValue::S(query.partition_value.to_string()),
            )
            .limit(page_limit(query.limit))
            .scan_index_forward(!query.newest_first)
            .send()
            .await
            .map_err(StoreError::from_sdk)?;

        Ok(output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(Item::from)
            .collect())
    }

    async fn get_item(&self, table: &str, key: &Item) -> Result<Option<Item>, StoreError> {
        debug!("GetItem '{table}'");
        let output = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(key.attributes.clone()))
            .send()
            .await
            .map_err(StoreError::from_sdk)?;

        Ok(output.item.map(Item::from))
    }
}
