use anyhow::{anyhow, Result};
use tracing::{error, info};

use crate::config::{
    Settings, DATE_KEY, LATEST_INDEX, LATEST_PARTITION_KEY, LATEST_PARTITION_VALUE, LATEST_TABLE,
};
use crate::dynamodb::{DynamoDb, Item, TableMetadata, TableStats};
use crate::error::StoreError;
use crate::store::{IndexQuery, Store};

/// Read-only data access over a [`Store`].
///
/// Every operation performs one remote call. Failures are logged with the
/// operation, the target and the cause, then turned into an empty or absent
/// result: callers always get a value back and can still print a summary.
pub struct Inspector<S> {
    store: S,
    region: String,
}

impl Inspector<DynamoDb> {
    /// Opens a session for the configured profile and region and checks it with one call.
    ///
    /// This is the only fallible operation: without a working session nothing
    /// else can succeed.
    pub async fn connect(settings: Settings) -> Result<Self> {
        let sdk_config = settings.load_sdk_config().await;
        let ddb = DynamoDb::new(&sdk_config);

        match ddb.check_auth().await {
            Ok(()) => {
                info!(
                    "Connected to DynamoDB (profile: {}, region: {})",
                    settings.profile, settings.region
                );
                Ok(Self::new(ddb, settings.region))
            }
            Err(e) => {
                error!("Failed to connect to DynamoDB [{}]: {e}", e.kind());
                error!(
                    "Check the AWS credentials for profile '{}'",
                    settings.profile
                );
                Err(anyhow!("Connection to DynamoDB failed: {e}"))
            }
        }
    }
}

impl<S: Store> Inspector<S> {
    pub fn new(store: S, region: impl Into<String>) -> Self {
        Self {
            store,
            region: region.into(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub async fn list_tables(&self) -> Vec<String> {
        self.store
            .list_tables()
            .await
            .unwrap_or_else(|e| failed("list_tables", "*", e, Vec::new()))
    }

    pub async fn describe_table(&self, table: &str) -> Option<TableMetadata> {
        self.store
            .describe_table(table)
            .await
            .map(Some)
            .unwrap_or_else(|e| failed("describe_table", table, e, None))
    }

    /// First page of at most `limit` items; the rest of the table is not read.
    pub async fn scan_table(&self, table: &str, limit: u32) -> Vec<Item> {
        let mut items = self
            .store
            .scan(table, limit)
            .await
            .unwrap_or_else(|e| failed("scan_table", table, e, Vec::new()));
        items.truncate(limit as usize);
        items
    }

    /// Latest entries from the `gsi_latest` index, newest first.
    pub async fn query_indexed(&self, limit: u32) -> Vec<Item> {
        let query = IndexQuery {
            table: LATEST_TABLE,
            index: LATEST_INDEX,
            partition_key: LATEST_PARTITION_KEY,
            partition_value: LATEST_PARTITION_VALUE,
            limit,
            newest_first: true,
        };
        let mut items = self
            .store
            .query_index(&query)
            .await
            .unwrap_or_else(|e| failed("query_indexed", LATEST_TABLE, e, Vec::new()));
        items.truncate(limit as usize);
        items
    }

    pub async fn get_item(&self, table: &str, key: &Item) -> Option<Item> {
        self.store
            .get_item(table, key)
            .await
            .unwrap_or_else(|e| failed("get_item", table, e, None))
    }

    pub async fn get_item_by_date(&self, table: &str, date: &str) -> Option<Item> {
        let key = Item::new().set_string(DATE_KEY, date);
        self.get_item(table, &key).await
    }

    /// `None` when the table could not be described.
    pub async fn table_stats(&self, table: &str) -> Option<TableStats> {
        self.describe_table(table)
            .await
            .map(|metadata| TableStats::from(&metadata))
    }
}

fn failed<T>(operation: &str, target: &str, err: StoreError, fallback: T) -> T {
    error!("{operation} failed for table '{target}' [{}]: {err}", err.kind());
    fallback
}
