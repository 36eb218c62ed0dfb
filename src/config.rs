use aws_config::{BehaviorVersion, Region, SdkConfig};

pub const DEFAULT_REGION: &str = "eu-central-1";
pub const DEFAULT_PROFILE: &str = "infinite-nasa-apod-dev";
pub const DEFAULT_TABLE: &str = "infinite-nasa-apod-dev-content";

// The "latest entries" query is pinned to one table, index and partition.
pub const LATEST_TABLE: &str = "infinite-nasa-apod-dev-content";
pub const LATEST_INDEX: &str = "gsi_latest";
pub const LATEST_PARTITION_KEY: &str = "pk";
pub const LATEST_PARTITION_VALUE: &str = "LATEST";

/// Primary key attribute of the content table.
pub const DATE_KEY: &str = "date";

pub const DEFAULT_LIMIT: u32 = 10;

/// Session settings resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub region: String,
    pub profile: String,
    pub table: String,
    pub endpoint_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            table: DEFAULT_TABLE.to_string(),
            endpoint_url: None,
        }
    }
}

impl Settings {
    /// Returns the per-command table override, or the global table.
    pub fn table_or<'a>(&'a self, table: Option<&'a str>) -> &'a str {
        table.unwrap_or(&self.table)
    }

    /// Resolves the SDK configuration for the named profile and region.
    ///
    /// Credentials come from the default provider chain, so `AWS_*` variables
    /// (including those loaded from `.env`) take precedence over the profile.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .profile_name(&self.profile);

        if let Some(url) = &self.endpoint_url {
            loader = loader.endpoint_url(url);
        }

        loader.load().await
    }
}
