use aws_sdk_dynamodb::primitives::DateTimeFormat;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, GlobalSecondaryIndexDescription, KeySchemaElement,
    LocalSecondaryIndexDescription, Projection, ProvisionedThroughputDescription,
    TableDescription,
};
use serde::Serialize;

/// Point-in-time snapshot of a table's description.
///
/// Field names follow the DescribeTable response so the JSON output reads the
/// same as the AWS console and CLI. Nothing here is cached; every describe call
/// produces a fresh snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableMetadata {
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_arn: Option<String>,
    pub table_status: Option<String>,
    pub item_count: Option<i64>,
    pub table_size_bytes: Option<i64>,
    pub creation_date_time: Option<String>,
    pub billing_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<Throughput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_schema: Vec<KeyElement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribute_definitions: Vec<AttributeSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<IndexSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub local_secondary_indexes: Vec<IndexSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyElement {
    pub attribute_name: String,
    pub key_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeSummary {
    pub attribute_name: String,
    pub attribute_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexSummary {
    pub index_name: Option<String>,
    /// Local indexes have no status of their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_status: Option<String>,
    pub item_count: Option<i64>,
    pub key_schema: Vec<KeyElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<ProjectionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<Throughput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectionSummary {
    pub projection_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub non_key_attributes: Vec<String>,
}

/// Capacity units; absent for on-demand tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Throughput {
    pub read_capacity_units: Option<i64>,
    pub write_capacity_units: Option<i64>,
}

impl From<&Projection> for ProjectionSummary {
    fn from(projection: &Projection) -> Self {
        Self {
            projection_type: projection.projection_type().map(|t| t.as_str().to_string()),
            non_key_attributes: projection.non_key_attributes().to_vec(),
        }
    }
}

impl From<&ProvisionedThroughputDescription> for Throughput {
    fn from(throughput: &ProvisionedThroughputDescription) -> Self {
        Self {
            read_capacity_units: throughput.read_capacity_units(),
            write_capacity_units: throughput.write_capacity_units(),
        }
    }
}

impl From<&KeySchemaElement> for KeyElement {
    fn from(element: &KeySchemaElement) -> Self {
        Self {
            attribute_name: element.attribute_name().to_string(),
            key_type: element.key_type().as_str().to_string(),
        }
    }
}

impl From<&AttributeDefinition> for AttributeSummary {
    fn from(definition: &AttributeDefinition) -> Self {
        Self {
            attribute_name: definition.attribute_name().to_string(),
            attribute_type: definition.attribute_type().as_str().to_string(),
        }
    }
}

impl From<&GlobalSecondaryIndexDescription> for IndexSummary {
    fn from(index: &GlobalSecondaryIndexDescription) -> Self {
        Self {
            index_name: index.index_name().map(str::to_string),
            index_status: index.index_status().map(|s| s.as_str().to_string()),
            item_count: index.item_count(),
            key_schema: index.key_schema().iter().map(KeyElement::from).collect(),
            projection: index.projection().map(ProjectionSummary::from),
            provisioned_throughput: index.provisioned_throughput().map(Throughput::from),
        }
    }
}

impl From<&LocalSecondaryIndexDescription> for IndexSummary {
    fn from(index: &LocalSecondaryIndexDescription) -> Self {
        Self {
            index_name: index.index_name().map(str::to_string),
            index_status: None,
            item_count: index.item_count(),
            key_schema: index.key_schema().iter().map(KeyElement::from).collect(),
            projection: index.projection().map(ProjectionSummary::from),
            provisioned_throughput: None,
        }
    }
}

impl From<&TableDescription> for TableMetadata {
    fn from(table: &TableDescription) -> Self {
        Self {
            table_name: table.table_name().map(str::to_string),
            table_arn: table.table_arn().map(str::to_string),
            table_status: table.table_status().map(|s| s.as_str().to_string()),
            item_count: table.item_count(),
            table_size_bytes: table.table_size_bytes(),
            // Timestamps are not JSON-native; keep them as RFC 3339 text.
            creation_date_time: table
                .creation_date_time()
                .and_then(|t| t.fmt(DateTimeFormat::DateTime).ok()),
            billing_mode: table
                .billing_mode_summary()
                .and_then(|b| b.billing_mode())
                .map(|m| m.as_str().to_string()),
            // On-demand tables report zero capacity units; only show real ones.
            provisioned_throughput: table
                .provisioned_throughput()
                .filter(|t| {
                    t.read_capacity_units().unwrap_or(0) > 0
                        || t.write_capacity_units().unwrap_or(0) > 0
                })
                .map(Throughput::from),
            table_class: table
                .table_class_summary()
                .and_then(|c| c.table_class())
                .map(|c| c.as_str().to_string()),
            deletion_protection_enabled: table.deletion_protection_enabled(),
            key_schema: table.key_schema().iter().map(KeyElement::from).collect(),
            attribute_definitions: table
                .attribute_definitions()
                .iter()
                .map(AttributeSummary::from)
                .collect(),
            global_secondary_indexes: table
                .global_secondary_indexes()
                .iter()
                .map(IndexSummary::from)
                .collect(),
            local_secondary_indexes: table
                .local_secondary_indexes()
                .iter()
                .map(IndexSummary::from)
                .collect(),
            stream_enabled: table
                .stream_specification()
                .map(|s| s.stream_enabled()),
        }
    }
}

/// Summary statistics projected from a [`TableMetadata`].
///
/// Always exactly these six fields, in this order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableStats {
    pub table_name: Option<String>,
    pub status: Option<String>,
    pub item_count: i64,
    pub table_size_bytes: i64,
    pub creation_date: Option<String>,
    pub billing_mode: Option<String>,
}

impl From<&TableMetadata> for TableStats {
    fn from(metadata: &TableMetadata) -> Self {
        Self {
            table_name: metadata.table_name.clone(),
            status: metadata.table_status.clone(),
            item_count: metadata.item_count.unwrap_or(0),
            table_size_bytes: metadata.table_size_bytes.unwrap_or(0),
            creation_date: metadata.creation_date_time.clone(),
            billing_mode: metadata.billing_mode.clone(),
        }
    }
}
