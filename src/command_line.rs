use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use serde_json::{json, Value};
use std::future::Future;
use std::io::Write;

use crate::config::{Settings, DEFAULT_LIMIT, DEFAULT_PROFILE, DEFAULT_REGION, DEFAULT_TABLE};
use crate::format::{self, ItemKind, OutputFormat};
use crate::inspector::Inspector;
use crate::store::Store;

/// Read-only inspection of DynamoDB tables
#[derive(Parser, Debug)]
#[command(name = "apod-dynamodb-inspect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// AWS region
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// AWS credentials profile
    #[arg(long, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Table used when a subcommand does not name one
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Custom endpoint, e.g. http://localhost:8000 for DynamoDB Local
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log every remote call
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List all tables in the region
    ListTables,
    /// Show a table's description
    DescribeTable {
        /// Table name
        #[arg(long)]
        table: Option<String>,
    },
    /// Read the first page of a table
    ScanTable {
        /// Table name
        #[arg(long)]
        table: Option<String>,
        /// Maximum number of items
        #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,
        /// Render items as this kind instead of raw JSON
        #[arg(long, value_enum)]
        kind: Option<ItemKind>,
    },
    /// Latest APOD entries, newest first
    QueryApod {
        /// Maximum number of items
        #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,
    },
    /// Fetch one item by its date key
    GetItem {
        /// Date key (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Summary statistics of a table
    TableStats {
        /// Table name
        #[arg(long)]
        table: Option<String>,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            region: cli.region.clone(),
            profile: cli.profile.clone(),
            table: cli.table.clone(),
            endpoint_url: cli.endpoint_url.clone(),
        }
    }
}

/// Runs one invocation.
///
/// Without a subcommand the help text is written and `connect` is never called.
/// Otherwise a session is opened through `connect` (a failure there is fatal)
/// and exactly one operation is dispatched.
pub async fn execute<S, C, Fut>(cli: Cli, out: &mut impl Write, connect: C) -> Result<()>
where
    S: Store,
    C: FnOnce(Settings) -> Fut,
    Fut: Future<Output = Result<Inspector<S>>>,
{
    let settings = Settings::from(&cli);
    let Some(command) = cli.command else {
        Cli::command().write_help(out)?;
        writeln!(out)?;
        return Ok(());
    };

    let inspector = connect(settings.clone()).await?;
    dispatch(&inspector, &settings, command, cli.format, out).await
}

/// Invokes the operation for `command` and renders its result.
pub async fn dispatch<S: Store>(
    inspector: &Inspector<S>,
    settings: &Settings,
    command: Commands,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    if output == OutputFormat::Text {
        writeln!(out, "{}", format::rule())?;
    }

    match command {
        Commands::ListTables => {
            let tables = inspector.list_tables().await;
            match output {
                OutputFormat::Json => writeln!(out, "{}", format::render_json(&tables)?)?,
                OutputFormat::Text => {
                    writeln!(out, "DynamoDB tables in region {}:", inspector.region())?;
                    if !tables.is_empty() {
                        writeln!(out, "{}", format::bullet_list(&tables))?;
                    }
                }
            }
        }
        Commands::DescribeTable { table } => {
            let table = settings.table_or(table.as_deref());
            let metadata = inspector.describe_table(table).await;
            match (output, metadata) {
                (OutputFormat::Json, metadata) => {
                    writeln!(out, "{}", format::render_json(&metadata)?)?
                }
                (OutputFormat::Text, Some(metadata)) => {
                    writeln!(out, "Table description: {table}")?;
                    writeln!(out, "{}", format::render_json(&metadata)?)?;
                }
                (OutputFormat::Text, None) => {}
            }
        }
        Commands::ScanTable { table, limit, kind } => {
            let table = settings.table_or(table.as_deref());
            let items = inspector.scan_table(table, limit).await;
            match output {
                OutputFormat::Json => writeln!(out, "{}", format::render_items_json(&items)?)?,
                OutputFormat::Text => {
                    writeln!(out, "Scan of table: {table} (limit: {limit})")?;
                    writeln!(out, "Items found: {}", items.len())?;
                    for (i, item) in items.iter().enumerate() {
                        match kind {
                            Some(kind) => write!(out, "{}", format::render_item(item, kind))?,
                            None => {
                                writeln!(out, "\n--- Item {} ---", i + 1)?;
                                writeln!(out, "{}", format::render_json(&item.to_json())?)?;
                            }
                        }
                    }
                }
            }
        }
        Commands::QueryApod { limit } => {
            let items = inspector.query_indexed(limit).await;
            match output {
                OutputFormat::Json => writeln!(out, "{}", format::render_items_json(&items)?)?,
                OutputFormat::Text => {
                    writeln!(out, "APOD entries (limit: {limit})")?;
                    writeln!(out, "Items found: {}", items.len())?;
                    for item in &items {
                        writeln!(out, "{}", format::render_item(item, ItemKind::Apod))?;
                    }
                }
            }
        }
        Commands::GetItem { date } => {
            let date = date.format("%Y-%m-%d").to_string();
            let item = inspector.get_item_by_date(&settings.table, &date).await;
            match (output, item) {
                (OutputFormat::Json, item) => {
                    let value = item.map_or(Value::Null, |i| i.to_json());
                    writeln!(out, "{}", format::render_json(&value)?)?;
                }
                (OutputFormat::Text, Some(item)) => {
                    writeln!(out, "Item for date: {date}")?;
                    writeln!(out, "{}", format::render_json(&item.to_json())?)?;
                }
                (OutputFormat::Text, None) => {
                    writeln!(out, "No item found for date {date}")?;
                }
            }
        }
        Commands::TableStats { table } => {
            let table = settings.table_or(table.as_deref());
            let stats = inspector.table_stats(table).await;
            match (output, stats) {
                (OutputFormat::Json, Some(stats)) => {
                    writeln!(out, "{}", format::render_json(&stats)?)?
                }
                (OutputFormat::Json, None) => {
                    writeln!(out, "{}", format::render_json(&json!({}))?)?
                }
                (OutputFormat::Text, Some(stats)) => {
                    writeln!(
                        out,
                        "Table statistics: {table} (region {})",
                        inspector.region()
                    )?;
                    writeln!(out, "{}", format::render_json(&stats)?)?;
                }
                (OutputFormat::Text, None) => {
                    writeln!(out, "Could not read statistics for table {table}")?;
                }
            }
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_defaults_apply() {
        let cli = Cli::parse_from(["apod-dynamodb-inspect", "list-tables"]);
        assert_eq!(Settings::from(&cli), Settings::default());
        assert_eq!(cli.command, Some(Commands::ListTables));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn subcommand_table_overrides_global() {
        let cli = Cli::parse_from([
            "apod-dynamodb-inspect",
            "--table",
            "global-table",
            "scan-table",
            "--table",
            "local-table",
            "--limit",
            "3",
        ]);
        assert_eq!(cli.table, "global-table");
        assert_eq!(
            cli.command,
            Some(Commands::ScanTable {
                table: Some("local-table".into()),
                limit: 3,
                kind: None,
            })
        );
    }

    #[test]
    fn get_item_requires_a_valid_date() {
        assert!(Cli::try_parse_from(["apod-dynamodb-inspect", "get-item"]).is_err());
        assert!(
            Cli::try_parse_from(["apod-dynamodb-inspect", "get-item", "--date", "2024-13-01"])
                .is_err()
        );

        let cli = Cli::parse_from(["apod-dynamodb-inspect", "get-item", "--date", "2024-01-01"]);
        assert_eq!(
            cli.command,
            Some(Commands::GetItem {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            })
        );
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(
            Cli::try_parse_from(["apod-dynamodb-inspect", "query-apod", "--limit", "0"]).is_err()
        );
    }

    #[test]
    fn help_shows_the_description_once() {
        let cmd = Cli::command();
        assert_eq!(
            cmd.get_about().map(ToString::to_string).as_deref(),
            Some("Read-only inspection of DynamoDB tables")
        );
        assert!(cmd.get_long_about().is_none());

        let help = cmd.clone().render_help().to_string();
        assert_eq!(help.matches("Read-only inspection of DynamoDB tables").count(), 1);
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["apod-dynamodb-inspect"]);
        assert!(cli.command.is_none());
    }
}
