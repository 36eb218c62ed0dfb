mod command_line;
mod config;
mod dynamodb;
mod error;
mod format;
mod inspector;
mod logging;
mod store;


use anyhow::Result;
use clap::Parser;

use crate::command_line::Cli;
use crate::inspector::Inspector;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;
    dotenv::dotenv().ok();

    let mut stdout = std::io::stdout();
    command_line::execute(cli, &mut stdout, Inspector::connect).await
}
