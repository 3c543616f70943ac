use super::args::{Cli, Commands};
use super::handlers;
use crate::context::InventoryContext;
use crate::logging::{self, LOG_FILE_NAME, LogTarget};
use anyhow::Result;
use shelf_runtime::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Browse);

    match command {
        Commands::Init { force } => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            handlers::init::handle(&data_dir, force)
        }

        Commands::List { format, expanded } => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            let context = InventoryContext::load(&data_dir, cli.source.as_deref(), cli.utc)?;
            handlers::list::handle(&context, format, expanded)
        }

        Commands::Browse => {
            logging::init(cli.log_level, LogTarget::File(data_dir.join(LOG_FILE_NAME)))?;
            let context = InventoryContext::load(&data_dir, cli.source.as_deref(), cli.utc)?;
            handlers::browse::handle(&context)
        }
    }
}
