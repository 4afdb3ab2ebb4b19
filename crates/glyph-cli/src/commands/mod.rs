pub mod inject;
pub mod scan;
pub mod url;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Scan(args) => scan::handle(args, flags),
        Commands::Url(args) => url::handle(args, flags),
        Commands::Inject(args) => inject::handle(args, flags),
    }
}
