pub mod get;
pub mod init;
pub mod list;

use crate::cli::args::Command;
use crate::error::GnockError;

pub fn dispatch(command: Command) -> Result<(), GnockError> {
    match command {
        Command::Get {
            url,
            workspace,
            fetcher,
        } => get::run(&url, workspace, fetcher),
        Command::List { workspace } => list::run(workspace),
        Command::Init => init::run(),
    }
}
