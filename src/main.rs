use anyhow::{anyhow, Result};
use clap::Parser;

use termedit::cli::CliArgs;
use termedit::editable::EditCommand;
use termedit::{shell, EditorConfig, Session};

fn main() -> Result<()> {
    termedit::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    let mut config = EditorConfig::load();
    startup.apply_to(&mut config);
    tracing::debug!(?config, "Starting termedit");

    let mut session = Session::new(&config);
    if let Some(path) = &startup.path {
        session
            .open_or_create(path, startup.encoding)
            .map_err(|e| anyhow!(Session::open_error_message(path, &e)))?;
    }
    if let Some(position) = startup.initial_position {
        session.execute(EditCommand::MoveCursor {
            position,
            extend: false,
        })?;
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(&mut session, stdin.lock(), stdout.lock())
}
