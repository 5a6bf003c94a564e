//! Desktop entry point for the terrain painting editor

use clap::Parser;
use terrabrush::io::cli::Cli;
use terrabrush::io::logging::init_logging;
use terrabrush::terrain::PaintSession;
use terrabrush::ui::app::run_editor;

fn main() -> terrabrush::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let config = cli.config()?;
    // Never open the window on a map that failed to load
    let session = PaintSession::open(&config).inspect_err(|e| {
        tracing::error!(error = %e, "cannot start editor");
    })?;

    run_editor(session, &config)
}
