mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::BrowseWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in wayfinder_tui::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let log_file = wayfinder::logging::initialize()?;

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
        if let Some(path) = &log_file {
            println!("  Log file: {}", path.display());
        }
    }

    run_browse(cli.output, resolved)
}

/// Run the interactive session and print the visit trail in the chosen
/// format.
fn run_browse(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    let workflow = BrowseWorkflow::from_config(settings)?;
    let outcome = workflow.run()?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
