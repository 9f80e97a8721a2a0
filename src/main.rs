use clap::Parser;
use colored::Colorize;
use lb_waf_export::{cli::Cli, config, exit_code, handle_export};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

async fn run(cli: Cli) -> lb_waf_export::Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let summary = handle_export(cli.export_options(), &config).await?;

    if !cli.quiet {
        println!(
            "{} CSV file '{}' generated successfully! ({} row(s) from {} namespace(s))",
            "✓".green(),
            summary.output.display(),
            summary.rows,
            summary.namespaces
        );
    }

    Ok(())
}
