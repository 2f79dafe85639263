use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = lifeos::cli::Cli::parse();
    let config = lifeos::config::from_cli(&cli)?;

    match cli.command.clone() {
        Some(lifeos::cli::CliCommand::Tui(args)) => {
            lifeos::logging::init_file_tracing(config.log_path(), cli.log_filter.clone())?;
            lifeos::tui::run(config, args.view)?;
        }
        None => {
            lifeos::logging::init_file_tracing(config.log_path(), cli.log_filter.clone())?;
            lifeos::tui::run(config, lifeos::View::default())?;
        }
        Some(command) => {
            lifeos::logging::init_stderr_tracing(cli.log_filter.clone())?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            lifeos::commands::execute_blocking(&config, command, &mut handle)?;
        }
    }

    Ok(())
}
