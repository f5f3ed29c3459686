use acejump_bin::{cli::Cli, commands, paths};
use acejump_config::Config;
use acejump_log::LogConfig;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let _log_guard = match acejump_log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    }) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {e}");
            None
        },
    };

    let discovered = std::env::current_dir()
        .ok()
        .and_then(|dir| paths::discover(&dir));
    let config = Config::load_with_overrides(cli.config.as_deref(), discovered.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        });

    let stdout = std::io::stdout();
    let result = commands::jump::run(
        cli.command.kind(),
        cli.command.args(),
        config,
        &mut stdout.lock(),
    );

    if let Err(e) = result {
        eprintln!("Command failed: {e:#}");
        std::process::exit(1);
    }
}
