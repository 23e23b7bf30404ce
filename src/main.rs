use clap::Parser;
use tally::cli::{Cli, Command};
use tally::config::Config;
use tally::logging::{default_log_path, init_tracing, LogTarget};
use tally::replay::replay_file;
use tally::store::ScoreStore;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let target = match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Some(_)) => LogTarget::Stderr,
        (None, None) => LogTarget::File(default_log_path()),
    };
    init_tracing(cli.verbose, &target)?;
    tracing::info!("tally v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    match &cli.command {
        Some(Command::ShowConfig) => {
            print!("{}", config.to_toml()?);
        }
        Some(Command::Replay { file }) => {
            let store = ScoreStore::from_config(&config)?;
            let summary = replay_file(&store, file)?;
            println!("{}", summary.final_score);
        }
        None => {
            let store = ScoreStore::from_config(&config)?;
            tally::ui::runtime::run(store, &config.ui)?;
        }
    }
    Ok(())
}
