use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;
use subnet_explorer::cli::Cli;
use subnet_explorer::config::Config;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from(&cli.global);

    init_logging(&config.log_config);
    if !config.color {
        colored::control::set_override(false);
    }
    log::info!("#Start main() {:?}", cli.command);

    match subnet_explorer::run(&config, &cli.command) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            log::warn!("{e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// log4rs from file, or warnings to stderr when the file is missing.
fn init_logging(log_config: &Path) {
    if log_config.exists() {
        if let Err(e) = log4rs::init_file(log_config, Default::default()) {
            eprintln!("Error initializing log4rs from {}: {e}", log_config.display());
        }
        return;
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing log4rs: {e}");
            }
        }
        Err(e) => eprintln!("Error building log4rs config: {e}"),
    }
}
