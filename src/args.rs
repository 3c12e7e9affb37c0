use std::{fs::File, io, sync::Mutex};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Poll players for the current track every X seconds
    #[clap(long, short, default_value_t = 1.0)]
    pub poll_every: f64,
    /// Volume a muted player is restored to once the advertisement ends
    #[clap(long, short, default_value_t = 1.0)]
    pub restore_volume: f64,
    /// File to write the log to. If not specified, logs will be written to stderr.
    #[clap(long, short)]
    log_file: Option<String>,
    /// Player names to watch. If not specified, watches all available players.
    #[clap(long, default_values_t = ["all".to_string()])]
    pub player: Vec<String>,
}

impl Args {
    /// Build the tracing subscriber using parameters from the command line arguments
    ///
    /// # Panics
    ///
    /// Panics if the log file cannot be opened.
    pub fn init_tracing_subscriber(&self) {
        let builder = tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(EnvFilter::from_default_env());

        match self.log_file.as_ref() {
            None => builder.with_writer(io::stderr).init(),
            Some(f) => builder
                .with_writer(Mutex::new(File::create(f).unwrap()))
                .init(),
        }
    }
}
