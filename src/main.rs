#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

mod analyzers;
mod data_retrieval;
mod errors;
mod match_stats;
mod pipeline;
mod report;
mod types;

use clap::{App, Arg};
use simplelog::{LevelFilter, SimpleLogger};

pub type BoxError = Box<dyn std::error::Error>;

lazy_static! {
    pub static ref CONFIG: config::Config = {
        let mut settings = config::Config::new();
        settings
            .merge(config::File::with_name("config/settings"))
            .expect("Unable to read config/settings file.");
        settings
    };
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    SimpleLogger::init(LevelFilter::Info, simplelog::Config::default())?;
    let arg_matches = App::new("pubgstats")
        .about("Summary statistics for the matches a squad played together")
        .arg(
            Arg::new("players")
                .about("Player names to analyze (defaults to the configured roster)")
                .multiple(true),
        )
        .get_matches();
    let names: Vec<String> = match arg_matches.values_of("players") {
        Some(values) => values.map(|s| s.to_string()).collect(),
        None => CONFIG
            .get::<Vec<String>>("roster")
            .expect("Field roster not set in config."),
    };
    pipeline::run_analytics(names).await?;
    Ok(())
}
