use ordergen::datagen::orders;
use ordergen::settings::{self, Settings};
use ordergen::Result;

use clap::{arg, Command};
use std::io::{self, BufWriter};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::fmt;

fn main() -> Result<()> {
    let start = Instant::now();

    // command line
    let matches = Command::new("ordergen")
        .version("0.1.0")
        .about("Generate SQL test data for the orders table")
        .arg(arg!(-c --config <FILE> "Configuration file").required(false))
        .arg(arg!(-n --records <RECORDS> "Number of orders to generate").required(false))
        .arg(arg!(-s --seed <SEED> "Seed the rng").required(false))
        .arg(arg!(-l --log <LOG> "Log level").required(false))
        .get_matches();

    // config file
    let file = matches.get_one::<String>("config").map(String::as_str);
    let mut config = settings::init_config(file)?;

    if let Some(n) = matches.get_one::<String>("records") {
        config.set("records", n.clone())?;
    }

    if let Some(s) = matches.get_one::<String>("seed") {
        config.set("set_seed", true)?;
        config.set("seed", s.clone())?;
    }

    if let Some(l) = matches.get_one::<String>("log") {
        config.set("log", l.clone())?;
    }

    let settings = Settings::from_config(config)?;

    // logging, stdout carries the sql
    let (non_blocking, _guard) = tracing_appender::non_blocking(io::stderr());
    let subscriber = fmt::Subscriber::builder()
        .with_max_level(settings.log)
        .with_target(false)
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("generating {} orders", settings.records);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    orders::run(&settings, &mut out)?;

    info!("Time taken to generate data is: {:?}", start.elapsed());

    Ok(())
}
