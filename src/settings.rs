use crate::error::GeneratorError;
use crate::Result;

use config::{Config, Environment, File};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::Level;

/// Configuration file read when none is named on the command line.
pub const CONFIG_FILE_PATH: &str = "Generator.toml";

/// Number of orders generated unless configured otherwise.
pub const DEFAULT_RECORDS: i64 = 200_000;

/// Prefix of environment variables overriding the configuration file.
const ENV_PREFIX: &str = "ORDERGEN";

/// Settings as merged from defaults, file, environment and command line.
#[derive(Debug, Deserialize)]
struct RawSettings {
    records: i64,
    set_seed: bool,
    seed: i64,
    log: String,
}

/// Validated generator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Number of orders to generate.
    pub records: u64,
    /// Seed for the rng, `None` draws from entropy.
    pub seed: Option<u64>,
    /// Max level of diagnostics written to stderr.
    pub log: Level,
}

/// Build the layered configuration.
///
/// Defaults are overridden by the configuration file, which is overridden by `ORDERGEN_*`
/// environment variables. A missing default file is skipped, a missing named file is an error.
pub fn init_config(file: Option<&str>) -> Result<Config> {
    let mut settings = Config::default();
    settings.set_default("records", DEFAULT_RECORDS)?;
    settings.set_default("set_seed", false)?;
    settings.set_default("seed", 42i64)?;
    settings.set_default("log", "warn")?;

    match file {
        Some(file) => settings.merge(File::with_name(file))?,
        None => settings.merge(File::with_name(CONFIG_FILE_PATH).required(false))?,
    };
    settings.merge(Environment::with_prefix(ENV_PREFIX))?;

    Ok(settings)
}

impl Settings {
    /// Create settings with a given record count and seed, logging at warn.
    pub fn new(records: u64, seed: Option<u64>) -> Settings {
        Settings {
            records,
            seed,
            log: Level::WARN,
        }
    }

    /// Validate a merged configuration.
    pub fn from_config(config: Config) -> Result<Settings> {
        let raw: RawSettings = config.try_into()?;

        let records = non_negative("records", raw.records)?;
        let seed = if raw.set_seed {
            Some(non_negative("seed", raw.seed)?)
        } else {
            None
        };
        let log = parse_level(&raw.log)?;

        Ok(Settings { records, seed, log })
    }

    /// Initialise the rng, seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => SeedableRng::seed_from_u64(seed),
            None => SeedableRng::from_entropy(),
        }
    }
}

fn non_negative(key: &str, value: i64) -> std::result::Result<u64, GeneratorError> {
    if value < 0 {
        Err(GeneratorError::NegativeValue(key.to_string(), value))
    } else {
        Ok(value as u64)
    }
}

fn parse_level(level: &str) -> std::result::Result<Level, GeneratorError> {
    match level {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(GeneratorError::InvalidLogLevel(level.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        let mut c = Config::default();
        c.set("records", 10i64).unwrap();
        c.set("set_seed", true).unwrap();
        c.set("seed", 7i64).unwrap();
        c.set("log", "info").unwrap();
        c
    }

    #[test]
    fn settings_from_config() {
        let settings = Settings::from_config(config()).unwrap();

        assert_eq!(settings.records, 10);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.log, Level::INFO);
    }

    #[test]
    fn settings_from_strings() {
        // command line values arrive as strings
        let mut c = config();
        c.set("records", "25").unwrap();
        c.set("set_seed", "true").unwrap();
        c.set("seed", "3").unwrap();

        let settings = Settings::from_config(c).unwrap();

        assert_eq!(settings.records, 25);
        assert_eq!(settings.seed, Some(3));
    }

    #[test]
    fn unset_seed_ignored() {
        let mut c = config();
        c.set("set_seed", false).unwrap();

        assert_eq!(Settings::from_config(c).unwrap().seed, None);
    }

    #[test]
    fn negative_records() {
        let mut c = config();
        c.set("records", -1i64).unwrap();

        let err = Settings::from_config(c).unwrap_err();

        assert_eq!(
            err.downcast_ref::<GeneratorError>(),
            Some(&GeneratorError::NegativeValue("records".to_string(), -1))
        );
    }

    #[test]
    fn negative_seed() {
        let mut c = config();
        c.set("seed", -9i64).unwrap();

        let err = Settings::from_config(c).unwrap_err();

        assert_eq!(
            err.downcast_ref::<GeneratorError>(),
            Some(&GeneratorError::NegativeValue("seed".to_string(), -9))
        );
    }

    #[test]
    fn invalid_log_level() {
        let mut c = config();
        c.set("log", "loud").unwrap();

        let err = Settings::from_config(c).unwrap_err();

        assert_eq!(
            err.downcast_ref::<GeneratorError>(),
            Some(&GeneratorError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn missing_named_file() {
        assert!(init_config(Some("./tests/Does-not-exist.toml")).is_err());
    }

    #[test]
    fn named_file() {
        let c = init_config(Some("./tests/Test-generator.toml")).unwrap();
        let settings = Settings::from_config(c).unwrap();

        assert_eq!(settings.records, 1000);
        assert_eq!(settings.seed, Some(1));
        assert_eq!(settings.log, Level::DEBUG);
    }

    #[test]
    fn seeded_rngs_agree() {
        use rand::Rng;

        let settings = Settings::new(0, Some(11));
        let a: u64 = settings.rng().gen();
        let b: u64 = settings.rng().gen();

        assert_eq!(a, b);
    }
}
