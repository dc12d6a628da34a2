use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::fmt;
use std::str::FromStr;

/// Default location of the pre-populated sentiment dataset, opened read-only.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://final_db.db?mode=ro";

/// Origin wildcard accepted by `--allowed-origins` to allow any origin.
pub const ANY_ORIGIN: &str = "*";

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that are allowed to receive server responses,
    /// or `*` to allow any origin.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = ANY_ORIGIN
    )]
    pub allowed_origins: Vec<String>,

    /// Sets the SQLite database URL of the sentiment dataset. The dataset is always
    /// opened read-only.
    #[arg(short, long, env, default_value = DEFAULT_DATABASE_URL)]
    database_url: Option<String>,

    /// Maximum number of database connections in the pool
    #[arg(long, env, default_value_t = 10)]
    pub db_max_connections: u32,

    /// Minimum number of idle database connections to maintain
    #[arg(long, env, default_value_t = 1)]
    pub db_min_connections: u32,

    /// Timeout in seconds for establishing a new database connection
    #[arg(long, env, default_value_t = 8)]
    pub db_connect_timeout_secs: u64,

    /// Timeout in seconds for acquiring a connection from the pool
    #[arg(long, env, default_value_t = 8)]
    pub db_acquire_timeout_secs: u64,

    /// Seconds before an idle connection is closed
    #[arg(long, env, default_value_t = 600)]
    pub db_idle_timeout_secs: u64,

    /// Maximum lifetime in seconds for any connection in the pool
    #[arg(long, env, default_value_t = 1800)]
    pub db_max_lifetime_secs: u64,

    /// Keep query results in memory for the lifetime of the process. Safe because
    /// the dataset never changes while the service is running.
    #[arg(long, env, default_value_t = false)]
    pub cache_responses: bool,

    /// Upper bound on the distinct topic selections cached per query kind
    #[arg(long, env, default_value_t = 1024)]
    pub cache_max_entries: usize,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 3001)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn database_url(&self) -> &str {
        self.database_url
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// The database URL with SQLite's read-only mode forced on, unless the URL
    /// already chooses a `mode` explicitly.
    pub fn read_only_database_url(&self) -> String {
        let url = self.database_url();
        let has_mode = url
            .split_once('?')
            .map(|(_, query)| query.split('&').any(|pair| pair.starts_with("mode=")))
            .unwrap_or(false);

        if has_mode {
            url.to_string()
        } else if url.contains('?') {
            format!("{url}&mode=ro")
        } else {
            format!("{url}?mode=ro")
        }
    }

    /// True when `allowed_origins` contains the `*` wildcard.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == ANY_ORIGIN)
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn is_production(&self) -> bool {
        self.runtime_env() == RustEnv::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::parse_from(std::iter::once("sentiment_dashboard").chain(args.iter().copied()))
    }

    #[test]
    fn read_only_mode_is_appended_to_plain_urls() {
        let config = parse(&["--database-url", "sqlite://data/final_db.db"]);
        assert_eq!(
            config.read_only_database_url(),
            "sqlite://data/final_db.db?mode=ro"
        );
    }

    #[test]
    fn read_only_mode_is_appended_to_existing_query_strings() {
        let config = parse(&["--database-url", "sqlite://final_db.db?cache=shared"]);
        assert_eq!(
            config.read_only_database_url(),
            "sqlite://final_db.db?cache=shared&mode=ro"
        );
    }

    #[test]
    fn explicit_mode_is_left_alone() {
        let config = parse(&["--database-url", "sqlite::memory:?mode=memory"]);
        assert_eq!(config.read_only_database_url(), "sqlite::memory:?mode=memory");
    }

    #[test]
    fn database_url_falls_back_to_the_bundled_dataset() {
        let config = parse(&[]);
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn allowed_origins_are_split_on_commas() {
        let config = parse(&[
            "--allowed-origins",
            "http://localhost:5173,https://dash.example.com",
        ]);
        assert_eq!(
            config.allowed_origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://dash.example.com".to_string()
            ]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn wildcard_origin_allows_any_origin() {
        let config = parse(&["--allowed-origins", "*"]);
        assert!(config.allows_any_origin());
    }

    #[test]
    fn runtime_env_parses_case_insensitively() {
        assert_eq!("PRODUCTION".parse::<RustEnv>(), Ok(RustEnv::Production));
        assert_eq!("staging".parse::<RustEnv>(), Ok(RustEnv::Staging));
        assert_eq!("qa".parse::<RustEnv>(), Err(RustEnvParseError));
    }

    #[test]
    fn cache_flag_enables_response_caching() {
        let config = parse(&["--cache-responses"]);
        assert!(config.cache_responses);
        assert_eq!(config.cache_max_entries, 1024);
    }

    #[test]
    fn cache_bound_is_configurable() {
        let config = parse(&["--cache-responses", "--cache-max-entries", "32"]);
        assert_eq!(config.cache_max_entries, 32);
    }
}
