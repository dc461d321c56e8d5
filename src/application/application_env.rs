use anyhow::anyhow;
use std::{env::VarError, net::SocketAddr, path::PathBuf, time::Duration};

const DEFAULT_TOKEN_LIFESPAN: Duration = Duration::from_secs(30);

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    /// Path of the JSON file that holds tickets and users
    pub db_path: PathBuf,

    pub token_lifespan: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKET_STORE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKET_STORE_LOG_FILENAME")?;
        let bind_address = Self::env_var("TICKET_STORE_BIND_ADDRESS")?.parse()?;
        let db_path = Self::env_var("TICKET_STORE_DB_PATH")?.into();
        let token_lifespan =
            Self::parse_token_lifespan(std::env::var("TICKET_STORE_TOKEN_LIFESPAN"))?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_path,
            token_lifespan,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    ///
    /// Lifespan is given in seconds, only a missing variable falls back to the default
    ///
    fn parse_token_lifespan(value: Result<String, VarError>) -> anyhow::Result<Duration> {
        match value {
            Ok(seconds) => Ok(Duration::from_secs(seconds.parse()?)),
            Err(VarError::NotPresent) => Ok(DEFAULT_TOKEN_LIFESPAN),
            Err(err) => Err(anyhow!("environment variable TICKET_STORE_TOKEN_LIFESPAN: {err}")),
        }
    }
}
