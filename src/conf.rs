use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub listen_addr: String,
    pub database_path: String,
    pub max_workers: usize,
    pub log_level: String,
    //compact | json
    pub log_format: String,
}

impl Settings {
    /// Defaults, then an optional `internhub.toml`, then `INTERNHUB_*` env vars.
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("listen_addr", "127.0.0.1:3000")?
            .set_default("database_path", "internhub.sqlite3")?
            .set_default("max_workers", 8)?
            .set_default("log_level", "info")?
            .set_default("log_format", "compact")?
            .add_source(File::with_name("internhub").required(false))
            .add_source(Environment::with_prefix("INTERNHUB"))
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        if s.max_workers == 0 {
            s.max_workers = 1;
        }
        Ok(s)
    }
}
