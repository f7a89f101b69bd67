use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Connection settings for the target MySQL database. Only these four options
/// are interpreted; everything else about the connection is left at driver
/// defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

/// Run configuration, loaded from a YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    /// Path of the `;`-delimited price list to import.
    #[serde(default = "default_input")]
    pub input: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from("PECIKK.csv")
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file `{}`", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config file `{}`", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg: Config = serde_yaml::from_str(
            "database:\n  host: db.example.com\n  user: importer\n  password: hunter2\n  database: store\ninput: prices.csv\n",
        )
        .unwrap();
        assert_eq!(cfg.database.host, "db.example.com");
        assert_eq!(cfg.database.user, "importer");
        assert_eq!(cfg.input, PathBuf::from("prices.csv"));
    }

    #[test]
    fn input_path_defaults_when_omitted() {
        let cfg: Config = serde_yaml::from_str(
            "database:\n  host: localhost\n  user: u\n  password: p\n  database: d\n",
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("PECIKK.csv"));
    }

    #[test]
    fn rejects_config_without_database_section() {
        assert!(serde_yaml::from_str::<Config>("input: prices.csv\n").is_err());
    }
}
