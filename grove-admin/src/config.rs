/*
 * config.rs
 *
 * grove-admin - Administration tool for grove silo storage
 * Copyright (C) 2026 the grove authors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use grove_core::{Error, Result, SessionKey};
use log::LevelFilter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

const DEFAULT_DATABASE_URL: &str = "grove.sqlite3";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "grove-admin",
    about = "Administration tool for grove silo storage"
)]
struct Options {
    /// TOML file with default settings. Flags take precedence over it.
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Path of the SQLite database.
    #[structopt(short, long, env = "GROVE_DATABASE_URL")]
    database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[structopt(long)]
    pool_size: Option<u32>,

    /// Log level, such as "info" or "debug".
    #[structopt(short, long)]
    log_level: Option<LevelFilter>,

    /// Secret for signing session cookies, at least 32 bytes.
    #[structopt(long, env = "GROVE_SESSION_KEY", hide_env_values = true)]
    session_key: Option<String>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Creates the database schema if it is missing.
    Migrate,

    /// Creates a user who logs in with a password.
    CreateUser {
        username: String,
        display_name: String,

        #[structopt(long, env = "GROVE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Creates a silo with its home page.
    CreateSilo {
        name: String,
        slug: String,

        #[structopt(long)]
        cover_image: Option<String>,
    },

    /// Lists every live silo.
    ListSilos,

    /// Prints the page tree of a silo.
    Tree { silo_slug: String },
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    database_url: Option<String>,
    pool_size: Option<u32>,
    log_level: Option<String>,
    session_key: Option<String>,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|error| Error::Io(io::Error::new(io::ErrorKind::InvalidData, error)))
    }
}

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    pub pool_size: Option<u32>,
    pub log_level: LevelFilter,
    pub session_key: Option<SessionKey>,
    pub command: Command,
}

impl Config {
    pub fn parse_args() -> Result<Self> {
        let Options {
            config,
            database_url,
            pool_size,
            log_level,
            session_key,
            command,
        } = Options::from_args();

        let file = match config {
            Some(ref path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let log_level = match (log_level, file.log_level) {
            (Some(level), _) => level,
            (None, Some(level)) => level
                .parse()
                .map_err(|_| Error::InvalidArgument("log-level"))?,
            (None, None) => LevelFilter::Info,
        };

        let session_key = match session_key.or(file.session_key) {
            Some(key) => Some(SessionKey::new(key)?),
            None => None,
        };

        Ok(Config {
            database_url: database_url
                .or(file.database_url)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            pool_size: pool_size.or(file.pool_size),
            log_level,
            session_key,
            command,
        })
    }
}

#[test]
fn config_file() {
    let file: ConfigFile = toml::from_str(
        r#"
        database-url = "/var/lib/grove/grove.sqlite3"
        pool-size = 2
        log-level = "debug"
        "#,
    )
    .expect("Unable to parse config file");

    assert_eq!(
        file.database_url.as_deref(),
        Some("/var/lib/grove/grove.sqlite3"),
    );
    assert_eq!(file.pool_size, Some(2));
    assert_eq!(file.log_level.as_deref(), Some("debug"));
    assert!(file.session_key.is_none());

    let result = toml::from_str::<ConfigFile>("database = 'typo.db'");
    assert!(result.is_err());
}
