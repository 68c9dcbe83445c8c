/*
 * server/mod.rs
 *
 * grove - Silo and page hierarchy storage for a multi-tenant wiki
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

mod page;
mod revision;
mod silo;
mod user;

use crate::pool::{self, Pool, PooledConnection};
use grove_core::{Error, Result, SessionKey};
use std::fmt::{self, Debug};

const DEFAULT_POOL_SIZE: u32 = 8;

#[derive(Debug, Clone)]
pub struct Config<'a> {
    pub database_url: &'a str,
    pub pool_size: Option<u32>,
    pub session_key: Option<SessionKey>,
}

/// Entry point for every storage operation.
///
/// Each call checks out its own connection, so a `Server` can be shared
/// freely between tasks.
pub struct Server {
    pool: Pool,
    session_key: Option<SessionKey>,
}

impl Server {
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating grove::Server, opening SQLite connection pool");

        let Config {
            database_url,
            pool_size,
            session_key,
        } = config;

        let pool_size = pool_size.unwrap_or(DEFAULT_POOL_SIZE);
        let pool = match pool::build_pool(database_url, pool_size) {
            Ok(pool) => pool,
            Err(error) => {
                error!("Error opening SQLite database '{}': {}", database_url, error);

                return Err(error);
            }
        };

        Ok(Server { pool, session_key })
    }

    /// Creates the schema if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        let conn = self.conn()?;
        pool::migrate(&conn)
    }

    /// Secret for signing session cookies, if one was configured.
    #[inline]
    pub fn session_key(&self) -> Option<&SessionKey> {
        self.session_key.as_ref()
    }

    /* Helper methods */

    pub(crate) fn conn(&self) -> Result<PooledConnection> {
        self.pool.get().map_err(|error| {
            error!("Unable to get pooled database connection: {}", error);
            Error::Pool(error)
        })
    }
}

impl Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("grove::Server")
            .field("pool", &"Pool<SqliteConnection> { .. }")
            .field("session_key", &self.session_key)
            .finish()
    }
}
