/*
 * pool.rs
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

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel::sqlite::SqliteConnection;
use grove_core::{Result, StdResult};
use std::time::Duration;

pub type Pool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type PooledConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

const MIGRATION: &str = include_str!("../migrations/2026-01-01-000000_create_tables/up.sql");

/// Per-connection settings, applied whenever the pool opens a connection.
#[derive(Debug, Copy, Clone)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> StdResult<(), r2d2::Error> {
        let pragmas = format!(
            "PRAGMA busy_timeout = {}; PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL;",
            self.busy_timeout.as_millis(),
        );

        trace!("Configuring new SQLite connection");
        conn.batch_execute(&pragmas).map_err(r2d2::Error::QueryError)
    }
}

pub fn build_pool(database_url: &str, pool_size: u32) -> Result<Pool> {
    debug!(
        "Building SQLite connection pool for '{}' (size {})",
        database_url, pool_size,
    );

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let options = ConnectionOptions {
        busy_timeout: Duration::from_secs(5),
    };

    let pool = r2d2::Pool::builder()
        .max_size(pool_size)
        .connection_customizer(Box::new(options))
        .build(manager)?;

    Ok(pool)
}

/// Creates any missing tables and the reserved system user.
pub fn migrate(conn: &SqliteConnection) -> Result<()> {
    info!("Applying database schema");

    conn.immediate_transaction::<_, grove_core::Error, _>(|| {
        conn.batch_execute(MIGRATION)?;
        Ok(())
    })
}
