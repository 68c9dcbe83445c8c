/*
 * utils.rs
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

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::BigInt;
use diesel::sqlite::SqliteConnection;
use diesel::RunQueryDsl;
use grove_core::{Error, Result};

no_arg_sql_function!(
    last_insert_rowid,
    BigInt,
    "Row ID of the most recent successful INSERT on this connection"
);

/// Fetches the ID assigned by the last insert on this connection.
#[inline]
pub fn last_insert_id(conn: &SqliteConnection) -> Result<i64> {
    let id = diesel::select(last_insert_rowid).get_result::<i64>(conn)?;
    Ok(id)
}

pub fn is_unique_violation(error: &DieselError) -> bool {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => true,
        DieselError::DatabaseError(_, info) => {
            info.message().starts_with("UNIQUE constraint failed")
        }
        _ => false,
    }
}

pub fn is_foreign_key_violation(error: &DieselError) -> bool {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => true,
        DieselError::DatabaseError(_, info) => {
            info.message().starts_with("FOREIGN KEY constraint failed")
        }
        _ => false,
    }
}

/// Turns a uniqueness failure into the given conflict error.
///
/// Errors already converted, and any other database failure, pass through.
pub fn map_conflict(error: Error, conflict: Error) -> Error {
    match error {
        Error::Database(ref inner) if is_unique_violation(inner) => {
            warn!("Uniqueness conflict: {}", inner);
            conflict
        }
        _ => error,
    }
}

#[inline]
pub fn check_not_empty(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(field));
    }

    Ok(())
}
