/*
 * error.rs
 *
 * grove-core - Silo and page hierarchy storage for a multi-tenant wiki
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

use crate::session::SESSION_KEY_MIN_LENGTH;
use crate::PageId;
use diesel::r2d2::PoolError;
use diesel::result::{ConnectionError, Error as DieselError};
use std::io;

/// Broad classes of failure, for callers that map errors onto responses.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    NotFound,
    Conflict,
    BadRequest,
    Unauthorized,
    Internal,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("error: {0}")]
    StaticMsg(&'static str),

    #[error("general I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("database error: {0}")]
    Database(#[from] DieselError),

    #[error("error connecting to database: {0}")]
    DatabaseConnection(#[from] ConnectionError),

    #[error("error acquiring pooled database connection: {0}")]
    Pool(#[from] PoolError),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("invalid slug: '{0}'")]
    InvalidSlug(String),

    #[error("session key must be at least {} bytes long", SESSION_KEY_MIN_LENGTH)]
    InvalidSessionKey,

    #[error("invalid username or password")]
    AuthenticationFailed,

    #[error("the given silo was not found")]
    SiloNotFound,

    #[error("a silo with the given slug already exists")]
    SiloExists,

    #[error("the given page was not found")]
    PageNotFound,

    #[error("a page with the given slug already exists at this location")]
    PageExists,

    #[error("the page hierarchy loops back on page ID {0}")]
    PageCycle(PageId),

    #[error("the given revision was not found")]
    RevisionNotFound,

    #[error("the given user was not found")]
    UserNotFound,

    #[error("a user with the given name already exists")]
    UserNameExists,

    #[error("the given identity was not found")]
    IdentityNotFound,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use self::Error::*;

        match *self {
            SiloNotFound | PageNotFound | RevisionNotFound | UserNotFound | IdentityNotFound => {
                ErrorKind::NotFound
            }
            SiloExists | PageExists | UserNameExists => ErrorKind::Conflict,
            InvalidArgument(_) | InvalidSlug(_) | InvalidSessionKey => ErrorKind::BadRequest,
            AuthenticationFailed => ErrorKind::Unauthorized,
            StaticMsg(_) | Io(_) | Database(_) | DatabaseConnection(_) | Pool(_) | PageCycle(_) => {
                ErrorKind::Internal
            }
        }
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    #[inline]
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }

    pub fn fixed_name(&self) -> &'static str {
        use self::Error::*;

        match *self {
            StaticMsg(_) => "custom",
            Io(_) => "io",
            Database(_) => "database",
            DatabaseConnection(_) => "database-connection",
            Pool(_) => "database-pool",
            InvalidArgument(_) => "invalid-argument",
            InvalidSlug(_) => "invalid-slug",
            InvalidSessionKey => "invalid-session-key",
            AuthenticationFailed => "authentication-failed",
            SiloNotFound => "silo-not-found",
            SiloExists => "silo-exists",
            PageNotFound => "page-not-found",
            PageExists => "page-exists",
            PageCycle(_) => "page-cycle",
            RevisionNotFound => "revision-not-found",
            UserNotFound => "user-not-found",
            UserNameExists => "user-name-exists",
            IdentityNotFound => "identity-not-found",
        }
    }
}

#[test]
fn kinds() {
    assert_eq!(Error::PageNotFound.kind(), ErrorKind::NotFound);
    assert_eq!(Error::SiloNotFound.kind(), ErrorKind::NotFound);
    assert_eq!(Error::PageExists.kind(), ErrorKind::Conflict);
    assert_eq!(Error::UserNameExists.kind(), ErrorKind::Conflict);
    assert_eq!(Error::InvalidArgument("title").kind(), ErrorKind::BadRequest);
    assert_eq!(Error::AuthenticationFailed.kind(), ErrorKind::Unauthorized);
    assert_eq!(
        Error::Database(DieselError::RollbackTransaction).kind(),
        ErrorKind::Internal,
    );
    assert_eq!(
        Error::PageCycle(PageId::from_raw(4)).kind(),
        ErrorKind::Internal,
    );

    assert!(Error::RevisionNotFound.is_not_found());
    assert!(!Error::RevisionNotFound.is_conflict());
    assert!(Error::SiloExists.is_conflict());
    assert_eq!(Error::PageExists.fixed_name(), "page-exists");
}
