/*
 * lib.rs
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

#![deny(missing_debug_implementations)]

extern crate chrono;
extern crate crypto;

#[macro_use]
extern crate diesel;
extern crate grove_core;

#[macro_use]
extern crate lazy_static;
extern crate libsqlite3_sys;

#[macro_use]
extern crate log;

#[cfg(test)]
mod test;

mod page;
mod pool;
mod revision;
mod schema;
mod server;
mod silo;
mod user;
mod utils;

mod service_prelude {
    pub use crate::schema::*;
    pub use crate::utils::*;
    pub use chrono::prelude::*;
    pub use diesel::prelude::*;
    pub use grove_core::prelude::*;
    pub use grove_core::Result;
    pub use std::fmt::{self, Debug};
}

pub use self::page::{PageDraft, RevisionCommit};
pub use self::server::{Config, Server};

pub mod prelude {
    pub use super::{Config, PageDraft, RevisionCommit, Server};
    pub use grove_core::prelude::*;
}

pub use grove_core::{Error, ErrorKind, Result, StdResult};
