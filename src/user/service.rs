/*
 * user/service.rs
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

use super::crypto::{check_password, hash_password};
use super::{NewIdentity, NewUser};
use crate::service_prelude::*;

pub struct UserService<'d> {
    conn: &'d SqliteConnection,
}

impl<'d> UserService<'d> {
    #[inline]
    pub fn new(conn: &'d SqliteConnection) -> Self {
        UserService { conn }
    }

    /// Creates a user who logs in with the given password.
    pub fn create(&self, username: &str, display_name: &str, password: &str) -> Result<UserId> {
        info!(
            "Creating new user '{}' with display name '{}'",
            username, display_name,
        );

        // Hash before taking the write lock
        let password_hash = hash_password(password)?;

        self.conn.immediate_transaction::<_, Error, _>(|| {
            let model = NewUser {
                username,
                display_name,
            };

            diesel::insert_into(users::table)
                .values(&model)
                .execute(self.conn)
                .map_err(|error| map_conflict(error.into(), Error::UserNameExists))?;

            let user_id = UserId::from_raw(last_insert_id(self.conn)?);
            let model = NewIdentity {
                user_id: user_id.into(),
                provider: LOCAL_PROVIDER,
                provider_user_id: username,
                password_hash: Some(password_hash.as_str()),
            };

            trace!("Inserting local identity for user ID {}", user_id);
            diesel::insert_into(identities::table)
                .values(&model)
                .execute(self.conn)
                .map_err(|error| map_conflict(error.into(), Error::UserNameExists))?;

            Ok(user_id)
        })
    }

    pub fn get_by_id(&self, user_id: UserId) -> Result<User> {
        trace!("Getting user ID {}", user_id);

        users::table
            .find(user_id.to_i64())
            .first::<User>(self.conn)
            .optional()?
            .ok_or(Error::UserNotFound)
    }

    pub fn get_by_username(&self, username: &str) -> Result<User> {
        trace!("Getting user with name '{}'", username);

        users::table
            .filter(users::username.eq(username))
            .first::<User>(self.conn)
            .optional()?
            .ok_or(Error::UserNotFound)
    }

    pub fn get_identity(&self, provider: &str, provider_user_id: &str) -> Result<Identity> {
        trace!("Getting {} identity '{}'", provider, provider_user_id);

        identities::table
            .filter(identities::provider.eq(provider))
            .filter(identities::provider_user_id.eq(provider_user_id))
            .first::<Identity>(self.conn)
            .optional()?
            .ok_or(Error::IdentityNotFound)
    }

    /// Verifies a username and password, returning the matching user.
    pub fn check_password(&self, username: &str, password: &str) -> Result<User> {
        debug!("Checking password for user '{}'", username);

        let identity = match self.get_identity(LOCAL_PROVIDER, username) {
            Ok(identity) => identity,
            Err(Error::IdentityNotFound) => return Err(Error::AuthenticationFailed),
            Err(error) => return Err(error),
        };

        let hash = identity.password_hash().ok_or(Error::AuthenticationFailed)?;

        if !check_password(password, hash)? {
            warn!("Invalid password for user '{}'", username);
            return Err(Error::AuthenticationFailed);
        }

        self.get_by_id(identity.user_id())
    }
}

impl Debug for UserService<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UserService")
            .field("conn", &"SqliteConnection { .. }")
            .finish()
    }
}
