/*
 * server/user.rs
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

use crate::service_prelude::*;
use crate::user::UserService;
use crate::Server;

impl Server {
    /// Creates a new user with a local password identity. Returns its ID.
    pub async fn create_user(
        &self,
        username: &str,
        display_name: &str,
        password: &str,
    ) -> Result<UserId> {
        check_not_empty(username, "username")?;
        check_not_empty(display_name, "display_name")?;
        check_not_empty(password, "password")?;

        let conn = self.conn()?;
        UserService::new(&conn).create(username, display_name, password)
    }

    #[inline]
    pub async fn get_user_by_id(&self, user_id: UserId) -> Result<User> {
        let conn = self.conn()?;
        UserService::new(&conn).get_by_id(user_id)
    }

    #[inline]
    pub async fn get_user_by_username(&self, username: &str) -> Result<User> {
        let conn = self.conn()?;
        UserService::new(&conn).get_by_username(username)
    }

    #[inline]
    pub async fn get_identity(&self, provider: &str, provider_user_id: &str) -> Result<Identity> {
        let conn = self.conn()?;
        UserService::new(&conn).get_identity(provider, provider_user_id)
    }

    /// Checks a username and password, returning the user they belong to.
    #[inline]
    pub async fn check_password(&self, username: &str, password: &str) -> Result<User> {
        let conn = self.conn()?;
        UserService::new(&conn).check_password(username, password)
    }
}
