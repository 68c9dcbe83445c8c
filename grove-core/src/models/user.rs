/*
 * models/user.rs
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

use super::prelude::*;

/// Provider name for username and password identities.
pub const LOCAL_PROVIDER: &str = "local";

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    display_name: String,
}

impl User {
    #[inline]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[inline]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[inline]
    pub fn is_system(&self) -> bool {
        self.id == SYSTEM_USER_ID
    }
}

#[derive(Serialize, Queryable, Clone, PartialEq, Eq)]
pub struct Identity {
    id: IdentityId,
    user_id: UserId,
    provider: String,
    provider_user_id: String,

    #[serde(skip)]
    password_hash: Option<String>,
}

impl Identity {
    #[inline]
    pub fn id(&self) -> IdentityId {
        self.id
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    #[inline]
    pub fn provider_user_id(&self) -> &str {
        &self.provider_user_id
    }

    #[inline]
    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("provider", &self.provider)
            .field("provider_user_id", &self.provider_user_id)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "<hidden>"))
            .finish()
    }
}
