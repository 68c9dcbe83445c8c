/*
 * models/silo.rs
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

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Silo {
    id: SiloId,
    slug: String,
    name: String,
    archived_at: Option<NaiveDateTime>,
    cover_image: Option<String>,
}

impl Silo {
    #[inline]
    pub fn id(&self) -> SiloId {
        self.id
    }

    #[inline]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn archived_at(&self) -> Option<NaiveDateTime> {
        self.archived_at
    }

    #[inline]
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    #[inline]
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }
}
