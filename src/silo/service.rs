/*
 * silo/service.rs
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

use super::{NewSilo, HOME_SLUG, HOME_TITLE};
use crate::page::{PageDraft, PageService, RevisionCommit};
use crate::service_prelude::*;

pub struct SiloService<'d> {
    conn: &'d SqliteConnection,
}

impl<'d> SiloService<'d> {
    #[inline]
    pub fn new(conn: &'d SqliteConnection) -> Self {
        SiloService { conn }
    }

    /// Creates a silo along with its home page, authored by the system user.
    pub fn create(
        &self,
        name: &str,
        slug: &str,
        cover_image: Option<&str>,
    ) -> Result<(SiloId, PageId)> {
        info!("Creating new silo with name '{}' ('{}')", name, slug);

        self.conn.immediate_transaction::<_, Error, _>(|| {
            let model = NewSilo {
                slug,
                name,
                cover_image,
            };

            trace!("Inserting {:?} into silos table", &model);
            diesel::insert_into(silos::table)
                .values(&model)
                .execute(self.conn)
                .map_err(|error| map_conflict(error.into(), Error::SiloExists))?;

            let silo_id = SiloId::from_raw(last_insert_id(self.conn)?);
            let content = format!("* Welcome to the {} Silo!", name);

            let draft = PageDraft {
                silo_id,
                parent_id: None,
                slug: HOME_SLUG,
                title: HOME_TITLE,
            };

            let commit = RevisionCommit {
                author_id: SYSTEM_USER_ID,
                content: &content,
                comment: Some("Initial creation"),
            };

            let (page_id, _) = PageService::new(self.conn).insert(draft, commit)?;
            Ok((silo_id, page_id))
        })
    }

    pub fn get_by_id(&self, silo_id: SiloId) -> Result<Silo> {
        trace!("Getting silo ID {}", silo_id);

        silos::table
            .find(silo_id.to_i64())
            .first::<Silo>(self.conn)
            .optional()?
            .ok_or(Error::SiloNotFound)
    }

    pub fn get_by_slug(&self, slug: &str) -> Result<Silo> {
        trace!("Getting silo with slug '{}'", slug);

        silos::table
            .filter(silos::slug.eq(slug))
            .filter(silos::archived_at.is_null())
            .first::<Silo>(self.conn)
            .optional()?
            .ok_or(Error::SiloNotFound)
    }

    pub fn list(&self) -> Result<Vec<Silo>> {
        debug!("Listing live silos");

        let silos = silos::table
            .filter(silos::archived_at.is_null())
            .order(silos::id.asc())
            .load::<Silo>(self.conn)?;

        Ok(silos)
    }

    pub fn archive(&self, silo_id: SiloId) -> Result<()> {
        info!("Archiving silo ID {}", silo_id);

        let now = Utc::now().naive_utc();
        let count = diesel::update(
            silos::table
                .filter(silos::id.eq(silo_id.to_i64()))
                .filter(silos::archived_at.is_null()),
        )
        .set(silos::archived_at.eq(now))
        .execute(self.conn)?;

        if count == 0 {
            return Err(Error::SiloNotFound);
        }

        Ok(())
    }
}

impl Debug for SiloService<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SiloService")
            .field("conn", &"SqliteConnection { .. }")
            .finish()
    }
}
