/*
 * server/silo.rs
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
use crate::silo::SiloService;
use crate::Server;

impl Server {
    /// Creates a new silo, bootstrapped with a home page. Returns both IDs.
    pub async fn create_silo(
        &self,
        name: &str,
        slug: &str,
        cover_image: Option<&str>,
    ) -> Result<(SiloId, PageId)> {
        check_not_empty(name, "name")?;
        validate_slug(slug)?;

        let conn = self.conn()?;
        SiloService::new(&conn).create(name, slug, cover_image)
    }

    #[inline]
    pub async fn get_silo_by_id(&self, silo_id: SiloId) -> Result<Silo> {
        let conn = self.conn()?;
        SiloService::new(&conn).get_by_id(silo_id)
    }

    /// Gets a live silo from its slug. Archived silos are not found.
    #[inline]
    pub async fn get_silo_by_slug(&self, slug: &str) -> Result<Silo> {
        let conn = self.conn()?;
        SiloService::new(&conn).get_by_slug(slug)
    }

    #[inline]
    pub async fn list_silos(&self) -> Result<Vec<Silo>> {
        let conn = self.conn()?;
        SiloService::new(&conn).list()
    }

    /// Archives a silo. Its pages and revisions are kept.
    #[inline]
    pub async fn archive_silo(&self, silo_id: SiloId) -> Result<()> {
        let conn = self.conn()?;
        SiloService::new(&conn).archive(silo_id)
    }
}
