/*
 * server/revision.rs
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

use super::page::normalize_commit;
use crate::page::{PageService, RevisionCommit};
use crate::revision::RevisionService;
use crate::service_prelude::*;
use crate::Server;

impl Server {
    /// Adds a revision to a page and makes it the current one.
    pub async fn create_revision(
        &self,
        page_id: PageId,
        commit: RevisionCommit<'_>,
    ) -> Result<RevisionId> {
        let commit = normalize_commit(commit);
        let conn = self.conn()?;
        RevisionService::new(&conn).commit(page_id, commit)
    }

    #[inline]
    pub async fn get_revision(&self, revision_id: RevisionId) -> Result<Revision> {
        let conn = self.conn()?;
        RevisionService::new(&conn).get(revision_id)
    }

    #[inline]
    pub async fn get_revision_content(&self, revision_id: RevisionId) -> Result<String> {
        let conn = self.conn()?;
        RevisionService::new(&conn).content(revision_id)
    }

    /// Gets the content of a page's current revision.
    pub async fn get_page_content(&self, page_id: PageId) -> Result<String> {
        let conn = self.conn()?;
        let page = PageService::new(&conn).get_by_id(page_id)?;

        RevisionService::new(&conn).content(page.current_revision_id())
    }

    /// Lists a page's revisions, oldest first.
    #[inline]
    pub async fn list_revisions(&self, page_id: PageId) -> Result<Vec<RevisionInfo>> {
        let conn = self.conn()?;
        RevisionService::new(&conn).list_for_page(page_id)
    }
}
