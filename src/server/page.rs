/*
 * server/page.rs
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

use crate::page::{PageDraft, PageService, RevisionCommit};
use crate::service_prelude::*;
use crate::Server;

impl Server {
    /// Creates a page with its initial revision.
    /// Returns the new page's ID along with the revision's.
    pub async fn create_page(
        &self,
        draft: PageDraft<'_>,
        commit: RevisionCommit<'_>,
    ) -> Result<(PageId, RevisionId)> {
        validate_slug(draft.slug)?;
        check_not_empty(draft.title, "title")?;

        let commit = normalize_commit(commit);
        let conn = self.conn()?;
        PageService::new(&conn).create(draft, commit)
    }

    /// Finds a live page from its slugs, starting at the silo's roots.
    #[inline]
    pub async fn find_page_by_path(&self, silo_id: SiloId, slugs: &[&str]) -> Result<Page> {
        let conn = self.conn()?;
        PageService::new(&conn).find_by_path(silo_id, slugs)
    }

    /// Same as `find_page_by_path`, for a slash-separated path.
    pub async fn find_page_by_path_str(&self, silo_id: SiloId, path: &str) -> Result<Page> {
        let slugs = split_path(path);
        self.find_page_by_path(silo_id, &slugs).await
    }

    #[inline]
    pub async fn get_page_by_id(&self, page_id: PageId) -> Result<Page> {
        let conn = self.conn()?;
        PageService::new(&conn).get_by_id(page_id)
    }

    /// Gets the full path of a page, such as `servers/web-server/nginx`.
    #[inline]
    pub async fn get_page_path(&self, page_id: PageId) -> Result<String> {
        let conn = self.conn()?;
        PageService::new(&conn).path_by_id(page_id)
    }

    /// Lists the live pages of a silo, ordered by position.
    #[inline]
    pub async fn list_pages(&self, silo_id: SiloId) -> Result<Vec<Page>> {
        let conn = self.conn()?;
        PageService::new(&conn).list_by_silo(silo_id)
    }

    /// Gets the navigation tree of a silo.
    pub async fn get_page_tree(&self, silo_id: SiloId) -> Result<Vec<PageNode>> {
        let pages = self.list_pages(silo_id).await?;
        Ok(build_tree(pages))
    }

    /// Archives a page. Its children stay live, and its history is kept.
    #[inline]
    pub async fn archive_page(&self, page_id: PageId) -> Result<()> {
        let conn = self.conn()?;
        PageService::new(&conn).archive(page_id)
    }
}

/// Empty comments are stored as no comment at all.
pub(super) fn normalize_commit(commit: RevisionCommit) -> RevisionCommit {
    let comment = commit.comment.filter(|comment| !comment.trim().is_empty());

    RevisionCommit { comment, ..commit }
}
