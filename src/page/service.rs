/*
 * page/service.rs
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

use super::{NewPage, PageDraft, RevisionCommit, SENTINEL_REVISION_ID};
use crate::revision::RevisionService;
use crate::service_prelude::*;
use diesel::expression::dsl::max;
use diesel::sqlite::Sqlite;
use std::collections::HashSet;

pub struct PageService<'d> {
    conn: &'d SqliteConnection,
}

impl<'d> PageService<'d> {
    #[inline]
    pub fn new(conn: &'d SqliteConnection) -> Self {
        PageService { conn }
    }

    /// Creates a page together with its first revision.
    pub fn create(
        &self,
        draft: PageDraft,
        commit: RevisionCommit,
    ) -> Result<(PageId, RevisionId)> {
        info!("Starting transaction for page creation");

        self.conn
            .immediate_transaction::<_, Error, _>(|| self.insert(draft, commit))
    }

    /// Inserts a page and its first revision, then points the page at it.
    ///
    /// Must run inside a transaction held by the caller, otherwise readers
    /// could observe the placeholder revision pointer.
    pub fn insert(
        &self,
        draft: PageDraft,
        commit: RevisionCommit,
    ) -> Result<(PageId, RevisionId)> {
        let PageDraft {
            silo_id,
            parent_id,
            slug,
            title,
        } = draft;

        self.check_silo(silo_id)?;

        if let Some(parent_id) = parent_id {
            self.check_parent(silo_id, parent_id)?;
        }

        let model = NewPage {
            silo_id: silo_id.into(),
            parent_id: parent_id.map(i64::from),
            slug,
            title,
            current_revision_id: SENTINEL_REVISION_ID,
            position: self.next_position(silo_id, parent_id)?,
        };

        trace!("Inserting {:?} into pages table", &model);
        diesel::insert_into(pages::table)
            .values(&model)
            .execute(self.conn)
            .map_err(|error| map_conflict(error.into(), Error::PageExists))?;

        let page_id = PageId::from_raw(last_insert_id(self.conn)?);
        let revision_id = RevisionService::new(self.conn).insert(page_id, commit)?;
        self.set_current_revision(page_id, revision_id)?;

        debug!(
            "Created page ID {} ('{}') with revision ID {}",
            page_id, slug, revision_id,
        );

        Ok((page_id, revision_id))
    }

    /// Walks `slugs` from the silo's roots down, one level per slug.
    pub fn find_by_path(&self, silo_id: SiloId, slugs: &[&str]) -> Result<Page> {
        debug!("Resolving path {:?} in silo ID {}", slugs, silo_id);

        let mut current: Option<Page> = None;

        for &slug in slugs {
            let mut query: pages::BoxedQuery<'_, Sqlite> = pages::table
                .filter(pages::silo_id.eq(silo_id.to_i64()))
                .filter(pages::slug.eq(slug))
                .filter(pages::archived_at.is_null())
                .into_boxed();

            query = match current {
                Some(ref parent) => query.filter(pages::parent_id.eq(parent.id().to_i64())),
                None => query.filter(pages::parent_id.is_null()),
            };

            match query.first::<Page>(self.conn).optional()? {
                Some(page) => current = Some(page),
                None => {
                    trace!(
                        "No page '{}' under {:?}",
                        slug,
                        current.as_ref().map(Page::id),
                    );
                    return Err(Error::PageNotFound);
                }
            }
        }

        current.ok_or(Error::PageNotFound)
    }

    pub fn get_by_id(&self, page_id: PageId) -> Result<Page> {
        trace!("Getting page ID {}", page_id);

        pages::table
            .find(page_id.to_i64())
            .first::<Page>(self.conn)
            .optional()?
            .ok_or(Error::PageNotFound)
    }

    /// Lists a silo's live pages, ordered for the tree builder.
    pub fn list_by_silo(&self, silo_id: SiloId) -> Result<Vec<Page>> {
        debug!("Listing pages in silo ID {}", silo_id);

        let pages = pages::table
            .filter(pages::silo_id.eq(silo_id.to_i64()))
            .filter(pages::archived_at.is_null())
            .order((pages::position.asc(), pages::id.asc()))
            .load::<Page>(self.conn)?;

        Ok(pages)
    }

    /// Builds the slash-separated path of a page from its ancestors.
    pub fn path_by_id(&self, page_id: PageId) -> Result<String> {
        debug!("Building path for page ID {}", page_id);

        let mut slugs = Vec::new();
        let mut seen = HashSet::new();
        let mut current = page_id;

        loop {
            if !seen.insert(current) {
                error!("Page hierarchy loops back on page ID {}", current);
                return Err(Error::PageCycle(current));
            }

            let (parent_id, slug) = pages::table
                .find(current.to_i64())
                .select((pages::parent_id, pages::slug))
                .first::<(Option<PageId>, String)>(self.conn)
                .optional()?
                .ok_or(Error::PageNotFound)?;

            slugs.push(slug);

            match parent_id {
                Some(parent_id) => current = parent_id,
                None => break,
            }
        }

        slugs.reverse();
        Ok(slugs.join("/"))
    }

    /// Marks a page archived. Its children and revisions are left alone.
    pub fn archive(&self, page_id: PageId) -> Result<()> {
        info!("Archiving page ID {}", page_id);

        let now = Utc::now().naive_utc();
        let count = diesel::update(
            pages::table
                .filter(pages::id.eq(page_id.to_i64()))
                .filter(pages::archived_at.is_null()),
        )
        .set(pages::archived_at.eq(now))
        .execute(self.conn)?;

        if count == 0 {
            return Err(Error::PageNotFound);
        }

        Ok(())
    }

    pub fn set_current_revision(&self, page_id: PageId, revision_id: RevisionId) -> Result<()> {
        trace!(
            "Pointing page ID {} at revision ID {}",
            page_id,
            revision_id,
        );

        let count = diesel::update(pages::table.find(page_id.to_i64()))
            .set(pages::current_revision_id.eq(revision_id.to_i64()))
            .execute(self.conn)?;

        if count == 0 {
            return Err(Error::PageNotFound);
        }

        Ok(())
    }

    /// Ensures a page exists, without loading it.
    pub fn check_exists(&self, page_id: PageId) -> Result<()> {
        pages::table
            .find(page_id.to_i64())
            .select(pages::id)
            .first::<PageId>(self.conn)
            .optional()?
            .map(|_| ())
            .ok_or(Error::PageNotFound)
    }

    fn check_silo(&self, silo_id: SiloId) -> Result<()> {
        silos::table
            .filter(silos::id.eq(silo_id.to_i64()))
            .filter(silos::archived_at.is_null())
            .select(silos::id)
            .first::<SiloId>(self.conn)
            .optional()?
            .map(|_| ())
            .ok_or(Error::SiloNotFound)
    }

    fn check_parent(&self, silo_id: SiloId, parent_id: PageId) -> Result<()> {
        let parent = self.get_by_id(parent_id)?;

        if parent.silo_id() != silo_id || parent.is_archived() {
            warn!(
                "Parent page ID {} is not a live page of silo ID {}",
                parent_id, silo_id,
            );

            return Err(Error::PageNotFound);
        }

        Ok(())
    }

    fn next_position(&self, silo_id: SiloId, parent_id: Option<PageId>) -> Result<i32> {
        let query = pages::table
            .filter(pages::silo_id.eq(silo_id.to_i64()))
            .select(max(pages::position));

        let last = match parent_id {
            Some(parent_id) => query
                .filter(pages::parent_id.eq(parent_id.to_i64()))
                .first::<Option<i32>>(self.conn)?,
            None => query
                .filter(pages::parent_id.is_null())
                .first::<Option<i32>>(self.conn)?,
        };

        Ok(last.map_or(0, |position| position + 1))
    }
}

impl Debug for PageService<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PageService")
            .field("conn", &"SqliteConnection { .. }")
            .finish()
    }
}
