/*
 * revision/service.rs
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

use super::NewRevision;
use crate::page::{PageService, RevisionCommit};
use crate::service_prelude::*;
use diesel::expression::dsl::max;

pub struct RevisionService<'d> {
    conn: &'d SqliteConnection,
}

impl<'d> RevisionService<'d> {
    #[inline]
    pub fn new(conn: &'d SqliteConnection) -> Self {
        RevisionService { conn }
    }

    /// Appends a revision to an existing page and makes it current.
    pub fn commit(&self, page_id: PageId, commit: RevisionCommit) -> Result<RevisionId> {
        info!("Starting transaction for new revision of page ID {}", page_id);

        self.conn.immediate_transaction::<_, Error, _>(|| {
            let pages = PageService::new(self.conn);
            pages.check_exists(page_id)?;

            let revision_id = self.insert(page_id, commit)?;
            pages.set_current_revision(page_id, revision_id)?;

            Ok(revision_id)
        })
    }

    /// Inserts a revision row without touching the page's pointer.
    ///
    /// The timestamp never goes backwards relative to the page's newest
    /// revision, even if the wall clock does.
    pub fn insert(&self, page_id: PageId, commit: RevisionCommit) -> Result<RevisionId> {
        let latest = revisions::table
            .filter(revisions::page_id.eq(page_id.to_i64()))
            .select(max(revisions::created_at))
            .first::<Option<NaiveDateTime>>(self.conn)?;

        let now = Utc::now().naive_utc();
        let created_at = match latest {
            Some(latest) if latest > now => latest,
            _ => now,
        };

        let model = NewRevision {
            page_id: page_id.into(),
            content: commit.content,
            author_id: commit.author_id.into(),
            comment: commit.comment,
            created_at,
        };

        trace!("Inserting revision for page ID {} into revisions table", page_id);
        diesel::insert_into(revisions::table)
            .values(&model)
            .execute(self.conn)
            .map_err(|error| {
                if is_foreign_key_violation(&error) {
                    warn!("Author ID {} does not exist", commit.author_id);
                    Error::UserNotFound
                } else {
                    Error::from(error)
                }
            })?;

        let revision_id = RevisionId::from_raw(last_insert_id(self.conn)?);
        Ok(revision_id)
    }

    pub fn get(&self, revision_id: RevisionId) -> Result<Revision> {
        trace!("Getting revision ID {}", revision_id);

        revisions::table
            .find(revision_id.to_i64())
            .first::<Revision>(self.conn)
            .optional()?
            .ok_or(Error::RevisionNotFound)
    }

    pub fn content(&self, revision_id: RevisionId) -> Result<String> {
        trace!("Getting content of revision ID {}", revision_id);

        revisions::table
            .find(revision_id.to_i64())
            .select(revisions::content)
            .first::<String>(self.conn)
            .optional()?
            .ok_or(Error::RevisionNotFound)
    }

    /// Full history of a page, oldest first.
    pub fn list_for_page(&self, page_id: PageId) -> Result<Vec<RevisionInfo>> {
        debug!("Listing revisions of page ID {}", page_id);

        PageService::new(self.conn).check_exists(page_id)?;

        let history = revisions::table
            .inner_join(users::table)
            .filter(revisions::page_id.eq(page_id.to_i64()))
            .select((
                revisions::id,
                revisions::page_id,
                revisions::author_id,
                users::display_name,
                revisions::comment,
                revisions::created_at,
            ))
            .order(revisions::id.asc())
            .load::<RevisionInfo>(self.conn)?;

        Ok(history)
    }
}

impl Debug for RevisionService<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RevisionService")
            .field("conn", &"SqliteConnection { .. }")
            .finish()
    }
}
