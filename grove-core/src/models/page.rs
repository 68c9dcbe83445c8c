/*
 * models/page.rs
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

/// A single node of a silo's page hierarchy, as stored.
///
/// Pages are kept flat with a parent pointer. See [`build_tree`] for the
/// navigation view with materialized paths.
///
/// [`build_tree`]: ../tree/fn.build_tree.html
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    silo_id: SiloId,
    parent_id: Option<PageId>,
    slug: String,
    title: String,
    current_revision_id: RevisionId,
    archived_at: Option<NaiveDateTime>,
    position: i32,
}

impl Page {
    #[inline]
    pub fn id(&self) -> PageId {
        self.id
    }

    #[inline]
    pub fn silo_id(&self) -> SiloId {
        self.silo_id
    }

    #[inline]
    pub fn parent_id(&self) -> Option<PageId> {
        self.parent_id
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    #[inline]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn current_revision_id(&self) -> RevisionId {
        self.current_revision_id
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
    pub fn position(&self) -> i32 {
        self.position
    }

    #[cfg(test)]
    pub(crate) fn mock(id: i64, parent_id: Option<i64>, slug: &str, position: i32) -> Self {
        Page {
            id: PageId::from_raw(id),
            silo_id: SiloId::from_raw(1),
            parent_id: parent_id.map(PageId::from_raw),
            slug: slug.to_owned(),
            title: slug.to_uppercase(),
            current_revision_id: RevisionId::from_raw(id * 10),
            archived_at: None,
            position,
        }
    }
}
