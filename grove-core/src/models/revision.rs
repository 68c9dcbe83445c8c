/*
 * models/revision.rs
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

/// An immutable snapshot of a page's content.
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    id: RevisionId,
    page_id: PageId,
    content: String,
    author_id: UserId,
    comment: Option<String>,
    created_at: NaiveDateTime,
}

impl Revision {
    #[inline]
    pub fn id(&self) -> RevisionId {
        self.id
    }

    #[inline]
    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn into_content(self) -> String {
        self.content
    }

    #[inline]
    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    #[inline]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    #[inline]
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

/// One entry of a page's history, without content but with the author's display name.
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct RevisionInfo {
    id: RevisionId,
    page_id: PageId,
    author_id: UserId,
    author_name: String,
    comment: Option<String>,
    created_at: NaiveDateTime,
}

impl RevisionInfo {
    #[inline]
    pub fn id(&self) -> RevisionId {
        self.id
    }

    #[inline]
    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    #[inline]
    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    #[inline]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    #[inline]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    #[inline]
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
