/*
 * page/models.rs
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

use crate::schema::pages;
use grove_core::{PageId, SiloId, UserId};

/// Placeholder `current_revision_id` of a page whose first revision is not yet inserted.
///
/// Only ever visible inside the creating transaction.
pub const SENTINEL_REVISION_ID: i64 = -1;

/// Where and under what name a new page goes.
#[derive(Debug, Copy, Clone)]
pub struct PageDraft<'a> {
    pub silo_id: SiloId,
    pub parent_id: Option<PageId>,
    pub slug: &'a str,
    pub title: &'a str,
}

/// Content and attribution of a new revision.
#[derive(Debug, Copy, Clone)]
pub struct RevisionCommit<'a> {
    pub author_id: UserId,
    pub content: &'a str,
    pub comment: Option<&'a str>,
}

#[derive(Debug, Insertable)]
#[table_name = "pages"]
pub struct NewPage<'a> {
    pub silo_id: i64,
    pub parent_id: Option<i64>,
    pub slug: &'a str,
    pub title: &'a str,
    pub current_revision_id: i64,
    pub position: i32,
}
