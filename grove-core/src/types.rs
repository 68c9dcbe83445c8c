/*
 * types.rs
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

make_id_type!(identity, IdentityId);
make_id_type!(page, PageId);
make_id_type!(revision, RevisionId);
make_id_type!(silo, SiloId);
make_id_type!(user, UserId);

/// The reserved author of system-generated revisions, such as a new silo's home page.
///
/// This row is inserted by the schema migration and is never a login identity.
pub const SYSTEM_USER_ID: UserId = UserId::from_raw(1);
