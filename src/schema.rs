/*
 * schema.rs
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

table! {
    identities (id) {
        id -> BigInt,
        user_id -> BigInt,
        provider -> Text,
        provider_user_id -> Text,
        password_hash -> Nullable<Text>,
    }
}

table! {
    pages (id) {
        id -> BigInt,
        silo_id -> BigInt,
        parent_id -> Nullable<BigInt>,
        slug -> Text,
        title -> Text,
        current_revision_id -> BigInt,
        archived_at -> Nullable<Timestamp>,
        position -> Integer,
    }
}

table! {
    revisions (id) {
        id -> BigInt,
        page_id -> BigInt,
        content -> Text,
        author_id -> BigInt,
        comment -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

table! {
    silos (id) {
        id -> BigInt,
        slug -> Text,
        name -> Text,
        archived_at -> Nullable<Timestamp>,
        cover_image -> Nullable<Text>,
    }
}

table! {
    users (id) {
        id -> BigInt,
        username -> Text,
        display_name -> Text,
    }
}

joinable!(identities -> users (user_id));
joinable!(pages -> silos (silo_id));
joinable!(revisions -> pages (page_id));
joinable!(revisions -> users (author_id));

allow_tables_to_appear_in_same_query!(identities, pages, revisions, silos, users);
