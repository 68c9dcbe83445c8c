/*
 * silo/models.rs
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

use crate::schema::silos;

/// Slug of the page bootstrapped into every new silo.
pub const HOME_SLUG: &str = "home";
pub const HOME_TITLE: &str = "Home";

#[derive(Debug, Insertable)]
#[table_name = "silos"]
pub struct NewSilo<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub cover_image: Option<&'a str>,
}
