/*
 * slug.rs
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

use crate::{Error, Result};
use regex::Regex;

pub const MAX_SLUG_LENGTH: usize = 128;

lazy_static! {
    static ref SLUG_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9_\-]*[A-Za-z0-9])?$").expect("invalid slug regex");
}

/// Checks that a slug is usable as one segment of a page path.
///
/// Slugs are ASCII alphanumerics with inner dashes or underscores. Slashes
/// are never allowed, since they separate path segments.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.len() > MAX_SLUG_LENGTH || !SLUG_REGEX.is_match(slug) {
        debug!("Rejecting invalid slug '{}'", slug);
        return Err(Error::InvalidSlug(slug.to_owned()));
    }

    Ok(())
}

/// Splits a page path into its slugs, ignoring empty segments.
#[inline]
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

#[test]
fn slugs() {
    for slug in &["home", "web-server", "db_01", "A", "scp-173"] {
        assert!(validate_slug(slug).is_ok(), "rejected '{}'", slug);
    }

    for slug in &["", "-lead", "trail_", "a/b", "white space", "ümlaut", "x."] {
        assert!(validate_slug(slug).is_err(), "accepted '{}'", slug);
    }

    assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH)).is_ok());
    assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)).is_err());
}

#[test]
fn paths() {
    assert_eq!(split_path("servers/web-server"), vec!["servers", "web-server"]);
    assert_eq!(split_path("/servers//nginx/"), vec!["servers", "nginx"]);
    assert!(split_path("").is_empty());
    assert!(split_path("///").is_empty());
}
