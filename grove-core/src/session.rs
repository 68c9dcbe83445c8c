/*
 * session.rs
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
use std::convert::TryFrom;
use std::fmt::{self, Debug};

/// Shortest secret accepted for signing session cookies.
pub const SESSION_KEY_MIN_LENGTH: usize = 32;

/// Secret used by the presentation layer to sign session cookies.
///
/// It is handed to the server through its configuration rather than read
/// from the environment at arbitrary points.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(key: String) -> Result<Self> {
        if key.len() < SESSION_KEY_MIN_LENGTH {
            return Err(Error::InvalidSessionKey);
        }

        Ok(SessionKey(key))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl TryFrom<String> for SessionKey {
    type Error = Error;

    #[inline]
    fn try_from(key: String) -> Result<Self> {
        SessionKey::new(key)
    }
}

impl Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("SessionKey").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn length() {
        assert!(SessionKey::new(String::new()).is_err());
        assert!(SessionKey::new("a".repeat(31)).is_err());

        let key = SessionKey::new("k".repeat(32)).expect("32-byte key rejected");
        assert_eq!(key.as_bytes().len(), 32);

        let key = SessionKey::try_from("0123456789abcdef0123456789abcdef-extra".to_string());
        assert!(key.is_ok());
    }

    #[test]
    fn redacted() {
        let key = SessionKey::new("super-secret-value-that-is-long-enough".into()).unwrap();
        let debug = format!("{:?}", key);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
