/*
 * user/crypto.rs
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

use crypto::scrypt::{scrypt_check, scrypt_simple, ScryptParams};
use grove_core::{Error, Result};

const PARAM_LOGN: u8 = 14;
const PARAM_R: u32 = 8;
const PARAM_P: u32 = 1;

lazy_static! {
    static ref PARAMS: ScryptParams = ScryptParams::new(PARAM_LOGN, PARAM_R, PARAM_P);
}

/// Hashes a password into a self-describing string with a random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let hash = scrypt_simple(password, &*PARAMS)?;
    Ok(hash)
}

pub fn check_password(password: &str, hash: &str) -> Result<bool> {
    scrypt_check(password, hash).map_err(|error| {
        warn!("Stored password hash is malformed: {}", error);
        Error::StaticMsg(error)
    })
}

#[test]
fn hashing() {
    let hash = hash_password("blackmoonhowls").expect("Unable to hash password");

    assert!(check_password("blackmoonhowls", &hash).unwrap());
    assert!(!check_password("blackmoonhowls!", &hash).unwrap());
    assert!(check_password("blackmoonhowls", "not-a-hash").is_err());

    let other = hash_password("blackmoonhowls").expect("Unable to hash password");
    assert_ne!(hash, other, "salts must differ");
}
