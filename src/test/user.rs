/*
 * test/user.rs
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

use super::prelude::*;

#[tokio::test]
async fn users() {
    let server = &create_server().await;

    let user_id = server
        .create_user("squirrelbird", "Jenny Person", "blackmoonhowls")
        .await
        .expect("Unable to create user");

    {
        let user = server
            .get_user_by_username("squirrelbird")
            .await
            .expect("Unable to find user");

        assert_eq!(user.id(), user_id);
        assert_eq!(user.display_name(), "Jenny Person");
        assert!(!user.is_system());
    }

    {
        let system = server
            .get_user_by_id(SYSTEM_USER_ID)
            .await
            .expect("System user missing");

        assert!(system.is_system());
        assert_eq!(system.username(), "system");
    }

    {
        let identity = server
            .get_identity(LOCAL_PROVIDER, "squirrelbird")
            .await
            .expect("Local identity missing");

        assert_eq!(identity.user_id(), user_id);
        assert!(identity.password_hash().is_some());
        assert!(!format!("{:?}", identity).contains("$rscrypt$"));
    }

    {
        let error = server
            .create_user("squirrelbird", "Impostor", "password2")
            .await
            .expect_err("Created duplicate user");

        match error {
            Error::UserNameExists => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }

    {
        let error = server
            .get_user_by_username("nobody")
            .await
            .expect_err("Found missing user");

        match error {
            Error::UserNotFound => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }

    {
        let error = server
            .get_identity("github", "squirrelbird")
            .await
            .expect_err("Found missing identity");

        match error {
            Error::IdentityNotFound => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }

    {
        let error = server
            .create_user("", "Nameless", "password")
            .await
            .expect_err("Created user without a name");

        assert_eq!(error.kind(), ErrorKind::BadRequest);
    }
}

#[tokio::test]
async fn login() {
    let server = &create_server().await;
    let (user_id, username) = create_user_full(server, "letmein-please").await;

    let user = server
        .check_password(&username, "letmein-please")
        .await
        .expect("Valid password rejected");
    assert_eq!(user.id(), user_id);

    for &(name, password) in &[
        (username.as_str(), "letmein-pleasE"),
        (username.as_str(), ""),
        ("nobody", "letmein-please"),
        ("system", "anything"),
    ] {
        let error = server
            .check_password(name, password)
            .await
            .expect_err("Invalid login accepted");

        match error {
            Error::AuthenticationFailed => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }
}

#[tokio::test]
async fn session_key() {
    let server = &create_server().await;
    let key = server.session_key().expect("Session key missing");

    assert_eq!(key.as_bytes(), TEST_SESSION_KEY.as_bytes());
}
