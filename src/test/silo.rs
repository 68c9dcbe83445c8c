/*
 * test/silo.rs
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
async fn silos() {
    let server = &create_server().await;
    let (silo_id, home_id, slug) = create_silo_full(server).await;

    {
        let silo = server
            .get_silo_by_slug(&slug)
            .await
            .expect("Couldn't find silo");

        assert_eq!(silo.id(), silo_id);
        assert_eq!(silo.name(), "Test");
        assert_eq!(silo.cover_image(), None);
        assert!(!silo.is_archived());
    }

    // Bootstrapped home page
    {
        let home = server
            .find_page_by_path(silo_id, &["home"])
            .await
            .expect("Home page missing");

        assert_eq!(home.id(), home_id);
        assert_eq!(home.title(), "Home");
        assert!(home.is_root());

        let content = server
            .get_page_content(home_id)
            .await
            .expect("Unable to get home content");

        assert_eq!(content, "* Welcome to the Test Silo!");

        let history = server
            .list_revisions(home_id)
            .await
            .expect("Unable to list revisions");

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id(), home.current_revision_id());
        assert_eq!(history[0].author_id(), SYSTEM_USER_ID);
        assert_eq!(history[0].author_name(), "System");
        assert_eq!(history[0].comment(), Some("Initial creation"));
    }

    {
        let error = server
            .create_silo("Again", &slug, Some("cover.png"))
            .await
            .expect_err("Created duplicate silo");

        match error {
            Error::SiloExists => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }

    {
        let error = server
            .get_silo_by_slug("nonexistent")
            .await
            .expect_err("Found silo");

        match error {
            Error::SiloNotFound => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }
}

#[tokio::test]
async fn silo_validation() {
    let server = &create_server().await;

    let error = server
        .create_silo("Bad", "has/slash", None)
        .await
        .expect_err("Accepted slug with a slash");
    assert_eq!(error.kind(), ErrorKind::BadRequest);

    let error = server
        .create_silo("  ", "blank-name", None)
        .await
        .expect_err("Accepted blank name");
    assert_eq!(error.kind(), ErrorKind::BadRequest);

    let silos = server.list_silos().await.expect("Unable to list silos");
    assert!(silos.is_empty());
}

#[tokio::test]
async fn silo_archival() {
    let server = &create_server().await;
    let (first_id, first_home, first_slug) = create_silo_full(server).await;
    let second_id = create_silo(server).await;

    let silos = server.list_silos().await.expect("Unable to list silos");
    let ids: Vec<_> = silos.iter().map(|silo| silo.id()).collect();
    assert_eq!(ids, vec![first_id, second_id]);

    server
        .archive_silo(first_id)
        .await
        .expect("Unable to archive silo");

    let silos = server.list_silos().await.expect("Unable to list silos");
    assert_eq!(silos.len(), 1);
    assert_eq!(silos[0].id(), second_id);

    assert!(server.get_silo_by_slug(&first_slug).await.is_err());

    let silo = server
        .get_silo_by_id(first_id)
        .await
        .expect("Archived silo not found by ID");
    assert!(silo.is_archived());

    // Content of an archived silo stays readable
    server
        .get_page_content(first_home)
        .await
        .expect("Unable to read archived silo's page");

    {
        let error = server
            .archive_silo(first_id)
            .await
            .expect_err("Archived silo twice");

        match error {
            Error::SiloNotFound => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }

    {
        let draft = PageDraft {
            silo_id: first_id,
            parent_id: None,
            slug: "late",
            title: "Late",
        };
        let commit = RevisionCommit {
            author_id: SYSTEM_USER_ID,
            content: "too late",
            comment: None,
        };

        let error = server
            .create_page(draft, commit)
            .await
            .expect_err("Created page in archived silo");

        match error {
            Error::SiloNotFound => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }
}
