/*
 * test/revision.rs
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
async fn revisions() {
    let server = &create_server().await;
    let silo_id = create_silo(server).await;
    let (user_id, _) = create_user_full(server, "correct horse battery").await;
    let page_id = create_page(server, silo_id, None, "changelog").await;

    let mut expected = Vec::new();
    for (i, content) in ["first edit", "second edit", "third edit"].iter().enumerate() {
        let comment = format!("edit #{}", i + 1);
        let commit = RevisionCommit {
            author_id: user_id,
            content,
            comment: Some(comment.as_str()),
        };

        let revision_id = server
            .create_revision(page_id, commit)
            .await
            .expect("Unable to create revision");

        let page = server.get_page_by_id(page_id).await.expect("Page missing");
        assert_eq!(page.current_revision_id(), revision_id);

        expected.push(revision_id);
    }

    let content = server
        .get_page_content(page_id)
        .await
        .expect("Unable to get page content");
    assert_eq!(content, "third edit");

    let history = server
        .list_revisions(page_id)
        .await
        .expect("Unable to list revisions");

    assert_eq!(history.len(), 4);
    assert_eq!(history[0].author_id(), SYSTEM_USER_ID);
    assert_eq!(history[0].comment(), None);

    let ids: Vec<_> = history[1..].iter().map(|info| info.id()).collect();
    assert_eq!(ids, expected);

    for (info, i) in history[1..].iter().zip(1..) {
        assert_eq!(info.page_id(), page_id);
        assert_eq!(info.author_name(), "Test User");
        assert_eq!(info.comment(), Some(format!("edit #{}", i).as_str()));
    }

    for pair in history.windows(2) {
        assert!(pair[0].created_at() <= pair[1].created_at());
        assert!(pair[0].id() < pair[1].id());
    }

    // Earlier revisions stay readable
    let content = server
        .get_revision_content(expected[0])
        .await
        .expect("Unable to get old revision");
    assert_eq!(content, "first edit");
}

#[tokio::test]
async fn revision_errors() {
    let server = &create_server().await;
    let missing_page = PageId::from_raw(4242);
    let missing_revision = RevisionId::from_raw(4242);

    let commit = RevisionCommit {
        author_id: SYSTEM_USER_ID,
        content: "nowhere",
        comment: None,
    };

    {
        let error = server
            .create_revision(missing_page, commit)
            .await
            .expect_err("Created revision for missing page");

        match error {
            Error::PageNotFound => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }

    {
        let error = server
            .get_revision(missing_revision)
            .await
            .expect_err("Found missing revision");

        match error {
            Error::RevisionNotFound => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }

    {
        let error = server
            .get_revision_content(missing_revision)
            .await
            .expect_err("Found missing revision content");

        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    {
        let error = server
            .list_revisions(missing_page)
            .await
            .expect_err("Listed revisions of missing page");

        match error {
            Error::PageNotFound => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    }

    // Unknown authors are rejected, leaving the page untouched
    let silo_id = create_silo(server).await;
    let page_id = create_page(server, silo_id, None, "guarded").await;
    let before = server.get_page_by_id(page_id).await.expect("Page missing");

    let commit = RevisionCommit {
        author_id: UserId::from_raw(777),
        content: "ghost edit",
        comment: None,
    };

    let error = server
        .create_revision(page_id, commit)
        .await
        .expect_err("Created revision by unknown author");
    match error {
        Error::UserNotFound => (),
        _ => panic!("Error doesn't match: {}", error),
    }

    let after = server.get_page_by_id(page_id).await.expect("Page missing");
    assert_eq!(before.current_revision_id(), after.current_revision_id());

    let history = server
        .list_revisions(page_id)
        .await
        .expect("Unable to list revisions");
    assert_eq!(history.len(), 1);
}
