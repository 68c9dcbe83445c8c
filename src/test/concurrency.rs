/*
 * test/concurrency.rs
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
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_duplicate_pages() {
    let server = Arc::new(create_server().await);
    let silo_id = create_silo(&server).await;
    let done = Arc::new(AtomicBool::new(false));

    // Polls the silo while pages are being created
    let reader = {
        let server = Arc::clone(&server);
        let done = Arc::clone(&done);

        tokio::spawn(async move {
            let mut checks = 0;

            while !done.load(Ordering::Acquire) || checks == 0 {
                let pages = server.list_pages(silo_id).await.expect("Unable to list pages");

                for page in pages {
                    assert_ne!(page.current_revision_id(), RevisionId::from_raw(-1));

                    server
                        .get_revision(page.current_revision_id())
                        .await
                        .expect("Current revision missing");
                }

                checks += 1;
                tokio::task::yield_now().await;
            }

            checks
        })
    };

    let writers: Vec<_> = (0..2)
        .map(|i| {
            let server = Arc::clone(&server);

            tokio::spawn(async move {
                let draft = PageDraft {
                    silo_id,
                    parent_id: None,
                    slug: "contested",
                    title: "Contested",
                };
                let content = format!("Written by task {}", i);
                let commit = RevisionCommit {
                    author_id: SYSTEM_USER_ID,
                    content: &content,
                    comment: None,
                };

                server.create_page(draft, commit).await
            })
        })
        .collect();

    let mut results = Vec::new();
    for writer in writers {
        results.push(writer.await.expect("Writer task panicked"));
    }

    done.store(true, Ordering::Release);
    let checks = reader.await.expect("Reader task panicked");
    assert!(checks > 0);

    let created: Vec<_> = results.iter().filter_map(|result| result.as_ref().ok()).collect();
    assert_eq!(created.len(), 1, "exactly one creation must win");

    for result in &results {
        if let Err(error) = result {
            match error {
                Error::PageExists => (),
                _ => panic!("Error doesn't match: {}", error),
            }
        }
    }

    // No partial rows from the losing transaction
    let pages = server.list_pages(silo_id).await.expect("Unable to list pages");
    let contested: Vec<_> = pages
        .iter()
        .filter(|page| page.slug() == "contested")
        .collect();

    assert_eq!(contested.len(), 1);

    let (page_id, revision_id) = *created[0];
    assert_eq!(contested[0].id(), page_id);
    assert_eq!(contested[0].current_revision_id(), revision_id);

    let history = server
        .list_revisions(page_id)
        .await
        .expect("Unable to list revisions");
    assert_eq!(history.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_revisions() {
    let server = Arc::new(create_server().await);
    let silo_id = create_silo(&server).await;
    let page_id = create_page(&server, silo_id, None, "busy").await;

    let writers: Vec<_> = (0..8)
        .map(|i| {
            let server = Arc::clone(&server);

            tokio::spawn(async move {
                let content = format!("Edit {}", i);
                let commit = RevisionCommit {
                    author_id: SYSTEM_USER_ID,
                    content: &content,
                    comment: None,
                };

                server
                    .create_revision(page_id, commit)
                    .await
                    .expect("Unable to create revision")
            })
        })
        .collect();

    for writer in writers {
        writer.await.expect("Writer task panicked");
    }

    let history = server
        .list_revisions(page_id)
        .await
        .expect("Unable to list revisions");
    assert_eq!(history.len(), 9);

    for pair in history.windows(2) {
        assert!(pair[0].created_at() <= pair[1].created_at());
    }

    let page = server.get_page_by_id(page_id).await.expect("Page missing");
    let latest = history.last().map(|info| info.id());
    assert_eq!(Some(page.current_revision_id()), latest);
}
