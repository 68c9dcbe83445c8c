/*
 * test/tree.rs
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
async fn page_tree() {
    let server = &create_server().await;
    let (silo_id, home_id, _) = create_silo_full(server).await;

    let servers = create_page(server, silo_id, None, "servers").await;
    let web = create_page(server, silo_id, Some(servers), "web-server").await;
    let nginx = create_page(server, silo_id, Some(web), "nginx").await;
    let db = create_page(server, silo_id, Some(servers), "db-server").await;
    let about = create_page(server, silo_id, None, "about").await;

    let tree = server.get_page_tree(silo_id).await.expect("Unable to get tree");
    let roots: Vec<_> = tree.iter().map(|node| node.id()).collect();
    assert_eq!(roots, vec![home_id, servers, about]);

    let nodes: Vec<_> = flatten(&tree)
        .into_iter()
        .map(|node| (node.id(), node.path()))
        .collect();

    assert_eq!(
        nodes,
        vec![
            (home_id, "home"),
            (servers, "servers"),
            (web, "servers/web-server"),
            (nginx, "servers/web-server/nginx"),
            (db, "servers/db-server"),
            (about, "about"),
        ],
    );

    // Materialized paths agree with both lookups
    for node in flatten(&tree) {
        let path = server
            .get_page_path(node.id())
            .await
            .expect("Unable to build page path");
        assert_eq!(path, node.path());

        let page = server
            .find_page_by_path_str(silo_id, node.path())
            .await
            .expect("Unable to resolve materialized path");
        assert_eq!(&page, node.page());
    }
}

#[tokio::test]
async fn tree_isolation() {
    let server = &create_server().await;
    let first = create_silo(server).await;
    let second = create_silo(server).await;

    create_page(server, first, None, "only-here").await;

    let tree = server.get_page_tree(second).await.expect("Unable to get tree");
    let paths: Vec<_> = flatten(&tree).iter().map(|node| node.path()).collect();
    assert_eq!(paths, vec!["home"]);

    let tree = server
        .get_page_tree(SiloId::from_raw(9999))
        .await
        .expect("Unable to get tree of missing silo");
    assert!(tree.is_empty());
}
