/*
 * tree.rs
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

//! Reconstruction of a silo's page forest from its flat page list.
//!
//! Pages are stored as an adjacency list (each row points at its parent).
//! The forest is rebuilt on every read: every page is put in an arena indexed
//! by ID, then linked to its parent in a single pass over the input.

use crate::{Page, PageId};
use std::collections::HashMap;

/// A page placed in its silo's hierarchy.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PageNode {
    #[serde(flatten)]
    page: Page,
    path: String,
    children: Vec<PageNode>,
}

impl PageNode {
    #[inline]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[inline]
    pub fn into_page(self) -> Page {
        self.page
    }

    #[inline]
    pub fn id(&self) -> PageId {
        self.page.id()
    }

    #[inline]
    pub fn slug(&self) -> &str {
        self.page.slug()
    }

    #[inline]
    pub fn title(&self) -> &str {
        self.page.title()
    }

    /// Slash-separated slugs from the root ancestor down to this page.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn children(&self) -> &[PageNode] {
        &self.children
    }
}

/// Builds the page forest of a silo.
///
/// `pages` must already be sorted by position, since sibling order in the
/// output is the order pages appear in the input. Pages whose parent is not
/// part of the input (archived, or from another silo) are dropped along with
/// their descendants, as are pages that name themselves as parent or that sit
/// on a parent cycle.
pub fn build_tree(pages: Vec<Page>) -> Vec<PageNode> {
    let mut index = HashMap::with_capacity(pages.len());
    for (idx, page) in pages.iter().enumerate() {
        index.entry(page.id()).or_insert(idx);
    }

    let mut roots = Vec::new();
    let mut children = vec![Vec::new(); pages.len()];

    for (idx, page) in pages.iter().enumerate() {
        if index[&page.id()] != idx {
            warn!("Skipping duplicate page ID {} in tree input", page.id());
            continue;
        }

        match page.parent_id() {
            None => roots.push(idx),
            Some(parent_id) if parent_id == page.id() => {
                warn!("Page ID {} is its own parent, dropping it", page.id());
            }
            Some(parent_id) => match index.get(&parent_id) {
                Some(&parent_idx) => children[parent_idx].push(idx),
                None => debug!(
                    "Dropping orphaned page ID {} (parent {} not listed)",
                    page.id(),
                    parent_id,
                ),
            },
        }
    }

    let mut arena: Vec<Option<Page>> = pages.into_iter().map(Some).collect();

    roots
        .into_iter()
        .filter_map(|idx| assemble(idx, None, &mut arena, &children))
        .collect()
}

fn assemble(
    idx: usize,
    parent_path: Option<&str>,
    arena: &mut [Option<Page>],
    children: &[Vec<usize>],
) -> Option<PageNode> {
    // Each slot is taken once, so a node can never be emitted twice.
    let page = arena[idx].take()?;
    let path = match parent_path {
        Some(prefix) => format!("{}/{}", prefix, page.slug()),
        None => page.slug().to_owned(),
    };

    let nodes = children[idx]
        .iter()
        .filter_map(|&child| assemble(child, Some(&path), arena, children))
        .collect();

    Some(PageNode {
        page,
        path,
        children: nodes,
    })
}

/// Lists every node of a forest depth-first, parents before their children.
pub fn flatten(forest: &[PageNode]) -> Vec<&PageNode> {
    let mut nodes = Vec::new();
    let mut stack: Vec<&PageNode> = forest.iter().rev().collect();

    while let Some(node) = stack.pop() {
        nodes.push(node);
        stack.extend(node.children.iter().rev());
    }

    nodes
}
