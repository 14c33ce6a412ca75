// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural lookups used to pick snap candidates.
//!
//! A dragged selection snaps against its neighbourhood in the document: the
//! other children of its parent and the parent itself. These helpers resolve
//! that neighbourhood with a single [`walk`] over the tree, identifying nodes by
//! a caller-supplied key function (usually the node id).
//!
//! Nodes at the root level have no parent; the other roots are their siblings.
//!
//! ```
//! use sightline_tree::{Node, candidates::snap_candidates};
//!
//! let tree = [Node::with_children(
//!     "page",
//!     vec![Node::leaf("a"), Node::leaf("b"), Node::leaf("c")],
//! )];
//!
//! let found: Vec<_> = snap_candidates(&tree, |n| n.value, &["b"])
//!     .into_iter()
//!     .map(|n| n.value)
//!     .collect();
//! assert_eq!(found, ["page", "a", "c"]);
//! ```

use alloc::vec::Vec;

use crate::{TreeNode, walk};

/// Parent and siblings of a node.
#[derive(Clone, Debug)]
pub struct Family<'a, N> {
    /// The parent, or `None` for a root.
    pub parent: Option<&'a N>,
    /// The other children of the parent (or the other roots), in sibling order.
    pub siblings: Vec<&'a N>,
}

/// Resolve the parent and siblings of the first node whose key equals `id`.
///
/// Returns `None` if no node matches.
pub fn family_of<'a, N, K, F>(roots: &'a [N], key: F, id: &K) -> Option<Family<'a, N>>
where
    N: TreeNode,
    K: PartialEq,
    F: Fn(&N) -> K,
{
    let mut found: Option<(&'a N, Option<&'a N>)> = None;
    walk(
        roots,
        |node, parent, _, control| {
            if key(node) == *id {
                found = Some((node, parent));
                control.terminate();
            }
            true
        },
        |_, _, _, _| {},
    );

    let (node, parent) = found?;
    let pool = parent.map_or(roots, TreeNode::children);
    let siblings = pool
        .iter()
        .filter(|sibling| !core::ptr::eq(*sibling, node))
        .collect();
    Some(Family { parent, siblings })
}

/// Parent of the node whose key equals `id`.
///
/// `None` when the node is a root or is not in the tree.
pub fn parent_of<'a, N, K, F>(roots: &'a [N], key: F, id: &K) -> Option<&'a N>
where
    N: TreeNode,
    K: PartialEq,
    F: Fn(&N) -> K,
{
    family_of(roots, key, id)?.parent
}

/// Siblings of the node whose key equals `id`, excluding the node itself.
pub fn siblings_of<'a, N, K, F>(roots: &'a [N], key: F, id: &K) -> Vec<&'a N>
where
    N: TreeNode,
    K: PartialEq,
    F: Fn(&N) -> K,
{
    family_of(roots, key, id)
        .map(|family| family.siblings)
        .unwrap_or_default()
}

/// Nodes a selection should snap against.
///
/// Yields the parents of the selected nodes in traversal order, then the
/// siblings of the selection. Siblings are only reported when every selected
/// node has the same parent (or all are roots); a selection spread across
/// several parents snaps to those parents alone. Selected nodes are never
/// candidates, and each candidate is reported once.
pub fn snap_candidates<'a, N, K, F>(roots: &'a [N], key: F, selection: &[K]) -> Vec<&'a N>
where
    N: TreeNode,
    K: PartialEq,
    F: Fn(&N) -> K,
{
    let mut out: Vec<&'a N> = Vec::new();
    if selection.is_empty() {
        return out;
    }

    let is_selected = |n: &N| selection.contains(&key(n));
    let mut parents: Vec<Option<&'a N>> = Vec::new();
    walk(
        roots,
        |node, parent, _, _| {
            if is_selected(node) && !parents.iter().any(|p| same_node(*p, parent)) {
                parents.push(parent);
            }
            true
        },
        |_, _, _, _| {},
    );

    out.extend(parents.iter().flatten().filter(|p| !is_selected(**p)));
    if let [shared] = parents[..] {
        let pool = shared.map_or(roots, TreeNode::children);
        out.extend(pool.iter().filter(|sibling| !is_selected(*sibling)));
    }
    out
}

fn same_node<N>(a: Option<&N>, b: Option<&N>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => core::ptr::eq(a, b),
        _ => false,
    }
}
