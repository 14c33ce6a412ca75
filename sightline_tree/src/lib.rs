// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Tree: an iterative, callback-driven tree walk for scene graphs.
//!
//! Design canvases keep their documents as trees of frames, groups, and shapes.
//! Interactive features (snapping a dragged selection, measuring against a
//! hovered node) need to ask small structural questions of that tree every
//! pointer frame: "who is the parent of this node?", "which nodes sit next to
//! it?". This crate provides the primitive those questions are built on.
//!
//! - [`walk`] visits nodes in pre-order, calling an `enter` callback before a
//!   node's children and an `exit` callback after its whole subtree.
//! - Returning `false` from `enter` skips that node's children; its `exit` still fires.
//! - [`WalkControl::terminate`] stops the walk immediately from either callback.
//! - The walk keeps its own stack on the heap, so arbitrarily deep scene graphs
//!   do not overflow the call stack.
//!
//! The [`candidates`] module builds on [`walk`] to resolve the parent and
//! siblings of a selection, which is the usual source of snap targets.
//!
//! ## Node model
//!
//! Any type implementing [`TreeNode`] can be walked. Children are borrowed as a
//! slice, so sibling order is the slice order and a node can never own one of
//! its ancestors. The walk never mutates the tree.
//!
//! ## Minimal usage
//!
//! ```
//! use sightline_tree::{Node, walk};
//!
//! let tree = [Node::with_children(
//!     "root",
//!     vec![
//!         Node::with_children("a", vec![Node::leaf("c"), Node::leaf("d")]),
//!         Node::leaf("b"),
//!     ],
//! )];
//!
//! let mut entered = Vec::new();
//! let mut exited = Vec::new();
//! walk(
//!     &tree,
//!     |node, _parent, _visit, _control| {
//!         entered.push(node.value);
//!         true
//!     },
//!     |node, _parent, _visit, _control| exited.push(node.value),
//! );
//!
//! assert_eq!(entered, ["root", "a", "c", "d", "b"]);
//! assert_eq!(exited, ["c", "d", "a", "b", "root"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

pub mod candidates;

/// A node that exposes its children as an ordered slice.
///
/// Leaves return an empty slice.
pub trait TreeNode: Sized {
    /// Children of this node, in sibling order.
    fn children(&self) -> &[Self];
}

/// A simple owned tree node carrying a value.
///
/// Handy for tests and for callers that build a throwaway hierarchy from a
/// document store; any other type can implement [`TreeNode`] directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node<T> {
    /// Payload of this node.
    pub value: T,
    /// Child nodes, in sibling order.
    pub children: Vec<Self>,
}

impl<T> Node<T> {
    /// Create a node without children.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Create a node with the given children.
    pub fn with_children(value: T, children: Vec<Self>) -> Self {
        Self { value, children }
    }
}

impl<T> TreeNode for Node<T> {
    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Position of a visited node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Visit {
    /// Distance from the roots; roots have depth 0.
    pub depth: usize,
    /// Index of the node within its parent's children (or within the roots).
    pub index: usize,
}

/// Handle passed to walk callbacks to stop the traversal.
#[derive(Clone, Debug, Default)]
pub struct WalkControl {
    terminated: bool,
}

impl WalkControl {
    /// Stop the walk. No further `enter` or `exit` callbacks run, including
    /// the pending `exit` of the node whose `enter` called this.
    pub fn terminate(&mut self) {
        self.terminated = true;
    }

    /// Whether [`WalkControl::terminate`] has been called.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

/// How a walk finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    /// Every reachable node was visited.
    Completed,
    /// A callback called [`WalkControl::terminate`].
    Terminated,
}

struct Frame<'a, N> {
    node: &'a N,
    parent: Option<&'a N>,
    visit: Visit,
    exiting: bool,
}

/// Walk `roots` and their descendants in pre-order.
///
/// `enter` runs before a node's children and returns whether to descend into
/// them. `exit` runs once the node's subtree is done, or right after `enter`
/// when it returned `false`.
///
/// Both callbacks receive the node, its parent (`None` for roots), its
/// [`Visit`] position, and a [`WalkControl`] that can end the walk early.
pub fn walk<'a, N, E, X>(roots: &'a [N], mut enter: E, mut exit: X) -> WalkOutcome
where
    N: TreeNode,
    E: FnMut(&'a N, Option<&'a N>, Visit, &mut WalkControl) -> bool,
    X: FnMut(&'a N, Option<&'a N>, Visit, &mut WalkControl),
{
    let mut control = WalkControl::default();
    let mut stack: Vec<Frame<'a, N>> = Vec::with_capacity(roots.len());
    push_children(&mut stack, roots, None, 0);

    while let Some(frame) = stack.pop() {
        if frame.exiting {
            exit(frame.node, frame.parent, frame.visit, &mut control);
            if control.terminated {
                return WalkOutcome::Terminated;
            }
            continue;
        }

        let descend = enter(frame.node, frame.parent, frame.visit, &mut control);
        if control.terminated {
            return WalkOutcome::Terminated;
        }
        stack.push(Frame {
            exiting: true,
            ..frame
        });
        if descend {
            push_children(
                &mut stack,
                frame.node.children(),
                Some(frame.node),
                frame.visit.depth + 1,
            );
        }
    }

    WalkOutcome::Completed
}

/// Walk a single root. See [`walk`].
pub fn walk_node<'a, N, E, X>(root: &'a N, enter: E, exit: X) -> WalkOutcome
where
    N: TreeNode,
    E: FnMut(&'a N, Option<&'a N>, Visit, &mut WalkControl) -> bool,
    X: FnMut(&'a N, Option<&'a N>, Visit, &mut WalkControl),
{
    walk(core::slice::from_ref(root), enter, exit)
}

// Pushed in reverse so the first child is popped first.
fn push_children<'a, N>(
    stack: &mut Vec<Frame<'a, N>>,
    children: &'a [N],
    parent: Option<&'a N>,
    depth: usize,
) {
    for (index, node) in children.iter().enumerate().rev() {
        stack.push(Frame {
            node,
            parent,
            visit: Visit { depth, index },
            exiting: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> [Node<&'static str>; 1] {
        [Node::with_children(
            "root",
            vec![
                Node::with_children("a", vec![Node::leaf("c"), Node::leaf("d")]),
                Node::leaf("b"),
            ],
        )]
    }

    #[test]
    fn preorder_enter_and_postorder_exit() {
        let tree = sample();
        let mut entered = Vec::new();
        let mut exited = Vec::new();
        let outcome = walk(
            &tree,
            |n, _, _, _| {
                entered.push(n.value);
                true
            },
            |n, _, _, _| exited.push(n.value),
        );
        assert_eq!(outcome, WalkOutcome::Completed);
        assert_eq!(entered, ["root", "a", "c", "d", "b"]);
        assert_eq!(exited, ["c", "d", "a", "b", "root"]);
    }

    #[test]
    fn returning_false_skips_children_but_still_exits() {
        let tree = sample();
        let mut entered = Vec::new();
        let mut exited = Vec::new();
        walk(
            &tree,
            |n, _, _, _| {
                entered.push(n.value);
                n.value != "a"
            },
            |n, _, _, _| exited.push(n.value),
        );
        assert_eq!(entered, ["root", "a", "b"]);
        assert_eq!(exited, ["a", "b", "root"]);
    }

    #[test]
    fn terminate_in_enter_stops_everything() {
        let tree = sample();
        let mut entered = Vec::new();
        let mut exited = Vec::new();
        let outcome = walk(
            &tree,
            |n, _, _, control| {
                entered.push(n.value);
                if n.value == "a" {
                    control.terminate();
                }
                true
            },
            |n, _, _, _| exited.push(n.value),
        );
        assert_eq!(outcome, WalkOutcome::Terminated);
        assert_eq!(entered, ["root", "a"]);
        assert!(exited.is_empty(), "no exit may fire after terminate");
    }

    #[test]
    fn terminate_in_exit_stops_remaining_siblings() {
        let tree = sample();
        let mut entered = Vec::new();
        let mut exited = Vec::new();
        walk(
            &tree,
            |n, _, _, _| {
                entered.push(n.value);
                true
            },
            |n, _, _, control| {
                exited.push(n.value);
                if n.value == "c" {
                    control.terminate();
                }
            },
        );
        assert_eq!(entered, ["root", "a", "c"]);
        assert_eq!(exited, ["c"]);
    }

    #[test]
    fn visit_reports_depth_index_and_parent() {
        let tree = sample();
        let mut seen = Vec::new();
        walk(
            &tree,
            |n, p, v, _| {
                seen.push((n.value, p.map(|p| p.value), v.depth, v.index));
                true
            },
            |_, _, _, _| {},
        );
        assert_eq!(
            seen,
            [
                ("root", None, 0, 0),
                ("a", Some("root"), 1, 0),
                ("c", Some("a"), 2, 0),
                ("d", Some("a"), 2, 1),
                ("b", Some("root"), 1, 1),
            ]
        );
    }

    #[test]
    fn multiple_roots_keep_their_order() {
        let roots = [
            Node::leaf(1),
            Node::with_children(2, vec![Node::leaf(3)]),
            Node::leaf(4),
        ];
        let mut entered = Vec::new();
        walk(
            &roots,
            |n, _, v, _| {
                entered.push((n.value, v.index));
                true
            },
            |_, _, _, _| {},
        );
        assert_eq!(entered, [(1, 0), (2, 1), (3, 0), (4, 2)]);
    }

    #[test]
    fn empty_roots_complete_immediately() {
        let roots: [Node<u8>; 0] = [];
        let outcome = walk(&roots, |_, _, _, _| true, |_, _, _, _| {});
        assert_eq!(outcome, WalkOutcome::Completed);
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let mut node = Node::leaf(0_u32);
        for i in 1..100_000 {
            node = Node::with_children(i, vec![node]);
        }
        let mut count = 0_usize;
        let mut max_depth = 0;
        walk_node(
            &node,
            |_, _, v, _| {
                count += 1;
                max_depth = max_depth.max(v.depth);
                true
            },
            |_, _, _, _| {},
        );
        assert_eq!(count, 100_000);
        assert_eq!(max_depth, 99_999);
        // Dropping a deep owned chain recurses in `Drop`; unwind it by hand.
        let mut next = Some(node);
        while let Some(mut n) = next {
            next = n.children.pop();
        }
    }
}
