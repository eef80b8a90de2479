// Copyright 2024 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! An arena-allocated tree for widget hierarchies.
//!
//! Items are stored flat, keyed by id. Each node lists its children by id and
//! keeps a non-owning id back-reference to its parent, so ancestor and descendant
//! queries are plain walks over the arena.
//!
//! A node without a parent is a root. Detaching a node turns it (and its whole
//! subtree) into a root, which can later be attached under another node.

use hashbrown::HashMap;

/// Identifier of a node in a [`TreeArena`].
pub type NodeId = u64;

#[derive(Debug)]
struct TreeNode<T> {
    item: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A container type for a forest of items.
///
/// This type is used to store zero, one or many trees of a given item type. It
/// keeps track of parent-child relationships and gives access to any item by id.
#[derive(Debug)]
pub struct TreeArena<T> {
    nodes: HashMap<NodeId, TreeNode<T>>,
    roots: Vec<NodeId>,
}

impl<T> Default for TreeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeArena<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// Ids of all the roots, in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns true if the arena has a node with the given id.
    pub fn contains(&self, id: impl Into<NodeId>) -> bool {
        self.nodes.contains_key(&id.into())
    }

    /// Number of nodes in the arena, across all trees.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Shared access to an item.
    pub fn get(&self, id: impl Into<NodeId>) -> Option<&T> {
        self.nodes.get(&id.into()).map(|node| &node.item)
    }

    /// Mutable access to an item.
    pub fn get_mut(&mut self, id: impl Into<NodeId>) -> Option<&mut T> {
        self.nodes.get_mut(&id.into()).map(|node| &mut node.item)
    }

    /// The parent of the given node.
    ///
    /// Returns `None` both for roots and for ids not in the arena.
    pub fn parent_of(&self, id: impl Into<NodeId>) -> Option<NodeId> {
        self.nodes.get(&id.into())?.parent
    }

    /// The direct children of the given node, in insertion order.
    ///
    /// Returns an empty slice for ids not in the arena.
    pub fn children_of(&self, id: impl Into<NodeId>) -> &[NodeId] {
        self.nodes
            .get(&id.into())
            .map_or(&[], |node| node.children.as_slice())
    }

    /// Insert a new root with the given id.
    ///
    /// # Panics
    ///
    /// If the arena already contains an item with the given id.
    pub fn insert_root(&mut self, id: impl Into<NodeId>, item: T) -> &mut T {
        let id = id.into();
        assert!(!self.nodes.contains_key(&id), "Key already present");
        self.roots.push(id);
        &mut self
            .nodes
            .entry(id)
            .or_insert(TreeNode {
                item,
                parent: None,
                children: Vec::new(),
            })
            .item
    }

    /// Insert a new leaf under `parent_id`.
    ///
    /// # Panics
    ///
    /// If the arena already contains an item with the given id,
    /// or if `parent_id` isn't in the arena.
    #[track_caller]
    pub fn insert_child(
        &mut self,
        parent_id: impl Into<NodeId>,
        id: impl Into<NodeId>,
        item: T,
    ) -> &mut T {
        let parent_id = parent_id.into();
        let id = id.into();
        assert!(!self.nodes.contains_key(&id), "Key already present");
        self.nodes
            .get_mut(&parent_id)
            .expect("insert_child: parent not in arena")
            .children
            .push(id);
        &mut self
            .nodes
            .entry(id)
            .or_insert(TreeNode {
                item,
                parent: Some(parent_id),
                children: Vec::new(),
            })
            .item
    }

    /// Unlink the given node from its parent, turning its subtree into a separate tree.
    ///
    /// Does nothing if the node is already a root or isn't in the arena.
    pub fn detach(&mut self, id: impl Into<NodeId>) {
        let id = id.into();
        let Some(parent_id) = self.parent_of(id) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.retain(|child| *child != id);
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = None;
        }
        self.roots.push(id);
    }

    /// Link the root `id` under `parent_id`.
    ///
    /// # Panics
    ///
    /// If either id isn't in the arena, if `id` isn't a root,
    /// or if `parent_id` is inside the subtree of `id`.
    #[track_caller]
    pub fn attach(&mut self, id: impl Into<NodeId>, parent_id: impl Into<NodeId>) {
        let id = id.into();
        let parent_id = parent_id.into();
        assert!(self.nodes.contains_key(&id), "attach: node not in arena");
        assert!(
            self.nodes.contains_key(&parent_id),
            "attach: parent not in arena"
        );
        assert!(
            self.parent_of(id).is_none(),
            "attach: node already has a parent"
        );
        assert!(
            parent_id != id && !self.ancestors(parent_id).any(|ancestor| ancestor == id),
            "attach: cannot attach a node inside its own subtree"
        );

        self.roots.retain(|root| *root != id);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = Some(parent_id);
        }
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(id);
        }
    }

    /// Remove the item with the given id from the arena.
    ///
    /// This will also silently remove all descendants of the item.
    ///
    /// Returns the removed item, or `None` if the id isn't in the arena.
    #[must_use]
    pub fn remove(&mut self, id: impl Into<NodeId>) -> Option<T> {
        let id = id.into();
        if !self.nodes.contains_key(&id) {
            return None;
        }
        self.detach(id);
        self.roots.retain(|root| *root != id);

        for descendant in self.descendants(id) {
            self.nodes.remove(&descendant);
        }
        self.nodes.remove(&id).map(|node| node.item)
    }

    /// Iterate over the ancestors of the given node, nearest first.
    ///
    /// The node itself isn't included.
    pub fn ancestors(&self, id: impl Into<NodeId>) -> Ancestors<'_, T> {
        Ancestors {
            arena: self,
            next: self.parent_of(id),
        }
    }

    /// Ids of all the descendants of the given node, in pre-order.
    ///
    /// The node itself isn't included.
    pub fn descendants(&self, id: impl Into<NodeId>) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.children_of(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.children_of(current).iter().rev());
        }
        result
    }

    /// Construct the path of items from the given item to the root of its tree.
    ///
    /// The path is in order from the bottom to the top, starting at the given item
    /// and ending at the root.
    ///
    /// If the id is not in the tree, returns an empty vector.
    pub fn get_id_path(&self, id: impl Into<NodeId>) -> Vec<NodeId> {
        let id = id.into();
        if !self.nodes.contains_key(&id) {
            return Vec::new();
        }
        std::iter::once(id).chain(self.ancestors(id)).collect()
    }
}

/// Iterator over the ancestors of a node, nearest first.
///
/// Returned by [`TreeArena::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'arena, T> {
    arena: &'arena TreeArena<T>,
    next: Option<NodeId>,
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.arena.parent_of(current);
        Some(current)
    }
}
