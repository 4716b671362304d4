//! Arena-backed node storage for the directory tree.
//!
//! Parent/child links are arena indices rather than owned references, so
//! move and delete only rewire indices and never fight the borrow checker
//! over a reference cycle.

use generational_arena::{Arena, Index};
use hashlink::LinkedHashMap;
use tracing::instrument;

/// A single named entry in the directory tree.
///
/// The node is a passive data holder; all traversal and rewiring happens
/// through [`NodeArena`] and the tree operations built on it.
#[derive(Debug)]
pub struct Node {
    /// Entry name, empty only for the root
    pub name: String,
    /// Index of the parent node, `None` only for the root
    pub parent: Option<Index>,
    /// Child name -> arena index, insertion order preserved.
    /// Sibling uniqueness is enforced by the map key: re-adding a name
    /// overwrites (last-write-wins).
    pub children: LinkedHashMap<String, Index>,
}

/// Arena storage for all nodes of one directory tree.
///
/// The root always exists: it is created unnamed on construction and a full
/// reset replaces the whole arena rather than leaving the root absent.
#[derive(Debug)]
pub struct NodeArena {
    arena: Arena<Node>,
    root: Index,
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeArena {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(Node {
            name: String::new(),
            parent: None,
            children: LinkedHashMap::new(),
        });
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn get(&self, idx: Index) -> Option<&Node> {
        self.arena.get(idx)
    }

    pub fn get_mut(&mut self, idx: Index) -> Option<&mut Node> {
        self.arena.get_mut(idx)
    }

    /// Number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Allocate a detached node; it joins the tree via [`add_child`].
    ///
    /// [`add_child`]: NodeArena::add_child
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, name: &str) -> Index {
        self.arena.insert(Node {
            name: name.to_string(),
            parent: None,
            children: LinkedHashMap::new(),
        })
    }

    #[instrument(level = "trace", skip(self))]
    pub fn has_child(&self, parent: Index, name: &str) -> bool {
        self.child(parent, name).is_some()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn child(&self, parent: Index, name: &str) -> Option<Index> {
        self.arena.get(parent)?.children.get(name).copied()
    }

    /// Attach `child` under `parent`, keyed by the child's name.
    ///
    /// Returns the index of an overwritten same-named child, if any; that
    /// subtree is no longer reachable from the tree and the caller decides
    /// whether to [`free`] it.
    ///
    /// [`free`]: NodeArena::free
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: Index, child: Index) -> Option<Index> {
        let name = match self.arena.get_mut(child) {
            Some(node) => {
                node.parent = Some(parent);
                node.name.clone()
            }
            None => return None,
        };
        self.arena.get_mut(parent)?.children.insert(name, child)
    }

    /// Remove the named entry from `parent`'s children, if present.
    /// The node itself stays in the arena.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child(&mut self, parent: Index, name: &str) -> Option<Index> {
        self.arena.get_mut(parent)?.children.remove(name)
    }

    /// Unlink `idx` from its parent: removes the map entry and clears the
    /// parent index. No-op for the root or an already detached node.
    #[instrument(level = "trace", skip(self))]
    pub fn detach(&mut self, idx: Index) {
        let (name, parent) = match self.arena.get(idx) {
            Some(node) => (node.name.clone(), node.parent),
            None => return,
        };
        if let Some(parent_idx) = parent {
            if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                parent_node.children.remove(&name);
            }
        }
        if let Some(node) = self.arena.get_mut(idx) {
            node.parent = None;
        }
    }

    /// Remove `idx` and its entire subtree from the arena.
    #[instrument(level = "trace", skip(self))]
    pub fn free(&mut self, idx: Index) {
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current) {
                stack.extend(node.children.values().copied());
            }
        }
    }

    /// Whether `idx` lies inside the subtree rooted at `ancestor`, the
    /// subtree root itself included. Walks the parent chain, so it is
    /// bounded by tree depth.
    #[instrument(level = "trace", skip(self))]
    pub fn in_subtree(&self, ancestor: Index, idx: Index) -> bool {
        let mut current = Some(idx);
        while let Some(i) = current {
            if i == ancestor {
                return true;
            }
            current = self.arena.get(i).and_then(|node| node.parent);
        }
        false
    }
}
