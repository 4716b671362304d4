//! The directory tree: path traversal and the four public operations.

use generational_arena::Index;
use itertools::Itertools;
use tracing::instrument;

use crate::domain::arena::NodeArena;
use crate::domain::error::{TreeError, TreeResult};

/// In-memory hierarchical namespace addressed by slash-delimited paths.
///
/// Paths are split on `/` with no validation: `a//b` contains a literal
/// empty-named segment that is created and looked up like any other name.
#[derive(Debug)]
pub struct DirectoryTree {
    nodes: NodeArena,
}

impl Default for DirectoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
        }
    }

    /// Ensure the full path exists, creating only the missing suffix.
    ///
    /// Idempotent: creating an already existing path changes nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn create(&mut self, path: &str) {
        let mut current = self.nodes.root();
        for segment in path.split('/') {
            current = match self.nodes.child(current, segment) {
                Some(existing) => existing,
                None => {
                    let child = self.nodes.insert(segment);
                    self.nodes.add_child(current, child);
                    child
                }
            };
        }
    }

    /// Lazy depth-first pre-order traversal as `(depth, name)` pairs.
    ///
    /// The root itself is not yielded; its children come out at depth 1.
    /// Siblings are visited in ascending lexicographic order by name,
    /// regardless of creation order.
    pub fn list(&self) -> ListEntries<'_> {
        ListEntries::new(&self.nodes)
    }

    /// Reparent the node at `from` under the node at `to`, keyed by its
    /// unchanged name. A same-named child already at the destination is
    /// replaced and its subtree reclaimed.
    ///
    /// Both paths are resolved up front; any missing segment aborts with
    /// zero mutation, as does a destination inside the moved subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn move_node(&mut self, from: &str, to: &str) -> TreeResult<()> {
        let source = self.resolve("move", from)?;
        let target = self.resolve("move", to)?;

        if self.nodes.in_subtree(source, target) {
            return Err(TreeError::DestinationInsideSource {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.nodes.detach(source);
        if let Some(evicted) = self.nodes.add_child(target, source) {
            self.nodes.free(evicted);
        }
        Ok(())
    }

    /// Remove the subtree at `path`.
    ///
    /// The empty path means the root itself: the whole tree is reset to a
    /// fresh empty root. Any missing segment aborts with zero mutation.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, path: &str) -> TreeResult<()> {
        if path.is_empty() {
            self.nodes = NodeArena::new();
            return Ok(());
        }
        let doomed = self.resolve("delete", path)?;
        self.nodes.detach(doomed);
        self.nodes.free(doomed);
        Ok(())
    }

    /// Walk `path` from the root following existing children only.
    fn resolve(&self, operation: &'static str, path: &str) -> TreeResult<Index> {
        let mut current = self.nodes.root();
        for segment in path.split('/') {
            current = self.nodes.child(current, segment).ok_or_else(|| {
                TreeError::SegmentNotFound {
                    operation,
                    path: path.to_string(),
                    segment: segment.to_string(),
                }
            })?;
        }
        Ok(current)
    }
}

/// Lazy pre-order iterator over `(depth, name)` entries.
///
/// Children are pushed in descending name order so the stack pops them
/// ascending.
pub struct ListEntries<'a> {
    nodes: &'a NodeArena,
    stack: Vec<(Index, usize)>,
}

impl<'a> ListEntries<'a> {
    fn new(nodes: &'a NodeArena) -> Self {
        let mut entries = Self {
            nodes,
            stack: Vec::new(),
        };
        entries.push_children(nodes.root(), 1);
        entries
    }

    fn push_children(&mut self, idx: Index, depth: usize) {
        let nodes = self.nodes;
        if let Some(node) = nodes.get(idx) {
            for (_, &child) in node.children.iter().sorted_by(|(a, _), (b, _)| b.cmp(a)) {
                self.stack.push((child, depth));
            }
        }
    }
}

impl<'a> Iterator for ListEntries<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        while let Some((idx, depth)) = self.stack.pop() {
            if let Some(node) = nodes.get(idx) {
                self.push_children(idx, depth + 1);
                return Some((depth, node.name.as_str()));
            }
        }
        None
    }
}
