use thiserror::Error;

use crate::{Node, NodeKind, NodePath};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTreeError {
    #[error("file `{name}` at {path} has {count} children")]
    FileWithChildren {
        path: NodePath,
        name: String,
        count: usize,
    },
    #[error("folder `{name}` at {path} carries content")]
    FolderWithContent { path: NodePath, name: String },
}

/// The loaded project hierarchy. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeTree {
    roots: Vec<Node>,
}

impl NodeTree {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store the top-level nodes verbatim after checking that no file has
    /// children and no folder has content.
    pub fn load(roots: Vec<Node>) -> Result<Self, MalformedTreeError> {
        let mut pending: Vec<(NodePath, &Node)> = roots
            .iter()
            .enumerate()
            .map(|(index, node)| (NodePath::root(index), node))
            .collect();

        while let Some((path, node)) = pending.pop() {
            match node.kind {
                NodeKind::File if !node.children.is_empty() => {
                    return Err(MalformedTreeError::FileWithChildren {
                        path,
                        name: node.name.clone(),
                        count: node.children.len(),
                    });
                }
                NodeKind::Folder if node.content.is_some() => {
                    return Err(MalformedTreeError::FolderWithContent {
                        path,
                        name: node.name.clone(),
                    });
                }
                NodeKind::File => {}
                NodeKind::Folder => {
                    pending.extend(
                        node.children
                            .iter()
                            .enumerate()
                            .map(|(index, child)| (path.child(index), child)),
                    );
                }
            }
        }

        Ok(Self { roots })
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.roots.get(*first)?;
        for index in rest {
            node = node.children.get(*index)?;
        }
        Some(node)
    }

    /// Depth-first pre-order walk. Each call starts a fresh traversal.
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten {
            stack: self
                .roots
                .iter()
                .enumerate()
                .rev()
                .map(|(index, node)| (NodePath::root(index), node))
                .collect(),
        }
    }

    /// First file in display order, if any.
    pub fn first_file(&self) -> Option<NodePath> {
        self.flatten()
            .find(|entry| entry.node.is_file())
            .map(|entry| entry.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry<'a> {
    pub path: NodePath,
    pub node: &'a Node,
    pub depth: usize,
}

pub struct Flatten<'a> {
    stack: Vec<(NodePath, &'a Node)>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = FlatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        // Reverse push keeps stored sibling order on pop.
        for (index, child) in node.children.iter().enumerate().rev() {
            self.stack.push((path.child(index), child));
        }
        let depth = path.depth();
        Some(FlatEntry { path, node, depth })
    }
}
