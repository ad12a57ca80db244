use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Folder,
    File,
}

/// One entry of the project tree.
///
/// Fields are public so a generator can hand over whatever it produced;
/// `NodeTree::load` is the place where the file/folder rules are enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<Node>,
    pub content: Option<String>,
}

impl Node {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
            content: Some(content.into()),
        }
    }

    pub fn empty_file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
            content: None,
        }
    }

    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            children,
            content: None,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// Stable handle for a node: the index path from the root list.
///
/// Two siblings with the same name still get distinct paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Zero for top-level nodes.
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        other.0.len() > self.0.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in &self.0 {
            if !first {
                f.write_str("/")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        Ok(())
    }
}
