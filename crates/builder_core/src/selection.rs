use crate::{Node, NodePath, NodeTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    /// The pick was a folder; selection is untouched.
    NotAFile,
    /// The handle does not resolve in the current tree.
    NotFound,
}

/// The single file currently open for viewing, held by path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    current: Option<NodePath>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, tree: &NodeTree, path: &NodePath) -> SelectOutcome {
        match tree.get(path) {
            None => SelectOutcome::NotFound,
            Some(node) if node.is_folder() => SelectOutcome::NotAFile,
            Some(_) => {
                self.current = Some(path.clone());
                SelectOutcome::Selected
            }
        }
    }

    pub fn current(&self) -> Option<&NodePath> {
        self.current.as_ref()
    }

    pub fn current_node<'t>(&self, tree: &'t NodeTree) -> Option<&'t Node> {
        self.current.as_ref().and_then(|path| tree.get(path))
    }

    pub fn is_selected(&self, path: &NodePath) -> bool {
        self.current.as_ref() == Some(path)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
