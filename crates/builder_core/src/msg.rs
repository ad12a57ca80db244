use crate::{NodePath, NodeTree, ProgressSessionId, StepSequence};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Generator delivered a new project; replaces tree and prompt.
    ProjectLoaded { prompt: String, tree: NodeTree },
    /// User picked a row in the file tree.
    NodePicked(NodePath),
    /// Drop the current selection without touching the tree.
    SelectionCleared,
    /// Progress view opened with its initial stages.
    ProgressOpened(StepSequence),
    /// A scheduled tick for the given progress session elapsed.
    ProgressTick { session: ProgressSessionId },
    /// Progress view torn down.
    ProgressClosed,
    /// Fallback for placeholder wiring.
    NoOp,
}
