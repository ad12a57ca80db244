use crate::view_model::{AppViewModel, CodeView, StepView, TreeRowView};
use crate::{advance, NodePath, NodeTree, SelectOutcome, Selection, StepSequence};

pub type ProgressSessionId = u64;

pub const DEFAULT_PROMPT: &str = "Create a modern website";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProgressState {
    session: ProgressSessionId,
    steps: StepSequence,
    applied_ticks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    prompt: String,
    tree: NodeTree,
    selection: Selection,
    last_pick: Option<SelectOutcome>,
    progress: Option<ProgressState>,
    last_session: ProgressSessionId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            tree: NodeTree::empty(),
            selection: Selection::new(),
            last_pick: None,
            progress: None,
            last_session: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Outcome of the most recent pick since the project was loaded.
    pub fn last_pick(&self) -> Option<SelectOutcome> {
        self.last_pick
    }

    pub fn steps(&self) -> Option<&StepSequence> {
        self.progress.as_ref().map(|progress| &progress.steps)
    }

    pub fn progress_session(&self) -> Option<ProgressSessionId> {
        self.progress.as_ref().map(|progress| progress.session)
    }

    pub fn applied_ticks(&self) -> usize {
        self.progress
            .as_ref()
            .map_or(0, |progress| progress.applied_ticks)
    }

    pub fn view(&self) -> AppViewModel {
        let tree_rows = self
            .tree
            .flatten()
            .map(|entry| TreeRowView {
                selected: entry.node.is_file() && self.selection.is_selected(&entry.path),
                name: entry.node.name.clone(),
                kind: entry.node.kind,
                depth: entry.depth,
                path: entry.path,
            })
            .collect();

        let code = self
            .selection
            .current_node(&self.tree)
            .map(CodeView::from_node);

        let (steps, steps_finished) = match &self.progress {
            Some(progress) => (
                StepView::from_sequence(&progress.steps),
                progress.steps.is_finished(),
            ),
            None => (Vec::new(), false),
        };

        AppViewModel {
            prompt: self.prompt.clone(),
            tree_rows,
            code,
            steps,
            steps_finished,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn load_project(&mut self, prompt: String, tree: NodeTree) {
        self.prompt = prompt;
        self.tree = tree;
        self.selection.clear();
        self.last_pick = None;
        self.mark_dirty();
    }

    /// Applies a pick; only marks dirty when the selection actually moved.
    pub(crate) fn pick(&mut self, path: &NodePath) {
        let before = self.selection.current().cloned();
        let outcome = self.selection.select(&self.tree, path);
        self.last_pick = Some(outcome);
        if self.selection.current() != before.as_ref() {
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        if self.selection.current().is_some() {
            self.selection.clear();
            self.mark_dirty();
        }
    }

    /// Starts a fresh progress session and returns the id of any session it
    /// replaced together with the new one.
    pub(crate) fn open_progress(
        &mut self,
        steps: StepSequence,
    ) -> (Option<ProgressSessionId>, ProgressSessionId) {
        let replaced = self.progress.take().map(|progress| progress.session);
        self.last_session += 1;
        let session = self.last_session;
        self.progress = Some(ProgressState {
            session,
            steps,
            applied_ticks: 0,
        });
        self.mark_dirty();
        (replaced, session)
    }

    /// Applies one transition if `session` is the live one and work remains.
    pub(crate) fn apply_tick(&mut self, session: ProgressSessionId) -> bool {
        let Some(progress) = self.progress.as_mut() else {
            return false;
        };
        if progress.session != session || progress.steps.is_finished() {
            return false;
        }
        progress.steps = advance(&progress.steps);
        progress.applied_ticks += 1;
        self.mark_dirty();
        true
    }

    pub(crate) fn close_progress(&mut self) -> Option<ProgressSessionId> {
        let closed = self.progress.take().map(|progress| progress.session);
        if closed.is_some() {
            self.mark_dirty();
        }
        closed
    }
}
