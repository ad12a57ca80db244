use crate::{Node, NodeKind, NodePath, StepId, StepSequence, StepStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub prompt: String,
    pub tree_rows: Vec<TreeRowView>,
    pub code: Option<CodeView>,
    pub steps: Vec<StepView>,
    pub steps_finished: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRowView {
    pub path: NodePath,
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub selected: bool,
}

/// Selected file laid out as numbered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeView {
    pub file_name: String,
    pub lines: Vec<CodeLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    /// 1-based.
    pub number: usize,
    pub text: String,
}

impl CodeView {
    /// Missing content renders as a single blank line; blank lines keep a
    /// single space so they still occupy a row.
    pub fn from_node(node: &Node) -> Self {
        let content = node.content.as_deref().unwrap_or("");
        let lines = content
            .split('\n')
            .enumerate()
            .map(|(index, line)| CodeLine {
                number: index + 1,
                text: if line.is_empty() {
                    " ".to_string()
                } else {
                    line.to_string()
                },
            })
            .collect();
        Self {
            file_name: node.name.clone(),
            lines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub id: StepId,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
    /// Connector to the next step is drawn highlighted.
    pub connector_lit: bool,
}

impl StepView {
    pub fn from_sequence(sequence: &StepSequence) -> Vec<Self> {
        let last = sequence.len().saturating_sub(1);
        sequence
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| StepView {
                id: step.id,
                title: step.title.clone(),
                description: step.description.clone(),
                status: step.status,
                connector_lit: index < last && step.status == StepStatus::Completed,
            })
            .collect()
    }
}
