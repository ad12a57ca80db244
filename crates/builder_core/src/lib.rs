//! Builder core: project tree, file selection and timed build-step progress
//! as a pure state machine.
mod effect;
mod msg;
mod node;
mod selection;
mod state;
mod step;
mod tree;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use node::{Node, NodeKind, NodePath};
pub use selection::{SelectOutcome, Selection};
pub use state::{AppState, ProgressSessionId, DEFAULT_PROMPT};
pub use step::{advance, Step, StepId, StepSequence, StepSequenceError, StepStatus};
pub use tree::{FlatEntry, Flatten, MalformedTreeError, NodeTree};
pub use update::update;
pub use view_model::{AppViewModel, CodeLine, CodeView, StepView, TreeRowView};
