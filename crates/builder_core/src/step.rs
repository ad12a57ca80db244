use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

pub type StepId = u32;

/// Status of one build stage. Variant order is the only allowed direction
/// of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Pending => write!(f, "pending"),
            StepStatus::Active => write!(f, "active"),
            StepStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
}

impl Step {
    pub fn new(
        id: StepId,
        title: impl Into<String>,
        description: impl Into<String>,
        status: StepStatus,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepSequenceError {
    #[error("step id {id} appears more than once")]
    DuplicateId { id: StepId },
    #[error("steps {first} and {second} are both active")]
    MultipleActive { first: StepId, second: StepId },
    #[error("step {id} is {status} after a step that is not completed")]
    OutOfOrder { id: StepId, status: StepStatus },
}

/// Ordered build stages: a completed prefix, at most one active step, then
/// a pending suffix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    pub fn new(steps: Vec<Step>) -> Result<Self, StepSequenceError> {
        let mut ids = HashSet::with_capacity(steps.len());
        let mut active: Option<StepId> = None;
        let mut seen_pending = false;

        for step in &steps {
            if !ids.insert(step.id) {
                return Err(StepSequenceError::DuplicateId { id: step.id });
            }
            match step.status {
                StepStatus::Completed => {
                    if active.is_some() || seen_pending {
                        return Err(StepSequenceError::OutOfOrder {
                            id: step.id,
                            status: step.status,
                        });
                    }
                }
                StepStatus::Active => {
                    if let Some(first) = active {
                        return Err(StepSequenceError::MultipleActive {
                            first,
                            second: step.id,
                        });
                    }
                    if seen_pending {
                        return Err(StepSequenceError::OutOfOrder {
                            id: step.id,
                            status: step.status,
                        });
                    }
                    active = Some(step.id);
                }
                StepStatus::Pending => seen_pending = true,
            }
        }

        Ok(Self { steps })
    }

    /// Build a well-formed sequence from `(title, description)` stages with
    /// ids starting at 1. Stages before `active` are completed; an `active`
    /// index past the end yields an already finished sequence.
    pub fn from_stages<I, T, D>(stages: I, active: usize) -> Self
    where
        I: IntoIterator<Item = (T, D)>,
        T: Into<String>,
        D: Into<String>,
    {
        let steps = stages
            .into_iter()
            .enumerate()
            .map(|(index, (title, description))| {
                let status = match index.cmp(&active) {
                    std::cmp::Ordering::Less => StepStatus::Completed,
                    std::cmp::Ordering::Equal => StepStatus::Active,
                    std::cmp::Ordering::Greater => StepStatus::Pending,
                };
                Step::new(index as StepId + 1, title, description, status)
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.status == StepStatus::Active)
    }

    pub fn completed_count(&self) -> usize {
        self.count(StepStatus::Completed)
    }

    pub fn pending_count(&self) -> usize {
        self.count(StepStatus::Pending)
    }

    /// True once nothing is active and nothing is pending.
    pub fn is_finished(&self) -> bool {
        self.completed_count() == self.steps.len()
    }

    /// Number of ticks needed to reach all-completed.
    pub fn remaining_ticks(&self) -> usize {
        if self.is_finished() {
            0
        } else {
            // The active step (or, with none active, the first pending one
            // once activated) needs one extra tick to complete.
            self.pending_count() + 1
        }
    }

    fn count(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|step| step.status == status).count()
    }
}

/// One tick of progress: complete the active step and activate the next
/// pending one. A finished sequence comes back unchanged.
pub fn advance(sequence: &StepSequence) -> StepSequence {
    let mut next = sequence.clone();
    if let Some(index) = next.active_index() {
        next.steps[index].status = StepStatus::Completed;
    }
    if let Some(step) = next
        .steps
        .iter_mut()
        .find(|step| step.status == StepStatus::Pending)
    {
        step.status = StepStatus::Active;
    }
    next
}
