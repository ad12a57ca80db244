//! Builder engine: tick scheduling and project document loading.
mod demo;
mod project;
mod scheduler;
mod settings;

pub use demo::{default_steps, demo_project};
pub use project::{load_project, parse_project, Project, ProjectError};
pub use scheduler::{ChannelTickSink, SchedulerError, TickEvent, TickScheduler, TickSink};
pub use settings::ProgressSettings;
