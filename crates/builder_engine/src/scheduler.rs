use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use builder_core::ProgressSessionId;
use engine_logging::{engine_debug, engine_info, engine_trace};
use thiserror::Error;
use tokio::sync::mpsc as cmd_mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::ProgressSettings;

/// One elapsed tick. `index` counts from 0 within its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    pub session: ProgressSessionId,
    pub index: usize,
}

pub trait TickSink: Send + Sync {
    fn emit(&self, event: TickEvent);
}

pub struct ChannelTickSink {
    tx: mpsc::Sender<TickEvent>,
}

impl ChannelTickSink {
    pub fn new(tx: mpsc::Sender<TickEvent>) -> Self {
        Self { tx }
    }
}

impl TickSink for ChannelTickSink {
    fn emit(&self, event: TickEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to start timer runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum SchedulerCommand {
    Schedule {
        session: ProgressSessionId,
        offsets: Vec<Duration>,
    },
    Cancel {
        session: ProgressSessionId,
    },
}

/// Runs progress timers on a dedicated thread and reports elapsed ticks to
/// a sink. Dropping the handle cancels every outstanding tick.
pub struct TickScheduler {
    cmd_tx: cmd_mpsc::UnboundedSender<SchedulerCommand>,
    settings: ProgressSettings,
}

impl TickScheduler {
    pub fn new(
        settings: ProgressSettings,
        sink: Arc<dyn TickSink>,
    ) -> Result<Self, SchedulerError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let (cmd_tx, cmd_rx) = cmd_mpsc::unbounded_channel();

        thread::Builder::new()
            .name("tick-scheduler".to_string())
            .spawn(move || runtime.block_on(run(cmd_rx, sink)))?;

        Ok(Self { cmd_tx, settings })
    }

    pub fn settings(&self) -> &ProgressSettings {
        &self.settings
    }

    /// Arrange `count` ticks for `session`, replacing any it already had.
    pub fn schedule(&self, session: ProgressSessionId, count: usize) {
        let offsets = self.settings.offsets(count);
        engine_debug!(
            "Schedule session={} ticks={} interval_ms={}",
            session,
            count,
            self.settings.tick_interval.as_millis()
        );
        let _ = self
            .cmd_tx
            .send(SchedulerCommand::Schedule { session, offsets });
    }

    pub fn cancel(&self, session: ProgressSessionId) {
        let _ = self.cmd_tx.send(SchedulerCommand::Cancel { session });
    }
}

async fn run(
    mut cmd_rx: cmd_mpsc::UnboundedReceiver<SchedulerCommand>,
    sink: Arc<dyn TickSink>,
) {
    let mut registry = TimerRegistry::default();
    while let Some(command) = cmd_rx.recv().await {
        match command {
            SchedulerCommand::Schedule { session, offsets } => {
                registry.schedule(session, offsets, sink.clone());
            }
            SchedulerCommand::Cancel { session } => {
                if registry.cancel(session) {
                    engine_info!("Cancelled outstanding ticks for session {}", session);
                }
            }
        }
    }
    engine_debug!(
        "Tick scheduler shutting down with {} live sessions",
        registry.len()
    );
}

/// Outstanding ticks of one session. Cancelled when dropped.
struct TickGuard {
    _cancel_on_drop: DropGuard,
    task: JoinHandle<()>,
}

#[derive(Default)]
struct TimerRegistry {
    sessions: HashMap<ProgressSessionId, TickGuard>,
}

impl TimerRegistry {
    fn schedule(
        &mut self,
        session: ProgressSessionId,
        offsets: Vec<Duration>,
        sink: Arc<dyn TickSink>,
    ) {
        self.sessions.retain(|_, guard| !guard.task.is_finished());

        let token = CancellationToken::new();
        let start = Instant::now();
        let task = tokio::spawn(fire_ticks(session, start, offsets, token.clone(), sink));
        let guard = TickGuard {
            _cancel_on_drop: token.drop_guard(),
            task,
        };
        if self.sessions.insert(session, guard).is_some() {
            engine_debug!("Session {} rescheduled; previous ticks dropped", session);
        }
    }

    fn cancel(&mut self, session: ProgressSessionId) -> bool {
        self.sessions.remove(&session).is_some()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

async fn fire_ticks(
    session: ProgressSessionId,
    start: Instant,
    offsets: Vec<Duration>,
    token: CancellationToken,
    sink: Arc<dyn TickSink>,
) {
    for (index, offset) in offsets.into_iter().enumerate() {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                engine_trace!("Session {} cancelled before tick {}", session, index);
                return;
            }
            _ = sleep_until(start + offset) => {}
        }
        engine_trace!("Session {} tick {} elapsed", session, index);
        sink.emit(TickEvent { session, index });
    }
}
