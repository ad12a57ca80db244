use std::sync::{mpsc, Arc};

use builder_core::{Effect, Msg};
use builder_engine::{ProgressSettings, SchedulerError, TickEvent, TickScheduler, TickSink};
use engine_logging::{engine_debug, engine_info};

/// Feeds elapsed ticks back into the message loop.
struct MsgTickSink {
    msg_tx: mpsc::Sender<Msg>,
}

impl TickSink for MsgTickSink {
    fn emit(&self, event: TickEvent) {
        engine_debug!("Tick {} for session {}", event.index, event.session);
        let _ = self.msg_tx.send(Msg::ProgressTick {
            session: event.session,
        });
    }
}

pub struct EffectRunner {
    scheduler: TickScheduler,
}

impl EffectRunner {
    pub fn new(
        settings: ProgressSettings,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, SchedulerError> {
        let scheduler = TickScheduler::new(settings, Arc::new(MsgTickSink { msg_tx }))?;
        Ok(Self { scheduler })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleTicks { session, count } => {
                    engine_info!(
                        "ScheduleTicks session={} count={} interval_ms={}",
                        session,
                        count,
                        self.scheduler.settings().tick_interval.as_millis()
                    );
                    self.scheduler.schedule(session, count);
                }
                Effect::CancelTicks { session } => {
                    engine_info!("CancelTicks session={}", session);
                    self.scheduler.cancel(session);
                }
            }
        }
    }
}
