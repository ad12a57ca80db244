use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use builder_core::{update, AppState, Msg, SelectOutcome};
use builder_engine::{default_steps, demo_project, load_project, Project};
use engine_logging::{engine_info, engine_warn};

use super::effects::EffectRunner;
use super::settings::{self, AppSettings};
use super::{logging, render};

/// Extra wait on top of the tick interval before the loop gives up.
const IDLE_GRACE: Duration = Duration::from_secs(1);

pub fn run_app() -> anyhow::Result<()> {
    let workdir = std::env::current_dir().context("resolve working directory")?;
    let loaded = settings::load_settings(&workdir);
    let settings = match &loaded {
        Ok(settings) => settings.clone(),
        Err(_) => AppSettings::default(),
    };
    logging::initialize(settings.log_destination, settings.level_filter());

    match loaded {
        Ok(_) if !settings::settings_path(&workdir).exists() => {
            match settings::save_settings(&workdir, &settings) {
                Ok(path) => engine_info!("Wrote default settings to {:?}", path),
                Err(err) => engine_warn!("Could not write default settings: {}", err),
            }
        }
        Ok(_) => {}
        Err(err) => engine_warn!("Using default settings: {}", err),
    }

    let project_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.project_path.clone());
    let project = open_project(project_path.as_deref())?;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings.progress_settings(), msg_tx)
        .context("start tick scheduler")?;
    let idle_limit = settings.progress_settings().tick_interval + IDLE_GRACE;
    let mut session = Session::new(runner);

    let first_file = project.tree.first_file();
    session.dispatch(Msg::ProjectLoaded {
        prompt: project.prompt,
        tree: project.tree,
    });
    if let Some(path) = first_file {
        session.dispatch(Msg::NodePicked(path.clone()));
        if session.state.last_pick() != Some(SelectOutcome::Selected) {
            engine_warn!("Could not open {} in the code view", path);
        }
    }
    session.dispatch(Msg::ProgressOpened(default_steps()));

    while !session.is_finished() {
        match msg_rx.recv_timeout(idle_limit) {
            Ok(msg) => session.dispatch(msg),
            Err(mpsc::RecvTimeoutError::Timeout) => {
                engine_warn!("No progress tick within {:?}; closing", idle_limit);
                break;
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    let applied = session.close();
    engine_info!("Progress view closed after {} ticks", applied);
    Ok(())
}

fn open_project(path: Option<&Path>) -> anyhow::Result<Project> {
    if let Some(path) = path {
        match load_project(path) {
            Ok(project) => return Ok(project),
            Err(err) => engine_warn!("Falling back to demo project: {}", err),
        }
    }
    demo_project().context("build demo project")
}

/// Owns the state and applies messages one at a time.
struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        engine_logging::set_progress_tick(state.applied_ticks() as u64);
        let view = state.view();
        state.consume_dirty();
        self.state = state;

        self.runner.run(effects);
        if view.dirty {
            println!("{}", render::render(&view));
        }
    }

    /// Tears the progress view down, releasing any ticks still outstanding.
    /// Returns how many ticks were applied.
    fn close(mut self) -> usize {
        let applied = self.state.applied_ticks();
        let state = std::mem::take(&mut self.state);
        let (_state, effects) = update(state, Msg::ProgressClosed);
        self.runner.run(effects);
        applied
    }

    fn is_finished(&self) -> bool {
        self.state.steps().map_or(true, |steps| steps.is_finished())
    }
}
