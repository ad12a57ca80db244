use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ProjectLoaded { prompt, tree } => {
            state.load_project(prompt, tree);
            Vec::new()
        }
        Msg::NodePicked(path) => {
            // Folders and unknown paths leave the selection alone; the
            // outcome stays readable through `last_pick`.
            state.pick(&path);
            Vec::new()
        }
        Msg::SelectionCleared => {
            state.clear_selection();
            Vec::new()
        }
        Msg::ProgressOpened(steps) => {
            let count = steps.remaining_ticks();
            let (replaced, session) = state.open_progress(steps);
            let mut effects = Vec::with_capacity(2);
            if let Some(old) = replaced {
                effects.push(Effect::CancelTicks { session: old });
            }
            if count > 0 {
                effects.push(Effect::ScheduleTicks { session, count });
            }
            effects
        }
        Msg::ProgressTick { session } => {
            // Stale or surplus ticks are inert.
            state.apply_tick(session);
            Vec::new()
        }
        Msg::ProgressClosed => match state.close_progress() {
            Some(session) => vec![Effect::CancelTicks { session }],
            None => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
