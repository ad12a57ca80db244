use std::sync::Once;

use builder_core::{
    update, AppState, Effect, Msg, Node, NodeKind, NodePath, NodeTree, SelectOutcome,
    StepSequence, StepStatus, DEFAULT_PROMPT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn scenario_tree() -> NodeTree {
    NodeTree::load(vec![
        Node::file("A", "x"),
        Node::folder("B", vec![Node::file("C", "y")]),
    ])
    .unwrap()
}

fn loaded_state() -> AppState {
    let (mut state, _) = update(
        AppState::new(),
        Msg::ProjectLoaded {
            prompt: "Landing page".to_string(),
            tree: scenario_tree(),
        },
    );
    state.consume_dirty();
    state
}

fn build_steps() -> StepSequence {
    StepSequence::from_stages(
        vec![
            ("Analyzing prompt", ""),
            ("Creating project structure", ""),
            ("Building components", ""),
            ("Adding styles", ""),
            ("Final touches", ""),
        ],
        2,
    )
}

fn statuses(state: &AppState) -> Vec<StepStatus> {
    state
        .view()
        .steps
        .iter()
        .map(|step| step.status)
        .collect()
}

#[test]
fn new_state_has_default_prompt_and_nothing_loaded() {
    init_logging();
    let view = AppState::new().view();

    assert_eq!(view.prompt, DEFAULT_PROMPT);
    assert!(view.tree_rows.is_empty());
    assert_eq!(view.code, None);
    assert!(view.steps.is_empty());
    assert!(!view.dirty);
}

#[test]
fn project_load_renders_rows() {
    init_logging();
    let (mut state, effects) = update(
        AppState::new(),
        Msg::ProjectLoaded {
            prompt: "Landing page".to_string(),
            tree: scenario_tree(),
        },
    );
    assert!(effects.is_empty());

    let view = state.view();
    assert_eq!(view.prompt, "Landing page");
    let rows: Vec<(&str, NodeKind, usize)> = view
        .tree_rows
        .iter()
        .map(|row| (row.name.as_str(), row.kind, row.depth))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("A", NodeKind::File, 0),
            ("B", NodeKind::Folder, 0),
            ("C", NodeKind::File, 1),
        ]
    );
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn pick_scenario_follows_files_and_ignores_folders() {
    init_logging();
    let state = loaded_state();

    let (mut state, _) = update(state, Msg::NodePicked(NodePath::root(0)));
    assert_eq!(state.selection().current(), Some(&NodePath::root(0)));
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::NodePicked(NodePath::root(1)));
    assert!(effects.is_empty());
    assert_eq!(state.selection().current(), Some(&NodePath::root(0)));
    assert!(!state.consume_dirty());

    let c = NodePath::from_indices(vec![1, 0]);
    let (state, _) = update(state, Msg::NodePicked(c.clone()));
    assert_eq!(state.selection().current(), Some(&c));

    let view = state.view();
    let selected: Vec<&str> = view
        .tree_rows
        .iter()
        .filter(|row| row.selected)
        .map(|row| row.name.as_str())
        .collect();
    assert_eq!(selected, vec!["C"]);
    let code = view.code.expect("code view for selection");
    assert_eq!(code.file_name, "C");
    assert_eq!(code.lines.len(), 1);
    assert_eq!(code.lines[0].text, "y");
}

#[test]
fn last_pick_reports_folders_and_unknown_paths() {
    init_logging();
    let state = loaded_state();
    assert_eq!(state.last_pick(), None);

    let (state, _) = update(state, Msg::NodePicked(NodePath::root(0)));
    assert_eq!(state.last_pick(), Some(SelectOutcome::Selected));

    let (state, _) = update(state, Msg::NodePicked(NodePath::root(1)));
    assert_eq!(state.last_pick(), Some(SelectOutcome::NotAFile));
    assert_eq!(state.selection().current(), Some(&NodePath::root(0)));

    let (state, _) = update(state, Msg::NodePicked(NodePath::root(7)));
    assert_eq!(state.last_pick(), Some(SelectOutcome::NotFound));

    let (state, _) = update(
        state,
        Msg::ProjectLoaded {
            prompt: "Other".to_string(),
            tree: scenario_tree(),
        },
    );
    assert_eq!(state.last_pick(), None);
}

#[test]
fn view_carries_dirty_flag_until_consumed() {
    init_logging();
    let (mut state, _) = update(loaded_state(), Msg::NodePicked(NodePath::root(0)));
    assert!(state.view().dirty);

    assert!(state.consume_dirty());
    assert!(!state.view().dirty);
}

#[test]
fn repicking_the_same_file_is_not_a_change() {
    init_logging();
    let (mut state, _) = update(loaded_state(), Msg::NodePicked(NodePath::root(0)));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::NodePicked(NodePath::root(0)));
    assert!(!state.consume_dirty());
}

#[test]
fn reloading_the_project_clears_selection() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::NodePicked(NodePath::root(0)));
    let (state, _) = update(
        state,
        Msg::ProjectLoaded {
            prompt: "Other".to_string(),
            tree: NodeTree::load(vec![Node::file("main.rs", "fn main() {}")]).unwrap(),
        },
    );

    assert_eq!(state.selection().current(), None);
    assert_eq!(state.view().code, None);
}

#[test]
fn selection_cleared_message() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::NodePicked(NodePath::root(0)));
    let (mut state, _) = update(state, Msg::SelectionCleared);
    assert_eq!(state.selection().current(), None);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::SelectionCleared);
    assert!(!state.consume_dirty());
}

#[test]
fn opening_progress_schedules_remaining_ticks() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ProgressOpened(build_steps()));

    let session = state.progress_session().expect("session open");
    assert_eq!(effects, vec![Effect::ScheduleTicks { session, count: 3 }]);
    assert_eq!(
        statuses(&state),
        vec![
            StepStatus::Completed,
            StepStatus::Completed,
            StepStatus::Active,
            StepStatus::Pending,
            StepStatus::Pending,
        ]
    );
}

#[test]
fn ticks_walk_the_sequence_to_completion() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ProgressOpened(build_steps()));
    let session = state.progress_session().unwrap();

    let (state, _) = update(state, Msg::ProgressTick { session });
    assert_eq!(state.steps().unwrap().active_index(), Some(3));
    let (state, _) = update(state, Msg::ProgressTick { session });
    assert_eq!(state.steps().unwrap().active_index(), Some(4));
    let (mut state, _) = update(state, Msg::ProgressTick { session });
    assert!(state.view().steps_finished);
    assert_eq!(state.applied_ticks(), 3);
    assert!(state.consume_dirty());

    // Surplus tick after completion changes nothing.
    let before = state.clone();
    let (mut state, effects) = update(state, Msg::ProgressTick { session });
    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
}

#[test]
fn closing_progress_cancels_and_later_ticks_are_inert() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ProgressOpened(build_steps()));
    let session = state.progress_session().unwrap();

    let (state, effects) = update(state, Msg::ProgressClosed);
    assert_eq!(effects, vec![Effect::CancelTicks { session }]);
    assert_eq!(state.steps(), None);

    let before = state.clone();
    let (state, effects) = update(state, Msg::ProgressTick { session });
    assert!(effects.is_empty());
    assert_eq!(state, before);

    let (_, effects) = update(state, Msg::ProgressClosed);
    assert!(effects.is_empty());
}

#[test]
fn reopening_progress_cancels_previous_session() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ProgressOpened(build_steps()));
    let first = state.progress_session().unwrap();

    let (state, effects) = update(state, Msg::ProgressOpened(build_steps()));
    let second = state.progress_session().unwrap();
    assert_ne!(first, second);
    assert_eq!(
        effects,
        vec![
            Effect::CancelTicks { session: first },
            Effect::ScheduleTicks {
                session: second,
                count: 3
            },
        ]
    );

    // A late tick from the old session does not move the new one.
    let initial = state.steps().cloned();
    let (state, _) = update(state, Msg::ProgressTick { session: first });
    assert_eq!(state.steps().cloned(), initial);
}

#[test]
fn no_ticks_leave_the_initial_configuration() {
    init_logging();
    let steps = build_steps();
    let (state, _) = update(AppState::new(), Msg::ProgressOpened(steps.clone()));

    assert_eq!(state.steps(), Some(&steps));
    assert_eq!(state.applied_ticks(), 0);
}

#[test]
fn finished_sequence_schedules_nothing() {
    init_logging();
    let done = StepSequence::from_stages(vec![("Only", "")], 1);
    let (state, effects) = update(AppState::new(), Msg::ProgressOpened(done));

    assert!(effects.is_empty());
    assert!(state.view().steps_finished);
}

#[test]
fn connector_lights_after_completed_steps_except_last() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ProgressOpened(build_steps()));
    let lit: Vec<bool> = state
        .view()
        .steps
        .iter()
        .map(|step| step.connector_lit)
        .collect();
    assert_eq!(lit, vec![true, true, false, false, false]);

    let finished = StepSequence::from_stages(vec![("a", ""), ("b", "")], 2);
    let (state, _) = update(AppState::new(), Msg::ProgressOpened(finished));
    let lit: Vec<bool> = state
        .view()
        .steps
        .iter()
        .map(|step| step.connector_lit)
        .collect();
    assert_eq!(lit, vec![true, false]);
}

#[test]
fn code_view_numbers_lines_and_pads_blanks() {
    init_logging();
    let tree = NodeTree::load(vec![
        Node::file("robots.txt", "User-agent: *\n\nAllow: /"),
        Node::empty_file("favicon.ico"),
    ])
    .unwrap();
    let (state, _) = update(
        AppState::new(),
        Msg::ProjectLoaded {
            prompt: DEFAULT_PROMPT.to_string(),
            tree,
        },
    );

    let (state, _) = update(state, Msg::NodePicked(NodePath::root(0)));
    let code = state.view().code.unwrap();
    let lines: Vec<(usize, &str)> = code
        .lines
        .iter()
        .map(|line| (line.number, line.text.as_str()))
        .collect();
    assert_eq!(lines, vec![(1, "User-agent: *"), (2, " "), (3, "Allow: /")]);

    let (state, _) = update(state, Msg::NodePicked(NodePath::root(1)));
    let code = state.view().code.unwrap();
    assert_eq!(code.file_name, "favicon.ico");
    assert_eq!(code.lines.len(), 1);
    assert_eq!(code.lines[0].text, " ");
}
