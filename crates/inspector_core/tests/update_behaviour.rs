use std::sync::Once;

use inspector_core::{
    update, DisplayNode, Effect, ErrorReport, DecodedResult, InspectionOutcome, Mode, Msg,
    NodeKind, PageState, PageStatus, RenderRequest,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(inspector_logging::initialize_for_tests);
}

fn request() -> RenderRequest {
    RenderRequest::new(Mode::Render, "example.com")
}

fn start(state: PageState) -> (PageState, u64) {
    let (state, effects) = update(state, Msg::RenderRequested(request()));
    let request_id = match effects.as_slice() {
        [Effect::Submit { request_id, .. }] => *request_id,
        other => panic!("unexpected effects: {other:?}"),
    };
    (state, request_id)
}

fn tree() -> DisplayNode {
    DisplayNode::leaf(None, NodeKind::Object)
}

#[test]
fn render_request_emits_submit_and_marks_rendering() {
    init_logging();
    let (state, effects) = update(PageState::new(), Msg::RenderRequested(request()));

    assert_eq!(
        effects,
        vec![Effect::Submit {
            request_id: 1,
            request: request(),
        }]
    );
    let view = state.view();
    assert_eq!(view.status, PageStatus::Rendering);
    assert_eq!(view.status_text, "Rendering, please wait..");
    assert_eq!(view.in_flight, Some(1));
    assert!(view.dirty);
}

#[test]
fn second_request_while_in_flight_is_ignored() {
    init_logging();
    let (mut state, _) = start(PageState::new());
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::RenderRequested(request()));
    assert!(effects.is_empty());
    assert_eq!(state.in_flight(), Some(1));
    assert!(!state.consume_dirty());
}

#[test]
fn outcomes_map_to_statuses() {
    init_logging();
    let (state, id) = start(PageState::new());
    let (state, _) = update(
        state,
        Msg::InspectionFinished {
            request_id: id,
            outcome: InspectionOutcome::Rendered(tree()),
        },
    );
    assert_eq!(state.status(), PageStatus::Success);
    assert_eq!(state.view().tree, Some(tree()));

    let (state, id) = start(state);
    assert_eq!(state.view().tree, None);
    let (state, _) = update(
        state,
        Msg::InspectionFinished {
            request_id: id,
            outcome: InspectionOutcome::Empty,
        },
    );
    assert_eq!(state.view().status_text, "Empty result");

    let (state, id) = start(state);
    let report = ErrorReport::new(400, "Bad Request", &DecodedResult::Text("x".into()));
    let (state, _) = update(
        state,
        Msg::InspectionFinished {
            request_id: id,
            outcome: InspectionOutcome::Failed(report.clone()),
        },
    );
    assert_eq!(state.status(), PageStatus::Error);
    assert_eq!(state.view().error, Some(report));

    let (state, id) = start(state);
    assert_eq!(state.view().error, None);
    let (state, _) = update(
        state,
        Msg::InspectionAborted {
            request_id: id,
            reason: "connection refused".into(),
        },
    );
    assert_eq!(state.status(), PageStatus::Aborted);
    assert_eq!(state.view().abort_reason.as_deref(), Some("connection refused"));
    assert_eq!(state.in_flight(), None);
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let (state, id) = start(PageState::new());
    let (state, _) = update(
        state,
        Msg::InspectionFinished {
            request_id: id + 7,
            outcome: InspectionOutcome::Empty,
        },
    );
    assert_eq!(state.status(), PageStatus::Rendering);
    assert_eq!(state.in_flight(), Some(id));
}

#[test]
fn completion_without_a_request_changes_nothing() {
    let state = PageState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::InspectionAborted {
            request_id: 1,
            reason: "late".into(),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert_eq!(next.view().status_text, "Initializing...");
}
