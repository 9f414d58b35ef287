use crate::{Effect, Msg, PageState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::RenderRequested(request) => {
            // Only one request may be outstanding at a time.
            if state.in_flight().is_some() {
                return (state, Vec::new());
            }
            let request_id = state.begin_request();
            vec![Effect::Submit {
                request_id,
                request,
            }]
        }
        Msg::InspectionFinished {
            request_id,
            outcome,
        } => {
            if state.in_flight() == Some(request_id) {
                state.apply_outcome(outcome);
            }
            Vec::new()
        }
        Msg::InspectionAborted { request_id, reason } => {
            if state.in_flight() == Some(request_id) {
                state.apply_abort(reason);
            }
            Vec::new()
        }
    };

    (state, effects)
}
