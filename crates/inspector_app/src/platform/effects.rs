use inspector_core::{Effect, Msg};
use inspector_engine::{InspectorEvent, InspectorHandle, TransportError, TransportSettings};
use inspector_logging::{inspector_info, inspector_warn};

/// Executes effects against the engine worker and turns its events back into
/// messages.
pub struct EffectRunner {
    engine: InspectorHandle,
}

impl EffectRunner {
    pub fn new(settings: TransportSettings) -> Result<Self, TransportError> {
        Ok(Self {
            engine: InspectorHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit {
                    request_id,
                    request,
                } => {
                    inspector_info!(
                        "Submit request_id={} endpoint={} url={}",
                        request_id,
                        request.mode.endpoint(),
                        request.target_address()
                    );
                    self.engine.submit(request_id, request);
                }
            }
        }
    }

    /// Blocks for the next engine event. `None` once the worker is gone.
    pub fn next_msg(&self) -> Option<Msg> {
        self.engine.recv().map(map_event)
    }
}

fn map_event(event: InspectorEvent) -> Msg {
    match event {
        InspectorEvent::Completed { request_id, result } => match result {
            Ok(outcome) => Msg::InspectionFinished {
                request_id,
                outcome,
            },
            Err(err) => {
                inspector_warn!("Request {} failed: {}", request_id, err);
                Msg::InspectionAborted {
                    request_id,
                    reason: err.to_string(),
                }
            }
        },
    }
}
