use std::sync::{mpsc, Arc};
use std::thread;

use inspector_core::{RenderRequest, RequestId};
use inspector_logging::inspector_warn;

use crate::inspector::Inspector;
use crate::transport::{ReqwestTransport, Transport, TransportSettings};
use crate::{FailureKind, InspectorEvent, TransportError};

enum InspectorCommand {
    Inspect {
        request_id: RequestId,
        request: RenderRequest,
    },
}

/// Runs an [`Inspector`] on a background thread. Commands are handled one at a
/// time, in order.
pub struct InspectorHandle {
    cmd_tx: mpsc::Sender<InspectorCommand>,
    event_rx: mpsc::Receiver<InspectorEvent>,
}

impl InspectorHandle {
    pub fn new(settings: TransportSettings) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(settings)?;
        Self::with_transport(Arc::new(transport))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Result<Self, TransportError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let mut inspector = Inspector::new(transport);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                handle_command(&runtime, &mut inspector, command, &event_tx);
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, request: RenderRequest) {
        if self
            .cmd_tx
            .send(InspectorCommand::Inspect {
                request_id,
                request,
            })
            .is_err()
        {
            inspector_warn!("inspector worker is gone; request {request_id} dropped");
        }
    }

    pub fn try_recv(&self) -> Option<InspectorEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the worker has stopped.
    pub fn recv(&self) -> Option<InspectorEvent> {
        self.event_rx.recv().ok()
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    inspector: &mut Inspector,
    command: InspectorCommand,
    event_tx: &mpsc::Sender<InspectorEvent>,
) {
    match command {
        InspectorCommand::Inspect {
            request_id,
            request,
        } => {
            let result = runtime
                .block_on(inspector.exchange(&request))
                .map(|response| inspector.interpret(&request, response));
            let _ = event_tx.send(InspectorEvent::Completed { request_id, result });
        }
    }
}
