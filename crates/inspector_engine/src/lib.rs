//! Inspector engine: transport, body decoding, image probing and the render
//! pipeline that turns service responses into display trees.
mod decode;
mod engine;
mod inspector;
mod persist;
mod probe;
mod transport;
mod types;

pub use decode::{body_kind, decode_body, BodyKind, DecodeError};
pub use engine::InspectorHandle;
pub use inspector::Inspector;
pub use persist::{ensure_output_dir, save_artifact, AtomicFileWriter, PersistError};
pub use probe::DecodingImageProbe;
pub use transport::{
    ReqwestTransport, Transport, TransportSettings, DEFAULT_SERVICE_URL,
};
pub use types::{
    DecodedResponse, FailureKind, InspectorEvent, ServiceResponse, TransportError,
};
