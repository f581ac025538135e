// Kroki Client Library
//
// This crate renders diagrams through a Kroki server: the diagram is
// encoded into the request path, fetched with a single GET, and error
// responses are turned into typed render errors.

mod classify;
mod client;
mod errors;
mod transport;

pub use classify::{classify, SYNTAX_ERROR, UNSUPPORTED_OUTPUT_FORMAT};
pub use client::KrokiClient;
pub use errors::{HttpError, RenderError};
pub use transport::{HttpGet, ReqwestTransport};

pub use kroki_core::{Diagram, DiagramKind, KrokiConfig, OutputFormat};
