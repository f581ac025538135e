// Client errors

use kroki_core::Diagram;

const SPECIFICATION_CAUSE: &str = "The diagram specification is likely invalid.";
const OUTPUT_FORMAT_CAUSE: &str =
    "The output format is likely invalid or not supported for this diagram kind.";

/// Failure reported by the HTTP collaborator
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Kroki server returned HTTP {status}: {}", String::from_utf8_lossy(.body))]
    Status { status: u16, body: Vec<u8> },

    #[error("timeout: Kroki server did not respond")]
    Timeout,

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("transport error: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HttpError {
    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body, when the server answered
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            HttpError::Status { body, .. } => Some(body.as_slice()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::Network(err)
        }
    }
}

/// Render errors
///
/// Callers match on the variant. The two diagram variants come from
/// [`classify`](crate::classify()), everything else arrives unchanged in `Http`.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("{}", diagnostic(.message, SPECIFICATION_CAUSE, .diagram))]
    InvalidDiagramSpecification { message: String, diagram: Diagram },

    #[error("{}", diagnostic(.message, OUTPUT_FORMAT_CAUSE, .diagram))]
    InvalidOutputFormat { message: String, diagram: Diagram },

    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RenderError {
    /// Diagram that caused a classified failure
    pub fn diagram(&self) -> Option<&Diagram> {
        match self {
            RenderError::InvalidDiagramSpecification { diagram, .. }
            | RenderError::InvalidOutputFormat { diagram, .. } => Some(diagram),
            RenderError::Http(_) => None,
        }
    }
}

fn diagnostic(message: &str, cause: &str, diagram: &Diagram) -> String {
    format!(
        "{}\n{}\nDiagram kind: {}\nDiagram specification:\n{}",
        message.trim_end(),
        cause,
        diagram.kind(),
        diagram.specification()
    )
}
