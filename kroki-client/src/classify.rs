// Classification of Kroki error responses

use crate::errors::{HttpError, RenderError};
use kroki_core::Diagram;

/// Body fragment Kroki uses when a diagram kind cannot produce a format
pub const UNSUPPORTED_OUTPUT_FORMAT: &str = "Unsupported output format";

/// Body fragment Kroki uses when the diagram source does not parse
pub const SYNTAX_ERROR: &str = "Syntax Error";

/// Turn a transport failure into the most specific render error
///
/// Only [`HttpError::Status`] failures are inspected. When the body mentions
/// an unsupported output format or a syntax error, the failure becomes
/// [`RenderError::InvalidOutputFormat`] or
/// [`RenderError::InvalidDiagramSpecification`] carrying the body text and
/// the diagram. Anything else is returned unchanged in [`RenderError::Http`].
///
/// This is a substring match against the wording of the service's error
/// pages, not a documented contract. A service version that rephrases its
/// errors will make every failure fall through unclassified.
pub fn classify(diagram: &Diagram, failure: HttpError) -> RenderError {
    let message = match failure.body() {
        Some(body) => String::from_utf8_lossy(body).into_owned(),
        None => return RenderError::Http(failure),
    };

    if message.contains(UNSUPPORTED_OUTPUT_FORMAT) {
        RenderError::InvalidOutputFormat {
            message,
            diagram: diagram.clone(),
        }
    } else if message.contains(SYNTAX_ERROR) {
        RenderError::InvalidDiagramSpecification {
            message,
            diagram: diagram.clone(),
        }
    } else {
        RenderError::Http(failure)
    }
}
