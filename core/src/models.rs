// Core data models for Kroki diagrams

use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Diagram source paired with the kind of grammar it is written in
///
/// The kind is kept as given for display and compared case-insensitively.
/// Construction never fails: whether the specification is valid is decided
/// by the rendering service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    kind: String,
    specification: String,
}

impl Diagram {
    /// Create a new diagram
    ///
    /// # Arguments
    /// * `kind` - Diagram kind, e.g. "plantuml" or "GraphViz"
    /// * `specification` - Diagram source text
    pub fn new(kind: impl Into<String>, specification: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            specification: specification.into(),
        }
    }

    /// Create a diagram from a known kind
    pub fn from_kind(kind: DiagramKind, specification: impl Into<String>) -> Self {
        Self::new(kind.as_str(), specification)
    }

    /// Kind as given by the caller
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Lower-cased kind, as used in service URIs
    pub fn kind_id(&self) -> String {
        self.kind.to_lowercase()
    }

    /// Diagram source text
    pub fn specification(&self) -> &str {
        &self.specification
    }

    /// Known kind, if the kind matches one the public service documents
    pub fn known_kind(&self) -> Option<DiagramKind> {
        self.kind.parse().ok()
    }

    /// Check that the kind is an identifier-like token
    pub fn validate(&self) -> Result<(), ValidationError> {
        crate::validation::validate_kind(&self.kind)
    }
}

impl PartialEq for Diagram {
    fn eq(&self, other: &Self) -> bool {
        self.kind.to_lowercase() == other.kind.to_lowercase()
            && self.specification == other.specification
    }
}

impl Eq for Diagram {}

impl Hash for Diagram {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.to_lowercase().hash(state);
        self.specification.hash(state);
    }
}

/// Diagram kinds supported by the public Kroki service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    ActDiag,
    BlockDiag,
    Bpmn,
    Bytefield,
    C4PlantUml,
    D2,
    Dbml,
    Ditaa,
    Erd,
    Excalidraw,
    GraphViz,
    Mermaid,
    Nomnoml,
    NwDiag,
    PacketDiag,
    Pikchr,
    PlantUml,
    RackDiag,
    SeqDiag,
    Structurizr,
    SvgBob,
    Symbolator,
    TikZ,
    Umlet,
    Vega,
    VegaLite,
    WaveDrom,
    WireViz,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 28] = [
        DiagramKind::ActDiag,
        DiagramKind::BlockDiag,
        DiagramKind::Bpmn,
        DiagramKind::Bytefield,
        DiagramKind::C4PlantUml,
        DiagramKind::D2,
        DiagramKind::Dbml,
        DiagramKind::Ditaa,
        DiagramKind::Erd,
        DiagramKind::Excalidraw,
        DiagramKind::GraphViz,
        DiagramKind::Mermaid,
        DiagramKind::Nomnoml,
        DiagramKind::NwDiag,
        DiagramKind::PacketDiag,
        DiagramKind::Pikchr,
        DiagramKind::PlantUml,
        DiagramKind::RackDiag,
        DiagramKind::SeqDiag,
        DiagramKind::Structurizr,
        DiagramKind::SvgBob,
        DiagramKind::Symbolator,
        DiagramKind::TikZ,
        DiagramKind::Umlet,
        DiagramKind::Vega,
        DiagramKind::VegaLite,
        DiagramKind::WaveDrom,
        DiagramKind::WireViz,
    ];

    /// Path segment the service uses for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagramKind::ActDiag => "actdiag",
            DiagramKind::BlockDiag => "blockdiag",
            DiagramKind::Bpmn => "bpmn",
            DiagramKind::Bytefield => "bytefield",
            DiagramKind::C4PlantUml => "c4plantuml",
            DiagramKind::D2 => "d2",
            DiagramKind::Dbml => "dbml",
            DiagramKind::Ditaa => "ditaa",
            DiagramKind::Erd => "erd",
            DiagramKind::Excalidraw => "excalidraw",
            DiagramKind::GraphViz => "graphviz",
            DiagramKind::Mermaid => "mermaid",
            DiagramKind::Nomnoml => "nomnoml",
            DiagramKind::NwDiag => "nwdiag",
            DiagramKind::PacketDiag => "packetdiag",
            DiagramKind::Pikchr => "pikchr",
            DiagramKind::PlantUml => "plantuml",
            DiagramKind::RackDiag => "rackdiag",
            DiagramKind::SeqDiag => "seqdiag",
            DiagramKind::Structurizr => "structurizr",
            DiagramKind::SvgBob => "svgbob",
            DiagramKind::Symbolator => "symbolator",
            DiagramKind::TikZ => "tikz",
            DiagramKind::Umlet => "umlet",
            DiagramKind::Vega => "vega",
            DiagramKind::VegaLite => "vegalite",
            DiagramKind::WaveDrom => "wavedrom",
            DiagramKind::WireViz => "wireviz",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        // "dot" is the usual name for Graphviz sources
        if lower == "dot" {
            return Ok(DiagramKind::GraphViz);
        }
        DiagramKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| ValidationError::UnknownKind(s.to_string()))
    }
}

/// Image format for diagram output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Png,
    Pdf,
    Jpeg,
    Txt,
    Base64,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Txt => "txt",
            OutputFormat::Base64 => "base64",
        }
    }

    /// MIME type of the rendered bytes
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "image/svg+xml",
            OutputFormat::Png => "image/png",
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Txt | OutputFormat::Base64 => "text/plain",
        }
    }
}

impl AsRef<str> for OutputFormat {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "pdf" => Ok(OutputFormat::Pdf),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "txt" => Ok(OutputFormat::Txt),
            "base64" => Ok(OutputFormat::Base64),
            _ => Err(ValidationError::UnknownFormat(s.to_string())),
        }
    }
}
