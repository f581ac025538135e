// Unit tests for models module

use kroki_core::*;
use std::collections::HashSet;

// ==================== Diagram Tests ====================

#[test]
fn test_diagram_creation() {
    let diagram = Diagram::new("PlantUML", "A -> B: hi");

    assert_eq!(diagram.kind(), "PlantUML");
    assert_eq!(diagram.kind_id(), "plantuml");
    assert_eq!(diagram.specification(), "A -> B: hi");
}

#[test]
fn test_diagram_kind_lowercased_for_all_case_variants() {
    for kind in ["plantuml", "PlantUML", "PLANTUML", "pLaNtUmL"] {
        assert_eq!(Diagram::new(kind, "").kind_id(), "plantuml");
    }
}

#[test]
fn test_diagram_empty_specification() {
    let diagram = Diagram::new("graphviz", "");
    assert_eq!(diagram.specification(), "");
}

#[test]
fn test_diagram_equality_ignores_kind_case() {
    let a = Diagram::new("GraphViz", "digraph { a -> b }");
    let b = Diagram::new("graphviz", "digraph { a -> b }");
    let c = Diagram::new("graphviz", "digraph { b -> a }");

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<Diagram> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_diagram_from_kind() {
    let diagram = Diagram::from_kind(DiagramKind::C4PlantUml, "@startuml\n@enduml");
    assert_eq!(diagram.kind(), "c4plantuml");
    assert_eq!(diagram.known_kind(), Some(DiagramKind::C4PlantUml));
}

#[test]
fn test_diagram_unknown_kind_is_accepted() {
    let diagram = Diagram::new("notarealtool", "whatever");
    assert_eq!(diagram.known_kind(), None);
    assert!(diagram.validate().is_ok());
}

#[test]
fn test_diagram_validate_rejects_non_identifier_kind() {
    let diagram = Diagram::new("plantuml/svg", "A -> B");
    assert!(matches!(
        diagram.validate(),
        Err(ValidationError::InvalidKind(_))
    ));
}

#[test]
fn test_diagram_serialization() {
    let diagram = Diagram::new("Mermaid", "graph TD; A-->B;");
    let json = serde_json::to_value(&diagram).unwrap();

    assert_eq!(json["kind"], "Mermaid");
    assert_eq!(json["specification"], "graph TD; A-->B;");

    let back: Diagram = serde_json::from_value(json).unwrap();
    assert_eq!(back, diagram);
    assert_eq!(back.kind(), "Mermaid");
}

// ==================== DiagramKind Tests ====================

#[test]
fn test_diagram_kind_parse_case_insensitive() {
    assert_eq!("PlantUML".parse::<DiagramKind>(), Ok(DiagramKind::PlantUml));
    assert_eq!("graphviz".parse::<DiagramKind>(), Ok(DiagramKind::GraphViz));
    assert_eq!("VegaLite".parse::<DiagramKind>(), Ok(DiagramKind::VegaLite));
}

#[test]
fn test_diagram_kind_dot_alias() {
    assert_eq!("dot".parse::<DiagramKind>(), Ok(DiagramKind::GraphViz));
}

#[test]
fn test_diagram_kind_unknown() {
    assert_eq!(
        "visio".parse::<DiagramKind>(),
        Err(ValidationError::UnknownKind("visio".to_string()))
    );
}

#[test]
fn test_diagram_kind_names_are_valid_kinds() {
    for kind in DiagramKind::ALL {
        assert!(validate_kind(kind.as_str()).is_ok());
        assert_eq!(kind.as_str().parse::<DiagramKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

// ==================== OutputFormat Tests ====================

#[test]
fn test_output_format_parse() {
    assert_eq!("SVG".parse::<OutputFormat>(), Ok(OutputFormat::Svg));
    assert_eq!("jpg".parse::<OutputFormat>(), Ok(OutputFormat::Jpeg));
    assert!(matches!(
        "gif".parse::<OutputFormat>(),
        Err(ValidationError::UnknownFormat(_))
    ));
}

#[test]
fn test_output_format_mime_type() {
    assert_eq!(OutputFormat::Png.mime_type(), "image/png");
    assert_eq!(OutputFormat::Svg.mime_type(), "image/svg+xml");
    assert_eq!(OutputFormat::Pdf.mime_type(), "application/pdf");
}

#[test]
fn test_output_format_serde() {
    let json = serde_json::to_string(&OutputFormat::Png).unwrap();
    assert_eq!(json, "\"png\"");
}
