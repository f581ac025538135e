// Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render diagrams through a Kroki server
#[derive(Debug, Parser)]
#[command(name = "kroki-render", version, about)]
pub struct Args {
    /// Kroki server base URI (overrides KROKI_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides KROKI_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a diagram and write the image
    Render {
        /// Diagram kind, e.g. plantuml, graphviz, mermaid
        #[arg(short, long)]
        kind: String,

        /// Output format, e.g. svg, png, pdf
        #[arg(short, long, default_value = "svg")]
        format: String,

        /// Diagram source file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Image file to write (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the GET URL for a diagram without requesting it
    Url {
        #[arg(short, long)]
        kind: String,

        #[arg(short, long, default_value = "svg")]
        format: String,

        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the URL-safe payload for a diagram source
    Encode {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the diagram source held in a payload
    Decode {
        token: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let args = Args::parse_from([
            "kroki-render",
            "render",
            "--kind",
            "PlantUML",
            "--format",
            "png",
            "-o",
            "out.png",
        ]);

        match args.command {
            Command::Render {
                kind,
                format,
                input,
                output,
            } => {
                assert_eq!(kind, "PlantUML");
                assert_eq!(format, "png");
                assert!(input.is_none());
                assert_eq!(output, Some(PathBuf::from("out.png")));
            }
            other => panic!("Expected Render, got {:?}", other),
        }
    }

    #[test]
    fn test_global_endpoint_after_subcommand() {
        let args = Args::parse_from([
            "kroki-render",
            "url",
            "-k",
            "graphviz",
            "--endpoint",
            "http://localhost:8000",
        ]);

        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:8000"));
        assert!(matches!(args.command, Command::Url { .. }));
    }

    #[test]
    fn test_render_requires_kind() {
        assert!(Args::try_parse_from(["kroki-render", "render"]).is_err());
    }
}
