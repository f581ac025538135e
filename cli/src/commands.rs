// Command handlers

use crate::args::{Args, Command};
use anyhow::{Context, Result};
use kroki_client::{HttpGet, KrokiClient};
use kroki_core::{decode_payload, encode_payload, validate_kind, Diagram, KrokiConfig};
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

/// Run the parsed command
pub async fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;

    match args.command {
        Command::Render {
            kind,
            format,
            input,
            output,
        } => {
            let source = read_source(input.as_deref())?;
            let client = KrokiClient::new(config).context("Failed to create Kroki client")?;
            let data = render(&client, &kind, &format, source).await?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &data)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote {} bytes to {}", data.len(), path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&data).context("Failed to write to stdout")?;
                    stdout.flush()?;
                }
            }
        }
        Command::Url {
            kind,
            format,
            input,
        } => {
            let source = read_source(input.as_deref())?;
            let client = KrokiClient::new(config).context("Failed to create Kroki client")?;
            println!("{}", diagram_url(&client, &kind, &format, source)?);
        }
        Command::Encode { input } => {
            let source = read_source(input.as_deref())?;
            println!("{}", encode_payload(&source));
        }
        Command::Decode { token } => {
            let source = decode_payload(&token).context("Failed to decode payload")?;
            print!("{}", source);
        }
    }

    Ok(())
}

/// Environment configuration with command-line overrides applied
pub fn build_config(args: &Args) -> Result<KrokiConfig> {
    let mut config = KrokiConfig::from_env();

    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint)?;
    }
    if let Some(secs) = args.timeout {
        anyhow::ensure!(secs > 0, "timeout must be at least one second");
        config = config.with_timeout(Duration::from_secs(secs));
    }

    tracing::debug!("Using Kroki endpoint {}", config.endpoint());
    Ok(config)
}

/// Read diagram source from a file, or stdin when no file is given
pub fn read_source(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read diagram source from stdin")?;
            Ok(source)
        }
    }
}

/// Render diagram source with the given client
pub async fn render<T: HttpGet>(
    client: &KrokiClient<T>,
    kind: &str,
    format: &str,
    source: String,
) -> Result<Vec<u8>> {
    let diagram = checked_diagram(kind, source)?;
    let data = client.render(&diagram, format).await?;
    tracing::info!("Rendered {} diagram as {}: {} bytes", diagram.kind(), format, data.len());
    Ok(data)
}

/// GET URL for diagram source
pub fn diagram_url<T: HttpGet>(
    client: &KrokiClient<T>,
    kind: &str,
    format: &str,
    source: String,
) -> Result<String> {
    let diagram = checked_diagram(kind, source)?;
    Ok(client.diagram_url(&diagram, format))
}

fn checked_diagram(kind: &str, source: String) -> Result<Diagram> {
    validate_kind(kind)?;
    let diagram = Diagram::new(kind, source);
    if diagram.known_kind().is_none() {
        tracing::warn!("Unknown diagram kind {:?}, the server may reject it", kind);
    }
    Ok(diagram)
}
