//! stratus - renders the AWS 3-tier reference architecture diagram.
//!
//! The diagram is a fixed semantic model (nested clusters, AWS service
//! nodes, and styled relations) that is lowered to Graphviz DOT and
//! rendered to PNG or SVG through the external `dot` executable. DOT
//! source output is also supported and needs no Graphviz installation.

pub mod architecture;
pub mod config;
pub mod export;
pub mod semantic;

mod args;
mod error;

pub use args::Args;
pub use error::StratusError;

use std::{fs, path::Path};

use log::{debug, info, warn};

use config::AppConfig;
use export::{OutputFormat, dot, graphviz::Graphviz};

/// Builder for exporting stratus diagrams.
///
/// Holds the loaded configuration and lowers semantic diagrams to their
/// DOT representation.
///
/// # Examples
///
/// ```rust
/// use stratus::{DiagramBuilder, architecture};
///
/// let diagram = architecture::aws_three_tier().expect("fixed model is valid");
/// let builder = DiagramBuilder::default();
/// let dot_source = builder.render_dot(&diagram);
/// assert!(dot_source.starts_with("digraph"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Lower a diagram to its DOT graph structure.
    pub fn dot_graph(&self, diagram: &semantic::Diagram) -> dot_structures::Graph {
        dot::build_graph(diagram, &self.config)
    }

    /// Render a diagram to DOT source text.
    pub fn render_dot(&self, diagram: &semantic::Diagram) -> String {
        dot::to_dot_string(diagram, &self.config)
    }
}

/// Run the stratus CLI application
///
/// Builds the fixed architecture model and exports it to the requested
/// output. When Graphviz is required but not installed, this prints the
/// missing-dependency guidance and returns Ok without producing output;
/// genuine faults (I/O, configuration, render failures) are returned as
/// errors.
///
/// # Errors
///
/// Returns `StratusError` for:
/// - Configuration loading errors
/// - An unrecognized output format
/// - File I/O errors
/// - Rendering errors reported by Graphviz
pub fn run(args: &Args) -> Result<(), StratusError> {
    info!(
        output_path = args.output,
        format = args.format;
        "Generating architecture diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let format: OutputFormat = args.format.parse().map_err(StratusError::Config)?;

    // Build the fixed architecture model
    let diagram = architecture::aws_three_tier()?;
    debug!(
        nodes_len = diagram.nodes().len(),
        relations_len = diagram.relations().len();
        "Architecture model built"
    );

    let builder = DiagramBuilder::new(app_config);
    let output = Path::new(&args.output);

    match format {
        OutputFormat::Dot => {
            let dot_source = builder.render_dot(&diagram);
            ensure_parent_dir(output)?;
            fs::write(output, dot_source)?;
            println!("AWS architecture diagram written: {}", args.output);
        }
        OutputFormat::Png | OutputFormat::Svg => {
            let Some(renderer) = Graphviz::detect() else {
                warn!("Graphviz `dot` executable not found, skipping render");
                println!("Cannot generate diagram - Graphviz is not installed");
                println!(
                    "Install it with: apt-get install graphviz (Ubuntu/Debian) \
                     or brew install graphviz (macOS)"
                );
                return Ok(());
            };
            debug!(version = renderer.version(); "Using Graphviz");

            ensure_parent_dir(output)?;
            renderer.render(builder.dot_graph(&diagram), format, output)?;
            println!("AWS architecture diagram generated: {}", args.output);
        }
    }

    info!(output_file = args.output; "Diagram export finished");
    Ok(())
}

/// Create the output file's parent directory when it does not exist
/// yet (the default output path lives under `docs/`).
fn ensure_parent_dir(path: &Path) -> Result<(), StratusError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
