//! Rendering through the external Graphviz `dot` executable.
//!
//! Graphviz is an optional runtime dependency: it is probed when a
//! raster or vector render is requested, and its absence is reported to
//! the caller as a detection result rather than an error.

use std::{path::Path, process::Command};

use dot_structures::Graph;
use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec,
    printer::PrinterContext,
};
use log::{debug, warn};

use super::{Error, OutputFormat};

/// Handle to a detected Graphviz installation.
#[derive(Debug)]
pub struct Graphviz {
    version: String,
}

impl Graphviz {
    /// Probe for the `dot` executable on the search path.
    ///
    /// Returns `None` when the executable is missing or unusable; the
    /// caller decides how to report that.
    pub fn detect() -> Option<Self> {
        match Command::new("dot").arg("-V").output() {
            Ok(output) if output.status.success() => {
                // `dot -V` prints its version banner on stderr
                let version = String::from_utf8_lossy(&output.stderr).trim().to_string();
                debug!(version; "Graphviz detected");
                Some(Self { version })
            }
            Ok(output) => {
                warn!(status:? = output.status; "`dot -V` exited with failure");
                None
            }
            Err(err) => {
                debug!(err:err; "Graphviz `dot` executable not found");
                None
            }
        }
    }

    /// The version banner reported by `dot -V`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Render the graph to `output` in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if `format` is [`OutputFormat::Dot`] (DOT text
    /// is written without Graphviz) or if the `dot` invocation fails.
    pub fn render(&self, graph: Graph, format: OutputFormat, output: &Path) -> Result<(), Error> {
        let format = match format {
            OutputFormat::Png => Format::Png,
            OutputFormat::Svg => Format::Svg,
            OutputFormat::Dot => {
                return Err(Error::Render(
                    "dot output does not go through Graphviz".to_string(),
                ));
            }
        };

        exec(
            graph,
            &mut PrinterContext::default(),
            vec![
                CommandArg::Format(format),
                CommandArg::Output(output.display().to_string()),
            ],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dot_generator::id;
    use dot_structures::Id;

    #[test]
    fn test_render_rejects_dot_format() {
        // The renderer handle is only obtainable through detection, so
        // exercise the format guard directly against a probe result.
        let Some(renderer) = Graphviz::detect() else {
            return;
        };

        let graph = Graph::DiGraph {
            id: id!("t"),
            strict: false,
            stmts: vec![],
        };
        let result = renderer.render(graph, OutputFormat::Dot, Path::new("unused.dot"));
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
