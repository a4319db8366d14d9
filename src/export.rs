//! Diagram export: DOT lowering and Graphviz-backed rendering.

pub mod dot;
pub mod graphviz;

use std::{fmt, io, str::FromStr};

use thiserror::Error;

/// Errors raised while exporting a diagram.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Output format for the exported diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raster image rendered by Graphviz
    Png,
    /// Vector image rendered by Graphviz
    Svg,
    /// DOT source text; requires no Graphviz installation
    Dot,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "dot" => Ok(Self::Dot),
            _ => Err(format!(
                "invalid output format `{s}`, valid values: png, svg, dot"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Dot => "dot",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("png".parse(), Ok(OutputFormat::Png));
        assert_eq!("svg".parse(), Ok(OutputFormat::Svg));
        assert_eq!("dot".parse(), Ok(OutputFormat::Dot));

        let result = "jpeg".parse::<OutputFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid output format"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Png.to_string(), "png");
        assert_eq!(OutputFormat::Svg.to_string(), "svg");
        assert_eq!(OutputFormat::Dot.to_string(), "dot");
    }
}
