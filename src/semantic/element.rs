//! Diagram element types for the semantic model.

use std::fmt;

/// Identifier of a diagram node.
///
/// Ids are the handles relations refer to; they never appear in the
/// rendered image (nodes display their label instead).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id(String);

impl Id {
    /// Creates an `Id` from a name.
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The AWS service vocabulary of the diagram.
///
/// Each kind carries its visual definition: the fill color follows the
/// AWS architecture-icon category palette, so compute, networking,
/// database, storage, and management services remain distinguishable
/// without shipping icon assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// External clients outside the cloud boundary.
    Users,
    InternetGateway,
    LoadBalancer,
    NatGateway,
    Ec2,
    AutoScaling,
    Rds,
    CloudWatch,
    Sns,
    S3,
}

impl ServiceKind {
    /// Fill color for the node, as a DOT color string.
    pub fn fill_color(&self) -> &'static str {
        match self {
            Self::Users => "#232F3E",
            Self::InternetGateway | Self::LoadBalancer | Self::NatGateway => "#8C4FFF",
            Self::Ec2 | Self::AutoScaling => "#ED7100",
            Self::Rds => "#C925D1",
            Self::CloudWatch | Self::Sns => "#E7157B",
            Self::S3 => "#7AA116",
        }
    }

    /// Label font color paired with [`fill_color`](Self::fill_color).
    pub fn font_color(&self) -> &'static str {
        "white"
    }

    /// DOT `shape` attribute value for the node.
    pub fn dot_shape(&self) -> &'static str {
        match self {
            Self::Users => "ellipse",
            _ => "box",
        }
    }
}

/// A diagram node: one rendered service box with a display label.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    kind: ServiceKind,
}

impl Node {
    /// Create a new Node.
    ///
    /// Labels may contain newlines; the exporter converts them to DOT
    /// line-break escapes.
    pub fn new(id: impl Into<Id>, label: &str, kind: ServiceKind) -> Self {
        Self {
            id: id.into(),
            label: label.to_string(),
            kind,
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the service kind.
    pub fn kind(&self) -> ServiceKind {
        self.kind
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Defines the visual style of a relation line.
///
/// # DOT Mapping
///
/// Each variant maps to a DOT `style` attribute value; `Solid` maps to
/// no attribute at all since it is the renderer default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Plain line (default, no `style` attribute emitted)
    #[default]
    Solid,
    /// Heavy line for primary traffic flow
    Bold,
    /// Dashed line for secondary/outbound traffic
    Dashed,
    /// Dotted line for management and monitoring relationships
    Dotted,
}

impl LineStyle {
    /// Returns the DOT `style` value for this style, or None for solid lines
    pub fn to_dot_value(&self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Bold => Some("bold"),
            Self::Dashed => Some("dashed"),
            Self::Dotted => Some("dotted"),
        }
    }
}

/// A relation (edge) between two nodes, carrying an optional label and
/// a line style.
#[derive(Debug, Clone)]
pub struct Relation {
    source: Id,
    target: Id,
    label: Option<String>,
    style: LineStyle,
}

impl Relation {
    /// Create a new Relation between two node Ids with an optional
    /// label and a line style that determines appearance.
    pub fn new(
        source: impl Into<Id>,
        target: impl Into<Id>,
        label: Option<&str>,
        style: LineStyle,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.map(str::to_string),
            style,
        }
    }

    /// Get the source node Id of this relation.
    pub fn source(&self) -> &Id {
        &self.source
    }

    /// Get the target node Id of this relation.
    pub fn target(&self) -> &Id {
        &self.target
    }

    /// Get the edge label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the line style for this relation.
    pub fn style(&self) -> LineStyle {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_dot_values() {
        assert_eq!(LineStyle::Solid.to_dot_value(), None);
        assert_eq!(LineStyle::Bold.to_dot_value(), Some("bold"));
        assert_eq!(LineStyle::Dashed.to_dot_value(), Some("dashed"));
        assert_eq!(LineStyle::Dotted.to_dot_value(), Some("dotted"));
    }

    #[test]
    fn test_line_style_default_is_solid() {
        assert_eq!(LineStyle::default(), LineStyle::Solid);
    }

    #[test]
    fn test_service_kind_visuals() {
        let kinds = [
            ServiceKind::Users,
            ServiceKind::InternetGateway,
            ServiceKind::LoadBalancer,
            ServiceKind::NatGateway,
            ServiceKind::Ec2,
            ServiceKind::AutoScaling,
            ServiceKind::Rds,
            ServiceKind::CloudWatch,
            ServiceKind::Sns,
            ServiceKind::S3,
        ];

        for kind in kinds {
            assert!(
                kind.fill_color().starts_with('#'),
                "fill color for {kind:?} should be a hex color"
            );
            assert!(!kind.font_color().is_empty());
        }

        assert_eq!(ServiceKind::Users.dot_shape(), "ellipse");
        assert_eq!(ServiceKind::Ec2.dot_shape(), "box");
    }

    #[test]
    fn test_relation_accessors() {
        let relation = Relation::new("alb", "ec2_a", Some("HTTP"), LineStyle::Bold);

        assert_eq!(relation.source().as_str(), "alb");
        assert_eq!(relation.target().as_str(), "ec2_a");
        assert_eq!(relation.label(), Some("HTTP"));
        assert_eq!(relation.style(), LineStyle::Bold);

        let plain = Relation::new("nat_a", "igw", None, LineStyle::Solid);
        assert_eq!(plain.label(), None);
        assert_eq!(plain.style(), LineStyle::Solid);
    }
}
