//! Lowering of the semantic diagram model to Graphviz DOT.
//!
//! The generated graph is fully deterministic: nodes, clusters, and
//! edges are emitted in declaration order, cluster subgraphs are
//! numbered by a depth-first counter, and all styling comes from fixed
//! attribute tables plus the loaded [`AppConfig`]. Lowering the same
//! diagram twice therefore yields byte-identical DOT output.

use dot_generator::{attr, id, node_id};
use dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id, Node, NodeId, Stmt, Subgraph, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};

use crate::{config::AppConfig, semantic};

/// Cluster background fills, rotated by nesting depth.
const CLUSTER_BGCOLORS: [&str; 4] = ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"];

/// Cluster border color.
const CLUSTER_PENCOLOR: &str = "#AEB6BE";

/// Base text color for the diagram title and edge labels.
const TEXT_COLOR: &str = "#2D3436";

const FONT_NAME: &str = "Sans-Serif";

/// Quote a string value for use as a DOT attribute, escaping embedded
/// quotes and turning newlines into DOT line-break escapes.
fn quoted(value: &str) -> Id {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    Id::Escaped(format!("\"{escaped}\""))
}

fn node_stmt(node: &semantic::Node) -> Stmt {
    let kind = node.kind();
    Stmt::Node(Node {
        id: NodeId(id!(node.id().as_str()), None),
        attributes: vec![
            Attribute(id!("label"), quoted(node.label())),
            Attribute(id!("shape"), id!(kind.dot_shape())),
            Attribute(id!("fillcolor"), quoted(kind.fill_color())),
            Attribute(id!("fontcolor"), quoted(kind.font_color())),
        ],
    })
}

fn relation_stmt(relation: &semantic::Relation) -> Stmt {
    let mut attributes = Vec::new();
    if let Some(label) = relation.label() {
        attributes.push(Attribute(id!("label"), quoted(label)));
    }
    if let Some(style) = relation.style().to_dot_value() {
        attributes.push(attr!("style", style));
    }

    Stmt::Edge(Edge {
        ty: EdgeTy::Pair(
            Vertex::N(node_id!(relation.source().as_str())),
            Vertex::N(node_id!(relation.target().as_str())),
        ),
        attributes,
    })
}

fn cluster_stmt(cluster: &semantic::Cluster, depth: usize, counter: &mut usize) -> Stmt {
    let index = *counter;
    *counter += 1;

    let mut stmts = vec![
        Stmt::Attribute(Attribute(id!("label"), quoted(cluster.label()))),
        Stmt::Attribute(attr!("labeljust", "l")),
        Stmt::Attribute(attr!("style", "rounded")),
        Stmt::Attribute(Attribute(
            id!("bgcolor"),
            quoted(CLUSTER_BGCOLORS[depth % CLUSTER_BGCOLORS.len()]),
        )),
        Stmt::Attribute(Attribute(id!("pencolor"), quoted(CLUSTER_PENCOLOR))),
        Stmt::Attribute(Attribute(id!("fontname"), quoted(FONT_NAME))),
        Stmt::Attribute(attr!("fontsize", "12")),
    ];

    for node in cluster.nodes() {
        stmts.push(node_stmt(node));
    }
    for child in cluster.children() {
        stmts.push(cluster_stmt(child, depth + 1, counter));
    }

    Stmt::Subgraph(Subgraph {
        id: Id::Plain(format!("cluster_{index}")),
        stmts,
    })
}

/// Lower a diagram plus configuration to a DOT graph.
pub fn build_graph(diagram: &semantic::Diagram, config: &AppConfig) -> Graph {
    let mut graph_attrs = vec![
        Attribute(id!("label"), quoted(diagram.title())),
        Attribute(id!("rankdir"), id!(config.render().direction().to_dot_value())),
        Attribute(id!("splines"), quoted(config.render().splines())),
        attr!("pad", "2.0"),
        attr!("nodesep", "0.60"),
        attr!("ranksep", "0.75"),
        Attribute(id!("fontname"), quoted(FONT_NAME)),
        attr!("fontsize", "15"),
        Attribute(id!("fontcolor"), quoted(TEXT_COLOR)),
    ];
    if let Some(color) = config.style().background_color() {
        graph_attrs.push(Attribute(id!("bgcolor"), quoted(color)));
    }

    let mut stmts = vec![
        Stmt::GAttribute(GraphAttributes::Graph(graph_attrs)),
        Stmt::GAttribute(GraphAttributes::Node(vec![
            attr!("shape", "box"),
            Attribute(id!("style"), quoted("rounded,filled")),
            Attribute(id!("fontname"), quoted(FONT_NAME)),
            attr!("fontsize", "13"),
        ])),
        Stmt::GAttribute(GraphAttributes::Edge(vec![
            Attribute(id!("fontname"), quoted(FONT_NAME)),
            attr!("fontsize", "13"),
            Attribute(id!("fontcolor"), quoted(TEXT_COLOR)),
        ])),
    ];

    for node in diagram.root_nodes() {
        stmts.push(node_stmt(node));
    }

    let mut counter = 0;
    for cluster in diagram.clusters() {
        stmts.push(cluster_stmt(cluster, 0, &mut counter));
    }

    for relation in diagram.relations() {
        stmts.push(relation_stmt(relation));
    }

    Graph::DiGraph {
        id: quoted(diagram.title()),
        strict: false,
        stmts,
    }
}

/// Print a diagram as DOT source text.
pub fn to_dot_string(diagram: &semantic::Diagram, config: &AppConfig) -> String {
    build_graph(diagram, config).print(&mut PrinterContext::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architecture;

    fn edges(graph: &Graph) -> usize {
        let Graph::DiGraph { stmts, .. } = graph else {
            panic!("expected a digraph");
        };
        stmts
            .iter()
            .filter(|s| matches!(s, Stmt::Edge(_)))
            .count()
    }

    #[test]
    fn test_graph_is_directed_with_all_relations() {
        let diagram = architecture::aws_three_tier().unwrap();
        let graph = build_graph(&diagram, &AppConfig::default());

        assert_eq!(edges(&graph), diagram.relations().len());
    }

    #[test]
    fn test_dot_contains_every_node_label() {
        let diagram = architecture::aws_three_tier().unwrap();
        let dot = to_dot_string(&diagram, &AppConfig::default());

        for node in diagram.nodes() {
            // Multi-line labels appear with DOT line-break escapes
            let expected = node.label().replace('\n', "\\n");
            assert!(
                dot.contains(&expected),
                "DOT output should contain label {expected:?}"
            );
        }
    }

    #[test]
    fn test_dot_contains_cluster_boundaries() {
        let diagram = architecture::aws_three_tier().unwrap();
        let dot = to_dot_string(&diagram, &AppConfig::default());

        // 12 clusters: cloud, VPC, three subnet tiers, five AZ groups,
        // monitoring, and the Terraform state box
        for index in 0..12 {
            assert!(dot.contains(&format!("cluster_{index}")));
        }
        assert!(!dot.contains("cluster_12"));

        for label in ["AWS Cloud", "VPC (10.0.0.0/16)", "Public Subnets"] {
            assert!(dot.contains(label), "missing cluster label {label:?}");
        }
    }

    #[test]
    fn test_dot_edge_styles() {
        let diagram = architecture::aws_three_tier().unwrap();
        let dot = to_dot_string(&diagram, &AppConfig::default());

        for style in ["bold", "dashed", "dotted"] {
            assert!(dot.contains(style), "missing edge style {style:?}");
        }
        // Solid edges are emitted without a style attribute
        assert!(!dot.contains("solid"));
    }

    #[test]
    fn test_dot_emission_is_deterministic() {
        let config = AppConfig::default();
        let first = to_dot_string(&architecture::aws_three_tier().unwrap(), &config);
        let second = to_dot_string(&architecture::aws_three_tier().unwrap(), &config);

        assert_eq!(first, second);
    }

    #[test]
    fn test_background_color_is_applied() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            background_color = "#101820"
            "##,
        )
        .unwrap();

        let diagram = architecture::aws_three_tier().unwrap();
        let dot = to_dot_string(&diagram, &config);
        assert!(dot.contains("#101820"));
    }

    #[test]
    fn test_direction_is_applied() {
        let config: AppConfig = toml::from_str(
            r#"
            [render]
            direction = "lr"
            "#,
        )
        .unwrap();

        let diagram = architecture::aws_three_tier().unwrap();
        let dot = to_dot_string(&diagram, &config);
        assert!(dot.contains("rankdir=LR"));
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted("plain"), Id::Escaped("\"plain\"".to_string()));
        assert_eq!(quoted("a\nb"), Id::Escaped("\"a\\nb\"".to_string()));
        assert_eq!(quoted("say \"hi\""), Id::Escaped("\"say \\\"hi\\\"\"".to_string()));
    }
}
