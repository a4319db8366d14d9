//! The fixed AWS 3-tier reference architecture.
//!
//! Internet users reach an application load balancer through the
//! internet gateway; EC2 application instances sit behind it across two
//! availability zones and talk to a multi-AZ RDS database. NAT gateways
//! carry outbound traffic, an auto-scaling group manages the instances,
//! and CloudWatch/SNS plus the Terraform S3 backend sit alongside the
//! workload inside the VPC.

use crate::semantic::{Cluster, Diagram, Error, LineStyle, Node, Relation, ServiceKind};

/// Build the AWS 3-tier architecture diagram.
///
/// The node set, cluster tree, and relation set are fixed: building the
/// diagram twice yields an identical model.
///
/// # Errors
///
/// Returns [`Error`] if a node id is duplicated or a relation
/// references an undeclared node.
pub fn aws_three_tier() -> Result<Diagram, Error> {
    let mut diagram = Diagram::new("AWS 3-Tier Architecture");

    diagram.add_node(Node::new("users", "Internet Users", ServiceKind::Users));

    let public_subnets = Cluster::new("Public Subnets")
        .with_cluster(
            Cluster::new("AZ-A: 10.0.1.0/24")
                .with_node(Node::new(
                    "alb",
                    "Application\nLoad Balancer",
                    ServiceKind::LoadBalancer,
                ))
                .with_node(Node::new("nat_a", "NAT GW A", ServiceKind::NatGateway)),
        )
        .with_cluster(
            Cluster::new("AZ-B: 10.0.2.0/24")
                .with_node(Node::new("nat_b", "NAT GW B", ServiceKind::NatGateway)),
        );

    let app_subnets = Cluster::new("Private Subnets (Application Tier)")
        .with_node(Node::new("asg", "Auto Scaling\nGroup", ServiceKind::AutoScaling))
        .with_cluster(
            Cluster::new("AZ-A: 10.0.10.0/24")
                .with_node(Node::new("ec2_a", "EC2\nInstance A", ServiceKind::Ec2)),
        )
        .with_cluster(
            Cluster::new("AZ-B: 10.0.11.0/24")
                .with_node(Node::new("ec2_b", "EC2\nInstance B", ServiceKind::Ec2)),
        );

    let db_subnets = Cluster::new("Database Subnets (Data Tier)").with_cluster(
        Cluster::new("AZ-A: 10.0.20.0/24 | AZ-B: 10.0.21.0/24")
            .with_node(Node::new("rds", "RDS MySQL\n(Multi-AZ)", ServiceKind::Rds)),
    );

    let monitoring = Cluster::new("Monitoring & Alerts")
        .with_node(Node::new(
            "cloudwatch",
            "CloudWatch\nMetrics & Logs",
            ServiceKind::CloudWatch,
        ))
        .with_node(Node::new("sns", "SNS\nSecurity Alerts", ServiceKind::Sns));

    let terraform_state = Cluster::new("Terraform State").with_node(Node::new(
        "s3",
        "S3 Backend\n+ DynamoDB Lock",
        ServiceKind::S3,
    ));

    let vpc = Cluster::new("VPC (10.0.0.0/16)")
        .with_cluster(public_subnets)
        .with_cluster(app_subnets)
        .with_cluster(db_subnets)
        .with_cluster(monitoring)
        .with_cluster(terraform_state);

    let cloud = Cluster::new("AWS Cloud")
        .with_node(Node::new("igw", "Internet Gateway", ServiceKind::InternetGateway))
        .with_cluster(vpc);

    diagram.add_cluster(cloud);

    // Main traffic flow
    diagram.add_relation(Relation::new("users", "igw", Some("HTTPS/HTTP"), LineStyle::Bold));
    diagram.add_relation(Relation::new("igw", "alb", Some("Traffic"), LineStyle::Bold));
    diagram.add_relation(Relation::new("alb", "ec2_a", Some("HTTP"), LineStyle::Bold));
    diagram.add_relation(Relation::new("alb", "ec2_b", Some("HTTP"), LineStyle::Bold));
    diagram.add_relation(Relation::new("ec2_a", "rds", Some("MySQL"), LineStyle::Bold));
    diagram.add_relation(Relation::new("ec2_b", "rds", Some("MySQL"), LineStyle::Bold));

    // Outbound internet access: the hop back to the gateway is a plain edge
    diagram.add_relation(Relation::new("ec2_a", "nat_a", Some("Updates"), LineStyle::Dashed));
    diagram.add_relation(Relation::new("nat_a", "igw", None, LineStyle::Solid));
    diagram.add_relation(Relation::new("ec2_b", "nat_b", Some("Updates"), LineStyle::Dashed));
    diagram.add_relation(Relation::new("nat_b", "igw", None, LineStyle::Solid));

    // Auto Scaling management
    diagram.add_relation(Relation::new("asg", "ec2_a", Some("Manages"), LineStyle::Dotted));
    diagram.add_relation(Relation::new("asg", "ec2_b", Some("Manages"), LineStyle::Dotted));

    // Monitoring and alerting
    diagram.add_relation(Relation::new("alb", "cloudwatch", Some("Metrics"), LineStyle::Dotted));
    diagram.add_relation(Relation::new("ec2_a", "cloudwatch", Some("Metrics"), LineStyle::Dotted));
    diagram.add_relation(Relation::new("ec2_b", "cloudwatch", Some("Metrics"), LineStyle::Dotted));
    diagram.add_relation(Relation::new("rds", "cloudwatch", Some("Metrics"), LineStyle::Dotted));
    diagram.add_relation(Relation::new("cloudwatch", "sns", Some("Alerts"), LineStyle::Dotted));

    diagram.validate()?;
    Ok(diagram)
}
