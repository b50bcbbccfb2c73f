//! CLI argument parsing for netops.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Netops: generate incident updates, safe runbooks, and change-request
/// content from minimal input.
///
/// Every subcommand supports three input modes:
/// - Quick: positional arguments, everything else defaulted
/// - YAML: `--input file.yaml` with a flat field mapping
/// - Interactive: run with no positional arguments
#[derive(Parser, Debug)]
#[command(name = "netops")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for netops.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an incident update from minimal input.
    ///
    /// Quick mode: `netops incident "VPN down" "Users cannot connect"`.
    /// Interactive mode runs when both positionals are omitted; add
    /// `--detailed` to be asked for every optional field.
    Incident(IncidentArgs),

    /// Generate a safe troubleshooting runbook.
    ///
    /// Quick mode: `netops runbook firewall high_cpu`. Domains and
    /// symptoms are discovered from the playbook directory.
    Runbook(RunbookArgs),

    /// Generate FCR section content.
    ///
    /// Quick mode: `netops fcr "management access"`.
    Fcr(FcrArgs),
}

/// Arguments for the `incident` command.
#[derive(Parser, Debug)]
pub struct IncidentArgs {
    /// Short title describing the incident.
    pub title: Option<String>,

    /// Brief description of user/business impact.
    pub impact: Option<String>,

    /// YAML input file (skips interactive mode).
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Target audience.
    #[arg(
        short = 'a',
        long,
        default_value = "manager",
        value_parser = ["manager", "client", "internal", "executive"]
    )]
    pub audience: String,

    /// Incident severity.
    #[arg(
        short = 's',
        long,
        default_value = "P2",
        value_parser = ["P1", "P2", "P3", "P4"]
    )]
    pub severity: String,

    /// Current status.
    #[arg(
        long,
        default_value = "investigating",
        value_parser = ["investigating", "identified", "monitoring", "resolved", "escalated"]
    )]
    pub status: String,

    /// Run detailed interactive mode (ask all questions).
    #[arg(short = 'd', long)]
    pub detailed: bool,
}

/// Arguments for the `runbook` command.
#[derive(Parser, Debug)]
pub struct RunbookArgs {
    /// Network domain (discovered from the playbook directory).
    pub domain: Option<String>,

    /// Symptom category within the domain.
    pub symptom: Option<String>,

    /// YAML input file (skips interactive mode).
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Access mode (gui_only is the safest).
    #[arg(
        short = 'm',
        long = "mode",
        default_value = "gui_only",
        value_parser = ["gui_only", "cli_read_only", "cli_full"]
    )]
    pub mode: String,

    /// Target environment.
    #[arg(
        short = 'e',
        long = "env",
        default_value = "prod",
        value_parser = ["prod", "uat", "dev", "lab"]
    )]
    pub env: String,
}

/// Arguments for the `fcr` command.
#[derive(Parser, Debug)]
pub struct FcrArgs {
    /// What the change is for.
    pub purpose: Option<String>,

    /// YAML input file (skips interactive mode).
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Change type.
    #[arg(
        short = 't',
        long = "type",
        default_value = "firewall_rule",
        value_parser = ["firewall_rule", "nat_change", "f5_ssl", "routing_change", "acl_update", "vpn_config"]
    )]
    pub change_type: String,

    /// Risk level.
    #[arg(
        short = 'r',
        long = "risk",
        default_value = "low",
        value_parser = ["low", "medium", "high"]
    )]
    pub risk: String,

    /// Traffic direction.
    #[arg(
        short = 'd',
        long,
        default_value = "inbound",
        value_parser = ["inbound", "outbound", "bidirectional"]
    )]
    pub direction: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
