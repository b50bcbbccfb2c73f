//! FCR section autofill.
//!
//! Generates change-request content from one typed field (purpose);
//! everything else defaults. The selector tables below are keyed by change
//! type and risk level. Unknown keys deliberately select the firewall-rule
//! and low-risk entries instead of failing; the CLI constrains choices, so
//! the lenient path is only reachable through YAML input and programmatic
//! callers.

use crate::defaults::Defaults;
use crate::error::{NetopsError, Result};
use crate::render::{RenderContext, render_template, title_case};
use crate::schema::FcrInput;

const FCR_TEMPLATE: &str = include_str!("templates/fcr_sections.md");

/// Technical description template for a change type. Placeholders are
/// filled from the input record through the render engine.
fn technical_description_template(change_type: &str) -> &'static str {
    match change_type {
        "nat_change" => "Configure NAT translation for {purpose}. Direction: {direction}.",
        "f5_ssl" => "Update F5 SSL profile/certificate for {purpose}.",
        "routing_change" => "Modify routing configuration for {purpose}. Direction: {direction}.",
        "acl_update" => "Update access control list for {purpose}. Direction: {direction}.",
        "vpn_config" => "Configure VPN settings for {purpose}.",
        _ => "Add firewall rule to {direction} traffic for {purpose}. Rule count: {rule_count}.",
    }
}

/// Pre-implementation tests for a change type.
fn tests_for(change_type: &str) -> &'static [&'static str] {
    match change_type {
        "nat_change" => &[
            "Verify NAT translation in lab environment",
            "Confirm IP addresses are not in use elsewhere",
            "Test end-to-end connectivity through NAT",
        ],
        "f5_ssl" => &[
            "Validate certificate chain completeness",
            "Verify certificate expiry date",
            "Test SSL handshake in staging",
            "Confirm cipher suite compatibility",
        ],
        "routing_change" => &[
            "Verify route does not conflict with existing routes",
            "Test reachability in lab environment",
            "Confirm BGP/OSPF adjacencies stable after change",
        ],
        "acl_update" => &[
            "Verify ACL syntax",
            "Test ACL in lab environment",
            "Confirm no unintended traffic blocked",
        ],
        "vpn_config" => &[
            "Verify tunnel parameters match peer",
            "Test tunnel establishment in lab",
            "Confirm encryption settings are compliant",
        ],
        _ => &[
            "Verify rule syntax in staging/lab environment",
            "Confirm source/destination objects exist",
            "Test connectivity with rule in place (lab)",
            "Verify logging is enabled for new rule",
        ],
    }
}

/// Rollback steps for a change type.
fn rollback_for(change_type: &str) -> &'static [&'static str] {
    match change_type {
        "nat_change" => &[
            "Remove NAT translation entry",
            "Restore original NAT configuration",
            "Verify connectivity restored",
        ],
        "f5_ssl" => &[
            "Revert to previous SSL profile",
            "Restore previous certificate",
            "Verify SSL termination functional",
        ],
        "routing_change" => &[
            "Remove added route(s)",
            "Restore previous routing configuration",
            "Verify routing table stable",
        ],
        "acl_update" => &[
            "Revert ACL to previous version",
            "Verify traffic flow restored",
        ],
        "vpn_config" => &[
            "Disable new VPN configuration",
            "Restore previous VPN settings",
            "Verify tunnel stability",
        ],
        _ => &[
            "Remove newly added rule(s)",
            "Restore previous rule configuration if modified",
            "Verify traffic flow returns to pre-change state",
        ],
    }
}

/// Impact statement for a risk level.
fn impact_for(risk_level: &str) -> &'static str {
    match risk_level {
        "medium" => {
            "Moderate impact possible. Brief connectivity interruption may occur during implementation."
        }
        "high" => {
            "Significant impact possible. Service disruption expected during maintenance window."
        }
        _ => "Minimal impact expected. Change affects limited scope with no service disruption.",
    }
}

/// Rollback time window for a risk level.
fn rollback_time_for(risk_level: &str) -> &'static str {
    match risk_level {
        "medium" => "5-15 minutes",
        "high" => "15-30 minutes",
        _ => "< 5 minutes",
    }
}

const READY_CHECKLIST: [&str; 5] = [
    "Change reviewed and approved by team lead",
    "Rollback procedure documented and tested",
    "Maintenance window scheduled (if required)",
    "Stakeholders notified",
    "Monitoring alerts configured",
];

const EVIDENCE_CHECKLIST: [&str; 4] = [
    "Pre-change configuration backup",
    "Screenshot of change implementation",
    "Post-change verification results",
    "Test results documentation",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Generate FCR section content.
///
/// This is the main entry point for the skill: validates, merges with the
/// defaults table, selects the per-type and per-risk fragments, and
/// renders.
pub fn generate(input: &FcrInput, defaults: &Defaults) -> Result<String> {
    input.ensure_valid()?;
    let merged = input.clone().merged(&defaults.fcr);

    let mut description_vars = RenderContext::new();
    description_vars.set("purpose", &merged.purpose);
    description_vars.set("direction", &merged.direction);
    description_vars.set("rule_count", &merged.rule_count);
    let technical_description = render_template(
        technical_description_template(&merged.change_type),
        &description_vars,
    )?;

    let affected_systems = vec![format!(
        "{} {} infrastructure",
        merged.environment.to_uppercase(),
        title_case(&merged.change_type)
    )];

    let mut context = RenderContext::new();
    context.set("purpose", &merged.purpose);
    context.set("change_type_title", title_case(&merged.change_type));
    context.set("risk_upper", merged.risk_level.to_uppercase());
    context.set("environment_upper", merged.environment.to_uppercase());
    context.set("technical_description", technical_description);
    context.set("rollback_time", rollback_time_for(&merged.risk_level));
    context.set("impact_statement", impact_for(&merged.risk_level));
    context.set("timestamp", super::current_timestamp());
    context.set_list("affected_systems", affected_systems);
    context.set_list("tests_conducted", owned(tests_for(&merged.change_type)));
    context.set_list("rollback_options", owned(rollback_for(&merged.change_type)));
    context.set_list("checklist_justification", owned(&READY_CHECKLIST));
    context.set_list("evidence_checklist", owned(&EVIDENCE_CHECKLIST));

    Ok(render_template(FCR_TEMPLATE, &context)?)
}

/// Generate FCR content from a flat YAML mapping.
pub fn generate_from_yaml(yaml: &str, defaults: &Defaults) -> Result<String> {
    let input: FcrInput = serde_yaml::from_str(yaml)
        .map_err(|e| NetopsError::UserError(format!("failed to parse input YAML: {}", e)))?;
    generate(&input, defaults)
}
