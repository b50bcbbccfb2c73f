//! Command implementations for netops.
//!
//! The dispatcher routes CLI commands to their handlers. Each handler
//! resolves the input mode the same way:
//!
//! 1. `--input file.yaml` wins when present
//! 2. all positional arguments present: quick mode
//! 3. no positional arguments (or `--detailed`): interactive mode
//! 4. some but not all positionals: usage error
//!
//! Handlers then delegate to the skill and write the document to stdout or
//! the `--output` path. Generation is all-or-nothing: on any failure
//! nothing is written.

use crate::cli::{Command, FcrArgs, IncidentArgs, RunbookArgs};
use crate::defaults::Defaults;
use crate::error::{NetopsError, Result};
use crate::interactive::{self, StdPrompter};
use crate::playbook::PlaybookStore;
use crate::schema::{FcrInput, IncidentInput, RunbookInput};
use crate::skills;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Incident(args) => cmd_incident(args),
        Command::Runbook(args) => cmd_runbook(args),
        Command::Fcr(args) => cmd_fcr(args),
    }
}

fn cmd_incident(args: IncidentArgs) -> Result<()> {
    let defaults = Defaults::resolve()?;

    let result = if let Some(path) = &args.input {
        let yaml = read_input_file(path)?;
        skills::incident::generate_from_yaml(&yaml, &defaults)?
    } else if let (Some(title), Some(impact)) = (&args.title, &args.impact) {
        let input = IncidentInput {
            incident_title: title.clone(),
            impact_summary: impact.clone(),
            audience: args.audience.clone(),
            severity: args.severity.clone(),
            current_status: args.status.clone(),
            ..Default::default()
        };
        skills::incident::generate(&input, &defaults)?
    } else if args.detailed || (args.title.is_none() && args.impact.is_none()) {
        let mut prompter = StdPrompter::new();
        let input = interactive::run_incident(&mut prompter, args.detailed, &defaults)?;
        skills::incident::generate(&input, &defaults)?
    } else {
        return Err(NetopsError::UserError(
            "both TITLE and IMPACT are required for quick mode\n\
             Usage: netops incident \"title\" \"impact\""
                .to_string(),
        ));
    };

    write_output(&result, args.output.as_deref())
}

fn cmd_runbook(args: RunbookArgs) -> Result<()> {
    let defaults = Defaults::resolve()?;
    let store = PlaybookStore::resolve();

    let result = if let Some(path) = &args.input {
        let yaml = read_input_file(path)?;
        skills::runbook::generate_from_yaml(&yaml, &defaults, &store)?
    } else if let (Some(domain), Some(symptom)) = (&args.domain, &args.symptom) {
        let input = RunbookInput {
            domain: domain.clone(),
            symptom_category: symptom.clone(),
            access_mode: args.mode.clone(),
            environment: args.env.clone(),
        };
        skills::runbook::generate(&input, &defaults, &store)?
    } else if args.domain.is_none() && args.symptom.is_none() {
        let mut prompter = StdPrompter::new();
        let input = interactive::run_runbook(&mut prompter, &store)?;
        skills::runbook::generate(&input, &defaults, &store)?
    } else {
        return Err(NetopsError::UserError(
            "both DOMAIN and SYMPTOM are required for quick mode\n\
             Usage: netops runbook firewall high_cpu"
                .to_string(),
        ));
    };

    write_output(&result, args.output.as_deref())
}

fn cmd_fcr(args: FcrArgs) -> Result<()> {
    let defaults = Defaults::resolve()?;

    let result = if let Some(path) = &args.input {
        let yaml = read_input_file(path)?;
        skills::fcr::generate_from_yaml(&yaml, &defaults)?
    } else if let Some(purpose) = &args.purpose {
        let input = FcrInput {
            purpose: purpose.clone(),
            change_type: args.change_type.clone(),
            direction: args.direction.clone(),
            risk_level: args.risk.clone(),
            ..Default::default()
        };
        skills::fcr::generate(&input, &defaults)?
    } else {
        let mut prompter = StdPrompter::new();
        let input = interactive::run_fcr(&mut prompter)?;
        skills::fcr::generate(&input, &defaults)?
    };

    write_output(&result, args.output.as_deref())
}

fn read_input_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        NetopsError::UserError(format!(
            "failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })
}

fn write_output(document: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, document).map_err(|e| {
                NetopsError::UserError(format!(
                    "failed to write output file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            println!("Output written to: {}", path.display());
        }
        None => {
            println!();
            println!("{}", "=".repeat(80));
            println!("{}", document);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use std::fs;
    use tempfile::TempDir;

    fn incident_args() -> IncidentArgs {
        IncidentArgs {
            title: None,
            impact: None,
            input: None,
            output: None,
            audience: "manager".to_string(),
            severity: "P2".to_string(),
            status: "investigating".to_string(),
            detailed: false,
        }
    }

    fn runbook_args() -> RunbookArgs {
        RunbookArgs {
            domain: None,
            symptom: None,
            input: None,
            output: None,
            mode: "gui_only".to_string(),
            env: "prod".to_string(),
        }
    }

    fn fcr_args() -> FcrArgs {
        FcrArgs {
            purpose: None,
            input: None,
            output: None,
            change_type: "firewall_rule".to_string(),
            risk: "low".to_string(),
            direction: "inbound".to_string(),
        }
    }

    #[test]
    fn incident_partial_positionals_is_usage_error() {
        let args = IncidentArgs {
            title: Some("VPN down".to_string()),
            ..incident_args()
        };
        let err = cmd_incident(args).unwrap_err();
        assert!(err.to_string().contains("both TITLE and IMPACT"));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn runbook_partial_positionals_is_usage_error() {
        let args = RunbookArgs {
            domain: Some("firewall".to_string()),
            ..runbook_args()
        };
        let err = cmd_runbook(args).unwrap_err();
        assert!(err.to_string().contains("both DOMAIN and SYMPTOM"));
    }

    #[test]
    fn incident_quick_mode_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let out_path = dir.path().join("update.md");
        let args = IncidentArgs {
            title: Some("VPN down".to_string()),
            impact: Some("Users cannot connect".to_string()),
            output: Some(out_path.clone()),
            ..incident_args()
        };

        cmd_incident(args).unwrap();

        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.contains("VPN down"));
        assert!(written.contains("P2"));
    }

    #[test]
    fn incident_yaml_mode_reads_input_file() {
        let dir = TempDir::new().unwrap();
        let in_path = dir.path().join("input.yaml");
        let out_path = dir.path().join("update.md");
        fs::write(
            &in_path,
            "incident_title: Circuit flap\nimpact_summary: Branch offline\nseverity: P1\n",
        )
        .unwrap();

        let args = IncidentArgs {
            input: Some(in_path),
            output: Some(out_path.clone()),
            ..incident_args()
        };
        cmd_incident(args).unwrap();

        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.contains("Circuit flap"));
        assert!(written.contains("P1"));
    }

    #[test]
    fn incident_missing_input_file_is_user_error() {
        let args = IncidentArgs {
            input: Some("/nonexistent/input.yaml".into()),
            ..incident_args()
        };
        let err = cmd_incident(args).unwrap_err();
        assert!(err.to_string().contains("failed to read input file"));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn incident_yaml_missing_required_fields_fails_validation() {
        let dir = TempDir::new().unwrap();
        let in_path = dir.path().join("input.yaml");
        fs::write(&in_path, "severity: P1\n").unwrap();

        let args = IncidentArgs {
            input: Some(in_path),
            ..incident_args()
        };
        let err = cmd_incident(args).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(err.to_string().contains("incident_title is required"));
        assert!(err.to_string().contains("impact_summary is required"));
    }

    #[test]
    fn runbook_quick_mode_writes_output_file() {
        // PlaybookStore::resolve falls back to ./playbooks, which is the
        // shipped directory when tests run from the crate root.
        let dir = TempDir::new().unwrap();
        let out_path = dir.path().join("runbook.md");
        let args = RunbookArgs {
            domain: Some("firewall".to_string()),
            symptom: Some("high_cpu".to_string()),
            output: Some(out_path.clone()),
            ..runbook_args()
        };

        cmd_runbook(args).unwrap();

        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.contains("Troubleshooting Runbook"));
        assert!(written.contains("High Cpu"));
    }

    #[test]
    fn runbook_unknown_domain_is_lookup_error() {
        let args = RunbookArgs {
            domain: Some("nonexistent".to_string()),
            symptom: Some("high_cpu".to_string()),
            ..runbook_args()
        };
        let err = cmd_runbook(args).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::LOOKUP_FAILURE);
    }

    #[test]
    fn fcr_quick_mode_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let out_path = dir.path().join("fcr.md");
        let args = FcrArgs {
            purpose: Some("management access".to_string()),
            output: Some(out_path.clone()),
            ..fcr_args()
        };

        cmd_fcr(args).unwrap();

        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.contains("management access"));
        assert!(written.contains("Ready-to-Go Checklist"));
    }

    #[test]
    fn fcr_yaml_and_quick_mode_agree() {
        let dir = TempDir::new().unwrap();
        let in_path = dir.path().join("input.yaml");
        let yaml_out = dir.path().join("yaml.md");
        let quick_out = dir.path().join("quick.md");
        fs::write(&in_path, "purpose: management access\nrisk_level: high\n").unwrap();

        cmd_fcr(FcrArgs {
            input: Some(in_path),
            output: Some(yaml_out.clone()),
            ..fcr_args()
        })
        .unwrap();
        cmd_fcr(FcrArgs {
            purpose: Some("management access".to_string()),
            risk: "high".to_string(),
            output: Some(quick_out.clone()),
            ..fcr_args()
        })
        .unwrap();

        let strip = crate::skills::test_util::strip_timestamp;
        let yaml_doc = fs::read_to_string(&yaml_out).unwrap();
        let quick_doc = fs::read_to_string(&quick_out).unwrap();
        assert_eq!(strip(&yaml_doc), strip(&quick_doc));
    }

    #[test]
    fn dispatch_routes_to_correct_handler() {
        let result = dispatch(Command::Fcr(FcrArgs {
            purpose: Some("".to_string()),
            ..fcr_args()
        }));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("purpose is required"));
    }
}
