//! Tests for the playbook store.

use super::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIREWALL_PLAYBOOK: &str = r#"
escalation_path: "Escalate to the firewall on-call"
symptoms:
  high_cpu:
    explanation: "Sustained high CPU usually indicates a traffic spike or a logging loop."
    diagnostic_steps:
      - action: "Check the CPU utilization graph"
        how: "device health dashboard"
        expected: "plateaus above 80%"
    evidence_checklist:
      - "Screenshot of the CPU graph"
    stop_conditions:
      - "Device stops responding to management"
  connectivity_loss:
    explanation: "Traffic is being dropped somewhere along the path."
"#;

fn store_with_fixtures() -> (TempDir, PlaybookStore) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("firewall.yaml"), FIREWALL_PLAYBOOK).unwrap();
    fs::write(
        dir.path().join("circuit.yaml"),
        "escalation_path: \"Open a carrier ticket\"\nsymptoms: {}\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not a playbook").unwrap();
    let store = PlaybookStore::new(dir.path());
    (dir, store)
}

#[test]
fn available_domains_lists_yaml_stems_sorted() {
    let (_dir, store) = store_with_fixtures();
    assert_eq!(store.available_domains(), vec!["circuit", "firewall"]);
}

#[test]
fn available_domains_missing_dir_is_empty() {
    let store = PlaybookStore::new("/nonexistent/playbooks");
    assert!(store.available_domains().is_empty());
}

#[test]
fn load_existing_playbook() {
    let (_dir, store) = store_with_fixtures();
    let playbook = store.load("firewall").unwrap();
    assert_eq!(playbook.escalation_path, "Escalate to the firewall on-call");
    assert!(playbook.symptoms.contains_key("high_cpu"));
    let step = &playbook.symptoms["high_cpu"].diagnostic_steps[0];
    assert_eq!(step.action, "Check the CPU utilization graph");
}

#[test]
fn load_missing_domain_is_lookup_error() {
    let (_dir, store) = store_with_fixtures();
    let err = store.load("nonexistent").unwrap_err();
    assert_eq!(
        err.to_string(),
        "no playbook found for domain 'nonexistent'"
    );
    assert_eq!(err.exit_code(), crate::exit_codes::LOOKUP_FAILURE);
}

#[test]
fn load_malformed_playbook_is_user_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.yaml"), "symptoms: [not, a, map]\n").unwrap();
    let store = PlaybookStore::new(dir.path());
    let err = store.load("broken").unwrap_err();
    assert!(err.to_string().contains("failed to parse playbook"));
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}

#[test]
fn symptoms_for_domain_in_stable_order() {
    let (_dir, store) = store_with_fixtures();
    let symptoms = store.symptoms_for("firewall").unwrap();
    assert_eq!(symptoms, vec!["connectivity_loss", "high_cpu"]);
}

#[test]
fn shipped_playbooks_parse_and_are_complete() {
    // Every playbook shipped in the repo must load, and every symptom must
    // carry the guidance the runbook template renders.
    let store = PlaybookStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("playbooks"));
    let domains = store.available_domains();
    assert!(domains.contains(&"firewall".to_string()));
    assert!(domains.contains(&"f5".to_string()));

    for domain in domains {
        let playbook = store.load(&domain).unwrap();
        assert!(
            !playbook.symptoms.is_empty(),
            "playbook '{}' has no symptoms",
            domain
        );
        for (name, symptom) in &playbook.symptoms {
            assert!(
                !symptom.explanation.trim().is_empty(),
                "{}/{} has no explanation",
                domain,
                name
            );
            assert!(
                !symptom.diagnostic_steps.is_empty(),
                "{}/{} has no diagnostic steps",
                domain,
                name
            );
            assert!(
                !symptom.evidence_checklist.is_empty(),
                "{}/{} has no evidence checklist",
                domain,
                name
            );
            assert!(
                !symptom.stop_conditions.is_empty(),
                "{}/{} has no stop conditions",
                domain,
                name
            );
        }
    }
}

#[test]
fn firewall_playbook_has_high_cpu_symptom() {
    let store = PlaybookStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("playbooks"));
    let symptoms = store.symptoms_for("firewall").unwrap();
    assert!(symptoms.contains(&"high_cpu".to_string()));
}
