//! Markdown list and casing helpers shared by templates and skills.

/// Format items as a markdown bullet list. Empty input renders empty.
pub fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format items as a numbered list starting at 1.
pub fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format items as an unchecked markdown checklist.
pub fn checkbox_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- [ ] {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format items as a pre-checked markdown checklist.
pub fn checked_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- [x] {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn an enum-like key into a display title: `high_cpu` becomes
/// `High Cpu`, `f5` becomes `F5`.
pub fn title_case(key: &str) -> String {
    key.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bullet_list_formats_items() {
        let out = bullet_list(&items(&["check logs", "check optics"]));
        assert_eq!(out, "- check logs\n- check optics");
    }

    #[test]
    fn bullet_list_empty_is_empty() {
        assert_eq!(bullet_list(&[]), "");
    }

    #[test]
    fn numbered_list_starts_at_one() {
        let out = numbered_list(&items(&["first", "second", "third"]));
        assert_eq!(out, "1. first\n2. second\n3. third");
    }

    #[test]
    fn checkbox_list_uses_empty_boxes() {
        let out = checkbox_list(&items(&["config backup"]));
        assert_eq!(out, "- [ ] config backup");
    }

    #[test]
    fn checked_list_uses_filled_boxes() {
        let out = checked_list(&items(&["reviewed by lead"]));
        assert_eq!(out, "- [x] reviewed by lead");
    }

    #[test]
    fn title_case_splits_underscores() {
        assert_eq!(title_case("high_cpu"), "High Cpu");
        assert_eq!(title_case("firewall_rule"), "Firewall Rule");
        assert_eq!(title_case("gui_only"), "Gui Only");
    }

    #[test]
    fn title_case_handles_single_words() {
        assert_eq!(title_case("firewall"), "Firewall");
        assert_eq!(title_case("f5"), "F5");
    }

    #[test]
    fn title_case_empty_is_empty() {
        assert_eq!(title_case(""), "");
    }
}
