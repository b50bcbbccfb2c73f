//! Template engine for document rendering.
//!
//! The engine walks a template line by line. Lines that consist solely of a
//! block tag (`{?flag}`, `{^flag}`, `{/flag}`) control whether the enclosed
//! lines are kept and never appear in the output themselves. All other lines
//! go through `{variable}` substitution.
//!
//! # Error Handling
//!
//! The engine is fail-safe: undefined variables, type mismatches, and
//! unbalanced section tags cause an error rather than silent substitution
//! with empty strings. This prevents subtle bugs from typos in templates.

use super::format::{bullet_list, checkbox_list, checked_list, numbered_list};
use std::collections::HashMap;
use std::fmt;

/// A typed value in a render context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A plain string, substituted by `{name}`.
    Str(String),
    /// A list of lines, substituted by `{name:bullets}` and friends.
    List(Vec<String>),
    /// A boolean controlling `{?name}` / `{^name}` sections.
    Flag(bool),
}

/// Variables available to a template, assembled per invocation and consumed
/// exactly once by [`render_template`].
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    vars: HashMap<String, Value>,
}

impl RenderContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a string variable.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.vars.insert(name.to_string(), Value::Str(value.into()));
    }

    /// Set a list variable.
    pub fn set_list(&mut self, name: &str, items: Vec<String>) {
        self.vars.insert(name.to_string(), Value::List(items));
    }

    /// Set a boolean section flag.
    pub fn set_flag(&mut self, name: &str, on: bool) {
        self.vars.insert(name.to_string(), Value::Flag(on));
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }
}

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// The 1-indexed template line where it was referenced.
        line: usize,
    },
    /// A variable was used with the wrong type (e.g. a list without a
    /// format, or a format applied to a string).
    WrongType {
        /// The name of the variable.
        name: String,
        /// What the placeholder expected ("string", "list", "flag").
        expected: &'static str,
        /// The 1-indexed template line.
        line: usize,
    },
    /// An unknown list format was requested (e.g. `{items:csv}`).
    UnknownFormat {
        /// The name of the variable.
        name: String,
        /// The unrecognized format.
        format: String,
        /// The 1-indexed template line.
        line: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// The 1-indexed template line.
        line: usize,
    },
    /// An empty variable name was found (e.g. `{}`).
    EmptyVariableName {
        /// The 1-indexed template line.
        line: usize,
    },
    /// A section tag was closed out of order, closed without being opened,
    /// or left open at the end of the template.
    UnbalancedSection {
        /// The flag named by the offending tag.
        name: String,
        /// The 1-indexed template line (end of template for unclosed tags).
        line: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, line } => {
                write!(f, "undefined variable '{}' on template line {}", name, line)
            }
            TemplateError::WrongType {
                name,
                expected,
                line,
            } => {
                write!(
                    f,
                    "variable '{}' on template line {} is not a {}",
                    name, line, expected
                )
            }
            TemplateError::UnknownFormat { name, format, line } => {
                write!(
                    f,
                    "unknown list format '{}' for variable '{}' on template line {}",
                    format, name, line
                )
            }
            TemplateError::UnmatchedBrace { line } => {
                write!(f, "unmatched '{{' on template line {}", line)
            }
            TemplateError::EmptyVariableName { line } => {
                write!(f, "empty variable name '{{}}' on template line {}", line)
            }
            TemplateError::UnbalancedSection { name, line } => {
                write!(
                    f,
                    "unbalanced section tag for '{}' on template line {}",
                    name, line
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// A section tag occupying a whole template line.
enum SectionTag<'a> {
    /// `{?flag}` — keep the section when the flag is true.
    Open(&'a str),
    /// `{^flag}` — keep the section when the flag is false.
    OpenNegated(&'a str),
    /// `{/flag}` — end of the section.
    Close(&'a str),
}

/// Parse a line that consists solely of a section tag, if it is one.
fn parse_section_tag(line: &str) -> Option<SectionTag<'_>> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('{')?.strip_suffix('}')?;
    let (marker, name) = inner.split_at_checked(1)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    match marker {
        "?" => Some(SectionTag::Open(name)),
        "^" => Some(SectionTag::OpenNegated(name)),
        "/" => Some(SectionTag::Close(name)),
        _ => None,
    }
}

/// Render a template by substituting variables from a context.
///
/// # Arguments
///
/// * `template` - The template text
/// * `context` - The variables available to the template
///
/// # Returns
///
/// * `Ok(String)` - The rendered document
/// * `Err(TemplateError)` - If a variable is undefined, mistyped, or the
///   section tags are unbalanced
pub fn render_template(template: &str, context: &RenderContext) -> Result<String, TemplateError> {
    // Stack of (flag name, section currently emitting) pairs. A section
    // emits only if every enclosing section emits too.
    let mut sections: Vec<(String, bool)> = Vec::new();
    let mut rendered: Vec<String> = Vec::new();
    let mut line_count = 0;

    for (idx, line) in template.lines().enumerate() {
        let line_no = idx + 1;
        line_count = line_no;

        if let Some(tag) = parse_section_tag(line) {
            let (name, negated) = match tag {
                SectionTag::Open(name) => (name, false),
                SectionTag::OpenNegated(name) => (name, true),
                SectionTag::Close(name) => {
                    match sections.pop() {
                        Some((open_name, _)) if open_name == name => continue,
                        _ => {
                            return Err(TemplateError::UnbalancedSection {
                                name: name.to_string(),
                                line: line_no,
                            });
                        }
                    }
                }
            };

            let flag = lookup_flag(context, name, line_no)?;
            let keep = if negated { !flag } else { flag };
            let parent_emitting = sections.iter().all(|(_, e)| *e);
            sections.push((name.to_string(), parent_emitting && keep));
            continue;
        }

        if sections.iter().all(|(_, e)| *e) {
            rendered.push(substitute_line(line, context, line_no)?);
        }
    }

    if let Some((name, _)) = sections.pop() {
        return Err(TemplateError::UnbalancedSection {
            name,
            line: line_count,
        });
    }

    let mut out = rendered.join("\n");
    if template.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn lookup_flag(context: &RenderContext, name: &str, line: usize) -> Result<bool, TemplateError> {
    match context.get(name) {
        Some(Value::Flag(on)) => Ok(*on),
        Some(_) => Err(TemplateError::WrongType {
            name: name.to_string(),
            expected: "flag",
            line,
        }),
        None => Err(TemplateError::UndefinedVariable {
            name: name.to_string(),
            line,
        }),
    }
}

/// Substitute `{variable}` placeholders within a single line.
fn substitute_line(
    line: &str,
    context: &RenderContext,
    line_no: usize,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                // Check for escape sequence {{
                if let Some('{') = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut placeholder = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => placeholder.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { line: line_no }),
                    }
                }

                if placeholder.trim().is_empty() {
                    return Err(TemplateError::EmptyVariableName { line: line_no });
                }

                result.push_str(&expand_placeholder(&placeholder, context, line_no)?);
            }
            '}' => {
                // }} renders as a literal }; a lone } is just a character
                if let Some('}') = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Expand a `name` or `name:format` placeholder body.
fn expand_placeholder(
    placeholder: &str,
    context: &RenderContext,
    line_no: usize,
) -> Result<String, TemplateError> {
    let (name, format) = match placeholder.split_once(':') {
        Some((name, format)) => (name.trim(), Some(format.trim())),
        None => (placeholder.trim(), None),
    };

    let value = context
        .get(name)
        .ok_or_else(|| TemplateError::UndefinedVariable {
            name: name.to_string(),
            line: line_no,
        })?;

    match (value, format) {
        (Value::Str(s), None) => Ok(s.clone()),
        (Value::List(items), Some(fmt)) => match fmt {
            "bullets" => Ok(bullet_list(items)),
            "numbered" => Ok(numbered_list(items)),
            "boxes" => Ok(checkbox_list(items)),
            "checked" => Ok(checked_list(items)),
            _ => Err(TemplateError::UnknownFormat {
                name: name.to_string(),
                format: fmt.to_string(),
                line: line_no,
            }),
        },
        (Value::List(_), None) => Err(TemplateError::WrongType {
            name: name.to_string(),
            expected: "string",
            line: line_no,
        }),
        (Value::Str(_), Some(_)) | (Value::Flag(_), Some(_)) => Err(TemplateError::WrongType {
            name: name.to_string(),
            expected: "list",
            line: line_no,
        }),
        (Value::Flag(_), None) => Err(TemplateError::WrongType {
            name: name.to_string(),
            expected: "string",
            line: line_no,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> RenderContext {
        let mut c = RenderContext::new();
        for (k, v) in pairs {
            c.set(k, *v);
        }
        c
    }

    #[test]
    fn test_simple_substitution() {
        let c = ctx(&[("name", "Alice"), ("greeting", "Hello")]);
        let result = render_template("{greeting}, {name}!", &c).unwrap();
        assert_eq!(result, "Hello, Alice!");
    }

    #[test]
    fn test_no_variables() {
        let result = render_template("Just plain text", &RenderContext::new()).unwrap();
        assert_eq!(result, "Just plain text");
    }

    #[test]
    fn test_empty_template() {
        let result = render_template("", &RenderContext::new()).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_escape_braces() {
        let result = render_template("Use {{var}} for variables", &RenderContext::new()).unwrap();
        assert_eq!(result, "Use {var} for variables");
    }

    #[test]
    fn test_lone_closing_brace() {
        let result = render_template("a } b", &RenderContext::new()).unwrap();
        assert_eq!(result, "a } b");
    }

    #[test]
    fn test_multiline_template() {
        let c = ctx(&[("title", "VPN outage"), ("impact", "Logins failing")]);
        let template = "# {title}\n\n## Impact\n{impact}\n";
        let result = render_template(template, &c).unwrap();
        assert_eq!(result, "# VPN outage\n\n## Impact\nLogins failing\n");
    }

    #[test]
    fn test_undefined_variable_error() {
        let err = render_template("line one\nHello {name}", &RenderContext::new()).unwrap_err();
        match err {
            TemplateError::UndefinedVariable { name, line } => {
                assert_eq!(name, "name");
                assert_eq!(line, 2);
            }
            _ => panic!("unexpected error type: {:?}", err),
        }
    }

    #[test]
    fn test_unmatched_brace_error() {
        let err = render_template("Hello {name", &RenderContext::new()).unwrap_err();
        assert_eq!(err, TemplateError::UnmatchedBrace { line: 1 });
    }

    #[test]
    fn test_empty_variable_name_error() {
        let err = render_template("Hello {}", &RenderContext::new()).unwrap_err();
        assert_eq!(err, TemplateError::EmptyVariableName { line: 1 });
    }

    #[test]
    fn test_whitespace_in_variable_name() {
        let c = ctx(&[("name", "Alice")]);
        let result = render_template("Hello { name }!", &c).unwrap();
        assert_eq!(result, "Hello Alice!");
    }

    #[test]
    fn test_list_bullets() {
        let mut c = RenderContext::new();
        c.set_list("steps", vec!["first".to_string(), "second".to_string()]);
        let result = render_template("{steps:bullets}", &c).unwrap();
        assert_eq!(result, "- first\n- second");
    }

    #[test]
    fn test_list_numbered() {
        let mut c = RenderContext::new();
        c.set_list("steps", vec!["first".to_string(), "second".to_string()]);
        let result = render_template("{steps:numbered}", &c).unwrap();
        assert_eq!(result, "1. first\n2. second");
    }

    #[test]
    fn test_list_boxes_and_checked() {
        let mut c = RenderContext::new();
        c.set_list("items", vec!["backup config".to_string()]);
        assert_eq!(
            render_template("{items:boxes}", &c).unwrap(),
            "- [ ] backup config"
        );
        assert_eq!(
            render_template("{items:checked}", &c).unwrap(),
            "- [x] backup config"
        );
    }

    #[test]
    fn test_empty_list_renders_empty() {
        let mut c = RenderContext::new();
        c.set_list("items", vec![]);
        assert_eq!(render_template("{items:bullets}", &c).unwrap(), "");
    }

    #[test]
    fn test_list_without_format_is_error() {
        let mut c = RenderContext::new();
        c.set_list("items", vec!["a".to_string()]);
        let err = render_template("{items}", &c).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::WrongType {
                expected: "string",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_format_is_error() {
        let mut c = RenderContext::new();
        c.set_list("items", vec!["a".to_string()]);
        let err = render_template("{items:csv}", &c).unwrap_err();
        match err {
            TemplateError::UnknownFormat { name, format, line } => {
                assert_eq!(name, "items");
                assert_eq!(format, "csv");
                assert_eq!(line, 1);
            }
            _ => panic!("unexpected error type: {:?}", err),
        }
    }

    #[test]
    fn test_format_on_string_is_error() {
        let c = ctx(&[("title", "x")]);
        let err = render_template("{title:bullets}", &c).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::WrongType {
                expected: "list",
                ..
            }
        ));
    }

    #[test]
    fn test_section_kept_when_flag_true() {
        let mut c = RenderContext::new();
        c.set_flag("has_evidence", true);
        let template = "before\n{?has_evidence}\nevidence line\n{/has_evidence}\nafter\n";
        let result = render_template(template, &c).unwrap();
        assert_eq!(result, "before\nevidence line\nafter\n");
    }

    #[test]
    fn test_section_dropped_when_flag_false() {
        let mut c = RenderContext::new();
        c.set_flag("has_evidence", false);
        let template = "before\n{?has_evidence}\nevidence line\n{/has_evidence}\nafter\n";
        let result = render_template(template, &c).unwrap();
        assert_eq!(result, "before\nafter\n");
    }

    #[test]
    fn test_negated_section() {
        let mut c = RenderContext::new();
        c.set_flag("has_evidence", false);
        let template = "{^has_evidence}\ncollect evidence\n{/has_evidence}\n";
        let result = render_template(template, &c).unwrap();
        assert_eq!(result, "collect evidence\n");
    }

    #[test]
    fn test_dropped_section_skips_substitution() {
        // Variables inside a dropped section are never looked up.
        let mut c = RenderContext::new();
        c.set_flag("show", false);
        let template = "{?show}\n{not_defined}\n{/show}\nkept\n";
        let result = render_template(template, &c).unwrap();
        assert_eq!(result, "kept\n");
    }

    #[test]
    fn test_nested_sections() {
        let mut c = RenderContext::new();
        c.set_flag("outer", true);
        c.set_flag("inner", false);
        let template = "{?outer}\na\n{?inner}\nb\n{/inner}\nc\n{/outer}\n";
        let result = render_template(template, &c).unwrap();
        assert_eq!(result, "a\nc\n");
    }

    #[test]
    fn test_unclosed_section_is_error() {
        let mut c = RenderContext::new();
        c.set_flag("show", true);
        let err = render_template("{?show}\ncontent\n", &c).unwrap_err();
        assert!(matches!(err, TemplateError::UnbalancedSection { name, .. } if name == "show"));
    }

    #[test]
    fn test_mismatched_close_is_error() {
        let mut c = RenderContext::new();
        c.set_flag("a", true);
        let err = render_template("{?a}\ncontent\n{/b}\n", &c).unwrap_err();
        assert!(matches!(err, TemplateError::UnbalancedSection { name, .. } if name == "b"));
    }

    #[test]
    fn test_close_without_open_is_error() {
        let err = render_template("{/stray}\n", &RenderContext::new()).unwrap_err();
        assert!(matches!(err, TemplateError::UnbalancedSection { name, .. } if name == "stray"));
    }

    #[test]
    fn test_undefined_flag_is_error() {
        let err = render_template("{?missing}\nx\n{/missing}\n", &RenderContext::new()).unwrap_err();
        assert!(matches!(err, TemplateError::UndefinedVariable { name, .. } if name == "missing"));
    }

    #[test]
    fn test_flag_in_placeholder_position_is_error() {
        let mut c = RenderContext::new();
        c.set_flag("on", true);
        let err = render_template("value: {on}", &c).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::WrongType {
                expected: "string",
                ..
            }
        ));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut c = RenderContext::new();
        c.set("title", "Circuit flap");
        c.set_list("steps", vec!["check optics".to_string(), "check logs".to_string()]);
        c.set_flag("has_steps", true);
        let template = "# {title}\n{?has_steps}\n{steps:numbered}\n{/has_steps}\n";
        let first = render_template(template, &c).unwrap();
        let second = render_template(template, &c).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::UndefinedVariable {
            name: "foo".to_string(),
            line: 10,
        };
        assert_eq!(err.to_string(), "undefined variable 'foo' on template line 10");

        let err = TemplateError::UnbalancedSection {
            name: "has_evidence".to_string(),
            line: 3,
        };
        assert_eq!(
            err.to_string(),
            "unbalanced section tag for 'has_evidence' on template line 3"
        );
    }
}
