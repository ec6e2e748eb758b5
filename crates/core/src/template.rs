//! Rendering invocation templates.
//!
//! A template is a textual reconstruction of a command line from a
//! parameter-name-to-value mapping: `fr container:member --k="v" ...`.
//! Three layouts exist: compact (single line, falling back to multiline
//! past a break width), multiline (one flag per continuation-suffixed
//! line) and a heredoc-style doc block that can be fed back to the
//! dispatcher as an alternate invocation syntax.

use itertools::Itertools;
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::signature::{BoundArgs, ParamKind, SignatureSchema};

/// Marker rendered for parameters that have no declared default.
pub const REQUIRED_MARKER: &str = "<required>";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemplateStyle {
    #[default]
    Compact,
    Multiline,
    MultilineDoc,
}

impl TemplateStyle {
    /// Parses the `template-format` mode value. The empty string selects
    /// the compact layout.
    pub fn parse(text: &str) -> Result<Self> {
        match text {
            "" => Ok(Self::Compact),
            "multiline" => Ok(Self::Multiline),
            "multiline-doc" => Ok(Self::MultilineDoc),
            other => Err(Error::ModeValueConversion {
                option: "template-format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Single-line length past which the compact layout falls back to the
    /// multiline one.
    pub break_width: usize,
    /// Indentation of continuation lines in the multiline layout.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            break_width: 79,
            indent: 4,
        }
    }
}

/// Canonical single-line text for an argument value.
pub fn canonical_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Sequence(items) => format!("[{}]", items.iter().map(canonical_text).join(", ")),
        Value::Mapping(entries) => format!(
            "{{{}}}",
            entries
                .iter()
                .map(|(key, value)| format!("{}: {}", canonical_text(key), canonical_text(value)))
                .join(", ")
        ),
        Value::Tagged(tagged) => canonical_text(&tagged.value),
    }
}

/// Flag tokens for an argument mapping: `true` booleans render as bare
/// `--name`, `false` booleans are omitted, everything else is quoted.
fn flag_tokens(arguments: &BoundArgs) -> Vec<String> {
    let mut tokens = Vec::new();
    for (name, value) in arguments {
        match value {
            Value::Bool(true) => tokens.push(format!("--{name}")),
            Value::Bool(false) => {}
            other => tokens.push(format!("--{name}=\"{}\"", canonical_text(other))),
        }
    }
    tokens
}

pub fn render(
    program: &str,
    label: &str,
    arguments: &BoundArgs,
    style: TemplateStyle,
    options: &RenderOptions,
) -> String {
    match style {
        TemplateStyle::Compact => render_compact(program, label, arguments, options),
        TemplateStyle::Multiline => render_multiline(program, label, arguments, options),
        TemplateStyle::MultilineDoc => render_doc(program, label, arguments),
    }
}

fn render_compact(
    program: &str,
    label: &str,
    arguments: &BoundArgs,
    options: &RenderOptions,
) -> String {
    let mut components = vec![program.to_string(), label.to_string()];
    components.extend(flag_tokens(arguments));

    let one_line = components.join(" ");
    if one_line.chars().count() <= options.break_width {
        one_line
    } else {
        render_multiline(program, label, arguments, options)
    }
}

fn render_multiline(
    program: &str,
    label: &str,
    arguments: &BoundArgs,
    options: &RenderOptions,
) -> String {
    let flags = flag_tokens(arguments);
    let head = format!("{program} {label}");
    if flags.is_empty() {
        return head;
    }

    let indent = " ".repeat(options.indent);
    let mut lines = vec![format!("{head} \\")];
    for (index, flag) in flags.iter().enumerate() {
        let suffix = if index + 1 < flags.len() { " \\" } else { "" };
        lines.push(format!("{indent}{flag}{suffix}"));
    }
    lines.join("\n")
}

fn render_doc(program: &str, label: &str, arguments: &BoundArgs) -> String {
    let mut lines = vec![
        format!("{program} - << EOF"),
        String::new(),
        "# Entrypoint".to_string(),
        label.to_string(),
        String::new(),
        "# Arguments".to_string(),
    ];
    lines.extend(flag_tokens(arguments));
    lines.push(String::new());
    lines.push("EOF".to_string());
    lines.join("\n")
}

/// Synthesizes the arguments a template needs when no call has been
/// bound: declared defaults where present, a required marker otherwise.
/// Variadic slots are skipped since their tokens would not bind back.
pub fn mock_arguments(schema: &SignatureSchema) -> BoundArgs {
    let mut arguments = BoundArgs::new();
    for param in schema.params() {
        if matches!(param.kind, ParamKind::VarPositional | ParamKind::VarKeyword) {
            continue;
        }
        let value = param
            .default
            .clone()
            .unwrap_or_else(|| Value::String(REQUIRED_MARKER.to_string()));
        arguments.insert(param.name.clone(), value);
    }
    arguments
}
