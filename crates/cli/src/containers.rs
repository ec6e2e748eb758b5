//! Builtin dispatch targets.
//!
//! A small set of containers registered by the `fr` binary. They are
//! useful targets for scripting and double as end-to-end fixtures for
//! the dispatcher: between them they cover defaults, variadic slots and
//! keyword-only parameters.

use funcrun_core::error::{Error, Result};
use itertools::Itertools;
use funcrun_core::registry::{Container, ContainerRegistry, Member};
use funcrun_core::signature::{BoundArgs, ParamKind, ParameterSpec, SignatureSchema};
use funcrun_core::template::canonical_text;
use serde_yaml::Value;

/// Builds the registry of containers shipped with the dispatcher.
pub fn builtin_registry() -> Result<ContainerRegistry> {
    let mut registry = ContainerRegistry::new();
    registry.register(env_container()?);
    registry.register(text_container()?);
    Ok(registry)
}

fn text_argument(args: &BoundArgs, name: &str) -> Result<String> {
    match args.get(name) {
        Some(value) => Ok(canonical_text(value)),
        None => Err(Error::MissingArgument(name.to_string())),
    }
}

fn env_container() -> Result<Container> {
    let var_schema = SignatureSchema::new(vec![
        ParameterSpec::required("name", ParamKind::PositionalOrKeyword),
        ParameterSpec::with_default(
            "fallback",
            ParamKind::PositionalOrKeyword,
            Value::String(String::new()),
        ),
    ])?;

    Ok(Container::new("env")
        .with_member(Member::new("cwd", SignatureSchema::empty(), |_args| {
            let cwd = std::env::current_dir()
                .map_err(|e| Error::Misc(format!("cannot read working directory: {e}")))?;
            Ok(Value::String(cwd.display().to_string()))
        }))
        .with_member(Member::new("var", var_schema, |args| {
            let name = text_argument(args, "name")?;
            let fallback = text_argument(args, "fallback")?;
            Ok(Value::String(std::env::var(&name).unwrap_or(fallback)))
        })))
}

fn text_container() -> Result<Container> {
    let repeat_schema = SignatureSchema::new(vec![
        ParameterSpec::required("text", ParamKind::PositionalOrKeyword),
        ParameterSpec::with_default(
            "count",
            ParamKind::PositionalOrKeyword,
            Value::Number(2.into()),
        ),
        ParameterSpec::with_default(
            "separator",
            ParamKind::PositionalOrKeyword,
            Value::String(" ".to_string()),
        ),
    ])?;

    let concat_schema = SignatureSchema::new(vec![
        ParameterSpec::required("parts", ParamKind::VarPositional),
        ParameterSpec::with_default(
            "separator",
            ParamKind::KeywordOnly,
            Value::String(String::new()),
        ),
    ])?;

    let describe_schema =
        SignatureSchema::new(vec![ParameterSpec::required("attrs", ParamKind::VarKeyword)])?;

    Ok(Container::new("text")
        .with_member(Member::new("repeat", repeat_schema, |args| {
            let text = text_argument(args, "text")?;
            let count = match args.get("count") {
                Some(Value::Number(number)) => number.as_u64().unwrap_or_default(),
                Some(other) => canonical_text(other).parse().map_err(|_| {
                    Error::Misc(format!(
                        "count must be a number, got `{}`",
                        canonical_text(other)
                    ))
                })?,
                None => 2,
            };
            let separator = text_argument(args, "separator")?;
            Ok(Value::String(
                vec![text; count as usize].join(&separator),
            ))
        }))
        .with_member(Member::new("concat", concat_schema, |args| {
            let parts: Vec<String> = match args.get("parts") {
                Some(Value::Sequence(items)) => items.iter().map(canonical_text).collect(),
                _ => Vec::new(),
            };
            let separator = text_argument(args, "separator")?;
            Ok(Value::String(parts.join(&separator)))
        }))
        .with_member(Member::new("describe", describe_schema, |args| {
            let text = match args.get("attrs") {
                Some(Value::Mapping(entries)) => entries
                    .iter()
                    .map(|(key, value)| {
                        format!("{}: {}", canonical_text(key), canonical_text(value))
                    })
                    .join("\n"),
                _ => String::new(),
            };
            Ok(Value::String(text))
        })))
}
