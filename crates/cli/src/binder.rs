//! Binding forwarded command-line tokens against a signature schema.
//!
//! This is the generic argument-to-call machinery behind every dispatch:
//! `--name=value` and bare `--name` tokens bind by name, other tokens
//! bind positionally in declaration order. Excess positional values flow
//! into the schema's var-positional slot as a sequence, unknown named
//! values into the var-keyword slot as a mapping. Declared defaults fill
//! everything left unbound.

use funcrun_core::error::{Error, Result};
use funcrun_core::signature::{BoundArgs, ParamKind, SignatureSchema};
use funcrun_core::wrapper::ArgumentBinder;
use indexmap::IndexMap;
use serde_yaml::Value;

/// The concrete [`ArgumentBinder`] used by the dispatcher.
pub struct FlagBinder;

/// Typed inference for forwarded argument text: quoted text stays
/// literal, anything else goes through YAML scalar parsing with a
/// plain-text fallback.
pub fn parse_value(text: &str) -> Value {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return Value::String(text[1..text.len() - 1].to_string());
    }
    if text.is_empty() {
        return Value::String(String::new());
    }
    serde_yaml::from_str::<Value>(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

impl ArgumentBinder for FlagBinder {
    fn bind(&self, schema: &SignatureSchema, forwarded: &[String]) -> Result<BoundArgs> {
        let mut named = BoundArgs::new();
        let mut extra_positional: Vec<Value> = Vec::new();
        let mut extra_keyword: IndexMap<String, Value> = IndexMap::new();

        let positional_targets: Vec<&str> = schema
            .params()
            .iter()
            .filter(|param| param.kind == ParamKind::PositionalOrKeyword)
            .map(|param| param.name.as_str())
            .collect();
        let mut next_positional = 0usize;

        for token in forwarded {
            if let Some(stripped) = token.strip_prefix("--") {
                let (name, value_text) = match stripped.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (stripped, None),
                };
                if name.is_empty() {
                    return Err(Error::ArgumentFormat(token.clone()));
                }

                // Bare `--name` is a boolean flag.
                let value = match value_text {
                    Some(text) => parse_value(text),
                    None => Value::Bool(true),
                };

                if let Some(param) = schema.get(name) {
                    if matches!(param.kind, ParamKind::VarPositional | ParamKind::VarKeyword) {
                        return Err(Error::ArgumentFormat(token.clone()));
                    }
                    if named.insert(name.to_string(), value).is_some() {
                        return Err(Error::DuplicateArgument(name.to_string()));
                    }
                } else if schema.var_keyword_index().is_some() {
                    if extra_keyword.insert(name.to_string(), value).is_some() {
                        return Err(Error::DuplicateArgument(name.to_string()));
                    }
                } else {
                    return Err(Error::UnknownArgument(name.to_string()));
                }
            } else {
                let value = parse_value(token);

                while next_positional < positional_targets.len()
                    && named.contains_key(positional_targets[next_positional])
                {
                    next_positional += 1;
                }

                if next_positional < positional_targets.len() {
                    named.insert(positional_targets[next_positional].to_string(), value);
                    next_positional += 1;
                } else if schema.var_positional_index().is_some() {
                    extra_positional.push(value);
                } else {
                    return Err(Error::UnknownArgument(token.clone()));
                }
            }
        }

        // Assemble in schema order, then the overflow slots.
        let mut bound = BoundArgs::new();
        for param in schema.params() {
            match param.kind {
                ParamKind::VarPositional => {
                    if !extra_positional.is_empty() {
                        bound.insert(
                            param.name.clone(),
                            Value::Sequence(std::mem::take(&mut extra_positional)),
                        );
                    }
                }
                ParamKind::VarKeyword => {
                    if !extra_keyword.is_empty() {
                        let mapping: serde_yaml::Mapping = extra_keyword
                            .drain(..)
                            .map(|(key, value)| (Value::String(key), value))
                            .collect();
                        bound.insert(param.name.clone(), Value::Mapping(mapping));
                    }
                }
                _ => {
                    if let Some(value) = named.shift_remove(&param.name) {
                        bound.insert(param.name.clone(), value);
                    } else if let Some(default) = &param.default {
                        bound.insert(param.name.clone(), default.clone());
                    } else {
                        return Err(Error::MissingArgument(param.name.clone()));
                    }
                }
            }
        }

        Ok(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funcrun_core::signature::ParameterSpec;

    fn bind(schema: &SignatureSchema, forwarded: &[&str]) -> Result<BoundArgs> {
        let forwarded: Vec<String> = forwarded.iter().map(|t| (*t).to_string()).collect();
        FlagBinder.bind(schema, &forwarded)
    }

    fn plain_schema() -> SignatureSchema {
        SignatureSchema::new(vec![
            ParameterSpec::required("text", ParamKind::PositionalOrKeyword),
            ParameterSpec::with_default(
                "count",
                ParamKind::PositionalOrKeyword,
                Value::Number(2.into()),
            ),
            ParameterSpec::with_default("loud", ParamKind::PositionalOrKeyword, Value::Bool(false)),
        ])
        .unwrap()
    }

    fn variadic_schema() -> SignatureSchema {
        SignatureSchema::new(vec![
            ParameterSpec::required("first", ParamKind::PositionalOrKeyword),
            ParameterSpec::required("rest", ParamKind::VarPositional),
            ParameterSpec::with_default(
                "sep",
                ParamKind::KeywordOnly,
                Value::String(String::new()),
            ),
            ParameterSpec::required("extras", ParamKind::VarKeyword),
        ])
        .unwrap()
    }

    #[test]
    fn test_bind_named_arguments() {
        let bound = bind(&plain_schema(), &["--text=hi", "--count=3"]).unwrap();

        assert_eq!(bound.get("text"), Some(&Value::String("hi".to_string())));
        assert_eq!(bound.get("count"), Some(&Value::Number(3.into())));
        // Untouched parameter picks up its default.
        assert_eq!(bound.get("loud"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_bind_bare_flag_is_boolean_true() {
        let bound = bind(&plain_schema(), &["--text=hi", "--loud"]).unwrap();
        assert_eq!(bound.get("loud"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_bind_positional_arguments_in_declaration_order() {
        let bound = bind(&plain_schema(), &["hi", "5"]).unwrap();

        assert_eq!(bound.get("text"), Some(&Value::String("hi".to_string())));
        assert_eq!(bound.get("count"), Some(&Value::Number(5.into())));
    }

    #[test]
    fn test_bind_positionals_skip_parameters_already_named() {
        let bound = bind(&plain_schema(), &["--text=hi", "5"]).unwrap();
        assert_eq!(bound.get("count"), Some(&Value::Number(5.into())));
    }

    #[test]
    fn test_bind_quoted_value_stays_text() {
        let bound = bind(&plain_schema(), &["--text=\"42\""]).unwrap();
        assert_eq!(bound.get("text"), Some(&Value::String("42".to_string())));
    }

    #[test]
    fn test_bind_unquoted_scalars_are_typed() {
        let bound = bind(&plain_schema(), &["--text=hi", "--loud=true"]).unwrap();
        assert_eq!(bound.get("loud"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_bind_missing_required_argument() {
        let result = bind(&plain_schema(), &["--count=3"]);
        assert!(matches!(result, Err(Error::MissingArgument(name)) if name == "text"));
    }

    #[test]
    fn test_bind_unknown_argument_without_var_keyword() {
        let result = bind(&plain_schema(), &["--text=hi", "--volume=11"]);
        assert!(matches!(result, Err(Error::UnknownArgument(name)) if name == "volume"));
    }

    #[test]
    fn test_bind_duplicate_argument() {
        let result = bind(&plain_schema(), &["--text=hi", "--text=bye"]);
        assert!(matches!(result, Err(Error::DuplicateArgument(name)) if name == "text"));
    }

    #[test]
    fn test_bind_overflow_positionals_fill_var_positional() {
        let bound = bind(&variadic_schema(), &["a", "b", "c"]).unwrap();

        assert_eq!(bound.get("first"), Some(&Value::String("a".to_string())));
        assert_eq!(
            bound.get("rest"),
            Some(&Value::Sequence(vec![
                Value::String("b".to_string()),
                Value::String("c".to_string())
            ]))
        );
    }

    #[test]
    fn test_bind_unknown_names_fill_var_keyword() {
        let bound = bind(&variadic_schema(), &["a", "--color=red", "--size=2"]).unwrap();

        let Some(Value::Mapping(extras)) = bound.get("extras") else {
            panic!("expected a mapping under the var-keyword slot");
        };
        assert_eq!(extras.get("color"), Some(&Value::String("red".to_string())));
        assert_eq!(extras.get("size"), Some(&Value::Number(2.into())));
    }

    #[test]
    fn test_bind_var_slots_are_absent_when_unused() {
        let bound = bind(&variadic_schema(), &["a"]).unwrap();
        assert!(!bound.contains_key("rest"));
        assert!(!bound.contains_key("extras"));
    }

    #[test]
    fn test_bind_var_slots_not_directly_addressable() {
        let result = bind(&variadic_schema(), &["a", "--rest=oops"]);
        assert!(matches!(result, Err(Error::ArgumentFormat(_))));
    }

    #[test]
    fn test_bind_keyword_only_binds_by_name() {
        let bound = bind(&variadic_schema(), &["a", "--sep=+"]).unwrap();
        assert_eq!(bound.get("sep"), Some(&Value::String("+".to_string())));
    }

    #[test]
    fn test_bind_excess_positional_without_var_positional() {
        let result = bind(&plain_schema(), &["a", "2", "true", "overflow"]);
        assert!(matches!(result, Err(Error::UnknownArgument(token)) if token == "overflow"));
    }

    #[test]
    fn test_bind_result_preserves_schema_order() {
        let bound = bind(&plain_schema(), &["--count=3", "--text=hi"]).unwrap();
        let names: Vec<&String> = bound.keys().collect();
        assert_eq!(names, vec!["text", "count", "loud"]);
    }

    #[test]
    fn test_parse_value_forms() {
        assert_eq!(parse_value("42"), Value::Number(42.into()));
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("hello"), Value::String("hello".to_string()));
        assert_eq!(parse_value(""), Value::String(String::new()));
        assert_eq!(parse_value("\"true\""), Value::String("true".to_string()));
    }
}
