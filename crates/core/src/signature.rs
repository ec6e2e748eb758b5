//! Parameter schemas for dispatchable members.
//!
//! A [`SignatureSchema`] is the declared parameter list of a member: an
//! ordered sequence of named parameters, each with a kind and an optional
//! default. Schemas are value objects; augmentation (see
//! [`crate::inject`]) always builds a new schema and never mutates the
//! original.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::error::{Error, Result};

/// Ordered mapping of parameter name to bound value.
pub type BoundArgs = IndexMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Bindable by position or by name.
    PositionalOrKeyword,
    /// Bindable by name only; appears after the var-positional slot.
    KeywordOnly,
    /// Catch-all for excess positional values. At most one per schema.
    VarPositional,
    /// Catch-all for unknown named values. At most one per schema, always
    /// last.
    VarKeyword,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub kind: ParamKind,
    pub default: Option<Value>,
}

impl ParameterSpec {
    pub fn required(name: &str, kind: ParamKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default: None,
        }
    }

    pub fn with_default(name: &str, kind: ParamKind, default: Value) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default: Some(default),
        }
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignatureSchema {
    params: Vec<ParameterSpec>,
}

impl SignatureSchema {
    /// Builds a schema, rejecting parameter lists that could not belong to
    /// a real callable: duplicate names, more than one variadic slot of a
    /// kind, a var-keyword slot that is not last, a plain positional after
    /// the var-positional slot, or a keyword-only parameter with no
    /// var-positional slot before it.
    pub fn new(params: Vec<ParameterSpec>) -> Result<Self> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut seen_var_positional = false;
        let mut seen_var_keyword = false;

        for param in &params {
            if !names.insert(param.name.as_str()) {
                return Err(Error::DuplicateParameter(param.name.clone()));
            }

            if seen_var_keyword {
                return Err(Error::ParameterOrder(param.name.clone()));
            }

            match param.kind {
                ParamKind::VarPositional => {
                    if seen_var_positional {
                        return Err(Error::MultipleVarPositional);
                    }
                    seen_var_positional = true;
                }
                ParamKind::VarKeyword => {
                    if seen_var_keyword {
                        return Err(Error::MultipleVarKeyword);
                    }
                    seen_var_keyword = true;
                }
                ParamKind::PositionalOrKeyword => {
                    if seen_var_positional {
                        return Err(Error::ParameterOrder(param.name.clone()));
                    }
                }
                ParamKind::KeywordOnly => {
                    if !seen_var_positional {
                        return Err(Error::ParameterOrder(param.name.clone()));
                    }
                }
            }
        }

        Ok(Self { params })
    }

    /// Schema of a member that takes no arguments.
    pub fn empty() -> Self {
        Self { params: Vec::new() }
    }

    /// Constructor for parameter lists whose invariants were already
    /// established by the caller, such as the injector's output.
    pub(crate) fn from_validated(params: Vec<ParameterSpec>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &[ParameterSpec] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|param| param.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.params.iter().find(|param| param.name == name)
    }

    pub fn var_positional_index(&self) -> Option<usize> {
        self.params
            .iter()
            .position(|param| param.kind == ParamKind::VarPositional)
    }

    pub fn var_keyword_index(&self) -> Option<usize> {
        self.params
            .iter()
            .position(|param| param.kind == ParamKind::VarKeyword)
    }
}
