//! Merging control parameters into a target schema.
//!
//! Wrapper behaviors (template printing, the failure hook, profiling) ride
//! through the generic argument binder as extra parameters on the target's
//! schema. Injection must not collide with user-declared parameters and
//! must not break the variadic-parameter ordering rules of
//! [`crate::signature`].

use indexmap::IndexSet;
use log::warn;
use serde_yaml::Value;

use crate::signature::{ParamKind, ParameterSpec, SignatureSchema};

/// A control parameter to merge into a target schema.
#[derive(Debug, Clone)]
pub struct InjectedControlParam {
    pub name: &'static str,
    pub default: Value,
}

/// Produces a new schema with `controls` merged in, plus the set of names
/// that were actually injected.
///
/// Controls are applied in order; later injections see the schema state
/// left by earlier ones. A control whose name is already declared on the
/// schema is skipped with a warning, the declared parameter stays
/// authoritative and the name is excluded from the returned set.
///
/// Insertion rules: the new parameter is keyword-only when the schema has
/// a var-positional slot (a plain positional after it would be illegal),
/// positional-or-keyword otherwise; it lands immediately before the
/// var-keyword slot when one exists, at the end of the list otherwise.
/// The result always satisfies the schema invariants.
pub fn inject(
    schema: &SignatureSchema,
    controls: &[InjectedControlParam],
) -> (SignatureSchema, IndexSet<String>) {
    let mut params: Vec<ParameterSpec> = schema.params().to_vec();
    let mut injected_names: IndexSet<String> = IndexSet::new();

    for control in controls {
        if params.iter().any(|param| param.name == control.name) {
            warn!(
                "Control parameter `{}` collides with a declared parameter; keeping the declared one.",
                control.name
            );
            continue;
        }

        let kind = if params
            .iter()
            .any(|param| param.kind == ParamKind::VarPositional)
        {
            ParamKind::KeywordOnly
        } else {
            ParamKind::PositionalOrKeyword
        };

        let index = params
            .iter()
            .position(|param| param.kind == ParamKind::VarKeyword)
            .unwrap_or(params.len());

        params.insert(
            index,
            ParameterSpec {
                name: control.name.to_string(),
                kind,
                default: Some(control.default.clone()),
            },
        );
        injected_names.insert(control.name.to_string());
    }

    (SignatureSchema::from_validated(params), injected_names)
}
