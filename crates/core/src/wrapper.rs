//! Wrapping a member with injected control behavior.
//!
//! The wrapper owns one invocation: it binds forwarded arguments against
//! the member's augmented schema, separates injected control values from
//! pass-through values, performs the control side effects in a fixed
//! order (template printing, failure-hook takeover, profiler start) and
//! finally calls the member with exactly the arguments it declared. The
//! member's own result or error propagates unchanged, except that a
//! debugger-quit error bypasses the failure hook.

use indexmap::IndexSet;
use log::info;
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::hooks::{FailureHook, ProfileGuard};
use crate::inject::{inject, InjectedControlParam};
use crate::modes::{truthy, ResolvedModes};
use crate::registry::Member;
use crate::signature::{BoundArgs, SignatureSchema};
use crate::template::{canonical_text, render, RenderOptions, TemplateStyle};

/// Names of the control parameters injected onto a target schema.
pub const PRINT_TEMPLATE: &str = "print-template";
pub const TEMPLATE_FORMAT: &str = "template-format";
pub const HOOK_DEBUGGER: &str = "hook-debugger";
pub const HOOK_PROFILER: &str = "hook-profiler";

/// Control parameters carrying the resolved modes through the binder.
/// Their defaults are the mode values the path selected, so forwarded
/// flags may override them per invocation.
pub fn control_params(modes: &ResolvedModes) -> Vec<InjectedControlParam> {
    vec![
        InjectedControlParam {
            name: PRINT_TEMPLATE,
            default: Value::Bool(modes.print_template),
        },
        InjectedControlParam {
            name: TEMPLATE_FORMAT,
            default: Value::String(modes.template_format.clone()),
        },
        InjectedControlParam {
            name: HOOK_DEBUGGER,
            default: Value::Bool(modes.hook_debugger),
        },
        InjectedControlParam {
            name: HOOK_PROFILER,
            default: Value::Bool(modes.hook_profiler),
        },
    ]
}

/// Generic binding of forwarded tokens against a schema. The concrete
/// binder lives with the CLI surface; the wrapper only sees this trait.
pub trait ArgumentBinder {
    fn bind(&self, schema: &SignatureSchema, forwarded: &[String]) -> Result<BoundArgs>;
}

pub struct InvocationWrapper<'a> {
    member: &'a Member,
    augmented: SignatureSchema,
    injected: IndexSet<String>,
    modes: ResolvedModes,
    program: String,
    label: String,
    hook: &'a dyn FailureHook,
    options: RenderOptions,
}

impl<'a> InvocationWrapper<'a> {
    pub fn new(
        member: &'a Member,
        modes: ResolvedModes,
        program: &str,
        label: &str,
        hook: &'a dyn FailureHook,
    ) -> Self {
        let controls = control_params(&modes);
        let (augmented, injected) = inject(member.schema(), &controls);

        Self {
            member,
            augmented,
            injected,
            modes,
            program: program.to_string(),
            label: label.to_string(),
            hook,
            options: RenderOptions::default(),
        }
    }

    pub fn augmented_schema(&self) -> &SignatureSchema {
        &self.augmented
    }

    pub fn injected_names(&self) -> &IndexSet<String> {
        &self.injected
    }

    pub fn invoke(&self, binder: &dyn ArgumentBinder, forwarded: &[String]) -> Result<Value> {
        let mut bound = binder.bind(&self.augmented, forwarded)?;

        // The snapshot feeds the template; control values stay out of it.
        let snapshot: BoundArgs = bound
            .iter()
            .filter(|(name, _)| !self.injected.contains(name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        let print_template = self.control_flag(&mut bound, PRINT_TEMPLATE, self.modes.print_template);
        let format_text =
            self.control_text(&mut bound, TEMPLATE_FORMAT, &self.modes.template_format);
        let hook_debugger = self.control_flag(&mut bound, HOOK_DEBUGGER, self.modes.hook_debugger);
        let hook_profiler = self.control_flag(&mut bound, HOOK_PROFILER, self.modes.hook_profiler);

        if print_template {
            let style = TemplateStyle::parse(&format_text)?;
            let text = render(&self.program, &self.label, &snapshot, style, &self.options);
            info!("Parameters:\n\n{text}\n");
        }

        let hook_installed = hook_debugger && self.hook.install();
        let _profile = hook_profiler.then(|| ProfileGuard::start(&self.label));

        let result = self.member.call(&bound);

        if let Err(error) = &result {
            if hook_installed && !matches!(error, Error::DebuggerQuit) {
                self.hook.report(error);
            }
        }

        result
    }

    /// Pops an injected boolean control out of the bound arguments. When
    /// injection was skipped (name collision), the declared parameter is
    /// left alone and the path-mode value applies.
    fn control_flag(&self, bound: &mut BoundArgs, name: &str, fallback: bool) -> bool {
        if !self.injected.contains(name) {
            return fallback;
        }
        match bound.shift_remove(name) {
            Some(Value::Bool(enabled)) => enabled,
            Some(Value::String(text)) => truthy(&text),
            Some(_) => true,
            None => fallback,
        }
    }

    fn control_text(&self, bound: &mut BoundArgs, name: &str, fallback: &str) -> String {
        if !self.injected.contains(name) {
            return fallback.to_string();
        }
        match bound.shift_remove(name) {
            Some(Value::String(text)) => text,
            Some(other) => canonical_text(&other),
            None => fallback.to_string(),
        }
    }
}
