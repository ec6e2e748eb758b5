//! Resolving a function path and carrying out the invocation.

use funcrun_core::config::PROGRAM_NAME;
use funcrun_core::error::Result;
use funcrun_core::modes::ResolvedModes;
use funcrun_core::path;
use funcrun_core::registry::{ContainerRegistry, ContainerSource};
use funcrun_core::template::{mock_arguments, render, RenderOptions, TemplateStyle};
use funcrun_core::wrapper::InvocationWrapper;
use serde_yaml::Value;

use crate::binder::FlagBinder;
use crate::hook::TtyFailureHook;

/// What a dispatch produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The member ran and returned this value.
    Invoked(Value),
    /// Print-only mode: the rendered template, no call performed.
    TemplateOnly(String),
}

/// Resolves `container:member[:modes]` against the registry and invokes
/// the member with the forwarded arguments, honoring the path's modes.
pub fn dispatch(
    registry: &ContainerRegistry,
    func_path: &str,
    forwarded: &[String],
) -> Result<Outcome> {
    let resolved = path::parse(func_path)?;
    let container = registry.load(&resolved.container_id)?;
    let member = container.resolve(&resolved.member_name)?;
    let modes = ResolvedModes::parse(resolved.modes_text.as_deref().unwrap_or_default())?;
    let label = resolved.label();

    if modes.print_only_template {
        // Render from the member's declared schema; nothing is bound and
        // nothing runs.
        let style = TemplateStyle::parse(&modes.template_format)?;
        let arguments = mock_arguments(member.schema());
        let text = render(
            PROGRAM_NAME,
            &label,
            &arguments,
            style,
            &RenderOptions::default(),
        );
        return Ok(Outcome::TemplateOnly(text));
    }

    let wrapper = InvocationWrapper::new(member, modes, PROGRAM_NAME, &label, &TtyFailureHook);
    let value = wrapper.invoke(&FlagBinder, forwarded)?;
    Ok(Outcome::Invoked(value))
}
