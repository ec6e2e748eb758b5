//! End-to-end flow through the core: path parsing, container loading,
//! member resolution, mode parsing, schema augmentation and invocation.

use funcrun_core::error::{Error, Result};
use funcrun_core::modes::ResolvedModes;
use funcrun_core::path;
use funcrun_core::registry::{Container, ContainerRegistry, ContainerSource, Member};
use funcrun_core::signature::{BoundArgs, ParamKind, ParameterSpec, SignatureSchema};
use funcrun_core::template::canonical_text;
use funcrun_core::wrapper::{ArgumentBinder, InvocationWrapper};
use funcrun_core::hooks::NullFailureHook;
use serde_yaml::Value;

/// Test binder: `name=value` pairs, then declared defaults.
struct PairBinder;

impl ArgumentBinder for PairBinder {
    fn bind(&self, schema: &SignatureSchema, forwarded: &[String]) -> Result<BoundArgs> {
        let mut bound = BoundArgs::new();
        for token in forwarded {
            let (name, value) = token
                .split_once('=')
                .ok_or_else(|| Error::ArgumentFormat(token.clone()))?;
            bound.insert(name.to_string(), Value::String(value.to_string()));
        }
        for param in schema.params() {
            if !bound.contains_key(&param.name) {
                if let Some(default) = &param.default {
                    bound.insert(param.name.clone(), default.clone());
                }
            }
        }
        Ok(bound)
    }
}

fn greeting_schema() -> SignatureSchema {
    SignatureSchema::new(vec![
        ParameterSpec::required("name", ParamKind::PositionalOrKeyword),
        ParameterSpec::with_default(
            "greeting",
            ParamKind::PositionalOrKeyword,
            Value::String("hello".to_string()),
        ),
    ])
    .unwrap()
}

fn test_registry() -> ContainerRegistry {
    let mut registry = ContainerRegistry::new();
    registry.register(
        Container::new("demo").with_member(Member::new("greet", greeting_schema(), |args| {
            let name = args.get("name").map(canonical_text).unwrap_or_default();
            let greeting = args.get("greeting").map(canonical_text).unwrap_or_default();
            Ok(Value::String(format!("{greeting}, {name}")))
        })),
    );
    registry
}

#[test]
fn test_full_dispatch_flow() {
    let registry = test_registry();

    let resolved = path::parse("demo:greet:pt").unwrap();
    let container = registry.load(&resolved.container_id).unwrap();
    let member = container.resolve(&resolved.member_name).unwrap();
    let modes = ResolvedModes::parse(resolved.modes_text.as_deref().unwrap_or("")).unwrap();
    assert!(modes.print_template);

    let wrapper = InvocationWrapper::new(member, modes, "fr", &resolved.label(), &NullFailureHook);
    let value = wrapper
        .invoke(&PairBinder, &["name=world".to_string()])
        .unwrap();

    assert_eq!(value, Value::String("hello, world".to_string()));
}

#[test]
fn test_augmented_schema_carries_control_parameters() {
    let registry = test_registry();
    let container = registry.load("demo").unwrap();
    let member = container.resolve("greet").unwrap();

    let wrapper = InvocationWrapper::new(
        member,
        ResolvedModes::default(),
        "fr",
        "demo:greet",
        &NullFailureHook,
    );

    let augmented = wrapper.augmented_schema();
    assert!(augmented.contains("print-template"));
    assert!(augmented.contains("template-format"));
    assert!(augmented.contains("hook-debugger"));
    assert!(augmented.contains("hook-profiler"));
    // The member's own schema stays untouched.
    assert_eq!(member.schema().len(), 2);
    assert_eq!(wrapper.injected_names().len(), 4);
}

#[test]
fn test_member_not_found_carries_ranked_suggestions() {
    let registry = test_registry();
    let container = registry.load("demo").unwrap();

    let error = container.resolve("gret").unwrap_err();
    let Error::MemberNotFound { suggestions, .. } = error else {
        panic!("expected MemberNotFound");
    };
    assert_eq!(suggestions[0], "demo:greet");
}

#[test]
fn test_container_load_failure_is_terminal_error() {
    let registry = test_registry();
    assert!(matches!(
        registry.load("nope"),
        Err(Error::ContainerNotFound(id)) if id == "nope"
    ));
}

#[test]
fn test_filesystem_style_path_resolves_registered_container() {
    let mut registry = ContainerRegistry::new();
    registry.register(
        Container::new("tools.demo").with_member(Member::new(
            "noop",
            SignatureSchema::empty(),
            |_| Ok(Value::Null),
        )),
    );

    let resolved = path::parse("tools/demo.rs:noop").unwrap();
    assert!(registry.load(&resolved.container_id).is_ok());
}
