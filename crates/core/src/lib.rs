//! Funcrun Core Library
//!
//! This crate provides the core functionality for funcrun, a dynamic
//! command dispatcher that turns a registered callable, named by a
//! `container:member[:modes]` path, into a runnable command-line command.
//!
//! # Key Features
//!
//! - **Path Resolution**: Parse `container:member[:modes]` paths, with
//!   filesystem-style normalization and ranked did-you-mean suggestions
//!   when a member lookup fails
//! - **Signature Schemas**: Immutable parameter schemas for dispatch
//!   targets, with variadic-slot-aware control-parameter injection
//! - **Invocation Wrapping**: Template printing, failure-hook takeover
//!   and scoped profiling layered around a call without touching the
//!   target's own parameters
//! - **Template Rendering**: Compact, multiline and heredoc-doc
//!   reconstructions of an invocation command line
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Parsing a function path and its modes:
//!
//! ```
//! use funcrun_core::modes::ResolvedModes;
//! use funcrun_core::path;
//!
//! let resolved = path::parse("text:repeat:pot,tf=multiline")?;
//! assert_eq!(resolved.container_id, "text");
//!
//! let modes = ResolvedModes::parse(resolved.modes_text.as_deref().unwrap_or(""))?;
//! assert!(modes.print_only_template);
//! # Ok::<(), funcrun_core::error::Error>(())
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod history;
pub mod hooks;
pub mod inject;
pub mod modes;
pub mod path;
pub mod registry;
pub mod signature;
pub mod template;
pub mod wrapper;
