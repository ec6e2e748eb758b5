//! Containers, members and the registry they load from.
//!
//! A container is a loadable namespace exposing named members; a member
//! is the ultimate dispatch target: a declared parameter schema plus a
//! handler over bound arguments. The registry is built once at startup
//! and read-only afterwards; loading goes through [`ContainerSource`] so
//! the dispatcher never depends on a concrete registry.

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::distance;
use crate::error::{Error, Result};
use crate::signature::{BoundArgs, SignatureSchema};

/// Number of ranked suggestions attached to a failed member lookup.
const SUGGESTION_COUNT: usize = 3;

pub type Handler = Box<dyn Fn(&BoundArgs) -> Result<Value> + Send + Sync>;

pub struct Member {
    name: String,
    schema: SignatureSchema,
    handler: Handler,
}

impl std::fmt::Debug for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl Member {
    pub fn new(
        name: &str,
        schema: SignatureSchema,
        handler: impl Fn(&BoundArgs) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.to_string(),
            schema,
            handler: Box::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &SignatureSchema {
        &self.schema
    }

    pub fn call(&self, arguments: &BoundArgs) -> Result<Value> {
        (self.handler)(arguments)
    }
}

pub struct Container {
    id: String,
    members: IndexMap<String, Member>,
}

impl Container {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            members: IndexMap::new(),
        }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.insert(member.name().to_string(), member);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn member_names(&self) -> Vec<&str> {
        self.members.keys().map(String::as_str).collect()
    }

    /// Looks up `member_name`. On a miss, every member name is ranked
    /// against the query and the best matches travel with the error,
    /// formatted as `container:name`.
    pub fn resolve(&self, member_name: &str) -> Result<&Member> {
        if let Some(member) = self.members.get(member_name) {
            return Ok(member);
        }

        let names = self.member_names();
        let suggestions = distance::rank(member_name, &names)
            .into_iter()
            .take(SUGGESTION_COUNT)
            .map(|name| format!("{}:{}", self.id, name))
            .collect();

        Err(Error::MemberNotFound {
            container: self.id.clone(),
            member: member_name.to_string(),
            suggestions,
        })
    }
}

/// The external container-loading collaborator seen by the dispatcher.
pub trait ContainerSource {
    fn load(&self, container_id: &str) -> Result<&Container>;
}

#[derive(Default)]
pub struct ContainerRegistry {
    containers: IndexMap<String, Container>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, container: Container) {
        self.containers.insert(container.id().to_string(), container);
    }

    pub fn container_ids(&self) -> Vec<&str> {
        self.containers.keys().map(String::as_str).collect()
    }
}

impl ContainerSource for ContainerRegistry {
    fn load(&self, container_id: &str) -> Result<&Container> {
        self.containers
            .get(container_id)
            .ok_or_else(|| Error::ContainerNotFound(container_id.to_string()))
    }
}
