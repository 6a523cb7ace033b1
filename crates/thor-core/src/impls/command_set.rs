//! CommandSet - クロージャで組み立てるインメモリの Target
//!
//! Each member is a closure plus the arity it accepts and its visibility.
//! The set reports missing members and arity mismatches itself, at the call
//! site, the same way a hand-written target is expected to.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::descriptor::ArgumentDescriptor;
use crate::domain::failure::{Arity, InvokeFailure};
use crate::ports::{CommandMeta, Target, Visibility};

pub type MemberFn = Box<dyn Fn(&[String]) -> Result<Value, InvokeFailure> + Send + Sync>;

struct Member {
    arity: Arity,
    visibility: Visibility,
    call: MemberFn,
}

/// In-memory command container.
///
/// # 使用例
/// ```ignore
/// let mut greeter = CommandSet::new("Greeter")
///     .with_namespace("cli")
///     .with_argument(ArgumentDescriptor::new("name").required())
///     .define("greet", Arity::Exact(1), |args| Ok(json!(format!("Hello, {}!", args[0]))));
/// ```
pub struct CommandSet {
    type_name: String,
    namespace: Option<String>,
    arguments: Vec<ArgumentDescriptor>,
    group: bool,
    members: HashMap<String, Member>,
}

impl CommandSet {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            namespace: None,
            arguments: Vec::new(),
            group: false,
            members: HashMap::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_argument(mut self, argument: ArgumentDescriptor) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Marks the set as a group: every member is run with no arguments.
    pub fn as_group(mut self) -> Self {
        self.group = true;
        self
    }

    pub fn define<F>(self, name: impl Into<String>, arity: Arity, call: F) -> Self
    where
        F: Fn(&[String]) -> Result<Value, InvokeFailure> + Send + Sync + 'static,
    {
        self.define_with(name, arity, Visibility::Public, call)
    }

    pub fn define_with<F>(
        mut self,
        name: impl Into<String>,
        arity: Arity,
        visibility: Visibility,
        call: F,
    ) -> Self
    where
        F: Fn(&[String]) -> Result<Value, InvokeFailure> + Send + Sync + 'static,
    {
        self.members.insert(
            name.into(),
            Member {
                arity,
                visibility,
                call: Box::new(call),
            },
        );
        self
    }

    /// Public member names, sorted.
    pub fn public_members(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .members
            .iter()
            .filter(|(_, m)| m.visibility == Visibility::Public)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

impl CommandMeta for CommandSet {
    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.arguments
    }
}

impl Target for CommandSet {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn meta(&self) -> &dyn CommandMeta {
        self
    }

    fn is_group(&self) -> bool {
        self.group
    }

    fn visibility(&self, name: &str) -> Option<Visibility> {
        self.members.get(name).map(|m| m.visibility)
    }

    fn invoke(&mut self, name: &str, args: &[String]) -> Result<Value, InvokeFailure> {
        let Some(member) = self.members.get(name) else {
            return Err(InvokeFailure::member_missing(name, self.describe()));
        };
        if !member.arity.accepts(args.len()) {
            return Err(InvokeFailure::arity(member.arity, args.len()));
        }
        (member.call)(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::failure::FailureKind;
    use serde_json::json;

    fn greeter() -> CommandSet {
        CommandSet::new("Greeter")
            .with_namespace("cli")
            .define("greet", Arity::Exact(1), |args| {
                Ok(json!(format!("Hello, {}!", args[0])))
            })
            .define_with("secret", Arity::Exact(0), Visibility::Private, |_| Ok(json!(42)))
    }

    #[test]
    fn invokes_member_with_args() {
        let mut set = greeter();
        let v = set.invoke("greet", &["Ann".to_string()]).unwrap();
        assert_eq!(v, json!("Hello, Ann!"));
    }

    #[test]
    fn invoke_ignores_visibility() {
        let mut set = greeter();
        assert_eq!(set.invoke("secret", &[]).unwrap(), json!(42));
    }

    #[test]
    fn missing_member_names_receiver() {
        let mut set = greeter();
        let failure = set.invoke("nope", &[]).unwrap_err();
        assert_eq!(
            failure.kind(),
            &FailureKind::MemberMissing {
                member: "nope".to_string(),
                receiver: "#<Greeter>".to_string(),
            }
        );
        assert!(failure.backtrace().is_empty());
    }

    #[test]
    fn wrong_arity_is_reported_at_call_site() {
        let mut set = greeter();
        let failure = set.invoke("greet", &[]).unwrap_err();
        assert_eq!(
            failure.kind(),
            &FailureKind::Arity {
                expected: Arity::Exact(1),
                given: 0,
            }
        );
        assert!(failure.backtrace().is_empty());
    }

    #[test]
    fn visibility_and_listing() {
        let set = greeter();
        assert_eq!(set.visibility("secret"), Some(Visibility::Private));
        assert!(set.has_member("secret"));
        assert!(!set.is_public("secret"));
        assert!(set.is_public("greet"));
        assert_eq!(set.public_members(), vec!["greet"]);
    }
}
