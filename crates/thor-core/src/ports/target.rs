//! Target port - タスクを実行するホストオブジェクトの抽象化
//!
//! A target is whatever owns the members tasks are bound to. Dispatch only
//! goes through this interface, never through runtime reflection.

use serde_json::Value;

use crate::domain::descriptor::ArgumentDescriptor;
use crate::domain::failure::InvokeFailure;

/// Visibility of a member on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// Metadata of the command container that owns a task.
pub trait CommandMeta {
    /// Namespace of the container; `None` is the root namespace.
    fn namespace(&self) -> Option<&str>;

    /// Positional arguments in declaration order.
    fn arguments(&self) -> &[ArgumentDescriptor];
}

/// Capability interface a host object implements so tasks can run on it.
pub trait Target {
    /// Declared type name, used in error messages.
    fn type_name(&self) -> &str;

    /// String form of the instance. Must match the `receiver` the target
    /// reports in its own member-missing failures.
    fn describe(&self) -> String {
        format!("#<{}>", self.type_name())
    }

    /// Metadata of the container this target was declared in.
    fn meta(&self) -> &dyn CommandMeta;

    /// Group-style containers run all their members with no arguments.
    fn is_group(&self) -> bool {
        false
    }

    /// `None` when no member with this name exists at any visibility.
    fn visibility(&self, name: &str) -> Option<Visibility>;

    fn has_member(&self, name: &str) -> bool {
        self.visibility(name).is_some()
    }

    fn is_public(&self, name: &str) -> bool {
        self.visibility(name) == Some(Visibility::Public)
    }

    /// Calls the member with `args` as positional parameters. Visibility is
    /// not enforced here.
    ///
    /// A member that does not exist must be reported as
    /// [`FailureKind::MemberMissing`](crate::domain::FailureKind) with an
    /// empty backtrace, and a call with the wrong argument count as
    /// [`FailureKind::Arity`](crate::domain::FailureKind), also with an
    /// empty backtrace.
    fn invoke(&mut self, name: &str, args: &[String]) -> Result<Value, InvokeFailure>;
}
