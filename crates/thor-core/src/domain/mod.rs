//! Domain model (tasks, descriptors, failures, errors).

pub mod descriptor;
pub mod errors;
pub mod failure;
pub mod namespace;
pub mod task;

pub use self::descriptor::{ArgumentDescriptor, Descriptor, OptionDescriptor};
pub use self::errors::ThorError;
pub use self::failure::{Arity, FailureKind, Frame, InvokeFailure};
pub use self::task::{Task, TaskKind};
