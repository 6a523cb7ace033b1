//! Task dispatch: visibility check, invocation, failure translation.

use serde_json::Value;
use tracing::{debug, warn};

use crate::app::config::DispatchConfig;
use crate::app::translate::ErrorTranslator;
use crate::domain::errors::ThorError;
use crate::domain::failure::Frame;
use crate::domain::task::{Task, TaskKind};
use crate::ports::{Target, Visibility};

/// Runs `task` on `target`. `caller` is the backtrace of whoever asked for
/// the dispatch; frames shared with it do not count as the member's own.
pub fn run(
    task: &Task,
    target: &mut dyn Target,
    args: &[String],
    config: &DispatchConfig,
    caller: &[Frame],
) -> Result<Value, ThorError> {
    let name = task.name();
    debug!(task = name, target = target.type_name(), kind = ?task.kind(), "dispatching task");

    if task.kind() == TaskKind::Dynamic && target.has_member(name) {
        warn!(task = name, target = target.type_name(), "dynamic task shadows an existing member");
        return Err(ThorError::Dispatch(format!(
            "could not find Thor class or task '{name}'"
        )));
    }

    if matches!(
        target.visibility(name),
        Some(Visibility::Private | Visibility::Protected)
    ) {
        return Err(ThorError::UndefinedTask(format!(
            "the '{name}' task of {} is private",
            target.type_name()
        )));
    }

    match target.invoke(name, args) {
        Ok(value) => Ok(value),
        Err(failure) => {
            debug!(task = name, error = %failure, "invocation failed");
            Err(ErrorTranslator::new(config).translate(task, &*target, failure, caller))
        }
    }
}
