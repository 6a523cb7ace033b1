//! ErrorTranslator - 呼び出し失敗をドメインエラーに分類
//!
//! Only failures raised at the direct call site are reclassified. A failure
//! that carries frames from inside the member is a bug in the command and
//! propagates unchanged.

use tracing::debug;

use crate::app::config::DispatchConfig;
use crate::domain::errors::ThorError;
use crate::domain::failure::{FailureKind, Frame, InvokeFailure};
use crate::domain::task::Task;
use crate::ports::Target;

pub struct ErrorTranslator<'a> {
    config: &'a DispatchConfig,
}

impl<'a> ErrorTranslator<'a> {
    pub fn new(config: &'a DispatchConfig) -> Self {
        Self { config }
    }

    pub fn translate(
        &self,
        task: &Task,
        target: &dyn Target,
        failure: InvokeFailure,
        caller: &[Frame],
    ) -> ThorError {
        if matches!(failure.kind(), FailureKind::Arity { .. }) {
            return self.translate_arity(task, target, failure, caller);
        }

        // The lookup that failed must be the task's own member on this very
        // target; anything else went missing inside the member body.
        let missing_at_call_site = matches!(
            failure.kind(),
            FailureKind::MemberMissing { member, receiver }
                if member == task.name() && *receiver == target.describe()
        );
        if missing_at_call_site {
            let namespace = target.meta().namespace().unwrap_or("default");
            debug!(task = task.name(), "member missing at call site");
            return ThorError::UndefinedTask(format!(
                "The {namespace} namespace doesn't have a '{}' task",
                task.name()
            ));
        }

        ThorError::Failed(failure)
    }

    fn translate_arity(
        &self,
        task: &Task,
        target: &dyn Target,
        failure: InvokeFailure,
        caller: &[Frame],
    ) -> ThorError {
        if !self.sans_backtrace(failure.backtrace(), caller).is_empty() {
            debug!(task = task.name(), "arity mismatch inside member body");
            return ThorError::Failed(failure);
        }

        debug!(task = task.name(), group = target.is_group(), "arity mismatch at call site");
        if target.is_group() {
            let message = format!(
                "'{}' was called incorrectly. Are you sure it has arity equals to 0?",
                task.name()
            );
            ThorError::Failed(failure.with_message(message))
        } else {
            let usage = task.formatted_usage_with(target.meta(), None, self.config);
            ThorError::Invocation(format!(
                "'{}' was called incorrectly. Call as '{usage}'",
                task.name()
            ))
        }
    }

    /// Frames left once the framework's own frames and the caller's frames
    /// are removed.
    pub fn sans_backtrace<'f>(&self, backtrace: &'f [Frame], caller: &[Frame]) -> Vec<&'f Frame> {
        backtrace
            .iter()
            .filter(|frame| !self.is_framework_frame(frame))
            .filter(|frame| !caller.contains(frame))
            .collect()
    }

    fn is_framework_frame(&self, frame: &Frame) -> bool {
        !self.config.framework_dir.is_empty() && frame.file.starts_with(&self.config.framework_dir)
    }
}
