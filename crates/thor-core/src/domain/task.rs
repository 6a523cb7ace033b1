//! Task - コマンドとして呼び出せる名前付きメンバー
//!
//! A task binds a name to a member of some [`Target`] and carries the
//! metadata help output needs (description, usage template, options).

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use super::descriptor::{Descriptor, OptionDescriptor};
use super::errors::ThorError;
use super::failure::Frame;
use crate::app::config::DispatchConfig;
use crate::app::{dispatch, usage};
use crate::ports::{CommandMeta, Target};

/// How a task came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Declared when the command container was registered.
    Static,
    /// Synthesized for a name nothing declared. Running it checks first that
    /// the name really resolves to nothing on the target.
    Dynamic,
}

/// A named, invocable command.
///
/// Immutable once built. Use [`Task::with_options`] / [`Task::with_option`]
/// to derive a variant with different options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    name: String,
    description: String,
    usage: String,
    options: HashMap<String, OptionDescriptor>,
    kind: TaskKind,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
    ) -> Result<Self, ThorError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ThorError::Dispatch("task name must not be empty".to_string()));
        }
        Ok(Self {
            name,
            description: description.into(),
            usage: usage.into(),
            options: HashMap::new(),
            kind: TaskKind::Static,
        })
    }

    /// Fallback task for a name that no declared task matched.
    pub fn dynamic(name: impl Into<String>) -> Result<Self, ThorError> {
        let name = name.into();
        let mut task = Self::new(name.clone(), "A dynamically-generated task", name)?;
        task.kind = TaskKind::Dynamic;
        Ok(task)
    }

    /// Copy of this task whose options are replaced by `options`.
    pub fn with_options(&self, options: HashMap<String, OptionDescriptor>) -> Self {
        Self {
            options,
            ..self.clone()
        }
    }

    /// Copy of this task with one option added or replaced.
    pub fn with_option(&self, key: impl Into<String>, option: OptionDescriptor) -> Self {
        let mut options = self.options.clone();
        options.insert(key.into(), option);
        self.with_options(options)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Raw usage template.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn options(&self) -> &HashMap<String, OptionDescriptor> {
        &self.options
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == TaskKind::Dynamic
    }

    /// Usages of the required options, sorted and space-joined.
    pub fn required_options(&self) -> String {
        let mut usages: Vec<&str> = self
            .options
            .values()
            .filter(|o| o.is_required())
            .map(|o| o.usage())
            .collect();
        usages.sort_unstable();
        usages.join(" ")
    }

    /// Invokes the task's member on `target` with `args`.
    #[track_caller]
    pub fn run(&self, target: &mut dyn Target, args: &[String]) -> Result<Value, ThorError> {
        self.run_with(target, args, &DispatchConfig::default())
    }

    #[track_caller]
    pub fn run_with(
        &self,
        target: &mut dyn Target,
        args: &[String],
        config: &DispatchConfig,
    ) -> Result<Value, ThorError> {
        let caller = vec![Frame::caller()];
        dispatch::run(self, target, args, config, &caller)
    }

    /// Usage line in the container's own namespace.
    pub fn formatted_usage(&self, meta: &dyn CommandMeta) -> String {
        self.formatted_usage_in(meta, None)
    }

    /// Usage line; `namespace` overrides the container's namespace.
    pub fn formatted_usage_in(&self, meta: &dyn CommandMeta, namespace: Option<&str>) -> String {
        usage::formatted_usage(self, meta, namespace, &DispatchConfig::default())
    }

    pub fn formatted_usage_with(
        &self,
        meta: &dyn CommandMeta,
        namespace: Option<&str>,
        config: &DispatchConfig,
    ) -> String {
        usage::formatted_usage(self, meta, namespace, config)
    }
}
