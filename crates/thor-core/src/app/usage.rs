//! Usage formatter.
//!
//! Shape: `<ns:>name <required args> <required options>`, one space between
//! segments, trimmed.

use crate::app::config::DispatchConfig;
use crate::domain::descriptor::Descriptor;
use crate::domain::namespace::render_prefix;
use crate::domain::task::Task;
use crate::ports::CommandMeta;

pub fn formatted_usage(
    task: &Task,
    meta: &dyn CommandMeta,
    namespace: Option<&str>,
    config: &DispatchConfig,
) -> String {
    let namespace = namespace.or_else(|| meta.namespace());
    let mut formatted = render_prefix(namespace, &config.reserved_prefixes);

    if meta.arguments().is_empty() {
        formatted.push_str(task.usage());
    } else {
        formatted.push_str(&inject_arguments(
            task.usage(),
            task.name(),
            &required_arguments(meta),
        ));
    }

    formatted.push(' ');
    formatted.push_str(&task.required_options());

    formatted.trim().to_string()
}

/// Usages of the container's required arguments, in declaration order.
pub fn required_arguments(meta: &dyn CommandMeta) -> String {
    meta.arguments()
        .iter()
        .filter(|a| a.is_required())
        .map(|a| a.usage())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Puts `arguments` right after a leading `name`. Templates that do not
/// start with `name` are returned as they are.
fn inject_arguments(template: &str, name: &str, arguments: &str) -> String {
    match template.strip_prefix(name) {
        Some(rest) if !arguments.is_empty() => format!("{name} {arguments}{rest}"),
        _ => template.to_string(),
    }
}
