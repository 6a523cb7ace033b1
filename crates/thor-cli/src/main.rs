use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::json;
use thor_core::{
    ArgumentDescriptor, Arity, CommandSet, DispatchConfig, InvokeFailure, OptionDescriptor, Task,
    Target, Visibility,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "thor", about = "Dispatch a task of the sample Greeter commands")]
struct Cli {
    /// Dispatch config (JSON). Defaults apply to missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render usage lines in this namespace instead of the container's.
    #[arg(long)]
    namespace: Option<String>,

    /// List the declared tasks and exit.
    #[arg(long)]
    list: bool,

    /// Print the task list as JSON.
    #[arg(long, requires = "list")]
    json: bool,

    /// Task name.
    task: Option<String>,

    /// Positional arguments passed to the task.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// One line of the task listing.
#[derive(Debug, Serialize)]
struct HelpLine<'a> {
    formatted_usage: String,
    #[serde(flatten)]
    task: &'a Task,
}

/// The sample command container: Greeter, in the `cli` namespace.
fn greeter() -> CommandSet {
    CommandSet::new("Greeter")
        .with_namespace("cli")
        .with_argument(ArgumentDescriptor::new("name").required().describe("who to greet"))
        .define("greet", Arity::Exact(1), |args| {
            Ok(json!(format!("Hello, {}!", args[0])))
        })
        .define("shout", Arity::AtLeast(1), |args| {
            Ok(json!(format!("HELLO, {}!", args.join(" ").to_uppercase())))
        })
        .define("version", Arity::Exact(0), |_| {
            Ok(json!(env!("CARGO_PKG_VERSION")))
        })
        .define("broken", Arity::Exact(0), |_| {
            // Looks up a helper that was never defined.
            Err(InvokeFailure::member_missing("salutation", "#<Greeter>").raised_here())
        })
        .define_with("secret", Arity::Exact(0), Visibility::Private, |_| {
            Ok(json!("you should not see this"))
        })
}

fn declared_tasks() -> Result<Vec<Task>> {
    Ok(vec![
        Task::new("greet", "Say hello to NAME", "greet")?,
        Task::new("shout", "Say hello, loudly", "shout")?
            .with_option("volume", OptionDescriptor::new("volume").required()),
        Task::new("version", "Print the version", "version")?,
        Task::new("broken", "Fails inside its own body", "broken")?,
        Task::new("secret", "Private member, never dispatched", "secret")?,
    ])
}

fn load_config(path: Option<&PathBuf>) -> Result<DispatchConfig> {
    let Some(path) = path else {
        return Ok(DispatchConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

fn list(tasks: &[Task], target: &CommandSet, cli: &Cli, config: &DispatchConfig) -> Result<()> {
    let lines: Vec<HelpLine<'_>> = tasks
        .iter()
        .filter(|t| target.is_public(t.name()))
        .map(|task| HelpLine {
            formatted_usage: task.formatted_usage_with(
                target.meta(),
                cli.namespace.as_deref(),
                config,
            ),
            task,
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    let width = lines.iter().map(|l| l.formatted_usage.len()).max().unwrap_or(0);
    for line in &lines {
        println!("thor {:width$}  # {}", line.formatted_usage, line.task.description());
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("THOR_LOG").unwrap_or_else(|_| "thor_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let tasks = declared_tasks()?;
    let mut target = greeter();

    if cli.list {
        list(&tasks, &target, &cli, &config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(name) = cli.task.as_deref() else {
        list(&tasks, &target, &cli, &config)?;
        return Ok(ExitCode::SUCCESS);
    };

    // Names nothing declared fall back to a dynamic task.
    let task = match tasks.iter().find(|t| t.name() == name) {
        Some(task) => task.clone(),
        None => Task::dynamic(name)?,
    };
    info!(task = task.name(), dynamic = task.is_dynamic(), "resolved task");

    match task.run_with(&mut target, &cli.args, &config) {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
