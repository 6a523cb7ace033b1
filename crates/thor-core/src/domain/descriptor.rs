//! Option / argument descriptors.
//!
//! Parsing lives elsewhere. The dispatcher only reads `usage` and `required`
//! from these when it renders a usage line.

use serde::{Deserialize, Serialize};

/// What the usage formatter needs to know about an option or an argument.
pub trait Descriptor {
    fn usage(&self) -> &str;
    fn is_required(&self) -> bool;
}

/// A `--switch` style option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub name: String,
    pub usage: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionDescriptor {
    /// Option whose usage is `--<name>=<BANNER>`, the banner being the
    /// upper-cased name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let banner = name.to_uppercase().replace('-', "_");
        Self::with_banner(name, banner)
    }

    pub fn with_banner(name: impl Into<String>, banner: impl AsRef<str>) -> Self {
        let name = name.into();
        let usage = format!("--{name}={}", banner.as_ref());
        Self {
            name,
            usage,
            required: false,
            description: None,
        }
    }

    /// A boolean flag, usage `--<name>`.
    pub fn flag(name: impl Into<String>) -> Self {
        let name = name.into();
        let usage = format!("--{name}");
        Self {
            name,
            usage,
            required: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Descriptor for OptionDescriptor {
    fn usage(&self) -> &str {
        &self.usage
    }

    fn is_required(&self) -> bool {
        self.required
    }
}

/// A positional argument declared on a command container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub usage: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ArgumentDescriptor {
    /// Optional argument, usage `[NAME]`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let usage = format!("[{}]", name.to_uppercase());
        Self {
            name,
            usage,
            required: false,
            description: None,
        }
    }

    /// Required argument, usage `NAME`.
    pub fn required(mut self) -> Self {
        self.required = true;
        self.usage = self.name.to_uppercase();
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Descriptor for ArgumentDescriptor {
    fn usage(&self) -> &str {
        &self.usage
    }

    fn is_required(&self) -> bool {
        self.required
    }
}
