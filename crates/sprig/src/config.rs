//! Script host configuration.
//!
//! A [`HostConfig`] can be built in code or loaded from TOML:
//!
//! ```toml
//! libraries = ["math", "string", "table"]
//! instruction_limit = 1000000
//! timeout_ms = 250
//! ```
//!
//! Omitted keys take their defaults; unknown keys are rejected.

use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A Lua standard library that can be opened in a script host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LuaLibrary {
    /// Core functions (`print`, `pairs`, `tostring`, ...). Always opened.
    Base,
    /// `coroutine`.
    Coroutine,
    /// `debug`. Opening it requires an unsafe runtime.
    Debug,
    /// `io`.
    Io,
    /// `math`.
    Math,
    /// `os`.
    Os,
    /// `package` and `require`.
    Package,
    /// `string`.
    String,
    /// `table`.
    Table,
    /// `utf8`.
    Utf8,
}

impl LuaLibrary {
    /// Every library.
    pub const ALL: [Self; 10] = [
        Self::Base,
        Self::Coroutine,
        Self::Debug,
        Self::Io,
        Self::Math,
        Self::Os,
        Self::Package,
        Self::String,
        Self::Table,
        Self::Utf8,
    ];

    /// Libraries opened by [`HostConfig::default`].
    pub const DEFAULT: [Self; 6] = [
        Self::Base,
        Self::Debug,
        Self::Math,
        Self::Table,
        Self::String,
        Self::Utf8,
    ];

    /// Libraries with no access to the host system.
    pub const SAFE: [Self; 5] = [
        Self::Base,
        Self::Coroutine,
        Self::Math,
        Self::String,
        Self::Table,
    ];

    /// Lowercase library name, as used in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Coroutine => "coroutine",
            Self::Debug => "debug",
            Self::Io => "io",
            Self::Math => "math",
            Self::Os => "os",
            Self::Package => "package",
            Self::String => "string",
            Self::Table => "table",
            Self::Utf8 => "utf8",
        }
    }

    /// Resolve a library by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for LuaLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Limits and library selection for a [`ScriptHost`](crate::ScriptHost).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Libraries opened by [`ScriptHost::init_with_config`](crate::ScriptHost::init_with_config).
    pub libraries: Vec<LuaLibrary>,
    /// Maximum VM instructions per execution. Zero disables the budget.
    pub instruction_limit: u64,
    /// Instructions between budget checks.
    pub hook_interval: u32,
    /// Wall-clock limit per execution in milliseconds. Zero disables it.
    pub timeout_ms: u64,
    /// Memory allowance for the runtime in bytes. Zero means unlimited.
    pub memory_limit: usize,
    /// Chunk name reported in error messages.
    pub chunk_name: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            libraries: LuaLibrary::DEFAULT.to_vec(),
            instruction_limit: 100_000_000,
            hook_interval: 1000,
            timeout_ms: 5000,
            memory_limit: 0,
            chunk_name: "script".into(),
        }
    }
}

impl HostConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Render the config as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reject settings that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.hook_interval == 0 {
            return Err(Error::Config("hook_interval must be positive".into()));
        }
        if self.chunk_name.is_empty() {
            return Err(Error::Config("chunk_name must not be empty".into()));
        }
        Ok(())
    }
}
