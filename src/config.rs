//! Configuration for shape-kit.
//!
//! This module provides runtime configuration for the JSON codec.
//! Use [`ConfigBuilder`] at application startup to change how values are written.

use std::sync::OnceLock;

/// Global configuration, initialized via [`ConfigBuilder::init`].
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Runtime configuration for the codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Emit indented, multi-line JSON instead of the compact canonical form.
    pub pretty: bool,
    /// Drop `null` object members before writing.
    pub strip_nulls: bool,
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pretty: Option<bool>,
    strip_nulls: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable pretty printing.
    ///
    /// Default: `false`
    ///
    /// # Example
    ///
    /// ```
    /// use shape_kit::config::ConfigBuilder;
    ///
    /// ConfigBuilder::new()
    ///     .pretty(true)
    ///     .init();
    /// ```
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }

    /// Enable or disable `null` stripping.
    ///
    /// Default: `false`
    pub fn strip_nulls(mut self, strip: bool) -> Self {
        self.strip_nulls = Some(strip);
        self
    }

    /// Build the configuration without installing it.
    pub fn build(self) -> Config {
        let default = Config::default();
        Config {
            pretty: self.pretty.unwrap_or(default.pretty),
            strip_nulls: self.strip_nulls.unwrap_or(default.strip_nulls),
        }
    }

    /// Build and initialize the global configuration.
    ///
    /// This can only be called once. Subsequent calls are ignored.
    /// Returns `true` if configuration was set, `false` if already initialized.
    pub fn init(self) -> bool {
        CONFIG.set(self.build()).is_ok()
    }
}

/// Get the current configuration, or default if not initialized.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
