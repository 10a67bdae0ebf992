//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/ktree/ktree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `KTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::traversal::Order;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config: {message}")]
    Config { message: String },
}

/// Output settings of the `ktree` binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Traversals printed for every tree, in this order
    pub orders: Vec<Order>,
    /// Placed between values of one traversal
    pub separator: String,
    /// Print the rendered tree after the traversals
    pub show_tree: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orders: Order::ALL.to_vec(),
            separator: ", ".to_string(),
            show_tree: true,
        }
    }
}

/// Get the XDG config directory for ktree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ktree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("ktree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// A missing global file is skipped, a missing `config_file` is an error.
    /// `KTREE_ORDERS` takes a comma separated list.
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let default_orders: Vec<String> = defaults
            .orders
            .iter()
            .map(|o| order_key(*o).to_string())
            .collect();

        let mut builder = Config::builder()
            .set_default("orders", default_orders)
            .map_err(config_err)?
            .set_default("separator", defaults.separator)
            .map_err(config_err)?
            .set_default("show_tree", defaults.show_tree)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            debug!(path = %global_path.display(), "global config");
            builder = builder.add_source(
                File::from(global_path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("KTREE")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("orders"),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# ktree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/ktree/ktree.toml
#   File:   ktree --config <file>
#   Env:    KTREE_* environment variables (KTREE_ORDERS=bfs,heap)

# Traversals to print: pre-order, post-order, in-order, bfs, dfs, heap
# orders = ["pre-order", "post-order", "in-order", "bfs", "dfs", "heap"]

# Separator between values
# separator = ", "

# Print the tree drawing after the traversals
# show_tree = true
"#
        .to_string()
    }
}

fn order_key(order: Order) -> &'static str {
    match order {
        Order::PreOrder => "pre-order",
        Order::PostOrder => "post-order",
        Order::InOrder => "in-order",
        Order::Bfs => "bfs",
        Order::Dfs => "dfs",
        Order::Heap => "heap",
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::Config {
        message: e.to_string(),
    }
}
