//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;

use crate::config::Settings;
use crate::traversal::Order;

/// Build arity-bounded trees and print their traversals
#[derive(Parser, Debug)]
#[command(name = "ktree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (TOML), layered over the global one
    #[arg(short, long, global = true, env = "KTREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the traversals of a built-in sample tree
    Demo {
        #[arg(value_enum)]
        sample: Sample,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Build a tree of numbers from parent:child edges
    Build {
        /// Maximum children per node
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=8))]
        arity: u8,
        /// Root value
        #[arg(short, long, allow_negative_numbers = true)]
        root: f64,
        /// Edge as PARENT:CHILD, attached in the given order
        #[arg(short, long = "edge", value_parser = parse_edge, allow_hyphen_values = true)]
        edges: Vec<(f64, f64)>,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sample {
    /// Binary tree of 1.1 .. 1.6
    Binary,
    /// 3-ary tree of 1 .. 9
    Ternary,
    /// Binary tree of complex numbers 1+1i .. 7+7i
    Complex,
}

/// Output options shared by the tree commands; unset options fall back to
/// the loaded settings.
#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    /// Traversal to print (repeatable)
    #[arg(short, long = "order", value_enum)]
    pub orders: Vec<Order>,
    /// Separator between values
    #[arg(short, long)]
    pub separator: Option<String>,
    /// Do not draw the tree
    #[arg(long)]
    pub no_tree: bool,
}

impl ViewArgs {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if !self.orders.is_empty() {
            settings.orders = self.orders.clone();
        }
        if let Some(separator) = &self.separator {
            settings.separator = separator.clone();
        }
        if self.no_tree {
            settings.show_tree = false;
        }
        settings
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show the global config file location
    Path,
}

/// Parses `PARENT:CHILD`.
pub fn parse_edge(s: &str) -> Result<(f64, f64), String> {
    let (parent, child) = s
        .split_once(':')
        .ok_or_else(|| format!("expected PARENT:CHILD, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid number '{v}': {e}"))
    };
    Ok((parse(parent)?, parse(child)?))
}
