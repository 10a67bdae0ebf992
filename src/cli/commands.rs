use std::fmt::Display;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, Sample, ViewArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::samples;
use crate::traversal::Order;
use crate::tree::Tree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo { sample, view }) => _demo(*sample, &settings(cli, view)?),
        Some(Commands::Build {
            arity,
            root,
            edges,
            view,
        }) => _build(*arity, *root, edges, &settings(cli, view)?),
        Some(Commands::Config { command }) => _config(cli, command),
        None => Ok(()),
    }
}

fn settings(cli: &Cli, view: &ViewArgs) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    Ok(view.apply(settings))
}

#[instrument(level = "debug", skip(settings))]
fn _demo(sample: Sample, settings: &Settings) -> CliResult<()> {
    match sample {
        Sample::Binary => show("binary tree of f64", &samples::binary_f64()?, settings),
        Sample::Ternary => show("3-ary tree of i32", &samples::ternary_i32()?, settings),
        Sample::Complex => show("binary tree of complex numbers", &samples::complex_binary()?, settings),
    }
    Ok(())
}

#[instrument(level = "debug", skip(edges, settings))]
fn _build(arity: u8, root: f64, edges: &[(f64, f64)], settings: &Settings) -> CliResult<()> {
    match arity {
        1 => show("1-ary tree", &build_tree::<1>(root, edges)?, settings),
        2 => show("2-ary tree", &build_tree::<2>(root, edges)?, settings),
        3 => show("3-ary tree", &build_tree::<3>(root, edges)?, settings),
        4 => show("4-ary tree", &build_tree::<4>(root, edges)?, settings),
        5 => show("5-ary tree", &build_tree::<5>(root, edges)?, settings),
        6 => show("6-ary tree", &build_tree::<6>(root, edges)?, settings),
        7 => show("7-ary tree", &build_tree::<7>(root, edges)?, settings),
        8 => show("8-ary tree", &build_tree::<8>(root, edges)?, settings),
        _ => {
            return Err(CliError::InvalidArgs(format!(
                "arity must be between 1 and 8, got {arity}"
            )))
        }
    }
    Ok(())
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::error("no home directory, global config disabled"),
        },
    }
    Ok(())
}

/// Builds a tree from `root` and `(parent, child)` edges, attached in order.
#[instrument(level = "debug", skip(edges), fields(edges = edges.len()))]
pub fn build_tree<const K: usize>(root: f64, edges: &[(f64, f64)]) -> CliResult<Tree<f64, K>> {
    let mut tree = Tree::new();
    tree.add_root(root)?;
    for &(parent, child) in edges {
        tree.add_sub_node(&parent, child)
            .map_err(|source| CliError::Edge {
                parent,
                child,
                source,
            })?;
    }
    debug!(nodes = tree.len(), depth = tree.depth(), "tree built");
    Ok(tree)
}

/// One `(order, joined values)` line per configured order.
pub fn traversal_lines<T, const K: usize>(tree: &Tree<T, K>, settings: &Settings) -> Vec<(Order, String)>
where
    T: Display + PartialOrd,
{
    settings
        .orders
        .iter()
        .map(|&order| (order, tree.traverse(order).values().join(&settings.separator)))
        .collect()
}

fn show<T, const K: usize>(title: &str, tree: &Tree<T, K>, settings: &Settings)
where
    T: Display + PartialOrd,
{
    output::header(&format!("{title} ({} nodes, depth {})", tree.len(), tree.depth()));
    for (order, line) in traversal_lines(tree, settings) {
        let label = if K != 2 && order.is_binary_only() {
            format!("{order} (as DFS)")
        } else {
            order.to_string()
        };
        output::action(&label, &line);
    }
    if settings.show_tree {
        output::info(tree);
    }
}
