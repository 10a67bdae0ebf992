use std::io;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use ktree::cli::commands::execute_command;
use ktree::cli::{output, Cli};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = Cli::parse();

    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for {generator:?}...");
        print_completions(generator, &mut cmd);
    }
    if cli.info {
        if let Some(a) = Cli::command().get_author() {
            println!("AUTHOR: {}", a)
        }
        if let Some(v) = Cli::command().get_version() {
            println!("VERSION: {}", v)
        }
    }

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ktree::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_build_args_when_parsing_then_collects_edges() {
        let cli = Cli::try_parse_from([
            "ktree", "-dd", "build", "--arity", "3", "--root", "1", "-e", "1:2", "-e", "1:3",
            "-o", "bfs", "--no-tree",
        ])
        .unwrap();
        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(ktree::cli::Commands::Build {
                arity, root, edges, view, ..
            }) => {
                assert_eq!(arity, 3);
                assert_eq!(root, 1.0);
                assert_eq!(edges, vec![(1.0, 2.0), (1.0, 3.0)]);
                assert!(view.no_tree);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_arity_out_of_range_when_parsing_then_rejects() {
        assert!(Cli::try_parse_from(["ktree", "build", "--arity", "9", "--root", "1"]).is_err());
    }
}
