//! Isomorphic CLI - Command line driver for the target filter
//!
//! Trees come in and go out as JSON; parsing source text and unparsing the
//! result are left to the tools on either side.

mod error;
mod io;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use isomorphic_filter::{split, FilterReport, TargetFilter, TargetSet};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "isomorphic", version)]
#[command(about = "Split an annotated syntax tree into per-target builds", long_about = None)]
struct Cli {
    /// Log classification details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a tree for one build target
    Filter {
        /// Input tree (JSON)
        file: PathBuf,
        /// Target to build for
        #[arg(short, long)]
        target: Option<String>,
        /// Comma-separated annotation vocabulary (default: server,browser)
        #[arg(long)]
        targets: Option<String>,
        /// JSON config file with `build_target` and `known_targets`
        #[arg(short, long, conflicts_with_all = ["target", "targets"])]
        config: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
        /// Print what was removed to stderr
        #[arg(long)]
        report: bool,
    },
    /// Write one filtered tree per target into a directory
    Split {
        /// Input tree (JSON)
        file: PathBuf,
        /// Output directory
        #[arg(long)]
        out_dir: PathBuf,
        /// Comma-separated annotation vocabulary (default: server,browser)
        #[arg(long)]
        targets: Option<String>,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Show the annotation vocabulary
    Targets {
        /// Comma-separated annotation vocabulary (default: server,browser)
        #[arg(long)]
        targets: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Filter {
            file,
            target,
            targets,
            config,
            output,
            pretty,
            report,
        } => cmd_filter(
            &file,
            target.as_deref(),
            targets.as_deref(),
            config.as_deref(),
            output.as_deref(),
            pretty,
            report,
        ),
        Commands::Split {
            file,
            out_dir,
            targets,
            pretty,
        } => cmd_split(&file, &out_dir, targets.as_deref(), pretty),
        Commands::Targets { targets } => {
            cmd_targets(targets.as_deref());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "isomorphic_filter=debug,isomorphic_cli=debug"
    } else {
        "isomorphic_filter=warn,isomorphic_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_filter(
    file: &Path,
    target: Option<&str>,
    targets: Option<&str>,
    config: Option<&Path>,
    output: Option<&Path>,
    pretty: bool,
    report: bool,
) -> Result<(), CliError> {
    let config = io::load_config(config, target, targets)?;
    let tree = io::read_tree(file)?;
    debug!(nodes = tree.node_count(), file = %file.display(), "loaded tree");

    let outcome = TargetFilter::new(config).process_with_report(&tree)?;
    if report {
        match render_report(&outcome.report) {
            Some(summary) => eprint!("{}", summary),
            None => eprintln!("{}: nothing removed", outcome.report.build_target),
        }
    }

    let json = io::render(&outcome.tree, pretty)?;
    match output {
        Some(path) => {
            io::write_file(path, &json)?;
            info!(
                "Wrote {} build to {} ({} nodes, {} removed)",
                outcome.report.build_target,
                path.display(),
                outcome.tree.node_count(),
                outcome.report.removed_count()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Removal summary for `--report`, or `None` when the tree was left untouched
fn render_report(report: &FilterReport) -> Option<String> {
    if report.is_empty() {
        None
    } else {
        Some(report.to_string())
    }
}

fn cmd_split(
    file: &Path,
    out_dir: &Path,
    targets: Option<&str>,
    pretty: bool,
) -> Result<(), CliError> {
    let known = targets.map(TargetSet::parse_list).unwrap_or_default();
    let tree = io::read_tree(file)?;

    let variants = split(&tree, &known)?;

    fs::create_dir_all(out_dir).map_err(|source| CliError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;
    for (target, variant) in &variants {
        let path = io::variant_path(out_dir, target);
        io::write_file(&path, &io::render(variant, pretty)?)?;
        info!("Wrote {} build to {}", target, path.display());
    }

    Ok(())
}

fn cmd_targets(targets: Option<&str>) {
    let known = targets.map(TargetSet::parse_list).unwrap_or_default();
    for target in known.iter() {
        if target.is_anywhere() {
            println!("{} (wildcard)", target);
        } else {
            println!("{}", target);
        }
    }
}
