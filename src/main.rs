//! Entry point for the **x3** command.
//!
//! Each run parses one command, takes a snapshot of the window manager,
//! sends at most one command batch and exits.  Arguments can also be piped
//! in: when stdin is a pipe, its first line is split on whitespace and
//! appended to the command line.

use clap::{Parser, Subcommand};
use log::{debug, error, info};
use std::io::BufRead;
use std::path::PathBuf;
use x3::command::{Command, Direction, Layout, Orientation};
use x3::config::Config;
use x3::i3::wm::I3Wm;
use x3::switcher::WorkspaceSwitcher;

#[derive(Parser)]
#[command(name = "x3")]
#[command(version, about = "XMonad workspace handling and more for i3-wm")]
struct Cli {
    /// Configuration file (defaults to $XDG_CONFIG_HOME/x3/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or create workspace on focused screen
    Show {
        #[arg(value_name = "WSNAME")]
        name: String,
    },
    /// Rename current workspace
    Rename {
        #[arg(value_name = "WSNAME")]
        name: String,
    },
    /// Bind current workspace to num
    Bind {
        #[arg(
            value_name = "NUM",
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(0..)
        )]
        num: i32,
    },
    /// Swap visible workspaces when there are 2 screens
    Swap,
    /// List all workspace names
    List,
    /// Current workspace name
    Current,
    /// Move current container to workspace
    Move {
        #[arg(value_name = "NUM_OR_NAME")]
        name: String,
    },
    /// Merge current container into other container
    Merge {
        /// The direction where to merge (left/right/up/down)
        direction: Direction,
        /// Split mode (horizontal/vertical)
        orientation: Orientation,
        /// Layout type to use (default/tabbed/stacking)
        layout: Layout,
    },
}

impl From<Commands> for Command {
    fn from(c: Commands) -> Self {
        match c {
            Commands::Show { name } => Command::Show(name),
            Commands::Rename { name } => Command::Rename(name),
            Commands::Bind { num } => Command::Bind(num),
            Commands::Swap => Command::Swap,
            Commands::List => Command::List,
            Commands::Current => Command::Current,
            Commands::Move { name } => Command::Move(name),
            Commands::Merge {
                direction,
                orientation,
                layout,
            } => Command::Merge {
                direction,
                orientation,
                layout,
            },
        }
    }
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/x3`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("x3")
}

/// Try to load the config from `path` (or the default location), falling
/// back to compiled-in defaults.
fn load_config(path: Option<PathBuf>) -> Config {
    let path = path.unwrap_or_else(|| config_dir().join("config.json"));
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

/// `true` if stdin is a pipe rather than a terminal or `/dev/null`.
fn stdin_is_pipe() -> bool {
    use std::os::unix::fs::FileTypeExt;
    std::fs::metadata("/dev/stdin")
        .map(|m| m.file_type().is_fifo())
        .unwrap_or(false)
}

/// `args` followed by the whitespace-separated words of `line`.
fn append_piped(mut args: Vec<String>, line: &str) -> Vec<String> {
    args.extend(line.split_whitespace().map(str::to_string));
    args
}

/// Command-line arguments with the first piped stdin line appended.
fn collect_args() -> Vec<String> {
    let args: Vec<String> = std::env::args().collect();
    if !stdin_is_pipe() {
        return args;
    }
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(_) => append_piped(args, &line),
        Err(e) => {
            debug!("ignoring stdin: {}", e);
            args
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse_from(collect_args());
    let config = load_config(cli.config);

    let wm = match I3Wm::new(config.ipc.socket_path.as_deref()) {
        Ok(wm) => wm,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut switcher = WorkspaceSwitcher::new(wm);
    switcher.set_match_policy(config.resolver.match_policy);

    match switcher.handle(cli.command.into()) {
        Ok(Some(report)) => println!("{}", report),
        Ok(None) => {}
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
