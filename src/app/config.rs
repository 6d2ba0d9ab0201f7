//! Application configuration from CLI arguments

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Result, TreeError};
use crate::tree::TreeOptions;

/// What the binary should do after argument parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the tree
    Run(Config),
    /// Print usage and exit
    Help,
    /// Print version and exit
    Version,
}

/// Application configuration from CLI args
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Traversal root; `None` means the current working directory
    pub root: Option<PathBuf>,
    /// Mark unreadable subdirectories instead of aborting
    pub skip_unreadable: bool,
}

impl Config {
    /// Parse the process arguments
    pub fn from_args() -> anyhow::Result<Command> {
        Self::parse(env::args_os().skip(1))
    }

    /// Parse an argument list (program name excluded)
    pub fn parse<I, S>(args: I) -> anyhow::Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut root: Option<PathBuf> = None;
        let mut skip_unreadable = false;
        let mut positional_only = false;

        for arg in args {
            let arg: OsString = arg.into();
            if positional_only {
                root = Some(PathBuf::from(arg));
                continue;
            }
            // Non-UTF-8 arguments can only be paths
            let Some(flag) = arg.to_str() else {
                root = Some(PathBuf::from(arg));
                continue;
            };
            match flag {
                "--skip-unreadable" => skip_unreadable = true,
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--" => positional_only = true,
                path if !path.starts_with('-') || path == "-" => {
                    root = Some(PathBuf::from(path));
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        Ok(Command::Run(Self {
            root,
            skip_unreadable,
        }))
    }

    /// Traversal root, falling back to the current working directory
    pub fn root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => env::current_dir().map_err(|e| TreeError::from_io(".", e)),
        }
    }

    /// Traversal options derived from the flags
    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            skip_unreadable: self.skip_unreadable,
        }
    }
}

pub fn print_help() {
    println!(
        r#"dirtree - print a directory's contents as a tree

USAGE:
    dirtree [OPTIONS] [PATH]

ARGS:
    PATH                Directory to print (default: current directory)

OPTIONS:
    --skip-unreadable   Mark unreadable subdirectories instead of aborting
    -h, --help          Show this help message
    -V, --version       Show version

ENVIRONMENT:
    RUST_LOG            Log level for diagnostics on stderr (e.g. debug)

EXIT CODES:
    0           Success
    2           Error (filesystem or output error)
    3           Invalid arguments (unknown option)
"#
    );
}

pub fn print_version() {
    println!("dirtree {}", env!("CARGO_PKG_VERSION"));
}
