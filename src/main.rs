//! dirtree - Print a directory's contents as an ASCII tree

use std::process::ExitCode;

use dirtree::app::{exit_code, print_help, print_version, Command, Config};
use dirtree::tree::output_tree;

fn main() -> ExitCode {
    env_logger::init();

    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(Command::Run(c)) => c,
        Ok(Command::Help) => {
            print_help();
            return ExitCode::from(exit_code::SUCCESS as u8);
        }
        Ok(Command::Version) => {
            print_version();
            return ExitCode::from(exit_code::SUCCESS as u8);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    run_tree_mode(&config)
}

/// Print the tree; partial output stays on stdout when a directory fails
fn run_tree_mode(config: &Config) -> ExitCode {
    let result = config
        .root()
        .and_then(|root| output_tree(&root, config.tree_options()));
    match result {
        Ok(_) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) if e.is_broken_pipe() => {
            log::debug!("stdout closed early: {}", e);
            ExitCode::from(exit_code::SUCCESS as u8)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}
