//! dirtree - Print a directory's contents as an ASCII tree
//!
//! Entries are listed in byte order of their names and drawn with
//! `├── ` / `└── ` connectors, recursing depth-first into subdirectories.

pub mod app;
pub mod error;
pub mod tree;

pub use error::{Result, TreeError};
