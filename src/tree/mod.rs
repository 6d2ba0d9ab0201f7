//! Tree module - Directory listing and tree rendering

pub mod node;
pub mod prefix;
pub mod printer;

pub use node::{list_entries, TreeEntry};
pub use prefix::{connector, Prefix};
pub use printer::{output_tree, print_tree, write_tree, TreeOptions};
