//! Connector glyphs and the indentation prefix

use std::fmt;

/// Connector for a non-last sibling
pub const BRANCH: &str = "├── ";
/// Connector for the last sibling
pub const LAST_BRANCH: &str = "└── ";
/// Indentation under a non-last ancestor
pub const CONTINUE: &str = "│   ";
/// Indentation under a last ancestor
pub const BLANK: &str = "    ";

/// Pick the connector for an entry
pub fn connector(is_last: bool) -> &'static str {
    if is_last {
        LAST_BRANCH
    } else {
        BRANCH
    }
}

/// Accumulated indentation encoding the branch state of every ancestor.
///
/// Never mutated in place; each level derives its own with [`Prefix::child`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    /// Empty prefix used at the root
    pub fn root() -> Self {
        Self::default()
    }

    /// Prefix for the children of an entry
    pub fn child(&self, is_last: bool) -> Self {
        let token = if is_last { BLANK } else { CONTINUE };
        let mut s = String::with_capacity(self.0.len() + token.len());
        s.push_str(&self.0);
        s.push_str(token);
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
