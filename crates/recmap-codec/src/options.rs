//! Converter options.
//!
//! [`CodecOptions`] carries no file loader of its own. It derives serde so a
//! host application can embed it in whatever configuration it already reads.

use serde::{Deserialize, Serialize};

/// Nesting limit applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling a decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Ignore input keys that name no declared field instead of failing.
    pub accept_unknown: bool,
    /// Maximum depth of nested records, the top-level record being depth 1.
    pub max_depth: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            accept_unknown: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecOptions {
    /// Set the unknown-key policy.
    pub fn with_accept_unknown(mut self, accept_unknown: bool) -> Self {
        self.accept_unknown = accept_unknown;
        self
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
