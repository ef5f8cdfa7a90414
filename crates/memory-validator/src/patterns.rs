//! Key format pattern and reserved variable names

use lazy_static::lazy_static;
use regex::Regex;

/// Longest accepted context variable name
pub const MAX_KEY_LENGTH: usize = 128;

/// Longest accepted context variable value
pub const MAX_VALUE_LENGTH: usize = 1000;

/// Variables the channel layer injects into every conversation
pub const CHANNEL_VARIABLE_NAMES: &[&str] = &[
    "first",
    "last",
    "fullName",
    "phone",
    "email",
    "channel",
    "channelId",
    "language",
];

/// Variables computed by the platform itself
pub const SYSTEM_VARIABLE_NAMES: &[&str] = &[
    "first",
    "now",
    "today",
    "timestamp",
    "sessionId",
    "userId",
    "memoryName",
];

lazy_static! {
    /// Letter first, then letters, digits or underscores; 128 chars at most
    pub static ref KEY_PATTERN: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]{0,127}$").unwrap();
}

pub fn is_valid_key_format(key: &str) -> bool {
    KEY_PATTERN.is_match(key)
}

/// Whether `key` appears in either built-in reserved list
pub fn is_builtin_reserved(key: &str) -> bool {
    CHANNEL_VARIABLE_NAMES.contains(&key) || SYSTEM_VARIABLE_NAMES.contains(&key)
}
