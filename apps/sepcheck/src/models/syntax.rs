//! Settings for the delegated backend syntax check.

use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
/// External lint invocation: `<program> <flags...> <backend>/<entry>`.
pub struct SyntaxSettings {
    pub program: String,
    pub flags: Vec<String>,
    /// Entry script, relative to the backend root.
    pub entry: String,
    pub timeout: Duration,
}

impl Default for SyntaxSettings {
    fn default() -> Self {
        SyntaxSettings {
            program: "php".into(),
            flags: vec!["-l".into()],
            entry: "index.php".into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
