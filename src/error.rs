use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced to the caller. The rewrite itself cannot fail (an
/// empty match set is a no-op), so the only error is the hosting document
/// being unavailable.
#[derive(Debug, Error)]
pub enum Error {
    /// The document could not be read from, or written back to, `path`.
    #[error("document unavailable: {}: {source}", path.display())]
    Environment {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
