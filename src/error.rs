use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the word source. Both end the run.
#[derive(Debug, Error)]
pub enum SourceError {
  #[error("unable to open `{}`", .path.display())]
  Open {
    path: PathBuf,
    #[source]
    source: io::Error
  },

  #[error("no valid words found in `{}`", .path.display())]
  Empty {
    path: PathBuf
  },
}
