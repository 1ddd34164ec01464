//! Run configuration. The output style comes from the `listing` Cargo feature and the input
//! path from the first command line argument, if there is one.

use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
  /// Prompted for when absent.
  pub path: Option<PathBuf>,
  pub listing: bool
}

impl Config {
  /// `args` includes the program name, as `std::env::args()` does.
  pub fn from_args<I>(args: I) -> Config
    where I: IntoIterator<Item = String>
  {
    Config {
      path: args.into_iter().nth(1).map(PathBuf::from),
      listing: cfg!(feature = "listing")
    }
  }
}
