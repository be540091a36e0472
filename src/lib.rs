pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use config::Config;
pub use domain::{select_versions, ParsedVersion};
pub use error::{GitSemversError, Result};

use git::TagSource;

/// Release versions of a repository, newest first.
///
/// Reads the tags once from `source` and runs them through
/// [`select_versions`]. Only a failure to read the tags is an error.
pub fn versions<S: TagSource>(source: &S, config: &Config) -> Result<Vec<String>> {
    let tags = source.list_tags()?;
    Ok(select_versions(tags, config))
}
