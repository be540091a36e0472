//! Listing workflow
//!
//! Keeps the steps of one invocation (open the repository, resolve
//! configuration, select versions) apart from clap so they can be called
//! programmatically.

use std::path::{Path, PathBuf};

use crate::config::{default_user_config_dir, load_config, Config, ConfigSources};
use crate::error::Result;
use crate::git::Git2Repository;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Ok = 0,
    /// Flags or configuration could not be parsed
    ParseFlagError = 1,
    /// Repository could not be opened or its tags read
    TagRetrievalError = 2,
    /// Versions could not be written to the output stream
    OutputError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Arguments for the listing workflow
///
/// Mirrors the CLI flags. `None`/`false` leave the configured value alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ListWorkflowArgs {
    /// Repository path (or a path inside its work tree)
    pub repo_path: PathBuf,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Directory holding the per-user config file
    pub user_config_dir: Option<PathBuf>,

    /// Prefix override
    pub prefix: Option<String>,

    pub include_pre_release: bool,

    pub include_build_metadata: bool,
}

impl Default for ListWorkflowArgs {
    fn default() -> Self {
        ListWorkflowArgs {
            repo_path: PathBuf::from("."),
            config_path: None,
            user_config_dir: default_user_config_dir(),
            prefix: None,
            include_pre_release: false,
            include_build_metadata: false,
        }
    }
}

impl ListWorkflowArgs {
    /// Layer the flags over the file configuration (or defaults).
    ///
    /// `repo_root` is the discovered work-tree root, not `repo_path`, so
    /// every sub-directory of one repository sees the same file.
    pub fn resolve_config(&self, repo_root: &Path) -> Result<Config> {
        let mut config = load_config(&ConfigSources {
            config_path: self.config_path.clone(),
            repo_root: repo_root.to_path_buf(),
            user_config_dir: self.user_config_dir.clone(),
        })?;

        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        config.include_pre_release |= self.include_pre_release;
        config.include_build_metadata |= self.include_build_metadata;

        Ok(config)
    }
}

/// Main listing workflow
///
/// 1. Open the repository
/// 2. Resolve configuration against its root
/// 3. Read its tags and select the release versions
///
/// # Returns
///
/// The selected tag names, newest first. Configuration errors and tag
/// retrieval errors are told apart with
/// [`GitSemversError::is_tag_retrieval`](crate::error::GitSemversError::is_tag_retrieval).
pub fn run_list_workflow(args: &ListWorkflowArgs) -> Result<Vec<String>> {
    let repo = Git2Repository::open(&args.repo_path)?;

    let config = args.resolve_config(repo.root())?;
    tracing::debug!(?config, root = %repo.root().display(), "resolved configuration");

    crate::versions(&repo, &config)
}
