//! Command-line surface
//!
//! Parses flags with clap, runs the listing workflow and reports through
//! injected output and error streams so the whole run is testable.

pub mod orchestration;

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use crate::config::default_user_config_dir;

use clap::error::ErrorKind;
use clap::Parser;

use crate::ui;
pub use orchestration::{run_list_workflow, ExitCode, ListWorkflowArgs};

#[derive(Debug, clap::Parser)]
#[command(
    name = "git-semvers",
    version,
    about = "List semantic version tags of a git repository, newest first"
)]
pub struct Args {
    #[arg(long = "repo", value_name = "PATH", default_value = ".", help = "Path to the git repository")]
    pub repo: PathBuf,

    #[arg(
        long = "ver-prefix",
        value_name = "PREFIX",
        allow_hyphen_values = true,
        help = "Text required before the version number [default: v]"
    )]
    pub ver_prefix: Option<String>,

    #[arg(long, help = "Include pre-release versions")]
    pub with_pre_release: bool,

    #[arg(long, help = "Include versions with build metadata")]
    pub with_build_metadata: bool,

    #[arg(short, long, value_name = "FILE", help = "Custom configuration file path")]
    pub config: Option<PathBuf>,
}

impl From<Args> for ListWorkflowArgs {
    fn from(args: Args) -> Self {
        ListWorkflowArgs {
            repo_path: args.repo,
            config_path: args.config,
            user_config_dir: default_user_config_dir(),
            prefix: args.ver_prefix,
            include_pre_release: args.with_pre_release,
            include_build_metadata: args.with_build_metadata,
        }
    }
}

/// Run one invocation. `argv` includes the program name.
pub fn run<I, T>(argv: I, out: &mut dyn Write, err: &mut dyn Write) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with_config_dir(argv, default_user_config_dir(), out, err)
}

/// Like [`run`], reading the per-user config file from `user_config_dir`.
pub fn run_with_config_dir<I, T>(
    argv: I,
    user_config_dir: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return match write!(out, "{}", e).and_then(|()| out.flush()) {
                Ok(()) => ExitCode::Ok,
                Err(_) => ExitCode::OutputError,
            };
        }
        Err(e) => {
            let _ = write!(err, "{}", e);
            return ExitCode::ParseFlagError;
        }
    };

    let workflow = ListWorkflowArgs {
        user_config_dir,
        ..args.into()
    };

    let versions = match run_list_workflow(&workflow) {
        Ok(versions) => versions,
        Err(e) if e.is_tag_retrieval() => {
            ui::display_error(err, &e.to_string());
            return ExitCode::TagRetrievalError;
        }
        Err(e) => {
            ui::display_error(err, &e.to_string());
            return ExitCode::ParseFlagError;
        }
    };

    match ui::write_versions(out, &versions) {
        Ok(()) => ExitCode::Ok,
        Err(e) => {
            ui::display_error(err, &format!("cannot write versions: {}", e));
            ExitCode::OutputError
        }
    }
}
