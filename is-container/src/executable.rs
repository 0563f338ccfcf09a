//! Resolution of the detection executable on a search path
use crate::{DetectError, DetectOpts};
use log::debug;
use std::{
    env,
    ffi::{OsStr, OsString},
    path::PathBuf,
};

/// Searched when `PATH` is not set at all
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

// Empty entries are dropped rather than read as the current directory.
// Relative entries are anchored at the current directory.
fn search_dirs(paths: &OsStr) -> Vec<PathBuf> {
    let cwd = env::current_dir().ok();
    env::split_paths(paths)
        .filter(|dir| !dir.as_os_str().is_empty())
        .filter_map(|dir| match (dir.is_relative(), &cwd) {
            (false, _) => Some(dir),
            (true, Some(cwd)) => Some(cwd.join(dir)),
            (true, None) => None,
        })
        .collect()
}

/// Resolves the configured executable to an absolute path
///
/// Uses the explicit search path from [`DetectOpts::search_path`] when given,
/// otherwise the process's `PATH`, falling back to [`DEFAULT_SEARCH_PATH`]
/// when `PATH` is unset. An empty search path finds nothing. A file that
/// exists but is not executable is treated the same as a missing one.
pub fn resolve(opts: &DetectOpts) -> Result<PathBuf, DetectError> {
    let not_found = || DetectError::DetectVirtNotFound(opts.executable.clone());

    let paths = match &opts.search_path {
        Some(paths) => paths.clone(),
        None => env::var_os("PATH").unwrap_or_else(|| OsString::from(DEFAULT_SEARCH_PATH)),
    };

    let dirs = search_dirs(&paths);
    if dirs.is_empty() {
        debug!("no directories to search for `{}`", opts.executable);
        return Err(not_found());
    }
    let joined = env::join_paths(&dirs).map_err(|_| not_found())?;
    let cwd = env::current_dir().unwrap_or_default();

    match which::which_in(&opts.executable, Some(joined), cwd) {
        Ok(path) => {
            debug!("resolved `{}` to {}", opts.executable, path.display());
            Ok(path)
        }
        Err(err) => {
            debug!("could not resolve `{}`: {}", opts.executable, err);
            Err(not_found())
        }
    }
}
