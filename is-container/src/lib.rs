//! `is-container` detects if the machine is a system container instance.
//!
//! Not every application works inside a system container (e.g. an LXD
//! instance) and some need additional configuration when they do. This crate
//! provides [`is_container`], a simple, deterministic check built on
//! [`systemd-detect-virt`](https://www.freedesktop.org/software/systemd/man/systemd-detect-virt.html).
//!
//! `systemd-detect-virt --container` exits with code 0 when running within a
//! container. A non-zero exit code means it is not.
//!
//! ```no_run
//! use is_container::{is_container, DetectError};
//!
//! fn on_install() -> Result<(), DetectError> {
//!     if is_container()? {
//!         // app does not support container runtime
//!         return Ok(());
//!     }
//!
//!     // Proceed with installation.
//!     Ok(())
//! }
//! ```
//!
//! If `systemd-detect-virt` cannot be found the check fails with
//! [`DetectError::DetectVirtNotFound`] and it is up to the caller to decide
//! how to treat an environment that cannot be probed.
mod error;
mod executable;

use log::{debug, warn};
use nix::sys::signal::Signal;
use std::{
    ffi::{OsStr, OsString},
    os::unix::process::ExitStatusExt,
    path::PathBuf,
    process::{Command, ExitStatus},
};

#[cfg(feature = "serde")]
use serde::Serialize;

pub use error::DetectError;
pub use executable::{resolve, DEFAULT_SEARCH_PATH};

/// Name of the executable consulted by default
pub const DETECT_VIRT: &str = "systemd-detect-virt";

/// Restricts `systemd-detect-virt` to container virtualization only
pub const CONTAINER_ARG: &str = "--container";

/// Options for a single detection run
///
/// The default is what production code wants: `systemd-detect-virt` resolved
/// through the process's `PATH`, or [`DEFAULT_SEARCH_PATH`] if it is unset.
#[derive(Debug, Clone)]
pub struct DetectOpts {
    pub(crate) executable: String,
    pub(crate) search_path: Option<OsString>,
}

impl Default for DetectOpts {
    fn default() -> Self {
        Self {
            executable: DETECT_VIRT.to_string(),
            search_path: None,
        }
    }
}

impl DetectOpts {
    /// Use a different executable name than `systemd-detect-virt`
    pub fn executable(mut self, name: impl Into<String>) -> Self {
        self.executable = name.into();
        self
    }

    /// Resolve against `paths`, formatted like `PATH`, instead of the
    /// environment
    pub fn search_path<P: AsRef<OsStr>>(mut self, paths: P) -> Self {
        self.search_path = Some(paths.as_ref().to_os_string());
        self
    }
}

/// Outcome of one detection run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Detection {
    /// Resolved path of the executable that was run
    pub executable: PathBuf,
    /// Exit code of the child, `None` if it was terminated by a signal
    pub exit_code: Option<i32>,
    /// Exit code 0 means container, anything else does not
    pub is_container: bool,
}

impl Detection {
    fn from_status(executable: PathBuf, status: ExitStatus) -> Self {
        if let Some(signo) = status.signal() {
            match Signal::try_from(signo) {
                Ok(signal) => warn!("{} was terminated by {}", executable.display(), signal),
                Err(_) => warn!("{} was terminated by signal {}", executable.display(), signo),
            }
        }

        Detection {
            executable,
            exit_code: status.code(),
            is_container: status.success(),
        }
    }
}

/// Runs the detection executable once and reports how it exited
///
/// Spawns one child per call, waits for it and reaps it. There is no retry,
/// caching or timeout. Stdout and stderr are inherited from the caller.
pub fn detect(opts: &DetectOpts) -> Result<Detection, DetectError> {
    let executable = resolve(opts)?;

    debug!("running {} {}", executable.display(), CONTAINER_ARG);
    let status = Command::new(&executable).arg(CONTAINER_ARG).status()?;
    debug!("{} exited with {}", executable.display(), status);

    Ok(Detection::from_status(executable, status))
}

/// Detect if the machine is a container instance
///
/// Fails with [`DetectError::DetectVirtNotFound`] if `systemd-detect-virt`
/// is not found on the machine.
pub fn is_container() -> Result<bool, DetectError> {
    detect(&DetectOpts::default()).map(|detection| detection.is_container)
}
