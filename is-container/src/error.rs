use thiserror::Error as ThisError;

#[cfg(feature = "serde")]
use is_container_macros::SerializeFromDisplay;

/// Captures the ways a container detection can fail
#[non_exhaustive]
#[derive(ThisError, Debug)]
#[cfg_attr(feature = "serde", derive(SerializeFromDisplay))]
pub enum DetectError {
    /// The detection executable (normally `systemd-detect-virt`) could not be
    /// resolved on the search path. Holds the executable name.
    #[error("executable `{0}` not found. cannot determine if machine is a container instance")]
    DetectVirtNotFound(String),
    /// Any other failure spawning or waiting on the child, propagated as-is
    #[error("io: {0}")]
    IO(#[from] std::io::Error),
}

impl DetectError {
    /// True when the environment cannot be probed at all because the
    /// executable is missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, DetectError::DetectVirtNotFound(_))
    }
}
