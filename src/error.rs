//! Error taxonomy for the benchmark.
//!
//! Every variant is terminal for the run: nothing is retried or recovered
//! locally, because a silent retry would fold its own latency into the
//! measured transfer rates.

use std::io;

/// Errors produced while validating parameters or running the benchmark.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more parameter constraints were violated.
    ///
    /// All violations are collected before the run is rejected, so the
    /// message lists every problem at once rather than the first one found.
    #[error("invalid configuration: {}", .0.join(" "))]
    ConfigInvalid(Vec<String>),

    /// Failed to obtain a handle to the target block device.
    #[error("failed to open block device: {0}")]
    DeviceOpenFailed(#[source] io::Error),

    /// Failed to reposition the device read cursor.
    #[error("failed to move read cursor: {0}")]
    SeekFailed(#[source] io::Error),

    /// A read in the schedule failed; the run is aborted with no report.
    #[error("failed to read from block device: {0}")]
    ReadFailed(#[source] io::Error),

    /// No usable high-resolution monotonic clock is available.
    #[error("high-resolution monotonic clock unavailable")]
    ClockUnavailable,
}

impl Error {
    /// OS error code of the underlying device failure, if there is one.
    pub fn os_error_code(&self) -> Option<i32> {
        match self {
            Error::DeviceOpenFailed(e) | Error::SeekFailed(e) | Error::ReadFailed(e) => {
                e.raw_os_error()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_invalid_joins_all_violations() {
        let err = Error::ConfigInvalid(vec![
            "Invalid physical drive.".to_string(),
            "Invalid block size.".to_string(),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("Invalid physical drive."));
        assert!(msg.contains("Invalid block size."));
    }

    #[test]
    fn test_os_error_code_passthrough() {
        let err = Error::ReadFailed(io::Error::from_raw_os_error(5));
        assert_eq!(err.os_error_code(), Some(5));
        assert_eq!(Error::ClockUnavailable.os_error_code(), None);
    }
}
