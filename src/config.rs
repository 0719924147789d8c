//! Benchmark parameters and their validation.
//!
//! Raw command-line values enter as [`RawParams`] and leave as an immutable
//! [`BenchmarkConfig`] once every constraint has been checked. A config is
//! accepted wholesale or rejected wholesale; there is no partial application
//! of defaults after a failed field.

use crate::error::Error;

/// Default sampling ratio (inner and outer) when none is supplied.
///
/// Equal numerator and denominator disable sampling, so the default run
/// covers the whole area.
pub const DEFAULT_AREA_RATIO: i64 = 16;

/// Unvalidated benchmark parameters, as parsed from the command line.
#[derive(Debug, Clone)]
pub struct RawParams {
    /// Index number of the physical drive.
    pub drive_index: i64,
    /// Block size in KiB.
    pub block_size_kib: i64,
    /// Block offset in KiB.
    pub block_offset_kib: i64,
    /// Area size in MiB.
    pub area_size_mib: i64,
    /// Area location in MiB.
    pub area_location_mib: i64,
    /// Sampling ratio as (inner, outer); both default to
    /// [`DEFAULT_AREA_RATIO`] when omitted.
    pub area_ratio: Option<(i64, i64)>,
}

impl RawParams {
    /// Check every constraint and produce a validated config.
    ///
    /// All violations are accumulated into one [`Error::ConfigInvalid`] so
    /// the caller sees every problem at once rather than fixing them one
    /// run at a time.
    pub fn validate(&self) -> Result<BenchmarkConfig, Error> {
        let (ratio_inner, ratio_outer) = self
            .area_ratio
            .unwrap_or((DEFAULT_AREA_RATIO, DEFAULT_AREA_RATIO));

        let mut violations = Vec::new();

        if self.drive_index < 0 {
            violations.push("Invalid physical drive.".to_string());
        }

        if self.block_size_kib <= 0
            || self.block_size_kib > 1024
            || 1024 % self.block_size_kib != 0
        {
            violations.push("Invalid block size.".to_string());
        }

        if self.block_offset_kib < 0 || self.block_offset_kib > 1024 {
            violations.push("Invalid block offset.".to_string());
        }

        if self.area_size_mib <= 0 {
            violations.push("Invalid area size.".to_string());
        }

        if self.area_location_mib < 0 {
            violations.push("Invalid area location.".to_string());
        }

        if ratio_inner < 0 || ratio_outer < 0 || ratio_inner > ratio_outer {
            violations.push("Invalid area ratio.".to_string());
        }

        if !violations.is_empty() {
            return Err(Error::ConfigInvalid(violations));
        }

        Ok(BenchmarkConfig {
            drive_index: self.drive_index as u32,
            block_size_kib: self.block_size_kib as u64,
            block_offset_kib: self.block_offset_kib as u64,
            area_size_mib: self.area_size_mib as u64,
            area_location_mib: self.area_location_mib as u64,
            ratio_inner: ratio_inner as u64,
            ratio_outer: ratio_outer as u64,
        })
    }
}

/// Validated benchmark parameters.
///
/// Constructed only by [`RawParams::validate`]; immutable once built, so the
/// schedule derived from it cannot drift mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Index number of the physical drive.
    pub drive_index: u32,
    /// Block size in KiB; a divisor of 1024, so always a power of two.
    pub block_size_kib: u64,
    /// Block offset in KiB, 0..=1024.
    pub block_offset_kib: u64,
    /// Area size in MiB, at least 1.
    pub area_size_mib: u64,
    /// Area location in MiB from the start of the device.
    pub area_location_mib: u64,
    /// Blocks actually read per stride group.
    pub ratio_inner: u64,
    /// Blocks spanned per stride group.
    pub ratio_outer: u64,
}

impl BenchmarkConfig {
    /// Whether sampling is enabled (only part of each group is read).
    pub fn sampling_enabled(&self) -> bool {
        self.ratio_inner < self.ratio_outer
    }
}
