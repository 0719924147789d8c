//! Core benchmark engine: schedule derivation, the timed read loop, and
//! throughput computation.
//!
//! The engine is written once against the [`BlockDevice`] and
//! [`MonotonicClock`] traits. One read is in flight at any time; the
//! per-read timing model depends on the loop itself doing nothing but
//! seek, read, and record a timestamp.

use crate::clock::MonotonicClock;
use crate::config::BenchmarkConfig;
use crate::device::{alloc_read_buffer, BlockDevice};
use crate::error::Error;
use crate::report::ThroughputReport;

/// Derived read plan for one run.
///
/// Computed once from a validated config and immutable afterwards. With
/// sampling enabled the area is partitioned into groups of
/// `block_size * ratio_outer` KiB; only the first `ratio_inner` blocks of
/// each group are read and the cursor then jumps a whole group forward.
/// Equal ratios collapse to a single pass over the entire area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadSchedule {
    /// Number of cursor repositions (groups visited).
    pub outer_iterations: u64,
    /// Sequential reads issued after each reposition.
    pub inner_iterations: u64,
    /// `outer_iterations * inner_iterations`.
    pub total_reads: u64,
    /// Byte offset of the first read.
    pub base_offset_bytes: u64,
    /// Byte distance between consecutive group starts.
    pub stride_bytes: u64,
    /// Bytes transferred per read.
    pub buffer_size_bytes: usize,
}

impl ReadSchedule {
    pub fn from_config(config: &BenchmarkConfig) -> Self {
        // A positive block offset shifts every read forward, so the last
        // MiB of the area is surrendered to keep the final read inside
        // the device's addressable region.
        let area_actual_mib = if config.block_offset_kib > 0 {
            config.area_size_mib.saturating_sub(1)
        } else {
            config.area_size_mib
        };

        let full_read_count = area_actual_mib * 1024 / config.block_size_kib;

        let (outer_iterations, inner_iterations) = if config.sampling_enabled() {
            let outer =
                area_actual_mib * 1024 / (config.block_size_kib * config.ratio_outer);
            (outer, config.ratio_inner)
        } else {
            (1, full_read_count)
        };

        ReadSchedule {
            outer_iterations,
            inner_iterations,
            total_reads: outer_iterations * inner_iterations,
            base_offset_bytes: config.area_location_mib * 1024 * 1024
                + config.block_offset_kib * 1024,
            stride_bytes: config.block_size_kib * config.ratio_outer * 1024,
            buffer_size_bytes: (config.block_size_kib * 1024) as usize,
        }
    }
}

/// Execute one benchmark run.
///
/// Takes ownership of the device so the handle is released on every exit
/// path, including mid-schedule failures. The first seek or read error
/// aborts the whole run; a partial report would mix timed and untimed
/// reads and is never produced.
pub fn run<D, C>(
    config: &BenchmarkConfig,
    mut device: D,
    clock: &C,
) -> Result<ThroughputReport, Error>
where
    D: BlockDevice,
    C: MonotonicClock,
{
    let schedule = ReadSchedule::from_config(config);
    let frequency = clock.frequency()?;

    let mut buf = alloc_read_buffer(schedule.buffer_size_bytes);

    let mut laps: Vec<u64> = Vec::with_capacity(schedule.total_reads as usize + 1);
    laps.push(clock.now());

    for outer in 0..schedule.outer_iterations {
        // Inner reads are sequential; only group boundaries reposition.
        device.seek(schedule.base_offset_bytes + outer * schedule.stride_bytes)?;

        for _ in 0..schedule.inner_iterations {
            device.read_exact(buf.as_mut_slice())?;
            laps.push(clock.now());
        }
    }

    Ok(derive_throughput(&schedule, frequency, &laps))
}

/// Convert a completed timestamp series into transfer rates.
///
/// Pure function of the schedule, clock frequency, and timestamps:
/// re-deriving from the same series yields an identical report.
///
/// Each rate is truncated to whole bytes per second before the division
/// by 10^6, so a 6-decimal MB/s rendering is exact.
pub fn derive_throughput(
    schedule: &ReadSchedule,
    frequency: u64,
    laps: &[u64],
) -> ThroughputReport {
    let total_reads = schedule.total_reads as usize;
    debug_assert_eq!(laps.len(), total_reads + 1);

    let frequency = frequency as f64;
    let buffer_bytes = schedule.buffer_size_bytes as f64;

    let mut per_read = Vec::with_capacity(total_reads);
    for i in 1..=total_reads {
        let elapsed = (laps[i] - laps[i - 1]) as f64 / frequency;
        per_read.push((buffer_bytes / elapsed).floor() / 1_000_000.0);
    }

    let total = if total_reads == 0 {
        0.0
    } else {
        let total_elapsed = (laps[total_reads] - laps[0]) as f64 / frequency;
        let total_bytes = buffer_bytes * total_reads as f64;
        (total_bytes / total_elapsed).floor() / 1_000_000.0
    };

    ThroughputReport { per_read, total }
}
