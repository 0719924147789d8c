//! # blkbench
//!
//! Sequential read throughput benchmark for raw block devices.
//!
//! ## Overview
//!
//! `blkbench` measures sequential read throughput by issuing fixed-size,
//! cache-bypassing reads across a region of a physical drive and timing
//! each one against a monotonic high-resolution clock. It is aimed at
//! diagnosing location-dependent storage behavior, such as zone throughput
//! on rotating media or partition-placement effects.
//!
//! The read pattern is configurable two ways:
//!
//! - **Full coverage**: every block of the area is read back to back.
//! - **Ratio sampling**: the area is partitioned into stride groups, only
//!   the first `inner` of every `outer` blocks are read, and the cursor
//!   jumps a whole group forward. This trades coverage for speed on large
//!   devices.
//!
//! ## Example
//!
//! ```no_run
//! use blkbench::{run, PerfClock, PhysicalDrive, RawParams};
//!
//! let config = RawParams {
//!     drive_index: 0,
//!     block_size_kib: 1024,
//!     block_offset_kib: 0,
//!     area_size_mib: 1024,
//!     area_location_mib: 0,
//!     area_ratio: None,
//! }
//! .validate()?;
//!
//! let device = PhysicalDrive::open(config.drive_index)?;
//! let report = run(&config, device, &PerfClock::new())?;
//! print!("{}", report.render());
//! # Ok::<(), blkbench::Error>(())
//! ```
//!
//! ## Safety
//!
//! Reading a raw block device requires root privileges. The CLI tool
//! escalates via sudo when needed.

mod clock;
mod config;
mod device;
mod engine;
mod error;
mod report;

pub use clock::{MonotonicClock, PerfClock};
pub use config::{BenchmarkConfig, RawParams, DEFAULT_AREA_RATIO};
pub use device::{
    alloc_read_buffer, device_path_for_index, BlockDevice, PhysicalDrive,
    DIRECT_IO_ALIGNMENT,
};
pub use engine::{derive_throughput, run, ReadSchedule};
pub use error::Error;
pub use report::ThroughputReport;
