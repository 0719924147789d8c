//! CLI tool for benchmarking sequential read throughput of block devices.
//!
//! This tool validates the benchmark parameters, opens the target physical
//! drive with cache-bypassing flags, runs the timed read schedule, and
//! prints the per-read and total transfer rates.

use blkbench::{run, Error, PerfClock, PhysicalDrive, RawParams};
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Measure sequential read throughput of a raw block device.
///
/// Reads a configurable area of the drive in fixed-size blocks, bypassing
/// the OS cache, and reports one transfer rate per read plus a total rate.
/// With a sampling ratio of INNER/OUTER, only the first INNER of every
/// OUTER blocks are read, skip-sampling a large device quickly.
#[derive(Parser, Debug)]
#[command(name = "blkbench")]
#[command(version, about, long_about = None)]
struct Args {
    /// Index number of the physical drive (0 maps to /dev/sda)
    drive: i64,

    /// Block size in KiB; a power of 2, no more than 1024
    block_size: i64,

    /// Block offset in KiB; no more than 1024
    block_offset: i64,

    /// Area size in MiB
    area_size: i64,

    /// Area location in MiB from the start of the drive
    area_location: i64,

    /// Sampling ratio numerator: blocks read per stride group
    #[arg(requires = "ratio_outer")]
    ratio_inner: Option<i64>,

    /// Sampling ratio denominator: blocks spanned per stride group
    #[arg(requires = "ratio_inner")]
    ratio_outer: Option<i64>,

    /// Benchmark this device path instead of mapping the drive index
    #[arg(long)]
    device: Option<PathBuf>,

    /// Open without O_DIRECT (needed to benchmark a regular file)
    #[arg(long)]
    buffered: bool,
}

fn main() {
    let args = Args::parse();

    match run_benchmark(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match e {
                Error::ConfigInvalid(_) => 1,
                _ => 2,
            };
            std::process::exit(code);
        }
    }
}

fn run_benchmark(args: &Args) -> Result<(), Error> {
    let params = RawParams {
        drive_index: args.drive,
        block_size_kib: args.block_size,
        block_offset_kib: args.block_offset,
        area_size_mib: args.area_size,
        area_location_mib: args.area_location,
        area_ratio: args.ratio_inner.zip(args.ratio_outer),
    };

    let config = params.validate()?;

    println!("physical drive : {}", config.drive_index);
    println!("block size     : {}", config.block_size_kib);
    println!("block offset   : {}", config.block_offset_kib);
    println!("area size      : {}", config.area_size_mib);
    println!("area location  : {}", config.area_location_mib);
    if args.ratio_inner.is_some() {
        println!("area ratio inner : {}", config.ratio_inner);
        println!("area ratio outer : {}", config.ratio_outer);
    }

    let device = match &args.device {
        Some(path) => PhysicalDrive::open_path(path, !args.buffered)?,
        None => {
            // Raw device nodes are root-only.
            sudo::escalate_if_needed().map_err(|e| {
                Error::DeviceOpenFailed(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("failed to escalate privileges: {}", e),
                ))
            })?;
            PhysicalDrive::open(config.drive_index)?
        }
    };

    let clock = PerfClock::new();
    let report = run(&config, device, &clock)?;

    print!("{}", report.render());
    Ok(())
}
