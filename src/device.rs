//! Block device access.
//!
//! The engine talks to storage through the [`BlockDevice`] trait so the
//! timed loop is written once and tests can substitute an in-memory device.
//! [`PhysicalDrive`] is the real implementation: a raw Linux block device
//! opened with `O_DIRECT` (bypassing the page cache, which would otherwise
//! make a second run measure memory bandwidth) and hinted for sequential
//! access.

use crate::error::Error;

use aligned_vec::{AVec, RuntimeAlign};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};

/// Buffer alignment required for `O_DIRECT` reads.
pub const DIRECT_IO_ALIGNMENT: usize = 4096;

/// Minimal cursor-based read interface over a block device.
///
/// The handle is released by dropping the value; the engine owns its device
/// for the duration of one run, so release happens on every exit path.
pub trait BlockDevice {
    /// Move the read cursor to an absolute byte offset.
    fn seek(&mut self, byte_offset: u64) -> Result<(), Error>;

    /// Read exactly `buf.len()` bytes at the current cursor position.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}

/// A raw physical drive opened for unbuffered sequential reading.
#[derive(Debug)]
pub struct PhysicalDrive {
    path: PathBuf,
    file: File,
}

impl PhysicalDrive {
    /// Open physical drive `index` (`/dev/sda` for index 0, and so on)
    /// with `O_DIRECT`. Requires root.
    pub fn open(index: u32) -> Result<Self, Error> {
        Self::open_path(device_path_for_index(index), true)
    }

    /// Open an explicit device path.
    ///
    /// `direct` disables OS caching via `O_DIRECT`; turn it off to read a
    /// regular file (used by tests, and by filesystems that reject direct
    /// I/O). The sequential-access hint is applied either way.
    pub fn open_path(path: impl Into<PathBuf>, direct: bool) -> Result<Self, Error> {
        let path = path.into();
        let mut options = OpenOptions::new();
        options.read(true);
        if direct {
            options.custom_flags(libc::O_DIRECT);
        }
        let file = options.open(&path).map_err(Error::DeviceOpenFailed)?;

        // Advisory only; a filesystem that ignores it costs nothing.
        unsafe {
            libc::posix_fadvise(file.as_raw_fd(), 0, 0, libc::POSIX_FADV_SEQUENTIAL);
        }

        Ok(Self { path, file })
    }

    /// Path of the underlying device node or file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlockDevice for PhysicalDrive {
    fn seek(&mut self, byte_offset: u64) -> Result<(), Error> {
        self.file
            .seek(SeekFrom::Start(byte_offset))
            .map(|_| ())
            .map_err(Error::SeekFailed)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.file.read_exact(buf).map_err(Error::ReadFailed)
    }
}

/// Map a drive index to its Linux device node (`0` → `/dev/sda`,
/// `25` → `/dev/sdz`, `26` → `/dev/sdaa`).
pub fn device_path_for_index(index: u32) -> PathBuf {
    let mut suffix = String::new();
    let mut n = index as u64 + 1; // bijective base 26
    while n > 0 {
        n -= 1;
        suffix.insert(0, (b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    PathBuf::from(format!("/dev/sd{suffix}"))
}

/// Allocate a zeroed read buffer aligned for direct I/O.
pub fn alloc_read_buffer(len: usize) -> AVec<u8, RuntimeAlign> {
    let mut buf = AVec::with_capacity(DIRECT_IO_ALIGNMENT, len);
    for _ in 0..len {
        buf.push(0);
    }
    buf
}
