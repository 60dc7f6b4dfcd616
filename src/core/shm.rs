//! Shared-memory pixel buffers.
//!
//! Each rectangle gets one anonymous file in the system temp directory,
//! unlinked before any pixel is written, sized to exactly height * stride
//! bytes and mapped shared. The open descriptor and the mapping keep the
//! storage alive for as long as the compositor may read from it.

use std::fs::File;

use memmap2::MmapMut;

use crate::core::errors::{DemoError, Result};

/// Bytes per ARGB8888 pixel.
pub const BYTES_PER_PIXEL: i32 = 4;

/// A CPU-filled pixel buffer shared with the compositor.
pub struct ShmBuffer {
    file: File,
    map: MmapMut,
    width: i32,
    height: i32,
    stride: i32,
}

impl ShmBuffer {
    /// Allocate a `width` x `height` buffer and fill every pixel with
    /// `color` (ARGB8888, native-endian words).
    pub fn new(width: i32, height: i32, color: u32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(DemoError::InvalidSize { width, height });
        }

        let stride = width * BYTES_PER_PIXEL;
        let size = height as u64 * stride as u64;

        // tempfile() picks an unpredictable name under the temp dir and
        // unlinks it before returning, so no name ever persists.
        let file = tempfile::tempfile().map_err(|e| DemoError::Shm {
            what: "create backing file for",
            source: e,
        })?;
        file.set_len(size).map_err(|e| DemoError::Shm {
            what: "allocate",
            source: e,
        })?;

        let map = unsafe { MmapMut::map_mut(&file) }.map_err(|e| DemoError::Shm {
            what: "map",
            source: e,
        })?;

        let mut buffer = Self {
            file,
            map,
            width,
            height,
            stride,
        };
        buffer.fill(color);

        tracing::debug!("allocated {}x{} SHM buffer ({} bytes)", width, height, size);
        Ok(buffer)
    }

    /// Overwrite every pixel with a single ARGB8888 value.
    pub fn fill(&mut self, color: u32) {
        let word = color.to_ne_bytes();
        for pixel in self.map.chunks_exact_mut(BYTES_PER_PIXEL as usize) {
            pixel.copy_from_slice(&word);
        }
    }

    /// Read back one pixel, row-major.
    pub fn pixel(&self, x: i32, y: i32) -> u32 {
        let offset = (y * self.stride + x * BYTES_PER_PIXEL) as usize;
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.map[offset..offset + 4]);
        u32::from_ne_bytes(word)
    }

    /// The backing file, still open after its name was removed.
    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// Total size of the backing storage in bytes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_matches_dimensions() {
        let buffer = ShmBuffer::new(200, 200, 0xff0000ff).unwrap();
        assert_eq!(buffer.len(), 200 * 200 * 4);
        assert_eq!(buffer.stride(), 800);
        assert_eq!(buffer.width(), 200);
        assert_eq!(buffer.height(), 200);
    }

    #[test]
    fn test_buffer_filled_with_requested_color() {
        let buffer = ShmBuffer::new(16, 8, 0xffff0000).unwrap();
        for y in 0..8 {
            for x in 0..16 {
                assert_eq!(buffer.pixel(x, y), 0xffff0000);
            }
        }
    }

    #[test]
    fn test_refill_changes_every_pixel() {
        let mut buffer = ShmBuffer::new(4, 4, 0xff0000ff).unwrap();
        buffer.fill(0xffffff00);
        assert_eq!(buffer.pixel(0, 0), 0xffffff00);
        assert_eq!(buffer.pixel(3, 3), 0xffffff00);
    }

    #[test]
    fn test_storage_survives_unlink() {
        // The name is gone by the time new() returns; reads and writes
        // through the mapping must still work.
        let mut buffer = ShmBuffer::new(2, 2, 0xff00ff00).unwrap();
        assert_eq!(buffer.pixel(1, 1), 0xff00ff00);
        buffer.fill(0xff0000ff);
        assert_eq!(buffer.pixel(0, 1), 0xff0000ff);
        assert_eq!(buffer.file().metadata().unwrap().len(), 16);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(matches!(
            ShmBuffer::new(0, 10, 0),
            Err(DemoError::InvalidSize { .. })
        ));
        assert!(matches!(
            ShmBuffer::new(10, -1, 0),
            Err(DemoError::InvalidSize { .. })
        ));
    }
}
