//! Waterfall history buffer.
//!
//! Retains the last `height` ingested rows in a fixed-height circular
//! store and linearizes them into a contiguous newest-first raster on
//! demand. Pushing stays O(width) regardless of height; assembly is
//! paid once per redraw, not once per ingested row, which decouples a
//! high-rate ingestion path from the fixed-rate presentation path.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Error pushing a row into the history buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaterfallError {
    /// The pushed row's length does not match the buffer width.
    ///
    /// This is a producer bug, not a transient fault; no retry is
    /// attempted and buffer state is left untouched.
    RowWidthMismatch {
        /// Buffer width in pixels
        expected: usize,
        /// Length of the rejected row
        got: usize,
    },
}

impl fmt::Display for WaterfallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowWidthMismatch { expected, got } => {
                write!(f, "row width mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

/// Fixed-height circular store of one-byte-per-pixel rows.
///
/// `head` always points at the next slot to be overwritten and `count`
/// tracks how many slots hold real data (bounded by `height`). A
/// resize is a hard reset: slots are freshly reallocated and zeroed,
/// never reflowed, which is what keeps the unfilled tail of
/// [`assemble_indices`](Self::assemble_indices) blank across repeated
/// resizes.
#[derive(Clone, Debug)]
pub struct WaterfallBuffer {
    width: usize,
    height: usize,
    rows: Vec<Vec<u8>>,
    head: usize,
    count: usize,
}

impl WaterfallBuffer {
    /// Allocate `height` zeroed row slots of `width` bytes each.
    ///
    /// `height` is floored at one slot so circular addressing is
    /// always well defined.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let height = height.max(1);
        Self {
            width,
            height,
            rows: (0..height).map(|_| vec![0u8; width]).collect(),
            head: 0,
            count: 0,
        }
    }

    /// Reallocate for new dimensions, discarding all history.
    ///
    /// A live stream refills the display within `height` rows; no
    /// attempt is made to preserve or reflow old rows.
    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    /// Store a row by taking ownership of its backing storage.
    ///
    /// No copy is made: the `Vec` moves into slot `head` and the
    /// evicted row's storage is dropped. A length mismatch leaves
    /// `head`, `count` and all slots unchanged.
    pub fn push_row(&mut self, pixels: Vec<u8>) -> Result<(), WaterfallError> {
        if pixels.len() != self.width {
            return Err(WaterfallError::RowWidthMismatch {
                expected: self.width,
                got: pixels.len(),
            });
        }
        self.rows[self.head] = pixels;
        self.head = (self.head + 1) % self.height;
        self.count = (self.count + 1).min(self.height);
        Ok(())
    }

    /// Linearize the history into a `width * height` raster, newest
    /// row first.
    ///
    /// Row `y = 0` is the most recently pushed row. Before `height`
    /// rows have ever been pushed, the unfilled remainder stays at the
    /// slots' construction-time zero fill rather than stale data.
    #[must_use]
    pub fn assemble_indices(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.width * self.height];
        for y in 0..self.height.min(self.count) {
            let src = (self.head + self.height - 1 - y) % self.height;
            out[y * self.width..(y + 1) * self.width].copy_from_slice(&self.rows[src]);
        }
        out
    }

    /// Buffer width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of slots holding pushed data.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}
