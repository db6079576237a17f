//! World configuration and fail-fast validation.
//!
//! The simulation core has no recoverable runtime errors — every runtime
//! condition degrades to a safe no-op.  The only thing that can fail is
//! construction, so all parameter checking happens here, once, before any
//! state is built.

use crate::{CoreError, CoreResult};

/// Top-level configuration for one simulation instance.
///
/// The street is a centered band of `lane_count` columns; everything outside
/// it is sidewalk.  `seed` makes runs reproducible: the same configuration
/// always produces the same run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Number of cars placed at the bottom row during initialization.
    pub vehicle_count: u32,

    /// Number of street columns, centered in the grid width.
    pub lane_count: u32,

    /// Grid width in cells.  Coordinates wrap at the edges.
    pub grid_width: u32,

    /// Grid height in cells.  Coordinates wrap at the edges.
    pub grid_height: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl WorldConfig {
    /// Check every construction-time invariant.
    ///
    /// Invalid parameters must fail here rather than produce undefined
    /// street bounds later.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(CoreError::Config(format!(
                "grid dimensions must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.lane_count == 0 {
            return Err(CoreError::Config("lane_count must be at least 1".into()));
        }
        if self.lane_count > self.grid_width {
            return Err(CoreError::Config(format!(
                "lane_count {} exceeds grid_width {}",
                self.lane_count, self.grid_width
            )));
        }
        Ok(())
    }

    /// First street column (inclusive) of the centered street band.
    #[inline]
    pub fn street_start(&self) -> u32 {
        (self.grid_width - self.lane_count) / 2
    }

    /// One past the last street column (exclusive).
    #[inline]
    pub fn street_end(&self) -> u32 {
        self.street_start() + self.lane_count
    }
}
