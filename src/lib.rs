//! This crate builds binary bitmaps, randomly generated
//! or from supplied cell values, and computes for every cell
//! the Manhattan distance to the nearest cell holding 1.
//! Every bitmap carries at least one 1-cell, so the
//! nearest-1 distance is defined everywhere.

pub mod bitmap;
pub mod distance_grid;

pub mod prelude {
    pub use crate::{
        compute_distance_grid,
        compute_u16_distance_grid,
        compute_u32_distance_grid
    };

    pub use crate::bitmap::{
        Bitmap, BitmapError, Cell, ValueSource, create_bitmaps
    };

    pub use crate::distance_grid::{
        DistanceGrid, DistanceStorage,
        U16DistanceStorage, U32DistanceStorage
    };
}


use prelude::*;

/// Compute the Manhattan distance grid with the specified distance storage of the specified bitmap.
pub fn compute_distance_grid<D: DistanceStorage>(bitmap: &Bitmap) -> Result<DistanceGrid<D>, BitmapError> {
    DistanceGrid::compute(bitmap)
}

/// Compute the Manhattan distance grid with a `u16` distance storage of the specified bitmap.
pub fn compute_u16_distance_grid(bitmap: &Bitmap) -> Result<DistanceGrid<U16DistanceStorage>, BitmapError> {
    compute_distance_grid(bitmap)
}

/// Compute the Manhattan distance grid with a `u32` distance storage of the specified bitmap.
pub fn compute_u32_distance_grid(bitmap: &Bitmap) -> Result<DistanceGrid<U32DistanceStorage>, BitmapError> {
    compute_distance_grid(bitmap)
}
