
use crate::bitmap::{Bitmap, BitmapError};


/// Sentinel for cells no source distance has been propagated to yet.
const UNREACHED: u32 = u32::MAX;

/// Per-cell minimum Manhattan distance to the nearest 1-cell of a bitmap,
/// stored in the same column-major order as the source bitmap.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DistanceGrid<D: DistanceStorage> {
    pub width: usize,
    pub height: usize,
    pub distances: D,
}

/// Needs half the storage per cell. Distances beyond `u16::MAX` saturate,
/// so prefer this only when `width + height` stays below `u16::MAX`.
pub type U16DistanceStorage = Vec<u16>;

/// Stores every reachable Manhattan distance exactly.
pub type U32DistanceStorage = Vec<u32>;

pub trait DistanceStorage {
    fn new(length: usize) -> Self;

    #[inline]
    fn get(&self, index: usize) -> u32;

    #[inline]
    fn set(&mut self, index: usize, distance: u32);
}



impl<D> DistanceGrid<D> where D: DistanceStorage {

    /// Computes the Manhattan distance from every cell of the bitmap to its
    /// nearest 1-cell. The result is exact: it equals the minimum over all
    /// 1-cells of `|Δcolumn| + |Δrow|`, with 0 at the 1-cells themselves.
    ///
    /// Runs in two relaxation sweeps over the grid instead of comparing
    /// every cell against every source, which is linear in the
    /// number of cells and exact for the L1 metric.
    pub fn compute(bitmap: &Bitmap) -> Result<Self, BitmapError> {
        if !bitmap.has_marked_cell() {
            return Err(BitmapError::NoMarkedCell);
        }

        let width = bitmap.width();
        let height = bitmap.height();

        let mut grid = DistanceGrid {
            width, height,
            distances: D::new(width * height),
        };

        // every 1-cell is its own nearest source
        for column in 1..=width {
            for row in 1..=height {
                if bitmap.is_marked(column, row) {
                    grid.set_distance(column, row, 0);
                }
            }
        }

        // forward sweep: relax against the neighbours already visited,
        // one column to the left and one row above
        for column in 1..=width {
            for row in 1..=height {
                let mut distance = grid.distance(column, row);

                if column > 1 {
                    grid.relax(column - 1, row, &mut distance);
                }

                if row > 1 {
                    grid.relax(column, row - 1, &mut distance);
                }

                grid.set_distance(column, row, distance);
            }
        }

        // backward sweep over the remaining two directions.
        // Similar to the first sweep, but only writes conditionally,
        // as most cells are already final after the forward pass
        for column in (1..=width).rev() {
            for row in (1..=height).rev() {
                let mut distance = grid.distance(column, row);

                let right = column < width && grid.relax(column + 1, row, &mut distance);
                let below = row < height && grid.relax(column, row + 1, &mut distance);

                if right || below {
                    grid.set_distance(column, row, distance);
                }
            }
        }

        Ok(grid)
    }

    /// Shrink the candidate distance if routing through the
    /// neighbour cell is shorter. Returns true on improvement.
    #[inline(always)]
    fn relax(&self, neighbour_column: usize, neighbour_row: usize, own_distance: &mut u32) -> bool {
        let through_neighbour = self
            .distance(neighbour_column, neighbour_row)
            .saturating_add(1);

        if through_neighbour < *own_distance {
            *own_distance = through_neighbour;
            true
        }
        else {
            false
        }
    }

    /// Distance of the cell at the 1-based coordinate.
    #[inline(always)]
    pub fn distance(&self, column: usize, row: usize) -> u32 {
        self.distances.get(self.flatten_index(column, row))
    }

    #[inline(always)]
    fn set_distance(&mut self, column: usize, row: usize, distance: u32) {
        let index = self.flatten_index(column, row);
        self.distances.set(index, distance);
    }

    #[inline]
    pub fn flatten_index(&self, column: usize, row: usize) -> usize {
        self.height * (column - 1) + (row - 1)
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The distances as a flat column-major vector,
    /// independent of the storage the grid was computed with.
    pub fn to_vec(&self) -> Vec<u32> {
        (0..self.len()).map(|index| self.distances.get(index)).collect()
    }
}


impl DistanceStorage for U16DistanceStorage {
    fn new(length: usize) -> Self {
        vec![u16::MAX; length]
    }

    #[inline]
    fn get(&self, index: usize) -> u32 {
        match self[index] {
            u16::MAX => UNREACHED,
            distance => distance as u32,
        }
    }

    #[inline]
    fn set(&mut self, index: usize, distance: u32) {
        self[index] = distance.min(u16::MAX as u32) as u16
    }
}

impl DistanceStorage for U32DistanceStorage {
    fn new(length: usize) -> Self {
        vec![UNREACHED; length]
    }

    #[inline]
    fn get(&self, index: usize) -> u32 {
        self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, distance: u32) {
        self[index] = distance
    }
}
