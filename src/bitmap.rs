
use rand::Rng;

/// One grid position with a binary value.
/// Coordinates are 1-based, matching the enumeration order of [`Bitmap::cells`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
    pub value: u8,
}

/// A rectangular grid of cells holding 0 or 1, flattened to a column-major
/// sequence (outer loop over columns, inner loop over rows).
/// Every bitmap contains at least one 1-cell: constructors force
/// cell (1,1) to 1 whenever generation or supplied input yields none.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Bitmap {
    width: usize,
    height: usize,

    /// Column-major cell values, one byte per cell, each 0 or 1.
    values: Vec<u8>,
}

/// Where the cell values of a new bitmap come from.
#[derive(Clone, Copy, Debug)]
pub enum ValueSource<'v> {
    /// Each cell is drawn independently and uniformly from {0, 1}.
    Random,

    /// Cells are consumed from the slice in column-major order,
    /// one bitmap's worth at a time. The caller is expected to have
    /// validated the values already; out-of-range bytes are still rejected.
    Supplied(&'v [u8]),
}

/// Reasons why bitmap construction or the distance transform may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitmapError {
    /// Count, width or height was zero.
    InvalidDimension {
        name: &'static str,
    },
    /// The supplied value sequence does not match the requested
    /// count × width × height.
    WrongValueCount {
        expected: usize,
        found: usize,
    },
    /// A supplied value was neither 0 nor 1.
    ValueOutOfRange {
        index: usize,
        value: u8,
    },
    /// A bitmap without any 1-cell reached the distance transform.
    NoMarkedCell,
}

impl std::fmt::Display for BitmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BitmapError::InvalidDimension { name } => {
                write!(f, "invalid dimension ({} must be at least 1)", name)
            }
            BitmapError::WrongValueCount { expected, found } => {
                write!(f, "wrong number of values ({} needed, {} supplied)", expected, found)
            }
            BitmapError::ValueOutOfRange { index, value } => {
                write!(f, "value {} at index {} is neither 0 nor 1", value, index)
            }
            BitmapError::NoMarkedCell => {
                write!(f, "bitmap contains no 1-cell")
            }
        }
    }
}

impl std::error::Error for BitmapError {}


/// Build `count` independent bitmaps of the same dimensions.
///
/// In [`ValueSource::Supplied`] mode the slice must hold exactly
/// `count * width * height` values; each bitmap consumes its own
/// `width * height` slice in order. In [`ValueSource::Random`] mode
/// the thread-local generator is used; call [`Bitmap::random`] with a
/// seeded generator instead if reproducibility is needed.
pub fn create_bitmaps(
    count: usize, width: usize, height: usize, source: ValueSource<'_>
) -> Result<Vec<Bitmap>, BitmapError> {
    if count == 0 {
        return Err(BitmapError::InvalidDimension { name: "count" });
    }

    check_dimensions(width, height)?;

    match source {
        ValueSource::Random => {
            let mut rng = rand::rng();
            Ok((0..count)
                .map(|_| Bitmap::random_unchecked(width, height, &mut rng))
                .collect())
        }

        ValueSource::Supplied(values) => {
            let cells_per_bitmap = width * height;
            let expected = count * cells_per_bitmap;

            if values.len() != expected {
                return Err(BitmapError::WrongValueCount { expected, found: values.len() });
            }

            check_values(values)?;

            Ok(values.chunks(cells_per_bitmap)
                .map(|chunk| Bitmap::from_values_unchecked(width, height, chunk))
                .collect())
        }
    }
}


impl Bitmap {

    /// Create a bitmap with every cell drawn uniformly from {0, 1}.
    pub fn random(width: usize, height: usize, rng: &mut impl Rng) -> Result<Self, BitmapError> {
        check_dimensions(width, height)?;
        Ok(Self::random_unchecked(width, height, rng))
    }

    /// Create a bitmap from a column-major slice of exactly
    /// `width * height` values, each 0 or 1.
    pub fn from_values(width: usize, height: usize, values: &[u8]) -> Result<Self, BitmapError> {
        check_dimensions(width, height)?;

        if values.len() != width * height {
            return Err(BitmapError::WrongValueCount {
                expected: width * height,
                found: values.len(),
            });
        }

        check_values(values)?;
        Ok(Self::from_values_unchecked(width, height, values))
    }

    fn random_unchecked(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        let values = (0..width * height)
            .map(|_| rng.random::<bool>() as u8)
            .collect();

        Bitmap { width, height, values }.repaired()
    }

    fn from_values_unchecked(width: usize, height: usize, values: &[u8]) -> Self {
        Bitmap { width, height, values: values.to_vec() }.repaired()
    }

    /// The single permitted mutation: if no cell is 1,
    /// force cell (1,1) so the distance transform is defined.
    fn repaired(mut self) -> Self {
        if !self.values.contains(&1) {
            self.values[0] = 1;
        }

        self
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The flat column-major cell values.
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Value of the cell at the 1-based coordinate.
    #[inline]
    pub fn value(&self, column: usize, row: usize) -> u8 {
        self.values[self.flatten_index(column, row)]
    }

    /// True if the cell at the 1-based coordinate holds 1.
    #[inline]
    pub fn is_marked(&self, column: usize, row: usize) -> bool {
        self.value(column, row) == 1
    }

    /// True if any cell holds 1. Holds for every constructed bitmap.
    pub fn has_marked_cell(&self) -> bool {
        self.values.contains(&1)
    }

    /// Enumerate all cells in column-major order with 1-based coordinates.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let height = self.height;

        self.values.iter().enumerate().map(move |(index, &value)| Cell {
            column: index / height + 1,
            row: index % height + 1,
            value,
        })
    }

    #[inline]
    pub fn flatten_index(&self, column: usize, row: usize) -> usize {
        self.height * (column - 1) + (row - 1)
    }

    /// Bypasses the repair step so the transform's defensive
    /// check can be exercised. Unreachable through the public constructors.
    #[cfg(test)]
    pub(crate) fn all_zero_for_tests(width: usize, height: usize) -> Self {
        Bitmap { width, height, values: vec![0; width * height] }
    }
}


fn check_dimensions(width: usize, height: usize) -> Result<(), BitmapError> {
    if width == 0 {
        Err(BitmapError::InvalidDimension { name: "width" })
    }
    else if height == 0 {
        Err(BitmapError::InvalidDimension { name: "height" })
    }
    else {
        Ok(())
    }
}

fn check_values(values: &[u8]) -> Result<(), BitmapError> {
    match values.iter().position(|&value| value > 1) {
        Some(index) => Err(BitmapError::ValueOutOfRange { index, value: values[index] }),
        None => Ok(()),
    }
}
