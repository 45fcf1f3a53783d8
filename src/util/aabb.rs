use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) for coordinate types.
/// Each instance is inclusive of both corners.
/// This is the domain type handed to box processing functionals,
/// and it does the mapping between a linear buffer and coordinates.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const GRID_DIMENSION: usize> std::fmt::Display for AABB<GRID_DIMENSION> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for d in 0..GRID_DIMENSION {
            if d > 0 {
                write!(f, " x ")?;
            }
            write!(f, "{}..={}", self.bounds[(d, 0)], self.bounds[(d, 1)])?;
        }
        write!(f, "]")
    }
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    /// Create AABB from raw bounds.
    /// No validity check, empty boxes are allowed here.
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    /// Create AABB from corners, `min <= max` is required on every axis.
    #[track_caller]
    pub fn from_mm(min: Coord<DIMENSION>, max: Coord<DIMENSION>) -> Self {
        let result = AABB {
            bounds: Bounds::from_columns(&[min, max]),
        };
        assert!(result.check_validity(), "inverted box bounds: {:?}", result);
        result
    }

    /// Box covering `[0, shape - 1]` on every axis.
    #[track_caller]
    pub fn from_shape(shape: Coord<DIMENSION>) -> Self {
        Self::from_mm(Coord::zero(), shape.add_scalar(-1))
    }

    /// A box is its own bounding box.
    #[inline]
    pub fn bounding_box(&self) -> Self {
        *self
    }

    /// Moving min to the origin, returns the exclusive size in each direction
    /// i.e. [0, 9]  would have exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord<DIMENSION> {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Number of cells along axis `d`.
    #[inline]
    pub fn extent(&self, d: usize) -> i32 {
        self.bounds[(d, 1)] - self.bounds[(d, 0)] + 1
    }

    #[inline]
    pub fn nx(&self) -> i32 {
        self.extent(0)
    }

    #[inline]
    pub fn ny(&self) -> i32 {
        self.extent(1)
    }

    /// Only meaningful for 3D boxes.
    #[inline]
    pub fn nz(&self) -> i32 {
        self.extent(2)
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn n_cells(&self) -> usize {
        debug_assert!(self.check_validity());
        cell_count(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(&self, coord: &Coord<DIMENSION>) -> usize {
        coord_to_linear(&(coord - self.min()), &self.exclusive_bounds())
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> Coord<DIMENSION> {
        linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        for d in 0..DIMENSION {
            if coord[d] < self.bounds[(d, 0)] || coord[d] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Check whether another AABB is contained in the instance.
    pub fn contains_aabb(&self, other: &Self) -> bool {
        for d in 0..DIMENSION {
            if other.bounds[(d, 0)] < self.bounds[(d, 0)]
                || other.bounds[(d, 1)] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Overlap of two boxes, `None` when they share no cell.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let mut result = *self;
        for d in 0..DIMENSION {
            result.bounds[(d, 0)] = self.bounds[(d, 0)].max(other.bounds[(d, 0)]);
            result.bounds[(d, 1)] = self.bounds[(d, 1)].min(other.bounds[(d, 1)]);
        }
        result.check_validity().then_some(result)
    }

    /// Grow by `width` cells on every side, a negative width shrinks.
    /// The result may be empty.
    pub fn enlarge(&self, width: i32) -> Self {
        let mut result = *self;
        for d in 0..DIMENSION {
            result.bounds[(d, 0)] -= width;
            result.bounds[(d, 1)] += width;
        }
        result
    }

    /// Translate both corners by `delta`.
    pub fn shift(&self, delta: &Coord<DIMENSION>) -> Self {
        let mut result = *self;
        for d in 0..DIMENSION {
            result.bounds[(d, 0)] += delta[d];
            result.bounds[(d, 1)] += delta[d];
        }
        result
    }

    /// Find the coord within bound assuming periodic boundary conditions.
    /// Assumes that coords are no more than one box away!
    pub fn periodic_coord(&self, coord: &Coord<DIMENSION>) -> Coord<DIMENSION> {
        let mut result = Coord::zero();
        for d in 0..DIMENSION {
            let di_raw = coord[d];
            result[d] = if di_raw < self.bounds[(d, 0)] {
                (self.bounds[(d, 1)] + 1) - (self.bounds[(d, 0)] - di_raw)
            } else if di_raw > self.bounds[(d, 1)] {
                self.bounds[(d, 0)] + (di_raw - self.bounds[(d, 1)] - 1)
            } else {
                di_raw
            }
        }
        result
    }

    /// Return min corner.
    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }

    /// Return max corner
    pub fn max(&self) -> Coord<DIMENSION> {
        self.bounds.column(1).into()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        for d in 0..DIMENSION {
            if self.bounds[(d, 0)] > self.bounds[(d, 1)] {
                return false;
            }
        }
        true
    }

    /// Return iterator over contained coords
    /// in linear ordering.
    #[allow(clippy::needless_lifetimes)]
    pub fn coord_iter<'a>(
        &'a self,
    ) -> impl Iterator<Item = Coord<DIMENSION>> + use<'a, DIMENSION> {
        (0..self.n_cells()).map(|i| self.linear_to_coord(i))
    }

    /// Return the min of exclusive_bounds()
    pub fn min_size_len(&self) -> i32 {
        self.exclusive_bounds().min()
    }
}
