use crate::util::*;

/// Number of cells in a box with the given exclusive extents.
pub fn cell_count<const DIMENSION: usize>(
    exclusive_bound: &Coord<DIMENSION>,
) -> usize {
    let mut accumulator = 1;
    for d in exclusive_bound {
        debug_assert!(*d >= 0);
        accumulator *= *d as usize;
    }
    accumulator
}

/// Row-major linear index, the last dimension goes the fastest.
pub fn coord_to_linear<const GRID_DIMENSION: usize>(
    coord: &Coord<GRID_DIMENSION>,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> usize {
    let mut accumulator = 0;
    for d in 0..GRID_DIMENSION {
        debug_assert!(coord[d] >= 0);
        accumulator =
            accumulator * exclusive_bounds[d] as usize + coord[d] as usize;
    }
    accumulator
}

pub fn linear_to_coord<const GRID_DIMENSION: usize>(
    linear_index: usize,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> Coord<GRID_DIMENSION> {
    let mut result = Coord::zero();
    let mut index_accumulator = linear_index;
    for d in (0..GRID_DIMENSION).rev() {
        let extent = exclusive_bounds[d] as usize;
        result[d] = (index_accumulator % extent) as i32;
        index_accumulator /= extent;
    }
    result
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn cell_count_test() {
        assert_eq!(cell_count(&vector![5]), 5);
        assert_eq!(cell_count(&vector![5, 7, 9]), 5 * 7 * 9);
    }

    #[test]
    fn coord_to_linear_index_test() {
        {
            let index = vector![5, 7, 11];
            let bound = vector![20, 20, 20];
            assert_eq!(
                coord_to_linear(&index, &bound),
                5 * 20 * 20 + 7 * 20 + 11
            );
        }

        {
            let index = vector![5, 7];
            let bound = vector![20, 30];
            assert_eq!(coord_to_linear(&index, &bound), 5 * 30 + 7);
        }
    }

    #[test]
    fn linear_to_coord_test() {
        {
            let bound = vector![10, 10];
            assert_eq!(linear_to_coord(67, &bound), vector![6, 7]);
        }

        {
            let bound = vector![100];
            assert_eq!(linear_to_coord(67, &bound), vector![67]);
        }

        {
            let bound = vector![4, 3, 5];
            let c = vector![3, 1, 4];
            assert_eq!(linear_to_coord(coord_to_linear(&c, &bound), &bound), c);
        }
    }
}
