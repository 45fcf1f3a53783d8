//! Decomposition of a box into a bulk and its boundary features.
//!
//! Given a domain and a boundary width `w`, the bulk is the domain shrunk
//! by `w` on every side. The remaining shell is split into faces, edges
//! (3D only) and corners so that the sub-boxes tile the domain exactly.
//! Bounded functionals get one specialised invocation per sub-box.

mod region;

pub use region::*;

use crate::util::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSurface<const D: usize> {
    domain: AABB<D>,
    boundary_width: i32,
}

impl<const D: usize> BlockSurface<D> {
    /// `0 <= 2 * boundary_width <= domain.min_size_len()` is required.
    #[track_caller]
    pub fn new(domain: AABB<D>, boundary_width: i32) -> Self {
        assert!(D == 2 || D == 3, "surface decomposition is 2D or 3D only");
        assert!(domain.check_validity(), "inverted box bounds: {:?}", domain);
        assert!(boundary_width >= 0, "negative boundary width");
        assert!(
            2 * boundary_width <= domain.min_size_len(),
            "boundary width {} too large for {}",
            boundary_width,
            domain
        );
        BlockSurface {
            domain,
            boundary_width,
        }
    }

    pub fn domain(&self) -> AABB<D> {
        self.domain
    }

    pub fn boundary_width(&self) -> i32 {
        self.boundary_width
    }

    /// The domain shrunk by the boundary width, may be empty.
    pub fn bulk(&self) -> AABB<D> {
        self.region_box(&SurfaceRegion::Bulk)
    }

    pub fn face(&self, direction: usize, orientation: i32) -> AABB<D> {
        self.region_box(&SurfaceRegion::Face {
            direction,
            orientation,
        })
    }

    pub fn edge(&self, plane: usize, normal1: i32, normal2: i32) -> AABB<D> {
        self.region_box(&SurfaceRegion::Edge {
            plane,
            normal1,
            normal2,
        })
    }

    pub fn corner(&self, normal: Coord<D>) -> AABB<D> {
        self.region_box(&SurfaceRegion::Corner { normal })
    }

    /// Sub-box of a region. Along an axis where the normal is zero
    /// the box spans the bulk range, otherwise the `w` outermost layers.
    pub fn region_box(&self, region: &SurfaceRegion<D>) -> AABB<D> {
        let normal = region.normal();
        let w = self.boundary_width;
        let mut result = self.domain;
        for d in 0..D {
            let lo = self.domain.bounds[(d, 0)];
            let hi = self.domain.bounds[(d, 1)];
            match normal[d] {
                -1 => result.bounds[(d, 1)] = lo + w - 1,
                1 => result.bounds[(d, 0)] = hi - w + 1,
                _ => {
                    result.bounds[(d, 0)] = lo + w;
                    result.bounds[(d, 1)] = hi - w;
                }
            }
        }
        result
    }

    /// Every region of a `D` dimensional box, in a fixed order:
    /// bulk, faces, edges, corners.
    pub fn regions() -> Vec<SurfaceRegion<D>> {
        let mut regions = vec![SurfaceRegion::Bulk];
        for direction in 0..D {
            for orientation in [-1, 1] {
                regions.push(SurfaceRegion::Face {
                    direction,
                    orientation,
                });
            }
        }
        if D == 3 {
            for plane in 0..3 {
                for normal1 in [-1, 1] {
                    for normal2 in [-1, 1] {
                        regions.push(SurfaceRegion::Edge {
                            plane,
                            normal1,
                            normal2,
                        });
                    }
                }
            }
        }
        for mask in 0..(1usize << D) {
            let mut normal = Coord::zero();
            for d in 0..D {
                normal[d] = if (mask >> d) & 1 == 1 { 1 } else { -1 };
            }
            regions.push(SurfaceRegion::Corner { normal });
        }
        regions
    }

    /// Non-empty sub-boxes tiling the domain, each tagged with its region.
    pub fn decompose(&self) -> Vec<(SurfaceRegion<D>, AABB<D>)> {
        Self::regions()
            .into_iter()
            .map(|region| (region, self.region_box(&region)))
            .filter(|(_, sub_box)| sub_box.check_validity())
            .collect()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use std::collections::HashSet;

    // Every coordinate of the domain shows up in exactly one sub-box.
    fn check_tiling<const D: usize>(domain: AABB<D>, width: i32) {
        let surface = BlockSurface::new(domain, width);
        let mut seen = HashSet::new();
        for (region, sub_box) in surface.decompose() {
            assert!(domain.contains_aabb(&sub_box), "{} escapes", region);
            for c in sub_box.coord_iter() {
                assert!(seen.insert(c), "{:?} covered twice", c);
            }
        }
        assert_eq!(seen.len(), domain.n_cells());
    }

    #[test]
    fn region_counts_test() {
        assert_eq!(BlockSurface::<2>::regions().len(), 1 + 4 + 4);
        assert_eq!(BlockSurface::<3>::regions().len(), 1 + 6 + 12 + 8);

        let unique: HashSet<_> = BlockSurface::<3>::regions().into_iter().collect();
        assert_eq!(unique.len(), 27);
    }

    #[test]
    fn tiling_2d_test() {
        let domain = AABB::new(matrix![0, 9; 0, 9]);
        for width in 0..=5 {
            check_tiling(domain, width);
        }
        check_tiling(AABB::new(matrix![3, 7; -2, 10]), 1);
        check_tiling(AABB::new(matrix![3, 7; -2, 10]), 2);
        check_tiling(AABB::new(matrix![0, 1; 0, 1]), 1);
    }

    #[test]
    fn tiling_3d_test() {
        let domain = AABB::new(matrix![0, 6; 2, 9; -1, 4]);
        for width in 0..=3 {
            check_tiling(domain, width);
        }
    }

    #[test]
    fn sub_boxes_2d_test() {
        let surface = BlockSurface::new(AABB::new(matrix![0, 9; 0, 9]), 1);
        assert_eq!(surface.bulk(), AABB::new(matrix![1, 8; 1, 8]));
        assert_eq!(surface.face(0, -1), AABB::new(matrix![0, 0; 1, 8]));
        assert_eq!(surface.face(1, 1), AABB::new(matrix![1, 8; 9, 9]));
        assert_eq!(
            surface.corner(vector![1, -1]),
            AABB::new(matrix![9, 9; 0, 0])
        );
        assert_eq!(surface.decompose().len(), 9);
    }

    #[test]
    fn sub_boxes_3d_test() {
        let surface =
            BlockSurface::new(AABB::new(matrix![0, 9; 0, 9; 0, 9]), 2);
        assert_eq!(surface.bulk(), AABB::new(matrix![2, 7; 2, 7; 2, 7]));
        assert_eq!(
            surface.edge(2, -1, 1),
            AABB::new(matrix![0, 1; 8, 9; 2, 7])
        );
        assert_eq!(
            surface.face(1, -1),
            AABB::new(matrix![2, 7; 0, 1; 2, 7])
        );
        assert_eq!(surface.decompose().len(), 27);
    }

    #[test]
    fn zero_width_is_bulk_only_test() {
        let domain = AABB::new(matrix![0, 4; 0, 4]);
        let parts = BlockSurface::new(domain, 0).decompose();
        assert_eq!(parts, vec![(SurfaceRegion::Bulk, domain)]);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn oversized_width_test() {
        let _ = BlockSurface::new(AABB::new(matrix![0, 4; 0, 9]), 3);
    }
}
