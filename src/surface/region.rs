use crate::error::DispatchViolation;
use crate::util::*;

/// One geometric feature of a box decomposed by `BlockSurface`.
///
/// Every region carries enough to rebuild its outward normal, a vector
/// with components in {-1, 0, 1}. The number of non-zero components is
/// the codimension of the region: 0 for the bulk, `D` for a corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceRegion<const D: usize> {
    Bulk,
    /// Codimension one, an edge of a 2D box or a plane of a 3D box.
    Face { direction: usize, orientation: i32 },
    /// Codimension two in 3D. `plane` is the axis the edge runs along,
    /// `normal1` and `normal2` the orientations along axes
    /// `(plane + 1) % 3` and `(plane + 2) % 3`.
    Edge {
        plane: usize,
        normal1: i32,
        normal2: i32,
    },
    Corner { normal: Coord<D> },
}

impl<const D: usize> SurfaceRegion<D> {
    /// Classify an outward normal.
    #[track_caller]
    pub fn from_normal(normal: &Coord<D>) -> Self {
        debug_assert!(normal.iter().all(|n| (-1..=1).contains(n)));
        let active: Vec<usize> = (0..D).filter(|&d| normal[d] != 0).collect();
        match active.len() {
            0 => SurfaceRegion::Bulk,
            n if n == D => SurfaceRegion::Corner { normal: *normal },
            1 => SurfaceRegion::Face {
                direction: active[0],
                orientation: normal[active[0]],
            },
            2 if D == 3 => {
                let plane = 3 - active[0] - active[1];
                SurfaceRegion::Edge {
                    plane,
                    normal1: normal[(plane + 1) % 3],
                    normal2: normal[(plane + 2) % 3],
                }
            }
            _ => DispatchViolation::UnhandledRegion {
                region: format!("{:?}", normal.as_slice()),
            }
            .raise(),
        }
    }

    /// Outward normal of the region.
    pub fn normal(&self) -> Coord<D> {
        let mut normal = Coord::zero();
        match *self {
            SurfaceRegion::Bulk => {}
            SurfaceRegion::Face {
                direction,
                orientation,
            } => normal[direction] = orientation,
            SurfaceRegion::Edge {
                plane,
                normal1,
                normal2,
            } => {
                assert_eq!(D, 3, "edge regions only exist in 3D");
                normal[(plane + 1) % 3] = normal1;
                normal[(plane + 2) % 3] = normal2;
            }
            SurfaceRegion::Corner { normal: n } => normal = n,
        }
        normal
    }

    pub fn codimension(&self) -> usize {
        match self {
            SurfaceRegion::Bulk => 0,
            SurfaceRegion::Face { .. } => 1,
            SurfaceRegion::Edge { .. } => 2,
            SurfaceRegion::Corner { .. } => D,
        }
    }
}

impl<const D: usize> std::fmt::Display for SurfaceRegion<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceRegion::Bulk => write!(f, "bulk"),
            SurfaceRegion::Face {
                direction,
                orientation,
            } => write!(f, "face(direction={direction}, orientation={orientation})"),
            SurfaceRegion::Edge {
                plane,
                normal1,
                normal2,
            } => write!(f, "edge(plane={plane}, normals=({normal1}, {normal2}))"),
            SurfaceRegion::Corner { normal } => {
                write!(f, "corner{:?}", normal.as_slice())
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn classify_2d_test() {
        assert_eq!(
            SurfaceRegion::<2>::from_normal(&vector![0, 0]),
            SurfaceRegion::Bulk
        );
        assert_eq!(
            SurfaceRegion::<2>::from_normal(&vector![0, -1]),
            SurfaceRegion::Face {
                direction: 1,
                orientation: -1
            }
        );
        assert_eq!(
            SurfaceRegion::<2>::from_normal(&vector![1, -1]),
            SurfaceRegion::Corner {
                normal: vector![1, -1]
            }
        );
    }

    #[test]
    fn classify_3d_edge_test() {
        // Runs along z, low in x, high in y.
        let region = SurfaceRegion::<3>::from_normal(&vector![-1, 1, 0]);
        assert_eq!(
            region,
            SurfaceRegion::Edge {
                plane: 2,
                normal1: -1,
                normal2: 1
            }
        );
        assert_eq!(region.normal(), vector![-1, 1, 0]);
        assert_eq!(region.codimension(), 2);

        // Runs along x: normal1 is y, normal2 is z.
        let region = SurfaceRegion::<3>::from_normal(&vector![0, 1, -1]);
        assert_eq!(
            region,
            SurfaceRegion::Edge {
                plane: 0,
                normal1: 1,
                normal2: -1
            }
        );
    }

    #[test]
    fn display_test() {
        let region = SurfaceRegion::<2>::Face {
            direction: 0,
            orientation: 1,
        };
        assert_eq!(region.to_string(), "face(direction=0, orientation=1)");
    }
}
