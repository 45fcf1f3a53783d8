use crate::block::*;
use crate::error::DispatchViolation;
use crate::functional::*;
use crate::statistics::BlockStatistics;
use crate::surface::SurfaceRegion;
use crate::util::*;

/// Functional with one behaviour per surface region.
///
/// The dispatcher decomposes the domain with `BlockSurface` and runs every
/// sub-box through [`RegionFunctional`], which forwards to the method of
/// its region. `process_edge_generic` is only reached in 3D.
pub trait BoundedBoxProcessingFunctional<const D: usize> {
    fn process_bulk_generic(
        &mut self,
        domain: AABB<D>,
        blocks: &mut [BlockRef<'_, D>],
    );

    fn process_face_generic(
        &mut self,
        direction: usize,
        orientation: i32,
        domain: AABB<D>,
        blocks: &mut [BlockRef<'_, D>],
    );

    fn process_edge_generic(
        &mut self,
        plane: usize,
        normal1: i32,
        normal2: i32,
        _domain: AABB<D>,
        _blocks: &mut [BlockRef<'_, D>],
    ) {
        DispatchViolation::UnhandledRegion {
            region: SurfaceRegion::<D>::Edge {
                plane,
                normal1,
                normal2,
            }
            .to_string(),
        }
        .raise()
    }

    fn process_corner_generic(
        &mut self,
        normal: &Coord<D>,
        domain: AABB<D>,
        blocks: &mut [BlockRef<'_, D>],
    );

    fn clone_bounded(&self) -> Box<dyn BoundedBoxProcessingFunctional<D>>;

    fn applies_to(&self) -> BlockDomain {
        BlockDomain::Bulk
    }

    fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

    fn modification_pattern(&self, is_written: &mut [bool]) {
        is_written.fill(true);
    }

    /// Ordinary functional running this one's `region` behaviour.
    fn region_processor(
        &self,
        region: SurfaceRegion<D>,
    ) -> Box<dyn BoxProcessingFunctional<D>> {
        Box::new(RegionFunctional {
            functional: self.clone_bounded(),
            region,
        })
    }

    fn bulk_processor(&self) -> Box<dyn BoxProcessingFunctional<D>> {
        self.region_processor(SurfaceRegion::Bulk)
    }

    fn face_processor(
        &self,
        direction: usize,
        orientation: i32,
    ) -> Box<dyn BoxProcessingFunctional<D>> {
        self.region_processor(SurfaceRegion::Face {
            direction,
            orientation,
        })
    }

    fn edge_processor(
        &self,
        plane: usize,
        normal1: i32,
        normal2: i32,
    ) -> Box<dyn BoxProcessingFunctional<D>> {
        self.region_processor(SurfaceRegion::Edge {
            plane,
            normal1,
            normal2,
        })
    }

    fn corner_processor(
        &self,
        normal: Coord<D>,
    ) -> Box<dyn BoxProcessingFunctional<D>> {
        self.region_processor(SurfaceRegion::Corner { normal })
    }
}

/// Bounded functional owning a statistics accumulator. Each region
/// processor gets its own copy, the dispatcher combines them afterwards.
pub trait BoundedReductiveBoxProcessingFunctional<const D: usize> {
    fn process_bulk_generic(
        &mut self,
        domain: AABB<D>,
        blocks: &mut [BlockRef<'_, D>],
    );

    fn process_face_generic(
        &mut self,
        direction: usize,
        orientation: i32,
        domain: AABB<D>,
        blocks: &mut [BlockRef<'_, D>],
    );

    fn process_edge_generic(
        &mut self,
        plane: usize,
        normal1: i32,
        normal2: i32,
        _domain: AABB<D>,
        _blocks: &mut [BlockRef<'_, D>],
    ) {
        DispatchViolation::UnhandledRegion {
            region: SurfaceRegion::<D>::Edge {
                plane,
                normal1,
                normal2,
            }
            .to_string(),
        }
        .raise()
    }

    fn process_corner_generic(
        &mut self,
        normal: &Coord<D>,
        domain: AABB<D>,
        blocks: &mut [BlockRef<'_, D>],
    );

    fn clone_bounded(
        &self,
    ) -> Box<dyn BoundedReductiveBoxProcessingFunctional<D>>;

    fn statistics(&self) -> &BlockStatistics;

    fn statistics_mut(&mut self) -> &mut BlockStatistics;

    fn applies_to(&self) -> BlockDomain {
        BlockDomain::Bulk
    }

    fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

    fn modification_pattern(&self, is_written: &mut [bool]) {
        is_written.fill(false);
    }

    fn region_processor(
        &self,
        region: SurfaceRegion<D>,
    ) -> Box<dyn ReductiveBoxProcessingFunctional<D>> {
        Box::new(ReductiveRegionFunctional {
            functional: self.clone_bounded(),
            region,
        })
    }

    fn bulk_processor(&self) -> Box<dyn ReductiveBoxProcessingFunctional<D>> {
        self.region_processor(SurfaceRegion::Bulk)
    }

    fn face_processor(
        &self,
        direction: usize,
        orientation: i32,
    ) -> Box<dyn ReductiveBoxProcessingFunctional<D>> {
        self.region_processor(SurfaceRegion::Face {
            direction,
            orientation,
        })
    }

    fn edge_processor(
        &self,
        plane: usize,
        normal1: i32,
        normal2: i32,
    ) -> Box<dyn ReductiveBoxProcessingFunctional<D>> {
        self.region_processor(SurfaceRegion::Edge {
            plane,
            normal1,
            normal2,
        })
    }

    fn corner_processor(
        &self,
        normal: Coord<D>,
    ) -> Box<dyn ReductiveBoxProcessingFunctional<D>> {
        self.region_processor(SurfaceRegion::Corner { normal })
    }
}

/// A bounded functional pinned to one surface region.
pub struct RegionFunctional<const D: usize> {
    functional: Box<dyn BoundedBoxProcessingFunctional<D>>,
    region: SurfaceRegion<D>,
}

impl<const D: usize> RegionFunctional<D> {
    pub fn region(&self) -> SurfaceRegion<D> {
        self.region
    }
}

impl<const D: usize> BoxProcessingFunctional<D> for RegionFunctional<D> {
    fn process_generic_blocks(
        &mut self,
        domain: AABB<D>,
        blocks: &mut [BlockRef<'_, D>],
    ) {
        match self.region {
            SurfaceRegion::Bulk => {
                self.functional.process_bulk_generic(domain, blocks)
            }
            SurfaceRegion::Face {
                direction,
                orientation,
            } => self.functional.process_face_generic(
                direction,
                orientation,
                domain,
                blocks,
            ),
            SurfaceRegion::Edge {
                plane,
                normal1,
                normal2,
            } => self.functional.process_edge_generic(
                plane, normal1, normal2, domain, blocks,
            ),
            SurfaceRegion::Corner { normal } => {
                self.functional.process_corner_generic(&normal, domain, blocks)
            }
        }
    }

    fn clone_functional(&self) -> Box<dyn BoxProcessingFunctional<D>> {
        Box::new(RegionFunctional {
            functional: self.functional.clone_bounded(),
            region: self.region,
        })
    }

    fn applies_to(&self) -> BlockDomain {
        self.functional.applies_to()
    }

    fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
        self.functional.rescale(dx_scale, dt_scale);
    }

    fn modification_pattern(&self, is_written: &mut [bool]) {
        self.functional.modification_pattern(is_written);
    }
}

/// Reductive counterpart of [`RegionFunctional`].
pub struct ReductiveRegionFunctional<const D: usize> {
    functional: Box<dyn BoundedReductiveBoxProcessingFunctional<D>>,
    region: SurfaceRegion<D>,
}

impl<const D: usize> ReductiveRegionFunctional<D> {
    pub fn region(&self) -> SurfaceRegion<D> {
        self.region
    }
}

impl<const D: usize> ReductiveBoxProcessingFunctional<D>
    for ReductiveRegionFunctional<D>
{
    fn process_generic_blocks(
        &mut self,
        domain: AABB<D>,
        blocks: &mut [BlockRef<'_, D>],
    ) {
        match self.region {
            SurfaceRegion::Bulk => {
                self.functional.process_bulk_generic(domain, blocks)
            }
            SurfaceRegion::Face {
                direction,
                orientation,
            } => self.functional.process_face_generic(
                direction,
                orientation,
                domain,
                blocks,
            ),
            SurfaceRegion::Edge {
                plane,
                normal1,
                normal2,
            } => self.functional.process_edge_generic(
                plane, normal1, normal2, domain, blocks,
            ),
            SurfaceRegion::Corner { normal } => {
                self.functional.process_corner_generic(&normal, domain, blocks)
            }
        }
    }

    fn clone_functional(&self) -> Box<dyn ReductiveBoxProcessingFunctional<D>> {
        Box::new(ReductiveRegionFunctional {
            functional: self.functional.clone_bounded(),
            region: self.region,
        })
    }

    fn statistics(&self) -> &BlockStatistics {
        self.functional.statistics()
    }

    fn statistics_mut(&mut self) -> &mut BlockStatistics {
        self.functional.statistics_mut()
    }

    fn applies_to(&self) -> BlockDomain {
        self.functional.applies_to()
    }

    fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
        self.functional.rescale(dx_scale, dt_scale);
    }

    fn modification_pattern(&self, is_written: &mut [bool]) {
        self.functional.modification_pattern(is_written);
    }
}
