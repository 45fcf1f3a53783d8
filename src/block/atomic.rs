use crate::block::*;
use crate::util::*;

/// State common to every block.
///
/// Coordinates are local, the bounding box starts at the origin.
/// The outer `envelope_width` layers form the envelope, the rest is bulk.
pub struct AtomicBlock<const D: usize> {
    bounding_box: AABB<D>,
    envelope_width: i32,
    location: Coord<D>,
    revision: u64,
    internal_processors: InternalProcessors<D>,
}

impl<const D: usize> AtomicBlock<D> {
    #[track_caller]
    pub fn new(shape: Coord<D>) -> Self {
        assert!(
            shape.iter().all(|&n| n > 0),
            "block shape must be positive, got {:?}",
            shape.as_slice()
        );
        AtomicBlock {
            bounding_box: AABB::from_shape(shape),
            envelope_width: 0,
            location: Coord::zero(),
            revision: 0,
            internal_processors: InternalProcessors::default(),
        }
    }

    pub fn bounding_box(&self) -> AABB<D> {
        self.bounding_box
    }

    pub fn bounding_box_ref(&self) -> &AABB<D> {
        &self.bounding_box
    }

    /// Bounding box without the envelope.
    pub fn bulk_box(&self) -> AABB<D> {
        self.bounding_box.enlarge(-self.envelope_width)
    }

    pub fn envelope_width(&self) -> i32 {
        self.envelope_width
    }

    #[track_caller]
    pub fn set_envelope_width(&mut self, envelope_width: i32) {
        assert!(envelope_width >= 0, "negative envelope width");
        assert!(
            2 * envelope_width < self.bounding_box.min_size_len(),
            "envelope of width {} leaves no bulk in {}",
            envelope_width,
            self.bounding_box
        );
        self.envelope_width = envelope_width;
    }

    /// Position of the local origin in the global coordinate space.
    pub fn location(&self) -> Coord<D> {
        self.location
    }

    pub fn set_location(&mut self, location: Coord<D>) {
        self.location = location;
    }

    /// Cells a processor declaring `applies_to` may visit.
    pub fn domain_for(&self, applies_to: BlockDomain) -> AABB<D> {
        match applies_to {
            BlockDomain::Bulk => self.bulk_box(),
            BlockDomain::BulkAndEnvelope => self.bounding_box,
        }
    }

    /// Number of executed processors that declared this block as written.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn mark_written(&mut self) {
        self.revision += 1;
    }

    pub fn internal_processors(&self) -> &InternalProcessors<D> {
        &self.internal_processors
    }

    pub fn internal_processors_mut(&mut self) -> &mut InternalProcessors<D> {
        &mut self.internal_processors
    }
}
