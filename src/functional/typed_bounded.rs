//! Bounded functionals with typed block arguments.

bounded_box_functional!(
    /// Per region behaviour on one lattice, what boundary conditions use.
    BoundedBoxProcessingFunctionalL, TypedBoundedL,
    apply_bounded_processing_functional_l,
    (lattice: BlockLattice => lattice)
);

bounded_box_functional!(
    BoundedBoxProcessingFunctionalS, TypedBoundedS,
    apply_bounded_processing_functional_s,
    (field: ScalarField => scalar_field)
);

bounded_box_functional!(
    BoundedBoxProcessingFunctionalT, TypedBoundedT,
    apply_bounded_processing_functional_t,
    (field: TensorField => tensor_field)
);

bounded_box_functional!(
    BoundedBoxProcessingFunctionalLL, TypedBoundedLL,
    apply_bounded_processing_functional_ll,
    (lattice1: BlockLattice => lattice, lattice2: BlockLattice => lattice)
);

bounded_box_functional!(
    BoundedBoxProcessingFunctionalLS, TypedBoundedLS,
    apply_bounded_processing_functional_ls,
    (lattice: BlockLattice => lattice, field: ScalarField => scalar_field)
);

bounded_box_functional!(
    BoundedBoxProcessingFunctionalSS, TypedBoundedSS,
    apply_bounded_processing_functional_ss,
    (field1: ScalarField => scalar_field, field2: ScalarField => scalar_field)
);

bounded_box_functional!(
    BoundedBoxProcessingFunctionalLN, TypedBoundedLN,
    apply_bounded_processing_functional_ln,
    [lattices: BlockLattice => lattice]
);

bounded_box_functional!(
    BoundedBoxProcessingFunctionalSN, TypedBoundedSN,
    apply_bounded_processing_functional_sn,
    [fields: ScalarField => scalar_field]
);

bounded_reductive_box_functional!(
    BoundedReductiveBoxProcessingFunctionalL, TypedBoundedReductiveL,
    apply_bounded_reductive_processing_functional_l,
    (lattice: BlockLattice => lattice)
);

bounded_reductive_box_functional!(
    /// Per region reduction over one scalar field, for example a
    /// trapezoidal integral.
    BoundedReductiveBoxProcessingFunctionalS, TypedBoundedReductiveS,
    apply_bounded_reductive_processing_functional_s,
    (field: ScalarField => scalar_field)
);

bounded_reductive_box_functional!(
    BoundedReductiveBoxProcessingFunctionalLS, TypedBoundedReductiveLS,
    apply_bounded_reductive_processing_functional_ls,
    (lattice: BlockLattice => lattice, field: ScalarField => scalar_field)
);

bounded_reductive_box_functional!(
    BoundedReductiveBoxProcessingFunctionalSS, TypedBoundedReductiveSS,
    apply_bounded_reductive_processing_functional_ss,
    (field1: ScalarField => scalar_field, field2: ScalarField => scalar_field)
);

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::block::*;
    use crate::util::*;

    /// Writes the codimension of each cell's region.
    #[derive(Clone)]
    struct RegionTag;

    impl<const D: usize> BoundedBoxProcessingFunctionalS<D> for RegionTag {
        fn process_bulk(&mut self, domain: AABB<D>, field: &mut ScalarField<D>) {
            domain.coord_iter().for_each(|c| field.set(&c, 0.0));
        }

        fn process_face(
            &mut self,
            _direction: usize,
            _orientation: i32,
            domain: AABB<D>,
            field: &mut ScalarField<D>,
        ) {
            domain.coord_iter().for_each(|c| field.set(&c, 1.0));
        }

        fn process_edge(
            &mut self,
            _plane: usize,
            _normal1: i32,
            _normal2: i32,
            domain: AABB<D>,
            field: &mut ScalarField<D>,
        ) {
            domain.coord_iter().for_each(|c| field.set(&c, 2.0));
        }

        fn process_corner(
            &mut self,
            _normal: &Coord<D>,
            domain: AABB<D>,
            field: &mut ScalarField<D>,
        ) {
            domain.coord_iter().for_each(|c| field.set(&c, D as f64));
        }
    }

    #[test]
    fn region_tag_2d_test() {
        let mut field = ScalarField::new(vector![5, 4]);
        field.fill(-1.0);
        apply_bounded_processing_functional_s(
            RegionTag,
            AABB::new(matrix![0, 4; 0, 3]),
            &mut field,
            1,
        );
        assert_eq!(field.get(&vector![2, 2]), 0.0);
        assert_eq!(field.get(&vector![0, 2]), 1.0);
        assert_eq!(field.get(&vector![3, 3]), 1.0);
        assert_eq!(field.get(&vector![4, 0]), 2.0);
        // 6 bulk, 10 face, 4 corner cells.
        assert_eq!(field.data().iter().sum::<f64>(), 10.0 + 4.0 * 2.0);
    }

    #[test]
    fn region_tag_3d_test() {
        let mut field = ScalarField::new(vector![4, 4, 4]);
        apply_bounded_processing_functional_s(
            RegionTag,
            field.bounding_box(),
            &mut field,
            1,
        );
        assert_eq!(field.get(&vector![1, 2, 1]), 0.0);
        assert_eq!(field.get(&vector![0, 1, 2]), 1.0);
        assert_eq!(field.get(&vector![0, 3, 1]), 2.0);
        assert_eq!(field.get(&vector![3, 0, 3]), 3.0);
        // 24 face, 24 edge, 8 corner cells.
        assert_eq!(
            field.data().iter().sum::<f64>(),
            24.0 + 24.0 * 2.0 + 8.0 * 3.0
        );
    }

    #[derive(Clone)]
    struct NoEdges;

    impl<const D: usize> BoundedBoxProcessingFunctionalS<D> for NoEdges {
        fn process_bulk(&mut self, _: AABB<D>, _: &mut ScalarField<D>) {}

        fn process_face(&mut self, _: usize, _: i32, _: AABB<D>, _: &mut ScalarField<D>) {}

        fn process_corner(&mut self, _: &Coord<D>, _: AABB<D>, _: &mut ScalarField<D>) {}
    }

    #[test]
    #[should_panic(expected = "no handler for surface region edge(plane=0")]
    fn missing_edge_handler_test() {
        let mut field = ScalarField::new(vector![3, 3, 3]);
        apply_bounded_processing_functional_s(NoEdges, field.bounding_box(), &mut field, 1);
    }
}
