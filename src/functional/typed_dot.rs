//! Plain dot functionals with typed block arguments.

dot_functional!(
    DotProcessingFunctionalL, TypedDotL, apply_dot_processing_functional_l,
    (lattice: BlockLattice => lattice)
);

dot_functional!(
    DotProcessingFunctionalS, TypedDotS, apply_dot_processing_functional_s,
    (field: ScalarField => scalar_field)
);

dot_functional!(
    DotProcessingFunctionalT, TypedDotT, apply_dot_processing_functional_t,
    (field: TensorField => tensor_field)
);

dot_functional!(
    DotProcessingFunctionalLL, TypedDotLL, apply_dot_processing_functional_ll,
    (lattice1: BlockLattice => lattice, lattice2: BlockLattice => lattice)
);

dot_functional!(
    DotProcessingFunctionalLS, TypedDotLS, apply_dot_processing_functional_ls,
    (lattice: BlockLattice => lattice, field: ScalarField => scalar_field)
);

dot_functional!(
    DotProcessingFunctionalSS, TypedDotSS, apply_dot_processing_functional_ss,
    (field1: ScalarField => scalar_field, field2: ScalarField => scalar_field)
);

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::block::*;
    use crate::util::*;

    #[derive(Clone)]
    struct Mark(f64);

    impl<const D: usize> DotProcessingFunctionalS<D> for Mark {
        fn process(&mut self, dots: &DotList<D>, field: &mut ScalarField<D>) {
            for dot in dots.iter() {
                field.set(dot, self.0);
            }
        }
    }

    #[test]
    fn dots_inside_bulk_test() {
        let mut field = ScalarField::new(vector![6, 6]).with_envelope(1);
        let dots = DotList::from_dots(vec![
            vector![0, 0],
            vector![2, 3],
            vector![4, 4],
            vector![5, 2],
        ]);
        apply_dot_processing_functional_s(Mark(3.0), &dots, &mut field);
        // Envelope dots are dropped for a bulk-only functional.
        assert_eq!(field.get(&vector![0, 0]), 0.0);
        assert_eq!(field.get(&vector![5, 2]), 0.0);
        assert_eq!(field.get(&vector![2, 3]), 3.0);
        assert_eq!(field.get(&vector![4, 4]), 3.0);
        assert_eq!(field.data().iter().sum::<f64>(), 6.0);
    }
}
