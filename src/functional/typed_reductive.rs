//! Reductive functionals with typed block arguments.
//!
//! The typed `apply_*` entry points take the functional by reference and
//! copy the evaluated statistics back into it before returning.

reductive_box_functional!(
    ReductiveBoxProcessingFunctionalL, TypedReductiveBoxL,
    apply_reductive_processing_functional_l,
    (lattice: BlockLattice => lattice)
);

reductive_box_functional!(
    ReductiveBoxProcessingFunctionalS, TypedReductiveBoxS,
    apply_reductive_processing_functional_s,
    (field: ScalarField => scalar_field)
);

reductive_box_functional!(
    ReductiveBoxProcessingFunctionalT, TypedReductiveBoxT,
    apply_reductive_processing_functional_t,
    (field: TensorField => tensor_field)
);

reductive_box_functional!(
    ReductiveBoxProcessingFunctionalLL, TypedReductiveBoxLL,
    apply_reductive_processing_functional_ll,
    (lattice1: BlockLattice => lattice, lattice2: BlockLattice => lattice)
);

reductive_box_functional!(
    ReductiveBoxProcessingFunctionalLS, TypedReductiveBoxLS,
    apply_reductive_processing_functional_ls,
    (lattice: BlockLattice => lattice, field: ScalarField => scalar_field)
);

reductive_box_functional!(
    /// Compares two scalar fields, for example for an error norm.
    ReductiveBoxProcessingFunctionalSS, TypedReductiveBoxSS,
    apply_reductive_processing_functional_ss,
    (field1: ScalarField => scalar_field, field2: ScalarField => scalar_field)
);

reductive_box_functional!(
    ReductiveBoxProcessingFunctionalST, TypedReductiveBoxST,
    apply_reductive_processing_functional_st,
    (scalar: ScalarField => scalar_field, tensor: TensorField => tensor_field)
);

reductive_box_functional!(
    ReductiveBoxProcessingFunctionalLN, TypedReductiveBoxLN,
    apply_reductive_processing_functional_ln,
    [lattices: BlockLattice => lattice]
);

reductive_box_functional!(
    ReductiveBoxProcessingFunctionalSN, TypedReductiveBoxSN,
    apply_reductive_processing_functional_sn,
    [fields: ScalarField => scalar_field]
);

reductive_dot_functional!(
    ReductiveDotProcessingFunctionalL, TypedReductiveDotL,
    apply_reductive_dot_processing_functional_l,
    (lattice: BlockLattice => lattice)
);

reductive_dot_functional!(
    ReductiveDotProcessingFunctionalS, TypedReductiveDotS,
    apply_reductive_dot_processing_functional_s,
    (field: ScalarField => scalar_field)
);

reductive_dot_functional!(
    ReductiveDotProcessingFunctionalLS, TypedReductiveDotLS,
    apply_reductive_dot_processing_functional_ls,
    (lattice: BlockLattice => lattice, field: ScalarField => scalar_field)
);

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::block::*;
    use crate::statistics::BlockStatistics;
    use crate::util::*;

    /// Largest absolute difference between two fields.
    #[derive(Clone)]
    struct MaxDifference {
        statistics: BlockStatistics,
        max: usize,
    }

    impl MaxDifference {
        fn new() -> Self {
            let mut statistics = BlockStatistics::new();
            let max = statistics.subscribe_max();
            MaxDifference { statistics, max }
        }
    }

    impl<const D: usize> ReductiveBoxProcessingFunctionalSS<D> for MaxDifference {
        fn process(
            &mut self,
            domain: AABB<D>,
            field1: &mut ScalarField<D>,
            field2: &mut ScalarField<D>,
        ) {
            for c in domain.coord_iter() {
                let difference = (field1.get(&c) - field2.get(&c)).abs();
                self.statistics.gather_max(self.max, difference);
            }
        }

        fn statistics(&self) -> &BlockStatistics {
            &self.statistics
        }

        fn statistics_mut(&mut self) -> &mut BlockStatistics {
            &mut self.statistics
        }
    }

    #[derive(Clone)]
    struct DotSum {
        statistics: BlockStatistics,
        sum: usize,
    }

    impl<const D: usize> ReductiveDotProcessingFunctionalS<D> for DotSum {
        fn process(&mut self, dots: &DotList<D>, field: &mut ScalarField<D>) {
            for dot in dots.iter() {
                self.statistics.gather_sum(self.sum, field.get(dot));
            }
        }

        fn statistics(&self) -> &BlockStatistics {
            &self.statistics
        }

        fn statistics_mut(&mut self) -> &mut BlockStatistics {
            &mut self.statistics
        }
    }

    #[test]
    fn max_difference_test() {
        let mut a = ScalarField::new(vector![5, 5]);
        let mut b = ScalarField::new(vector![5, 5]);
        b.set(&vector![2, 2], -4.0);
        a.set(&vector![3, 1], 1.5);
        let mut functional = MaxDifference::new();
        apply_reductive_processing_functional_ss(
            &mut functional,
            a.bounding_box(),
            &mut a,
            &mut b,
        );
        assert_eq!(functional.statistics.max(functional.max), 4.0);
        assert_eq!(a.atomic().revision(), 0);
        assert_eq!(b.atomic().revision(), 0);
    }

    #[test]
    fn dot_sum_test() {
        let mut field = ScalarField::new(vector![4, 4]);
        field.par_set_values(|c| c[0] as f64, 4);
        let mut statistics = BlockStatistics::new();
        let sum = statistics.subscribe_sum();
        let mut functional = DotSum { statistics, sum };
        let dots: DotList<2> =
            [vector![1, 1], vector![3, 0], vector![3, 3]].into_iter().collect();
        apply_reductive_dot_processing_functional_s(&mut functional, &dots, &mut field);
        assert_eq!(functional.statistics.sum(sum), 7.0);
    }
}
