use lbpf::block::*;
use lbpf::dispatch::*;
use lbpf::functional::*;
use lbpf::lbm::*;
use lbpf::processor::*;
use lbpf::util::*;

use float_cmp::assert_approx_eq;
use std::rc::Rc;

#[derive(Clone)]
struct Scale {
    factor: f64,
}

impl<const D: usize> BoxProcessingFunctionalS<D> for Scale {
    fn process(&mut self, domain: AABB<D>, field: &mut ScalarField<D>) {
        for c in domain.coord_iter() {
            *field.get_mut(&c) *= self.factor;
        }
    }
}

#[test]
fn set_constant_test() {
    let mut field = ScalarField::new(vector![14, 12]);
    field.fill(-1.0);
    let domain = AABB::new(matrix![0, 9; 0, 9]);
    apply_processing_functional_s(SetScalar { value: 2.5 }, domain, &mut field);

    for c in field.bounding_box().coord_iter() {
        if domain.contains(&c) {
            assert_eq!(field.get(&c), 2.5);
        } else {
            assert_eq!(field.get(&c), -1.0);
        }
    }
    assert_eq!(field.atomic().revision(), 1);
}

#[test]
fn scalar_sum_test() {
    let mut field = ScalarField::new(vector![8, 8]);
    field.fill(1.0);
    let mut sum = ScalarSum::new();
    apply_reductive_processing_functional_s(
        &mut sum,
        AABB::new(matrix![0, 4; 0, 4]),
        &mut field,
    );
    assert_approx_eq!(f64, sum.sum(), 25.0);

    // Reductions only read.
    assert_eq!(field.atomic().revision(), 0);
}

#[test]
fn domain_outside_block_test() {
    let mut field = ScalarField::new(vector![5, 5]);
    let mut sum = ScalarSum::new();
    field.fill(1.0);
    apply_reductive_processing_functional_s(
        &mut sum,
        AABB::new(matrix![10, 12; 0, 4]),
        &mut field,
    );
    assert_eq!(sum.sum(), 0.0);

    apply_processing_functional_s(
        SetScalar { value: 7.0 },
        AABB::new(matrix![3, 8; 3, 8]),
        &mut field,
    );
    assert_eq!(field.get(&vector![4, 4]), 7.0);
    assert_eq!(field.get(&vector![2, 4]), 1.0);
}

#[test]
fn integrate_defers_test() {
    let mut field = ScalarField::new(vector![6, 6]);
    let domain = AABB::new(matrix![1, 3; 1, 3]);
    integrate_processing_functional_s(SetScalar { value: 4.0 }, domain, &mut field, 0);

    let internal = field.atomic().internal_processors();
    assert_eq!(internal.len(), 1);
    let (level, generator) = internal.iter().next().unwrap();
    assert_eq!(level, 0);
    assert_eq!(generator.processing_domain(), ProcessingDomain::Box(domain));

    // Nothing ran yet.
    assert!(field.data().iter().all(|v| *v == 0.0));
    assert_eq!(field.atomic().revision(), 0);

    field.execute_internal_processors();
    assert_eq!(field.get(&vector![2, 2]), 4.0);
    assert_eq!(field.get(&vector![4, 4]), 0.0);
    assert_eq!(field.atomic().revision(), 1);
    assert_eq!(field.atomic().internal_processors().len(), 1);

    // Registered processors run again on every call.
    field.execute_internal_processors();
    assert_eq!(field.atomic().revision(), 2);
}

#[test]
fn internal_levels_test() {
    let mut field = ScalarField::new(vector![4, 4]);
    let domain = field.bounding_box();
    integrate_processing_functional_s(Scale { factor: 3.0 }, domain, &mut field, 1);
    integrate_processing_functional_s(SetScalar { value: 2.0 }, domain, &mut field, 0);
    field.execute_internal_processors();
    assert!(field.data().iter().all(|v| *v == 6.0));
}

#[test]
fn integrate_bounded_registers_regions_test() {
    let mut field = ScalarField::new(vector![6, 5]);
    let domain = field.bounding_box();
    integrate_bounded_processing_functional_s(SetEdges, domain, &mut field, 1, 0);
    // Bulk, 4 faces and 4 corners.
    assert_eq!(field.atomic().internal_processors().len(), 9);

    field.execute_internal_processors();
    assert_eq!(field.get(&vector![2, 2]), 0.0);
    assert_eq!(field.get(&vector![0, 2]), 1.0);
    assert_eq!(field.get(&vector![5, 4]), 2.0);
}

#[derive(Clone)]
struct SetEdges;

impl<const D: usize> BoundedBoxProcessingFunctionalS<D> for SetEdges {
    fn process_bulk(&mut self, _domain: AABB<D>, _field: &mut ScalarField<D>) {}

    fn process_face(
        &mut self,
        _direction: usize,
        _orientation: i32,
        domain: AABB<D>,
        field: &mut ScalarField<D>,
    ) {
        for c in domain.coord_iter() {
            field.set(&c, 1.0);
        }
    }

    fn process_corner(
        &mut self,
        _normal: &Coord<D>,
        domain: AABB<D>,
        field: &mut ScalarField<D>,
    ) {
        for c in domain.coord_iter() {
            field.set(&c, 2.0);
        }
    }
}

#[test]
fn lid_runs_each_step_test() {
    let mut lattice = BlockLattice::new(vector![8, 6], Descriptor::d2q9(), 1.0);
    let lid = AABB::new(matrix![0, 7; 5, 5]);
    integrate_processing_functional_l(
        VelocityBoundary::new(vector![0.02, 0.0]),
        lid,
        &mut lattice,
        0,
    );
    for _ in 0..3 {
        lattice.collide_and_stream(16);
        for c in lid.coord_iter() {
            assert_approx_eq!(f64, lattice.velocity(&c)[0], 0.02, epsilon = 1e-12);
        }
    }
    assert!(lattice.velocity(&vector![3, 4])[0] > 0.0);
}

#[test]
fn default_patterns_test() {
    let plain = TypedBoxLS(ExtractDensity);
    let mut is_written = [true; 2];
    BoxProcessingFunctional::<2>::modification_pattern(&plain, &mut is_written);
    assert_eq!(is_written, [false, true]);

    let set = TypedBoxS(SetScalar { value: 0.0 });
    let mut is_written = [false; 1];
    BoxProcessingFunctional::<2>::modification_pattern(&set, &mut is_written);
    assert_eq!(is_written, [true]);

    let sum = TypedReductiveBoxS(ScalarSum::new());
    let mut is_written = [true; 1];
    ReductiveBoxProcessingFunctional::<2>::modification_pattern(&sum, &mut is_written);
    assert_eq!(is_written, [false]);
}

#[test]
fn cloned_generator_is_independent_test() {
    let lid = AABB::new(matrix![0, 4; 4, 4]);
    let original = BoxProcessorGenerator::new(
        Box::new(TypedBoxL(VelocityBoundary::new(vector![0.04, 0.0]))),
        lid,
    );
    let mut copy = original.clone();
    copy.rescale(2.0, 1.0);

    let mut a = BlockLattice::new(vector![5, 5], Descriptor::d2q9(), 1.0);
    let mut b = BlockLattice::new(vector![5, 5], Descriptor::d2q9(), 1.0);
    execute_data_processor(&original, vec![BlockRef::from(&mut a)]);
    execute_data_processor(&copy, vec![BlockRef::from(&mut b)]);

    let c = vector![2, 4];
    assert_approx_eq!(f64, a.velocity(&c)[0], 0.04, epsilon = 1e-12);
    assert_approx_eq!(f64, b.velocity(&c)[0], 0.02, epsilon = 1e-12);
}

#[test]
fn reductive_processor_shares_statistics_test() {
    let mut field = ScalarField::new(vector![3, 3]);
    field.fill(2.0);
    let generator = ReductiveBoxProcessorGenerator::new(
        Box::new(TypedReductiveBoxS(ScalarSum::new())),
        field.bounding_box(),
    );
    let mut processor = generator.generate_reductive(vec![BlockRef::from(&mut field)]);
    assert!(Rc::ptr_eq(
        processor.shared_functional(),
        generator.shared_functional()
    ));
    processor.process();
    drop(processor);

    // Handle 0 is the only subscribed sum.
    assert_approx_eq!(f64, generator.statistics().sum(0), 18.0);
}

#[test]
fn dot_functional_test() {
    let mut field = ScalarField::new(vector![5, 5]);
    let dots = DotList::from_dots(vec![vector![0, 0], vector![2, 3], vector![9, 9]]);
    apply_dot_processing_functional_s(MarkDots, &dots, &mut field);
    assert_eq!(field.get(&vector![0, 0]), 1.0);
    assert_eq!(field.get(&vector![2, 3]), 1.0);
    assert_eq!(field.data().iter().sum::<f64>(), 2.0);
}

#[derive(Clone)]
struct MarkDots;

impl<const D: usize> DotProcessingFunctionalS<D> for MarkDots {
    fn process(&mut self, dots: &DotList<D>, field: &mut ScalarField<D>) {
        for dot in dots.iter() {
            field.set(dot, 1.0);
        }
    }
}

#[test]
#[should_panic(expected = "expected a lattice block, found a scalar field block")]
fn wrong_block_kind_test() {
    let mut field = ScalarField::new(vector![3, 3]);
    apply_processing_functional(
        Box::new(TypedBoxL(UniformEquilibrium {
            rho: 1.0,
            u: vector![0.0, 0.0],
        })),
        field.bounding_box(),
        vec![BlockRef::from(&mut field)],
    );
}

#[test]
#[should_panic(expected = "no blocks were handed to the dispatcher")]
fn empty_block_list_test() {
    apply_processing_functional::<2>(
        Box::new(TypedBoxS(SetScalar { value: 1.0 })),
        AABB::new(matrix![0, 1; 0, 1]),
        Vec::new(),
    );
}

#[test]
#[should_panic(expected = "inverted box bounds")]
fn apply_inverted_box_test() {
    let mut field = ScalarField::new(vector![6, 6]);
    apply_processing_functional_s(
        SetScalar { value: 1.0 },
        AABB::new(matrix![4, 1; 0, 5]),
        &mut field,
    );
}

#[test]
#[should_panic(expected = "inverted box bounds")]
fn reductive_inverted_box_test() {
    let mut field = ScalarField::new(vector![6, 6]);
    let mut sum = ScalarSum::new();
    apply_reductive_processing_functional_s(
        &mut sum,
        AABB::new(matrix![4, 1; 0, 5]),
        &mut field,
    );
}

#[test]
#[should_panic(expected = "inverted box bounds")]
fn integrate_inverted_box_test() {
    let mut field = ScalarField::new(vector![6, 6]);
    integrate_processing_functional_s(
        SetScalar { value: 1.0 },
        AABB::new(matrix![0, 5; 3, 2]),
        &mut field,
        0,
    );
}

#[test]
fn rescale_registered_processors_test() {
    let mut lattice = BlockLattice::new(vector![5, 5], Descriptor::d2q9(), 1.0);
    let lid = AABB::new(matrix![0, 4; 4, 4]);
    integrate_processing_functional_l(
        VelocityBoundary::new(vector![0.04, 0.0]),
        lid,
        &mut lattice,
        0,
    );
    lattice
        .atomic_mut()
        .internal_processors_mut()
        .rescale(2.0, 1.0);
    lattice.execute_internal_processors();
    for c in lid.coord_iter() {
        assert_approx_eq!(f64, lattice.velocity(&c)[0], 0.02, epsilon = 1e-12);
    }
}

#[test]
fn integrate_dots_test() {
    let mut field = ScalarField::new(vector![5, 5]).with_envelope(1);
    // (0, 0) is envelope and (9, 9) is outside the block.
    let dots = DotList::from_dots(vec![
        vector![0, 0],
        vector![1, 1],
        vector![3, 2],
        vector![9, 9],
    ]);
    integrate_dot_processing_functional_s(MarkDots, &dots, &mut field, 0);

    let internal = field.atomic().internal_processors();
    assert_eq!(internal.len(), 1);
    let kept = DotList::from_dots(vec![vector![1, 1], vector![3, 2]]);
    let (_, generator) = internal.iter().next().unwrap();
    assert_eq!(generator.processing_domain(), ProcessingDomain::Dots(&kept));
    assert!(field.data().iter().all(|v| *v == 0.0));
    assert_eq!(field.atomic().revision(), 0);

    field.execute_internal_processors();
    assert_eq!(field.get(&vector![1, 1]), 1.0);
    assert_eq!(field.get(&vector![3, 2]), 1.0);
    assert_eq!(field.get(&vector![0, 0]), 0.0);
    assert_eq!(field.data().iter().sum::<f64>(), 2.0);
    assert_eq!(field.atomic().revision(), 1);
}
