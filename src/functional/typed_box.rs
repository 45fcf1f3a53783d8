//! Plain box functionals with typed block arguments.

box_functional!(
    /// Acts on one lattice.
    BoxProcessingFunctionalL, TypedBoxL, apply_processing_functional_l,
    (lattice: BlockLattice => lattice)
);

box_functional!(
    /// Acts on one scalar field.
    BoxProcessingFunctionalS, TypedBoxS, apply_processing_functional_s,
    (field: ScalarField => scalar_field)
);

box_functional!(
    BoxProcessingFunctionalT, TypedBoxT, apply_processing_functional_t,
    (field: TensorField => tensor_field)
);

box_functional!(
    /// Couples two lattices, for example two fluid components.
    BoxProcessingFunctionalLL, TypedBoxLL, apply_processing_functional_ll,
    (lattice1: BlockLattice => lattice, lattice2: BlockLattice => lattice)
);

box_functional!(
    /// Lattice and scalar field, typically a density extraction.
    BoxProcessingFunctionalLS, TypedBoxLS, apply_processing_functional_ls,
    (lattice: BlockLattice => lattice, field: ScalarField => scalar_field)
);

box_functional!(
    BoxProcessingFunctionalLT, TypedBoxLT, apply_processing_functional_lt,
    (lattice: BlockLattice => lattice, field: TensorField => tensor_field)
);

box_functional!(
    BoxProcessingFunctionalSS, TypedBoxSS, apply_processing_functional_ss,
    (field1: ScalarField => scalar_field, field2: ScalarField => scalar_field)
);

box_functional!(
    BoxProcessingFunctionalST, TypedBoxST, apply_processing_functional_st,
    (scalar: ScalarField => scalar_field, tensor: TensorField => tensor_field)
);

box_functional!(
    BoxProcessingFunctionalTT, TypedBoxTT, apply_processing_functional_tt,
    (field1: TensorField => tensor_field, field2: TensorField => tensor_field)
);

box_functional!(
    /// Any number of lattices.
    BoxProcessingFunctionalLN, TypedBoxLN, apply_processing_functional_ln,
    [lattices: BlockLattice => lattice]
);

box_functional!(
    BoxProcessingFunctionalSN, TypedBoxSN, apply_processing_functional_sn,
    [fields: ScalarField => scalar_field]
);

box_functional!(
    BoxProcessingFunctionalTN, TypedBoxTN, apply_processing_functional_tn,
    [fields: TensorField => tensor_field]
);
