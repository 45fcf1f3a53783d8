//! Generators for the typed functional families.
//!
//! Each invocation defines a typed trait, an adapter implementing the
//! matching generic trait on top of it, and an `apply_*` entry point.
//! Arguments are given as `name: BlockType => cast`, where `cast` is the
//! `BlockRef` accessor for that kind. A bracketed single argument stands
//! for any number of blocks of one kind.

/// Bind the handles of a fixed-length block list, or stop with an arity
/// violation.
macro_rules! destructure_blocks {
    ($blocks:ident; $($arg:ident),+) => {
        let found = $blocks.len();
        let [$($arg),+] = $blocks else {
            $crate::error::DispatchViolation::ArityMismatch {
                expected: [$(stringify!($arg)),+].len(),
                found,
            }
            .raise()
        };
    };
}

/// Cast every handle of a block list to the same kind.
macro_rules! collect_blocks {
    ($blocks:ident => $cast:ident) => {
        $blocks
            .iter_mut()
            .map(|block| block.$cast())
            .collect::<Vec<_>>()
    };
}

macro_rules! box_functional {
    (
        $(#[$meta:meta])*
        $name:ident, $adapter:ident, $apply:ident,
        ($($arg:ident: $block:ident => $cast:ident),+)
    ) => {
        $(#[$meta])*
        pub trait $name<const D: usize>: Clone + 'static {
            fn process(
                &mut self,
                domain: $crate::util::AABB<D>,
                $($arg: &mut $crate::block::$block<D>),+
            );

            fn applies_to(&self) -> $crate::block::BlockDomain {
                $crate::block::BlockDomain::Bulk
            }

            fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

            fn modification_pattern(&self, is_written: &mut [bool]) {
                is_written.fill(true);
            }
        }

        #[derive(Clone)]
        pub struct $adapter<F>(pub F);

        impl<const D: usize, F: $name<D>>
            $crate::functional::BoxProcessingFunctional<D> for $adapter<F>
        {
            fn process_generic_blocks(
                &mut self,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process(domain, $($arg.$cast()),+);
            }

            fn clone_functional(
                &self,
            ) -> Box<dyn $crate::functional::BoxProcessingFunctional<D>> {
                Box::new(self.clone())
            }

            fn applies_to(&self) -> $crate::block::BlockDomain {
                self.0.applies_to()
            }

            fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
                self.0.rescale(dx_scale, dt_scale);
            }

            fn modification_pattern(&self, is_written: &mut [bool]) {
                self.0.modification_pattern(is_written);
            }
        }

        #[track_caller]
        pub fn $apply<const D: usize, F: $name<D>>(
            functional: F,
            domain: $crate::util::AABB<D>,
            $($arg: &mut $crate::block::$block<D>),+
        ) {
            $crate::dispatch::apply_processing_functional(
                Box::new($adapter(functional)),
                domain,
                vec![$($crate::block::BlockRef::from($arg)),+],
            );
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident, $adapter:ident, $apply:ident,
        [$arg:ident: $block:ident => $cast:ident]
    ) => {
        $(#[$meta])*
        pub trait $name<const D: usize>: Clone + 'static {
            fn process(
                &mut self,
                domain: $crate::util::AABB<D>,
                $arg: &mut [&mut $crate::block::$block<D>],
            );

            fn applies_to(&self) -> $crate::block::BlockDomain {
                $crate::block::BlockDomain::Bulk
            }

            fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

            fn modification_pattern(&self, is_written: &mut [bool]) {
                is_written.fill(true);
            }
        }

        #[derive(Clone)]
        pub struct $adapter<F>(pub F);

        impl<const D: usize, F: $name<D>>
            $crate::functional::BoxProcessingFunctional<D> for $adapter<F>
        {
            fn process_generic_blocks(
                &mut self,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                let mut $arg = collect_blocks!(blocks => $cast);
                self.0.process(domain, &mut $arg);
            }

            fn clone_functional(
                &self,
            ) -> Box<dyn $crate::functional::BoxProcessingFunctional<D>> {
                Box::new(self.clone())
            }

            fn applies_to(&self) -> $crate::block::BlockDomain {
                self.0.applies_to()
            }

            fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
                self.0.rescale(dx_scale, dt_scale);
            }

            fn modification_pattern(&self, is_written: &mut [bool]) {
                self.0.modification_pattern(is_written);
            }
        }

        #[track_caller]
        pub fn $apply<const D: usize, F: $name<D>>(
            functional: F,
            domain: $crate::util::AABB<D>,
            $arg: Vec<&mut $crate::block::$block<D>>,
        ) {
            $crate::dispatch::apply_processing_functional(
                Box::new($adapter(functional)),
                domain,
                $arg.into_iter().map($crate::block::BlockRef::from).collect(),
            );
        }
    };
}

macro_rules! dot_functional {
    (
        $(#[$meta:meta])*
        $name:ident, $adapter:ident, $apply:ident,
        ($($arg:ident: $block:ident => $cast:ident),+)
    ) => {
        $(#[$meta])*
        pub trait $name<const D: usize>: Clone + 'static {
            fn process(
                &mut self,
                dots: &$crate::util::DotList<D>,
                $($arg: &mut $crate::block::$block<D>),+
            );

            fn applies_to(&self) -> $crate::block::BlockDomain {
                $crate::block::BlockDomain::Bulk
            }

            fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

            fn modification_pattern(&self, is_written: &mut [bool]) {
                is_written.fill(true);
            }
        }

        #[derive(Clone)]
        pub struct $adapter<F>(pub F);

        impl<const D: usize, F: $name<D>>
            $crate::functional::DotProcessingFunctional<D> for $adapter<F>
        {
            fn process_generic_blocks(
                &mut self,
                dots: &$crate::util::DotList<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process(dots, $($arg.$cast()),+);
            }

            fn clone_functional(
                &self,
            ) -> Box<dyn $crate::functional::DotProcessingFunctional<D>> {
                Box::new(self.clone())
            }

            fn applies_to(&self) -> $crate::block::BlockDomain {
                self.0.applies_to()
            }

            fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
                self.0.rescale(dx_scale, dt_scale);
            }

            fn modification_pattern(&self, is_written: &mut [bool]) {
                self.0.modification_pattern(is_written);
            }
        }

        #[track_caller]
        pub fn $apply<const D: usize, F: $name<D>>(
            functional: F,
            dots: &$crate::util::DotList<D>,
            $($arg: &mut $crate::block::$block<D>),+
        ) {
            $crate::dispatch::apply_dot_processing_functional(
                Box::new($adapter(functional)),
                dots,
                vec![$($crate::block::BlockRef::from($arg)),+],
            );
        }
    };
}

macro_rules! reductive_box_functional {
    (
        $(#[$meta:meta])*
        $name:ident, $adapter:ident, $apply:ident,
        ($($arg:ident: $block:ident => $cast:ident),+)
    ) => {
        $(#[$meta])*
        pub trait $name<const D: usize>: Clone + 'static {
            fn process(
                &mut self,
                domain: $crate::util::AABB<D>,
                $($arg: &mut $crate::block::$block<D>),+
            );

            fn statistics(&self) -> &$crate::statistics::BlockStatistics;

            fn statistics_mut(&mut self) -> &mut $crate::statistics::BlockStatistics;

            fn applies_to(&self) -> $crate::block::BlockDomain {
                $crate::block::BlockDomain::Bulk
            }

            fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

            fn modification_pattern(&self, is_written: &mut [bool]) {
                is_written.fill(false);
            }
        }

        #[derive(Clone)]
        pub struct $adapter<F>(pub F);

        impl<const D: usize, F: $name<D>>
            $crate::functional::ReductiveBoxProcessingFunctional<D> for $adapter<F>
        {
            fn process_generic_blocks(
                &mut self,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process(domain, $($arg.$cast()),+);
            }

            fn clone_functional(
                &self,
            ) -> Box<dyn $crate::functional::ReductiveBoxProcessingFunctional<D>> {
                Box::new(self.clone())
            }

            fn statistics(&self) -> &$crate::statistics::BlockStatistics {
                self.0.statistics()
            }

            fn statistics_mut(&mut self) -> &mut $crate::statistics::BlockStatistics {
                self.0.statistics_mut()
            }

            fn applies_to(&self) -> $crate::block::BlockDomain {
                self.0.applies_to()
            }

            fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
                self.0.rescale(dx_scale, dt_scale);
            }

            fn modification_pattern(&self, is_written: &mut [bool]) {
                self.0.modification_pattern(is_written);
            }
        }

        /// Runs immediately. The statistics end up in `functional`.
        #[track_caller]
        pub fn $apply<const D: usize, F: $name<D>>(
            functional: &mut F,
            domain: $crate::util::AABB<D>,
            $($arg: &mut $crate::block::$block<D>),+
        ) {
            let mut adapter = $adapter(functional.clone());
            $crate::dispatch::apply_reductive_processing_functional(
                &mut adapter,
                domain,
                vec![$($crate::block::BlockRef::from($arg)),+],
            );
            *functional.statistics_mut() = adapter.0.statistics().clone();
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident, $adapter:ident, $apply:ident,
        [$arg:ident: $block:ident => $cast:ident]
    ) => {
        $(#[$meta])*
        pub trait $name<const D: usize>: Clone + 'static {
            fn process(
                &mut self,
                domain: $crate::util::AABB<D>,
                $arg: &mut [&mut $crate::block::$block<D>],
            );

            fn statistics(&self) -> &$crate::statistics::BlockStatistics;

            fn statistics_mut(&mut self) -> &mut $crate::statistics::BlockStatistics;

            fn applies_to(&self) -> $crate::block::BlockDomain {
                $crate::block::BlockDomain::Bulk
            }

            fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

            fn modification_pattern(&self, is_written: &mut [bool]) {
                is_written.fill(false);
            }
        }

        #[derive(Clone)]
        pub struct $adapter<F>(pub F);

        impl<const D: usize, F: $name<D>>
            $crate::functional::ReductiveBoxProcessingFunctional<D> for $adapter<F>
        {
            fn process_generic_blocks(
                &mut self,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                let mut $arg = collect_blocks!(blocks => $cast);
                self.0.process(domain, &mut $arg);
            }

            fn clone_functional(
                &self,
            ) -> Box<dyn $crate::functional::ReductiveBoxProcessingFunctional<D>> {
                Box::new(self.clone())
            }

            fn statistics(&self) -> &$crate::statistics::BlockStatistics {
                self.0.statistics()
            }

            fn statistics_mut(&mut self) -> &mut $crate::statistics::BlockStatistics {
                self.0.statistics_mut()
            }

            fn applies_to(&self) -> $crate::block::BlockDomain {
                self.0.applies_to()
            }

            fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
                self.0.rescale(dx_scale, dt_scale);
            }

            fn modification_pattern(&self, is_written: &mut [bool]) {
                self.0.modification_pattern(is_written);
            }
        }

        #[track_caller]
        pub fn $apply<const D: usize, F: $name<D>>(
            functional: &mut F,
            domain: $crate::util::AABB<D>,
            $arg: Vec<&mut $crate::block::$block<D>>,
        ) {
            let mut adapter = $adapter(functional.clone());
            $crate::dispatch::apply_reductive_processing_functional(
                &mut adapter,
                domain,
                $arg.into_iter().map($crate::block::BlockRef::from).collect(),
            );
            *functional.statistics_mut() = adapter.0.statistics().clone();
        }
    };
}

macro_rules! reductive_dot_functional {
    (
        $(#[$meta:meta])*
        $name:ident, $adapter:ident, $apply:ident,
        ($($arg:ident: $block:ident => $cast:ident),+)
    ) => {
        $(#[$meta])*
        pub trait $name<const D: usize>: Clone + 'static {
            fn process(
                &mut self,
                dots: &$crate::util::DotList<D>,
                $($arg: &mut $crate::block::$block<D>),+
            );

            fn statistics(&self) -> &$crate::statistics::BlockStatistics;

            fn statistics_mut(&mut self) -> &mut $crate::statistics::BlockStatistics;

            fn applies_to(&self) -> $crate::block::BlockDomain {
                $crate::block::BlockDomain::Bulk
            }

            fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

            fn modification_pattern(&self, is_written: &mut [bool]) {
                is_written.fill(false);
            }
        }

        #[derive(Clone)]
        pub struct $adapter<F>(pub F);

        impl<const D: usize, F: $name<D>>
            $crate::functional::ReductiveDotProcessingFunctional<D> for $adapter<F>
        {
            fn process_generic_blocks(
                &mut self,
                dots: &$crate::util::DotList<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process(dots, $($arg.$cast()),+);
            }

            fn clone_functional(
                &self,
            ) -> Box<dyn $crate::functional::ReductiveDotProcessingFunctional<D>> {
                Box::new(self.clone())
            }

            fn statistics(&self) -> &$crate::statistics::BlockStatistics {
                self.0.statistics()
            }

            fn statistics_mut(&mut self) -> &mut $crate::statistics::BlockStatistics {
                self.0.statistics_mut()
            }

            fn applies_to(&self) -> $crate::block::BlockDomain {
                self.0.applies_to()
            }

            fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
                self.0.rescale(dx_scale, dt_scale);
            }

            fn modification_pattern(&self, is_written: &mut [bool]) {
                self.0.modification_pattern(is_written);
            }
        }

        #[track_caller]
        pub fn $apply<const D: usize, F: $name<D>>(
            functional: &mut F,
            dots: &$crate::util::DotList<D>,
            $($arg: &mut $crate::block::$block<D>),+
        ) {
            let mut adapter = $adapter(functional.clone());
            $crate::dispatch::apply_reductive_dot_processing_functional(
                &mut adapter,
                dots,
                vec![$($crate::block::BlockRef::from($arg)),+],
            );
            *functional.statistics_mut() = adapter.0.statistics().clone();
        }
    };
}

macro_rules! bounded_box_functional {
    (
        $(#[$meta:meta])*
        $name:ident, $adapter:ident, $apply:ident,
        ($($arg:ident: $block:ident => $cast:ident),+)
    ) => {
        $(#[$meta])*
        pub trait $name<const D: usize>: Clone + 'static {
            fn process_bulk(
                &mut self,
                domain: $crate::util::AABB<D>,
                $($arg: &mut $crate::block::$block<D>),+
            );

            fn process_face(
                &mut self,
                direction: usize,
                orientation: i32,
                domain: $crate::util::AABB<D>,
                $($arg: &mut $crate::block::$block<D>),+
            );

            /// Only called in 3D.
            #[allow(unused_variables)]
            fn process_edge(
                &mut self,
                plane: usize,
                normal1: i32,
                normal2: i32,
                domain: $crate::util::AABB<D>,
                $($arg: &mut $crate::block::$block<D>),+
            ) {
                $crate::error::DispatchViolation::UnhandledRegion {
                    region: $crate::surface::SurfaceRegion::<D>::Edge {
                        plane,
                        normal1,
                        normal2,
                    }
                    .to_string(),
                }
                .raise()
            }

            fn process_corner(
                &mut self,
                normal: &$crate::util::Coord<D>,
                domain: $crate::util::AABB<D>,
                $($arg: &mut $crate::block::$block<D>),+
            );

            fn applies_to(&self) -> $crate::block::BlockDomain {
                $crate::block::BlockDomain::Bulk
            }

            fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

            fn modification_pattern(&self, is_written: &mut [bool]) {
                is_written.fill(true);
            }
        }

        #[derive(Clone)]
        pub struct $adapter<F>(pub F);

        impl<const D: usize, F: $name<D>>
            $crate::functional::BoundedBoxProcessingFunctional<D> for $adapter<F>
        {
            fn process_bulk_generic(
                &mut self,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process_bulk(domain, $($arg.$cast()),+);
            }

            fn process_face_generic(
                &mut self,
                direction: usize,
                orientation: i32,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process_face(direction, orientation, domain, $($arg.$cast()),+);
            }

            fn process_edge_generic(
                &mut self,
                plane: usize,
                normal1: i32,
                normal2: i32,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process_edge(plane, normal1, normal2, domain, $($arg.$cast()),+);
            }

            fn process_corner_generic(
                &mut self,
                normal: &$crate::util::Coord<D>,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process_corner(normal, domain, $($arg.$cast()),+);
            }

            fn clone_bounded(
                &self,
            ) -> Box<dyn $crate::functional::BoundedBoxProcessingFunctional<D>> {
                Box::new(self.clone())
            }

            fn applies_to(&self) -> $crate::block::BlockDomain {
                self.0.applies_to()
            }

            fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
                self.0.rescale(dx_scale, dt_scale);
            }

            fn modification_pattern(&self, is_written: &mut [bool]) {
                self.0.modification_pattern(is_written);
            }
        }

        #[track_caller]
        pub fn $apply<const D: usize, F: $name<D>>(
            functional: F,
            domain: $crate::util::AABB<D>,
            $($arg: &mut $crate::block::$block<D>,)+
            boundary_width: i32,
        ) {
            $crate::dispatch::apply_bounded_processing_functional(
                Box::new($adapter(functional)),
                domain,
                vec![$($crate::block::BlockRef::from($arg)),+],
                boundary_width,
            );
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident, $adapter:ident, $apply:ident,
        [$arg:ident: $block:ident => $cast:ident]
    ) => {
        $(#[$meta])*
        pub trait $name<const D: usize>: Clone + 'static {
            fn process_bulk(
                &mut self,
                domain: $crate::util::AABB<D>,
                $arg: &mut [&mut $crate::block::$block<D>],
            );

            fn process_face(
                &mut self,
                direction: usize,
                orientation: i32,
                domain: $crate::util::AABB<D>,
                $arg: &mut [&mut $crate::block::$block<D>],
            );

            /// Only called in 3D.
            #[allow(unused_variables)]
            fn process_edge(
                &mut self,
                plane: usize,
                normal1: i32,
                normal2: i32,
                domain: $crate::util::AABB<D>,
                $arg: &mut [&mut $crate::block::$block<D>],
            ) {
                $crate::error::DispatchViolation::UnhandledRegion {
                    region: $crate::surface::SurfaceRegion::<D>::Edge {
                        plane,
                        normal1,
                        normal2,
                    }
                    .to_string(),
                }
                .raise()
            }

            fn process_corner(
                &mut self,
                normal: &$crate::util::Coord<D>,
                domain: $crate::util::AABB<D>,
                $arg: &mut [&mut $crate::block::$block<D>],
            );

            fn applies_to(&self) -> $crate::block::BlockDomain {
                $crate::block::BlockDomain::Bulk
            }

            fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

            fn modification_pattern(&self, is_written: &mut [bool]) {
                is_written.fill(true);
            }
        }

        #[derive(Clone)]
        pub struct $adapter<F>(pub F);

        impl<const D: usize, F: $name<D>>
            $crate::functional::BoundedBoxProcessingFunctional<D> for $adapter<F>
        {
            fn process_bulk_generic(
                &mut self,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                let mut $arg = collect_blocks!(blocks => $cast);
                self.0.process_bulk(domain, &mut $arg);
            }

            fn process_face_generic(
                &mut self,
                direction: usize,
                orientation: i32,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                let mut $arg = collect_blocks!(blocks => $cast);
                self.0.process_face(direction, orientation, domain, &mut $arg);
            }

            fn process_edge_generic(
                &mut self,
                plane: usize,
                normal1: i32,
                normal2: i32,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                let mut $arg = collect_blocks!(blocks => $cast);
                self.0.process_edge(plane, normal1, normal2, domain, &mut $arg);
            }

            fn process_corner_generic(
                &mut self,
                normal: &$crate::util::Coord<D>,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                let mut $arg = collect_blocks!(blocks => $cast);
                self.0.process_corner(normal, domain, &mut $arg);
            }

            fn clone_bounded(
                &self,
            ) -> Box<dyn $crate::functional::BoundedBoxProcessingFunctional<D>> {
                Box::new(self.clone())
            }

            fn applies_to(&self) -> $crate::block::BlockDomain {
                self.0.applies_to()
            }

            fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
                self.0.rescale(dx_scale, dt_scale);
            }

            fn modification_pattern(&self, is_written: &mut [bool]) {
                self.0.modification_pattern(is_written);
            }
        }

        #[track_caller]
        pub fn $apply<const D: usize, F: $name<D>>(
            functional: F,
            domain: $crate::util::AABB<D>,
            $arg: Vec<&mut $crate::block::$block<D>>,
            boundary_width: i32,
        ) {
            $crate::dispatch::apply_bounded_processing_functional(
                Box::new($adapter(functional)),
                domain,
                $arg.into_iter().map($crate::block::BlockRef::from).collect(),
                boundary_width,
            );
        }
    };
}

macro_rules! bounded_reductive_box_functional {
    (
        $(#[$meta:meta])*
        $name:ident, $adapter:ident, $apply:ident,
        ($($arg:ident: $block:ident => $cast:ident),+)
    ) => {
        $(#[$meta])*
        pub trait $name<const D: usize>: Clone + 'static {
            fn process_bulk(
                &mut self,
                domain: $crate::util::AABB<D>,
                $($arg: &mut $crate::block::$block<D>),+
            );

            fn process_face(
                &mut self,
                direction: usize,
                orientation: i32,
                domain: $crate::util::AABB<D>,
                $($arg: &mut $crate::block::$block<D>),+
            );

            /// Only called in 3D.
            #[allow(unused_variables)]
            fn process_edge(
                &mut self,
                plane: usize,
                normal1: i32,
                normal2: i32,
                domain: $crate::util::AABB<D>,
                $($arg: &mut $crate::block::$block<D>),+
            ) {
                $crate::error::DispatchViolation::UnhandledRegion {
                    region: $crate::surface::SurfaceRegion::<D>::Edge {
                        plane,
                        normal1,
                        normal2,
                    }
                    .to_string(),
                }
                .raise()
            }

            fn process_corner(
                &mut self,
                normal: &$crate::util::Coord<D>,
                domain: $crate::util::AABB<D>,
                $($arg: &mut $crate::block::$block<D>),+
            );

            fn statistics(&self) -> &$crate::statistics::BlockStatistics;

            fn statistics_mut(&mut self) -> &mut $crate::statistics::BlockStatistics;

            fn applies_to(&self) -> $crate::block::BlockDomain {
                $crate::block::BlockDomain::Bulk
            }

            fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

            fn modification_pattern(&self, is_written: &mut [bool]) {
                is_written.fill(false);
            }
        }

        #[derive(Clone)]
        pub struct $adapter<F>(pub F);

        impl<const D: usize, F: $name<D>>
            $crate::functional::BoundedReductiveBoxProcessingFunctional<D>
            for $adapter<F>
        {
            fn process_bulk_generic(
                &mut self,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process_bulk(domain, $($arg.$cast()),+);
            }

            fn process_face_generic(
                &mut self,
                direction: usize,
                orientation: i32,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process_face(direction, orientation, domain, $($arg.$cast()),+);
            }

            fn process_edge_generic(
                &mut self,
                plane: usize,
                normal1: i32,
                normal2: i32,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process_edge(plane, normal1, normal2, domain, $($arg.$cast()),+);
            }

            fn process_corner_generic(
                &mut self,
                normal: &$crate::util::Coord<D>,
                domain: $crate::util::AABB<D>,
                blocks: &mut [$crate::block::BlockRef<'_, D>],
            ) {
                destructure_blocks!(blocks; $($arg),+);
                self.0.process_corner(normal, domain, $($arg.$cast()),+);
            }

            fn clone_bounded(
                &self,
            ) -> Box<dyn $crate::functional::BoundedReductiveBoxProcessingFunctional<D>> {
                Box::new(self.clone())
            }

            fn statistics(&self) -> &$crate::statistics::BlockStatistics {
                self.0.statistics()
            }

            fn statistics_mut(&mut self) -> &mut $crate::statistics::BlockStatistics {
                self.0.statistics_mut()
            }

            fn applies_to(&self) -> $crate::block::BlockDomain {
                self.0.applies_to()
            }

            fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
                self.0.rescale(dx_scale, dt_scale);
            }

            fn modification_pattern(&self, is_written: &mut [bool]) {
                self.0.modification_pattern(is_written);
            }
        }

        /// Runs every region immediately and leaves the combined
        /// statistics in `functional`.
        #[track_caller]
        pub fn $apply<const D: usize, F: $name<D>>(
            functional: &mut F,
            domain: $crate::util::AABB<D>,
            $($arg: &mut $crate::block::$block<D>,)+
            boundary_width: i32,
        ) {
            let mut adapter = $adapter(functional.clone());
            $crate::dispatch::apply_bounded_reductive_processing_functional(
                &mut adapter,
                domain,
                vec![$($crate::block::BlockRef::from($arg)),+],
                boundary_width,
            );
            *functional.statistics_mut() = adapter.0.statistics().clone();
        }
    };
}
