use crate::util::*;

/// Ordered list of individual grid points.
/// Used instead of an `AABB` when the affected cells are sparse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DotList<const DIMENSION: usize> {
    dots: Vec<Coord<DIMENSION>>,
}

impl<const DIMENSION: usize> DotList<DIMENSION> {
    pub fn new() -> Self {
        DotList { dots: Vec::new() }
    }

    pub fn from_dots(dots: Vec<Coord<DIMENSION>>) -> Self {
        DotList { dots }
    }

    pub fn add_dot(&mut self, dot: Coord<DIMENSION>) {
        self.dots.push(dot);
    }

    /// Number of dots.
    #[inline]
    pub fn n(&self) -> usize {
        self.dots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    #[track_caller]
    #[inline]
    pub fn dot(&self, i: usize) -> Coord<DIMENSION> {
        self.dots[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord<DIMENSION>> + '_ {
        self.dots.iter()
    }

    /// Translate every dot by `delta`.
    pub fn shift(&self, delta: &Coord<DIMENSION>) -> Self {
        self.dots.iter().map(|dot| dot + delta).collect()
    }

    /// Keep the dots inside `aabb`, preserving order.
    pub fn restricted_to(&self, aabb: &AABB<DIMENSION>) -> Self {
        self.dots
            .iter()
            .filter(|dot| aabb.contains(dot))
            .copied()
            .collect()
    }

    /// Smallest box holding every dot, `None` for an empty list.
    pub fn bounding_box(&self) -> Option<AABB<DIMENSION>> {
        let first = self.dots.first()?;
        let mut min = *first;
        let mut max = *first;
        for dot in &self.dots[1..] {
            min = min.inf(dot);
            max = max.sup(dot);
        }
        Some(AABB::from_mm(min, max))
    }
}

impl<const DIMENSION: usize> FromIterator<Coord<DIMENSION>>
    for DotList<DIMENSION>
{
    fn from_iter<I: IntoIterator<Item = Coord<DIMENSION>>>(iter: I) -> Self {
        DotList {
            dots: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn restricted_to_test() {
        let dots = DotList::from_dots(vec![
            vector![0, 0],
            vector![5, 5],
            vector![9, 2],
            vector![12, 2],
        ]);
        let inside = dots.restricted_to(&AABB::new(matrix![1, 9; 0, 9]));
        assert_eq!(inside.n(), 2);
        assert_eq!(inside.dot(0), vector![5, 5]);
        assert_eq!(inside.dot(1), vector![9, 2]);
    }

    #[test]
    fn bounding_box_test() {
        let mut dots = DotList::new();
        assert_eq!(dots.bounding_box(), None);
        dots.add_dot(vector![3, 8]);
        dots.add_dot(vector![-1, 4]);
        dots.add_dot(vector![2, 9]);
        assert_eq!(
            dots.bounding_box(),
            Some(AABB::new(matrix![-1, 3; 4, 9]))
        );
        assert_eq!(dots.shift(&vector![1, 0]).dot(1), vector![0, 4]);
    }

    #[test]
    #[should_panic]
    fn dot_out_of_range_test() {
        let dots = DotList::from_dots(vec![vector![0, 0]]);
        let _ = dots.dot(1);
    }
}
