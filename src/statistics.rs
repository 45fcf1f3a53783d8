//! Scalar reductions gathered by reductive functionals.
//!
//! Slots are subscribed once, when the functional is built, and addressed
//! by the returned handle afterwards. Values gathered during a run stay
//! tentative until `evaluate` publishes them, so a processor can gather
//! cell by cell and the caller only ever sees finished results.

use crate::error::DispatchViolation;

#[derive(Clone, Debug, PartialEq)]
pub struct BlockStatistics {
    tentative_averages: Vec<f64>,
    tentative_sums: Vec<f64>,
    tentative_maxima: Vec<f64>,
    tentative_int_sums: Vec<i64>,
    tentative_num_cells: u64,

    averages: Vec<f64>,
    sums: Vec<f64>,
    maxima: Vec<f64>,
    int_sums: Vec<i64>,
    num_cells: u64,
}

impl Default for BlockStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStatistics {
    pub fn new() -> Self {
        BlockStatistics {
            tentative_averages: Vec::new(),
            tentative_sums: Vec::new(),
            tentative_maxima: Vec::new(),
            tentative_int_sums: Vec::new(),
            tentative_num_cells: 0,
            averages: Vec::new(),
            sums: Vec::new(),
            maxima: Vec::new(),
            int_sums: Vec::new(),
            num_cells: 0,
        }
    }

    pub fn subscribe_average(&mut self) -> usize {
        self.tentative_averages.push(0.0);
        self.averages.push(0.0);
        self.averages.len() - 1
    }

    pub fn subscribe_sum(&mut self) -> usize {
        self.tentative_sums.push(0.0);
        self.sums.push(0.0);
        self.sums.len() - 1
    }

    pub fn subscribe_max(&mut self) -> usize {
        self.tentative_maxima.push(f64::NEG_INFINITY);
        self.maxima.push(f64::NEG_INFINITY);
        self.maxima.len() - 1
    }

    pub fn subscribe_int_sum(&mut self) -> usize {
        self.tentative_int_sums.push(0);
        self.int_sums.push(0);
        self.int_sums.len() - 1
    }

    /// Add `value` to an average slot. Pair with one `increment_stats`
    /// per visited cell.
    #[inline]
    pub fn gather_average(&mut self, handle: usize, value: f64) {
        self.tentative_averages[handle] += value;
    }

    #[inline]
    pub fn gather_sum(&mut self, handle: usize, value: f64) {
        self.tentative_sums[handle] += value;
    }

    #[inline]
    pub fn gather_max(&mut self, handle: usize, value: f64) {
        let slot = &mut self.tentative_maxima[handle];
        *slot = slot.max(value);
    }

    #[inline]
    pub fn gather_int_sum(&mut self, handle: usize, value: i64) {
        self.tentative_int_sums[handle] += value;
    }

    /// Count one cell towards the averages.
    #[inline]
    pub fn increment_stats(&mut self) {
        self.tentative_num_cells += 1;
    }

    /// Publish the tentative values and start over.
    pub fn evaluate(&mut self) {
        let n = self.tentative_num_cells;
        for (average, tentative) in
            self.averages.iter_mut().zip(self.tentative_averages.iter_mut())
        {
            *average = if n > 0 { *tentative / n as f64 } else { 0.0 };
            *tentative = 0.0;
        }
        for (sum, tentative) in
            self.sums.iter_mut().zip(self.tentative_sums.iter_mut())
        {
            *sum = std::mem::take(tentative);
        }
        for (max, tentative) in
            self.maxima.iter_mut().zip(self.tentative_maxima.iter_mut())
        {
            *max = std::mem::replace(tentative, f64::NEG_INFINITY);
        }
        for (int_sum, tentative) in
            self.int_sums.iter_mut().zip(self.tentative_int_sums.iter_mut())
        {
            *int_sum = std::mem::take(tentative);
        }
        self.num_cells = n;
        self.tentative_num_cells = 0;
    }

    /// Replace the published values with the merge of `parts`.
    ///
    /// Sums add, maxima take the largest value, averages are weighted by
    /// the number of cells each part saw. Every part must carry the same
    /// subscriptions as `self`.
    #[track_caller]
    pub fn combine(&mut self, parts: &[BlockStatistics]) {
        for part in parts {
            if !self.same_subscriptions(part) {
                DispatchViolation::SubscriptionMismatch.raise();
            }
        }
        self.sums.fill(0.0);
        self.maxima.fill(f64::NEG_INFINITY);
        self.int_sums.fill(0);
        self.averages.fill(0.0);
        self.num_cells = 0;
        for part in parts {
            for (sum, s) in self.sums.iter_mut().zip(&part.sums) {
                *sum += s;
            }
            for (max, m) in self.maxima.iter_mut().zip(&part.maxima) {
                *max = max.max(*m);
            }
            for (int_sum, s) in self.int_sums.iter_mut().zip(&part.int_sums) {
                *int_sum += s;
            }
            for (average, a) in self.averages.iter_mut().zip(&part.averages) {
                *average += a * part.num_cells as f64;
            }
            self.num_cells += part.num_cells;
        }
        if self.num_cells > 0 {
            let n = self.num_cells as f64;
            self.averages.iter_mut().for_each(|a| *a /= n);
        }
    }

    pub fn same_subscriptions(&self, other: &BlockStatistics) -> bool {
        self.averages.len() == other.averages.len()
            && self.sums.len() == other.sums.len()
            && self.maxima.len() == other.maxima.len()
            && self.int_sums.len() == other.int_sums.len()
    }

    #[track_caller]
    pub fn average(&self, handle: usize) -> f64 {
        self.averages[handle]
    }

    #[track_caller]
    pub fn sum(&self, handle: usize) -> f64 {
        self.sums[handle]
    }

    /// `-inf` until at least one value was gathered.
    #[track_caller]
    pub fn max(&self, handle: usize) -> f64 {
        self.maxima[handle]
    }

    #[track_caller]
    pub fn int_sum(&self, handle: usize) -> i64 {
        self.int_sums[handle]
    }

    /// Cells counted by `increment_stats` before the last evaluation.
    pub fn num_cells(&self) -> u64 {
        self.num_cells
    }
}
