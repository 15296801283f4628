//! Injectable randomness for placement decisions.
//!
//! Every draw the placement driver makes (batch size, shuffle, aspect,
//! colour, content) goes through `RandomSource`, so a seeded generator
//! replays the exact same sequence of rectangles.

use rand::{Rng, RngCore};

pub trait RandomSource {
    /// Uniform integer in `0..bound`. Callers never pass `bound == 0`.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.below(items.len()))
    }

    /// Fisher-Yates, walking from the back.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RngCore> RandomSource for R {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
