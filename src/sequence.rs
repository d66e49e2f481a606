use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Deref;
use std::sync::Arc;

/// An ordered list of real numbers.
/// The data is stored in an Arc for cheap cloning; the engine only ever borrows it.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericSequence {
    pub data: Arc<[f64]>,
}

impl NumericSequence {
    /// Create a new sequence from the given values.
    pub fn new(data: Vec<f64>) -> Self {
        Self { data: data.into() }
    }

    /// Create a random sequence with values uniformly distributed in `[low, high)`.
    pub fn random(len: usize, low: f64, high: f64) -> Self {
        let mut rng = rand::thread_rng();
        let data: Vec<f64> = (0..len).map(|_| rng.gen_range(low..high)).collect();
        Self::new(data)
    }

    /// Create a random sequence of whole numbers in `[low, high]`.
    pub fn random_integers(len: usize, low: i64, high: i64) -> Self {
        let mut rng = rand::thread_rng();
        let data: Vec<f64> = (0..len)
            .map(|_| rng.gen_range(low..=high) as f64)
            .collect();
        Self::new(data)
    }

    /// Return a copy of this sequence with its elements in random order.
    pub fn shuffled(&self) -> Self {
        let mut data = self.data.to_vec();
        data.shuffle(&mut rand::thread_rng());
        Self::new(data)
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return true if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the data as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Deref for NumericSequence {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.data
    }
}

impl AsRef<[f64]> for NumericSequence {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl From<Vec<f64>> for NumericSequence {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl From<&[f64]> for NumericSequence {
    fn from(data: &[f64]) -> Self {
        Self { data: data.into() }
    }
}
