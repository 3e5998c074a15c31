use crate::data::dataset::{DataValue, Dataset, Number};
use nalgebra::DMatrix;

/// Turns continuous features into binary `0`/`1` features with a fixed threshold.
#[derive(Clone, Debug)]
pub struct Binarizer<T: Number> {
    threshold: T,
    inverted: bool,
}

impl<T: Number> Binarizer<T> {
    /// Values strictly above `threshold` become `1`, the rest `0`.
    pub fn new(threshold: T) -> Self {
        Self {
            threshold,
            inverted: false,
        }
    }

    /// Values strictly above `threshold` become `0`, the rest `1`.
    pub fn inverted(threshold: T) -> Self {
        Self {
            threshold,
            inverted: true,
        }
    }

    pub fn threshold(&self) -> T {
        self.threshold
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn transform(&self, x: &DMatrix<T>) -> DMatrix<u8> {
        x.map(|value| u8::from((value > self.threshold) != self.inverted))
    }

    pub fn transform_dataset<YT: DataValue>(&self, dataset: &Dataset<T, YT>) -> Dataset<u8, YT> {
        Dataset::new(self.transform(&dataset.x), dataset.y.clone())
    }
}
