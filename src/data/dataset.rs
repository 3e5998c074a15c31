use nalgebra::{DMatrix, DVector};
use num_traits::{FromPrimitive, Num, ToPrimitive};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{self, Display};
use std::fmt::{Debug, Formatter};
use std::hash::Hash;

pub trait DataValue:
    Debug + Clone + Copy + Num + FromPrimitive + ToPrimitive + Send + Sync + Display + 'static
{
}

impl<T> DataValue for T where
    T: Debug + Clone + Copy + Num + FromPrimitive + ToPrimitive + Send + Sync + Display + 'static
{
}

pub trait Number: DataValue + PartialOrd {}
impl<T> Number for T where T: DataValue + PartialOrd {}

/// Discrete values usable both as categorical features and as class labels.
pub trait WholeNumber: Number + Eq + Hash {}
impl<T> WholeNumber for T where T: Number + Eq + Hash {}

/// Feature matrix with one row per instance and a parallel label vector.
pub struct Dataset<XT: Number, YT: DataValue> {
    pub x: DMatrix<XT>,
    pub y: DVector<YT>,
}

impl<XT: Number, YT: DataValue> Debug for Dataset<XT, YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset {{\n    x: [\n")?;

        for i in 0..self.x.nrows() {
            write!(f, "        [")?;
            for j in 0..self.x.ncols() {
                write!(f, "{:?}, ", self.x[(i, j)])?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ],\n    y: [")?;
        for i in 0..self.y.len() {
            write!(f, "{:?}, ", self.y[i])?;
        }
        write!(f, "]\n}}")
    }
}

impl<XT: Number, YT: DataValue> Dataset<XT, YT> {
    pub fn new(x: DMatrix<XT>, y: DVector<YT>) -> Self {
        Self { x, y }
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.x.ncols()
    }

    /// Copies one feature column out of the matrix.
    pub fn column(&self, feature_index: usize) -> Vec<XT> {
        self.x.column(feature_index).iter().copied().collect()
    }

    /// Builds a new dataset from the given rows, in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self::new(
            self.x.select_rows(indices.iter()),
            self.y.select_rows(indices.iter()),
        )
    }

    /// Row indices grouped by their value at `feature_index`.
    ///
    /// Groups are returned in order of first appearance and every group keeps
    /// the original row order.
    pub fn group_rows_by(&self, feature_index: usize) -> Vec<(XT, Vec<usize>)>
    where
        XT: WholeNumber,
    {
        let mut positions: HashMap<XT, usize> = HashMap::new();
        let mut groups: Vec<(XT, Vec<usize>)> = Vec::new();

        for (row, value) in self.x.column(feature_index).iter().enumerate() {
            match positions.get(value) {
                Some(&position) => groups[position].1.push(row),
                None => {
                    positions.insert(*value, groups.len());
                    groups.push((*value, vec![row]));
                }
            }
        }
        groups
    }

    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), Box<dyn Error>> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err("Train size should be between 0.0 and 1.0".into());
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.x.nrows()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.x.nrows() as f64 * train_size).floor() as usize;
        let (train_indices, test_indices) = indices.split_at(train_size);

        Ok((self.select_rows(train_indices), self.select_rows(test_indices)))
    }
}
