//! ID3 Decision Tree Classifier
use super::{
    entropy::{conditional_entropy, entropy},
    node::{Id3Node, UnseenValuePolicy},
    params::Id3Params,
};
use crate::{
    data::dataset::{Dataset, WholeNumber},
    metrics::classification::ClassificationMetrics,
};
use log::{debug, info, warn};
use nalgebra::{DMatrix, DVector};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::{
    collections::{BTreeSet, HashMap},
    error::Error,
};

/// Feature indices still eligible for splitting.
pub type FeatureSet = BTreeSet<usize>;

/// Categorical decision tree grown with ID3.
#[derive(Clone, Debug)]
pub struct DecisionTreeId3<XT: WholeNumber, YT: WholeNumber> {
    root: Option<Box<Id3Node<XT, YT>>>,
    n_features: usize,
    params: Id3Params,
}

impl<XT: WholeNumber, YT: WholeNumber> ClassificationMetrics<YT> for DecisionTreeId3<XT, YT> {}

impl<XT: WholeNumber, YT: WholeNumber> DecisionTreeId3<XT, YT> {
    /// Creates a new tree for labels in `0..class_num` with the default gain threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `class_num` is 0.
    pub fn new(class_num: usize) -> Result<Self, Box<dyn Error>> {
        Ok(Self::with_params(Id3Params::new(class_num)?))
    }

    pub fn with_params(params: Id3Params) -> Self {
        Self {
            root: None,
            n_features: 0,
            params,
        }
    }

    /// Sets the minimum information gain a split must reach.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is negative or NaN.
    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<(), Box<dyn Error>> {
        self.params.set_epsilon(epsilon)
    }

    /// Sets the number of classes.
    ///
    /// # Errors
    ///
    /// Returns an error if `class_num` is 0.
    pub fn set_class_num(&mut self, class_num: usize) -> Result<(), Box<dyn Error>> {
        self.params.set_class_num(class_num)
    }

    pub fn set_unseen_value_policy(&mut self, policy: UnseenValuePolicy) {
        self.params.set_unseen_value_policy(policy)
    }

    pub fn params(&self) -> &Id3Params {
        &self.params
    }

    pub fn root(&self) -> Option<&Id3Node<XT, YT>> {
        self.root.as_deref()
    }

    /// Builds the tree from a dataset using every feature column.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset is empty, its labels and rows don't line
    /// up, or a label lies outside `0..class_num`.
    pub fn fit(&mut self, dataset: &Dataset<XT, YT>) -> Result<String, Box<dyn Error>> {
        let features: FeatureSet = (0..dataset.ncols()).collect();
        let root = self.build_tree(dataset, &features)?;

        info!(
            "Built ID3 tree on {} samples: {} nodes, {} leaves, depth {}.",
            dataset.nrows(),
            root.n_nodes(),
            root.n_leaves(),
            root.depth()
        );
        self.n_features = dataset.ncols();
        self.root = Some(Box::new(root));
        Ok("Finished building the tree.".into())
    }

    /// Predicts a label for every row of `features`.
    ///
    /// A row gets `None` when it reaches an internal node through a feature
    /// value unseen in training and the policy is [`UnseenValuePolicy::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns an error if the tree wasn't built yet or the column count differs
    /// from the training data.
    pub fn predict(&self, features: &DMatrix<XT>) -> Result<DVector<Option<YT>>, Box<dyn Error>> {
        let root = self.root.as_ref().ok_or("Tree wasn't built yet.")?;
        if features.ncols() != self.n_features {
            return Err(format!(
                "Expected {} features, got {}.",
                self.n_features,
                features.ncols()
            )
            .into());
        }

        let policy = self.params.unseen_value_policy();
        let predictions: Vec<_> = features
            .row_iter()
            .map(|row| {
                let row: Vec<XT> = row.iter().copied().collect();
                root.predict(&row, policy)
            })
            .collect();

        let unknown = predictions.iter().filter(|p| p.is_none()).count();
        if unknown > 0 {
            warn!(
                "{} of {} rows hit a feature value unseen in training.",
                unknown,
                predictions.len()
            );
        }

        Ok(DVector::from_vec(predictions))
    }

    /// Grows a tree on `dataset` splitting only on features in `features`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset is empty, its labels and rows don't line
    /// up, a feature index is out of range or a label lies outside `0..class_num`.
    pub fn build_tree(
        &self,
        dataset: &Dataset<XT, YT>,
        features: &FeatureSet,
    ) -> Result<Id3Node<XT, YT>, Box<dyn Error>> {
        if dataset.nrows() == 0 {
            return Err("Can't build a tree from an empty dataset.".into());
        }
        if dataset.nrows() != dataset.y.len() {
            return Err(format!(
                "Dataset has {} rows but {} labels.",
                dataset.nrows(),
                dataset.y.len()
            )
            .into());
        }
        if let Some(feature) = features.iter().find(|&&f| f >= dataset.ncols()) {
            return Err(format!(
                "Feature index {} is out of range for {} features.",
                feature,
                dataset.ncols()
            )
            .into());
        }
        let class_num = self.params.class_num();
        if let Some(label) = dataset
            .y
            .iter()
            .find(|label| label.to_usize().map_or(true, |class| class >= class_num))
        {
            return Err(format!(
                "Label {} is outside of the class range 0..{}.",
                label, class_num
            )
            .into());
        }

        self.grow(dataset, features)
    }

    fn grow(
        &self,
        dataset: &Dataset<XT, YT>,
        features: &FeatureSet,
    ) -> Result<Id3Node<XT, YT>, Box<dyn Error>> {
        let labels = dataset.y.as_slice();

        let first = labels[0];
        if labels.iter().all(|&label| label == first) {
            return Ok(Id3Node::leaf(first));
        }

        let majority = self.majority_label(labels)?;
        if features.is_empty() {
            debug!("No features left for {} samples.", labels.len());
            return Ok(Id3Node::leaf(majority));
        }

        let (best_feature, best_gain) = Self::best_feature(dataset, features)?;
        if best_gain < self.params.epsilon() {
            debug!(
                "Best gain {:.6} on feature {} is below {}, stopping.",
                best_gain,
                best_feature,
                self.params.epsilon()
            );
            return Ok(Id3Node::leaf(majority));
        }

        debug!(
            "Splitting {} samples on feature {} (gain {:.6}).",
            labels.len(),
            best_feature,
            best_gain
        );

        let mut sub_features = features.clone();
        sub_features.remove(&best_feature);

        let mut children = HashMap::new();
        for (value, rows) in dataset.group_rows_by(best_feature) {
            let subset = dataset.select_rows(&rows);
            children.insert(value, self.grow(&subset, &sub_features)?);
        }

        Ok(Id3Node::Internal {
            feature_index: best_feature,
            children,
            majority,
        })
    }

    /// First feature (in ascending index order) with the strictly greatest gain.
    fn best_feature(
        dataset: &Dataset<XT, YT>,
        features: &FeatureSet,
    ) -> Result<(usize, f64), Box<dyn Error>> {
        let labels = dataset.y.as_slice();
        let candidates: Vec<usize> = features.iter().copied().collect();

        let base_entropy = entropy(labels);

        let gains = candidates
            .par_iter()
            .map(|&feature| {
                let gain = base_entropy - conditional_entropy(&dataset.column(feature), labels);
                (feature, gain)
            })
            .collect::<Vec<_>>();

        gains
            .into_iter()
            .fold(None, |best: Option<(usize, f64)>, (feature, gain)| match best {
                Some((_, best_gain)) if gain <= best_gain => best,
                _ => Some((feature, gain)),
            })
            .ok_or_else(|| "No candidate features to split on.".into())
    }

    /// Most frequent class, scanning `0..class_num` and keeping the first strict maximum.
    fn majority_label(&self, labels: &[YT]) -> Result<YT, Box<dyn Error>> {
        let mut counts = vec![0usize; self.params.class_num()];
        for label in labels {
            let class = label
                .to_usize()
                .ok_or(format!("Label {} isn't a class index.", label))?;
            counts[class] += 1;
        }

        let mut best_class = 0;
        for (class, &count) in counts.iter().enumerate() {
            if count > counts[best_class] {
                best_class = class;
            }
        }
        YT::from_usize(best_class)
            .ok_or_else(|| format!("Couldn't convert class {}.", best_class).into())
    }
}
