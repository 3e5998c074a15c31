use crate::data::dataset::WholeNumber;
use std::collections::HashMap;

/// What a prediction returns when an internal node has no child for the queried value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnseenValuePolicy {
    /// The prediction is absent (`None`).
    #[default]
    Unknown,
    /// The most common training label among the rows that reached the node.
    MajorityFallback,
}

/// ID3 decision tree node
#[derive(Clone, Debug, PartialEq)]
pub enum Id3Node<XT: WholeNumber, YT: WholeNumber> {
    Leaf {
        label: YT,
    },
    Internal {
        feature_index: usize,
        /// Only feature values observed during training have a child.
        children: HashMap<XT, Id3Node<XT, YT>>,
        majority: YT,
    },
}

impl<XT: WholeNumber, YT: WholeNumber> Id3Node<XT, YT> {
    pub fn leaf(label: YT) -> Self {
        Id3Node::Leaf { label }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Id3Node::Leaf { .. })
    }

    /// Walks the tree along `features` down to a leaf.
    ///
    /// Returns `None` when an internal node has no child for the value at its
    /// split feature and `policy` is [`UnseenValuePolicy::Unknown`].
    pub fn predict(&self, features: &[XT], policy: UnseenValuePolicy) -> Option<YT> {
        let mut node = self;
        loop {
            match node {
                Id3Node::Leaf { label } => return Some(*label),
                Id3Node::Internal {
                    feature_index,
                    children,
                    majority,
                } => match children.get(&features[*feature_index]) {
                    Some(child) => node = child,
                    None => {
                        return match policy {
                            UnseenValuePolicy::Unknown => None,
                            UnseenValuePolicy::MajorityFallback => Some(*majority),
                        }
                    }
                },
            }
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Id3Node::Leaf { .. } => 0,
            Id3Node::Internal { children, .. } => {
                1 + children.values().map(Self::depth).max().unwrap_or(0)
            }
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Id3Node::Leaf { .. } => 1,
            Id3Node::Internal { children, .. } => {
                1 + children.values().map(Self::n_nodes).sum::<usize>()
            }
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Id3Node::Leaf { .. } => 1,
            Id3Node::Internal { children, .. } => children.values().map(Self::n_leaves).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // x0 == 0 -> 1; x0 == 1 -> (x1 == 0 -> 0; x1 == 1 -> 2)
    fn sample_tree() -> Id3Node<u8, u8> {
        let inner = Id3Node::Internal {
            feature_index: 1,
            children: HashMap::from([(0, Id3Node::leaf(0)), (1, Id3Node::leaf(2))]),
            majority: 2,
        };
        Id3Node::Internal {
            feature_index: 0,
            children: HashMap::from([(0, Id3Node::leaf(1)), (1, inner)]),
            majority: 1,
        }
    }

    #[test]
    fn test_leaf_predicts_label() {
        let leaf: Id3Node<u8, u8> = Id3Node::leaf(4);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.predict(&[9, 9], UnseenValuePolicy::Unknown), Some(4));
    }

    #[test]
    fn test_predict_walks_value_path() {
        let tree = sample_tree();
        let policy = UnseenValuePolicy::Unknown;

        assert_eq!(tree.predict(&[0, 0], policy), Some(1));
        assert_eq!(tree.predict(&[0, 1], policy), Some(1));
        assert_eq!(tree.predict(&[1, 0], policy), Some(0));
        assert_eq!(tree.predict(&[1, 1], policy), Some(2));
    }

    #[test]
    fn test_predict_unseen_value_is_unknown() {
        let tree = sample_tree();
        assert_eq!(tree.predict(&[3, 0], UnseenValuePolicy::Unknown), None);
        assert_eq!(tree.predict(&[1, 7], UnseenValuePolicy::Unknown), None);
    }

    #[test]
    fn test_predict_unseen_value_majority_fallback() {
        let tree = sample_tree();
        let policy = UnseenValuePolicy::MajorityFallback;
        assert_eq!(tree.predict(&[3, 0], policy), Some(1));
        assert_eq!(tree.predict(&[1, 7], policy), Some(2));
    }

    #[test]
    fn test_tree_shape() {
        let tree = sample_tree();
        assert!(!tree.is_leaf());
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_nodes(), 5);
        assert_eq!(tree.n_leaves(), 3);
    }
}
