//! Empirical entropy, conditional entropy and information gain over discrete columns.
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts of each distinct value, in order of first appearance.
fn value_counts<T: Eq + Hash>(values: &[T]) -> Vec<usize> {
    let mut positions: HashMap<&T, usize> = HashMap::new();
    let mut counts: Vec<usize> = Vec::new();
    for value in values {
        match positions.get(value) {
            Some(&position) => counts[position] += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push(1);
            }
        }
    }
    counts
}

/// Shannon entropy (base 2) of the empirical distribution of `labels`.
///
/// Returns `0.0` when every label is the same, and also for an empty slice.
/// Terms are summed in order of first appearance, so equal inputs always give
/// bit-identical results.
pub fn entropy<T: Eq + Hash>(labels: &[T]) -> f64 {
    let total = labels.len() as f64;
    value_counts(labels)
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of `labels` given the values of one feature, `H(Y | X)`.
///
/// `feature_values` and `labels` are parallel: one entry per instance.
pub fn conditional_entropy<X: Eq + Hash, Y: Eq + Hash + Clone>(
    feature_values: &[X],
    labels: &[Y],
) -> f64 {
    debug_assert_eq!(feature_values.len(), labels.len());

    let total = labels.len() as f64;
    let mut positions: HashMap<&X, usize> = HashMap::new();
    let mut partitions: Vec<Vec<Y>> = Vec::new();
    for (value, label) in feature_values.iter().zip(labels) {
        match positions.get(value) {
            Some(&position) => partitions[position].push(label.clone()),
            None => {
                positions.insert(value, partitions.len());
                partitions.push(vec![label.clone()]);
            }
        }
    }

    partitions
        .iter()
        .map(|sub_labels| (sub_labels.len() as f64 / total) * entropy(sub_labels))
        .sum()
}

/// Reduction of label entropy obtained by partitioning on a feature.
pub fn information_gain<X: Eq + Hash, Y: Eq + Hash + Clone>(
    feature_values: &[X],
    labels: &[Y],
) -> f64 {
    entropy(labels) - conditional_entropy(feature_values, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_entropy_homogeneous() {
        assert_eq!(entropy(&[1, 1, 1, 1]), 0.0);
        assert_eq!(entropy(&[7]), 0.0);
    }

    #[test]
    fn test_entropy_empty() {
        assert_eq!(entropy::<u8>(&[]), 0.0);
    }

    #[test]
    fn test_entropy_uniform_is_maximal() {
        assert_abs_diff_eq!(entropy(&[0, 1]), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(entropy(&[0, 1, 2, 3]), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(entropy(&[0, 0, 1, 1, 2, 2]), 3f64.log2(), epsilon = 1e-12);

        let skewed = entropy(&[0, 0, 0, 1, 2, 2]);
        assert!(skewed > 0.0);
        assert!(skewed < 3f64.log2());
    }

    #[test]
    fn test_entropy_mixed() {
        // p = 1/4, 3/4
        let expected = -(0.25f64 * 0.25f64.log2()) - 0.75 * 0.75f64.log2();
        assert_abs_diff_eq!(entropy(&[1, 0, 0, 0]), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_conditional_entropy_perfect_split() {
        let feature = [0, 0, 1, 1];
        let labels = [5, 5, 9, 9];
        assert_abs_diff_eq!(conditional_entropy(&feature, &labels), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_conditional_entropy_uninformative() {
        let feature = [0, 1, 0, 1];
        let labels = [0, 0, 1, 1];
        assert_abs_diff_eq!(conditional_entropy(&feature, &labels), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_conditional_entropy_weighted() {
        // value 0 -> [0, 0] (H = 0), value 1 -> [0, 1] (H = 1), each weighted 1/2
        let feature = [0, 0, 1, 1];
        let labels = [0, 0, 0, 1];
        assert_abs_diff_eq!(conditional_entropy(&feature, &labels), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_conditional_entropy_bounded_by_entropy() {
        let feature = [0, 2, 1, 1, 0, 2, 2, 1];
        let labels = [1, 0, 1, 2, 1, 0, 0, 2];
        let h = entropy(&labels);
        let h_cond = conditional_entropy(&feature, &labels);
        assert!(h_cond >= 0.0);
        assert!(h_cond <= h + 1e-12);
    }

    #[test]
    fn test_information_gain() {
        assert_abs_diff_eq!(
            information_gain(&[0, 0, 1, 1], &[0, 0, 1, 1]),
            1.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            information_gain(&[0, 1, 0, 1], &[0, 0, 1, 1]),
            0.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            information_gain(&[0, 0, 1, 1], &[0, 0, 0, 1]),
            entropy(&[0, 0, 0, 1]) - 0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_equal_columns_give_identical_results() {
        let labels = [0, 1, 2, 3, 4, 5, 6, 6, 5, 4, 3, 2, 1, 0, 0, 2, 4, 6, 1, 3, 5];
        let feature = [1, 4, 0, 6, 2, 5, 3, 4, 0, 1, 6, 5, 2, 3, 0, 4, 5, 1, 6, 3, 2];

        let first_entropy = entropy(&labels);
        let first_gain = information_gain(&feature, &labels);
        for _ in 0..200 {
            assert_eq!(entropy(&labels).to_bits(), first_entropy.to_bits());
            assert_eq!(
                information_gain(&feature, &labels).to_bits(),
                first_gain.to_bits()
            );
        }
    }

    #[test]
    fn test_information_gain_constant_feature() {
        let labels = [0, 1, 1, 2];
        assert_abs_diff_eq!(information_gain(&[3, 3, 3, 3], &labels), 0.0, epsilon = 1e-12);
    }
}
