//! # rusty-id3
//!
//! `rusty-id3` builds categorical decision trees with the ID3 algorithm and uses them to classify
//! feature vectors. It also contains the utilities needed around it: a dataset type with a
//! train/test splitter, a CSV loader, a binarizer for continuous features and an accuracy metric.
//!
//! ## Getting Started
//!
//! To use `rusty-id3`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-id3 = "*"
//! ```
//!
//! ## Example Usage
//!
//! Feature 0 separates the two classes, so the tree splits on it:
//!
//! ```rust
//!
//! use rusty_id3::data::dataset::*;
//! use rusty_id3::trees::id3::*;
//! use nalgebra::{DMatrix, DVector};
//!
//! let x = DMatrix::from_row_slice(4, 2, &[0u8, 0, 0, 1, 1, 0, 1, 1]);
//! let y = DVector::from_vec(vec![0u8, 0, 1, 1]);
//!
//! let dataset = Dataset::new(x, y);
//!
//! let mut model = DecisionTreeId3::new(2).unwrap();
//!
//! model.fit(&dataset).unwrap();
//!
//! let test_x = DMatrix::from_row_slice(3, 2, &[0u8, 1, 1, 1, 2, 0]);
//!
//! let predictions = model.predict(&test_x).unwrap();
//! assert_eq!(predictions, DVector::from_vec(vec![Some(0), Some(1), None]));
//! ```

/// Dataset and data manipulation utilities
pub mod data;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;
