use std::error::Error;

use nalgebra::DVector;

use crate::data::dataset::WholeNumber;

pub trait ClassificationMetrics<T: WholeNumber> {
    /// Computes the accuracy of predictions that may be unknown.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels, `None` where the model had no answer.
    ///
    /// # Returns
    ///
    /// The share of predictions equal to the true label. Unknown predictions
    /// count as misses.
    fn accuracy(
        &self,
        y_true: &DVector<T>,
        y_pred: &DVector<Option<T>>,
    ) -> Result<f64, Box<dyn Error>> {
        if y_true.len() != y_pred.len() {
            return Err("Predictions and labels are of different sizes.".into());
        }
        if y_true.is_empty() {
            return Err("Can't compute the accuracy of zero predictions.".into());
        }

        let correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(y_t, y_p)| y_p.as_ref() == Some(*y_t))
            .count();

        Ok(correct as f64 / y_true.len() as f64)
    }

    /// Share of predictions the model couldn't make.
    fn unknown_rate(&self, y_pred: &DVector<Option<T>>) -> Result<f64, Box<dyn Error>> {
        if y_pred.is_empty() {
            return Err("Can't compute the unknown rate of zero predictions.".into());
        }
        let unknown = y_pred.iter().filter(|y_p| y_p.is_none()).count();
        Ok(unknown as f64 / y_pred.len() as f64)
    }
}
