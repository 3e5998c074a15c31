use crate::data::dataset::Dataset;
use csv::{Reader, ReaderBuilder};
use nalgebra::{DMatrix, DVector};
use std::error::Error;
use std::io::Read;

/// Reads a classification dataset from a CSV file.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file.
/// * `label_index` - Column holding the integer class label. Every other column is a feature.
/// * `header` - Whether the first record is a header row.
///
/// # Errors
///
/// Returns an error if the file can't be read, a field can't be parsed,
/// rows have different lengths or the file holds no records.
pub fn read_file_classification(
    file_path: &str,
    label_index: usize,
    header: bool,
) -> Result<Dataset<f64, u8>, Box<dyn Error>> {
    let reader = ReaderBuilder::new()
        .has_headers(header)
        .from_path(file_path)?;
    read_records(reader, label_index)
}

/// Same as [`read_file_classification`], for any reader.
pub fn read_classification<R: Read>(
    source: R,
    label_index: usize,
    header: bool,
) -> Result<Dataset<f64, u8>, Box<dyn Error>> {
    let reader = ReaderBuilder::new().has_headers(header).from_reader(source);
    read_records(reader, label_index)
}

fn read_records<R: Read>(
    mut reader: Reader<R>,
    label_index: usize,
) -> Result<Dataset<f64, u8>, Box<dyn Error>> {
    let mut features: Vec<f64> = Vec::new();
    let mut labels = Vec::new();
    let mut dimension = None;

    for (line, result) in reader.records().enumerate() {
        let record = result?;

        let label = record
            .get(label_index)
            .ok_or(format!("Missing label in record {}.", line))?;
        labels.push(label.trim().parse::<u8>().map_err(|err| {
            format!("Couldn't parse label {:?} in record {}: {}", label, line, err)
        })?);

        let row_len = record.len() - 1;
        match dimension {
            None => dimension = Some(row_len),
            Some(expected) if expected != row_len => {
                return Err(format!(
                    "Record {} has {} features, expected {}.",
                    line, row_len, expected
                )
                .into());
            }
            _ => {}
        }

        for (idx, field) in record.iter().enumerate() {
            if idx == label_index {
                continue;
            }
            features.push(field.trim().parse::<f64>().map_err(|err| {
                format!("Couldn't parse feature {:?} in record {}: {}", field, line, err)
            })?);
        }
    }

    let dimension = dimension.ok_or("The file contains no records.")?;
    let feature_matrix = DMatrix::from_row_slice(labels.len(), dimension, &features);
    let label_vector = DVector::from_vec(labels);

    Ok(Dataset::new(feature_matrix, label_vector))
}
