use rusty_id3::data::loader::read_file_classification;
use rusty_id3::data::preprocessing::Binarizer;
use rusty_id3::metrics::classification::ClassificationMetrics;
use rusty_id3::trees::id3::DecisionTreeId3;
use std::env;
use std::error::Error;
use std::time::Instant;

const CLASS_NUM: usize = 10;
const EPSILON: f64 = 0.001;
const PIXEL_THRESHOLD: f64 = 50.0;

fn run(file_path: &str) -> Result<(), Box<dyn Error>> {
    println!("Reading {}", file_path);
    let raw = read_file_classification(file_path, 0, true)?;
    let dataset = Binarizer::inverted(PIXEL_THRESHOLD).transform_dataset(&raw);
    println!(
        "Loaded {} images with {} features",
        dataset.nrows(),
        dataset.ncols()
    );

    let (train_dataset, test_dataset) = dataset.train_test_split(0.67, Some(0))?;

    println!("Training");
    let start = Instant::now();
    let mut tree = DecisionTreeId3::new(CLASS_NUM)?;
    tree.set_epsilon(EPSILON)?;
    println!("{}", tree.fit(&train_dataset)?);
    println!("Training took {:.3} seconds", start.elapsed().as_secs_f64());

    println!("Predicting");
    let start = Instant::now();
    let predictions = tree.predict(&test_dataset.x)?;
    println!("Prediction took {:.3} seconds", start.elapsed().as_secs_f64());

    println!(
        "Accuracy: {:.4} ({:.2}% unknown)",
        tree.accuracy(&test_dataset.y, &predictions)?,
        tree.unknown_rate(&predictions)? * 100.0
    );
    Ok(())
}

fn main() {
    let file_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/train.csv".to_string());

    if let Err(err) = run(&file_path) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
