//! Delimited text reading.

mod reader;

pub use reader::{read_dataset, read_dataset_from_reader};
