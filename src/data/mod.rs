//! Data structures for community count summaries.

mod count_matrix;
mod dataset_name;

pub use count_matrix::CountMatrix;
pub use dataset_name::DatasetName;
