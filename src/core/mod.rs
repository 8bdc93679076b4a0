//! Core data structures shared by the feature generators.

mod feature_matrix;

pub use feature_matrix::FeatureMatrix;
