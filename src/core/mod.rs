//! Core functionality for project classification and kit usage aggregation

pub mod aggregator;
pub mod classifier;
pub mod parallel;
pub mod scanner;

pub use aggregator::ProjectAggregator;
pub use classifier::PathClassifier;
pub use scanner::KitScanner;
