pub mod genetic;

pub use genetic::{Evolution, Genetic, Individual};
