use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::PathPlannerError;
use crate::evolutionary_algos::Genetic;
use crate::graph::{Distance, RoadMap};


/// Tuning knobs for the searches
/// Every field has a default, so a JSON file only needs the values it overrides
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Depth limit for depth-limited search
    pub depth_limit: usize,
    /// Exclusive bound on the depth tried by iterative deepening
    pub max_depth: usize,
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub elite_count: usize,
    pub parent_pool: usize,
    /// Fitness penalty for a path that misses the goal or leaves the roads
    /// Must exceed every cheapest route on the map, so a penalised path never outscores a real one
    pub penalty: Distance,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth_limit: 10,
            max_depth: 50,
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            elite_count: 10,
            parent_pool: 20,
            penalty: 1000,
        }
    }
}

impl SearchOptions {

    /// Read options from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PathPlannerError> {
        let text = std::fs::read_to_string(path)?;
        let options: SearchOptions = serde_json::from_str(&text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), PathPlannerError> {
        if self.population_size < 2 {
            return Err(PathPlannerError::InvalidOptions(format!(
                "population_size must be at least 2, got {}", self.population_size
            )));
        }
        if self.parent_pool < 2 {
            return Err(PathPlannerError::InvalidOptions(format!(
                "parent_pool must be at least 2, got {}", self.parent_pool
            )));
        }
        if self.elite_count > self.population_size {
            return Err(PathPlannerError::InvalidOptions(format!(
                "elite_count ({}) exceeds population_size ({})", self.elite_count, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(PathPlannerError::InvalidOptions(format!(
                "mutation_rate must lie in [0, 1], got {}", self.mutation_rate
            )));
        }
        let longest = RoadMap::romania().longest_route();
        if self.penalty <= longest {
            return Err(PathPlannerError::InvalidOptions(format!(
                "penalty must exceed the longest route on the map ({}), got {}", longest, self.penalty
            )));
        }
        Ok(())
    }

    pub fn genetic(&self) -> Genetic<Distance> {
        Genetic {
            population_size: self.population_size,
            generations: self.generations,
            mutation_rate: self.mutation_rate,
            elite_count: self.elite_count,
            parent_pool: self.parent_pool,
            penalty: self.penalty,
        }
    }
}
