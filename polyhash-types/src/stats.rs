use serde::{Deserialize, Serialize};

/// Counters for a single generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Grid points pulled from the enumerator
    pub grid_points: u64,
    /// Grid points the classifier placed inside the polygon
    pub inside_points: u64,
    /// Unique geohashes handed to the caller
    pub emitted: u64,
    /// Inside points whose geohash had already been emitted
    pub duplicates: u64,
}

impl GenerationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_grid_point(&mut self) {
        self.grid_points += 1;
    }

    pub fn record_inside(&mut self) {
        self.inside_points += 1;
    }

    pub fn record_emitted(&mut self) {
        self.emitted += 1;
    }

    pub fn record_duplicate(&mut self) {
        self.duplicates += 1;
    }
}
