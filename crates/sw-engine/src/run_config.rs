use serde::{Deserialize, Serialize};
use std::path::Path;
use sw_types::{validation_error, SearchConfig, SearchOutcome, SwResult};
use tracing::info;

use crate::evaluator::Progress;
use crate::objectives::Objective;

fn default_scale() -> f64 {
    1.0
}

/// A search paired with one of the built-in objectives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub search: SearchConfig,
    pub objective: Objective,
    /// Real-valued size of one lattice unit.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl RunConfig {
    pub fn new(search: SearchConfig, objective: Objective) -> Self {
        Self {
            search,
            objective,
            scale: default_scale(),
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn from_json_str(json: &str) -> SwResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> SwResult<Self> {
        let path = path.as_ref();
        info!("Loading run configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> SwResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(validation_error!(
                "scale must be finite and positive, got {}",
                self.scale
            ));
        }
        Ok(())
    }

    pub fn execute(&self, progress: Progress<'_>) -> SearchOutcome {
        info!(
            objective = self.objective.name(),
            topology = self.search.topology.name(),
            runs = self.search.runs,
            "running search"
        );
        crate::minimize(&self.search, self.objective.at_scale(self.scale), progress)
    }
}
