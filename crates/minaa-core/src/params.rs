//! Run parameters for a single alignment

use crate::error::{AlignError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Balance and threshold parameters for one alignment run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignParams {
    /// Weight of full-signature similarity against raw degree similarity.
    pub alpha: f64,
    /// Weight of the topological costs against the biological costs.
    pub beta: f64,
    /// Minimum alignment score accepted as a match.
    pub gamma: f64,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            gamma: 0.0,
        }
    }
}

impl AlignParams {
    /// Reject alpha and gamma outside [0, 1].
    ///
    /// Beta is not checked here: the combiner degrades to beta = 1 instead.
    pub fn validate(&self) -> Result<()> {
        check_unit("alpha", self.alpha)?;
        check_unit("gamma", self.gamma)?;
        Ok(())
    }

    /// Parse a TOML parameter table. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let params: AlignParams = toml::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    /// Load a TOML parameter file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let params = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded parameters from {}: {:?}", path.display(), params);
        Ok(params)
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AlignError::InvalidParameter { name, value });
    }
    Ok(())
}
