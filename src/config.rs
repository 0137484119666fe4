//! Benchmark configuration, read as JSON.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One text/pattern pair.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BenchCase {
    pub text: String,
    pub pattern: String,
}

/// Settings for a benchmark run. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Explicit cases, run before any generated ones.
    pub cases: Vec<BenchCase>,
    pub warmup_iterations: usize,
    /// How long each searcher is timed for.
    pub target_time_ms: u64,
    /// Append the generated corpus.
    pub include_generated: bool,
    /// Seed for the generated corpus; random when absent.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            cases: Vec::new(),
            warmup_iterations: 10,
            target_time_ms: 500,
            include_generated: true,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_time_ms == 0 {
            return Err(Error::Config("target_time_ms must be positive".into()));
        }
        if self.cases.is_empty() && !self.include_generated {
            return Err(Error::Config(
                "no cases given and include_generated is off".into(),
            ));
        }
        if let Some(i) = self.cases.iter().position(|c| c.pattern.is_empty()) {
            return Err(Error::Config(format!("case {} has an empty pattern", i)));
        }
        Ok(())
    }

    /// The explicit cases as byte pairs.
    pub fn byte_cases(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.cases
            .iter()
            .map(|c| (c.text.as_bytes().to_vec(), c.pattern.as_bytes().to_vec()))
            .collect()
    }
}
