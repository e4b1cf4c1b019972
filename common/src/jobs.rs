//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Job id to class name table
//!
//! The table is built once at application start, either from the bundled
//! `jobs.yaml` or from an operator supplied file, and then shared read-only.

use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Job table shipped with the crate.
pub const BUNDLED_JOBS: &str = include_str!("../jobs.yaml");

#[derive(Debug, Error)]
pub enum JobTableError {
    #[error("Failed to read job table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse job table: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid job table entry `{0}`")]
    InvalidEntry(String),

    #[error("Job table is empty")]
    Empty,
}

/// Immutable mapping from job id to canonical class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobTable {
    jobs: BTreeMap<i64, String>,
}

impl JobTable {
    /// Parse the table bundled with the crate.
    pub fn bundled() -> Result<Self, JobTableError> {
        Self::from_yaml_str(BUNDLED_JOBS)
    }

    /// Load a table from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, JobTableError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| JobTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Parse a YAML mapping of job id (integer or quoted) to name.
    pub fn from_yaml_str(contents: &str) -> Result<Self, JobTableError> {
        let mapping: serde_yaml::Mapping = serde_yaml::from_str(contents)?;
        let mut jobs = BTreeMap::new();
        for (key, value) in mapping {
            let id = match &key {
                serde_yaml::Value::Number(number) => number.as_i64(),
                serde_yaml::Value::String(text) => text.trim().parse().ok(),
                _ => None,
            };
            let (Some(id), Some(name)) = (id, value.as_str()) else {
                return Err(JobTableError::InvalidEntry(format!("{:?}: {:?}", key, value)));
            };
            jobs.insert(id, name.to_string());
        }
        if jobs.is_empty() {
            return Err(JobTableError::Empty);
        }
        Ok(Self { jobs })
    }

    pub fn name(&self, job: i64) -> Option<&str> {
        self.jobs.get(&job).map(String::as_str)
    }

    pub fn contains(&self, job: i64) -> bool {
        self.jobs.contains_key(&job)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.jobs.iter().map(|(id, name)| (*id, name.as_str()))
    }
}
