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

//! Store Errors

use azurite_common::jobs::JobTableError;
use azurite_common::{ColumnError, ValidationError};
use thiserror::Error;

/// Errors that can occur while reading or writing the game database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A value was rejected before any write was attempted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup matched no rows.
    #[error("No rows matched: {query}")]
    NotFound { query: String },

    /// The database could not be reached.
    #[error("Unable to connect to database: {cause}")]
    Connectivity { cause: String },

    /// A read statement failed.
    #[error("Query `{statement}` failed: {cause}")]
    Query { statement: String, cause: String },

    /// A write statement failed. The in-memory entity is unchanged.
    #[error("Write `{statement}` failed: {cause}")]
    WriteFailed { statement: String, cause: String },

    /// A row lacked a column the entity needs.
    #[error("Unable to hydrate entity: {0}")]
    Hydration(#[from] ColumnError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// True when the error was raised before any statement reached the database.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

impl From<JobTableError> for StoreError {
    fn from(error: JobTableError) -> Self {
        StoreError::Config(error.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
