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

//! Query Executor
//!
//! The executor is the only component that talks to the database. Each call
//! runs exactly one statement and reports failures as [`StoreError`]s.

mod memory;
mod mysql;

pub use self::memory::MemoryExecutor;
pub use self::mysql::MySqlExecutor;

use crate::error::{StoreError, StoreResult};
use crate::statement::Statement;
use async_trait::async_trait;
use azurite_common::Row;

/// Runs statements against a backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run a `SELECT` and return every row.
    async fn fetch_all(&self, statement: &Statement) -> StoreResult<Vec<Row>>;

    /// Run an `UPDATE` and return the number of rows affected.
    async fn execute(&self, statement: &Statement) -> StoreResult<u64>;
}

/// Run a `SELECT` and return its first row.
pub async fn fetch_first(executor: &dyn Executor, statement: &Statement) -> StoreResult<Row> {
    executor
        .fetch_all(statement)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| StoreError::NotFound {
            query: describe(statement),
        })
}

/// Statement text followed by its bound values, for logs and errors.
pub(crate) fn describe(statement: &Statement) -> String {
    let binds = statement
        .binds()
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>();
    if binds.is_empty() {
        statement.sql()
    } else {
        format!("{} [{}]", statement.sql(), binds.join(", "))
    }
}
