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

//! Entity hydration and validated mutation
//!
//! A [`Record`] holds one row of a mapped table together with the executor
//! it came from. Reads come from the in-memory row. Writes are validated
//! against the field's constraint, checked for uniqueness where required,
//! persisted with a single `UPDATE`, and only then applied in memory.

use crate::error::StoreResult;
use crate::executor::Executor;
use crate::statement::{Condition, Select, Statement, Update};
use azurite_common::jobs::JobTable;
use azurite_common::{Constraint, Field, Row, ValidationError, Value};
use std::marker::PhantomData;
use std::sync::Arc;

pub struct Record<F: Field> {
    row: Row,
    executor: Arc<dyn Executor>,
    jobs: Arc<JobTable>,
    _field: PhantomData<F>,
}

impl<F: Field> Record<F> {
    /// Build a record from a fetched row.
    ///
    /// Columns that are absent or NULL take the field's fallback. A column
    /// with no fallback must be present and hold the kind of value its
    /// constraint expects.
    pub fn hydrate(mut row: Row, executor: Arc<dyn Executor>, jobs: Arc<JobTable>) -> StoreResult<Self> {
        for field in F::all() {
            let column = field.column();
            let absent = row.get(column).is_none_or(Value::is_null);
            if absent {
                if let Some(fallback) = field.fallback() {
                    row.insert(column, fallback);
                }
            }
            if expects_text(field.constraint()) {
                row.text(column)?;
            } else {
                row.int(column)?;
            }
        }
        Ok(Self {
            row,
            executor,
            jobs,
            _field: PhantomData,
        })
    }

    /// Primary key value.
    pub fn key(&self) -> i64 {
        self.int(F::KEY)
    }

    pub fn int(&self, field: F) -> i64 {
        self.value(field).as_i64().unwrap_or_default()
    }

    pub fn text(&self, field: F) -> &str {
        self.value(field).as_str().unwrap_or_default()
    }

    pub fn value(&self, field: F) -> &Value {
        self.row.get(field.column()).unwrap_or(&Value::Null)
    }

    /// Raw access by column name, including columns no field describes.
    pub fn value_of(&self, column: &str) -> Option<&Value> {
        self.row.get(column)
    }

    pub fn row(&self) -> &Row {
        &self.row
    }

    pub fn jobs(&self) -> &JobTable {
        &self.jobs
    }

    pub(crate) fn executor(&self) -> &Arc<dyn Executor> {
        &self.executor
    }

    /// Validate and persist `value` for `field`.
    ///
    /// Nothing is written when validation fails. When the write fails the
    /// in-memory value is left untouched.
    pub async fn set(&mut self, field: F, value: impl Into<Value>) -> StoreResult<()> {
        let value = field
            .constraint()
            .check(field.name(), value.into(), &self.jobs)?;
        let key = self.key();

        if field.unique() {
            let probe: Statement = Select::from(F::TABLE)
                .columns([F::KEY.column()])
                .filter(Condition::eq(field.column(), value.clone()))
                .filter(Condition::ne(F::KEY.column(), key))
                .limit(1)
                .into();
            if !self.executor.fetch_all(&probe).await?.is_empty() {
                return Err(ValidationError {
                    attribute: field.name(),
                    constraint: Constraint::Unique,
                    value,
                }
                .into());
            }
        }

        let update: Statement =
            Update::new(F::TABLE, field.column(), value.clone(), F::KEY.column(), key).into();
        let affected = self.executor.execute(&update).await?;
        if affected == 0 {
            tracing::debug!("Update of {} {} matched no rows", F::TABLE, key);
        }
        tracing::info!("Set {}.{} to {} for {} {}", F::TABLE, field.column(), value, F::KEY, key);
        self.row.insert(field.column(), value);
        Ok(())
    }

    /// Add `delta` to an integer field and persist the sum.
    pub async fn add(&mut self, field: F, delta: i64) -> StoreResult<i64> {
        let current = self.int(field);
        let total = current.checked_add(delta).ok_or_else(|| ValidationError {
            attribute: field.name(),
            constraint: field.constraint(),
            value: Value::Text(format!("{} + {}", current, delta)),
        })?;
        self.set(field, total).await?;
        Ok(total)
    }
}

impl<F: Field> Clone for Record<F> {
    fn clone(&self) -> Self {
        Self {
            row: self.row.clone(),
            executor: self.executor.clone(),
            jobs: self.jobs.clone(),
            _field: PhantomData,
        }
    }
}

impl<F: Field> std::fmt::Debug for Record<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("table", &F::TABLE)
            .field("row", &self.row)
            .finish()
    }
}

fn expects_text(constraint: Constraint) -> bool {
    matches!(constraint, Constraint::Length { .. } | Constraint::OneOf(_))
}
