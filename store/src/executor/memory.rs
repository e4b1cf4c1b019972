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

//! In-memory executor
//!
//! Interprets [`Statement`]s over tables held in memory. Used by tests and
//! by anything that wants the store's validation without a MySQL server.

use super::{Executor, describe};
use crate::error::{StoreError, StoreResult};
use crate::statement::{Operator, Projection, Select, Statement, Update};
use async_trait::async_trait;
use azurite_common::{Row, Value};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MemoryState {
    tables: BTreeMap<String, Vec<Row>>,
    log: Vec<Statement>,
    offline: bool,
    fail_writes: bool,
}

/// Executor backed by in-memory tables.
#[derive(Debug, Default)]
pub struct MemoryExecutor {
    state: Mutex<MemoryState>,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a row to `table`.
    pub fn insert(&self, table: &str, row: Row) {
        self.lock()
            .tables
            .entry(table.to_string())
            .or_default()
            .push(row);
    }

    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.lock().tables.get(table).cloned().unwrap_or_default()
    }

    /// Every statement received, in order.
    pub fn statements(&self) -> Vec<Statement> {
        self.lock().log.clone()
    }

    /// Number of write statements received.
    pub fn writes(&self) -> usize {
        self.lock().log.iter().filter(|s| s.is_write()).count()
    }

    /// Refuse every statement as if the server were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Fail every write while reads keep working.
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }
}

#[async_trait]
impl Executor for MemoryExecutor {
    async fn fetch_all(&self, statement: &Statement) -> StoreResult<Vec<Row>> {
        tracing::debug!("Executing {}", describe(statement));
        let mut state = self.lock();
        state.log.push(statement.clone());
        if state.offline {
            tracing::error!("Unable to connect to database: offline");
            return Err(StoreError::Connectivity {
                cause: "offline".to_string(),
            });
        }
        match statement {
            Statement::Select(select) => Ok(select_rows(&state.tables, select)),
            Statement::Update(_) => Err(StoreError::Query {
                statement: describe(statement),
                cause: "statement returns no rows".to_string(),
            }),
        }
    }

    async fn execute(&self, statement: &Statement) -> StoreResult<u64> {
        tracing::debug!("Executing {}", describe(statement));
        let mut state = self.lock();
        state.log.push(statement.clone());
        if state.offline {
            tracing::error!("Unable to connect to database: offline");
            return Err(StoreError::Connectivity {
                cause: "offline".to_string(),
            });
        }
        let update = match statement {
            Statement::Update(update) if !state.fail_writes => update,
            Statement::Update(_) => {
                tracing::error!("Write {} failed: writes disabled", statement);
                return Err(StoreError::WriteFailed {
                    statement: describe(statement),
                    cause: "writes disabled".to_string(),
                });
            }
            Statement::Select(_) => {
                return Err(StoreError::WriteFailed {
                    statement: describe(statement),
                    cause: "statement is not a write".to_string(),
                });
            }
        };
        Ok(apply_update(&mut state.tables, update))
    }
}

fn row_matches(row: &Row, select: &Select) -> bool {
    select.conditions.iter().all(|condition| {
        let ordering = row
            .get(condition.column)
            .and_then(|value| value.compare(&condition.value));
        match condition.operator {
            Operator::Eq => ordering == Some(Ordering::Equal),
            Operator::Ne => matches!(ordering, Some(Ordering::Less | Ordering::Greater)),
            Operator::Gt => ordering == Some(Ordering::Greater),
            Operator::Lt => ordering == Some(Ordering::Less),
        }
    })
}

fn select_rows(tables: &BTreeMap<String, Vec<Row>>, select: &Select) -> Vec<Row> {
    let mut rows: Vec<Row> = tables
        .get(select.table)
        .map(|rows| rows.iter().filter(|row| row_matches(row, select)).cloned().collect())
        .unwrap_or_default();

    if let Some(column) = select.order_by_desc {
        // Stable sort keeps insertion order among ties.
        rows.sort_by(|a, b| {
            descending(
                a.get(column).unwrap_or(&Value::Null),
                b.get(column).unwrap_or(&Value::Null),
            )
        });
    }
    if let Some(limit) = select.limit {
        rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }

    match &select.projection {
        Projection::All => rows,
        Projection::Columns(columns) => rows
            .into_iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| {
                        let value = row.get(column).cloned().unwrap_or_default();
                        (column.to_string(), value)
                    })
                    .collect()
            })
            .collect(),
        Projection::Count => vec![Row::new().with("count", rows.len() as i64)],
    }
}

/// `ORDER BY ... DESC` as MySQL sorts it: NULL is the smallest value, so it comes last.
fn descending(a: &Value, b: &Value) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.compare(a).unwrap_or(Ordering::Equal),
    }
}

fn apply_update(tables: &mut BTreeMap<String, Vec<Row>>, update: &Update) -> u64 {
    let Some(rows) = tables.get_mut(update.table) else {
        return 0;
    };
    let mut affected = 0;
    for row in rows.iter_mut() {
        let hit = row
            .get(update.key_column)
            .and_then(|key| key.compare(&update.key))
            == Some(Ordering::Equal);
        if hit {
            row.insert(update.column, update.value.clone());
            affected += 1;
        }
    }
    affected
}
