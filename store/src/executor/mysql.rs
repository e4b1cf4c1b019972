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

//! MySQL executor
//!
//! Opens a fresh connection for every statement and closes it afterwards,
//! whether or not the statement succeeded. There is no pool.

use super::{Executor, describe};
use crate::config::DatabaseConfig;
use crate::error::{StoreError, StoreResult};
use crate::statement::Statement;
use async_trait::async_trait;
use azurite_common::{Row, Value};
use sqlx::mysql::{MySqlArguments, MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, Connection, MySql, Row as _, ValueRef};

/// Character set of every connection. The server transcodes columns stored
/// in other character sets, so text always crosses the wire as UTF-8.
pub const CONNECTION_CHARSET: &str = "utf8mb4";

pub struct MySqlExecutor {
    options: MySqlConnectOptions,
}

impl MySqlExecutor {
    pub fn new(config: &DatabaseConfig) -> Self {
        tracing::debug!(
            "Schema text is stored as {}, connecting with {}",
            config.charset(),
            CONNECTION_CHARSET
        );
        let options = MySqlConnectOptions::new()
            .host(config.host())
            .port(config.port())
            .username(config.user())
            .password(config.password())
            .database(config.schema())
            .charset(CONNECTION_CHARSET);
        Self::with_options(options)
    }

    pub fn with_options(options: MySqlConnectOptions) -> Self {
        Self { options }
    }

    async fn connect(&self) -> StoreResult<MySqlConnection> {
        MySqlConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                tracing::error!("Unable to connect to database: {}", e);
                StoreError::Connectivity {
                    cause: e.to_string(),
                }
            })
    }

    async fn close(connection: MySqlConnection) {
        if let Err(e) = connection.close().await {
            tracing::warn!("Failed to close database connection cleanly: {}", e);
        }
    }
}

impl std::fmt::Debug for MySqlExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlExecutor")
            .field("host", &self.options.get_host())
            .field("port", &self.options.get_port())
            .field("database", &self.options.get_database())
            .finish()
    }
}

#[async_trait]
impl Executor for MySqlExecutor {
    async fn fetch_all(&self, statement: &Statement) -> StoreResult<Vec<Row>> {
        tracing::debug!("Executing {}", describe(statement));
        let sql = statement.sql();
        let mut connection = self.connect().await?;
        let result = bind(&sql, statement).fetch_all(&mut connection).await;
        Self::close(connection).await;

        let decoded = result.and_then(|rows| rows.iter().map(decode_row).collect::<Result<Vec<_>, _>>());
        match decoded {
            Ok(rows) => Ok(rows),
            Err(e) => {
                tracing::error!("Query {} failed: {}", sql, e);
                Err(StoreError::Query {
                    statement: describe(statement),
                    cause: e.to_string(),
                })
            }
        }
    }

    async fn execute(&self, statement: &Statement) -> StoreResult<u64> {
        tracing::debug!("Executing {}", describe(statement));
        let sql = statement.sql();
        let mut connection = self.connect().await?;
        let result = bind(&sql, statement).execute(&mut connection).await;
        Self::close(connection).await;

        match result {
            Ok(done) => Ok(done.rows_affected()),
            Err(e) => {
                tracing::error!("Write {} failed: {}", sql, e);
                Err(StoreError::WriteFailed {
                    statement: describe(statement),
                    cause: e.to_string(),
                })
            }
        }
    }
}

fn bind<'q>(sql: &'q str, statement: &Statement) -> Query<'q, MySql, MySqlArguments> {
    statement
        .binds()
        .into_iter()
        .fold(sqlx::query(sql), |query, value| match value {
            Value::Null => query.bind(None::<i64>),
            Value::Int(value) => query.bind(*value),
            Value::Float(value) => query.bind(*value),
            Value::Text(text) => query.bind(text.clone()),
        })
}

fn decode_row(row: &MySqlRow) -> Result<Row, sqlx::Error> {
    row.columns()
        .iter()
        .map(|column| {
            let value = decode_column(row, column.ordinal())?;
            Ok((column.name().to_string(), value))
        })
        .collect()
}

/// Integers become `Int`, floats `Float`, text and temporal types `Text`.
fn decode_column(row: &MySqlRow, index: usize) -> Result<Value, sqlx::Error> {
    match row.try_get_raw(index) {
        Ok(raw) if !raw.is_null() => {}
        _ => return Ok(Value::Null),
    }
    if let Ok(value) = row.try_get::<i64, _>(index) {
        return Ok(Value::Int(value));
    }
    if let Ok(value) = row.try_get::<u64, _>(index) {
        return Ok(i64::try_from(value)
            .map(Value::Int)
            .unwrap_or(Value::Float(value as f64)));
    }
    if let Ok(value) = row.try_get::<bool, _>(index) {
        return Ok(Value::Int(value as i64));
    }
    if let Ok(value) = row.try_get::<f64, _>(index) {
        return Ok(Value::Float(value));
    }
    if let Ok(value) = row.try_get::<f32, _>(index) {
        return Ok(Value::Float(value as f64));
    }
    if let Ok(value) = row.try_get::<String, _>(index) {
        return Ok(Value::Text(value));
    }
    if let Ok(value) = row.try_get::<chrono::NaiveDateTime, _>(index) {
        return Ok(Value::Text(value.to_string()));
    }
    if let Ok(value) = row.try_get::<chrono::NaiveDate, _>(index) {
        return Ok(Value::Text(value.to_string()));
    }
    if let Ok(value) = row.try_get::<Vec<u8>, _>(index) {
        return decode_bytes(index, value);
    }
    tracing::warn!("Column {} has an unsupported type, reading as NULL", index);
    Ok(Value::Null)
}

/// Binary and blob columns must hold UTF-8 text.
fn decode_bytes(index: usize, bytes: Vec<u8>) -> Result<Value, sqlx::Error> {
    String::from_utf8(bytes)
        .map(Value::Text)
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: index.to_string(),
            source: Box::new(e),
        })
}
