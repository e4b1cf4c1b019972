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

//! Database facade
//!
//! Entry point for looking up characters and accounts, reading
//! leaderboards, and counting who is online. Every call re-queries; nothing
//! is cached between calls.

use crate::account::Account;
use crate::character::Character;
use crate::config::DatabaseConfig;
use crate::error::{StoreError, StoreResult};
use crate::executor::{Executor, MySqlExecutor, fetch_first};
use crate::record::Record;
use crate::statement::{Condition, Select, Statement};
use azurite_common::account::AccountField;
use azurite_common::character::{CharacterField, GM_COLUMN};
use azurite_common::jobs::JobTable;
use azurite_common::{Field, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct Database {
    executor: Arc<dyn Executor>,
    jobs: Arc<JobTable>,
}

impl Database {
    /// Connect to MySQL with `config`. No connection is opened until the
    /// first call.
    pub fn new(config: &DatabaseConfig, jobs: JobTable) -> Self {
        Self::with_executor(Arc::new(MySqlExecutor::new(config)), jobs)
    }

    pub fn with_executor(executor: Arc<dyn Executor>, jobs: JobTable) -> Self {
        Self {
            executor,
            jobs: Arc::new(jobs),
        }
    }

    pub fn jobs(&self) -> &JobTable {
        &self.jobs
    }

    pub fn executor(&self) -> &Arc<dyn Executor> {
        &self.executor
    }

    async fn character_where(&self, column: &'static str, value: Value) -> StoreResult<Character> {
        let statement: Statement = Select::from(CharacterField::TABLE)
            .filter(Condition::eq(column, value))
            .into();
        let row = fetch_first(self.executor.as_ref(), &statement).await?;
        Character::hydrate(row, self.executor.clone(), self.jobs.clone()).await
    }

    async fn account_where(&self, column: &'static str, value: Value) -> StoreResult<Account> {
        let statement: Statement = Select::from(AccountField::TABLE)
            .filter(Condition::eq(column, value))
            .into();
        let row = fetch_first(self.executor.as_ref(), &statement).await?;
        Account::hydrate(row, self.executor.clone(), self.jobs.clone())
    }

    pub async fn character_by_name(&self, name: &str) -> StoreResult<Character> {
        self.character_where(CharacterField::Name.column(), name.into())
            .await
    }

    pub async fn character_by_id(&self, character_id: i64) -> StoreResult<Character> {
        self.character_where(CharacterField::Id.column(), character_id.into())
            .await
    }

    pub async fn account_by_username(&self, username: &str) -> StoreResult<Account> {
        self.account_where(AccountField::Username.column(), username.into())
            .await
    }

    pub async fn account_by_id(&self, account_id: i64) -> StoreResult<Account> {
        self.account_where(AccountField::Id.column(), account_id.into())
            .await
    }

    /// Validate and write one character column, looked up by character name.
    ///
    /// Only the character row is read; its account and inventory are not.
    pub async fn set_character_field(
        &self,
        name: &str,
        field: CharacterField,
        value: impl Into<Value>,
    ) -> StoreResult<()> {
        let statement: Statement = Select::from(CharacterField::TABLE)
            .filter(Condition::eq(CharacterField::Name.column(), name))
            .into();
        let row = fetch_first(self.executor.as_ref(), &statement).await?;
        let mut record =
            Record::<CharacterField>::hydrate(row, self.executor.clone(), self.jobs.clone())?;
        record.set(field, value).await
    }

    /// Top `limit` characters by `field`, highest first.
    ///
    /// Game masters are left out unless `include_gms` is set.
    pub async fn ranking(
        &self,
        field: CharacterField,
        limit: u64,
        include_gms: bool,
    ) -> StoreResult<Vec<(String, i64)>> {
        let name = CharacterField::Name.column();
        let column = field.column();
        let mut select = Select::from(CharacterField::TABLE).columns([name, column]);
        if !include_gms {
            select = select.filter(Condition::lt(GM_COLUMN, 1));
        }
        let statement: Statement = select.order_by_desc(column).limit(limit).into();

        self.executor
            .fetch_all(&statement)
            .await?
            .into_iter()
            .map(|mut row| {
                // A NULL in a column added by a later schema reads as its fallback.
                if row.get(column).is_none_or(Value::is_null) {
                    if let Some(fallback) = field.fallback() {
                        row.insert(column, fallback);
                    }
                }
                let entry = (row.text(name)?.to_string(), row.int(column)?);
                Ok(entry)
            })
            .collect::<Result<Vec<_>, azurite_common::ColumnError>>()
            .map_err(StoreError::from)
    }

    pub async fn level_ranking(&self, limit: u64, include_gms: bool) -> StoreResult<Vec<(String, i64)>> {
        self.ranking(CharacterField::Level, limit, include_gms).await
    }

    pub async fn meso_ranking(&self, limit: u64, include_gms: bool) -> StoreResult<Vec<(String, i64)>> {
        self.ranking(CharacterField::Meso, limit, include_gms).await
    }

    pub async fn fame_ranking(&self, limit: u64, include_gms: bool) -> StoreResult<Vec<(String, i64)>> {
        self.ranking(CharacterField::Fame, limit, include_gms).await
    }

    pub async fn rebirth_ranking(&self, limit: u64, include_gms: bool) -> StoreResult<Vec<(String, i64)>> {
        self.ranking(CharacterField::Rebirths, limit, include_gms).await
    }

    /// Number of accounts flagged as logged in.
    pub async fn online_count(&self) -> StoreResult<i64> {
        let statement: Statement = Select::from(AccountField::TABLE)
            .count()
            .filter(Condition::gt(AccountField::LoggedIn.column(), 0))
            .into();
        let row = fetch_first(self.executor.as_ref(), &statement).await?;
        Ok(row.int("count")?)
    }

    /// Usernames of accounts flagged as logged in.
    pub async fn online_players(&self) -> StoreResult<Vec<String>> {
        let username = AccountField::Username.column();
        let statement: Statement = Select::from(AccountField::TABLE)
            .columns([username])
            .filter(Condition::gt(AccountField::LoggedIn.column(), 0))
            .into();
        self.executor
            .fetch_all(&statement)
            .await?
            .iter()
            .map(|row| row.text(username).map(str::to_string).map_err(StoreError::from))
            .collect()
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").field("jobs", &self.jobs.len()).finish()
    }
}
