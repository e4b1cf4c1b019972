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

//! Read-only checks against a live AzureMS database
//!
//! Set `TEST_DATABASE_URL` (e.g. `mysql://root:@localhost:3306/kms_316`) to
//! run them; without it, or when the server is unreachable, they skip.

use azurite_common::jobs::JobTable;
use azurite_store::{Database, MySqlExecutor, StoreError};
use sqlx::mysql::MySqlConnectOptions;
use std::str::FromStr;
use std::sync::Arc;

fn live_database() -> Option<Database> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let options = match MySqlConnectOptions::from_str(&url) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Skipping test - invalid TEST_DATABASE_URL: {}", e);
            return None;
        }
    };
    let jobs = JobTable::bundled().ok()?;
    Some(Database::with_executor(
        Arc::new(MySqlExecutor::with_options(options)),
        jobs,
    ))
}

#[tokio::test]
async fn test_live_rankings_and_online() {
    let Some(database) = live_database() else {
        eprintln!("Skipping test - no test database configured");
        return;
    };

    let ranking = match database.level_ranking(5, false).await {
        Ok(ranking) => ranking,
        Err(StoreError::Connectivity { cause }) => {
            eprintln!("Skipping test - no test database available: {}", cause);
            return;
        }
        Err(e) => panic!("ranking failed: {e}"),
    };
    assert!(ranking.len() <= 5);
    assert!(ranking.windows(2).all(|pair| pair[0].1 >= pair[1].1));

    let count = database.online_count().await.unwrap();
    let players = database.online_players().await.unwrap();
    assert_eq!(count, players.len() as i64);
}

#[tokio::test]
async fn test_live_character_hydration() {
    let Some(database) = live_database() else {
        eprintln!("Skipping test - no test database configured");
        return;
    };

    let ranking = match database.level_ranking(1, true).await {
        Ok(ranking) => ranking,
        Err(StoreError::Connectivity { cause }) => {
            eprintln!("Skipping test - no test database available: {}", cause);
            return;
        }
        Err(e) => panic!("ranking failed: {e}"),
    };
    let Some((name, level)) = ranking.into_iter().next() else {
        eprintln!("Skipping test - no characters in test database");
        return;
    };

    let character = database.character_by_name(&name).await.unwrap();
    assert_eq!(character.level(), level);
    assert_eq!(character.account().account_id(), character.account_id());
    assert_eq!(
        character.inventory().character_id(),
        character.character_id()
    );
}
