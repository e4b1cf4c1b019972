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

//! Account lookups and mutators against the in-memory executor

mod fixtures;

use azurite_common::account::AccountField;
use azurite_common::{Constraint, Value};
use azurite_store::StoreError;
use fixtures::{database, seeded};

#[tokio::test]
async fn test_currency_adds() {
    let executor = seeded();
    let database = database(&executor);
    let mut account = database.account_by_username("tester").await.unwrap();

    assert_eq!(account.add_nx(500).await.unwrap(), 1500);
    assert_eq!(account.add_vote_points(1).await.unwrap(), 6);
    assert!(account.add_nx(-1501).await.unwrap_err().is_validation());
    assert!(account.add_maple_points(i64::from(i32::MAX) + 1).await.unwrap_err().is_validation());

    let fresh = database.account_by_id(1).await.unwrap();
    assert_eq!(fresh.nx(), 1500);
    assert_eq!(fresh.vote_points(), 6);
    assert_eq!(fresh.maple_points(), 0);
}

#[tokio::test]
async fn test_char_slot_bounds() {
    let executor = seeded();
    let database = database(&executor);
    let mut account = database.account_by_username("tester").await.unwrap();

    assert_eq!(account.add_char_slots(49).await.unwrap(), 52);
    assert!(account.add_char_slots(1).await.unwrap_err().is_validation());
    assert_eq!(account.char_slots(), 52);
}

#[tokio::test]
async fn test_username_uniqueness() {
    let executor = seeded();
    let database = database(&executor);
    let mut account = database.account_by_username("tester").await.unwrap();

    match account.set_username("rival").await.unwrap_err() {
        StoreError::Validation(error) => {
            assert_eq!(error.constraint, Constraint::Unique);
            assert_eq!(error.value, Value::from("rival"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    account.set_username("tester").await.unwrap();
    account.set_username("tester2").await.unwrap();
    assert_eq!(database.account_by_username("tester2").await.unwrap().account_id(), 1);
}

#[tokio::test]
async fn test_unstuck_and_flags() {
    let executor = seeded();
    let database = database(&executor);
    let mut account = database.account_by_username("tester").await.unwrap();

    assert!(account.is_online());
    assert!(!account.is_banned());
    account.unstuck().await.unwrap();
    assert!(!account.is_online());

    account.set_banned(1).await.unwrap();
    account.set_ban_reason("Botting").await.unwrap();
    let fresh = database.account_by_id(1).await.unwrap();
    assert!(fresh.is_banned());
    assert_eq!(fresh.ban_reason(), "Botting");
    assert!(account.set_banned(128).await.unwrap_err().is_validation());
}

#[tokio::test]
async fn test_change_password() {
    let executor = seeded();
    let database = database(&executor);
    let mut account = database.account_by_username("rival").await.unwrap();

    assert!(account.change_password("").await.unwrap_err().is_validation());
    account.change_password("correct horse").await.unwrap();
    assert_eq!(
        account.record().value(AccountField::Password),
        &Value::from("correct horse")
    );

    let snapshot = serde_json::to_string(&account.snapshot()).unwrap();
    assert!(!snapshot.contains("correct horse"));
}

#[tokio::test]
async fn test_null_ban_reason_reads_empty() {
    let executor = seeded();
    let database = database(&executor);
    let account = database.account_by_username("rival").await.unwrap();

    assert_eq!(account.ban_reason(), "");
    assert_eq!(account.snapshot().char_slots, 3);
}
