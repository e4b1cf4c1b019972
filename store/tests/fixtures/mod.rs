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

//! Shared rows for the store integration tests

#![allow(dead_code)]

use azurite_common::Row;
use azurite_common::jobs::JobTable;
use azurite_store::{Database, MemoryExecutor};
use std::sync::Arc;

pub fn account_row(id: i64, username: &str, logged_in: i64) -> Row {
    Row::new()
        .with("id", id)
        .with("name", username)
        .with("password", "hunter2")
        .with("loggedin", logged_in)
        .with("banned", 0)
        .with("banreason", Option::<String>::None)
        .with("nxCash", 1000)
        .with("mPoints", 0)
        .with("vpoints", 5)
        .with("realcash", 0)
        .with("chrslot", 3)
}

/// A character row as an older schema would store it, without the
/// personality, rebirth, honour or chat ban columns.
pub fn legacy_character_row(id: i64, account_id: i64, name: &str) -> Row {
    Row::new()
        .with("id", id)
        .with("accountid", account_id)
        .with("name", name)
        .with("level", 10)
        .with("exp", 0)
        .with("str", 4)
        .with("dex", 25)
        .with("int", 4)
        .with("luk", 4)
        .with("ap", 0)
        .with("maxhp", 500)
        .with("maxmp", 300)
        .with("meso", 314159)
        .with("fame", 0)
        .with("job", 0)
        .with("skincolor", 0)
        .with("gender", 0)
        .with("hair", 30000)
        .with("face", 20000)
        .with("map", 100000000)
        .with("buddyCapacity", 20)
        .with("gm", 0)
}

pub fn character_row(id: i64, account_id: i64, name: &str) -> Row {
    legacy_character_row(id, account_id, name)
        .with("reborns", 0)
        .with("ambition", 1)
        .with("insight", 2)
        .with("willpower", 3)
        .with("diligence", 4)
        .with("empathy", 5)
        .with("charm", 6)
        .with("innerExp", 0)
        .with("chatban", "false")
}

pub fn item_row(character_id: i64, code: i64, position: i64, item_id: i64) -> Row {
    Row::new()
        .with("characterid", character_id)
        .with("inventorytype", code)
        .with("position", position)
        .with("itemid", item_id)
        .with("quantity", 1)
        .with("isCash", 0)
}

/// Two accounts, two characters and a few items.
pub fn seeded() -> Arc<MemoryExecutor> {
    let executor = Arc::new(MemoryExecutor::new());
    executor.insert("accounts", account_row(1, "tester", 1));
    executor.insert("accounts", account_row(2, "rival", 0));
    executor.insert("characters", character_row(1, 1, "tester0x00"));
    executor.insert("characters", character_row(2, 2, "rival0x00"));
    executor.insert("inventoryitems", item_row(1, -1, -1, 1002140));
    executor.insert("inventoryitems", item_row(1, 1, 1, 1002140));
    executor.insert("inventoryitems", item_row(1, 2, 1, 2000000));
    executor.insert("inventoryitems", item_row(2, -1, -5, 1040002));
    executor
}

pub fn jobs() -> JobTable {
    JobTable::bundled().unwrap()
}

pub fn database(executor: &Arc<MemoryExecutor>) -> Database {
    Database::with_executor(executor.clone(), jobs())
}
