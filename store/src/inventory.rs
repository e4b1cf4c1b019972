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

//! Inventory materializer

use crate::error::StoreResult;
use crate::executor::Executor;
use crate::statement::{Condition, Select, Statement};
use azurite_common::inventory::{ITEM_TABLE, Inventory, OWNER_COLUMN};

/// Load every item owned by `character_id` with a single query.
///
/// Rows with an unknown type code or missing columns are skipped.
pub async fn load(executor: &dyn Executor, character_id: i64) -> StoreResult<Inventory> {
    let statement: Statement = Select::from(ITEM_TABLE)
        .filter(Condition::eq(OWNER_COLUMN, character_id))
        .into();
    let rows = executor.fetch_all(&statement).await?;

    let mut inventory = Inventory::new(character_id);
    for row in &rows {
        if let Err(e) = inventory.insert_row(row) {
            tracing::warn!("Skipping item row of character {}: {}", character_id, e);
        }
    }
    tracing::debug!(
        "Loaded {} of {} item rows for character {}",
        inventory.len(),
        rows.len(),
        character_id
    );
    Ok(inventory)
}
