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

//! Inventory Model
//!
//! A character's items are split into six tabs by the `inventorytype` code of
//! each `inventoryitems` row. Each tab maps a slot position to the item in it.

use crate::value::{ColumnError, Row};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Table holding every item a character owns.
pub const ITEM_TABLE: &str = "inventoryitems";

/// Column linking an item row to its owner.
pub const OWNER_COLUMN: &str = "characterid";

#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryType {
    /// Items currently worn.
    Equipped,
    Equip,
    Use,
    Setup,
    Etc,
    Cash,
}

impl InventoryType {
    pub const ALL: [InventoryType; 6] = [
        InventoryType::Equipped,
        InventoryType::Equip,
        InventoryType::Use,
        InventoryType::Setup,
        InventoryType::Etc,
        InventoryType::Cash,
    ];

    /// Code stored in `inventoryitems.inventorytype`.
    pub fn code(self) -> i64 {
        match self {
            InventoryType::Equipped => -1,
            InventoryType::Equip => 1,
            InventoryType::Use => 2,
            InventoryType::Setup => 3,
            InventoryType::Etc => 4,
            InventoryType::Cash => 5,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            InventoryType::Equipped => "equipped",
            InventoryType::Equip => "equip",
            InventoryType::Use => "use",
            InventoryType::Setup => "setup",
            InventoryType::Etc => "etc",
            InventoryType::Cash => "cash",
        }
    }

    /// Resolve a tab name, accepting the legacy aliases `eqp`, `consume` and `install`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "equipped" => Some(InventoryType::Equipped),
            "equip" | "eqp" => Some(InventoryType::Equip),
            "use" | "consume" => Some(InventoryType::Use),
            "setup" | "install" => Some(InventoryType::Setup),
            "etc" => Some(InventoryType::Etc),
            "cash" => Some(InventoryType::Cash),
            _ => None,
        }
    }
}

impl std::fmt::Display for InventoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single item in a tab slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub item_id: i64,
    pub quantity: i64,
    pub inventory_type: InventoryType,
    pub is_cash: bool,
}

/// Why an item row could not be placed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryRowError {
    #[error(transparent)]
    Column(#[from] ColumnError),
    #[error("Unknown inventory type code {0}")]
    UnknownType(i64),
}

/// Slot position to item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryTab(BTreeMap<i64, ItemRecord>);

impl InventoryTab {
    pub fn get(&self, position: i64) -> Option<&ItemRecord> {
        self.0.get(&position)
    }

    pub fn has_item(&self, item_id: i64) -> bool {
        self.0.values().any(|item| item.item_id == item_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &ItemRecord)> {
        self.0.iter().map(|(position, item)| (*position, item))
    }

    pub fn item_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.values().map(|item| item.item_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

static EMPTY_TAB: InventoryTab = InventoryTab(BTreeMap::new());

/// Every item a character owns, read-only once built.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    character_id: i64,
    tabs: BTreeMap<InventoryType, InventoryTab>,
}

impl Inventory {
    pub fn new(character_id: i64) -> Self {
        Self {
            character_id,
            tabs: InventoryType::ALL
                .into_iter()
                .map(|kind| (kind, InventoryTab::default()))
                .collect(),
        }
    }

    pub fn character_id(&self) -> i64 {
        self.character_id
    }

    /// Place `item` at `position` of its own tab. A later item at the same
    /// position replaces the earlier one.
    pub fn insert(&mut self, position: i64, item: ItemRecord) -> Option<ItemRecord> {
        self.tabs
            .entry(item.inventory_type)
            .or_default()
            .0
            .insert(position, item)
    }

    /// Place an `inventoryitems` row, returning the tab it landed in.
    pub fn insert_row(&mut self, row: &Row) -> Result<InventoryType, InventoryRowError> {
        let code = row.int("inventorytype")?;
        let inventory_type =
            InventoryType::from_code(code).ok_or(InventoryRowError::UnknownType(code))?;
        let position = row.int("position")?;
        let item = ItemRecord {
            item_id: row.int("itemid")?,
            quantity: row.int("quantity")?,
            inventory_type,
            is_cash: row.int("isCash")? != 0,
        };
        self.insert(position, item);
        Ok(inventory_type)
    }

    pub fn tab(&self, kind: InventoryType) -> &InventoryTab {
        self.tabs.get(&kind).unwrap_or(&EMPTY_TAB)
    }

    pub fn has_item(&self, kind: InventoryType, item_id: i64) -> bool {
        self.tab(kind).has_item(item_id)
    }

    pub fn has_item_in_equip(&self, item_id: i64) -> bool {
        self.has_item(InventoryType::Equip, item_id)
    }

    pub fn has_item_in_use(&self, item_id: i64) -> bool {
        self.has_item(InventoryType::Use, item_id)
    }

    pub fn has_item_in_setup(&self, item_id: i64) -> bool {
        self.has_item(InventoryType::Setup, item_id)
    }

    pub fn has_item_in_etc(&self, item_id: i64) -> bool {
        self.has_item(InventoryType::Etc, item_id)
    }

    pub fn has_item_in_cash(&self, item_id: i64) -> bool {
        self.has_item(InventoryType::Cash, item_id)
    }

    pub fn is_equipping(&self, item_id: i64) -> bool {
        self.has_item(InventoryType::Equipped, item_id)
    }

    /// Worn item ids in slot order.
    pub fn equipped_item_ids(&self) -> Vec<i64> {
        self.tab(InventoryType::Equipped).item_ids().collect()
    }

    /// Total number of items across all tabs.
    pub fn len(&self) -> usize {
        self.tabs.values().map(InventoryTab::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item_row(code: i64, position: i64, item_id: i64) -> Row {
        Row::new()
            .with("characterid", 1)
            .with("inventorytype", code)
            .with("position", position)
            .with("itemid", item_id)
            .with("quantity", 1)
            .with("isCash", 0)
    }

    #[test]
    fn test_type_codes_and_names() {
        for kind in InventoryType::ALL {
            assert_eq!(InventoryType::from_code(kind.code()), Some(kind));
            assert_eq!(InventoryType::from_name(kind.name()), Some(kind));
        }
        assert_eq!(InventoryType::from_code(0), None);
        assert_eq!(InventoryType::from_name("eqp"), Some(InventoryType::Equip));
        assert_eq!(InventoryType::from_name("Consume"), Some(InventoryType::Use));
        assert_eq!(InventoryType::from_name("install"), Some(InventoryType::Setup));
        assert_eq!(InventoryType::from_name("bag"), None);
    }

    #[test]
    fn test_equipped_and_equip_are_distinct() {
        let mut inventory = Inventory::new(1);
        inventory.insert_row(&item_row(-1, -1, 1002140)).unwrap();
        inventory.insert_row(&item_row(1, 1, 1002140)).unwrap();

        assert!(inventory.is_equipping(1002140));
        assert!(!inventory.is_equipping(1002141));
        assert!(inventory.has_item_in_equip(1002140));
        assert!(!inventory.has_item_in_use(1002140));
        assert_eq!(inventory.equipped_item_ids(), vec![1002140]);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_later_position_overwrites() {
        let mut inventory = Inventory::new(1);
        inventory.insert_row(&item_row(2, 3, 2000000)).unwrap();
        inventory.insert_row(&item_row(2, 3, 2000001)).unwrap();

        let tab = inventory.tab(InventoryType::Use);
        assert_eq!(tab.len(), 1);
        assert_eq!(tab.get(3).map(|item| item.item_id), Some(2000001));
    }

    #[test]
    fn test_rejected_rows() {
        let mut inventory = Inventory::new(1);
        assert_eq!(
            inventory.insert_row(&item_row(9, 1, 4000000)),
            Err(InventoryRowError::UnknownType(9))
        );
        let row = Row::new().with("inventorytype", 4).with("position", 1);
        assert!(matches!(
            inventory.insert_row(&row),
            Err(InventoryRowError::Column(ColumnError::Missing(_)))
        ));
        assert!(inventory.is_empty());
    }

    proptest! {
        #[test]
        fn test_partition_is_disjoint_and_complete(
            items in prop::collection::vec((0usize..6, 1i64..96, 1_000_000i64..6_000_000), 0..64)
        ) {
            let mut inventory = Inventory::new(1);
            let mut expected = BTreeMap::new();
            for (kind, position, item_id) in &items {
                let kind = InventoryType::ALL[*kind];
                inventory.insert_row(&item_row(kind.code(), *position, *item_id)).unwrap();
                expected.insert((kind, *position), *item_id);
            }

            prop_assert_eq!(inventory.len(), expected.len());
            for ((kind, position), item_id) in &expected {
                let item = inventory.tab(*kind).get(*position).unwrap();
                prop_assert_eq!(item.item_id, *item_id);
                prop_assert_eq!(item.inventory_type, *kind);
                prop_assert!(inventory.has_item(*kind, *item_id));
            }
        }
    }
}
