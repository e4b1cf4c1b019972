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

//! Character entity

use crate::account::Account;
use crate::error::StoreResult;
use crate::executor::{Executor, fetch_first};
use crate::inventory;
use crate::record::Record;
use crate::statement::{Condition, Select, Statement};
use azurite_common::account::AccountField;
use azurite_common::character::{
    self as schema, CharacterField, CharacterSummary, PersonalityTraits, PrimaryStats,
};
use azurite_common::inventory::Inventory;
use azurite_common::jobs::JobTable;
use azurite_common::{Field, Row};
use std::sync::Arc;

/// A row of `characters` together with its account and inventory.
#[derive(Clone, Debug)]
pub struct Character {
    record: Record<CharacterField>,
    account: Account,
    inventory: Inventory,
}

impl Character {
    /// Hydrate a character row, then load its account and its inventory.
    pub async fn hydrate(
        row: Row,
        executor: Arc<dyn Executor>,
        jobs: Arc<JobTable>,
    ) -> StoreResult<Self> {
        let record = Record::<CharacterField>::hydrate(row, executor.clone(), jobs.clone())?;

        let account_id = record.int(CharacterField::AccountId);
        let statement: Statement = Select::from(AccountField::TABLE)
            .filter(Condition::eq(AccountField::KEY.column(), account_id))
            .into();
        let account_row = fetch_first(executor.as_ref(), &statement).await?;
        let account = Account::hydrate(account_row, executor.clone(), jobs)?;

        let inventory = inventory::load(executor.as_ref(), record.key()).await?;

        Ok(Self {
            record,
            account,
            inventory,
        })
    }

    pub fn record(&self) -> &Record<CharacterField> {
        &self.record
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    accessors!(CharacterField {
        get character_id: Id,
        get account_id: AccountId,
        text name: Name,
        set set_name: Name,
        get level: Level,
        set set_level: Level,
        add add_level: Level,
        get exp: Exp,
        set set_exp: Exp,
        add add_exp: Exp,
        get strength: Strength,
        set set_strength: Strength,
        add add_strength: Strength,
        get dex: Dex,
        set set_dex: Dex,
        add add_dex: Dex,
        get inte: Inte,
        set set_inte: Inte,
        add add_inte: Inte,
        get luk: Luk,
        set set_luk: Luk,
        add add_luk: Luk,
        get ap: Ap,
        set set_ap: Ap,
        add add_ap: Ap,
        get max_hp: MaxHp,
        set set_max_hp: MaxHp,
        add add_max_hp: MaxHp,
        get max_mp: MaxMp,
        set set_max_mp: MaxMp,
        add add_max_mp: MaxMp,
        get meso: Meso,
        set set_meso: Meso,
        add add_mesos: Meso,
        get fame: Fame,
        set set_fame: Fame,
        add add_fame: Fame,
        get job: Job,
        set set_job: Job,
        get skin: Skin,
        set set_skin: Skin,
        get gender: Gender,
        set set_gender: Gender,
        get hair: Hair,
        set set_hair: Hair,
        get face: Face,
        set set_face: Face,
        get map: Map,
        set set_map: Map,
        get buddy_capacity: BuddyCapacity,
        set set_buddy_capacity: BuddyCapacity,
        add add_buddy_capacity: BuddyCapacity,
        get rebirths: Rebirths,
        set set_rebirths: Rebirths,
        add add_rebirths: Rebirths,
        get ambition: Ambition,
        set set_ambition: Ambition,
        add add_ambition: Ambition,
        get insight: Insight,
        set set_insight: Insight,
        add add_insight: Insight,
        get willpower: Willpower,
        set set_willpower: Willpower,
        add add_willpower: Willpower,
        get diligence: Diligence,
        set set_diligence: Diligence,
        add add_diligence: Diligence,
        get empathy: Empathy,
        set set_empathy: Empathy,
        add add_empathy: Empathy,
        get charm: Charm,
        set set_charm: Charm,
        add add_charm: Charm,
        get honour: Honour,
        set set_honour: Honour,
        add add_honour: Honour,
    });

    /// Class name of the current job, if the job table knows it.
    pub fn job_name(&self) -> Option<&str> {
        self.record.jobs().name(self.job())
    }

    pub fn primary_stats(&self) -> PrimaryStats {
        PrimaryStats {
            strength: self.strength(),
            dex: self.dex(),
            inte: self.inte(),
            luk: self.luk(),
        }
    }

    pub fn personality_traits(&self) -> PersonalityTraits {
        PersonalityTraits {
            ambition: self.ambition(),
            insight: self.insight(),
            willpower: self.willpower(),
            diligence: self.diligence(),
            empathy: self.empathy(),
            charm: self.charm(),
        }
    }

    pub fn is_muted(&self) -> bool {
        self.record.text(CharacterField::Mute) == "true"
    }

    pub async fn set_mute(&mut self, muted: bool) -> StoreResult<()> {
        let value = if muted { "true" } else { "false" };
        self.record.set(CharacterField::Mute, value).await
    }

    /// maplestory.io render of the character in its worn equipment.
    pub fn avatar_url(&self) -> String {
        schema::avatar_url(
            self.skin(),
            self.face(),
            self.hair(),
            self.inventory.equipped_item_ids(),
        )
    }

    /// Load a fresh copy of this character's inventory.
    pub async fn reload_inventory(&mut self) -> StoreResult<&Inventory> {
        self.inventory = inventory::load(self.record.executor().as_ref(), self.character_id()).await?;
        Ok(&self.inventory)
    }

    pub fn snapshot(&self) -> CharacterSummary {
        CharacterSummary {
            character_id: self.character_id(),
            account_id: self.account_id(),
            name: self.name().to_string(),
            level: self.level(),
            job: self.job(),
            job_name: self.job_name().map(str::to_string),
            exp: self.exp(),
            stats: self.primary_stats(),
            ap: self.ap(),
            max_hp: self.max_hp(),
            max_mp: self.max_mp(),
            meso: self.meso(),
            fame: self.fame(),
            skin: self.skin(),
            gender: self.gender(),
            hair: self.hair(),
            face: self.face(),
            map: self.map(),
            buddy_capacity: self.buddy_capacity(),
            rebirths: self.rebirths(),
            traits: self.personality_traits(),
            honour: self.honour(),
            muted: self.is_muted(),
        }
    }
}
