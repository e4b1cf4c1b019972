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

//! Character descriptors and data types

use crate::validation::{Constraint, INT_MAX, SHORT_MAX, SHORT_MIN};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Highest attainable character level.
pub const MAX_LEVEL: i64 = 275;

/// Mesos a single character may hold.
pub const MAX_MESO: i64 = 10_000_000_000;

/// Column flagging game masters. Not exposed as an attribute.
pub const GM_COLUMN: &str = "gm";

/// Values the `chatban` column accepts.
pub const MUTE_VALUES: &[&str] = &["true", "false"];

const SHORT: Constraint = Constraint::range(SHORT_MIN, SHORT_MAX);
const POOL: Constraint = Constraint::range(0, INT_MAX);
const VITAL: Constraint = Constraint::range(1, 500_000);

crate::define_fields! {
    /// Columns of the `characters` table.
    pub enum CharacterField in "characters" keyed by Id {
        /// Primary key.
        Id {
            name: "character_id",
            column: "id",
            constraint: Constraint::ReadOnly,
            unique: false,
            fallback: None,
        },
        /// Owning account.
        AccountId {
            name: "account_id",
            column: "accountid",
            constraint: Constraint::ReadOnly,
            unique: false,
            fallback: None,
        },
        /// In-game name, `varchar(13)`.
        Name {
            name: "name",
            column: "name",
            constraint: Constraint::length(1, 13),
            unique: true,
            fallback: None,
        },
        Level {
            name: "level",
            column: "level",
            constraint: Constraint::range(1, MAX_LEVEL),
            unique: false,
            fallback: None,
        },
        /// Experience towards the next level, a `bigint`.
        Exp {
            name: "exp",
            column: "exp",
            constraint: Constraint::range(i64::MIN, i64::MAX),
            unique: false,
            fallback: None,
        },
        Strength {
            name: "strength",
            column: "str",
            constraint: SHORT,
            unique: false,
            fallback: None,
        },
        Dex {
            name: "dex",
            column: "dex",
            constraint: SHORT,
            unique: false,
            fallback: None,
        },
        Inte {
            name: "inte",
            column: "int",
            constraint: SHORT,
            unique: false,
            fallback: None,
        },
        Luk {
            name: "luk",
            column: "luk",
            constraint: SHORT,
            unique: false,
            fallback: None,
        },
        /// Unspent ability points.
        Ap {
            name: "ap",
            column: "ap",
            constraint: Constraint::range(0, SHORT_MAX),
            unique: false,
            fallback: None,
        },
        MaxHp {
            name: "max_hp",
            column: "maxhp",
            constraint: VITAL,
            unique: false,
            fallback: None,
        },
        MaxMp {
            name: "max_mp",
            column: "maxmp",
            constraint: VITAL,
            unique: false,
            fallback: None,
        },
        Meso {
            name: "meso",
            column: "meso",
            constraint: Constraint::range(0, MAX_MESO),
            unique: false,
            fallback: None,
        },
        Fame {
            name: "fame",
            column: "fame",
            constraint: SHORT,
            unique: false,
            fallback: None,
        },
        /// Job id, checked against the loaded job table.
        Job {
            name: "job",
            column: "job",
            constraint: Constraint::KnownJob,
            unique: false,
            fallback: None,
        },
        /// Skin tone; the upper bound is empirical.
        Skin {
            name: "skin",
            column: "skincolor",
            constraint: Constraint::range(0, 16),
            unique: false,
            fallback: None,
        },
        /// 0 male, 1 female, -1 unset.
        Gender {
            name: "gender",
            column: "gender",
            constraint: Constraint::range(-1, 1),
            unique: false,
            fallback: None,
        },
        /// Hair item id; the band is empirical.
        Hair {
            name: "hair",
            column: "hair",
            constraint: Constraint::range(30_000, 49_999),
            unique: false,
            fallback: None,
        },
        /// Face item id; the band is empirical.
        Face {
            name: "face",
            column: "face",
            constraint: Constraint::range(20_000, 29_999),
            unique: false,
            fallback: None,
        },
        /// Current map id.
        Map {
            name: "map",
            column: "map",
            constraint: Constraint::range(100_000_000, 999_999_999),
            unique: false,
            fallback: None,
        },
        /// Buddy list capacity.
        BuddyCapacity {
            name: "buddy_capacity",
            column: "buddyCapacity",
            constraint: Constraint::range(20, 100),
            unique: false,
            fallback: None,
        },
        Rebirths {
            name: "rebirths",
            column: "reborns",
            constraint: POOL,
            unique: false,
            fallback: Some(Value::Int(0)),
        },
        Ambition {
            name: "ambition",
            column: "ambition",
            constraint: POOL,
            unique: false,
            fallback: Some(Value::Int(0)),
        },
        Insight {
            name: "insight",
            column: "insight",
            constraint: POOL,
            unique: false,
            fallback: Some(Value::Int(0)),
        },
        Willpower {
            name: "willpower",
            column: "willpower",
            constraint: POOL,
            unique: false,
            fallback: Some(Value::Int(0)),
        },
        Diligence {
            name: "diligence",
            column: "diligence",
            constraint: POOL,
            unique: false,
            fallback: Some(Value::Int(0)),
        },
        Empathy {
            name: "empathy",
            column: "empathy",
            constraint: POOL,
            unique: false,
            fallback: Some(Value::Int(0)),
        },
        Charm {
            name: "charm",
            column: "charm",
            constraint: POOL,
            unique: false,
            fallback: Some(Value::Int(0)),
        },
        /// Honour pool. Stored in `innerExp` as far as anyone can tell.
        Honour {
            name: "honour",
            column: "innerExp",
            constraint: POOL,
            unique: false,
            fallback: Some(Value::Int(0)),
        },
        /// Chat ban flag, the strings `"true"` or `"false"`.
        Mute {
            name: "mute",
            column: "chatban",
            constraint: Constraint::OneOf(MUTE_VALUES),
            unique: false,
            fallback: Some(Value::Text("false".to_string())),
        },
    }
}

/// Strength, dexterity, intelligence and luck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryStats {
    pub strength: i64,
    pub dex: i64,
    pub inte: i64,
    pub luk: i64,
}

impl PrimaryStats {
    pub fn total(&self) -> i64 {
        self.strength + self.dex + self.inte + self.luk
    }
}

/// The six personality traits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub ambition: i64,
    pub insight: i64,
    pub willpower: i64,
    pub diligence: i64,
    pub empathy: i64,
    pub charm: i64,
}

/// Serialisable view of a character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub character_id: i64,
    pub account_id: i64,
    pub name: String,
    pub level: i64,
    pub job: i64,
    pub job_name: Option<String>,
    pub exp: i64,
    pub stats: PrimaryStats,
    pub ap: i64,
    pub max_hp: i64,
    pub max_mp: i64,
    pub meso: i64,
    pub fame: i64,
    pub skin: i64,
    pub gender: i64,
    pub hair: i64,
    pub face: i64,
    pub map: i64,
    pub buddy_capacity: i64,
    pub rebirths: i64,
    pub traits: PersonalityTraits,
    pub honour: i64,
    pub muted: bool,
}

/// Build a maplestory.io render link for a character wearing `items`.
///
/// Face and hair lead the item list, followed by each equipped item id.
pub fn avatar_url(skin: i64, face: i64, hair: i64, items: impl IntoIterator<Item = i64>) -> String {
    let parts = [face, hair]
        .into_iter()
        .chain(items)
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("https://maplestory.io/api/GMS/216/Character/200{skin}/{parts}/stand1/1")
}
