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

//! Account descriptors and data types

use crate::validation::{Constraint, INT_MAX};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Most characters an account may hold.
pub const MAX_CHARACTER_SLOTS: i64 = 52;

/// Status flags are `tinyint(1)` columns rather than booleans.
const FLAG: Constraint = Constraint::range(0, 127);

/// Currency pools are signed 32-bit columns that never go negative.
const CURRENCY: Constraint = Constraint::range(0, INT_MAX);

crate::define_fields! {
    /// Columns of the `accounts` table.
    pub enum AccountField in "accounts" keyed by Id {
        /// Primary key.
        Id {
            name: "account_id",
            column: "id",
            constraint: Constraint::ReadOnly,
            unique: false,
            fallback: None,
        },
        /// Login name, `varchar(64)`.
        Username {
            name: "username",
            column: "name",
            constraint: Constraint::length(1, 64),
            unique: true,
            fallback: None,
        },
        /// Plaintext password; the legacy schema does not hash it.
        Password {
            name: "password",
            column: "password",
            constraint: Constraint::length(1, 128),
            unique: false,
            fallback: None,
        },
        /// Non-zero while the server believes the account is online.
        LoggedIn {
            name: "logged_in",
            column: "loggedin",
            constraint: FLAG,
            unique: false,
            fallback: None,
        },
        /// Non-zero while the account is banned.
        Banned {
            name: "banned",
            column: "banned",
            constraint: FLAG,
            unique: false,
            fallback: None,
        },
        /// Free text ban reason, `text`.
        BanReason {
            name: "ban_reason",
            column: "banreason",
            constraint: Constraint::length(0, 65535),
            unique: false,
            fallback: Some(Value::Text(String::new())),
        },
        /// NX Prepaid.
        Nx {
            name: "nx",
            column: "nxCash",
            constraint: CURRENCY,
            unique: false,
            fallback: None,
        },
        /// Maple Points.
        MaplePoints {
            name: "maple_points",
            column: "mPoints",
            constraint: CURRENCY,
            unique: false,
            fallback: None,
        },
        /// Vote Points.
        VotePoints {
            name: "vote_points",
            column: "vpoints",
            constraint: CURRENCY,
            unique: false,
            fallback: None,
        },
        /// Donation Points; `realcash` holding them is an unconfirmed guess.
        DonationPoints {
            name: "donation_points",
            column: "realcash",
            constraint: CURRENCY,
            unique: false,
            fallback: None,
        },
        /// Character slot capacity.
        CharSlots {
            name: "char_slots",
            column: "chrslot",
            constraint: Constraint::range(0, MAX_CHARACTER_SLOTS),
            unique: false,
            fallback: None,
        },
    }
}

/// Serialisable view of an account. The password is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account_id: i64,
    pub username: String,
    pub logged_in: i64,
    pub banned: i64,
    pub ban_reason: String,
    pub nx: i64,
    pub maple_points: i64,
    pub vote_points: i64,
    pub donation_points: i64,
    pub char_slots: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;

    #[test]
    fn test_descriptor_table() {
        assert_eq!(AccountField::TABLE, "accounts");
        assert_eq!(AccountField::KEY, AccountField::Id);
        assert_eq!(AccountField::DonationPoints.column(), "realcash");
        assert!(AccountField::Username.unique());
        assert!(!AccountField::Nx.unique());
        assert_eq!(AccountField::all().len(), 11);
    }

    #[test]
    fn test_parse_by_name_or_column() {
        assert_eq!("nx".parse::<AccountField>(), Ok(AccountField::Nx));
        assert_eq!("nxCash".parse::<AccountField>(), Ok(AccountField::Nx));
        assert_eq!("CHRSLOT".parse::<AccountField>(), Ok(AccountField::CharSlots));
        assert!("gm".parse::<AccountField>().is_err());
        assert_eq!(AccountField::from_column("vpoints"), Some(AccountField::VotePoints));
    }

    #[test]
    fn test_summary_serialization() {
        let summary = AccountSummary {
            account_id: 90001,
            username: "tester0x00".to_string(),
            logged_in: 0,
            banned: 0,
            ban_reason: "Lorem Ipsum".to_string(),
            nx: 0,
            maple_points: 0,
            vote_points: 0,
            donation_points: 0,
            char_slots: 3,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("tester0x00"));
        assert!(!json.contains("password"));
    }
}
