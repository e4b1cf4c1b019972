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

//! Account entity

use crate::error::StoreResult;
use crate::executor::Executor;
use crate::record::Record;
use azurite_common::account::{AccountField, AccountSummary};
use azurite_common::jobs::JobTable;
use azurite_common::Row;
use std::sync::Arc;

/// A row of `accounts` with validated mutators.
#[derive(Clone, Debug)]
pub struct Account {
    record: Record<AccountField>,
}

impl Account {
    pub fn hydrate(row: Row, executor: Arc<dyn Executor>, jobs: Arc<JobTable>) -> StoreResult<Self> {
        Ok(Self {
            record: Record::hydrate(row, executor, jobs)?,
        })
    }

    pub fn record(&self) -> &Record<AccountField> {
        &self.record
    }

    accessors!(AccountField {
        get account_id: Id,
        text username: Username,
        set set_username: Username,
        get logged_in: LoggedIn,
        set set_logged_in: LoggedIn,
        get banned: Banned,
        set set_banned: Banned,
        text ban_reason: BanReason,
        set set_ban_reason: BanReason,
        get nx: Nx,
        set set_nx: Nx,
        add add_nx: Nx,
        get maple_points: MaplePoints,
        set set_maple_points: MaplePoints,
        add add_maple_points: MaplePoints,
        get vote_points: VotePoints,
        set set_vote_points: VotePoints,
        add add_vote_points: VotePoints,
        get donation_points: DonationPoints,
        set set_donation_points: DonationPoints,
        add add_donation_points: DonationPoints,
        get char_slots: CharSlots,
        set set_char_slots: CharSlots,
        add add_char_slots: CharSlots,
    });

    pub fn is_online(&self) -> bool {
        self.logged_in() > 0
    }

    pub fn is_banned(&self) -> bool {
        self.banned() > 0
    }

    /// Clear the logged-in flag of an account stuck after a crash.
    pub async fn unstuck(&mut self) -> StoreResult<()> {
        self.set_logged_in(0).await
    }

    /// Replace the stored password. The schema keeps it in plaintext.
    pub async fn change_password(&mut self, password: &str) -> StoreResult<()> {
        self.record.set(AccountField::Password, password).await
    }

    pub fn snapshot(&self) -> AccountSummary {
        AccountSummary {
            account_id: self.account_id(),
            username: self.username().to_string(),
            logged_in: self.logged_in(),
            banned: self.banned(),
            ban_reason: self.ban_reason().to_string(),
            nx: self.nx(),
            maple_points: self.maple_points(),
            vote_points: self.vote_points(),
            donation_points: self.donation_points(),
            char_slots: self.char_slots(),
        }
    }
}
