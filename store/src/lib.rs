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

//! Azurite Store
//!
//! Validated access to the `accounts`, `characters` and `inventoryitems`
//! tables of an AzureMS v316 database. Entry point is [`Database`].

#[macro_use]
mod macros;

pub mod account;
pub mod character;
pub mod config;
pub mod database;
pub mod error;
pub mod executor;
pub mod inventory;
pub mod record;
pub mod statement;

pub use account::Account;
pub use character::Character;
pub use database::Database;
pub use error::{StoreError, StoreResult};
pub use executor::{Executor, MemoryExecutor, MySqlExecutor};
