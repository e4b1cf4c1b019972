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

//! Azurite Common Types
//!
//! This crate defines the schema-facing types shared by the Azurite store:
//! - Row values and typed column access
//! - Declarative field descriptors for the `accounts` and `characters` tables
//! - Validation constraints and errors
//! - Inventory tabs and item records
//! - The job id to class name table

pub mod account;
pub mod character;
pub mod fields;
pub mod inventory;
pub mod jobs;
pub mod macros;
pub mod validation;
pub mod value;

pub use fields::Field;
pub use validation::{Constraint, ValidationError};
pub use value::{ColumnError, Row, Value};
