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

//! Field descriptors
//!
//! A field descriptor ties an attribute name to its column, its constraint,
//! whether it must be unique across the table, and the value to assume when
//! an older schema lacks the column. Descriptor enums are generated with
//! [`define_fields!`](crate::define_fields).

use crate::validation::Constraint;
use crate::value::Value;

/// A column of a mapped table.
pub trait Field:
    Copy + Eq + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
    /// Table the field belongs to.
    const TABLE: &'static str;

    /// Primary key field of the table.
    const KEY: Self;

    /// Attribute name exposed by the entity.
    fn name(&self) -> &'static str;

    /// Column name in the database.
    fn column(&self) -> &'static str;

    fn constraint(&self) -> Constraint;

    /// Whether no two rows may share a value for this field.
    fn unique(&self) -> bool;

    /// Value assumed when the column is absent from a row.
    fn fallback(&self) -> Option<Value>;

    /// Every field of the table, in declaration order.
    fn all() -> &'static [Self];

    fn from_column(column: &str) -> Option<Self> {
        Self::all().iter().copied().find(|field| field.column() == column)
    }
}
