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

/// Generate entity accessors that forward to the entity's `record`.
///
/// ```ignore
/// impl Character {
///     accessors!(CharacterField {
///         get level: Level,
///         set set_level: Level,
///         add add_level: Level,
///         text name: Name,
///     });
/// }
/// ```
macro_rules! accessors {
    ($field:ident { $($kind:ident $method:ident: $variant:ident),* $(,)? }) => {
        $(
            accessors!(@$kind $field $method $variant);
        )*
    };
    (@get $field:ident $method:ident $variant:ident) => {
        #[doc = concat!("Current `", stringify!($method), "`.")]
        pub fn $method(&self) -> i64 {
            self.record.int($field::$variant)
        }
    };
    (@text $field:ident $method:ident $variant:ident) => {
        #[doc = concat!("Current `", stringify!($method), "`.")]
        pub fn $method(&self) -> &str {
            self.record.text($field::$variant)
        }
    };
    (@set $field:ident $method:ident $variant:ident) => {
        #[doc = concat!("Validate and persist a new `", stringify!($variant), "`.")]
        pub async fn $method(&mut self, value: impl Into<azurite_common::Value>) -> $crate::error::StoreResult<()> {
            self.record.set($field::$variant, value).await
        }
    };
    (@add $field:ident $method:ident $variant:ident) => {
        #[doc = concat!("Add to `", stringify!($variant), "`, returning the new total.")]
        pub async fn $method(&mut self, delta: i64) -> $crate::error::StoreResult<i64> {
            self.record.add($field::$variant, delta).await
        }
    };
}
