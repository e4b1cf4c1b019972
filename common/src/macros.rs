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

/// Declare a table's field descriptors.
///
/// ```ignore
/// define_fields! {
///     pub enum AccountField in "accounts" keyed by Id {
///         /// Primary key.
///         Id {
///             name: "account_id",
///             column: "id",
///             constraint: Constraint::ReadOnly,
///             unique: false,
///             fallback: None,
///         },
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $field:ident in $table:literal keyed by $key:ident {
            $(
                $(#[$attr:meta])*
                $id:ident {
                    name: $name:literal,
                    column: $column:literal,
                    constraint: $constraint:expr,
                    unique: $unique:literal,
                    fallback: $fallback:expr,
                }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
        $vis enum $field {
            $(
                $(#[$attr])*
                $id,
            )*
        }

        impl $crate::fields::Field for $field {
            const TABLE: &'static str = $table;
            const KEY: Self = $field::$key;

            fn name(&self) -> &'static str {
                match self {
                    $(
                        $field::$id => $name,
                    )*
                }
            }

            fn column(&self) -> &'static str {
                match self {
                    $(
                        $field::$id => $column,
                    )*
                }
            }

            fn constraint(&self) -> $crate::validation::Constraint {
                match self {
                    $(
                        $field::$id => $constraint,
                    )*
                }
            }

            fn unique(&self) -> bool {
                match self {
                    $(
                        $field::$id => $unique,
                    )*
                }
            }

            fn fallback(&self) -> Option<$crate::value::Value> {
                match self {
                    $(
                        $field::$id => $fallback,
                    )*
                }
            }

            fn all() -> &'static [Self] {
                &[
                    $(
                        $field::$id,
                    )*
                ]
            }
        }

        impl std::fmt::Display for $field {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", $crate::fields::Field::name(self))
            }
        }

        impl std::str::FromStr for $field {
            type Err = String;

            /// Accepts either the attribute name or the column name, ignoring case.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::fields::Field>::all()
                    .iter()
                    .find(|field| {
                        $crate::fields::Field::name(*field).eq_ignore_ascii_case(s)
                            || $crate::fields::Field::column(*field).eq_ignore_ascii_case(s)
                    })
                    .copied()
                    .ok_or(format!("Unknown {} field {}", $table, s))
            }
        }
    };
}
