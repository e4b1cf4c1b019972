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

//! Structured SQL statements
//!
//! Every statement the store issues is either a filtered `SELECT` or a
//! single-column `UPDATE` keyed by primary key. Statements are built as data
//! and rendered to MySQL text with `?` placeholders, so values only ever
//! travel as bound parameters.

use azurite_common::Value;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    /// `SELECT *`
    All,
    Columns(Vec<&'static str>),
    /// `SELECT COUNT(*) AS count`
    Count,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
}

impl Operator {
    fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "<>",
            Operator::Gt => ">",
            Operator::Lt => "<",
        }
    }
}

/// `column <op> ?`
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub column: &'static str,
    pub operator: Operator,
    pub value: Value,
}

impl Condition {
    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        Self { column, operator: Operator::Eq, value: value.into() }
    }

    pub fn ne(column: &'static str, value: impl Into<Value>) -> Self {
        Self { column, operator: Operator::Ne, value: value.into() }
    }

    pub fn gt(column: &'static str, value: impl Into<Value>) -> Self {
        Self { column, operator: Operator::Gt, value: value.into() }
    }

    pub fn lt(column: &'static str, value: impl Into<Value>) -> Self {
        Self { column, operator: Operator::Lt, value: value.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Select {
    pub table: &'static str,
    pub projection: Projection,
    pub conditions: Vec<Condition>,
    /// Column to sort descending by.
    pub order_by_desc: Option<&'static str>,
    pub limit: Option<u64>,
}

impl Select {
    pub fn from(table: &'static str) -> Self {
        Self {
            table,
            projection: Projection::All,
            conditions: Vec::new(),
            order_by_desc: None,
            limit: None,
        }
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = &'static str>) -> Self {
        self.projection = Projection::Columns(columns.into_iter().collect());
        self
    }

    pub fn count(mut self) -> Self {
        self.projection = Projection::Count;
        self
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn order_by_desc(mut self, column: &'static str) -> Self {
        self.order_by_desc = Some(column);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// `UPDATE table SET column = ? WHERE key = ?`
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    pub table: &'static str,
    pub column: &'static str,
    pub value: Value,
    pub key_column: &'static str,
    pub key: Value,
}

impl Update {
    pub fn new(
        table: &'static str,
        column: &'static str,
        value: impl Into<Value>,
        key_column: &'static str,
        key: impl Into<Value>,
    ) -> Self {
        Self {
            table,
            column,
            value: value.into(),
            key_column,
            key: key.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Select(Select),
    Update(Update),
}

impl Statement {
    pub fn table(&self) -> &'static str {
        match self {
            Statement::Select(select) => select.table,
            Statement::Update(update) => update.table,
        }
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Statement::Update(_))
    }

    /// MySQL text with one `?` per bound value.
    pub fn sql(&self) -> String {
        match self {
            Statement::Select(select) => {
                let projection = match &select.projection {
                    Projection::All => "*".to_string(),
                    Projection::Columns(columns) => columns
                        .iter()
                        .map(|column| quote(column))
                        .collect::<Vec<_>>()
                        .join(", "),
                    Projection::Count => "COUNT(*) AS `count`".to_string(),
                };
                let mut sql = format!("SELECT {} FROM {}", projection, quote(select.table));
                if !select.conditions.is_empty() {
                    let conditions = select
                        .conditions
                        .iter()
                        .map(|condition| {
                            format!("{} {} ?", quote(condition.column), condition.operator.symbol())
                        })
                        .collect::<Vec<_>>()
                        .join(" AND ");
                    sql.push_str(" WHERE ");
                    sql.push_str(&conditions);
                }
                if let Some(column) = select.order_by_desc {
                    sql.push_str(&format!(" ORDER BY {} DESC", quote(column)));
                }
                if let Some(limit) = select.limit {
                    sql.push_str(&format!(" LIMIT {}", limit));
                }
                sql
            }
            Statement::Update(update) => format!(
                "UPDATE {} SET {} = ? WHERE {} = ?",
                quote(update.table),
                quote(update.column),
                quote(update.key_column)
            ),
        }
    }

    /// Values in placeholder order.
    pub fn binds(&self) -> Vec<&Value> {
        match self {
            Statement::Select(select) => select.conditions.iter().map(|c| &c.value).collect(),
            Statement::Update(update) => vec![&update.value, &update.key],
        }
    }
}

impl From<Select> for Statement {
    fn from(select: Select) -> Self {
        Statement::Select(select)
    }
}

impl From<Update> for Statement {
    fn from(update: Update) -> Self {
        Statement::Update(update)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql())
    }
}

fn quote(identifier: &str) -> String {
    format!("`{}`", identifier.replace('`', "``"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_rendering() {
        let statement: Statement = Select::from("characters")
            .filter(Condition::eq("name", "tester0x00"))
            .limit(1)
            .into();
        assert_eq!(
            statement.sql(),
            "SELECT * FROM `characters` WHERE `name` = ? LIMIT 1"
        );
        assert_eq!(statement.binds(), vec![&Value::from("tester0x00")]);
        assert!(!statement.is_write());
    }

    #[test]
    fn test_ranking_rendering() {
        let statement: Statement = Select::from("characters")
            .columns(["name", "level"])
            .filter(Condition::lt("gm", 1))
            .order_by_desc("level")
            .limit(10)
            .into();
        assert_eq!(
            statement.to_string(),
            "SELECT `name`, `level` FROM `characters` WHERE `gm` < ? ORDER BY `level` DESC LIMIT 10"
        );
    }

    #[test]
    fn test_count_and_uniqueness_probe() {
        let count: Statement = Select::from("accounts")
            .count()
            .filter(Condition::gt("loggedin", 0))
            .into();
        assert_eq!(
            count.sql(),
            "SELECT COUNT(*) AS `count` FROM `accounts` WHERE `loggedin` > ?"
        );

        let probe: Statement = Select::from("accounts")
            .columns(["id"])
            .filter(Condition::eq("name", "admin"))
            .filter(Condition::ne("id", 7))
            .limit(1)
            .into();
        assert_eq!(
            probe.sql(),
            "SELECT `id` FROM `accounts` WHERE `name` = ? AND `id` <> ? LIMIT 1"
        );
        assert_eq!(probe.binds(), vec![&Value::from("admin"), &Value::Int(7)]);
    }

    #[test]
    fn test_update_rendering() {
        let statement: Statement = Update::new("characters", "meso", 3141592, "id", 1).into();
        assert_eq!(
            statement.sql(),
            "UPDATE `characters` SET `meso` = ? WHERE `id` = ?"
        );
        assert_eq!(statement.binds(), vec![&Value::Int(3141592), &Value::Int(1)]);
        assert!(statement.is_write());
        assert_eq!(statement.table(), "characters");
    }
}
