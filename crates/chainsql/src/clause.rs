//! Clause state accumulated by [`Query`](crate::Query).
//!
//! Table names, column expressions, join conditions and predicate templates
//! are opaque text. Nothing here parses or validates SQL.

use std::fmt;

use crate::value::SqlValue;

/// A table name plus the column expressions selected from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    name: String,
    columns: Vec<String>,
}

impl TableRef {
    /// Creates a table reference selecting `columns` from `name`.
    #[must_use]
    pub fn new<I, S>(name: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: String::from(name),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the selected column expressions in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// The kind of a JOIN clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// `INNER JOIN`
    Inner,
    /// `LEFT JOIN`
    Left,
    /// `RIGHT JOIN`
    Right,
    /// `FULL OUTER JOIN`
    Full,
}

impl JoinType {
    /// Returns the SQL keyword phrase for this join kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL OUTER JOIN",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A joined table with its ON condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    join_type: JoinType,
    table: TableRef,
    predicate: String,
}

impl Join {
    /// Creates a join of `table` on `predicate`.
    #[must_use]
    pub fn new(join_type: JoinType, table: TableRef, predicate: &str) -> Self {
        Self {
            join_type,
            table,
            predicate: String::from(predicate),
        }
    }

    /// Returns the join kind.
    #[must_use]
    pub const fn join_type(&self) -> JoinType {
        self.join_type
    }

    /// Returns the joined table.
    #[must_use]
    pub const fn table(&self) -> &TableRef {
        &self.table
    }

    /// Returns the ON condition text.
    #[must_use]
    pub fn predicate(&self) -> &str {
        &self.predicate
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ON {}",
            self.join_type, self.table.name, self.predicate
        )
    }
}

/// One WHERE condition template and the arguments bound to its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    condition: String,
    args: Vec<SqlValue>,
}

impl Predicate {
    /// Creates a predicate from a condition template and its arguments.
    #[must_use]
    pub fn new(condition: &str, args: Vec<SqlValue>) -> Self {
        Self {
            condition: String::from(condition),
            args,
        }
    }

    /// Returns the condition template.
    #[must_use]
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Returns the bound arguments in placeholder order.
    #[must_use]
    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }
}
