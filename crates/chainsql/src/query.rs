//! The chainable SELECT builder.
//!
//! A [`Query`] accumulates clause state through `&mut self` methods that
//! return the same builder, renders it into SQL text with `?` placeholders,
//! and optionally executes it against a borrowed [`Database`] handle.

use std::fmt;

use tracing::{debug, warn};

use crate::clause::{Join, JoinType, Predicate, TableRef};
use crate::database::Database;
use crate::error::{QueryError, Result};
use crate::value::{SqlValue, ToSqlValue};

/// Creates an empty SELECT query.
#[must_use]
pub fn select<'db, D>() -> Query<'db, D> {
    Query::new()
}

/// A SELECT statement under construction.
///
/// Clauses render in a fixed order (`SELECT`, `FROM`, joins, `WHERE`,
/// `ORDER BY`) regardless of the order the builder methods were called in.
/// Within a clause, entries render in insertion order.
///
/// # Example
///
/// ```rust
/// use chainsql::Query;
///
/// let mut query = Query::<()>::new();
/// query
///     .from("users", ["id"])
///     .inner_join("payments", "payments.user_id = users.id", ["amount"])
///     .where_clause("payments.amount > ? AND payments.is_approved", [10]);
///
/// assert_eq!(
///     query.to_string(),
///     "SELECT id, amount FROM users INNER JOIN payments ON payments.user_id = users.id \
///      WHERE (payments.amount > ? AND payments.is_approved)"
/// );
/// ```
#[derive(Debug)]
pub struct Query<'db, D> {
    table: Option<TableRef>,
    joins: Vec<Join>,
    predicates: Vec<Predicate>,
    order_by: Vec<String>,
    using: Option<&'db D>,
}

impl<D> Default for Query<'_, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'db, D> Query<'db, D> {
    /// Creates an empty query with no table and no database handle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: None,
            joins: Vec::new(),
            predicates: Vec::new(),
            order_by: Vec::new(),
            using: None,
        }
    }

    /// Sets the primary table and the columns selected from it.
    ///
    /// Calling this again replaces the previous table.
    pub fn from<I, S>(&mut self, table: &str, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table = Some(TableRef::new(table, columns));
        self
    }

    /// Appends a join of `table` on `predicate`, selecting `columns` from it.
    pub fn join<I, S>(
        &mut self,
        join_type: JoinType,
        table: &str,
        predicate: &str,
        columns: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.joins
            .push(Join::new(join_type, TableRef::new(table, columns), predicate));
        self
    }

    /// Appends an `INNER JOIN`.
    pub fn inner_join<I, S>(&mut self, table: &str, predicate: &str, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.join(JoinType::Inner, table, predicate, columns)
    }

    /// Appends a `LEFT JOIN`.
    pub fn left_join<I, S>(&mut self, table: &str, predicate: &str, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.join(JoinType::Left, table, predicate, columns)
    }

    /// Appends a `RIGHT JOIN`.
    pub fn right_join<I, S>(&mut self, table: &str, predicate: &str, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.join(JoinType::Right, table, predicate, columns)
    }

    /// Appends one WHERE predicate with the arguments for its placeholders.
    ///
    /// Each call adds a separate predicate; predicates are parenthesized and
    /// combined with `AND`. Boolean logic inside one predicate is up to the
    /// template text.
    pub fn where_clause<I>(&mut self, condition: &str, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToSqlValue,
    {
        let args = args.into_iter().map(ToSqlValue::to_sql_value).collect();
        self.predicates.push(Predicate::new(condition, args));
        self
    }

    /// Appends one WHERE predicate that binds no arguments.
    pub fn where_raw(&mut self, condition: &str) -> &mut Self {
        self.predicates.push(Predicate::new(condition, Vec::new()));
        self
    }

    /// Appends ordering expressions such as `"users.id ASC"`.
    pub fn order_by<I, S>(&mut self, expressions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_by
            .extend(expressions.into_iter().map(Into::into));
        self
    }

    /// Binds the database handle used by [`query`](Self::query) and
    /// [`query_row`](Self::query_row).
    pub fn using(&mut self, db: &'db D) -> &mut Self {
        self.using = Some(db);
        self
    }

    /// Returns the primary table, if set.
    #[must_use]
    pub const fn table(&self) -> Option<&TableRef> {
        self.table.as_ref()
    }

    /// Returns the joins in call order.
    #[must_use]
    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// Returns the WHERE predicates in call order.
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns the ORDER BY expressions in call order.
    #[must_use]
    pub fn order_by_parts(&self) -> &[String] {
        &self.order_by
    }

    /// Returns true if a database handle is bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.using.is_some()
    }

    /// Renders the statement.
    ///
    /// Returns an empty string when no table is set.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let Some(table) = &self.table else {
            return String::new();
        };

        let columns: Vec<&str> = table
            .columns()
            .iter()
            .chain(self.joins.iter().flat_map(|join| join.table().columns()))
            .map(String::as_str)
            .collect();

        let mut sql = String::from("SELECT ");
        sql.push_str(&columns.join(", "));
        sql.push_str(" FROM ");
        sql.push_str(table.name());

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_string());
        }

        if !self.predicates.is_empty() {
            let conditions: Vec<String> = self
                .predicates
                .iter()
                .map(|p| format!("({})", p.condition()))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by.join(", "));
        }

        sql
    }

    /// Returns every predicate argument, flattened in placeholder order.
    #[must_use]
    pub fn args(&self) -> Vec<SqlValue> {
        self.predicates
            .iter()
            .flat_map(|p| p.args().iter().cloned())
            .collect()
    }

    /// Renders the statement and returns it with its arguments.
    #[must_use]
    pub fn build(&self) -> (String, Vec<SqlValue>) {
        (self.to_sql(), self.args())
    }
}

impl<D> fmt::Display for Query<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl<D: Database + Sync> Query<'_, D> {
    /// Executes the statement and returns every resulting row.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingDatabase`] if no handle is bound,
    /// [`QueryError::EmptyStatement`] if no table is set, and
    /// [`QueryError::Database`] with the handle's error unchanged if
    /// execution fails.
    pub async fn query(&self) -> Result<Vec<D::Row>, D::Error> {
        let Some(db) = self.using else {
            warn!("query executed without a database");
            return Err(QueryError::MissingDatabase);
        };
        let (sql, args) = self.statement()?;

        debug!(sql = %sql, args = args.len(), "Executing query");
        db.fetch_all(&sql, &args).await.map_err(|e| {
            debug!(sql = %sql, error = %e, "Query failed");
            QueryError::Database(e)
        })
    }

    /// Executes the statement and returns its first row, if any.
    ///
    /// # Panics
    ///
    /// Panics if no database handle is bound. Running a single-row query
    /// on an unbound builder is a programming error; use
    /// [`try_query_row`](Self::try_query_row) to get
    /// [`QueryError::MissingDatabase`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyStatement`] if no table is set and
    /// [`QueryError::Database`] if execution fails.
    pub async fn query_row(&self) -> Result<Option<D::Row>, D::Error> {
        assert!(
            self.using.is_some(),
            "query_row called without a database; bind one with Query::using"
        );
        self.try_query_row().await
    }

    /// Like [`query_row`](Self::query_row) but reports a missing handle as
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingDatabase`] if no handle is bound,
    /// [`QueryError::EmptyStatement`] if no table is set, and
    /// [`QueryError::Database`] if execution fails.
    pub async fn try_query_row(&self) -> Result<Option<D::Row>, D::Error> {
        let Some(db) = self.using else {
            warn!("query_row executed without a database");
            return Err(QueryError::MissingDatabase);
        };
        let (sql, args) = self.statement()?;

        debug!(sql = %sql, args = args.len(), "Executing single-row query");
        db.fetch_optional(&sql, &args).await.map_err(|e| {
            debug!(sql = %sql, error = %e, "Query failed");
            QueryError::Database(e)
        })
    }

    fn statement(&self) -> Result<(String, Vec<SqlValue>), D::Error> {
        if self.table.is_none() {
            warn!("query has no FROM table, not executing");
            return Err(QueryError::EmptyStatement);
        }
        Ok(self.build())
    }
}
