//! `SQLite` implementation of [`CustomerRepository`].

use std::future::Future;
use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use clientele_app::ports::CustomerRepository;
use clientele_domain::customer::Customer;
use clientele_domain::error::ClienteleError;

use crate::error::{StorageError, is_unique_violation};

/// Wrapper for converting database rows into domain [`Customer`].
struct Wrapper(Customer);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Customer> {
        value.map(|w| w.0)
    }

    fn many(values: Vec<Self>) -> Vec<Customer> {
        values.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let credit_limit: Option<String> = row.try_get("credit_limit")?;
        let credit_limit = credit_limit
            .as_deref()
            .map(Decimal::from_str)
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Customer {
            account_number: row.try_get("account_number")?,
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            phone_number: row.try_get("phone_number")?,
            email: row.try_get("email")?,
            credit_limit,
            active: row.try_get("active")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO customers (account_number, name, name_folded, address, phone_number, email, credit_limit, active) VALUES (?, ?, ?, ?, ?, ?, ?, ?) ON CONFLICT (account_number) DO NOTHING";
const SELECT_BY_ACCOUNT_NUMBER: &str = "SELECT * FROM customers WHERE account_number = ?";
const UPDATE: &str = "UPDATE customers SET name = ?, name_folded = ?, address = ?, phone_number = ?, email = ?, credit_limit = ?, active = ? WHERE account_number = ?";
const SOFT_DELETE: &str = "UPDATE customers SET active = 0 WHERE account_number = ?";
const SEARCH_BY_NAME: &str =
    "SELECT * FROM customers WHERE name_folded LIKE ? ESCAPE '\\' ORDER BY name, account_number";
const SELECT_ACTIVE: &str = "SELECT * FROM customers WHERE active = 1 ORDER BY account_number";

/// Unicode case folding applied to names and search fragments alike.
fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Build a `LIKE` pattern matching `fragment` anywhere, with wildcards in the
/// fragment itself escaped so they match literally.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// `SQLite`-backed customer repository.
///
/// Each call checks one connection out of the pool for a single statement.
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for SqliteCustomerRepository {
    fn create_customer(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<bool, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            if let Err(err) = customer.validate() {
                tracing::debug!(error = ?err, "rejecting invalid customer");
                return Ok(false);
            }

            let result = sqlx::query(INSERT)
                .bind(&customer.account_number)
                .bind(&customer.name)
                .bind(fold(&customer.name))
                .bind(&customer.address)
                .bind(&customer.phone_number)
                .bind(&customer.email)
                .bind(customer.credit_limit.map(|limit| limit.to_string()))
                .bind(customer.active)
                .execute(&pool)
                .await;

            match result {
                Ok(done) if done.rows_affected() == 1 => Ok(true),
                Ok(_) => {
                    tracing::debug!(account_number = %customer.account_number, "account number already taken");
                    Ok(false)
                }
                Err(err) if is_unique_violation(&err) => {
                    tracing::warn!(account_number = %customer.account_number, "unique constraint rejected customer");
                    Ok(false)
                }
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> impl Future<Output = Result<Option<Customer>, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ACCOUNT_NUMBER)
                .bind(account_number)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update_customer(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<bool, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            if let Err(err) = customer.validate() {
                tracing::debug!(error = ?err, "rejecting invalid customer update");
                return Ok(false);
            }

            let done = sqlx::query(UPDATE)
                .bind(&customer.name)
                .bind(fold(&customer.name))
                .bind(&customer.address)
                .bind(&customer.phone_number)
                .bind(&customer.email)
                .bind(customer.credit_limit.map(|limit| limit.to_string()))
                .bind(customer.active)
                .bind(&customer.account_number)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if done.rows_affected() == 0 {
                tracing::debug!(account_number = %customer.account_number, "no customer to update");
            }
            Ok(done.rows_affected() == 1)
        }
    }

    fn delete_customer(
        &self,
        account_number: &str,
    ) -> impl Future<Output = Result<bool, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let done = sqlx::query(SOFT_DELETE)
                .bind(account_number)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(done.rows_affected() == 1)
        }
    }

    fn search_by_name(
        &self,
        fragment: &str,
    ) -> impl Future<Output = Result<Vec<Customer>, ClienteleError>> + Send {
        let pool = self.pool.clone();
        let pattern = contains_pattern(&fold(fragment));
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SEARCH_BY_NAME)
                .bind(pattern)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn get_all_active_customers(
        &self,
    ) -> impl Future<Output = Result<Vec<Customer>, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ACTIVE)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }
}
