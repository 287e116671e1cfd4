//! Storage port — repository trait for customer persistence.

use std::future::Future;

use clientele_domain::customer::Customer;
use clientele_domain::error::ClienteleError;

/// Repository for persisting and querying [`Customer`]s.
///
/// Rejections are ordinary return values: an invalid record, a duplicate
/// account number, or a missing row yields `false`, `None` or an empty list.
/// Implementations only return `Err` with [`ClienteleError::Storage`], when
/// the backend fails and the outcome of the operation is unknown.
///
/// Every value must reach the backend as a bound parameter, never as part of
/// the statement text.
pub trait CustomerRepository {
    /// Insert a new customer.
    ///
    /// Returns `false` without touching storage when the record is invalid,
    /// and `false` without modifying the existing row when the account number
    /// is already taken (active or inactive). Two concurrent calls with the
    /// same account number produce exactly one `true`.
    fn create_customer(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<bool, ClienteleError>> + Send;

    /// Get a customer by exact account number, whatever its active flag.
    fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> impl Future<Output = Result<Option<Customer>, ClienteleError>> + Send;

    /// Overwrite every mutable field of the customer with the same account number.
    ///
    /// Returns `false` without touching storage when the record is invalid.
    /// Otherwise returns `true` iff exactly one row was modified. The account
    /// number itself is never changed.
    fn update_customer(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<bool, ClienteleError>> + Send;

    /// Soft-delete a customer by clearing its active flag.
    ///
    /// Returns `true` iff the account number exists.
    fn delete_customer(
        &self,
        account_number: &str,
    ) -> impl Future<Output = Result<bool, ClienteleError>> + Send;

    /// Case-insensitive substring search on the name, active and inactive alike.
    fn search_by_name(
        &self,
        fragment: &str,
    ) -> impl Future<Output = Result<Vec<Customer>, ClienteleError>> + Send;

    /// Get every customer whose active flag is set.
    fn get_all_active_customers(
        &self,
    ) -> impl Future<Output = Result<Vec<Customer>, ClienteleError>> + Send;
}
