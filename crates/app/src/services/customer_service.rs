//! Customer service — use-cases for managing customers.

use clientele_domain::customer::Customer;
use clientele_domain::error::{ClienteleError, ConflictError, NotFoundError};

use crate::ports::CustomerRepository;

const ENTITY: &str = "Customer";

fn not_found(account_number: &str) -> ClienteleError {
    NotFoundError {
        entity: ENTITY,
        key: account_number.to_string(),
    }
    .into()
}

/// Application service for customer operations.
///
/// The repository reports rejections as `false`; this service reports them
/// as typed [`ClienteleError`]s for callers that prefer to branch on errors.
pub struct CustomerService<R> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new customer after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::Validation`] if invariants fail,
    /// [`ClienteleError::Conflict`] if the account number is already taken,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, customer), fields(account_number = %customer.account_number))]
    pub async fn register_customer(&self, customer: Customer) -> Result<Customer, ClienteleError> {
        customer.validate()?;
        if self.repo.create_customer(customer.clone()).await? {
            Ok(customer)
        } else {
            Err(ConflictError {
                entity: ENTITY,
                key: customer.account_number,
            }
            .into())
        }
    }

    /// Look up a customer by account number, active or not.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] when no customer has this account
    /// number, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer(&self, account_number: &str) -> Result<Customer, ClienteleError> {
        self.repo
            .find_by_account_number(account_number)
            .await?
            .ok_or_else(|| not_found(account_number))
    }

    /// Look up a customer by account number, hiding soft-deleted ones.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] when no customer has this account
    /// number or the customer is inactive, or a storage error from the
    /// repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_active_customer(
        &self,
        account_number: &str,
    ) -> Result<Customer, ClienteleError> {
        self.repo
            .find_by_account_number(account_number)
            .await?
            .filter(|customer| customer.active)
            .ok_or_else(|| not_found(account_number))
    }

    /// Overwrite an existing customer's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::Validation`] if invariants fail,
    /// [`ClienteleError::NotFound`] if the account number is unknown, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, customer), fields(account_number = %customer.account_number))]
    pub async fn update_customer(&self, customer: Customer) -> Result<Customer, ClienteleError> {
        customer.validate()?;
        if self.repo.update_customer(customer.clone()).await? {
            Ok(customer)
        } else {
            Err(not_found(&customer.account_number))
        }
    }

    /// Soft-delete a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] if the account number is unknown,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn deactivate_customer(&self, account_number: &str) -> Result<(), ClienteleError> {
        if self.repo.delete_customer(account_number).await? {
            Ok(())
        } else {
            Err(not_found(account_number))
        }
    }

    /// Search customers whose name contains `fragment`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn search_customers(&self, fragment: &str) -> Result<Vec<Customer>, ClienteleError> {
        self.repo.search_by_name(fragment).await
    }

    /// List every active customer.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_active_customers(&self) -> Result<Vec<Customer>, ClienteleError> {
        self.repo.get_all_active_customers().await
    }
}
