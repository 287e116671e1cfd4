//! Customer — a persisted account holder identified by its account number.
//!
//! The account number is the natural key: it is assigned externally, must be
//! unique across every stored customer (active or not), and never changes once
//! a record exists. Removal is logical only, through the `active` flag.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ClienteleError, ValidationError};

/// A customer record as held in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub account_number: String,
    pub name: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub credit_limit: Option<Decimal>,
    pub active: bool,
}

impl Customer {
    /// Create a builder for constructing a [`Customer`].
    #[must_use]
    pub fn builder() -> CustomerBuilder {
        CustomerBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// Blank strings count as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::Validation`] when the account number or name
    /// is empty, or when the credit limit is negative.
    pub fn validate(&self) -> Result<(), ClienteleError> {
        if self.account_number.trim().is_empty() {
            return Err(ValidationError::EmptyAccountNumber.into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.credit_limit.is_some_and(|limit| limit < Decimal::ZERO) {
            return Err(ValidationError::NegativeCreditLimit.into());
        }
        Ok(())
    }

    /// Mark the customer as logically deleted.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Step-by-step builder for [`Customer`].
#[derive(Debug)]
pub struct CustomerBuilder {
    account_number: Option<String>,
    name: Option<String>,
    address: Option<String>,
    phone_number: Option<String>,
    email: Option<String>,
    credit_limit: Option<Decimal>,
    active: bool,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self {
            account_number: None,
            name: None,
            address: None,
            phone_number: None,
            email: None,
            credit_limit: None,
            active: true,
        }
    }
}

impl CustomerBuilder {
    #[must_use]
    pub fn account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn credit_limit(mut self, credit_limit: Decimal) -> Self {
        self.credit_limit = Some(credit_limit);
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Consume the builder without checking invariants.
    ///
    /// Useful for callers that hand untrusted input straight to the
    /// repository, which performs its own validation.
    #[must_use]
    pub fn build_unchecked(self) -> Customer {
        Customer {
            account_number: self.account_number.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            address: self.address,
            phone_number: self.phone_number,
            email: self.email,
            credit_limit: self.credit_limit,
            active: self.active,
        }
    }

    /// Consume the builder, validate, and return a [`Customer`].
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::Validation`] if the account number or name is
    /// missing or empty, or if the credit limit is negative.
    pub fn build(self) -> Result<Customer, ClienteleError> {
        let customer = self.build_unchecked();
        customer.validate()?;
        Ok(customer)
    }
}
