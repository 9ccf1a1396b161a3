//! # buxfer-client
//!
//! API bindings for the [Buxfer](https://www.buxfer.com/) personal-finance
//! web API, covering account listing, transaction listing/filtering, and
//! transaction creation.
//!
//! The client holds a single immutable credential for its whole lifetime and
//! injects it into the query string of every request. All upstream fields are
//! modeled as optional with documented display defaults; the upstream service
//! is treated as the source of truth for numeric and date correctness.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use buxfer_client::{BuxferClient, TransactionQuery};
//!
//! # async fn demo() -> buxfer_client::Result<()> {
//! let client = BuxferClient::new(Some("secret-token".to_string()));
//! let accounts = client.accounts().await?;
//! let page = client
//!     .transactions(&TransactionQuery {
//!         tag_name: "groceries".to_string(),
//!         ..TransactionQuery::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::{BuxferClient, API_BASE};
pub use error::{ClientError, Result};
pub use types::{
    Account, AddTransactionRequest, Transaction, TransactionQuery, TransactionsPage,
};
