//! Transaction management for the finance tracker.
//!
//! This module contains everything related to a single transaction:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The `TransactionForm` that validates raw user input before anything is stored

mod core;
mod form;

pub use core::{Transaction, TransactionBuilder, TransactionId, TransactionType};
pub use form::{TransactionForm, ValidationError};
