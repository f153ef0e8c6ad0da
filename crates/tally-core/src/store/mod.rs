//! Storage abstraction for users and transactions
//!
//! Handlers and commands depend on these traits rather than on a concrete
//! backend. [`MemoryStore`] is the only implementation: a process-local
//! store that starts empty (or with demo data) on every launch.

use crate::error::Result;
use crate::models::{NewTransaction, Transaction, User};

mod memory;

pub use memory::MemoryStore;

/// Per-user transaction storage
pub trait TransactionStore: Send + Sync {
    /// All of a user's transactions, newest date first
    ///
    /// Transactions sharing a date keep their insertion order.
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;

    /// Store a transaction and return it with its assigned id
    fn insert_transaction(&self, user_id: &str, tx: NewTransaction) -> Result<Transaction>;

    /// Delete one of the user's transactions
    ///
    /// Returns false when no transaction with that id belongs to the user.
    fn delete_transaction(&self, user_id: &str, id: &str) -> Result<bool>;
}

/// User account storage
pub trait UserStore: Send + Sync {
    fn find_user(&self, id: &str) -> Result<Option<User>>;

    /// Exact (case-sensitive) email lookup
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Add a user; fails with `Conflict` if the email or id is taken
    fn insert_user(&self, user: User) -> Result<()>;
}

/// Everything the application needs from a backend
pub trait Store: TransactionStore + UserStore {}

impl<T: TransactionStore + UserStore> Store for T {}
