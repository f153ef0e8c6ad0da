//! In-memory store backed by `RwLock`ed vectors

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use tracing::debug;

use crate::auth;
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction, TransactionType, User};

use super::{TransactionStore, UserStore};

/// A transaction together with the user that owns it
#[derive(Debug, Clone)]
struct OwnedTransaction {
    user_id: String,
    transaction: Transaction,
}

/// Process-local store; contents are lost on restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    transactions: RwLock<Vec<OwnedTransaction>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the demo account and its three sample transactions
    pub fn with_demo_data() -> Result<Self> {
        let store = Self::new();
        store.seed_demo_data()?;
        Ok(store)
    }

    /// Add the demo account and sample transactions (idempotent)
    pub fn seed_demo_data(&self) -> Result<()> {
        if self.find_user(auth::DEMO_USER_ID)?.is_some() {
            return Ok(());
        }

        self.insert_user(auth::demo_user())?;

        let samples = [
            (TransactionType::Income, 5000.0, "Salary", "Monthly salary", (2024, 6, 1)),
            (TransactionType::Expense, 1200.0, "Bills", "Rent payment", (2024, 6, 2)),
            (TransactionType::Expense, 300.0, "Food", "Groceries", (2024, 6, 3)),
        ];

        for (i, (kind, amount, category, description, (y, m, d))) in samples.into_iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| Error::Internal(format!("invalid demo date {}-{}-{}", y, m, d)))?;
            let tx = NewTransaction {
                transaction_type: kind,
                amount,
                category: category.to_string(),
                description: description.to_string(),
                date,
            };
            self.write_transactions()?.push(OwnedTransaction {
                user_id: auth::DEMO_USER_ID.to_string(),
                transaction: tx.into_transaction(format!("demo-{}", i + 1)),
            });
        }

        debug!(user = auth::DEMO_USER_ID, "Seeded demo data");
        Ok(())
    }

    fn read_users(&self) -> Result<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| Error::Internal("user store lock poisoned".into()))
    }

    fn write_users(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| Error::Internal("user store lock poisoned".into()))
    }

    fn read_transactions(&self) -> Result<RwLockReadGuard<'_, Vec<OwnedTransaction>>> {
        self.transactions
            .read()
            .map_err(|_| Error::Internal("transaction store lock poisoned".into()))
    }

    fn write_transactions(&self) -> Result<RwLockWriteGuard<'_, Vec<OwnedTransaction>>> {
        self.transactions
            .write()
            .map_err(|_| Error::Internal("transaction store lock poisoned".into()))
    }
}

impl TransactionStore for MemoryStore {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .read_transactions()?
            .iter()
            .filter(|t| t.user_id == user_id)
            .map(|t| t.transaction.clone())
            .collect();

        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    fn insert_transaction(&self, user_id: &str, tx: NewTransaction) -> Result<Transaction> {
        tx.validate()?;

        let id = format!("trans-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let transaction = tx.into_transaction(id);

        self.write_transactions()?.push(OwnedTransaction {
            user_id: user_id.to_string(),
            transaction: transaction.clone(),
        });

        debug!(user = user_id, id = %transaction.id, "Stored transaction");
        Ok(transaction)
    }

    fn delete_transaction(&self, user_id: &str, id: &str) -> Result<bool> {
        let mut transactions = self.write_transactions()?;
        let position = transactions
            .iter()
            .position(|t| t.user_id == user_id && t.transaction.id == id);

        match position {
            Some(index) => {
                transactions.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl UserStore for MemoryStore {
    fn find_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self.read_users()?.iter().find(|u| u.id == id).cloned())
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.read_users()?.iter().find(|u| u.email == email).cloned())
    }

    fn insert_user(&self, user: User) -> Result<()> {
        let mut users = self.write_users()?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(Error::Conflict("User already exists".into()));
        }
        if users.iter().any(|u| u.id == user.id) {
            return Err(Error::Conflict(format!("User id {} already exists", user.id)));
        }
        users.push(user);
        Ok(())
    }
}
