//! Finance ledger.
//!
//! `Ledger` is the domain layer behind the bot: it registers users, appends
//! income/expense entries and computes report totals. All persistence goes
//! through the `Store` gateway; the ledger keeps no state besides the
//! database handle, so it can be shared behind an `Arc` and called from
//! concurrent handler invocations.

pub use entries::{Entry, EntryKind};
pub use error::LedgerError;
pub use money::Cents;
pub use report::Report;
pub use users::User;

use sea_orm::DatabaseConnection;
use store::Store;

mod entries;
mod error;
mod money;
mod report;
mod store;
mod users;

type ResultLedger<T> = Result<T, LedgerError>;

/// Domain operations over registered users and their entries.
pub struct Ledger {
    store: Store,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    /// Registers the user behind `chat_id`.
    ///
    /// A chat that is already registered is left untouched.
    pub async fn register_user(&self, chat_id: i64) -> ResultLedger<()> {
        if self.store.user_by_chat(chat_id).await?.is_some() {
            return Ok(());
        }
        self.store.insert_user(&User::new(chat_id)).await
    }

    /// Appends an income entry for the chat's user.
    pub async fn add_income(&self, chat_id: i64, amount: Cents, category: &str) -> ResultLedger<()> {
        self.add_entry(chat_id, EntryKind::Income, amount, category)
            .await
    }

    /// Appends an expense entry for the chat's user.
    pub async fn add_expense(
        &self,
        chat_id: i64,
        amount: Cents,
        category: &str,
    ) -> ResultLedger<()> {
        self.add_entry(chat_id, EntryKind::Expense, amount, category)
            .await
    }

    async fn add_entry(
        &self,
        chat_id: i64,
        kind: EntryKind,
        amount: Cents,
        category: &str,
    ) -> ResultLedger<()> {
        let user = self.resolve_user(chat_id).await?;
        let entry = Entry::new(user.id, kind, amount, category)?;
        self.store.insert_entry(&entry).await
    }

    /// Deletes every entry of the chat's user.
    ///
    /// Returns the number of rows removed; clearing an empty ledger is a
    /// no-op.
    pub async fn clear_data(&self, chat_id: i64) -> ResultLedger<u64> {
        let user = self.resolve_user(chat_id).await?;
        self.store.delete_entries(user.id).await
    }

    /// Sums the chat's entries into income/expense totals.
    pub async fn report(&self, chat_id: i64) -> ResultLedger<Report> {
        let user = self.resolve_user(chat_id).await?;
        let entries = self.store.entries_for(user.id).await?;
        Ok(Report::from_entries(&entries))
    }

    async fn resolve_user(&self, chat_id: i64) -> ResultLedger<User> {
        self.store
            .user_by_chat(chat_id)
            .await?
            .ok_or(LedgerError::UnregisteredUser(chat_id))
    }
}

/// The builder for `Ledger`
#[derive(Default)]
pub struct LedgerBuilder {
    database: DatabaseConnection,
}

impl LedgerBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> LedgerBuilder {
        self.database = db;
        self
    }

    /// Construct `Ledger`
    pub fn build(self) -> Ledger {
        Ledger {
            store: Store::new(self.database),
        }
    }
}
