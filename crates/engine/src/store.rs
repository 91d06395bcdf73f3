//! Persistence gateway.
//!
//! Thin, single-statement reads and writes against the `users` and
//! `transactions` tables. Database errors propagate to the ledger
//! unchanged.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{Entry, ResultLedger, User, entries, users};

pub(crate) struct Store {
    database: DatabaseConnection,
}

impl Store {
    pub(crate) fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    /// Looks up the user registered for a chat, if any.
    pub(crate) async fn user_by_chat(&self, chat_id: i64) -> ResultLedger<Option<User>> {
        users::Entity::find()
            .filter(users::Column::ChatId.eq(chat_id))
            .one(&self.database)
            .await?
            .map(User::try_from)
            .transpose()
    }

    pub(crate) async fn insert_user(&self, user: &User) -> ResultLedger<()> {
        users::ActiveModel::from(user).insert(&self.database).await?;
        Ok(())
    }

    pub(crate) async fn insert_entry(&self, entry: &Entry) -> ResultLedger<()> {
        entries::ActiveModel::from(entry)
            .insert(&self.database)
            .await?;
        Ok(())
    }

    /// Removes every entry of a user; returns how many rows went away.
    pub(crate) async fn delete_entries(&self, user_id: Uuid) -> ResultLedger<u64> {
        let result = entries::Entity::delete_many()
            .filter(entries::Column::UserId.eq(user_id.to_string()))
            .exec(&self.database)
            .await?;
        Ok(result.rows_affected)
    }

    pub(crate) async fn entries_for(&self, user_id: Uuid) -> ResultLedger<Vec<Entry>> {
        entries::Entity::find()
            .filter(entries::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entries::Column::CreatedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Entry::try_from)
            .collect()
    }
}
