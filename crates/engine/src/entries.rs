//! Entry primitives.
//!
//! An `Entry` is a single recorded income or expense. Entries are append
//! only: they are never edited, and removed only by the bulk clear
//! operation.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, DbErr, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Cents, LedgerError, ResultLedger};

/// Whether an entry adds to or subtracts from the balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for EntryKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidKind(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Cents,
    pub category: String,
    pub kind: EntryKind,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        user_id: Uuid,
        kind: EntryKind,
        amount: Cents,
        category: impl Into<String>,
    ) -> ResultLedger<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            category: category.into(),
            kind,
            created_at: Utc::now(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub amount: i64,
    pub category: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Entry> for ActiveModel {
    fn from(entry: &Entry) -> Self {
        Self {
            id: ActiveValue::Set(entry.id.to_string()),
            user_id: ActiveValue::Set(entry.user_id.to_string()),
            amount: ActiveValue::Set(entry.amount.minor()),
            category: ActiveValue::Set(entry.category.clone()),
            kind: ActiveValue::Set(entry.kind.as_str().to_string()),
            created_at: ActiveValue::Set(entry.created_at),
        }
    }
}

impl TryFrom<Model> for Entry {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| DbErr::Type(format!("malformed entry id: {}", model.id)))?,
            user_id: Uuid::parse_str(&model.user_id)
                .map_err(|_| DbErr::Type(format!("malformed user id: {}", model.user_id)))?,
            amount: Cents::new(model.amount),
            category: model.category,
            kind: EntryKind::try_from(model.kind.as_str())?,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_non_positive_amounts() {
        let user_id = Uuid::new_v4();
        assert!(Entry::new(user_id, EntryKind::Income, Cents::new(0), "salary").is_err());
        assert!(Entry::new(user_id, EntryKind::Expense, Cents::new(-100), "eat").is_err());
        assert!(Entry::new(user_id, EntryKind::Expense, Cents::new(100), "eat").is_ok());
    }

    #[test]
    fn kind_round_trips_through_strings() {
        assert_eq!(EntryKind::try_from("income").unwrap(), EntryKind::Income);
        assert_eq!(EntryKind::try_from("expense").unwrap(), EntryKind::Expense);
        assert_eq!(EntryKind::Income.as_str(), "income");
        assert!(EntryKind::try_from("transfer").is_err());
    }
}
