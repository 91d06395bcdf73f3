//! Users table.
//!
//! One row per Telegram chat; the chat id is the external identity, the
//! uuid is what entries reference.

use sea_orm::{ActiveValue, DbErr, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::LedgerError;

/// A registered user, keyed by the chat the bot was started from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub chat_id: i64,
}

impl User {
    pub fn new(chat_id: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            chat_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub chat_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entries::Entity")]
    Entries,
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        Self {
            id: ActiveValue::Set(user.id.to_string()),
            chat_id: ActiveValue::Set(user.chat_id),
        }
    }
}

impl TryFrom<Model> for User {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| DbErr::Type(format!("malformed user id: {}", model.id)))?,
            chat_id: model.chat_id,
        })
    }
}
