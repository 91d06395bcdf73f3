//! Per-chat dialogue state.
//!
//! Each chat walks a strictly linear dialogue: pick income or expense, type
//! an amount, pick a category. The pending amount travels inside the stage
//! value, so there is no second bookkeeping map that could fall out of
//! sync.

use std::{collections::HashMap, sync::Arc};

use engine::{Cents, EntryKind};
use teloxide::types::ChatId;
use tokio::sync::Mutex;

/// Position of a chat inside the entry dialogue.
///
/// A chat with no stage entry is idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stage {
    /// The user picked income/expense and owes us an amount.
    AwaitingAmount(EntryKind),
    /// The amount is in; waiting for a category button.
    AwaitingCategory { kind: EntryKind, amount: Cents },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AmountError {
    /// Not a parseable decimal.
    Malformed,
    /// Parsed, but zero or negative.
    NotPositive,
}

impl Stage {
    /// Builds the next stage from an amount message.
    ///
    /// On error the caller keeps the current stage and re-prompts.
    pub(crate) fn from_amount_input(kind: EntryKind, text: &str) -> Result<Stage, AmountError> {
        let amount: Cents = text.parse().map_err(|_| AmountError::Malformed)?;
        if !amount.is_positive() {
            return Err(AmountError::NotPositive);
        }
        Ok(Stage::AwaitingCategory { kind, amount })
    }
}

/// Shared map of per-chat stages.
///
/// The mutex is held only for map access, never across an await on Telegram
/// or the database, so busy chats do not stall each other.
#[derive(Clone, Default)]
pub(crate) struct SessionStore {
    inner: Arc<Mutex<HashMap<ChatId, Stage>>>,
}

impl SessionStore {
    pub(crate) async fn get(&self, chat_id: ChatId) -> Option<Stage> {
        self.inner.lock().await.get(&chat_id).copied()
    }

    pub(crate) async fn set(&self, chat_id: ChatId, stage: Stage) {
        self.inner.lock().await.insert(chat_id, stage);
    }

    /// Returns the chat to the idle stage.
    pub(crate) async fn clear(&self, chat_id: ChatId) {
        self.inner.lock().await.remove(&chat_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_amount_advances_and_carries_the_value() {
        let stage = Stage::from_amount_input(EntryKind::Income, "100").unwrap();
        assert_eq!(
            stage,
            Stage::AwaitingCategory {
                kind: EntryKind::Income,
                amount: Cents::new(10_000),
            }
        );

        let stage = Stage::from_amount_input(EntryKind::Expense, "40,50").unwrap();
        assert_eq!(
            stage,
            Stage::AwaitingCategory {
                kind: EntryKind::Expense,
                amount: Cents::new(4_050),
            }
        );
    }

    #[test]
    fn malformed_amount_is_rejected() {
        assert_eq!(
            Stage::from_amount_input(EntryKind::Income, "ten"),
            Err(AmountError::Malformed)
        );
        assert_eq!(
            Stage::from_amount_input(EntryKind::Expense, "1.2.3"),
            Err(AmountError::Malformed)
        );
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        assert_eq!(
            Stage::from_amount_input(EntryKind::Income, "0"),
            Err(AmountError::NotPositive)
        );
        assert_eq!(
            Stage::from_amount_input(EntryKind::Income, "-5"),
            Err(AmountError::NotPositive)
        );
    }

    #[tokio::test]
    async fn store_tracks_stages_per_chat() {
        let store = SessionStore::default();
        let first = ChatId(1);
        let second = ChatId(2);

        assert_eq!(store.get(first).await, None);

        store.set(first, Stage::AwaitingAmount(EntryKind::Income)).await;
        store
            .set(second, Stage::AwaitingAmount(EntryKind::Expense))
            .await;

        assert_eq!(
            store.get(first).await,
            Some(Stage::AwaitingAmount(EntryKind::Income))
        );
        assert_eq!(
            store.get(second).await,
            Some(Stage::AwaitingAmount(EntryKind::Expense))
        );
    }

    #[tokio::test]
    async fn clear_resets_any_stage() {
        let store = SessionStore::default();
        let chat = ChatId(9);

        store
            .set(
                chat,
                Stage::AwaitingCategory {
                    kind: EntryKind::Expense,
                    amount: Cents::new(100),
                },
            )
            .await;
        store.clear(chat).await;
        assert_eq!(store.get(chat).await, None);

        // Clearing an idle chat is fine too.
        store.clear(chat).await;
        assert_eq!(store.get(chat).await, None);
    }
}
