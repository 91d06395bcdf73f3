//! The module contains the errors the ledger can throw.
//!
//! Database errors are wrapped unchanged so the bot layer can decide how to
//! phrase them; the remaining variants are domain conditions.

use sea_orm::DbErr;
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("no user registered for chat {0}")]
    UnregisteredUser(i64),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid entry kind: {0}")]
    InvalidKind(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}
