//! Telegram bot.
//!
//! The bot drives a button-based entry dialogue per chat and calls straight
//! into the [`engine::Ledger`]; it owns no persistent state of its own.

use std::sync::Arc;

use engine::Ledger;
use teloxide::prelude::*;

mod categories;
mod handlers;
mod state;
mod ui;

#[derive(Clone)]
pub struct ConfigParameters {
    ledger: Arc<Ledger>,
    sessions: state::SessionStore,
}

pub struct Bot {
    token: String,
    ledger: Arc<Ledger>,
}

impl Bot {
    pub fn builder() -> BotBuilder {
        BotBuilder::default()
    }

    pub async fn run(&self) {
        tracing::info!("Starting telegram bot...");

        let bot = teloxide::Bot::new(&self.token);
        let parameters = ConfigParameters {
            ledger: self.ledger.clone(),
            sessions: state::SessionStore::default(),
        };

        let handler = dptree::entry()
            .branch(Update::filter_message().endpoint(handlers::handle_message))
            .branch(Update::filter_callback_query().endpoint(handlers::handle_callback));

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![parameters])
            .default_handler(|upd| async move {
                tracing::warn!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

#[derive(Default)]
pub struct BotBuilder {
    token: String,
    ledger: Option<Arc<Ledger>>,
}

impl BotBuilder {
    pub fn token(mut self, token: &str) -> BotBuilder {
        self.token = token.to_string();
        self
    }

    pub fn ledger(mut self, ledger: Arc<Ledger>) -> BotBuilder {
        self.ledger = Some(ledger);
        self
    }

    pub fn build(self) -> Result<Bot, String> {
        tracing::info!("Initializing telegram bot...");
        if self.token.is_empty() {
            return Err("missing telegram bot token".to_string());
        }
        let ledger = self.ledger.ok_or_else(|| "missing ledger".to_string())?;

        Ok(Bot {
            token: self.token,
            ledger,
        })
    }
}
