use engine::{EntryKind, LedgerError};
use teloxide::{
    prelude::*,
    types::{CallbackQuery, ChatId, InlineKeyboardMarkup},
};

use crate::{
    ConfigParameters, categories,
    state::{AmountError, Stage},
    ui,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Start,
    Menu,
    Options,
    Cancel,
}

pub(crate) async fn handle_message(
    bot: Bot,
    msg: Message,
    cfg: ConfigParameters,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if let Some(cmd) = parse_command(text) {
        return handle_command(&bot, chat_id, &cfg, cmd).await;
    }

    match cfg.sessions.get(chat_id).await {
        Some(Stage::AwaitingAmount(kind)) => match Stage::from_amount_input(kind, text) {
            Ok(stage) => {
                cfg.sessions.set(chat_id, stage).await;
                send_menu(&bot, chat_id, ui::render_category_menu(kind)).await?;
            }
            Err(AmountError::Malformed | AmountError::NotPositive) => {
                bot.send_message(chat_id, "Send a positive amount, e.g. 10 or 10.50.")
                    .await?;
            }
        },
        // Categories are picked with the buttons; free text is not an event
        // in any other stage.
        Some(Stage::AwaitingCategory { .. }) | None => {}
    }

    Ok(())
}

pub(crate) async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    cfg: ConfigParameters,
) -> ResponseResult<()> {
    // Ack first so the client stops showing the spinner.
    let _ = bot.answer_callback_query(q.id.clone()).await;

    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };
    let chat_id = message.chat().id;

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };

    match data {
        "income" => start_entry(&bot, chat_id, &cfg, EntryKind::Income).await?,
        "expense" => start_entry(&bot, chat_id, &cfg, EntryKind::Expense).await?,
        "report" => send_report(&bot, chat_id, &cfg).await?,
        "clear" => clear_data(&bot, chat_id, &cfg).await?,
        token => finish_entry(&bot, chat_id, &cfg, token).await?,
    }

    Ok(())
}

async fn handle_command(
    bot: &Bot,
    chat_id: ChatId,
    cfg: &ConfigParameters,
    cmd: Command,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            if let Err(err) = cfg.ledger.register_user(chat_id.0).await {
                tracing::error!("registration failed for chat {chat_id}: {err}");
                bot.send_message(chat_id, "Registration failed, please try again later.")
                    .await?;
                return Ok(());
            }
            send_menu(bot, chat_id, ui::render_main_menu()).await?;
        }
        Command::Menu => send_menu(bot, chat_id, ui::render_main_menu()).await?,
        Command::Options => send_menu(bot, chat_id, ui::render_options_menu()).await?,
        Command::Cancel => {
            cfg.sessions.clear(chat_id).await;
            bot.send_message(chat_id, "Action cancelled, back to the main menu.")
                .await?;
            send_menu(bot, chat_id, ui::render_main_menu()).await?;
        }
    }

    Ok(())
}

async fn start_entry(
    bot: &Bot,
    chat_id: ChatId,
    cfg: &ConfigParameters,
    kind: EntryKind,
) -> ResponseResult<()> {
    cfg.sessions.set(chat_id, Stage::AwaitingAmount(kind)).await;
    bot.send_message(chat_id, ui::amount_prompt(kind)).await?;
    Ok(())
}

async fn finish_entry(
    bot: &Bot,
    chat_id: ChatId,
    cfg: &ConfigParameters,
    token: &str,
) -> ResponseResult<()> {
    let Some(Stage::AwaitingCategory { kind, amount }) = cfg.sessions.get(chat_id).await else {
        tracing::debug!("ignoring button {token:?} outside a dialogue");
        return Ok(());
    };
    let Some(category) = categories::find(kind, token) else {
        tracing::debug!("unknown category token {token:?}");
        return Ok(());
    };

    let saved = match kind {
        EntryKind::Income => cfg.ledger.add_income(chat_id.0, amount, category.token).await,
        EntryKind::Expense => {
            cfg.ledger
                .add_expense(chat_id.0, amount, category.token)
                .await
        }
    };

    // Completion and failure both end the dialogue.
    cfg.sessions.clear(chat_id).await;

    match saved {
        Ok(()) => {
            let confirmation = match kind {
                EntryKind::Income => "Income recorded.",
                EntryKind::Expense => "Expense recorded.",
            };
            bot.send_message(chat_id, confirmation).await?;
        }
        Err(err) => {
            tracing::error!("failed to record entry for chat {chat_id}: {err}");
            bot.send_message(chat_id, user_message_for(&err)).await?;
        }
    }
    send_menu(bot, chat_id, ui::render_main_menu()).await?;

    Ok(())
}

async fn send_report(bot: &Bot, chat_id: ChatId, cfg: &ConfigParameters) -> ResponseResult<()> {
    match cfg.ledger.report(chat_id.0).await {
        Ok(report) => {
            bot.send_message(chat_id, report.to_string()).await?;
        }
        Err(err) => {
            tracing::error!("report failed for chat {chat_id}: {err}");
            bot.send_message(chat_id, user_message_for(&err)).await?;
        }
    }

    Ok(())
}

async fn clear_data(bot: &Bot, chat_id: ChatId, cfg: &ConfigParameters) -> ResponseResult<()> {
    match cfg.ledger.clear_data(chat_id.0).await {
        Ok(removed) => {
            tracing::info!("cleared {removed} entries for chat {chat_id}");
            bot.send_message(chat_id, "All data cleared.").await?;
        }
        Err(err) => {
            tracing::error!("clear failed for chat {chat_id}: {err}");
            bot.send_message(chat_id, user_message_for(&err)).await?;
        }
    }

    Ok(())
}

async fn send_menu(
    bot: &Bot,
    chat_id: ChatId,
    (text, kb): (String, InlineKeyboardMarkup),
) -> ResponseResult<()> {
    bot.send_message(chat_id, text).reply_markup(kb).await?;
    Ok(())
}

fn user_message_for(err: &LedgerError) -> &'static str {
    match err {
        LedgerError::UnregisteredUser(_) => "You are not registered yet, send /start first.",
        _ => "Something went wrong, please try again later.",
    }
}

fn parse_command(text: &str) -> Option<Command> {
    let trimmed = text.trim();
    if !trimmed.starts_with('/') {
        return None;
    }
    // In group chats commands arrive as `/start@botname`.
    let cmd = trimmed.split_whitespace().next().unwrap_or(trimmed);
    let cmd = cmd.split('@').next().unwrap_or(cmd);

    match cmd {
        "/start" => Some(Command::Start),
        "/menu" => Some(Command::Menu),
        "/options" => Some(Command::Options),
        "/cancel" => Some(Command::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_with_and_without_mention() {
        assert_eq!(parse_command("/start"), Some(Command::Start));
        assert_eq!(parse_command("/start@finance_bot"), Some(Command::Start));
        assert_eq!(parse_command(" /cancel "), Some(Command::Cancel));
        assert_eq!(parse_command("/menu extra words"), Some(Command::Menu));
        assert_eq!(parse_command("/options"), Some(Command::Options));
    }

    #[test]
    fn non_commands_are_ignored() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command("10.50"), None);
        assert_eq!(parse_command("/report"), None);
    }
}
