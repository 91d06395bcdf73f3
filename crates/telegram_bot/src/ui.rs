//! Message texts and inline keyboards.

use engine::EntryKind;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::categories;

pub(crate) fn render_main_menu() -> (String, InlineKeyboardMarkup) {
    let kb = InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("Income 📈", "income"),
            InlineKeyboardButton::callback("Expense 📉", "expense"),
        ],
        vec![InlineKeyboardButton::callback("Report 📊", "report")],
    ]);

    ("Choose an action:".to_string(), kb)
}

pub(crate) fn render_options_menu() -> (String, InlineKeyboardMarkup) {
    let kb = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "Clear data 🧹",
        "clear",
    )]]);

    ("Choose an action:".to_string(), kb)
}

/// Category buttons for the given kind, two per row.
pub(crate) fn render_category_menu(kind: EntryKind) -> (String, InlineKeyboardMarkup) {
    let rows: Vec<Vec<InlineKeyboardButton>> = categories::all(kind)
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|category| InlineKeyboardButton::callback(category.label, category.token))
                .collect()
        })
        .collect();

    let text = match kind {
        EntryKind::Income => "Choose an income category:",
        EntryKind::Expense => "Choose an expense category:",
    };

    (text.to_string(), InlineKeyboardMarkup::new(rows))
}

pub(crate) fn amount_prompt(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Income => "Enter the income amount:",
        EntryKind::Expense => "Enter the expense amount:",
    }
}
