//! Aggregate totals over a user's entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Cents, Entry, EntryKind};

/// Income/expense totals; the balance is derived, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub income_total: Cents,
    pub expense_total: Cents,
}

impl Report {
    /// Folds entries into per-kind totals.
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut report = Report::default();
        for entry in entries {
            match entry.kind {
                EntryKind::Income => report.income_total += entry.amount,
                EntryKind::Expense => report.expense_total += entry.amount,
            }
        }
        report
    }

    #[must_use]
    pub fn balance(&self) -> Cents {
        self.income_total - self.expense_total
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Income: {}\nExpenses: {}\nBalance: {}",
            self.income_total,
            self.expense_total,
            self.balance()
        )
    }
}
