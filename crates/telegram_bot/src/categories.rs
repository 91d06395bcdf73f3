//! Static category catalog.
//!
//! Labels are what the user sees on the buttons; tokens travel as callback
//! data and are what gets stored with each entry.

use engine::EntryKind;

pub(crate) struct Category {
    pub label: &'static str,
    pub token: &'static str,
}

const INCOME: &[Category] = &[
    Category { label: "Salary 💸", token: "salary" },
    Category { label: "Debtor 🫴", token: "debit" },
    Category { label: "Bonus 💰", token: "prize" },
    Category { label: "Side job 🤑", token: "addinc" },
    Category { label: "Invest 💹", token: "invest" },
    Category { label: "Deposit 🏦", token: "deposit" },
];

const EXPENSE: &[Category] = &[
    Category { label: "Pharmacy 🏥", token: "phar" },
    Category { label: "Flights 🛫", token: "avia" },
    Category { label: "Accessories 🕶️", token: "access" },
    Category { label: "Lab tests 💉", token: "analys" },
    Category { label: "Rent 🔑", token: "rent" },
    Category { label: "Household 🧹", token: "household" },
    Category { label: "Vitamins 💊", token: "vitamin" },
    Category { label: "Public services 🏢", token: "state" },
    Category { label: "Home & repair 🛠️", token: "repair" },
    Category { label: "Train tickets 🚂", token: "rail" },
    Category { label: "Pets 🐾", token: "animal" },
    Category { label: "Utilities 👾", token: "service" },
    Category { label: "Investments 💹", token: "invest" },
    Category { label: "Internet 🌐", token: "network" },
    Category { label: "Stationery 📝", token: "office" },
    Category { label: "Car sharing 🏎️", token: "carsh" },
    Category { label: "Books 📚", token: "book" },
    Category { label: "Beauty 😻", token: "beauty" },
    Category { label: "Loans 💸", token: "loan" },
    Category { label: "Medicine 🩺", token: "medic" },
    Category { label: "Mobile 📞", token: "mobile" },
    Category { label: "Cash 🗞️", token: "cash" },
    Category { label: "Education 🎓", token: "educ" },
    Category { label: "Clothes & shoes 👟", token: "clothes" },
    Category { label: "Transfers 📤", token: "trans" },
    Category { label: "Gifts 🎁", token: "gift" },
    Category { label: "Subscriptions 🤳", token: "subscript" },
    Category { label: "Fun 🎢", token: "fun" },
    Category { label: "Food 🍜", token: "eat" },
    Category { label: "Groceries 🛒", token: "mall" },
    Category { label: "Taxi 🚕", token: "taxi" },
    Category { label: "Fuel ⛽️", token: "oil" },
    Category { label: "Transport 🚌", token: "transport" },
    Category { label: "Flowers 💐", token: "flowers" },
    Category { label: "Sport 💪", token: "sport" },
    Category { label: "Other 🙉", token: "other" },
];

pub(crate) fn all(kind: EntryKind) -> &'static [Category] {
    match kind {
        EntryKind::Income => INCOME,
        EntryKind::Expense => EXPENSE,
    }
}

/// Resolves a callback token against the catalog of the given kind.
pub(crate) fn find(kind: EntryKind, token: &str) -> Option<&'static Category> {
    all(kind).iter().find(|category| category.token == token)
}
