//! The fixed category vocabularies for income and expenses.

use crate::transaction::TransactionType;

/// The categories an income transaction may use.
pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Gifts",
    "Other Income",
];

/// The categories an expense transaction may use.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Utilities",
    "Entertainment",
    "Health",
    "Shopping",
    "Education",
    "Other",
];

/// The category used when a suggested expense category is not in the vocabulary.
pub const FALLBACK_CATEGORY: &str = "Other";

/// The vocabulary for `transaction_type`.
pub fn vocabulary(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    }
}

/// The category preselected for a new transaction of `transaction_type`.
pub fn default_category(transaction_type: TransactionType) -> &'static str {
    vocabulary(transaction_type)[0]
}

/// Whether `category` belongs to the vocabulary of `transaction_type`.
pub fn is_valid_category(transaction_type: TransactionType, category: &str) -> bool {
    vocabulary(transaction_type).contains(&category)
}

/// The catch-all entry of `categories`, used in place of a suggestion that is not in the list.
///
/// This is [FALLBACK_CATEGORY] if the list contains it, otherwise the last entry of the
/// list. Both vocabularies end with their catch-all, e.g. "Other Income" for income.
/// An empty list gives [FALLBACK_CATEGORY].
pub fn fallback_category<'a>(categories: &[&'a str]) -> &'a str {
    if categories.contains(&FALLBACK_CATEGORY) {
        FALLBACK_CATEGORY
    } else {
        categories.last().copied().unwrap_or(FALLBACK_CATEGORY)
    }
}
