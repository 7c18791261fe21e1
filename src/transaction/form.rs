//! Validation of raw user input for creating and editing transactions.

use time::{Date, OffsetDateTime, macros::format_description};

use crate::{
    category::{default_category, is_valid_category},
    transaction::core::{Transaction, TransactionBuilder, TransactionType},
};

/// Problems with the user input for a transaction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("the field \"{0}\" is required")]
    MissingField(&'static str),

    /// The amount is not a number greater than zero.
    #[error("\"{0}\" is not a valid amount, enter a number greater than zero")]
    InvalidAmount(String),

    /// The category is not in the vocabulary for the transaction type.
    #[error("\"{category}\" is not a valid {transaction_type} category")]
    InvalidCategory {
        /// The rejected category.
        category: String,
        /// The type whose vocabulary was checked.
        transaction_type: TransactionType,
    },

    /// The date is not in the format YYYY-MM-DD.
    #[error("\"{0}\" is not a valid date, use the format YYYY-MM-DD")]
    InvalidDate(String),
}

/// The raw, unvalidated input for a transaction.
///
/// Every field except the type is a string exactly as the user typed it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    /// Whether the transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// The amount as typed, e.g. "12.50".
    pub amount: String,
    /// The chosen category.
    pub category: String,
    /// What the transaction was for.
    pub description: String,
    /// The calendar date as typed, e.g. "2025-01-31".
    pub date: String,
}

impl TransactionForm {
    /// An empty form for a new transaction dated today, with the default category for
    /// `transaction_type` preselected.
    pub fn new(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            amount: String::new(),
            category: default_category(transaction_type).to_owned(),
            description: String::new(),
            date: OffsetDateTime::now_utc().date().to_string(),
        }
    }

    /// A form pre-filled with the values of an existing transaction.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            transaction_type: transaction.transaction_type,
            amount: transaction.amount.to_string(),
            category: transaction.category.clone(),
            description: transaction.description.clone(),
            date: transaction.date.date().to_string(),
        }
    }

    /// Switch the transaction type.
    ///
    /// The category is reset to the default for the new type because the
    /// income and expense vocabularies do not overlap.
    pub fn set_type(&mut self, transaction_type: TransactionType) {
        if self.transaction_type != transaction_type {
            self.transaction_type = transaction_type;
            self.category = default_category(transaction_type).to_owned();
        }
    }

    /// Check the form and turn it into a [TransactionBuilder].
    ///
    /// # Errors
    /// Returns a:
    /// - [ValidationError::MissingField] for the first empty field,
    /// - [ValidationError::InvalidAmount] if the amount is not a finite number greater than zero,
    /// - [ValidationError::InvalidCategory] if the category does not belong to the type,
    /// - or [ValidationError::InvalidDate] if the date is not in the format YYYY-MM-DD.
    pub fn validate(&self) -> Result<TransactionBuilder, ValidationError> {
        let amount = required("amount", &self.amount)?;
        let category = required("category", &self.category)?;
        let description = required("description", &self.description)?;
        let date = required("date", &self.date)?;

        let amount = match amount.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => amount,
            _ => return Err(ValidationError::InvalidAmount(amount.to_owned())),
        };

        if !is_valid_category(self.transaction_type, category) {
            return Err(ValidationError::InvalidCategory {
                category: category.to_owned(),
                transaction_type: self.transaction_type,
            });
        }

        let date = parse_date(date)?;

        Ok(
            Transaction::build(self.transaction_type, amount, description)
                .category(category)
                .date(date),
        )
    }
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        Err(ValidationError::MissingField(name))
    } else {
        Ok(value)
    }
}

/// Parse a calendar date and normalize it to midnight UTC.
fn parse_date(text: &str) -> Result<OffsetDateTime, ValidationError> {
    let format = format_description!("[year]-[month]-[day]");

    Date::parse(text, format)
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| ValidationError::InvalidDate(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::transaction::{
        Transaction, TransactionForm, TransactionId, TransactionType, ValidationError,
    };

    fn filled_form() -> TransactionForm {
        TransactionForm {
            transaction_type: TransactionType::Expense,
            amount: "12.50".to_owned(),
            category: "Food".to_owned(),
            description: "Lunch".to_owned(),
            date: "2025-03-14".to_owned(),
        }
    }

    #[test]
    fn valid_form_produces_builder() {
        let builder = filled_form().validate().unwrap();

        assert_eq!(builder.transaction_type, TransactionType::Expense);
        assert_eq!(builder.amount, 12.5);
        assert_eq!(builder.category, "Food");
        assert_eq!(builder.description, "Lunch");
        assert_eq!(builder.date, datetime!(2025-03-14 0:00 UTC));
    }

    #[test]
    fn reports_first_missing_field() {
        let mut form = filled_form();
        form.description = "   ".to_owned();
        form.date = String::new();

        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField("description"))
        );
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for amount in ["0", "-5", "abc", "NaN", "inf"] {
            let mut form = filled_form();
            form.amount = amount.to_owned();

            assert_eq!(
                form.validate(),
                Err(ValidationError::InvalidAmount(amount.to_owned())),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_category_of_other_type() {
        let mut form = filled_form();
        form.category = "Salary".to_owned();

        assert_eq!(
            form.validate(),
            Err(ValidationError::InvalidCategory {
                category: "Salary".to_owned(),
                transaction_type: TransactionType::Expense,
            })
        );
    }

    #[test]
    fn rejects_badly_formatted_date() {
        let mut form = filled_form();
        form.date = "14/03/2025".to_owned();

        assert_eq!(
            form.validate(),
            Err(ValidationError::InvalidDate("14/03/2025".to_owned()))
        );
    }

    #[test]
    fn switching_type_resets_category() {
        let mut form = filled_form();

        form.set_type(TransactionType::Income);

        assert_eq!(form.transaction_type, TransactionType::Income);
        assert_eq!(form.category, "Salary");
    }

    #[test]
    fn setting_same_type_keeps_category() {
        let mut form = filled_form();

        form.set_type(TransactionType::Expense);

        assert_eq!(form.category, "Food");
    }

    #[test]
    fn edit_form_round_trips_existing_transaction() {
        let transaction = Transaction::build(TransactionType::Income, 1000.0, "Paycheck")
            .category("Salary")
            .date(datetime!(2025-01-31 0:00 UTC))
            .finalize(TransactionId::from("42"));

        let builder = TransactionForm::from_transaction(&transaction)
            .validate()
            .unwrap();

        assert_eq!(builder.finalize(transaction.id.clone()), transaction);
    }
}
