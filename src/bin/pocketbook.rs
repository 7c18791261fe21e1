use std::{process::ExitCode, time::Duration};

use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pocketbook::{
    ChatClient, DEFAULT_TIMEOUT, Error, SQLiteStorage, SuggestionClient, TRANSACTIONS_KEY,
    Transaction, TransactionForm, TransactionId, TransactionStore, TransactionType,
    build_http_client, category_breakdown, format_currency, summarize, vocabulary,
};

/// Track income and expenses, and ask the AI assistant about them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database holding the transactions.
    #[arg(long, default_value = "pocketbook.db")]
    db_path: String,

    /// The base URL of the assistant server.
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server_url: String,

    /// How many seconds to wait for the assistant server.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all transactions, newest first.
    List,
    /// Record a new transaction.
    Add(AddArgs),
    /// Edit an existing transaction.
    Edit(EditArgs),
    /// Delete a transaction.
    Delete {
        /// The ID of the transaction to delete.
        id: String,
    },
    /// Show the balance, totals and expenses per category.
    Summary,
    /// List the categories for income and expenses.
    Categories,
    /// Ask the assistant which category fits a description.
    Suggest {
        /// What the transaction was for.
        description: String,

        /// Suggest from the income or expense categories.
        #[arg(long = "type", default_value = "expense")]
        transaction_type: TransactionType,
    },
    /// Ask the assistant a question about your transactions.
    Ask {
        /// The question to ask.
        question: String,
    },
}

#[derive(ClapArgs, Debug)]
struct AddArgs {
    /// Whether the transaction is "income" or "expense".
    #[arg(long = "type", default_value = "expense")]
    transaction_type: TransactionType,

    #[command(flatten)]
    fields: FieldArgs,
}

#[derive(ClapArgs, Debug)]
struct EditArgs {
    /// The ID of the transaction to edit.
    id: String,

    /// Change the type to "income" or "expense".
    #[arg(long = "type")]
    transaction_type: Option<TransactionType>,

    #[command(flatten)]
    fields: FieldArgs,
}

#[derive(ClapArgs, Debug)]
struct FieldArgs {
    /// The amount of money, e.g. 12.50.
    #[arg(long)]
    amount: Option<String>,

    /// The category, defaults to the first category for the type.
    #[arg(long)]
    category: Option<String>,

    /// What the transaction was for.
    #[arg(long)]
    description: Option<String>,

    /// When the transaction happened, as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Ask the assistant for the category instead of giving one.
    #[arg(long, conflicts_with = "category")]
    suggest_category: bool,
}

impl FieldArgs {
    fn apply_to(self, form: &mut TransactionForm) {
        if let Some(amount) = self.amount {
            form.amount = amount;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(date) = self.date {
            form.date = date;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: Args) -> Result<(), Error> {
    let storage = SQLiteStorage::open(&args.db_path, TRANSACTIONS_KEY)?;
    let mut store = TransactionStore::load(storage)?;

    let http = build_http_client(Duration::from_secs(args.timeout_secs))?;
    let suggestion_client = SuggestionClient::new(http.clone(), &args.server_url);
    let chat_client = ChatClient::new(http, &args.server_url);

    match args.command {
        Command::List => print_transactions(store.list()),
        Command::Add(add_args) => {
            let mut form = TransactionForm::new(add_args.transaction_type);
            let suggest = add_args.fields.suggest_category;
            add_args.fields.apply_to(&mut form);

            if suggest {
                suggest_into(&suggestion_client, &mut form).await?;
            }

            let transaction = store.add(form.validate()?)?;
            println!("Added transaction {}", transaction.id);
        }
        Command::Edit(edit_args) => {
            let id = TransactionId::from(edit_args.id);
            let mut form = TransactionForm::from_transaction(store.get(&id)?);

            if let Some(transaction_type) = edit_args.transaction_type {
                form.set_type(transaction_type);
            }

            let suggest = edit_args.fields.suggest_category;
            edit_args.fields.apply_to(&mut form);

            if suggest {
                suggest_into(&suggestion_client, &mut form).await?;
            }

            store.update(form.validate()?.finalize(id.clone()))?;
            println!("Updated transaction {id}");
        }
        Command::Delete { id } => {
            let removed = store.remove(&TransactionId::from(id))?;
            println!("Deleted transaction {} ({})", removed.id, removed.description);
        }
        Command::Summary => print_summary(store.list()),
        Command::Categories => {
            println!("Income: {}", vocabulary(TransactionType::Income).join(", "));
            println!("Expense: {}", vocabulary(TransactionType::Expense).join(", "));
        }
        Command::Suggest {
            description,
            transaction_type,
        } => {
            let category = suggestion_client
                .suggest(&description, vocabulary(transaction_type))
                .await?;
            println!("{category}");
        }
        Command::Ask { question } => {
            let answer = chat_client.ask(&question, store.list()).await?;
            println!("{answer}");
        }
    }

    Ok(())
}

/// Fill in the category of `form` with the assistant's suggestion for its description.
async fn suggest_into(client: &SuggestionClient, form: &mut TransactionForm) -> Result<(), Error> {
    let category = client
        .suggest(&form.description, vocabulary(form.transaction_type))
        .await?;

    println!("Suggested category: {category}");
    form.category = category;

    Ok(())
}

fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions yet.");
        return;
    }

    for transaction in transactions {
        let amount = match transaction.transaction_type {
            TransactionType::Income => format!("+{}", format_currency(transaction.amount)),
            TransactionType::Expense => format_currency(-transaction.amount),
        };

        println!(
            "{}  {}  {:>14}  {:<14}  {}",
            transaction.id,
            transaction.date.date(),
            amount,
            transaction.category,
            transaction.description
        );
    }
}

fn print_summary(transactions: &[Transaction]) {
    let summary = summarize(transactions);

    println!("Balance:  {}", format_currency(summary.balance()));
    println!("Income:   {}", format_currency(summary.income));
    println!("Expenses: {}", format_currency(summary.expense));
    println!();

    let mut breakdown: Vec<_> = category_breakdown(transactions).into_iter().collect();

    if breakdown.is_empty() {
        println!("No expense data to show.");
        return;
    }

    breakdown.sort_by(|(a_name, a_total), (b_name, b_total)| {
        b_total.total_cmp(a_total).then_with(|| a_name.cmp(b_name))
    });

    println!("Expenses by category:");
    for (category, total) in breakdown {
        let share = summary.expense_share(total);
        println!("  {category:<14} {:>14}  {share:>5.1}%", format_currency(total));
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use pocketbook::{DEFAULT_TIMEOUT, TransactionType};

    use super::{Args, Command};

    #[test]
    fn timeout_defaults_to_client_default() {
        let args = Args::try_parse_from(["pocketbook", "list"]).unwrap();

        assert_eq!(args.timeout_secs, DEFAULT_TIMEOUT.as_secs());
        assert_eq!(args.db_path, "pocketbook.db");
    }

    #[test]
    fn add_parses_type_and_fields() {
        let args = Args::try_parse_from([
            "pocketbook",
            "add",
            "--type",
            "income",
            "--amount",
            "1000",
            "--description",
            "Paycheck",
        ])
        .unwrap();

        let Command::Add(add_args) = args.command else {
            panic!("expected the add command");
        };
        assert_eq!(add_args.transaction_type, TransactionType::Income);
        assert_eq!(add_args.fields.amount.as_deref(), Some("1000"));
        assert_eq!(add_args.fields.category, None);
    }

    #[test]
    fn suggest_category_conflicts_with_category() {
        let result = Args::try_parse_from([
            "pocketbook",
            "add",
            "--category",
            "Food",
            "--suggest-category",
        ]);

        assert!(result.is_err());
    }
}
