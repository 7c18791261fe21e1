//! Defines the transaction store.

use std::collections::HashSet;

use crate::{
    Error,
    stores::Storage,
    transaction::{Transaction, TransactionBuilder, TransactionId},
};

/// Holds the ordered list of transactions and persists it on every change.
///
/// The list is ordered newest-first by creation: [TransactionStore::add] puts the
/// new transaction at the front and [TransactionStore::update] keeps the position.
///
/// Every change serializes the whole list and overwrites the stored record. The
/// in-memory list only changes once the save succeeded, so a failed save leaves
/// the store exactly as it was.
#[derive(Debug)]
pub struct TransactionStore<S> {
    storage: S,
    transactions: Vec<Transaction>,
}

impl<S: Storage> TransactionStore<S> {
    /// Create a store from the list saved in `storage`, or an empty store if nothing has been
    /// saved yet.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::CorruptStorage] if the saved record is not a valid transaction list or two
    ///   transactions in it share an ID,
    /// - or any error from [Storage::load].
    pub fn load(storage: S) -> Result<Self, Error> {
        let transactions: Vec<Transaction> = match storage.load()? {
            Some(json) => serde_json::from_str(&json).map_err(|error| {
                tracing::error!("Could not parse stored transactions: {error}");
                Error::CorruptStorage(error.to_string())
            })?,
            None => Vec::new(),
        };

        let mut seen = HashSet::with_capacity(transactions.len());
        if let Some(duplicate) = transactions
            .iter()
            .find(|transaction| !seen.insert(&transaction.id))
        {
            tracing::error!("Stored transactions contain the ID {} twice", duplicate.id);
            return Err(Error::CorruptStorage(format!(
                "the ID {} is used by more than one transaction",
                duplicate.id
            )));
        }

        Ok(Self {
            storage,
            transactions,
        })
    }

    /// All transactions, newest first.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no transaction has the ID `id`.
    pub fn get(&self, id: &TransactionId) -> Result<&Transaction, Error> {
        self.transactions
            .iter()
            .find(|transaction| &transaction.id == id)
            .ok_or(Error::NotFound)
    }

    /// Create a transaction with a fresh ID, put it at the front of the list and save.
    ///
    /// The store does not check the category against the vocabulary, use
    /// [TransactionForm](crate::TransactionForm) for that.
    ///
    /// # Errors
    /// Returns an error if the list could not be serialized or saved.
    pub fn add(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let transaction = builder.finalize(self.fresh_id());

        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.push(transaction.clone());
        transactions.extend(self.transactions.iter().cloned());

        self.commit(transactions)?;
        tracing::debug!("Added transaction {}", transaction.id);

        Ok(transaction)
    }

    /// Replace the transaction with the same ID as `transaction`, keeping its position, and save.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingTransaction] if no transaction has that ID, the list is unchanged,
    /// - or an error if the list could not be serialized or saved.
    pub fn update(&mut self, transaction: Transaction) -> Result<(), Error> {
        let position = self
            .position(&transaction.id)
            .ok_or(Error::UpdateMissingTransaction)?;

        let mut transactions = self.transactions.clone();
        let id = transaction.id.clone();
        transactions[position] = transaction;

        self.commit(transactions)?;
        tracing::debug!("Updated transaction {id}");

        Ok(())
    }

    /// Delete the transaction with the ID `id` and save.
    ///
    /// Returns the deleted transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingTransaction] if no transaction has that ID,
    /// - or an error if the list could not be serialized or saved.
    pub fn remove(&mut self, id: &TransactionId) -> Result<Transaction, Error> {
        let position = self
            .position(id)
            .ok_or(Error::DeleteMissingTransaction)?;

        let mut transactions = self.transactions.clone();
        let removed = transactions.remove(position);

        self.commit(transactions)?;
        tracing::debug!("Removed transaction {id}");

        Ok(removed)
    }

    /// Give back the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: &TransactionId) -> Option<usize> {
        self.transactions
            .iter()
            .position(|transaction| &transaction.id == id)
    }

    fn fresh_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::new_random();

            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    /// Save `transactions` and only then make it the current list.
    fn commit(&mut self, transactions: Vec<Transaction>) -> Result<(), Error> {
        let json = serde_json::to_string(&transactions)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        self.storage.save(&json)?;
        self.transactions = transactions;

        Ok(())
    }
}
