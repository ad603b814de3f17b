use crate::core::participant::ParticipantName;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A raw debt as supplied by the host program, before validation.
///
/// `Ledger::build` turns entries into [`Debt`] records and rejects
/// non-positive amounts or unknown names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtEntry {
    pub debtor: String,
    pub creditor: String,
    pub amount: i64,
    /// Optional memo, e.g. "groceries".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl DebtEntry {
    pub fn new(debtor: impl Into<String>, creditor: impl Into<String>, amount: i64) -> Self {
        Self {
            debtor: debtor.into(),
            creditor: creditor.into(),
            amount,
            reference: None,
        }
    }

    /// Set a reference string.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// A validated debt: `debtor` owes `creditor` a positive `amount`.
///
/// Debts are immutable once accepted by the ledger. Several debts between
/// the same ordered pair are summed into one cell of the debt matrix.
///
/// # Examples
///
/// ```
/// use cash_flow_minimizer::core::debt::Debt;
/// use cash_flow_minimizer::core::participant::ParticipantName;
///
/// let debt = Debt::new(ParticipantName::new("Asha"), ParticipantName::new("Ravi"), 250);
/// assert_eq!(debt.amount(), 250);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Unique identifier for this debt.
    id: Uuid,
    /// The participant that owes the amount.
    debtor: ParticipantName,
    /// The participant that is owed the amount.
    creditor: ParticipantName,
    /// The amount owed. Always positive.
    amount: i64,
    /// Optional memo carried over from the entry.
    reference: Option<String>,
}

impl Debt {
    /// Create a new debt.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is not positive. Use `Ledger::build` to validate
    /// untrusted input.
    pub fn new(debtor: ParticipantName, creditor: ParticipantName, amount: i64) -> Self {
        assert!(amount > 0, "Debt amount must be positive, got {}", amount);
        Self {
            id: Uuid::new_v4(),
            debtor,
            creditor,
            amount,
            reference: None,
        }
    }

    /// Set a reference string.
    pub fn with_reference(mut self, reference: Option<String>) -> Self {
        self.reference = reference;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn debtor(&self) -> &ParticipantName {
        &self.debtor
    }

    pub fn creditor(&self) -> &ParticipantName {
        &self.creditor
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}
