use crate::core::channel::{ChannelId, ChannelSet};
use crate::core::debt::{Debt, DebtEntry};
use crate::core::participant::{Participant, ParticipantEntry, ParticipantName};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Errors detected while building a [`Ledger`].
///
/// Every error aborts the run before any settlement is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("at least 2 participants required, got {count}")]
    InsufficientParticipants { count: usize },
    #[error("participant '{name}' appears more than once")]
    DuplicateParticipant { name: String },
    #[error("participant '{name}' must list at least one payment channel")]
    EmptyChannelSet { name: String },
    #[error("invalid channel count '{token}' for participant '{name}'")]
    InvalidChannelCount { name: String, token: String },
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },
    #[error("debt amount must be positive, got {amount} for {debtor} -> {creditor}")]
    InvalidDebtAmount {
        debtor: String,
        creditor: String,
        amount: i64,
    },
    #[error("debt references unknown participant '{name}'")]
    UnknownParticipant { name: String },
    #[error("debt total overflows at {debtor} -> {creditor}")]
    AmountOverflow { debtor: String, creditor: String },
}

/// The validated roster and aggregated debt matrix of one settlement run.
///
/// The first roster entry is the Treasurer. After construction the
/// Treasurer's channel set is a superset of every other participant's set.
///
/// # Examples
///
/// ```
/// use cash_flow_minimizer::prelude::*;
///
/// let ledger = Ledger::build(
///     &[
///         ParticipantEntry::new("T", ["x"]),
///         ParticipantEntry::new("A", ["x"]),
///         ParticipantEntry::new("B", ["y"]),
///     ],
///     &[DebtEntry::new("A", "B", 30)],
/// )
/// .unwrap();
///
/// assert_eq!(ledger.len(), 3);
/// assert_eq!(ledger.treasurer().channels().len(), 2);
/// assert_eq!(ledger.owed(1, 2), 30);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    participants: Vec<Participant>,
    #[serde(skip)]
    index: HashMap<ParticipantName, usize>,
    debts: Vec<Debt>,
    /// `matrix[i][j]` = total amount participant `i` owes participant `j`.
    matrix: Vec<Vec<i64>>,
    treasurer: usize,
}

impl Ledger {
    /// Validate the roster and debts and build the ledger.
    pub fn build(
        participants: &[ParticipantEntry],
        debts: &[DebtEntry],
    ) -> Result<Self, LedgerError> {
        if participants.len() < 2 {
            return Err(LedgerError::InsufficientParticipants {
                count: participants.len(),
            });
        }

        let treasurer = 0;
        let mut roster = Vec::with_capacity(participants.len());
        let mut index = HashMap::with_capacity(participants.len());

        for (i, entry) in participants.iter().enumerate() {
            let name = ParticipantName::new(entry.name.as_str());
            if index.contains_key(&name) {
                return Err(LedgerError::DuplicateParticipant {
                    name: entry.name.clone(),
                });
            }
            if i != treasurer && entry.channels.is_empty() {
                return Err(LedgerError::EmptyChannelSet {
                    name: entry.name.clone(),
                });
            }
            let channels: ChannelSet = entry
                .channels
                .iter()
                .map(|c| ChannelId::new(c.as_str()))
                .collect();
            index.insert(name.clone(), i);
            roster.push(Participant::new(name, channels));
        }

        let n = roster.len();
        let mut matrix = vec![vec![0i64; n]; n];
        let mut accepted = Vec::with_capacity(debts.len());
        // Bounding the gross total bounds every net balance too.
        let mut gross: i64 = 0;

        for entry in debts {
            if entry.amount <= 0 {
                return Err(LedgerError::InvalidDebtAmount {
                    debtor: entry.debtor.clone(),
                    creditor: entry.creditor.clone(),
                    amount: entry.amount,
                });
            }
            let d = lookup(&index, &entry.debtor)?;
            let c = lookup(&index, &entry.creditor)?;

            gross = gross
                .checked_add(entry.amount)
                .ok_or_else(|| LedgerError::AmountOverflow {
                    debtor: entry.debtor.clone(),
                    creditor: entry.creditor.clone(),
                })?;
            matrix[d][c] += entry.amount;
            accepted.push(
                Debt::new(
                    roster[d].name().clone(),
                    roster[c].name().clone(),
                    entry.amount,
                )
                .with_reference(entry.reference.clone()),
            );
        }

        // Treasurer must be able to receive from and pay to anyone.
        let others: Vec<ChannelSet> = roster
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != treasurer)
            .map(|(_, p)| p.channels().clone())
            .collect();
        for channels in &others {
            roster[treasurer].channels_mut().absorb(channels);
        }

        debug!(
            "ledger built: {} participants, {} debts, treasurer '{}' accepts {}",
            n,
            accepted.len(),
            roster[treasurer].name(),
            roster[treasurer].channels()
        );

        Ok(Self {
            participants: roster,
            index,
            debts: accepted,
            matrix,
            treasurer,
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, idx: usize) -> &Participant {
        &self.participants[idx]
    }

    /// Roster index of a participant by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(&ParticipantName::new(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn treasurer_index(&self) -> usize {
        self.treasurer
    }

    pub fn treasurer(&self) -> &Participant {
        &self.participants[self.treasurer]
    }

    /// Accepted debts in input order.
    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    /// Aggregated amount `debtor` owes `creditor`.
    pub fn owed(&self, debtor: usize, creditor: usize) -> i64 {
        self.matrix[debtor][creditor]
    }

    pub fn matrix(&self) -> &[Vec<i64>] {
        &self.matrix
    }

    /// Sum of all accepted debt amounts.
    pub fn gross_total(&self) -> i64 {
        self.debts.iter().map(Debt::amount).sum()
    }
}

fn lookup(index: &HashMap<ParticipantName, usize>, name: &str) -> Result<usize, LedgerError> {
    index
        .get(&ParticipantName::new(name))
        .copied()
        .ok_or_else(|| LedgerError::UnknownParticipant {
            name: name.to_string(),
        })
}
