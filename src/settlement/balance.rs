use crate::core::ledger::Ledger;
use serde::{Deserialize, Serialize};

/// Signed net balance of every participant, in roster order.
///
/// Positive = net creditor, negative = net debtor, zero = settled.
/// The balances of a sheet produced by [`BalanceSheet::from_ledger`]
/// always sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceSheet(Vec<i64>);

impl BalanceSheet {
    /// Reduce the ledger's debt matrix to one net balance per participant.
    ///
    /// `balance[i] = Σ_j D[j][i] − Σ_j D[i][j]`
    ///
    /// # Examples
    ///
    /// ```
    /// use cash_flow_minimizer::prelude::*;
    ///
    /// let ledger = Ledger::build(
    ///     &[ParticipantEntry::new("T", ["x"]), ParticipantEntry::new("A", ["x"])],
    ///     &[DebtEntry::new("A", "T", 50)],
    /// )
    /// .unwrap();
    ///
    /// let sheet = BalanceSheet::from_ledger(&ledger);
    /// assert_eq!(sheet.as_slice(), &[50, -50]);
    /// ```
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let matrix = ledger.matrix();
        let n = matrix.len();
        let balances = (0..n)
            .map(|i| (0..n).map(|j| matrix[j][i] - matrix[i][j]).sum::<i64>())
            .collect();
        Self(balances)
    }

    pub fn from_vec(balances: Vec<i64>) -> Self {
        Self(balances)
    }

    pub fn get(&self, idx: usize) -> i64 {
        self.0[idx]
    }

    /// Move `amount` from `payer`'s debt to `payee`'s credit.
    pub(crate) fn transfer(&mut self, payer: usize, payee: usize, amount: i64) {
        self.0[payer] += amount;
        self.0[payee] -= amount;
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all balances. Zero for any conserved sheet.
    pub fn sum(&self) -> i64 {
        self.0.iter().sum()
    }

    /// Total still to flow: sum of positive balances.
    pub fn outstanding(&self) -> i64 {
        self.0.iter().filter(|b| **b > 0).sum()
    }

    /// Number of participants whose balance is exactly zero.
    pub fn settled_count(&self) -> usize {
        self.0.iter().filter(|b| **b == 0).count()
    }

    pub fn is_settled(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Index of the most negative balance. Lowest index wins ties.
    pub fn max_debtor(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &b) in self.0.iter().enumerate() {
            if best.map_or(true, |j| b < self.0[j]) {
                best = Some(i);
            }
        }
        best
    }

    /// Index of the most positive balance other than `excluded`.
    /// Lowest index wins ties.
    pub fn max_creditor_excluding(&self, excluded: usize) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &b) in self.0.iter().enumerate() {
            if i == excluded {
                continue;
            }
            if best.map_or(true, |j| b > self.0[j]) {
                best = Some(i);
            }
        }
        best
    }
}
