use crate::core::ledger::Ledger;
use crate::settlement::balance::BalanceSheet;
use crate::settlement::engine::{Route, SettlementPlan};
use serde::{Deserialize, Serialize};

/// Aggregate statistics of a finished settlement plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSummary {
    /// Sum of all raw debt amounts.
    pub gross_debt: i64,
    /// Number of raw debts accepted by the ledger.
    pub debt_count: usize,
    /// Sum of positive net balances before settlement.
    pub net_flow: i64,
    /// Sum of all settlement amounts, Treasurer legs included.
    pub transferred: i128,
    pub settlement_count: usize,
    pub direct_count: usize,
    pub routed_count: usize,
}

impl SettlementSummary {
    pub fn from_plan(ledger: &Ledger, plan: &SettlementPlan) -> Self {
        let direct_count = plan
            .settlements()
            .iter()
            .filter(|s| s.route == Route::Direct)
            .count();

        SettlementSummary {
            gross_debt: ledger.gross_total(),
            debt_count: ledger.debts().len(),
            net_flow: BalanceSheet::from_ledger(ledger).outstanding(),
            transferred: plan.total_transferred(),
            settlement_count: plan.len(),
            direct_count,
            routed_count: plan.len() - direct_count,
        }
    }

    /// Fraction of the raw debt volume that never has to move.
    pub fn savings_ratio(&self) -> f64 {
        if self.gross_debt == 0 {
            return 0.0;
        }
        (self.gross_debt - self.net_flow) as f64 / self.gross_debt as f64
    }
}

impl std::fmt::Display for SettlementSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Summary ===")?;
        writeln!(f, "Debts:          {} totalling {}", self.debt_count, self.gross_debt)?;
        writeln!(f, "Net Flow:       {}", self.net_flow)?;
        writeln!(f, "Savings:        {:.1}%", self.savings_ratio() * 100.0)?;
        writeln!(f, "Transfers:      {}", self.settlement_count)?;
        writeln!(f, "  Direct:       {}", self.direct_count)?;
        writeln!(f, "  Via Treasurer: {}", self.routed_count)?;
        writeln!(f, "Transferred:    {}", self.transferred)?;
        Ok(())
    }
}
