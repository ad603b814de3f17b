use crate::core::channel::ChannelId;
use crate::core::ledger::Ledger;
use crate::core::participant::ParticipantName;
use crate::settlement::balance::BalanceSheet;
use crate::settlement::matcher::ChannelMatcher;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a settlement came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Debtor paid a creditor over a shared channel.
    Direct,
    /// First leg of a Treasurer route: debtor pays the Treasurer.
    ToTreasurer,
    /// Second leg of a Treasurer route: Treasurer pays the largest creditor.
    FromTreasurer,
}

/// One recommended transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub payer: ParticipantName,
    pub payee: ParticipantName,
    /// Always positive.
    pub amount: i64,
    /// Accepted by both payer and payee.
    pub channel: ChannelId,
    pub route: Route,
}

/// The ordered settlements that bring every balance of a ledger to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementPlan {
    id: Uuid,
    computed_at: DateTime<Utc>,
    settlements: Vec<Settlement>,
}

impl SettlementPlan {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn computed_at(&self) -> DateTime<Utc> {
        self.computed_at
    }

    /// Settlements in the order they were emitted.
    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    pub fn len(&self) -> usize {
        self.settlements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settlements.is_empty()
    }

    /// Sum of all settlement amounts. Routed amounts count once per leg,
    /// so the total can exceed `i64::MAX` even for a valid ledger.
    pub fn total_transferred(&self) -> i128 {
        self.settlements.iter().map(|s| i128::from(s.amount)).sum()
    }

    /// Number of legs that pass through the Treasurer.
    pub fn routed_count(&self) -> usize {
        self.settlements
            .iter()
            .filter(|s| s.route != Route::Direct)
            .count()
    }
}

impl std::fmt::Display for SettlementPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Settlement Plan ===")?;
        writeln!(f, "{:<15}{:<15}{:<8}UPI", "Payer", "Payee", "Amount")?;
        writeln!(f, "{}", "-".repeat(50))?;
        for s in &self.settlements {
            writeln!(
                f,
                "{:<15}{:<15}{:<8}{}",
                s.payer.as_str(),
                s.payee.as_str(),
                s.amount,
                s.channel
            )?;
        }
        Ok(())
    }
}

/// Greedy settlement loop over a ledger's net balances.
///
/// Each step takes the participant with the most negative balance and
/// either pays the best channel-compatible creditor directly, or pays the
/// Treasurer who then pays the largest remaining creditor. Balances sum to
/// zero after every step and the sum of their absolute values strictly
/// decreases, so the loop always ends with every balance at zero.
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
/// let plan = settle(&ledger);
/// let legs: Vec<_> = plan
///     .settlements()
///     .iter()
///     .map(|s| (s.payer.as_str(), s.payee.as_str(), s.amount, s.channel.as_str()))
///     .collect();
/// assert_eq!(legs, vec![("A", "T", 30, "x"), ("T", "B", 30, "y")]);
/// ```
pub struct SettlementEngine<'a> {
    ledger: &'a Ledger,
    matcher: ChannelMatcher<'a>,
    balances: BalanceSheet,
}

impl<'a> SettlementEngine<'a> {
    /// Start from the ledger's net balances.
    pub fn new(ledger: &'a Ledger) -> Self {
        Self {
            ledger,
            matcher: ChannelMatcher::new(ledger),
            balances: BalanceSheet::from_ledger(ledger),
        }
    }

    /// Current balances.
    pub fn balances(&self) -> &BalanceSheet {
        &self.balances
    }

    pub fn is_settled(&self) -> bool {
        self.balances.is_settled()
    }

    /// Run one iteration of the loop and return the settlements it emitted.
    ///
    /// Returns an empty vector once every balance is zero.
    pub fn step(&mut self) -> Vec<Settlement> {
        let mut emitted = Vec::new();
        let Some(debtor) = self.balances.max_debtor() else {
            return emitted;
        };
        let amount_to_pay = -self.balances.get(debtor);
        if amount_to_pay <= 0 {
            return emitted;
        }

        if let Some(found) = self.matcher.find_settlement(debtor, &self.balances) {
            let amount = amount_to_pay.min(found.balance);
            self.balances.transfer(debtor, found.creditor, amount);
            emitted.push(self.record(debtor, found.creditor, amount, found.channel, Route::Direct));
        } else {
            self.route_through_treasurer(debtor, amount_to_pay, &mut emitted);
        }

        debug!(
            "step: {} settled of {}, {} outstanding",
            self.balances.settled_count(),
            self.balances.len(),
            self.balances.outstanding()
        );
        emitted
    }

    fn route_through_treasurer(&mut self, debtor: usize, amount: i64, emitted: &mut Vec<Settlement>) {
        let ledger = self.ledger;
        let treasurer = ledger.treasurer_index();

        // Non-treasurer participants always list a channel, and the
        // treasurer accepts every one of them.
        let Some(channel) = ledger.participant(debtor).channels().first() else {
            return;
        };
        self.balances.transfer(debtor, treasurer, amount);
        emitted.push(self.record(debtor, treasurer, amount, channel, Route::ToTreasurer));

        let Some(creditor) = self.balances.max_creditor_excluding(treasurer) else {
            return;
        };
        // The treasurer now owes what it received plus any debt of its own;
        // forward as much of that as the creditor is still owed.
        let forwarded = (-self.balances.get(treasurer)).min(self.balances.get(creditor));
        if forwarded <= 0 {
            return;
        }
        let Some(channel) = ledger.participant(creditor).channels().first() else {
            return;
        };
        self.balances.transfer(treasurer, creditor, forwarded);
        emitted.push(self.record(treasurer, creditor, forwarded, channel, Route::FromTreasurer));
    }

    fn record(
        &self,
        payer: usize,
        payee: usize,
        amount: i64,
        channel: &ChannelId,
        route: Route,
    ) -> Settlement {
        let settlement = Settlement {
            payer: self.ledger.participant(payer).name().clone(),
            payee: self.ledger.participant(payee).name().clone(),
            amount,
            channel: channel.clone(),
            route,
        };
        debug!(
            "{} pays {} {} via {} ({:?})",
            settlement.payer, settlement.payee, amount, channel, route
        );
        settlement
    }

    /// Run the loop to completion.
    pub fn run(mut self) -> SettlementPlan {
        let mut settlements = Vec::new();
        while !self.is_settled() {
            let emitted = self.step();
            if emitted.is_empty() {
                break;
            }
            settlements.extend(emitted);
        }
        debug_assert!(self.is_settled(), "settlement loop stalled: {:?}", self.balances);

        let plan = SettlementPlan {
            id: Uuid::new_v4(),
            computed_at: Utc::now(),
            settlements,
        };
        info!(
            "settled {} participants with {} transfers ({} via treasurer)",
            self.ledger.len(),
            plan.len(),
            plan.routed_count()
        );
        plan
    }
}

/// Compute the settlement plan for a ledger.
pub fn settle(ledger: &Ledger) -> SettlementPlan {
    SettlementEngine::new(ledger).run()
}
