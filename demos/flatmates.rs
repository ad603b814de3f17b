//! Flatmates settling a month of shared expenses.
//!
//! Everyone can reach someone over a common UPI app, so the plan only
//! uses direct transfers.

use cash_flow_minimizer::prelude::*;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  cash-flow-minimizer: Flatmates Example  ║");
    println!("╚══════════════════════════════════════════╝\n");

    let ledger = Ledger::build(
        &[
            ParticipantEntry::new("Meera", ["gpay"]),
            ParticipantEntry::new("Asha", ["gpay", "paytm"]),
            ParticipantEntry::new("Ravi", ["paytm"]),
            ParticipantEntry::new("Kiran", ["gpay", "phonepe"]),
        ],
        &[
            DebtEntry::new("Asha", "Ravi", 1_200).with_reference("electricity"),
            DebtEntry::new("Ravi", "Kiran", 800).with_reference("groceries"),
            DebtEntry::new("Kiran", "Asha", 300).with_reference("internet"),
            DebtEntry::new("Asha", "Meera", 450).with_reference("gas cylinder"),
            DebtEntry::new("Kiran", "Meera", 150),
        ],
    )
    .expect("roster is valid");

    println!("━━━ Net Balances ━━━\n");
    let sheet = BalanceSheet::from_ledger(&ledger);
    for (i, p) in ledger.participants().iter().enumerate() {
        println!("  {:<10} {:>8}  {}", p.name(), sheet.get(i), p.channels());
    }
    println!();

    let plan = settle(&ledger);
    println!("{}", plan);
    println!("{}", SettlementSummary::from_plan(&ledger, &plan));
}
