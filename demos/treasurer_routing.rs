//! A trip group where some members share no payment app.
//!
//! The Treasurer accepts every app in use and relays payments between
//! members who cannot pay each other directly.

use cash_flow_minimizer::input::text;
use cash_flow_minimizer::prelude::*;

const GROUP: &str = "
4
Treasurer 1 bhim
Asha 1 gpay
Ravi 1 paytm
Kiran 2 paytm phonepe
3
Asha Ravi 500
Asha Kiran 200
Ravi Kiran 100
";

fn main() {
    println!("╔═══════════════════════════════════════════════╗");
    println!("║  cash-flow-minimizer: Treasurer Routing Demo  ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    let group = text::parse(GROUP).expect("group parses");
    let ledger = group.build_ledger().expect("group is valid");

    println!(
        "Treasurer '{}' accepts {}\n",
        ledger.treasurer().name(),
        ledger.treasurer().channels()
    );

    let plan = settle(&ledger);
    for s in plan.settlements() {
        let note = match s.route {
            Route::Direct => "",
            Route::ToTreasurer => "  (to treasurer)",
            Route::FromTreasurer => "  (from treasurer)",
        };
        println!("  {:<10} → {:<10} {:>6} via {}{}", s.payer, s.payee, s.amount, s.channel, note);
    }
    println!();
    println!("{}", SettlementSummary::from_plan(&ledger, &plan));
}
