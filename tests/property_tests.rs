use cash_flow_minimizer::prelude::*;
use cash_flow_minimizer::simulation::random_group::{generate_random_group, GroupConfig};
use proptest::prelude::*;

const NAMES: [&str; 6] = ["T", "A", "B", "C", "D", "E"];
const CHANNELS: [&str; 4] = ["p", "q", "r", "s"];

/// A roster of 2..=6 participants, each with 1..=2 channels from a small pool
/// so that both direct matches and Treasurer routes occur.
fn arb_roster() -> impl Strategy<Value = Vec<ParticipantEntry>> {
    prop::collection::vec(prop::sample::subsequence(CHANNELS.to_vec(), 1..=2), 2..=6).prop_map(
        |channel_lists| {
            channel_lists
                .into_iter()
                .enumerate()
                .map(|(i, channels)| ParticipantEntry::new(NAMES[i], channels))
                .collect()
        },
    )
}

/// A valid ledger: roster plus up to 30 positive debts among its members.
fn arb_ledger() -> impl Strategy<Value = Ledger> {
    arb_roster().prop_flat_map(|roster| {
        let n = roster.len();
        let debts = prop::collection::vec((0..n, 0..n, 1i64..1_000), 0..30);
        (Just(roster), debts).prop_map(|(roster, debts)| {
            let debts: Vec<DebtEntry> = debts
                .into_iter()
                .map(|(d, c, amount)| {
                    DebtEntry::new(roster[d].name.clone(), roster[c].name.clone(), amount)
                })
                .collect();
            Ledger::build(&roster, &debts).expect("generated ledger is valid")
        })
    })
}

fn magnitude(balances: &BalanceSheet) -> i64 {
    balances.as_slice().iter().map(|b| b.abs()).sum()
}

proptest! {
    // ===================================================================
    // Conservation: net balances sum to zero, before and after every step.
    // ===================================================================
    #[test]
    fn balances_always_sum_to_zero(ledger in arb_ledger()) {
        let mut engine = SettlementEngine::new(&ledger);
        prop_assert_eq!(engine.balances().sum(), 0);
        while !engine.is_settled() {
            let emitted = engine.step();
            prop_assert!(!emitted.is_empty(), "an unsettled step must emit a transfer");
            prop_assert_eq!(engine.balances().sum(), 0);
        }
    }

    // ===================================================================
    // Termination: Σ|balance| strictly decreases every step.
    // ===================================================================
    #[test]
    fn every_step_makes_progress(ledger in arb_ledger()) {
        let mut engine = SettlementEngine::new(&ledger);
        while !engine.is_settled() {
            let before = magnitude(engine.balances());
            engine.step();
            prop_assert!(magnitude(engine.balances()) < before);
        }
    }

    // ===================================================================
    // Channel validity: payer and payee both accept the channel used.
    // ===================================================================
    #[test]
    fn settlements_use_shared_channels(ledger in arb_ledger()) {
        let plan = settle(&ledger);
        for s in plan.settlements() {
            let payer = ledger.index_of(s.payer.as_str()).unwrap();
            let payee = ledger.index_of(s.payee.as_str()).unwrap();
            prop_assert!(ledger.participant(payer).channels().contains(&s.channel));
            prop_assert!(ledger.participant(payee).channels().contains(&s.channel));
        }
    }

    // ===================================================================
    // Amount positivity and no self-transfers.
    // ===================================================================
    #[test]
    fn settlements_are_positive_and_between_distinct_parties(ledger in arb_ledger()) {
        for s in settle(&ledger).settlements() {
            prop_assert!(s.amount > 0);
            prop_assert_ne!(&s.payer, &s.payee);
        }
    }

    // ===================================================================
    // Replaying the plan brings every net balance to zero.
    // ===================================================================
    #[test]
    fn plan_clears_every_balance(ledger in arb_ledger()) {
        let mut balances = BalanceSheet::from_ledger(&ledger).as_slice().to_vec();
        for s in settle(&ledger).settlements() {
            balances[ledger.index_of(s.payer.as_str()).unwrap()] += s.amount;
            balances[ledger.index_of(s.payee.as_str()).unwrap()] -= s.amount;
        }
        prop_assert!(balances.iter().all(|b| *b == 0));
    }

    // ===================================================================
    // Treasurer superset after setup.
    // ===================================================================
    #[test]
    fn treasurer_accepts_every_channel(ledger in arb_ledger()) {
        let treasurer = ledger.treasurer();
        for p in ledger.participants() {
            prop_assert!(treasurer.channels().is_superset(p.channels()));
        }
    }

    // ===================================================================
    // Determinism: the same ledger always yields the same transfers.
    // ===================================================================
    #[test]
    fn settlement_is_deterministic(ledger in arb_ledger()) {
        let a = settle(&ledger);
        let b = settle(&ledger);
        prop_assert_eq!(a.settlements(), b.settlements());
    }

    // ===================================================================
    // Generated groups always validate and settle.
    // ===================================================================
    #[test]
    fn generated_groups_settle(seed in any::<u64>(), count in 2usize..15) {
        let config = GroupConfig {
            participant_count: count,
            debt_count: count * 3,
            seed: Some(seed),
            ..Default::default()
        };
        let ledger = generate_random_group(&config).build_ledger().unwrap();
        let plan = settle(&ledger);
        prop_assert!(plan.settlements().iter().all(|s| s.amount > 0));
    }
}
