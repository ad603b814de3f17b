//! Random settlement groups for benchmarks and property tests.
//!
//! Generated groups always pass `Ledger::build` validation.

use crate::core::debt::DebtEntry;
use crate::core::participant::ParticipantEntry;
use crate::input::GroupInput;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Configuration for generating a random group.
#[derive(Debug, Clone)]
pub struct GroupConfig {
    /// Number of participants, Treasurer included.
    pub participant_count: usize,
    /// Channels to draw from.
    pub channel_pool: Vec<String>,
    /// Upper bound on channels per member (at least one is always drawn).
    pub max_channels_per_participant: usize,
    /// Exact number of debts to generate.
    pub debt_count: usize,
    pub min_amount: i64,
    pub max_amount: i64,
    /// Fixed seed for reproducible groups; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            participant_count: 10,
            channel_pool: ["gpay", "paytm", "phonepe", "bhim"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_channels_per_participant: 2,
            debt_count: 30,
            min_amount: 1,
            max_amount: 10_000,
            seed: None,
        }
    }
}

/// Generate a random group. The first participant is the Treasurer and
/// starts with one channel of its own.
pub fn generate_random_group(config: &GroupConfig) -> GroupInput {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let count = config.participant_count.max(2);
    let pool: Vec<String> = if config.channel_pool.is_empty() {
        vec!["upi".to_string()]
    } else {
        config.channel_pool.clone()
    };
    let max_channels = config.max_channels_per_participant.clamp(1, pool.len());

    let participants: Vec<ParticipantEntry> = (0..count)
        .map(|i| {
            let name = if i == 0 {
                "TREASURER".to_string()
            } else {
                format!("MEMBER-{:03}", i)
            };
            let k = if i == 0 { 1 } else { rng.gen_range(1..=max_channels) };
            let channels: Vec<String> = pool.choose_multiple(&mut rng, k).cloned().collect();
            ParticipantEntry { name, channels }
        })
        .collect();

    let (lo, hi) = if config.min_amount <= config.max_amount {
        (config.min_amount.max(1), config.max_amount.max(1))
    } else {
        (config.max_amount.max(1), config.min_amount.max(1))
    };

    let debts = (0..config.debt_count)
        .map(|_| {
            let debtor = rng.gen_range(0..count);
            let mut creditor = rng.gen_range(0..count);
            while creditor == debtor {
                creditor = rng.gen_range(0..count);
            }
            DebtEntry::new(
                participants[debtor].name.clone(),
                participants[creditor].name.clone(),
                rng.gen_range(lo..=hi),
            )
        })
        .collect();

    GroupInput {
        participants,
        debts,
    }
}
