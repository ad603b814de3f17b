//! Whitespace-separated token format used by the interactive console:
//!
//! ```text
//! <n>
//! <name> <k> <channel>... (n times, first line is the Treasurer)
//! <m>
//! <debtor> <creditor> <amount> (m times)
//! ```

use crate::core::debt::DebtEntry;
use crate::core::ledger::LedgerError;
use crate::core::participant::ParticipantEntry;
use crate::input::GroupInput;
use log::warn;
use std::str::SplitWhitespace;

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next(&mut self, what: &str) -> Result<&'a str, LedgerError> {
        self.inner.next().ok_or_else(|| LedgerError::MalformedInput {
            reason: format!("unexpected end of input, expected {}", what),
        })
    }

    fn count(&mut self, what: &str) -> Result<usize, LedgerError> {
        let token = self.next(what)?;
        token.parse().map_err(|_| LedgerError::MalformedInput {
            reason: format!("invalid {} '{}'", what, token),
        })
    }
}

/// Parse a group from the console token format.
///
/// Amounts are only checked for being integers here; positivity and name
/// resolution are left to `Ledger::build`.
///
/// # Examples
///
/// ```
/// use cash_flow_minimizer::input::text::parse;
///
/// let group = parse("3  T 1 x  A 1 x  B 1 y  1  A B 30").unwrap();
/// assert_eq!(group.participants.len(), 3);
/// assert_eq!(group.debts[0].amount, 30);
/// ```
pub fn parse(input: &str) -> Result<GroupInput, LedgerError> {
    let mut tokens = Tokens {
        inner: input.split_whitespace(),
    };

    let n = tokens.count("participant count")?;
    let mut participants = Vec::new();
    for _ in 0..n {
        let name = tokens.next("participant name")?;
        let k_token = tokens.next("channel count")?;
        let k: usize = k_token
            .parse()
            .map_err(|_| LedgerError::InvalidChannelCount {
                name: name.to_string(),
                token: k_token.to_string(),
            })?;
        let mut channels = Vec::new();
        for _ in 0..k {
            channels.push(tokens.next("channel")?);
        }
        participants.push(ParticipantEntry::new(name, channels));
    }

    let m = tokens.count("debt count")?;
    let mut debts = Vec::new();
    for _ in 0..m {
        let debtor = tokens.next("debtor")?;
        let creditor = tokens.next("creditor")?;
        let amount_token = tokens.next("amount")?;
        let amount: i64 = amount_token
            .parse()
            .map_err(|_| LedgerError::MalformedInput {
                reason: format!("invalid amount '{}' for {} -> {}", amount_token, debtor, creditor),
            })?;
        debts.push(DebtEntry::new(debtor, creditor, amount));
    }

    let trailing = tokens.inner.count();
    if trailing > 0 {
        warn!("ignoring {} trailing tokens after the last debt", trailing);
    }

    Ok(GroupInput {
        participants,
        debts,
    })
}
