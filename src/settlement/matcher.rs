use crate::core::channel::ChannelId;
use crate::core::ledger::Ledger;
use crate::settlement::balance::BalanceSheet;

/// A creditor that a debtor can pay directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditorMatch<'a> {
    /// Roster index of the chosen creditor.
    pub creditor: usize,
    /// The creditor's balance at the time of the query.
    pub balance: i64,
    /// Smallest channel shared by debtor and creditor.
    pub channel: &'a ChannelId,
}

/// Finds the best creditor a debtor can pay over a shared channel.
pub struct ChannelMatcher<'a> {
    ledger: &'a Ledger,
}

impl<'a> ChannelMatcher<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Pick the creditor for `debtor`.
    ///
    /// Only participants with a positive balance that share at least one
    /// channel with the debtor are eligible. The eligible participant with
    /// the strictly largest balance wins; on equal balances the one earlier
    /// in the roster is kept. The channel is the smallest shared one.
    ///
    /// `None` means the debtor shares no channel with any creditor and must
    /// be routed through the Treasurer.
    pub fn find_settlement(&self, debtor: usize, balances: &BalanceSheet) -> Option<CreditorMatch<'a>> {
        let debtor_channels = self.ledger.participant(debtor).channels();
        let mut best: Option<CreditorMatch<'a>> = None;

        for (i, candidate) in self.ledger.participants().iter().enumerate() {
            let balance = balances.get(i);
            if balance <= 0 {
                continue;
            }
            let Some(channel) = candidate.channels().first_common(debtor_channels) else {
                continue;
            };
            if best.as_ref().map_or(true, |b| balance > b.balance) {
                best = Some(CreditorMatch {
                    creditor: i,
                    balance,
                    channel,
                });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::participant::ParticipantEntry;

    fn ledger() -> Ledger {
        Ledger::build(
            &[
                ParticipantEntry::new("T", ["a"]),
                ParticipantEntry::new("D", ["b", "c"]),
                ParticipantEntry::new("E", ["c", "d"]),
                ParticipantEntry::new("F", ["b"]),
                ParticipantEntry::new("G", ["z"]),
            ],
            &[],
        )
        .unwrap()
    }

    #[test]
    fn test_largest_eligible_creditor_wins() {
        let ledger = ledger();
        let matcher = ChannelMatcher::new(&ledger);
        // G has the most credit but shares nothing with D.
        let sheet = BalanceSheet::from_vec(vec![0, -60, 20, 30, 10]);
        let m = matcher.find_settlement(1, &sheet).unwrap();
        assert_eq!(m.creditor, 3);
        assert_eq!(m.balance, 30);
        assert_eq!(m.channel.as_str(), "b");
    }

    #[test]
    fn test_tie_keeps_first_in_roster() {
        let ledger = ledger();
        let matcher = ChannelMatcher::new(&ledger);
        let sheet = BalanceSheet::from_vec(vec![0, -40, 20, 20, 0]);
        let m = matcher.find_settlement(1, &sheet).unwrap();
        assert_eq!(m.creditor, 2);
        assert_eq!(m.channel.as_str(), "c");
    }

    #[test]
    fn test_treasurer_is_eligible() {
        let ledger = ledger();
        let matcher = ChannelMatcher::new(&ledger);
        let sheet = BalanceSheet::from_vec(vec![25, 0, 0, 0, -25]);
        let m = matcher.find_settlement(4, &sheet).unwrap();
        assert_eq!(m.creditor, 0);
        assert_eq!(m.channel.as_str(), "z");
    }

    #[test]
    fn test_no_shared_channel() {
        let ledger = ledger();
        let matcher = ChannelMatcher::new(&ledger);
        let sheet = BalanceSheet::from_vec(vec![0, 0, 0, -5, 5]);
        assert_eq!(matcher.find_settlement(3, &sheet), None);
    }

    #[test]
    fn test_settled_and_debtors_skipped() {
        let ledger = ledger();
        let matcher = ChannelMatcher::new(&ledger);
        let sheet = BalanceSheet::from_vec(vec![0, -10, -5, 0, 15]);
        assert_eq!(matcher.find_settlement(1, &sheet), None);
    }
}
