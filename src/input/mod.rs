//! Host-side input formats.
//!
//! Both formats produce a [`GroupInput`]: the roster and raw debts that
//! [`Ledger::build`] validates. The first participant is the Treasurer.

pub mod text;

use crate::core::debt::DebtEntry;
use crate::core::ledger::{Ledger, LedgerError};
use crate::core::participant::ParticipantEntry;
use serde::{Deserialize, Serialize};

/// JSON schema for a settlement group.
///
/// ```json
/// {
///   "participants": [ { "name": "T", "channels": ["x"] } ],
///   "debts": [ { "debtor": "A", "creditor": "T", "amount": 50 } ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInput {
    pub participants: Vec<ParticipantEntry>,
    #[serde(default)]
    pub debts: Vec<DebtEntry>,
}

impl GroupInput {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate and build the ledger for this group.
    pub fn build_ledger(&self) -> Result<Ledger, LedgerError> {
        Ledger::build(&self.participants, &self.debts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_group() {
        let group = GroupInput::from_json(
            r#"{
                "participants": [
                    { "name": "T", "channels": ["x"] },
                    { "name": "A", "channels": ["x", "y"] }
                ],
                "debts": [ { "debtor": "A", "creditor": "T", "amount": 50, "reference": "rent" } ]
            }"#,
        )
        .unwrap();

        assert_eq!(group.participants.len(), 2);
        assert_eq!(group.debts[0].reference.as_deref(), Some("rent"));

        let ledger = group.build_ledger().unwrap();
        assert_eq!(ledger.owed(1, 0), 50);
        assert_eq!(ledger.debts()[0].reference(), Some("rent"));
    }

    #[test]
    fn test_json_debts_default_to_empty() {
        let group = GroupInput::from_json(
            r#"{ "participants": [ { "name": "T" }, { "name": "A", "channels": ["x"] } ] }"#,
        )
        .unwrap();
        assert!(group.debts.is_empty());
        assert!(group.participants[0].channels.is_empty());
        assert!(group.build_ledger().is_ok());
    }

    #[test]
    fn test_json_rejects_fractional_amount() {
        let err = GroupInput::from_json(
            r#"{ "participants": [], "debts": [ { "debtor": "A", "creditor": "B", "amount": 1.5 } ] }"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_json_output_reparses() {
        let group = GroupInput {
            participants: vec![
                ParticipantEntry::new("T", ["x"]),
                ParticipantEntry::new("A", ["x"]),
            ],
            debts: vec![DebtEntry::new("A", "T", 9)],
        };
        let json = group.to_json().unwrap();
        assert_eq!(GroupInput::from_json(&json).unwrap(), group);
    }
}
