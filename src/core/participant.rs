use crate::core::channel::ChannelSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a participant in a settlement group.
///
/// Names are unique within a run and are what the settlement plan
/// reports as payer and payee.
///
/// # Examples
///
/// ```
/// use cash_flow_minimizer::core::participant::ParticipantName;
///
/// let asha = ParticipantName::new("Asha");
/// let ravi = ParticipantName::new("Ravi");
/// assert_ne!(asha, ravi);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantName(String);

impl ParticipantName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the string representation of this name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A roster line as supplied by the host program: a name and the
/// channels that participant accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantEntry {
    pub name: String,
    #[serde(default)]
    pub channels: Vec<String>,
}

impl ParticipantEntry {
    pub fn new<I, S>(name: impl Into<String>, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            channels: channels.into_iter().map(Into::into).collect(),
        }
    }
}

/// A member of the group together with the payment channels they accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: ParticipantName,
    channels: ChannelSet,
}

impl Participant {
    pub fn new(name: ParticipantName, channels: ChannelSet) -> Self {
        Self { name, channels }
    }

    pub fn name(&self) -> &ParticipantName {
        &self.name
    }

    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }

    pub(crate) fn channels_mut(&mut self) -> &mut ChannelSet {
        &mut self.channels
    }
}
