use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque payment channel identifier (a UPI handle, wallet, bank rail...).
///
/// Two participants can transact directly only when they share at least
/// one channel. Identifiers order lexicographically, which fixes which
/// channel is picked when several are shared.
///
/// # Examples
///
/// ```
/// use cash_flow_minimizer::core::channel::ChannelId;
///
/// let gpay = ChannelId::new("gpay");
/// let paytm = ChannelId::new("paytm");
/// assert!(gpay < paytm);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Ordered set of channels a participant accepts.
///
/// Iteration is in sorted order, so [`ChannelSet::first`] and
/// [`ChannelSet::first_common`] are deterministic.
///
/// # Examples
///
/// ```
/// use cash_flow_minimizer::core::channel::{ChannelId, ChannelSet};
///
/// let a: ChannelSet = ["upi-b", "upi-a"].into_iter().map(ChannelId::from).collect();
/// let b: ChannelSet = ["upi-c", "upi-b"].into_iter().map(ChannelId::from).collect();
///
/// assert_eq!(a.first().unwrap().as_str(), "upi-a");
/// assert_eq!(a.first_common(&b).unwrap().as_str(), "upi-b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelSet(BTreeSet<ChannelId>);

impl ChannelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a channel. Returns `false` if it was already present.
    pub fn insert(&mut self, channel: ChannelId) -> bool {
        self.0.insert(channel)
    }

    pub fn contains(&self, channel: &ChannelId) -> bool {
        self.0.contains(channel)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Smallest channel in the set.
    pub fn first(&self) -> Option<&ChannelId> {
        self.0.iter().next()
    }

    /// Smallest channel present in both sets, if any.
    pub fn first_common<'a>(&'a self, other: &'a ChannelSet) -> Option<&'a ChannelId> {
        self.0.intersection(&other.0).next()
    }

    /// All channels present in both sets, in sorted order.
    pub fn intersection<'a>(&'a self, other: &'a ChannelSet) -> impl Iterator<Item = &'a ChannelId> {
        self.0.intersection(&other.0)
    }

    pub fn is_superset(&self, other: &ChannelSet) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Union `other` into this set.
    pub fn absorb(&mut self, other: &ChannelSet) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelId> {
        self.0.iter()
    }
}

impl FromIterator<ChannelId> for ChannelSet {
    fn from_iter<T: IntoIterator<Item = ChannelId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ChannelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(ChannelId::as_str).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> ChannelSet {
        ids.iter().map(|s| ChannelId::new(*s)).collect()
    }

    #[test]
    fn test_channel_ordering() {
        assert!(ChannelId::new("a") < ChannelId::new("b"));
        assert_eq!(ChannelId::new("gpay").to_string(), "gpay");
    }

    #[test]
    fn test_first_is_smallest() {
        let s = set(&["zeta", "alpha", "mid"]);
        assert_eq!(s.first(), Some(&ChannelId::new("alpha")));
        assert_eq!(ChannelSet::new().first(), None);
    }

    #[test]
    fn test_duplicates_collapse() {
        let s = set(&["x", "x", "y"]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_first_common() {
        let a = set(&["p", "q", "r"]);
        let b = set(&["r", "q"]);
        let c = set(&["s"]);
        assert_eq!(a.first_common(&b), Some(&ChannelId::new("q")));
        assert_eq!(a.first_common(&c), None);
        assert_eq!(a.intersection(&b).count(), 2);
    }

    #[test]
    fn test_first_common_borrows_from_shared_roster() {
        fn common(roster: &[ChannelSet], i: usize, j: usize) -> Option<&ChannelId> {
            roster[i].first_common(&roster[j])
        }
        let roster = vec![set(&["gpay", "paytm"]), set(&["bhim", "paytm"]), set(&["bhim"])];
        assert_eq!(common(&roster, 0, 1).map(ChannelId::as_str), Some("paytm"));
        assert_eq!(common(&roster, 1, 2).map(ChannelId::as_str), Some("bhim"));
        assert_eq!(common(&roster, 0, 2), None);
    }

    #[test]
    fn test_absorb_and_superset() {
        let mut t = set(&["x"]);
        let b = set(&["y", "z"]);
        assert!(!t.is_superset(&b));
        t.absorb(&b);
        assert!(t.is_superset(&b));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(set(&["b", "a"]).to_string(), "{a, b}");
    }
}
