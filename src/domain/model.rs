use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An opaque participant identifier. Equality is by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Two participants who must never be adjacent in the cycle.
///
/// The pair is unordered: `(a, b)` equals and hashes the same as `(b, a)`.
#[derive(Debug, Clone)]
pub struct PartnerPair {
    first: Participant,
    second: Participant,
}

impl PartnerPair {
    pub fn new(first: impl Into<Participant>, second: impl Into<Participant>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn first(&self) -> &Participant {
        &self.first
    }

    pub fn second(&self) -> &Participant {
        &self.second
    }

    pub fn members(&self) -> [&Participant; 2] {
        [&self.first, &self.second]
    }

    fn ordered(&self) -> (&Participant, &Participant) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

impl PartialEq for PartnerPair {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for PartnerPair {}

impl Hash for PartnerPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl fmt::Display for PartnerPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first, self.second)
    }
}

/// Loaded input, after duplicate removal and before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub participants: Vec<Participant>,
    pub partner_pairs: Vec<PartnerPair>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>, partner_pairs: Vec<PartnerPair>) -> Self {
        Self {
            participants,
            partner_pairs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment<'a> {
    pub giver: &'a Participant,
    pub receiver: &'a Participant,
}

/// A circular ordering of every participant: element `i` gives to element `i + 1 (mod n)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cycle {
    members: Vec<Participant>,
}

impl Cycle {
    /// Callers inside the crate only build cycles that already passed verification.
    pub(crate) fn from_verified(members: Vec<Participant>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Participant> {
        self.members
    }

    /// Every gives-to edge, including the wraparound from the last member to the first.
    pub fn assignments(&self) -> impl Iterator<Item = Assignment<'_>> + '_ {
        let n = self.members.len();
        (0..n).map(move |i| Assignment {
            giver: &self.members[i],
            receiver: &self.members[(i + 1) % n],
        })
    }

    pub fn recipient_of(&self, giver: &Participant) -> Option<&Participant> {
        let n = self.members.len();
        self.members
            .iter()
            .position(|p| p == giver)
            .map(|i| &self.members[(i + 1) % n])
    }
}
