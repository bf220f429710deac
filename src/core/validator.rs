use crate::domain::model::{Participant, PartnerPair};
use crate::utils::error::{Result, SantaError};
use std::collections::{HashMap, HashSet};

/// Participants and partnerships that passed every precondition of the cycle builder.
#[derive(Debug, Clone)]
pub struct ValidatedRoster {
    participants: Vec<Participant>,
    partner_pairs: Vec<PartnerPair>,
    partners: HashMap<Participant, Participant>,
}

impl ValidatedRoster {
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn partner_pairs(&self) -> &[PartnerPair] {
        &self.partner_pairs
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn partner_of(&self, participant: &Participant) -> Option<&Participant> {
        self.partners.get(participant)
    }

    pub fn are_partners(&self, a: &Participant, b: &Participant) -> bool {
        self.partner_of(a) == Some(b)
    }
}

/// Checks participant count and partnership structure.
///
/// Repeated participants or pairs are collapsed first so the counts below are
/// taken over distinct entries; the loader is expected to have warned about them.
pub fn validate_roster(
    participants: &[Participant],
    partner_pairs: &[PartnerPair],
) -> Result<ValidatedRoster> {
    let mut seen = HashSet::new();
    let participants: Vec<Participant> = participants
        .iter()
        .filter(|p| seen.insert(*p))
        .cloned()
        .collect();

    let mut seen_pairs = HashSet::new();
    let partner_pairs: Vec<PartnerPair> = partner_pairs
        .iter()
        .filter(|pair| seen_pairs.insert(*pair))
        .cloned()
        .collect();

    if participants.len() <= 2 {
        return Err(SantaError::TooFewParticipants {
            count: participants.len(),
        });
    }

    let max = participants.len() / 2;
    if partner_pairs.len() > max {
        return Err(SantaError::TooManyPartnerships {
            count: partner_pairs.len(),
            max,
        });
    }

    let known: HashSet<&Participant> = participants.iter().collect();
    let mut partners = HashMap::with_capacity(partner_pairs.len() * 2);

    for pair in &partner_pairs {
        if pair.first() == pair.second() {
            return Err(SantaError::SelfPartnership {
                name: pair.first().to_string(),
            });
        }

        for member in pair.members() {
            if !known.contains(member) {
                return Err(SantaError::UnknownPartner {
                    name: member.to_string(),
                });
            }
        }

        for (member, other) in [(pair.first(), pair.second()), (pair.second(), pair.first())] {
            if partners.insert(member.clone(), other.clone()).is_some() {
                return Err(SantaError::OverlappingPartnership {
                    name: member.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        "Roster valid: {} participants, {} partnerships",
        participants.len(),
        partner_pairs.len()
    );

    Ok(ValidatedRoster {
        participants,
        partner_pairs,
        partners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|n| Participant::from(*n)).collect()
    }

    #[test]
    fn test_rejects_two_participants() {
        let result = validate_roster(&people(&["A", "B"]), &[]);
        assert!(matches!(
            result,
            Err(SantaError::TooFewParticipants { count: 2 })
        ));
    }

    #[test]
    fn test_duplicates_do_not_count_towards_minimum() {
        let result = validate_roster(&people(&["A", "B", "A"]), &[]);
        assert!(matches!(
            result,
            Err(SantaError::TooFewParticipants { count: 2 })
        ));
    }

    #[test]
    fn test_rejects_too_many_partnerships() {
        let pairs = vec![PartnerPair::new("A", "B"), PartnerPair::new("C", "D")];
        let result = validate_roster(&people(&["A", "B", "C"]), &pairs);
        assert!(matches!(
            result,
            Err(SantaError::TooManyPartnerships { count: 2, max: 1 })
        ));
    }

    #[test]
    fn test_rejects_unknown_partner() {
        let pairs = vec![PartnerPair::new("A", "Zed")];
        match validate_roster(&people(&["A", "B", "C", "D"]), &pairs) {
            Err(SantaError::UnknownPartner { name }) => assert_eq!(name, "Zed"),
            other => panic!("expected UnknownPartner, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_overlapping_partnership() {
        let pairs = vec![PartnerPair::new("A", "B"), PartnerPair::new("B", "C")];
        match validate_roster(&people(&["A", "B", "C", "D", "E"]), &pairs) {
            Err(SantaError::OverlappingPartnership { name }) => assert_eq!(name, "B"),
            other => panic!("expected OverlappingPartnership, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_self_partnership() {
        let pairs = vec![PartnerPair::new("A", "A")];
        assert!(matches!(
            validate_roster(&people(&["A", "B", "C"]), &pairs),
            Err(SantaError::SelfPartnership { .. })
        ));
    }

    #[test]
    fn test_reversed_pair_is_the_same_partnership() {
        let pairs = vec![PartnerPair::new("A", "B"), PartnerPair::new("B", "A")];
        let roster = validate_roster(&people(&["A", "B", "C", "D"]), &pairs).unwrap();
        assert_eq!(roster.partner_pairs().len(), 1);
    }

    #[test]
    fn test_partner_lookup() {
        let pairs = vec![PartnerPair::new("A", "B")];
        let roster = validate_roster(&people(&["A", "B", "C"]), &pairs).unwrap();

        assert_eq!(roster.len(), 3);
        assert!(roster.are_partners(&"A".into(), &"B".into()));
        assert!(roster.are_partners(&"B".into(), &"A".into()));
        assert!(!roster.are_partners(&"A".into(), &"C".into()));
        assert_eq!(roster.partner_of(&"C".into()), None);
    }

    #[test]
    fn test_full_pairing_is_allowed() {
        let pairs = vec![PartnerPair::new("A", "B"), PartnerPair::new("C", "D")];
        assert!(validate_roster(&people(&["A", "B", "C", "D"]), &pairs).is_ok());
    }
}
