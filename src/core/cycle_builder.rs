use crate::core::validator::{validate_roster, ValidatedRoster};
use crate::domain::model::{Cycle, Participant, PartnerPair};
use crate::utils::error::{Result, SantaError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;

/// Full partition-and-shuffle rounds tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Builds a single gives-to cycle with the two-set partition.
///
/// Partners are always split across the two sets, so inside either set no two
/// neighbours can be partners. Only the two splice points (end of A into start
/// of B, end of B back into start of A) need checking, and those get a local
/// swap before the whole cycle is verified. A round that still fails is thrown
/// away and the sets are re-partitioned and reshuffled.
pub struct CycleBuilder<R: Rng> {
    rng: R,
    max_attempts: usize,
}

impl CycleBuilder<ChaCha20Rng> {
    /// Same seed and same roster always yield the same cycle.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> CycleBuilder<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn build(&mut self, roster: &ValidatedRoster) -> Result<Cycle> {
        for attempt in 1..=self.max_attempts {
            let (mut set_a, mut set_b) = self.partition(roster);
            set_a.shuffle(&mut self.rng);
            set_b.shuffle(&mut self.rng);

            repair_splices(&mut set_a, &mut set_b, roster);

            let members: Vec<&Participant> = set_a.into_iter().chain(set_b).collect();
            if is_valid_cycle(&members, roster) {
                tracing::debug!(
                    "Found a valid cycle of {} participants on attempt {}",
                    members.len(),
                    attempt
                );
                return Ok(Cycle::from_verified(
                    members.into_iter().cloned().collect(),
                ));
            }

            tracing::trace!("Attempt {} left a forbidden adjacency, retrying", attempt);
        }

        tracing::debug!(
            "Giving up after {} attempts for {} participants and {} partnerships",
            self.max_attempts,
            roster.len(),
            roster.partner_pairs().len()
        );
        Err(SantaError::ConstraintUnsatisfiable {
            attempts: self.max_attempts,
        })
    }

    /// Splits the roster into two sets with every pair straddling them.
    /// Unpaired participants go to the smaller set (A on ties), so |A| - |B| is 0 or 1.
    fn partition<'r>(
        &mut self,
        roster: &'r ValidatedRoster,
    ) -> (Vec<&'r Participant>, Vec<&'r Participant>) {
        let half = roster.len() / 2 + 1;
        let mut set_a = Vec::with_capacity(half);
        let mut set_b = Vec::with_capacity(half);
        let mut assigned = HashSet::with_capacity(roster.len());

        for participant in roster.participants() {
            if !assigned.insert(participant) {
                continue;
            }

            match roster.partner_of(participant) {
                Some(partner) => {
                    if self.rng.gen_bool(0.5) {
                        set_a.push(participant);
                        set_b.push(partner);
                    } else {
                        set_b.push(participant);
                        set_a.push(partner);
                    }
                    assigned.insert(partner);
                }
                None => {
                    if set_a.len() <= set_b.len() {
                        set_a.push(participant);
                    } else {
                        set_b.push(participant);
                    }
                }
            }
        }

        (set_a, set_b)
    }
}

/// Local swap at each splice point. Does not guarantee success; the caller verifies.
fn repair_splices(
    set_a: &mut [&Participant],
    set_b: &mut [&Participant],
    roster: &ValidatedRoster,
) {
    if let (Some(&a_last), Some(&b_first)) = (set_a.last(), set_b.first()) {
        if roster.are_partners(a_last, b_first) {
            if let Some(i) = (1..set_b.len()).find(|&i| !roster.are_partners(a_last, set_b[i])) {
                set_b.swap(0, i);
            }
        }
    }

    if let (Some(&b_last), Some(&a_first)) = (set_b.last(), set_a.first()) {
        if roster.are_partners(b_last, a_first) {
            // Leave A's last element alone if possible, it was fixed above.
            let candidate = (1..set_a.len().saturating_sub(1))
                .find(|&i| !roster.are_partners(b_last, set_a[i]))
                .or_else(|| {
                    (1..set_a.len()).find(|&i| !roster.are_partners(b_last, set_a[i]))
                });
            if let Some(i) = candidate {
                set_a.swap(0, i);
            }
        }
    }
}

fn is_valid_cycle(members: &[&Participant], roster: &ValidatedRoster) -> bool {
    let n = members.len();
    if n < 3 || n != roster.len() {
        return false;
    }

    let distinct: HashSet<&Participant> = members.iter().copied().collect();
    if distinct.len() != n {
        return false;
    }

    (0..n).all(|i| {
        let giver = members[i];
        let receiver = members[(i + 1) % n];
        giver != receiver && !roster.are_partners(giver, receiver)
    })
}

/// Validates the input and draws a cycle.
///
/// Without a seed a fresh one is taken from the thread RNG.
pub fn build_cycle(
    participants: &[Participant],
    partner_pairs: &[PartnerPair],
    rng_seed: Option<u64>,
) -> Result<Cycle> {
    let roster = validate_roster(participants, partner_pairs)?;
    let seed = rng_seed.unwrap_or_else(rand::random);
    CycleBuilder::seeded(seed).build(&roster)
}
