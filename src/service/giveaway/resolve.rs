//! Giveaway resolution.

use std::collections::BTreeSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    data::giveaway::GiveawayRepository,
    error::AppError,
    model::giveaway::{Giveaway, GiveawayOutcome, Resolution, ENTRY_EMOJI},
};

use super::GiveawayService;

impl<'a> GiveawayService<'a> {
    /// Resolves a giveaway, drawing with OS entropy.
    pub async fn resolve(&self, id: i32) -> Result<Option<Resolution>, AppError> {
        let mut rng = StdRng::from_os_rng();
        self.resolve_with_rng(id, &mut rng).await
    }

    /// Resolves a giveaway, idempotently.
    ///
    /// A forced winner wins outright, including one set while reactions are being
    /// fetched. Otherwise winners are drawn uniformly without replacement from the
    /// non-bot reactors until `winners_count` are chosen or the pool runs out. Only the call that flips `ended` publishes the result; every
    /// other call returns the stored winners and emits nothing.
    ///
    /// # Returns
    /// - `Ok(Some(Resolution))` - The outcome and whether this call resolved it
    /// - `Ok(None)` - No giveaway with that id
    /// - `Err(AppError)` - Database failure; platform failures are only logged
    pub async fn resolve_with_rng<R: Rng + ?Sized>(
        &self,
        id: i32,
        rng: &mut R,
    ) -> Result<Option<Resolution>, AppError> {
        let repo = GiveawayRepository::new(self.db);

        let Some(giveaway) = repo.find_by_id(id).await? else {
            tracing::debug!("Giveaway {} no longer exists, skipping resolution", id);
            return Ok(None);
        };

        if giveaway.ended {
            return Ok(Some(Resolution {
                outcome: GiveawayOutcome::from_winners(giveaway.winners.unwrap_or_default()),
                newly_resolved: false,
            }));
        }

        let (winners, closed) = match giveaway.forced_winner {
            Some(forced) => (vec![forced], repo.mark_ended(id, &[forced]).await?),
            None => {
                let participants = self.collect_participants(&giveaway).await;
                let drawn = draw_winners(participants, giveaway.winners_count as usize, rng);

                if repo.mark_drawn(id, &drawn).await? {
                    (drawn, true)
                } else {
                    // An override may have landed while reactions were being fetched
                    match repo.find_by_id(id).await? {
                        Some(Giveaway {
                            ended: false,
                            forced_winner: Some(forced),
                            ..
                        }) => {
                            tracing::debug!(
                                "Giveaway {} was overridden during resolution, using forced winner",
                                id
                            );
                            (vec![forced], repo.mark_ended(id, &[forced]).await?)
                        }
                        _ => (drawn, false),
                    }
                }
            }
        };

        if !closed {
            tracing::debug!("Giveaway {} was resolved concurrently", id);

            let stored = repo
                .find_by_id(id)
                .await?
                .and_then(|g| g.winners)
                .unwrap_or_default();

            return Ok(Some(Resolution {
                outcome: GiveawayOutcome::from_winners(stored),
                newly_resolved: false,
            }));
        }

        let outcome = GiveawayOutcome::from_winners(winners);

        if let Err(e) = self.platform.publish_outcome(&giveaway, &outcome).await {
            tracing::error!("Failed to publish outcome of giveaway {}: {}", id, e);
        }
        if let Err(e) = self.platform.edit_message(&giveaway, &outcome).await {
            tracing::error!("Failed to edit announcement of giveaway {}: {}", id, e);
        }

        tracing::info!(
            "Giveaway {} resolved with {} winner(s)",
            id,
            outcome.winners().len()
        );

        Ok(Some(Resolution {
            outcome,
            newly_resolved: true,
        }))
    }

    /// Distinct non-bot reactors, or nobody if the platform fails or times out.
    async fn collect_participants(&self, giveaway: &Giveaway) -> Vec<u64> {
        let fetch = self.platform.fetch_reactors(
            giveaway.channel_id,
            giveaway.message_id,
            ENTRY_EMOJI,
        );

        let reactors = match tokio::time::timeout(self.reaction_timeout, fetch).await {
            Ok(Ok(reactors)) => reactors,
            Ok(Err(e)) => {
                tracing::warn!(
                    "Failed to fetch reactions for giveaway {}: {}",
                    giveaway.id,
                    e
                );
                return Vec::new();
            }
            Err(_) => {
                tracing::warn!(
                    "Fetching reactions for giveaway {} timed out after {:?}",
                    giveaway.id,
                    self.reaction_timeout
                );
                return Vec::new();
            }
        };

        reactors
            .into_iter()
            .filter(|reactor| !reactor.bot)
            .map(|reactor| reactor.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Draws up to `count` distinct winners uniformly without replacement.
pub fn draw_winners<R: Rng + ?Sized>(mut pool: Vec<u64>, count: usize, rng: &mut R) -> Vec<u64> {
    let mut winners = Vec::with_capacity(count.min(pool.len()));

    while winners.len() < count && !pool.is_empty() {
        let index = rng.random_range(0..pool.len());
        winners.push(pool.swap_remove(index));
    }

    winners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_everyone_when_pool_is_small() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut winners = draw_winners(vec![1, 2], 3, &mut rng);
        winners.sort();
        assert_eq!(winners, vec![1, 2]);
    }

    #[test]
    fn never_repeats_a_winner() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let winners = draw_winners((1..=10).collect(), 4, &mut rng);
            let distinct: BTreeSet<_> = winners.iter().collect();
            assert_eq!(winners.len(), 4);
            assert_eq!(distinct.len(), 4);
        }
    }

    #[test]
    fn empty_pool_draws_nobody() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(draw_winners(Vec::new(), 2, &mut rng).is_empty());
    }
}
