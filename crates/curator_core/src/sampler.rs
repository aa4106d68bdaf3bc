//! crates/curator_core/src/sampler.rs
//!
//! Produces qualifying artworks for a mood: search the catalogue term by
//! term, shuffle, fetch a bounded pool of candidates, and keep the ones the
//! validator accepts.

use crate::domain::{Artwork, Mood};
use crate::moods::mood_profile;
use crate::ports::CatalogueService;
use crate::validator;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Upper bound on candidate records fetched per search term. Caps network
/// cost against the catalogue's large, noisy result lists.
const CANDIDATES_PER_TERM: usize = 10;

/// The injected randomness source shared by sampling and reply selection.
/// Locked only for synchronous work, never across an await.
pub type SharedRng = Arc<Mutex<StdRng>>;

/// An RNG seeded from ambient entropy, for production wiring.
pub fn entropy_rng() -> SharedRng {
    Arc::new(Mutex::new(StdRng::from_entropy()))
}

/// A deterministically seeded RNG, for tests.
pub fn seeded_rng(seed: u64) -> SharedRng {
    Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))
}

/// Samples validated artworks for a mood from the catalogue.
#[derive(Clone)]
pub struct ArtworkSampler {
    catalogue: Arc<dyn CatalogueService>,
    rng: SharedRng,
}

impl ArtworkSampler {
    pub fn new(catalogue: Arc<dyn CatalogueService>, rng: SharedRng) -> Self {
        Self { catalogue, rng }
    }

    /// Returns up to `count` validated artworks for `mood` — fewer when the
    /// catalogue yields too few valid hits.
    ///
    /// Terms are tried in profile order; per term the id list is shuffled and
    /// the first `CANDIDATES_PER_TERM` are fetched one at a time. A failed
    /// search or fetch is treated exactly like a failed validation: the
    /// candidate is skipped and sampling continues. Identifiers are not
    /// deduplicated across terms, so the same artwork can appear twice.
    pub async fn sample(&self, mood: Mood, count: usize) -> Vec<Artwork> {
        let profile = mood_profile(mood);
        let mut accepted: Vec<Artwork> = Vec::new();

        for term in profile.terms {
            if accepted.len() >= count {
                break;
            }

            let ids = match self.catalogue.search(term).await {
                Ok(ids) => ids,
                Err(err) => {
                    warn!(term = %term, error = %err, "catalogue search failed, skipping term");
                    continue;
                }
            };

            let candidates = {
                let mut ids = ids;
                let mut rng = self.rng.lock().expect("rng lock poisoned");
                ids.shuffle(&mut *rng);
                ids.truncate(CANDIDATES_PER_TERM);
                ids
            };

            for object_id in candidates {
                if accepted.len() >= count {
                    break;
                }

                let record = match self.catalogue.fetch_object(object_id).await {
                    Ok(record) => record,
                    Err(err) => {
                        debug!(object_id, error = %err, "catalogue fetch failed, skipping candidate");
                        None
                    }
                };

                match record.and_then(validator::validate) {
                    Some(artwork) => accepted.push(artwork),
                    None => debug!(object_id, "candidate rejected"),
                }
            }
        }

        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogueRecord;
    use crate::ports::{PortError, PortResult};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeCatalogue {
        ids: Vec<u64>,
        records: HashMap<u64, CatalogueRecord>,
        failing_ids: Vec<u64>,
        fail_search: bool,
        fetches: AtomicUsize,
    }

    impl FakeCatalogue {
        fn new(ids: Vec<u64>, records: Vec<CatalogueRecord>) -> Self {
            Self {
                ids,
                records: records
                    .into_iter()
                    .map(|record| (record.object_id, record))
                    .collect(),
                failing_ids: Vec::new(),
                fail_search: false,
                fetches: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CatalogueService for FakeCatalogue {
        async fn search(&self, _keyword: &str) -> PortResult<Vec<u64>> {
            if self.fail_search {
                return Err(PortError::Unexpected("search down".to_string()));
            }
            Ok(self.ids.clone())
        }

        async fn fetch_object(&self, object_id: u64) -> PortResult<Option<CatalogueRecord>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.failing_ids.contains(&object_id) {
                return Err(PortError::Timeout("object fetch".to_string()));
            }
            Ok(self.records.get(&object_id).cloned())
        }
    }

    fn painting(object_id: u64) -> CatalogueRecord {
        CatalogueRecord {
            object_id,
            title: Some(format!("Painting {object_id}")),
            primary_image: Some(format!("https://images.example/{object_id}.jpg")),
            is_public_domain: Some(true),
            department: Some("European Paintings".to_string()),
            medium: Some("Oil on canvas".to_string()),
            ..CatalogueRecord::default()
        }
    }

    #[tokio::test]
    async fn never_exceeds_requested_count() {
        let ids: Vec<u64> = (1..=8).collect();
        let records = ids.iter().map(|id| painting(*id)).collect();
        let catalogue = Arc::new(FakeCatalogue::new(ids, records));
        let sampler = ArtworkSampler::new(catalogue, seeded_rng(7));

        let artworks = sampler.sample(Mood::Happy, 3).await;
        assert_eq!(artworks.len(), 3);
    }

    #[tokio::test]
    async fn skips_invalid_and_erroring_candidates() {
        // 1 and 4 validate; 2 has no image; 3 errors on fetch.
        let mut no_image = painting(2);
        no_image.primary_image = None;
        let mut catalogue =
            FakeCatalogue::new(vec![1, 2, 3, 4], vec![painting(1), no_image, painting(4)]);
        catalogue.failing_ids = vec![3];
        let sampler = ArtworkSampler::new(Arc::new(catalogue), seeded_rng(7));

        let artworks = sampler.sample(Mood::Peaceful, 2).await;
        let mut ids: Vec<u64> = artworks.iter().map(|artwork| artwork.object_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 4]);
    }

    #[tokio::test]
    async fn fetches_at_most_ten_candidates_per_term() {
        // Every record is missing its image, so sampling exhausts all terms.
        let ids: Vec<u64> = (0..50).collect();
        let records = ids
            .iter()
            .map(|id| {
                let mut record = painting(*id);
                record.primary_image = None;
                record
            })
            .collect();
        let catalogue = Arc::new(FakeCatalogue::new(ids, records));
        let sampler = ArtworkSampler::new(catalogue.clone(), seeded_rng(7));

        let artworks = sampler.sample(Mood::Happy, 1).await;
        assert!(artworks.is_empty());

        let term_count = mood_profile(Mood::Happy).terms.len();
        assert_eq!(
            catalogue.fetches.load(Ordering::SeqCst),
            CANDIDATES_PER_TERM * term_count
        );
    }

    #[tokio::test]
    async fn degrades_to_empty_when_search_fails() {
        let mut catalogue = FakeCatalogue::new(vec![1], vec![painting(1)]);
        catalogue.fail_search = true;
        let sampler = ArtworkSampler::new(Arc::new(catalogue), seeded_rng(7));

        assert!(sampler.sample(Mood::Sad, 3).await.is_empty());
    }

    #[tokio::test]
    async fn duplicate_ids_across_terms_are_preserved() {
        // The fake returns the same single id for every term, so a request
        // for more than one artwork collects the same piece repeatedly.
        let catalogue = Arc::new(FakeCatalogue::new(vec![9], vec![painting(9)]));
        let sampler = ArtworkSampler::new(catalogue, seeded_rng(7));

        let artworks = sampler.sample(Mood::Inspired, 3).await;
        assert_eq!(artworks.len(), 3);
        assert!(artworks.iter().all(|artwork| artwork.object_id == 9));
    }
}
