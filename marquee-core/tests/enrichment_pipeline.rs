//! Behaviour of the enrichment pipeline against a scripted provider.

use std::sync::Arc;
use std::time::{Duration, Instant};

use marquee_core::providers::{ProviderListing, RegionAvailability};
use marquee_core::{
    CatalogError, EnrichmentOptions, EnrichmentPipeline, Genre, LookupStatus, ProviderError,
};

mod support;
use support::{CallCounts, FakeProvider, raw, standard_genres};

fn pipeline(provider: Arc<FakeProvider>, lookup_timeout: Duration) -> EnrichmentPipeline {
    EnrichmentPipeline::new(
        provider,
        EnrichmentOptions {
            region: "US".into(),
            lookup_timeout,
        },
    )
}

#[tokio::test]
async fn output_order_matches_input_despite_latency() {
    // Earlier entries finish last.
    let mut provider = FakeProvider::with_taxonomy(standard_genres());
    let mut entries = Vec::new();
    for id in 1..=8u64 {
        entries.push(raw(id, &format!("Movie {id}"), &[28]));
        provider = provider
            .director(id, &format!("Director {id}"))
            .subscription(id, vec![ProviderListing::new(id, "Service")])
            .latency(id, Duration::from_millis(10 * (9 - id)));
    }
    let expected: Vec<_> = entries.iter().map(|e| e.id).collect();

    let movies = pipeline(Arc::new(provider), Duration::from_secs(5))
        .enrich(entries)
        .await
        .expect("batch enriches");

    let ids: Vec<_> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, expected);
    for movie in &movies {
        assert_eq!(
            movie.director.as_deref(),
            Some(format!("Director {}", movie.id).as_str())
        );
        assert_eq!(movie.streaming_services[0].provider_id, movie.id);
    }
}

#[tokio::test]
async fn batch_lookups_overlap_instead_of_queueing() {
    // Both lookups of every entry sleep 200ms; serially that is 4s.
    let latency = Duration::from_millis(200);
    let mut provider = FakeProvider::with_taxonomy(standard_genres());
    let mut entries = Vec::new();
    for id in 1..=10u64 {
        entries.push(raw(id, &format!("Movie {id}"), &[18]));
        provider = provider
            .director(id, "Someone")
            .subscription(id, vec![ProviderListing::new(1, "Service")])
            .latency(id, latency);
    }
    let provider = Arc::new(provider);

    let started = Instant::now();
    let movies = pipeline(provider.clone(), Duration::from_secs(5))
        .enrich(entries)
        .await
        .expect("batch enriches");
    let elapsed = started.elapsed();

    assert_eq!(movies.len(), 10);
    assert_eq!(CallCounts::get(&provider.calls.credits), 10);
    assert_eq!(CallCounts::get(&provider.calls.watch_providers), 10);
    assert!(elapsed >= latency, "finished in {elapsed:?}");
    assert!(elapsed < latency * 5, "lookups ran serially: {elapsed:?}");
}

#[tokio::test]
async fn director_and_streaming_lookups_run_together() {
    let latency = Duration::from_millis(500);
    let provider = FakeProvider::with_taxonomy(standard_genres())
        .director(1, "Someone")
        .subscription(1, vec![ProviderListing::new(1, "Service")])
        .latency(1, latency);

    let started = Instant::now();
    let entries = pipeline(Arc::new(provider), Duration::from_secs(5))
        .enrich_entries(vec![raw(1, "Slow", &[18])])
        .await
        .expect("entry enriches");
    let elapsed = started.elapsed();

    assert_eq!(entries[0].director, LookupStatus::Resolved);
    assert_eq!(entries[0].streaming, LookupStatus::Resolved);
    assert!(elapsed < latency * 2 - Duration::from_millis(100), "took {elapsed:?}");
}

#[tokio::test]
async fn provider_listed_in_several_categories_appears_once() {
    let provider = FakeProvider::with_taxonomy(standard_genres())
        .director(1, "Someone")
        .regions(
            1,
            vec![(
                "US",
                RegionAvailability {
                    flatrate: Some(vec![ProviderListing::new(8, "Netflix")]),
                    rent: Some(vec![
                        ProviderListing::new(8, "Netflix"),
                        ProviderListing::new(2, "Apple TV"),
                    ]),
                    buy: Some(vec![
                        ProviderListing::new(2, "Apple TV"),
                        ProviderListing::new(8, "Netflix"),
                    ]),
                },
            )],
        );

    let movies = pipeline(Arc::new(provider), Duration::from_secs(1))
        .enrich(vec![raw(1, "Dup", &[18])])
        .await
        .expect("batch enriches");

    let ids: Vec<_> = movies[0]
        .streaming_services
        .iter()
        .map(|s| s.provider_id)
        .collect();
    assert_eq!(ids, vec![8, 2]);
}

#[tokio::test]
async fn failed_credits_lookup_only_clears_director() {
    let provider = FakeProvider::with_taxonomy(standard_genres())
        .director(1, "Kept Director")
        .subscription(1, vec![ProviderListing::new(3, "Mubi")])
        .subscription(2, vec![ProviderListing::new(4, "Max")]);
    let provider = Arc::new(provider);

    let entries = pipeline(provider.clone(), Duration::from_secs(1))
        .enrich_entries(vec![raw(1, "Fine", &[28]), raw(2, "No Credits", &[18, 80])])
        .await
        .expect("batch still succeeds");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].director, LookupStatus::Resolved);

    let degraded = &entries[1];
    assert_eq!(degraded.director, LookupStatus::Recovered);
    assert_eq!(degraded.streaming, LookupStatus::Resolved);
    assert_eq!(degraded.movie.director, None);
    assert_eq!(degraded.movie.title, "No Credits");
    assert_eq!(
        degraded.movie.genres,
        vec![Genre::new(18, "Drama"), Genre::new(80, "Crime")]
    );
    assert_eq!(degraded.movie.streaming_services.len(), 1);
    assert_eq!(degraded.movie.year(), 2001);
    assert_eq!(CallCounts::get(&provider.calls.genres), 1);
}

#[tokio::test]
async fn absent_director_is_distinct_from_failed_lookup() {
    let provider = FakeProvider::with_taxonomy(standard_genres())
        .no_director(1)
        .regions(1, Vec::new());

    let entries = pipeline(Arc::new(provider), Duration::from_secs(1))
        .enrich_entries(vec![raw(1, "Quiet", &[])])
        .await
        .expect("batch enriches");

    assert_eq!(entries[0].director, LookupStatus::Absent);
    assert_eq!(entries[0].streaming, LookupStatus::Absent);
    assert!(entries[0].movie.streaming_services.is_empty());
    assert_eq!(entries[0].movie.primary_genre(), "Unknown");
}

#[tokio::test]
async fn empty_batch_makes_no_calls() {
    let provider = Arc::new(FakeProvider::default());

    let movies = pipeline(provider.clone(), Duration::from_secs(1))
        .enrich(Vec::new())
        .await
        .expect("empty batch");

    assert!(movies.is_empty());
    assert_eq!(CallCounts::get(&provider.calls.genres), 0);
    assert_eq!(CallCounts::get(&provider.calls.credits), 0);
    assert_eq!(CallCounts::get(&provider.calls.watch_providers), 0);
}

#[tokio::test]
async fn taxonomy_failure_fails_the_batch() {
    let provider = FakeProvider::default().director(1, "Someone");

    let err = pipeline(Arc::new(provider), Duration::from_secs(1))
        .enrich(vec![raw(1, "Doomed", &[28])])
        .await
        .expect_err("taxonomy is required");

    assert!(matches!(err, CatalogError::Taxonomy(_)));
}

#[tokio::test]
async fn slow_lookups_time_out_and_degrade() {
    let provider = FakeProvider::with_taxonomy(standard_genres())
        .director(1, "Fast")
        .subscription(1, vec![ProviderListing::new(1, "Quick")])
        .director(2, "Slow")
        .subscription(2, vec![ProviderListing::new(2, "Sluggish")])
        .latency(2, Duration::from_millis(500));

    let entries = pipeline(Arc::new(provider), Duration::from_millis(50))
        .enrich_entries(vec![raw(1, "Fast", &[28]), raw(2, "Slow", &[28])])
        .await
        .expect("timeouts are recovered");

    assert_eq!(entries[0].director, LookupStatus::Resolved);
    assert_eq!(entries[1].director, LookupStatus::Recovered);
    assert_eq!(entries[1].streaming, LookupStatus::Recovered);
    assert_eq!(entries[1].movie.director, None);
    assert!(entries[1].movie.streaming_services.is_empty());
}

#[tokio::test]
async fn lookup_outcome_keeps_the_error() {
    let provider = FakeProvider::with_taxonomy(standard_genres());
    let outcome = pipeline(Arc::new(provider), Duration::from_secs(1))
        .lookup_director(42)
        .await;

    assert!(matches!(
        outcome,
        marquee_core::LookupOutcome::Failed(ProviderError::NotFound)
    ));
}
