//! Invariants of the list pipeline and aggregates over arbitrary catalogs.

use proptest::prelude::*;
use trek_catalog::{Catalog, SortKey, Trail, TrailQuery};

const REGIONS: [&str; 4] = ["Khumbu", "Annapurna", "Langtang", "Mustang"];
const DIFFICULTIES: [&str; 4] = ["easy", "moderate", "hard", "expert"];

fn arb_trail() -> impl Strategy<Value = Trail> {
    (
        0..REGIONS.len(),
        0..DIFFICULTIES.len(),
        1u32..30,
        1u32..300,
        0u32..50,
        0u64..5000,
    )
        .prop_map(|(region, difficulty, days, distance, rating, reviews)| Trail {
            name: format!("{} Trek", REGIONS[region]),
            region: REGIONS[region].to_string(),
            difficulty: DIFFICULTIES[difficulty].to_string(),
            duration_days: days,
            distance_km: f64::from(distance),
            max_elevation_m: 2000.0 + f64::from(distance) * 10.0,
            rating: f64::from(rating) / 10.0,
            review_count: reviews,
            ..Default::default()
        })
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arb_trail(), 0..40).prop_map(|trails| {
        let trails = trails
            .into_iter()
            .enumerate()
            .map(|(i, mut t)| {
                t.id = format!("trail-{}", i);
                t
            })
            .collect();
        Catalog::from_trails(trails).unwrap()
    })
}

fn arb_query() -> impl Strategy<Value = TrailQuery> {
    (
        prop::option::of(prop::sample::select(vec!["khumbu", "ANNA", "trek", "zzz"])),
        prop::option::of(prop::sample::select(vec!["all", "easy", "hard", "expert"])),
        prop::option::of(prop::sample::select(vec!["khu", "lang", "Mustang"])),
        prop::option::of(0u32..30),
        prop::option::of(prop::sample::select(SortKey::ALL.to_vec())),
        0usize..=100,
        0usize..60,
    )
        .prop_map(|(q, difficulty, region, max_days, sort_by, limit, offset)| {
            let mut query = TrailQuery::new().limit(limit).offset(offset);
            query.q = q.map(String::from);
            query.difficulty = difficulty.map(String::from);
            query.region = region.map(String::from);
            query.max_days = max_days;
            query.sort_by = sort_by;
            query
        })
}

fn matches(trail: &Trail, query: &TrailQuery) -> bool {
    let text_ok = query.q.as_ref().map_or(true, |q| {
        let q = q.to_lowercase();
        trail.name.to_lowercase().contains(&q)
            || trail.region.to_lowercase().contains(&q)
            || trail.tags.iter().any(|t| t.to_lowercase().contains(&q))
    });
    let difficulty_ok = query
        .difficulty
        .as_ref()
        .map_or(true, |d| d == "all" || &trail.difficulty == d);
    let region_ok = query.region.as_ref().map_or(true, |r| {
        trail.region.to_lowercase().contains(&r.to_lowercase())
    });
    let days_ok = query.max_days.map_or(true, |d| trail.duration_days <= d);
    text_ok && difficulty_ok && region_ok && days_ok
}

proptest! {
    #[test]
    fn total_counts_every_match(catalog in arb_catalog(), query in arb_query()) {
        let page = catalog.list(&query);
        let expected = catalog.trails().iter().filter(|t| matches(t, &query)).count();
        prop_assert_eq!(page.total, expected);
        prop_assert!(page.trails.iter().all(|t| matches(t, &query)));
    }

    #[test]
    fn page_length_is_bounded(catalog in arb_catalog(), query in arb_query()) {
        let page = catalog.list(&query);
        let expected = query.limit.min(page.total.saturating_sub(query.offset));
        prop_assert_eq!(page.len(), expected);
    }

    #[test]
    fn rating_order_is_global(catalog in arb_catalog(), query in arb_query()) {
        let full = catalog.list(&query.clone().sort_by(SortKey::Rating).limit(100).offset(0));
        prop_assert!(full.trails.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn listing_is_idempotent(catalog in arb_catalog(), query in arb_query()) {
        prop_assert_eq!(catalog.list(&query), catalog.list(&query));
    }

    #[test]
    fn regions_strictly_ascending(catalog in arb_catalog()) {
        let regions = catalog.list_regions();
        prop_assert!(regions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn stats_sum_to_len(catalog in arb_catalog()) {
        let sum: usize = catalog.difficulty_stats().values().sum();
        prop_assert_eq!(sum, catalog.len());
        prop_assert!(catalog.difficulty_stats().values().all(|&n| n > 0));
    }
}
