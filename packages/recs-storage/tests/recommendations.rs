use std::{collections::HashMap, sync::Arc, thread};

use recs_storage::{
	Error, RecommendationIndex, RecommendationSource, RequestStats, snapshot::Table,
};

fn sample_index() -> RecommendationIndex {
	RecommendationIndex::new(HashMap::from([(7, vec![70, 71, 72, 73])]), vec![1, 2, 3, 4, 5])
}

#[test]
fn unseen_user_gets_default_prefix_and_default_hit() {
	let index = sample_index();

	assert_eq!(index.lookup(999, 3), vec![1, 2, 3]);
	assert_eq!(
		index.stats(),
		RequestStats { request_personal_count: 0, request_default_count: 1 }
	);
}

#[test]
fn known_user_gets_personal_prefix_and_personal_hit() {
	let index = sample_index();

	assert_eq!(index.lookup_with_source(7, 2), (vec![70, 71], RecommendationSource::Personal));
	assert_eq!(
		index.stats(),
		RequestStats { request_personal_count: 1, request_default_count: 0 }
	);
}

#[test]
fn zero_k_still_counts_the_lookup() {
	let index = sample_index();

	assert!(index.lookup(7, 0).is_empty());
	assert!(index.lookup(8, 0).is_empty());
	assert_eq!(index.stats().total(), 2);
}

#[test]
fn stats_sum_matches_concurrent_lookups() {
	let index = Arc::new(sample_index());
	let mut last = RequestStats::default();

	thread::scope(|scope| {
		for worker in 0..4_i64 {
			let index = Arc::clone(&index);

			scope.spawn(move || {
				for n in 0..250_i64 {
					let user_id = if n % 2 == 0 { 7 } else { worker + 100 };

					index.lookup(user_id, 3);
				}
			});
		}

		for _ in 0..50 {
			let now = index.stats();

			assert!(now.request_personal_count >= last.request_personal_count);
			assert!(now.request_default_count >= last.request_default_count);

			last = now;
		}
	});

	assert_eq!(
		index.stats(),
		RequestStats { request_personal_count: 500, request_default_count: 500 }
	);
}

#[test]
fn personal_rows_keep_row_order_without_rank() {
	let personal = Table::parse("personal", r#"{"user_id": [1, 2, 1], "item_id": [30, 40, 10]}"#)
		.expect("Failed to parse personal table.");
	let default =
		Table::parse("default", r#"{"item_id": [9, 8]}"#).expect("Failed to parse default table.");
	let index = RecommendationIndex::from_tables(&personal, &default)
		.expect("Failed to build recommendation index.");

	assert!(index.has_personal(1));
	assert!(!index.has_personal(3));
	assert_eq!(index.lookup(1, 10), vec![30, 10]);
	assert_eq!(index.lookup(2, 10), vec![40]);
	assert_eq!(index.lookup(3, 10), vec![9, 8]);
	assert_eq!(index.personal_user_count(), 2);
	assert_eq!(index.default_len(), 2);
}

#[test]
fn personal_rows_follow_rank_column() {
	let personal = Table::parse(
		"personal",
		r#"{"user_id": [1, 1, 1], "item_id": [30, 10, 20], "rank": [3, 1, 2]}"#,
	)
	.expect("Failed to parse personal table.");
	let default =
		Table::parse("default", r#"{"item_id": []}"#).expect("Failed to parse default table.");
	let index = RecommendationIndex::from_tables(&personal, &default)
		.expect("Failed to build recommendation index.");

	assert_eq!(index.lookup(1, 10), vec![10, 20, 30]);
	assert!(index.lookup(2, 10).is_empty());
}

#[test]
fn rejects_default_table_without_item_column() {
	let personal = Table::parse("personal", r#"{"user_id": [], "item_id": []}"#)
		.expect("Failed to parse personal table.");
	let default =
		Table::parse("default", r#"{"track_id": [1]}"#).expect("Failed to parse default table.");

	assert!(matches!(
		RecommendationIndex::from_tables(&personal, &default),
		Err(Error::MissingColumn { table: "default", column: "item_id" })
	));
}
