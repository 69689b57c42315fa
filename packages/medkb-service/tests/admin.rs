use medkb_service::Error;
use medkb_testkit as testkit;

#[tokio::test]
async fn rebuild_reports_indexed_and_skipped_counts() {
	let cat = testkit::category("basics");
	let service = testkit::service_with(vec![cat.clone()], vec![
		testkit::entry(cat.category_id, "chemo", &[], "chemo basics"),
		testkit::entry(cat.category_id, "...", &[], "，。！"),
	])
	.await;
	let report = service.rebuild().await.expect("Expected rebuild to succeed.");

	assert_eq!(report.indexed, 1);
	assert_eq!(report.skipped, 1);
	assert_eq!(report.generation, 2);
}

#[tokio::test]
async fn upsert_rejects_blank_titles() {
	let cat = testkit::category("basics");
	let service = testkit::service_with(vec![cat.clone()], Vec::new()).await;
	let mut entry = testkit::entry(cat.category_id, "valid", &[], "body");

	entry.title = "   ".to_string();

	let result = service.upsert_entry(entry).await;

	assert!(matches!(result, Err(Error::Validation { .. })));
}

#[tokio::test]
async fn upsert_rejects_untokenizable_content() {
	let cat = testkit::category("basics");
	let service = testkit::service_with(vec![cat.clone()], Vec::new()).await;
	let result = service.upsert_entry(testkit::entry(cat.category_id, "...", &[], "，。")).await;

	assert!(matches!(result, Err(Error::Validation { .. })));
}

#[tokio::test]
async fn category_listing_counts_indexed_entries() {
	let care = testkit::category("care");
	let nutrition = testkit::category("nutrition");
	let service = testkit::service_with(vec![care.clone(), nutrition.clone()], vec![
		testkit::entry(care.category_id, "chemo", &[], "chemo"),
		testkit::entry(care.category_id, "fever", &[], "fever"),
		testkit::entry(nutrition.category_id, "diet", &[], "diet"),
	])
	.await;
	let categories = service.list_categories().expect("Expected listing to succeed.");

	assert_eq!(categories.len(), 2);
	assert_eq!(categories[0].name, "care");
	assert_eq!(categories[0].entry_count, 2);
	assert_eq!(categories[1].name, "nutrition");
	assert_eq!(categories[1].entry_count, 1);
}

#[tokio::test]
async fn category_browse_lists_entries_newest_first() {
	use time::{Duration, OffsetDateTime};

	let care = testkit::category("care");
	let nutrition = testkit::category("nutrition");
	let older = testkit::entry_at(
		care.category_id,
		"fever signs",
		&[],
		"call the clinic",
		OffsetDateTime::UNIX_EPOCH,
	);
	let newer = testkit::entry_at(
		care.category_id,
		"fever care",
		&[],
		"rest and fluids",
		OffsetDateTime::UNIX_EPOCH + Duration::days(1),
	);
	let newer_id = newer.entry_id;
	let older_id = older.entry_id;
	let service = testkit::service_with(vec![care.clone(), nutrition.clone()], vec![
		older,
		newer,
		testkit::entry(nutrition.category_id, "diet", &[], "diet plan"),
	])
	.await;
	let entries = service.browse_category(care.category_id).expect("Expected browse to succeed.");
	let ids: Vec<_> = entries.iter().map(|entry| entry.entry_id).collect();

	assert_eq!(ids, vec![newer_id, older_id]);

	let result = service.browse_category(uuid::Uuid::new_v4());

	assert!(matches!(result, Err(Error::Validation { .. })));
}

#[tokio::test]
async fn popular_keywords_order_by_count_then_keyword() {
	let care = testkit::category("care");
	let nutrition = testkit::category("nutrition");
	let service = testkit::service_with(vec![care.clone(), nutrition.clone()], vec![
		testkit::entry(care.category_id, "chemo notes", &["化疗", "感染"], "body"),
		testkit::entry(care.category_id, "chemo care", &["化疗"], "body"),
		testkit::entry(nutrition.category_id, "diet", &["饮食"], "body"),
	])
	.await;
	let keywords = service.popular_keywords(10).expect("Expected listing to succeed.");

	assert_eq!(keywords[0].keyword, "化疗");
	assert_eq!(keywords[0].count, 2);
	assert_eq!(keywords[0].primary_category.as_deref(), Some("care"));
	assert_eq!(keywords[1].count, 1);
	assert!(keywords[1].keyword < keywords[2].keyword);
}

#[tokio::test]
async fn stats_expose_generation_and_counts() {
	let care = testkit::category("care");
	let archived = testkit::inactive_category("archived");
	let service = testkit::service_with(vec![care.clone(), archived], vec![testkit::entry(
		care.category_id,
		"chemo",
		&[],
		"chemo",
	)])
	.await;
	let stats = service.stats().expect("Expected stats to succeed.");

	assert_eq!(stats.generation, 1);
	assert_eq!(stats.entry_count, 1);
	assert_eq!(stats.category_count, 2);
	assert_eq!(stats.active_category_count, 1);
	assert_eq!(stats.skipped, 0);
}

#[tokio::test]
async fn listings_fail_fast_before_the_first_build() {
	let service = testkit::cold_service_with(Vec::new(), Vec::new()).await;

	assert!(matches!(service.list_categories(), Err(Error::IndexUnavailable)));
	assert!(matches!(service.popular_keywords(5), Err(Error::IndexUnavailable)));
	assert!(matches!(service.stats(), Err(Error::IndexUnavailable)));
}
