use medkb_config::{Config, Error};

fn base_toml() -> String {
	r#"
[service]
http_bind  = "127.0.0.1:8080"
admin_bind = "127.0.0.1:8081"
log_level  = "info"

[index]
refresh_interval_secs = 300

[search]
default_limit = 10
max_limit     = 100

[search.cache]
enabled  = true
ttl_secs = 600

[ranking]
title_weight        = 3.0
keyword_weight      = 2.0
body_weight         = 1.0
body_occurrence_cap = 5
"#
	.to_string()
}

fn parse(raw: &str) -> Config {
	toml::from_str(raw).expect("Expected parseable config.")
}

#[test]
fn accepts_baseline_config() {
	let cfg = parse(&base_toml());

	medkb_config::validate(&cfg).expect("Expected valid config.");
	assert_eq!(cfg.search.default_limit, 10);
	assert_eq!(cfg.ranking.body_occurrence_cap, 5);
}

#[test]
fn defaults_fill_optional_keys() {
	let cfg = parse(&base_toml());

	assert_eq!(cfg.index.retry_backoff_base_ms, 500);
	assert_eq!(cfg.index.retry_backoff_max_ms, 30_000);
	assert_eq!(cfg.search.preview_chars, 120);
	assert_eq!(cfg.search.history_size, 10);
}

#[test]
fn rejects_inverted_field_priority() {
	let raw = base_toml().replace("title_weight        = 3.0", "title_weight        = 1.5");
	let cfg = parse(&raw);
	let err = medkb_config::validate(&cfg).expect_err("Expected validation failure.");

	assert!(matches!(err, Error::Validation { ref message }
		if message.contains("ranking.title_weight")));
}

#[test]
fn rejects_zero_occurrence_cap() {
	let raw = base_toml().replace("body_occurrence_cap = 5", "body_occurrence_cap = 0");
	let cfg = parse(&raw);

	assert!(medkb_config::validate(&cfg).is_err());
}

#[test]
fn rejects_default_limit_above_max() {
	let raw = base_toml().replace("default_limit = 10", "default_limit = 200");
	let cfg = parse(&raw);

	assert!(medkb_config::validate(&cfg).is_err());
}

#[test]
fn rejects_zero_cache_ttl() {
	let raw = base_toml().replace("ttl_secs = 600", "ttl_secs = 0");
	let cfg = parse(&raw);

	assert!(medkb_config::validate(&cfg).is_err());
}

#[test]
fn rejects_backoff_max_below_base() {
	let raw = base_toml().replace(
		"refresh_interval_secs = 300",
		"refresh_interval_secs = 300\nretry_backoff_base_ms = 1000\nretry_backoff_max_ms = 100",
	);
	let cfg = parse(&raw);

	assert!(medkb_config::validate(&cfg).is_err());
}
