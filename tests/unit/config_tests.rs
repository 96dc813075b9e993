use std::path::PathBuf;

use learnhub::catalog::SortKey;
use learnhub::cli::OutputFormat;
use learnhub::config::Config;
use learnhub::test_utils::fixtures::UnitTestFixture;

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn storefront_fixture_loads() {
    let config = Config::load(Some(&fixture_path("tests/fixtures/configs/storefront.toml"))).unwrap();
    assert_eq!(config.catalog.default_sort, SortKey::Rating);
    assert_eq!(config.catalog.featured_count, 2);
    assert_eq!(config.catalog.related_count, 1);
    assert!((config.checkout.tax_rate - 0.08).abs() < 1e-9);
    assert_eq!(config.output.format, OutputFormat::Plain);
}

#[test]
fn absent_explicit_file_is_missing_config() {
    let fixture = UnitTestFixture::new();
    let err = Config::load(Some(&fixture.data_path.join("nope.toml"))).unwrap_err();
    assert_eq!(err.code(), "missing_config");
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn empty_explicit_file_keeps_defaults() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_file("config.toml", "");
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.catalog.default_sort, SortKey::Popularity);
    assert_eq!(config.catalog.featured_count, 3);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_file("config.toml", "[output]\nformat = \"jsonl\"\n");
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.output.format, OutputFormat::Jsonl);
    assert_eq!(config.catalog.related_count, 3);
    assert!((config.checkout.tax_rate - 0.10).abs() < 1e-9);
}

#[test]
fn unknown_sort_in_file_is_config_error() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_file("config.toml", "[catalog]\ndefault_sort = \"cheapest\"\n");
    let err = Config::load(Some(&path)).unwrap_err();
    assert_eq!(err.code(), "config_error");
}

#[test]
fn tax_rate_of_one_is_rejected() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_file("config.toml", "[checkout]\ntax_rate = 1.0\n");
    assert!(Config::load(Some(&path)).is_err());
}
