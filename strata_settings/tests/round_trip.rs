//! Round-trip guarantees between the loader and the serializer.

use anyhow::{Result, ensure};
use rstest::rstest;
use serde_yaml::Mapping;
use strata_settings::Settings;

fn mapping(text: &str) -> Result<Mapping> {
    serde_yaml::from_str(text).map_err(Into::into)
}

#[rstest]
#[case::scalars("{name: loadtest, workers: 4, verbose: true}", "{}")]
#[case::nested_maps("{lms: {host: localhost, ports: {http: 80, https: 443}}}", "{}")]
#[case::sequences("{courses: [demo, full], weights: [1, 2, 3]}", "{}")]
#[case::with_secrets("{BASE_URL: 'http://localhost'}", "{PASSWORD: hunter2, TOKENS: [a, b]}")]
#[case::null_values("{optional: null}", "{}")]
#[case::numeric_looking_strings("{version: '1.10', flag: 'yes'}", "{}")]
fn dump_then_parse_reproduces_the_document(
    #[case] public: &str,
    #[case] secret: &str,
) -> Result<()> {
    let original = Settings::new(mapping(public)?, mapping(secret)?);
    let reparsed = Settings::parse(&original.dump()?)?;
    ensure!(reparsed == original, "round trip diverged for {public} / {secret}");
    Ok(())
}

#[rstest]
fn empty_document_round_trips() -> Result<()> {
    let original = Settings::default();
    ensure!(Settings::parse(&original.dump()?)? == original);
    Ok(())
}

#[rstest]
fn merged_output_is_valid_loader_input() -> Result<()> {
    let low = Settings::parse("---\na: {x: 1, y: 2}\n---\nsecret_a: 1\n")?;
    let high = Settings::parse("---\na: {x: 10}\nb: 3\n")?;
    let merged = Settings::merged([&low, &high]);
    let reparsed = Settings::parse(&merged.dump()?)?;
    ensure!(reparsed == merged);
    ensure!(reparsed.public() == &mapping("{a: {x: 10, y: 2}, b: 3}")?);
    ensure!(reparsed.secret() == &mapping("{secret_a: 1}")?);
    Ok(())
}
