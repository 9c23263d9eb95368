use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use horsecost_cli::config::Defaults;
use horsecost_core::Region;

/// Writes `contents` to a unique temp file and returns its path.
fn temp_config(
    name: &str,
    contents: &str,
) -> PathBuf {
    let path = std::env::temp_dir().join(format!("horsecost-{}-{}.toml", std::process::id(), name));
    fs::write(&path, contents).expect("failed to write temp config");
    path
}

#[test]
fn load_reads_an_explicit_config_file() {
    let path = temp_config("explicit", "region = \"south-east\"\ninflation_rate = 0.045\n");

    let defaults = Defaults::load(Some(&path)).expect("load failed");

    assert_eq!(defaults.region, Region::SouthEast);
    assert_eq!(defaults.inflation_rate, dec!(0.045));

    let _ = fs::remove_file(path);
}

#[test]
fn load_fails_for_a_missing_explicit_path() {
    let path = std::env::temp_dir().join("horsecost-definitely-not-here.toml");

    let result = Defaults::load(Some(&path));

    assert!(result.is_err());
}

#[test]
fn load_fails_for_an_invalid_region() {
    let path = temp_config("bad-region", "region = \"atlantis\"\n");

    let result = Defaults::load(Some(&path));

    assert!(result.is_err());

    let _ = fs::remove_file(path);
}

#[test]
fn partial_config_keeps_built_in_defaults_for_the_rest() {
    let path = temp_config("partial", "inflation_rate = 0.06\n");

    let defaults = Defaults::load(Some(&path)).expect("load failed");

    assert_eq!(defaults.region, Region::Average);
    assert_eq!(defaults.inflation_rate, dec!(0.06));

    let _ = fs::remove_file(path);
}
