//! Tests for config mode selection

use confscope_domain::ConfigMode;

#[test]
fn test_from_param_recognized_values() {
    assert_eq!(ConfigMode::from_param(Some("diff")), ConfigMode::Diff);
    assert_eq!(ConfigMode::from_param(Some("defaults")), ConfigMode::Defaults);
    assert_eq!(ConfigMode::from_param(Some("")), ConfigMode::Full);
    assert_eq!(ConfigMode::from_param(None), ConfigMode::Full);
}

#[test]
fn test_from_param_unknown_falls_back_to_full() {
    assert_eq!(ConfigMode::from_param(Some("everything")), ConfigMode::Full);
    // Query values are matched exactly
    assert_eq!(ConfigMode::from_param(Some("DIFF")), ConfigMode::Full);
}

#[test]
fn test_from_str_is_strict() {
    assert_eq!("full".parse::<ConfigMode>(), Ok(ConfigMode::Full));
    assert_eq!("Diff".parse::<ConfigMode>(), Ok(ConfigMode::Diff));
    assert_eq!("defaults".parse::<ConfigMode>(), Ok(ConfigMode::Defaults));
    assert!("everything".parse::<ConfigMode>().is_err());
}

#[test]
fn test_param_round_trip() {
    for mode in [ConfigMode::Full, ConfigMode::Defaults, ConfigMode::Diff] {
        assert_eq!(ConfigMode::from_param(Some(mode.as_param())), mode);
    }
    assert_eq!(ConfigMode::Full.to_string(), "full");
    assert_eq!(ConfigMode::Diff.to_string(), "diff");
}
