use crate::error::*;
use crate::format_spec::FormatSpec;
use crate::types::*;

fn build(options: FormatOptions) -> FormatSpec {
    FormatSpec::new(options).unwrap()
}

#[test]
fn test_default_markers() {
    let result = build(FormatOptions::default());
    assert_eq!(result.markers().mark, ".");
    assert_eq!(result.markers().negative, "-");
    assert_eq!(result.markers().negative_before, "");
    assert_eq!(result.decimals(), None);
}

#[test]
fn test_mark_defaults_to_comma_when_thousand_is_dot() {
    let result = build(FormatOptions {
        thousand: Some(".".to_string()),
        ..FormatOptions::default()
    });
    assert_eq!(result.markers().mark, ",");
}

#[test]
fn test_negative_default_depends_on_negative_before() {
    let result = build(FormatOptions {
        negative_before: Some("(".to_string()),
        ..FormatOptions::default()
    });
    assert_eq!(result.markers().negative, "");

    let result = build(FormatOptions {
        negative_before: Some(String::new()),
        ..FormatOptions::default()
    });
    assert_eq!(result.markers().negative, "-");
}

#[test]
fn test_decimals_out_of_range() {
    assert_eq!(
        FormatSpec::new(FormatOptions::with_decimals(8)).unwrap_err(),
        ConfigError::DecimalsOutOfRange { decimals: 8 }
    );
    assert!(FormatSpec::new(FormatOptions::with_decimals(7)).is_ok());
    assert!(FormatSpec::new(FormatOptions::with_decimals(0)).is_ok());
}

#[test]
fn test_separator_conflicts() {
    let err = FormatSpec::new(FormatOptions {
        mark: Some(",".to_string()),
        thousand: Some(",".to_string()),
        ..FormatOptions::default()
    })
    .unwrap_err();
    assert_eq!(err, ConfigError::AmbiguousSeparators(",".to_string()));

    let err = FormatSpec::new(FormatOptions {
        mark: Some(String::new()),
        ..FormatOptions::default()
    })
    .unwrap_err();
    assert_eq!(err, ConfigError::EmptyMark);
}

#[test]
fn test_options_from_toml() {
    let result = FormatSpec::from_toml_str(
        r#"
        decimals = 1
        thousand = " "
        suffix = " km"
        negativeBefore = "minus "
        "#,
    )
    .unwrap();
    assert_eq!(result.to(-12345.67).unwrap(), "minus 12 345.7 km");
    assert_eq!(result.from("minus 12 345.7 km").unwrap(), -12345.7);
}

#[test]
fn test_toml_rejects_hooks_and_bad_decimals() {
    assert!(matches!(
        FormatSpec::from_toml_str("encoder = \"x * 2\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        FormatSpec::from_toml_str("decimals = 9"),
        Err(ConfigError::DecimalsOutOfRange { decimals: 9 })
    ));
    assert!(matches!(
        FormatSpec::from_toml_str("decimals = -1"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_toml_file() {
    let err = FormatSpec::from_toml_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_preset_lookup() {
    let usd = FormatSpec::preset("usd").unwrap();
    assert_eq!(usd.to(1234.5).unwrap(), "$1,234.50");
    assert_eq!(
        FormatSpec::preset("nope").unwrap_err(),
        ConfigError::UnknownPreset("nope".to_string())
    );
}

#[test]
fn test_hooks_are_shown_in_debug() {
    let result = build(FormatOptions::default()).with_encoder(|x| x * 2.0);
    let debug = format!("{result:?}");
    assert!(debug.contains("encoder: true"));
    assert!(debug.contains("decoder: false"));
}

#[test]
fn test_decoder_non_finite() {
    let result = build(FormatOptions::default()).with_decoder(|x| x / 0.0);
    assert_eq!(
        result.from("1"),
        Err(FormatError::NonFinite {
            value: f64::INFINITY
        })
    );
}
