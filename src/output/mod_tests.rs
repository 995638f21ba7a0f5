use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_rejects_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: sarif");
}

#[test]
fn output_format_defaults_to_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn formatter_for_json_emits_json() {
    let report = CheckReport::new(0, Vec::new());
    let formatter = formatter_for(OutputFormat::Json, ColorMode::Never, None);

    let output = formatter.format_check(&report).unwrap();
    assert!(output.trim_start().starts_with('{'));
}

#[test]
fn formatter_for_text_uses_base_for_paths() {
    let report = ValidationReport::new(
        std::path::PathBuf::from("/work/specs"),
        true,
        Vec::new(),
    );
    let formatter = formatter_for(
        OutputFormat::Text,
        ColorMode::Never,
        Some(std::path::Path::new("/work")),
    );

    let output = formatter.format_validation(&report).unwrap();
    assert_eq!(output, "No specs found in specs\n");
}
