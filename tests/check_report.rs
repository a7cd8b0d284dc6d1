use cpf_cli::report::{check_input, invalid_count, render_json, render_text};
use serde_json::json;

#[test]
fn text_report_lists_status_and_detail_per_input() {
    let reports = vec![
        check_input("347.843.610-90", false),
        check_input("34784361090", false),
        check_input("123.456.789-00", false),
    ];

    let rendered = render_text(&reports);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "347.843.610-90\tvalid\t347.843.610-90");
    assert_eq!(lines[1], "34784361090\tvalid\t347.843.610-90");
    assert_eq!(
        lines[2],
        "123.456.789-00\tinvalid\tcheck digits 00 do not match base 123456789 (expected 09)"
    );
}

#[test]
fn text_report_explains_malformed_input() {
    let rendered = render_text(&[check_input("not-a-cpf", false)]);
    assert!(rendered.starts_with("not-a-cpf\tinvalid\t'not-a-cpf' is not a CPF"));
}

#[test]
fn json_report_flattens_record_fields() {
    let reports = vec![
        check_input("34784361090", false),
        check_input("not-a-cpf", false),
    ];

    let rendered = render_json(&reports).expect("reports serialize");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

    assert_eq!(
        value[0],
        json!({
            "input": "34784361090",
            "valid": true,
            "formatted": "347.843.610-90",
            "base": 347843610,
            "check_digits": 90
        })
    );
    assert_eq!(value[1]["valid"], json!(false));
    assert_eq!(value[1]["base"], serde_json::Value::Null);
    assert!(value[1]["reason"].is_string());
    assert_eq!(invalid_count(&reports), 1);
}

#[test]
fn numeric_inputs_restore_leading_zeros() {
    let report = check_input("0", true);
    assert!(report.valid);
    assert_eq!(report.record.formatted.as_deref(), Some("000.000.000-00"));
}
