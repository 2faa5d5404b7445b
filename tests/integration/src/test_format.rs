//! Response formatting integration tests.

#[cfg(test)]
mod tests {
    use resolver_json::{FormatError, cell_name, format_fragment, format_optional_fragment};

    use crate::init_tracing;

    const PAYOFF_RESPONSE: &str = r#"{"Status":"OK","Cell":"cell-east-2","Description":"us-east primary","Targets":[{"Url":"http://a.example.com/x?y=1"},{"Url":"http://b.example.com/"}]}"#;

    #[test]
    fn test_should_format_payoff_response() {
        init_tracing();
        let formatted = format_fragment(PAYOFF_RESPONSE).unwrap();

        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.first(), Some(&"{"));
        assert_eq!(lines.last(), Some(&"}"));
        assert!(lines.contains(&"\t\"Status\" : \"OK\",\t"));
        assert!(formatted.contains("\"Url\" : \"http://a.example.com/x?y=1\""));
        assert_eq!(cell_name(&formatted), Some("us-east primary"));
    }

    #[test]
    fn test_should_report_unbalanced_response() {
        init_tracing();
        assert_eq!(
            format_fragment(r#"{"Status":"OK"}}"#),
            Err(FormatError::StructuralUnderflow { position: 15 })
        );
        assert_eq!(format_optional_fragment(None), Err(FormatError::NullInput));
    }
}
