use crate::models::RestAnswer;

/// Formats the answer the way it is printed on stdout.
pub fn render(answer: &RestAnswer) -> String {
    format!("Result:\n  {:?}", answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Probe;

    #[test]
    fn test_header_and_indent() {
        let out = render(&RestAnswer::default());
        assert!(out.starts_with("Result:\n  RestAnswer {"));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_includes_probe_fields() {
        let answer = RestAnswer {
            objects: vec![Probe {
                id: 6001,
                country_code: Some("NL".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let out = render(&answer);
        assert!(out.contains("id: 6001"));
        assert!(out.contains("country_code: Some(\"NL\")"));
    }
}
