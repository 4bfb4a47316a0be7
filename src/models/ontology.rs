//! Types describing RDF imports through n10s.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// RDF serialization formats accepted by the n10s import procedures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum RdfFormat {
    #[default]
    Turtle,
    NTriples,
    JsonLd,
    RdfXml,
    TriG,
    NQuads,
}

impl RdfFormat {
    /// Returns the format name as n10s expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "Turtle",
            RdfFormat::NTriples => "N-Triples",
            RdfFormat::JsonLd => "JSON-LD",
            RdfFormat::RdfXml => "RDF/XML",
            RdfFormat::TriG => "TriG",
            RdfFormat::NQuads => "N-Quads",
        }
    }

    /// Returns a static slice of all formats.
    pub fn all() -> &'static [RdfFormat] {
        &[
            RdfFormat::Turtle,
            RdfFormat::NTriples,
            RdfFormat::JsonLd,
            RdfFormat::RdfXml,
            RdfFormat::TriG,
            RdfFormat::NQuads,
        ]
    }
}

impl std::fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RdfFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RdfFormat::all()
            .iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                let valid: Vec<_> = RdfFormat::all().iter().map(RdfFormat::as_str).collect();
                format!(
                    "Invalid RDF format '{}'. Valid values: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

impl TryFrom<String> for RdfFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Outcome row of `n10s.*.import.fetch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// `OK` or `KO`.
    pub termination_status: String,
    #[serde(default)]
    pub triples_loaded: i64,
    #[serde(default)]
    pub triples_parsed: i64,
    /// Error detail when the import failed.
    #[serde(default)]
    pub extra_info: Option<String>,
}

impl ImportSummary {
    pub fn is_ok(&self) -> bool {
        self.termination_status == "OK"
    }

    /// Failure detail, falling back to the termination status.
    pub fn failure_message(&self) -> String {
        match self.extra_info.as_deref() {
            Some(info) if !info.trim().is_empty() => info.to_string(),
            _ => format!("import terminated with status {}", self.termination_status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_parse_is_case_insensitive() {
        assert_eq!("turtle".parse::<RdfFormat>(), Ok(RdfFormat::Turtle));
        assert_eq!("JSON-LD".parse::<RdfFormat>(), Ok(RdfFormat::JsonLd));
        assert_eq!("rdf/xml".parse::<RdfFormat>(), Ok(RdfFormat::RdfXml));
    }

    #[test]
    fn test_format_parse_rejects_unknown() {
        let err = "yaml".parse::<RdfFormat>().unwrap_err();
        assert!(err.contains("yaml"));
        assert!(err.contains("N-Triples"));
    }

    #[test]
    fn test_format_deserialize() {
        let format: RdfFormat = serde_json::from_value(json!("N-Quads")).unwrap();
        assert_eq!(format, RdfFormat::NQuads);
        assert!(serde_json::from_value::<RdfFormat>(json!("csv")).is_err());
    }

    #[test]
    fn test_import_summary_from_n10s_row() {
        let summary: ImportSummary = serde_json::from_value(json!({
            "terminationStatus": "KO",
            "triplesLoaded": 0,
            "triplesParsed": 0,
            "namespaces": null,
            "extraInfo": "java.net.UnknownHostException: nowhere.invalid",
            "callParams": {}
        }))
        .unwrap();

        assert!(!summary.is_ok());
        assert!(summary.failure_message().contains("UnknownHostException"));
    }

    #[test]
    fn test_failure_message_without_extra_info() {
        let summary: ImportSummary = serde_json::from_value(json!({
            "terminationStatus": "KO",
            "extraInfo": null
        }))
        .unwrap();

        assert_eq!(
            summary.failure_message(),
            "import terminated with status KO"
        );
    }
}
