use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resume sections the analysis server reports on, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Contact,
    Education,
    Experience,
    Skills,
    Projects,
    Achievements,
    Summary,
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Contact,
        SectionKey::Education,
        SectionKey::Experience,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Achievements,
        SectionKey::Summary,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Summary => "summary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Contact => "Contact Information",
            Self::Education => "Education",
            Self::Experience => "Work Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Summary => "Professional Summary",
        }
    }
}

/// Success body of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub word_count: u64,
    pub is_too_short: bool,
    pub is_too_long: bool,
    pub sections_found: BTreeMap<String, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_found: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
    /// Human names of required sections the server could not find.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_sections: Vec<String>,
}

impl AnalysisResult {
    /// Keys the server omitted count as missing.
    pub fn section_present(&self, section: SectionKey) -> bool {
        self.sections_found
            .get(section.key())
            .copied()
            .unwrap_or(false)
    }

    pub fn skills(&self) -> &[String] {
        self.skills_found.as_deref().unwrap_or_default()
    }

    pub fn recommendations(&self) -> &[String] {
        self.recommendations.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_payload_with_optional_lists_absent() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{
                "word_count": 412,
                "is_too_short": false,
                "is_too_long": false,
                "sections_found": {"contact": true, "projects": false},
                "missing_sections": ["Professional summary"]
            }"#,
        )
        .expect("json");

        assert_eq!(result.word_count, 412);
        assert!(result.section_present(SectionKey::Contact));
        assert!(!result.section_present(SectionKey::Projects));
        assert!(!result.section_present(SectionKey::Summary));
        assert!(result.skills().is_empty());
        assert!(result.recommendations().is_empty());
        assert_eq!(result.missing_sections, vec!["Professional summary"]);
    }

    #[test]
    fn rejects_payload_without_word_count() {
        let err = serde_json::from_str::<AnalysisResult>(
            r#"{"is_too_short": false, "is_too_long": false, "sections_found": {}}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn section_keys_match_wire_names() {
        for section in SectionKey::ALL {
            let encoded = serde_json::to_string(&section).expect("json");
            assert_eq!(encoded, format!("\"{}\"", section.key()));
        }
    }
}
