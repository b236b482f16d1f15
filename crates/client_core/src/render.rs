//! Maps an analysis result to declarative view updates.
//!
//! `render_analysis` touches no view state; front ends replay the updates
//! through [`ResultsPanel`] or their own widgets.

use shared::{
    messages::{
        DEFAULT_RECOMMENDATION, NO_SKILLS_IDENTIFIED, RESUME_TOO_LONG, RESUME_TOO_SHORT,
    },
    protocol::{AnalysisResult, SectionKey},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    SetWordCount(String),
    ShowLengthWarning(String),
    HideLengthWarning,
    ClearSections,
    AddSectionRow {
        section: SectionKey,
        label: &'static str,
        present: bool,
    },
    ClearSkills,
    AddSkillTag(String),
    ShowSkillsPlaceholder(String),
    ClearRecommendations,
    AddRecommendation(String),
}

pub fn render_analysis(result: &AnalysisResult) -> Vec<UiUpdate> {
    let mut updates = vec![UiUpdate::SetWordCount(result.word_count.to_string())];

    updates.push(if result.is_too_short {
        UiUpdate::ShowLengthWarning(RESUME_TOO_SHORT.to_string())
    } else if result.is_too_long {
        UiUpdate::ShowLengthWarning(RESUME_TOO_LONG.to_string())
    } else {
        UiUpdate::HideLengthWarning
    });

    updates.push(UiUpdate::ClearSections);
    updates.extend(SectionKey::ALL.into_iter().map(|section| UiUpdate::AddSectionRow {
        section,
        label: section.label(),
        present: result.section_present(section),
    }));

    updates.push(UiUpdate::ClearSkills);
    let skills = result.skills();
    if skills.is_empty() {
        updates.push(UiUpdate::ShowSkillsPlaceholder(NO_SKILLS_IDENTIFIED.to_string()));
    } else {
        updates.extend(skills.iter().cloned().map(UiUpdate::AddSkillTag));
    }

    updates.push(UiUpdate::ClearRecommendations);
    let recommendations = result.recommendations();
    if recommendations.is_empty() {
        updates.push(UiUpdate::AddRecommendation(DEFAULT_RECOMMENDATION.to_string()));
    } else {
        updates.extend(recommendations.iter().cloned().map(UiUpdate::AddRecommendation));
    }

    updates
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRow {
    pub section: SectionKey,
    pub label: &'static str,
    pub present: bool,
}

impl SectionRow {
    pub fn icon(&self) -> &'static str {
        if self.present {
            "✔"
        } else {
            "✖"
        }
    }
}

/// Retained state of the results panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsPanel {
    pub word_count: String,
    pub length_warning: Option<String>,
    pub sections: Vec<SectionRow>,
    pub skill_tags: Vec<String>,
    pub skills_placeholder: Option<String>,
    pub recommendations: Vec<String>,
}

impl ResultsPanel {
    pub fn apply(&mut self, update: UiUpdate) {
        match update {
            UiUpdate::SetWordCount(count) => self.word_count = count,
            UiUpdate::ShowLengthWarning(message) => self.length_warning = Some(message),
            UiUpdate::HideLengthWarning => self.length_warning = None,
            UiUpdate::ClearSections => self.sections.clear(),
            UiUpdate::AddSectionRow {
                section,
                label,
                present,
            } => self.sections.push(SectionRow {
                section,
                label,
                present,
            }),
            UiUpdate::ClearSkills => {
                self.skill_tags.clear();
                self.skills_placeholder = None;
            }
            UiUpdate::AddSkillTag(skill) => self.skill_tags.push(skill),
            UiUpdate::ShowSkillsPlaceholder(message) => self.skills_placeholder = Some(message),
            UiUpdate::ClearRecommendations => self.recommendations.clear(),
            UiUpdate::AddRecommendation(text) => self.recommendations.push(text),
        }
    }

    pub fn apply_all(&mut self, updates: impl IntoIterator<Item = UiUpdate>) {
        for update in updates {
            self.apply(update);
        }
    }

    pub fn from_result(result: &AnalysisResult) -> Self {
        let mut panel = Self::default();
        panel.apply_all(render_analysis(result));
        panel
    }

    /// Plain-text rendering used by the command-line front end.
    pub fn to_text(&self) -> String {
        let mut out = format!("Word count: {}\n", self.word_count);
        if let Some(warning) = &self.length_warning {
            out.push_str(&format!("Warning: {warning}\n"));
        }

        out.push_str("\nSections\n");
        for row in &self.sections {
            let suffix = if row.present { "" } else { " (missing)" };
            out.push_str(&format!("  {} {}{}\n", row.icon(), row.label, suffix));
        }

        out.push_str("\nSkills\n");
        match &self.skills_placeholder {
            Some(placeholder) => out.push_str(&format!("  {placeholder}\n")),
            None => out.push_str(&format!("  {}\n", self.skill_tags.join(", "))),
        }

        out.push_str("\nRecommendations\n");
        for recommendation in &self.recommendations {
            out.push_str(&format!("  - {recommendation}\n"));
        }
        out
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
