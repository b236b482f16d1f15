use super::*;
use std::collections::BTreeMap;

fn result_with(
    sections: &[(&str, bool)],
    skills: Option<Vec<&str>>,
    recommendations: Option<Vec<&str>>,
) -> AnalysisResult {
    AnalysisResult {
        word_count: 250,
        is_too_short: false,
        is_too_long: false,
        sections_found: sections
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<BTreeMap<_, _>>(),
        skills_found: skills.map(|s| s.into_iter().map(str::to_string).collect()),
        recommendations: recommendations.map(|r| r.into_iter().map(str::to_string).collect()),
        missing_sections: Vec::new(),
    }
}

#[test]
fn renders_reference_payload() {
    let result = result_with(
        &[("contact", true), ("education", false)],
        Some(vec!["Python"]),
        Some(vec![]),
    );

    let panel = ResultsPanel::from_result(&result);

    assert_eq!(panel.word_count, "250");
    assert_eq!(panel.length_warning, None);
    let education = panel
        .sections
        .iter()
        .find(|row| row.section == SectionKey::Education)
        .expect("education row");
    assert!(!education.present);
    assert_eq!(education.icon(), "✖");
    assert_eq!(panel.skill_tags, vec!["Python"]);
    assert_eq!(panel.skills_placeholder, None);
    assert_eq!(
        panel.recommendations,
        vec!["Your resume looks good! Consider tailoring it to specific job descriptions."]
    );
}

#[test]
fn sections_follow_declared_order_not_payload_order() {
    let result = result_with(
        &[("summary", true), ("contact", true), ("projects", true)],
        None,
        None,
    );

    let rows: Vec<_> = render_analysis(&result)
        .into_iter()
        .filter_map(|update| match update {
            UiUpdate::AddSectionRow { label, present, .. } => Some((label, present)),
            _ => None,
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            ("Contact Information", true),
            ("Education", false),
            ("Work Experience", false),
            ("Skills", false),
            ("Projects", true),
            ("Achievements", false),
            ("Professional Summary", true),
        ]
    );
}

#[test]
fn empty_or_absent_lists_render_placeholders() {
    for (skills, recommendations) in [(Some(vec![]), Some(vec![])), (None, None)] {
        let panel = ResultsPanel::from_result(&result_with(&[], skills, recommendations));
        assert!(panel.skill_tags.is_empty());
        assert_eq!(
            panel.skills_placeholder.as_deref(),
            Some(
                "No specific skills identified. Consider adding more technical or industry-specific skills."
            )
        );
        assert_eq!(panel.recommendations.len(), 1);
    }
}

#[test]
fn length_warning_prefers_short_message() {
    let mut result = result_with(&[], None, None);
    result.is_too_short = true;
    result.is_too_long = true;
    assert!(render_analysis(&result).contains(&UiUpdate::ShowLengthWarning(
        "Your resume is too short. Consider adding more details.".to_string()
    )));

    result.is_too_short = false;
    let panel = ResultsPanel::from_result(&result);
    assert_eq!(
        panel.length_warning.as_deref(),
        Some("Your resume is quite long. Consider making it more concise.")
    );
}

#[test]
fn skills_and_recommendations_keep_server_order() {
    let result = result_with(
        &[],
        Some(vec!["sql", "docker", "python"]),
        Some(vec![
            "Add a professional summary section to your resume.",
            "Include more specific skills related to your field.",
        ]),
    );
    let panel = ResultsPanel::from_result(&result);
    assert_eq!(panel.skill_tags, vec!["sql", "docker", "python"]);
    assert_eq!(
        panel.recommendations,
        vec![
            "Add a professional summary section to your resume.",
            "Include more specific skills related to your field."
        ]
    );
}

#[test]
fn rerendering_replaces_previous_analysis() {
    let mut panel = ResultsPanel::default();
    let mut first = result_with(&[("contact", true)], Some(vec!["rust", "go"]), None);
    first.is_too_long = true;
    panel.apply_all(render_analysis(&first));

    let second = result_with(&[], None, Some(vec!["Tailor it."]));
    panel.apply_all(render_analysis(&second));

    assert_eq!(panel.sections.len(), SectionKey::ALL.len());
    assert!(panel.sections.iter().all(|row| !row.present));
    assert!(panel.skill_tags.is_empty());
    assert!(panel.skills_placeholder.is_some());
    assert_eq!(panel.recommendations, vec!["Tailor it."]);
    assert_eq!(panel.length_warning, None);
}

#[test]
fn every_container_is_cleared_before_it_is_filled() {
    let updates = render_analysis(&result_with(&[], Some(vec!["sql"]), Some(vec!["a"])));
    let position = |target: &UiUpdate| updates.iter().position(|u| u == target).expect("present");

    let first_row = updates
        .iter()
        .position(|u| matches!(u, UiUpdate::AddSectionRow { .. }))
        .expect("row");
    assert!(position(&UiUpdate::ClearSections) < first_row);
    assert!(position(&UiUpdate::ClearSkills) < position(&UiUpdate::AddSkillTag("sql".into())));
    assert!(
        position(&UiUpdate::ClearRecommendations)
            < position(&UiUpdate::AddRecommendation("a".into()))
    );
}

#[test]
fn text_output_marks_missing_sections() {
    let panel =
        ResultsPanel::from_result(&result_with(&[("contact", true)], Some(vec!["sql"]), None));
    let text = panel.to_text();
    assert!(text.contains("Word count: 250"));
    assert!(text.contains("✔ Contact Information\n"));
    assert!(text.contains("✖ Education (missing)"));
    assert!(text.contains("  sql\n"));
}
