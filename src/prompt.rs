use crate::scoring::NormalizedScores;

const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone, Default)]
pub struct ProfileInfo {
    pub name: Option<String>,
    pub age: Option<String>,
    pub academic_info: Option<String>,
    pub interests: Option<String>,
    pub achievements: Option<String>,
}

// Inert text for the downstream career-prediction service; nothing here is
// executed or parsed by this crate.
pub fn render_prediction_prompt(scores: &NormalizedScores, profile: &ProfileInfo) -> String {
    let scores_json =
        serde_json::to_string_pretty(scores).unwrap_or_else(|_| "{}".to_string());
    let name = profile.name.as_deref().unwrap_or("the student");

    let mut out = String::new();
    out.push_str(&format!(
        "Based on the following comprehensive assessment of {}:\n\n",
        name
    ));
    out.push_str("Trait Scores Analysis:\n");
    out.push_str(&scores_json);
    out.push_str("\n\nStudent Profile:\n");
    out.push_str(&format!("- Age: {}\n", field(&profile.age)));
    out.push_str(&format!(
        "- Academic Background: {}\n",
        field(&profile.academic_info)
    ));
    out.push_str(&format!("- Interests: {}\n", field(&profile.interests)));
    out.push_str(&format!(
        "- Notable Achievements: {}\n",
        field(&profile.achievements)
    ));
    out.push_str("\nPlease provide a detailed career analysis including:\n");
    out.push_str("1. Top 5 recommended career paths based on the trait scores\n");
    out.push_str("2. Required skills and development roadmap for each career\n");
    out.push_str("3. Educational requirements and recommended certifications\n");
    out.push_str("4. Industry growth prospects and future outlook\n");
    out.push_str("5. Potential challenges and strategies to overcome them\n");
    out.push_str(
        "\nFormat the response in clear sections with detailed explanations for each recommendation.",
    );

    out
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_PROVIDED)
}
