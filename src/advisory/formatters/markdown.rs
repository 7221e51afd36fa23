use crate::advisory::types::{RecommendationResult, RiskSeverity};

/// Markdown formatter for recommendations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format recommendation as markdown
    pub fn format(result: &RecommendationResult) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str(&format!("# Recommended Crop: {}\n\n", result.crop));
        md.push_str(&format!(
            "**Inputs:** {} soil, {} season, {} duration, {} water\n\n",
            result.inputs.soil,
            result.inputs.season,
            result.inputs.duration.label_with_range(),
            result.inputs.water
        ));

        // Market
        md.push_str("## Market\n\n");
        md.push_str(&format!("- **Price:** {}\n", result.price_range));
        md.push_str(&format!("- **Trend:** {}\n\n", result.trend));

        md.push_str("## Fertilizers\n\n");
        md.push_str(&format!("{}\n\n", result.fertilizers.join(", ")));

        md.push_str("## Estimated Budget\n\n");
        md.push_str(&format!("{}\n\n", result.budget));

        md.push_str("## Why this decision?\n\n");
        for line in &result.explanations {
            md.push_str(&format!("- {}\n", line));
        }
        match result.matched_rule {
            Some(n) => md.push_str(&format!("\n*Selected by rule {}.*\n\n", n)),
            None => md.push_str("\n*No specific rule matched; default crop selected.*\n\n"),
        }

        md.push_str(&format!("## Risk Level: {}\n\n", result.risk_level));
        for entry in result.risks.iter() {
            let icon = match entry.severity {
                RiskSeverity::Warning => "⚠️",
                RiskSeverity::Informational => "ℹ️",
            };
            md.push_str(&format!("{} {}\n\n", icon, entry.text));
        }

        md.push_str("## Advisory\n\n");
        md.push_str(&format!("{}\n\n", result.advisory));

        md.push_str("## Autonomy Mode\n\n");
        md.push_str(&format!("{}\n\n", result.autonomy_mode.description()));

        let r = &result.responsibility;
        md.push_str("## Responsibility\n\n");
        md.push_str(&format!("- **Model Type:** {}\n", r.model_type));
        md.push_str(&format!("- **Decision Owner:** {}\n", r.decision_owner));
        md.push_str(&format!("- **Final Authority:** {}\n", r.final_authority));
        md.push_str(&format!("- **Model Version:** {}\n", r.model_version));

        md
    }
}
