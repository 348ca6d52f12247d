//! Closed identifier→category mapping for prompt resolution.
//!
//! The table is a hardcoded enumeration of every known agent identifier.
//! An identifier absent from it is a terminal error for that request, not
//! an empty result; unmapped ids are caught at this boundary deliberately.

/// Every agent identifier the directory can fetch a prompt for.
pub const KNOWN_AGENT_IDS: &[&str] = &[
    "brand-guardian",
    "ui-designer",
    "ux-researcher",
    "visual-storyteller",
    "whimsy-injector",
    "ai-engineer",
    "backend-architect",
    "devops-automator",
    "frontend-developer",
    "mobile-app-builder",
    "rapid-prototyper",
    "test-writer-fixer",
    "app-store-optimizer",
    "content-creator",
    "growth-hacker",
    "instagram-curator",
    "reddit-community-builder",
    "tiktok-strategist",
    "twitter-engager",
    "feedback-synthesizer",
    "sprint-prioritizer",
    "trend-researcher",
    "experiment-tracker",
    "project-shipper",
    "studio-producer",
];

/// The five category names remote prompt paths are keyed by.
pub const CATEGORY_IDS: &[&str] = &[
    "design",
    "engineering",
    "marketing",
    "product",
    "project-management",
];

/// Resolve the remote prompt category for an agent identifier.
///
/// Returns `None` for identifiers outside the closed table.
pub fn agent_category(id: &str) -> Option<&'static str> {
    match id {
        "brand-guardian" | "ui-designer" | "ux-researcher" | "visual-storyteller"
        | "whimsy-injector" => Some("design"),
        "ai-engineer" | "backend-architect" | "devops-automator" | "frontend-developer"
        | "mobile-app-builder" | "rapid-prototyper" | "test-writer-fixer" => Some("engineering"),
        "app-store-optimizer" | "content-creator" | "growth-hacker" | "instagram-curator"
        | "reddit-community-builder" | "tiktok-strategist" | "twitter-engager" => {
            Some("marketing")
        }
        "feedback-synthesizer" | "sprint-prioritizer" | "trend-researcher" => Some("product"),
        "experiment-tracker" | "project-shipper" | "studio-producer" => Some("project-management"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_known_id_resolves_to_a_listed_category() {
        for id in KNOWN_AGENT_IDS {
            let category = agent_category(id);
            assert!(category.is_some(), "unmapped id: {}", id);
            assert!(CATEGORY_IDS.contains(&category.unwrap()));
        }
    }

    #[test]
    fn known_ids_are_unique_and_complete() {
        let unique: HashSet<&str> = KNOWN_AGENT_IDS.iter().copied().collect();
        assert_eq!(unique.len(), KNOWN_AGENT_IDS.len());
        assert_eq!(KNOWN_AGENT_IDS.len(), 25);
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(agent_category("mystery-agent"), None);
        assert_eq!(agent_category(""), None);
        // Matching is exact; casing matters.
        assert_eq!(agent_category("AI-Engineer"), None);
    }

    #[test]
    fn category_spot_checks() {
        assert_eq!(agent_category("whimsy-injector"), Some("design"));
        assert_eq!(agent_category("test-writer-fixer"), Some("engineering"));
        assert_eq!(agent_category("tiktok-strategist"), Some("marketing"));
        assert_eq!(agent_category("trend-researcher"), Some("product"));
        assert_eq!(agent_category("studio-producer"), Some("project-management"));
    }
}
