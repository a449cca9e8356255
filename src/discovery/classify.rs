//! Step 1 of the discovery engine: classify a free-form query into a
//! [`SearchMode`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Specific,
    Vague,
    Exploratory,
}

impl SearchMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Specific => "SPECIFIC",
            Self::Vague => "VAGUE",
            Self::Exploratory => "EXPLORATORY",
        }
    }
}

const SPECIFIC_TRIGGERS: &[&str] = &["docs for", "reference for", "official"];
const EXPLORATORY_TRIGGERS: &[&str] = &[
    "learn",
    "beginner",
    "getting started",
    "recommend",
    "help me",
    "not sure",
];

fn looks_like_url(query: &str) -> bool {
    let lower = query.to_ascii_lowercase();
    lower.contains("http://") || lower.contains("https://") || lower.contains("www.")
}

fn is_fully_quoted(query: &str) -> bool {
    let trimmed = query.trim();
    trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
}

/// SPECIFIC beats EXPLORATORY beats VAGUE when multiple triggers coexist.
#[must_use]
pub fn classify(query: &str) -> SearchMode {
    let lower = query.to_ascii_lowercase();

    let is_specific = looks_like_url(query)
        || is_fully_quoted(query)
        || SPECIFIC_TRIGGERS.iter().any(|t| lower.contains(t));
    if is_specific {
        return SearchMode::Specific;
    }

    let is_exploratory = EXPLORATORY_TRIGGERS.iter().any(|t| lower.contains(t));
    if is_exploratory {
        return SearchMode::Exploratory;
    }

    SearchMode::Vague
}
