//! Step 2 of the discovery engine: keyword -> concept/category inference
//! over two static maps.

use crate::vault::{ConceptArea, ResourceCategory};
use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashMap};

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "of", "to", "in", "on", "for", "is", "it", "and", "or", "me", "i",
];

lazy_static! {
    static ref CONCEPT_KEYWORDS: HashMap<&'static str, &'static [ConceptArea]> = {
        let mut m: HashMap<&'static str, &'static [ConceptArea]> = HashMap::new();
        m.insert("concurrency", &[ConceptArea::Concurrency]);
        m.insert("threads", &[ConceptArea::Concurrency]);
        m.insert("thread", &[ConceptArea::Concurrency]);
        m.insert("async", &[ConceptArea::Concurrency]);
        m.insert("pattern", &[ConceptArea::DesignPatterns]);
        m.insert("patterns", &[ConceptArea::DesignPatterns]);
        m.insert("solid", &[ConceptArea::DesignPatterns]);
        m.insert("clean", &[ConceptArea::DesignPatterns]);
        m.insert("k8s", &[ConceptArea::Containers]);
        m.insert("kubernetes", &[ConceptArea::Containers]);
        m.insert("docker", &[ConceptArea::Containers]);
        m.insert("helm", &[ConceptArea::Containers]);
        m.insert("testing", &[ConceptArea::Testing]);
        m.insert("test", &[ConceptArea::Testing]);
        m.insert("junit", &[ConceptArea::Testing]);
        m.insert("pytest", &[ConceptArea::Testing]);
        m.insert("sql", &[ConceptArea::Databases]);
        m.insert("database", &[ConceptArea::Databases]);
        m.insert("databases", &[ConceptArea::Databases]);
        m.insert("http", &[ConceptArea::WebDevelopment, ConceptArea::Networking]);
        m.insert("rest", &[ConceptArea::WebDevelopment]);
        m.insert("api", &[ConceptArea::WebDevelopment]);
        m.insert("security", &[ConceptArea::Security]);
        m.insert("crypto", &[ConceptArea::Security]);
        m.insert("algorithm", &[ConceptArea::Algorithms]);
        m.insert("algorithms", &[ConceptArea::Algorithms]);
        m.insert("memory", &[ConceptArea::SystemsProgramming]);
        m.insert("pointer", &[ConceptArea::SystemsProgramming]);
        m.insert("functional", &[ConceptArea::FunctionalProgramming]);
        m.insert("monad", &[ConceptArea::FunctionalProgramming]);
        m.insert("devops", &[ConceptArea::Devops]);
        m.insert("cicd", &[ConceptArea::Devops]);
        m.insert("network", &[ConceptArea::Networking]);
        m.insert("networking", &[ConceptArea::Networking]);
        m.insert("ml", &[ConceptArea::MachineLearning]);
        m.insert("machine", &[ConceptArea::MachineLearning]);
        m
    };

    static ref CATEGORY_KEYWORDS: HashMap<&'static str, &'static [ResourceCategory]> = {
        let mut m: HashMap<&'static str, &'static [ResourceCategory]> = HashMap::new();
        m.insert("java", &[ResourceCategory::Java]);
        m.insert("jdk", &[ResourceCategory::Java]);
        m.insert("junit", &[ResourceCategory::Java]);
        m.insert("maven", &[ResourceCategory::Java]);
        m.insert("python", &[ResourceCategory::Python]);
        m.insert("pip", &[ResourceCategory::Python]);
        m.insert("rust", &[ResourceCategory::Rust]);
        m.insert("cargo", &[ResourceCategory::Rust]);
        m.insert("javascript", &[ResourceCategory::JavaScript]);
        m.insert("js", &[ResourceCategory::JavaScript]);
        m.insert("node", &[ResourceCategory::JavaScript]);
        m.insert("go", &[ResourceCategory::Go]);
        m.insert("golang", &[ResourceCategory::Go]);
        m.insert("sql", &[ResourceCategory::Databases]);
        m.insert("database", &[ResourceCategory::Databases]);
        m.insert("devops", &[ResourceCategory::Devops]);
        m.insert("docker", &[ResourceCategory::Devops]);
        m.insert("kubernetes", &[ResourceCategory::Devops]);
        m.insert("security", &[ResourceCategory::Security]);
        m.insert("web", &[ResourceCategory::WebDevelopment]);
        m.insert("html", &[ResourceCategory::WebDevelopment]);
        m.insert("css", &[ResourceCategory::WebDevelopment]);
        m.insert("cloud", &[ResourceCategory::Cloud]);
        m.insert("aws", &[ResourceCategory::Cloud]);
        m.insert("azure", &[ResourceCategory::Cloud]);
        m
    };
}

/// Tokenizes on whitespace and punctuation, lowercases, and drops stopwords
/// <=2 chars.
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_ascii_lowercase)
        .filter(|t| t.len() > 2 || !STOPWORDS.contains(&t.as_str()))
        .filter(|t| t.len() >= 1)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Inferences {
    pub concepts: BTreeSet<ConceptArea>,
    pub categories: BTreeSet<ResourceCategory>,
}

/// Unions keyword->concept/category inferences across all query tokens.
#[must_use]
pub fn infer(tokens: &[String]) -> Inferences {
    let mut inferences = Inferences::default();
    for token in tokens {
        if let Some(concepts) = CONCEPT_KEYWORDS.get(token.as_str()) {
            inferences.concepts.extend(concepts.iter().copied());
        }
        if let Some(categories) = CATEGORY_KEYWORDS.get(token.as_str()) {
            inferences.categories.extend(categories.iter().copied());
        }
    }
    inferences
}
