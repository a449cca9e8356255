use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Closed enumeration. Ordinal 1..4, used by the discovery
/// engine's difficulty-fit dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
    Expert = 4,
}

impl Difficulty {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "BEGINNER" => Some(Self::Beginner),
            "INTERMEDIATE" => Some(Self::Intermediate),
            "ADVANCED" => Some(Self::Advanced),
            "EXPERT" => Some(Self::Expert),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Freshness {
    Evergreen,
    ActivelyMaintained,
    PeriodicallyUpdated,
    Historical,
    Archived,
}

impl Freshness {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().replace([' ', '-'], "_").as_str() {
            "EVERGREEN" => Some(Self::Evergreen),
            "ACTIVELY_MAINTAINED" => Some(Self::ActivelyMaintained),
            "PERIODICALLY_UPDATED" => Some(Self::PeriodicallyUpdated),
            "HISTORICAL" => Some(Self::Historical),
            "ARCHIVED" => Some(Self::Archived),
            _ => None,
        }
    }

    /// Higher rank breaks ties in favor of fresher resources.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Evergreen | Self::ActivelyMaintained => 3,
            Self::PeriodicallyUpdated => 2,
            Self::Historical => 1,
            Self::Archived => 0,
        }
    }

    /// Freshness dimension contribution to the discovery score.
    #[must_use]
    pub fn score(self) -> f64 {
        match self {
            Self::Evergreen | Self::ActivelyMaintained => 1.0,
            Self::PeriodicallyUpdated => 0.7,
            Self::Historical => 0.4,
            Self::Archived => 0.1,
        }
    }
}

/// Fine-grained pedagogical topic tag, closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConceptArea {
    Concurrency,
    DesignPatterns,
    Containers,
    Testing,
    Databases,
    WebDevelopment,
    Security,
    Algorithms,
    SystemsProgramming,
    FunctionalProgramming,
    Devops,
    Networking,
    MachineLearning,
}

impl ConceptArea {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().replace([' ', '-'], "_").as_str() {
            "CONCURRENCY" => Some(Self::Concurrency),
            "DESIGN_PATTERNS" => Some(Self::DesignPatterns),
            "CONTAINERS" => Some(Self::Containers),
            "TESTING" => Some(Self::Testing),
            "DATABASES" => Some(Self::Databases),
            "WEB_DEVELOPMENT" => Some(Self::WebDevelopment),
            "SECURITY" => Some(Self::Security),
            "ALGORITHMS" => Some(Self::Algorithms),
            "SYSTEMS_PROGRAMMING" => Some(Self::SystemsProgramming),
            "FUNCTIONAL_PROGRAMMING" => Some(Self::FunctionalProgramming),
            "DEVOPS" => Some(Self::Devops),
            "NETWORKING" => Some(Self::Networking),
            "MACHINE_LEARNING" => Some(Self::MachineLearning),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Concurrency => "CONCURRENCY",
            Self::DesignPatterns => "DESIGN_PATTERNS",
            Self::Containers => "CONTAINERS",
            Self::Testing => "TESTING",
            Self::Databases => "DATABASES",
            Self::WebDevelopment => "WEB_DEVELOPMENT",
            Self::Security => "SECURITY",
            Self::Algorithms => "ALGORITHMS",
            Self::SystemsProgramming => "SYSTEMS_PROGRAMMING",
            Self::FunctionalProgramming => "FUNCTIONAL_PROGRAMMING",
            Self::Devops => "DEVOPS",
            Self::Networking => "NETWORKING",
            Self::MachineLearning => "MACHINE_LEARNING",
        }
    }
}

/// Coarse technology/domain tag, closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    Java,
    Python,
    Rust,
    JavaScript,
    Go,
    Databases,
    Devops,
    Security,
    WebDevelopment,
    Cloud,
}

impl ResourceCategory {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().replace([' ', '-'], "_").as_str() {
            "JAVA" => Some(Self::Java),
            "PYTHON" => Some(Self::Python),
            "RUST" => Some(Self::Rust),
            "JAVASCRIPT" => Some(Self::JavaScript),
            "GO" => Some(Self::Go),
            "DATABASES" => Some(Self::Databases),
            "DEVOPS" => Some(Self::Devops),
            "SECURITY" => Some(Self::Security),
            "WEB_DEVELOPMENT" => Some(Self::WebDevelopment),
            "CLOUD" => Some(Self::Cloud),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Java => "JAVA",
            Self::Python => "PYTHON",
            Self::Rust => "RUST",
            Self::JavaScript => "JAVASCRIPT",
            Self::Go => "GO",
            Self::Databases => "DATABASES",
            Self::Devops => "DEVOPS",
            Self::Security => "SECURITY",
            Self::WebDevelopment => "WEB_DEVELOPMENT",
            Self::Cloud => "CLOUD",
        }
    }
}

/// Learning-resource record. Immutable after construction; collection
/// fields are defensively copied on read via `Clone`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub resource_type: String,
    pub difficulty: Difficulty,
    pub freshness: Freshness,
    pub language_scope: String,
    pub official: bool,
    pub free: bool,
    pub author: String,
    pub categories: BTreeSet<ResourceCategory>,
    pub concepts: BTreeSet<ConceptArea>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResource {
    pub record: ResourceRecord,
    pub score: u32,
}
