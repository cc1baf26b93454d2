/*!
 * Fixed vocabularies of the episode corpus.
 *
 * This module holds the two process-wide tables the validators consult:
 * - The closed set of episode categories
 * - The proficiency levels and their sentence-length rules
 */

use std::fmt;

use serde::Serialize;

/// Topic tag of an episode; the id of every episode starts with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AiFuture,
    CryptoBasics,
    FoodStreet,
    TravelAbroad,
    JobMarket,
    HealthFitness,
    MusicKpop,
    MovieScifi,
    RelationshipsModern,
    MoneyInvesting,
    SocialMedia,
    HomeLife,
}

impl Category {
    /// Every valid category, in catalog order
    pub const ALL: [Category; 12] = [
        Category::AiFuture,
        Category::CryptoBasics,
        Category::FoodStreet,
        Category::TravelAbroad,
        Category::JobMarket,
        Category::HealthFitness,
        Category::MusicKpop,
        Category::MovieScifi,
        Category::RelationshipsModern,
        Category::MoneyInvesting,
        Category::SocialMedia,
        Category::HomeLife,
    ];

    /// Identifier as written in the corpus
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiFuture => "ai_future",
            Self::CryptoBasics => "crypto_basics",
            Self::FoodStreet => "food_street",
            Self::TravelAbroad => "travel_abroad",
            Self::JobMarket => "job_market",
            Self::HealthFitness => "health_fitness",
            Self::MusicKpop => "music_kpop",
            Self::MovieScifi => "movie_scifi",
            Self::RelationshipsModern => "relationships_modern",
            Self::MoneyInvesting => "money_investing",
            Self::SocialMedia => "social_media",
            Self::HomeLife => "home_life",
        }
    }

    /// Look up a category by its exact corpus identifier
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proficiency tier of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Look up a level by its exact corpus identifier
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == name)
    }

    /// Sentence-length rule that applies to this level
    pub fn length_rule(&self) -> LengthRule {
        match self {
            Self::Beginner => LengthRule::Below(12),
            Self::Intermediate => LengthRule::Within { min: 10, max: 18 },
            Self::Advanced => LengthRule::Within { min: 15, max: 25 },
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acceptable word count for a single sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// Word count must be strictly below the limit
    Below(usize),
    /// Word count must lie in the closed interval
    Within { min: usize, max: usize },
}

impl LengthRule {
    pub fn accepts(&self, word_count: usize) -> bool {
        match *self {
            Self::Below(limit) => word_count < limit,
            Self::Within { min, max } => (min..=max).contains(&word_count),
        }
    }
}
