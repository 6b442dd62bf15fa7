use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single mood check-in. Rows are never updated once written.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub user_id: Uuid,
    /// Stored as text; see [`MoodEntry::category`].
    pub mood: String,
    pub rank: i32,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl MoodEntry {
    /// `None` when the stored value is not one of the known categories.
    pub fn category(&self) -> Option<MoodCategory> {
        MoodCategory::parse(&self.mood)
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Happy,
    Excited,
    Neutral,
    Sad,
    Stressed,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 5] = [
        MoodCategory::Happy,
        MoodCategory::Excited,
        MoodCategory::Neutral,
        MoodCategory::Sad,
        MoodCategory::Stressed,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "happy" => Some(Self::Happy),
            "excited" => Some(Self::Excited),
            "neutral" => Some(Self::Neutral),
            "sad" => Some(Self::Sad),
            "stressed" => Some(Self::Stressed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Excited => "excited",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Self::Happy | Self::Excited)
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Self::Sad | Self::Stressed)
    }
}
