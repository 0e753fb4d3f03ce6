use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::grade::Category;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ClimbType {
    Boulder,
    #[serde(rename = "Top Rope")]
    #[strum(to_string = "Top Rope", serialize = "top-rope", serialize = "TopRope")]
    TopRope,
    Lead,
}

impl ClimbType {
    /// Grading category: boulder problems vs. roped routes
    pub fn category(&self) -> Category {
        match self {
            Self::Boulder => Category::Boulder,
            Self::TopRope | Self::Lead => Category::Rope,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ClimbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ClimbStatus {
    #[default]
    Completed,
    Failed,
    Flash,
}

impl ClimbStatus {
    /// Completed and flashed climbs count as sends.
    pub fn is_send(&self) -> bool {
        matches!(self, Self::Completed | Self::Flash)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ClimbStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A logged climb.
///
/// `grade` is stored as entered, in whichever system was active at the
/// time. Conversion happens at display time only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Climb {
    pub id: String,
    pub name: String,
    pub grade: String,
    pub gym: String,
    #[serde(rename = "type")]
    pub climb_type: ClimbType,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub duration: String,
    pub status: ClimbStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Climb {
    pub fn category(&self) -> Category {
        self.climb_type.category()
    }
}

/// A climb as entered by the user, before storage assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClimb {
    pub name: String,
    pub grade: String,
    pub gym: String,
    pub climb_type: ClimbType,
    pub date: NaiveDate,
    pub time: String,
    pub duration: String,
    pub status: ClimbStatus,
    pub image_url: Option<String>,
}

impl NewClimb {
    pub fn new(
        name: impl Into<String>,
        grade: impl Into<String>,
        climb_type: ClimbType,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
            gym: String::new(),
            climb_type,
            date,
            time: String::new(),
            duration: String::new(),
            status: ClimbStatus::default(),
            image_url: None,
        }
    }

    pub fn with_gym(mut self, gym: impl Into<String>) -> Self {
        self.gym = gym.into();
        self
    }

    pub fn with_status(mut self, status: ClimbStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn into_climb(self, id: impl Into<String>) -> Climb {
        Climb {
            id: id.into(),
            name: self.name,
            grade: self.grade,
            gym: self.gym,
            climb_type: self.climb_type,
            date: self.date,
            time: self.time,
            duration: self.duration,
            status: self.status,
            image_url: self.image_url,
        }
    }
}
