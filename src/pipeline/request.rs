//! The user's roadmap request: target domain and learning preferences.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RoadmaprError;

/// How the user prefers to learn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearningStyle {
    Video,
    Reading,
    HandsOn,
    Mixed,
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Video => "video",
            LearningStyle::Reading => "reading",
            LearningStyle::HandsOn => "hands-on",
            LearningStyle::Mixed => "mixed",
        }
    }
}

impl FromStr for LearningStyle {
    type Err = RoadmaprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "video" => Ok(LearningStyle::Video),
            "reading" => Ok(LearningStyle::Reading),
            "hands-on" | "handson" => Ok(LearningStyle::HandsOn),
            "mixed" => Ok(LearningStyle::Mixed),
            other => Err(RoadmaprError::Configuration(format!(
                "unknown learning style '{}' (expected video, reading, hands-on, or mixed)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the user is starting from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Beginner,
    SomeBasics,
    Intermediate,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::SomeBasics => "some-basics",
            ExperienceLevel::Intermediate => "intermediate",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = RoadmaprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "some-basics" | "basics" => Ok(ExperienceLevel::SomeBasics),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            other => Err(RoadmaprError::Configuration(format!(
                "unknown experience level '{}' (expected beginner, some-basics, or intermediate)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the pipeline needs to know about the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapRequest {
    /// Target job domain, e.g. "Frontend Developer"
    pub domain: String,
    pub experience_level: ExperienceLevel,
    pub learning_style: LearningStyle,
    /// Daily time commitment in hours
    pub hours_per_day: u32,
    /// Roadmap length in weeks
    pub weeks: u32,
}

impl RoadmapRequest {
    /// Create a request with the default 4-week length
    pub fn new(domain: impl Into<String>, level: ExperienceLevel, style: LearningStyle, hours_per_day: u32) -> Self {
        Self {
            domain: domain.into(),
            experience_level: level,
            learning_style: style,
            hours_per_day,
            weeks: 4,
        }
    }

    /// Set the roadmap length
    pub fn with_weeks(mut self, weeks: u32) -> Self {
        self.weeks = weeks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_style_parse() {
        assert_eq!("video".parse::<LearningStyle>().unwrap(), LearningStyle::Video);
        assert_eq!("Reading".parse::<LearningStyle>().unwrap(), LearningStyle::Reading);
        assert_eq!("hands-on".parse::<LearningStyle>().unwrap(), LearningStyle::HandsOn);
        assert_eq!("handson".parse::<LearningStyle>().unwrap(), LearningStyle::HandsOn);
        assert_eq!("MIXED".parse::<LearningStyle>().unwrap(), LearningStyle::Mixed);
    }

    #[test]
    fn test_learning_style_parse_unknown() {
        let result = "osmosis".parse::<LearningStyle>();
        assert!(matches!(result, Err(RoadmaprError::Configuration(_))));
        assert!(result.unwrap_err().to_string().contains("osmosis"));
    }

    #[test]
    fn test_experience_level_parse() {
        assert_eq!("beginner".parse::<ExperienceLevel>().unwrap(), ExperienceLevel::Beginner);
        assert_eq!("some-basics".parse::<ExperienceLevel>().unwrap(), ExperienceLevel::SomeBasics);
        assert_eq!("basics".parse::<ExperienceLevel>().unwrap(), ExperienceLevel::SomeBasics);
        assert_eq!(
            "Intermediate".parse::<ExperienceLevel>().unwrap(),
            ExperienceLevel::Intermediate
        );
    }

    #[test]
    fn test_experience_level_parse_unknown() {
        assert!("expert".parse::<ExperienceLevel>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for style in [
            LearningStyle::Video,
            LearningStyle::Reading,
            LearningStyle::HandsOn,
            LearningStyle::Mixed,
        ] {
            assert_eq!(style.to_string().parse::<LearningStyle>().unwrap(), style);
        }

        for level in [
            ExperienceLevel::Beginner,
            ExperienceLevel::SomeBasics,
            ExperienceLevel::Intermediate,
        ] {
            assert_eq!(level.to_string().parse::<ExperienceLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_request_defaults_to_four_weeks() {
        let request = RoadmapRequest::new("Data Analyst", ExperienceLevel::Beginner, LearningStyle::Mixed, 2);
        assert_eq!(request.weeks, 4);
        assert_eq!(request.domain, "Data Analyst");
    }

    #[test]
    fn test_request_with_weeks() {
        let request = RoadmapRequest::new("Data Analyst", ExperienceLevel::Beginner, LearningStyle::Mixed, 2)
            .with_weeks(6);
        assert_eq!(request.weeks, 6);
    }

    #[test]
    fn test_request_serializes_for_templates() {
        let request = RoadmapRequest::new(
            "Cloud Engineer",
            ExperienceLevel::Intermediate,
            LearningStyle::HandsOn,
            3,
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["domain"], "Cloud Engineer");
        assert_eq!(value["experience_level"], "intermediate");
        assert_eq!(value["learning_style"], "hands-on");
        assert_eq!(value["hours_per_day"], 3);
    }
}
