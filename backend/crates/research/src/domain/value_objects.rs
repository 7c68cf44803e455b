//! Domain Value Objects
//!
//! Validated inputs for catalog administration.

use kernel::error::app_error::{AppError, AppResult};

/// Maximum title length
const TITLE_MAX_LENGTH: usize = 200;

/// Validated research entry title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchTitle(String);

impl ResearchTitle {
    /// Create a new title; must be non-empty after trimming
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let title = raw.into().trim().to_string();

        if title.is_empty() {
            return Err(AppError::bad_request("Title cannot be empty"));
        }

        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters",
                TITLE_MAX_LENGTH
            )));
        }

        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated total stage count (a positive integer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageCount(i32);

impl StageCount {
    pub fn new(stages: i32) -> AppResult<Self> {
        if stages < 1 {
            return Err(AppError::bad_request(
                "Total stages must be a positive integer",
            ));
        }
        Ok(Self(stages))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_trimmed() {
        let title = ResearchTitle::new("  Catch 5 Pokémon  ").unwrap();
        assert_eq!(title.as_str(), "Catch 5 Pokémon");
    }

    #[test]
    fn test_title_empty_rejected() {
        assert!(ResearchTitle::new("").is_err());
        assert!(ResearchTitle::new("   ").is_err());
    }

    #[test]
    fn test_title_too_long_rejected() {
        assert!(ResearchTitle::new("x".repeat(201)).is_err());
        assert!(ResearchTitle::new("x".repeat(200)).is_ok());
    }

    #[test]
    fn test_stage_count_positive() {
        assert_eq!(StageCount::new(1).unwrap().value(), 1);
        assert_eq!(StageCount::new(7).unwrap().value(), 7);
    }

    #[test]
    fn test_stage_count_non_positive_rejected() {
        assert!(StageCount::new(0).is_err());
        assert!(StageCount::new(-3).is_err());
    }
}
