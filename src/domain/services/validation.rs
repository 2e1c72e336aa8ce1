//! Location field validation.
//!
//! Rules run in a fixed order and every failure is collected. The first
//! failure doubles as the error's human-readable message.

use std::fmt;

use crate::domain::entities::LocationData;
use crate::domain::value_objects::{is_hex_color, is_valid_latitude, is_valid_longitude};

/// Which rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    HexColor,
    Required,
    LatitudeRange,
    LongitudeRange,
}

/// A single failed check.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

/// One or more validation rules failed. Never constructed empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// The violation reported to callers as the failure reason.
    pub fn first(&self) -> &FieldViolation {
        &self.violations[0]
    }

    pub fn has(&self, field: &str, rule: Rule) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.rule == rule)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.first();
        write!(f, "{}: {}", first.field, first.message)
    }
}

impl std::error::Error for ValidationError {}

type Check = fn(&LocationData) -> Option<FieldViolation>;

/// Check order. Color comes first so it is reported ahead of the rest.
const CHECKS: [Check; 4] = [check_color, check_name, check_latitude, check_longitude];

/// Validate a candidate location before it is written.
pub fn validate_location(candidate: &LocationData) -> Result<(), ValidationError> {
    let violations: Vec<FieldViolation> =
        CHECKS.iter().filter_map(|check| check(candidate)).collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

fn check_color(candidate: &LocationData) -> Option<FieldViolation> {
    (!is_hex_color(&candidate.color)).then(|| FieldViolation {
        field: "color",
        rule: Rule::HexColor,
        message: format!("'{}' is not a #RRGGBB hex color", candidate.color),
    })
}

fn check_name(candidate: &LocationData) -> Option<FieldViolation> {
    candidate.name.is_empty().then(|| FieldViolation {
        field: "name",
        rule: Rule::Required,
        message: "Name is required".into(),
    })
}

fn check_latitude(candidate: &LocationData) -> Option<FieldViolation> {
    (!is_valid_latitude(candidate.latitude)).then(|| FieldViolation {
        field: "latitude",
        rule: Rule::LatitudeRange,
        message: format!("Latitude {} must be between -90 and 90", candidate.latitude),
    })
}

fn check_longitude(candidate: &LocationData) -> Option<FieldViolation> {
    (!is_valid_longitude(candidate.longitude)).then(|| FieldViolation {
        field: "longitude",
        rule: Rule::LongitudeRange,
        message: format!(
            "Longitude {} must be between -180 and 180",
            candidate.longitude
        ),
    })
}
