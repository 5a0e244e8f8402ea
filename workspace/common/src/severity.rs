//! Severity classification of a prediction outcome.
//!
//! Severity is a display concern: each level maps to a badge color and a
//! human-readable label. It is derived from the model outcome (label and
//! confidence) on the backend and carried verbatim to the frontend.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fallback badge color for severity strings outside the known set.
pub const SEVERITY_FALLBACK_COLOR: &str = "#6b7280";

/// Severity of a detected condition, ordered from harmless to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Severity {
    Healthy,
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    /// Badge color for this severity level.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Healthy => "#10b981",
            Severity::Mild => "#f59e0b",
            Severity::Moderate => "#f97316",
            Severity::Severe => "#dc2626",
            Severity::Critical => "#7c2d12",
        }
    }

    /// Human-readable badge label for this severity level.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Healthy => "Healthy ✓",
            Severity::Mild => "Mild ⚠",
            Severity::Moderate => "Moderate ⚠⚠",
            Severity::Severe => "Severe ⚠⚠⚠",
            Severity::Critical => "Critical 🚨",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Healthy => "Healthy",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::Critical => "Critical",
        }
    }

    /// Parse a severity string from the wire. Unknown values yield `None`;
    /// callers fall back via [`severity_color`] / [`severity_label`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Healthy" => Some(Severity::Healthy),
            "Mild" => Some(Severity::Mild),
            "Moderate" => Some(Severity::Moderate),
            "Severe" => Some(Severity::Severe),
            "Critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    /// Derive a severity from a model outcome.
    ///
    /// A healthy diagnosis is always `Healthy` regardless of confidence;
    /// otherwise the grade tracks how certain the model is about the disease.
    pub fn grade(is_healthy: bool, confidence: f64) -> Self {
        if is_healthy {
            return Severity::Healthy;
        }
        if confidence < 0.5 {
            Severity::Mild
        } else if confidence < 0.7 {
            Severity::Moderate
        } else if confidence < 0.85 {
            Severity::Severe
        } else {
            Severity::Critical
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge color for an arbitrary severity string, with the defined fallback
/// for unrecognized values.
pub fn severity_color(severity: &str) -> &str {
    match Severity::parse(severity) {
        Some(s) => s.color(),
        None => SEVERITY_FALLBACK_COLOR,
    }
}

/// Badge label for an arbitrary severity string. Unrecognized values are
/// shown as-is.
pub fn severity_label(severity: &str) -> &str {
    match Severity::parse(severity) {
        Some(s) => s.label(),
        None => severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_severity_colors() {
        assert_eq!(severity_color("Healthy"), "#10b981");
        assert_eq!(severity_color("Mild"), "#f59e0b");
        assert_eq!(severity_color("Moderate"), "#f97316");
        assert_eq!(severity_color("Severe"), "#dc2626");
        assert_eq!(severity_color("Critical"), "#7c2d12");
    }

    #[test]
    fn test_unknown_severity_falls_back() {
        assert_eq!(severity_color("Extreme"), SEVERITY_FALLBACK_COLOR);
        assert_eq!(severity_color(""), SEVERITY_FALLBACK_COLOR);
        assert_eq!(severity_label("Extreme"), "Extreme");
    }

    #[test]
    fn test_grade_healthy_wins() {
        assert_eq!(Severity::grade(true, 0.99), Severity::Healthy);
        assert_eq!(Severity::grade(true, 0.1), Severity::Healthy);
    }

    #[test]
    fn test_grade_tracks_confidence() {
        assert_eq!(Severity::grade(false, 0.3), Severity::Mild);
        assert_eq!(Severity::grade(false, 0.6), Severity::Moderate);
        assert_eq!(Severity::grade(false, 0.8), Severity::Severe);
        assert_eq!(Severity::grade(false, 0.92), Severity::Critical);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Severity::Moderate).unwrap();
        assert_eq!(json, "\"Moderate\"");
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Moderate);
    }
}
