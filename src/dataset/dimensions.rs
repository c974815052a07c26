//! Fixed scoring dimensions shared by every analysis pass.
//!
//! Both lists are closed: a profile must carry exactly these keys. The
//! `ALL` arrays fix the iteration order everywhere (report ordering and
//! tie-breaks depend on it).

// ============================================================================
// Complexity dimensions
// ============================================================================

/// Scope of a tradition's practice domain, from body to the transpersonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexityDimension {
    Somatic,
    Intrapsychic,
    Relational,
    Collective,
    Systemic,
    Transpersonal,
}

impl ComplexityDimension {
    /// All six dimensions in canonical order.
    pub const ALL: [ComplexityDimension; 6] = [
        Self::Somatic,
        Self::Intrapsychic,
        Self::Relational,
        Self::Collective,
        Self::Systemic,
        Self::Transpersonal,
    ];

    /// Wire name, as used in `complexityProfile`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Somatic => "somatic",
            Self::Intrapsychic => "intrapsychic",
            Self::Relational => "relational",
            Self::Collective => "collective",
            Self::Systemic => "systemic",
            Self::Transpersonal => "transpersonal",
        }
    }
}

impl std::fmt::Display for ComplexityDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Outcome (effectiveness) dimensions
// ============================================================================

/// Rated clinical or psychological outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeDimension {
    Adhd,
    Depression,
    Anxiety,
    Trauma,
    Focus,
    Metacognition,
    Insight,
    Compassion,
    Communication,
    Empathy,
    BodyAwareness,
    EmotionalRegulation,
}

impl OutcomeDimension {
    /// All twelve dimensions in canonical order.
    pub const ALL: [OutcomeDimension; 12] = [
        Self::Adhd,
        Self::Depression,
        Self::Anxiety,
        Self::Trauma,
        Self::Focus,
        Self::Metacognition,
        Self::Insight,
        Self::Compassion,
        Self::Communication,
        Self::Empathy,
        Self::BodyAwareness,
        Self::EmotionalRegulation,
    ];

    /// Wire name, as used in `effectiveness` and as a CSV column header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adhd => "adhd",
            Self::Depression => "depression",
            Self::Anxiety => "anxiety",
            Self::Trauma => "trauma",
            Self::Focus => "focus",
            Self::Metacognition => "metacognition",
            Self::Insight => "insight",
            Self::Compassion => "compassion",
            Self::Communication => "communication",
            Self::Empathy => "empathy",
            Self::BodyAwareness => "bodyAwareness",
            Self::EmotionalRegulation => "emotionalRegulation",
        }
    }
}

impl std::fmt::Display for OutcomeDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
