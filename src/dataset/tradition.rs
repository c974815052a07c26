//! Tradition records and the on-disk document that holds them.
//!
//! The JSON layout is camelCase. Optional scoring blocks stay `None` when
//! absent and are never zero-filled: a record without a profile is simply
//! left out of the passes that need one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dimensions::{ComplexityDimension, OutcomeDimension};

// ============================================================================
// Scoring blocks
// ============================================================================

/// Six-dimension scope classification, each score nominally 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComplexityProfile {
    pub somatic: i32,
    pub intrapsychic: i32,
    pub relational: i32,
    pub collective: i32,
    pub systemic: i32,
    pub transpersonal: i32,
}

impl ComplexityProfile {
    /// Score for a single dimension.
    pub fn score(&self, dim: ComplexityDimension) -> i32 {
        match dim {
            ComplexityDimension::Somatic => self.somatic,
            ComplexityDimension::Intrapsychic => self.intrapsychic,
            ComplexityDimension::Relational => self.relational,
            ComplexityDimension::Collective => self.collective,
            ComplexityDimension::Systemic => self.systemic,
            ComplexityDimension::Transpersonal => self.transpersonal,
        }
    }

    /// `(dimension, score)` pairs in canonical order.
    pub fn scores(&self) -> impl Iterator<Item = (ComplexityDimension, i32)> + '_ {
        ComplexityDimension::ALL
            .into_iter()
            .map(move |dim| (dim, self.score(dim)))
    }

    /// Build a profile from scores given in canonical order.
    pub fn from_scores(scores: [i32; 6]) -> Self {
        let [somatic, intrapsychic, relational, collective, systemic, transpersonal] = scores;
        Self {
            somatic,
            intrapsychic,
            relational,
            collective,
            systemic,
            transpersonal,
        }
    }
}

/// Twelve-dimension outcome ratings, 1-5 (0 means "no evidence").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Effectiveness {
    pub adhd: i32,
    pub depression: i32,
    pub anxiety: i32,
    pub trauma: i32,
    pub focus: i32,
    pub metacognition: i32,
    pub insight: i32,
    pub compassion: i32,
    pub communication: i32,
    pub empathy: i32,
    pub body_awareness: i32,
    pub emotional_regulation: i32,
}

impl Effectiveness {
    /// Score for a single outcome.
    pub fn score(&self, dim: OutcomeDimension) -> i32 {
        match dim {
            OutcomeDimension::Adhd => self.adhd,
            OutcomeDimension::Depression => self.depression,
            OutcomeDimension::Anxiety => self.anxiety,
            OutcomeDimension::Trauma => self.trauma,
            OutcomeDimension::Focus => self.focus,
            OutcomeDimension::Metacognition => self.metacognition,
            OutcomeDimension::Insight => self.insight,
            OutcomeDimension::Compassion => self.compassion,
            OutcomeDimension::Communication => self.communication,
            OutcomeDimension::Empathy => self.empathy,
            OutcomeDimension::BodyAwareness => self.body_awareness,
            OutcomeDimension::EmotionalRegulation => self.emotional_regulation,
        }
    }

    /// Mutable access to a single outcome, used by importers.
    pub fn score_mut(&mut self, dim: OutcomeDimension) -> &mut i32 {
        match dim {
            OutcomeDimension::Adhd => &mut self.adhd,
            OutcomeDimension::Depression => &mut self.depression,
            OutcomeDimension::Anxiety => &mut self.anxiety,
            OutcomeDimension::Trauma => &mut self.trauma,
            OutcomeDimension::Focus => &mut self.focus,
            OutcomeDimension::Metacognition => &mut self.metacognition,
            OutcomeDimension::Insight => &mut self.insight,
            OutcomeDimension::Compassion => &mut self.compassion,
            OutcomeDimension::Communication => &mut self.communication,
            OutcomeDimension::Empathy => &mut self.empathy,
            OutcomeDimension::BodyAwareness => &mut self.body_awareness,
            OutcomeDimension::EmotionalRegulation => &mut self.emotional_regulation,
        }
    }

    /// `(dimension, score)` pairs in canonical order.
    pub fn scores(&self) -> impl Iterator<Item = (OutcomeDimension, i32)> + '_ {
        OutcomeDimension::ALL
            .into_iter()
            .map(move |dim| (dim, self.score(dim)))
    }

    /// Build ratings from scores given in canonical order.
    pub fn from_scores(scores: [i32; 12]) -> Self {
        let mut eff = Self::default();
        for (dim, value) in OutcomeDimension::ALL.into_iter().zip(scores) {
            *eff.score_mut(dim) = value;
        }
        eff
    }
}

// ============================================================================
// Tradition
// ============================================================================

/// One catalogued practice or therapeutic modality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tradition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub origin: String,
    /// Negative years are BCE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_origin: Option<i32>,
    #[serde(default)]
    pub parent_traditions: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub practices: Vec<String>,
    #[serde(default)]
    pub time_commitment: String,
    #[serde(default)]
    pub guidance_needed: String,
    #[serde(default)]
    pub accessibility: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity_profile: Option<ComplexityProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effectiveness: Option<Effectiveness>,
    /// `Low`, `Medium`, `High` or `Very High`.
    #[serde(default)]
    pub research_support: String,
    #[serde(default)]
    pub citations: Vec<String>,
    /// Keys outside the schema, kept so rewrites do not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tradition {
    /// A bare record with only identity fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            origin: String::new(),
            year_origin: None,
            parent_traditions: Vec::new(),
            description: String::new(),
            practices: Vec::new(),
            time_commitment: String::new(),
            guidance_needed: String::new(),
            accessibility: String::new(),
            complexity_profile: None,
            effectiveness: None,
            research_support: String::new(),
            citations: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year_origin = Some(year);
        self
    }

    pub fn with_profile(mut self, profile: ComplexityProfile) -> Self {
        self.complexity_profile = Some(profile);
        self
    }

    pub fn with_effectiveness(mut self, effectiveness: Effectiveness) -> Self {
        self.effectiveness = Some(effectiveness);
        self
    }
}

// ============================================================================
// Document
// ============================================================================

/// Grouping of outcome dimensions, kept as descriptive metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionGroups {
    #[serde(default)]
    pub mental_health: Vec<String>,
    #[serde(default)]
    pub cognitive: Vec<String>,
    #[serde(default)]
    pub relational: Vec<String>,
    #[serde(default)]
    pub somatic: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DimensionGroups {
    /// The fixed grouping written by spreadsheet imports.
    pub fn standard() -> Self {
        let group = |dims: &[OutcomeDimension]| -> Vec<String> {
            dims.iter().map(|d| d.as_str().to_string()).collect()
        };
        Self {
            mental_health: group(&[
                OutcomeDimension::Adhd,
                OutcomeDimension::Depression,
                OutcomeDimension::Anxiety,
                OutcomeDimension::Trauma,
            ]),
            cognitive: group(&[
                OutcomeDimension::Focus,
                OutcomeDimension::Metacognition,
                OutcomeDimension::Insight,
            ]),
            relational: group(&[
                OutcomeDimension::Compassion,
                OutcomeDimension::Communication,
                OutcomeDimension::Empathy,
            ]),
            somatic: group(&[
                OutcomeDimension::BodyAwareness,
                OutcomeDimension::EmotionalRegulation,
            ]),
            extra: BTreeMap::new(),
        }
    }
}

/// The fixed rating scale written by spreadsheet imports.
pub fn standard_scale() -> BTreeMap<String, String> {
    [
        ("1", "Minimal/No evidence"),
        ("2", "Low effectiveness"),
        ("3", "Moderate effectiveness"),
        ("4", "High effectiveness"),
        ("5", "Very high effectiveness"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Top-level shape of `data/traditions.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraditionsDocument {
    pub traditions: Vec<Tradition>,
    #[serde(default)]
    pub dimensions: DimensionGroups,
    #[serde(default)]
    pub scale: BTreeMap<String, String>,
}

impl TraditionsDocument {
    /// A document with the standard metadata blocks.
    pub fn with_traditions(traditions: Vec<Tradition>) -> Self {
        Self {
            traditions,
            dimensions: DimensionGroups::standard(),
            scale: standard_scale(),
        }
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&Tradition> {
        self.traditions.iter().find(|t| t.id == id)
    }
}
