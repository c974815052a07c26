//! Correlation and pattern mining over the traditions dataset.
//!
//! An [`Analyzer`] borrows the loaded records and exposes seven independent
//! passes. Each pass returns typed findings; [`report::Report`] renders them
//! as the plain-text report.
//!
//! ```text
//! &[Tradition]
//!   ↓  Analyzer::new()
//!   ├─ dimension_correlations()      complexity × complexity
//!   ├─ outcome_correlations()        complexity × effectiveness
//!   ├─ specialists()                 one dominant dimension, high spread
//!   ├─ counter_intuitive_patterns()  fixed-threshold scans
//!   ├─ origin_signatures()           per-origin means
//!   ├─ historical_shifts()           modern vs ancient means
//!   └─ powerful_combinations()       broad scope + broad effect
//! ```

pub mod report;
pub mod stats;

use crate::dataset::{
    ComplexityDimension, ComplexityProfile, Effectiveness, OutcomeDimension, Tradition,
};

use stats::{correlation, mean, variance};

pub use report::Report;

// ============================================================================
// Thresholds
// ============================================================================

/// Minimum |r| for a complexity pair to be reported.
pub const DIMENSION_CORRELATION_THRESHOLD: f64 = 0.3;
/// Minimum |r| for a complexity → effectiveness pair to be reported.
pub const OUTCOME_CORRELATION_THRESHOLD: f64 = 0.4;
/// Records needed (with both score blocks) before outcome correlations run.
pub const OUTCOME_CORRELATION_MIN_RECORDS: usize = 6;
/// Specialist: peak score at least this high...
pub const SPECIALIST_MIN_PEAK: i32 = 5;
/// ...and population variance strictly above this.
pub const SPECIALIST_MIN_VARIANCE: f64 = 2.0;
/// Origins need at least this many profiled records.
pub const ORIGIN_MIN_MEMBERS: usize = 2;
/// Mean at or above which an origin is called out for a dimension.
pub const ORIGIN_HIGH_MEAN: f64 = 4.5;
/// Records founded after this year are "modern".
pub const MODERN_AFTER_YEAR: i32 = 1950;
/// Records founded before this year are "ancient".
pub const ANCIENT_BEFORE_YEAR: i32 = 0;
/// Minimum |modern - ancient| for a dimension to be reported.
pub const HISTORICAL_SHIFT_THRESHOLD: f64 = 0.5;
/// Complexity score that counts as "high" for combinations.
pub const COMBINATION_COMPLEXITY_SCORE: i32 = 5;
/// Effectiveness score that counts as "high" for combinations.
pub const COMBINATION_EFFECTIVENESS_SCORE: i32 = 4;
/// High complexity dimensions needed for a combination.
pub const COMBINATION_MIN_COMPLEXITY_DIMS: usize = 3;
/// High effectiveness scores needed for a combination.
pub const COMBINATION_MIN_EFFECTIVENESS_DIMS: usize = 6;

/// Dimensions inspected per origin, in report order.
pub const ORIGIN_SIGNATURE_DIMENSIONS: [ComplexityDimension; 3] = [
    ComplexityDimension::Somatic,
    ComplexityDimension::Transpersonal,
    ComplexityDimension::Relational,
];

// ============================================================================
// Findings
// ============================================================================

/// Pass 1: correlated complexity dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionCorrelation {
    pub first: ComplexityDimension,
    pub second: ComplexityDimension,
    pub r: f64,
}

/// Pass 2: complexity dimension predicting an outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeCorrelation {
    pub complexity: ComplexityDimension,
    pub outcome: OutcomeDimension,
    pub r: f64,
}

/// Pass 3: a tradition concentrated on one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Specialist<'a> {
    pub name: &'a str,
    /// First dimension (canonical order) holding the peak score.
    pub dominant: ComplexityDimension,
    pub peak: i32,
    pub variance: f64,
}

/// Pass 4: a record contradicting an intuitive expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntuitive<'a> {
    /// Little body work, yet strong trauma outcomes.
    LowSomaticHighTrauma {
        name: &'a str,
        somatic: i32,
        trauma: i32,
    },
    /// Collective scope without relational scope.
    HighCollectiveLowRelational {
        name: &'a str,
        collective: i32,
        relational: i32,
    },
    /// Strongly transpersonal, weak for ADHD.
    HighTranspersonalLowAdhd { name: &'a str },
}

/// Pass 5: an origin whose traditions share a high mean on one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginSignature<'a> {
    pub origin: &'a str,
    pub dimension: ComplexityDimension,
    pub mean: f64,
}

/// Direction of a historical shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
        }
    }
}

/// Pass 6: a dimension whose mean moved between ancient and modern records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalShift {
    pub dimension: ComplexityDimension,
    pub ancient_mean: f64,
    pub modern_mean: f64,
}

impl HistoricalShift {
    pub fn trend(&self) -> Trend {
        if self.modern_mean - self.ancient_mean > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Pass 7: broad scope combined with broad effectiveness.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerfulCombination<'a> {
    pub name: &'a str,
    pub high_complexity: Vec<ComplexityDimension>,
    pub high_effectiveness: usize,
}

// ============================================================================
// Analyzer
// ============================================================================

/// Read-only view over the dataset that runs the analysis passes.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    traditions: &'a [Tradition],
}

impl<'a> Analyzer<'a> {
    pub fn new(traditions: &'a [Tradition]) -> Self {
        Self { traditions }
    }

    fn profiled(&self) -> impl Iterator<Item = (&'a Tradition, &'a ComplexityProfile)> + 'a {
        self.traditions
            .iter()
            .filter_map(|t| t.complexity_profile.as_ref().map(|p| (t, p)))
    }

    fn fully_scored(
        &self,
    ) -> impl Iterator<Item = (&'a Tradition, &'a ComplexityProfile, &'a Effectiveness)> + 'a {
        self.traditions.iter().filter_map(|t| {
            match (t.complexity_profile.as_ref(), t.effectiveness.as_ref()) {
                (Some(p), Some(e)) => Some((t, p, e)),
                _ => None,
            }
        })
    }

    /// Pass 1: every unordered pair of complexity dimensions with |r| above
    /// [`DIMENSION_CORRELATION_THRESHOLD`].
    pub fn dimension_correlations(&self) -> Vec<DimensionCorrelation> {
        let dims = ComplexityDimension::ALL;
        let mut found = Vec::new();

        for (i, &first) in dims.iter().enumerate() {
            for &second in &dims[i + 1..] {
                let (xs, ys): (Vec<f64>, Vec<f64>) = self
                    .profiled()
                    .map(|(_, p)| (p.score(first) as f64, p.score(second) as f64))
                    .unzip();
                let r = correlation(&xs, &ys);
                if r.abs() > DIMENSION_CORRELATION_THRESHOLD {
                    found.push(DimensionCorrelation { first, second, r });
                }
            }
        }

        tracing::debug!(count = found.len(), "Complexity cross-correlation done");
        found
    }

    /// Pass 2: complexity → effectiveness pairs with |r| above
    /// [`OUTCOME_CORRELATION_THRESHOLD`], given enough fully scored records.
    pub fn outcome_correlations(&self) -> Vec<OutcomeCorrelation> {
        let scored: Vec<_> = self.fully_scored().collect();
        if scored.len() < OUTCOME_CORRELATION_MIN_RECORDS {
            tracing::debug!(
                records = scored.len(),
                "Too few fully scored records for outcome correlation"
            );
            return Vec::new();
        }

        let mut found = Vec::new();
        for complexity in ComplexityDimension::ALL {
            for outcome in OutcomeDimension::ALL {
                let (xs, ys): (Vec<f64>, Vec<f64>) = scored
                    .iter()
                    .map(|(_, p, e)| (p.score(complexity) as f64, e.score(outcome) as f64))
                    .unzip();
                let r = correlation(&xs, &ys);
                if r.abs() > OUTCOME_CORRELATION_THRESHOLD {
                    found.push(OutcomeCorrelation {
                        complexity,
                        outcome,
                        r,
                    });
                }
            }
        }

        tracing::debug!(count = found.len(), "Outcome correlation done");
        found
    }

    /// Pass 3: records peaking at [`SPECIALIST_MIN_PEAK`] with variance above
    /// [`SPECIALIST_MIN_VARIANCE`].
    pub fn specialists(&self) -> Vec<Specialist<'a>> {
        self.profiled()
            .filter_map(|(t, p)| {
                let values: Vec<f64> = p.scores().map(|(_, v)| v as f64).collect();
                let peak = p.scores().map(|(_, v)| v).max()?;
                let spread = variance(&values);
                if peak < SPECIALIST_MIN_PEAK || spread <= SPECIALIST_MIN_VARIANCE {
                    return None;
                }
                let dominant = p.scores().find(|(_, v)| *v == peak).map(|(d, _)| d)?;
                Some(Specialist {
                    name: &t.name,
                    dominant,
                    peak,
                    variance: spread,
                })
            })
            .collect()
    }

    /// Pass 4: three fixed-threshold scans, reported scan by scan.
    pub fn counter_intuitive_patterns(&self) -> Vec<CounterIntuitive<'a>> {
        let mut found = Vec::new();

        found.extend(self.fully_scored().filter_map(|(t, p, e)| {
            (p.somatic <= 2 && e.trauma >= 4).then(|| CounterIntuitive::LowSomaticHighTrauma {
                name: &t.name,
                somatic: p.somatic,
                trauma: e.trauma,
            })
        }));

        found.extend(self.profiled().filter_map(|(t, p)| {
            (p.collective >= 4 && p.relational <= 2).then(|| {
                CounterIntuitive::HighCollectiveLowRelational {
                    name: &t.name,
                    collective: p.collective,
                    relational: p.relational,
                }
            })
        }));

        found.extend(self.fully_scored().filter_map(|(t, p, e)| {
            (p.transpersonal >= 5 && e.adhd <= 2)
                .then(|| CounterIntuitive::HighTranspersonalLowAdhd { name: &t.name })
        }));

        found
    }

    /// Pass 5: per-origin means of somatic, transpersonal and relational scope.
    ///
    /// Origins are matched exactly and reported in order of first appearance.
    pub fn origin_signatures(&self) -> Vec<OriginSignature<'a>> {
        let mut groups: Vec<(&'a str, Vec<&'a ComplexityProfile>)> = Vec::new();
        for (t, p) in self.profiled() {
            match groups.iter_mut().find(|(origin, _)| *origin == t.origin) {
                Some((_, members)) => members.push(p),
                None => groups.push((t.origin.as_str(), vec![p])),
            }
        }

        let mut found = Vec::new();
        for (origin, members) in groups {
            if members.len() < ORIGIN_MIN_MEMBERS {
                continue;
            }
            for dimension in ORIGIN_SIGNATURE_DIMENSIONS {
                let values: Vec<f64> = members.iter().map(|p| p.score(dimension) as f64).collect();
                let avg = mean(&values);
                if avg >= ORIGIN_HIGH_MEAN {
                    found.push(OriginSignature {
                        origin,
                        dimension,
                        mean: avg,
                    });
                }
            }
        }
        found
    }

    /// Pass 6: modern (after 1950) vs ancient (BCE) means per dimension.
    ///
    /// Undated records count as year 0 and so fall in neither group.
    pub fn historical_shifts(&self) -> Vec<HistoricalShift> {
        let year = |t: &Tradition| t.year_origin.unwrap_or(0);
        let modern: Vec<&Tradition> = self
            .traditions
            .iter()
            .filter(|t| year(*t) > MODERN_AFTER_YEAR)
            .collect();
        let ancient: Vec<&Tradition> = self
            .traditions
            .iter()
            .filter(|t| year(*t) < ANCIENT_BEFORE_YEAR)
            .collect();

        if modern.is_empty() || ancient.is_empty() {
            return Vec::new();
        }

        let column = |group: &[&Tradition], dim: ComplexityDimension| -> Vec<f64> {
            group
                .iter()
                .filter_map(|t| t.complexity_profile.as_ref())
                .map(|p| p.score(dim) as f64)
                .collect()
        };

        let mut found = Vec::new();
        for dimension in ComplexityDimension::ALL {
            let modern_vals = column(&modern, dimension);
            let ancient_vals = column(&ancient, dimension);
            if modern_vals.is_empty() || ancient_vals.is_empty() {
                continue;
            }
            let modern_mean = mean(&modern_vals);
            let ancient_mean = mean(&ancient_vals);
            if (modern_mean - ancient_mean).abs() > HISTORICAL_SHIFT_THRESHOLD {
                found.push(HistoricalShift {
                    dimension,
                    ancient_mean,
                    modern_mean,
                });
            }
        }
        found
    }

    /// Pass 7: records with many top complexity scores and many high
    /// effectiveness scores.
    pub fn powerful_combinations(&self) -> Vec<PowerfulCombination<'a>> {
        self.fully_scored()
            .filter_map(|(t, p, e)| {
                let high_complexity: Vec<ComplexityDimension> = p
                    .scores()
                    .filter(|(_, v)| *v >= COMBINATION_COMPLEXITY_SCORE)
                    .map(|(d, _)| d)
                    .collect();
                if high_complexity.len() < COMBINATION_MIN_COMPLEXITY_DIMS {
                    return None;
                }
                let high_effectiveness = e
                    .scores()
                    .filter(|(_, v)| *v >= COMBINATION_EFFECTIVENESS_SCORE)
                    .count();
                if high_effectiveness < COMBINATION_MIN_EFFECTIVENESS_DIMS {
                    return None;
                }
                Some(PowerfulCombination {
                    name: &t.name,
                    high_complexity,
                    high_effectiveness,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiled(id: &str, scores: [i32; 6]) -> Tradition {
        Tradition::new(id, id.to_uppercase()).with_profile(ComplexityProfile::from_scores(scores))
    }

    fn scored(id: &str, scores: [i32; 6], eff: [i32; 12]) -> Tradition {
        profiled(id, scores).with_effectiveness(Effectiveness::from_scores(eff))
    }

    #[test]
    fn test_dimension_correlations_upper_triangle() {
        // somatic and intrapsychic move together, everything else varies independently.
        let data = vec![
            profiled("a", [1, 1, 3, 2, 5, 1]),
            profiled("b", [2, 2, 1, 5, 2, 4]),
            profiled("c", [3, 3, 4, 1, 4, 2]),
            profiled("d", [4, 4, 2, 4, 1, 5]),
        ];
        let found = Analyzer::new(&data).dimension_correlations();
        let pair = found
            .iter()
            .find(|c| {
                c.first == ComplexityDimension::Somatic
                    && c.second == ComplexityDimension::Intrapsychic
            })
            .unwrap();
        assert!((pair.r - 1.0).abs() < 1e-12);
        for c in &found {
            let i = ComplexityDimension::ALL.iter().position(|d| *d == c.first).unwrap();
            let j = ComplexityDimension::ALL.iter().position(|d| *d == c.second).unwrap();
            assert!(i < j);
            assert!(c.r.abs() > DIMENSION_CORRELATION_THRESHOLD);
        }
    }

    #[test]
    fn test_dimension_correlations_skip_unprofiled() {
        let data = vec![
            profiled("a", [1, 1, 1, 1, 1, 1]),
            Tradition::new("b", "B"),
            profiled("c", [5, 5, 1, 1, 1, 1]),
        ];
        let found = Analyzer::new(&data).dimension_correlations();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first, ComplexityDimension::Somatic);
        assert_eq!(found[0].second, ComplexityDimension::Intrapsychic);
    }

    #[test]
    fn test_outcome_correlations_need_six_records() {
        let eff = |t: i32| {
            let mut e = [3; 12];
            e[3] = t;
            e
        };
        let mut data: Vec<Tradition> = (1..=5)
            .map(|i| scored(&format!("t{}", i), [i, 3, 3, 3, 3, 3], eff(i)))
            .collect();
        assert!(Analyzer::new(&data).outcome_correlations().is_empty());

        data.push(scored("t6", [5, 3, 3, 3, 3, 3], eff(5)));
        let found = Analyzer::new(&data).outcome_correlations();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].complexity, ComplexityDimension::Somatic);
        assert_eq!(found[0].outcome, OutcomeDimension::Trauma);
        assert!(found[0].r > 0.99);
    }

    #[test]
    fn test_specialist_detected() {
        let data = vec![profiled("s", [5, 1, 1, 1, 1, 1])];
        let found = Analyzer::new(&data).specialists();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].dominant, ComplexityDimension::Somatic);
        assert_eq!(found[0].peak, 5);
        assert!((found[0].variance - 20.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_specialist_tie_reports_first_dimension() {
        let data = vec![profiled("s", [1, 1, 5, 1, 1, 5])];
        let found = Analyzer::new(&data).specialists();
        assert_eq!(found[0].dominant, ComplexityDimension::Relational);
    }

    #[test]
    fn test_generalist_not_specialist() {
        let data = vec![profiled("g", [5, 4, 5, 4, 5, 4]), profiled("low", [4, 1, 1, 1, 1, 1])];
        assert!(Analyzer::new(&data).specialists().is_empty());
    }

    #[test]
    fn test_low_somatic_high_trauma() {
        let mut eff = [3; 12];
        eff[3] = 5;
        let data = vec![
            scored("hit", [1, 4, 3, 2, 2, 3], eff),
            scored("miss", [3, 4, 3, 2, 2, 3], eff),
        ];
        let found = Analyzer::new(&data).counter_intuitive_patterns();
        assert_eq!(
            found,
            vec![CounterIntuitive::LowSomaticHighTrauma {
                name: "HIT",
                somatic: 1,
                trauma: 5
            }]
        );
    }

    #[test]
    fn test_counter_intuitive_scan_order() {
        let mut eff = [3; 12];
        eff[0] = 1;
        let data = vec![
            scored("mystic", [3, 3, 3, 3, 3, 5], eff),
            profiled("activist", [2, 2, 1, 5, 4, 1]),
        ];
        let found = Analyzer::new(&data).counter_intuitive_patterns();
        assert_eq!(
            found,
            vec![
                CounterIntuitive::HighCollectiveLowRelational {
                    name: "ACTIVIST",
                    collective: 5,
                    relational: 1
                },
                CounterIntuitive::HighTranspersonalLowAdhd { name: "MYSTIC" },
            ]
        );
    }

    #[test]
    fn test_origin_signatures() {
        let data = vec![
            profiled("a", [5, 2, 5, 1, 1, 4]).with_origin("Yoga"),
            profiled("b", [4, 2, 4, 1, 1, 5]).with_origin("Yoga"),
            profiled("c", [5, 5, 5, 5, 5, 5]).with_origin("Solo"),
            profiled("d", [5, 2, 5, 1, 1, 5]).with_origin("yoga"),
        ];
        let found = Analyzer::new(&data).origin_signatures();
        assert_eq!(
            found,
            vec![
                OriginSignature {
                    origin: "Yoga",
                    dimension: ComplexityDimension::Somatic,
                    mean: 4.5
                },
                OriginSignature {
                    origin: "Yoga",
                    dimension: ComplexityDimension::Transpersonal,
                    mean: 4.5
                },
                OriginSignature {
                    origin: "Yoga",
                    dimension: ComplexityDimension::Relational,
                    mean: 4.5
                },
            ]
        );
    }

    #[test]
    fn test_historical_shift() {
        let data = vec![
            profiled("modern", [3, 3, 3, 3, 3, 5]).with_year(2000),
            profiled("ancient", [3, 3, 3, 3, 3, 2]).with_year(-600),
        ];
        let found = Analyzer::new(&data).historical_shifts();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].dimension, ComplexityDimension::Transpersonal);
        assert_eq!(found[0].ancient_mean, 2.0);
        assert_eq!(found[0].modern_mean, 5.0);
        assert_eq!(found[0].trend(), Trend::Up);
    }

    #[test]
    fn test_historical_shift_ignores_undated() {
        let data = vec![
            profiled("undated", [5, 5, 5, 5, 5, 5]),
            profiled("ancient", [1, 1, 1, 1, 1, 1]).with_year(-600),
        ];
        assert!(Analyzer::new(&data).historical_shifts().is_empty());
    }

    #[test]
    fn test_historical_shift_downward() {
        let data = vec![
            profiled("modern", [1, 3, 3, 3, 3, 3]).with_year(1990),
            Tradition::new("modern-unscored", "M").with_year(2010),
            profiled("ancient", [4, 3, 3, 3, 3, 3]).with_year(-1000),
        ];
        let found = Analyzer::new(&data).historical_shifts();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].trend(), Trend::Down);
    }

    #[test]
    fn test_powerful_combination() {
        let eff = [4, 4, 5, 4, 5, 4, 4, 5, 2, 3, 2, 1];
        let data = vec![
            scored("broad", [5, 5, 5, 5, 5, 2], eff),
            scored("narrow", [5, 5, 4, 4, 4, 4], [5; 12]),
        ];
        let found = Analyzer::new(&data).powerful_combinations();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "BROAD");
        assert_eq!(found[0].high_complexity.len(), 5);
        assert_eq!(found[0].high_effectiveness, 8);
    }

    #[test]
    fn test_powerful_combination_needs_effectiveness() {
        let data = vec![
            profiled("no-eff", [5, 5, 5, 5, 5, 5]),
            scored("weak", [5, 5, 5, 5, 5, 5], [4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 3, 3]),
        ];
        assert!(Analyzer::new(&data).powerful_combinations().is_empty());
    }
}
