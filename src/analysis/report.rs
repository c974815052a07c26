//! Plain-text rendering of the seven analysis passes.

use std::fmt;

use super::{
    Analyzer, CounterIntuitive, DimensionCorrelation, HistoricalShift, OriginSignature,
    OutcomeCorrelation, PowerfulCombination, Specialist,
};

const DIVIDER_WIDTH: usize = 50;

/// All findings of one run, in report order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<'a> {
    pub dimension_correlations: Vec<DimensionCorrelation>,
    pub outcome_correlations: Vec<OutcomeCorrelation>,
    pub specialists: Vec<Specialist<'a>>,
    pub counter_intuitive: Vec<CounterIntuitive<'a>>,
    pub origin_signatures: Vec<OriginSignature<'a>>,
    pub historical_shifts: Vec<HistoricalShift>,
    pub powerful_combinations: Vec<PowerfulCombination<'a>>,
}

impl<'a> Report<'a> {
    /// Run every pass once.
    pub fn build(analyzer: &Analyzer<'a>) -> Self {
        let report = Self {
            dimension_correlations: analyzer.dimension_correlations(),
            outcome_correlations: analyzer.outcome_correlations(),
            specialists: analyzer.specialists(),
            counter_intuitive: analyzer.counter_intuitive_patterns(),
            origin_signatures: analyzer.origin_signatures(),
            historical_shifts: analyzer.historical_shifts(),
            powerful_combinations: analyzer.powerful_combinations(),
        };
        tracing::debug!(findings = report.finding_count(), "Analysis complete");
        report
    }

    /// Total number of findings across all sections.
    pub fn finding_count(&self) -> usize {
        self.dimension_correlations.len()
            + self.outcome_correlations.len()
            + self.specialists.len()
            + self.counter_intuitive.len()
            + self.origin_signatures.len()
            + self.historical_shifts.len()
            + self.powerful_combinations.len()
    }
}

fn section(f: &mut fmt::Formatter<'_>, number: u8, title: &str) -> fmt::Result {
    if number > 1 {
        writeln!(f)?;
    }
    writeln!(f, "{}. {}", number, title)?;
    writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== CORRELATION ANALYSIS ===")?;
        writeln!(f)?;

        section(f, 1, "COMPLEXITY DIMENSION CORRELATIONS")?;
        for c in &self.dimension_correlations {
            writeln!(f, "{} <-> {}: {:.3}", c.first, c.second, c.r)?;
        }

        section(f, 2, "COMPLEXITY → EFFECTIVENESS CORRELATIONS")?;
        for c in &self.outcome_correlations {
            writeln!(f, "{} → {}: {:.3}", c.complexity, c.outcome, c.r)?;
        }

        section(f, 3, "SPECIALISTS VS GENERALISTS")?;
        for s in &self.specialists {
            writeln!(
                f,
                "SPECIALIST - {}: {} ({}), variance={:.2}",
                s.name, s.dominant, s.peak, s.variance
            )?;
        }

        section(f, 4, "COUNTER-INTUITIVE PATTERNS")?;
        for p in &self.counter_intuitive {
            match p {
                CounterIntuitive::LowSomaticHighTrauma {
                    name,
                    somatic,
                    trauma,
                } => writeln!(
                    f,
                    "Low somatic + High trauma: {} (somatic={}, trauma={})",
                    name, somatic, trauma
                )?,
                CounterIntuitive::HighCollectiveLowRelational {
                    name,
                    collective,
                    relational,
                } => writeln!(
                    f,
                    "High collective + Low relational: {} (collective={}, relational={})",
                    name, collective, relational
                )?,
                CounterIntuitive::HighTranspersonalLowAdhd { name } => {
                    writeln!(f, "High transpersonal + Low ADHD: {}", name)?
                }
            }
        }

        section(f, 5, "PATTERNS BY ORIGIN/CULTURE")?;
        for o in &self.origin_signatures {
            writeln!(f, "{}: HIGH {} (avg={:.1})", o.origin, o.dimension, o.mean)?;
        }

        section(f, 6, "HISTORICAL EVOLUTION")?;
        for h in &self.historical_shifts {
            writeln!(
                f,
                "{}: Ancient={:.2} → Modern={:.2} {}",
                h.dimension,
                h.ancient_mean,
                h.modern_mean,
                h.trend().arrow()
            )?;
        }

        section(f, 7, "POWERFUL COMBINATIONS")?;
        for c in &self.powerful_combinations {
            writeln!(
                f,
                "{}: {} high complexity dims + {} high effectiveness scores",
                c.name,
                c.high_complexity.len(),
                c.high_effectiveness
            )?;
            let dims: Vec<&str> = c.high_complexity.iter().map(|d| d.as_str()).collect();
            writeln!(f, "  High in: {}", dims.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "=== ANALYSIS COMPLETE ===")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ComplexityProfile, DatasetStore, Effectiveness, Tradition};

    fn sample() -> Vec<Tradition> {
        vec![
            Tradition::new("somatic-specialist", "Body Scan")
                .with_origin("Clinical")
                .with_year(1979)
                .with_profile(ComplexityProfile::from_scores([5, 1, 1, 1, 1, 1]))
                .with_effectiveness(Effectiveness::from_scores([3; 12])),
            Tradition::new("talk", "Talk Therapy")
                .with_origin("Clinical")
                .with_year(1960)
                .with_profile(ComplexityProfile::from_scores([1, 5, 4, 2, 2, 1]))
                .with_effectiveness(Effectiveness::from_scores([
                    3, 4, 4, 5, 3, 4, 4, 3, 4, 3, 2, 4,
                ])),
            Tradition::new("ancient", "Ancient Rite")
                .with_origin("Old World")
                .with_year(-600)
                .with_profile(ComplexityProfile::from_scores([2, 2, 3, 3, 2, 5])),
            Tradition::new("integral", "Integral Practice")
                .with_origin("Integral")
                .with_year(2008)
                .with_profile(ComplexityProfile::from_scores([5, 5, 5, 5, 5, 5]))
                .with_effectiveness(Effectiveness::from_scores([4; 12])),
        ]
    }

    #[test]
    fn test_report_sections_in_order() {
        let data = sample();
        let text = Report::build(&Analyzer::new(&data)).to_string();

        let titles = [
            "1. COMPLEXITY DIMENSION CORRELATIONS",
            "2. COMPLEXITY → EFFECTIVENESS CORRELATIONS",
            "3. SPECIALISTS VS GENERALISTS",
            "4. COUNTER-INTUITIVE PATTERNS",
            "5. PATTERNS BY ORIGIN/CULTURE",
            "6. HISTORICAL EVOLUTION",
            "7. POWERFUL COMBINATIONS",
        ];
        let mut last = 0;
        for title in titles {
            let pos = text.find(title).unwrap();
            assert!(pos >= last);
            last = pos;
            assert!(text.contains(&format!("{}\n{}\n", title, "-".repeat(50))));
        }
        assert!(text.starts_with("=== CORRELATION ANALYSIS ===\n\n1."));
        assert!(text.ends_with("\n\n=== ANALYSIS COMPLETE ===\n"));
    }

    #[test]
    fn test_report_lines() {
        let data = sample();
        let text = Report::build(&Analyzer::new(&data)).to_string();

        assert!(text.contains("SPECIALIST - Body Scan: somatic (5), variance=2.22\n"));
        assert!(text.contains("Low somatic + High trauma: Talk Therapy (somatic=1, trauma=5)\n"));
        assert!(text.contains("transpersonal: Ancient=5.00 → Modern=2.33 ↓\n"));
        assert!(text.contains(
            "Integral Practice: 6 high complexity dims + 12 high effectiveness scores\n"
        ));
        assert!(text.contains(
            "  High in: somatic, intrapsychic, relational, collective, systemic, transpersonal\n"
        ));
    }

    #[test]
    fn test_origin_line_format() {
        let data = vec![
            Tradition::new("a", "A")
                .with_origin("Hatha")
                .with_profile(ComplexityProfile::from_scores([5, 2, 2, 2, 2, 2])),
            Tradition::new("b", "B")
                .with_origin("Hatha")
                .with_profile(ComplexityProfile::from_scores([4, 2, 2, 2, 2, 2])),
        ];
        let text = Report::build(&Analyzer::new(&data)).to_string();
        assert!(text.contains("Hatha: HIGH somatic (avg=4.5)\n"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traditions.json");
        std::fs::copy(
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/traditions.json"),
            &path,
        )
        .unwrap();
        let store = DatasetStore::new(&path);

        let render = || {
            let doc = store.load().unwrap();
            Report::build(&Analyzer::new(&doc.traditions)).to_string()
        };
        let first = render();
        let second = render();

        assert!(first.starts_with("=== CORRELATION ANALYSIS ==="));
        assert!(first.ends_with("=== ANALYSIS COMPLETE ===\n"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_dataset_renders_all_sections() {
        let report = Report::build(&Analyzer::new(&[]));
        assert_eq!(report.finding_count(), 0);
        assert_eq!(report.to_string().matches(&"-".repeat(50)).count(), 7);
    }
}
