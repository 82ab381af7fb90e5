use crate::{
    AlphabetGenerator, Config, Error, GeneratorRegistry, IdGenerator, Result,
    TimeOrderedGenerator, collision_probability, format_report, parse_input, simulate,
};

/// Number of Monte Carlo draws performed per analysis request.
pub const DEFAULT_SIM_ITERATIONS: usize = 1_000_000;

/// A canonical input together with a short description of what it
/// demonstrates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Example {
    pub input: &'static str,
    pub description: &'static str,
}

/// Orchestrates a full collision analysis: parse, select a generator,
/// calculate the closed-form probability, cross-validate by simulation, and
/// format the combined report.
///
/// The analyzer owns the generator catalog, seeded once at construction with
/// the three known schemes and read-only afterwards.
///
/// # Example
///
/// ```
/// use idclash::CollisionAnalyzer;
///
/// let analyzer = CollisionAnalyzer::new();
/// let report = analyzer.analyze("base62:8:500/sec").unwrap();
/// assert!(report.contains("Mathematical Results:"));
/// assert!(report.contains("Simulation Results:"));
/// ```
pub struct CollisionAnalyzer {
    registry: GeneratorRegistry,
}

impl Default for CollisionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionAnalyzer {
    /// Creates an analyzer with the three known generators catalogued in
    /// their default shapes.
    pub fn new() -> Self {
        let mut registry = GeneratorRegistry::new();
        registry.register(Box::new(
            AlphabetGenerator::base64(8).expect("default base64 length is positive"),
        ));
        registry.register(Box::new(
            AlphabetGenerator::base62(10).expect("default base62 length is positive"),
        ));
        registry.register(Box::new(TimeOrderedGenerator::new(0)));
        Self { registry }
    }

    /// Read access to the ordered generator catalog.
    pub fn generators(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Runs one analysis request end to end and returns the text report.
    ///
    /// `input` follows the grammar `format:length:rate/unit`, e.g.
    /// `"base64:10:1000/sec"`. Every failure (malformed grammar, unknown
    /// generator or unit, unusable length, degenerate math inputs) is
    /// returned as an [`Error`] carrying a human-readable description;
    /// nothing is retried or logged on the error path.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn analyze(&self, input: &str) -> Result<String> {
        let config = parse_input(input)?;
        let generator = self.build_generator(&config)?;
        let rate_per_sec = normalize_rate(config.rate, &config.rate_unit)?;
        tracing::debug!(
            format = %config.format,
            rate_per_sec,
            "analysis request accepted"
        );

        let total_ids = rate_per_sec;
        let math = collision_probability(total_ids, generator.total_space())?;
        let sim = simulate(generator.as_ref(), DEFAULT_SIM_ITERATIONS)?;

        Ok(format_report(
            &config.format,
            config.length,
            rate_per_sec,
            &math,
            &sim,
        ))
    }

    /// Usage text for interactive hosts.
    pub fn help(&self) -> String {
        let supported: Vec<_> = self.registry.names().collect();
        format!(
            "Analyzes the probability of ID collisions for various generation schemes.\n\
             \n\
             Input format: format:length:rate/unit\n\
             \n\
             Formats: {}\n\
             Rate units: sec (second), min (minute), ms (millisecond), ns (nanosecond)\n\
             \n\
             Examples:\n\
             {}\n\
             \n\
             The analysis includes:\n\
             - Mathematical calculation using the birthday paradox\n\
             - Actual simulation with generated IDs\n\
             - Time to collision at 50%, 1%, and 0.1% probabilities\n\
             - Comparison between theoretical and empirical results\n",
            supported.join(", "),
            self.examples()
                .iter()
                .map(|example| format!("  {:<22} - {}", example.input, example.description))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// Canonical inputs suitable for an interactive host's suggestions.
    pub fn examples(&self) -> Vec<Example> {
        vec![
            Example {
                input: "base64:10:1000/sec",
                description: "Analyze 10-character Base64 IDs at 1000/sec",
            },
            Example {
                input: "base62:8:500/min",
                description: "Analyze 8-character Base62 IDs at 500/min",
            },
            Example {
                input: "snowflake:0:10000/ms",
                description: "Analyze snowflake IDs at 10000/ms",
            },
        ]
    }

    fn build_generator(&self, config: &Config) -> Result<Box<dyn IdGenerator>> {
        match config.format.as_str() {
            "base64" => Ok(Box::new(AlphabetGenerator::base64(config.length)?)),
            "base62" => Ok(Box::new(AlphabetGenerator::base62(config.length)?)),
            "snowflake" => Ok(Box::new(TimeOrderedGenerator::new(0))),
            unknown => Err(Error::UnsupportedGenerator {
                name: unknown.to_owned(),
                supported: self.registry.names().collect::<Vec<_>>().join(", "),
            }),
        }
    }
}

/// Converts a configured rate into identifiers generated per second.
///
/// Integer arithmetic throughout: `min` uses floor division, so 500/min
/// normalizes to 8 per second, not 8.33. Fails with
/// [`Error::UnsupportedRateUnit`] for units outside `sec`, `min`, `ms`, `ns`.
pub fn normalize_rate(rate: i64, unit: &str) -> Result<i64> {
    match unit {
        "sec" => Ok(rate),
        "min" => Ok(rate / 60),
        "ms" => Ok(rate.saturating_mul(1_000)),
        "ns" => Ok(rate.saturating_mul(1_000_000_000)),
        unknown => Err(Error::UnsupportedRateUnit {
            unit: unknown.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_each_supported_unit() {
        assert_eq!(normalize_rate(1_000, "sec").unwrap(), 1_000);
        assert_eq!(normalize_rate(500, "min").unwrap(), 8);
        assert_eq!(normalize_rate(60, "min").unwrap(), 1);
        assert_eq!(normalize_rate(10, "ms").unwrap(), 10_000);
        assert_eq!(normalize_rate(2, "ns").unwrap(), 2_000_000_000);
    }

    #[test]
    fn rejects_unknown_units() {
        assert!(matches!(
            normalize_rate(1_000, "hour"),
            Err(Error::UnsupportedRateUnit { .. })
        ));
        assert!(matches!(
            normalize_rate(1_000, ""),
            Err(Error::UnsupportedRateUnit { .. })
        ));
    }

    #[test]
    fn catalog_is_seeded_in_order() {
        let analyzer = CollisionAnalyzer::new();
        let names: Vec<_> = analyzer.generators().names().collect();
        assert_eq!(names, vec!["base64", "base62", "snowflake"]);
    }

    #[test]
    fn analyze_produces_a_full_report() {
        let analyzer = CollisionAnalyzer::new();
        let report = analyzer.analyze("base64:10:1000/sec").unwrap();

        assert!(report.contains("Collision Analysis: base64 length 10"));
        assert!(report.contains("Mathematical Results:"));
        assert!(report.contains("  - Total ID Space: 1,152,921,504,606,846,976\n"));
        assert!(report.contains("  - Generation Rate: 1000/sec\n"));
        assert!(report.contains("Collision Probability (1 sec):"));
        assert!(report.contains("Simulation Results:"));
        assert!(report.contains("Difference:"));
    }

    #[test]
    fn analyze_floors_per_minute_rates() {
        let analyzer = CollisionAnalyzer::new();
        let report = analyzer.analyze("base62:8:500/min").unwrap();
        assert!(report.contains("  - Generation Rate: 8/sec\n"));
    }

    #[test]
    fn analyze_rejects_malformed_input() {
        let analyzer = CollisionAnalyzer::new();
        assert!(matches!(
            analyzer.analyze("invalid"),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            analyzer.analyze("base64:ten:1000/sec"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn analyze_rejects_zero_length_alphabet_generators() {
        let analyzer = CollisionAnalyzer::new();
        assert!(matches!(
            analyzer.analyze("base64:0:1000/sec"),
            Err(Error::GeneratorConstruction { .. })
        ));
    }

    #[test]
    fn analyze_rejects_unknown_generators_and_names_the_catalog() {
        let analyzer = CollisionAnalyzer::new();
        let err = analyzer.analyze("uuid:8:1000/sec").unwrap_err();
        match err {
            Error::UnsupportedGenerator { name, supported } => {
                assert_eq!(name, "uuid");
                assert_eq!(supported, "base64, base62, snowflake");
            }
            other => panic!("expected UnsupportedGenerator, got {other:?}"),
        }
    }

    #[test]
    fn analyze_rejects_unknown_rate_units() {
        let analyzer = CollisionAnalyzer::new();
        assert!(matches!(
            analyzer.analyze("base64:8:1000/fortnight"),
            Err(Error::UnsupportedRateUnit { .. })
        ));
    }

    #[test]
    fn analyze_surfaces_degenerate_rates_as_calculation_errors() {
        // 30/min floors to zero identifiers per second.
        let analyzer = CollisionAnalyzer::new();
        assert!(matches!(
            analyzer.analyze("base62:8:30/min"),
            Err(Error::Calculation { .. })
        ));
    }

    #[test]
    fn analyze_snowflake_finds_no_collisions() {
        let analyzer = CollisionAnalyzer::new();
        let report = analyzer.analyze("snowflake:0:10000/ms").unwrap();
        assert!(report.contains("  - Collisions Found: 0\n"));
        assert!(report.contains("Collision Analysis: snowflake length 0"));
    }

    #[test]
    fn help_names_every_catalogued_format() {
        let analyzer = CollisionAnalyzer::new();
        let help = analyzer.help();
        assert!(help.contains("base64"));
        assert!(help.contains("base62"));
        assert!(help.contains("snowflake"));
        assert!(help.contains("format:length:rate/unit"));
    }

    #[test]
    fn every_example_input_analyzes_cleanly() {
        let analyzer = CollisionAnalyzer::new();
        for example in analyzer.examples() {
            let report = analyzer.analyze(example.input).unwrap();
            assert!(report.contains("Simulation Results:"));
        }
    }
}
