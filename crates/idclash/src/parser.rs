use crate::{Error, Result};

/// A parsed analysis request.
///
/// Produced once per request by [`parse_input`] and immutable afterwards. The
/// rate unit is retained as the literal input string; it is validated against
/// the supported set when the rate is normalized, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub format: String,
    pub length: i64,
    pub rate: i64,
    pub rate_unit: String,
}

/// Parses the compact request grammar `format:length:rate/unit`.
///
/// The input splits on `:` into exactly three fields; the second must be a
/// numeric length and the third splits on `/` into a numeric 64-bit rate and
/// a unit literal. Anything else fails with [`Error::Parse`]. No
/// normalization or range-checking happens here; downstream components
/// enforce their own constraints.
///
/// # Example
///
/// ```
/// use idclash::parse_input;
///
/// let config = parse_input("base64:10:1000/sec").unwrap();
/// assert_eq!(config.format, "base64");
/// assert_eq!(config.length, 10);
/// assert_eq!(config.rate, 1000);
/// assert_eq!(config.rate_unit, "sec");
/// ```
pub fn parse_input(input: &str) -> Result<Config> {
    let fields: Vec<&str> = input.split(':').collect();
    let [format, length_field, rate_field] = fields.as_slice() else {
        return Err(Error::Parse {
            reason: "expected `format:length:rate/unit`".into(),
        });
    };

    let length: i64 = length_field.parse().map_err(|_| Error::Parse {
        reason: format!("invalid length `{length_field}`"),
    })?;

    let rate_fields: Vec<&str> = rate_field.split('/').collect();
    let [rate_value, rate_unit] = rate_fields.as_slice() else {
        return Err(Error::Parse {
            reason: "expected `rate/unit`".into(),
        });
    };

    let rate: i64 = rate_value.parse().map_err(|_| Error::Parse {
        reason: format!("invalid rate `{rate_value}`"),
    })?;

    Ok(Config {
        format: (*format).to_owned(),
        length,
        rate,
        rate_unit: (*rate_unit).to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_the_canonical_examples() {
        let config = parse_input("base64:10:1000/sec").unwrap();
        assert_eq!(
            config,
            Config {
                format: "base64".into(),
                length: 10,
                rate: 1000,
                rate_unit: "sec".into(),
            }
        );

        let config = parse_input("base62:8:500/min").unwrap();
        assert_eq!(config.format, "base62");
        assert_eq!(config.rate_unit, "min");

        let config = parse_input("snowflake:0:10000/ms").unwrap();
        assert_eq!(config.length, 0);
        assert_eq!(config.rate, 10_000);
    }

    #[test]
    fn rejects_wrong_field_counts() {
        assert!(matches!(parse_input(""), Err(Error::Parse { .. })));
        assert!(matches!(parse_input("invalid"), Err(Error::Parse { .. })));
        assert!(matches!(parse_input("base64:10"), Err(Error::Parse { .. })));
        assert!(matches!(
            parse_input("base64:10:1000/sec:extra"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_length_and_rate() {
        assert!(matches!(
            parse_input("base64:ten:1000/sec"),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            parse_input("base64:10:lots/sec"),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            parse_input("base64::1000/sec"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn rejects_malformed_rate_subfields() {
        assert!(matches!(
            parse_input("base64:10:1000"),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            parse_input("base64:10:1000/sec/extra"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn negative_and_signed_numbers_still_parse() {
        // Range checks belong downstream; the grammar only cares that the
        // fields are numeric.
        let config = parse_input("base64:-5:-100/sec").unwrap();
        assert_eq!(config.length, -5);
        assert_eq!(config.rate, -100);
    }

    #[test]
    fn unknown_units_are_retained_literally() {
        let config = parse_input("base64:10:1000/fortnight").unwrap();
        assert_eq!(config.rate_unit, "fortnight");
    }

    proptest! {
        #[test]
        fn never_panics_on_arbitrary_input(input in ".{0,64}") {
            let _ = parse_input(&input);
        }

        #[test]
        fn well_formed_inputs_round_trip(
            format in "[a-z]{1,12}",
            length in any::<i64>(),
            rate in any::<i64>(),
            unit in "[a-z]{1,8}",
        ) {
            let input = format!("{format}:{length}:{rate}/{unit}");
            let config = parse_input(&input).unwrap();
            prop_assert_eq!(config.format, format);
            prop_assert_eq!(config.length, length);
            prop_assert_eq!(config.rate, rate);
            prop_assert_eq!(config.rate_unit, unit);
        }
    }
}
