//! Value formatting.
//!
//! Turns a [`Value`] into text using the separator and number policy of a
//! [`TemplateConfig`]. Output never depends on the host locale: `.` is the
//! decimal separator and digits are never grouped.

use crate::{NumberFormat, QuillError, Result, TemplateConfig, Value};
use rust_decimal::{Decimal, RoundingStrategy};

/// Render a value as template text.
pub fn render(value: &Value, config: &TemplateConfig) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int(i) => format_int(*i, config.number_format),
        Value::Float(f) => format_float(*f, config.number_format),
        Value::List(items) => {
            let parts = items
                .iter()
                .map(|item| render(item, config))
                .collect::<Result<Vec<_>>>()?;
            Ok(parts.join(&config.separator))
        }
        Value::Map(entries) => {
            let parts = entries
                .iter()
                .map(|(k, v)| render(v, config).map(|v| format!("{}={}", k, v)))
                .collect::<Result<Vec<_>>>()?;
            Ok(parts.join(&config.separator))
        }
    }
}

fn format_int(i: i64, policy: NumberFormat) -> Result<String> {
    match policy {
        NumberFormat::Plain | NumberFormat::Round => Ok(i.to_string()),
        NumberFormat::Cents => Ok(format!("{}.00", i)),
        NumberFormat::Percent => Err(QuillError::NotImplemented(policy)),
    }
}

fn format_float(f: f64, policy: NumberFormat) -> Result<String> {
    match policy {
        NumberFormat::Plain => Ok(f.to_string()),
        // -0.0 prints like 0, as other values that round to zero do
        NumberFormat::Round if f == 0.0 => Ok("0".to_string()),
        NumberFormat::Round if f.fract() == 0.0 => Ok(f.to_string()),
        NumberFormat::Round => Ok(round_half_even(f, 0)),
        NumberFormat::Cents => Ok(round_half_even(f, 2)),
        NumberFormat::Percent => Err(QuillError::NotImplemented(policy)),
    }
}

/// Round the exact binary value of `f` to `dp` fractional digits, ties to even,
/// and always print exactly `dp` digits.
fn round_half_even(f: f64, dp: u32) -> String {
    match Decimal::from_f64_retain(f) {
        Some(d) => {
            let mut rounded = d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            rounded.rescale(dp);
            // rescale gives up silently near the 96-bit mantissa limit
            if rounded.scale() == dp {
                rounded.to_string()
            } else {
                format!("{:.*}", dp as usize, f)
            }
        }
        // NaN, infinities and magnitudes beyond Decimal's range
        None => format!("{:.*}", dp as usize, f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(policy: NumberFormat) -> TemplateConfig {
        TemplateConfig::default().with_number_format(policy)
    }

    #[test]
    fn test_scalars() {
        let cfg = TemplateConfig::default();
        assert_eq!(render(&Value::from("hi"), &cfg).unwrap(), "hi");
        assert_eq!(render(&Value::Bool(false), &cfg).unwrap(), "false");
        assert_eq!(render(&Value::Int(-12), &cfg).unwrap(), "-12");
        assert_eq!(render(&Value::Float(1234567.25), &cfg).unwrap(), "1234567.25");
    }

    #[test]
    fn test_list_uses_separator() {
        let cfg = TemplateConfig::default().with_separator(" | ");
        let list = Value::from(vec!["apple", "banana", "grape"]);
        assert_eq!(render(&list, &cfg).unwrap(), "apple | banana | grape");

        let numbers = Value::from(vec![1.5, 2.0]);
        let cents = config(NumberFormat::Cents);
        assert_eq!(render(&numbers, &cents).unwrap(), "1.50,2.00");
    }

    #[test]
    fn test_round_half_even() {
        let cfg = config(NumberFormat::Round);
        assert_eq!(render(&Value::Int(7), &cfg).unwrap(), "7");
        assert_eq!(render(&Value::Float(2.5), &cfg).unwrap(), "2");
        assert_eq!(render(&Value::Float(3.5), &cfg).unwrap(), "4");
        assert_eq!(render(&Value::Float(-2.5), &cfg).unwrap(), "-2");
        assert_eq!(render(&Value::Float(1234.6), &cfg).unwrap(), "1235");
        assert_eq!(render(&Value::Float(-0.4), &cfg).unwrap(), "0");
        assert_eq!(render(&Value::Float(-0.0), &cfg).unwrap(), "0");
    }

    #[test]
    fn test_cents() {
        let cfg = config(NumberFormat::Cents);
        assert_eq!(render(&Value::Int(5), &cfg).unwrap(), "5.00");
        assert_eq!(render(&Value::Float(0.125), &cfg).unwrap(), "0.12");
        assert_eq!(render(&Value::Float(0.375), &cfg).unwrap(), "0.38");
        assert_eq!(render(&Value::Float(19.9), &cfg).unwrap(), "19.90");
        assert_eq!(render(&Value::Float(1000000.0), &cfg).unwrap(), "1000000.00");
    }

    #[test]
    fn test_cents_keeps_two_digits_for_huge_values() {
        let cfg = config(NumberFormat::Cents);
        for f in [1e26, 1e27, 5e28, 1e30] {
            let out = render(&Value::Float(f), &cfg).unwrap();
            let (whole, fraction) = out.split_once('.').expect("decimal point");
            assert_eq!(fraction.len(), 2, "{} rendered as {}", f, out);
            assert!(whole.chars().all(|c| c.is_ascii_digit()), "{}", out);
        }
        assert_eq!(
            render(&Value::Float(1e27), &cfg).unwrap(),
            format!("{:.2}", 1e27)
        );
    }

    #[test]
    fn test_percent_is_not_implemented() {
        let cfg = config(NumberFormat::Percent);
        let err = render(&Value::Float(0.5), &cfg).unwrap_err();
        assert!(matches!(err, QuillError::NotImplemented(NumberFormat::Percent)));

        // only numbers go through the policy
        assert_eq!(render(&Value::from("text"), &cfg).unwrap(), "text");
    }

    #[test]
    fn test_nested_map() {
        let mut map = std::collections::BTreeMap::new();
        map.insert("b".to_string(), Value::Int(2));
        map.insert("a".to_string(), Value::from("x"));
        let cfg = TemplateConfig::default().with_separator("; ");
        assert_eq!(render(&Value::Map(map), &cfg).unwrap(), "a=x; b=2");
    }
}
