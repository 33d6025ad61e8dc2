//! Common API Facades
//!
//! One-call entry points for the operations most callers need without
//! building a wrapper first.

use entities_data_handling::Str;
use entities_numbers::{Rational, RationalError};
use tracing::debug;

/// Continued-fraction approximation of `value`
pub fn rational_from_float(value: f64) -> Result<Rational, RationalError> {
    Rational::from_float(value)
}

/// `n/d` rendering of the approximation of `value`
///
/// # Examples
///
/// ```rust
/// assert_eq!(api_facades::rational_string(4.4624).unwrap(), "2789/625");
/// ```
pub fn rational_string(value: f64) -> Result<String, RationalError> {
    let rational = Rational::from_float(value)?;
    debug!(value, rational = %rational, "approximated float");
    Ok(rational.to_string())
}

/// URL slug of `text`, optionally capped at `max_len` characters
pub fn slugify(text: &str, max_len: Option<usize>) -> String {
    Str::new(text).to_slug(max_len).active().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational_from_float() {
        let r = rational_from_float(0.125).unwrap();
        assert_eq!(r.to_string(), "1/8");
        assert_eq!(r.float_value(), 0.125);
    }

    #[test]
    fn test_rational_string() {
        assert_eq!(rational_string(-4.4624).unwrap(), "-2789/625");
        assert_eq!(rational_string(0.0).unwrap(), "0/1");
        assert!(matches!(rational_string(f64::NAN), Err(RationalError::NonFinite(v)) if v.is_nan()));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify(" test str_iïn&g ", None), "test-str_iing");
        assert_eq!(slugify(" test str_iïn&g ", Some(10)), "test-str_i");
        assert_eq!(slugify("", None), "");
    }
}
