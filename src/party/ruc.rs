//! RUC (Registro Único de Contribuyentes) format validation
//!
//! Checks the shape of a Panamanian taxpayer id. The strict check-digit
//! arithmetic is out of scope; a format-level check is enough to catch
//! data-entry mistakes before a document is issued.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{FiscalError, FiscalResult};

/// Natural persons: 1-4 leading alphanumerics then two numeric groups,
/// dashes optional (e.g. "8-123-456", "PE-12-345", "N-12-345").
static NATURAL_PERSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z0-9]{1,4})-?(\d{1,5})-?(\d{1,6})$").unwrap());

/// Juridical persons: digits with optional dashes, either the
/// tomo-folio-asiento form ("1556988-1-2024") or a plain number.
static JURIDICAL_PERSON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d-]+$").unwrap());

/// Kind of taxpayer a RUC belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RucKind {
    /// Natural person (individual)
    Natural,
    /// Juridical person (company)
    Juridical,
}

/// Validate the format of a RUC and classify the taxpayer kind
///
/// The input is trimmed and upper-cased before matching. A plain run of
/// digits is a company registration number even though it also fits the
/// natural-person shape, so natural classification additionally requires a
/// letter prefix or the dashed three-group form.
pub fn validate_ruc(ruc: &str) -> FiscalResult<RucKind> {
    let normalized = ruc.trim().to_uppercase();

    if normalized.is_empty() {
        return Err(FiscalError::InvalidFiscalId(
            "RUC cannot be empty".to_string(),
        ));
    }

    let has_letter = normalized.chars().any(|c| c.is_ascii_alphabetic());
    if NATURAL_PERSON.is_match(&normalized) && (has_letter || normalized.contains('-')) {
        return Ok(RucKind::Natural);
    }

    if JURIDICAL_PERSON.is_match(&normalized) {
        return Ok(RucKind::Juridical);
    }

    Err(FiscalError::InvalidFiscalId(format!(
        "Invalid RUC format '{}': use X-XXX-XXXX or a plain registration number",
        normalized
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_person_formats() {
        assert_eq!(validate_ruc("8-123-456").unwrap(), RucKind::Natural);
        assert_eq!(validate_ruc("PE-12-345").unwrap(), RucKind::Natural);
        assert_eq!(validate_ruc("N-12-345").unwrap(), RucKind::Natural);
    }

    #[test]
    fn test_juridical_person_formats() {
        assert_eq!(validate_ruc("1556988-1-2024").unwrap(), RucKind::Juridical);
        assert_eq!(validate_ruc("123456789").unwrap(), RucKind::Juridical);
    }

    #[test]
    fn test_normalization() {
        assert_eq!(validate_ruc("  pe-12-345  ").unwrap(), RucKind::Natural);
    }

    #[test]
    fn test_invalid_formats() {
        assert!(validate_ruc("").is_err());
        assert!(validate_ruc("not a ruc").is_err());
        assert!(validate_ruc("ABCDE-12-345").is_err());
        assert!(validate_ruc("8.123.456").is_err());
    }
}
