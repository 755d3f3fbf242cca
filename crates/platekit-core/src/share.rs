//! Shared-state parameter codec
//!
//! The input form hands its record to the results view as a JSON document
//! carried in the `inputs` query parameter, so a results location can be
//! bookmarked or shared on its own.

use crate::error::{DecodeError, Error, Result};
use crate::inputs::LayoutInputs;
use url::form_urlencoded;

/// Query parameter carrying the encoded input record
pub const INPUTS_PARAM: &str = "inputs";

/// Path of the results view
pub const RESULTS_PATH: &str = "/results";

/// Serialize an input record to the JSON text carried by the parameter
pub fn to_json(inputs: &LayoutInputs) -> Result<String> {
    serde_json::to_string(inputs)
        .map_err(|e| Error::other(format!("Failed to serialize inputs: {}", e)))
}

/// Encode an input record as a query string (`inputs=...`)
pub fn encode_query(inputs: &LayoutInputs) -> Result<String> {
    let json = to_json(inputs)?;
    Ok(form_urlencoded::Serializer::new(String::new())
        .append_pair(INPUTS_PARAM, &json)
        .finish())
}

/// Build the results location (`/results?inputs=...`) for an input record
pub fn results_location(inputs: &LayoutInputs) -> Result<String> {
    Ok(format!("{}?{}", RESULTS_PATH, encode_query(inputs)?))
}

/// Decode an input record from a results location.
///
/// Accepts a full location (`/results?inputs=...`), a bare query string,
/// the percent-encoded parameter value on its own, or the raw JSON
/// document. Percent escapes and `+` for space are both understood.
pub fn decode_location(raw: &str) -> std::result::Result<LayoutInputs, DecodeError> {
    let raw = raw.trim();
    let json = match find_param(raw) {
        Some(value) => value,
        None if raw.starts_with('{') => raw.to_string(),
        None if raw.starts_with("%7B") || raw.starts_with("%7b") => bare_value(raw),
        None => {
            return Err(DecodeError::MissingParameter {
                param: INPUTS_PARAM.to_string(),
            })
        }
    };

    if json.trim().is_empty() {
        return Err(DecodeError::MissingParameter {
            param: INPUTS_PARAM.to_string(),
        });
    }
    // form_urlencoded decodes lossily
    if json.contains(char::REPLACEMENT_CHARACTER) {
        return Err(DecodeError::InvalidEncoding {
            reason: "parameter is not valid UTF-8".to_string(),
        });
    }

    serde_json::from_str(&json).map_err(|e| {
        tracing::warn!("Error parsing input data: {}", e);
        DecodeError::InvalidRecord {
            reason: e.to_string(),
        }
    })
}

/// Percent-decode a parameter value given without its key
fn bare_value(raw: &str) -> String {
    form_urlencoded::parse(format!("{}={}", INPUTS_PARAM, raw).as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

fn find_param(raw: &str) -> Option<String> {
    let query = match raw.split_once('?') {
        Some((_, query)) => query,
        None => raw,
    };
    let query = query.split('#').next().unwrap_or_default();

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == INPUTS_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{PlateSpec, VesselSpec};

    fn sample() -> LayoutInputs {
        LayoutInputs::new(
            VesselSpec {
                internal_diameter: 1500.0,
                vessel_length: 4200.5,
                plate_thickness: 12.0,
            },
            PlateSpec {
                stock_plate_width: 2000.0,
                stock_plate_length: 10000.0,
                material: "SA 516 GR.70".to_string(),
                rate_per_mass: 72.25,
            },
        )
    }

    #[test]
    fn test_location_starts_with_results_path() {
        let location = results_location(&sample()).unwrap();
        assert!(location.starts_with("/results?inputs="));
        assert!(!location.contains('{'));
        assert!(!location.contains(' '));
    }

    #[test]
    fn test_decode_full_location() {
        let location = results_location(&sample()).unwrap();
        assert_eq!(decode_location(&location).unwrap(), sample());
    }

    #[test]
    fn test_decode_bare_query_and_json() {
        let query = encode_query(&sample()).unwrap();
        assert_eq!(decode_location(&query).unwrap(), sample());

        let json = to_json(&sample()).unwrap();
        assert_eq!(decode_location(&json).unwrap(), sample());
    }

    #[test]
    fn test_decode_bare_encoded_value() {
        let query = encode_query(&sample()).unwrap();
        let value = query.strip_prefix("inputs=").unwrap();
        assert!(value.starts_with("%7B"));
        assert_eq!(decode_location(value).unwrap(), sample());
    }

    #[test]
    fn test_decode_percent_encoded_spaces() {
        // Links produced with encodeURIComponent use %20 rather than '+'
        let query = "inputs=%7B%22internalDia%22%3A1000%2C%22vesselLength%22%3A3000%2C%22plateThickness%22%3A10%2C%22plateWidth%22%3A1500%2C%22plateLength%22%3A6300%2C%22material%22%3A%22IS%202062%20GR.B%22%2C%22ratePerKg%22%3A65%7D";
        let inputs = decode_location(query).unwrap();
        assert_eq!(inputs.plate.material, "IS 2062 GR.B");
        assert_eq!(inputs.vessel.internal_diameter, 1000.0);
    }

    #[test]
    fn test_missing_parameter() {
        assert!(matches!(
            decode_location("/results"),
            Err(DecodeError::MissingParameter { .. })
        ));
        assert!(matches!(
            decode_location("/results?inputs="),
            Err(DecodeError::MissingParameter { .. })
        ));
        assert!(matches!(
            decode_location(""),
            Err(DecodeError::MissingParameter { .. })
        ));
    }

    #[test]
    fn test_malformed_record() {
        assert!(matches!(
            decode_location("/results?inputs=%7Bnot-json"),
            Err(DecodeError::InvalidRecord { .. })
        ));
        // Empty strings where numbers are expected
        assert!(matches!(
            decode_location(r#"{"internalDia":"","vesselLength":1,"plateThickness":1,"plateWidth":1,"plateLength":1,"material":"X","ratePerKg":1}"#),
            Err(DecodeError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(matches!(
            decode_location("inputs=%FF%FE"),
            Err(DecodeError::InvalidEncoding { .. })
        ));
    }
}
