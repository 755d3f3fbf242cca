//! Input form model
//!
//! Holds the raw field values of the layout form and performs the
//! required-field check before handing the record to the results view.

use crate::error::{InvalidInputError, Result};
use crate::inputs::{LayoutInputs, PlateSpec, VesselSpec};
use crate::materials::DEFAULT_MATERIAL;
use crate::share;

/// Numeric form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    InternalDiameter,
    VesselLength,
    PlateThickness,
    PlateWidth,
    PlateLength,
    RatePerKg,
}

impl FormField {
    /// All numeric fields in form order
    pub const ALL: [FormField; 6] = [
        FormField::InternalDiameter,
        FormField::VesselLength,
        FormField::PlateThickness,
        FormField::PlateWidth,
        FormField::PlateLength,
        FormField::RatePerKg,
    ];

    /// Serialized field name
    pub fn key(&self) -> &'static str {
        match self {
            Self::InternalDiameter => "internalDia",
            Self::VesselLength => "vesselLength",
            Self::PlateThickness => "plateThickness",
            Self::PlateWidth => "plateWidth",
            Self::PlateLength => "plateLength",
            Self::RatePerKg => "ratePerKg",
        }
    }

    /// Resolve a serialized field name
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Raw state of the layout input form.
///
/// A numeric field is `None` while its text is empty. Text is read up to
/// the end of its leading number (`"12abc"` is 12); text with no leading
/// number is held as zero, which the required-field check rejects like an
/// empty field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputForm {
    values: [Option<f64>; 6],
    material: String,
    error: Option<String>,
}

impl Default for InputForm {
    fn default() -> Self {
        Self {
            values: [None; 6],
            material: DEFAULT_MATERIAL.to_string(),
            error: None,
        }
    }
}

impl InputForm {
    /// Create an empty form with the default material selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a numeric field from its text
    pub fn set_text(&mut self, field: FormField, text: &str) {
        let text = text.trim();
        self.values[Self::slot(field)] = if text.is_empty() {
            None
        } else {
            Some(leading_number(text).unwrap_or(0.0))
        };
    }

    /// Update a numeric field directly
    pub fn set_value(&mut self, field: FormField, value: f64) {
        self.values[Self::slot(field)] = Some(value);
    }

    /// Current value of a numeric field
    pub fn value(&self, field: FormField) -> Option<f64> {
        self.values[Self::slot(field)]
    }

    /// Select the material
    pub fn set_material(&mut self, material: impl Into<String>) {
        self.material = material.into();
    }

    /// Selected material
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Message from the last failed submit, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Build the input record, failing when any numeric field is empty or zero
    pub fn to_inputs(&self) -> std::result::Result<LayoutInputs, InvalidInputError> {
        let missing: Vec<String> = FormField::ALL
            .into_iter()
            .filter(|f| self.value(*f).map_or(true, |v| v == 0.0))
            .map(|f| f.key().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(InvalidInputError::MissingFields { fields: missing });
        }

        let v = |field| self.value(field).unwrap_or_default();
        let inputs = LayoutInputs::new(
            VesselSpec {
                internal_diameter: v(FormField::InternalDiameter),
                vessel_length: v(FormField::VesselLength),
                plate_thickness: v(FormField::PlateThickness),
            },
            PlateSpec {
                stock_plate_width: v(FormField::PlateWidth),
                stock_plate_length: v(FormField::PlateLength),
                material: self.material.clone(),
                rate_per_mass: v(FormField::RatePerKg),
            },
        );
        inputs.validate()?;
        Ok(inputs)
    }

    /// Validate the form and return the results location to navigate to.
    ///
    /// On failure the message is kept on the form and the error returned;
    /// on success any previous message is cleared.
    pub fn submit(&mut self) -> Result<String> {
        match self.to_inputs() {
            Ok(inputs) => {
                self.error = None;
                share::results_location(&inputs)
            }
            Err(e) => {
                tracing::warn!("Form rejected: {:?}", e);
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    fn slot(field: FormField) -> usize {
        match field {
            FormField::InternalDiameter => 0,
            FormField::VesselLength => 1,
            FormField::PlateThickness => 2,
            FormField::PlateWidth => 3,
            FormField::PlateLength => 4,
            FormField::RatePerKg => 5,
        }
    }
}

/// Parse the longest numeric prefix of `text`: sign, digits, optional
/// fraction and optional exponent. `None` when no digits lead the text.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}
