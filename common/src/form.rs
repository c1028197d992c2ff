//! Form field definitions shared by the input components and the page
//! controllers.
//!
//! A [`Field`] is the common record (id, label, required flag) plus a
//! [`FieldKind`] carrying the variant-specific parts. The input component
//! uses [`Field::transform`] on every change and the controllers call
//! [`Field::validate`] before submitting.

use thiserror::Error;

use crate::format::{clamp_int, format_phone, is_valid_phone, parse_iso_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number { min: i64, max: i64 },
    Tel,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("El campo \"{0}\" es obligatorio")]
    Missing(&'static str),

    #[error("El campo \"{label}\" debe ser un entero entre {min} y {max}")]
    OutOfRange {
        label: &'static str,
        min: i64,
        max: i64,
    },

    #[error("El teléfono \"{0}\" no es válido")]
    InvalidPhone(String),

    #[error("La fecha \"{0}\" no es válida")]
    InvalidDate(String),
}

impl Field {
    pub const fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            required: false,
            kind,
        }
    }

    pub const fn text(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Text)
    }

    pub const fn number(id: &'static str, label: &'static str, min: i64, max: i64) -> Self {
        Self::new(id, label, FieldKind::Number { min, max })
    }

    pub const fn tel(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Tel)
    }

    pub const fn date(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Date)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The `type` attribute of the rendered `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Text => "text",
            FieldKind::Number { .. } => "number",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
        }
    }

    /// Rewrites raw input as the user types: phone numbers are grouped and
    /// numbers are rounded into range. Unparseable numbers are left alone
    /// for [`Field::validate`] to reject.
    pub fn transform(&self, raw: &str) -> String {
        match self.kind {
            FieldKind::Tel => format_phone(raw),
            FieldKind::Number { min, max } => match raw.trim().parse::<f64>() {
                Ok(value) => clamp_int(value, min, max).to_string(),
                Err(_) => raw.to_string(),
            },
            FieldKind::Text | FieldKind::Date => raw.to_string(),
        }
    }

    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(ValidationError::Missing(self.label))
            } else {
                Ok(())
            };
        }

        match self.kind {
            FieldKind::Text => Ok(()),
            FieldKind::Number { min, max } => match value.parse::<i64>() {
                Ok(n) if (min..=max).contains(&n) => Ok(()),
                _ => Err(ValidationError::OutOfRange {
                    label: self.label,
                    min,
                    max,
                }),
            },
            FieldKind::Tel if is_valid_phone(value) => Ok(()),
            FieldKind::Tel => Err(ValidationError::InvalidPhone(value.to_string())),
            FieldKind::Date => parse_iso_date(value)
                .map(|_| ())
                .map_err(|_| ValidationError::InvalidDate(value.to_string())),
        }
    }
}
