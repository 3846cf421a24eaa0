//! Shape checking for JSON request bodies.
//!
//! A [`FieldReader`] walks one JSON object against a fixed list of known
//! field names, extracting typed values and collecting a message for every
//! field that is missing, null, of the wrong primitive type, or unknown.
//! Only presence and primitive type are checked.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

pub const MISSING_FIELD: &str = "Missing data for required field.";
pub const NULL_FIELD: &str = "Field may not be null.";
pub const UNKNOWN_FIELD: &str = "Unknown field.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const NOT_AN_INTEGER: &str = "Not a valid integer.";
pub const NOT_A_NUMBER: &str = "Not a valid number.";
pub const NOT_A_DATE: &str = "Not a valid date.";
pub const NOT_AN_OBJECT: &str = "Invalid input type.";

// Key used for errors about the body as a whole
pub const SCHEMA_KEY: &str = "_schema";

/// Field name to the list of problems found with it. Serializes as a plain
/// JSON object, e.g. `{"price": ["Not a valid number."]}`.
#[derive(Serialize, Default, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str){
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence{
    Required,
    Optional
}

pub struct FieldReader<'a>{
    object: Option<&'a Map<String, Value>>,
    errors: ValidationErrors
}

impl<'a> FieldReader<'a> {
    /// Starts reading `body`. A body that is not an object, and any key not
    /// in `known_fields`, is recorded as an error immediately.
    pub fn new(body: &'a Value, known_fields: &[&str]) -> Self {
        let mut errors = ValidationErrors::default();

        let object = match body {
            Value::Object(object) => {
                for key in object.keys() {
                    if !known_fields.contains(&key.as_str()) {
                        errors.add(key, UNKNOWN_FIELD);
                    }
                }
                Some(object)
            },
            _ => {
                errors.add(SCHEMA_KEY, NOT_AN_OBJECT);
                None
            }
        };

        FieldReader{ object, errors }
    }

    pub fn string(&mut self, field: &str, presence: Presence) -> Option<String> {
        self.read(field, presence, |value| match value {
            Value::String(s) => Ok(s.clone()),
            _ => Err(NOT_A_STRING)
        })
    }

    /// Accepts JSON integers and strings holding an integer.
    pub fn integer(&mut self, field: &str, presence: Presence) -> Option<i32> {
        self.read(field, presence, |value| {
            let parsed = match value {
                Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
                Value::String(s) => s.trim().parse::<i32>().ok(),
                _ => None
            };
            parsed.ok_or(NOT_AN_INTEGER)
        })
    }

    /// Accepts JSON numbers and strings holding a finite number.
    pub fn float(&mut self, field: &str, presence: Presence) -> Option<f64> {
        self.read(field, presence, |value| {
            let parsed = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None
            };
            parsed.filter(|n| n.is_finite()).ok_or(NOT_A_NUMBER)
        })
    }

    /// Accepts ISO 8601 calendar dates (`YYYY-MM-DD`).
    pub fn date(&mut self, field: &str, presence: Presence) -> Option<NaiveDate> {
        self.read(field, presence, |value| match value {
            Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| NOT_A_DATE),
            _ => Err(NOT_A_DATE)
        })
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    fn read<T>(
        &mut self,
        field: &str,
        presence: Presence,
        convert: impl FnOnce(&Value) -> Result<T, &'static str>
    ) -> Option<T> {
        let object = self.object?;

        match object.get(field) {
            None => {
                if presence == Presence::Required {
                    self.errors.add(field, MISSING_FIELD);
                }
                None
            },
            Some(Value::Null) => {
                self.errors.add(field, NULL_FIELD);
                None
            },
            Some(value) => match convert(value) {
                Ok(parsed) => Some(parsed),
                Err(message) => {
                    self.errors.add(field, message);
                    None
                }
            }
        }
    }
}
