//! Value types for attra attributes.
//!
//! Values are the atomic data stored in attributes. Attra supports scalar
//! types (String, Int, Float, Bool, Timestamp) plus Null, which stands in
//! for "never set": reading an attribute that has no stored value and no
//! initializer yields `Value::Null`.

use std::fmt;

/// A value that can be stored in an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Timestamp as milliseconds since Unix epoch.
    Timestamp(i64),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is a timestamp value.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Value::Timestamp(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as timestamp if this is a Timestamp value.
    pub fn as_timestamp(&self) -> Option<i64> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Timestamp(_) => "Timestamp",
        }
    }

    /// Numeric view of this value, if it has one.
    /// Int, Float and Timestamp are comparable on a common axis.
    fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Timestamp(t) => Some(*t as f64),
            _ => None,
        }
    }

    /// Greater-than-or-equal comparison for range checks.
    /// Numeric variants compare on a common axis; strings compare
    /// lexicographically; everything else is incomparable (false).
    pub fn gte(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a >= b,
            _ => match (self.as_numeric(), other.as_numeric()) {
                (Some(a), Some(b)) => a >= b,
                _ => false,
            },
        }
    }

    /// Less-than-or-equal comparison for range checks.
    pub fn lte(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a <= b,
            _ => match (self.as_numeric(), other.as_numeric()) {
                (Some(a), Some(b)) => a <= b,
                _ => false,
            },
        }
    }
}

impl Default for Value {
    /// The default value is `Null`, standing in for "never set".
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Timestamp(t) => write!(f, "ts:{}", t),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_bool()
            .ok_or_else(|| crate::ValueError::type_mismatch("Bool", &value))
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_int()
            .ok_or_else(|| crate::ValueError::type_mismatch("Int", &value))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_float()
            .ok_or_else(|| crate::ValueError::type_mismatch("Float", &value))
    }
}

impl TryFrom<Value> for String {
    type Error = crate::ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::ValueError::type_mismatch("String", &other)),
        }
    }
}

/// Type alias for an ordered list of named values, as fed to bulk operations.
pub type ValueEntries = Vec<(String, Value)>;

/// Helper macro to create ordered attribute/value entry lists.
///
/// Entries keep their written order, which is what bulk operations iterate in.
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![
            $(
                ($key.to_string(), $crate::Value::from($value)),
            )+
        ]
    };
}
