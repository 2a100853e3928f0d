//! Utility functions and extension traits for the buffer pipeline.
//!
//! This module provides helper functions for data type formatting,
//! conversions, and other common operations.

use shapefile::dbase::FieldType;

/// Extension trait for formatting dBase [`FieldType`] into human-readable strings.
///
/// This trait extends dBase's [`FieldType`] with a convenient `format()` method
/// that converts field type tags into user-friendly string labels suitable for
/// display in schemas and documentation.
///
/// # Examples
///
/// ```
/// use shapefile::dbase::FieldType;
/// use squarebuf_core::utils::FieldTypeExt;
///
/// let field_type = FieldType::Character;
/// assert_eq!(field_type.format(), "Character");
///
/// let field_type = FieldType::Numeric;
/// assert_eq!(field_type.format(), "Numeric");
/// ```
pub trait FieldTypeExt {
    /// Format the field type into a human-readable string.
    ///
    /// # Returns
    ///
    /// A string representation suitable for display to users.
    fn format(&self) -> String;
}

impl FieldTypeExt for FieldType {
    fn format(&self) -> String {
        match self {
            FieldType::Character => "Character".to_string(),
            FieldType::Numeric => "Numeric".to_string(),
            FieldType::Float => "Float".to_string(),
            FieldType::Integer => "Integer".to_string(),
            FieldType::Logical => "Logical".to_string(),
            FieldType::Date => "Date".to_string(),
            FieldType::Memo => "Memo".to_string(),
            other => format!("{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_character() {
        assert_eq!(FieldType::Character.format(), "Character");
    }

    #[test]
    fn test_format_numbers() {
        assert_eq!(FieldType::Numeric.format(), "Numeric");
        assert_eq!(FieldType::Float.format(), "Float");
        assert_eq!(FieldType::Integer.format(), "Integer");
    }

    #[test]
    fn test_format_logical_and_date() {
        assert_eq!(FieldType::Logical.format(), "Logical");
        assert_eq!(FieldType::Date.format(), "Date");
    }

    #[test]
    fn test_format_memo() {
        assert_eq!(FieldType::Memo.format(), "Memo");
    }
}
