// error.rs — patch model errors

use thiserror::Error;

use crate::value_type::ValueType;

/// Every failure the patch model reports. Raised by the call that caused it,
/// with the receiving entity, template or session left untouched.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("{field} cannot be {value}")]
    Forbidden { field: String, value: i64 },

    #[error("{field} accepts at most {max} values, got {len}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("value {value:?} for property \"{property}\" is not a valid {expected:?}")]
    BadValue {
        property: String,
        expected: ValueType,
        value: String,
    },

    #[error("property \"{0}\" is modeled directly and cannot be stored as a custom property")]
    NotCustom(String),

    #[error("property \"{0}\" belongs to {1}, not {2}")]
    WrongKind(String, &'static str, &'static str),

    #[error("unknown property \"{0}\"")]
    UnknownProperty(String),

    #[error("unknown action pointer \"{0}\"")]
    UnknownPointer(String),

    #[error("unknown feature level \"{0}\"")]
    UnknownFeatureLevel(String),

    #[error("unknown flag \"{0}\"")]
    UnknownFlag(String),

    #[error("action pointer {pointer} requires feature level {required}, target is {target}")]
    PointerNotSupported {
        pointer: &'static str,
        required: &'static str,
        target: &'static str,
    },

    #[error("action pointer {pointer} takes at most {max} arguments, got {len}")]
    TooManyArgs {
        pointer: &'static str,
        max: usize,
        len: usize,
    },

    #[error("argument {index} of {pointer} must be between {min} and {max}, got {value}")]
    ArgOutOfRange {
        pointer: &'static str,
        index: usize,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("{kind} index {index} out of range (table holds {count})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        count: usize,
    },

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type PatchResult<T> = Result<T, PatchError>;

/// Fails with [`PatchError::OutOfRange`] unless `min <= value <= max`.
pub fn check_range(field: &str, min: i32, max: i32, value: i32) -> PatchResult<()> {
    if value < min || value > max {
        return Err(PatchError::OutOfRange {
            field: field.to_string(),
            min: min as i64,
            max: max as i64,
            value: value as i64,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range("health", 0, 999999, 0).is_ok());
        assert!(check_range("health", 0, 999999, 999999).is_ok());
        assert!(check_range("health", 0, 999999, -1).is_err());
        assert!(check_range("health", 0, 999999, 1000000).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = check_range("Radius", 0, 65535, 70000).unwrap_err();
        assert_eq!(err.to_string(), "Radius must be between 0 and 65535, got 70000");
    }
}
