// value_type.rs — declared types of patch properties

/// Declared type of a registered property. Numeric types carry an inclusive
/// range; `String` values are passed through unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    UByte,
    Byte,
    Short,
    UShort,
    Int,
    UInt,
    AngleInt,
    AngleUInt,
    AngleFixed,
    Fixed,
    State,
    Thing,
    ThingMissile,
    Weapon,
    Sound,
    Flags,
    String,
}

impl ValueType {
    /// Inclusive bounds, or `None` for non-numeric types.
    pub fn range(self) -> Option<(i32, i32)> {
        Some(match self {
            ValueType::Bool => (0, 1),
            ValueType::UByte => (0, 255),
            ValueType::Byte => (-128, 127),
            ValueType::Short => (-32768, 32767),
            ValueType::UShort => (0, 65535),
            ValueType::Int | ValueType::AngleFixed | ValueType::Fixed | ValueType::Flags => {
                (i32::MIN, i32::MAX)
            }
            ValueType::AngleInt => (-359, 359),
            ValueType::AngleUInt => (0, 359),
            ValueType::UInt
            | ValueType::State
            | ValueType::Thing
            | ValueType::ThingMissile
            | ValueType::Weapon
            | ValueType::Sound => (0, i32::MAX),
            ValueType::String => return None,
        })
    }

    pub fn is_numeric(self) -> bool {
        self != ValueType::String
    }

    pub fn is_value_valid(self, value: i32) -> bool {
        match self.range() {
            Some((min, max)) => value >= min && value <= max,
            None => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "BOOL",
            ValueType::UByte => "UBYTE",
            ValueType::Byte => "BYTE",
            ValueType::Short => "SHORT",
            ValueType::UShort => "USHORT",
            ValueType::Int => "INT",
            ValueType::UInt => "UINT",
            ValueType::AngleInt => "ANGLEINT",
            ValueType::AngleUInt => "ANGLEUINT",
            ValueType::AngleFixed => "ANGLEFIXED",
            ValueType::Fixed => "FIXED",
            ValueType::State => "STATE",
            ValueType::Thing => "THING",
            ValueType::ThingMissile => "THINGMISSILE",
            ValueType::Weapon => "WEAPON",
            ValueType::Sound => "SOUND",
            ValueType::Flags => "FLAGS",
            ValueType::String => "STRING",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert!(ValueType::Bool.is_value_valid(1));
        assert!(!ValueType::Bool.is_value_valid(2));
        assert!(ValueType::Byte.is_value_valid(-128));
        assert!(!ValueType::UByte.is_value_valid(-1));
        assert!(ValueType::AngleInt.is_value_valid(-359));
        assert!(!ValueType::AngleUInt.is_value_valid(360));
        assert!(ValueType::Flags.is_value_valid(i32::MIN));
        assert!(!ValueType::Sound.is_value_valid(-1));
    }

    #[test]
    fn test_string_has_no_range() {
        assert_eq!(ValueType::String.range(), None);
        assert!(!ValueType::String.is_numeric());
    }
}
