// sound.rs — sound table entries

use std::io;

use dehpatch_common::property::{EntityKind, FieldId, Property, PropertyValue};
use dehpatch_common::{FeatureLevel, PatchError, PatchResult};

use crate::entity::{check_kind, CustomProperties, DiffWriter, PatchObject};

/// Playback priority and whether only one instance may play at a time.
#[derive(Debug, Clone, Default)]
pub struct Sound {
    pub(crate) priority: i32,
    pub(crate) singular: bool,
    pub(crate) custom: CustomProperties,
    pub(crate) force_output: bool,
}

impl Sound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(priority: i32, singular: bool) -> PatchResult<Self> {
        let mut sound = Self::new();
        sound.set_priority(priority)?.set_singular(singular);
        Ok(sound)
    }

    int_fields! {
        priority / set_priority: "Priority", 0, 255;
    }

    pub fn singular(&self) -> bool {
        self.singular
    }

    pub fn set_singular(&mut self, singular: bool) -> &mut Self {
        self.singular = singular;
        self
    }

    pub fn custom_properties_mut(&mut self) -> &mut CustomProperties {
        &mut self.custom
    }
}

impl PartialEq for Sound {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
            && self.singular == other.singular
            && self.custom == other.custom
    }
}

impl PatchObject for Sound {
    const KIND: EntityKind = EntityKind::Sound;

    fn force_output(&self) -> bool {
        self.force_output
    }

    fn set_force_output(&mut self, force: bool) -> &mut Self {
        self.force_output = force;
        self
    }

    fn custom_properties(&self) -> &CustomProperties {
        &self.custom
    }

    fn set_property(&mut self, property: &Property, value: PropertyValue) -> PatchResult<&mut Self> {
        check_kind(property, Self::KIND)?;
        match property.field {
            None => {
                self.custom.set(Self::KIND, property, value)?;
                Ok(self)
            }
            Some(FieldId::Priority) => self.set_priority(property.expect_int(&value)?),
            Some(FieldId::Singular) => Ok(self.set_singular(property.expect_int(&value)? != 0)),
            Some(_) => Err(PatchError::UnknownProperty(property.keyword.clone())),
        }
    }

    fn write_fields(&self, out: &mut DiffWriter<'_>, base: &Self) -> io::Result<()> {
        out.int(FeatureLevel::Doom19, "Value", self.priority, base.priority)?;
        out.boolean(FeatureLevel::Doom19, "Zero/One", self.singular, base.singular)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_range() {
        let mut sound = Sound::new();
        sound.set_priority(255).unwrap();
        assert!(sound.set_priority(256).is_err());
        assert!(sound.set_priority(-1).is_err());
        assert_eq!(sound.priority(), 255);
    }

    #[test]
    fn test_write() {
        let sound = Sound::with(98, true).unwrap();
        let mut buf = Vec::new();
        sound.write_diff(&Sound::with(64, false).unwrap(), FeatureLevel::Doom19, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Value = 98\r\nZero/One = 1\r\n");
    }

    #[test]
    fn test_diff_idempotence() {
        let sound = Sound::with(120, true).unwrap();
        for level in FeatureLevel::ALL {
            let mut buf = Vec::new();
            sound.write_diff(&sound.clone(), level, &mut buf).unwrap();
            assert!(buf.is_empty());
        }
    }
}
