// entity.rs — shared entity behavior: custom properties and differential output

use std::collections::BTreeMap;
use std::io::{self, Write};

use dehpatch_common::property::{EntityKind, Property, PropertyValue};
use dehpatch_common::{FeatureLevel, PatchError, PatchResult};

// ============================================================
// Custom property bag
// ============================================================

/// Unmodeled properties carried verbatim, keyed by lower-cased keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomProperties {
    entries: BTreeMap<String, (Property, PropertyValue)>,
}

impl CustomProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` after checking it belongs to `kind` and fits its type.
    pub fn set(&mut self, kind: EntityKind, property: &Property, value: PropertyValue) -> PatchResult<()> {
        check_kind(property, kind)?;
        if !property.is_custom() {
            return Err(PatchError::NotCustom(property.keyword.clone()));
        }
        property.validate(&value)?;
        self.entries
            .insert(property.keyword.to_ascii_lowercase(), (property.clone(), value));
        Ok(())
    }

    pub fn get(&self, keyword: &str) -> Option<&PropertyValue> {
        self.entries.get(&keyword.to_ascii_lowercase()).map(|(_, v)| v)
    }

    pub fn remove(&mut self, keyword: &str) {
        self.entries.remove(&keyword.to_ascii_lowercase());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Property, &PropertyValue)> {
        self.entries.values().map(|(p, v)| (p, v))
    }

    /// Overlay every entry of `other` onto this bag.
    pub fn merge_from(&mut self, other: &CustomProperties) {
        for (key, entry) in &other.entries {
            self.entries.insert(key.clone(), entry.clone());
        }
    }
}

// ============================================================
// Differential line writer
// ============================================================

/// Writes `Label = value` lines for fields that differ from a baseline,
/// skipping fields gated above the target level.
pub struct DiffWriter<'a> {
    out: &'a mut dyn Write,
    level: FeatureLevel,
    force: bool,
}

impl<'a> DiffWriter<'a> {
    pub fn new(out: &'a mut dyn Write, level: FeatureLevel, force: bool) -> Self {
        Self { out, level, force }
    }

    pub fn level(&self) -> FeatureLevel {
        self.level
    }

    fn wants(&self, tier: FeatureLevel, changed: bool) -> bool {
        self.level.supports(tier) && (self.force || changed)
    }

    pub fn line(&mut self, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
        write!(self.out, "{} = {}\r\n", label, value)
    }

    pub fn int(&mut self, tier: FeatureLevel, label: &str, value: i32, base: i32) -> io::Result<()> {
        if self.wants(tier, value != base) {
            self.line(label, value)?;
        }
        Ok(())
    }

    pub fn boolean(&mut self, tier: FeatureLevel, label: &str, value: bool, base: bool) -> io::Result<()> {
        self.int(tier, label, value as i32, base as i32)
    }

    /// Optional strings are only written when present.
    pub fn text(&mut self, tier: FeatureLevel, label: &str, value: Option<&str>, base: Option<&str>) -> io::Result<()> {
        if let Some(text) = value {
            if self.wants(tier, value != base) {
                self.line(label, text)?;
            }
        }
        Ok(())
    }

    /// Custom entries missing from, or different in, the baseline bag.
    pub fn custom(&mut self, props: &CustomProperties, base: &CustomProperties) -> io::Result<()> {
        for (property, value) in props.iter() {
            let changed = base.get(&property.keyword) != Some(value);
            if self.force || changed {
                self.line(&property.label, value)?;
            }
        }
        Ok(())
    }

    pub fn finish(self) -> io::Result<()> {
        self.out.flush()
    }
}

// ============================================================
// Entity capability
// ============================================================

/// Behavior shared by every patchable table entry.
pub trait PatchObject: Clone + PartialEq {
    const KIND: EntityKind;

    fn force_output(&self) -> bool;

    fn set_force_output(&mut self, force: bool) -> &mut Self;

    fn custom_properties(&self) -> &CustomProperties;

    /// Route a registered property to its modeled setter, or into the
    /// custom bag when the property is not modeled.
    fn set_property(&mut self, property: &Property, value: PropertyValue) -> PatchResult<&mut Self>;

    /// Visit modeled fields in output order.
    fn write_fields(&self, out: &mut DiffWriter<'_>, baseline: &Self) -> io::Result<()>;

    /// Overwrite all of this entity's state with `source`.
    fn copy_from(&mut self, source: &Self) {
        self.clone_from(source);
    }

    /// Emit the lines that turn `baseline` into `self` at `level`.
    fn write_diff(&self, baseline: &Self, level: FeatureLevel, out: &mut dyn Write) -> io::Result<()> {
        let mut writer = DiffWriter::new(out, level, self.force_output());
        self.write_fields(&mut writer, baseline)?;
        writer.custom(self.custom_properties(), baseline.custom_properties())?;
        writer.finish()
    }
}

/// Reject a property registered for a different kind.
pub(crate) fn check_kind(property: &Property, kind: EntityKind) -> PatchResult<()> {
    if property.kind != kind {
        return Err(PatchError::WrongKind(
            property.keyword.clone(),
            property.kind.name(),
            kind.name(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dehpatch_common::property::PropertyRegistry;
    use dehpatch_common::value_type::ValueType;

    fn registry() -> PropertyRegistry {
        PropertyRegistry::builder()
            .custom(EntityKind::Thing, "Blood", "Blood color", ValueType::UByte)
            .build()
    }

    #[test]
    fn test_custom_bag_rejects_modeled_property() {
        let registry = registry();
        let mut bag = CustomProperties::new();
        let health = registry.lookup(EntityKind::Thing, "health").unwrap();
        assert!(matches!(
            bag.set(EntityKind::Thing, health, PropertyValue::Int(5)),
            Err(PatchError::NotCustom(_))
        ));
        assert!(bag.is_empty());
    }

    #[test]
    fn test_custom_bag_rejects_wrong_kind() {
        let registry = registry();
        let mut bag = CustomProperties::new();
        let blood = registry.lookup(EntityKind::Thing, "blood").unwrap();
        assert!(matches!(
            bag.set(EntityKind::Weapon, blood, PropertyValue::Int(5)),
            Err(PatchError::WrongKind(..))
        ));
    }

    #[test]
    fn test_custom_bag_ignores_case() {
        let registry = registry();
        let mut bag = CustomProperties::new();
        let blood = registry.lookup(EntityKind::Thing, "BLOOD").unwrap();
        bag.set(EntityKind::Thing, blood, PropertyValue::Int(3)).unwrap();
        assert_eq!(bag.get("blood"), Some(&PropertyValue::Int(3)));
        assert!(bag.set(EntityKind::Thing, blood, PropertyValue::Int(999)).is_err());
        assert_eq!(bag.get("Blood"), Some(&PropertyValue::Int(3)));
    }

    #[test]
    fn test_writer_gates_and_diffs() {
        let mut buf = Vec::new();
        let mut writer = DiffWriter::new(&mut buf, FeatureLevel::Mbf, false);
        writer.int(FeatureLevel::Doom19, "Hit points", 100, 100).unwrap();
        writer.int(FeatureLevel::Doom19, "Mass", 50, 100).unwrap();
        writer.int(FeatureLevel::Mbf21, "Melee range", 1, 2).unwrap();
        writer.boolean(FeatureLevel::Doom19, "Zero/One", true, false).unwrap();
        writer.finish().unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Mass = 50\r\nZero/One = 1\r\n");
    }

    #[test]
    fn test_writer_force() {
        let mut buf = Vec::new();
        let mut writer = DiffWriter::new(&mut buf, FeatureLevel::Doom19, true);
        writer.int(FeatureLevel::Doom19, "Hit points", 100, 100).unwrap();
        writer.int(FeatureLevel::Id24, "Respawn dice", 4, 4).unwrap();
        writer.text(FeatureLevel::Doom19, "Tranmap", None, None).unwrap();
        writer.finish().unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Hit points = 100\r\n");
    }

    #[test]
    fn test_writer_custom_lines() {
        let registry = registry();
        let blood = registry.lookup(EntityKind::Thing, "blood").unwrap();
        let mut bag = CustomProperties::new();
        bag.set(EntityKind::Thing, blood, PropertyValue::Int(2)).unwrap();

        let mut buf = Vec::new();
        let mut writer = DiffWriter::new(&mut buf, FeatureLevel::Doom19, false);
        writer.custom(&bag, &CustomProperties::new()).unwrap();
        writer.custom(&bag, &bag).unwrap();
        writer.finish().unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Blood color = 2\r\n");
    }
}
