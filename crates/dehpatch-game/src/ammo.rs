// ammo.rs — ammo table entries

use std::io;

use dehpatch_common::error::check_range;
use dehpatch_common::fixed::FRACUNIT;
use dehpatch_common::property::{EntityKind, FieldId, Property, PropertyValue};
use dehpatch_common::{FeatureLevel, PatchError, PatchResult};

use crate::entity::{check_kind, CustomProperties, DiffWriter, PatchObject};

pub const MAX_AMMO_VALUE: i32 = 999999;
pub const SKILL_COUNT: usize = 5;

/// 2.0, 1.0, 1.0, 1.0, 2.0 in 16.16.
pub const DEFAULT_SKILL_MULTIPLIERS: [i32; SKILL_COUNT] =
    [FRACUNIT * 2, FRACUNIT, FRACUNIT, FRACUNIT, FRACUNIT * 2];

const SKILL_LABELS: [&str; SKILL_COUNT] = [
    "Skill 1 multiplier",
    "Skill 2 multiplier",
    "Skill 3 multiplier",
    "Skill 4 multiplier",
    "Skill 5 multiplier",
];

/// An ammo type. Economy fields left at -1 are derived by the engine.
#[derive(Debug, Clone)]
pub struct Ammo {
    pub(crate) name: String,
    pub(crate) max: i32,
    pub(crate) pickup: i32,
    pub(crate) initial: i32,
    pub(crate) max_upgraded: i32,
    pub(crate) box_ammo: i32,
    pub(crate) backpack: i32,
    pub(crate) weapon: i32,
    pub(crate) dropped: i32,
    pub(crate) dropped_box: i32,
    pub(crate) dropped_backpack: i32,
    pub(crate) dropped_weapon: i32,
    pub(crate) skill_multipliers: [i32; SKILL_COUNT],
    pub(crate) custom: CustomProperties,
    pub(crate) force_output: bool,
}

impl Default for Ammo {
    fn default() -> Self {
        Self {
            name: String::new(),
            max: 1,
            pickup: 1,
            initial: 0,
            max_upgraded: -1,
            box_ammo: -1,
            backpack: -1,
            weapon: -1,
            dropped: -1,
            dropped_box: -1,
            dropped_backpack: -1,
            dropped_weapon: -1,
            skill_multipliers: DEFAULT_SKILL_MULTIPLIERS,
            custom: CustomProperties::new(),
            force_output: false,
        }
    }
}

impl Ammo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self { name: name.to_string(), ..Self::default() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    int_fields! {
        max / set_max: "Max ammo", 0, MAX_AMMO_VALUE;
        pickup / set_pickup: "Pickup ammo", 0, MAX_AMMO_VALUE;
        initial / set_initial: "Initial ammo", 0, MAX_AMMO_VALUE;
        max_upgraded / set_max_upgraded: "Max upgraded ammo", -1, MAX_AMMO_VALUE;
        box_ammo / set_box_ammo: "Box ammo", -1, MAX_AMMO_VALUE;
        backpack / set_backpack: "Backpack ammo", -1, MAX_AMMO_VALUE;
        weapon / set_weapon: "Weapon ammo", -1, MAX_AMMO_VALUE;
        dropped / set_dropped: "Dropped ammo", -1, MAX_AMMO_VALUE;
        dropped_box / set_dropped_box: "Dropped box ammo", -1, MAX_AMMO_VALUE;
        dropped_backpack / set_dropped_backpack: "Dropped backpack ammo", -1, MAX_AMMO_VALUE;
        dropped_weapon / set_dropped_weapon: "Dropped weapon ammo", -1, MAX_AMMO_VALUE;
    }

    /// Raw 16.16 multiplier for `skill` in 1..=5.
    pub fn skill_multiplier(&self, skill: usize) -> Option<i32> {
        skill.checked_sub(1).and_then(|i| self.skill_multipliers.get(i).copied())
    }

    pub fn skill_multipliers(&self) -> &[i32; SKILL_COUNT] {
        &self.skill_multipliers
    }

    pub fn set_skill_multiplier(&mut self, skill: usize, value: i32) -> PatchResult<&mut Self> {
        if skill == 0 || skill > SKILL_COUNT {
            return Err(PatchError::OutOfRange {
                field: "Skill".to_string(),
                min: 1,
                max: SKILL_COUNT as i64,
                value: skill as i64,
            });
        }
        check_range(SKILL_LABELS[skill - 1], 0, i32::MAX, value)?;
        self.skill_multipliers[skill - 1] = value;
        Ok(self)
    }

    pub fn custom_properties_mut(&mut self) -> &mut CustomProperties {
        &mut self.custom
    }
}

impl PartialEq for Ammo {
    fn eq(&self, other: &Self) -> bool {
        self.max == other.max
            && self.pickup == other.pickup
            && self.initial == other.initial
            && self.max_upgraded == other.max_upgraded
            && self.box_ammo == other.box_ammo
            && self.backpack == other.backpack
            && self.weapon == other.weapon
            && self.dropped == other.dropped
            && self.dropped_box == other.dropped_box
            && self.dropped_backpack == other.dropped_backpack
            && self.dropped_weapon == other.dropped_weapon
            && self.skill_multipliers == other.skill_multipliers
            && self.custom == other.custom
    }
}

impl PatchObject for Ammo {
    const KIND: EntityKind = EntityKind::Ammo;

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
        let field = match property.field {
            None => {
                self.custom.set(Self::KIND, property, value)?;
                return Ok(self);
            }
            Some(field) => field,
        };
        let v = property.expect_int(&value)?;
        match field {
            FieldId::MaxAmmo => self.set_max(v),
            FieldId::PickupAmmo => self.set_pickup(v),
            FieldId::InitialAmmo => self.set_initial(v),
            FieldId::MaxUpgradedAmmo => self.set_max_upgraded(v),
            FieldId::BoxAmmo => self.set_box_ammo(v),
            FieldId::BackpackAmmo => self.set_backpack(v),
            FieldId::WeaponAmmo => self.set_weapon(v),
            FieldId::DroppedAmmo => self.set_dropped(v),
            FieldId::DroppedBoxAmmo => self.set_dropped_box(v),
            FieldId::DroppedBackpackAmmo => self.set_dropped_backpack(v),
            FieldId::DroppedWeaponAmmo => self.set_dropped_weapon(v),
            FieldId::Skill1Multiplier => self.set_skill_multiplier(1, v),
            FieldId::Skill2Multiplier => self.set_skill_multiplier(2, v),
            FieldId::Skill3Multiplier => self.set_skill_multiplier(3, v),
            FieldId::Skill4Multiplier => self.set_skill_multiplier(4, v),
            FieldId::Skill5Multiplier => self.set_skill_multiplier(5, v),
            _ => Err(PatchError::UnknownProperty(property.keyword.clone())),
        }
    }

    fn write_fields(&self, out: &mut DiffWriter<'_>, base: &Self) -> io::Result<()> {
        use FeatureLevel::{Doom19, Id24};

        out.int(Doom19, "Max ammo", self.max, base.max)?;
        out.int(Doom19, "Per ammo", self.pickup, base.pickup)?;

        out.int(Id24, "Initial ammo", self.initial, base.initial)?;
        out.int(Id24, "Max upgraded ammo", self.max_upgraded, base.max_upgraded)?;
        out.int(Id24, "Box ammo", self.box_ammo, base.box_ammo)?;
        out.int(Id24, "Backpack ammo", self.backpack, base.backpack)?;
        out.int(Id24, "Weapon ammo", self.weapon, base.weapon)?;
        out.int(Id24, "Dropped ammo", self.dropped, base.dropped)?;
        out.int(Id24, "Dropped box ammo", self.dropped_box, base.dropped_box)?;
        out.int(Id24, "Dropped backpack ammo", self.dropped_backpack, base.dropped_backpack)?;
        out.int(Id24, "Dropped weapon ammo", self.dropped_weapon, base.dropped_weapon)?;
        for (i, label) in SKILL_LABELS.iter().enumerate() {
            out.int(Id24, label, self.skill_multipliers[i], base.skill_multipliers[i])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dehpatch_common::fixed::{fixed_from_f64, fixed_to_f64};

    fn diff(ammo: &Ammo, base: &Ammo, level: FeatureLevel) -> String {
        let mut buf = Vec::new();
        ammo.write_diff(base, level, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_skill_multiplier_defaults() {
        let ammo = Ammo::new();
        let real: Vec<f64> = ammo.skill_multipliers().iter().map(|&m| fixed_to_f64(m)).collect();
        assert_eq!(real, vec![2.0, 1.0, 1.0, 1.0, 2.0]);
        assert_eq!(ammo.skill_multiplier(1), Some(131072));
        assert_eq!(ammo.skill_multiplier(0), None);
        assert_eq!(ammo.skill_multiplier(6), None);
        assert_eq!(diff(&ammo, &Ammo::new(), FeatureLevel::Id24), "");
    }

    #[test]
    fn test_economy_fields_gated() {
        let mut ammo = Ammo::named("Cells");
        ammo.set_max(300).unwrap().set_pickup(20).unwrap().set_backpack(100).unwrap();
        ammo.set_skill_multiplier(5, fixed_from_f64(1.5)).unwrap();
        assert_eq!(diff(&ammo, &Ammo::new(), FeatureLevel::Mbf21), "Max ammo = 300\r\nPer ammo = 20\r\n");
        assert_eq!(
            diff(&ammo, &Ammo::new(), FeatureLevel::Id24),
            "Max ammo = 300\r\nPer ammo = 20\r\nBackpack ammo = 100\r\nSkill 5 multiplier = 98304\r\n"
        );
    }

    #[test]
    fn test_domains() {
        let mut ammo = Ammo::new();
        assert!(ammo.set_max(1_000_000).is_err());
        assert!(ammo.set_pickup(-1).is_err());
        assert!(ammo.set_initial(-1).is_err());
        assert!(ammo.set_dropped(-2).is_err());
        assert!(ammo.set_skill_multiplier(0, 1).is_err());
        assert!(ammo.set_skill_multiplier(2, -1).is_err());
        assert_eq!(ammo, Ammo::new());
    }

    #[test]
    fn test_force_output() {
        let mut ammo = Ammo::new();
        ammo.set_force_output(true);
        assert_eq!(diff(&ammo, &Ammo::new(), FeatureLevel::Doom19), "Max ammo = 1\r\nPer ammo = 1\r\n");
        assert_eq!(diff(&ammo, &Ammo::new(), FeatureLevel::Id24).lines().count(), 16);
    }
}
