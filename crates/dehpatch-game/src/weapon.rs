// weapon.rs — weapon table entries

use std::io;

use dehpatch_common::labels::{weapon_label, LabelTable};
use dehpatch_common::property::{EntityKind, FieldId, Property, PropertyValue};
use dehpatch_common::{FeatureLevel, PatchError, PatchResult};

use crate::entity::{check_kind, CustomProperties, DiffWriter, PatchObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmmoType {
    Bullets = 0,
    Shells = 1,
    Cells = 2,
    Rockets = 3,
    Unused = 4,
    Infinite = 5,
}

impl AmmoType {
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(AmmoType::Bullets),
            1 => Some(AmmoType::Shells),
            2 => Some(AmmoType::Cells),
            3 => Some(AmmoType::Rockets),
            4 => Some(AmmoType::Unused),
            5 => Some(AmmoType::Infinite),
            _ => None,
        }
    }
}

/// Output labels of the frame roles, in write order. The raise role goes out
/// under "Deselect frame" and the lower role under "Select frame"; patch
/// consumers expect exactly this pairing.
pub const FRAME_LABELS: [(&str, &str); 5] = [
    (weapon_label::SELECT, "Deselect frame"),
    (weapon_label::DESELECT, "Select frame"),
    (weapon_label::READY, "Bobbing frame"),
    (weapon_label::FIRE, "Shooting frame"),
    (weapon_label::FLASH, "Firing frame"),
];

#[derive(Debug, Clone)]
pub struct Weapon {
    pub(crate) name: String,
    pub(crate) ammo_type: i32,
    pub(crate) labels: LabelTable,
    pub(crate) ammo_per_shot: i32,
    pub(crate) mbf21_flags: i32,

    pub(crate) slot: i32,
    pub(crate) slot_priority: i32,
    pub(crate) switch_priority: i32,
    pub(crate) initial_owned: bool,
    pub(crate) initial_raised: bool,
    pub(crate) carousel_icon: Option<String>,
    pub(crate) allow_switch_with_owned_weapon: i32,
    pub(crate) no_switch_with_owned_weapon: i32,
    pub(crate) allow_switch_with_owned_item: i32,
    pub(crate) no_switch_with_owned_item: i32,

    pub(crate) custom: CustomProperties,
    pub(crate) force_output: bool,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            name: String::new(),
            ammo_type: AmmoType::Bullets as i32,
            labels: LabelTable::new(),
            ammo_per_shot: 1,
            mbf21_flags: 0,
            slot: 0,
            slot_priority: 0,
            switch_priority: 0,
            initial_owned: false,
            initial_raised: false,
            carousel_icon: None,
            allow_switch_with_owned_weapon: -1,
            no_switch_with_owned_weapon: -1,
            allow_switch_with_owned_item: -1,
            no_switch_with_owned_item: -1,
            custom: CustomProperties::new(),
            force_output: false,
        }
    }
}

impl Weapon {
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
        ammo_type / set_ammo_type: "Ammo type", 0, i32::MAX;
        ammo_per_shot / set_ammo_per_shot: "Ammo per shot", 0, i32::MAX;
        slot / set_slot: "Slot", 0, 9;
        slot_priority / set_slot_priority: "Slot priority", i32::MIN, i32::MAX;
        switch_priority / set_switch_priority: "Switch priority", i32::MIN, i32::MAX;
        allow_switch_with_owned_weapon / set_allow_switch_with_owned_weapon: "Allow switch with owned weapon", -1, i32::MAX;
        no_switch_with_owned_weapon / set_no_switch_with_owned_weapon: "No switch with owned weapon", -1, i32::MAX;
        allow_switch_with_owned_item / set_allow_switch_with_owned_item: "Allow switch with owned item", -1, i32::MAX;
        no_switch_with_owned_item / set_no_switch_with_owned_item: "No switch with owned item", -1, i32::MAX;
    }

    pub fn set_ammo(&mut self, ammo: AmmoType) -> &mut Self {
        self.ammo_type = ammo as i32;
        self
    }

    pub fn ammo(&self) -> Option<AmmoType> {
        AmmoType::from_i32(self.ammo_type)
    }

    pub fn initial_owned(&self) -> bool {
        self.initial_owned
    }

    pub fn set_initial_owned(&mut self, owned: bool) -> &mut Self {
        self.initial_owned = owned;
        self
    }

    pub fn initial_raised(&self) -> bool {
        self.initial_raised
    }

    pub fn set_initial_raised(&mut self, raised: bool) -> &mut Self {
        self.initial_raised = raised;
        self
    }

    pub fn carousel_icon(&self) -> Option<&str> {
        self.carousel_icon.as_deref()
    }

    pub fn set_carousel_icon(&mut self, icon: Option<&str>) -> &mut Self {
        self.carousel_icon = icon.map(str::to_string);
        self
    }

    pub fn mbf21_flags(&self) -> i32 {
        self.mbf21_flags
    }

    pub fn set_mbf21_flags(&mut self, bits: i32) -> &mut Self {
        self.mbf21_flags = bits;
        self
    }

    pub fn add_mbf21_flag(&mut self, bits: i32) -> &mut Self {
        self.mbf21_flags |= bits;
        self
    }

    pub fn remove_mbf21_flag(&mut self, bits: i32) -> &mut Self {
        self.mbf21_flags &= !bits;
        self
    }

    pub fn has_mbf21_flag(&self, bits: i32) -> bool {
        (self.mbf21_flags & bits) == bits
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn label(&self, role: &str) -> i32 {
        self.labels.get(role)
    }

    pub fn set_label(&mut self, role: &str, index: i32) -> PatchResult<&mut Self> {
        self.labels.set(role, index)?;
        Ok(self)
    }

    pub fn clear_labels(&mut self) -> &mut Self {
        self.labels.clear();
        self
    }

    pub fn custom_properties_mut(&mut self) -> &mut CustomProperties {
        &mut self.custom
    }
}

impl PartialEq for Weapon {
    fn eq(&self, other: &Self) -> bool {
        self.ammo_type == other.ammo_type
            && self.labels == other.labels
            && self.ammo_per_shot == other.ammo_per_shot
            && self.mbf21_flags == other.mbf21_flags
            && self.slot == other.slot
            && self.slot_priority == other.slot_priority
            && self.switch_priority == other.switch_priority
            && self.initial_owned == other.initial_owned
            && self.initial_raised == other.initial_raised
            && self.carousel_icon == other.carousel_icon
            && self.allow_switch_with_owned_weapon == other.allow_switch_with_owned_weapon
            && self.no_switch_with_owned_weapon == other.no_switch_with_owned_weapon
            && self.allow_switch_with_owned_item == other.allow_switch_with_owned_item
            && self.no_switch_with_owned_item == other.no_switch_with_owned_item
            && self.custom == other.custom
    }
}

impl PatchObject for Weapon {
    const KIND: EntityKind = EntityKind::Weapon;

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
        if field == FieldId::CarouselIcon {
            let icon = property.expect_str(&value)?;
            return Ok(self.set_carousel_icon(Some(&icon)));
        }
        let v = property.expect_int(&value)?;
        match field {
            FieldId::AmmoType => self.set_ammo_type(v),
            FieldId::AmmoPerShot => self.set_ammo_per_shot(v),
            FieldId::WeaponMbf21Flags => Ok(self.set_mbf21_flags(v)),
            FieldId::Slot => self.set_slot(v),
            FieldId::SlotPriority => self.set_slot_priority(v),
            FieldId::SwitchPriority => self.set_switch_priority(v),
            FieldId::InitialOwned => Ok(self.set_initial_owned(v != 0)),
            FieldId::InitialRaised => Ok(self.set_initial_raised(v != 0)),
            FieldId::AllowSwitchWithOwnedWeapon => self.set_allow_switch_with_owned_weapon(v),
            FieldId::NoSwitchWithOwnedWeapon => self.set_no_switch_with_owned_weapon(v),
            FieldId::AllowSwitchWithOwnedItem => self.set_allow_switch_with_owned_item(v),
            FieldId::NoSwitchWithOwnedItem => self.set_no_switch_with_owned_item(v),
            _ => Err(PatchError::UnknownProperty(property.keyword.clone())),
        }
    }

    fn write_fields(&self, out: &mut DiffWriter<'_>, base: &Self) -> io::Result<()> {
        use FeatureLevel::{Doom19, Id24, Mbf21};

        out.int(Doom19, "Ammo type", self.ammo_type, base.ammo_type)?;
        for (role, output) in FRAME_LABELS {
            out.int(Doom19, output, self.labels.get(role), base.labels.get(role))?;
        }

        out.int(Mbf21, "Ammo per shot", self.ammo_per_shot, base.ammo_per_shot)?;
        out.int(Mbf21, "MBF21 Bits", self.mbf21_flags, base.mbf21_flags)?;

        out.int(Id24, "Slot", self.slot, base.slot)?;
        out.int(Id24, "Slot Priority", self.slot_priority, base.slot_priority)?;
        out.int(Id24, "Switch Priority", self.switch_priority, base.switch_priority)?;
        out.boolean(Id24, "Initial Owned", self.initial_owned, base.initial_owned)?;
        out.boolean(Id24, "Initial Raised", self.initial_raised, base.initial_raised)?;
        out.text(Id24, "Carousel icon", self.carousel_icon(), base.carousel_icon())?;
        out.int(Id24, "Allow switch with owned weapon", self.allow_switch_with_owned_weapon, base.allow_switch_with_owned_weapon)?;
        out.int(Id24, "No switch with owned weapon", self.no_switch_with_owned_weapon, base.no_switch_with_owned_weapon)?;
        out.int(Id24, "Allow switch with owned item", self.allow_switch_with_owned_item, base.allow_switch_with_owned_item)?;
        out.int(Id24, "No switch with owned item", self.no_switch_with_owned_item, base.no_switch_with_owned_item)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dehpatch_common::flags::WeaponMbf21Flags;

    fn diff(weapon: &Weapon, base: &Weapon, level: FeatureLevel) -> String {
        let mut buf = Vec::new();
        weapon.write_diff(base, level, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_select_deselect_labels_swapped() {
        let mut weapon = Weapon::new();
        weapon
            .set_label(weapon_label::SELECT, 4).unwrap()
            .set_label(weapon_label::DESELECT, 3).unwrap();
        assert_eq!(
            diff(&weapon, &Weapon::new(), FeatureLevel::Doom19),
            "Deselect frame = 4\r\nSelect frame = 3\r\n"
        );
    }

    #[test]
    fn test_label_order() {
        let mut weapon = Weapon::named("Pistol");
        weapon
            .set_label(weapon_label::FLASH, 17).unwrap()
            .set_label(weapon_label::READY, 10).unwrap()
            .set_label(weapon_label::FIRE, 13).unwrap();
        weapon.set_ammo(AmmoType::Shells);
        assert_eq!(
            diff(&weapon, &Weapon::new(), FeatureLevel::Doom19),
            "Ammo type = 1\r\nBobbing frame = 10\r\nShooting frame = 13\r\nFiring frame = 17\r\n"
        );
    }

    #[test]
    fn test_tiered_fields() {
        let mut weapon = Weapon::new();
        weapon.set_ammo_per_shot(40).unwrap().set_slot(7).unwrap();
        weapon.add_mbf21_flag(WeaponMbf21Flags::NOTHRUST.bits()).set_initial_owned(true);
        assert_eq!(diff(&weapon, &Weapon::new(), FeatureLevel::Mbf), "");
        assert_eq!(
            diff(&weapon, &Weapon::new(), FeatureLevel::Mbf21),
            "Ammo per shot = 40\r\nMBF21 Bits = 1\r\n"
        );
        assert_eq!(
            diff(&weapon, &Weapon::new(), FeatureLevel::Id24),
            "Ammo per shot = 40\r\nMBF21 Bits = 1\r\nSlot = 7\r\nInitial Owned = 1\r\n"
        );
    }

    #[test]
    fn test_domains() {
        let mut weapon = Weapon::new();
        assert!(weapon.set_slot(10).is_err());
        assert!(weapon.set_no_switch_with_owned_item(-2).is_err());
        assert!(weapon.set_ammo_type(-1).is_err());
        assert!(weapon.set_label(weapon_label::FIRE, -5).is_err());
        assert_eq!(weapon, Weapon::new());
    }

    #[test]
    fn test_diff_idempotence() {
        let mut weapon = Weapon::named("BFG 9000");
        weapon.set_carousel_icon(Some("BFUGA0")).set_ammo(AmmoType::Cells);
        weapon.set_label(weapon_label::READY, 81).unwrap();
        for level in FeatureLevel::ALL {
            assert_eq!(diff(&weapon, &weapon.clone(), level), "");
        }
    }
}
