// template.rs — sparse overlays applied to many things or weapons at once
//
// Every field is unset until a setter runs. Applying a template copies the
// populated fields onto a target and merges flag deltas.

use dehpatch_common::labels::{label, weapon_label, LabelTable};
use dehpatch_common::property::{EntityKind, Property, PropertyValue};
use dehpatch_common::{PatchError, PatchResult};

use crate::entity::CustomProperties;
use crate::thing::Thing;
use crate::weapon::{AmmoType, Weapon};

// ============================================================
// Deferred flag deltas
// ============================================================

/// Flag changes recorded before the target's flags are known.
///
/// `Unpinned` accumulates bits to OR in and bits to AND out; on apply the
/// adds land first, then the removes. Once a full value is set the delta is
/// `Pinned` and later adds/removes edit that value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagDelta {
    Unpinned { add: i32, remove: i32 },
    Pinned { value: i32 },
}

impl Default for FlagDelta {
    fn default() -> Self {
        FlagDelta::Unpinned { add: 0, remove: 0 }
    }
}

impl FlagDelta {
    pub fn set(&mut self, value: i32) {
        *self = FlagDelta::Pinned { value };
    }

    pub fn add(&mut self, bits: i32) {
        match self {
            FlagDelta::Pinned { value } => *value |= bits,
            FlagDelta::Unpinned { add, .. } => *add |= bits,
        }
    }

    pub fn remove(&mut self, bits: i32) {
        match self {
            FlagDelta::Pinned { value } => *value &= !bits,
            FlagDelta::Unpinned { remove, .. } => *remove |= bits,
        }
    }

    /// Pinned: every bit is in the value. Unpinned: every bit is pending
    /// add and none is pending remove.
    pub fn has(&self, bits: i32) -> bool {
        match *self {
            FlagDelta::Pinned { value } => (value & bits) == bits,
            FlagDelta::Unpinned { add, remove } => (add & bits) == bits && (remove & bits) == 0,
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, FlagDelta::Pinned { .. })
    }

    pub fn is_empty(&self) -> bool {
        *self == FlagDelta::Unpinned { add: 0, remove: 0 }
    }

    pub fn apply(&self, target: i32) -> i32 {
        match *self {
            FlagDelta::Pinned { value } => value,
            FlagDelta::Unpinned { add, remove } => (target | add) & !remove,
        }
    }
}

// ============================================================
// Thing template
// ============================================================

#[derive(Debug, Clone, Default)]
pub struct ThingTemplate {
    editor_number: Option<i32>,
    health: Option<i32>,
    speed: Option<i32>,
    fast_speed: Option<i32>,
    radius: Option<i32>,
    height: Option<i32>,
    damage: Option<i32>,
    reaction_time: Option<i32>,
    pain_chance: Option<i32>,
    mass: Option<i32>,
    melee_range: Option<i32>,
    see_sound: Option<i32>,
    attack_sound: Option<i32>,
    pain_sound: Option<i32>,
    death_sound: Option<i32>,
    active_sound: Option<i32>,
    rip_sound: Option<i32>,
    infighting_group: Option<i32>,
    projectile_group: Option<i32>,
    splash_group: Option<i32>,
    dropped_item: Option<i32>,
    min_respawn_tics: Option<i32>,
    respawn_dice: Option<i32>,
    pickup_ammo_type: Option<i32>,
    pickup_ammo_category: Option<i32>,
    pickup_weapon_type: Option<i32>,
    pickup_item_type: Option<i32>,
    pickup_bonus_count: Option<i32>,
    pickup_sound: Option<i32>,
    self_damage_factor: Option<i32>,
    pickup_message: Option<String>,
    translation: Option<String>,

    flags: FlagDelta,
    mbf21_flags: FlagDelta,
    id24_flags: FlagDelta,
    labels: LabelTable,
    custom: CustomProperties,
    force_output: Option<bool>,
}

impl ThingTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editor_number(&self) -> Option<i32> {
        self.editor_number
    }

    pub fn set_editor_number(&mut self, value: i32) -> PatchResult<&mut Self> {
        if value == 0 {
            return Err(PatchError::Forbidden { field: "Editor number".to_string(), value: 0 });
        }
        dehpatch_common::error::check_range("Editor number", -1, 0x10000, value)?;
        self.editor_number = Some(value);
        Ok(self)
    }

    opt_int_fields! {
        health / set_health: "Health", 0, 999999;
        speed / set_speed: "Speed", 0, 65535;
        fast_speed / set_fast_speed: "Fast speed", -1, 65535;
        radius / set_radius: "Radius", 0, 65535;
        height / set_height: "Height", 0, 65535;
        damage / set_damage: "Damage", -999999, 999999;
        reaction_time / set_reaction_time: "Reaction time", 0, i32::MAX;
        pain_chance / set_pain_chance: "Pain chance", 0, i32::MAX;
        mass / set_mass: "Mass", 0, i32::MAX;
        melee_range / set_melee_range: "Melee range", 0, 65535;
        see_sound / set_see_sound: "Alert sound", 0, i32::MAX;
        attack_sound / set_attack_sound: "Attack sound", 0, i32::MAX;
        pain_sound / set_pain_sound: "Pain sound", 0, i32::MAX;
        death_sound / set_death_sound: "Death sound", 0, i32::MAX;
        active_sound / set_active_sound: "Action sound", 0, i32::MAX;
        rip_sound / set_rip_sound: "Rip sound", 0, i32::MAX;
        infighting_group / set_infighting_group: "Infighting group", 0, i32::MAX;
        projectile_group / set_projectile_group: "Projectile group", -1, i32::MAX;
        splash_group / set_splash_group: "Splash group", 0, i32::MAX;
        dropped_item / set_dropped_item: "Dropped item", 0, i32::MAX;
        min_respawn_tics / set_min_respawn_tics: "Min respawn tics", 0, i32::MAX;
        respawn_dice / set_respawn_dice: "Respawn dice", 0, i32::MAX;
        pickup_ammo_type / set_pickup_ammo_type: "Pickup ammo type", -1, i32::MAX;
        pickup_ammo_category / set_pickup_ammo_category: "Pickup ammo category", -1, i32::MAX;
        pickup_weapon_type / set_pickup_weapon_type: "Pickup weapon type", -1, i32::MAX;
        pickup_item_type / set_pickup_item_type: "Pickup item type", -1, i32::MAX;
        pickup_bonus_count / set_pickup_bonus_count: "Pickup bonus count", -1, i32::MAX;
        pickup_sound / set_pickup_sound: "Pickup sound", 0, i32::MAX;
        self_damage_factor / set_self_damage_factor: "Self damage factor", 0, i32::MAX;
    }

    pub fn set_pickup_message(&mut self, message: &str) -> &mut Self {
        self.pickup_message = Some(message.to_string());
        self
    }

    pub fn set_translation(&mut self, translation: &str) -> &mut Self {
        self.translation = Some(translation.to_string());
        self
    }

    pub fn set_flags(&mut self, bits: i32) -> &mut Self {
        self.flags.set(bits);
        self
    }

    pub fn add_flag(&mut self, bits: i32) -> &mut Self {
        self.flags.add(bits);
        self
    }

    pub fn remove_flag(&mut self, bits: i32) -> &mut Self {
        self.flags.remove(bits);
        self
    }

    pub fn has_flag(&self, bits: i32) -> bool {
        self.flags.has(bits)
    }

    pub fn flags(&self) -> FlagDelta {
        self.flags
    }

    pub fn set_mbf21_flags(&mut self, bits: i32) -> &mut Self {
        self.mbf21_flags.set(bits);
        self
    }

    pub fn add_mbf21_flag(&mut self, bits: i32) -> &mut Self {
        self.mbf21_flags.add(bits);
        self
    }

    pub fn remove_mbf21_flag(&mut self, bits: i32) -> &mut Self {
        self.mbf21_flags.remove(bits);
        self
    }

    pub fn has_mbf21_flag(&self, bits: i32) -> bool {
        self.mbf21_flags.has(bits)
    }

    pub fn set_id24_flags(&mut self, bits: i32) -> &mut Self {
        self.id24_flags.set(bits);
        self
    }

    pub fn add_id24_flag(&mut self, bits: i32) -> &mut Self {
        self.id24_flags.add(bits);
        self
    }

    pub fn remove_id24_flag(&mut self, bits: i32) -> &mut Self {
        self.id24_flags.remove(bits);
        self
    }

    pub fn has_id24_flag(&self, bits: i32) -> bool {
        self.id24_flags.has(bits)
    }

    /// Explicit 0 is kept and clears the role on apply.
    pub fn set_label(&mut self, role: &str, index: i32) -> PatchResult<&mut Self> {
        self.labels.force(role, index)?;
        Ok(self)
    }

    pub fn label(&self, role: &str) -> Option<i32> {
        self.labels.lookup(role)
    }

    /// Reset every canonical role to 0 on the targets.
    pub fn clear_labels(&mut self) -> &mut Self {
        self.labels.clear();
        for role in label::ALL {
            self.labels.force_zero(role);
        }
        self
    }

    pub fn set_custom_property(&mut self, property: &Property, value: PropertyValue) -> PatchResult<&mut Self> {
        self.custom.set(EntityKind::Thing, property, value)?;
        Ok(self)
    }

    pub fn set_force_output(&mut self, force: bool) -> &mut Self {
        self.force_output = Some(force);
        self
    }

    pub fn apply_to(&self, thing: &mut Thing) {
        apply_set_fields!(self, thing;
            editor_number, health, speed, fast_speed, radius, height, damage,
            reaction_time, pain_chance, mass, melee_range,
            see_sound, attack_sound, pain_sound, death_sound, active_sound, rip_sound,
            infighting_group, projectile_group, splash_group, dropped_item,
            min_respawn_tics, respawn_dice, pickup_ammo_type, pickup_ammo_category,
            pickup_weapon_type, pickup_item_type, pickup_bonus_count, pickup_sound,
            self_damage_factor, force_output,
        );
        if let Some(message) = &self.pickup_message {
            thing.pickup_message = Some(message.clone());
        }
        if let Some(translation) = &self.translation {
            thing.translation = Some(translation.clone());
        }

        thing.flags = self.flags.apply(thing.flags);
        thing.mbf21_flags = self.mbf21_flags.apply(thing.mbf21_flags);
        thing.id24_flags = self.id24_flags.apply(thing.id24_flags);
        thing.labels.merge_from(&self.labels);
        thing.custom.merge_from(&self.custom);
        log::trace!("thing template applied to \"{}\"", thing.name);
    }
}

// ============================================================
// Weapon template
// ============================================================

#[derive(Debug, Clone, Default)]
pub struct WeaponTemplate {
    ammo_type: Option<i32>,
    ammo_per_shot: Option<i32>,
    slot: Option<i32>,
    slot_priority: Option<i32>,
    switch_priority: Option<i32>,
    allow_switch_with_owned_weapon: Option<i32>,
    no_switch_with_owned_weapon: Option<i32>,
    allow_switch_with_owned_item: Option<i32>,
    no_switch_with_owned_item: Option<i32>,
    initial_owned: Option<bool>,
    initial_raised: Option<bool>,
    carousel_icon: Option<String>,

    mbf21_flags: FlagDelta,
    labels: LabelTable,
    custom: CustomProperties,
    force_output: Option<bool>,
}

impl WeaponTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    opt_int_fields! {
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
        self.ammo_type = Some(ammo as i32);
        self
    }

    pub fn set_initial_owned(&mut self, owned: bool) -> &mut Self {
        self.initial_owned = Some(owned);
        self
    }

    pub fn set_initial_raised(&mut self, raised: bool) -> &mut Self {
        self.initial_raised = Some(raised);
        self
    }

    pub fn set_carousel_icon(&mut self, icon: &str) -> &mut Self {
        self.carousel_icon = Some(icon.to_string());
        self
    }

    pub fn set_flags(&mut self, bits: i32) -> &mut Self {
        self.mbf21_flags.set(bits);
        self
    }

    pub fn add_flag(&mut self, bits: i32) -> &mut Self {
        self.mbf21_flags.add(bits);
        self
    }

    pub fn remove_flag(&mut self, bits: i32) -> &mut Self {
        self.mbf21_flags.remove(bits);
        self
    }

    pub fn has_flag(&self, bits: i32) -> bool {
        self.mbf21_flags.has(bits)
    }

    pub fn flags(&self) -> FlagDelta {
        self.mbf21_flags
    }

    pub fn set_label(&mut self, role: &str, index: i32) -> PatchResult<&mut Self> {
        self.labels.force(role, index)?;
        Ok(self)
    }

    pub fn label(&self, role: &str) -> Option<i32> {
        self.labels.lookup(role)
    }

    pub fn clear_labels(&mut self) -> &mut Self {
        self.labels.clear();
        for role in weapon_label::ALL {
            self.labels.force_zero(role);
        }
        self
    }

    pub fn set_custom_property(&mut self, property: &Property, value: PropertyValue) -> PatchResult<&mut Self> {
        self.custom.set(EntityKind::Weapon, property, value)?;
        Ok(self)
    }

    pub fn set_force_output(&mut self, force: bool) -> &mut Self {
        self.force_output = Some(force);
        self
    }

    pub fn apply_to(&self, weapon: &mut Weapon) {
        apply_set_fields!(self, weapon;
            ammo_type, ammo_per_shot, slot, slot_priority, switch_priority,
            allow_switch_with_owned_weapon, no_switch_with_owned_weapon,
            allow_switch_with_owned_item, no_switch_with_owned_item,
            initial_owned, initial_raised, force_output,
        );
        if let Some(icon) = &self.carousel_icon {
            weapon.carousel_icon = Some(icon.clone());
        }
        weapon.mbf21_flags = self.mbf21_flags.apply(weapon.mbf21_flags);
        weapon.labels.merge_from(&self.labels);
        weapon.custom.merge_from(&self.custom);
        log::trace!("weapon template applied to \"{}\"", weapon.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PatchObject;
    use dehpatch_common::flags::{ThingFlags, WeaponMbf21Flags};
    use dehpatch_common::property::PropertyRegistry;
    use dehpatch_common::value_type::ValueType;
    use dehpatch_common::FeatureLevel;

    #[test]
    fn test_delta_unpinned_has_flag() {
        let mut delta = FlagDelta::default();
        delta.add(0x1);
        assert!(delta.has(0x1));
        delta.remove(0x1);
        assert!(!delta.has(0x1));
        assert!(!delta.is_pinned());
    }

    #[test]
    fn test_delta_apply_order() {
        let mut delta = FlagDelta::default();
        delta.add(0b0110);
        delta.remove(0b0011);
        assert_eq!(delta.apply(0b1001), 0b1100);
    }

    #[test]
    fn test_delta_order_independent() {
        let patterns = [0, 0x1, 0x6, 0x30, 0xF0F0, -1, i32::MIN, 0x12345678];
        for &a in &patterns {
            for &b in &patterns {
                for &c in &patterns {
                    let mut first = FlagDelta::default();
                    first.add(a);
                    first.remove(b);
                    first.add(c);
                    let mut second = FlagDelta::default();
                    second.add(c);
                    second.add(a);
                    second.remove(b);
                    for &target in &patterns {
                        assert_eq!(first.apply(target), second.apply(target));
                    }
                }
            }
        }
    }

    #[test]
    fn test_delta_set_wins() {
        let mut delta = FlagDelta::default();
        delta.add(0xFF);
        delta.remove(0x0F00);
        delta.set(0x42);
        for target in [0, -1, 0x0F00] {
            assert_eq!(delta.apply(target), 0x42);
        }
        delta.add(0x1);
        delta.remove(0x2);
        assert_eq!(delta, FlagDelta::Pinned { value: 0x41 });
    }

    #[test]
    fn test_weapon_template_has_flag() {
        let mut template = WeaponTemplate::new();
        template.add_flag(0x01);
        assert!(template.has_flag(0x01));
        template.set_flags(0x10);
        assert!(!template.has_flag(0x01));
        assert!(template.has_flag(0x10));
    }

    #[test]
    fn test_thing_template_apply() {
        let mut template = ThingTemplate::new();
        template.set_health(400).unwrap().set_mass(200).unwrap();
        template
            .add_flag(ThingFlags::NOGRAVITY.bits())
            .remove_flag(ThingFlags::SOLID.bits())
            .add_mbf21_flag(0x200);

        let mut targets = vec![Thing::named("A"), Thing::named("B")];
        targets[0].set_health(20).unwrap().set_speed(8).unwrap();
        targets[0].set_flags((ThingFlags::SOLID | ThingFlags::SHOOTABLE).bits());
        for target in &mut targets {
            template.apply_to(target);
        }

        assert_eq!(targets[0].health(), 400);
        assert_eq!(targets[0].speed(), 8);
        assert_eq!(targets[0].flags(), (ThingFlags::SHOOTABLE | ThingFlags::NOGRAVITY).bits());
        assert_eq!(targets[0].mbf21_flags(), 0x200);
        assert_eq!(targets[1].mass(), 200);
        assert_eq!(targets[1].name(), "B");
    }

    #[test]
    fn test_flag_fields_tracked_independently() {
        let mut template = ThingTemplate::new();
        template.set_flags(0x4).add_mbf21_flag(0x1).remove_id24_flag(0x2);
        let mut thing = Thing::new();
        thing.set_flags(0x1).set_mbf21_flags(0x10).set_id24_flags(0x3);
        template.apply_to(&mut thing);
        assert_eq!(thing.flags(), 0x4);
        assert_eq!(thing.mbf21_flags(), 0x11);
        assert_eq!(thing.id24_flags(), 0x1);
    }

    #[test]
    fn test_template_labels_keep_zero() {
        let mut template = ThingTemplate::new();
        template.set_label(label::RAISE, 0).unwrap().set_label(label::SPAWN, 100).unwrap();
        assert_eq!(template.label(label::RAISE), Some(0));

        let mut thing = Thing::new();
        thing.set_label(label::RAISE, 300).unwrap().set_label(label::SEE, 5).unwrap();
        template.apply_to(&mut thing);
        assert_eq!(thing.label(label::RAISE), 0);
        assert_eq!(thing.label(label::SPAWN), 100);
        assert_eq!(thing.label(label::SEE), 5);
    }

    #[test]
    fn test_clear_labels() {
        let mut template = WeaponTemplate::new();
        template.clear_labels();
        let mut weapon = Weapon::new();
        weapon.set_label(weapon_label::FIRE, 9).unwrap();
        template.apply_to(&mut weapon);
        assert!(weapon.labels().is_empty());
    }

    #[test]
    fn test_thing_clear_labels_pins_every_role() {
        let mut template = ThingTemplate::new();
        template.set_label(label::SPAWN, 50).unwrap();
        template.clear_labels();
        for role in label::ALL {
            assert_eq!(template.label(role), Some(0));
        }
        let mut thing = Thing::new();
        thing.set_label(label::SPAWN, 442).unwrap().set_label(label::RAISE, 470).unwrap();
        template.apply_to(&mut thing);
        assert!(thing.labels().is_empty());
    }

    #[test]
    fn test_template_validates() {
        let mut template = ThingTemplate::new();
        assert!(template.set_editor_number(0).is_err());
        assert!(template.set_health(-5).is_err());
        assert!(template.set_label(label::SEE, -1).is_err());
        assert_eq!(template.health(), None);

        let mut weapon = WeaponTemplate::new();
        assert!(weapon.set_slot(12).is_err());
        assert_eq!(weapon.slot(), None);
    }

    #[test]
    fn test_weapon_template_apply() {
        let registry = PropertyRegistry::builder()
            .custom(EntityKind::Weapon, "recoil", "Recoil", ValueType::Int)
            .build();
        let recoil = registry.lookup(EntityKind::Weapon, "recoil").unwrap();

        let mut template = WeaponTemplate::new();
        template
            .set_slot_priority(3).unwrap()
            .set_slot(4).unwrap()
            .set_carousel_icon("PISTA0")
            .set_force_output(true)
            .add_flag(WeaponMbf21Flags::SILENT.bits());
        template.set_custom_property(recoil, PropertyValue::Int(2)).unwrap();

        let mut weapon = Weapon::named("Pistol");
        template.apply_to(&mut weapon);
        assert_eq!(weapon.slot(), 4);
        assert_eq!(weapon.slot_priority(), 3);
        assert_eq!(weapon.carousel_icon(), Some("PISTA0"));
        assert!(weapon.force_output());
        assert!(weapon.has_mbf21_flag(WeaponMbf21Flags::SILENT.bits()));
        assert_eq!(weapon.custom_properties().get("RECOIL"), Some(&PropertyValue::Int(2)));

        let mut buf = Vec::new();
        weapon.write_diff(&Weapon::new(), FeatureLevel::Doom19, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("Recoil = 2\r\n"));
    }
}
