// thing.rs — thing (actor) table entries

use std::io;

use dehpatch_common::error::check_range;
use dehpatch_common::fixed::{to_fixed, FRACUNIT};
use dehpatch_common::flags::ThingFlags;
use dehpatch_common::labels::{label, LabelTable};
use dehpatch_common::property::{EntityKind, FieldId, Property, PropertyValue};
use dehpatch_common::{FeatureLevel, PatchError, PatchResult};

use crate::entity::{check_kind, CustomProperties, DiffWriter, PatchObject};

pub const EDITOR_NUMBER_NONE: i32 = -1;
pub const SOUND_NONE: i32 = 0;
pub const DEFAULT_MELEE_RANGE: i32 = 64;
pub const DEFAULT_MIN_RESPAWN_TICS: i32 = 420;
pub const DEFAULT_RESPAWN_DICE: i32 = 4;

/// Output labels of the frame roles, in write order.
pub const FRAME_LABELS: [(&str, &str); 8] = [
    (label::SPAWN, "Initial frame"),
    (label::SEE, "First moving frame"),
    (label::PAIN, "Injury frame"),
    (label::MELEE, "Close attack frame"),
    (label::MISSILE, "Far attack frame"),
    (label::DEATH, "Death frame"),
    (label::XDEATH, "Exploding frame"),
    (label::RAISE, "Respawn frame"),
];

/// A monster, item, projectile or decoration definition.
#[derive(Debug, Clone)]
pub struct Thing {
    pub(crate) name: String,
    pub(crate) editor_number: i32,
    pub(crate) health: i32,
    pub(crate) speed: i32,
    pub(crate) fast_speed: i32,
    pub(crate) radius: i32,
    pub(crate) height: i32,
    pub(crate) damage: i32,
    pub(crate) reaction_time: i32,
    pub(crate) pain_chance: i32,
    pub(crate) flags: i32,
    pub(crate) mbf21_flags: i32,
    pub(crate) id24_flags: i32,
    pub(crate) mass: i32,
    pub(crate) melee_range: i32,
    pub(crate) labels: LabelTable,

    pub(crate) see_sound: i32,
    pub(crate) attack_sound: i32,
    pub(crate) pain_sound: i32,
    pub(crate) death_sound: i32,
    pub(crate) active_sound: i32,
    pub(crate) rip_sound: i32,

    pub(crate) infighting_group: i32,
    pub(crate) projectile_group: i32,
    pub(crate) splash_group: i32,
    pub(crate) dropped_item: i32,

    pub(crate) min_respawn_tics: i32,
    pub(crate) respawn_dice: i32,
    pub(crate) pickup_ammo_type: i32,
    pub(crate) pickup_ammo_category: i32,
    pub(crate) pickup_weapon_type: i32,
    pub(crate) pickup_item_type: i32,
    pub(crate) pickup_bonus_count: i32,
    pub(crate) pickup_sound: i32,
    pub(crate) pickup_message: Option<String>,
    pub(crate) translation: Option<String>,
    pub(crate) self_damage_factor: i32,

    pub(crate) custom: CustomProperties,
    pub(crate) force_output: bool,
}

impl Default for Thing {
    fn default() -> Self {
        Self {
            name: String::new(),
            editor_number: EDITOR_NUMBER_NONE,
            health: 0,
            speed: 0,
            fast_speed: -1,
            radius: 0,
            height: 0,
            damage: 0,
            reaction_time: 0,
            pain_chance: 0,
            flags: 0,
            mbf21_flags: 0,
            id24_flags: 0,
            mass: 0,
            melee_range: DEFAULT_MELEE_RANGE,
            labels: LabelTable::new(),
            see_sound: SOUND_NONE,
            attack_sound: SOUND_NONE,
            pain_sound: SOUND_NONE,
            death_sound: SOUND_NONE,
            active_sound: SOUND_NONE,
            rip_sound: SOUND_NONE,
            infighting_group: 0,
            projectile_group: 0,
            splash_group: 0,
            dropped_item: 0,
            min_respawn_tics: DEFAULT_MIN_RESPAWN_TICS,
            respawn_dice: DEFAULT_RESPAWN_DICE,
            pickup_ammo_type: -1,
            pickup_ammo_category: -1,
            pickup_weapon_type: -1,
            pickup_item_type: -1,
            pickup_bonus_count: -1,
            pickup_sound: SOUND_NONE,
            pickup_message: None,
            translation: None,
            self_damage_factor: FRACUNIT,
            custom: CustomProperties::new(),
            force_output: false,
        }
    }
}

impl Thing {
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

    pub fn editor_number(&self) -> i32 {
        self.editor_number
    }

    /// -1 means no editor number; 0 is never valid.
    pub fn set_editor_number(&mut self, value: i32) -> PatchResult<&mut Self> {
        if value == 0 {
            return Err(PatchError::Forbidden { field: "Editor number".to_string(), value: 0 });
        }
        check_range("Editor number", -1, 0x10000, value)?;
        self.editor_number = value;
        Ok(self)
    }

    int_fields! {
        health / set_health: "Health", 0, 999999;
        /// Whole units; written as 16.16 for projectiles.
        speed / set_speed: "Speed", 0, 65535;
        /// -1 means "same as speed".
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
        /// Raw 16.16 value.
        self_damage_factor / set_self_damage_factor: "Self damage factor", 0, i32::MAX;
    }

    pub fn pickup_message(&self) -> Option<&str> {
        self.pickup_message.as_deref()
    }

    pub fn set_pickup_message(&mut self, message: Option<&str>) -> &mut Self {
        self.pickup_message = message.map(str::to_string);
        self
    }

    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    pub fn set_translation(&mut self, translation: Option<&str>) -> &mut Self {
        self.translation = translation.map(str::to_string);
        self
    }

    // ============================================================
    // Flags
    // ============================================================

    pub fn flags(&self) -> i32 {
        self.flags
    }

    pub fn set_flags(&mut self, bits: i32) -> &mut Self {
        self.flags = bits;
        self
    }

    pub fn add_flag(&mut self, bits: i32) -> &mut Self {
        self.flags |= bits;
        self
    }

    pub fn remove_flag(&mut self, bits: i32) -> &mut Self {
        self.flags &= !bits;
        self
    }

    pub fn has_flag(&self, bits: i32) -> bool {
        (self.flags & bits) == bits
    }

    pub fn is_projectile(&self) -> bool {
        self.has_flag(ThingFlags::MISSILE.bits())
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

    pub fn id24_flags(&self) -> i32 {
        self.id24_flags
    }

    pub fn set_id24_flags(&mut self, bits: i32) -> &mut Self {
        self.id24_flags = bits;
        self
    }

    pub fn add_id24_flag(&mut self, bits: i32) -> &mut Self {
        self.id24_flags |= bits;
        self
    }

    pub fn remove_id24_flag(&mut self, bits: i32) -> &mut Self {
        self.id24_flags &= !bits;
        self
    }

    pub fn has_id24_flag(&self, bits: i32) -> bool {
        (self.id24_flags & bits) == bits
    }

    // ============================================================
    // Labels
    // ============================================================

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn label(&self, role: &str) -> i32 {
        self.labels.get(role)
    }

    /// Index 0 clears the role.
    pub fn set_label(&mut self, role: &str, index: i32) -> PatchResult<&mut Self> {
        self.labels.set(role, index)?;
        Ok(self)
    }

    pub fn clear_labels(&mut self) -> &mut Self {
        self.labels.clear();
        self
    }

    // ============================================================
    // Encoded values
    // ============================================================

    pub fn encoded_speed(&self) -> i32 {
        if self.is_projectile() {
            to_fixed(self.speed)
        } else {
            self.speed
        }
    }

    pub fn encoded_fast_speed(&self) -> i32 {
        if self.is_projectile() && self.fast_speed >= 0 {
            to_fixed(self.fast_speed)
        } else {
            self.fast_speed
        }
    }

    pub fn custom_properties_mut(&mut self) -> &mut CustomProperties {
        &mut self.custom
    }
}

impl PartialEq for Thing {
    fn eq(&self, other: &Self) -> bool {
        self.editor_number == other.editor_number
            && self.health == other.health
            && self.speed == other.speed
            && self.fast_speed == other.fast_speed
            && self.radius == other.radius
            && self.height == other.height
            && self.damage == other.damage
            && self.reaction_time == other.reaction_time
            && self.pain_chance == other.pain_chance
            && self.flags == other.flags
            && self.mbf21_flags == other.mbf21_flags
            && self.id24_flags == other.id24_flags
            && self.mass == other.mass
            && self.melee_range == other.melee_range
            && self.labels == other.labels
            && self.see_sound == other.see_sound
            && self.attack_sound == other.attack_sound
            && self.pain_sound == other.pain_sound
            && self.death_sound == other.death_sound
            && self.active_sound == other.active_sound
            && self.rip_sound == other.rip_sound
            && self.infighting_group == other.infighting_group
            && self.projectile_group == other.projectile_group
            && self.splash_group == other.splash_group
            && self.dropped_item == other.dropped_item
            && self.min_respawn_tics == other.min_respawn_tics
            && self.respawn_dice == other.respawn_dice
            && self.pickup_ammo_type == other.pickup_ammo_type
            && self.pickup_ammo_category == other.pickup_ammo_category
            && self.pickup_weapon_type == other.pickup_weapon_type
            && self.pickup_item_type == other.pickup_item_type
            && self.pickup_bonus_count == other.pickup_bonus_count
            && self.pickup_sound == other.pickup_sound
            && self.pickup_message == other.pickup_message
            && self.translation == other.translation
            && self.self_damage_factor == other.self_damage_factor
            && self.custom == other.custom
    }
}

impl PatchObject for Thing {
    const KIND: EntityKind = EntityKind::Thing;

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
            Some(field) => field,
            None => {
                self.custom.set(Self::KIND, property, value)?;
                return Ok(self);
            }
        };
        match field {
            FieldId::PickupMessage => {
                let text = property.expect_str(&value)?;
                self.set_pickup_message(Some(&text));
                return Ok(self);
            }
            FieldId::Translation => {
                let text = property.expect_str(&value)?;
                self.set_translation(Some(&text));
                return Ok(self);
            }
            _ => {}
        }
        let v = property.expect_int(&value)?;
        match field {
            FieldId::EditorNumber => self.set_editor_number(v),
            FieldId::Health => self.set_health(v),
            FieldId::Speed => self.set_speed(v),
            FieldId::FastSpeed => self.set_fast_speed(v),
            FieldId::Radius => self.set_radius(v),
            FieldId::Height => self.set_height(v),
            FieldId::Damage => self.set_damage(v),
            FieldId::ReactionTime => self.set_reaction_time(v),
            FieldId::PainChance => self.set_pain_chance(v),
            FieldId::Flags => Ok(self.set_flags(v)),
            FieldId::Mbf21Flags => Ok(self.set_mbf21_flags(v)),
            FieldId::Id24Flags => Ok(self.set_id24_flags(v)),
            FieldId::Mass => self.set_mass(v),
            FieldId::MeleeRange => self.set_melee_range(v),
            FieldId::SeeSound => self.set_see_sound(v),
            FieldId::AttackSound => self.set_attack_sound(v),
            FieldId::PainSound => self.set_pain_sound(v),
            FieldId::DeathSound => self.set_death_sound(v),
            FieldId::ActiveSound => self.set_active_sound(v),
            FieldId::RipSound => self.set_rip_sound(v),
            FieldId::InfightingGroup => self.set_infighting_group(v),
            FieldId::ProjectileGroup => self.set_projectile_group(v),
            FieldId::SplashGroup => self.set_splash_group(v),
            FieldId::DroppedItem => self.set_dropped_item(v),
            FieldId::MinRespawnTics => self.set_min_respawn_tics(v),
            FieldId::RespawnDice => self.set_respawn_dice(v),
            FieldId::PickupAmmoType => self.set_pickup_ammo_type(v),
            FieldId::PickupAmmoCategory => self.set_pickup_ammo_category(v),
            FieldId::PickupWeaponType => self.set_pickup_weapon_type(v),
            FieldId::PickupItemType => self.set_pickup_item_type(v),
            FieldId::PickupBonusCount => self.set_pickup_bonus_count(v),
            FieldId::PickupSound => self.set_pickup_sound(v),
            FieldId::SelfDamageFactor => self.set_self_damage_factor(v),
            _ => Err(PatchError::UnknownProperty(property.keyword.clone())),
        }
    }

    fn write_fields(&self, out: &mut DiffWriter<'_>, base: &Self) -> io::Result<()> {
        use FeatureLevel::{Doom19, Id24, Mbf21};

        out.int(Doom19, "ID #", self.editor_number, base.editor_number)?;
        out.int(Doom19, "Hit points", self.health, base.health)?;
        out.int(Doom19, "Speed", self.encoded_speed(), base.encoded_speed())?;
        out.int(Doom19, "Width", to_fixed(self.radius), to_fixed(base.radius))?;
        out.int(Doom19, "Height", to_fixed(self.height), to_fixed(base.height))?;
        out.int(Doom19, "Missile damage", self.damage, base.damage)?;
        out.int(Doom19, "Reaction time", self.reaction_time, base.reaction_time)?;
        out.int(Doom19, "Pain chance", self.pain_chance, base.pain_chance)?;
        out.int(Doom19, "Bits", self.flags, base.flags)?;
        out.int(Doom19, "Mass", self.mass, base.mass)?;

        for (role, output) in FRAME_LABELS {
            out.int(Doom19, output, self.labels.get(role), base.labels.get(role))?;
        }

        out.int(Doom19, "Alert sound", self.see_sound, base.see_sound)?;
        out.int(Doom19, "Action sound", self.active_sound, base.active_sound)?;
        out.int(Doom19, "Attack sound", self.attack_sound, base.attack_sound)?;
        out.int(Doom19, "Pain sound", self.pain_sound, base.pain_sound)?;
        out.int(Doom19, "Death sound", self.death_sound, base.death_sound)?;

        out.int(Mbf21, "MBF21 Bits", self.mbf21_flags, base.mbf21_flags)?;
        out.int(Mbf21, "Infighting group", self.infighting_group, base.infighting_group)?;
        out.int(Mbf21, "Projectile group", self.projectile_group, base.projectile_group)?;
        out.int(Mbf21, "Splash group", self.splash_group, base.splash_group)?;
        out.int(Mbf21, "Rip sound", self.rip_sound, base.rip_sound)?;
        out.int(Mbf21, "Fast speed", self.encoded_fast_speed(), base.encoded_fast_speed())?;
        out.int(Mbf21, "Melee range", to_fixed(self.melee_range), to_fixed(base.melee_range))?;
        out.int(Mbf21, "Dropped item", self.dropped_item, base.dropped_item)?;

        out.int(Id24, "ID24 Bits", self.id24_flags, base.id24_flags)?;
        out.int(Id24, "Min respawn tics", self.min_respawn_tics, base.min_respawn_tics)?;
        out.int(Id24, "Respawn dice", self.respawn_dice, base.respawn_dice)?;
        out.int(Id24, "Pickup ammo type", self.pickup_ammo_type, base.pickup_ammo_type)?;
        out.int(Id24, "Pickup ammo category", self.pickup_ammo_category, base.pickup_ammo_category)?;
        out.int(Id24, "Pickup weapon type", self.pickup_weapon_type, base.pickup_weapon_type)?;
        out.int(Id24, "Pickup item type", self.pickup_item_type, base.pickup_item_type)?;
        out.int(Id24, "Pickup bonus count", self.pickup_bonus_count, base.pickup_bonus_count)?;
        out.int(Id24, "Pickup sound", self.pickup_sound, base.pickup_sound)?;
        out.text(Id24, "Pickup message", self.pickup_message(), base.pickup_message())?;
        out.text(Id24, "Translation", self.translation(), base.translation())?;
        out.int(Id24, "Self damage factor", self.self_damage_factor, base.self_damage_factor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dehpatch_common::flags::ThingMbf21Flags;
    use dehpatch_common::property::PropertyRegistry;
    use dehpatch_common::value_type::ValueType;

    fn diff(thing: &Thing, base: &Thing, level: FeatureLevel) -> String {
        let mut buf = Vec::new();
        thing.write_diff(base, level, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_defaults() {
        let thing = Thing::new();
        assert_eq!(thing.editor_number(), EDITOR_NUMBER_NONE);
        assert_eq!(thing.fast_speed(), -1);
        assert_eq!(thing.melee_range(), 64);
        assert_eq!(thing.self_damage_factor(), 65536);
        assert_eq!(thing.see_sound(), SOUND_NONE);
    }

    #[test]
    fn test_editor_number_line() {
        let mut thing = Thing::new();
        thing.set_editor_number(1).unwrap();
        assert_eq!(diff(&thing, &Thing::new(), FeatureLevel::Doom19), "ID # = 1\r\n");
    }

    #[test]
    fn test_editor_number_zero_forbidden() {
        let mut thing = Thing::new();
        thing.set_editor_number(3004).unwrap();
        assert!(matches!(thing.set_editor_number(0), Err(PatchError::Forbidden { .. })));
        assert!(thing.set_editor_number(-2).is_err());
        assert!(thing.set_editor_number(0x10001).is_err());
        assert_eq!(thing.editor_number(), 3004);
    }

    #[test]
    fn test_failed_setter_leaves_value() {
        let mut thing = Thing::new();
        thing.set_health(60).unwrap();
        assert!(thing.set_health(1_000_000).is_err());
        assert!(thing.set_speed(-1).is_err());
        assert!(thing.set_damage(-1_000_000).is_err());
        assert_eq!(thing.health(), 60);
        assert_eq!(thing.speed(), 0);
    }

    #[test]
    fn test_projectile_speed_is_fixed() {
        let mut thing = Thing::new();
        thing.set_speed(10).unwrap();
        assert_eq!(diff(&thing, &Thing::new(), FeatureLevel::Doom19), "Speed = 10\r\n");

        thing.add_flag(ThingFlags::MISSILE.bits());
        let text = diff(&thing, &Thing::new(), FeatureLevel::Doom19);
        assert!(text.contains(&format!("Speed = {}\r\n", 10 << 16)));
    }

    #[test]
    fn test_width_height_melee_fixed() {
        let mut thing = Thing::new();
        thing.set_radius(20).unwrap().set_height(56).unwrap().set_melee_range(80).unwrap();
        let text = diff(&thing, &Thing::new(), FeatureLevel::Mbf21);
        assert_eq!(
            text,
            "Width = 1310720\r\nHeight = 3670016\r\nMelee range = 5242880\r\n"
        );
    }

    #[test]
    fn test_field_order() {
        let mut thing = Thing::new();
        thing
            .set_health(100).unwrap()
            .set_label(label::SPAWN, 174).unwrap()
            .set_label(label::DEATH, 190).unwrap()
            .set_see_sound(35).unwrap()
            .set_active_sound(37).unwrap();
        thing.set_flags(6);
        let text = diff(&thing, &Thing::new(), FeatureLevel::Doom19);
        assert_eq!(
            text,
            "Hit points = 100\r\nBits = 6\r\nInitial frame = 174\r\nDeath frame = 190\r\n\
             Alert sound = 35\r\nAction sound = 37\r\n"
        );
    }

    #[test]
    fn test_sound_positions_written_literally() {
        let mut base = Thing::new();
        base.set_pain_sound(27).unwrap();
        let mut thing = base.clone();
        thing.set_pain_sound(0).unwrap().set_death_sound(1).unwrap();
        assert_eq!(
            diff(&thing, &base, FeatureLevel::Doom19),
            "Pain sound = 0\r\nDeath sound = 1\r\n"
        );
    }

    #[test]
    fn test_tier_gating() {
        let mut thing = Thing::new();
        thing.set_health(5).unwrap().set_infighting_group(2).unwrap().set_respawn_dice(8).unwrap();
        thing.set_mbf21_flags(ThingMbf21Flags::BOSS.bits());

        let doom = diff(&thing, &Thing::new(), FeatureLevel::Doom19);
        let mbf21 = diff(&thing, &Thing::new(), FeatureLevel::Mbf21);
        let id24 = diff(&thing, &Thing::new(), FeatureLevel::Id24);
        assert_eq!(doom, "Hit points = 5\r\n");
        assert_eq!(mbf21, "Hit points = 5\r\nMBF21 Bits = 512\r\nInfighting group = 2\r\n");
        assert_eq!(id24, format!("{}Respawn dice = 8\r\n", mbf21));
    }

    #[test]
    fn test_tier_monotonicity() {
        let mut thing = Thing::new();
        thing
            .set_editor_number(9).unwrap()
            .set_fast_speed(20).unwrap()
            .set_dropped_item(12).unwrap()
            .set_pickup_sound(3).unwrap();
        thing.set_translation(Some("CRTRED")).add_id24_flag(1);

        let mut previous: Vec<String> = Vec::new();
        for level in FeatureLevel::ALL {
            let text = diff(&thing, &Thing::new(), level);
            let lines: Vec<String> = text.split("\r\n").filter(|l| !l.is_empty()).map(String::from).collect();
            for line in &previous {
                assert!(lines.contains(line), "{} missing at {}", line, level);
            }
            previous = lines;
        }
        assert!(previous.contains(&"Translation = CRTRED".to_string()));
    }

    #[test]
    fn test_diff_idempotence() {
        let mut thing = Thing::named("Imp");
        thing
            .set_editor_number(3001).unwrap()
            .set_health(60).unwrap()
            .set_label(label::SEE, 444).unwrap();
        thing.set_pickup_message(Some("Picked up an imp?"));
        let copy = thing.clone();
        assert_eq!(thing, copy);
        for level in FeatureLevel::ALL {
            assert_eq!(diff(&thing, &copy, level), "");
        }
    }

    #[test]
    fn test_force_output_writes_everything_in_tier() {
        let mut thing = Thing::new();
        thing.set_force_output(true);
        let text = diff(&thing, &Thing::new(), FeatureLevel::Doom19);
        assert_eq!(text.lines().count(), 23);
        assert!(text.starts_with("ID # = -1\r\nHit points = 0\r\n"));
        let text = diff(&thing, &Thing::new(), FeatureLevel::Id24);
        // optional strings stay absent
        assert_eq!(text.lines().count(), 41);
    }

    #[test]
    fn test_equality_ignores_name_and_force() {
        let mut a = Thing::named("Zombieman");
        let b = Thing::named("Former Human");
        a.set_force_output(true);
        assert_eq!(a, b);
        a.set_mass(100).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_copy_from() {
        let mut source = Thing::named("Baron");
        source.set_health(1000).unwrap().set_label(label::SPAWN, 5).unwrap();
        let mut dest = Thing::new();
        dest.copy_from(&source);
        assert_eq!(dest, source);
        assert_eq!(dest.name(), "Baron");
    }

    #[test]
    fn test_set_property_dispatch() {
        let registry = PropertyRegistry::builder()
            .custom(EntityKind::Thing, "gibhealth", "Gib health", ValueType::Int)
            .build();
        let mut thing = Thing::new();
        let health = registry.lookup(EntityKind::Thing, "Health").unwrap();
        thing.set_property(health, health.parse("150").unwrap()).unwrap();
        assert_eq!(thing.health(), 150);

        let message = registry.lookup(EntityKind::Thing, "pickupmessage").unwrap();
        thing.set_property(message, message.parse("Got it").unwrap()).unwrap();
        assert_eq!(thing.pickup_message(), Some("Got it"));

        let gib = registry.lookup(EntityKind::Thing, "gibhealth").unwrap();
        thing.set_property(gib, PropertyValue::Int(-50)).unwrap();
        assert_eq!(diff(&thing, &Thing::new(), FeatureLevel::Doom19), "Hit points = 150\r\nGib health = -50\r\n");

        let priority = registry.lookup(EntityKind::Sound, "priority").unwrap();
        assert!(matches!(thing.set_property(priority, PropertyValue::Int(1)), Err(PatchError::WrongKind(..))));
    }
}
