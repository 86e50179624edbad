// property.rs — script keyword to patch label registry

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::error::{PatchError, PatchResult};
use crate::value_type::ValueType;

// ============================================================
// Entity kinds and modeled fields
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Thing,
    Frame,
    Sound,
    Weapon,
    Ammo,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Thing,
        EntityKind::Frame,
        EntityKind::Sound,
        EntityKind::Weapon,
        EntityKind::Ammo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Thing => "Thing",
            EntityKind::Frame => "Frame",
            EntityKind::Sound => "Sound",
            EntityKind::Weapon => "Weapon",
            EntityKind::Ammo => "Ammo",
        }
    }
}

/// Identifies a field modeled directly on an entity. Properties without one
/// are custom and travel in the entity's custom property bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    // Thing
    EditorNumber,
    Health,
    Speed,
    FastSpeed,
    Radius,
    Height,
    Damage,
    ReactionTime,
    PainChance,
    Flags,
    Mbf21Flags,
    Id24Flags,
    Mass,
    MeleeRange,
    SeeSound,
    AttackSound,
    PainSound,
    DeathSound,
    ActiveSound,
    RipSound,
    InfightingGroup,
    ProjectileGroup,
    SplashGroup,
    DroppedItem,
    MinRespawnTics,
    RespawnDice,
    PickupAmmoType,
    PickupAmmoCategory,
    PickupWeaponType,
    PickupItemType,
    PickupBonusCount,
    PickupSound,
    PickupMessage,
    Translation,
    SelfDamageFactor,

    // Frame
    SpriteIndex,
    FrameIndex,
    Bright,
    NextState,
    Duration,
    Misc1,
    Misc2,
    FrameMbf21Flags,
    Tranmap,

    // Sound
    Priority,
    Singular,

    // Weapon
    AmmoType,
    AmmoPerShot,
    WeaponMbf21Flags,
    Slot,
    SlotPriority,
    SwitchPriority,
    InitialOwned,
    InitialRaised,
    CarouselIcon,
    AllowSwitchWithOwnedWeapon,
    NoSwitchWithOwnedWeapon,
    AllowSwitchWithOwnedItem,
    NoSwitchWithOwnedItem,

    // Ammo
    MaxAmmo,
    PickupAmmo,
    InitialAmmo,
    MaxUpgradedAmmo,
    BoxAmmo,
    BackpackAmmo,
    WeaponAmmo,
    DroppedAmmo,
    DroppedBoxAmmo,
    DroppedBackpackAmmo,
    DroppedWeaponAmmo,
    Skill1Multiplier,
    Skill2Multiplier,
    Skill3Multiplier,
    Skill4Multiplier,
    Skill5Multiplier,
}

struct FieldDef {
    kind: EntityKind,
    keyword: &'static str,
    label: &'static str,
    value_type: ValueType,
    field: FieldId,
}

const fn def(
    kind: EntityKind,
    keyword: &'static str,
    label: &'static str,
    value_type: ValueType,
    field: FieldId,
) -> FieldDef {
    FieldDef { kind, keyword, label, value_type, field }
}

use EntityKind as K;
use FieldId as F;
use ValueType as V;

static STANDARD_FIELDS: &[FieldDef] = &[
    def(K::Thing, "ednum", "ID #", V::Int, F::EditorNumber),
    def(K::Thing, "health", "Hit points", V::Int, F::Health),
    def(K::Thing, "speed", "Speed", V::Int, F::Speed),
    def(K::Thing, "fastspeed", "Fast speed", V::Int, F::FastSpeed),
    def(K::Thing, "radius", "Width", V::UShort, F::Radius),
    def(K::Thing, "height", "Height", V::UShort, F::Height),
    def(K::Thing, "damage", "Missile damage", V::Int, F::Damage),
    def(K::Thing, "reactiontime", "Reaction time", V::UInt, F::ReactionTime),
    def(K::Thing, "painchance", "Pain chance", V::UInt, F::PainChance),
    def(K::Thing, "flags", "Bits", V::Flags, F::Flags),
    def(K::Thing, "mbf21flags", "MBF21 Bits", V::Flags, F::Mbf21Flags),
    def(K::Thing, "id24flags", "ID24 Bits", V::Flags, F::Id24Flags),
    def(K::Thing, "mass", "Mass", V::UInt, F::Mass),
    def(K::Thing, "meleerange", "Melee range", V::UShort, F::MeleeRange),
    def(K::Thing, "seesound", "Alert sound", V::Sound, F::SeeSound),
    def(K::Thing, "attacksound", "Attack sound", V::Sound, F::AttackSound),
    def(K::Thing, "painsound", "Pain sound", V::Sound, F::PainSound),
    def(K::Thing, "deathsound", "Death sound", V::Sound, F::DeathSound),
    def(K::Thing, "activesound", "Action sound", V::Sound, F::ActiveSound),
    def(K::Thing, "ripsound", "Rip sound", V::Sound, F::RipSound),
    def(K::Thing, "infightinggroup", "Infighting group", V::UInt, F::InfightingGroup),
    def(K::Thing, "projectilegroup", "Projectile group", V::Int, F::ProjectileGroup),
    def(K::Thing, "splashgroup", "Splash group", V::UInt, F::SplashGroup),
    def(K::Thing, "dropitem", "Dropped item", V::Thing, F::DroppedItem),
    def(K::Thing, "minrespawntics", "Min respawn tics", V::UInt, F::MinRespawnTics),
    def(K::Thing, "respawndice", "Respawn dice", V::UInt, F::RespawnDice),
    def(K::Thing, "pickupammotype", "Pickup ammo type", V::Int, F::PickupAmmoType),
    def(K::Thing, "pickupammocategory", "Pickup ammo category", V::Int, F::PickupAmmoCategory),
    def(K::Thing, "pickupweapontype", "Pickup weapon type", V::Int, F::PickupWeaponType),
    def(K::Thing, "pickupitemtype", "Pickup item type", V::Int, F::PickupItemType),
    def(K::Thing, "pickupbonuscount", "Pickup bonus count", V::Int, F::PickupBonusCount),
    def(K::Thing, "pickupsound", "Pickup sound", V::Sound, F::PickupSound),
    def(K::Thing, "pickupmessage", "Pickup message", V::String, F::PickupMessage),
    def(K::Thing, "translation", "Translation", V::String, F::Translation),
    def(K::Thing, "selfdamagefactor", "Self damage factor", V::Fixed, F::SelfDamageFactor),

    def(K::Frame, "spritenumber", "Sprite number", V::UInt, F::SpriteIndex),
    def(K::Frame, "spritesubnumber", "Sprite subnumber", V::UInt, F::FrameIndex),
    def(K::Frame, "bright", "Sprite subnumber", V::Bool, F::Bright),
    def(K::Frame, "nextframe", "Next frame", V::State, F::NextState),
    def(K::Frame, "duration", "Duration", V::Int, F::Duration),
    def(K::Frame, "misc1", "Unknown 1", V::Int, F::Misc1),
    def(K::Frame, "misc2", "Unknown 2", V::Int, F::Misc2),
    def(K::Frame, "mbf21flags", "MBF21 Bits", V::Flags, F::FrameMbf21Flags),
    def(K::Frame, "tranmap", "Tranmap", V::String, F::Tranmap),

    def(K::Sound, "priority", "Value", V::UByte, F::Priority),
    def(K::Sound, "singular", "Zero/One", V::Bool, F::Singular),

    def(K::Weapon, "ammotype", "Ammo type", V::UInt, F::AmmoType),
    def(K::Weapon, "ammopershot", "Ammo per shot", V::UInt, F::AmmoPerShot),
    def(K::Weapon, "mbf21flags", "MBF21 Bits", V::Flags, F::WeaponMbf21Flags),
    def(K::Weapon, "slot", "Slot", V::UInt, F::Slot),
    def(K::Weapon, "slotpriority", "Slot Priority", V::Int, F::SlotPriority),
    def(K::Weapon, "switchpriority", "Switch Priority", V::Int, F::SwitchPriority),
    def(K::Weapon, "initialowned", "Initial Owned", V::Bool, F::InitialOwned),
    def(K::Weapon, "initialraised", "Initial Raised", V::Bool, F::InitialRaised),
    def(K::Weapon, "carouselicon", "Carousel icon", V::String, F::CarouselIcon),
    def(K::Weapon, "allowswitchwithownedweapon", "Allow switch with owned weapon", V::Int, F::AllowSwitchWithOwnedWeapon),
    def(K::Weapon, "noswitchwithownedweapon", "No switch with owned weapon", V::Int, F::NoSwitchWithOwnedWeapon),
    def(K::Weapon, "allowswitchwithowneditem", "Allow switch with owned item", V::Int, F::AllowSwitchWithOwnedItem),
    def(K::Weapon, "noswitchwithowneditem", "No switch with owned item", V::Int, F::NoSwitchWithOwnedItem),

    def(K::Ammo, "max", "Max ammo", V::UInt, F::MaxAmmo),
    def(K::Ammo, "pickup", "Per ammo", V::UInt, F::PickupAmmo),
    def(K::Ammo, "initial", "Initial ammo", V::UInt, F::InitialAmmo),
    def(K::Ammo, "maxupgraded", "Max upgraded ammo", V::Int, F::MaxUpgradedAmmo),
    def(K::Ammo, "box", "Box ammo", V::Int, F::BoxAmmo),
    def(K::Ammo, "backpack", "Backpack ammo", V::Int, F::BackpackAmmo),
    def(K::Ammo, "weapon", "Weapon ammo", V::Int, F::WeaponAmmo),
    def(K::Ammo, "dropped", "Dropped ammo", V::Int, F::DroppedAmmo),
    def(K::Ammo, "droppedbox", "Dropped box ammo", V::Int, F::DroppedBoxAmmo),
    def(K::Ammo, "droppedbackpack", "Dropped backpack ammo", V::Int, F::DroppedBackpackAmmo),
    def(K::Ammo, "droppedweapon", "Dropped weapon ammo", V::Int, F::DroppedWeaponAmmo),
    def(K::Ammo, "skill1multiplier", "Skill 1 multiplier", V::Fixed, F::Skill1Multiplier),
    def(K::Ammo, "skill2multiplier", "Skill 2 multiplier", V::Fixed, F::Skill2Multiplier),
    def(K::Ammo, "skill3multiplier", "Skill 3 multiplier", V::Fixed, F::Skill3Multiplier),
    def(K::Ammo, "skill4multiplier", "Skill 4 multiplier", V::Fixed, F::Skill4Multiplier),
    def(K::Ammo, "skill5multiplier", "Skill 5 multiplier", V::Fixed, F::Skill5Multiplier),
];

// ============================================================
// Properties and parsed values
// ============================================================

/// A registered property: script keyword, patch label and declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub kind: EntityKind,
    pub keyword: String,
    pub label: String,
    pub value_type: ValueType,
    /// `None` for custom properties.
    pub field: Option<FieldId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Int(i32),
    Str(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(v) => write!(f, "{}", v),
            PropertyValue::Str(s) => f.write_str(s),
        }
    }
}

impl Property {
    pub fn is_custom(&self) -> bool {
        self.field.is_none()
    }

    /// Convert script text into a value of this property's declared type.
    pub fn parse(&self, text: &str) -> PatchResult<PropertyValue> {
        if !self.value_type.is_numeric() {
            return Ok(PropertyValue::Str(text.to_string()));
        }

        let trimmed = text.trim();
        let parsed = if self.value_type == ValueType::Bool {
            match trimmed.to_ascii_lowercase().as_str() {
                "true" => Some(1),
                "false" => Some(0),
                other => other.parse::<i64>().ok(),
            }
        } else {
            trimmed.parse::<i64>().ok()
        };

        let value = parsed.ok_or_else(|| self.bad_value(text))?;
        self.check_int(value)
    }

    fn check_int(&self, value: i64) -> PatchResult<PropertyValue> {
        // Numeric types always carry a range.
        let (min, max) = self.value_type.range().unwrap_or((i32::MIN, i32::MAX));
        if value < min as i64 || value > max as i64 {
            return Err(PatchError::OutOfRange {
                field: self.label.clone(),
                min: min as i64,
                max: max as i64,
                value,
            });
        }
        Ok(PropertyValue::Int(value as i32))
    }

    /// Integer payload of `value`, or a type error naming this property.
    pub fn expect_int(&self, value: &PropertyValue) -> PatchResult<i32> {
        match value {
            PropertyValue::Int(v) => Ok(*v),
            PropertyValue::Str(s) => Err(self.bad_value(s)),
        }
    }

    /// Text payload of `value`, or a type error naming this property.
    pub fn expect_str(&self, value: &PropertyValue) -> PatchResult<String> {
        match value {
            PropertyValue::Str(s) => Ok(s.clone()),
            PropertyValue::Int(v) => Err(self.bad_value(&v.to_string())),
        }
    }

    /// Checks `value` against the declared type before it goes into a custom bag.
    pub fn validate(&self, value: &PropertyValue) -> PatchResult<()> {
        match (self.value_type.is_numeric(), value) {
            (true, PropertyValue::Int(v)) => self.check_int(*v as i64).map(|_| ()),
            (false, PropertyValue::Str(_)) => Ok(()),
            (_, other) => Err(self.bad_value(&other.to_string())),
        }
    }

    fn bad_value(&self, text: &str) -> PatchError {
        PatchError::BadValue {
            property: self.keyword.clone(),
            expected: self.value_type,
            value: text.to_string(),
        }
    }
}

// ============================================================
// Registry
// ============================================================

/// Immutable keyword table, built once before any entity is touched.
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    properties: Vec<Property>,
    /// (kind, lower-cased keyword) -> index in `properties`
    index: HashMap<(EntityKind, String), usize>,
}

impl PropertyRegistry {
    /// Registry holding only the modeled fields.
    pub fn standard() -> Self {
        PropertyRegistryBuilder::new().build()
    }

    pub fn builder() -> PropertyRegistryBuilder {
        PropertyRegistryBuilder::new()
    }

    pub fn lookup(&self, kind: EntityKind, keyword: &str) -> PatchResult<&Property> {
        self.index
            .get(&(kind, keyword.to_ascii_lowercase()))
            .map(|&idx| &self.properties[idx])
            .ok_or_else(|| PatchError::UnknownProperty(keyword.to_string()))
    }

    pub fn contains(&self, kind: EntityKind, keyword: &str) -> bool {
        self.index.contains_key(&(kind, keyword.to_ascii_lowercase()))
    }

    /// Properties of one kind in registration order.
    pub fn properties(&self, kind: EntityKind) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(move |p| p.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

pub struct PropertyRegistryBuilder {
    registry: PropertyRegistry,
}

impl PropertyRegistryBuilder {
    pub fn new() -> Self {
        let mut registry = PropertyRegistry {
            properties: Vec::with_capacity(STANDARD_FIELDS.len()),
            index: HashMap::new(),
        };
        for def in STANDARD_FIELDS {
            registry.insert(Property {
                kind: def.kind,
                keyword: def.keyword.to_string(),
                label: def.label.to_string(),
                value_type: def.value_type,
                field: Some(def.field),
            });
        }
        Self { registry }
    }

    /// Register an unmodeled property. A custom keyword may shadow a
    /// standard one of the same kind.
    pub fn custom(mut self, kind: EntityKind, keyword: &str, label: &str, value_type: ValueType) -> Self {
        self.registry.insert(Property {
            kind,
            keyword: keyword.to_string(),
            label: label.to_string(),
            value_type,
            field: None,
        });
        self
    }

    pub fn build(self) -> PropertyRegistry {
        log::debug!("property registry built with {} properties", self.registry.len());
        self.registry
    }
}

impl Default for PropertyRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyRegistry {
    fn insert(&mut self, property: Property) {
        let key = (property.kind, property.keyword.to_ascii_lowercase());
        if let Some(&idx) = self.index.get(&key) {
            self.properties[idx] = property;
        } else {
            self.index.insert(key, self.properties.len());
            self.properties.push(property);
        }
    }
}

/// Human-readable dump of every registered property, grouped by kind.
pub fn write_property_listing(registry: &PropertyRegistry, out: &mut dyn Write) -> std::io::Result<()> {
    for kind in EntityKind::ALL {
        writeln!(out, "# {} Properties", kind.name())?;
        for property in registry.properties(kind) {
            let custom = if property.is_custom() { " [custom]" } else { "" };
            writeln!(
                out,
                "{} -> \"{}\" ({}){}",
                property.keyword,
                property.label,
                property.value_type.name(),
                custom
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let registry = PropertyRegistry::standard();
        let p = registry.lookup(EntityKind::Thing, "ReactionTime").unwrap();
        assert_eq!(p.label, "Reaction time");
        assert_eq!(p.field, Some(FieldId::ReactionTime));
    }

    #[test]
    fn test_lookup_is_per_kind() {
        let registry = PropertyRegistry::standard();
        assert_eq!(registry.lookup(EntityKind::Weapon, "mbf21flags").unwrap().field, Some(FieldId::WeaponMbf21Flags));
        assert_eq!(registry.lookup(EntityKind::Frame, "mbf21flags").unwrap().field, Some(FieldId::FrameMbf21Flags));
        assert!(matches!(
            registry.lookup(EntityKind::Sound, "health"),
            Err(PatchError::UnknownProperty(_))
        ));
    }

    #[test]
    fn test_custom_property() {
        let registry = PropertyRegistry::builder()
            .custom(EntityKind::Thing, "Blood", "Blood color", ValueType::UByte)
            .build();
        let p = registry.lookup(EntityKind::Thing, "blood").unwrap();
        assert!(p.is_custom());
        assert_eq!(p.parse("12").unwrap(), PropertyValue::Int(12));
        assert!(matches!(p.parse("300"), Err(PatchError::OutOfRange { .. })));
        assert!(matches!(p.parse("red"), Err(PatchError::BadValue { .. })));
    }

    #[test]
    fn test_parse_bool_and_string() {
        let registry = PropertyRegistry::standard();
        let singular = registry.lookup(EntityKind::Sound, "singular").unwrap();
        assert_eq!(singular.parse("true").unwrap(), PropertyValue::Int(1));
        assert_eq!(singular.parse("0").unwrap(), PropertyValue::Int(0));
        let icon = registry.lookup(EntityKind::Weapon, "carouselicon").unwrap();
        assert_eq!(icon.parse("SMSHOTGN").unwrap(), PropertyValue::Str("SMSHOTGN".to_string()));
    }

    #[test]
    fn test_listing_mentions_every_kind() {
        let registry = PropertyRegistry::standard();
        let mut buf = Vec::new();
        write_property_listing(&registry, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for kind in EntityKind::ALL {
            assert!(text.contains(&format!("# {} Properties", kind.name())));
        }
        assert!(text.contains("ednum -> \"ID #\" (INT)"));
    }
}
