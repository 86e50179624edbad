// stock.rs — stock engine tables used as the diff baseline

use std::collections::BTreeMap;

use dehpatch_common::action_pointer::ActionPointerRegistry;
use dehpatch_common::labels::weapon_label;
use dehpatch_common::PatchResult;

use crate::ammo::Ammo;
use crate::frame::{Frame, BRIGHT_BIT};
use crate::info::{FRAMES, THINGS};
use crate::sound::Sound;
use crate::thing::{Thing, FRAME_LABELS};
use crate::weapon::{AmmoType, Weapon};

/// (priority, singular) for every stock sound after the null entry.
const STOCK_SOUNDS: [(i32, bool); 108] = [
    (64, false), (64, false), (64, false), (64, false), (64, false), (64, false),
    (64, false), (64, false), (64, false), (64, false), (118, false), (64, false),
    (64, false), (64, false), (70, false), (70, false), (70, false), (100, false),
    (100, false), (100, false), (100, false), (119, false), (78, false), (78, false),
    (96, false), (96, false), (96, false), (96, false), (96, false), (96, false),
    (78, false), (78, true), (78, true), (96, false), (32, false), (98, true),
    (98, true), (98, true), (98, true), (98, true), (98, true), (98, true),
    (94, true), (92, true), (90, true), (90, true), (90, true), (90, true),
    (90, true), (90, true), (70, false), (70, false), (70, false), (70, false),
    (70, false), (70, false), (32, false), (32, false), (70, false), (70, false),
    (70, false), (70, false), (70, false), (70, false), (70, false), (70, false),
    (32, false), (32, false), (32, false), (32, false), (32, false), (32, false),
    (32, false), (32, false), (120, true), (120, true), (120, true), (100, true),
    (100, true), (100, true), (78, false), (60, false), (64, false), (70, false),
    (70, false), (64, false), (60, false), (100, false), (100, false), (100, false),
    (32, false), (32, false), (60, false), (70, false), (70, false), (70, false),
    (70, false), (70, false), (70, false), (70, false), (70, false), (70, false),
    (70, false), (70, false), (70, false), (70, false), (70, false), (60, false),
];

/// (name, ammo, select, deselect, ready, fire, flash, ammo per shot)
const STOCK_WEAPONS: [(&str, AmmoType, i32, i32, i32, i32, i32, i32); 9] = [
    ("Fist", AmmoType::Infinite, 4, 3, 2, 5, 0, 1),
    ("Pistol", AmmoType::Bullets, 12, 11, 10, 13, 17, 1),
    ("Shotgun", AmmoType::Shells, 20, 19, 18, 21, 30, 1),
    ("Chaingun", AmmoType::Bullets, 51, 50, 49, 52, 55, 1),
    ("Rocket launcher", AmmoType::Rockets, 59, 58, 57, 60, 63, 1),
    ("Plasma rifle", AmmoType::Cells, 76, 75, 74, 77, 79, 1),
    ("BFG9000", AmmoType::Cells, 83, 82, 81, 84, 88, 40),
    ("Chainsaw", AmmoType::Infinite, 70, 69, 67, 71, 0, 1),
    ("Super-shotgun", AmmoType::Shells, 34, 33, 32, 35, 47, 2),
];

/// (name, max, pickup)
const STOCK_AMMO: [(&str, i32, i32); 4] = [
    ("Bullets", 200, 10),
    ("Shells", 50, 4),
    ("Cells", 300, 20),
    ("Rockets", 50, 1),
];

/// Sound table; index 0 is the null sound.
pub fn sounds() -> PatchResult<Vec<Sound>> {
    let mut sounds = Vec::with_capacity(STOCK_SOUNDS.len() + 1);
    sounds.push(Sound::new());
    for &(priority, singular) in STOCK_SOUNDS.iter() {
        sounds.push(Sound::with(priority, singular)?);
    }
    Ok(sounds)
}

pub fn weapons() -> PatchResult<Vec<Weapon>> {
    STOCK_WEAPONS
        .iter()
        .map(|&(name, ammo, select, deselect, ready, fire, flash, per_shot)| -> PatchResult<Weapon> {
            let mut weapon = Weapon::named(name);
            weapon
                .set_ammo(ammo)
                .set_label(weapon_label::SELECT, select)?
                .set_label(weapon_label::DESELECT, deselect)?
                .set_label(weapon_label::READY, ready)?
                .set_label(weapon_label::FIRE, fire)?
                .set_label(weapon_label::FLASH, flash)?
                .set_ammo_per_shot(per_shot)?;
            Ok(weapon)
        })
        .collect()
}

pub fn ammo() -> PatchResult<Vec<Ammo>> {
    STOCK_AMMO
        .iter()
        .map(|&(name, max, pickup)| -> PatchResult<Ammo> {
            let mut ammo = Ammo::named(name);
            ammo.set_max(max)?.set_pickup(pickup)?;
            Ok(ammo)
        })
        .collect()
}

/// Thing table of `count` slots: slot 0 unused, then the stock things,
/// then default-valued extension slots.
pub fn things(count: usize) -> PatchResult<Vec<Thing>> {
    let mut things = Vec::with_capacity(count);
    things.push(Thing::new());
    for info in THINGS.iter() {
        let mut thing = Thing::named(info.name);
        thing
            .set_editor_number(info.editor_number)?
            .set_health(info.health)?
            .set_speed(info.speed)?
            .set_radius(info.radius)?
            .set_height(info.height)?
            .set_damage(info.damage)?
            .set_reaction_time(info.reaction_time)?
            .set_pain_chance(info.pain_chance)?
            .set_mass(info.mass)?
            .set_see_sound(info.sounds[0])?
            .set_attack_sound(info.sounds[1])?
            .set_pain_sound(info.sounds[2])?
            .set_death_sound(info.sounds[3])?
            .set_active_sound(info.sounds[4])?
            .set_flags(info.flags);
        for ((role, _), &index) in FRAME_LABELS.iter().zip(info.frames.iter()) {
            thing.set_label(role, index)?;
        }
        things.push(thing);
    }
    things.resize(count, Thing::new());
    Ok(things)
}

/// State table of `count` rows, stock states first.
pub fn frames(count: usize) -> PatchResult<Vec<Frame>> {
    let mut frames = Vec::with_capacity(count);
    for &(sprite, subframe, duration, next, _) in FRAMES.iter() {
        let mut frame = Frame::new();
        frame
            .set_sprite_index(sprite)?
            .set_frame_index(subframe & !BRIGHT_BIT)?
            .set_duration(duration)?
            .set_next_state(next)?
            .set_bright(subframe & BRIGHT_BIT != 0);
        frames.push(frame);
    }
    frames.resize(count, Frame::new());
    Ok(frames)
}

/// Stock pointer mnemonic of every frame that has one.
pub fn frame_pointers(count: usize) -> BTreeMap<usize, &'static str> {
    FRAMES
        .iter()
        .take(count)
        .enumerate()
        .filter(|&(_, &(.., mnemonic))| mnemonic != "NULL")
        .map(|(index, &(.., mnemonic))| (index, mnemonic))
        .collect()
}

/// The reference tables a session diffs against.
#[derive(Debug, Clone)]
pub struct Baseline {
    pub things: Vec<Thing>,
    pub frames: Vec<Frame>,
    pub sounds: Vec<Sound>,
    pub weapons: Vec<Weapon>,
    pub ammo: Vec<Ammo>,
    /// Pointer mnemonic per frame. Frames missing here carry no pointer.
    pub pointers: BTreeMap<usize, &'static str>,
}

impl Baseline {
    /// Vanilla tables, with thing and frame tables cut or padded to the
    /// requested sizes. Every seeded pointer must exist in `registry`.
    pub fn stock(thing_count: usize, frame_count: usize, registry: &ActionPointerRegistry) -> PatchResult<Self> {
        let pointers = frame_pointers(frame_count);
        for mnemonic in pointers.values() {
            registry.get(mnemonic)?;
        }
        Ok(Self {
            things: things(thing_count)?,
            frames: frames(frame_count)?,
            sounds: sounds()?,
            weapons: weapons()?,
            ammo: ammo()?,
            pointers,
        })
    }

    /// Legacy pointer number of `frame`: its position among the frames
    /// that carry a stock pointer.
    pub fn pointer_slot(&self, frame: usize) -> Option<usize> {
        self.pointers.keys().position(|&f| f == frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dehpatch_common::flags::ThingFlags;
    use dehpatch_common::labels::label;

    #[test]
    fn test_sound_table() {
        let sounds = sounds().unwrap();
        assert_eq!(sounds.len(), 109);
        assert_eq!(sounds[0], Sound::new());
        assert_eq!(sounds[1].priority(), 64);
        assert_eq!(sounds[11].priority(), 118);
        assert!(!sounds[35].singular());
        assert!(sounds[36].singular());
        assert_eq!(sounds[108].priority(), 60);
    }

    #[test]
    fn test_weapon_table() {
        let weapons = weapons().unwrap();
        assert_eq!(weapons.len(), 9);
        assert_eq!(weapons[0].name(), "Fist");
        assert_eq!(weapons[0].ammo(), Some(AmmoType::Infinite));
        assert_eq!(weapons[0].label(weapon_label::FLASH), 0);
        assert!(!weapons[0].labels().contains(weapon_label::FLASH));
        assert_eq!(weapons[1].label(weapon_label::SELECT), 12);
        assert_eq!(weapons[6].ammo_per_shot(), 40);
        assert_eq!(weapons[8].ammo_per_shot(), 2);
    }

    #[test]
    fn test_ammo_table() {
        let ammo = ammo().unwrap();
        assert_eq!(ammo.len(), 4);
        assert_eq!((ammo[2].name(), ammo[2].max(), ammo[2].pickup()), ("Cells", 300, 20));
    }

    #[test]
    fn test_thing_table() {
        let table = things(138).unwrap();
        assert_eq!(table.len(), 138);
        assert_eq!(table[0], Thing::new());

        let imp = &table[12];
        assert_eq!(imp.name(), "Imp");
        assert_eq!(imp.editor_number(), 3001);
        assert_eq!(imp.health(), 60);
        assert_eq!(imp.label(label::SPAWN), 442);
        assert_eq!(imp.label(label::MELEE), 452);
        assert_eq!(imp.see_sound(), 39);
        assert!(imp.has_flag((ThingFlags::SOLID | ThingFlags::SHOOTABLE | ThingFlags::COUNTKILL).bits()));

        let fireball = &table[32];
        assert_eq!(fireball.name(), "Imp fireball");
        assert!(fireball.is_projectile());
        assert_eq!(fireball.speed(), 10);
        assert_eq!(fireball.encoded_speed(), 655360);

        assert_eq!(table[137].name(), "Brain");
        assert_eq!(things(10).unwrap().len(), 10);
        assert_eq!(things(200).unwrap()[150], Thing::new());
    }

    #[test]
    fn test_frame_table() {
        let table = frames(967).unwrap();
        assert_eq!(table[0].duration(), -1);
        let stand = &table[174];
        assert_eq!((stand.sprite_index(), stand.frame_index(), stand.duration(), stand.next_state()), (29, 0, 10, 175));
        assert!(!stand.bright());
        let flash = &table[17];
        assert_eq!(flash.frame_index(), 0);
        assert!(flash.bright());
        assert_eq!(flash.encoded_frame_index(), 0x8000);
        assert_eq!(table[966].next_state(), 963);

        let padded = frames(1000).unwrap();
        assert_eq!(padded[999], Frame::new());
    }

    #[test]
    fn test_stock_baseline() {
        let registry = ActionPointerRegistry::new();
        let baseline = Baseline::stock(138, 967, &registry).unwrap();
        assert_eq!(baseline.things.len(), 138);
        assert_eq!(baseline.frames.len(), 967);
        assert_eq!(baseline.pointers.len(), 448);
        assert_eq!(baseline.pointers.get(&174), Some(&"Look"));
        assert_eq!(baseline.pointers.get(&175), Some(&"Look"));
        assert_eq!(baseline.pointers.get(&801), Some(&"BrainExplode"));
        assert_eq!(baseline.pointers.get(&0), None);
        assert_eq!(baseline.pointers.get(&900), None);

        assert_eq!(baseline.pointer_slot(1), Some(0));
        assert_eq!(baseline.pointer_slot(2), Some(1));
        assert_eq!(baseline.pointer_slot(801), Some(447));
        assert_eq!(baseline.pointer_slot(5), None);

        let small = Baseline::stock(10, 100, &registry).unwrap();
        assert!(small.pointers.keys().all(|&f| f < 100));
        assert_eq!(small.things.len(), 10);
    }
}
