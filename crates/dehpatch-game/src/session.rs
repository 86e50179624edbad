// session.rs — working copy of the engine tables for one compilation
//
// Entries are materialized from the baseline on first mutable access, so
// the set of touched indices is exactly the set of keys in each map.

use std::collections::BTreeMap;

use dehpatch_common::action_pointer::{ActionPointer, ActionPointerRegistry};
use dehpatch_common::config::PatchConfig;
use dehpatch_common::{FeatureLevel, PatchError, PatchResult};

use crate::ammo::Ammo;
use crate::entity::PatchObject;
use crate::frame::Frame;
use crate::sound::Sound;
use crate::stock::Baseline;
use crate::thing::Thing;
use crate::weapon::Weapon;

pub struct PatchSession {
    baseline: Baseline,
    level: FeatureLevel,
    force_output: bool,
    things: BTreeMap<usize, Thing>,
    frames: BTreeMap<usize, Frame>,
    sounds: BTreeMap<usize, Sound>,
    weapons: BTreeMap<usize, Weapon>,
    ammo: BTreeMap<usize, Ammo>,
    pointers: BTreeMap<usize, ActionPointer>,
}

fn slot<'a, T>(working: &'a BTreeMap<usize, T>, baseline: &'a [T], kind: &'static str, index: usize) -> PatchResult<&'a T> {
    match working.get(&index) {
        Some(entry) => Ok(entry),
        None => baseline.get(index).ok_or(PatchError::IndexOutOfRange {
            kind,
            index,
            count: baseline.len(),
        }),
    }
}

fn slot_mut<'a, T: PatchObject>(
    working: &'a mut BTreeMap<usize, T>,
    baseline: &[T],
    kind: &'static str,
    index: usize,
    force: bool,
) -> PatchResult<&'a mut T> {
    let source = baseline.get(index).ok_or(PatchError::IndexOutOfRange {
        kind,
        index,
        count: baseline.len(),
    })?;
    Ok(working.entry(index).or_insert_with(|| {
        log::trace!("materialized {} {}", kind, index);
        let mut entry = source.clone();
        if force {
            entry.set_force_output(true);
        }
        entry
    }))
}

impl PatchSession {
    pub fn new(baseline: Baseline, level: FeatureLevel) -> Self {
        Self {
            baseline,
            level,
            force_output: false,
            things: BTreeMap::new(),
            frames: BTreeMap::new(),
            sounds: BTreeMap::new(),
            weapons: BTreeMap::new(),
            ammo: BTreeMap::new(),
            pointers: BTreeMap::new(),
        }
    }

    /// Session over the stock tables sized and tiered by `config`.
    pub fn from_config(config: &PatchConfig, registry: &ActionPointerRegistry) -> PatchResult<Self> {
        let baseline = Baseline::stock(config.thing_count, config.frame_count, registry)?;
        let mut session = Self::new(baseline, config.feature_level);
        session.force_output = config.force_output;
        log::debug!(
            "session: {} things, {} frames, feature level {}",
            config.thing_count,
            config.frame_count,
            config.feature_level
        );
        Ok(session)
    }

    pub fn level(&self) -> FeatureLevel {
        self.level
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Entries touched from now on start with force output enabled.
    pub fn set_force_output(&mut self, force: bool) {
        self.force_output = force;
    }

    pub fn thing(&self, index: usize) -> PatchResult<&Thing> {
        slot(&self.things, &self.baseline.things, "Thing", index)
    }

    pub fn thing_mut(&mut self, index: usize) -> PatchResult<&mut Thing> {
        slot_mut(&mut self.things, &self.baseline.things, "Thing", index, self.force_output)
    }

    pub fn frame(&self, index: usize) -> PatchResult<&Frame> {
        slot(&self.frames, &self.baseline.frames, "Frame", index)
    }

    pub fn frame_mut(&mut self, index: usize) -> PatchResult<&mut Frame> {
        slot_mut(&mut self.frames, &self.baseline.frames, "Frame", index, self.force_output)
    }

    pub fn sound(&self, index: usize) -> PatchResult<&Sound> {
        slot(&self.sounds, &self.baseline.sounds, "Sound", index)
    }

    /// Index 0 is the null sound and cannot be patched.
    pub fn sound_mut(&mut self, index: usize) -> PatchResult<&mut Sound> {
        if index == 0 {
            return Err(PatchError::Forbidden { field: "Sound index".to_string(), value: 0 });
        }
        slot_mut(&mut self.sounds, &self.baseline.sounds, "Sound", index, self.force_output)
    }

    pub fn weapon(&self, index: usize) -> PatchResult<&Weapon> {
        slot(&self.weapons, &self.baseline.weapons, "Weapon", index)
    }

    pub fn weapon_mut(&mut self, index: usize) -> PatchResult<&mut Weapon> {
        slot_mut(&mut self.weapons, &self.baseline.weapons, "Weapon", index, self.force_output)
    }

    pub fn ammo(&self, index: usize) -> PatchResult<&Ammo> {
        slot(&self.ammo, &self.baseline.ammo, "Ammo", index)
    }

    pub fn ammo_mut(&mut self, index: usize) -> PatchResult<&mut Ammo> {
        slot_mut(&mut self.ammo, &self.baseline.ammo, "Ammo", index, self.force_output)
    }

    pub fn used_things(&self) -> impl Iterator<Item = (usize, &Thing)> {
        self.things.iter().map(|(&i, t)| (i, t))
    }

    pub fn used_frames(&self) -> impl Iterator<Item = (usize, &Frame)> {
        self.frames.iter().map(|(&i, f)| (i, f))
    }

    pub fn used_sounds(&self) -> impl Iterator<Item = (usize, &Sound)> {
        self.sounds.iter().map(|(&i, s)| (i, s))
    }

    pub fn used_weapons(&self) -> impl Iterator<Item = (usize, &Weapon)> {
        self.weapons.iter().map(|(&i, w)| (i, w))
    }

    pub fn used_ammo(&self) -> impl Iterator<Item = (usize, &Ammo)> {
        self.ammo.iter().map(|(&i, a)| (i, a))
    }

    // ============================================================
    // Action pointers
    // ============================================================

    /// Put `mnemonic` on `frame` with `args`. MBF21 pointers take their
    /// arguments in the frame's argument array, MBF pointers in misc1/misc2.
    /// Nothing changes unless every check passes.
    pub fn set_frame_pointer(
        &mut self,
        registry: &ActionPointerRegistry,
        frame: usize,
        mnemonic: &str,
        args: &[i32],
    ) -> PatchResult<()> {
        let pointer = *registry.get(mnemonic)?;
        pointer.check_level(self.level)?;
        pointer.validate_args(args)?;

        let entry = self.frame_mut(frame)?;
        if pointer.max_args() > 0 {
            if pointer.uses_args() {
                entry.set_args(args)?;
            } else {
                entry.misc1 = args.first().copied().unwrap_or(0);
                entry.misc2 = args.get(1).copied().unwrap_or(0);
            }
        }
        log::debug!("frame {} pointer set to A_{}", frame, pointer.mnemonic);
        self.pointers.insert(frame, pointer);
        Ok(())
    }

    /// Pointer on `frame`: the one set this session, else the baseline's.
    pub fn frame_pointer<'a>(&'a self, registry: &'a ActionPointerRegistry, frame: usize) -> Option<&'a ActionPointer> {
        if let Some(pointer) = self.pointers.get(&frame) {
            return Some(pointer);
        }
        let mnemonic = self.baseline.pointers.get(&frame)?;
        registry.get(mnemonic).ok()
    }

    /// Frames whose pointer was set to something other than the baseline's.
    /// A frame without a stock pointer carries `NULL`.
    pub fn changed_pointers(&self) -> impl Iterator<Item = (usize, &ActionPointer)> {
        self.pointers.iter().filter_map(move |(&frame, pointer)| {
            let original = self.baseline.pointers.get(&frame).copied().unwrap_or("NULL");
            if original == pointer.mnemonic {
                None
            } else {
                Some((frame, pointer))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dehpatch_common::flags::ThingFlags;
    use dehpatch_common::labels::label;

    fn session(level: FeatureLevel) -> (PatchSession, ActionPointerRegistry) {
        let registry = ActionPointerRegistry::new();
        let baseline = Baseline::stock(138, 967, &registry).unwrap();
        (PatchSession::new(baseline, level), registry)
    }

    #[test]
    fn test_copy_on_write() {
        let (mut session, _) = session(FeatureLevel::Mbf21);
        assert_eq!(session.used_things().count(), 0);
        session.thing_mut(3).unwrap().set_health(60).unwrap();
        assert_eq!(session.thing(3).unwrap().health(), 60);
        assert_eq!(session.baseline().things[3].health(), 30);
        assert_eq!(session.used_things().map(|(i, _)| i).collect::<Vec<_>>(), vec![3]);
        assert_eq!(session.weapon(1).unwrap().name(), "Pistol");
    }

    #[test]
    fn test_index_out_of_range() {
        let (mut session, _) = session(FeatureLevel::Mbf21);
        assert!(matches!(session.thing_mut(138), Err(PatchError::IndexOutOfRange { count: 138, .. })));
        assert!(session.ammo(4).is_err());
        assert!(matches!(session.sound_mut(0), Err(PatchError::Forbidden { .. })));
        assert_eq!(session.used_ammo().count(), 0);
    }

    #[test]
    fn test_force_output_applies_to_new_entries() {
        let (mut session, _) = session(FeatureLevel::Mbf21);
        session.set_force_output(true);
        assert!(session.ammo_mut(0).unwrap().force_output());
    }

    #[test]
    fn test_mbf21_pointer_args() {
        let (mut session, registry) = session(FeatureLevel::Mbf21);
        session.set_frame_pointer(&registry, 500, "A_MonsterProjectile", &[12, 0, 0, 5]).unwrap();
        assert_eq!(session.frame(500).unwrap().args(), &[12, 0, 0, 5, 0, 0, 0, 0]);
        assert_eq!(session.frame_pointer(&registry, 500).map(|p| p.mnemonic), Some("MonsterProjectile"));
    }

    #[test]
    fn test_mbf_pointer_uses_misc() {
        let (mut session, registry) = session(FeatureLevel::Mbf);
        session.set_frame_pointer(&registry, 10, "Spawn", &[30, 64]).unwrap();
        let frame = session.frame(10).unwrap();
        assert_eq!((frame.misc1(), frame.misc2()), (30, 64));
        assert_eq!(frame.args(), &[0; 8]);
    }

    #[test]
    fn test_pointer_failures_leave_session_untouched() {
        let (mut session, registry) = session(FeatureLevel::Mbf);
        assert!(matches!(
            session.set_frame_pointer(&registry, 10, "A_SpawnObject", &[]),
            Err(PatchError::PointerNotSupported { .. })
        ));
        assert!(matches!(
            session.set_frame_pointer(&registry, 10, "A_Bogus", &[]),
            Err(PatchError::UnknownPointer(_))
        ));
        assert!(matches!(
            session.set_frame_pointer(&registry, 10, "A_Turn", &[400]),
            Err(PatchError::ArgOutOfRange { .. })
        ));
        assert!(session.set_frame_pointer(&registry, 5000, "A_Look", &[]).is_err());
        assert_eq!(session.used_frames().count(), 0);
        assert_eq!(session.changed_pointers().count(), 0);
    }

    #[test]
    fn test_changed_pointers() {
        let (mut session, registry) = session(FeatureLevel::Mbf21);
        session.set_frame_pointer(&registry, 174, "A_Look", &[]).unwrap();
        session.set_frame_pointer(&registry, 176, "A_FaceTarget", &[]).unwrap();
        session.set_frame_pointer(&registry, 900, "A_Chase", &[]).unwrap();
        session.set_frame_pointer(&registry, 901, "NULL", &[]).unwrap();
        let changed: Vec<(usize, &str)> = session.changed_pointers().map(|(f, p)| (f, p.mnemonic)).collect();
        assert_eq!(changed, vec![(176, "FaceTarget"), (900, "Chase")]);
        assert_eq!(session.frame_pointer(&registry, 185).map(|p| p.mnemonic), Some("PosAttack"));
    }

    #[test]
    fn test_restoring_shared_stock_pointer_is_no_change() {
        let (mut session, registry) = session(FeatureLevel::Mbf21);
        session.set_frame_pointer(&registry, 175, "A_Look", &[]).unwrap();
        session.set_frame_pointer(&registry, 180, "A_Chase", &[]).unwrap();
        assert_eq!(session.changed_pointers().count(), 0);
        assert!(session.frame_pointer(&registry, 186).is_none());
    }

    #[test]
    fn test_stock_monster_keeps_vanilla_values() {
        let (mut session, _) = session(FeatureLevel::Mbf21);
        session.thing_mut(12).unwrap().add_flag(512);
        let imp = session.thing(12).unwrap();
        let base = &session.baseline().things[12];
        assert_eq!(imp.name(), "Imp");
        assert_eq!(imp.flags(), base.flags() | 512);
        assert!(imp.has_flag((ThingFlags::SOLID | ThingFlags::SHOOTABLE | ThingFlags::COUNTKILL).bits()));
        assert_eq!((imp.health(), imp.label(label::SPAWN)), (60, 442));
    }

    #[test]
    fn test_from_config() {
        let registry = ActionPointerRegistry::new();
        let config = PatchConfig { frame_count: 20, force_output: true, ..PatchConfig::default() };
        let mut session = PatchSession::from_config(&config, &registry).unwrap();
        assert_eq!(session.level(), FeatureLevel::Mbf21);
        assert!(session.frame_mut(20).is_err());
        let thing = session.thing_mut(1).unwrap();
        thing.set_label(label::SPAWN, 1).unwrap();
        assert!(thing.force_output());
    }
}
