// action_pointer.rs — per-frame behavior hooks and their parameter domains

use std::collections::HashMap;
use std::io::Write;

use crate::error::{PatchError, PatchResult};
use crate::feature_level::FeatureLevel;

// ============================================================
// Parameter kinds
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    None,
    Bool,
    Byte,
    Short,
    Int,
    UInt,
    AngleInt,
    AngleUInt,
    AngleFixed,
}

impl ParamKind {
    pub fn min(self) -> i32 {
        match self {
            ParamKind::None | ParamKind::Bool | ParamKind::Byte => 0,
            ParamKind::Short => -32767,
            ParamKind::Int => i32::MIN,
            ParamKind::UInt | ParamKind::AngleUInt => 0,
            ParamKind::AngleInt => -359,
            ParamKind::AngleFixed => (-360 << 16) + 1,
        }
    }

    pub fn max(self) -> i32 {
        match self {
            ParamKind::None => 0,
            ParamKind::Bool => 1,
            ParamKind::Byte => 255,
            ParamKind::Short => 32767,
            ParamKind::Int | ParamKind::UInt => i32::MAX,
            ParamKind::AngleInt | ParamKind::AngleUInt => 359,
            ParamKind::AngleFixed => (360 << 16) - 1,
        }
    }

    pub fn is_valid(self, value: i32) -> bool {
        value >= self.min() && value <= self.max()
    }

    pub fn name(self) -> &'static str {
        match self {
            ParamKind::None => "NONE",
            ParamKind::Bool => "BOOL",
            ParamKind::Byte => "BYTE",
            ParamKind::Short => "SHORT",
            ParamKind::Int => "INT",
            ParamKind::UInt => "UINT",
            ParamKind::AngleInt => "ANGLE_INT",
            ParamKind::AngleUInt => "ANGLE_UINT",
            ParamKind::AngleFixed => "ANGLE_FIXED",
        }
    }
}

// ============================================================
// Pointer descriptors
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPointer {
    /// Stock frame the pointer originates from, `None` for added pointers.
    pub frame: Option<u32>,
    pub weapon: bool,
    pub level: FeatureLevel,
    pub mnemonic: &'static str,
    pub params: &'static [ParamKind],
}

impl ActionPointer {
    /// Parameter kind at `index`; `None` once past the declared list.
    pub fn param(&self, index: usize) -> Option<ParamKind> {
        match self.params.get(index) {
            Some(ParamKind::None) | None => None,
            Some(&kind) => Some(kind),
        }
    }

    pub fn max_args(&self) -> usize {
        self.params.iter().take_while(|&&k| k != ParamKind::None).count()
    }

    /// MBF21 pointers read their parameters from the frame argument array;
    /// MBF pointers read them from misc1/misc2.
    pub fn uses_args(&self) -> bool {
        self.level >= FeatureLevel::Mbf21
    }

    pub fn is_null(&self) -> bool {
        self.mnemonic == "NULL"
    }

    /// Positional argument check.
    pub fn validate_args(&self, args: &[i32]) -> PatchResult<()> {
        for (index, &value) in args.iter().enumerate() {
            let kind = self.param(index).ok_or_else(|| PatchError::TooManyArgs {
                pointer: self.mnemonic,
                max: self.max_args(),
                len: args.len(),
            })?;
            if !kind.is_valid(value) {
                return Err(PatchError::ArgOutOfRange {
                    pointer: self.mnemonic,
                    index,
                    min: kind.min() as i64,
                    max: kind.max() as i64,
                    value: value as i64,
                });
            }
        }
        Ok(())
    }

    pub fn check_level(&self, target: FeatureLevel) -> PatchResult<()> {
        if !target.supports(self.level) {
            return Err(PatchError::PointerNotSupported {
                pointer: self.mnemonic,
                required: self.level.name(),
                target: target.name(),
            });
        }
        Ok(())
    }

    /// `A_Name(PARAM, ...)`
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.params.iter().map(|p| p.name()).collect();
        format!("A_{}({})", self.mnemonic, params.join(", "))
    }
}

use ParamKind::{
    AngleFixed as AFX, AngleInt as AI, AngleUInt as AU, Bool as B, Int as I, Short as S, UInt as U,
};

const fn doom(frame: u32, weapon: bool, mnemonic: &'static str) -> ActionPointer {
    ActionPointer { frame: Some(frame), weapon, level: FeatureLevel::Doom19, mnemonic, params: &[] }
}

const fn ext(level: FeatureLevel, weapon: bool, mnemonic: &'static str, params: &'static [ParamKind]) -> ActionPointer {
    ActionPointer { frame: None, weapon, level, mnemonic, params }
}

const MBF: FeatureLevel = FeatureLevel::Mbf;
const MBF21: FeatureLevel = FeatureLevel::Mbf21;

static POINTERS: &[ActionPointer] = &[
    doom(0, false, "NULL"),

    // Stock weapon pointers
    doom(1, true, "Light0"),
    doom(2, true, "WeaponReady"),
    doom(3, true, "Lower"),
    doom(4, true, "Raise"),
    doom(6, true, "Punch"),
    doom(9, true, "ReFire"),
    doom(14, true, "FirePistol"),
    doom(17, true, "Light1"),
    doom(22, true, "FireShotgun"),
    doom(31, true, "Light2"),
    doom(36, true, "FireShotgun2"),
    doom(38, true, "CheckReload"),
    doom(39, true, "OpenShotgun2"),
    doom(41, true, "LoadShotgun2"),
    doom(43, true, "CloseShotgun2"),
    doom(52, true, "FireCGun"),
    doom(60, true, "GunFlash"),
    doom(61, true, "FireMissile"),
    doom(71, true, "Saw"),
    doom(77, true, "FirePlasma"),
    doom(84, true, "BFGsound"),
    doom(86, true, "FireBFG"),

    // Stock thing pointers
    doom(119, false, "BFGSpray"),
    doom(127, false, "Explode"),
    doom(157, false, "Pain"),
    doom(159, false, "PlayerScream"),
    doom(160, false, "Fall"),
    doom(166, false, "XScream"),
    doom(174, false, "Look"),
    doom(176, false, "Chase"),
    doom(184, false, "FaceTarget"),
    doom(185, false, "PosAttack"),
    doom(190, false, "Scream"),
    doom(243, false, "VileChase"),
    doom(255, false, "VileStart"),
    doom(257, false, "VileTarget"),
    doom(264, false, "VileAttack"),
    doom(281, false, "StartFire"),
    doom(282, false, "Fire"),
    doom(285, false, "FireCrackle"),
    doom(316, false, "Tracer"),
    doom(336, false, "SkelWhoosh"),
    doom(338, false, "SkelFist"),
    doom(341, false, "SkelMissile"),
    doom(376, false, "FatRaise"),
    doom(377, false, "FatAttack1"),
    doom(380, false, "FatAttack2"),
    doom(383, false, "FatAttack3"),
    doom(397, false, "BossDeath"),
    doom(417, false, "CPosAttack"),
    doom(419, false, "CPosRefire"),
    doom(454, false, "TroopAttack"),
    doom(487, false, "SargAttack"),
    doom(506, false, "HeadAttack"),
    doom(539, false, "BruisAttack"),
    doom(590, false, "SkullAttack"),
    doom(603, false, "Metal"),
    doom(616, false, "SPosAttack"),
    doom(618, false, "SpidRefire"),
    doom(635, false, "BabyMetal"),
    doom(648, false, "BspiAttack"),
    doom(676, false, "Hoof"),
    doom(685, false, "CyberAttack"),
    doom(711, false, "PainAttack"),
    doom(718, false, "PainDie"),
    doom(774, false, "KeenDie"),
    doom(779, false, "BrainPain"),
    doom(780, false, "BrainScream"),
    doom(783, false, "BrainDie"),
    doom(785, false, "BrainAwake"),
    doom(786, false, "BrainSpit"),
    doom(787, false, "SpawnSound"),
    doom(788, false, "SpawnFly"),
    doom(801, false, "BrainExplode"),

    // MBF
    ext(MBF, false, "Detonate", &[]),
    ext(MBF, false, "Mushroom", &[AFX, I]),
    ext(MBF, false, "Spawn", &[U, I]),
    ext(MBF, false, "Turn", &[AI]),
    ext(MBF, false, "Face", &[AU]),
    ext(MBF, false, "Scratch", &[S, U]),
    ext(MBF, false, "PlaySound", &[U, B]),
    ext(MBF, false, "RandomJump", &[U, U]),
    ext(MBF, false, "LineEffect", &[S, S]),
    ext(MBF, false, "Die", &[]),
    ext(MBF, true, "FireOldBFG", &[]),
    ext(MBF, false, "BetaSkullAttack", &[]),
    ext(MBF, false, "Stop", &[]),

    // MBF21 thing pointers
    ext(MBF21, false, "SpawnObject", &[U, AFX, I, I, I, I, I, I]),
    ext(MBF21, false, "MonsterProjectile", &[U, AFX, AFX, I, I]),
    ext(MBF21, false, "MonsterBulletAttack", &[AFX, AFX, U, S, U]),
    ext(MBF21, false, "MonsterMeleeAttack", &[S, U, U, I]),
    ext(MBF21, false, "RadiusDamage", &[U, U]),
    ext(MBF21, false, "NoiseAlert", &[]),
    ext(MBF21, false, "HealChase", &[U, U]),
    ext(MBF21, false, "SeekTracer", &[U, U]),
    ext(MBF21, false, "FindTracer", &[AFX, U]),
    ext(MBF21, false, "ClearTracer", &[]),
    ext(MBF21, false, "JumpIfHealthBelow", &[U, I]),
    ext(MBF21, false, "JumpIfTargetInSight", &[U, AFX]),
    ext(MBF21, false, "JumpIfTargetCloser", &[U, U]),
    ext(MBF21, false, "JumpIfTracerInSight", &[U, AFX]),
    ext(MBF21, false, "JumpIfTracerCloser", &[U, U]),
    ext(MBF21, false, "JumpIfFlagsSet", &[U, I, I]),
    ext(MBF21, false, "AddFlags", &[I, I]),
    ext(MBF21, false, "RemoveFlags", &[I, I]),

    // MBF21 weapon pointers
    ext(MBF21, true, "WeaponProjectile", &[U, AFX, AFX, I, I]),
    ext(MBF21, true, "WeaponBulletAttack", &[AFX, AFX, U, S, U]),
    ext(MBF21, true, "WeaponMeleeAttack", &[S, U, U, U, I]),
    ext(MBF21, true, "WeaponSound", &[U, B]),
    ext(MBF21, true, "WeaponAlert", &[]),
    ext(MBF21, true, "WeaponJump", &[U, U]),
    ext(MBF21, true, "ConsumeAmmo", &[S]),
    ext(MBF21, true, "CheckAmmo", &[U, S]),
    ext(MBF21, true, "RefireTo", &[U, B]),
    ext(MBF21, true, "GunFlashTo", &[U, B]),
];

// ============================================================
// Registry
// ============================================================

/// Immutable pointer catalog, keyed by lower-cased mnemonic.
#[derive(Debug, Clone)]
pub struct ActionPointerRegistry {
    pointers: &'static [ActionPointer],
    by_mnemonic: HashMap<String, usize>,
    by_frame: HashMap<u32, usize>,
}

impl ActionPointerRegistry {
    pub fn new() -> Self {
        let mut by_mnemonic = HashMap::with_capacity(POINTERS.len());
        let mut by_frame = HashMap::new();
        for (idx, pointer) in POINTERS.iter().enumerate() {
            by_mnemonic.insert(pointer.mnemonic.to_ascii_lowercase(), idx);
            if let Some(frame) = pointer.frame {
                by_frame.insert(frame, idx);
            }
        }
        log::debug!("action pointer registry built with {} pointers", POINTERS.len());
        Self { pointers: POINTERS, by_mnemonic, by_frame }
    }

    /// Look up by mnemonic, ignoring case and an optional `A_` prefix.
    pub fn get(&self, mnemonic: &str) -> PatchResult<&ActionPointer> {
        let lower = mnemonic.to_ascii_lowercase();
        let key = lower.strip_prefix("a_").unwrap_or(&lower);
        self.by_mnemonic
            .get(key)
            .map(|&idx| &self.pointers[idx])
            .ok_or_else(|| PatchError::UnknownPointer(mnemonic.to_string()))
    }

    /// Stock pointer whose origin is `frame`.
    pub fn by_frame(&self, frame: u32) -> Option<&ActionPointer> {
        self.by_frame.get(&frame).map(|&idx| &self.pointers[idx])
    }

    pub fn null(&self) -> &ActionPointer {
        &self.pointers[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionPointer> {
        self.pointers.iter()
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
}

impl Default for ActionPointerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Dump every pointer, grouped by tier and classification.
pub fn write_pointer_listing(registry: &ActionPointerRegistry, out: &mut dyn Write) -> std::io::Result<()> {
    for level in FeatureLevel::ALL {
        for weapon in [true, false] {
            let group: Vec<&ActionPointer> = registry
                .iter()
                .filter(|p| p.level == level && p.weapon == weapon && !p.is_null())
                .collect();
            if group.is_empty() {
                continue;
            }
            let class = if weapon { "Weapon" } else { "Thing" };
            writeln!(out, "# {} {} Pointers", level.name(), class)?;
            for pointer in group {
                writeln!(out, "{}", pointer.signature())?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_domains() {
        assert!(ParamKind::Byte.is_valid(255));
        assert!(!ParamKind::Byte.is_valid(256));
        assert!(!ParamKind::Short.is_valid(-32768));
        assert!(ParamKind::AngleInt.is_valid(-359));
        assert!(!ParamKind::AngleUInt.is_valid(-1));
        assert!(ParamKind::AngleFixed.is_valid((360 << 16) - 1));
        assert!(!ParamKind::AngleFixed.is_valid(360 << 16));
        assert!(!ParamKind::None.is_valid(1));
    }

    #[test]
    fn test_lookup() {
        let registry = ActionPointerRegistry::new();
        let p = registry.get("a_monsterprojectile").unwrap();
        assert_eq!(p.mnemonic, "MonsterProjectile");
        assert_eq!(p.level, FeatureLevel::Mbf21);
        assert!(!p.weapon);
        assert!(registry.get("CHASE").is_ok());
        assert!(matches!(registry.get("A_Nonexistent"), Err(PatchError::UnknownPointer(_))));
    }

    #[test]
    fn test_by_frame() {
        let registry = ActionPointerRegistry::new();
        assert_eq!(registry.by_frame(174).map(|p| p.mnemonic), Some("Look"));
        assert_eq!(registry.by_frame(0).map(|p| p.mnemonic), Some("NULL"));
        assert!(registry.by_frame(5).is_none());
    }

    #[test]
    fn test_validate_args() {
        let registry = ActionPointerRegistry::new();
        let p = registry.get("WeaponSound").unwrap();
        assert!(p.validate_args(&[]).is_ok());
        assert!(p.validate_args(&[12, 1]).is_ok());
        assert!(matches!(p.validate_args(&[12, 2]), Err(PatchError::ArgOutOfRange { index: 1, .. })));
        assert!(matches!(p.validate_args(&[1, 1, 1]), Err(PatchError::TooManyArgs { max: 2, .. })));

        let look = registry.get("Look").unwrap();
        assert!(look.validate_args(&[1]).is_err());
    }

    #[test]
    fn test_uses_args() {
        let registry = ActionPointerRegistry::new();
        assert!(registry.get("SpawnObject").unwrap().uses_args());
        assert!(!registry.get("Spawn").unwrap().uses_args());
        assert_eq!(registry.get("SpawnObject").unwrap().max_args(), 8);
    }

    #[test]
    fn test_check_level() {
        let registry = ActionPointerRegistry::new();
        let p = registry.get("RandomJump").unwrap();
        assert!(p.check_level(FeatureLevel::Mbf).is_ok());
        assert!(p.check_level(FeatureLevel::Doom19).is_err());
    }

    #[test]
    fn test_listing() {
        let registry = ActionPointerRegistry::new();
        let mut buf = Vec::new();
        write_pointer_listing(&registry, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("# DOOM19 Weapon Pointers\nA_Light0()\n"));
        assert!(text.contains("A_Mushroom(ANGLE_FIXED, INT)"));
        assert!(text.contains("# MBF21 Weapon Pointers"));
        assert!(text.contains("# MBF Weapon Pointers\nA_FireOldBFG()\n\n"));
        assert!(!text.contains("A_NULL"));
    }

    #[test]
    fn test_weapon_classification() {
        let registry = ActionPointerRegistry::new();
        assert!(registry.get("FireOldBFG").unwrap().weapon);
        assert!(registry.get("FireBFG").unwrap().weapon);
        assert!(!registry.get("BetaSkullAttack").unwrap().weapon);
    }
}
