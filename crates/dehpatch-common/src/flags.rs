// flags.rs — behavior bitfields for things, frames and weapons
//
// Entities keep raw i32 bits so arbitrary patterns survive a round trip;
// these types give the bits their names.

use bitflags::Flags;

use crate::error::{PatchError, PatchResult};

// ============================================================
// Thing flags ("Bits")
// ============================================================

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ThingFlags: i32 {
        const SPECIAL      = 0x00000001;
        const SOLID        = 0x00000002;
        const SHOOTABLE    = 0x00000004;
        const NOSECTOR     = 0x00000008;
        const NOBLOCKMAP   = 0x00000010;
        const AMBUSH       = 0x00000020;
        const JUSTHIT      = 0x00000040;
        const JUSTATTACKED = 0x00000080;
        const SPAWNCEILING = 0x00000100;
        const NOGRAVITY    = 0x00000200;
        const DROPOFF      = 0x00000400;
        const PICKUP       = 0x00000800;
        const NOCLIP       = 0x00001000;
        const SLIDE        = 0x00002000;
        const FLOAT        = 0x00004000;
        const TELEPORT     = 0x00008000;
        const MISSILE      = 0x00010000;
        const DROPPED      = 0x00020000;
        const SHADOW       = 0x00040000;
        const NOBLOOD      = 0x00080000;
        const CORPSE       = 0x00100000;
        const INFLOAT      = 0x00200000;
        const COUNTKILL    = 0x00400000;
        const COUNTITEM    = 0x00800000;
        const SKULLFLY     = 0x01000000;
        const NOTDMATCH    = 0x02000000;
        const TRANSLATION  = 0x04000000;
        const TRANSLATION2 = 0x08000000;
        const TOUCHY       = 0x10000000;
        const BOUNCES      = 0x20000000;
        const FRIEND       = 0x40000000;
        const TRANSLUCENT  = i32::MIN;
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ThingMbf21Flags: i32 {
        const LOGRAV         = 0x00000001;
        const SHORTMRANGE    = 0x00000002;
        const DMGIGNORED     = 0x00000004;
        const NORADIUSDMG    = 0x00000008;
        const FORCERADIUSDMG = 0x00000010;
        const HIGHERMPROB    = 0x00000020;
        const RANGEHALF      = 0x00000040;
        const NOTHRESHOLD    = 0x00000080;
        const LONGMELEE      = 0x00000100;
        const BOSS           = 0x00000200;
        const MAP07BOSS1     = 0x00000400;
        const MAP07BOSS2     = 0x00000800;
        const E1M8BOSS       = 0x00001000;
        const E2M8BOSS       = 0x00002000;
        const E3M8BOSS       = 0x00004000;
        const E4M6BOSS       = 0x00008000;
        const E4M8BOSS       = 0x00010000;
        const RIP            = 0x00020000;
        const FULLVOLSOUNDS  = 0x00040000;
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ThingId24Flags: i32 {
        const NORESPAWN          = 0x00000001;
        const SPECIALSTAYSSINGLE = 0x00000002;
        const SPECIALSTAYSCOOP   = 0x00000004;
        const SPECIALSTAYSDM     = 0x00000008;
    }
}

// ============================================================
// Frame and weapon flags ("MBF21 Bits")
// ============================================================

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct StateMbf21Flags: i32 {
        const SKILL5FAST = 0x00000001;
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct WeaponMbf21Flags: i32 {
        const NOTHRUST       = 0x00000001;
        const SILENT         = 0x00000002;
        const NOAUTOFIRE     = 0x00000004;
        const FLEEMELEE      = 0x00000008;
        const AUTOSWITCHFROM = 0x00000010;
        const NOAUTOSWITCHTO = 0x00000020;
    }
}

/// Bit value of a named flag, ignoring case.
pub fn flag_from_mnemonic<F: Flags<Bits = i32>>(name: &str) -> PatchResult<i32> {
    F::from_name(&name.to_ascii_uppercase())
        .map(|flag| flag.bits())
        .ok_or_else(|| PatchError::UnknownFlag(name.to_string()))
}

/// Names of every set bit `F` knows about, in declaration order.
pub fn flag_names<F: Flags<Bits = i32>>(bits: i32) -> Vec<&'static str> {
    F::from_bits_truncate(bits)
        .iter_names()
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_lookup_ignores_case() {
        assert_eq!(flag_from_mnemonic::<ThingFlags>("missile").unwrap(), 0x10000);
        assert_eq!(flag_from_mnemonic::<ThingFlags>("Translucent").unwrap(), i32::MIN);
        assert_eq!(flag_from_mnemonic::<ThingMbf21Flags>("FULLVOLSOUNDS").unwrap(), 0x40000);
        assert_eq!(flag_from_mnemonic::<WeaponMbf21Flags>("silent").unwrap(), 2);
    }

    #[test]
    fn test_unknown_flag() {
        assert!(matches!(
            flag_from_mnemonic::<StateMbf21Flags>("BOGUS"),
            Err(PatchError::UnknownFlag(_))
        ));
    }

    #[test]
    fn test_flag_names() {
        let bits = (ThingFlags::SOLID | ThingFlags::SHOOTABLE | ThingFlags::COUNTKILL).bits();
        assert_eq!(flag_names::<ThingFlags>(bits), vec!["SOLID", "SHOOTABLE", "COUNTKILL"]);
    }
}
