// exporter.rs — whole-patch writer

use std::io::{self, Write};

use dehpatch_common::FeatureLevel;

use crate::entity::PatchObject;
use crate::session::PatchSession;

const CRLF: &str = "\r\n";

pub const PATCH_FORMAT: i32 = 6;

fn write_header(out: &mut dyn Write, level: FeatureLevel, comment: &str) -> io::Result<()> {
    write!(out, "Patch File for DeHackEd v3.0{}", CRLF)?;
    write!(out, "# {}{}", comment, CRLF)?;
    write!(out, "# Note: Use the pound sign ('#') to start comment lines.{}", CRLF)?;
    write!(out, "{}", CRLF)?;
    write!(out, "Doom version = {}{}", level.doom_version(), CRLF)?;
    write!(out, "Patch format = {}{}", PATCH_FORMAT, CRLF)?;
    write!(out, "{}{}", CRLF, CRLF)?;
    Ok(())
}

/// Write `entry` under `header` if it differs from `base` or is forced.
/// Returns whether anything was written.
fn write_section<T: PatchObject>(
    out: &mut dyn Write,
    header: &str,
    entry: &T,
    base: &T,
    level: FeatureLevel,
) -> io::Result<bool> {
    if entry == base && !entry.force_output() {
        return Ok(false);
    }
    write!(out, "{}{}", header, CRLF)?;
    entry.write_diff(base, level, out)?;
    write!(out, "{}", CRLF)?;
    Ok(true)
}

/// Header plus one section per changed entry, then the pointer section.
pub fn write_patch(session: &PatchSession, out: &mut dyn Write, comment: &str) -> io::Result<()> {
    let level = session.level();
    let baseline = session.baseline();
    let mut sections = 0usize;

    write_header(out, level, comment)?;

    for (i, thing) in session.used_things() {
        let header = format!("Thing {} ({})", i, thing.name());
        sections += write_section(out, &header, thing, &baseline.things[i], level)? as usize;
    }
    for (i, frame) in session.used_frames() {
        let header = format!("Frame {}", i);
        sections += write_section(out, &header, frame, &baseline.frames[i], level)? as usize;
    }
    for (i, sound) in session.used_sounds() {
        // Legacy sound numbering does not count the null sound.
        let header = format!("Sound {}", i - 1);
        sections += write_section(out, &header, sound, &baseline.sounds[i], level)? as usize;
    }
    for (i, weapon) in session.used_weapons() {
        let header = format!("Weapon {} ({})", i, weapon.name());
        sections += write_section(out, &header, weapon, &baseline.weapons[i], level)? as usize;
    }
    for (i, ammo) in session.used_ammo() {
        let header = format!("Ammo {} ({})", i, ammo.name());
        sections += write_section(out, &header, ammo, &baseline.ammo[i], level)? as usize;
    }

    let changed: Vec<_> = session.changed_pointers().collect();
    if !changed.is_empty() {
        if level.supports(FeatureLevel::Mbf) {
            write!(out, "[CODEPTR]{}", CRLF)?;
            for (frame, pointer) in &changed {
                write!(out, "FRAME {} = {}{}", frame, pointer.mnemonic, CRLF)?;
            }
            write!(out, "{}", CRLF)?;
        } else {
            // Legacy patches can only copy a stock pointer, by its origin
            // frame, into a frame that already has a pointer slot.
            for (frame, pointer) in &changed {
                match (baseline.pointer_slot(*frame), pointer.frame) {
                    (Some(slot), Some(origin)) => {
                        write!(out, "Pointer {} (Frame {}){}", slot, frame, CRLF)?;
                        write!(out, "Codep Frame = {}{}", origin, CRLF)?;
                        write!(out, "{}", CRLF)?;
                    }
                    _ => log::warn!(
                        "frame {}: A_{} cannot be expressed in a {} patch, skipped",
                        frame,
                        pointer.mnemonic,
                        level
                    ),
                }
            }
        }
    }

    out.flush()?;
    log::info!(
        "patch written: {} sections, {} pointer changes, feature level {}",
        sections,
        changed.len(),
        level
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock::Baseline;
    use dehpatch_common::action_pointer::ActionPointerRegistry;
    use dehpatch_common::flags::ThingFlags;
    use dehpatch_common::labels::{label, weapon_label};

    const HEADER_MBF21: &str = "Patch File for DeHackEd v3.0\r\n# test\r\n\
        # Note: Use the pound sign ('#') to start comment lines.\r\n\r\n\
        Doom version = 21\r\nPatch format = 6\r\n\r\n\r\n";

    fn export(session: &PatchSession) -> String {
        let mut buf = Vec::new();
        write_patch(session, &mut buf, "test").unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn new_session(level: FeatureLevel) -> (PatchSession, ActionPointerRegistry) {
        let registry = ActionPointerRegistry::new();
        let baseline = Baseline::stock(138, 967, &registry).unwrap();
        (PatchSession::new(baseline, level), registry)
    }

    #[test]
    fn test_empty_patch_is_header_only() {
        let (session, _) = new_session(FeatureLevel::Mbf21);
        assert_eq!(export(&session), HEADER_MBF21);
    }

    #[test]
    fn test_doom19_header() {
        let (session, _) = new_session(FeatureLevel::Doom19);
        assert!(export(&session).contains("Doom version = 19\r\n"));
    }

    #[test]
    fn test_sections() {
        let (mut session, registry) = new_session(FeatureLevel::Mbf21);
        session
            .thing_mut(1)
            .unwrap()
            .set_name("Rocket")
            .set_speed(20)
            .unwrap()
            .add_flag(ThingFlags::MISSILE.bits());
        session.frame_mut(2).unwrap().set_duration(4).unwrap();
        session.sound_mut(1).unwrap().set_priority(100).unwrap();
        session.weapon_mut(1).unwrap().set_label(weapon_label::FIRE, 900).unwrap();
        session.ammo_mut(0).unwrap().set_max(400).unwrap();
        // touched but unchanged
        session.thing_mut(2).unwrap().set_label(label::SPAWN, 174).unwrap();
        session.set_frame_pointer(&registry, 2, "A_WeaponReady", &[]).unwrap();
        session.set_frame_pointer(&registry, 3, "A_Light0", &[]).unwrap();

        let text = export(&session);
        let body = text.strip_prefix(HEADER_MBF21).unwrap();
        assert_eq!(
            body,
            "Thing 1 (Rocket)\r\nSpeed = 1310720\r\nBits = 33623046\r\n\r\n\
             Frame 2\r\nDuration = 4\r\n\r\n\
             Sound 0\r\nValue = 100\r\n\r\n\
             Weapon 1 (Pistol)\r\nShooting frame = 900\r\n\r\n\
             Ammo 0 (Bullets)\r\nMax ammo = 400\r\n\r\n\
             [CODEPTR]\r\nFRAME 3 = Light0\r\n\r\n"
        );
    }

    #[test]
    fn test_forced_entry_written_even_if_equal() {
        let (mut session, _) = new_session(FeatureLevel::Doom19);
        session.sound_mut(5).unwrap().set_force_output(true);
        let text = export(&session);
        assert!(text.ends_with("Sound 4\r\nValue = 64\r\nZero/One = 0\r\n\r\n"));
    }

    #[test]
    fn test_doom19_pointer_section() {
        let (mut session, registry) = new_session(FeatureLevel::Doom19);
        session.set_frame_pointer(&registry, 10, "A_Chase", &[]).unwrap();
        session.set_frame_pointer(&registry, 175, "A_Look", &[]).unwrap();
        // no legacy pointer slot on frame 5
        session.set_frame_pointer(&registry, 5, "A_Pain", &[]).unwrap();
        let text = export(&session);
        assert!(!text.contains("[CODEPTR]"));
        assert!(text.ends_with("Pointer 6 (Frame 10)\r\nCodep Frame = 176\r\n\r\n"));
        assert_eq!(text.matches("Pointer ").count(), 1);
    }

    #[test]
    fn test_stock_monster_flag_edit() {
        let (mut session, _) = new_session(FeatureLevel::Mbf21);
        session.thing_mut(12).unwrap().add_flag(ThingFlags::NOGRAVITY.bits());
        let body = export(&session).strip_prefix(HEADER_MBF21).unwrap().to_string();
        let bits = (ThingFlags::SOLID | ThingFlags::SHOOTABLE | ThingFlags::COUNTKILL | ThingFlags::NOGRAVITY).bits();
        assert_eq!(body, format!("Thing 12 (Imp)\r\nBits = {}\r\n\r\n", bits));
    }
}
