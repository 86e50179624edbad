// frame.rs — rows of the shared state table

use std::io;

use dehpatch_common::property::{EntityKind, FieldId, Property, PropertyValue};
use dehpatch_common::{FeatureLevel, PatchError, PatchResult};

use crate::entity::{check_kind, CustomProperties, DiffWriter, PatchObject};

pub const MAX_ARGS: usize = 8;
pub const MAX_FRAME_INDEX: i32 = 28;
pub const BRIGHT_BIT: i32 = 0x8000;

const ARG_LABELS: [&str; MAX_ARGS] = ["Args1", "Args2", "Args3", "Args4", "Args5", "Args6", "Args7", "Args8"];

#[derive(Debug, Clone)]
pub struct Frame {
    pub(crate) sprite_index: i32,
    pub(crate) frame_index: i32,
    pub(crate) bright: bool,
    pub(crate) next_state: i32,
    pub(crate) duration: i32,
    pub(crate) misc1: i32,
    pub(crate) misc2: i32,
    pub(crate) args: [i32; MAX_ARGS],
    pub(crate) mbf21_flags: i32,
    pub(crate) tranmap: Option<String>,
    pub(crate) custom: CustomProperties,
    pub(crate) force_output: bool,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            sprite_index: 0,
            frame_index: 0,
            bright: false,
            next_state: 0,
            duration: -1,
            misc1: 0,
            misc2: 0,
            args: [0; MAX_ARGS],
            mbf21_flags: 0,
            tranmap: None,
            custom: CustomProperties::new(),
            force_output: false,
        }
    }
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    int_fields! {
        sprite_index / set_sprite_index: "Sprite index", 0, i32::MAX;
        /// Subframe letter, A = 0.
        frame_index / set_frame_index: "Frame index", 0, MAX_FRAME_INDEX;
        next_state / set_next_state: "Next state", 0, i32::MAX;
        /// Tics; -1 lasts forever.
        duration / set_duration: "Duration", -1, 9999;
        misc1 / set_misc1: "Misc1", i32::MIN, i32::MAX;
        misc2 / set_misc2: "Misc2", i32::MIN, i32::MAX;
    }

    pub fn bright(&self) -> bool {
        self.bright
    }

    pub fn set_bright(&mut self, bright: bool) -> &mut Self {
        self.bright = bright;
        self
    }

    /// Subframe with the bright bit packed in, as written.
    pub fn encoded_frame_index(&self) -> i32 {
        if self.bright {
            self.frame_index | BRIGHT_BIT
        } else {
            self.frame_index
        }
    }

    pub fn args(&self) -> &[i32; MAX_ARGS] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> i32 {
        self.args.get(index).copied().unwrap_or(0)
    }

    /// Replace the argument array; unspecified trailing args become 0.
    pub fn set_args(&mut self, args: &[i32]) -> PatchResult<&mut Self> {
        if args.len() > MAX_ARGS {
            return Err(PatchError::TooLong { field: "Args", max: MAX_ARGS, len: args.len() });
        }
        self.args = [0; MAX_ARGS];
        self.args[..args.len()].copy_from_slice(args);
        Ok(self)
    }

    pub fn set_arg(&mut self, index: usize, value: i32) -> PatchResult<&mut Self> {
        if index >= MAX_ARGS {
            return Err(PatchError::TooLong { field: "Args", max: MAX_ARGS, len: index + 1 });
        }
        self.args[index] = value;
        Ok(self)
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

    pub fn tranmap(&self) -> Option<&str> {
        self.tranmap.as_deref()
    }

    pub fn set_tranmap(&mut self, tranmap: Option<&str>) -> &mut Self {
        self.tranmap = tranmap.map(str::to_string);
        self
    }

    pub fn custom_properties_mut(&mut self) -> &mut CustomProperties {
        &mut self.custom
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.sprite_index == other.sprite_index
            && self.frame_index == other.frame_index
            && self.bright == other.bright
            && self.next_state == other.next_state
            && self.duration == other.duration
            && self.misc1 == other.misc1
            && self.misc2 == other.misc2
            && self.args == other.args
            && self.mbf21_flags == other.mbf21_flags
            && self.tranmap == other.tranmap
            && self.custom == other.custom
    }
}

impl PatchObject for Frame {
    const KIND: EntityKind = EntityKind::Frame;

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
        match property.field {
            None => {
                self.custom.set(Self::KIND, property, value)?;
                Ok(self)
            }
            Some(FieldId::Tranmap) => {
                let text = property.expect_str(&value)?;
                Ok(self.set_tranmap(Some(&text)))
            }
            Some(field) => {
                let v = property.expect_int(&value)?;
                match field {
                    FieldId::SpriteIndex => self.set_sprite_index(v),
                    FieldId::FrameIndex => self.set_frame_index(v),
                    FieldId::Bright => Ok(self.set_bright(v != 0)),
                    FieldId::NextState => self.set_next_state(v),
                    FieldId::Duration => self.set_duration(v),
                    FieldId::Misc1 => self.set_misc1(v),
                    FieldId::Misc2 => self.set_misc2(v),
                    FieldId::FrameMbf21Flags => Ok(self.set_mbf21_flags(v)),
                    _ => Err(PatchError::UnknownProperty(property.keyword.clone())),
                }
            }
        }
    }

    fn write_fields(&self, out: &mut DiffWriter<'_>, base: &Self) -> io::Result<()> {
        use FeatureLevel::{Doom19, Id24, Mbf21};

        out.int(Doom19, "Sprite number", self.sprite_index, base.sprite_index)?;
        out.int(Doom19, "Sprite subnumber", self.encoded_frame_index(), base.encoded_frame_index())?;
        out.int(Doom19, "Next frame", self.next_state, base.next_state)?;
        out.int(Doom19, "Duration", self.duration, base.duration)?;
        out.int(Doom19, "Unknown 1", self.misc1, base.misc1)?;
        out.int(Doom19, "Unknown 2", self.misc2, base.misc2)?;

        for (i, label) in ARG_LABELS.iter().enumerate() {
            out.int(Mbf21, label, self.args[i], base.args[i])?;
        }
        out.int(Mbf21, "MBF21 Bits", self.mbf21_flags, base.mbf21_flags)?;

        out.text(Id24, "Tranmap", self.tranmap(), base.tranmap())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dehpatch_common::flags::StateMbf21Flags;

    fn diff(frame: &Frame, base: &Frame, level: FeatureLevel) -> String {
        let mut buf = Vec::new();
        frame.write_diff(base, level, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_args_lines_by_tier() {
        let mut frame = Frame::new();
        frame.set_args(&[1, 2, 3]).unwrap();
        assert_eq!(
            diff(&frame, &Frame::new(), FeatureLevel::Mbf21),
            "Args1 = 1\r\nArgs2 = 2\r\nArgs3 = 3\r\n"
        );
        assert_eq!(diff(&frame, &Frame::new(), FeatureLevel::Doom19), "");
        assert_eq!(diff(&frame, &Frame::new(), FeatureLevel::Mbf), "");
    }

    #[test]
    fn test_too_many_args() {
        let mut frame = Frame::new();
        frame.set_args(&[4, 5]).unwrap();
        assert!(matches!(frame.set_args(&[0; 9]), Err(PatchError::TooLong { .. })));
        assert!(frame.set_arg(8, 1).is_err());
        assert_eq!(frame.args()[..2], [4, 5]);
    }

    #[test]
    fn test_set_args_clears_tail() {
        let mut frame = Frame::new();
        frame.set_args(&[1, 2, 3, 4]).unwrap();
        frame.set_args(&[9]).unwrap();
        assert_eq!(frame.args(), &[9, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_bright_packed_into_subnumber() {
        let mut frame = Frame::new();
        frame.set_frame_index(4).unwrap().set_bright(true);
        assert_eq!(frame.encoded_frame_index(), 0x8004);
        assert_eq!(diff(&frame, &Frame::new(), FeatureLevel::Doom19), "Sprite subnumber = 32772\r\n");

        let mut only_bright = Frame::new();
        only_bright.set_bright(true);
        assert_eq!(diff(&only_bright, &Frame::new(), FeatureLevel::Doom19), "Sprite subnumber = 32768\r\n");
    }

    #[test]
    fn test_domains() {
        let mut frame = Frame::new();
        assert!(frame.set_frame_index(29).is_err());
        assert!(frame.set_duration(-2).is_err());
        assert!(frame.set_sprite_index(-1).is_err());
        assert_eq!(frame.duration(), -1);
    }

    #[test]
    fn test_full_order() {
        let mut frame = Frame::new();
        frame
            .set_sprite_index(29).unwrap()
            .set_next_state(175).unwrap()
            .set_duration(10).unwrap()
            .set_misc1(3).unwrap()
            .set_misc2(4).unwrap()
            .set_arg(7, 8).unwrap();
        frame.set_mbf21_flags(StateMbf21Flags::SKILL5FAST.bits()).set_tranmap(Some("TRANMAP"));
        assert_eq!(
            diff(&frame, &Frame::new(), FeatureLevel::Id24),
            "Sprite number = 29\r\nNext frame = 175\r\nDuration = 10\r\nUnknown 1 = 3\r\nUnknown 2 = 4\r\n\
             Args8 = 8\r\nMBF21 Bits = 1\r\nTranmap = TRANMAP\r\n"
        );
    }

    #[test]
    fn test_diff_idempotence() {
        let mut frame = Frame::new();
        frame.set_args(&[7, 7]).unwrap().set_tranmap(Some("GLASS"));
        for level in FeatureLevel::ALL {
            assert_eq!(diff(&frame, &frame.clone(), level), "");
        }
    }

    #[test]
    fn test_equality_covers_arrays_and_strings() {
        let mut a = Frame::new();
        let mut b = Frame::new();
        a.set_arg(5, 1).unwrap();
        assert_ne!(a, b);
        b.set_arg(5, 1).unwrap();
        assert_eq!(a, b);
        a.set_tranmap(Some("X"));
        assert_ne!(a, b);
    }
}
