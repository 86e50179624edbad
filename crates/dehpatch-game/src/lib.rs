#![allow(clippy::too_many_arguments, clippy::new_without_default)]

#[macro_use]
mod macros;

pub mod entity;
pub mod thing;
pub mod frame;
pub mod sound;
pub mod weapon;
pub mod ammo;
pub mod template;
mod info;
pub mod stock;
pub mod session;
pub mod exporter;

pub use entity::{CustomProperties, DiffWriter, PatchObject};
pub use thing::Thing;
pub use frame::Frame;
pub use sound::Sound;
pub use weapon::{AmmoType, Weapon};
pub use ammo::Ammo;
