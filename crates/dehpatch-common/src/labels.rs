// labels.rs — frame-role label tables for things and weapons

use std::collections::BTreeMap;

use crate::error::{check_range, PatchResult};

/// Canonical thing roles.
pub mod label {
    pub const SPAWN: &str = "spawn";
    pub const SEE: &str = "see";
    pub const PAIN: &str = "pain";
    pub const MELEE: &str = "melee";
    pub const MISSILE: &str = "missile";
    pub const DEATH: &str = "death";
    pub const XDEATH: &str = "xdeath";
    pub const RAISE: &str = "raise";

    pub const ALL: [&str; 8] = [SPAWN, SEE, PAIN, MELEE, MISSILE, DEATH, XDEATH, RAISE];
}

/// Canonical weapon roles.
pub mod weapon_label {
    pub const SELECT: &str = "select";
    pub const DESELECT: &str = "deselect";
    pub const READY: &str = "ready";
    pub const FIRE: &str = "fire";
    pub const FLASH: &str = "flash";

    pub const ALL: [&str; 5] = [SELECT, DESELECT, READY, FIRE, FLASH];
}

/// Role name to state index. Names are stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: BTreeMap<String, i32>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index for `role`, 0 when unset.
    pub fn get(&self, role: &str) -> i32 {
        self.entries.get(&role.to_ascii_lowercase()).copied().unwrap_or(0)
    }

    /// Explicit entry for `role`, including a forced 0.
    pub fn lookup(&self, role: &str) -> Option<i32> {
        self.entries.get(&role.to_ascii_lowercase()).copied()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.entries.contains_key(&role.to_ascii_lowercase())
    }

    /// Set `role`; index 0 removes the entry.
    pub fn set(&mut self, role: &str, index: i32) -> PatchResult<()> {
        check_range("Label index", 0, i32::MAX, index)?;
        let key = role.to_ascii_lowercase();
        if index == 0 {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, index);
        }
        Ok(())
    }

    /// Set `role`, keeping an explicit 0.
    pub fn force(&mut self, role: &str, index: i32) -> PatchResult<()> {
        check_range("Label index", 0, i32::MAX, index)?;
        self.entries.insert(role.to_ascii_lowercase(), index);
        Ok(())
    }

    /// Explicit 0 for `role`, so a merge clears it on the target.
    pub fn force_zero(&mut self, role: &str) {
        self.entries.insert(role.to_ascii_lowercase(), 0);
    }

    /// Overlay `other` entry by entry: 0 clears the role, anything else sets it.
    pub fn merge_from(&mut self, other: &LabelTable) {
        for (role, &index) in &other.entries {
            if index == 0 {
                self.entries.remove(role);
            } else {
                self.entries.insert(role.clone(), index);
            }
        }
    }

    pub fn remove(&mut self, role: &str) {
        self.entries.remove(&role.to_ascii_lowercase());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_ignore_case() {
        let mut table = LabelTable::new();
        table.set("Spawn", 174).unwrap();
        assert_eq!(table.get("SPAWN"), 174);
        assert_eq!(table.get(label::SPAWN), 174);
        assert_eq!(table.get(label::SEE), 0);
    }

    #[test]
    fn test_set_zero_removes() {
        let mut table = LabelTable::new();
        table.set(label::DEATH, 190).unwrap();
        table.set(label::DEATH, 0).unwrap();
        assert!(!table.contains(label::DEATH));
        assert!(table.is_empty());
    }

    #[test]
    fn test_force_keeps_zero() {
        let mut table = LabelTable::new();
        table.force(label::RAISE, 0).unwrap();
        assert_eq!(table.lookup(label::RAISE), Some(0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_force_zero_replaces_entry() {
        let mut table = LabelTable::new();
        table.set(label::SEE, 176).unwrap();
        table.force_zero(label::SEE);
        table.force_zero("Melee");
        assert_eq!(table.lookup(label::SEE), Some(0));
        assert_eq!(table.lookup(label::MELEE), Some(0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_merge_from() {
        let mut table = LabelTable::new();
        table.set(label::SPAWN, 10).unwrap();
        table.set(label::SEE, 12).unwrap();
        let mut overlay = LabelTable::new();
        overlay.force(label::SPAWN, 0).unwrap();
        overlay.force(label::MISSILE, 40).unwrap();
        table.merge_from(&overlay);
        assert_eq!(table.lookup(label::SPAWN), None);
        assert_eq!(table.get(label::SEE), 12);
        assert_eq!(table.get(label::MISSILE), 40);
    }

    #[test]
    fn test_negative_index_rejected() {
        let mut table = LabelTable::new();
        table.set(label::PAIN, 5).unwrap();
        assert!(table.set(label::PAIN, -1).is_err());
        assert_eq!(table.get(label::PAIN), 5);
    }
}
