// info.rs — vanilla thing and state tables

/// Stock thing definition. Frame roles follow `thing::FRAME_LABELS` order,
/// sounds are see, attack, pain, death, active.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThingInfo {
    pub name: &'static str,
    pub editor_number: i32,
    pub health: i32,
    /// Whole units, projectiles included.
    pub speed: i32,
    pub radius: i32,
    pub height: i32,
    pub damage: i32,
    pub reaction_time: i32,
    pub pain_chance: i32,
    pub flags: i32,
    pub mass: i32,
    pub frames: [i32; 8],
    pub sounds: [i32; 5],
}

const fn thing(
    name: &'static str,
    editor_number: i32,
    health: i32,
    speed: i32,
    radius: i32,
    height: i32,
    damage: i32,
    reaction_time: i32,
    pain_chance: i32,
    flags: i32,
    mass: i32,
    frames: [i32; 8],
    sounds: [i32; 5],
) -> ThingInfo {
    ThingInfo {
        name,
        editor_number,
        health,
        speed,
        radius,
        height,
        damage,
        reaction_time,
        pain_chance,
        flags,
        mass,
        frames,
        sounds,
    }
}

pub(crate) const THING_COUNT: usize = 137;
pub(crate) const FRAME_COUNT: usize = 967;

/// Thing 1 onward; slot 0 of the thing table is unused.
pub(crate) static THINGS: [ThingInfo; THING_COUNT] = [
    thing("Player", -1, 100, 0, 16, 56, 0, 0, 255, 33557510, 100,
        [149, 150, 156, 0, 154, 158, 165, 0], [0, 0, 25, 57, 0]),
    thing("Trooper", 3004, 20, 8, 20, 56, 0, 8, 200, 4194310, 100,
        [174, 176, 187, 0, 184, 189, 194, 203], [36, 1, 27, 59, 75]),
    thing("Sargeant", 9, 30, 8, 20, 56, 0, 8, 170, 4194310, 100,
        [207, 209, 220, 0, 217, 222, 227, 236], [37, 0, 27, 60, 75]),
    thing("Archvile", 64, 700, 15, 20, 56, 0, 8, 10, 4194310, 500,
        [241, 243, 269, 0, 255, 271, 0, 0], [48, 0, 28, 71, 80]),
    thing("Archvile attack", -1, 1000, 0, 20, 16, 0, 8, 0, 528, 100,
        [281, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Revenant", 66, 300, 10, 20, 56, 0, 8, 100, 4194310, 500,
        [321, 323, 343, 335, 339, 345, 0, 351], [106, 0, 27, 74, 105]),
    thing("Revenant fireball", -1, 1000, 10, 11, 8, 10, 8, 0, 67088, 100,
        [316, 0, 0, 0, 0, 318, 0, 0], [107, 0, 0, 82, 0]),
    thing("Fireball trail", -1, 1000, 0, 20, 16, 0, 8, 0, 528, 100,
        [311, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Mancubus", 67, 600, 8, 48, 64, 0, 8, 80, 4194310, 1000,
        [362, 364, 386, 0, 376, 388, 0, 398], [49, 0, 29, 100, 75]),
    thing("Mancubus fireball", -1, 1000, 20, 6, 8, 8, 8, 0, 67088, 100,
        [357, 0, 0, 0, 0, 359, 0, 0], [16, 0, 0, 17, 0]),
    thing("Chaingun Sargeant", 65, 70, 8, 20, 56, 0, 8, 170, 4194310, 100,
        [406, 408, 420, 0, 416, 422, 429, 435], [37, 0, 27, 60, 75]),
    thing("Imp", 3001, 60, 8, 20, 56, 0, 8, 200, 4194310, 100,
        [442, 444, 455, 452, 452, 457, 462, 470], [39, 0, 27, 62, 76]),
    thing("Demon", 3002, 150, 10, 30, 56, 0, 8, 180, 4194310, 400,
        [475, 477, 488, 485, 0, 490, 0, 496], [41, 52, 26, 64, 77]),
    thing("Spectre", 58, 150, 10, 30, 56, 0, 8, 180, 4456454, 400,
        [475, 477, 488, 485, 0, 490, 0, 496], [41, 52, 26, 64, 77]),
    thing("Cacodemon", 3005, 400, 8, 31, 56, 0, 8, 128, 4211206, 400,
        [502, 503, 507, 0, 504, 510, 0, 516], [42, 0, 26, 65, 77]),
    thing("Baron of Hell", 3003, 1000, 8, 24, 64, 0, 8, 50, 4194310, 1000,
        [527, 529, 540, 537, 537, 542, 0, 549], [43, 0, 26, 67, 77]),
    thing("Baron fireball", -1, 1000, 15, 6, 8, 8, 8, 0, 67088, 100,
        [522, 0, 0, 0, 0, 524, 0, 0], [16, 0, 0, 17, 0]),
    thing("Hell Knight", 69, 500, 8, 24, 64, 0, 8, 50, 4194310, 1000,
        [556, 558, 569, 566, 566, 571, 0, 578], [47, 0, 26, 72, 77]),
    thing("Lost Soul", 3006, 100, 8, 16, 56, 3, 8, 256, 16902, 50,
        [585, 587, 593, 0, 589, 595, 0, 0], [0, 51, 26, 17, 77]),
    thing("Spiderdemon", 7, 3000, 12, 128, 100, 0, 8, 40, 4194310, 1000,
        [601, 603, 619, 0, 615, 621, 0, 0], [45, 2, 26, 69, 77]),
    thing("Arachnotron", 68, 500, 12, 64, 64, 0, 8, 128, 4194310, 600,
        [632, 634, 651, 0, 647, 653, 0, 660], [46, 0, 26, 70, 78]),
    thing("Cyberdemon", 16, 4000, 16, 40, 110, 0, 8, 20, 4194310, 1000,
        [674, 676, 690, 0, 684, 691, 0, 0], [44, 0, 26, 68, 77]),
    thing("Pain Elemental", 71, 400, 8, 31, 56, 0, 8, 128, 4211206, 400,
        [701, 702, 712, 0, 708, 714, 0, 720], [50, 0, 30, 73, 77]),
    thing("SS Nazi", 84, 50, 8, 20, 56, 0, 8, 170, 4194310, 100,
        [726, 728, 742, 0, 736, 744, 749, 758], [101, 0, 27, 102, 75]),
    thing("Commander Keen", 72, 100, 0, 16, 72, 0, 8, 256, 4195078, 10000000,
        [763, 0, 776, 0, 0, 764, 0, 0], [0, 0, 103, 104, 0]),
    thing("Big Brain", 88, 250, 0, 16, 16, 0, 8, 255, 6, 10000000,
        [778, 0, 779, 0, 0, 780, 0, 0], [0, 0, 97, 98, 0]),
    thing("Demon spawner", 89, 1000, 0, 20, 32, 0, 8, 0, 24, 100,
        [784, 785, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Demon spawn spot", 87, 1000, 0, 20, 32, 0, 8, 0, 24, 100,
        [0, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Demon spawn cube", -1, 1000, 10, 6, 32, 3, 8, 0, 71184, 100,
        [787, 0, 0, 0, 0, 0, 0, 0], [94, 0, 0, 17, 0]),
    thing("Demon spawn fire", -1, 1000, 0, 20, 16, 0, 8, 0, 528, 100,
        [791, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Barrel", 2035, 20, 0, 10, 42, 0, 8, 0, 524294, 100,
        [806, 0, 0, 0, 0, 808, 0, 0], [0, 0, 0, 82, 0]),
    thing("Imp fireball", -1, 1000, 10, 6, 8, 3, 8, 0, 67088, 100,
        [97, 0, 0, 0, 0, 99, 0, 0], [16, 0, 0, 17, 0]),
    thing("Caco fireball", -1, 1000, 10, 6, 8, 5, 8, 0, 67088, 100,
        [102, 0, 0, 0, 0, 104, 0, 0], [16, 0, 0, 17, 0]),
    thing("Rocket in flight", -1, 1000, 20, 11, 8, 20, 8, 0, 67088, 100,
        [114, 0, 0, 0, 0, 127, 0, 0], [14, 0, 0, 82, 0]),
    thing("Plasma projectile", -1, 1000, 25, 13, 8, 5, 8, 0, 67088, 100,
        [107, 0, 0, 0, 0, 109, 0, 0], [8, 0, 0, 17, 0]),
    thing("BFG projectile", -1, 1000, 25, 13, 8, 100, 8, 0, 67088, 100,
        [115, 0, 0, 0, 0, 117, 0, 0], [0, 0, 0, 15, 0]),
    thing("Arachnotron projectile", -1, 1000, 25, 13, 8, 5, 8, 0, 67088, 100,
        [667, 0, 0, 0, 0, 669, 0, 0], [8, 0, 0, 17, 0]),
    thing("Bullet puff", -1, 1000, 0, 20, 16, 0, 8, 0, 528, 100,
        [93, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Blood splat", -1, 1000, 0, 20, 16, 0, 8, 0, 16, 100,
        [90, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Teleport fog", -1, 1000, 0, 20, 16, 0, 8, 0, 528, 100,
        [130, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Item respawn fog", -1, 1000, 0, 20, 16, 0, 8, 0, 528, 100,
        [142, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Teleport exit", 14, 1000, 0, 20, 16, 0, 8, 0, 24, 100,
        [0, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("BFG impact", -1, 1000, 0, 20, 16, 0, 8, 0, 528, 100,
        [123, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Green armor", 2018, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [802, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Blue armor", 2019, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [804, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Health potion", 2014, 1000, 0, 20, 16, 0, 8, 0, 8388609, 100,
        [816, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Armor helmet", 2015, 1000, 0, 20, 16, 0, 8, 0, 8388609, 100,
        [822, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Blue keycard", 5, 1000, 0, 20, 16, 0, 8, 0, 33554433, 100,
        [828, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Red keycard", 13, 1000, 0, 20, 16, 0, 8, 0, 33554433, 100,
        [830, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Yellow keycard", 6, 1000, 0, 20, 16, 0, 8, 0, 33554433, 100,
        [832, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Yellow skull key", 39, 1000, 0, 20, 16, 0, 8, 0, 33554433, 100,
        [838, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Red skull key", 38, 1000, 0, 20, 16, 0, 8, 0, 33554433, 100,
        [836, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Blue skull key", 40, 1000, 0, 20, 16, 0, 8, 0, 33554433, 100,
        [834, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Stimpack", 2011, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [840, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Medical kit", 2012, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [841, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Soul sphere", 2013, 1000, 0, 20, 16, 0, 8, 0, 8388609, 100,
        [842, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Invulnerability", 2022, 1000, 0, 20, 16, 0, 8, 0, 8388609, 100,
        [848, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Berserk sphere", 2023, 1000, 0, 20, 16, 0, 8, 0, 8388609, 100,
        [852, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Blur sphere", 2024, 1000, 0, 20, 16, 0, 8, 0, 8388609, 100,
        [853, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Radiation suit", 2025, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [861, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Computer map", 2026, 1000, 0, 20, 16, 0, 8, 0, 8388609, 100,
        [862, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Lite amplification visor", 2045, 1000, 0, 20, 16, 0, 8, 0, 8388609, 100,
        [868, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Mega sphere", 83, 1000, 0, 20, 16, 0, 8, 0, 8388609, 100,
        [857, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Ammo clip", 2007, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [870, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Box of ammo", 2048, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [871, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Rocket", 2010, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [872, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Box of rockets", 2046, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [873, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Energy cell", 2047, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [874, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Energy cell pack", 17, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [875, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Shells", 2008, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [876, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Box of shells", 2049, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [877, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Backpack", 8, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [878, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("BFG 9000", 2006, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [879, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Chaingun", 2002, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [880, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Chainsaw", 2005, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [881, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Rocket launcher", 2003, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [882, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Plasma rifle", 2004, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [883, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Shotgun", 2001, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [884, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Super shotgun", 82, 1000, 0, 20, 16, 0, 8, 0, 1, 100,
        [885, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Tall lamp", 85, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [959, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Tall lamp 2", 86, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [963, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Short lamp", 2028, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [886, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Tall green pillar", 30, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [907, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Short green pillar", 31, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [908, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Tall red pillar", 32, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [909, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Short red pillar", 33, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [910, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Pillar with skull", 37, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [913, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Pillar with heart", 36, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [924, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Eye in symbol", 41, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [917, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Flaming skulls", 42, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [921, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Grey tree", 43, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [914, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Tall blue torch", 44, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [926, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Tall green torch", 45, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [930, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Tall red torch", 46, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [934, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Small blue torch", 55, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [938, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Small green torch", 56, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [942, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Small red torch", 57, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [946, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Brown stub", 47, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [906, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Technical column", 48, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [916, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Candle", 34, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [911, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Candelabra", 35, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [912, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Swaying body", 49, 1000, 0, 16, 68, 0, 8, 0, 770, 100,
        [888, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging arms out", 50, 1000, 0, 16, 84, 0, 8, 0, 770, 100,
        [902, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("One-legged body", 51, 1000, 0, 16, 84, 0, 8, 0, 770, 100,
        [903, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging torso", 52, 1000, 0, 16, 68, 0, 8, 0, 770, 100,
        [904, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging leg", 53, 1000, 0, 16, 52, 0, 8, 0, 770, 100,
        [905, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging arms out 2", 59, 1000, 0, 20, 84, 0, 8, 0, 768, 100,
        [902, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging torso 2", 60, 1000, 0, 20, 68, 0, 8, 0, 768, 100,
        [904, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("One-legged body 2", 61, 1000, 0, 20, 52, 0, 8, 0, 768, 100,
        [903, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging leg 2", 62, 1000, 0, 20, 52, 0, 8, 0, 768, 100,
        [905, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Swaying body 2", 63, 1000, 0, 20, 68, 0, 8, 0, 768, 100,
        [888, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Dead Cacodemon", 22, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [515, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Dead Marine", 15, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [164, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Dead Trooper", 18, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [193, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Dead Demon", 21, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [495, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Dead Lost Soul", 23, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [600, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Dead Imp", 20, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [461, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Dead Sargeant", 19, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [226, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Guts and bones", 10, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [173, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Guts and bones 2", 12, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [173, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Skewered heads", 28, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [894, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Pool of blood", 24, 1000, 0, 20, 16, 0, 8, 0, 0, 100,
        [895, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Pole with skull", 27, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [896, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Pile of skulls", 29, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [897, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Impaled body", 25, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [899, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Twitching body", 26, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [900, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Large tree", 54, 1000, 0, 32, 16, 0, 8, 0, 2, 100,
        [915, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Flaming barrel", 70, 1000, 0, 16, 16, 0, 8, 0, 2, 100,
        [813, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging body 1", 73, 1000, 0, 16, 88, 0, 8, 0, 770, 100,
        [950, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging body 2", 74, 1000, 0, 16, 88, 0, 8, 0, 770, 100,
        [951, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging body 3", 75, 1000, 0, 16, 64, 0, 8, 0, 770, 100,
        [952, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging body 4", 76, 1000, 0, 16, 64, 0, 8, 0, 770, 100,
        [953, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging body 5", 77, 1000, 0, 16, 64, 0, 8, 0, 770, 100,
        [954, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Hanging body 6", 78, 1000, 0, 16, 64, 0, 8, 0, 770, 100,
        [955, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Pool of blood 1", 79, 1000, 0, 20, 16, 0, 8, 0, 16, 100,
        [956, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Pool of blood 2", 80, 1000, 0, 20, 16, 0, 8, 0, 16, 100,
        [957, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
    thing("Brain", 81, 1000, 0, 20, 16, 0, 8, 0, 16, 100,
        [958, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0]),
];

/// (sprite, subframe with bright bit, tics, next state, pointer mnemonic)
pub(crate) static FRAMES: [(i32, i32, i32, i32, &str); FRAME_COUNT] = [
    (0, 0, -1, 0, "NULL"),              // S_NULL
    (1, 4, 0, 0, "Light0"),             // S_LIGHTDONE
    (2, 0, 1, 2, "WeaponReady"),        // S_PUNCH
    (2, 0, 1, 3, "Lower"),              // S_PUNCHDOWN
    (2, 0, 1, 4, "Raise"),              // S_PUNCHUP
    (2, 1, 4, 6, "NULL"),               // S_PUNCH1
    (2, 2, 4, 7, "Punch"),              // S_PUNCH2
    (2, 3, 5, 8, "NULL"),               // S_PUNCH3
    (2, 2, 4, 9, "NULL"),               // S_PUNCH4
    (2, 1, 5, 2, "ReFire"),             // S_PUNCH5
    (3, 0, 1, 10, "WeaponReady"),       // S_PISTOL
    (3, 0, 1, 11, "Lower"),             // S_PISTOLDOWN
    (3, 0, 1, 12, "Raise"),             // S_PISTOLUP
    (3, 0, 4, 14, "NULL"),              // S_PISTOL1
    (3, 1, 6, 15, "FirePistol"),        // S_PISTOL2
    (3, 2, 4, 16, "NULL"),              // S_PISTOL3
    (3, 1, 5, 10, "ReFire"),            // S_PISTOL4
    (4, 32768, 7, 1, "Light1"),         // S_PISTOLFLASH
    (1, 0, 1, 18, "WeaponReady"),       // S_SGUN
    (1, 0, 1, 19, "Lower"),             // S_SGUNDOWN
    (1, 0, 1, 20, "Raise"),             // S_SGUNUP
    (1, 0, 3, 22, "NULL"),              // S_SGUN1
    (1, 0, 7, 23, "FireShotgun"),       // S_SGUN2
    (1, 1, 5, 24, "NULL"),              // S_SGUN3
    (1, 2, 5, 25, "NULL"),              // S_SGUN4
    (1, 3, 4, 26, "NULL"),              // S_SGUN5
    (1, 2, 5, 27, "NULL"),              // S_SGUN6
    (1, 1, 5, 28, "NULL"),              // S_SGUN7
    (1, 0, 3, 29, "NULL"),              // S_SGUN8
    (1, 0, 7, 18, "ReFire"),            // S_SGUN9
    (5, 32768, 4, 31, "Light1"),        // S_SGUNFLASH1
    (5, 32769, 3, 1, "Light2"),         // S_SGUNFLASH2
    (6, 0, 1, 32, "WeaponReady"),       // S_DSGUN
    (6, 0, 1, 33, "Lower"),             // S_DSGUNDOWN
    (6, 0, 1, 34, "Raise"),             // S_DSGUNUP
    (6, 0, 3, 36, "NULL"),              // S_DSGUN1
    (6, 0, 7, 37, "FireShotgun2"),      // S_DSGUN2
    (6, 1, 7, 38, "NULL"),              // S_DSGUN3
    (6, 2, 7, 39, "CheckReload"),       // S_DSGUN4
    (6, 3, 7, 40, "OpenShotgun2"),      // S_DSGUN5
    (6, 4, 7, 41, "NULL"),              // S_DSGUN6
    (6, 5, 7, 42, "LoadShotgun2"),      // S_DSGUN7
    (6, 6, 6, 43, "NULL"),              // S_DSGUN8
    (6, 7, 6, 44, "CloseShotgun2"),     // S_DSGUN9
    (6, 0, 5, 32, "ReFire"),            // S_DSGUN10
    (6, 1, 7, 46, "NULL"),              // S_DSNR1
    (6, 0, 3, 33, "NULL"),              // S_DSNR2
    (6, 32776, 5, 48, "Light1"),        // S_DSGUNFLASH1
    (6, 32777, 4, 1, "Light2"),         // S_DSGUNFLASH2
    (7, 0, 1, 49, "WeaponReady"),       // S_CHAIN
    (7, 0, 1, 50, "Lower"),             // S_CHAINDOWN
    (7, 0, 1, 51, "Raise"),             // S_CHAINUP
    (7, 0, 4, 53, "FireCGun"),          // S_CHAIN1
    (7, 1, 4, 54, "FireCGun"),          // S_CHAIN2
    (7, 1, 0, 49, "ReFire"),            // S_CHAIN3
    (8, 32768, 5, 1, "Light1"),         // S_CHAINFLASH1
    (8, 32769, 5, 1, "Light2"),         // S_CHAINFLASH2
    (9, 0, 1, 57, "WeaponReady"),       // S_MISSILE
    (9, 0, 1, 58, "Lower"),             // S_MISSILEDOWN
    (9, 0, 1, 59, "Raise"),             // S_MISSILEUP
    (9, 1, 8, 61, "GunFlash"),          // S_MISSILE1
    (9, 1, 12, 62, "FireMissile"),      // S_MISSILE2
    (9, 1, 0, 57, "ReFire"),            // S_MISSILE3
    (10, 32768, 3, 64, "Light1"),       // S_MISSILEFLASH1
    (10, 32769, 4, 65, "NULL"),         // S_MISSILEFLASH2
    (10, 32770, 4, 66, "Light2"),       // S_MISSILEFLASH3
    (10, 32771, 4, 1, "Light2"),        // S_MISSILEFLASH4
    (11, 2, 4, 68, "WeaponReady"),      // S_SAW
    (11, 3, 4, 67, "WeaponReady"),      // S_SAWB
    (11, 2, 1, 69, "Lower"),            // S_SAWDOWN
    (11, 2, 1, 70, "Raise"),            // S_SAWUP
    (11, 0, 4, 72, "Saw"),              // S_SAW1
    (11, 1, 4, 73, "Saw"),              // S_SAW2
    (11, 1, 0, 67, "ReFire"),           // S_SAW3
    (12, 0, 1, 74, "WeaponReady"),      // S_PLASMA
    (12, 0, 1, 75, "Lower"),            // S_PLASMADOWN
    (12, 0, 1, 76, "Raise"),            // S_PLASMAUP
    (12, 0, 3, 78, "FirePlasma"),       // S_PLASMA1
    (12, 1, 20, 74, "ReFire"),          // S_PLASMA2
    (13, 32768, 4, 1, "Light1"),        // S_PLASMAFLASH1
    (13, 32769, 4, 1, "Light1"),        // S_PLASMAFLASH2
    (14, 0, 1, 81, "WeaponReady"),      // S_BFG
    (14, 0, 1, 82, "Lower"),            // S_BFGDOWN
    (14, 0, 1, 83, "Raise"),            // S_BFGUP
    (14, 0, 20, 85, "BFGsound"),        // S_BFG1
    (14, 1, 10, 86, "GunFlash"),        // S_BFG2
    (14, 1, 10, 87, "FireBFG"),         // S_BFG3
    (14, 1, 20, 81, "ReFire"),          // S_BFG4
    (15, 32768, 11, 89, "Light1"),      // S_BFGFLASH1
    (15, 32769, 6, 1, "Light2"),        // S_BFGFLASH2
    (16, 2, 8, 91, "NULL"),             // S_BLOOD1
    (16, 1, 8, 92, "NULL"),             // S_BLOOD2
    (16, 0, 8, 0, "NULL"),              // S_BLOOD3
    (17, 32768, 4, 94, "NULL"),         // S_PUFF1
    (17, 1, 4, 95, "NULL"),             // S_PUFF2
    (17, 2, 4, 96, "NULL"),             // S_PUFF3
    (17, 3, 4, 0, "NULL"),              // S_PUFF4
    (18, 32768, 4, 98, "NULL"),         // S_TBALL1
    (18, 32769, 4, 97, "NULL"),         // S_TBALL2
    (18, 32770, 6, 100, "NULL"),        // S_TBALLX1
    (18, 32771, 6, 101, "NULL"),        // S_TBALLX2
    (18, 32772, 6, 0, "NULL"),          // S_TBALLX3
    (19, 32768, 4, 103, "NULL"),        // S_RBALL1
    (19, 32769, 4, 102, "NULL"),        // S_RBALL2
    (19, 32770, 6, 105, "NULL"),        // S_RBALLX1
    (19, 32771, 6, 106, "NULL"),        // S_RBALLX2
    (19, 32772, 6, 0, "NULL"),          // S_RBALLX3
    (20, 32768, 6, 108, "NULL"),        // S_PLASBALL
    (20, 32769, 6, 107, "NULL"),        // S_PLASBALL2
    (21, 32768, 4, 110, "NULL"),        // S_PLASEXP
    (21, 32769, 4, 111, "NULL"),        // S_PLASEXP2
    (21, 32770, 4, 112, "NULL"),        // S_PLASEXP3
    (21, 32771, 4, 113, "NULL"),        // S_PLASEXP4
    (21, 32772, 4, 0, "NULL"),          // S_PLASEXP5
    (22, 32768, 1, 114, "NULL"),        // S_ROCKET
    (23, 32768, 4, 116, "NULL"),        // S_BFGSHOT
    (23, 32769, 4, 115, "NULL"),        // S_BFGSHOT2
    (24, 32768, 8, 118, "NULL"),        // S_BFGLAND
    (24, 32769, 8, 119, "NULL"),        // S_BFGLAND2
    (24, 32770, 8, 120, "BFGSpray"),    // S_BFGLAND3
    (24, 32771, 8, 121, "NULL"),        // S_BFGLAND4
    (24, 32772, 8, 122, "NULL"),        // S_BFGLAND5
    (24, 32773, 8, 0, "NULL"),          // S_BFGLAND6
    (25, 32768, 8, 124, "NULL"),        // S_BFGEXP
    (25, 32769, 8, 125, "NULL"),        // S_BFGEXP2
    (25, 32770, 8, 126, "NULL"),        // S_BFGEXP3
    (25, 32771, 8, 0, "NULL"),          // S_BFGEXP4
    (22, 32769, 8, 128, "Explode"),     // S_EXPLODE1
    (22, 32770, 6, 129, "NULL"),        // S_EXPLODE2
    (22, 32771, 4, 0, "NULL"),          // S_EXPLODE3
    (26, 32768, 6, 131, "NULL"),        // S_TFOG
    (26, 32769, 6, 132, "NULL"),        // S_TFOG01
    (26, 32768, 6, 133, "NULL"),        // S_TFOG02
    (26, 32769, 6, 134, "NULL"),        // S_TFOG2
    (26, 32770, 6, 135, "NULL"),        // S_TFOG3
    (26, 32771, 6, 136, "NULL"),        // S_TFOG4
    (26, 32772, 6, 137, "NULL"),        // S_TFOG5
    (26, 32773, 6, 138, "NULL"),        // S_TFOG6
    (26, 32774, 6, 139, "NULL"),        // S_TFOG7
    (26, 32775, 6, 140, "NULL"),        // S_TFOG8
    (26, 32776, 6, 141, "NULL"),        // S_TFOG9
    (26, 32777, 6, 0, "NULL"),          // S_TFOG10
    (27, 32768, 6, 143, "NULL"),        // S_IFOG
    (27, 32769, 6, 144, "NULL"),        // S_IFOG01
    (27, 32768, 6, 145, "NULL"),        // S_IFOG02
    (27, 32769, 6, 146, "NULL"),        // S_IFOG2
    (27, 32770, 6, 147, "NULL"),        // S_IFOG3
    (27, 32771, 6, 148, "NULL"),        // S_IFOG4
    (27, 32772, 6, 0, "NULL"),          // S_IFOG5
    (28, 0, -1, 0, "NULL"),             // S_PLAY
    (28, 0, 4, 151, "NULL"),            // S_PLAY_RUN1
    (28, 1, 4, 152, "NULL"),            // S_PLAY_RUN2
    (28, 2, 4, 153, "NULL"),            // S_PLAY_RUN3
    (28, 3, 4, 150, "NULL"),            // S_PLAY_RUN4
    (28, 4, 12, 149, "NULL"),           // S_PLAY_ATK1
    (28, 32773, 6, 154, "NULL"),        // S_PLAY_ATK2
    (28, 6, 4, 157, "NULL"),            // S_PLAY_PAIN
    (28, 6, 4, 149, "Pain"),            // S_PLAY_PAIN2
    (28, 7, 10, 159, "NULL"),           // S_PLAY_DIE1
    (28, 8, 10, 160, "PlayerScream"),   // S_PLAY_DIE2
    (28, 9, 10, 161, "Fall"),           // S_PLAY_DIE3
    (28, 10, 10, 162, "NULL"),          // S_PLAY_DIE4
    (28, 11, 10, 163, "NULL"),          // S_PLAY_DIE5
    (28, 12, 10, 164, "NULL"),          // S_PLAY_DIE6
    (28, 13, -1, 0, "NULL"),            // S_PLAY_DIE7
    (28, 14, 5, 166, "NULL"),           // S_PLAY_XDIE1
    (28, 15, 5, 167, "XScream"),        // S_PLAY_XDIE2
    (28, 16, 5, 168, "Fall"),           // S_PLAY_XDIE3
    (28, 17, 5, 169, "NULL"),           // S_PLAY_XDIE4
    (28, 18, 5, 170, "NULL"),           // S_PLAY_XDIE5
    (28, 19, 5, 171, "NULL"),           // S_PLAY_XDIE6
    (28, 20, 5, 172, "NULL"),           // S_PLAY_XDIE7
    (28, 21, 5, 173, "NULL"),           // S_PLAY_XDIE8
    (28, 22, -1, 0, "NULL"),            // S_PLAY_XDIE9
    (29, 0, 10, 175, "Look"),           // S_POSS_STND
    (29, 1, 10, 174, "Look"),           // S_POSS_STND2
    (29, 0, 4, 177, "Chase"),           // S_POSS_RUN1
    (29, 0, 4, 178, "Chase"),           // S_POSS_RUN2
    (29, 1, 4, 179, "Chase"),           // S_POSS_RUN3
    (29, 1, 4, 180, "Chase"),           // S_POSS_RUN4
    (29, 2, 4, 181, "Chase"),           // S_POSS_RUN5
    (29, 2, 4, 182, "Chase"),           // S_POSS_RUN6
    (29, 3, 4, 183, "Chase"),           // S_POSS_RUN7
    (29, 3, 4, 176, "Chase"),           // S_POSS_RUN8
    (29, 4, 10, 185, "FaceTarget"),     // S_POSS_ATK1
    (29, 5, 8, 186, "PosAttack"),       // S_POSS_ATK2
    (29, 4, 8, 176, "NULL"),            // S_POSS_ATK3
    (29, 6, 3, 188, "NULL"),            // S_POSS_PAIN
    (29, 6, 3, 176, "Pain"),            // S_POSS_PAIN2
    (29, 7, 5, 190, "NULL"),            // S_POSS_DIE1
    (29, 8, 5, 191, "Scream"),          // S_POSS_DIE2
    (29, 9, 5, 192, "Fall"),            // S_POSS_DIE3
    (29, 10, 5, 193, "NULL"),           // S_POSS_DIE4
    (29, 11, -1, 0, "NULL"),            // S_POSS_DIE5
    (29, 12, 5, 195, "NULL"),           // S_POSS_XDIE1
    (29, 13, 5, 196, "XScream"),        // S_POSS_XDIE2
    (29, 14, 5, 197, "Fall"),           // S_POSS_XDIE3
    (29, 15, 5, 198, "NULL"),           // S_POSS_XDIE4
    (29, 16, 5, 199, "NULL"),           // S_POSS_XDIE5
    (29, 17, 5, 200, "NULL"),           // S_POSS_XDIE6
    (29, 18, 5, 201, "NULL"),           // S_POSS_XDIE7
    (29, 19, 5, 202, "NULL"),           // S_POSS_XDIE8
    (29, 20, -1, 0, "NULL"),            // S_POSS_XDIE9
    (29, 10, 5, 204, "NULL"),           // S_POSS_RAISE1
    (29, 9, 5, 205, "NULL"),            // S_POSS_RAISE2
    (29, 8, 5, 206, "NULL"),            // S_POSS_RAISE3
    (29, 7, 5, 176, "NULL"),            // S_POSS_RAISE4
    (30, 0, 10, 208, "Look"),           // S_SPOS_STND
    (30, 1, 10, 207, "Look"),           // S_SPOS_STND2
    (30, 0, 3, 210, "Chase"),           // S_SPOS_RUN1
    (30, 0, 3, 211, "Chase"),           // S_SPOS_RUN2
    (30, 1, 3, 212, "Chase"),           // S_SPOS_RUN3
    (30, 1, 3, 213, "Chase"),           // S_SPOS_RUN4
    (30, 2, 3, 214, "Chase"),           // S_SPOS_RUN5
    (30, 2, 3, 215, "Chase"),           // S_SPOS_RUN6
    (30, 3, 3, 216, "Chase"),           // S_SPOS_RUN7
    (30, 3, 3, 209, "Chase"),           // S_SPOS_RUN8
    (30, 4, 10, 218, "FaceTarget"),     // S_SPOS_ATK1
    (30, 32773, 10, 219, "SPosAttack"), // S_SPOS_ATK2
    (30, 4, 10, 209, "NULL"),           // S_SPOS_ATK3
    (30, 6, 3, 221, "NULL"),            // S_SPOS_PAIN
    (30, 6, 3, 209, "Pain"),            // S_SPOS_PAIN2
    (30, 7, 5, 223, "NULL"),            // S_SPOS_DIE1
    (30, 8, 5, 224, "Scream"),          // S_SPOS_DIE2
    (30, 9, 5, 225, "Fall"),            // S_SPOS_DIE3
    (30, 10, 5, 226, "NULL"),           // S_SPOS_DIE4
    (30, 11, -1, 0, "NULL"),            // S_SPOS_DIE5
    (30, 12, 5, 228, "NULL"),           // S_SPOS_XDIE1
    (30, 13, 5, 229, "XScream"),        // S_SPOS_XDIE2
    (30, 14, 5, 230, "Fall"),           // S_SPOS_XDIE3
    (30, 15, 5, 231, "NULL"),           // S_SPOS_XDIE4
    (30, 16, 5, 232, "NULL"),           // S_SPOS_XDIE5
    (30, 17, 5, 233, "NULL"),           // S_SPOS_XDIE6
    (30, 18, 5, 234, "NULL"),           // S_SPOS_XDIE7
    (30, 19, 5, 235, "NULL"),           // S_SPOS_XDIE8
    (30, 20, -1, 0, "NULL"),            // S_SPOS_XDIE9
    (30, 11, 5, 237, "NULL"),           // S_SPOS_RAISE1
    (30, 10, 5, 238, "NULL"),           // S_SPOS_RAISE2
    (30, 9, 5, 239, "NULL"),            // S_SPOS_RAISE3
    (30, 8, 5, 240, "NULL"),            // S_SPOS_RAISE4
    (30, 7, 5, 209, "NULL"),            // S_SPOS_RAISE5
    (31, 0, 10, 242, "Look"),           // S_VILE_STND
    (31, 1, 10, 241, "Look"),           // S_VILE_STND2
    (31, 0, 2, 244, "VileChase"),       // S_VILE_RUN1
    (31, 0, 2, 245, "VileChase"),       // S_VILE_RUN2
    (31, 1, 2, 246, "VileChase"),       // S_VILE_RUN3
    (31, 1, 2, 247, "VileChase"),       // S_VILE_RUN4
    (31, 2, 2, 248, "VileChase"),       // S_VILE_RUN5
    (31, 2, 2, 249, "VileChase"),       // S_VILE_RUN6
    (31, 3, 2, 250, "VileChase"),       // S_VILE_RUN7
    (31, 3, 2, 251, "VileChase"),       // S_VILE_RUN8
    (31, 4, 2, 252, "VileChase"),       // S_VILE_RUN9
    (31, 4, 2, 253, "VileChase"),       // S_VILE_RUN10
    (31, 5, 2, 254, "VileChase"),       // S_VILE_RUN11
    (31, 5, 2, 243, "VileChase"),       // S_VILE_RUN12
    (31, 32774, 0, 256, "VileStart"),   // S_VILE_ATK1
    (31, 32774, 10, 257, "FaceTarget"), // S_VILE_ATK2
    (31, 32775, 8, 258, "VileTarget"),  // S_VILE_ATK3
    (31, 32776, 8, 259, "FaceTarget"),  // S_VILE_ATK4
    (31, 32777, 8, 260, "FaceTarget"),  // S_VILE_ATK5
    (31, 32778, 8, 261, "FaceTarget"),  // S_VILE_ATK6
    (31, 32779, 8, 262, "FaceTarget"),  // S_VILE_ATK7
    (31, 32780, 8, 263, "FaceTarget"),  // S_VILE_ATK8
    (31, 32781, 8, 264, "FaceTarget"),  // S_VILE_ATK9
    (31, 32782, 8, 265, "VileAttack"),  // S_VILE_ATK10
    (31, 32783, 20, 243, "NULL"),       // S_VILE_ATK11
    (31, 32794, 10, 267, "NULL"),       // S_VILE_HEAL1
    (31, 32795, 10, 268, "NULL"),       // S_VILE_HEAL2
    (31, 32796, 10, 243, "NULL"),       // S_VILE_HEAL3
    (31, 16, 5, 270, "NULL"),           // S_VILE_PAIN
    (31, 16, 5, 243, "Pain"),           // S_VILE_PAIN2
    (31, 16, 7, 272, "NULL"),           // S_VILE_DIE1
    (31, 17, 7, 273, "Scream"),         // S_VILE_DIE2
    (31, 18, 7, 274, "Fall"),           // S_VILE_DIE3
    (31, 19, 7, 275, "NULL"),           // S_VILE_DIE4
    (31, 20, 7, 276, "NULL"),           // S_VILE_DIE5
    (31, 21, 7, 277, "NULL"),           // S_VILE_DIE6
    (31, 22, 7, 278, "NULL"),           // S_VILE_DIE7
    (31, 23, 5, 279, "NULL"),           // S_VILE_DIE8
    (31, 24, 5, 280, "NULL"),           // S_VILE_DIE9
    (31, 25, -1, 0, "NULL"),            // S_VILE_DIE10
    (32, 32768, 2, 282, "StartFire"),   // S_FIRE1
    (32, 32769, 2, 283, "Fire"),        // S_FIRE2
    (32, 32768, 2, 284, "Fire"),        // S_FIRE3
    (32, 32769, 2, 285, "Fire"),        // S_FIRE4
    (32, 32770, 2, 286, "FireCrackle"), // S_FIRE5
    (32, 32769, 2, 287, "Fire"),        // S_FIRE6
    (32, 32770, 2, 288, "Fire"),        // S_FIRE7
    (32, 32769, 2, 289, "Fire"),        // S_FIRE8
    (32, 32770, 2, 290, "Fire"),        // S_FIRE9
    (32, 32771, 2, 291, "Fire"),        // S_FIRE10
    (32, 32770, 2, 292, "Fire"),        // S_FIRE11
    (32, 32771, 2, 293, "Fire"),        // S_FIRE12
    (32, 32770, 2, 294, "Fire"),        // S_FIRE13
    (32, 32771, 2, 295, "Fire"),        // S_FIRE14
    (32, 32772, 2, 296, "Fire"),        // S_FIRE15
    (32, 32771, 2, 297, "Fire"),        // S_FIRE16
    (32, 32772, 2, 298, "Fire"),        // S_FIRE17
    (32, 32771, 2, 299, "Fire"),        // S_FIRE18
    (32, 32772, 2, 300, "FireCrackle"), // S_FIRE19
    (32, 32773, 2, 301, "Fire"),        // S_FIRE20
    (32, 32772, 2, 302, "Fire"),        // S_FIRE21
    (32, 32773, 2, 303, "Fire"),        // S_FIRE22
    (32, 32772, 2, 304, "Fire"),        // S_FIRE23
    (32, 32773, 2, 305, "Fire"),        // S_FIRE24
    (32, 32774, 2, 306, "Fire"),        // S_FIRE25
    (32, 32775, 2, 307, "Fire"),        // S_FIRE26
    (32, 32774, 2, 308, "Fire"),        // S_FIRE27
    (32, 32775, 2, 309, "Fire"),        // S_FIRE28
    (32, 32774, 2, 310, "Fire"),        // S_FIRE29
    (32, 32775, 2, 0, "Fire"),          // S_FIRE30
    (17, 1, 4, 312, "NULL"),            // S_SMOKE1
    (17, 2, 4, 313, "NULL"),            // S_SMOKE2
    (17, 1, 4, 314, "NULL"),            // S_SMOKE3
    (17, 2, 4, 315, "NULL"),            // S_SMOKE4
    (17, 3, 4, 0, "NULL"),              // S_SMOKE5
    (33, 32768, 2, 317, "Tracer"),      // S_TRACER
    (33, 32769, 2, 316, "Tracer"),      // S_TRACER2
    (34, 32768, 8, 319, "NULL"),        // S_TRACEEXP1
    (34, 32769, 6, 320, "NULL"),        // S_TRACEEXP2
    (34, 32770, 4, 0, "NULL"),          // S_TRACEEXP3
    (35, 0, 10, 322, "Look"),           // S_SKEL_STND
    (35, 1, 10, 321, "Look"),           // S_SKEL_STND2
    (35, 0, 2, 324, "Chase"),           // S_SKEL_RUN1
    (35, 0, 2, 325, "Chase"),           // S_SKEL_RUN2
    (35, 1, 2, 326, "Chase"),           // S_SKEL_RUN3
    (35, 1, 2, 327, "Chase"),           // S_SKEL_RUN4
    (35, 2, 2, 328, "Chase"),           // S_SKEL_RUN5
    (35, 2, 2, 329, "Chase"),           // S_SKEL_RUN6
    (35, 3, 2, 330, "Chase"),           // S_SKEL_RUN7
    (35, 3, 2, 331, "Chase"),           // S_SKEL_RUN8
    (35, 4, 2, 332, "Chase"),           // S_SKEL_RUN9
    (35, 4, 2, 333, "Chase"),           // S_SKEL_RUN10
    (35, 5, 2, 334, "Chase"),           // S_SKEL_RUN11
    (35, 5, 2, 323, "Chase"),           // S_SKEL_RUN12
    (35, 6, 0, 336, "FaceTarget"),      // S_SKEL_FIST1
    (35, 6, 6, 337, "SkelWhoosh"),      // S_SKEL_FIST2
    (35, 7, 6, 338, "FaceTarget"),      // S_SKEL_FIST3
    (35, 8, 6, 323, "SkelFist"),        // S_SKEL_FIST4
    (35, 32777, 0, 340, "FaceTarget"),  // S_SKEL_MISS1
    (35, 32777, 10, 341, "FaceTarget"), // S_SKEL_MISS2
    (35, 10, 10, 342, "SkelMissile"),   // S_SKEL_MISS3
    (35, 10, 10, 323, "FaceTarget"),    // S_SKEL_MISS4
    (35, 11, 5, 344, "NULL"),           // S_SKEL_PAIN
    (35, 11, 5, 323, "Pain"),           // S_SKEL_PAIN2
    (35, 11, 7, 346, "NULL"),           // S_SKEL_DIE1
    (35, 12, 7, 347, "NULL"),           // S_SKEL_DIE2
    (35, 13, 7, 348, "Scream"),         // S_SKEL_DIE3
    (35, 14, 7, 349, "Fall"),           // S_SKEL_DIE4
    (35, 15, 7, 350, "NULL"),           // S_SKEL_DIE5
    (35, 16, -1, 0, "NULL"),            // S_SKEL_DIE6
    (35, 16, 5, 352, "NULL"),           // S_SKEL_RAISE1
    (35, 15, 5, 353, "NULL"),           // S_SKEL_RAISE2
    (35, 14, 5, 354, "NULL"),           // S_SKEL_RAISE3
    (35, 13, 5, 355, "NULL"),           // S_SKEL_RAISE4
    (35, 12, 5, 356, "NULL"),           // S_SKEL_RAISE5
    (35, 11, 5, 323, "NULL"),           // S_SKEL_RAISE6
    (36, 32768, 4, 358, "NULL"),        // S_FATSHOT1
    (36, 32769, 4, 357, "NULL"),        // S_FATSHOT2
    (22, 32769, 8, 360, "NULL"),        // S_FATSHOTX1
    (22, 32770, 6, 361, "NULL"),        // S_FATSHOTX2
    (22, 32771, 4, 0, "NULL"),          // S_FATSHOTX3
    (37, 0, 15, 363, "Look"),           // S_FATT_STND
    (37, 1, 15, 362, "Look"),           // S_FATT_STND2
    (37, 0, 4, 365, "Chase"),           // S_FATT_RUN1
    (37, 0, 4, 366, "Chase"),           // S_FATT_RUN2
    (37, 1, 4, 367, "Chase"),           // S_FATT_RUN3
    (37, 1, 4, 368, "Chase"),           // S_FATT_RUN4
    (37, 2, 4, 369, "Chase"),           // S_FATT_RUN5
    (37, 2, 4, 370, "Chase"),           // S_FATT_RUN6
    (37, 3, 4, 371, "Chase"),           // S_FATT_RUN7
    (37, 3, 4, 372, "Chase"),           // S_FATT_RUN8
    (37, 4, 4, 373, "Chase"),           // S_FATT_RUN9
    (37, 4, 4, 374, "Chase"),           // S_FATT_RUN10
    (37, 5, 4, 375, "Chase"),           // S_FATT_RUN11
    (37, 5, 4, 364, "Chase"),           // S_FATT_RUN12
    (37, 6, 20, 377, "FatRaise"),       // S_FATT_ATK1
    (37, 32775, 10, 378, "FatAttack1"), // S_FATT_ATK2
    (37, 8, 5, 379, "FaceTarget"),      // S_FATT_ATK3
    (37, 6, 5, 380, "FaceTarget"),      // S_FATT_ATK4
    (37, 32775, 10, 381, "FatAttack2"), // S_FATT_ATK5
    (37, 8, 5, 382, "FaceTarget"),      // S_FATT_ATK6
    (37, 6, 5, 383, "FaceTarget"),      // S_FATT_ATK7
    (37, 32775, 10, 384, "FatAttack3"), // S_FATT_ATK8
    (37, 8, 5, 385, "FaceTarget"),      // S_FATT_ATK9
    (37, 6, 5, 364, "FaceTarget"),      // S_FATT_ATK10
    (37, 9, 3, 387, "NULL"),            // S_FATT_PAIN
    (37, 9, 3, 364, "Pain"),            // S_FATT_PAIN2
    (37, 10, 6, 389, "NULL"),           // S_FATT_DIE1
    (37, 11, 6, 390, "Scream"),         // S_FATT_DIE2
    (37, 12, 6, 391, "Fall"),           // S_FATT_DIE3
    (37, 13, 6, 392, "NULL"),           // S_FATT_DIE4
    (37, 14, 6, 393, "NULL"),           // S_FATT_DIE5
    (37, 15, 6, 394, "NULL"),           // S_FATT_DIE6
    (37, 16, 6, 395, "NULL"),           // S_FATT_DIE7
    (37, 17, 6, 396, "NULL"),           // S_FATT_DIE8
    (37, 18, 6, 397, "NULL"),           // S_FATT_DIE9
    (37, 19, -1, 0, "BossDeath"),       // S_FATT_DIE10
    (37, 17, 5, 399, "NULL"),           // S_FATT_RAISE1
    (37, 16, 5, 400, "NULL"),           // S_FATT_RAISE2
    (37, 15, 5, 401, "NULL"),           // S_FATT_RAISE3
    (37, 14, 5, 402, "NULL"),           // S_FATT_RAISE4
    (37, 13, 5, 403, "NULL"),           // S_FATT_RAISE5
    (37, 12, 5, 404, "NULL"),           // S_FATT_RAISE6
    (37, 11, 5, 405, "NULL"),           // S_FATT_RAISE7
    (37, 10, 5, 364, "NULL"),           // S_FATT_RAISE8
    (38, 0, 10, 407, "Look"),           // S_CPOS_STND
    (38, 1, 10, 406, "Look"),           // S_CPOS_STND2
    (38, 0, 3, 409, "Chase"),           // S_CPOS_RUN1
    (38, 0, 3, 410, "Chase"),           // S_CPOS_RUN2
    (38, 1, 3, 411, "Chase"),           // S_CPOS_RUN3
    (38, 1, 3, 412, "Chase"),           // S_CPOS_RUN4
    (38, 2, 3, 413, "Chase"),           // S_CPOS_RUN5
    (38, 2, 3, 414, "Chase"),           // S_CPOS_RUN6
    (38, 3, 3, 415, "Chase"),           // S_CPOS_RUN7
    (38, 3, 3, 408, "Chase"),           // S_CPOS_RUN8
    (38, 4, 10, 417, "FaceTarget"),     // S_CPOS_ATK1
    (38, 32773, 4, 418, "CPosAttack"),  // S_CPOS_ATK2
    (38, 32772, 4, 419, "CPosAttack"),  // S_CPOS_ATK3
    (38, 5, 1, 417, "CPosRefire"),      // S_CPOS_ATK4
    (38, 6, 3, 421, "NULL"),            // S_CPOS_PAIN
    (38, 6, 3, 408, "Pain"),            // S_CPOS_PAIN2
    (38, 7, 5, 423, "NULL"),            // S_CPOS_DIE1
    (38, 8, 5, 424, "Scream"),          // S_CPOS_DIE2
    (38, 9, 5, 425, "Fall"),            // S_CPOS_DIE3
    (38, 10, 5, 426, "NULL"),           // S_CPOS_DIE4
    (38, 11, 5, 427, "NULL"),           // S_CPOS_DIE5
    (38, 12, 5, 428, "NULL"),           // S_CPOS_DIE6
    (38, 13, -1, 0, "NULL"),            // S_CPOS_DIE7
    (38, 14, 5, 430, "NULL"),           // S_CPOS_XDIE1
    (38, 15, 5, 431, "XScream"),        // S_CPOS_XDIE2
    (38, 16, 5, 432, "Fall"),           // S_CPOS_XDIE3
    (38, 17, 5, 433, "NULL"),           // S_CPOS_XDIE4
    (38, 18, 5, 434, "NULL"),           // S_CPOS_XDIE5
    (38, 19, -1, 0, "NULL"),            // S_CPOS_XDIE6
    (38, 13, 5, 436, "NULL"),           // S_CPOS_RAISE1
    (38, 12, 5, 437, "NULL"),           // S_CPOS_RAISE2
    (38, 11, 5, 438, "NULL"),           // S_CPOS_RAISE3
    (38, 10, 5, 439, "NULL"),           // S_CPOS_RAISE4
    (38, 9, 5, 440, "NULL"),            // S_CPOS_RAISE5
    (38, 8, 5, 441, "NULL"),            // S_CPOS_RAISE6
    (38, 7, 5, 408, "NULL"),            // S_CPOS_RAISE7
    (0, 0, 10, 443, "Look"),            // S_TROO_STND
    (0, 1, 10, 442, "Look"),            // S_TROO_STND2
    (0, 0, 3, 445, "Chase"),            // S_TROO_RUN1
    (0, 0, 3, 446, "Chase"),            // S_TROO_RUN2
    (0, 1, 3, 447, "Chase"),            // S_TROO_RUN3
    (0, 1, 3, 448, "Chase"),            // S_TROO_RUN4
    (0, 2, 3, 449, "Chase"),            // S_TROO_RUN5
    (0, 2, 3, 450, "Chase"),            // S_TROO_RUN6
    (0, 3, 3, 451, "Chase"),            // S_TROO_RUN7
    (0, 3, 3, 444, "Chase"),            // S_TROO_RUN8
    (0, 4, 8, 453, "FaceTarget"),       // S_TROO_ATK1
    (0, 5, 8, 454, "FaceTarget"),       // S_TROO_ATK2
    (0, 6, 6, 444, "TroopAttack"),      // S_TROO_ATK3
    (0, 7, 2, 456, "NULL"),             // S_TROO_PAIN
    (0, 7, 2, 444, "Pain"),             // S_TROO_PAIN2
    (0, 8, 8, 458, "NULL"),             // S_TROO_DIE1
    (0, 9, 8, 459, "Scream"),           // S_TROO_DIE2
    (0, 10, 6, 460, "NULL"),            // S_TROO_DIE3
    (0, 11, 6, 461, "Fall"),            // S_TROO_DIE4
    (0, 12, -1, 0, "NULL"),             // S_TROO_DIE5
    (0, 13, 5, 463, "NULL"),            // S_TROO_XDIE1
    (0, 14, 5, 464, "XScream"),         // S_TROO_XDIE2
    (0, 15, 5, 465, "NULL"),            // S_TROO_XDIE3
    (0, 16, 5, 466, "Fall"),            // S_TROO_XDIE4
    (0, 17, 5, 467, "NULL"),            // S_TROO_XDIE5
    (0, 18, 5, 468, "NULL"),            // S_TROO_XDIE6
    (0, 19, 5, 469, "NULL"),            // S_TROO_XDIE7
    (0, 20, -1, 0, "NULL"),             // S_TROO_XDIE8
    (0, 12, 8, 471, "NULL"),            // S_TROO_RAISE1
    (0, 11, 8, 472, "NULL"),            // S_TROO_RAISE2
    (0, 10, 6, 473, "NULL"),            // S_TROO_RAISE3
    (0, 9, 6, 474, "NULL"),             // S_TROO_RAISE4
    (0, 8, 6, 444, "NULL"),             // S_TROO_RAISE5
    (39, 0, 10, 476, "Look"),           // S_SARG_STND
    (39, 1, 10, 475, "Look"),           // S_SARG_STND2
    (39, 0, 2, 478, "Chase"),           // S_SARG_RUN1
    (39, 0, 2, 479, "Chase"),           // S_SARG_RUN2
    (39, 1, 2, 480, "Chase"),           // S_SARG_RUN3
    (39, 1, 2, 481, "Chase"),           // S_SARG_RUN4
    (39, 2, 2, 482, "Chase"),           // S_SARG_RUN5
    (39, 2, 2, 483, "Chase"),           // S_SARG_RUN6
    (39, 3, 2, 484, "Chase"),           // S_SARG_RUN7
    (39, 3, 2, 477, "Chase"),           // S_SARG_RUN8
    (39, 4, 8, 486, "FaceTarget"),      // S_SARG_ATK1
    (39, 5, 8, 487, "FaceTarget"),      // S_SARG_ATK2
    (39, 6, 8, 477, "SargAttack"),      // S_SARG_ATK3
    (39, 7, 2, 489, "NULL"),            // S_SARG_PAIN
    (39, 7, 2, 477, "Pain"),            // S_SARG_PAIN2
    (39, 8, 8, 491, "NULL"),            // S_SARG_DIE1
    (39, 9, 8, 492, "Scream"),          // S_SARG_DIE2
    (39, 10, 4, 493, "NULL"),           // S_SARG_DIE3
    (39, 11, 4, 494, "Fall"),           // S_SARG_DIE4
    (39, 12, 4, 495, "NULL"),           // S_SARG_DIE5
    (39, 13, -1, 0, "NULL"),            // S_SARG_DIE6
    (39, 13, 5, 497, "NULL"),           // S_SARG_RAISE1
    (39, 12, 5, 498, "NULL"),           // S_SARG_RAISE2
    (39, 11, 5, 499, "NULL"),           // S_SARG_RAISE3
    (39, 10, 5, 500, "NULL"),           // S_SARG_RAISE4
    (39, 9, 5, 501, "NULL"),            // S_SARG_RAISE5
    (39, 8, 5, 477, "NULL"),            // S_SARG_RAISE6
    (40, 0, 10, 502, "Look"),           // S_HEAD_STND
    (40, 0, 3, 503, "Chase"),           // S_HEAD_RUN1
    (40, 1, 5, 505, "FaceTarget"),      // S_HEAD_ATK1
    (40, 2, 5, 506, "FaceTarget"),      // S_HEAD_ATK2
    (40, 32771, 5, 503, "HeadAttack"),  // S_HEAD_ATK3
    (40, 4, 3, 508, "NULL"),            // S_HEAD_PAIN
    (40, 4, 3, 509, "Pain"),            // S_HEAD_PAIN2
    (40, 5, 6, 503, "NULL"),            // S_HEAD_PAIN3
    (40, 6, 8, 511, "NULL"),            // S_HEAD_DIE1
    (40, 7, 8, 512, "Scream"),          // S_HEAD_DIE2
    (40, 8, 8, 513, "NULL"),            // S_HEAD_DIE3
    (40, 9, 8, 514, "NULL"),            // S_HEAD_DIE4
    (40, 10, 8, 515, "Fall"),           // S_HEAD_DIE5
    (40, 11, -1, 0, "NULL"),            // S_HEAD_DIE6
    (40, 11, 8, 517, "NULL"),           // S_HEAD_RAISE1
    (40, 10, 8, 518, "NULL"),           // S_HEAD_RAISE2
    (40, 9, 8, 519, "NULL"),            // S_HEAD_RAISE3
    (40, 8, 8, 520, "NULL"),            // S_HEAD_RAISE4
    (40, 7, 8, 521, "NULL"),            // S_HEAD_RAISE5
    (40, 6, 8, 503, "NULL"),            // S_HEAD_RAISE6
    (41, 32768, 4, 523, "NULL"),        // S_BRBALL1
    (41, 32769, 4, 522, "NULL"),        // S_BRBALL2
    (41, 32770, 6, 525, "NULL"),        // S_BRBALLX1
    (41, 32771, 6, 526, "NULL"),        // S_BRBALLX2
    (41, 32772, 6, 0, "NULL"),          // S_BRBALLX3
    (42, 0, 10, 528, "Look"),           // S_BOSS_STND
    (42, 1, 10, 527, "Look"),           // S_BOSS_STND2
    (42, 0, 3, 530, "Chase"),           // S_BOSS_RUN1
    (42, 0, 3, 531, "Chase"),           // S_BOSS_RUN2
    (42, 1, 3, 532, "Chase"),           // S_BOSS_RUN3
    (42, 1, 3, 533, "Chase"),           // S_BOSS_RUN4
    (42, 2, 3, 534, "Chase"),           // S_BOSS_RUN5
    (42, 2, 3, 535, "Chase"),           // S_BOSS_RUN6
    (42, 3, 3, 536, "Chase"),           // S_BOSS_RUN7
    (42, 3, 3, 529, "Chase"),           // S_BOSS_RUN8
    (42, 4, 8, 538, "FaceTarget"),      // S_BOSS_ATK1
    (42, 5, 8, 539, "FaceTarget"),      // S_BOSS_ATK2
    (42, 6, 8, 529, "BruisAttack"),     // S_BOSS_ATK3
    (42, 7, 2, 541, "NULL"),            // S_BOSS_PAIN
    (42, 7, 2, 529, "Pain"),            // S_BOSS_PAIN2
    (42, 8, 8, 543, "NULL"),            // S_BOSS_DIE1
    (42, 9, 8, 544, "Scream"),          // S_BOSS_DIE2
    (42, 10, 8, 545, "NULL"),           // S_BOSS_DIE3
    (42, 11, 8, 546, "Fall"),           // S_BOSS_DIE4
    (42, 12, 8, 547, "NULL"),           // S_BOSS_DIE5
    (42, 13, 8, 548, "NULL"),           // S_BOSS_DIE6
    (42, 14, -1, 0, "BossDeath"),       // S_BOSS_DIE7
    (42, 14, 8, 550, "NULL"),           // S_BOSS_RAISE1
    (42, 13, 8, 551, "NULL"),           // S_BOSS_RAISE2
    (42, 12, 8, 552, "NULL"),           // S_BOSS_RAISE3
    (42, 11, 8, 553, "NULL"),           // S_BOSS_RAISE4
    (42, 10, 8, 554, "NULL"),           // S_BOSS_RAISE5
    (42, 9, 8, 555, "NULL"),            // S_BOSS_RAISE6
    (42, 8, 8, 529, "NULL"),            // S_BOSS_RAISE7
    (43, 0, 10, 557, "Look"),           // S_BOS2_STND
    (43, 1, 10, 556, "Look"),           // S_BOS2_STND2
    (43, 0, 3, 559, "Chase"),           // S_BOS2_RUN1
    (43, 0, 3, 560, "Chase"),           // S_BOS2_RUN2
    (43, 1, 3, 561, "Chase"),           // S_BOS2_RUN3
    (43, 1, 3, 562, "Chase"),           // S_BOS2_RUN4
    (43, 2, 3, 563, "Chase"),           // S_BOS2_RUN5
    (43, 2, 3, 564, "Chase"),           // S_BOS2_RUN6
    (43, 3, 3, 565, "Chase"),           // S_BOS2_RUN7
    (43, 3, 3, 558, "Chase"),           // S_BOS2_RUN8
    (43, 4, 8, 567, "FaceTarget"),      // S_BOS2_ATK1
    (43, 5, 8, 568, "FaceTarget"),      // S_BOS2_ATK2
    (43, 6, 8, 558, "BruisAttack"),     // S_BOS2_ATK3
    (43, 7, 2, 570, "NULL"),            // S_BOS2_PAIN
    (43, 7, 2, 558, "Pain"),            // S_BOS2_PAIN2
    (43, 8, 8, 572, "NULL"),            // S_BOS2_DIE1
    (43, 9, 8, 573, "Scream"),          // S_BOS2_DIE2
    (43, 10, 8, 574, "NULL"),           // S_BOS2_DIE3
    (43, 11, 8, 575, "Fall"),           // S_BOS2_DIE4
    (43, 12, 8, 576, "NULL"),           // S_BOS2_DIE5
    (43, 13, 8, 577, "NULL"),           // S_BOS2_DIE6
    (43, 14, -1, 0, "NULL"),            // S_BOS2_DIE7
    (43, 14, 8, 579, "NULL"),           // S_BOS2_RAISE1
    (43, 13, 8, 580, "NULL"),           // S_BOS2_RAISE2
    (43, 12, 8, 581, "NULL"),           // S_BOS2_RAISE3
    (43, 11, 8, 582, "NULL"),           // S_BOS2_RAISE4
    (43, 10, 8, 583, "NULL"),           // S_BOS2_RAISE5
    (43, 9, 8, 584, "NULL"),            // S_BOS2_RAISE6
    (43, 8, 8, 558, "NULL"),            // S_BOS2_RAISE7
    (44, 32768, 10, 586, "Look"),       // S_SKULL_STND
    (44, 32769, 10, 585, "Look"),       // S_SKULL_STND2
    (44, 32768, 6, 588, "Chase"),       // S_SKULL_RUN1
    (44, 32769, 6, 587, "Chase"),       // S_SKULL_RUN2
    (44, 32770, 10, 590, "FaceTarget"), // S_SKULL_ATK1
    (44, 32771, 4, 591, "SkullAttack"), // S_SKULL_ATK2
    (44, 32770, 4, 592, "NULL"),        // S_SKULL_ATK3
    (44, 32771, 4, 591, "NULL"),        // S_SKULL_ATK4
    (44, 32772, 3, 594, "NULL"),        // S_SKULL_PAIN
    (44, 32772, 3, 587, "Pain"),        // S_SKULL_PAIN2
    (44, 32773, 6, 596, "NULL"),        // S_SKULL_DIE1
    (44, 32774, 6, 597, "Scream"),      // S_SKULL_DIE2
    (44, 32775, 6, 598, "NULL"),        // S_SKULL_DIE3
    (44, 32776, 6, 599, "Fall"),        // S_SKULL_DIE4
    (44, 9, 6, 600, "NULL"),            // S_SKULL_DIE5
    (44, 10, 6, 0, "NULL"),             // S_SKULL_DIE6
    (45, 0, 10, 602, "Look"),           // S_SPID_STND
    (45, 1, 10, 601, "Look"),           // S_SPID_STND2
    (45, 0, 3, 604, "Metal"),           // S_SPID_RUN1
    (45, 0, 3, 605, "Chase"),           // S_SPID_RUN2
    (45, 1, 3, 606, "Chase"),           // S_SPID_RUN3
    (45, 1, 3, 607, "Chase"),           // S_SPID_RUN4
    (45, 2, 3, 608, "Metal"),           // S_SPID_RUN5
    (45, 2, 3, 609, "Chase"),           // S_SPID_RUN6
    (45, 3, 3, 610, "Chase"),           // S_SPID_RUN7
    (45, 3, 3, 611, "Chase"),           // S_SPID_RUN8
    (45, 4, 3, 612, "Metal"),           // S_SPID_RUN9
    (45, 4, 3, 613, "Chase"),           // S_SPID_RUN10
    (45, 5, 3, 614, "Chase"),           // S_SPID_RUN11
    (45, 5, 3, 603, "Chase"),           // S_SPID_RUN12
    (45, 32768, 20, 616, "FaceTarget"), // S_SPID_ATK1
    (45, 32774, 4, 617, "SPosAttack"),  // S_SPID_ATK2
    (45, 32775, 4, 618, "SPosAttack"),  // S_SPID_ATK3
    (45, 32775, 1, 616, "SpidRefire"),  // S_SPID_ATK4
    (45, 8, 3, 620, "NULL"),            // S_SPID_PAIN
    (45, 8, 3, 603, "Pain"),            // S_SPID_PAIN2
    (45, 9, 20, 622, "Scream"),         // S_SPID_DIE1
    (45, 10, 10, 623, "Fall"),          // S_SPID_DIE2
    (45, 11, 10, 624, "NULL"),          // S_SPID_DIE3
    (45, 12, 10, 625, "NULL"),          // S_SPID_DIE4
    (45, 13, 10, 626, "NULL"),          // S_SPID_DIE5
    (45, 14, 10, 627, "NULL"),          // S_SPID_DIE6
    (45, 15, 10, 628, "NULL"),          // S_SPID_DIE7
    (45, 16, 10, 629, "NULL"),          // S_SPID_DIE8
    (45, 17, 10, 630, "NULL"),          // S_SPID_DIE9
    (45, 18, 30, 631, "NULL"),          // S_SPID_DIE10
    (45, 18, -1, 0, "BossDeath"),       // S_SPID_DIE11
    (46, 0, 10, 633, "Look"),           // S_BSPI_STND
    (46, 1, 10, 632, "Look"),           // S_BSPI_STND2
    (46, 0, 20, 635, "NULL"),           // S_BSPI_SIGHT
    (46, 0, 3, 636, "BabyMetal"),       // S_BSPI_RUN1
    (46, 0, 3, 637, "Chase"),           // S_BSPI_RUN2
    (46, 1, 3, 638, "Chase"),           // S_BSPI_RUN3
    (46, 1, 3, 639, "Chase"),           // S_BSPI_RUN4
    (46, 2, 3, 640, "Chase"),           // S_BSPI_RUN5
    (46, 2, 3, 641, "Chase"),           // S_BSPI_RUN6
    (46, 3, 3, 642, "BabyMetal"),       // S_BSPI_RUN7
    (46, 3, 3, 643, "Chase"),           // S_BSPI_RUN8
    (46, 4, 3, 644, "Chase"),           // S_BSPI_RUN9
    (46, 4, 3, 645, "Chase"),           // S_BSPI_RUN10
    (46, 5, 3, 646, "Chase"),           // S_BSPI_RUN11
    (46, 5, 3, 635, "Chase"),           // S_BSPI_RUN12
    (46, 32768, 20, 648, "FaceTarget"), // S_BSPI_ATK1
    (46, 32774, 4, 649, "BspiAttack"),  // S_BSPI_ATK2
    (46, 32775, 4, 650, "NULL"),        // S_BSPI_ATK3
    (46, 32775, 1, 648, "SpidRefire"),  // S_BSPI_ATK4
    (46, 8, 3, 652, "NULL"),            // S_BSPI_PAIN
    (46, 8, 3, 635, "Pain"),            // S_BSPI_PAIN2
    (46, 9, 20, 654, "Scream"),         // S_BSPI_DIE1
    (46, 10, 7, 655, "Fall"),           // S_BSPI_DIE2
    (46, 11, 7, 656, "NULL"),           // S_BSPI_DIE3
    (46, 12, 7, 657, "NULL"),           // S_BSPI_DIE4
    (46, 13, 7, 658, "NULL"),           // S_BSPI_DIE5
    (46, 14, 7, 659, "NULL"),           // S_BSPI_DIE6
    (46, 15, -1, 0, "BossDeath"),       // S_BSPI_DIE7
    (46, 15, 5, 661, "NULL"),           // S_BSPI_RAISE1
    (46, 14, 5, 662, "NULL"),           // S_BSPI_RAISE2
    (46, 13, 5, 663, "NULL"),           // S_BSPI_RAISE3
    (46, 12, 5, 664, "NULL"),           // S_BSPI_RAISE4
    (46, 11, 5, 665, "NULL"),           // S_BSPI_RAISE5
    (46, 10, 5, 666, "NULL"),           // S_BSPI_RAISE6
    (46, 9, 5, 635, "NULL"),            // S_BSPI_RAISE7
    (47, 32768, 5, 668, "NULL"),        // S_ARACH_PLAZ
    (47, 32769, 5, 667, "NULL"),        // S_ARACH_PLAZ2
    (48, 32768, 5, 670, "NULL"),        // S_ARACH_PLEX
    (48, 32769, 5, 671, "NULL"),        // S_ARACH_PLEX2
    (48, 32770, 5, 672, "NULL"),        // S_ARACH_PLEX3
    (48, 32771, 5, 673, "NULL"),        // S_ARACH_PLEX4
    (48, 32772, 5, 0, "NULL"),          // S_ARACH_PLEX5
    (49, 0, 10, 675, "Look"),           // S_CYBER_STND
    (49, 1, 10, 674, "Look"),           // S_CYBER_STND2
    (49, 0, 3, 677, "Hoof"),            // S_CYBER_RUN1
    (49, 0, 3, 678, "Chase"),           // S_CYBER_RUN2
    (49, 1, 3, 679, "Chase"),           // S_CYBER_RUN3
    (49, 1, 3, 680, "Chase"),           // S_CYBER_RUN4
    (49, 2, 3, 681, "Chase"),           // S_CYBER_RUN5
    (49, 2, 3, 682, "Chase"),           // S_CYBER_RUN6
    (49, 3, 3, 683, "Metal"),           // S_CYBER_RUN7
    (49, 3, 3, 676, "Chase"),           // S_CYBER_RUN8
    (49, 4, 6, 685, "FaceTarget"),      // S_CYBER_ATK1
    (49, 5, 12, 686, "CyberAttack"),    // S_CYBER_ATK2
    (49, 4, 12, 687, "FaceTarget"),     // S_CYBER_ATK3
    (49, 5, 12, 688, "CyberAttack"),    // S_CYBER_ATK4
    (49, 4, 12, 689, "FaceTarget"),     // S_CYBER_ATK5
    (49, 5, 12, 676, "CyberAttack"),    // S_CYBER_ATK6
    (49, 6, 10, 676, "Pain"),           // S_CYBER_PAIN
    (49, 7, 10, 692, "NULL"),           // S_CYBER_DIE1
    (49, 8, 10, 693, "Scream"),         // S_CYBER_DIE2
    (49, 9, 10, 694, "NULL"),           // S_CYBER_DIE3
    (49, 10, 10, 695, "NULL"),          // S_CYBER_DIE4
    (49, 11, 10, 696, "NULL"),          // S_CYBER_DIE5
    (49, 12, 10, 697, "Fall"),          // S_CYBER_DIE6
    (49, 13, 10, 698, "NULL"),          // S_CYBER_DIE7
    (49, 14, 10, 699, "NULL"),          // S_CYBER_DIE8
    (49, 15, 30, 700, "NULL"),          // S_CYBER_DIE9
    (49, 15, -1, 0, "BossDeath"),       // S_CYBER_DIE10
    (50, 0, 10, 701, "Look"),           // S_PAIN_STND
    (50, 0, 3, 703, "Chase"),           // S_PAIN_RUN1
    (50, 0, 3, 704, "Chase"),           // S_PAIN_RUN2
    (50, 1, 3, 705, "Chase"),           // S_PAIN_RUN3
    (50, 1, 3, 706, "Chase"),           // S_PAIN_RUN4
    (50, 2, 3, 707, "Chase"),           // S_PAIN_RUN5
    (50, 2, 3, 702, "Chase"),           // S_PAIN_RUN6
    (50, 3, 5, 709, "FaceTarget"),      // S_PAIN_ATK1
    (50, 4, 5, 710, "FaceTarget"),      // S_PAIN_ATK2
    (50, 32773, 5, 711, "FaceTarget"),  // S_PAIN_ATK3
    (50, 32773, 0, 702, "PainAttack"),  // S_PAIN_ATK4
    (50, 6, 6, 713, "NULL"),            // S_PAIN_PAIN
    (50, 6, 6, 702, "Pain"),            // S_PAIN_PAIN2
    (50, 32775, 8, 715, "NULL"),        // S_PAIN_DIE1
    (50, 32776, 8, 716, "Scream"),      // S_PAIN_DIE2
    (50, 32777, 8, 717, "NULL"),        // S_PAIN_DIE3
    (50, 32778, 8, 718, "NULL"),        // S_PAIN_DIE4
    (50, 32779, 8, 719, "PainDie"),     // S_PAIN_DIE5
    (50, 32780, 8, 0, "NULL"),          // S_PAIN_DIE6
    (50, 12, 8, 721, "NULL"),           // S_PAIN_RAISE1
    (50, 11, 8, 722, "NULL"),           // S_PAIN_RAISE2
    (50, 10, 8, 723, "NULL"),           // S_PAIN_RAISE3
    (50, 9, 8, 724, "NULL"),            // S_PAIN_RAISE4
    (50, 8, 8, 725, "NULL"),            // S_PAIN_RAISE5
    (50, 7, 8, 702, "NULL"),            // S_PAIN_RAISE6
    (51, 0, 10, 727, "Look"),           // S_SSWV_STND
    (51, 1, 10, 726, "Look"),           // S_SSWV_STND2
    (51, 0, 3, 729, "Chase"),           // S_SSWV_RUN1
    (51, 0, 3, 730, "Chase"),           // S_SSWV_RUN2
    (51, 1, 3, 731, "Chase"),           // S_SSWV_RUN3
    (51, 1, 3, 732, "Chase"),           // S_SSWV_RUN4
    (51, 2, 3, 733, "Chase"),           // S_SSWV_RUN5
    (51, 2, 3, 734, "Chase"),           // S_SSWV_RUN6
    (51, 3, 3, 735, "Chase"),           // S_SSWV_RUN7
    (51, 3, 3, 728, "Chase"),           // S_SSWV_RUN8
    (51, 4, 10, 737, "FaceTarget"),     // S_SSWV_ATK1
    (51, 5, 10, 738, "FaceTarget"),     // S_SSWV_ATK2
    (51, 32774, 4, 739, "CPosAttack"),  // S_SSWV_ATK3
    (51, 5, 6, 740, "FaceTarget"),      // S_SSWV_ATK4
    (51, 32774, 4, 741, "CPosAttack"),  // S_SSWV_ATK5
    (51, 5, 1, 737, "CPosRefire"),      // S_SSWV_ATK6
    (51, 7, 3, 743, "NULL"),            // S_SSWV_PAIN
    (51, 7, 3, 728, "Pain"),            // S_SSWV_PAIN2
    (51, 8, 5, 745, "NULL"),            // S_SSWV_DIE1
    (51, 9, 5, 746, "Scream"),          // S_SSWV_DIE2
    (51, 10, 5, 747, "Fall"),           // S_SSWV_DIE3
    (51, 11, 5, 748, "NULL"),           // S_SSWV_DIE4
    (51, 12, -1, 0, "NULL"),            // S_SSWV_DIE5
    (51, 13, 5, 750, "NULL"),           // S_SSWV_XDIE1
    (51, 14, 5, 751, "XScream"),        // S_SSWV_XDIE2
    (51, 15, 5, 752, "Fall"),           // S_SSWV_XDIE3
    (51, 16, 5, 753, "NULL"),           // S_SSWV_XDIE4
    (51, 17, 5, 754, "NULL"),           // S_SSWV_XDIE5
    (51, 18, 5, 755, "NULL"),           // S_SSWV_XDIE6
    (51, 19, 5, 756, "NULL"),           // S_SSWV_XDIE7
    (51, 20, 5, 757, "NULL"),           // S_SSWV_XDIE8
    (51, 21, -1, 0, "NULL"),            // S_SSWV_XDIE9
    (51, 12, 5, 759, "NULL"),           // S_SSWV_RAISE1
    (51, 11, 5, 760, "NULL"),           // S_SSWV_RAISE2
    (51, 10, 5, 761, "NULL"),           // S_SSWV_RAISE3
    (51, 9, 5, 762, "NULL"),            // S_SSWV_RAISE4
    (51, 8, 5, 728, "NULL"),            // S_SSWV_RAISE5
    (52, 0, -1, 763, "NULL"),           // S_KEENSTND
    (52, 0, 6, 765, "NULL"),            // S_COMMKEEN
    (52, 1, 6, 766, "NULL"),            // S_COMMKEEN2
    (52, 2, 6, 767, "Scream"),          // S_COMMKEEN3
    (52, 3, 6, 768, "NULL"),            // S_COMMKEEN4
    (52, 4, 6, 769, "NULL"),            // S_COMMKEEN5
    (52, 5, 6, 770, "NULL"),            // S_COMMKEEN6
    (52, 6, 6, 771, "NULL"),            // S_COMMKEEN7
    (52, 7, 6, 772, "NULL"),            // S_COMMKEEN8
    (52, 8, 6, 773, "NULL"),            // S_COMMKEEN9
    (52, 9, 6, 774, "NULL"),            // S_COMMKEEN10
    (52, 10, 6, 775, "KeenDie"),        // S_COMMKEEN11
    (52, 11, -1, 0, "NULL"),            // S_COMMKEEN12
    (52, 12, 4, 777, "NULL"),           // S_KEENPAIN
    (52, 12, 8, 763, "Pain"),           // S_KEENPAIN2
    (53, 0, -1, 0, "NULL"),             // S_BRAIN
    (53, 1, 36, 778, "BrainPain"),      // S_BRAIN_PAIN
    (53, 0, 100, 781, "BrainScream"),   // S_BRAIN_DIE1
    (53, 0, 10, 782, "NULL"),           // S_BRAIN_DIE2
    (53, 0, 10, 783, "NULL"),           // S_BRAIN_DIE3
    (53, 0, -1, 0, "BrainDie"),         // S_BRAIN_DIE4
    (51, 0, 10, 784, "Look"),           // S_BRAINEYE
    (51, 0, 181, 786, "BrainAwake"),    // S_BRAINEYESEE
    (51, 0, 150, 786, "BrainSpit"),     // S_BRAINEYE1
    (54, 32768, 3, 788, "SpawnSound"),  // S_SPAWN1
    (54, 32769, 3, 789, "SpawnFly"),    // S_SPAWN2
    (54, 32770, 3, 790, "SpawnFly"),    // S_SPAWN3
    (54, 32771, 3, 787, "SpawnFly"),    // S_SPAWN4
    (32, 32768, 4, 792, "Fire"),        // S_SPAWNFIRE1
    (32, 32769, 4, 793, "Fire"),        // S_SPAWNFIRE2
    (32, 32770, 4, 794, "Fire"),        // S_SPAWNFIRE3
    (32, 32771, 4, 795, "Fire"),        // S_SPAWNFIRE4
    (32, 32772, 4, 796, "Fire"),        // S_SPAWNFIRE5
    (32, 32773, 4, 797, "Fire"),        // S_SPAWNFIRE6
    (32, 32774, 4, 798, "Fire"),        // S_SPAWNFIRE7
    (32, 32775, 4, 0, "Fire"),          // S_SPAWNFIRE8
    (22, 32769, 10, 800, "NULL"),       // S_BRAINEXPLODE1
    (22, 32770, 10, 801, "NULL"),       // S_BRAINEXPLODE2
    (22, 32771, 10, 0, "BrainExplode"), // S_BRAINEXPLODE3
    (55, 0, 6, 803, "NULL"),            // S_ARM1
    (55, 32769, 7, 802, "NULL"),        // S_ARM1A
    (56, 0, 6, 805, "NULL"),            // S_ARM2
    (56, 32769, 6, 804, "NULL"),        // S_ARM2A
    (57, 0, 6, 807, "NULL"),            // S_BAR1
    (57, 1, 6, 806, "NULL"),            // S_BAR2
    (58, 32768, 5, 809, "NULL"),        // S_BEXP
    (58, 32769, 5, 810, "Scream"),      // S_BEXP2
    (58, 32770, 5, 811, "NULL"),        // S_BEXP3
    (58, 32771, 10, 812, "Explode"),    // S_BEXP4
    (58, 32772, 10, 0, "NULL"),         // S_BEXP5
    (59, 32768, 4, 814, "NULL"),        // S_BBAR1
    (59, 32769, 4, 815, "NULL"),        // S_BBAR2
    (59, 32770, 4, 813, "NULL"),        // S_BBAR3
    (60, 0, 6, 817, "NULL"),            // S_BON1
    (60, 1, 6, 818, "NULL"),            // S_BON1A
    (60, 2, 6, 819, "NULL"),            // S_BON1B
    (60, 3, 6, 820, "NULL"),            // S_BON1C
    (60, 2, 6, 821, "NULL"),            // S_BON1D
    (60, 1, 6, 816, "NULL"),            // S_BON1E
    (61, 0, 6, 823, "NULL"),            // S_BON2
    (61, 1, 6, 824, "NULL"),            // S_BON2A
    (61, 2, 6, 825, "NULL"),            // S_BON2B
    (61, 3, 6, 826, "NULL"),            // S_BON2C
    (61, 2, 6, 827, "NULL"),            // S_BON2D
    (61, 1, 6, 822, "NULL"),            // S_BON2E
    (62, 0, 10, 829, "NULL"),           // S_BKEY
    (62, 32769, 10, 828, "NULL"),       // S_BKEY2
    (63, 0, 10, 831, "NULL"),           // S_RKEY
    (63, 32769, 10, 830, "NULL"),       // S_RKEY2
    (64, 0, 10, 833, "NULL"),           // S_YKEY
    (64, 32769, 10, 832, "NULL"),       // S_YKEY2
    (65, 0, 10, 835, "NULL"),           // S_BSKULL
    (65, 32769, 10, 834, "NULL"),       // S_BSKULL2
    (66, 0, 10, 837, "NULL"),           // S_RSKULL
    (66, 32769, 10, 836, "NULL"),       // S_RSKULL2
    (67, 0, 10, 839, "NULL"),           // S_YSKULL
    (67, 32769, 10, 838, "NULL"),       // S_YSKULL2
    (68, 0, -1, 0, "NULL"),             // S_STIM
    (69, 0, -1, 0, "NULL"),             // S_MEDI
    (70, 32768, 6, 843, "NULL"),        // S_SOUL
    (70, 32769, 6, 844, "NULL"),        // S_SOUL2
    (70, 32770, 6, 845, "NULL"),        // S_SOUL3
    (70, 32771, 6, 846, "NULL"),        // S_SOUL4
    (70, 32770, 6, 847, "NULL"),        // S_SOUL5
    (70, 32769, 6, 842, "NULL"),        // S_SOUL6
    (71, 32768, 6, 849, "NULL"),        // S_PINV
    (71, 32769, 6, 850, "NULL"),        // S_PINV2
    (71, 32770, 6, 851, "NULL"),        // S_PINV3
    (71, 32771, 6, 848, "NULL"),        // S_PINV4
    (72, 32768, -1, 0, "NULL"),         // S_PSTR
    (73, 32768, 6, 854, "NULL"),        // S_PINS
    (73, 32769, 6, 855, "NULL"),        // S_PINS2
    (73, 32770, 6, 856, "NULL"),        // S_PINS3
    (73, 32771, 6, 853, "NULL"),        // S_PINS4
    (74, 32768, 6, 858, "NULL"),        // S_MEGA
    (74, 32769, 6, 859, "NULL"),        // S_MEGA2
    (74, 32770, 6, 860, "NULL"),        // S_MEGA3
    (74, 32771, 6, 857, "NULL"),        // S_MEGA4
    (75, 32768, -1, 0, "NULL"),         // S_SUIT
    (76, 32768, 6, 863, "NULL"),        // S_PMAP
    (76, 32769, 6, 864, "NULL"),        // S_PMAP2
    (76, 32770, 6, 865, "NULL"),        // S_PMAP3
    (76, 32771, 6, 866, "NULL"),        // S_PMAP4
    (76, 32770, 6, 867, "NULL"),        // S_PMAP5
    (76, 32769, 6, 862, "NULL"),        // S_PMAP6
    (77, 32768, 6, 869, "NULL"),        // S_PVIS
    (77, 1, 6, 868, "NULL"),            // S_PVIS2
    (78, 0, -1, 0, "NULL"),             // S_CLIP
    (79, 0, -1, 0, "NULL"),             // S_AMMO
    (80, 0, -1, 0, "NULL"),             // S_ROCK
    (81, 0, -1, 0, "NULL"),             // S_BROK
    (82, 0, -1, 0, "NULL"),             // S_CELL
    (83, 0, -1, 0, "NULL"),             // S_CELP
    (84, 0, -1, 0, "NULL"),             // S_SHEL
    (85, 0, -1, 0, "NULL"),             // S_SBOX
    (86, 0, -1, 0, "NULL"),             // S_BPAK
    (87, 0, -1, 0, "NULL"),             // S_BFUG
    (88, 0, -1, 0, "NULL"),             // S_MGUN
    (89, 0, -1, 0, "NULL"),             // S_CSAW
    (90, 0, -1, 0, "NULL"),             // S_LAUN
    (91, 0, -1, 0, "NULL"),             // S_PLAS
    (92, 0, -1, 0, "NULL"),             // S_SHOT
    (93, 0, -1, 0, "NULL"),             // S_SHOT2
    (94, 32768, -1, 0, "NULL"),         // S_COLU
    (95, 0, -1, 0, "NULL"),             // S_STALAG
    (96, 0, 10, 889, "NULL"),           // S_BLOODYTWITCH
    (96, 1, 15, 890, "NULL"),           // S_BLOODYTWITCH2
    (96, 2, 8, 891, "NULL"),            // S_BLOODYTWITCH3
    (96, 1, 6, 888, "NULL"),            // S_BLOODYTWITCH4
    (28, 13, -1, 0, "NULL"),            // S_DEADTORSO
    (28, 18, -1, 0, "NULL"),            // S_DEADBOTTOM
    (97, 0, -1, 0, "NULL"),             // S_HEADSONSTICK
    (98, 0, -1, 0, "NULL"),             // S_GIBS
    (99, 0, -1, 0, "NULL"),             // S_HEADONASTICK
    (100, 32768, 6, 898, "NULL"),       // S_HEADCANDLES
    (100, 32769, 6, 897, "NULL"),       // S_HEADCANDLES2
    (101, 0, -1, 0, "NULL"),            // S_DEADSTICK
    (102, 0, 6, 901, "NULL"),           // S_LIVESTICK
    (102, 1, 8, 900, "NULL"),           // S_LIVESTICK2
    (103, 0, -1, 0, "NULL"),            // S_MEAT2
    (104, 0, -1, 0, "NULL"),            // S_MEAT3
    (105, 0, -1, 0, "NULL"),            // S_MEAT4
    (106, 0, -1, 0, "NULL"),            // S_MEAT5
    (107, 0, -1, 0, "NULL"),            // S_STALAGTITE
    (108, 0, -1, 0, "NULL"),            // S_TALLGRNCOL
    (109, 0, -1, 0, "NULL"),            // S_SHRTGRNCOL
    (110, 0, -1, 0, "NULL"),            // S_TALLREDCOL
    (111, 0, -1, 0, "NULL"),            // S_SHRTREDCOL
    (112, 32768, -1, 0, "NULL"),        // S_CANDLESTIK
    (113, 32768, -1, 0, "NULL"),        // S_CANDELABRA
    (114, 0, -1, 0, "NULL"),            // S_SKULLCOL
    (115, 0, -1, 0, "NULL"),            // S_TORCHTREE
    (116, 0, -1, 0, "NULL"),            // S_BIGTREE
    (117, 0, -1, 0, "NULL"),            // S_TECHPILLAR
    (118, 32768, 6, 918, "NULL"),       // S_EVILEYE
    (118, 32769, 6, 919, "NULL"),       // S_EVILEYE2
    (118, 32770, 6, 920, "NULL"),       // S_EVILEYE3
    (118, 32769, 6, 917, "NULL"),       // S_EVILEYE4
    (119, 32768, 6, 922, "NULL"),       // S_FLOATSKULL
    (119, 32769, 6, 923, "NULL"),       // S_FLOATSKULL2
    (119, 32770, 6, 921, "NULL"),       // S_FLOATSKULL3
    (120, 0, 14, 925, "NULL"),          // S_HEARTCOL
    (120, 1, 14, 924, "NULL"),          // S_HEARTCOL2
    (121, 32768, 4, 927, "NULL"),       // S_BLUETORCH
    (121, 32769, 4, 928, "NULL"),       // S_BLUETORCH2
    (121, 32770, 4, 929, "NULL"),       // S_BLUETORCH3
    (121, 32771, 4, 926, "NULL"),       // S_BLUETORCH4
    (122, 32768, 4, 931, "NULL"),       // S_GREENTORCH
    (122, 32769, 4, 932, "NULL"),       // S_GREENTORCH2
    (122, 32770, 4, 933, "NULL"),       // S_GREENTORCH3
    (122, 32771, 4, 930, "NULL"),       // S_GREENTORCH4
    (123, 32768, 4, 935, "NULL"),       // S_REDTORCH
    (123, 32769, 4, 936, "NULL"),       // S_REDTORCH2
    (123, 32770, 4, 937, "NULL"),       // S_REDTORCH3
    (123, 32771, 4, 934, "NULL"),       // S_REDTORCH4
    (124, 32768, 4, 939, "NULL"),       // S_BTORCHSHRT
    (124, 32769, 4, 940, "NULL"),       // S_BTORCHSHRT2
    (124, 32770, 4, 941, "NULL"),       // S_BTORCHSHRT3
    (124, 32771, 4, 938, "NULL"),       // S_BTORCHSHRT4
    (125, 32768, 4, 943, "NULL"),       // S_GTORCHSHRT
    (125, 32769, 4, 944, "NULL"),       // S_GTORCHSHRT2
    (125, 32770, 4, 945, "NULL"),       // S_GTORCHSHRT3
    (125, 32771, 4, 942, "NULL"),       // S_GTORCHSHRT4
    (126, 32768, 4, 947, "NULL"),       // S_RTORCHSHRT
    (126, 32769, 4, 948, "NULL"),       // S_RTORCHSHRT2
    (126, 32770, 4, 949, "NULL"),       // S_RTORCHSHRT3
    (126, 32771, 4, 946, "NULL"),       // S_RTORCHSHRT4
    (127, 0, -1, 0, "NULL"),            // S_HANGNOGUTS
    (128, 0, -1, 0, "NULL"),            // S_HANGBNOBRAIN
    (129, 0, -1, 0, "NULL"),            // S_HANGTLOOKDN
    (130, 0, -1, 0, "NULL"),            // S_HANGTSKULL
    (131, 0, -1, 0, "NULL"),            // S_HANGTLOOKUP
    (132, 0, -1, 0, "NULL"),            // S_HANGTNOBRAIN
    (133, 0, -1, 0, "NULL"),            // S_COLONGIBS
    (134, 0, -1, 0, "NULL"),            // S_SMALLPOOL
    (135, 0, -1, 0, "NULL"),            // S_BRAINSTEM
    (136, 32768, 4, 960, "NULL"),       // S_TECHLAMP
    (136, 32769, 4, 961, "NULL"),       // S_TECHLAMP2
    (136, 32770, 4, 962, "NULL"),       // S_TECHLAMP3
    (136, 32771, 4, 959, "NULL"),       // S_TECHLAMP4
    (137, 32768, 4, 964, "NULL"),       // S_TECH2LAMP
    (137, 32769, 4, 965, "NULL"),       // S_TECH2LAMP2
    (137, 32770, 4, 966, "NULL"),       // S_TECH2LAMP3
    (137, 32771, 4, 963, "NULL"),       // S_TECH2LAMP4
];
