use crate::RegisterId;

// Register tables in display order. Overlaps between groups are intentional.

pub const BASIC: &[RegisterId] = &[1091, 72, 41, 33, 30, 40, 35, 79, 50, 80, 71];

pub const MAIN: &[RegisterId] = &[72, 41, 33, 30, 40, 35, 53, 68, 77, 46, 228];

pub const TAIL: &[RegisterId] = &[50, 79, 28, 75, 59, 51, 82, 10, 11, 54, 56, 55, 58, 6, 229];

pub const GOVERNOR: &[RegisterId] = &[80, 70, 71, 93, 91, 92, 94];

// Firmware version followed by main, tail and governor
pub const EXPERT: &[RegisterId] = &[
    1091, //
    72, 41, 33, 30, 40, 35, 53, 68, 77, 46, 228, //
    50, 79, 28, 75, 59, 51, 82, 10, 11, 54, 56, 55, 58, 6, 229, //
    80, 70, 71, 93, 91, 92, 94,
];

pub const MAIN_SETUP: &[RegisterId] = &[
    204, 205, 207, //
    52, 48, //
    221, //
    200, 20, 21, 16, //
    201, 22, 23, 17, //
    202, 24, 25, 18, //
    203, 26, 27, 19, //
    0, 1, 2, 3, //
    36, 37, 38, 39,
];

pub const TAIL_SETUP: &[RegisterId] = &[223, 222, 206, 5, 7, 8];

pub const GOVERNOR_SETUP: &[RegisterId] = &[
    80, 70, 71, 45, 90, 88, 89, 91, 92, 94, 93, //
    231, 232, //
    83, 84, 85, 86, 87, 2331, 240, //
    236, 239, 234, 2341, 2342, 2343,
];

pub const RECEIVER_SETUP: &[RegisterId] = &[219, 210, 211, 212, 213, 214, 215, 216, 236, 239];

// Receiver, main, tail and governor setup; 236 and 239 repeat
pub const SETUP: &[RegisterId] = &[
    219, 210, 211, 212, //
    213, 214, 215, 216, //
    236, 239, //
    204, 205, 207, //
    52, 48, //
    221, //
    200, 20, 21, 16, //
    201, 22, 23, 17, //
    202, 24, 25, 18, //
    203, 26, 27, 19, //
    0, 1, 2, 3, //
    36, 37, 38, 39, //
    223, 222, 206, 5, 7, 8, //
    80, 70, 71, 45, 90, 88, 89, 91, 92, 94, 93, //
    231, 232, //
    83, 84, 85, 86, 87, 2331, 240, //
    236, 239, 234, 2341, 2342, 2343,
];

pub const ALL: &[RegisterId] = &[
    1091, //
    72, 41, 33, 30, 40, 35, 53, 68, 77, 46, 228, //
    50, 79, 28, 75, 59, 51, 82, 10, 11, 54, 56, 55, 58, 6, 229, //
    80, 70, 71, 93, 91, 92, 94, 45, 90, 88, 89, //
    234, 2341, 2342, 2343, //
    231, 232, 2331, 240, 241, //
    83, 84, 85, 86, 87, //
    219, 210, 211, 212, 213, 214, 215, 216, 236, 239, //
    204, 205, 207, 52, 48, 221, //
    200, 20, 21, 16, //
    201, 22, 23, 17, //
    202, 24, 25, 18, //
    203, 26, 27, 19, //
    0, 1, 2, 3, //
    36, 37, 38, 39, //
    223, 222, 206, 5, 7, 8,
];

/// Named register selection an operation works on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Basic,         // Basic parameters on the settings page
    All,           // Every register the catalog knows
    Raw,           // Every register found in the input files
    Main,          // Main rotor expert parameters
    Tail,          // Tail rotor expert parameters
    Governor,      // Governor expert parameters
    Expert,        // All expert parameters
    MainSetup,     // Main rotor / swash setup
    TailSetup,     // Tail rotor setup
    GovernorSetup, // Governor setup
    ReceiverSetup, // Receiver setup
    Setup,         // All setup parameters
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Basic
    }
}

impl Selection {
    /// Resolves the selection to register IDs in display order.
    /// `raw` is the sorted set of IDs seen in the loaded banks.
    pub fn registers(&self, raw: &[RegisterId]) -> Vec<RegisterId> {
        let table = match self {
            Selection::Basic => BASIC,
            Selection::All => ALL,
            Selection::Raw => raw,
            Selection::Main => MAIN,
            Selection::Tail => TAIL,
            Selection::Governor => GOVERNOR,
            Selection::Expert => EXPERT,
            Selection::MainSetup => MAIN_SETUP,
            Selection::TailSetup => TAIL_SETUP,
            Selection::GovernorSetup => GOVERNOR_SETUP,
            Selection::ReceiverSetup => RECEIVER_SETUP,
            Selection::Setup => SETUP,
        };
        table.to_vec()
    }
}
