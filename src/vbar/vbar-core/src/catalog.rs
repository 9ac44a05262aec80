use crate::constants::DERIVED_BASE;
use crate::RegisterId;

/// Name shown for registers missing from the catalog
pub const UNKNOWN: &str = "<unknown>";

/// Human readable register name, or `<unknown>`.
///
/// Labels marked `(?)` are guesses about the flight controller's meaning
/// of that register and are shown as such.
pub fn describe(id: RegisterId) -> &'static str {
    match id {
        0 => "Servo #1 subtrim",
        1 => "Servo #2 subtrim",
        2 => "Servo #3 subtrim",
        3 => "Servo #4 subtrim",
        5 => "Tail servo subtrim",
        6 => "Tail Optimization #2",
        7 => "Tail servo limit #1",
        8 => "Tail servo limit #2",
        10 => "Tail Rotor Stop Gain A",
        11 => "Tail Rotor Stop Gain B",
        16 => "Servo #1 collective mix",
        17 => "Servo #2 collective mix",
        18 => "Servo #3 collective mix",
        19 => "Servo #4 collective mix",
        20 => "Servo #1 coord X",
        21 => "Servo #1 coord Y",
        22 => "Servo #2 coord X",
        23 => "Servo #2 coord Y",
        24 => "Servo #3 coord X",
        25 => "Servo #3 coord Y",
        26 => "Servo #4 coord X",
        27 => "Servo #4 coord Y",
        28 => "Tail Rotor acceleration",
        30 => "Elevator agility",
        33 => "Main Roto Gyro Gain",
        35 => "Collective agility (?)",
        36 => "Elevator subtrim @max",
        37 => "Aileron subtrim @max",
        38 => "Elevator subtrim @min",
        39 => "Aileron subtrim @min",
        40 => "Aileron agility",
        41 => "Main Rotor Style Adjust",
        45 => "Governor I-gain",
        46 => "Main Rotor expo",
        47 => "Tail Rotor expo",
        48 => "Cyclic ring",
        50 => "Tail Rotor Master Gain",
        51 => "Tail Rotor I-gain",
        52 => "Cyclic throw",
        53 => "Elevator precomp",
        54 => "Tail Collective precomp",
        55 => "Tail Collective zeroing",
        56 => "Tail Cyclic precomp",
        57 => "Microheli (?)",
        58 => "Tail Optimisation #1",
        59 => "Tail Rotor P-gain",
        68 => "Paddle simulator",
        69 => "Pitch pump gain (D)",
        70 => "Governor speed",
        71 => "Governor gain",
        72 => "Main Rotor Style",
        75 => "Tail Rotor deadband",
        77 => "Main Rotor deadband",
        79 => "Tail Rotor yaw rate",
        80 => "Governor type",
        82 => "Tail Rotor I-decay",
        83 => "Throttle curve @ -100%",
        84 => "Throttle curve @ -50%",
        85 => "Throttle curve @ 0%",
        86 => "Throttle curve @ 50%",
        87 => "Throttle curve @ 100%",
        88 => "Governor P-limit",
        89 => "Governor %-limit",
        90 => "Governor D-gain",
        91 => "Governor collective reduce",
        92 => "Governor cyclic add",
        93 => "Governor runup speed limit",
        94 => "Governor collective dynamic",

        109 => "Firmware version",
        141 => "Bank",

        200 => "Servo #1 flags",
        201 => "Servo #2 flags",
        202 => "Servo #3 flags",
        203 => "Servo #4 flags",
        204 => "Pitch sensor flags",
        205 => "Roll sensor flags",
        206 => "Tail servo flags",
        207 => "Tail sensor flags",

        210 => "Collective Input Ch",
        211 => "Aileron Input Ch",
        212 => "Elevator Input Ch",
        213 => "Rudder Input Ch",
        214 => "Throttle Input Ch",
        215 => "AUX/Gyro Input Ch",
        216 => "AUX2 Input Ch",

        219 => "Receiver type",
        221 => "Main servo rate",
        222 => "Tail servo rate",
        223 => "Tail servo type",
        224 => "Tail ???",

        228 => "Main Rotor Optimization",
        229 => "Tail Rotor Optimization",

        231 => "Governor off limit",
        232 => "Governor max limit",
        233 => "Governor Gearing ratio xx.x00",
        234 => "Governor flags",
        235 => "Governor Gearing ratio 00.0xx",
        236 => "Governor Input Ch",
        239 => "Governor Preset Ch",
        240 => "Governor RPM Sensor mult",
        241 => "Governor ESC test mode",

        499 => "Firmware patch level",

        // Synthetic registers
        1091 => "Firmware full version",
        2331 => "Governor Gearing ratio",
        2341 => "Governor Autorot Bailout",
        2342 => "Governor Idle during Bailout",
        2343 => "Governor Output Ch",

        _ => UNKNOWN,
    }
}

/// True for registers computed in memory rather than read from a bank file
pub fn is_derived(id: RegisterId) -> bool {
    id >= DERIVED_BASE
}

/// Register number as shown in the first table column
pub fn display_id(id: RegisterId) -> String {
    if is_derived(id) {
        String::from(" * ")
    } else {
        id.to_string()
    }
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_names() {
        assert_eq!(describe(72), "Main Rotor Style");
        assert_eq!(describe(2343), "Governor Output Ch");
        assert_eq!(describe(999), UNKNOWN);
        assert_eq!(describe(-4), UNKNOWN);
    }

    #[test]
    fn test_display_id() {
        assert_eq!(display_id(0), "0");
        assert_eq!(display_id(999), "999");
        assert_eq!(display_id(1000), " * ");
        assert_eq!(display_id(2331), " * ");
    }
}
