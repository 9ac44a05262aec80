// Register IDs at or above this value are synthetic and never stored in a bank file
pub const DERIVED_BASE: i32 = 1000;

pub mod servo {
    // Swash servo geometry and trims
    pub const SERVO_1_SUBTRIM: i32 = 0;
    pub const SERVO_2_SUBTRIM: i32 = 1;
    pub const SERVO_3_SUBTRIM: i32 = 2;
    pub const SERVO_4_SUBTRIM: i32 = 3;

    pub const SERVO_1_FLAGS: i32 = 200;
    pub const SERVO_2_FLAGS: i32 = 201;
    pub const SERVO_3_FLAGS: i32 = 202;
    pub const SERVO_4_FLAGS: i32 = 203;

    pub const MAIN_SERVO_RATE: i32 = 221;
}

pub mod swash {
    // Main rotor expert parameters
    pub const ELEVATOR_AGILITY: i32 = 30;
    pub const MAIN_GYRO_GAIN: i32 = 33;
    pub const COLLECTIVE_AGILITY: i32 = 35;
    pub const AILERON_AGILITY: i32 = 40;
    pub const MAIN_STYLE_ADJUST: i32 = 41;
    pub const CYCLIC_THROW: i32 = 52;
    pub const MAIN_STYLE: i32 = 72;
    pub const MAIN_OPTIMIZATION: i32 = 228;

    // Sensor direction flags
    pub const PITCH_SENSOR_FLAGS: i32 = 204;
    pub const ROLL_SENSOR_FLAGS: i32 = 205;
}

pub mod tail {
    pub const TAIL_SERVO_LIMIT_1: i32 = 7;
    pub const TAIL_SERVO_LIMIT_2: i32 = 8;
    pub const TAIL_YAW_RATE: i32 = 79;

    pub const TAIL_SERVO_FLAGS: i32 = 206;
    pub const TAIL_SENSOR_FLAGS: i32 = 207;
    pub const TAIL_SERVO_RATE: i32 = 222;
    pub const TAIL_SERVO_TYPE: i32 = 223;
    pub const TAIL_OPTIMIZATION: i32 = 229;
}

pub mod governor {
    pub const GOVERNOR_SPEED: i32 = 70;
    pub const GOVERNOR_TYPE: i32 = 80;
    pub const GOVERNOR_PERCENT_LIMIT: i32 = 89;

    pub const GOVERNOR_OFF_LIMIT: i32 = 231;
    pub const GOVERNOR_MAX_LIMIT: i32 = 232;
    pub const GOVERNOR_GEARING_INTEGER: i32 = 233; // Ratio in tenths
    pub const GOVERNOR_FLAGS: i32 = 234;
    pub const GOVERNOR_GEARING_FRACTION: i32 = 235; // Ratio in thousandths
    pub const GOVERNOR_INPUT_CHANNEL: i32 = 236;
    pub const GOVERNOR_PRESET_CHANNEL: i32 = 239;
    pub const GOVERNOR_ESC_TEST: i32 = 241;

    // Bits of GOVERNOR_FLAGS
    pub const FLAG_REVERSED: i32 = 0x01;
    pub const FLAG_OUTPUT_MASK: i32 = 0x06;
    pub const FLAG_OUTPUT_SHIFT: u32 = 1;
    pub const FLAG_AUTOROT_BAILOUT: i32 = 0x08;
    pub const FLAG_AUTOROT_BAILOUT_SHIFT: u32 = 3;
    pub const FLAG_BAILOUT_IDLE: i32 = 0x20;
    pub const FLAG_BAILOUT_IDLE_SHIFT: u32 = 5;
    pub const FLAG_DIGITAL: i32 = 0x40;

    // Highest 0-based channel index a governor input may use
    pub const CHANNEL_MAX: i32 = 11;
    pub const CHANNEL_INTERNAL: i32 = -1;
}

pub mod receiver {
    pub const COLLECTIVE_CHANNEL: i32 = 210;
    pub const AILERON_CHANNEL: i32 = 211;
    pub const ELEVATOR_CHANNEL: i32 = 212;
    pub const RUDDER_CHANNEL: i32 = 213;
    pub const THROTTLE_CHANNEL: i32 = 214;
    pub const GYRO_CHANNEL: i32 = 215;
    pub const AUX2_CHANNEL: i32 = 216;
    pub const RECEIVER_TYPE: i32 = 219;
}

pub mod firmware {
    // Major version in the high nibble, minor in the low nibble
    pub const FIRMWARE_VERSION: i32 = 109;
    pub const FIRMWARE_PATCH_LEVEL: i32 = 499;
}

pub mod derived {
    pub const FIRMWARE_FULL_VERSION: i32 = 1091;
    pub const GOVERNOR_GEARING_RATIO: i32 = 2331;
    pub const GOVERNOR_AUTOROT_BAILOUT: i32 = 2341;
    pub const GOVERNOR_BAILOUT_IDLE: i32 = 2342;
    pub const GOVERNOR_OUTPUT: i32 = 2343;
}
