use crate::bank::{Bank, RegisterValue};
use crate::catalog::UNKNOWN;
use crate::constants::{derived, governor, receiver, servo, swash, tail};
use crate::RegisterId;

// Markers for values the decoders cannot interpret
pub const ABSENT: &str = "<absent>";
pub const INVALID: &str = "<invalid>";
pub const UNDEFINED: &str = "<undef>";

/// Kind of decoding applied to a register value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    Double,          // 2 * raw
    DoubleNegated,   // -2 * raw
    MainStyle,       // Main rotor style name
    MainStyleAdjust, // Style adjustment percentage
    CyclicThrow,     // Cyclic throw percentage
    YawRate,         // Tail yaw rate
    GovernorType,    // Governor mode name
    GovernorSpeed,   // Headspeed in rpm
    GovernorFlags,   // Digital / reversed output bits
    GovernorOutput,  // Governor output target
    GovernorChannel, // Governor input, -1 is internal
    GovernorGearing, // Gearing ratio with three decimals
    ServoFlags,      // Reverse bit and geometry
    SensorFlags,     // Reverse bit
    TailServoFlags,  // Input and rudder reverse bits
    Channel,         // 0-based receiver channel
    ReceiverType,    // Receiver protocol name
    ServoRate,       // Servo frame period in Hz
    ServoType,       // Servo centre pulse width
    YesNo,           // Boolean
}

/// Decoder registered for a register, if it has special semantics
pub fn decoder_for(id: RegisterId) -> Option<Decoder> {
    let decoder = match id {
        tail::TAIL_SERVO_LIMIT_1
        | tail::TAIL_SERVO_LIMIT_2
        | swash::ELEVATOR_AGILITY
        | swash::MAIN_GYRO_GAIN
        | swash::COLLECTIVE_AGILITY
        | swash::AILERON_AGILITY
        | governor::GOVERNOR_MAX_LIMIT => Decoder::Double,

        governor::GOVERNOR_PERCENT_LIMIT | governor::GOVERNOR_OFF_LIMIT => Decoder::DoubleNegated,

        swash::MAIN_STYLE_ADJUST => Decoder::MainStyleAdjust,
        swash::CYCLIC_THROW => Decoder::CyclicThrow,
        swash::MAIN_STYLE => Decoder::MainStyle,
        tail::TAIL_YAW_RATE => Decoder::YawRate,

        governor::GOVERNOR_SPEED => Decoder::GovernorSpeed,
        governor::GOVERNOR_TYPE => Decoder::GovernorType,
        governor::GOVERNOR_FLAGS => Decoder::GovernorFlags,
        governor::GOVERNOR_INPUT_CHANNEL | governor::GOVERNOR_PRESET_CHANNEL => {
            Decoder::GovernorChannel
        }

        servo::SERVO_1_FLAGS | servo::SERVO_2_FLAGS | servo::SERVO_3_FLAGS | servo::SERVO_4_FLAGS => {
            Decoder::ServoFlags
        }
        swash::PITCH_SENSOR_FLAGS | swash::ROLL_SENSOR_FLAGS | tail::TAIL_SENSOR_FLAGS => {
            Decoder::SensorFlags
        }
        tail::TAIL_SERVO_FLAGS => Decoder::TailServoFlags,

        receiver::COLLECTIVE_CHANNEL
        | receiver::AILERON_CHANNEL
        | receiver::ELEVATOR_CHANNEL
        | receiver::RUDDER_CHANNEL
        | receiver::THROTTLE_CHANNEL
        | receiver::GYRO_CHANNEL
        | receiver::AUX2_CHANNEL => Decoder::Channel,
        receiver::RECEIVER_TYPE => Decoder::ReceiverType,

        servo::MAIN_SERVO_RATE | tail::TAIL_SERVO_RATE => Decoder::ServoRate,
        tail::TAIL_SERVO_TYPE => Decoder::ServoType,

        swash::MAIN_OPTIMIZATION | tail::TAIL_OPTIMIZATION | governor::GOVERNOR_ESC_TEST => {
            Decoder::YesNo
        }

        derived::GOVERNOR_GEARING_RATIO => Decoder::GovernorGearing,
        derived::GOVERNOR_AUTOROT_BAILOUT | derived::GOVERNOR_BAILOUT_IDLE => Decoder::YesNo,
        derived::GOVERNOR_OUTPUT => Decoder::GovernorOutput,

        _ => return None,
    };
    Some(decoder)
}

impl Decoder {
    /// Renders a stored value. Returns `None` when the value's kind does not
    /// suit this decoder, in which case callers show the bare value.
    pub fn decode(&self, value: &RegisterValue) -> Option<String> {
        let text = match (self, value) {
            (Decoder::GovernorGearing, RegisterValue::Float(v)) => format_gov_gearing(*v),
            (Decoder::GovernorGearing, RegisterValue::Int(v)) => format_gov_gearing(f64::from(*v)),
            (_, RegisterValue::Int(v)) => self.decode_int(*v),
            _ => return None,
        };
        Some(text)
    }

    fn decode_int(&self, val: i32) -> String {
        match self {
            Decoder::Double => format_double(val),
            Decoder::DoubleNegated => format_double_neg(val),
            Decoder::MainStyle => format_main_style(val),
            Decoder::MainStyleAdjust => format_main_adj(val),
            Decoder::CyclicThrow => format_cyclic_throw(val),
            Decoder::YawRate => format_yaw_rate(val),
            Decoder::GovernorType => format_gov_type(val),
            Decoder::GovernorSpeed => format_gov_speed(val),
            Decoder::GovernorFlags => format_gov_flags(val),
            Decoder::GovernorOutput => format_gov_output(val),
            Decoder::GovernorChannel => format_gov_channel(val),
            Decoder::GovernorGearing => format_gov_gearing(f64::from(val)),
            Decoder::ServoFlags => format_servo_flags(val),
            Decoder::SensorFlags => format_sensor_flags(val),
            Decoder::TailServoFlags => format_tail_flags(val),
            Decoder::Channel => format_ch(val),
            Decoder::ReceiverType => format_receiver_type(val),
            Decoder::ServoRate => format_servo_rate(val),
            Decoder::ServoType => format_servo_type(val),
            Decoder::YesNo => format_yesno(val),
        }
    }
}

/// Table cell for a register in one bank: `decoded [raw]`, the bare raw
/// value when no decoder applies, or `<absent>`.
pub fn format_reg(bank: &Bank, id: RegisterId) -> String {
    let value = match bank.get(id) {
        Some(value) => value,
        None => return String::from(ABSENT),
    };
    match decoder_for(id).and_then(|decoder| decoder.decode(value)) {
        Some(decoded) => format!("{} [{}]", decoded, value),
        None => value.to_string(),
    }
}

// Direction sign for a flag bit
fn pm(set: bool) -> char {
    if set {
        '+'
    } else {
        '-'
    }
}

// Integer division rounding toward negative infinity
fn floor_div(num: i64, den: i64) -> i64 {
    num.div_euclid(den)
}

pub fn format_gov_type(val: i32) -> String {
    let label = match val {
        -1 => "disabled",
        2 => "expert/fixed/off",
        4 => "expert/collective-output",
        5 => "expert/throttle curve only",
        7 => "nitro",
        8 => "elec",
        10 => "expert/fixed/on",
        _ => UNDEFINED,
    };
    label.to_string()
}

pub fn format_gov_flags(val: i32) -> String {
    format!(
        "Digi{} Rev{}",
        pm(val & governor::FLAG_DIGITAL != 0),
        pm(val & governor::FLAG_REVERSED != 0)
    )
}

pub fn format_gov_output(val: i32) -> String {
    let label = match val {
        0 => "servo",
        1 => "ch4",
        2 => "esc",
        3 => "none",
        _ => INVALID,
    };
    label.to_string()
}

pub fn format_gov_speed(val: i32) -> String {
    format!("{}rpm", i64::from(val) * 50)
}

/// Governor channels accept `internal` (-1) and ch1..ch12
pub fn format_gov_channel(val: i32) -> String {
    match val {
        governor::CHANNEL_INTERNAL => String::from("internal"),
        0..=governor::CHANNEL_MAX => format!("ch{}", val + 1),
        _ => String::from(UNKNOWN),
    }
}

pub fn format_gov_gearing(val: f64) -> String {
    format!("{:.3}", val)
}

pub fn format_servo_flags(val: i32) -> String {
    format!("Rev{} Geo:{}", pm(val & 0x01 != 0), (val >> 1) & 0x0F)
}

pub fn format_sensor_flags(val: i32) -> String {
    format!("Rev{}", pm(val & 0x01 != 0))
}

pub fn format_tail_flags(val: i32) -> String {
    format!("RevIN{} RevRD{}", pm(val & 0x01 != 0), pm(val & 0x02 != 0))
}

pub fn format_receiver_type(val: i32) -> String {
    let label = match val {
        0 => "Separate PPM",
        1 => "Spektrum SAT",
        2 => "CPPM",
        6 => "SBUS",
        7 => "Spektrum HiRes",
        8 => "UDI",
        9 => "Spektrum Digital",
        10 => "Spektrum DSM-X 11ms",
        11 => "Spektrum DSM-X 22ms",
        _ => INVALID,
    };
    label.to_string()
}

/// Raw value is the frame period in milliseconds
pub fn format_servo_rate(val: i32) -> String {
    if val > 0 {
        format!("{}Hz", 1000 / val)
    } else {
        String::from(INVALID)
    }
}

pub fn format_servo_type(val: i32) -> String {
    let label = match val {
        0 => "1520us",
        1 => "760us",
        2 => "960us",
        _ => INVALID,
    };
    label.to_string()
}

pub fn format_main_style(val: i32) -> String {
    let label = match val {
        2 => "Vivid",
        3 => "Medium",
        4 => "Precise",
        5 => "Mechanical",
        _ => INVALID,
    };
    label.to_string()
}

pub fn format_cyclic_throw(val: i32) -> String {
    (59 + floor_div((i64::from(val) - 38) * 61, 39)).to_string()
}

pub fn format_yaw_rate(val: i32) -> String {
    (40 + floor_div((i64::from(val) - 19) * 81, 39)).to_string()
}

pub fn format_main_adj(val: i32) -> String {
    (120 - floor_div((i64::from(val) + 30) * 80, 70)).to_string()
}

pub fn format_yesno(val: i32) -> String {
    let label = if val != 0 { "Yes" } else { "No" };
    label.to_string()
}

pub fn format_double(val: i32) -> String {
    (2 * i64::from(val)).to_string()
}

pub fn format_double_neg(val: i32) -> String {
    (-2 * i64::from(val)).to_string()
}

pub fn format_ch(val: i32) -> String {
    format!("ch{}", i64::from(val) + 1)
}

#[cfg(test)]
mod decoder_tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_servo_rate_zero_is_invalid() {
        assert_eq!(format_servo_rate(0), INVALID);
        assert_eq!(format_servo_rate(-3), INVALID);
        assert_eq!(format_servo_rate(3), "333Hz");
        assert_eq!(format_servo_rate(20), "50Hz");
    }

    #[test]
    fn test_gov_channel_bounds() {
        assert_eq!(format_gov_channel(-1), "internal");
        assert_eq!(format_gov_channel(0), "ch1");
        assert_eq!(format_gov_channel(11), "ch12");
        assert_eq!(format_gov_channel(12), UNKNOWN);
        assert_eq!(format_gov_channel(-2), UNKNOWN);
    }

    #[test]
    fn test_scaling_uses_floor_division() {
        assert_eq!(format_cyclic_throw(38), "59");
        assert_eq!(format_cyclic_throw(77), "120");
        // (37 - 38) * 61 / 39 floors to -2
        assert_eq!(format_cyclic_throw(37), "57");
        assert_eq!(format_yaw_rate(19), "40");
        assert_eq!(format_yaw_rate(58), "121");
        assert_eq!(format_main_adj(10), "75");
        assert_eq!(format_main_adj(-30), "120");
        // (-31 + 30) * 80 / 70 floors to -2
        assert_eq!(format_main_adj(-31), "122");
    }

    #[test]
    fn test_flag_decoders() {
        assert_eq!(format_servo_flags(0x07), "Rev+ Geo:3");
        assert_eq!(format_servo_flags(0x00), "Rev- Geo:0");
        assert_eq!(format_sensor_flags(1), "Rev+");
        assert_eq!(format_tail_flags(0x02), "RevIN- RevRD+");
        assert_eq!(format_gov_flags(0x41), "Digi+ Rev+");
        assert_eq!(format_gov_flags(0x08), "Digi- Rev-");
    }

    #[test]
    fn test_enumerations() {
        assert_eq!(format_gov_type(8), "elec");
        assert_eq!(format_gov_type(-1), "disabled");
        assert_eq!(format_gov_type(3), UNDEFINED);
        assert_eq!(format_receiver_type(6), "SBUS");
        assert_eq!(format_receiver_type(3), INVALID);
        assert_eq!(format_servo_type(2), "960us");
        assert_eq!(format_servo_type(3), INVALID);
        assert_eq!(format_main_style(4), "Precise");
        assert_eq!(format_main_style(1), INVALID);
        assert_eq!(format_gov_output(2), "esc");
        assert_eq!(format_gov_output(4), INVALID);
    }

    #[test]
    fn test_simple_decoders() {
        assert_eq!(format_yesno(5), "Yes");
        assert_eq!(format_yesno(0), "No");
        assert_eq!(format_double(-7), "-14");
        assert_eq!(format_double_neg(7), "-14");
        assert_eq!(format_gov_speed(40), "2000rpm");
        assert_eq!(format_ch(3), "ch4");
        assert_eq!(format_gov_gearing(12.0051), "12.005");
    }

    #[test]
    fn test_format_reg_composition() {
        let mut registers = BTreeMap::new();
        registers.insert(80, RegisterValue::Int(8));
        registers.insert(999, RegisterValue::Int(17));
        registers.insert(1091, RegisterValue::Text("5.3.1".into()));
        registers.insert(2331, RegisterValue::Float(8.5));
        let bank = Bank::new("b.vbr", registers);

        assert_eq!(format_reg(&bank, 80), "elec [8]");
        assert_eq!(format_reg(&bank, 999), "17");
        assert_eq!(format_reg(&bank, 1091), "5.3.1");
        assert_eq!(format_reg(&bank, 2331), "8.500 [8.5]");
        assert_eq!(format_reg(&bank, 72), ABSENT);
    }

    #[test]
    fn test_decoder_rejects_text_values() {
        let value = RegisterValue::Text("1.2.3".into());
        assert_eq!(Decoder::Double.decode(&value), None);
    }
}
