use log::debug;

use crate::bank::{Bank, RegisterValue};
use crate::constants::{derived, firmware, governor};
use crate::error::{Error, Result};
use crate::RegisterId;

fn missing(bank: &Bank, id: RegisterId) -> Error {
    Error::IncompleteBank {
        path: bank.path().to_path_buf(),
        register: id,
    }
}

fn input(bank: &Bank, id: RegisterId) -> Option<i32> {
    match bank.get(id) {
        Some(RegisterValue::Int(v)) => Some(*v),
        _ => None,
    }
}

/// Fetches two registers that only make sense together. Neither being
/// present is fine; only one of them means the bank is malformed.
fn input_pair(bank: &Bank, first: RegisterId, second: RegisterId) -> Result<Option<(i32, i32)>> {
    match (input(bank, first), input(bank, second)) {
        (Some(a), Some(b)) => Ok(Some((a, b))),
        (None, None) => Ok(None),
        (None, Some(_)) => Err(missing(bank, first)),
        (Some(_), None) => Err(missing(bank, second)),
    }
}

/// Computes the synthetic registers from the raw ones.
///
/// Each derived register is produced when its inputs are in the bank. An
/// input pair with one half missing is rejected, and every input is
/// fetched before anything is inserted, so a rejected bank is left
/// untouched.
pub fn derive(bank: &mut Bank) -> Result<()> {
    let version = input_pair(
        bank,
        firmware::FIRMWARE_VERSION,
        firmware::FIRMWARE_PATCH_LEVEL,
    )?;
    let gearing = input_pair(
        bank,
        governor::GOVERNOR_GEARING_INTEGER,
        governor::GOVERNOR_GEARING_FRACTION,
    )?;
    let flags = input(bank, governor::GOVERNOR_FLAGS);

    match version {
        Some((version, patch)) => {
            // Major and minor are packed as nibbles
            let full = format!("{}.{}.{}", (version >> 4) & 0x0F, version & 0x0F, patch);
            debug!("{}: firmware {}", bank.name(), full);
            bank.set(derived::FIRMWARE_FULL_VERSION, RegisterValue::Text(full));
        }
        None => debug!("{}: no firmware version registers", bank.name()),
    }

    if let Some((int, frac)) = gearing {
        let ratio = 0.1 * f64::from(int) + 0.001 * f64::from(frac);
        bank.set(derived::GOVERNOR_GEARING_RATIO, RegisterValue::Float(ratio));
    }

    if let Some(flags) = flags {
        let bailout =
            (flags & governor::FLAG_AUTOROT_BAILOUT) >> governor::FLAG_AUTOROT_BAILOUT_SHIFT;
        let bailout_idle =
            (flags & governor::FLAG_BAILOUT_IDLE) >> governor::FLAG_BAILOUT_IDLE_SHIFT;
        let output = (flags & governor::FLAG_OUTPUT_MASK) >> governor::FLAG_OUTPUT_SHIFT;

        bank.set(derived::GOVERNOR_AUTOROT_BAILOUT, RegisterValue::Int(bailout));
        bank.set(derived::GOVERNOR_BAILOUT_IDLE, RegisterValue::Int(bailout_idle));
        bank.set(derived::GOVERNOR_OUTPUT, RegisterValue::Int(output));
    }
    Ok(())
}

#[cfg(test)]
mod derive_tests {
    use super::*;
    use std::collections::BTreeMap;

    fn bank_with(values: &[(RegisterId, i32)]) -> Bank {
        let registers: BTreeMap<_, _> = values
            .iter()
            .map(|(id, v)| (*id, RegisterValue::Int(*v)))
            .collect();
        Bank::new("test.vbr", registers)
    }

    #[test]
    fn test_full_derivation() {
        let mut bank = bank_with(&[(109, 0x53), (499, 1), (233, 120), (235, 5), (234, 0x2A)]);
        derive(&mut bank).unwrap();

        assert_eq!(bank.get(1091), Some(&RegisterValue::Text("5.3.1".into())));
        match bank.get(2331) {
            Some(RegisterValue::Float(v)) => assert!((v - 12.005).abs() < 1e-9),
            other => panic!("unexpected gearing {:?}", other),
        }
        assert_eq!(bank.get(2341), Some(&RegisterValue::Int(1)));
        assert_eq!(bank.get(2342), Some(&RegisterValue::Int(1)));
        assert_eq!(bank.get(2343), Some(&RegisterValue::Int(1)));
    }

    #[test]
    fn test_flag_bits_clear() {
        let mut bank = bank_with(&[(109, 0x12), (499, 3), (233, 0), (235, 0), (234, 0x06)]);
        derive(&mut bank).unwrap();
        assert_eq!(bank.get(2341), Some(&RegisterValue::Int(0)));
        assert_eq!(bank.get(2342), Some(&RegisterValue::Int(0)));
        assert_eq!(bank.get(2343), Some(&RegisterValue::Int(3)));
    }

    #[test]
    fn test_version_only_bank() {
        let mut bank = bank_with(&[(109, 18), (499, 3)]);
        derive(&mut bank).unwrap();
        assert_eq!(bank.get(1091), Some(&RegisterValue::Text("1.2.3".into())));
        assert!(!bank.contains(2331));
        assert!(!bank.contains(2343));
    }

    #[test]
    fn test_bank_without_inputs_derives_nothing() {
        let mut bank = bank_with(&[(5, 1), (50, 2), (999, 3)]);
        derive(&mut bank).unwrap();
        assert_eq!(bank.registers().len(), 3);
    }

    #[test]
    fn test_missing_patch_level_fails() {
        let mut bank = bank_with(&[(109, 0x12), (233, 120), (235, 5), (234, 0)]);
        match derive(&mut bank) {
            Err(Error::IncompleteBank { register, .. }) => assert_eq!(register, 499),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(!bank.contains(2331));
    }

    #[test]
    fn test_half_gearing_fails_without_partial_insert() {
        let mut bank = bank_with(&[(109, 0x12), (499, 3), (233, 120)]);
        match derive(&mut bank) {
            Err(Error::IncompleteBank { register, .. }) => assert_eq!(register, 235),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(!bank.contains(1091));
    }
}
