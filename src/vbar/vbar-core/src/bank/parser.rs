use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use log::{debug, warn};

use super::{Bank, RegisterValue};
use crate::derive::derive;
use crate::error::{Error, Result};
use crate::RegisterId;

const TAG_OPEN: &str = "<VALUE Register=\"";
const TAG_VALUE: &str = "\" Value=\"";
const TAG_CLOSE: &str = "\"/>";

/// Splits a leading `-?[0-9]+` off the input
fn take_integer(input: &str) -> Option<(&str, &str)> {
    let sign_len = if input.starts_with('-') { 1 } else { 0 };
    let digits = input[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    Some(input.split_at(sign_len + digits))
}

/// Matches one `<VALUE Register="R" Value="V"/>` tag at a given offset
fn match_tag(candidate: &str) -> Option<(&str, &str)> {
    let rest = candidate.strip_prefix(TAG_OPEN)?;
    let (register, rest) = take_integer(rest)?;
    let rest = rest.strip_prefix(TAG_VALUE)?;
    let (value, rest) = take_integer(rest)?;
    rest.strip_prefix(TAG_CLOSE)?;
    Some((register, value))
}

/// Extracts the register and value from the first tag on a line.
///
/// Lines without a well formed tag, or whose numbers do not fit a 32-bit
/// register, yield `None`.
pub fn parse_line(line: &str) -> Option<(RegisterId, i32)> {
    let (register, value) = line
        .match_indices(TAG_OPEN)
        .find_map(|(idx, _)| match_tag(&line[idx..]))?;

    match (register.parse::<RegisterId>(), value.parse::<i32>()) {
        (Ok(register), Ok(value)) => Some((register, value)),
        _ => {
            warn!("Skipping out of range register tag: {}", line.trim());
            None
        }
    }
}

/// Parses bank file contents into a register map. Later tags for the same
/// register overwrite earlier ones.
pub fn parse_registers(contents: &str) -> BTreeMap<RegisterId, RegisterValue> {
    contents
        .lines()
        .filter_map(parse_line)
        .map(|(register, value)| (register, RegisterValue::Int(value)))
        .collect()
}

/// Loads a bank file and derives its synthetic registers.
///
/// Also returns the set of register IDs stored in the file, which the
/// caller merges across banks to build the raw selection.
pub fn read_bank<P: AsRef<Path>>(path: P) -> Result<(Bank, BTreeSet<RegisterId>)> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let registers = parse_registers(&contents);
    let seen: BTreeSet<RegisterId> = registers.keys().copied().collect();
    debug!("{}: {} registers", path.display(), seen.len());

    let mut bank = Bank::new(path, registers);
    derive(&mut bank)?;
    Ok((bank, seen))
}
