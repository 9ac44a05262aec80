use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;

use log::{debug, info};

use crate::bank::{write_bank, Bank};
use crate::catalog::{describe, display_id, is_derived};
use crate::decoder::format_reg;
use crate::derive::derive;
use crate::error::Result;
use crate::RegisterId;

/// Top-level action performed on the loaded banks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Print,         // Show every selected register
    Diff,          // Show registers that differ between banks
    Copy(PathBuf), // Copy selected registers from this file into every bank
}

/// Union of the register IDs seen in every loaded bank, ascending
pub fn raw_selection<'a, I>(seen: I) -> Vec<RegisterId>
where
    I: IntoIterator<Item = &'a BTreeSet<RegisterId>>,
{
    let union: BTreeSet<RegisterId> = seen.into_iter().flatten().copied().collect();
    union.into_iter().collect()
}

/// Column header with the bank file names and an `=` underline
fn write_names<W: Write>(out: &mut W, banks: &[Bank]) -> io::Result<()> {
    let mut line = format!("      {:<30}", "Input files");
    for bank in banks {
        line.push_str(&format!(" {:<20}", bank.name()));
    }
    writeln!(out, "{}", line)?;
    writeln!(out, "{}", "=".repeat(line.len()))
}

/// One table row: register number, name and a cell per bank
fn write_row<W: Write>(out: &mut W, banks: &[Bank], id: RegisterId) -> io::Result<()> {
    let mut line = format!("[{:>3}] {:<30}", display_id(id), describe(id));
    for bank in banks {
        line.push_str(&format!(" {:<20}", format_reg(bank, id)));
    }
    writeln!(out, "{}", line)
}

/// True when the stored values of a register are not all equal.
/// Banks without the register are not compared.
pub fn differs(banks: &[Bank], id: RegisterId) -> bool {
    let mut present = banks.iter().filter_map(|bank| bank.get(id));
    match present.next() {
        Some(reference) => present.any(|value| value != reference),
        None => false,
    }
}

/// Prints every selected register for every bank
pub fn print_registers<W: Write>(out: &mut W, banks: &[Bank], regs: &[RegisterId]) -> io::Result<()> {
    write_names(out, banks)?;
    for id in regs {
        write_row(out, banks, *id)?;
    }
    Ok(())
}

/// Prints only the selected registers whose values differ between banks
pub fn diff_registers<W: Write>(out: &mut W, banks: &[Bank], regs: &[RegisterId]) -> io::Result<()> {
    write_names(out, banks)?;
    for id in regs {
        if differs(banks, *id) {
            write_row(out, banks, *id)?;
        }
    }
    Ok(())
}

/// Copies the selected registers held by `source` into every bank in memory.
///
/// Derived registers are skipped; they are recomputed from the copied raw
/// registers afterwards. Returns the number of registers copied.
pub fn copy_registers(source: &Bank, banks: &mut [Bank], regs: &[RegisterId]) -> Result<usize> {
    let mut copied = 0;
    for id in regs.iter().copied().filter(|id| !is_derived(*id)) {
        if let Some(value) = source.get(id) {
            for bank in banks.iter_mut() {
                bank.set(id, value.clone());
            }
            copied += 1;
        } else {
            debug!("{}: register {} not in source", source.name(), id);
        }
    }
    for bank in banks.iter_mut() {
        derive(bank)?;
    }
    info!("Copied {} registers from {}", copied, source.name());
    Ok(copied)
}

/// Writes every bank back to its file, in order. Earlier files stay
/// written if a later one fails.
pub fn write_banks(banks: &[Bank]) -> Result<()> {
    for bank in banks {
        write_bank(bank)?;
    }
    Ok(())
}

#[cfg(test)]
mod ops_tests {
    use super::*;
    use crate::bank::RegisterValue;
    use std::collections::BTreeMap;

    fn bank(name: &str, values: &[(RegisterId, i32)]) -> Bank {
        let registers: BTreeMap<_, _> = values
            .iter()
            .map(|(id, v)| (*id, RegisterValue::Int(*v)))
            .collect();
        Bank::new(name, registers)
    }

    fn render(banks: &[Bank], regs: &[RegisterId], diff: bool) -> Vec<String> {
        let mut out = Vec::new();
        if diff {
            diff_registers(&mut out, banks, regs).unwrap();
        } else {
            print_registers(&mut out, banks, regs).unwrap();
        }
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_header_layout() {
        let banks = [bank("dir/a.vbr", &[]), bank("b.vbr", &[])];
        let lines = render(&banks, &[], false);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!("      {:<30} {:<20} {:<20}", "Input files", "a.vbr", "b.vbr")
        );
        assert_eq!(lines[1], "=".repeat(lines[0].len()));
    }

    #[test]
    fn test_print_row_layout() {
        let banks = [bank("a.vbr", &[(80, 8), (999, 4)])];
        let lines = render(&banks, &[80, 999, 72], false);
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[2],
            format!("[ 80] {:<30} {:<20}", "Governor type", "elec [8]")
        );
        assert_eq!(lines[3], format!("[999] {:<30} {:<20}", "<unknown>", "4"));
        assert_eq!(
            lines[4],
            format!("[ 72] {:<30} {:<20}", "Main Rotor Style", "<absent>")
        );
    }

    #[test]
    fn test_diff_ignores_absent_banks() {
        let banks = [
            bank("a.vbr", &[(41, 10)]),
            bank("b.vbr", &[]),
            bank("c.vbr", &[(41, 10)]),
        ];
        assert!(!differs(&banks, 41));
        assert!(!differs(&banks, 72));

        let banks = [bank("a.vbr", &[]), bank("b.vbr", &[(41, 10)]), bank("c.vbr", &[(41, 12)])];
        assert!(differs(&banks, 41));
    }

    #[test]
    fn test_diff_prints_only_differing_rows() {
        let banks = [bank("a.vbr", &[(72, 4), (41, 10)]), bank("b.vbr", &[(72, 4), (41, 12)])];
        let lines = render(&banks, &[72, 41], true);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("[ 41] Main Rotor Style Adjust"));
    }

    #[test]
    fn test_copy_skips_registers_missing_from_source() {
        let source = bank("src.vbr", &[(109, 0x53), (499, 1), (80, 8)]);
        let mut banks = [
            bank("a.vbr", &[(109, 0x52), (499, 0), (80, 2), (70, 40)]),
            bank("b.vbr", &[(109, 0x52), (499, 0), (80, -1)]),
        ];
        let copied = copy_registers(&source, &mut banks, &[80, 70, 1091]).unwrap();
        assert_eq!(copied, 1);
        assert_eq!(banks[0].get(80), Some(&RegisterValue::Int(8)));
        assert_eq!(banks[1].get(80), Some(&RegisterValue::Int(8)));
        assert_eq!(banks[0].get(70), Some(&RegisterValue::Int(40)));
        assert!(!banks[1].contains(70));
        // Derived version follows the target's own raw registers
        assert_eq!(banks[0].get(1091), Some(&RegisterValue::Text("5.2.0".into())));
    }

    #[test]
    fn test_raw_selection_is_sorted_union() {
        let a: BTreeSet<_> = [50, 5].iter().copied().collect();
        let b: BTreeSet<_> = [999, 5].iter().copied().collect();
        assert_eq!(raw_selection(vec![&a, &b]), vec![5, 50, 999]);
    }
}
