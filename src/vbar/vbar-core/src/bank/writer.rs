use std::fs::File;
use std::io::{BufWriter, Write};

use log::info;

use super::Bank;
use crate::error::{Error, Result};

/// Serializes the stored registers of a bank in ascending order.
/// Derived registers are never written.
pub fn write_registers<W: Write>(out: &mut W, bank: &Bank) -> std::io::Result<()> {
    writeln!(out, "<REGISTER>")?;
    for (register, value) in bank.raw_registers() {
        writeln!(out, "    <VALUE Register=\"{}\" Value=\"{}\"/>", register, value)?;
    }
    writeln!(out, "</REGISTER>")?;
    Ok(())
}

/// Overwrites the bank's originating file
pub fn write_bank(bank: &Bank) -> Result<()> {
    let path = bank.path();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_registers(&mut out, bank)
        .and_then(|_| out.flush())
        .map_err(|e| Error::io(path, e))?;
    info!("Wrote {}", path.display());
    Ok(())
}
