mod parser;
mod writer;

pub use parser::{parse_line, parse_registers, read_bank};
pub use writer::{write_bank, write_registers};

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::is_derived;
use crate::RegisterId;

/// Value held by a register. Raw registers are always `Int`.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterValue {
    Int(i32),
    Float(f64),   // Derived ratios
    Text(String), // Derived version strings
}

impl fmt::Display for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterValue::Int(v) => write!(f, "{}", v),
            RegisterValue::Float(v) => write!(f, "{:?}", v),
            RegisterValue::Text(v) => f.write_str(v),
        }
    }
}

/// Register snapshot loaded from one .vbr file
#[derive(Debug, Clone)]
pub struct Bank {
    path: PathBuf,                                  // Originating file, also the write target
    registers: BTreeMap<RegisterId, RegisterValue>, // Raw and derived registers
}

impl Bank {
    pub fn new(path: impl Into<PathBuf>, registers: BTreeMap<RegisterId, RegisterValue>) -> Self {
        Bank {
            path: path.into(),
            registers,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without its directory, used as the column title
    pub fn name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.to_string_lossy().into_owned(),
        }
    }

    pub fn get(&self, id: RegisterId) -> Option<&RegisterValue> {
        self.registers.get(&id)
    }

    pub fn contains(&self, id: RegisterId) -> bool {
        self.registers.contains_key(&id)
    }

    pub fn set(&mut self, id: RegisterId, value: RegisterValue) {
        self.registers.insert(id, value);
    }

    pub fn registers(&self) -> &BTreeMap<RegisterId, RegisterValue> {
        &self.registers
    }

    /// Stored registers in ascending order, derived ones skipped
    pub fn raw_registers(&self) -> impl Iterator<Item = (RegisterId, &RegisterValue)> {
        self.registers
            .iter()
            .filter(|(id, _)| !is_derived(**id))
            .map(|(id, value)| (*id, value))
    }
}
