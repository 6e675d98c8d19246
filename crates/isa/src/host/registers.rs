//! Reference General-Purpose Register File.
//!
//! 32 signed 32-bit registers. Register `$zero` is hardwired: reads return 0 and
//! writes are ignored.

use crate::common::constants::NUM_REGS;
use crate::host::RegisterFile;
use crate::isa::abi;

/// General-purpose register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    regs: [i32; NUM_REGS],
}

impl Registers {
    /// Creates a register file with every register zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all registers.
    pub const fn snapshot(&self) -> [i32; NUM_REGS] {
        self.regs
    }

    /// Dumps all registers to stdout, four per line.
    pub fn dump(&self) {
        for row in (0..NUM_REGS).step_by(4) {
            let line: Vec<String> = (row..row + 4)
                .map(|i| format!("${:<4}={:#010x}", abi::name(i), self.regs[i]))
                .collect();
            println!("{}", line.join(" "));
        }
    }
}

impl RegisterFile for Registers {
    fn get(&self, idx: usize) -> i32 {
        if idx == abi::REG_ZERO {
            0
        } else {
            self.regs[idx]
        }
    }

    fn set(&mut self, idx: usize, val: i32) {
        if idx != abi::REG_ZERO {
            self.regs[idx] = val;
        }
    }
}
