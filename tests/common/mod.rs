//! Test doubles for the register transport and delay.
#![allow(dead_code)]

use std::collections::VecDeque;

use ads1115_hal::{RegisterTransport, TransportError};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::ErrorKind;

/// A register access seen by the stub transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read { address: u8, pointer: u8 },
    Write { address: u8, pointer: u8, value: u16 },
}

/// Transport that records every access and answers reads from a queue.
#[derive(Debug, Default)]
pub struct StubTransport {
    pub accesses: Vec<Access>,
    pub reads: VecDeque<u16>,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

impl StubTransport {
    pub fn with_reads(reads: &[u16]) -> Self {
        Self {
            reads: reads.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<u16> {
        self.accesses
            .iter()
            .filter_map(|a| match a {
                Access::Write { value, .. } => Some(*value),
                Access::Read { .. } => None,
            })
            .collect()
    }
}

impl RegisterTransport for StubTransport {
    fn read16(&mut self, address: u8, pointer: u8) -> Result<u16, TransportError> {
        self.accesses.push(Access::Read { address, pointer });
        if self.fail_reads {
            return Err(TransportError::DeviceUnreachable {
                address,
                kind: ErrorKind::Other,
            });
        }
        Ok(self.reads.pop_front().expect("Unexpected register read."))
    }

    fn write16(&mut self, address: u8, pointer: u8, value: u16) -> Result<(), TransportError> {
        self.accesses.push(Access::Write {
            address,
            pointer,
            value,
        });
        if self.fail_writes {
            return Err(TransportError::DeviceUnreachable {
                address,
                kind: ErrorKind::Other,
            });
        }
        Ok(())
    }
}

/// Delay that records the requested waits instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits_ns: Vec<u64>,
}

impl RecordingDelay {
    pub fn total_us(&self) -> u64 {
        self.waits_ns.iter().sum::<u64>() / 1_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(ns.into());
    }

    fn delay_us(&mut self, us: u32) {
        self.waits_ns.push(u64::from(us) * 1_000);
    }
}
