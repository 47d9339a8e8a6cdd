//! Host-side mocks of the HAL traits
//!
//! Only compiled for tests.

use core::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use embedded_hal::delay::DelayNs;
use joystep_hal::{AdcError, AnalogInput, FlashError, FlashStorage, InputPin, OutputPin, StorageKey};

/// Analog channel replaying a script, then repeating a fallback
pub struct MockAdc {
    script: VecDeque<Result<u16, AdcError>>,
    fallback: Result<u16, AdcError>,
    pub reads: u32,
}

impl MockAdc {
    pub fn constant(value: u16) -> Self {
        Self {
            script: VecDeque::new(),
            fallback: Ok(value),
            reads: 0,
        }
    }

    pub fn failing() -> Self {
        Self {
            script: VecDeque::new(),
            fallback: Err(AdcError::Conversion),
            reads: 0,
        }
    }

    /// Replay `values`, then keep returning the last one
    pub fn scripted(values: &[u16]) -> Self {
        Self {
            script: values.iter().map(|&v| Ok(v)).collect(),
            fallback: Ok(values.last().copied().unwrap_or(0)),
            reads: 0,
        }
    }
}

impl AnalogInput for MockAdc {
    fn read_u16(&mut self) -> Result<u16, AdcError> {
        self.reads += 1;
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

/// Push button replaying a script of levels (`true` = high = released)
pub struct MockButton {
    levels: RefCell<VecDeque<bool>>,
    fallback: bool,
}

impl MockButton {
    pub fn released() -> Self {
        Self {
            levels: RefCell::new(VecDeque::new()),
            fallback: true,
        }
    }

    pub fn pressed() -> Self {
        Self {
            levels: RefCell::new(VecDeque::new()),
            fallback: false,
        }
    }

    /// Stay released for `n` polls then read pressed once, per phase
    ///
    /// Reads pressed once the script runs out.
    pub fn phases(released_polls: &[usize]) -> Self {
        let mut levels = VecDeque::new();
        for &n in released_polls {
            levels.extend(core::iter::repeat(true).take(n));
            levels.push_back(false);
        }
        Self {
            levels: RefCell::new(levels),
            fallback: false,
        }
    }
}

impl InputPin for MockButton {
    fn is_high(&self) -> bool {
        self.levels.borrow_mut().pop_front().unwrap_or(self.fallback)
    }
}

/// Output pin remembering its level and counting writes
#[derive(Default)]
pub struct MockPin {
    pub high: bool,
    pub writes: u32,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.writes += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.writes += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Delay that only accumulates requested time
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: u32,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.total_ns += us as u64 * 1_000;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += ms as u64 * 1_000_000;
        self.calls += 1;
    }
}

/// In-memory key-value storage with optional failure injection
#[derive(Default)]
pub struct MockStorage {
    pub items: HashMap<u8, Vec<u8>>,
    pub fail_with: Option<FlashError>,
}

impl FlashStorage for MockStorage {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        let data = self.items.get(&key.as_u8()).ok_or(FlashError::NotFound)?;
        if buffer.len() < data.len() {
            return Err(FlashError::BufferTooSmall);
        }
        buffer[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        self.items.insert(key.as_u8(), data.to_vec());
        Ok(())
    }
}
