//! System interconnect (bus) for physical memory and MMIO access.
//!
//! This module implements the bus that routes physical address accesses to devices. It provides:
//! 1. **Device registration:** Devices are added by address range and sorted for lookup.
//! 2. **Access routing:** Read/write by address with a last-device hint for throughput.
//! 3. **Image loading:** Writing a binary blob into whatever device claims an address.

use tracing::warn;

use super::traits::{Device, PhysicalBus};

/// System bus connecting CPU cores and devices; routes accesses by physical address.
#[derive(Default)]
pub struct Bus {
    devices: Vec<Box<dyn Device>>,
    last_device_idx: usize,
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field(
                "devices",
                &self
                    .devices
                    .iter()
                    .map(|d| (d.name().to_owned(), d.address_range()))
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

/// Returns `true` if `paddr` lies inside `[start, start + size)`.
const fn contains(start: u32, size: u32, paddr: u32) -> bool {
    paddr >= start && (paddr - start) < size
}

impl Bus {
    /// Creates an empty bus; add devices with `add_device`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a device on the bus; devices are sorted by base address for lookup.
    pub fn add_device(&mut self, dev: Box<dyn Device>) {
        self.devices.push(dev);
        self.devices.sort_by_key(|d| d.address_range().0);
        self.last_device_idx = 0;
    }

    /// Returns the number of registered devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Writes a binary blob into memory at the given physical address.
    ///
    /// If a device claims the whole range, writes via that device; otherwise falls back
    /// to byte-by-byte writes (bytes outside every device are dropped).
    pub fn load_binary_at(&mut self, data: &[u8], addr: u32) {
        let len = u32::try_from(data.len()).unwrap_or(u32::MAX);
        if self.is_backed(addr, len) {
            if let Some((dev, offset)) = self.find_device(addr) {
                dev.write_bytes(offset, data);
                return;
            }
        }
        for (i, byte) in data.iter().enumerate() {
            PhysicalBus::write_u8(self, addr.wrapping_add(i as u32), *byte);
        }
    }

    fn find_device(&mut self, paddr: u32) -> Option<(&mut Box<dyn Device>, u32)> {
        if self.last_device_idx < self.devices.len() {
            let (start, size) = self.devices[self.last_device_idx].address_range();
            if contains(start, size, paddr) {
                return Some((&mut self.devices[self.last_device_idx], paddr - start));
            }
        }

        for (i, dev) in self.devices.iter_mut().enumerate() {
            let (start, size) = dev.address_range();
            if contains(start, size, paddr) {
                self.last_device_idx = i;
                return Some((dev, paddr - start));
            }
        }
        None
    }
}

impl PhysicalBus for Bus {
    fn read_u8(&mut self, paddr: u32) -> u8 {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.read_u8(offset)
        } else {
            warn!("read8 from unbacked address {paddr:#010x}");
            0
        }
    }

    fn read_u16(&mut self, paddr: u32) -> u16 {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.read_u16(offset)
        } else {
            warn!("read16 from unbacked address {paddr:#010x}");
            0
        }
    }

    fn read_u32(&mut self, paddr: u32) -> u32 {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.read_u32(offset)
        } else {
            warn!("read32 from unbacked address {paddr:#010x}");
            0
        }
    }

    fn read_u64(&mut self, paddr: u32) -> u64 {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.read_u64(offset)
        } else {
            warn!("read64 from unbacked address {paddr:#010x}");
            0
        }
    }

    fn write_u8(&mut self, paddr: u32, val: u8) {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.write_u8(offset, val);
        } else {
            warn!("write8 to unbacked address dropped {paddr:#010x}");
        }
    }

    fn write_u16(&mut self, paddr: u32, val: u16) {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.write_u16(offset, val);
        } else {
            warn!("write16 to unbacked address dropped {paddr:#010x}");
        }
    }

    fn write_u32(&mut self, paddr: u32, val: u32) {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.write_u32(offset, val);
        } else {
            warn!("write32 to unbacked address dropped {paddr:#010x}");
        }
    }

    fn write_u64(&mut self, paddr: u32, val: u64) {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.write_u64(offset, val);
        } else {
            warn!("write64 to unbacked address dropped {paddr:#010x}");
        }
    }

    fn is_backed(&self, paddr: u32, len: u32) -> bool {
        if len == 0 {
            return true;
        }
        let Some(last) = paddr.checked_add(len - 1) else {
            return false;
        };
        self.devices.iter().any(|dev| {
            let (start, size) = dev.address_range();
            contains(start, size, paddr) && contains(start, size, last)
        })
    }
}
