//! Load-reserve / store-conditional reservation tracking.
//!
//! One reservation exists per core. An exclusive load establishes it on a
//! physical address; the store path clears it when a 32-bit write hits that
//! exact address. Reads never touch it.

use crate::common::PhysAddr;

/// Outstanding exclusive-access reservation of one core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Reservation {
    active: bool,
    address: PhysAddr,
}

impl Reservation {
    /// Creates an inactive reservation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Establishes a reservation on `address`, replacing any previous one.
    pub const fn reserve(&mut self, address: PhysAddr) {
        self.active = true;
        self.address = address;
    }

    /// Returns `true` while a reservation is held.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the reserved address while a reservation is held.
    pub const fn address(&self) -> Option<PhysAddr> {
        if self.active { Some(self.address) } else { None }
    }

    /// Drops the reservation if it is held on exactly `address`.
    pub fn clear_if(&mut self, address: PhysAddr) {
        if self.active && self.address == address {
            self.active = false;
        }
    }

    /// Drops the reservation unconditionally.
    pub const fn clear(&mut self) {
        self.active = false;
    }
}
