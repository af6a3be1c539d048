//! Persistent default layout

use byteorder::{BigEndian, ByteOrder};
use core::fmt::Debug;
use embedded_storage::Storage;
use log::{error, warn};

use crate::layer::{BaseLayout, Layer};

/// If the first 2 bytes of the record equal it, the record has been initialised.
pub const EECONFIG_MAGIC: u16 = 0xFEE6;

/// Offset of the magic value inside the record
const MAGIC_ADDR: u32 = 0;
const MAGIC_SIZE: usize = 2;
/// Offset of the default layer bitmask inside the record
const DEFAULT_LAYER_ADDR: u32 = 2;

/// Where the default layout survives a power cycle
pub trait DefaultLayerStore {
    fn load_default_layout(&mut self) -> Option<BaseLayout>;
    fn save_default_layout(&mut self, layout: BaseLayout);
}

/// Nothing is persisted; every boot starts on the configured default
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStore;

impl DefaultLayerStore for NoStore {
    fn load_default_layout(&mut self) -> Option<BaseLayout> {
        None
    }

    fn save_default_layout(&mut self, _layout: BaseLayout) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EeconfigError<E> {
    Storage(E),
    /// The record has never been initialised
    BadMagic(u16),
    /// The record does not fit below the end of the address space
    AddressOverflow,
}

/// EEPROM-style record on any `embedded_storage::Storage`.
///
/// Layout, starting at `offset`: a big-endian `u16` magic, then the default layer as a one-byte
/// bitmask (`1 << layer index`).
pub struct Eeconfig<S: Storage> {
    storage: S,
    offset: u32,
}

impl<S: Storage> Eeconfig<S> {
    pub fn new(storage: S, offset: u32) -> Self {
        Eeconfig { storage, offset }
    }

    /// Give the storage back
    pub fn release(self) -> S {
        self.storage
    }

    /// Absolute address of a field of the record
    fn addr(&self, field: u32) -> Result<u32, EeconfigError<S::Error>> {
        self.offset
            .checked_add(field)
            .ok_or(EeconfigError::AddressOverflow)
    }

    /// Write the magic value and the default layer
    pub fn init(&mut self, layout: BaseLayout) -> Result<(), EeconfigError<S::Error>> {
        let mut buf = [0; MAGIC_SIZE];
        BigEndian::write_u16(&mut buf, EECONFIG_MAGIC);
        let addr = self.addr(MAGIC_ADDR)?;
        // Nothing is written unless the whole record fits
        self.addr(DEFAULT_LAYER_ADDR)?;
        self.storage
            .write(addr, &buf)
            .map_err(EeconfigError::Storage)?;
        self.write_default_layer(layout)
    }

    pub fn magic(&mut self) -> Result<u16, EeconfigError<S::Error>> {
        let mut buf = [0; MAGIC_SIZE];
        let addr = self.addr(MAGIC_ADDR)?;
        self.storage
            .read(addr, &mut buf)
            .map_err(EeconfigError::Storage)?;
        Ok(BigEndian::read_u16(&buf))
    }

    pub fn is_enabled(&mut self) -> Result<bool, EeconfigError<S::Error>> {
        Ok(self.magic()? == EECONFIG_MAGIC)
    }

    /// Returns `Ok(None)` if the stored bitmask is not a single base layout
    pub fn read_default_layer(&mut self) -> Result<Option<BaseLayout>, EeconfigError<S::Error>> {
        let magic = self.magic()?;
        if magic != EECONFIG_MAGIC {
            return Err(EeconfigError::BadMagic(magic));
        }
        let mut buf = [0; 1];
        let addr = self.addr(DEFAULT_LAYER_ADDR)?;
        self.storage
            .read(addr, &mut buf)
            .map_err(EeconfigError::Storage)?;
        Ok(base_layout_from_bitmask(buf[0]))
    }

    pub fn write_default_layer(&mut self, layout: BaseLayout) -> Result<(), EeconfigError<S::Error>> {
        let addr = self.addr(DEFAULT_LAYER_ADDR)?;
        self.storage
            .write(addr, &[bitmask(layout)])
            .map_err(EeconfigError::Storage)
    }
}

fn bitmask(layout: BaseLayout) -> u8 {
    1 << Layer::from(layout).index()
}

fn base_layout_from_bitmask(mask: u8) -> Option<BaseLayout> {
    [BaseLayout::Qwerty, BaseLayout::Dvorak]
        .into_iter()
        .find(|layout| bitmask(*layout) == mask)
}

impl<S> DefaultLayerStore for Eeconfig<S>
where
    S: Storage,
    S::Error: Debug,
{
    fn load_default_layout(&mut self) -> Option<BaseLayout> {
        match self.read_default_layer() {
            Ok(Some(layout)) => Some(layout),
            Ok(None) => {
                warn!("Stored default layer is not a base layout, ignoring");
                None
            }
            Err(EeconfigError::BadMagic(_)) => None,
            Err(e) => {
                error!("Read default layer error: {:?}", e);
                None
            }
        }
    }

    fn save_default_layout(&mut self, layout: BaseLayout) {
        let result = match self.is_enabled() {
            Ok(true) => self.write_default_layer(layout),
            Ok(false) => self.init(layout),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            error!("Save default layer error: {:?}", e);
        }
    }
}
