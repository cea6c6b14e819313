//! Test doubles of the gateways.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use crate::gateways::{self, storage::KeyValueStorage};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub values: RefCell<HashMap<String, String>>,
    pub fail: Cell<bool>,
}

impl MemoryStorage {
    fn check(&self) -> gateways::Result<()> {
        if self.fail.get() {
            return Err(anyhow::anyhow!("storage unavailable").into());
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> gateways::Result<Option<String>> {
        self.check()?;
        Ok(self.values.borrow().get(key).cloned())
    }
    fn set(&self, key: &str, value: &str) -> gateways::Result<()> {
        self.check()?;
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
    fn remove(&self, key: &str) -> gateways::Result<()> {
        self.check()?;
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
