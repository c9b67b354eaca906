//! Wishlist editing for the Library.
//!
//! The wishlist belongs to the whole circle rather than to one member, so
//! changes survive logout and are seen by whoever logs in next.

use log::info;

use super::Library;
use crate::{error::Result, params::Wish, wishlist::Wishlist};

impl Library {
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Adds an entry; returns false when it was already present.
    pub fn add_wish(&mut self, params: &Wish) -> Result<bool> {
        params.validate()?;
        self.require_user()?;
        let added = self.wishlist.add(&params.text);
        if added {
            info!("Added \"{}\" to the wishlist", params.text.trim());
        }
        Ok(added)
    }

    /// Removes an entry; returns false when nothing matched.
    pub fn remove_wish(&mut self, params: &Wish) -> Result<bool> {
        params.validate()?;
        self.require_user()?;
        let removed = self.wishlist.remove(&params.text);
        if removed {
            info!("Removed \"{}\" from the wishlist", params.text.trim());
        }
        Ok(removed)
    }
}
