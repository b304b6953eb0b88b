//! Directory structure snapshot
//!
//! A snapshot maps each canonical directory to the names found directly
//! inside it. Missing directories map to an empty list, never to nothing.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::layout::CanonicalDir;

/// Entries found directly under one canonical directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub dir: CanonicalDir,
    pub entries: Vec<String>,
}

/// Contents of all canonical directories at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    listings: Vec<DirListing>,
}

impl Snapshot {
    /// Builds a snapshot by asking `list` for each canonical directory
    ///
    /// `list` returns `None` when the directory does not exist. Entries are
    /// sorted so the output is stable across filesystems.
    pub fn collect<F, E>(mut list: F) -> Result<Self, E>
    where
        F: FnMut(CanonicalDir) -> Result<Option<Vec<String>>, E>,
    {
        let mut listings = Vec::with_capacity(CanonicalDir::ALL.len());
        for dir in CanonicalDir::ALL {
            let mut entries = list(dir)?.unwrap_or_default();
            entries.sort();
            listings.push(DirListing { dir, entries });
        }
        Ok(Self { listings })
    }

    /// Listings in canonical order
    pub fn listings(&self) -> &[DirListing] {
        &self.listings
    }

    /// Entries for one directory
    #[cfg(test)]
    pub fn entries(&self, dir: CanonicalDir) -> &[String] {
        self.listings
            .iter()
            .find(|l| l.dir == dir)
            .map(|l| l.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Renders the snapshot as indented JSON
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.listings.len()))?;
        for listing in &self.listings {
            map.serialize_entry(listing.dir.as_str(), &listing.entries)?;
        }
        map.end()
    }
}
