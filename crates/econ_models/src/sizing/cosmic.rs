//! COSMIC functional size.

/// Kind of data movement crossing or touching the software boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataMovement {
    /// Data entering from a functional user.
    #[cfg_attr(feature = "serde", serde(alias = "Entry"))]
    Entry,
    /// Data leaving to a functional user.
    #[cfg_attr(feature = "serde", serde(alias = "Exit"))]
    Exit,
    /// Data read from persistent storage.
    #[cfg_attr(feature = "serde", serde(alias = "Read"))]
    Read,
    /// Data written to persistent storage.
    #[cfg_attr(feature = "serde", serde(alias = "Write"))]
    Write,
}

/// One functional process step and the data groups it moves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CosmicEntry {
    /// Identifier.
    pub id: String,
    /// Description.
    pub name: String,
    /// Movement type.
    #[cfg_attr(feature = "serde", serde(alias = "type"))]
    pub movement: DataMovement,
    /// Data groups moved; an empty list still counts as one movement.
    #[cfg_attr(feature = "serde", serde(default))]
    pub objects: Vec<String>,
}

impl CosmicEntry {
    /// Number of data movements this entry contributes.
    pub fn movements(&self) -> u32 {
        u32::try_from(self.objects.len()).unwrap_or(u32::MAX).max(1)
    }
}

/// Movement counts by type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CosmicResult {
    /// Entry movements.
    pub entry: u32,
    /// Exit movements.
    pub exit: u32,
    /// Read movements.
    pub read: u32,
    /// Write movements.
    pub write: u32,
    /// Sum over all types.
    pub total: u32,
    /// COSMIC function points; one CFP per data movement.
    pub cfp: u32,
}

/// Count COSMIC function points.
///
/// ```
/// use econ_models::sizing::{measure_cosmic, CosmicEntry, DataMovement};
///
/// let entries = vec![CosmicEntry {
///     id: "1".into(),
///     name: "submit order".into(),
///     movement: DataMovement::Entry,
///     objects: vec!["order".into(), "customer".into()],
/// }];
/// assert_eq!(measure_cosmic(&entries).cfp, 2);
/// ```
pub fn measure_cosmic(entries: &[CosmicEntry]) -> CosmicResult {
    let mut result = CosmicResult::default();
    for entry in entries {
        let count = entry.movements();
        let bucket = match entry.movement {
            DataMovement::Entry => &mut result.entry,
            DataMovement::Exit => &mut result.exit,
            DataMovement::Read => &mut result.read,
            DataMovement::Write => &mut result.write,
        };
        *bucket = bucket.saturating_add(count);
    }
    result.total = result
        .entry
        .saturating_add(result.exit)
        .saturating_add(result.read)
        .saturating_add(result.write);
    result.cfp = result.total;
    result
}
