//! Atom inclusion filtering.
//!
//! Selection is an OR over the allow-list: an atom is included iff its
//! element matches at least one listed name, regardless of list order. The
//! legacy converter's per-criterion loop could degrade to last-entry-wins;
//! the set membership test here makes the OR explicit.

use crate::skeleton::AtomSite;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCriteria {
    ShowAll,
    AllowList(BTreeSet<String>),
}

impl SelectionCriteria {
    /// Empty name list is the show-all sentinel; names are case-folded once
    /// here so every later comparison is a plain equality test.
    pub fn from_names(names: &[String]) -> Self {
        if names.is_empty() {
            return Self::ShowAll;
        }
        Self::AllowList(
            names
                .iter()
                .map(|name| name.to_ascii_lowercase())
                .collect(),
        )
    }

    fn matches(&self, symbol: &str) -> bool {
        match self {
            Self::ShowAll => true,
            Self::AllowList(names) => names.contains(&symbol.to_ascii_lowercase()),
        }
    }
}

/// Per-atom inclusion flags, parallel to the structure's atom list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionMask {
    flags: Vec<bool>,
}

impl InclusionMask {
    pub fn is_included(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Derived by counting flags so every emitted item count agrees with the
    /// mask by construction.
    pub fn included_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.flags.iter().copied()
    }
}

/// Pure function over its inputs; running it twice yields an equal mask.
pub fn select(atoms: &[AtomSite], criteria: &SelectionCriteria) -> InclusionMask {
    let flags = match criteria {
        // Fast path: no per-element comparison for the default zero-filter run.
        SelectionCriteria::ShowAll => vec![true; atoms.len()],
        SelectionCriteria::AllowList(_) => atoms
            .iter()
            .map(|atom| criteria.matches(&atom.symbol))
            .collect(),
    };
    InclusionMask { flags }
}
