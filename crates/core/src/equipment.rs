//! Equipment reconciliation.
//!
//! Clients submit three loosely-shaped lists (general items, weapons,
//! armor). This module normalizes them into canonical collections:
//! general inventory keeps `{name, quantity}`, weapons are flattened to
//! one record per physical unit, armor always carries an explicit
//! `equipped` flag reset to false. Entries that cannot be reconciled
//! are never an error; they are returned in a side list so callers can
//! log them and tests can observe the exclusions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A general inventory item. No equip state by definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// A single physical weapon. Quantity is never stored on weapons;
/// multiples are expanded into independent records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub name: String,
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub category: String,
    pub damage: String,
    pub damage_type: String,
    pub properties: Vec<String>,
    pub weight: f64,
    pub cost: String,
    #[serde(default)]
    pub equipped: bool,
}

/// A piece of armor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    pub name: String,
    #[serde(rename = "type")]
    pub armor_type: String,
    #[serde(rename = "baseAC")]
    pub base_ac: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_dex_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_strength: Option<i32>,
    #[serde(default)]
    pub stealth_disadvantage: bool,
    pub weight: f64,
    pub cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub equipped: bool,
}

fn default_quantity() -> u32 {
    1
}

/// Minimal named sub-object used by the wrapped general-item shape.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedItem {
    pub name: String,
}

/// Raw general-item entry. The name may be supplied inline, nested in
/// an `item` sub-object, or as a bare string; anything else falls into
/// `Unrecognized` and is dropped during reconciliation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawInventoryEntry {
    Wrapped {
        item: NamedItem,
        #[serde(default = "default_quantity")]
        quantity: u32,
    },
    Inline(InventoryItem),
    Bare(String),
    Unrecognized(Value),
}

/// Raw weapon entry: either a nested complete description plus a
/// quantity, or the weapon fields inlined flat. A flat entry must carry
/// every descriptive field ([`Weapon`] makes them all mandatory), so a
/// partial description fails to parse and is dropped rather than
/// persisted incomplete.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawWeaponEntry {
    Nested {
        weapon: Weapon,
        #[serde(default = "default_quantity")]
        quantity: u32,
    },
    Flat(Weapon),
    Unrecognized(Value),
}

/// Raw armor entry: a complete armor description or an unreconcilable
/// blob.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawArmorEntry {
    Known(Armor),
    Unrecognized(Value),
}

/// Output of [`reconcile`]: the three canonical collections plus the
/// raw entries that were excluded, so "nothing to reconcile" and "some
/// input was rejected" are distinguishable.
#[derive(Debug, Clone, Default)]
pub struct Reconciled {
    pub inventory: Vec<InventoryItem>,
    pub weapons: Vec<Weapon>,
    pub armor: Vec<Armor>,
    pub dropped: Vec<Value>,
}

/// Normalize raw client equipment into canonical collections.
///
/// Guarantees on the output:
/// - every weapon and armor record carries `equipped: false`;
/// - nested weapon quantities are expanded into independent records;
/// - general inventory entries are merged by name (quantities summed);
/// - no name appears in more than one collection: a general entry whose
///   name is already present among the reconciled weapons or armor is
///   removed from inventory.
pub fn reconcile(
    general: Vec<RawInventoryEntry>,
    weapons: Vec<RawWeaponEntry>,
    armor: Vec<RawArmorEntry>,
) -> Reconciled {
    let mut out = Reconciled::default();

    for entry in weapons {
        match entry {
            RawWeaponEntry::Nested { weapon, quantity } => {
                // One record per physical unit, all starting unequipped.
                for _ in 0..quantity {
                    out.weapons.push(Weapon {
                        equipped: false,
                        ..weapon.clone()
                    });
                }
            }
            RawWeaponEntry::Flat(weapon) => out.weapons.push(Weapon {
                equipped: false,
                ..weapon
            }),
            RawWeaponEntry::Unrecognized(raw) => out.dropped.push(raw),
        }
    }

    for entry in armor {
        match entry {
            // Equip state is always reset at creation; only a later
            // whole-collection update can change it.
            RawArmorEntry::Known(piece) => out.armor.push(Armor {
                equipped: false,
                ..piece
            }),
            RawArmorEntry::Unrecognized(raw) => out.dropped.push(raw),
        }
    }

    for entry in general {
        let item = match entry {
            RawInventoryEntry::Wrapped { item, quantity } => InventoryItem {
                name: item.name,
                quantity,
            },
            RawInventoryEntry::Inline(item) => item,
            RawInventoryEntry::Bare(name) => InventoryItem { name, quantity: 1 },
            RawInventoryEntry::Unrecognized(raw) => {
                out.dropped.push(raw);
                continue;
            }
        };

        if item.name.trim().is_empty() {
            out.dropped.push(
                serde_json::to_value(&item).unwrap_or(Value::Null),
            );
            continue;
        }

        // Weapons and armor own their names; keep inventory disjoint.
        if collection_contains(&out, &item.name) {
            continue;
        }

        match out
            .inventory
            .iter()
            .position(|existing| existing.name.eq_ignore_ascii_case(&item.name))
        {
            Some(pos) => out.inventory[pos].quantity += item.quantity,
            None => out.inventory.push(item),
        }
    }

    out
}

fn collection_contains(reconciled: &Reconciled, name: &str) -> bool {
    reconciled
        .weapons
        .iter()
        .any(|w| w.name.eq_ignore_ascii_case(name))
        || reconciled
            .armor
            .iter()
            .any(|a| a.name.eq_ignore_ascii_case(name))
}
