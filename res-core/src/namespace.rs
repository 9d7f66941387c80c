//! Namespaces: character-keyed tables that nest into a tree.
//!
//! Every table lives in an arena owned by the [`Namespace`] value and is
//! addressed by a [`TableId`]. An `Item::Namespace` entry is just a handle into
//! that arena, so cloning a whole `Namespace` duplicates the tree while every
//! handle inside it stays valid. Operators and read-modes are `Rc`-shared, so
//! a clone still aliases their definitions.
//!
//! Each table has exactly one owner: the entry that holds its handle. Tables
//! are never shared between entries (copies are deep), so when an entry is
//! overwritten or removed its table and everything under it go back on a
//! free list for the next allocation.

use crate::compat::{BTreeMap, String, ToString, Vec, vec};
use core::mem;
use crate::value::{Item, RuntimeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId(u32);

impl TableId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

const ROOT: TableId = TableId(0);

#[derive(Clone, Debug)]
pub struct Namespace {
    tables: Vec<BTreeMap<char, Item>>,
    // Released slots, reused before the arena grows
    free: Vec<TableId>,
}

/// The outcome of walking a path through nested tables.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Path leading to the table that holds `name`.
    pub head: String,
    /// The table holding `name`.
    pub table: TableId,
    pub name: char,
    /// What the walk stopped on (a fresh empty table if nothing was there).
    pub item: Item,
    /// Unconsumed path. Non-empty means a non-namespace item was in the way.
    pub tail: String,
}

impl Namespace {
    pub fn new() -> Self {
        Namespace {
            tables: vec![BTreeMap::new()],
            free: Vec::new(),
        }
    }

    pub fn root(&self) -> TableId {
        ROOT
    }

    pub fn get(&self, table: TableId, key: char) -> Option<&Item> {
        self.tables.get(table.index()).and_then(|t| t.get(&key))
    }

    /// Binds `key` in `table`. A sub-table that was bound there is released.
    pub fn insert(&mut self, table: TableId, key: char, item: Item) {
        let kept = match &item {
            Item::Namespace(id) => Some(*id),
            _ => None,
        };
        if let Some(old) = self.tables[table.index()].insert(key, item) {
            match old {
                Item::Namespace(id) if Some(id) == kept => {}
                old => self.release(old),
            }
        }
    }

    /// Unbinds `key` in `table`, releasing a sub-table that was bound there.
    pub fn remove(&mut self, table: TableId, key: char) {
        if let Some(old) = self.tables[table.index()].remove(&key) {
            self.release(old);
        }
    }

    // RUST CONCEPT: Manual reclamation in an arena
    // Handles are plain indices, so nothing is dropped automatically. A
    // released table is emptied, its own sub-tables are released in turn,
    // and its slot is queued for reuse.
    fn release(&mut self, item: Item) {
        let Item::Namespace(id) = item else {
            return;
        };
        if id == ROOT {
            return;
        }
        let entries = mem::take(&mut self.tables[id.index()]);
        for (_, entry) in entries {
            self.release(entry);
        }
        self.free.push(id);
    }

    /// Number of tables currently in use.
    pub fn table_count(&self) -> usize {
        self.tables.len() - self.free.len()
    }

    // Allocates a new, empty, unattached table
    fn new_table(&mut self) -> TableId {
        if let Some(id) = self.free.pop() {
            return id;
        }
        let id = TableId(self.tables.len() as u32);
        self.tables.push(BTreeMap::new());
        id
    }

    /// Creates an empty sub-table under `key` and returns its handle.
    pub fn insert_table(&mut self, table: TableId, key: char) -> TableId {
        let id = self.new_table();
        self.insert(table, key, Item::Namespace(id));
        id
    }

    // Looks up `key`, planting an empty table there if it is missing
    fn entry_or_table(&mut self, table: TableId, key: char) -> Item {
        if let Some(item) = self.get(table, key) {
            return item.clone();
        }
        Item::Namespace(self.insert_table(table, key))
    }

    /// Walks `path` from the root one character at a time.
    ///
    /// Missing keys along the way become empty tables. The walk stops at the
    /// first non-namespace item or when the path runs out; whatever is left
    /// of the path is returned in `tail`. An empty path resolves to nothing.
    pub fn resolve_path(&mut self, path: &str) -> Option<Resolved> {
        let mut chars = path.chars();
        let mut name = chars.next()?;
        let mut head = String::new();
        let mut table = ROOT;

        loop {
            let item = self.entry_or_table(table, name);
            let inner = match &item {
                Item::Namespace(inner) => *inner,
                _ => {
                    return Some(Resolved {
                        head,
                        table,
                        name,
                        item,
                        tail: chars.collect(),
                    });
                }
            };
            match chars.next() {
                Some(next) => {
                    head.push(name);
                    table = inner;
                    name = next;
                }
                None => {
                    return Some(Resolved {
                        head,
                        table,
                        name,
                        item,
                        tail: String::new(),
                    });
                }
            }
        }
    }

    /// Resolves a path that must be walked completely.
    pub fn resolve_full(&mut self, path: &str) -> Result<Resolved, RuntimeError> {
        let resolved = self.resolve_path(path).ok_or(RuntimeError::EmptyPath)?;
        if !resolved.tail.is_empty() {
            let mut at = resolved.head.clone();
            at.push(resolved.name);
            return Err(RuntimeError::PathBlocked {
                path: path.to_string(),
                blocker: resolved.item.type_name(),
                at,
            });
        }
        Ok(resolved)
    }

    /// Copies an item for storage elsewhere in this namespace. Namespace
    /// handles get a fresh, recursively copied table; everything else is an
    /// ordinary clone.
    pub fn copy_item(&mut self, item: &Item) -> Item {
        match item {
            Item::Namespace(source) => {
                let entries: Vec<(char, Item)> = self.tables[source.index()]
                    .iter()
                    .map(|(k, v)| (*k, v.clone()))
                    .collect();
                let copy = self.new_table();
                for (key, entry) in entries {
                    let entry = self.copy_item(&entry);
                    self.insert(copy, key, entry);
                }
                Item::Namespace(copy)
            }
            other => other.clone(),
        }
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_creates_intermediate_tables() {
        let mut ns = Namespace::new();
        let resolved = ns.resolve_path("abc").unwrap();
        assert_eq!(resolved.head, "ab");
        assert_eq!(resolved.name, 'c');
        assert!(resolved.tail.is_empty());
        assert!(matches!(resolved.item, Item::Namespace(_)));

        // The walk left a chain of tables behind
        let a = match ns.get(ns.root(), 'a') {
            Some(Item::Namespace(id)) => *id,
            other => panic!("expected a table at 'a', got {:?}", other),
        };
        assert!(matches!(ns.get(a, 'b'), Some(Item::Namespace(_))));
    }

    #[test]
    fn test_resolve_reports_blocked_tail() {
        let mut ns = Namespace::new();
        let root = ns.root();
        let sub = ns.insert_table(root, 'x');
        ns.insert(sub, 'y', Item::Number(5.0));

        let resolved = ns.resolve_path("xyzw").unwrap();
        assert_eq!(resolved.head, "x");
        assert_eq!(resolved.name, 'y');
        assert_eq!(resolved.item, Item::Number(5.0));
        assert_eq!(resolved.tail, "zw");

        let err = ns.resolve_full("xyzw").unwrap_err();
        assert_eq!(
            err,
            RuntimeError::PathBlocked {
                path: "xyzw".to_string(),
                blocker: "NUM",
                at: "xy".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_exact_item() {
        let mut ns = Namespace::new();
        let root = ns.root();
        ns.insert(root, 'q', Item::Char('!'));
        let resolved = ns.resolve_full("q").unwrap();
        assert_eq!(resolved.table, root);
        assert_eq!(resolved.item, Item::Char('!'));
    }

    #[test]
    fn test_empty_path() {
        let mut ns = Namespace::new();
        assert!(ns.resolve_path("").is_none());
        assert_eq!(ns.resolve_full("").unwrap_err(), RuntimeError::EmptyPath);
    }

    #[test]
    fn test_copy_item_duplicates_tables() {
        let mut ns = Namespace::new();
        let root = ns.root();
        let sub = ns.insert_table(root, 's');
        ns.insert(sub, '1', Item::Number(1.0));

        let copy = ns.copy_item(&Item::Namespace(sub));
        let copy_id = match copy {
            Item::Namespace(id) => id,
            other => panic!("expected a table, got {:?}", other),
        };
        assert_ne!(copy_id, sub);
        ns.insert(copy_id, '2', Item::Number(2.0));

        assert!(ns.get(sub, '2').is_none());
        assert_eq!(ns.get(copy_id, '1'), Some(&Item::Number(1.0)));
    }

    #[test]
    fn test_store_and_delete_reuses_tables() {
        let mut ns = Namespace::new();
        let slots = ns.tables.len();
        for _ in 0..100 {
            // Resolving the missing name plants a table that the store replaces
            let slot = ns.resolve_full("q").unwrap();
            ns.insert(slot.table, slot.name, Item::Number(5.0));
            let slot = ns.resolve_full("q").unwrap();
            ns.remove(slot.table, slot.name);
        }
        assert_eq!(ns.tables.len(), slots + 1);
        assert_eq!(ns.table_count(), 1);
    }

    #[test]
    fn test_overwrite_releases_nested_tables() {
        let mut ns = Namespace::new();
        let root = ns.root();
        ns.resolve_full("abc").unwrap();
        assert_eq!(ns.table_count(), 4);

        ns.insert(root, 'a', Item::Char('x'));
        assert_eq!(ns.table_count(), 1);

        // Freed slots come back empty
        let reused = ns.insert_table(root, 'b');
        assert!(reused.index() < 4);
        assert_eq!(ns.get(reused, 'b'), None);
        assert_eq!(ns.get(reused, 'c'), None);
    }

    #[test]
    fn test_rebinding_same_table_keeps_it() {
        let mut ns = Namespace::new();
        let root = ns.root();
        let sub = ns.insert_table(root, 's');
        ns.insert(sub, '1', Item::Number(1.0));
        ns.insert(root, 's', Item::Namespace(sub));
        assert_eq!(ns.get(sub, '1'), Some(&Item::Number(1.0)));
        assert_eq!(ns.table_count(), 2);
    }

    #[test]
    fn test_clone_leaves_template_untouched() {
        let mut template = Namespace::new();
        let root = template.root();
        template.insert(root, 'k', Item::Number(3.0));

        let mut working = template.clone();
        working.resolve_path("new").unwrap();
        working.insert(root, 'k', Item::Number(4.0));

        assert_eq!(template.get(root, 'k'), Some(&Item::Number(3.0)));
        assert!(template.get(root, 'n').is_none());
    }
}
