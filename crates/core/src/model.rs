//! Genealogical entities and the keyed tables that hold them.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use time::Date;

/// Anything stored in a [`Table`] is looked up by its identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// A person record (`0 @I1@ INDI`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Individual {
    pub id: String,
    pub name: String,
    pub sex: String,
    pub birth: Option<Date>,
    pub death: Option<Date>,
    /// Cleared once a death date is recorded.
    pub living: bool,
    /// Whole years; `None` when no birth date was recorded.
    pub age: Option<i64>,
    /// Family in which this individual is a child. Last writer wins.
    pub child_of: Option<String>,
    /// Families in which this individual is a spouse.
    pub spouse_of: BTreeSet<String>,
    /// Set by the resolver from non-divorced families.
    pub spouse: Option<String>,
    /// Appended by the resolver from divorced families; not deduplicated.
    pub ex_spouses: Vec<String>,
}

impl Individual {
    pub fn new(id: impl Into<String>) -> Self {
        Individual {
            id: id.into(),
            name: String::new(),
            sex: String::new(),
            birth: None,
            death: None,
            living: true,
            age: None,
            child_of: None,
            spouse_of: BTreeSet::new(),
            spouse: None,
            ex_spouses: Vec::new(),
        }
    }

    pub fn is_married(&self) -> bool {
        !self.spouse_of.is_empty()
    }
}

impl Keyed for Individual {
    fn key(&self) -> &str {
        &self.id
    }
}

/// A family record (`0 @F1@ FAM`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Family {
    pub id: String,
    pub husband: Option<String>,
    pub wife: Option<String>,
    pub children: BTreeSet<String>,
    pub married: bool,
    pub marriage: Option<Date>,
    pub divorced: bool,
    pub divorce: Option<Date>,
    /// Filled in by the resolver when the husband reference resolves.
    pub husband_name: Option<String>,
    /// Filled in by the resolver when the wife reference resolves.
    pub wife_name: Option<String>,
}

impl Family {
    pub fn new(id: impl Into<String>) -> Self {
        Family {
            id: id.into(),
            husband: None,
            wife: None,
            children: BTreeSet::new(),
            married: false,
            marriage: None,
            divorced: false,
            divorce: None,
            husband_name: None,
            wife_name: None,
        }
    }
}

impl Keyed for Family {
    fn key(&self) -> &str {
        &self.id
    }
}

/// An insertion-ordered table keyed by identifier.
///
/// Inserting an identifier that is already present replaces the entity
/// but keeps its original position.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Keyed> Table<T> {
    pub fn new() -> Self {
        Table {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert `row`, returning the entity it replaced, if any.
    pub fn insert(&mut self, row: T) -> Option<T> {
        match self.index.get(row.key()) {
            Some(&pos) => Some(std::mem::replace(&mut self.rows[pos], row)),
            None => {
                self.index.insert(row.key().to_owned(), self.rows.len());
                self.rows.push(row);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.rows[pos])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        match self.index.get(id) {
            Some(&pos) => Some(&mut self.rows[pos]),
            None => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.rows.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Keyed> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Keyed> FromIterator<T> for Table<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Table::new();
        for row in iter {
            table.insert(row);
        }
        table
    }
}

impl<T: Serialize> Serialize for Table<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

/// The two entity tables produced by record assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Genealogy {
    pub individuals: Table<Individual>,
    pub families: Table<Family>,
}

impl Genealogy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }
}
