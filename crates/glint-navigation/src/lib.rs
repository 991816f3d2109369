//! Where links go.
//!
//! Sections never hard-code paths: they name a [`Destination`] and ask the
//! [`RouteTable`] for its path. Activating a link pushes the path onto a
//! [`History`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Logical pages a link can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Home,
    About,
    Services,
    Team,
    Company,
}

impl Destination {
    pub const ALL: [Destination; 5] = [
        Destination::Home,
        Destination::About,
        Destination::Services,
        Destination::Team,
        Destination::Company,
    ];

    pub fn default_path(self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::About => "/about",
            Destination::Services => "/services",
            Destination::Team => "/team",
            Destination::Company => "/company",
        }
    }
}

/// Destination → path mapping.
///
/// Deserializes from a map such as `{"team": "/people"}`; destinations left
/// out keep their default path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Destination, String>", into = "BTreeMap<Destination, String>")]
pub struct RouteTable {
    routes: BTreeMap<Destination, String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: Destination::ALL
                .iter()
                .map(|d| (*d, d.default_path().to_string()))
                .collect(),
        }
    }
}

impl From<BTreeMap<Destination, String>> for RouteTable {
    fn from(overrides: BTreeMap<Destination, String>) -> Self {
        let mut table = RouteTable::default();
        table.routes.extend(overrides);
        table
    }
}

impl From<RouteTable> for BTreeMap<Destination, String> {
    fn from(table: RouteTable) -> Self {
        table.routes
    }
}

impl RouteTable {
    pub fn with_path(mut self, dest: Destination, path: impl Into<String>) -> Self {
        self.routes.insert(dest, path.into());
        self
    }

    pub fn path(&self, dest: Destination) -> &str {
        self.routes
            .get(&dest)
            .map(String::as_str)
            .unwrap_or_else(|| dest.default_path())
    }
}

/// Visited paths, most recent last. Never empty: it starts at the home path.
#[derive(Clone)]
pub struct History {
    entries: Rc<RefCell<Vec<String>>>,
}

impl History {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            entries: Rc::new(RefCell::new(vec![start.into()])),
        }
    }

    pub fn current(&self) -> String {
        self.entries.borrow().last().cloned().unwrap_or_default()
    }

    pub fn push(&self, path: impl Into<String>) {
        let path = path.into();
        log::info!("navigate -> {path}");
        self.entries.borrow_mut().push(path);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Destination::Home.default_path())
    }
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("entries", &*self.entries.borrow())
            .finish()
    }
}
