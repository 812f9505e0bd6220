//! Catalog of combatant templates players draft from

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::{BaseStats, CombatantTemplate, ROSTER_SIZE};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog has no entries")]
    Empty,

    #[error("Catalog has {len} entries but a roster needs {required} distinct picks")]
    TooSmall { len: usize, required: usize },
}

/// Accepted file layouts: a bare list, or the pokedex scraper's `{"pokemons": [...]}`
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<CombatantTemplate>),
    Pokedex { pokemons: Vec<CombatantTemplate> },
}

/// Ordered, read-only list of templates. Indices are stable for the catalog's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    templates: Vec<CombatantTemplate>,
}

// name, [hp, atk, def, spa, spd, spe], elemental effects, base exp
type BuiltinEntry = (&'static str, [u32; 6], &'static [(&'static str, f64)], u32);

const BUILTIN: &[BuiltinEntry] = &[
    ("Bulbasaur", [45, 49, 49, 65, 65, 45], &[("fire", 2.0), ("water", 0.5)], 64),
    ("Charmander", [39, 52, 43, 60, 50, 65], &[("water", 2.0), ("grass", 0.5)], 62),
    ("Squirtle", [44, 48, 65, 50, 64, 43], &[("grass", 2.0), ("fire", 0.5)], 63),
    ("Pikachu", [35, 55, 40, 50, 50, 90], &[("ground", 2.0), ("flying", 0.5)], 112),
    ("Jigglypuff", [115, 45, 20, 45, 25, 20], &[("steel", 2.0)], 95),
    ("Geodude", [40, 80, 100, 30, 30, 20], &[("water", 4.0), ("fire", 0.5)], 60),
    ("Machop", [70, 80, 50, 35, 35, 35], &[("psychic", 2.0)], 61),
    ("Gastly", [30, 35, 30, 100, 35, 80], &[("ghost", 2.0), ("normal", 0.0)], 62),
    ("Onix", [35, 45, 160, 30, 45, 70], &[("water", 4.0), ("grass", 4.0)], 77),
    ("Eevee", [55, 55, 50, 45, 65, 55], &[("fighting", 2.0)], 65),
];

impl Catalog {
    /// Create a catalog, rejecting lists too short to draft a full roster from
    pub fn new(templates: Vec<CombatantTemplate>) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::Empty);
        }
        if templates.len() < ROSTER_SIZE {
            return Err(CatalogError::TooSmall {
                len: templates.len(),
                required: ROSTER_SIZE,
            });
        }
        Ok(Self { templates })
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let templates = match serde_json::from_str(json)? {
            CatalogFile::List(templates) => templates,
            CatalogFile::Pokedex { pokemons } => pokemons,
        };
        Self::new(templates)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Small default catalog used when no file is configured
    pub fn builtin() -> Self {
        let templates = BUILTIN
            .iter()
            .map(|(name, s, effects, base_exp)| {
                let mut template = CombatantTemplate::new(
                    *name,
                    BaseStats::new(s[0], s[1], s[2], s[3], s[4], s[5]),
                );
                for (element, multiplier) in effects.iter() {
                    template = template.with_effect(*element, *multiplier);
                }
                template.base_exp = *base_exp;
                template
            })
            .collect();
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CombatantTemplate> {
        self.templates.get(index)
    }

    /// Look up a raw wire choice, which may be negative or out of range
    pub fn lookup(&self, choice: i64) -> Option<(usize, &CombatantTemplate)> {
        let index = usize::try_from(choice).ok()?;
        self.get(index).map(|template| (index, template))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatantTemplate> {
        self.templates.iter()
    }
}
