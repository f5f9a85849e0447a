use crate::Species;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidCatalogEntry {
    pub species: Species,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl FluidCatalogEntry {
    pub fn formula(&self) -> &'static str {
        self.species.data().formula
    }

    /// Substring match on key, display name, formula and aliases.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.names().any(|name| name.to_ascii_lowercase().contains(&query))
    }

    /// Exact (case-insensitive) match; `wanted` must already be lowercase.
    pub(crate) fn is_named(&self, wanted: &str) -> bool {
        self.names().any(|name| name.to_ascii_lowercase() == wanted)
    }

    fn names(&self) -> impl Iterator<Item = &'static str> {
        [self.species.key(), self.display_name, self.formula()]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }
}

const SPECIES_CATALOG: [FluidCatalogEntry; 21] = [
    FluidCatalogEntry {
        species: Species::Methane,
        display_name: "Methane",
        aliases: &["natural gas"],
    },
    FluidCatalogEntry {
        species: Species::Ethane,
        display_name: "Ethane",
        aliases: &[],
    },
    FluidCatalogEntry {
        species: Species::Propane,
        display_name: "Propane",
        aliases: &["n-propane"],
    },
    FluidCatalogEntry {
        species: Species::NButane,
        display_name: "n-Butane",
        aliases: &["butane", "nbutane"],
    },
    FluidCatalogEntry {
        species: Species::Isobutane,
        display_name: "Isobutane",
        aliases: &["i-butane", "r600a"],
    },
    FluidCatalogEntry {
        species: Species::NPentane,
        display_name: "n-Pentane",
        aliases: &["pentane", "npentane"],
    },
    FluidCatalogEntry {
        species: Species::NHexane,
        display_name: "n-Hexane",
        aliases: &["hexane", "nhexane"],
    },
    FluidCatalogEntry {
        species: Species::Ethylene,
        display_name: "Ethylene",
        aliases: &["ethene"],
    },
    FluidCatalogEntry {
        species: Species::Propylene,
        display_name: "Propylene",
        aliases: &["propene"],
    },
    FluidCatalogEntry {
        species: Species::Nitrogen,
        display_name: "Nitrogen",
        aliases: &[],
    },
    FluidCatalogEntry {
        species: Species::Oxygen,
        display_name: "Oxygen",
        aliases: &[],
    },
    FluidCatalogEntry {
        species: Species::Hydrogen,
        display_name: "Hydrogen",
        aliases: &[],
    },
    FluidCatalogEntry {
        species: Species::Helium,
        display_name: "Helium",
        aliases: &[],
    },
    FluidCatalogEntry {
        species: Species::Argon,
        display_name: "Argon",
        aliases: &[],
    },
    FluidCatalogEntry {
        species: Species::CarbonDioxide,
        display_name: "Carbon Dioxide",
        aliases: &["carbondioxide", "r744"],
    },
    FluidCatalogEntry {
        species: Species::CarbonMonoxide,
        display_name: "Carbon Monoxide",
        aliases: &["carbonmonoxide"],
    },
    FluidCatalogEntry {
        species: Species::Water,
        display_name: "Water",
        aliases: &["steam"],
    },
    FluidCatalogEntry {
        species: Species::Ammonia,
        display_name: "Ammonia",
        aliases: &["r717"],
    },
    FluidCatalogEntry {
        species: Species::SulfurDioxide,
        display_name: "Sulfur Dioxide",
        aliases: &["sulfurdioxide"],
    },
    FluidCatalogEntry {
        species: Species::NitrousOxide,
        display_name: "Nitrous Oxide",
        aliases: &["nitrousoxide"],
    },
    FluidCatalogEntry {
        species: Species::R134a,
        display_name: "R134a",
        aliases: &["hfc-134a", "tetrafluoroethane"],
    },
];

pub fn species_catalog() -> &'static [FluidCatalogEntry] {
    &SPECIES_CATALOG
}

pub fn filter_species_catalog(query: &str) -> Vec<FluidCatalogEntry> {
    SPECIES_CATALOG
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_covers_every_species_once() {
        let seen: HashSet<Species> = species_catalog().iter().map(|e| e.species).collect();
        assert_eq!(seen.len(), species_catalog().len());
        for s in Species::ALL {
            assert!(seen.contains(&s), "{s} missing from catalog");
        }
    }

    #[test]
    fn query_matches_formula_and_alias() {
        let hits = filter_species_catalog("c4h10");
        assert_eq!(hits.len(), 2);
        assert!(filter_species_catalog("r744")
            .iter()
            .any(|e| e.species == Species::CarbonDioxide));
    }

    #[test]
    fn empty_query_returns_all() {
        assert_eq!(filter_species_catalog("   ").len(), species_catalog().len());
    }
}
