mod basic;
mod combat;

use clap::ValueEnum;

use crate::catalog::Catalog;

/// The fixture catalogs shipped with the crate.
#[derive(Debug, Clone, ValueEnum)]
pub enum Catalogs {
    /// Single sword attack, no success condition
    Basic,
    /// Sword attack with an armour class check, plus initiative
    Combat,
}

impl Catalogs {
    pub fn build(&self) -> Catalog {
        match self {
            Catalogs::Basic => basic::catalog(),
            Catalogs::Combat => combat::catalog(),
        }
    }
}
