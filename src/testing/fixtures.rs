//! Pre-built datasets used across the docs and tests.

use crate::error::Result;
use crate::helpers::from_vec;
use crate::pipeline::Pipeline;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A person with a name and an age.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Signed age difference, `self.age - other.age`.
    #[must_use]
    pub fn age_difference(&self, other: &Self) -> i64 {
        i64::from(self.age) - i64::from(other.age)
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "{} - {}", self.name, self.age)
    }
}

/// John 20, Sara 22, Jane 22, Greg 35, in that order.
///
/// ```
/// use ironstream::testing::people;
///
/// assert_eq!(people()[3].to_string(), "Greg - 35");
/// ```
#[must_use]
pub fn people() -> Vec<Person> {
    vec![
        Person::new("John", 20),
        Person::new("Sara", 22),
        Person::new("Jane", 22),
        Person::new("Greg", 35),
    ]
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// `Brian, Nate, Neal, Raju, Sara, Scott`.
#[must_use]
pub fn friends() -> Vec<String> {
    names(&["Brian", "Nate", "Neal", "Raju", "Sara", "Scott"])
}

/// `Brian, Jackie, John, Mike`.
#[must_use]
pub fn editors() -> Vec<String> {
    names(&["Brian", "Jackie", "John", "Mike"])
}

/// `Kate, Ken, Nick, Paula, Zach`.
#[must_use]
pub fn comrades() -> Vec<String> {
    names(&["Kate", "Ken", "Nick", "Paula", "Zach"])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Bond,
    Stock,
}

/// A holding of some type and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    pub kind: AssetType,
    pub value: u32,
}

/// Two bonds (1000, 2000) and two stocks (3000, 4000).
#[must_use]
pub fn assets() -> Vec<Asset> {
    vec![
        Asset { kind: AssetType::Bond, value: 1000 },
        Asset { kind: AssetType::Bond, value: 2000 },
        Asset { kind: AssetType::Stock, value: 3000 },
        Asset { kind: AssetType::Stock, value: 4000 },
    ]
}

/// Sum of the values of the assets `selector` picks.
///
/// ```
/// use ironstream::testing::{AssetType, assets, total_asset_values};
///
/// assert_eq!(total_asset_values(assets(), |_| true)?, 10_000);
/// assert_eq!(total_asset_values(assets(), |a| a.kind == AssetType::Bond)?, 3_000);
/// # Ok::<(), ironstream::Error>(())
/// ```
///
/// # Errors
///
/// None in practice; the source is in memory.
pub fn total_asset_values<F>(assets: Vec<Asset>, selector: F) -> Result<u64>
where
    F: 'static + Send + Sync + Fn(&Asset) -> bool,
{
    let p = Pipeline::default();
    from_vec(&p, assets)
        .filter(selector)
        .sum_by(|a: &Asset| u64::from(a.value))
}
