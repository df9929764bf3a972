use serde::{Deserialize, Serialize};

use crate::enums::{Race, Sex};

/// Patient demographics supplied alongside a report. Every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default)]
    pub sex: Sex,
    /// Age in whole years. `0` is treated the same as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default)]
    pub race: Race,
}

impl Demographics {
    pub fn new(sex: Sex, age: Option<u32>) -> Self {
        Self {
            sex,
            age,
            race: Race::Unspecified,
        }
    }

    #[must_use]
    pub fn with_race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    /// Age when it is a usable positive number.
    pub fn known_age(&self) -> Option<u32> {
        self.age.filter(|age| *age > 0)
    }

    pub fn known_sex(&self) -> Option<Sex> {
        self.sex.is_known().then_some(self.sex)
    }
}
