use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Istanbul,
    Ankara,
    Izmir,
}

impl City {
    pub const ALL: [City; 3] = [City::Istanbul, City::Ankara, City::Izmir];

    /// Identifier used on the command line and in the config file.
    pub fn id(&self) -> &'static str {
        match self {
            City::Istanbul => "istanbul",
            City::Ankara => "ankara",
            City::Izmir => "izmir",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Istanbul => "İstanbul",
            City::Ankara => "Ankara",
            City::Izmir => "İzmir",
        }
    }

    /// Convert a config/CLI identifier → enum (case-insensitive)
    pub fn from_id(id: &str) -> AppResult<Self> {
        match id.trim().to_lowercase().as_str() {
            "istanbul" => Ok(City::Istanbul),
            "ankara" => Ok(City::Ankara),
            "izmir" => Ok(City::Izmir),
            _ => Err(AppError::InvalidCity(id.to_string())),
        }
    }
}
