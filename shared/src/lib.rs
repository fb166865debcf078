//! Shared types for the riftview services: platform/cluster routing,
//! wire DTOs, view-models and the upstream API traits.

use std::fmt;
use std::str::FromStr;

pub mod dto;
pub mod errors;
pub mod traits;

pub use errors::{InvalidRegion, UpstreamError};

/// Platform routing values for Riot API (Summoner-V4, League-V4,
/// Champion-Mastery-V4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Br1,
    Na1,
    La1,
    La2,
    Eun1,
    Euw1,
    Tr1,
    Ru,
    Jp1,
    Kr,
    Oc1,
    Sg2,
}

impl Platform {
    pub const ALL: [Platform; 12] = [
        Self::Br1,
        Self::Na1,
        Self::La1,
        Self::La2,
        Self::Eun1,
        Self::Euw1,
        Self::Tr1,
        Self::Ru,
        Self::Jp1,
        Self::Kr,
        Self::Oc1,
        Self::Sg2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Br1 => "br1",
            Self::Na1 => "na1",
            Self::La1 => "la1",
            Self::La2 => "la2",
            Self::Eun1 => "eun1",
            Self::Euw1 => "euw1",
            Self::Tr1 => "tr1",
            Self::Ru => "ru",
            Self::Jp1 => "jp1",
            Self::Kr => "kr",
            Self::Oc1 => "oc1",
            Self::Sg2 => "sg2",
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    /// Continental cluster serving Account-V1 and Match-V5 for this platform.
    pub fn cluster(self) -> Cluster {
        match self {
            Self::Br1 | Self::Na1 | Self::La1 | Self::La2 => Cluster::Americas,
            Self::Eun1 | Self::Euw1 | Self::Tr1 | Self::Ru => Cluster::Europe,
            Self::Jp1 | Self::Kr => Cluster::Asia,
            Self::Oc1 | Self::Sg2 => Cluster::Sea,
        }
    }
}

impl FromStr for Platform {
    type Err = InvalidRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BR1" => Ok(Self::Br1),
            "NA1" => Ok(Self::Na1),
            "LA1" => Ok(Self::La1),
            "LA2" => Ok(Self::La2),
            "EUN1" => Ok(Self::Eun1),
            "EUW1" => Ok(Self::Euw1),
            "TR1" => Ok(Self::Tr1),
            "RU" => Ok(Self::Ru),
            "JP1" => Ok(Self::Jp1),
            "KR" => Ok(Self::Kr),
            "OC1" => Ok(Self::Oc1),
            "SG2" => Ok(Self::Sg2),
            _ => Err(InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Regional routing values for Riot API (Account-V1, Match-V5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    Americas,
    Europe,
    Asia,
    Sea,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Europe => "europe",
            Self::Asia => "asia",
            Self::Sea => "sea",
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = InvalidRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "americas" => Ok(Self::Americas),
            "europe" => Ok(Self::Europe),
            "asia" => Ok(Self::Asia),
            "sea" => Ok(Self::Sea),
            _ => Err(InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
