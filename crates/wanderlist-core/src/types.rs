// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - Type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Destination category. Each category has its own catalog and visited set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beach,
    Mountain,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Beach, Category::Mountain];

    /// Tag used in composite keys and on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Mountain => "mountain",
        }
    }

    /// Storage key holding the visited set for this category
    pub fn visited_key(&self) -> &'static str {
        match self {
            Self::Beach => crate::kv::keys::VISITED_BEACHES,
            Self::Mountain => crate::kv::keys::VISITED_MOUNTAINS,
        }
    }

    /// Plural display label
    pub fn display_plural(&self) -> &'static str {
        match self {
            Self::Beach => "beaches",
            Self::Mountain => "mountains",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beach" => Ok(Self::Beach),
            "mountain" => Ok(Self::Mountain),
            other => Err(AppError::InvalidKey(format!("Unknown category: {}", other))),
        }
    }
}

/// Typed composite key for favorites and notes.
///
/// The persisted form is `{tag}_{id}`, e.g. `beach_b10`. Parsing splits at the
/// first underscore, so ids must not contain one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DestinationKey {
    pub category: Category,
    pub id: String,
}

impl DestinationKey {
    pub fn new(category: Category, id: impl Into<String>) -> Self {
        Self {
            category,
            id: id.into(),
        }
    }

    pub fn beach(id: impl Into<String>) -> Self {
        Self::new(Category::Beach, id)
    }

    pub fn mountain(id: impl Into<String>) -> Self {
        Self::new(Category::Mountain, id)
    }
}

impl fmt::Display for DestinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.category.tag(), self.id)
    }
}

impl FromStr for DestinationKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, id) = s
            .split_once('_')
            .ok_or_else(|| AppError::InvalidKey(format!("Missing separator in key: {}", s)))?;

        if id.is_empty() {
            return Err(AppError::InvalidKey(format!("Empty id in key: {}", s)));
        }

        Ok(Self::new(tag.parse()?, id))
    }
}

impl TryFrom<String> for DestinationKey {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DestinationKey> for String {
    fn from(key: DestinationKey) -> Self {
        key.to_string()
    }
}

/// Geographic region of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    WesternCoast,
    EasternCoast,
    WesternGhats,
    EasternGhats,
    NorthIndia,
    Himalayas,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::WesternCoast,
        Region::EasternCoast,
        Region::WesternGhats,
        Region::EasternGhats,
        Region::NorthIndia,
        Region::Himalayas,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::WesternCoast => "Western Coast",
            Self::EasternCoast => "Eastern Coast",
            Self::WesternGhats => "Western Ghats",
            Self::EasternGhats => "Eastern Ghats",
            Self::NorthIndia => "North India",
            Self::Himalayas => "Himalayas",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Indian state (or union territory) a destination lies in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndianState {
    Gujarat,
    Maharashtra,
    Goa,
    Karnataka,
    Kerala,
    TamilNadu,
    AndhraPradesh,
    Odisha,
    WestBengal,
    Uttarakhand,
    HimachalPradesh,
    JammuKashmir,
    Sikkim,
    ArunachalPradesh,
    Meghalaya,
    Rajasthan,
    MadhyaPradesh,
    Telangana,
}

impl IndianState {
    pub const ALL: [IndianState; 18] = [
        IndianState::Gujarat,
        IndianState::Maharashtra,
        IndianState::Goa,
        IndianState::Karnataka,
        IndianState::Kerala,
        IndianState::TamilNadu,
        IndianState::AndhraPradesh,
        IndianState::Odisha,
        IndianState::WestBengal,
        IndianState::Uttarakhand,
        IndianState::HimachalPradesh,
        IndianState::JammuKashmir,
        IndianState::Sikkim,
        IndianState::ArunachalPradesh,
        IndianState::Meghalaya,
        IndianState::Rajasthan,
        IndianState::MadhyaPradesh,
        IndianState::Telangana,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gujarat => "Gujarat",
            Self::Maharashtra => "Maharashtra",
            Self::Goa => "Goa",
            Self::Karnataka => "Karnataka",
            Self::Kerala => "Kerala",
            Self::TamilNadu => "Tamil Nadu",
            Self::AndhraPradesh => "Andhra Pradesh",
            Self::Odisha => "Odisha",
            Self::WestBengal => "West Bengal",
            Self::Uttarakhand => "Uttarakhand",
            Self::HimachalPradesh => "Himachal Pradesh",
            Self::JammuKashmir => "Jammu & Kashmir",
            Self::Sikkim => "Sikkim",
            Self::ArunachalPradesh => "Arunachal Pradesh",
            Self::Meghalaya => "Meghalaya",
            Self::Rajasthan => "Rajasthan",
            Self::MadhyaPradesh => "Madhya Pradesh",
            Self::Telangana => "Telangana",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for IndianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Built-in avatar choices offered by the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Avatar {
    Backpacker,
    Climber,
    Beach,
}

impl Avatar {
    pub const ALL: [Avatar; 3] = [Avatar::Backpacker, Avatar::Climber, Avatar::Beach];

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(&self) -> u32 {
        match self {
            Self::Backpacker => 0,
            Self::Climber => 1,
            Self::Beach => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Backpacker => "Backpacker",
            Self::Climber => "Climber",
            Self::Beach => "Beach lover",
        }
    }
}

/// The single user profile record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Not range-checked here; frontends only submit indices from [`Avatar::ALL`]
    pub avatar_index: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Traveler".to_string(),
            avatar_index: 0,
        }
    }
}

impl UserProfile {
    pub fn avatar(&self) -> Option<Avatar> {
        Avatar::from_index(self.avatar_index)
    }
}

/// A personal note attached to one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Composite key string, `{type}_{id}`
    pub id: String,
    pub destination_id: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub content: String,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds
    pub updated_at: i64,
}

impl Note {
    pub fn key(&self) -> DestinationKey {
        DestinationKey::new(self.category, self.destination_id.clone())
    }
}

/// Which keys a bulk clear removes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClearScope {
    /// Visited sets only
    ProgressOnly,
    /// Visited sets, favorites and notes
    #[default]
    Everything,
}

/// Application configuration (frontend-agnostic)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Directory for persisted data. None means the platform config directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// What "clear all data" removes
    #[serde(default)]
    pub clear_scope: ClearScope,
}

/// Error types for the application
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    FileIo(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileIo(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
