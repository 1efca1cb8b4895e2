use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::clothes::errors::ColorError;
use crate::clothes::errors::SizeError;

/// Catalog entry entity.
///
/// Id and timestamps are assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct Clothes {
    pub id: ClothesId,
    pub name: String,
    pub color: Color,
    pub size: Size,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

/// Catalog entry identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClothesId(pub i64);

impl fmt::Display for ClothesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Pink,
    Black,
    White,
    Yellow,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Pink => "pink",
            Color::Black => "black",
            Color::White => "white",
            Color::Yellow => "yellow",
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pink" => Ok(Color::Pink),
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "yellow" => Ok(Color::Yellow),
            other => Err(ColorError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::S => "s",
            Size::M => "m",
            Size::L => "l",
            Size::Xl => "xl",
            Size::Xxl => "xxl",
        }
    }
}

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xs" => Ok(Size::Xs),
            "s" => Ok(Size::S),
            "m" => Ok(Size::M),
            "l" => Ok(Size::L),
            "xl" => Ok(Size::Xl),
            "xxl" => Ok(Size::Xxl),
            other => Err(SizeError::Unknown(other.to_string())),
        }
    }
}

/// Catalog entry as handed to the store; id and timestamps are assigned
/// there.
#[derive(Debug, Clone)]
pub struct NewClothes {
    pub name: String,
    pub color: Color,
    pub size: Size,
    pub photo_url: Option<String>,
}
