//! # Domain Model
//!
//! The collection is a flat list of [`Entry`] records. Three of an entry's fields come
//! from closed vocabularies ([`Color`], [`DecorType`], [`Status`]); everything that
//! enters the crate as text (user input, stored payloads) is turned into one of these
//! enums at the boundary, so the rest of the code never sees an out-of-range label.
//!
//! ## Labels
//!
//! Each enumeration has one canonical label per variant (`"Sweet Shop"`,
//! `"Winged"`, ...). Canonical labels are what gets stored and exported.
//!
//! - Decoding stored data is strict: only canonical labels are accepted.
//! - Parsing user input ([`std::str::FromStr`]) is lenient about case and
//!   separators, so `sweet-shop`, `SWEET_SHOP` and `sweet shop` all resolve to
//!   [`DecorType::SweetShop`].
//!
//! ## Mutability
//!
//! `id`, `color`, `decor_type` and `created_at` are fixed when an entry is created.
//! Only `name` and `status` change afterwards, and only through an [`EntryPatch`],
//! which cannot express anything else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{PikdexError, Result};

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in presentation order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Exact canonical label lookup.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = PikdexError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = normalize_label(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize_label(v.as_str()) == wanted)
                    .ok_or_else(|| PikdexError::InvalidValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                Self::from_label(&label).ok_or_else(|| {
                    serde::de::Error::custom(format!("unknown {} `{}`", $kind, label))
                })
            }
        }
    };
}

labeled_enum! {
    /// Color classification of a specimen.
    Color, "color" {
        Red => "Red",
        Yellow => "Yellow",
        Blue => "Blue",
        White => "White",
        Purple => "Purple",
        Rock => "Rock",
        Winged => "Winged",
        Ice => "Ice",
        Glow => "Glow",
    }
}

labeled_enum! {
    /// Category of the place a specimen was found at.
    DecorType, "decor type" {
        Roadside => "Roadside",
        Restaurant => "Restaurant",
        Cafe => "Cafe",
        SweetShop => "Sweet Shop",
        MovieTheater => "Movie Theater",
        Pharmacy => "Pharmacy",
        Zoo => "Zoo",
        Forest => "Forest",
        Water => "Water",
        PostOffice => "Post Office",
        ArtGallery => "Art Gallery",
        Airport => "Airport",
        Station => "Station",
        Beach => "Beach",
        BurgerShop => "Burger Shop",
        Library => "Library",
        Supermarket => "Supermarket",
        Bakery => "Bakery",
        Park => "Park",
        HairSalon => "Hair Salon",
        ClothesStore => "Clothes Store",
        Weather => "Weather",
        Mountain => "Mountain",
        ThemePark => "Theme Park",
        BusStop => "Bus Stop",
        Bridge => "Bridge",
        Hotel => "Hotel",
        Makeup => "Makeup",
        CurryShop => "Curry Shop",
        ApplianceStore => "Appliance Store",
    }
}

labeled_enum! {
    /// Lifecycle stage. `Decor` is the terminal stage; transitions are unrestricted.
    Status, "status" {
        Seedling => "Seedling",
        Pikmin => "Pikmin",
        Decor => "Decor",
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Seedling
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name used when an entry is submitted without one.
pub fn default_name(color: Color) -> String {
    format!("{} Pikmin", color)
}

/// Names are kept exactly as typed; only an empty one is replaced.
fn name_or_default(name: String, color: Color) -> String {
    if name.is_empty() {
        default_name(color)
    } else {
        name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    pub name: String,
    pub color: Color,
    pub decor_type: DecorType,
    pub status: Status,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Entry {
    pub fn from_draft(draft: NewEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name_or_default(draft.name, draft.color),
            color: draft.color,
            decor_type: draft.decor_type,
            status: draft.status,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.created_at).unwrap_or_default()
    }
}

/// What a user submits when logging a new specimen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub color: Color,
    pub decor_type: DecorType,
    pub status: Status,
}

impl NewEntry {
    pub fn new(color: Color, decor_type: DecorType) -> Self {
        Self {
            name: String::new(),
            color,
            decor_type,
            status: Status::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Partial update of an entry. Only the mutable fields are representable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub status: Option<Status>,
}

impl EntryPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none()
    }

    /// Patched fields are assigned as given; clearing a name leaves it empty.
    pub fn apply(&self, entry: &mut Entry) {
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(status) = self.status {
            entry.status = status;
        }
    }
}
