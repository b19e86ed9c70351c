//! Domain data structures for laundromats, garment loads, and notifications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in laundromats shipped with the application.
pub enum Laundromats {
    /// The corner laundromat, unhurried but thorough.
    Corner,
    /// Same-block express service.
    Express,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a laundromat known to suds.
pub struct LaundromatId(pub String);

impl fmt::Display for Laundromats {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Laundromats::Corner => "corner",
            Laundromats::Express => "express",
        };
        write!(formatter, "{slug}")
    }
}

impl From<Laundromats> for LaundromatId {
    fn from(laundromat: Laundromats) -> Self {
        LaundromatId(laundromat.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing a laundromat and its human-friendly name.
pub struct LaundromatMeta {
    /// Unique identifier.
    pub id: LaundromatId,
    /// Display name shown to patrons.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A load of garments, described in the patron's own words.
pub struct GarmentLoad(pub String);

impl GarmentLoad {
    /// Construct a load from any description, the empty one included.
    #[must_use]
    pub fn new<S: Into<String>>(description: S) -> Self {
        Self(description.into())
    }
}

impl fmt::Display for GarmentLoad {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A load that came back from a laundromat.
pub struct CleanedLoad {
    /// Description of the load after cleaning.
    pub description: String,
    /// Laundromat that did the work.
    pub laundromat: LaundromatId,
}

impl CleanedLoad {
    /// Derive the cleaned description for a load.
    ///
    /// The description depends only on the load text, so the same load yields
    /// the same description whichever laundromat did the work.
    #[must_use]
    pub fn from_load(load: &GarmentLoad, laundromat: LaundromatId) -> Self {
        Self {
            description: format!("Cleaned {load}"),
            laundromat,
        }
    }
}

impl fmt::Display for CleanedLoad {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered steps a load moves through while being cleaned.
pub enum Stage {
    /// On its way to the laundromat.
    Pickup,
    /// In the wash.
    Washing,
    /// On its way back.
    Return,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Observable event emitted while a cleaning request is in flight.
///
/// Notifications narrate progress; they are not part of any return value.
pub enum Notification {
    /// A patron handed a load over.
    Requested {
        /// Name of the requesting patron.
        patron: String,
        /// The load as described by the patron.
        load: GarmentLoad,
    },
    /// A provider reported progress on a load.
    Progress {
        /// Laundromat doing the work.
        laundromat: LaundromatId,
        /// Step the load just entered.
        stage: Stage,
        /// Narration for this step, worded by the provider.
        message: String,
    },
    /// A patron got their load back.
    Received {
        /// Name of the requesting patron.
        patron: String,
        /// The cleaned load.
        cleaned: CleanedLoad,
    },
}

impl Notification {
    /// Stage carried by a progress notification, if any.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Notification::Progress { stage, .. } => Some(*stage),
            Notification::Requested { .. } | Notification::Received { .. } => None,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Requested { patron, load } => {
                write!(formatter, "{patron}: \"I need my {load} washed!\"")
            }
            Notification::Progress { message, .. } => formatter.write_str(message),
            Notification::Received { patron, cleaned } => {
                write!(formatter, "{patron}: \"Thanks! I got my {cleaned}!\"")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaned_description_prefixes_the_load() {
        let load = GarmentLoad::new("shirts");
        let cleaned = CleanedLoad::from_load(&load, Laundromats::Corner.into());

        assert_eq!(cleaned.description, "Cleaned shirts");
    }

    #[test]
    fn empty_load_still_gets_the_marker() {
        let cleaned = CleanedLoad::from_load(&GarmentLoad::new(""), Laundromats::Corner.into());

        assert_eq!(cleaned.description, "Cleaned ");
    }

    #[test]
    fn cleaned_description_is_deterministic() {
        let load = GarmentLoad::new("wool socks");
        let first = CleanedLoad::from_load(&load, Laundromats::Corner.into());
        let second = CleanedLoad::from_load(&load, Laundromats::Express.into());

        assert_eq!(first.description, second.description);
    }

    #[test]
    fn requested_line_names_patron_and_load() {
        let line = Notification::Requested {
            patron: String::from("Alex"),
            load: GarmentLoad::new("shirts"),
        }
        .to_string();

        assert!(line.contains("Alex"), "line should name the patron: {line}");
        assert!(line.contains("shirts"), "line should name the load: {line}");
    }

    #[test]
    fn received_line_embeds_the_cleaned_description() {
        let cleaned = CleanedLoad::from_load(&GarmentLoad::new("shirts"), Laundromats::Corner.into());
        let line = Notification::Received {
            patron: String::from("Alex"),
            cleaned,
        }
        .to_string();

        assert!(line.contains("Cleaned shirts"), "line should embed the result: {line}");
    }
}
