//! Part categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Closed set of hardware categories.
///
/// Declaration order is the canonical iteration order: catalog files are
/// merged in this order and the upgrade advisor walks categories in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Storage,
    Psu,
    Case,
    Cooler,
    Monitor,
    Keyboard,
    Mouse,
    Headset,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Cpu,
        Category::Gpu,
        Category::Motherboard,
        Category::Ram,
        Category::Storage,
        Category::Psu,
        Category::Case,
        Category::Cooler,
        Category::Monitor,
        Category::Keyboard,
        Category::Mouse,
        Category::Headset,
    ];

    /// Categories a curated build is assembled from
    pub const CORE: [Category; 8] = [
        Category::Cpu,
        Category::Gpu,
        Category::Motherboard,
        Category::Ram,
        Category::Storage,
        Category::Psu,
        Category::Case,
        Category::Cooler,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Gpu => "gpu",
            Category::Motherboard => "motherboard",
            Category::Ram => "ram",
            Category::Storage => "storage",
            Category::Psu => "psu",
            Category::Case => "case",
            Category::Cooler => "cooler",
            Category::Monitor => "monitor",
            Category::Keyboard => "keyboard",
            Category::Mouse => "mouse",
            Category::Headset => "headset",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "Graphics Card",
            Category::Motherboard => "Motherboard",
            Category::Ram => "Memory",
            Category::Storage => "Storage",
            Category::Psu => "Power Supply",
            Category::Case => "Case",
            Category::Cooler => "CPU Cooler",
            Category::Monitor => "Monitor",
            Category::Keyboard => "Keyboard",
            Category::Mouse => "Mouse",
            Category::Headset => "Headset",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Category::Cpu => "CPUs",
            Category::Gpu => "Graphics Cards",
            Category::Motherboard => "Motherboards",
            Category::Ram => "Memory",
            Category::Storage => "Storage",
            Category::Psu => "Power Supplies",
            Category::Case => "Cases",
            Category::Cooler => "CPU Coolers",
            Category::Monitor => "Monitors",
            Category::Keyboard => "Keyboards",
            Category::Mouse => "Mice",
            Category::Headset => "Headsets",
        }
    }

    /// Stem of the per-category catalog file (`parts/<stem>.json`)
    pub fn file_stem(self) -> &'static str {
        match self {
            Category::Cpu => "cpus",
            Category::Gpu => "gpus",
            Category::Motherboard => "motherboards",
            Category::Ram => "ram",
            Category::Storage => "storage",
            Category::Psu => "psus",
            Category::Case => "cases",
            Category::Cooler => "coolers",
            Category::Monitor => "monitors",
            Category::Keyboard => "keyboards",
            Category::Mouse => "mice",
            Category::Headset => "headsets",
        }
    }

    pub fn is_core(self) -> bool {
        Self::CORE.contains(&self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
