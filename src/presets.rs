//! Example inputs
//!
//! Presets hold raw form text rather than parsed numbers, so loading one goes
//! through the same validation as typed input.

use serde::{Deserialize, Serialize};

/// A named example input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Lookup name, e.g. `evens`
    pub name: String,
    /// Comma-separated values
    pub values: String,
    /// Target text
    pub target: String,
    /// One-line description for listings
    #[serde(default)]
    pub description: Option<String>,
}

impl Preset {
    pub fn new(name: &str, values: &str, target: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            values: values.to_string(),
            target: target.to_string(),
            description: Some(description.to_string()),
        }
    }
}

/// Name of the preset the form starts with
pub const DEFAULT_PRESET: &str = "default";

/// Built-in example inputs
pub fn builtin() -> Vec<Preset> {
    vec![
        Preset::new(
            DEFAULT_PRESET,
            "23, 5, 17, 42, 9, 31, 14, 8",
            "17",
            "Unsorted values, find 17",
        ),
        // Quick examples
        Preset::new("one-to-nine", "1,2,3,4,5,6,7,8,9", "5", "1-9, find 5"),
        Preset::new(
            "evens",
            "2,4,6,8,10,12,14,16,18,20",
            "12",
            "Even numbers, find 12",
        ),
        Preset::new(
            "miss-high",
            "15,25,35,45,55,65,75,85,95",
            "99",
            "Target above every value, find 99",
        ),
        // Testing examples
        Preset::new("one-to-ten", "1,2,3,4,5,6,7,8,9,10", "7", "1-10, find 7"),
        Preset::new(
            "tens",
            "10,20,30,40,50,60,70",
            "25",
            "Multiples of ten, 25 is missing",
        ),
        Preset::new(
            "hundreds",
            "100,200,300,400,500",
            "300",
            "Hundreds, find 300 on the first probe",
        ),
        Preset::new(
            "fives",
            "5,15,25,35,45,55,65",
            "10",
            "Odd multiples of five, 10 is missing",
        ),
        Preset::new(
            "powers-of-two",
            "2,4,8,16,32,64,128",
            "32",
            "Powers of two, find 32",
        ),
    ]
}

/// Ordered collection of presets, looked up by name or 1-based number
#[derive(Debug, Clone)]
pub struct PresetGallery {
    presets: Vec<Preset>,
}

impl PresetGallery {
    /// Gallery of the built-in presets
    pub fn new() -> Self {
        Self {
            presets: builtin(),
        }
    }

    /// Add presets, replacing any built-in with the same name
    pub fn extend(&mut self, custom: impl IntoIterator<Item = Preset>) {
        for preset in custom {
            match self.presets.iter_mut().find(|p| p.name == preset.name) {
                Some(existing) => *existing = preset,
                None => self.presets.push(preset),
            }
        }
    }

    /// Find a preset by name or by its 1-based number
    pub fn find(&self, key: &str) -> Option<&Preset> {
        let key = key.trim();
        if let Ok(number) = key.parse::<usize>() {
            return number.checked_sub(1).and_then(|i| self.presets.get(i));
        }
        self.presets.iter().find(|p| p.name.eq_ignore_ascii_case(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// One line per preset: number, name, description
    pub fn listing(&self) -> String {
        self.iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "{:>2}. {:<14} {}  [{}] target {}",
                    i + 1,
                    p.name,
                    p.description.as_deref().unwrap_or(""),
                    p.values,
                    p.target
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for PresetGallery {
    fn default() -> Self {
        Self::new()
    }
}
