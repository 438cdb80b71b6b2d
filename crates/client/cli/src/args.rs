//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use statcraft_content::Profile;
use statcraft_core::{CharacterClass, WeaponCategory};
use strum::IntoEnumIterator;

use crate::config::CliConfig;

/// Find the stat distribution that maximizes damage per second
#[derive(Parser, Debug, Default)]
#[command(name = "statcraft")]
#[command(about = "Stat point planner for melee builds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Profile TOML with character, requirements and bonuses
    #[arg(long, value_name = "TOML")]
    pub profile: Option<PathBuf>,

    /// Weapon delay table TOML
    #[arg(long, value_name = "TOML")]
    pub tables: Option<PathBuf>,

    /// Base level
    #[arg(long)]
    pub level: Option<u32>,

    /// Plan for a transcended character
    #[arg(long)]
    pub transcended: bool,

    /// Job class (e.g. monk)
    #[arg(long, value_parser = parse_class)]
    pub class: Option<CharacterClass>,

    /// Weapon category (e.g. mace)
    #[arg(long, value_parser = parse_weapon)]
    pub weapon: Option<WeaponCategory>,

    /// Base weapon attack
    #[arg(long)]
    pub damage: Option<u32>,

    /// Multiplier applied to weapon attack
    #[arg(long)]
    pub damage_modifier: Option<f64>,

    /// Minimum flee a build must reach
    #[arg(long)]
    pub min_evasion: Option<f64>,

    /// Minimum hit a build must reach
    #[arg(long)]
    pub min_accuracy: Option<u32>,
}

impl Cli {
    /// Profile path from the flag, falling back to the environment.
    pub fn profile_path(&self, config: &CliConfig) -> Option<PathBuf> {
        self.profile.clone().or_else(|| config.profile_path.clone())
    }

    /// Tables path from the flag, falling back to the environment.
    pub fn tables_path(&self, config: &CliConfig) -> Option<PathBuf> {
        self.tables.clone().or_else(|| config.tables_path.clone())
    }

    /// Apply per-field overrides on top of a loaded profile.
    pub fn apply(&self, profile: &mut Profile) {
        let character = &mut profile.character;

        if let Some(level) = self.level {
            character.base_level = level;
        }
        if self.transcended {
            character.transcended = true;
        }
        if let Some(class) = self.class {
            character.class = class;
        }
        if let Some(category) = self.weapon {
            character.weapon.category = category;
        }
        if let Some(damage) = self.damage {
            character.weapon.damage = damage;
        }
        if let Some(modifier) = self.damage_modifier {
            character.weapon.damage_modifier = modifier;
        }
        if let Some(evasion) = self.min_evasion {
            profile.requirements.minimum_evasion = evasion;
        }
        if let Some(accuracy) = self.min_accuracy {
            profile.requirements.minimum_accuracy = accuracy;
        }
    }
}

fn parse_class(value: &str) -> Result<CharacterClass, String> {
    value
        .parse()
        .map_err(|_| format!("expected one of: {}", names::<CharacterClass>()))
}

fn parse_weapon(value: &str) -> Result<WeaponCategory, String> {
    value
        .parse()
        .map_err(|_| format!("expected one of: {}", names::<WeaponCategory>()))
}

fn names<E: IntoEnumIterator + ToString>() -> String {
    E::iter()
        .map(|variant| variant.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}
