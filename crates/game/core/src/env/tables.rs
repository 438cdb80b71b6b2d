use std::collections::BTreeMap;

use super::character::{Character, CharacterClass, WeaponCategory};
use crate::error::PlanError;

/// Oracle providing rule tables that depend on class and equipment.
///
/// Tables are read-only for the whole optimization. Implementations must be
/// deterministic: the same key always yields the same value.
pub trait TablesOracle {
    /// Base attack delay for a class wielding a weapon category.
    ///
    /// Returns `None` if the class cannot use the category.
    fn weapon_delay(&self, class: CharacterClass, category: WeaponCategory) -> Option<f64>;
}

/// Immutable weapon-delay table keyed by class and weapon category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeaponDelayTable {
    delays: BTreeMap<(CharacterClass, WeaponCategory), f64>,
}

impl WeaponDelayTable {
    /// Monk attack delay with a mace.
    pub const MONK_MACE_DELAY: f64 = 57.5;

    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in delays.
    pub fn standard() -> Self {
        let mut delays = BTreeMap::new();
        delays.insert(
            (CharacterClass::Monk, WeaponCategory::Mace),
            Self::MONK_MACE_DELAY,
        );
        Self { delays }
    }

    /// Add or replace a delay (builder pattern).
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidWeaponDelay`] if `delay` is not a positive,
    /// finite number.
    pub fn with_delay(
        mut self,
        class: CharacterClass,
        category: WeaponCategory,
        delay: f64,
    ) -> Result<Self, PlanError> {
        validate_delay(class, category, delay)?;
        self.delays.insert((class, category), delay);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// Iterate `(class, category, delay)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (CharacterClass, WeaponCategory, f64)> + '_ {
        self.delays
            .iter()
            .map(|(&(class, category), &delay)| (class, category, delay))
    }
}

impl TablesOracle for WeaponDelayTable {
    fn weapon_delay(&self, class: CharacterClass, category: WeaponCategory) -> Option<f64> {
        self.delays.get(&(class, category)).copied()
    }
}

/// Look up and validate the delay for a character's equipped weapon.
///
/// # Errors
///
/// - [`PlanError::MissingWeaponDelay`] if the oracle has no entry
/// - [`PlanError::InvalidWeaponDelay`] if the entry is not positive and finite
pub fn weapon_delay_for(
    tables: &(impl TablesOracle + ?Sized),
    character: &Character,
) -> Result<f64, PlanError> {
    let class = character.class;
    let category = character.weapon.category;

    let delay = tables
        .weapon_delay(class, category)
        .ok_or(PlanError::MissingWeaponDelay { class, category })?;
    validate_delay(class, category, delay)?;

    Ok(delay)
}

fn validate_delay(
    class: CharacterClass,
    category: WeaponCategory,
    delay: f64,
) -> Result<(), PlanError> {
    if delay.is_finite() && delay > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidWeaponDelay {
            class,
            category,
            delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Weapon;

    struct NegativeDelays;

    impl TablesOracle for NegativeDelays {
        fn weapon_delay(&self, _: CharacterClass, _: WeaponCategory) -> Option<f64> {
            Some(-10.0)
        }
    }

    fn monk_with(category: WeaponCategory) -> Character {
        Character::new(CharacterClass::Monk, 50, Weapon::new(category, 100))
    }

    #[test]
    fn standard_table_knows_monk_mace() {
        let tables = WeaponDelayTable::standard();
        assert_eq!(tables.len(), 1);
        assert_eq!(
            weapon_delay_for(&tables, &monk_with(WeaponCategory::Mace)),
            Ok(57.5)
        );
    }

    #[test]
    fn unknown_pair_is_missing() {
        let tables = WeaponDelayTable::standard();
        assert_eq!(
            weapon_delay_for(&tables, &monk_with(WeaponCategory::Bow)),
            Err(PlanError::MissingWeaponDelay {
                class: CharacterClass::Monk,
                category: WeaponCategory::Bow,
            })
        );
    }

    #[test]
    fn builder_rejects_non_positive_delay() {
        let result = WeaponDelayTable::new().with_delay(
            CharacterClass::Monk,
            WeaponCategory::Knuckle,
            0.0,
        );
        assert!(matches!(result, Err(PlanError::InvalidWeaponDelay { .. })));

        let result = WeaponDelayTable::new().with_delay(
            CharacterClass::Monk,
            WeaponCategory::Knuckle,
            f64::NAN,
        );
        assert!(matches!(result, Err(PlanError::InvalidWeaponDelay { .. })));
    }

    #[test]
    fn custom_oracles_are_validated_on_lookup() {
        let result = weapon_delay_for(&NegativeDelays, &monk_with(WeaponCategory::Mace));
        assert!(matches!(
            result,
            Err(PlanError::InvalidWeaponDelay { delay, .. }) if delay == -10.0
        ));
    }

    #[test]
    fn builder_replaces_entries() {
        let tables = WeaponDelayTable::standard()
            .with_delay(CharacterClass::Monk, WeaponCategory::Mace, 60.0)
            .expect("valid delay");
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables.weapon_delay(CharacterClass::Monk, WeaponCategory::Mace),
            Some(60.0)
        );
        assert_eq!(tables.iter().count(), 1);
    }
}
