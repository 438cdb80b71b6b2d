//! Plain-text rendering of a search result.

use std::fmt;

use statcraft_content::Profile;
use statcraft_core::{Attribute, Optimum};
use strum::IntoEnumIterator;

/// Search result paired with the profile it was computed for.
pub struct Report<'a> {
    pub profile: &'a Profile,
    pub optimum: &'a Optimum,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let character = &self.profile.character;
        let requirements = &self.profile.requirements;
        let derived = &self.optimum.evaluation.derived;

        writeln!(
            f,
            "{} level {}{} with {} ({} atk x{}), {} stat points",
            character.class,
            character.base_level,
            if character.transcended { " (transcended)" } else { "" },
            character.weapon.category,
            character.weapon.damage,
            character.weapon.damage_modifier,
            character.stat_points(),
        )?;

        let names: Vec<_> = Attribute::iter().map(|a| a.to_string()).collect();
        writeln!(f, "{:<10} ({})", "stats", names.join(", "))?;
        writeln!(f, "{:<10} {}", "", self.optimum.attributes)?;
        writeln!(f, "{:<10} {:.3}", "dps", self.optimum.dps())?;
        writeln!(
            f,
            "{:<10} {:.1} (min {})",
            "flee", derived.evasion, requirements.minimum_evasion
        )?;
        writeln!(
            f,
            "{:<10} {} (min {})",
            "hit", derived.accuracy, requirements.minimum_accuracy
        )?;
        writeln!(
            f,
            "{:<10} {}",
            "status",
            self.optimum.evaluation.feasibility.as_str()
        )?;
        write!(
            f,
            "{:<10} {}",
            "examined", self.optimum.candidates_examined
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statcraft_core::{
        Attributes, CombatBonuses, DerivedStats, Evaluation, Feasibility, Requirements,
    };

    fn optimum(feasibility: Feasibility, dps: f64) -> Optimum {
        let attributes = Attributes::new([53, 99, 1, 1, 35, 5]);
        Optimum {
            attributes,
            evaluation: Evaluation {
                derived: DerivedStats::compute(84, &attributes, &CombatBonuses::default()),
                feasibility,
                dps,
            },
            candidates_examined: 42,
        }
    }

    #[test]
    fn feasible_report_lists_build() {
        let profile = Profile::default();
        let optimum = optimum(Feasibility::Feasible, 1704.2866967219377);
        let text = Report {
            profile: &profile,
            optimum: &optimum,
        }
        .to_string();

        assert!(text.starts_with("Monk level 84 with Mace (175 atk x1.4), 961 stat points"));
        assert!(text.contains("(53, 99, 1, 1, 35, 5)"));
        assert!(text.contains("1704.287"));
        assert!(text.contains("hit        119 (min 116)"));
        assert!(text.contains("status     feasible"));
        assert!(text.ends_with("examined   42"));
    }

    #[test]
    fn infeasible_report_names_reason() {
        let mut profile = Profile::default();
        profile.requirements = Requirements::new(0.0, 500);
        profile.character = profile.character.transcended(true);
        let optimum = optimum(Feasibility::AccuracyBelowMinimum, 0.0);
        let text = Report {
            profile: &profile,
            optimum: &optimum,
        }
        .to_string();

        assert!(text.contains("(transcended)"));
        assert!(text.contains("dps        0.000"));
        assert!(text.contains("status     accuracy below minimum"));
    }
}
