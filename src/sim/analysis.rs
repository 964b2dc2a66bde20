//! Matchup analysis without simulation: probabilities, advantages, and a
//! short written read of the fight. Nothing here touches persistence or
//! randomness.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::fighter::Fighter;
use crate::error::SimError;
use crate::model::WinModel;

use super::fight::FightSimulator;
use super::outcome::finish_probabilities;
use super::probability::{win_probability, EstimatePath};
use super::round2;

/// Attribute-power gap treated as a significant advantage.
const SIGNIFICANT_GAP: f64 = 15.0;
/// Probability above which one side reads as the clear favorite.
const CLEAR_FAVORITE_PROB: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupPrediction {
    pub fighter1_id: Uuid,
    pub fighter2_id: Uuid,
    pub fighter1_name: String,
    pub fighter2_name: String,
    pub fighter1_win_probability: f64,
    pub fighter2_win_probability: f64,
    /// Draws are rare enough to be called zero.
    pub draw_probability: f64,
    pub ko_probability: f64,
    pub submission_probability: f64,
    pub decision_probability: f64,
    pub probability_path: EstimatePath,
    pub striking_advantage: String,
    pub grappling_advantage: String,
    pub overall_advantage: String,
    pub analysis: String,
    pub key_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeComparison {
    pub fighter1: f64,
    pub fighter2: f64,
    pub advantage: String,
    pub diff: f64,
}

fn compare_attribute(name1: &str, value1: f64, name2: &str, value2: f64) -> AttributeComparison {
    AttributeComparison {
        fighter1: value1,
        fighter2: value2,
        advantage: if value1 > value2 { name1.to_string() } else { name2.to_string() },
        diff: round2((value1 - value2).abs()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterCard {
    pub id: Uuid,
    pub name: String,
    pub record: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterComparison {
    pub fighter1: FighterCard,
    pub fighter2: FighterCard,
    pub striking: AttributeComparison,
    pub grappling: AttributeComparison,
    pub defense: AttributeComparison,
    pub stamina: AttributeComparison,
    pub speed: AttributeComparison,
    pub strategy: AttributeComparison,
    pub overall: AttributeComparison,
}

/// Predict a matchup without running rounds: win and finish-type
/// probabilities plus a textual read of where the fight is won.
pub fn predict_matchup(
    model: Option<&dyn WinModel>,
    fighter1: &Fighter,
    fighter2: &Fighter,
) -> MatchupPrediction {
    let probability = win_probability(model, fighter1, fighter2);
    let finish = finish_probabilities(fighter1, fighter2);

    let striking1 = fighter1.striking_power();
    let striking2 = fighter2.striking_power();
    let grappling1 = fighter1.grappling_power();
    let grappling2 = fighter2.grappling_power();

    let name = |first: bool| {
        if first { fighter1.name.clone() } else { fighter2.name.clone() }
    };
    let striking_advantage = name(striking1 > striking2);
    let grappling_advantage = name(grappling1 > grappling2);
    let overall_advantage = name(probability.fighter1 > probability.fighter2);

    let mut analysis_parts = Vec::new();
    if probability.fighter1 > CLEAR_FAVORITE_PROB || probability.fighter2 > CLEAR_FAVORITE_PROB {
        let favorite = name(probability.fighter1 > probability.fighter2);
        analysis_parts.push(format!("{favorite} is the clear favorite in this fight."));
    } else {
        analysis_parts.push("This fight is evenly matched and could go either way.".to_string());
    }
    if (striking1 - striking2).abs() > SIGNIFICANT_GAP {
        analysis_parts.push(format!("{striking_advantage} has a significant striking advantage."));
    }
    if (grappling1 - grappling2).abs() > SIGNIFICANT_GAP {
        analysis_parts
            .push(format!("{grappling_advantage} has a significant grappling advantage."));
    }

    let mut key_factors = Vec::new();
    if fighter1.stamina > 80.0 || fighter2.stamina > 80.0 {
        let cardio = name(fighter1.stamina > fighter2.stamina);
        key_factors.push(format!("{cardio}'s cardio could be decisive"));
    }
    if fighter1.strategy > 85.0 || fighter2.strategy > 85.0 {
        let tactician = name(fighter1.strategy > fighter2.strategy);
        key_factors.push(format!("{tactician}'s fight IQ could make the difference"));
    }

    MatchupPrediction {
        fighter1_id: fighter1.id,
        fighter2_id: fighter2.id,
        fighter1_name: fighter1.name.clone(),
        fighter2_name: fighter2.name.clone(),
        fighter1_win_probability: probability.fighter1,
        fighter2_win_probability: probability.fighter2,
        draw_probability: 0.0,
        ko_probability: finish.ko,
        submission_probability: finish.submission,
        decision_probability: finish.decision,
        probability_path: probability.path,
        striking_advantage,
        grappling_advantage,
        overall_advantage,
        analysis: analysis_parts.join(" "),
        key_factors,
    }
}

/// Attribute-by-attribute comparison of two profiles.
pub fn compare_fighters(fighter1: &Fighter, fighter2: &Fighter) -> FighterComparison {
    let card = |f: &Fighter| FighterCard { id: f.id, name: f.name.clone(), record: f.record() };
    FighterComparison {
        fighter1: card(fighter1),
        fighter2: card(fighter2),
        striking: compare_attribute(&fighter1.name, fighter1.striking, &fighter2.name, fighter2.striking),
        grappling: compare_attribute(&fighter1.name, fighter1.grappling, &fighter2.name, fighter2.grappling),
        defense: compare_attribute(&fighter1.name, fighter1.defense, &fighter2.name, fighter2.defense),
        stamina: compare_attribute(&fighter1.name, fighter1.stamina, &fighter2.name, fighter2.stamina),
        speed: compare_attribute(&fighter1.name, fighter1.speed, &fighter2.name, fighter2.speed),
        strategy: compare_attribute(&fighter1.name, fighter1.strategy, &fighter2.name, fighter2.strategy),
        overall: compare_attribute(
            &fighter1.name,
            round2(fighter1.overall_power()),
            &fighter2.name,
            round2(fighter2.overall_power()),
        ),
    }
}

impl FightSimulator<'_> {
    /// Resolve both fighters and predict the matchup without simulating.
    pub fn predict(
        &self,
        fighter1_id: Uuid,
        fighter2_id: Uuid,
    ) -> Result<MatchupPrediction, SimError> {
        let fighter1 = self.resolve(fighter1_id, "fighter 1")?;
        let fighter2 = self.resolve(fighter2_id, "fighter 2")?;
        Ok(predict_matchup(self.model(), &fighter1, &fighter2))
    }

    /// Resolve both fighters and compare them attribute by attribute.
    pub fn compare(
        &self,
        fighter1_id: Uuid,
        fighter2_id: Uuid,
    ) -> Result<FighterComparison, SimError> {
        let fighter1 = self.resolve(fighter1_id, "fighter 1")?;
        let fighter2 = self.resolve(fighter2_id, "fighter 2")?;
        Ok(compare_fighters(&fighter1, &fighter2))
    }
}
