//! Fighter profile: the read-only input of the simulation engine.
//!
//! Two attribute families coexist. The learned statistics (`slpm`, `sapm`,
//! takedown/submission rates, accuracy and defense percentages) feed the
//! trained win model. The legacy gamified attributes (0-100 scale) drive the
//! heuristic probability fallback and all round/finish flavor.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Striking power blend over the gamified attributes.
const STRIKING_WEIGHTS: (f64, f64, f64) = (0.5, 0.3, 0.2);
/// Grappling power blend over the gamified attributes.
const GRAPPLING_WEIGHTS: (f64, f64, f64) = (0.5, 0.3, 0.2);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    // Physical measurements (model features).
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_lbs: Option<f64>,
    #[serde(default)]
    pub reach_cm: Option<f64>,

    // Learned statistics (model features). Missing values are substituted
    // with 0.0 when building feature differentials.
    #[serde(default)]
    pub slpm: Option<f64>,
    #[serde(default)]
    pub sapm: Option<f64>,
    #[serde(default)]
    pub str_acc: Option<f64>,
    #[serde(default)]
    pub str_def: Option<f64>,
    #[serde(default)]
    pub td_avg: Option<f64>,
    #[serde(default)]
    pub td_acc: Option<f64>,
    #[serde(default)]
    pub td_def: Option<f64>,
    #[serde(default)]
    pub sub_avg: Option<f64>,

    // Legacy gamified attributes, 0-100. Heuristic fallback and round flavor only.
    pub striking: f64,
    pub grappling: f64,
    pub defense: f64,
    pub stamina: f64,
    pub speed: f64,
    pub strategy: f64,

    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,

    /// Soft-deleted fighters are invisible to the engine.
    #[serde(default)]
    pub deleted: bool,
}

impl Fighter {
    /// Minimal profile carrying only the gamified attributes, in declaration
    /// order: striking, grappling, defense, stamina, speed, strategy. Learned
    /// statistics stay unset, which routes probability through the heuristic.
    pub fn gamified(name: impl Into<String>, attributes: [f64; 6]) -> Self {
        let [striking, grappling, defense, stamina, speed, strategy] = attributes;
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            nickname: None,
            height_cm: None,
            weight_lbs: None,
            reach_cm: None,
            slpm: None,
            sapm: None,
            str_acc: None,
            str_def: None,
            td_avg: None,
            td_acc: None,
            td_def: None,
            sub_avg: None,
            striking,
            grappling,
            defense,
            stamina,
            speed,
            strategy,
            wins: 0,
            losses: 0,
            draws: 0,
            deleted: false,
        }
    }

    /// Striking power: 0.5 striking + 0.3 speed + 0.2 defense.
    pub fn striking_power(&self) -> f64 {
        let (w_main, w_speed, w_def) = STRIKING_WEIGHTS;
        self.striking * w_main + self.speed * w_speed + self.defense * w_def
    }

    /// Grappling power: 0.5 grappling + 0.3 stamina + 0.2 strategy.
    pub fn grappling_power(&self) -> f64 {
        let (w_main, w_stam, w_strat) = GRAPPLING_WEIGHTS;
        self.grappling * w_main + self.stamina * w_stam + self.strategy * w_strat
    }

    /// Overall power: unweighted mean of the six gamified attributes.
    pub fn overall_power(&self) -> f64 {
        (self.striking + self.grappling + self.defense + self.stamina + self.speed + self.strategy)
            / 6.0
    }

    /// Career record as `wins-losses-draws`.
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.draws)
    }

    /// Gamified attributes outside the 0-100 scale, reported as
    /// `"<attribute>=<value>"`. Empty for a well-formed profile.
    pub fn attribute_violations(&self) -> Vec<String> {
        let attributes = [
            ("striking", self.striking),
            ("grappling", self.grappling),
            ("defense", self.defense),
            ("stamina", self.stamina),
            ("speed", self.speed),
            ("strategy", self.strategy),
        ];
        attributes
            .iter()
            .filter(|(_, value)| !(0.0..=100.0).contains(value))
            .map(|(name, value)| format!("{name}={value}"))
            .collect()
    }
}
