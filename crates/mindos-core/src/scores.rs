//! The eight-axis trait score vector and its axis catalog.
//!
//! A session starts from the zero vector; the accumulator adds each
//! choice's weights (and biometric re-weighting) into it, and the
//! classifier reads it once accumulation is finished.

use serde::{Deserialize, Serialize};

/// One named dimension of the trait score vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitAxis {
    ImpulseControl,
    Planning,
    RiskTolerance,
    MoneySense,
    SelfControl,
    BoundarySetting,
    SelfAdvocacy,
    Empathy,
}

impl TraitAxis {
    pub const ALL: [TraitAxis; 8] = [
        TraitAxis::ImpulseControl,
        TraitAxis::Planning,
        TraitAxis::RiskTolerance,
        TraitAxis::MoneySense,
        TraitAxis::SelfControl,
        TraitAxis::BoundarySetting,
        TraitAxis::SelfAdvocacy,
        TraitAxis::Empathy,
    ];

    /// The key this axis carries in scenario content weight maps.
    pub fn key(&self) -> &'static str {
        match self {
            TraitAxis::ImpulseControl => "impulseControl",
            TraitAxis::Planning => "planning",
            TraitAxis::RiskTolerance => "riskTolerance",
            TraitAxis::MoneySense => "moneySense",
            TraitAxis::SelfControl => "selfControl",
            TraitAxis::BoundarySetting => "boundarySetting",
            TraitAxis::SelfAdvocacy => "selfAdvocacy",
            TraitAxis::Empathy => "empathy",
        }
    }

    /// Resolve a content key to an axis. Unrecognized keys return `None`
    /// and are dropped by callers without error.
    pub fn from_key(key: &str) -> Option<TraitAxis> {
        match key {
            "impulseControl" => Some(TraitAxis::ImpulseControl),
            "planning" => Some(TraitAxis::Planning),
            "riskTolerance" => Some(TraitAxis::RiskTolerance),
            "moneySense" => Some(TraitAxis::MoneySense),
            "selfControl" => Some(TraitAxis::SelfControl),
            "boundarySetting" => Some(TraitAxis::BoundarySetting),
            "selfAdvocacy" => Some(TraitAxis::SelfAdvocacy),
            "empathy" => Some(TraitAxis::Empathy),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TraitAxis::ImpulseControl => "Impulse Control",
            TraitAxis::Planning => "Planning",
            TraitAxis::RiskTolerance => "Risk Tolerance",
            TraitAxis::MoneySense => "Money Sense",
            TraitAxis::SelfControl => "Self Control",
            TraitAxis::BoundarySetting => "Boundary Setting",
            TraitAxis::SelfAdvocacy => "Self Advocacy",
            TraitAxis::Empathy => "Empathy",
        }
    }
}

/// Fixed-shape signed trait score vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitScores {
    pub impulse_control: f64,
    pub planning: f64,
    pub risk_tolerance: f64,
    pub money_sense: f64,
    pub self_control: f64,
    pub boundary_setting: f64,
    pub self_advocacy: f64,
    pub empathy: f64,
}

impl TraitScores {
    /// The zero vector every session starts from.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, axis: TraitAxis) -> f64 {
        match axis {
            TraitAxis::ImpulseControl => self.impulse_control,
            TraitAxis::Planning => self.planning,
            TraitAxis::RiskTolerance => self.risk_tolerance,
            TraitAxis::MoneySense => self.money_sense,
            TraitAxis::SelfControl => self.self_control,
            TraitAxis::BoundarySetting => self.boundary_setting,
            TraitAxis::SelfAdvocacy => self.self_advocacy,
            TraitAxis::Empathy => self.empathy,
        }
    }

    pub fn add(&mut self, axis: TraitAxis, delta: f64) {
        match axis {
            TraitAxis::ImpulseControl => self.impulse_control += delta,
            TraitAxis::Planning => self.planning += delta,
            TraitAxis::RiskTolerance => self.risk_tolerance += delta,
            TraitAxis::MoneySense => self.money_sense += delta,
            TraitAxis::SelfControl => self.self_control += delta,
            TraitAxis::BoundarySetting => self.boundary_setting += delta,
            TraitAxis::SelfAdvocacy => self.self_advocacy += delta,
            TraitAxis::Empathy => self.empathy += delta,
        }
    }

    /// Component-wise sum. Accumulating two event sub-sequences
    /// independently and summing the results equals accumulating the
    /// whole sequence.
    pub fn sum(&self, other: &TraitScores) -> TraitScores {
        let mut out = *self;
        for axis in TraitAxis::ALL {
            out.add(axis, other.get(axis));
        }
        out
    }

    pub fn to_vector(&self) -> [f64; 8] {
        let mut v = [0.0; 8];
        for (i, axis) in TraitAxis::ALL.iter().enumerate() {
            v[i] = self.get(*axis);
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_key_round_trip() {
        for axis in TraitAxis::ALL {
            assert_eq!(TraitAxis::from_key(axis.key()), Some(axis));
        }
        assert_eq!(TraitAxis::from_key("creativity"), None);
    }

    #[test]
    fn test_zero_vector() {
        let scores = TraitScores::zero();
        for axis in TraitAxis::ALL {
            assert_eq!(scores.get(axis), 0.0);
        }
    }

    #[test]
    fn test_add_and_sum() {
        let mut a = TraitScores::zero();
        a.add(TraitAxis::Planning, 2.0);
        a.add(TraitAxis::ImpulseControl, -1.0);

        let mut b = TraitScores::zero();
        b.add(TraitAxis::Planning, -3.0);

        let total = a.sum(&b);
        assert_eq!(total.planning, -1.0);
        assert_eq!(total.impulse_control, -1.0);
        assert_eq!(total.empathy, 0.0);
    }

    #[test]
    fn test_json_field_names() {
        let scores = TraitScores::zero();
        let json = serde_json::to_string(&scores).unwrap();
        assert!(json.contains("impulseControl"));
        assert!(json.contains("boundarySetting"));
    }
}
