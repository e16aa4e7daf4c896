//! Injury effect definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attributes a roll can be made against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "DX")]
    Dx,
    #[serde(rename = "IQ")]
    Iq,
    #[serde(rename = "HT")]
    Ht,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::St => "ST",
            Attribute::Dx => "DX",
            Attribute::Iq => "IQ",
            Attribute::Ht => "HT",
        };
        f.write_str(name)
    }
}

/// What a roll is made against
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollTarget {
    Attribute(Attribute),
    Skill(String),
}

impl RollTarget {
    pub fn skill(name: impl Into<String>) -> Self {
        RollTarget::Skill(name.into())
    }
}

impl From<Attribute> for RollTarget {
    fn from(attribute: Attribute) -> Self {
        RollTarget::Attribute(attribute)
    }
}

impl fmt::Display for RollTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollTarget::Attribute(attribute) => write!(f, "{}", attribute),
            RollTarget::Skill(name) => f.write_str(name),
        }
    }
}

/// A signed modifier to rolls against a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollModifier {
    pub target: RollTarget,
    pub amount: i32,
    /// Short explanation shown next to the modifier
    pub reason: String,
}

impl RollModifier {
    pub fn new(target: impl Into<RollTarget>, amount: i32, reason: impl Into<String>) -> Self {
        RollModifier {
            target: target.into(),
            amount,
            reason: reason.into(),
        }
    }
}

/// Condition imposed by a failed check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Stunned,
    Prone,
    Unconscious,
}

/// A condition applied when a check fails by at least `margin`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureConsequence {
    pub margin: i32,
    pub condition: Condition,
}

impl FailureConsequence {
    pub fn new(margin: i32, condition: Condition) -> Self {
        FailureConsequence { margin, condition }
    }
}

/// A follow-up check the victim must make
///
/// The victim rolls against the best of `rolls`, applying `modifiers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectCheck {
    pub rolls: Vec<RollTarget>,
    pub modifiers: Vec<RollModifier>,
    /// Ordered by margin, smallest first
    pub failures: Vec<FailureConsequence>,
}

impl EffectCheck {
    pub fn new(rolls: Vec<RollTarget>) -> Self {
        EffectCheck {
            rolls,
            modifiers: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: RollModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn on_failure(mut self, margin: i32, condition: Condition) -> Self {
        self.failures.push(FailureConsequence::new(margin, condition));
        self
    }

    /// Sum of all modifiers
    pub fn total_modifier(&self) -> i32 {
        self.modifiers.iter().map(|m| m.amount).sum()
    }

    /// Conditions imposed by failing with the given margin
    pub fn consequences(&self, margin_of_failure: i32) -> Vec<Condition> {
        self.failures
            .iter()
            .filter(|f| margin_of_failure >= f.margin)
            .map(|f| f.condition)
            .collect()
    }
}

/// How many eyes were blinded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eyes {
    One,
    Both,
}

/// Effect tag with its payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EffectType {
    /// Penalty to DX and IQ on the next turn
    Shock { amount: i32 },
    /// Injury over the major wound threshold
    MajorWound,
    /// Shock-causing hit to the skull, eye or vitals
    HeadVitalsHit,
    Knockback { yards: i32 },
    Blinded { eyes: Eyes },
    Crippled { location: String },
}

/// A physical consequence of one damage event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryEffect {
    pub effect_type: EffectType,
    /// Modifiers that apply to the victim's rolls
    pub modifiers: Vec<RollModifier>,
    /// Checks the victim must make
    pub checks: Vec<EffectCheck>,
}

impl InjuryEffect {
    pub fn new(effect_type: EffectType) -> Self {
        InjuryEffect {
            effect_type,
            modifiers: Vec::new(),
            checks: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: RollModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_check(mut self, check: EffectCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// One-line description for display
    pub fn description(&self) -> String {
        match &self.effect_type {
            EffectType::Shock { amount } => format!("Shock: -{} to DX and IQ", amount),
            EffectType::MajorWound => "Major wound".to_string(),
            EffectType::HeadVitalsHit => "Head/vitals hit".to_string(),
            EffectType::Knockback { yards } => format!("Knockback {} yd", yards),
            EffectType::Blinded { eyes: Eyes::One } => "Blinded in one eye".to_string(),
            EffectType::Blinded { eyes: Eyes::Both } => "Blinded in both eyes".to_string(),
            EffectType::Crippled { location } => format!("Crippled {}", location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_knockdown_check() -> EffectCheck {
        EffectCheck::new(vec![Attribute::Ht.into()])
            .with_modifier(RollModifier::new(Attribute::Ht, -10, "Skull"))
            .on_failure(0, Condition::Stunned)
            .on_failure(0, Condition::Prone)
            .on_failure(5, Condition::Unconscious)
    }

    #[test]
    fn test_check_consequences() {
        let check = make_knockdown_check();
        assert!(check.consequences(-1).is_empty());
        assert_eq!(
            check.consequences(0),
            vec![Condition::Stunned, Condition::Prone]
        );
        assert_eq!(
            check.consequences(7),
            vec![Condition::Stunned, Condition::Prone, Condition::Unconscious]
        );
    }

    #[test]
    fn test_total_modifier() {
        let check =
            make_knockdown_check().with_modifier(RollModifier::new(Attribute::Ht, 4, "bonus"));
        assert_eq!(check.total_modifier(), -6);
    }

    #[test]
    fn test_descriptions() {
        let effect = InjuryEffect::new(EffectType::Shock { amount: 3 });
        assert!(effect.description().contains("-3"));

        let effect = InjuryEffect::new(EffectType::Crippled {
            location: "left arm".to_string(),
        });
        assert_eq!(effect.description(), "Crippled left arm");
    }

    #[test]
    fn test_effect_type_serialization() {
        let json = serde_json::to_string(&EffectType::Knockback { yards: 2 }).unwrap();
        assert!(json.contains("\"type\":\"knockback\""));
        assert!(json.contains("\"yards\":2"));
    }

    #[test]
    fn test_roll_target_display() {
        assert_eq!(RollTarget::from(Attribute::Dx).to_string(), "DX");
        assert_eq!(RollTarget::skill("Judo").to_string(), "Judo");
    }
}
