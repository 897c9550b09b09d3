use serde::{Deserialize, Serialize};

/// the policy category of a geofence.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneType {
    #[serde(alias = "noService", alias = "no_service")]
    NoService,
    #[serde(alias = "highRisk", alias = "high_risk")]
    HighRisk,
    #[serde(alias = "premium")]
    Premium,
    /// implicit when no zone governs a location, may also be stored explicitly.
    #[serde(alias = "standard")]
    Standard,
}

impl ZoneType {
    /// position in the precedence order, 0 is the highest precedence.
    /// restrictions always outrank commercial designations.
    pub fn precedence_rank(&self) -> u8 {
        match self {
            ZoneType::NoService => 0,
            ZoneType::HighRisk => 1,
            ZoneType::Premium => 2,
            ZoneType::Standard => 3,
        }
    }

    pub fn is_serviceable(&self) -> bool {
        !matches!(self, ZoneType::NoService)
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ZoneType::NoService => "NoService",
            ZoneType::HighRisk => "HighRisk",
            ZoneType::Premium => "Premium",
            ZoneType::Standard => "Standard",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::ZoneType;

    #[test]
    fn test_precedence_rank_order() {
        assert!(ZoneType::NoService.precedence_rank() < ZoneType::HighRisk.precedence_rank());
        assert!(ZoneType::HighRisk.precedence_rank() < ZoneType::Premium.precedence_rank());
        assert!(ZoneType::Premium.precedence_rank() < ZoneType::Standard.precedence_rank());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ZoneType::NoService).expect("test invariant failed");
        assert_eq!(json, r#""NoService""#);
        let parsed: ZoneType = serde_json::from_str(r#""high_risk""#).expect("test invariant failed");
        assert_eq!(parsed, ZoneType::HighRisk);
    }
}
