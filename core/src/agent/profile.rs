use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DEFAULT_MAX_ITERATIONS: usize = 10;
const EXPERT_MAX_ITERATIONS: usize = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentProfile {
    #[default]
    Standard,
    /// More tool-calling rounds for multi-step planning.
    Expert,
    /// Steers answers towards economical options.
    Budget,
}

impl AgentProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Expert => "expert",
            Self::Budget => "budget",
        }
    }

    pub fn max_iterations(&self) -> usize {
        match self {
            Self::Expert => EXPERT_MAX_ITERATIONS,
            Self::Standard | Self::Budget => DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn prompt_note(&self) -> Option<&'static str> {
        match self {
            Self::Standard => None,
            Self::Expert => Some(
                "El usuario es un viajero experimentado: puedes incluir detalles técnicos de rutas, aclimatación y logística.",
            ),
            Self::Budget => Some(
                "El usuario viaja con presupuesto ajustado: prioriza alojamientos económicos (budget), tours compartidos y actividades de bajo costo.",
            ),
        }
    }
}

impl fmt::Display for AgentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "expert" => Ok(Self::Expert),
            "budget" => Ok(Self::Budget),
            other => Err(anyhow::anyhow!(
                "Unknown agent profile: {}. Available: standard, expert, budget",
                other
            )),
        }
    }
}
