use super::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of supported model kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Cube,
    Cylinder,
    Sphere,
    HollowBox,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Cube => "cube",
            ModelKind::Cylinder => "cylinder",
            ModelKind::Sphere => "sphere",
            ModelKind::HollowBox => "hollow_box",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    /// Parse a kind string. Anything outside the fixed set is rejected,
    /// never defaulted to a shape.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(ModelKind::Cube),
            "cylinder" => Ok(ModelKind::Cylinder),
            "sphere" => Ok(ModelKind::Sphere),
            "hollow_box" => Ok(ModelKind::HollowBox),
            other => Err(ModelError::UnknownModelKind(other.to_string())),
        }
    }
}
