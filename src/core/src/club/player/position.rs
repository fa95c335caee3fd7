use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPositionType {
    Forward,
    Guard,
    Center,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 3] = [
        PlayerPositionType::Forward,
        PlayerPositionType::Guard,
        PlayerPositionType::Center,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlayerPositionType::Forward => "Forward",
            PlayerPositionType::Guard => "Guard",
            PlayerPositionType::Center => "Center",
        }
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerPositionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Forward" => Ok(PlayerPositionType::Forward),
            "Guard" => Ok(PlayerPositionType::Guard),
            "Center" => Ok(PlayerPositionType::Center),
            _ => Err(format!("'{}' is not a valid value for PlayerPositionType", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_position_name() {
        for position in PlayerPositionType::ALL {
            assert_eq!(PlayerPositionType::from_str(position.name()), Ok(position));
        }
    }

    #[test]
    fn rejects_unknown_position() {
        assert!(PlayerPositionType::from_str("Goalkeeper").is_err());
    }
}
