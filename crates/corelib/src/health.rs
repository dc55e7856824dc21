//! Cluster health as reported by `CLUSTER INFO`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Value of the `cluster_state` field.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Ok,
    Fail,
    /// Any other state string a server might report.
    Unknown(String),
}

impl HealthState {
    pub fn is_ok(&self) -> bool {
        matches!(self, HealthState::Ok)
    }
}

impl FromStr for HealthState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "ok" => HealthState::Ok,
            "fail" => HealthState::Fail,
            other => HealthState::Unknown(other.to_string()),
        })
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthState::Ok => f.write_str("ok"),
            HealthState::Fail => f.write_str("fail"),
            HealthState::Unknown(state) => f.write_str(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_states() {
        assert_eq!("ok".parse::<HealthState>().unwrap(), HealthState::Ok);
        assert_eq!("fail\r".parse::<HealthState>().unwrap(), HealthState::Fail);
        assert_eq!(
            "loading".parse::<HealthState>().unwrap(),
            HealthState::Unknown("loading".into())
        );
        assert!(!HealthState::Fail.is_ok());
    }
}
