//! `CLUSTER INFO` reply parsing.

use corelib::HealthState;

use crate::error::FetchError;

/// Extract `cluster_state` from a `CLUSTER INFO` reply.
///
/// The reply is one `field:value` pair per line, `\r\n` terminated.
pub fn parse_cluster_state(info: &str) -> Result<HealthState, FetchError> {
    info.lines()
        .filter_map(|line| line.trim().split_once(':'))
        .find(|(field, _)| *field == "cluster_state")
        .map(|(_, value)| value.parse::<HealthState>().unwrap_or_else(|never| match never {}))
        .ok_or(FetchError::MissingField("cluster_state"))
}
