//! Log command builders. None of them return data.

use cdpwhip_protocol::{CommandDescriptor, PayloadBuilder, ProtocolError};

use super::types::ViolationSetting;
use super::DOMAIN;

/// Enables log domain; entries collected so far are sent as `entryAdded`.
pub fn enable() -> CommandDescriptor {
    PayloadBuilder::new(DOMAIN, "enable").build(None)
}

/// Disables log domain; prevents further log entries from being reported.
pub fn disable() -> CommandDescriptor {
    PayloadBuilder::new(DOMAIN, "disable").build(None)
}

/// Clears the log.
pub fn clear() -> CommandDescriptor {
    PayloadBuilder::new(DOMAIN, "clear").build(None)
}

/// Start violation reporting.
pub fn start_violations_report(
    config: &[ViolationSetting],
) -> Result<CommandDescriptor, ProtocolError> {
    Ok(PayloadBuilder::new(DOMAIN, "startViolationsReport")
        .required("config", config)?
        .build(None))
}

/// Stop violation reporting.
pub fn stop_violations_report() -> CommandDescriptor {
    PayloadBuilder::new(DOMAIN, "stopViolationsReport").build(None)
}
