//! Intune device management: scripts, intents, tunnel sites and branding.

mod branding;
mod enums;
mod intent;
mod scripts;
mod tunnel;

pub use branding::{IntuneBrand, MimeContent};
pub use enums::{EnrollmentAvailabilityOptions, RunAsAccountType};
pub use intent::DeviceManagementIntent;
pub use scripts::{DeviceManagementScript, DeviceShellScript};
pub use tunnel::MicrosoftTunnelSite;
