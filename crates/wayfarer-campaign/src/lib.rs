//! Wayfarer — branching dialog state machine.
//!
//! A [`Campaign`] owns one active adventure and one active challenge and
//! drives them one input at a time, handing off between chained adventures
//! without losing the input that triggered the switch.

pub mod campaign;
pub mod config;
pub mod view;

pub use campaign::Campaign;
pub use config::CampaignConfig;
pub use view::CampaignView;
