pub mod claim;
pub mod config;
pub mod directory;
pub mod error;
pub mod intake;
pub mod money;
pub mod policy;

pub use claim::{ClaimDraft, ClaimField, DocumentRef};
pub use config::{default_config_path, DashboardConfig};
pub use directory::{FixtureDirectory, PolicyDirectory};
pub use error::{CoreError, Result};
pub use intake::{ClaimReceipt, ClaimsIntake, InMemoryIntake, SubmitError, SubmittedClaim};
pub use money::{format_crore, format_display_date, format_lakhs, group_inr};
pub use policy::{
    total_coverage, AvailablePolicy, OwnedPolicy, PolicyKind, PolicyStatus, StatusTone,
};
