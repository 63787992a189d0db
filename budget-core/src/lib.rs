pub mod calculations;
pub mod dashboard;
pub mod models;
pub mod session;
pub mod wizard;

pub use dashboard::{Dashboard, DashboardError, DashboardEvent, DashboardSnapshot};
pub use models::*;
pub use session::{Credentials, CredentialsError, Registration, SessionGate};
pub use wizard::{WizardController, WizardError};
