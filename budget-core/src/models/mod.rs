mod category;
mod derived;
mod form_values;
mod phase;
mod selection;

pub use category::{InputCategory, OutputCategory, display_label};
pub use derived::{DerivedInputs, DerivedResults};
pub use form_values::RawFormValues;
pub use phase::{StepStatus, WizardPhase};
pub use selection::SelectionState;
