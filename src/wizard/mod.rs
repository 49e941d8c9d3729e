//! The registration wizard: a record, thirteen validated steps and the
//! session reducer that moves between them.

pub mod record;
pub mod session;
pub mod step;

pub use record::{Experience, FieldEdit, ProgramFormat, ProjectDomain, RegistrationRecord};
pub use session::{WizardAction, WizardSession};
pub use step::Step;
