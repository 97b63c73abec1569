//! New client dialog:
//! - wizard.rs: step machine and form state (pure, tested)
//! - view.rs: thaw dialog wired to the API and the shared store

mod view;
pub mod wizard;

pub use view::CreateClientDialog;
pub use wizard::CreateClientWizard;
