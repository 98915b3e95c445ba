//! SharePoint tenant administration (`#microsoft.graph.tenantAdmin.*`)

mod idle_session_sign_out;
mod settings;

pub use idle_session_sign_out::IdleSessionSignOut;
pub use settings::Settings;
