//! Multi-tenant management reports

mod credential_user_registrations_summary;

pub use credential_user_registrations_summary::CredentialUserRegistrationsSummary;
