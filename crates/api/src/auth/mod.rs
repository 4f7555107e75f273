pub mod config;
pub mod credentials;
pub mod jwt;
pub mod permissions;
pub mod session;

pub use config::AuthConfig;
pub use credentials::{CredentialVerifier, StaticCredentialVerifier};
pub use jwt::{Claims, JwtService};
pub use permissions::{current_session, require_scorer};
pub use session::{end_session, start_session, IssuedSession};
