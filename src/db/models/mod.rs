// Sub-modules organized by functional domain
pub mod activity;
pub mod api;
pub mod auth;
pub mod member;
pub mod project;
pub mod room;
pub mod stage;

pub use activity::*;
pub use api::*;
pub use auth::*;
pub use member::*;
pub use project::*;
pub use room::*;
pub use stage::*;
