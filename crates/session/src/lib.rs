//! Client-side session lifecycle for the Warden authentication client
//!
//! A [`SessionManager`] is the single source of truth for "is the user
//! logged in" within a browser tab. It decodes the bearer token handed out by
//! the auth service ([`codec`]), keeps it in tab-scoped storage ([`store`]),
//! arms one timer that tears the session down when the token expires
//! ([`scheduler`]), and silently refreshes stale sessions through the
//! service's `/refresh-token` endpoint ([`api`]).
//!
//! Storage, timers and the clock sit behind traits so the whole lifecycle
//! runs against in-memory fakes outside the browser.

pub mod api;
pub mod clock;
pub mod codec;
pub mod config;
pub mod error;
pub mod manager;
pub mod router;
pub mod scheduler;
pub mod session;
pub mod store;

pub use api::AuthApi;
pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{Claims, DecodeError, decode};
pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use manager::{ListenerId, SessionManager};
pub use router::{ENTRY_ROUTE, LandingRoute, landing_route_for};
pub use scheduler::{ExpiryScheduler, ManualScheduler};
pub use session::{AuthOutcome, LogoutReason, Session};
pub use store::{MemorySessionStore, SessionStore, StoreError, StoredSession};

#[cfg(target_arch = "wasm32")]
pub use manager::BrowserSessionManager;
#[cfg(target_arch = "wasm32")]
pub use scheduler::BrowserExpiryScheduler;
#[cfg(target_arch = "wasm32")]
pub use store::BrowserSessionStore;
