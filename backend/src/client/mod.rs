//! Typed consumer of the Shoerack REST API.
//!
//! `Session` holds the issued token and public user on the client side and
//! is passed explicitly (`&mut`) into every `ApiClient` call. Any 401 from the
//! server invalidates the session and fires its invalidation callback.

mod api_client;
mod session;

pub use api_client::{ApiClient, ClientError, ClientResult};
pub use session::{FileStore, MemoryStore, Session, SessionStore, TOKEN_KEY, USER_KEY};
