//! Client-side model of the descentes console: entities, the REST backend,
//! per-page stores and edit sessions, and the coordinators tying them together.
//!
//! Nothing here depends on a UI toolkit; the `ui` crate renders [`Page`]s and
//! calls the coordinators.

pub mod backend;
pub mod config;
pub mod coordinator;
pub mod entity;
pub mod error;
pub mod kind;
pub mod night;
pub mod page;
pub mod payload;
pub mod session;
pub mod store;

pub use backend::Backend;
pub use backend::HttpBackend;
pub use config::ApiConfig;
pub use coordinator::Confirm;
pub use coordinator::MutationCoordinator;
pub use coordinator::PageAccess;
pub use coordinator::UploadCoordinator;
pub use entity::Draft;
pub use entity::Entity;
pub use entity::EntityId;
pub use error::ApiError;
pub use error::Result;
pub use kind::AttachmentKind;
pub use kind::ResourceKind;
pub use night::night_of;
pub use page::Page;
pub use payload::FilePart;
pub use payload::Payload;
pub use session::EditSession;
pub use session::SessionState;
pub use store::ResourceStore;
