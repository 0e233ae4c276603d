//! Process-wide state containers.
//!
//! Every store is a yewdux [`Store`](yewdux::Store) living under the
//! `yewdux::Context` created at the composition root, so tests can build
//! an isolated context per case instead of sharing ambient globals.

pub mod board_filter;
pub mod session;
pub mod toast;

pub use board_filter::{BoardFilterStore, BoardOrder};
pub use session::SessionStore;
pub use toast::ToastStore;
