//! Election view-state and action surface for the BlockVote client.
//!
//! [`App`] ties the wallet session, the contract gateway, and the
//! presentation together:
//! - [`view::ElectionView`] assembles consistent snapshots of on-chain
//!   state and swaps them atomically,
//! - [`actions`] submits user/admin writes off the UI flow and reports
//!   their outcomes,
//! - [`notify`] queues the transient notices the front-end shows,
//! - [`ui`] derives stateless view-models from the current state.

pub mod actions;
pub mod app;
pub mod notify;
pub mod snapshot;
pub mod ui;
pub mod view;

pub use actions::{run_action, Action, ActionOutcome};
pub use app::App;
pub use notify::{Notice, NoticeLevel, Notifier};
pub use snapshot::Snapshot;
pub use ui::Page;
pub use view::ElectionView;
