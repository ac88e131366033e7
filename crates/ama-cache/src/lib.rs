//! # ama-cache
//!
//! In-memory question cache for a single room, and the reconciler that keeps
//! it consistent under optimistic local commands and pushed room events.
//!
//! ## Features
//!
//! - **Question Store**: questions keyed by id plus an authoritative creation total
//! - **Reaction State**: this client's own "reacted" flags, kept apart from shared counts
//! - **Reconciler**: idempotent merge of command results and room events
//!
//! ## Example
//!
//! ```ignore
//! use ama_cache::Reconciler;
//! use ama_core::{RoomEvent, RoomId};
//!
//! let mut reconciler = Reconciler::new(RoomId::new("room-1"));
//! reconciler.apply_event(&RoomEvent::QuestionCreated { id: "q-1".into(), text: "What time?".into() });
//!
//! let snapshot = reconciler.snapshot();
//! assert_eq!(snapshot.total, 1);
//! ```

pub mod reactions;
pub mod reconciler;
pub mod store;

pub use reactions::{ReactionState, ReactionToggle};
pub use reconciler::{MergeOutcome, Reconciler};
pub use store::{QuestionSnapshot, QuestionStore, StoreUpdate};
