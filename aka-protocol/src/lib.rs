//! The classical 5G-style AKA challenge/response state machine: the
//! subscriber (UE), serving network (SN) and home network (HN) roles,
//! communicating over an injected [`transport::Transport`] capability.

pub mod error;
pub mod frame;
pub mod hn;
pub mod sn;
pub mod subscriber_store;
pub mod transport;
pub mod ue;

pub use error::{ProtocolError, Result};
pub use frame::{Autn, Auts, Frame};
pub use hn::HomeNetwork;
pub use sn::{ServingNetwork, SnOutcome};
pub use subscriber_store::{InMemorySubscriberStore, SubscriberRecord, SubscriberStore};
pub use transport::{ChannelTransport, Transport};
pub use ue::{UeAgent, UeOutcome};
