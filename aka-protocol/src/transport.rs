//! The `Transport` capability: a duplex frame stream standing in for the
//! socket/marshaling layer this core treats as an external collaborator.

use crate::error::{ProtocolError, Result};
use crate::frame::Frame;
use std::sync::mpsc::{Receiver, Sender};

/// A duplex, ordered, reliable message stream carrying [`Frame`]s.
pub trait Transport {
    fn send(&mut self, frame: Frame) -> Result<()>;
    fn recv(&mut self) -> Result<Frame>;
}

/// An in-memory, channel-backed [`Transport`] pair for tests. Each endpoint
/// owns the sender for its outbound direction and the receiver for the
/// other's.
pub struct ChannelTransport {
    tx: Sender<Frame>,
    rx: Receiver<Frame>,
}

impl ChannelTransport {
    /// Builds a connected pair: frames sent on one endpoint arrive at the
    /// other, in order, in both directions.
    pub fn pair() -> (ChannelTransport, ChannelTransport) {
        let (tx_a, rx_a) = std::sync::mpsc::channel();
        let (tx_b, rx_b) = std::sync::mpsc::channel();
        (
            ChannelTransport { tx: tx_a, rx: rx_b },
            ChannelTransport { tx: tx_b, rx: rx_a },
        )
    }
}

impl Transport for ChannelTransport {
    fn send(&mut self, frame: Frame) -> Result<()> {
        self.tx
            .send(frame)
            .map_err(|_| ProtocolError::TransportClosed)
    }

    fn recv(&mut self) -> Result<Frame> {
        self.rx.recv().map_err(|_| ProtocolError::TransportClosed)
    }
}
