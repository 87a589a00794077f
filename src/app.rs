//! Interactive session wiring: input driver, render task, shutdown fan-out.
mod session;

use tokio::sync::broadcast;

pub use session::{SessionOptions, run_session};

pub type ShutdownSender = broadcast::Sender<()>;
pub type ShutdownReceiver = broadcast::Receiver<()>;
