pub mod dispatcher;
pub mod event;
pub mod sinks;

use event::AlertEvent;
use tokio::sync::mpsc;

pub type AlertSender = mpsc::Sender<AlertEvent>;
pub type AlertReceiver = mpsc::Receiver<AlertEvent>;

pub fn create_alert_channel(buffer_size: usize) -> (AlertSender, AlertReceiver) {
    mpsc::channel(buffer_size)
}
