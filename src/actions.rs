//! Button actions forwarded to the bot
//!
//! The host application owns what happens next; nothing is validated or
//! awaited here.

use crate::bridge::HostBridge;
use crate::console::{console_debug, console_error};
use crate::error::Result;
use crate::types::Action;

/// Serialize `action` and hand it to the bridge
pub fn dispatch<B: HostBridge + ?Sized>(bridge: &B, action: Action) -> Result<()> {
    let payload = serde_json::to_string(&action)?;
    console_debug!("Sending {payload} to host");
    bridge.send_data(&payload)
}

/// Click handler attached to one action button
pub type Handler = Box<dyn FnMut()>;

/// Bind every action button through `attach`
///
/// A button that cannot be bound is logged and skipped; the rest of the page
/// keeps working. Returns how many buttons were bound.
pub fn bind_buttons_with<B, A>(bridge: &B, mut attach: A) -> usize
where
    B: HostBridge + Clone + 'static,
    A: FnMut(&'static str, Handler) -> Result<()>,
{
    let mut bound = 0;
    for action in Action::ALL {
        let bridge = bridge.clone();
        let handler: Handler = Box::new(move || {
            if let Err(e) = dispatch(&bridge, action) {
                console_error!("Error sending {action}: {e}");
            }
        });
        match attach(action.button_selector(), handler) {
            Ok(()) => bound += 1,
            Err(e) => console_error!("Could not bind {action} button: {e}"),
        }
    }
    bound
}

/// Attach click handlers for every action button on the page
#[cfg(target_arch = "wasm32")]
pub fn bind_buttons<B>(bridge: &B) -> usize
where
    B: HostBridge + Clone + 'static,
{
    bind_buttons_with(bridge, crate::web::on_click)
}
