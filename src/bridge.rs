//! Host bridge - the embedding Telegram client
//!
//! Supplies the current user's id and carries outbound messages back to the
//! bot. The bridge may be missing entirely when the page is opened in a
//! plain browser; `Option<B>` covers that case.

use crate::error::{DashboardError, Result};

pub trait HostBridge {
    /// Telegram user id, once the client has reported one
    fn user_id(&self) -> Option<i64>;

    /// Forward a payload verbatim to the host application
    fn send_data(&self, payload: &str) -> Result<()>;

    /// Ask the client to give the page its full height
    fn expand(&self) {}
}

impl<B: HostBridge> HostBridge for Option<B> {
    fn user_id(&self) -> Option<i64> {
        self.as_ref().and_then(HostBridge::user_id)
    }

    fn send_data(&self, payload: &str) -> Result<()> {
        match self {
            Some(bridge) => bridge.send_data(payload),
            None => Err(DashboardError::Bridge("host bridge unavailable".into())),
        }
    }

    fn expand(&self) {
        if let Some(bridge) = self {
            bridge.expand();
        }
    }
}

impl<B: HostBridge + ?Sized> HostBridge for std::rc::Rc<B> {
    fn user_id(&self) -> Option<i64> {
        (**self).user_id()
    }

    fn send_data(&self, payload: &str) -> Result<()> {
        (**self).send_data(payload)
    }

    fn expand(&self) {
        (**self).expand();
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::TelegramWebApp;

#[cfg(target_arch = "wasm32")]
mod web {
    use js_sys::Reflect;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::HostBridge;
    use crate::error::Result;

    #[wasm_bindgen]
    extern "C" {
        /// `window.Telegram.WebApp`
        #[derive(Clone)]
        pub type WebApp;

        #[wasm_bindgen(method)]
        fn expand(this: &WebApp);

        #[wasm_bindgen(method, catch, js_name = sendData)]
        fn send_data(this: &WebApp, data: &str) -> std::result::Result<(), JsValue>;

        #[wasm_bindgen(method, getter, js_name = initDataUnsafe)]
        fn init_data_unsafe(this: &WebApp) -> JsValue;
    }

    fn get(target: &JsValue, key: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    /// Telegram Web App bridge
    #[derive(Clone)]
    pub struct TelegramWebApp {
        app: WebApp,
    }

    impl TelegramWebApp {
        /// Look up `window.Telegram.WebApp`; `None` outside the Telegram client
        pub fn detect() -> Option<Self> {
            let window: JsValue = web_sys::window()?.into();
            let app = get(&get(&window, "Telegram")?, "WebApp")?;
            Some(Self {
                app: app.unchecked_into(),
            })
        }
    }

    impl HostBridge for TelegramWebApp {
        fn user_id(&self) -> Option<i64> {
            let user = get(&self.app.init_data_unsafe(), "user")?;
            let id = get(&user, "id")?.as_f64()?;
            #[allow(clippy::cast_possible_truncation)]
            Some(id as i64)
        }

        fn send_data(&self, payload: &str) -> Result<()> {
            self.app.send_data(payload)?;
            Ok(())
        }

        fn expand(&self) {
            self.app.expand();
        }
    }
}
