use gloo_net::http::Request;
use std::cell::Cell;
use std::rc::Rc;
use tour_core::{decode_payload, LoadError, SceneRecord, SceneSource};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `GET` of the scene endpoint, aborted after `timeout_ms`.
pub struct HttpSceneSource {
    url: String,
    timeout_ms: u32,
}

impl HttpSceneSource {
    pub fn new(url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            url: url.into(),
            timeout_ms,
        }
    }
}

struct AbortTimer {
    handle: Option<i32>,
    fired: Rc<Cell<bool>>,
}

impl AbortTimer {
    fn arm(controller: &web::AbortController, timeout_ms: u32) -> Self {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let controller = controller.clone();
        let callback = Closure::once_into_js(move || {
            flag.set(true);
            controller.abort();
        });
        let handle = web::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                timeout_ms.min(i32::MAX as u32) as i32,
            )
            .ok()
        });
        if handle.is_none() {
            log::warn!("[loader] could not arm fetch timeout");
        }
        Self { handle, fired }
    }

    fn disarm(&self) {
        if let (Some(handle), Some(w)) = (self.handle, web::window()) {
            w.clear_timeout_with_handle(handle);
        }
    }
}

impl SceneSource for HttpSceneSource {
    async fn fetch_scenes(&self) -> Result<Vec<SceneRecord>, LoadError> {
        let controller =
            web::AbortController::new().map_err(|e| LoadError::Transport(format!("{:?}", e)))?;
        let timer = AbortTimer::arm(&controller, self.timeout_ms);
        let signal = controller.signal();

        let fetched = async {
            let resp = Request::get(&self.url)
                .abort_signal(Some(&signal))
                .send()
                .await?;
            let status = resp.status();
            let body = resp.text().await?;
            Ok::<_, gloo_net::Error>((status, body))
        }
        .await;
        timer.disarm();

        match fetched {
            Ok((status, body)) => decode_payload(status, &body),
            Err(_) if timer.fired.get() => Err(LoadError::Timeout(self.timeout_ms)),
            Err(e) => Err(LoadError::Transport(e.to_string())),
        }
    }
}
