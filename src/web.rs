//! Browser host adapter (feature `web`).
//!
//! [`ScrollBinding`] wires a [`SceneComposer`] to the page: window scroll,
//! resize and mouse listeners feed it events, and a `requestAnimationFrame`
//! loop drives its frames. Every listener registers its own release with
//! the composer, so [`ScrollBinding::detach`] (or composer teardown)
//! removes them all synchronously and cancels the queued frame.
//!
//! [`WebScene`] exposes the binding to JavaScript for hosts that render
//! with their own 3D library and only need the camera and object state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

use crate::composer::{attach_or_teardown, ListenerKind, SceneComposer, SharedComposer};
use crate::error::SceneError;
use crate::input::{InputEvent, MouseButton};
use crate::options::Options;
use crate::scroll::ScrollMetrics;
use crate::surface::{RenderSurface, UniformSurface};
use crate::util::frame_timing::FrameTiming;

/// Install the panic hook and route `log` output to the browser console.
/// Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Read scroll offset, document height and viewport size from the page.
#[must_use]
pub fn read_metrics(window: &Window) -> ScrollMetrics {
    let document_height = window
        .document()
        .and_then(|doc| doc.document_element())
        .map_or(0.0, |el| f64::from(el.scroll_height()));
    ScrollMetrics {
        offset: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
        viewport_width: window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}

fn host_err(context: &str, err: &JsValue) -> SceneError {
    SceneError::Host(format!("{context}: {err:?}"))
}

/// Live connection between a composer and the browser window.
pub struct ScrollBinding<S: RenderSurface + 'static> {
    composer: SharedComposer<S>,
}

impl<S: RenderSurface + 'static> ScrollBinding<S> {
    /// Register listeners and start the frame loop. If any step fails, the
    /// composer is torn down and the listeners already added are removed.
    pub fn attach(composer: SceneComposer<S>) -> Result<Self, SceneError> {
        let window = web_sys::window()
            .ok_or_else(|| SceneError::Host("no global window".into()))?;
        let composer = Rc::new(RefCell::new(composer));

        attach_or_teardown(&composer, |shared| {
            // Pick up the initial position and viewport before the first frame.
            shared
                .borrow_mut()
                .handle_event(InputEvent::Resized(read_metrics(&window)));

            add_window_listener(&window, shared, "scroll", ListenerKind::Scroll, |w| {
                InputEvent::Scroll(read_metrics(w))
            })?;
            add_window_listener(&window, shared, "resize", ListenerKind::Resize, |w| {
                InputEvent::Resized(read_metrics(w))
            })?;
            add_mouse_listeners(&window, shared)?;
            start_frame_loop(&window, shared)
        })?;

        Ok(Self { composer })
    }

    /// Shared handle to the composer.
    #[must_use]
    pub fn composer(&self) -> SharedComposer<S> {
        Rc::clone(&self.composer)
    }

    /// Tear down the composer, removing every listener and cancelling the
    /// queued frame. Returns `false` if it was already torn down.
    pub fn detach(&self) -> bool {
        self.composer.borrow_mut().teardown()
    }
}

impl<S: RenderSurface + 'static> Drop for ScrollBinding<S> {
    fn drop(&mut self) {
        if let Ok(mut composer) = self.composer.try_borrow_mut() {
            let _ = composer.teardown();
        }
    }
}

fn add_window_listener<S, F>(
    window: &Window,
    composer: &SharedComposer<S>,
    event: &'static str,
    kind: ListenerKind,
    to_event: F,
) -> Result<(), SceneError>
where
    S: RenderSurface + 'static,
    F: Fn(&Window) -> InputEvent + 'static,
{
    let liveness = composer.borrow().liveness();
    let target = Rc::clone(composer);
    let source = window.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        if !liveness.is_alive() {
            return;
        }
        if let Ok(mut composer) = target.try_borrow_mut() {
            composer.handle_event(to_event(&source));
        }
    });
    window
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| host_err(event, &e))?;

    let owner = window.clone();
    composer.borrow_mut().register_listener(kind, move || {
        if owner
            .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to remove {event} listener");
        }
        drop(callback);
    });
    Ok(())
}

fn add_mouse_listeners<S: RenderSurface + 'static>(
    window: &Window,
    composer: &SharedComposer<S>,
) -> Result<(), SceneError> {
    let handlers: [(&'static str, fn(&MouseEvent) -> Option<InputEvent>); 4] = [
        ("mousemove", |e| {
            Some(InputEvent::CursorMoved {
                x: e.client_x() as f32,
                y: e.client_y() as f32,
            })
        }),
        ("mousedown", |e| {
            MouseButton::from_dom(e.button())
                .map(|button| InputEvent::MouseButton { button, pressed: true })
        }),
        ("mouseup", |e| {
            MouseButton::from_dom(e.button())
                .map(|button| InputEvent::MouseButton { button, pressed: false })
        }),
        ("mouseleave", |_| Some(InputEvent::PointerLeft)),
    ];

    for (event, to_event) in handlers {
        let liveness = composer.borrow().liveness();
        let target = Rc::clone(composer);
        let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            if !liveness.is_alive() {
                return;
            }
            let Some(input) = to_event(&e) else {
                return;
            };
            if let Ok(mut composer) = target.try_borrow_mut() {
                composer.handle_event(input);
            }
        });
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| host_err(event, &e))?;

        let owner = window.clone();
        composer
            .borrow_mut()
            .register_listener(ListenerKind::Pointer, move || {
                if owner
                    .remove_event_listener_with_callback(
                        event,
                        callback.as_ref().unchecked_ref(),
                    )
                    .is_err()
                {
                    log::warn!("failed to remove {event} listener");
                }
                drop(callback);
            });
    }
    Ok(())
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop<S: RenderSurface + 'static>(
    window: &Window,
    composer: &SharedComposer<S>,
) -> Result<(), SceneError> {
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None::<i32>));
    let liveness = composer.borrow().liveness();
    let mut clock = FrameTiming::new(0);

    let target = Rc::clone(composer);
    let next = Rc::clone(&slot);
    let next_handle = Rc::clone(&handle);
    let source = window.clone();
    *slot.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
        next_handle.set(None);
        if !liveness.is_alive() {
            return;
        }
        if let Ok(mut composer) = target.try_borrow_mut() {
            let _ = composer.frame(clock.elapsed());
        }
        let _ = clock.end_frame();
        if let Some(callback) = next.borrow().as_ref() {
            match source.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => next_handle.set(Some(id)),
                Err(e) => log::warn!("requestAnimationFrame failed: {e:?}"),
            }
        }
    }));

    let id = slot
        .borrow()
        .as_ref()
        .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()))
        .transpose()
        .map_err(|e| host_err("requestAnimationFrame", &e))?;
    handle.set(id);

    let owner = window.clone();
    composer
        .borrow_mut()
        .register_listener(ListenerKind::Frame, move || {
            if let Some(id) = handle.take() {
                if owner.cancel_animation_frame(id).is_err() {
                    log::warn!("failed to cancel animation frame {id}");
                }
            }
            drop(slot.borrow_mut().take());
        });
    Ok(())
}

/// JavaScript-facing scene driven by page scroll.
///
/// Hosts read the camera and object state each frame and copy it into
/// their own renderer.
#[wasm_bindgen]
pub struct WebScene {
    binding: ScrollBinding<UniformSurface>,
}

#[wasm_bindgen]
impl WebScene {
    /// Start a scene from optional TOML options.
    #[wasm_bindgen(constructor)]
    pub fn new(options_toml: Option<String>) -> Result<WebScene, JsValue> {
        init_logging();
        let options = match options_toml {
            Some(text) => Options::from_toml(&text),
            None => Ok(Options::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut composer = SceneComposer::new(&options)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        composer.mount(UniformSurface::new());
        let binding = ScrollBinding::attach(composer)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { binding })
    }

    /// Camera eye position `[x, y, z]`.
    pub fn camera_position(&self) -> Vec<f32> {
        self.binding
            .composer
            .borrow()
            .camera()
            .eye
            .to_array()
            .to_vec()
    }

    /// Camera look-at target `[x, y, z]`.
    pub fn camera_target(&self) -> Vec<f32> {
        self.binding
            .composer
            .borrow()
            .camera()
            .target
            .to_array()
            .to_vec()
    }

    /// Core mesh rotation about Y, in radians.
    pub fn object_yaw(&self) -> f32 {
        self.binding.composer.borrow().object().yaw
    }

    /// Core mesh vertical offset.
    pub fn object_height(&self) -> f32 {
        self.binding.composer.borrow().object().height
    }

    /// Packed camera uniform bytes for WebGPU hosts.
    pub fn camera_uniform(&self) -> Vec<u8> {
        self.binding
            .composer
            .borrow()
            .surface()
            .map(|s| s.camera_bytes().to_vec())
            .unwrap_or_default()
    }

    /// Scene layout as JSON, for hosts that build their own meshes.
    pub fn scene_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.binding.composer.borrow().scene())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Stop the scene and remove its listeners.
    pub fn stop(&self) -> bool {
        self.binding.detach()
    }
}
