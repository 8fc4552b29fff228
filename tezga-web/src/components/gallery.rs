//! Auto-rotating image gallery
//!
//! Drives one [`RotationSession`] with a pair of browser intervals: an
//! advance timer every `interval_ms` and a progress timer every
//! [`PROGRESS_TICK_MS`]. Both handles live in one `TimerHandles` cell and
//! are always cleared together before new ones are armed, so a superseded
//! session can never leave a stray timer ticking.
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use crate::components::foundation as f;
#[cfg(target_arch = "wasm32")]
use f::JsCast;
use tezga_catalog::{RotationCfg, RotationSession};
#[cfg(target_arch = "wasm32")]
use tezga_catalog::{PROGRESS_TICK_MS, RESTART_DELAY_MS};

/// Delay between the gallery mounting and the first timer arming; the
/// session is re-checked after the delay in case the modal already closed.
#[cfg(target_arch = "wasm32")]
const STABILIZE_MS: u32 = 200;

#[derive(Default)]
struct TimerHandles {
    #[cfg(target_arch = "wasm32")]
    advance_id: Option<i32>,
    #[cfg(target_arch = "wasm32")]
    progress_id: Option<i32>,
    #[cfg(target_arch = "wasm32")]
    advance_cb: Option<f::Closure<dyn FnMut()>>,
    #[cfg(target_arch = "wasm32")]
    progress_cb: Option<f::Closure<dyn FnMut()>>,
}

#[cfg(target_arch = "wasm32")]
fn clear_timers(timers: &Rc<RefCell<TimerHandles>>) {
    let mut h = timers.borrow_mut();
    if let Some(win) = web_sys::window() {
        if let Some(id) = h.advance_id.take() {
            win.clear_interval_with_handle(id);
        }
        if let Some(id) = h.progress_id.take() {
            win.clear_interval_with_handle(id);
        }
    }
    h.advance_id = None;
    h.progress_id = None;
    h.advance_cb = None;
    h.progress_cb = None;
}

#[cfg(target_arch = "wasm32")]
fn arm_timers(
    timers: &Rc<RefCell<TimerHandles>>,
    session: &Rc<RefCell<RotationSession>>,
    index: f::UseStateHandle<usize>,
    progress: f::UseStateHandle<f32>,
    on_change: f::Callback<usize>,
) {
    // invariant: existing handles are cleared before new ones are created
    clear_timers(timers);
    let Some(win) = web_sys::window() else {
        return;
    };
    let interval_ms = i32::try_from(session.borrow().interval_ms()).unwrap_or(i32::MAX);

    let advance_cb = {
        let session = session.clone();
        let progress = progress.clone();
        f::Closure::wrap(Box::new(move || {
            let mut s = session.borrow_mut();
            if !s.is_running() {
                return;
            }
            let next = s.advance();
            drop(s);
            index.set(next);
            progress.set(0.0);
            on_change.emit(next);
        }) as Box<dyn FnMut()>)
    };
    let progress_cb = {
        let session = session.clone();
        f::Closure::wrap(Box::new(move || {
            let mut s = session.borrow_mut();
            if !s.is_running() {
                return;
            }
            let pct = s.progress_tick();
            drop(s);
            progress.set(pct);
        }) as Box<dyn FnMut()>)
    };

    let mut h = timers.borrow_mut();
    if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(
        advance_cb.as_ref().unchecked_ref(),
        interval_ms,
    ) {
        h.advance_id = Some(id);
        h.advance_cb = Some(advance_cb);
    }
    if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(
        progress_cb.as_ref().unchecked_ref(),
        i32::try_from(PROGRESS_TICK_MS).unwrap_or(50),
    ) {
        h.progress_id = Some(id);
        h.progress_cb = Some(progress_cb);
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct GalleryProps {
    pub images: Vec<f::AttrValue>,
    pub rotation: RotationCfg,
    /// Whether this gallery sits inside the product modal; consulted
    /// against the rotation scope flag.
    #[prop_or_default]
    pub in_modal: bool,
    #[prop_or_default]
    pub alt: f::AttrValue,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<usize>,
}

#[f::function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> f::Html {
    let image_count = props.images.len();
    let index = f::use_state(|| 0_usize);
    let progress = f::use_state(|| 0.0_f32);
    let session = f::use_mut_ref(RotationSession::new);
    let timers = f::use_mut_ref(TimerHandles::default);
    let allows = props.rotation.allows(props.in_modal);

    // Start the session when the image list changes; arm the timers only
    // after a stabilization delay, re-checking that the session is still
    // live (the modal may have closed again in the meantime). The enabled
    // flag is intentionally not a dependency: flipping it mid-session only
    // takes effect at the next start/resume attempt.
    {
        let session = session.clone();
        let timers = timers.clone();
        let index = index.clone();
        let progress = progress.clone();
        let on_change = props.on_change.clone();
        f::use_effect_with(
            (props.images.clone(), props.rotation.interval_ms),
            move |deps: &(Vec<f::AttrValue>, u32)| {
                let count = deps.0.len();
                let interval = deps.1;
                #[cfg(target_arch = "wasm32")]
                {
                    index.set(0);
                    progress.set(0.0);
                    let started =
                        count > 1 && allows && session.borrow_mut().start(count, 0, interval);
                    if started {
                        let session = session.clone();
                        let timers = timers.clone();
                        crate::dom::set_timeout(STABILIZE_MS, move || {
                            if session.borrow().is_running() {
                                arm_timers(&timers, &session, index, progress, on_change);
                            }
                        });
                    }
                    move || {
                        clear_timers(&timers);
                        session.borrow_mut().stop();
                    }
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let _ = (count, interval, allows);
                    let _ = (&session, &timers, &index, &progress, &on_change);
                    || {}
                }
            },
        );
    }

    // Hover-to-pause: entering cancels both timers without resetting index
    // or progress; leaving resumes only while rotation is enabled, and the
    // bar restarts at 0%.
    let on_mouse_enter = {
        let session = session.clone();
        let timers = timers.clone();
        f::Callback::from(move |_: f::MouseEvent| {
            #[cfg(target_arch = "wasm32")]
            {
                clear_timers(&timers);
                session.borrow_mut().pause();
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = (&session, &timers);
        })
    };
    let on_mouse_leave = {
        let session = session.clone();
        let timers = timers.clone();
        let index = index.clone();
        let progress = progress.clone();
        let on_change = props.on_change.clone();
        f::Callback::from(move |_: f::MouseEvent| {
            #[cfg(target_arch = "wasm32")]
            {
                if allows && session.borrow_mut().resume() {
                    progress.set(0.0);
                    arm_timers(
                        &timers,
                        &session,
                        index.clone(),
                        progress.clone(),
                        on_change.clone(),
                    );
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = (&session, &timers, &index, &progress, &on_change, allows);
        })
    };

    // Manual thumbnail jump: cancel timers, show the clicked image, then
    // restart from that index once the progress-reset transition finishes.
    let select_thumb = {
        let session = session.clone();
        let timers = timers.clone();
        let index = index.clone();
        let progress = progress.clone();
        let on_change = props.on_change.clone();
        move |i: usize| {
            let session = session.clone();
            let timers = timers.clone();
            let index = index.clone();
            let progress = progress.clone();
            let on_change = on_change.clone();
            f::Callback::from(move |_: f::MouseEvent| {
                #[cfg(target_arch = "wasm32")]
                {
                    clear_timers(&timers);
                    session.borrow_mut().select(i);
                    index.set(i);
                    progress.set(0.0);
                    on_change.emit(i);
                    if allows {
                        let session = session.clone();
                        let timers = timers.clone();
                        let index = index.clone();
                        let progress = progress.clone();
                        let on_change = on_change.clone();
                        crate::dom::set_timeout(RESTART_DELAY_MS, move || {
                            if session.borrow_mut().resume() {
                                arm_timers(&timers, &session, index, progress, on_change);
                            }
                        });
                    }
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    index.set(i);
                    progress.set(0.0);
                    on_change.emit(i);
                    let _ = (&session, &timers, allows);
                }
            })
        }
    };

    let shown = (*index).min(image_count.saturating_sub(1));
    let main_src = props.images.get(shown).cloned().unwrap_or_default();
    let pct = (*progress).clamp(0.0, 100.0);
    let class = f::class_list(&["gallery"], &props.class);
    f::html! {
        <div class={class} onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}
             aria-roledescription="carousel">
            <div class="gallery-main">
                <img id="modalMainImage" src={main_src} alt={props.alt.clone()} />
            </div>
            { if image_count > 1 { f::html! {
                <>
                    <div id="imageRotationProgress" class="rotation-progress" role="progressbar"
                         aria-valuemin="0" aria-valuemax="100" aria-valuenow={format!("{pct:.0}")}>
                        <div id="progressBar" class="rotation-progress__bar"
                             style={format!("width:{pct:.1}%")}></div>
                    </div>
                    <div id="thumbnailImages" class="thumbnails" role="tablist">
                        { for props.images.iter().enumerate().map(|(i, src)| {
                            let active = i == shown;
                            let mut thumb_class = f::classes!("thumbnail");
                            if active {
                                thumb_class.push("active");
                            }
                            f::html! {
                                <button class={thumb_class} role="tab"
                                        aria-selected={active.to_string()}
                                        aria-label={format!("Show image {}", i + 1)}
                                        onclick={select_thumb(i)}>
                                    <img src={src.clone()} alt="" />
                                </button>
                            }
                        }) }
                    </div>
                </>
            } } else { f::Html::default() } }
        </div>
    }
}
