use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use flashcard_core::{Deck, FlipAnimation, Session, SessionIntent};
use tokio::sync::Notify;
use tracing::debug;

use crate::context::AppContext;
use crate::vm::CardScreenVm;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// The session and its flip tween, shared between the click handlers, the
/// subscriber and the frame loop.
#[derive(Clone)]
pub(crate) struct FlashcardHandles {
    session: Rc<RefCell<Session>>,
    animation: Rc<RefCell<FlipAnimation>>,
    // Wakes the frame loop when a tween starts.
    tween_started: Rc<Notify>,
}

impl FlashcardHandles {
    fn new(deck: Deck, flip_duration_ms: u32) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session::new(deck))),
            animation: Rc::new(RefCell::new(FlipAnimation::with_duration_ms(
                flip_duration_ms,
            ))),
            tween_started: Rc::new(Notify::new()),
        }
    }
}

#[component]
pub fn FlashcardView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let labels = ctx.labels();
    let mut revision = use_signal(|| 0_u64);
    let frame = use_signal(|| 0_u64);

    let (handles, subscription) = use_hook(|| {
        let deck = ctx.deck();
        debug!(cards = deck.len(), locale = %ctx.locale(), "flashcard view mounted");
        let handles = FlashcardHandles::new(Deck::clone(&deck), ctx.flip_duration_ms());
        let animation = Rc::clone(&handles.animation);
        let tween_started = Rc::clone(&handles.tween_started);
        let subscription = handles.session.borrow_mut().subscribe(move |change| {
            let mut animation = animation.borrow_mut();
            animation.sync_to(change.after.flipped(), clock.now());
            if animation.is_running() {
                tween_started.notify_one();
            }
            *revision.write() += 1;
        });
        (handles, subscription)
    });

    let loop_handles = handles.clone();
    use_future(move || {
        let handles = loop_handles.clone();
        let mut frame = frame;
        async move {
            loop {
                handles.tween_started.notified().await;
                while handles.animation.borrow().is_running() {
                    tokio::time::sleep(FRAME_INTERVAL).await;
                    handles.animation.borrow_mut().sample(clock.now());
                    *frame.write() += 1;
                }
            }
        }
    });

    let session = Rc::clone(&handles.session);
    use_drop(move || {
        session.borrow_mut().unsubscribe(subscription);
    });

    let session = Rc::clone(&handles.session);
    let dispatch_intent = use_callback(move |intent: SessionIntent| {
        session.borrow_mut().dispatch(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(test_handles) = try_consume_context::<FlashcardTestHandles>() {
                test_handles.register(dispatch_intent, handles.clone(), frame);
            }
        }
    }

    // Subscribe this scope to state changes and animation frames.
    let _ = (revision(), frame());
    let vm = {
        let session = handles.session.borrow();
        let progress = handles.animation.borrow().progress();
        CardScreenVm::build(session.state(), session.deck(), progress, &labels)
    };
    let card_style = vm.card_style();
    let text_style = vm.text_style();
    let previous_class = if vm.previous_disabled {
        "btn btn-secondary is-disabled"
    } else {
        "btn btn-secondary"
    };

    rsx! {
        div { class: "page flashcard-page",
            p { class: "flashcard-counter", "{vm.counter_label}" }
            div {
                id: "flashcard",
                class: vm.surface.class(),
                style: "{card_style}",
                onclick: move |_| dispatch_intent.call(SessionIntent::Flip),
                span {
                    class: "flashcard-text",
                    "data-face": vm.face.as_str(),
                    style: "{text_style}",
                    "{vm.text}"
                }
            }
            div { class: "flashcard-controls",
                button {
                    id: "flashcard-previous",
                    class: previous_class,
                    r#type: "button",
                    disabled: vm.previous_disabled,
                    onclick: move |_| dispatch_intent.call(SessionIntent::Previous),
                    "{labels.previous}"
                }
                button {
                    id: "flashcard-next",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(SessionIntent::Next),
                    "{vm.next_label}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct FlashcardTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionIntent>>>>,
    view: Rc<RefCell<Option<FlashcardHandles>>>,
    frame: Rc<RefCell<Option<Signal<u64>>>>,
}

#[cfg(test)]
impl FlashcardTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<SessionIntent>,
        view: FlashcardHandles,
        frame: Signal<u64>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.view.borrow_mut() = Some(view);
        *self.frame.borrow_mut() = Some(frame);
    }

    pub(crate) fn dispatch(&self) -> Callback<SessionIntent> {
        (*self.dispatch.borrow()).expect("flashcard dispatch registered")
    }

    pub(crate) fn state(&self) -> flashcard_core::SessionState {
        self.view
            .borrow()
            .as_ref()
            .expect("flashcard view registered")
            .session
            .borrow()
            .state()
    }

    /// Jumps the flip tween to its target, as if the animation had played out.
    pub(crate) fn finish_animation(&self) {
        self.view
            .borrow()
            .as_ref()
            .expect("flashcard view registered")
            .animation
            .borrow_mut()
            .finish();
        let mut frame = (*self.frame.borrow()).expect("flashcard frame registered");
        *frame.write() += 1;
    }
}
