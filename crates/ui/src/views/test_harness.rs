use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use flashcard_core::{Card, Clock, Deck};

use crate::context::{UiApp, build_app_context};
use crate::views::{FlashcardTestHandles, FlashcardView};
use crate::vm::Locale;

struct TestApp {
    deck: Deck,
    locale: Locale,
}

impl UiApp for TestApp {
    fn deck(&self) -> Deck {
        self.deck.clone()
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn flip_duration_ms(&self) -> u32 {
        400
    }

    fn clock(&self) -> Clock {
        Clock::manual()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: FlashcardTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { FlashcardView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: FlashcardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Waits up to `window` for the view to schedule work, then redraws.
    /// Returns `false` if nothing woke up in that time.
    pub async fn drive_async(&mut self, window: Duration) -> bool {
        let woke = tokio::time::timeout(window, self.dom.wait_for_work())
            .await
            .is_ok();
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
        woke
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Runs one intent the way a click would, then lets the view redraw.
    pub fn dispatch(&mut self, intent: flashcard_core::SessionIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn finish_animation(&mut self) {
        self.dom.in_runtime(|| self.handles.finish_animation());
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn two_card_deck() -> Deck {
    Deck::new(vec![
        Card::new("Communication", "Общение"),
        Card::new("Developer", "Разработчик"),
    ])
    .expect("two-card deck")
}

pub fn setup_view_harness(deck: Deck, locale: Locale) -> ViewHarness {
    let handles = FlashcardTestHandles::default();
    let app = Arc::new(TestApp { deck, locale });
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
