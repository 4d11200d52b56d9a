use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::catalog::builtin_bank;
use quiz_core::model::{OptionOrder, QuestionBank, QuizSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizView, StartView};

struct TestApp {
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
}

impl UiApp for TestApp {
    fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Start,
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Start => rsx! { StartView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, order: OptionOrder) -> ViewHarness {
    let bank = Arc::new(builtin_bank().expect("builtin bank"));
    let app = Arc::new(TestApp {
        bank,
        settings: QuizSettings::new(order),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
