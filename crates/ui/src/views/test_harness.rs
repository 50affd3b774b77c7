use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use quiz_core::time::fixed_clock;
use services::{QuizLoopService, build_catalog};
use storage::{RankTable, StateDirectory};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, SessionView};

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    ranks_are_fallback: bool,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn ranks_are_fallback(&self) -> bool {
        self.ranks_are_fallback
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Session(usize),
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

impl Eq for ViewHarnessProps {}

#[allow(non_snake_case)]
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
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Session(count) => rsx! { SessionView { count } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness(view: ViewKind, ranks_are_fallback: bool) -> ViewHarness {
    let catalog = build_catalog(&StateDirectory::bundled(), &RankTable::fallback())
        .expect("bundled catalog should build");
    let quiz_loop = Arc::new(QuizLoopService::new(fixed_clock(), Arc::new(catalog)));
    let app = Arc::new(TestApp {
        quiz_loop,
        ranks_are_fallback,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
