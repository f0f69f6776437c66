use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook({
        let path = path.clone();
        move || tracing::info!(%path, "no route matched")
    });

    rsx! {
        div { class: "not-found-page",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-message", "Nothing lives at " code { "{path}" } "." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to start" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use dioxus::history::{History, MemoryHistory};

    use super::*;
    use crate::testing::settle;

    #[test]
    fn unknown_path_is_echoed_back() {
        fn app() -> Element {
            use_context_provider(|| {
                Rc::new(MemoryHistory::with_initial_path("/no/such/page")) as Rc<dyn History>
            });
            rsx! { Router::<Route> {} }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = settle(&mut dom);

        assert!(html.contains("not-found-page"), "{html}");
        assert!(html.contains("/no/such/page"));
    }
}
