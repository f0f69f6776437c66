use dioxus::prelude::*;
use types::FormTab;

use crate::layout::use_is_narrow;

/// The tab to switch to when `picked` is chosen while `current` is shown.
pub fn selection_change(current: FormTab, picked: FormTab) -> Option<FormTab> {
    (picked != current).then_some(picked)
}

/// Section switcher for the employee form: a dropdown on narrow screens,
/// a segmented control otherwise. Holds no state of its own.
#[component]
pub fn TabNav(selected: FormTab, on_change: EventHandler<FormTab>) -> Element {
    let narrow = use_is_narrow();
    let pick = move |picked: FormTab| {
        if let Some(tab) = selection_change(selected, picked) {
            on_change.call(tab);
        }
    };

    if narrow {
        return rsx! {
            select {
                class: "tab-select form-select",
                aria_label: "Form section",
                value: selected.as_str(),
                onchange: move |e| {
                    if let Ok(tab) = e.value().parse::<FormTab>() {
                        pick(tab);
                    }
                },
                for tab in FormTab::ALL {
                    option {
                        key: "{tab}",
                        value: tab.as_str(),
                        selected: tab == selected,
                        "{tab.label()}"
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "segmented", role: "tablist",
            for tab in FormTab::ALL {
                button {
                    key: "{tab}",
                    r#type: "button",
                    role: "tab",
                    class: if tab == selected { "segment active" } else { "segment" },
                    aria_selected: if tab == selected { "true" } else { "false" },
                    onclick: move |_| pick(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::layout::Viewport;
    use crate::testing::{click, listeners, settle};

    #[test]
    fn only_inactive_tabs_change_selection() {
        assert_eq!(
            selection_change(FormTab::Personal, FormTab::Attendance),
            Some(FormTab::Attendance)
        );
        assert_eq!(selection_change(FormTab::Contract, FormTab::Contract), None);
    }

    #[test]
    fn exactly_one_segment_is_active() {
        fn app() -> Element {
            rsx! {
                TabNav { selected: FormTab::Contract, on_change: move |_| {} }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches("segment active").count(), 1, "{html}");
        for tab in FormTab::ALL {
            assert!(html.contains(tab.label()));
        }
        assert!(!html.contains("tab-select"));
    }

    #[test]
    fn narrow_viewport_uses_a_dropdown() {
        fn app() -> Element {
            use_context_provider(|| Viewport::new(Signal::new(375.0)));
            rsx! {
                TabNav { selected: FormTab::Contract, on_change: move |_| {} }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("tab-select"), "{html}");
        assert!(!html.contains("segmented"));
        assert_eq!(html.matches("selected").count(), 1, "{html}");
        assert_eq!(html.matches("<option").count(), FormTab::ALL.len());
    }

    thread_local! {
        static PICKED: RefCell<Vec<FormTab>> = const { RefCell::new(Vec::new()) };
    }

    #[test]
    fn each_inactive_segment_reports_once() {
        fn app() -> Element {
            rsx! {
                TabNav {
                    selected: FormTab::Contract,
                    on_change: move |tab| PICKED.with(|picked| picked.borrow_mut().push(tab)),
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        let segments = listeners(&dom.rebuild_to_vec(), "click");
        assert_eq!(segments.len(), FormTab::ALL.len());

        let mut per_click = Vec::new();
        for segment in segments {
            click(&dom, segment);
            settle(&mut dom);
            per_click.push(PICKED.with(|picked| picked.take()));
        }

        let silent = per_click.iter().filter(|calls| calls.is_empty()).count();
        assert_eq!(silent, 1, "the active segment stays quiet: {per_click:?}");

        let mut reported: Vec<FormTab> = per_click.into_iter().flatten().collect();
        assert_eq!(reported.len(), FormTab::ALL.len() - 1);
        assert!(!reported.contains(&FormTab::Contract));
        reported.sort();
        reported.dedup();
        assert_eq!(reported.len(), FormTab::ALL.len() - 1);
    }
}
