//! Sections that exist in the navigation but have no content yet.

use dioxus::prelude::*;
use ui::{Card, CardBody};

#[component]
fn Placeholder(title: String, description: String) -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{description}" }
            }
            Card {
                CardBody {
                    p { class: "text-muted", "This section is coming soon." }
                }
            }
        }
    }
}

#[component]
pub fn Payroll() -> Element {
    rsx! {
        Placeholder { title: "Payroll", description: "Pay runs, payslips and deductions." }
    }
}

#[component]
pub fn Leave() -> Element {
    rsx! {
        Placeholder { title: "Leave", description: "Leave requests, approvals and balances." }
    }
}

#[component]
pub fn Activity() -> Element {
    rsx! {
        Placeholder {
            title: "Activity",
            description: "A log of recent changes across the directory.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_pages_name_their_section() {
        fn app() -> Element {
            rsx! {
                Payroll {}
                Leave {}
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(">Payroll<"), "{html}");
        assert!(html.contains(">Leave<"));
        assert_eq!(html.matches("coming soon").count(), 2);
    }
}
