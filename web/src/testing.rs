//! Drives a `VirtualDom` the way a browser would: find listeners, fire
//! events at them, then let effects and re-renders settle.

use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Mutation, Mutations, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{
    PlatformEventData, SerializedFormData, SerializedHtmlEventConverter, SerializedMouseData,
};

/// Elements listening for `event`, in the order they were created.
pub fn listeners(mutations: &Mutations, event: &str) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == event => Some(*id),
            _ => None,
        })
        .collect()
}

fn fire(dom: &VirtualDom, event: &str, data: Box<dyn Any>, target: ElementId) {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
    let data = Rc::new(PlatformEventData::new(data)) as Rc<dyn Any>;
    dom.runtime()
        .handle_event(event, dioxus::dioxus_core::Event::new(data, true), target);
}

pub fn click(dom: &VirtualDom, target: ElementId) {
    fire(dom, "click", Box::<SerializedMouseData>::default(), target);
}

pub fn type_into(dom: &VirtualDom, target: ElementId, value: &str) {
    let data = SerializedFormData::new(value.to_string(), Vec::new());
    fire(dom, "input", Box::new(data), target);
}

/// Run pending effects and re-renders, then render to HTML.
pub fn settle(dom: &mut VirtualDom) -> String {
    for _ in 0..4 {
        dom.render_immediate(&mut NoOpMutations);
    }
    dioxus_ssr::render(dom)
}
