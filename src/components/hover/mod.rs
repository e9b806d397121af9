//! Hover preview component.
//!
//! Renders the item list, the panel container and the backdrop layer, then
//! hands the mounted container and backdrop to a [`HoverController`] driven
//! by [`DomStage`] and [`CssAnimator`].

mod animator;
mod stage;

pub use animator::CssAnimator;
pub use stage::DomStage;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;

use crate::config::{REDUCED_MOTION_QUERY, REVERT_DEBOUNCE_MS};
use crate::core::{Catalog, HoverController};

stylance::import_crate_style!(css, "src/components/hover/hover.module.css");

/// Controller wired to the browser DOM.
pub type WebController = HoverController<Rc<DomStage>, CssAnimator>;

/// Full-screen hover preview.
///
/// The controller is created once both the panel container and the backdrop
/// are mounted; pointer events arriving before that are ignored.
#[component]
pub fn HoverPreview(catalog: Catalog) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let backdrop_ref = NodeRef::<leptos::html::Div>::new();
    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);
    let controller = StoredValue::new_local(None::<WebController>);

    let items = catalog
        .iter()
        .map(|(id, record, _)| (id, record.title.clone()))
        .collect::<Vec<_>>();

    Effect::new(move || {
        let (Some(container), Some(backdrop)) = (container_ref.get(), backdrop_ref.get()) else {
            return;
        };
        if controller.with_value(Option::is_some) {
            return;
        }

        match DomStage::new(container.unchecked_into(), backdrop.unchecked_into()) {
            Ok(stage) => {
                let stage = Rc::new(stage);
                let animator = CssAnimator::new(stage.clone(), reduced_motion);
                controller.set_value(Some(HoverController::new(&catalog, stage, animator)));
            }
            Err(e) => log::error!("hover preview unavailable: {e}"),
        }
    });

    let on_enter = move |index: usize| {
        controller.update_value(|c| {
            if let Some(c) = c {
                c.on_item_enter(index);
            }
        });
    };

    let on_leave = move |index: usize| {
        let ticket = controller
            .try_update_value(|c| c.as_mut().map(|c| c.on_item_leave(index)))
            .flatten();
        if let Some(ticket) = ticket {
            Timeout::new(REVERT_DEBOUNCE_MS, move || {
                controller.update_value(|c| {
                    if let Some(c) = c
                        && c.revert_if_idle(ticket)
                    {
                        log::debug!("reverted to idle preview");
                    }
                });
            })
            .forget();
        }
    };

    view! {
        <main class=css::page>
            <div class=css::backdrop node_ref=backdrop_ref></div>
            <div class=css::container node_ref=container_ref></div>
            <nav class=css::menu>
                <ul class=css::items>
                    {items
                        .into_iter()
                        .map(|(id, title)| {
                            let index = id.0;
                            view! {
                                <li
                                    class=css::item
                                    on:mouseenter=move |_| on_enter(index)
                                    on:mouseleave=move |_| on_leave(index)
                                >
                                    <span class=css::number>{format!("{:02}", id.number())}</span>
                                    <span class=css::title>{title}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </main>
    }
}
