use dioxus::prelude::*;

#[component]
pub fn ZoomControls(
    percent: u32,
    on_zoom_in: EventHandler<()>,
    on_zoom_out: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "zoom-controls",
            button {
                "aria-label": "Zoom in",
                title: "Zoom in",
                onclick: move |_| on_zoom_in.call(()),
                "+"
            }
            div { class: "zoom-readout", "{percent}%" }
            button {
                "aria-label": "Zoom out",
                title: "Zoom out",
                onclick: move |_| on_zoom_out.call(()),
                "\u{2212}"
            }
            button {
                class: "secondary",
                "aria-label": "Reset zoom",
                title: "Reset zoom",
                onclick: move |_| on_reset.call(()),
                "\u{2922}"
            }
        }
    }
}
