use dioxus::prelude::*;

/// Embedded player for a purchased course
#[component]
pub fn CourseVideo(link: String) -> Element {
    rsx! {
        div { class: "mt-6 w-full max-w-lg bg-white p-6 rounded-lg shadow-md",
            h3 { class: "text-xl font-semibold text-gray-800 mb-4", "Course Video" }
            iframe {
                class: "w-full aspect-video border-0",
                src: "{link}",
                title: "Course Video",
                allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                allowfullscreen: true,
            }
        }
    }
}
