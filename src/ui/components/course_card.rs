use crate::catalog::Course;
use dioxus::prelude::*;

/// Catalog entry with Buy and Add to Cart actions
#[component]
pub fn CourseCard(course: Course, on_buy: EventHandler<Course>, on_add_to_cart: EventHandler<Course>) -> Element {
    let card_class = "bg-white shadow-lg rounded-lg p-6 flex flex-col md:flex-row items-center hover:shadow-xl transition-shadow duration-300";

    rsx! {
        div { class: "{card_class}",
            img {
                src: "{course.image}",
                alt: "{course.name}",
                class: "w-32 h-32 object-cover rounded-lg",
            }
            div { class: "flex flex-col justify-between items-start md:ml-6 mt-4 md:mt-0",
                h3 { class: "text-xl font-semibold text-gray-800", "{course.name}" }
                p { class: "text-sm text-gray-500 mb-2", "{course.description}" }
                p { class: "text-blue-600 font-bold", "{course.price}" }
                div { class: "mt-4 flex space-x-2",
                    button {
                        class: "bg-blue-500 text-white py-2 px-6 rounded-lg hover:bg-blue-600 focus:outline-none focus:ring-2 focus:ring-blue-600",
                        onclick: {
                            let course = course.clone();
                            move |_| on_buy.call(course.clone())
                        },
                        "Buy"
                    }
                    button {
                        class: "bg-teal-500 text-white py-2 px-6 rounded-lg hover:bg-teal-600 focus:outline-none focus:ring-2 focus:ring-teal-600",
                        onclick: {
                            let course = course.clone();
                            move |_| on_add_to_cart.call(course.clone())
                        },
                        "Add to Cart"
                    }
                }
            }
        }
    }
}
