//! Navigation between the list pages

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: &[MenuItem] = &[
    MenuItem { href: "/orders", label: "Orders", icon: "orders" },
    MenuItem { href: "/products", label: "Products", icon: "products" },
    MenuItem { href: "/categories", label: "Categories", icon: "categories" },
    MenuItem { href: "/blogs", label: "Blogs", icon: "blogs" },
    MenuItem { href: "/affiliates", label: "Affiliate orders", icon: "affiliates" },
];

fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.starts_with(&format!("{}/", href))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {MENU
                .iter()
                .map(|item| {
                    let href = item.href;
                    view! {
                        <A href=href>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || is_active(&location.pathname.get(), href)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
