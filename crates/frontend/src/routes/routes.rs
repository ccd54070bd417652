use crate::domain::a101_product::ui::list::ProductList;
use crate::domain::a102_order::ui::list::OrderList;
use crate::domain::a103_blog::ui::list::BlogList;
use crate::domain::a104_category::ui::list::CategoryList;
use crate::domain::a105_affiliate_order::ui::list::AffiliateOrderList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <RequireSession>
                    <Routes fallback=|| view! { <div class="page page--empty">"Page not found"</div> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/orders" /> } />
                        <Route path=path!("/products") view=ProductList />
                        <Route path=path!("/orders") view=OrderList />
                        <Route path=path!("/blogs") view=BlogList />
                        <Route path=path!("/categories") view=CategoryList />
                        <Route path=path!("/affiliates") view=AffiliateOrderList />
                    </Routes>
                </RequireSession>
            </Shell>
        </Router>
    }
}
