use contracts::domain::a101_product::aggregate::{
    list_config, Product, ProductStatus, COLLECTION_KEY, RESOURCE,
};
use contracts::shared::api::BulkAction;
use leptos::prelude::*;

use crate::shared::components::{status_badge, StatTone};
use crate::shared::config::config;
use crate::shared::date_utils::{format_date, format_money};
use crate::shared::list_page::{BulkActionDef, ColumnDef, ListPage, RowActionDef, StatDef};

fn status_view(status: ProductStatus) -> AnyView {
    let tone = match status {
        ProductStatus::Enabled => "success",
        ProductStatus::Disabled => "neutral",
        ProductStatus::Unknown => "warning",
    };
    status_badge(status.as_str(), tone)
}

fn columns() -> Vec<ColumnDef<Product>> {
    vec![
        ColumnDef::new("Name", |p: &Product| {
            view! { <span class="table__primary">{p.name.clone()}</span> }.into_any()
        })
        .sortable("name")
        .min_width(220.0),
        ColumnDef::new("SKU", |p: &Product| p.sku.clone().unwrap_or_else(|| "—".into()).into_any())
            .sortable("sku"),
        ColumnDef::new("Category", |p: &Product| {
            p.category_name().unwrap_or("—").to_string().into_any()
        })
        .sortable("category"),
        ColumnDef::new("Price", |p: &Product| format_money(p.price).into_any())
            .sortable("price")
            .min_width(100.0),
        ColumnDef::new("Stock", |p: &Product| {
            if p.is_out_of_stock() {
                status_badge("out of stock", "error")
            } else {
                p.quantity.to_string().into_any()
            }
        })
        .sortable("quantity")
        .min_width(90.0),
        ColumnDef::new("Status", |p: &Product| status_view(p.status)).sortable("status"),
        ColumnDef::new("Created", |p: &Product| format_date(p.created_at.as_ref()).into_any())
            .sortable("created_at"),
    ]
}

fn stats() -> Vec<StatDef> {
    vec![
        StatDef::new("Total products", "total").icon("products"),
        StatDef::new("Enabled", "enabled").tone(StatTone::Success),
        StatDef::new("Disabled", "disabled"),
        StatDef::new("Out of stock", "outOfStock").tone(StatTone::Warning),
    ]
}

fn set_status(status: ProductStatus) -> BulkActionDef {
    let label = match status {
        ProductStatus::Enabled => "Enable",
        _ => "Disable",
    };
    BulkActionDef::new(label, move |_| {
        Ok(BulkAction::UpdateStatus {
            status: status.as_str().to_string(),
        })
    })
}

#[component]
pub fn ProductList() -> impl IntoView {
    view! {
        <ListPage
            page_id="a101_product--list"
            title="Products"
            resource=RESOURCE
            collection_key=COLLECTION_KEY
            list_config=list_config().page_size(config().lists.page_size)
            columns=columns()
            stats=stats()
            bulk_actions=vec![
                set_status(ProductStatus::Enabled),
                set_status(ProductStatus::Disabled),
                BulkActionDef::delete(),
            ]
            row_actions=vec![RowActionDef::delete()]
            search_placeholder="Name, SKU, category..."
        />
    }
}
