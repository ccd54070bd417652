use contracts::domain::a104_category::aggregate::{
    list_config, Category, CategoryStatus, COLLECTION_KEY, RESOURCE,
};
use contracts::shared::api::BulkAction;
use leptos::prelude::*;

use crate::shared::components::status_badge;
use crate::shared::config::config;
use crate::shared::list_page::{BulkActionDef, ColumnDef, ListPage, RowActionDef};

fn columns() -> Vec<ColumnDef<Category>> {
    vec![
        ColumnDef::new("Name", |c: &Category| {
            view! { <span class="table__primary">{c.name.clone()}</span> }.into_any()
        })
        .sortable("name")
        .min_width(200.0),
        ColumnDef::new("Slug", |c: &Category| c.slug.clone().unwrap_or_else(|| "—".into()).into_any())
            .sortable("slug"),
        ColumnDef::new("Parent", |c: &Category| match &c.parent {
            Some(parent) => parent.name.clone().into_any(),
            None => status_badge("root", "info"),
        })
        .sortable("parent"),
        ColumnDef::new("Products", |c: &Category| c.product_count.to_string().into_any())
            .sortable("product_count")
            .min_width(90.0),
        ColumnDef::new("Status", |c: &Category| match c.status {
            CategoryStatus::Active => status_badge("active", "success"),
            CategoryStatus::Inactive => status_badge("inactive", "neutral"),
            CategoryStatus::Unknown => status_badge("unknown", "warning"),
        })
        .sortable("status"),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    view! {
        <ListPage
            page_id="a104_category--list"
            title="Categories"
            resource=RESOURCE
            collection_key=COLLECTION_KEY
            list_config=list_config().page_size(config().lists.page_size)
            columns=columns()
            bulk_actions=vec![
                BulkActionDef::new("Activate", |_| Ok(BulkAction::UpdateStatus {
                    status: CategoryStatus::Active.as_str().to_string(),
                })),
                BulkActionDef::new("Deactivate", |_| Ok(BulkAction::UpdateStatus {
                    status: CategoryStatus::Inactive.as_str().to_string(),
                })),
                BulkActionDef::delete(),
            ]
            row_actions=vec![RowActionDef::delete()]
            search_placeholder="Name, slug, parent..."
        />
    }
}
