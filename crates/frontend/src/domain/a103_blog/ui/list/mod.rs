use contracts::domain::a103_blog::aggregate::{list_config, Blog, BlogStatus, COLLECTION_KEY, RESOURCE};
use contracts::shared::api::BulkAction;
use leptos::prelude::*;

use crate::shared::components::{status_badge, StatTone};
use crate::shared::date_utils::format_date;
use crate::shared::list_page::{BulkActionDef, ColumnDef, ListPage, RowActionDef, StatDef};

fn columns() -> Vec<ColumnDef<Blog>> {
    vec![
        ColumnDef::new("Title", |b: &Blog| {
            let slug = b.slug.clone().map(|s| format!("/{}", s)).unwrap_or_default();
            view! {
                <div class="table__stack">
                    <span class="table__primary">{b.title.clone()}</span>
                    <span class="table__muted">{slug}</span>
                </div>
            }
            .into_any()
        })
        .sortable("title")
        .min_width(260.0),
        ColumnDef::new("Author", |b: &Blog| b.author.clone().unwrap_or_else(|| "—".into()).into_any())
            .sortable("author"),
        ColumnDef::new("Category", |b: &Blog| {
            b.category.clone().unwrap_or_else(|| "—".into()).into_any()
        })
        .sortable("category"),
        ColumnDef::new("Status", |b: &Blog| match b.status {
            BlogStatus::Published => status_badge("published", "success"),
            BlogStatus::Draft => status_badge("draft", "neutral"),
            BlogStatus::Unknown => status_badge("unknown", "warning"),
        })
        .sortable("status"),
        ColumnDef::new("Views", |b: &Blog| b.views.to_string().into_any())
            .sortable("views")
            .min_width(80.0),
        ColumnDef::new("Created", |b: &Blog| format_date(b.created_at.as_ref()).into_any())
            .sortable("created_at"),
    ]
}

fn set_status(label: &'static str, status: BlogStatus) -> BulkActionDef {
    BulkActionDef::new(label, move |_| {
        Ok(BulkAction::UpdateStatus {
            status: status.as_str().to_string(),
        })
    })
}

/// Blog posts; "select all" covers only the page on screen
#[component]
pub fn BlogList() -> impl IntoView {
    view! {
        <ListPage
            page_id="a103_blog--list"
            title="Blogs"
            resource=RESOURCE
            collection_key=COLLECTION_KEY
            list_config=list_config()
            columns=columns()
            stats=vec![
                StatDef::new("Total posts", "total").icon("blogs"),
                StatDef::new("Published", "published").tone(StatTone::Success),
                StatDef::new("Drafts", "draft"),
            ]
            bulk_actions=vec![
                set_status("Publish", BlogStatus::Published),
                set_status("Move to drafts", BlogStatus::Draft),
                BulkActionDef::delete(),
            ]
            row_actions=vec![RowActionDef::delete()]
            search_placeholder="Title, author, category..."
        />
    }
}
