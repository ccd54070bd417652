use contracts::domain::a102_order::aggregate::{
    list_config, Order, OrderStatus, COLLECTION_KEY, RESOURCE,
};
use contracts::shared::api::BulkAction;
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::components::{status_badge, StatTone};
use crate::shared::config::config;
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::list_page::{BulkActionDef, ColumnDef, ListPage, RowActionDef, StatDef};

fn status_view(status: OrderStatus) -> AnyView {
    let tone = match status {
        OrderStatus::Pending => "warning",
        OrderStatus::Processing => "info",
        OrderStatus::Shipped => "info",
        OrderStatus::Delivered => "success",
        OrderStatus::Cancelled => "error",
        OrderStatus::Unknown => "neutral",
    };
    status_badge(status.label(), tone)
}

fn columns() -> Vec<ColumnDef<Order>> {
    vec![
        ColumnDef::new("Order", |o: &Order| {
            view! { <span class="table__primary">{o.order_number.clone()}</span> }.into_any()
        })
        .sortable("order_number"),
        ColumnDef::new("Customer", |o: &Order| {
            let email = o.customer.email.clone().unwrap_or_default();
            view! {
                <div class="table__stack">
                    <span>{o.customer.name.clone()}</span>
                    <span class="table__muted">{email}</span>
                </div>
            }
            .into_any()
        })
        .sortable("customer")
        .min_width(200.0),
        ColumnDef::new("Items", |o: &Order| o.item_count.to_string().into_any())
            .sortable("items")
            .min_width(80.0),
        ColumnDef::new("Total", |o: &Order| format_money(o.total_amount).into_any())
            .sortable("total")
            .min_width(110.0),
        ColumnDef::new("Status", |o: &Order| status_view(o.status)).sortable("status"),
        ColumnDef::new("Payment", |o: &Order| {
            o.payment_status.clone().unwrap_or_else(|| "—".into()).into_any()
        })
        .sortable("payment_status"),
        ColumnDef::new("Placed", |o: &Order| format_datetime(o.created_at.as_ref()).into_any())
            .sortable("created_at")
            .min_width(140.0),
    ]
}

fn money_stat(value: &Value) -> String {
    format_money(value.as_f64().unwrap_or_default())
}

fn stats() -> Vec<StatDef> {
    vec![
        StatDef::new("Total orders", "total").icon("orders"),
        StatDef::new("Pending", "pending").tone(StatTone::Warning),
        StatDef::new("Delivered", "delivered").tone(StatTone::Success),
        StatDef::new("Revenue", "revenue").format(money_stat),
    ]
}

#[component]
pub fn OrderList() -> impl IntoView {
    let new_status = RwSignal::new(String::new());

    let update_status = BulkActionDef::new("Update status", move |_| {
        Ok(BulkAction::UpdateStatus {
            status: new_status.get_untracked(),
        })
    })
    .with_control(move || {
        view! {
            <select
                class="bulk-toolbar__select"
                prop:value=move || new_status.get()
                on:change=move |ev| new_status.set(event_target_value(&ev))
            >
                <option value="">"New status..."</option>
                {OrderStatus::ASSIGNABLE
                    .iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect_view()}
            </select>
        }
    });

    view! {
        <ListPage
            page_id="a102_order--list"
            title="Orders"
            resource=RESOURCE
            collection_key=COLLECTION_KEY
            list_config=list_config().page_size(config().lists.page_size)
            columns=columns()
            stats=stats()
            bulk_actions=vec![update_status, BulkActionDef::delete()]
            row_actions=vec![RowActionDef::delete()]
            search_placeholder="Order number, customer, email..."
        />
    }
}
