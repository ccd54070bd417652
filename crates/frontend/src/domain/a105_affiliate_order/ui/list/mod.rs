use contracts::domain::a105_affiliate_order::aggregate::{
    list_config, update_commission_action, AffiliateOrder, CommissionStatus, TrackingStatus,
    COLLECTION_KEY, RESOURCE, RETRY_TRACKING_ACTION,
};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::shared::components::{status_badge, StatTone};
use crate::shared::config::config;
use crate::shared::date_utils::{format_date, format_money, format_percent};
use crate::shared::list_page::{BulkActionDef, ColumnDef, ListPage, RowActionDef, StatDef};

fn columns() -> Vec<ColumnDef<AffiliateOrder>> {
    vec![
        ColumnDef::new("Order", |o: &AffiliateOrder| {
            view! { <span class="table__primary">{o.order_number.clone()}</span> }.into_any()
        })
        .sortable("order_number"),
        ColumnDef::new("Affiliate", |o: &AffiliateOrder| {
            let code = o.affiliate_code.clone().unwrap_or_default();
            view! {
                <div class="table__stack">
                    <span>{o.affiliate_name.clone()}</span>
                    <span class="table__muted">{code}</span>
                </div>
            }
            .into_any()
        })
        .sortable("affiliate")
        .min_width(180.0),
        ColumnDef::new("Order total", |o: &AffiliateOrder| format_money(o.order_total).into_any())
            .sortable("order_total"),
        ColumnDef::new("Rate", |o: &AffiliateOrder| format_percent(o.commission_rate).into_any())
            .sortable("commission_rate")
            .min_width(80.0),
        ColumnDef::new("Commission", |o: &AffiliateOrder| {
            format_money(o.commission_amount).into_any()
        })
        .sortable("commission"),
        ColumnDef::new("Status", |o: &AffiliateOrder| {
            let tone = match o.status {
                CommissionStatus::Pending => "warning",
                CommissionStatus::Approved => "info",
                CommissionStatus::Paid => "success",
                CommissionStatus::Rejected => "error",
                CommissionStatus::Unknown => "neutral",
            };
            status_badge(o.status.as_str(), tone)
        })
        .sortable("status"),
        ColumnDef::new("Tracking", |o: &AffiliateOrder| match o.tracking_status {
            TrackingStatus::Tracked => status_badge("tracked", "success"),
            TrackingStatus::Failed => status_badge("failed", "error"),
            TrackingStatus::Pending => status_badge("pending", "neutral"),
        }),
        ColumnDef::new("Date", |o: &AffiliateOrder| format_date(o.created_at.as_ref()).into_any())
            .sortable("created_at"),
    ]
}

fn money_stat(value: &Value) -> String {
    format_money(value.as_f64().unwrap_or_default())
}

fn stats() -> Vec<StatDef> {
    vec![
        StatDef::new("Orders", "total").icon("affiliates"),
        StatDef::new("Pending commission", "pendingCommission")
            .tone(StatTone::Warning)
            .format(money_stat),
        StatDef::new("Paid commission", "paidCommission")
            .tone(StatTone::Success)
            .format(money_stat),
        StatDef::new("Tracking failures", "trackingFailed")
            .icon("percent")
            .tone(StatTone::Error),
    ]
}

/// Affiliate orders with commission updates and tracking retries
#[component]
pub fn AffiliateOrderList() -> impl IntoView {
    let rate_input = RwSignal::new(String::new());

    let update_commission = BulkActionDef::new("Update commission", move |_| {
        update_commission_action(&rate_input.get_untracked()).map_err(|e| e.to_string())
    })
    .with_control(move || {
        view! {
            <div class="bulk-toolbar__field">
                <Input value=rate_input placeholder="Rate, %" />
            </div>
        }
    });

    view! {
        <ListPage
            page_id="a105_affiliate_order--list"
            title="Affiliate orders"
            resource=RESOURCE
            collection_key=COLLECTION_KEY
            list_config=list_config().page_size(config().lists.page_size)
            columns=columns()
            stats=stats()
            bulk_actions=vec![update_commission]
            row_actions=vec![RowActionDef::endpoint(
                "Retry tracking",
                RETRY_TRACKING_ACTION,
                AffiliateOrder::can_retry_tracking,
            )]
            search_placeholder="Order, affiliate, code..."
        />
    }
}
