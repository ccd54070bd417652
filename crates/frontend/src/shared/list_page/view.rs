use contracts::shared::list_view::{ListConfig, ListRecord, ListStore};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;

use super::bulk_action::{BulkActionDispatcher, BulkError, BulkPhase};
use super::columns::{BulkActionDef, ColumnDef, RowActionDef, RowActionKind, StatDef};
use super::{delete_record, load_list, run_record_action};
use crate::shared::api_client::{ApiError, RestResource};
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::{PaginationControls, StatCard};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn page_size_options(current: usize) -> Vec<usize> {
    let mut options = config().lists.page_size_options.clone();
    if !options.contains(&current) {
        options.push(current);
        options.sort_unstable();
    }
    options
}

/// Admin list of one storefront resource.
///
/// Fetches the whole collection once, then filters, sorts and pages it in
/// memory. Selection survives paging and filtering; bulk actions act on it
/// and refetch the list afterwards.
#[component]
pub fn ListPage<T>(
    /// `{entity}--list` id of the page root
    page_id: &'static str,
    title: &'static str,
    /// REST path below `/api`, e.g. `affiliate/orders`
    resource: &'static str,
    /// Key of the collection in the list response
    collection_key: &'static str,
    list_config: ListConfig,
    columns: Vec<ColumnDef<T>>,
    #[prop(optional)] stats: Vec<StatDef>,
    #[prop(optional)] bulk_actions: Vec<BulkActionDef>,
    #[prop(optional)] row_actions: Vec<RowActionDef<T>>,
    #[prop(optional, into)] search_placeholder: String,
) -> impl IntoView
where
    T: ListRecord + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let session = use_session();
    let toasts = use_toasts();

    let api = StoredValue::new(RestResource::<T>::new(
        resource,
        collection_key,
        session.get_untracked().as_ref(),
    ));
    let size_options = page_size_options(list_config.page_size);
    let store = RwSignal::new(ListStore::new(list_config));
    let in_flight = RwSignal::new(0usize);
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let dispatcher = StoredValue::new(BulkActionDispatcher::new());

    let has_row_actions = !row_actions.is_empty();
    let columns = StoredValue::new(columns);
    let row_actions = StoredValue::new(row_actions);
    let bulk_actions = StoredValue::new(bulk_actions);

    let loading = Signal::derive(move || in_flight.get() > 0);
    let selected_count = Signal::derive(move || store.with(|s| s.selection().count()));
    let sort = Signal::derive(move || store.with(|s| s.sort().clone()));

    let report = move |e: &ApiError| {
        if e.is_unauthorized() {
            session.sign_out();
        }
        toasts.error(e.to_string());
    };

    let reload = move || {
        let api = api.get_value();
        in_flight.update(|n| *n += 1);
        spawn_local(async move {
            match load_list(&api, &store).await {
                Ok(_) => error.set(None),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    report(&e);
                }
            }
            in_flight.update(|n| *n = n.saturating_sub(1));
        });
    };

    Effect::new(move |_| {
        if !store.with_untracked(|s| s.is_loaded()) {
            reload();
        }
    });

    let run_bulk = move |def: BulkActionDef| {
        let action = match def.make.run(()) {
            Ok(action) => action,
            Err(message) => {
                toasts.error(message);
                return;
            }
        };
        let count = selected_count.get_untracked();
        if (def.confirm || action.is_destructive())
            && !confirm(&format!("{} {} selected record(s)?", def.label, count))
        {
            return;
        }

        let api = api.get_value();
        let dispatcher = dispatcher.get_value();
        submitting.set(true);
        spawn_local(async move {
            match dispatcher.dispatch(&api, &store, action).await {
                Ok(outcome) => {
                    toasts.success(outcome.summary());
                    if let Err(e) = outcome.refreshed {
                        error.set(Some(e.to_string()));
                        report(&e);
                    }
                }
                Err(BulkError::AlreadySubmitting) => {}
                Err(BulkError::Api(e)) => report(&e),
                Err(e) => toasts.error(e.to_string()),
            }
            submitting.set(dispatcher.phase() == BulkPhase::Submitting);
        });
    };

    let run_row_action = move |kind: RowActionKind, label: &'static str, confirm_first: bool, id: String| {
        if confirm_first && !confirm(&format!("{} this record?", label)) {
            return;
        }
        let api = api.get_value();
        spawn_local(async move {
            let result = match kind {
                RowActionKind::Delete => delete_record(&api, &store, &id).await,
                RowActionKind::Endpoint(action) => {
                    let result = run_record_action::<T, _>(&api, &id, action).await;
                    if result.is_ok() {
                        if let Err(e) = load_list(&api, &store).await {
                            report(&e);
                        }
                    }
                    result
                }
            };
            match result {
                Ok(response) => toasts.success(
                    response
                        .message
                        .unwrap_or_else(|| format!("{}: done", label)),
                ),
                Err(e) => report(&e),
            }
        });
    };

    let on_toggle_all = Callback::new(move |check_all: bool| {
        store.update(|s| {
            if check_all {
                s.select_all_visible()
            } else {
                s.clear_selection()
            }
        })
    });
    let on_toggle_row = Callback::new(move |(id, checked): (String, bool)| {
        store.update(|s| s.set_selected(&id, checked))
    });
    let on_sort = Callback::new(move |field: String| store.update(|s| s.toggle_sort(&field)));

    let render_row = move |row: T| {
        let id = row.record_id().to_string();
        let checked = {
            let id = id.clone();
            Signal::derive(move || store.with(|s| s.selection().is_selected(&id)))
        };

        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let content = (col.render)(&row);
                    view! {
                        <TableCell>
                            <TableCellLayout truncate=true>{content}</TableCellLayout>
                        </TableCell>
                    }
                })
                .collect_view()
        });

        let actions = has_row_actions.then(|| {
            let buttons = row_actions.with_value(|actions| {
                actions
                    .iter()
                    .filter(|a| (a.visible)(&row))
                    .map(|a| {
                        let (kind, label, confirm_first) = (a.kind, a.label, a.confirm);
                        let action_icon = icon(a.icon);
                        let id = id.clone();
                        view! {
                            <button
                                class="table__action"
                                title=label
                                on:click=move |_| run_row_action(kind, label, confirm_first, id.clone())
                            >
                                {action_icon}
                            </button>
                        }
                    })
                    .collect_view()
            });
            view! {
                <TableCell>
                    <div class="table__actions">{buttons}</div>
                </TableCell>
            }
        });

        view! {
            <TableRow>
                <TableCellCheckbox item_id=id checked=checked on_change=on_toggle_row />
                {cells}
                {actions}
            </TableRow>
        }
    };

    let stat_cards = (!stats.is_empty()).then(|| {
        view! {
            <div class="stat-cards">
                {stats
                    .into_iter()
                    .map(|def| {
                        let label = def.label.to_string();
                        let icon_name = def.icon.to_string();
                        let tone = def.tone;
                        let value = Signal::derive(move || store.with(|s| def.value_in(s.stats())));
                        view! { <StatCard label=label icon_name=icon_name value=value tone=tone /> }
                    })
                    .collect_view()}
            </div>
        }
    });

    let tab_strip = move || {
        let active = store.with(|s| s.filter().active_tab.clone());
        store
            .with(|s| s.tab_counts())
            .into_iter()
            .map(|(label, count)| {
                let class = if label == active {
                    "tab-strip__tab tab-strip__tab--active"
                } else {
                    "tab-strip__tab"
                };
                view! {
                    <button class=class on:click=move |_| store.update(|s| s.set_tab(label))>
                        {label}
                        <span class="tab-strip__count">{count}</span>
                    </button>
                }
            })
            .collect_view()
    };

    let column_count = columns.with_value(|c| c.len()) + 1 + usize::from(has_row_actions);
    let table_id = format!("{}-table", page_id);

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge>{move || store.with(|s| s.records().len()).to_string()}</Badge>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| reload()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                {stat_cards}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <div class="tab-strip">{tab_strip}</div>
                        </div>

                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || store.with(|s| s.page_index()))
                                total_pages=Signal::derive(move || store.with(|s| s.total_pages()))
                                total_count=Signal::derive(move || store.with(|s| s.filtered().len()))
                                page_size=Signal::derive(move || store.with(|s| s.cursor().page_size()))
                                on_page_change=Callback::new(move |page| store.update(|s| s.go_to_page(page)))
                                on_page_size_change=Callback::new(move |size| store.update(|s| s.set_page_size(size)))
                                page_size_options=size_options
                            />
                        </div>

                        <div class="filter-panel-header__right">
                            <SearchInput
                                value=Signal::derive(move || store.with(|s| s.filter().search_text.clone()))
                                on_change=move |text: String| store.update(|s| s.set_search(text))
                                placeholder=search_placeholder
                            />
                        </div>
                    </div>
                </div>

                <Show when=move || { selected_count.get() > 0 }>
                    <div class="bulk-toolbar">
                        <span class="bulk-toolbar__count">
                            {move || format!("{} selected", selected_count.get())}
                        </span>
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            {bulk_actions
                                .get_value()
                                .into_iter()
                                .map(|def| {
                                    let control = def.control.as_ref().map(|c| c.run());
                                    let label = def.label;
                                    let appearance = if def.confirm {
                                        ButtonAppearance::Secondary
                                    } else {
                                        ButtonAppearance::Primary
                                    };
                                    view! {
                                        {control}
                                        <Button
                                            appearance=appearance
                                            on_click=move |_| run_bulk(def.clone())
                                            disabled=Signal::derive(move || submitting.get())
                                        >
                                            {label}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| store.update(|s| s.clear_selection())
                            >
                                {icon("x")}
                                " Clear selection"
                            </Button>
                        </Flex>
                    </div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:id=table_id attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    coverage=Signal::derive(move || store.with(|s| s.selection_coverage()))
                                    on_change=on_toggle_all
                                />
                                {columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|col| {
                                            let (title, min_width) = (col.title, col.min_width);
                                            match col.sort_field {
                                                Some(field) => view! {
                                                    <SortableHeaderCell
                                                        label=title
                                                        sort_field=field
                                                        sort=sort
                                                        on_sort=on_sort
                                                        min_width=min_width
                                                    />
                                                }
                                                .into_any(),
                                                None => view! {
                                                    <TableHeaderCell resizable=false min_width=min_width class="resizable">
                                                        {title}
                                                    </TableHeaderCell>
                                                }
                                                .into_any(),
                                            }
                                        })
                                        .collect_view()
                                })}
                                {has_row_actions.then(|| view! {
                                    <TableHeaderCell resizable=false min_width=90.0>"Actions"</TableHeaderCell>
                                })}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let rows = store.with(|s| s.visible_page().to_vec());
                                if rows.is_empty() {
                                    let message = if loading.get() && !store.with(|s| s.is_loaded()) {
                                        "Loading..."
                                    } else if store.with(|s| s.records().is_empty()) {
                                        "No records yet"
                                    } else {
                                        "No records match the current filters"
                                    };
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan=column_count.to_string()>
                                                <div class="table__empty">{message}</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter().map(render_row).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
