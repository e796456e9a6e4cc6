use crate::{
    application::{FarmingListState, ListBody},
    config::ListConfig,
    domain::{
        listing::{ColumnSet, PairRow, RowView, TokenCell},
        records::RecordSet,
    },
    format_utils::truncate_name,
    infrastructure::viewport::use_breakpoints,
};
use leptos::*;
use std::rc::Rc;

/// Sortable, paged list of farming campaigns.
///
/// `records` is `None` until the data provider has answered.
#[component]
pub fn FarmingList(
    #[prop(into)] records: Signal<Option<Rc<RecordSet>>>,
    #[prop(optional)] config: ListConfig,
    /// Link colour
    #[prop(optional, into)]
    color: Option<String>,
    #[prop(optional)] disable_links: bool,
) -> impl IntoView {
    let columns = {
        let breakpoints = use_breakpoints();
        Signal::derive(move || ColumnSet::for_breakpoints(breakpoints.get()))
    };

    let mut initial = FarmingListState::from_config(&config);
    initial.set_records(records.get_untracked());
    let state = create_rw_signal(initial);

    create_effect(move |_| {
        let next = records.get();
        state.update(|list| {
            list.set_records(next);
        });
    });

    let config = store_value(config);
    let color = store_value(color);

    let header = move || {
        let columns = columns.get();
        let sort = state.with(|list| list.sort());
        columns
            .sortable_headers()
            .into_iter()
            .map(|field| {
                view! {
                    <div class="farming-list__header-cell">
                        <span
                            class="clickable-text"
                            on:click=move |_| state.update(|list| list.select_sort(field))
                        >
                            {format!("{} {}", field.header_label(), sort.indicator_for(field))}
                        </span>
                        {field.help_text().map(|text| view! {
                            <span class="question-helper" title=text>"?"</span>
                        })}
                    </div>
                }
            })
            .collect_view()
    };

    let body = move || match state.with(|list| list.body()) {
        ListBody::Loading => view! { <LocalLoader/> }.into_view(),
        ListBody::Empty => view! { <div class="farming-list__empty">"No campaigns found"</div> }
            .into_view(),
        ListBody::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                view! {
                    <div>
                        <ListRow
                            row=row
                            columns=columns.get()
                            config=config.get_value()
                            color=color.get_value()
                            disable_links=disable_links
                        />
                        <div class="divider"></div>
                    </div>
                }
            })
            .collect_view(),
    };

    view! {
        <div class="farming-list">
            <div
                class="dash-grid dash-grid--header"
                style:grid-template-columns=move || columns.get().grid_template()
            >
                <div class="farming-list__header-cell farming-list__name">"Name"</div>
                {header}
            </div>
            <div class="divider"></div>
            <div class="farming-list__rows">{body}</div>
            <div class="page-buttons">
                <div on:click=move |_| state.update(|list| list.previous_page())>
                    <div
                        class="arrow"
                        style:opacity=move || {
                            if state.with(|list| list.pager().is_first()) { "0.3" } else { "1" }
                        }
                    >
                        "←"
                    </div>
                </div>
                <span>{move || state.with(|list| list.pager().label())}</span>
                <div on:click=move |_| state.update(|list| list.next_page())>
                    <div
                        class="arrow"
                        style:opacity=move || {
                            if state.with(|list| list.pager().is_last()) { "0.3" } else { "1" }
                        }
                    >
                        "→"
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ListRow(
    row: RowView,
    columns: ColumnSet,
    config: ListConfig,
    color: Option<String>,
    disable_links: bool,
) -> impl IntoView {
    let RowView::Pair(row) = row else {
        return view! { <div class="dash-grid dash-grid--row"></div> }.into_view();
    };
    let PairRow { index, link, name, staked, tokens, tvl, fees, apy, .. } = row;
    let [token0, token1] = tokens;
    let max_characters = columns.name_max_characters;
    let name = truncate_name(&name, max_characters);

    let link_view = if disable_links {
        view! { <span class="pair-name">{name}</span> }.into_view()
    } else {
        view! {
            <a class="custom-link pair-name" href=link style:color=color>{name}</a>
        }
        .into_view()
    };

    view! {
        <div
            class="dash-grid dash-grid--row"
            style:grid-template-columns=columns.grid_template()
        >
            <div class="data-text data-text--name">
                {columns.show_index.then(|| view! { <div class="row-index">{index}</div> })}
                <DoubleTokenLogo
                    token0=token0.clone()
                    token1=token1.clone()
                    size=columns.logo_size_px
                    margin=columns.logo_margin
                    config=config.clone()
                />
                {link_view}
            </div>
            <div class="data-text">{staked}</div>
            <div class="data-text data-text--reserves">
                <ReserveLine token=token0 max_characters=max_characters config=config.clone()/>
                <ReserveLine token=token1 max_characters=max_characters config=config/>
            </div>
            {columns.show_tvl.then(|| view! { <div class="data-text">{tvl}</div> })}
            {columns.show_fees.then(|| view! { <div class="data-text">{fees}</div> })}
            {columns.show_apy.then(|| view! { <div class="data-text">{apy}</div> })}
        </div>
    }
    .into_view()
}

#[component]
fn ReserveLine(token: TokenCell, max_characters: usize, config: ListConfig) -> impl IntoView {
    let symbol = truncate_name(&token.symbol, max_characters);
    view! {
        <div class="auto-row">
            <TokenLogo address=token.address symbol=token.symbol size=13 config=config/>
            <span class="data-text">{token.reserve}</span>
            <span class="token-symbol">{symbol}</span>
        </div>
    }
}

#[component]
fn DoubleTokenLogo(
    token0: TokenCell,
    token1: TokenCell,
    size: u32,
    margin: bool,
    config: ListConfig,
) -> impl IntoView {
    let class = if margin { "double-logo double-logo--margin" } else { "double-logo" };
    view! {
        <span class=class>
            <TokenLogo address=token0.address symbol=token0.symbol size=size config=config.clone()/>
            <TokenLogo address=token1.address symbol=token1.symbol size=size config=config/>
        </span>
    }
}

/// Token icon with the symbol as fallback when the image fails to load.
#[component]
fn TokenLogo(address: String, symbol: String, size: u32, config: ListConfig) -> impl IntoView {
    let (failed, set_failed) = create_signal(address.is_empty());
    let src = config.logo_url(&address);
    let size_px = format!("{}px", size);
    let fallback = symbol.chars().take(3).collect::<String>();

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || view! { <span class="token-logo token-logo--text">{fallback.clone()}</span> }
        >
            <img
                class="token-logo"
                src=src.clone()
                alt=symbol.clone()
                style:width=size_px.clone()
                style:height=size_px.clone()
                on:error=move |_| set_failed.set(true)
            />
        </Show>
    }
}

#[component]
pub fn LocalLoader() -> impl IntoView {
    view! {
        <div class="local-loader">
            <div class="dot-flashing"></div>
        </div>
    }
}
