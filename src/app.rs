use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::sleep;
use leptos::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::{
    application::{FetchCycle, SymbolDataService, SymbolSnapshot},
    domain::{logging::LogComponent, market_data::Symbol, news::SentimentLabel},
    global_signals,
    infrastructure::rendering::LineChartRenderer,
    log_debug, log_error, log_warn,
};

/// Keystrokes within this window collapse into one fetch.
pub const FETCH_DEBOUNCE: Duration = Duration::from_millis(250);

global_signals! {
    pub current_symbol => current_symbol: Symbol,
    pub fetch_generation => fetch_generation: u64,
    pub active_snapshot => snapshot: Option<SymbolSnapshot>,
    pub is_loading => is_loading: bool,
    pub status_message => status: String,
    pub fetch_abort_handles => fetch_abort_handles: HashMap<Symbol, AbortHandle>,
}

/// Bump the global fetch generation and return the new value.
pub fn next_generation() -> u64 {
    fetch_generation()
        .try_update(|g| {
            *g += 1;
            *g
        })
        .unwrap_or_default()
}

/// Abort every in-flight fetch that belongs to a different symbol.
pub fn abort_other_fetches(new_symbol: &Symbol) {
    fetch_abort_handles().update(|handles| {
        handles.retain(|symbol, handle| {
            if symbol == new_symbol {
                true
            } else {
                handle.abort();
                false
            }
        });
    });
}

/// Start one fetch cycle for `symbol`, replacing the session state when it
/// completes as the latest generation. A response that lost the generation
/// race is discarded on arrival.
pub fn spawn_symbol_fetch(symbol: Symbol) {
    abort_other_fetches(&symbol);

    let generation = next_generation();
    let cycle = FetchCycle::new(symbol.clone(), generation);
    let (handle, registration) = AbortHandle::new_pair();
    fetch_abort_handles().update(|handles| {
        // a newer fetch for the same symbol supersedes the pending one
        if let Some(previous) = handles.insert(symbol.clone(), handle) {
            previous.abort();
        }
    });

    is_loading().set(true);
    status_message().set(format!("Loading {}...", symbol.value()));

    spawn_local(async move {
        let service = SymbolDataService::new();
        let task = Abortable::new(service.load(cycle), registration);

        match task.await {
            Ok(snapshot) => {
                if snapshot.cycle.is_stale(fetch_generation().get_untracked()) {
                    log_warn!(
                        LogComponent::Presentation("Fetch"),
                        "Discarding stale cycle {} for {}",
                        snapshot.cycle.generation,
                        snapshot.cycle.symbol.value()
                    );
                    return;
                }

                status_message().set(match (snapshot.bars.is_empty(), snapshot.news.is_empty()) {
                    (true, _) => format!("No data for {}", symbol.value()),
                    (false, true) => format!("{}: bars loaded, no matching news", symbol.value()),
                    (false, false) => format!(
                        "{}: {} bars, {} news items",
                        symbol.value(),
                        snapshot.bars.len(),
                        snapshot.news.len()
                    ),
                });
                active_snapshot().set(Some(snapshot));
                is_loading().set(false);
                fetch_abort_handles().update(|handles| {
                    handles.remove(&symbol);
                });
            }
            Err(_aborted) => {
                log_debug!(
                    LogComponent::Presentation("Fetch"),
                    "Fetch for {} aborted by a newer request",
                    symbol.value()
                );
            }
        }
    });
}

/// Validate raw input and kick off a fetch cycle for it.
pub fn submit_symbol(raw: &str) {
    match Symbol::new(raw.to_string()) {
        Ok(symbol) => {
            current_symbol().set(symbol.clone());
            spawn_symbol_fetch(symbol);
        }
        Err(e) => status_message().set(e),
    }
}

/// 🦀 Main component: stock data viewer with news sentiment comparison
#[component]
pub fn App() -> impl IntoView {
    // initial load for the default symbol
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            spawn_symbol_fetch(current_symbol().get_untracked());
        }
    });

    view! {
        <style>
            {r#"
            .stock-viewer-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #111827;
                min-height: 100vh;
                padding: 20px;
                color: white;
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 16px;
            }

            .panel {
                background: #1f2937;
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 12px;
                padding: 16px;
            }

            .panel h1 {
                text-align: center;
                font-size: 24px;
                margin: 0 0 16px 0;
            }

            .panel h2 {
                font-size: 18px;
                margin: 0 0 12px 0;
            }

            .symbol-row {
                display: flex;
                gap: 0;
                margin-bottom: 16px;
            }

            .symbol-input {
                flex-grow: 1;
                padding: 8px;
                border-radius: 6px 0 0 6px;
                border: 1px solid #4a5d73;
                background: #111827;
                color: white;
            }

            .fetch-btn {
                background: #2563eb;
                color: white;
                border: none;
                padding: 8px 16px;
                border-radius: 0 6px 6px 0;
                cursor: pointer;
            }

            .fetch-btn:hover {
                background: #1d4ed8;
            }

            .status {
                color: #72c685;
                font-size: 13px;
                text-align: center;
                margin-bottom: 12px;
                min-height: 16px;
            }

            .bar-table {
                width: 100%;
                border-collapse: collapse;
                text-align: center;
                font-size: 13px;
                margin-bottom: 16px;
            }

            .bar-table th, .bar-table td {
                border: 1px solid #374151;
                padding: 6px;
            }

            .bar-table th {
                background: #374151;
            }

            .bar-table tr:hover td {
                background: #374151;
            }

            .news-item {
                padding: 10px 4px;
                border-bottom: 1px solid #374151;
            }

            .news-headline {
                font-weight: 600;
                margin-bottom: 4px;
            }

            .news-sentiment {
                font-size: 12px;
            }

            .sentiment-positive { color: #4ade80; }
            .sentiment-negative { color: #f87171; }
            .sentiment-neutral { color: #facc15; }

            canvas {
                border: 1px solid #4a5d73;
                border-radius: 8px;
                background: #1f2937;
                width: 100%;
            }
            "#}
        </style>
        <div class="stock-viewer-app">
            <div class="panel">
                <h1>"Stock Data Viewer"</h1>
                <SymbolPanel />
                <StockTable />
                <PriceChartPanel />
            </div>
            <div class="panel">
                <h2>"News Sentiment Analysis"</h2>
                <NewsPanel />
                <ComparisonChartPanel />
            </div>
        </div>
    }
}

/// Symbol input with debounced fetch-on-change plus an explicit fetch button
#[component]
fn SymbolPanel() -> impl IntoView {
    let (pending, set_pending) = create_signal(current_symbol().get_untracked().value().to_string());
    let (epoch, set_epoch) = create_signal(0u64);

    let on_input = move |ev| {
        let raw = event_target_value(&ev);
        set_pending.set(raw.clone());
        set_epoch.update(|e| *e += 1);
        let my_epoch = epoch.get_untracked();
        spawn_local(async move {
            sleep(FETCH_DEBOUNCE).await;
            // only the last keystroke of the burst fires a fetch
            if epoch.get_untracked() == my_epoch {
                submit_symbol(&raw);
            }
        });
    };

    view! {
        <div class="symbol-row">
            <input
                type="text"
                class="symbol-input"
                placeholder="Enter stock symbol (e.g., TCS)"
                prop:value=move || pending.get()
                on:input=on_input
            />
            <button
                class="fetch-btn"
                on:click=move |_| submit_symbol(&pending.get_untracked())
            >
                "Fetch Data"
            </button>
        </div>
        <div class="status">
            {move || {
                if is_loading().get() { "⏳ Loading...".to_string() } else { status_message().get() }
            }}
        </div>
    }
}

/// Raw monthly bars in received (newest-first) order
#[component]
fn StockTable() -> impl IntoView {
    view! {
        <table class="bar-table">
            <thead>
                <tr>
                    <th>"Month"</th>
                    <th>"Open"</th>
                    <th>"High"</th>
                    <th>"Low"</th>
                    <th>"Close"</th>
                    <th>"Volume"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    active_snapshot().with(|snap| {
                        snap.as_ref()
                            .map(|snapshot| {
                                snapshot
                                    .bars
                                    .iter()
                                    .map(|bar| {
                                        view! {
                                            <tr>
                                                <td>{bar.date.value().to_string()}</td>
                                                <td>{format!("{:.2}", bar.ohlcv.open.value())}</td>
                                                <td>{format!("{:.2}", bar.ohlcv.high.value())}</td>
                                                <td>{format!("{:.2}", bar.ohlcv.low.value())}</td>
                                                <td>{format!("{:.2}", bar.ohlcv.close.value())}</td>
                                                <td>{bar.ohlcv.volume.value().to_string()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            })
                            .unwrap_or_else(|| ().into_view())
                    })
                }}
            </tbody>
        </table>
    }
}

/// Closing-price line chart for the current symbol
#[component]
fn PriceChartPanel() -> impl IntoView {
    create_effect(move |_| {
        active_snapshot().with(|snap| {
            if let Some(snapshot) = snap {
                let renderer = LineChartRenderer::new("price-chart-canvas", 640, 320);
                if let Err(e) = renderer.render(&snapshot.price_series) {
                    log_error!(LogComponent::Presentation("PriceChart"), "Render failed: {e:?}");
                }
            }
        });
    });

    view! {
        <div>
            <h2>
                {move || format!("{} Stock Chart (Monthly)", current_symbol().get().value())}
            </h2>
            <canvas id="price-chart-canvas" width="640" height="320" />
        </div>
    }
}

/// Scored headlines with their sentiment labels
#[component]
fn NewsPanel() -> impl IntoView {
    view! {
        <div>
            {move || {
                active_snapshot().with(|snap| {
                    snap.as_ref()
                        .map(|snapshot| {
                            snapshot
                                .news
                                .iter()
                                .map(|item| {
                                    let class = match item.sentiment {
                                        SentimentLabel::Positive => "news-sentiment sentiment-positive",
                                        SentimentLabel::Negative => "news-sentiment sentiment-negative",
                                        SentimentLabel::Neutral => "news-sentiment sentiment-neutral",
                                    };
                                    view! {
                                        <div class="news-item">
                                            <div class="news-headline">{item.headline.clone()}</div>
                                            <div class=class>
                                                {format!(
                                                    "Sentiment: {} (Polarity: {:.2})",
                                                    item.sentiment,
                                                    item.polarity.value()
                                                )}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                        .unwrap_or_else(|| ().into_view())
                })
            }}
        </div>
    }
}

/// Sentiment vs percent price change on one shared date axis
#[component]
fn ComparisonChartPanel() -> impl IntoView {
    create_effect(move |_| {
        active_snapshot().with(|snap| {
            if let Some(snapshot) = snap {
                let renderer = LineChartRenderer::new("comparison-chart-canvas", 640, 320);
                if let Err(e) = renderer.render(&snapshot.comparison_series) {
                    log_error!(LogComponent::Presentation("ComparisonChart"), "Render failed: {e:?}");
                }
            }
        });
    });

    view! {
        <div>
            <h2>"Sentiment vs Price Change"</h2>
            <canvas id="comparison-chart-canvas" width="640" height="320" />
        </div>
    }
}
