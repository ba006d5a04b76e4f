#![cfg(target_arch = "wasm32")]
use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use stock_sentiment_wasm::app::{current_symbol, fetch_abort_handles};
use stock_sentiment_wasm::domain::market_data::Symbol;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn aborts_pending_fetch() {
    let (handle, reg) = AbortHandle::new_pair();
    current_symbol().set(Symbol::from("TCS"));
    fetch_abort_handles().update(|m| {
        m.insert(Symbol::from("TCS"), handle.clone());
    });
    let fut = Abortable::new(sleep(Duration::from_millis(50)), reg);
    handle.abort();
    assert!(fut.await.is_err());
}
