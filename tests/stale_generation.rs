#![cfg(target_arch = "wasm32")]
use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use stock_sentiment_wasm::app::{
    abort_other_fetches, current_symbol, fetch_abort_handles, fetch_generation, next_generation,
};
use stock_sentiment_wasm::application::FetchCycle;
use stock_sentiment_wasm::domain::market_data::Symbol;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn generation_counter_is_monotonic() {
    let start = fetch_generation().get_untracked();
    let a = next_generation();
    let b = next_generation();
    assert!(a > start);
    assert!(b > a);
}

#[wasm_bindgen_test]
fn older_cycle_is_stale_after_a_newer_one_starts() {
    let symbol = Symbol::from("TCS");
    let old_cycle = FetchCycle::new(symbol.clone(), next_generation());
    let _ = next_generation();
    assert!(old_cycle.is_stale(fetch_generation().get_untracked()));
}

#[wasm_bindgen_test(async)]
async fn aborts_old_fetch_on_symbol_change() {
    let (handle, reg) = AbortHandle::new_pair();
    current_symbol().set(Symbol::from("TCS"));
    fetch_abort_handles().update(|m| {
        m.insert(Symbol::from("TCS"), handle.clone());
    });
    let fut = Abortable::new(sleep(Duration::from_millis(50)), reg);

    let new_symbol = Symbol::from("INFY");
    abort_other_fetches(&new_symbol);

    assert!(fut.await.is_err());
    assert!(fetch_abort_handles().with(|m| !m.contains_key(&Symbol::from("TCS"))));
}

#[wasm_bindgen_test]
fn keeps_pending_fetch_for_the_same_symbol() {
    let (handle, _reg) = AbortHandle::new_pair();
    fetch_abort_handles().update(|m| {
        m.insert(Symbol::from("WIPRO"), handle);
    });

    abort_other_fetches(&Symbol::from("WIPRO"));

    assert!(fetch_abort_handles().with(|m| m.contains_key(&Symbol::from("WIPRO"))));
    fetch_abort_handles().update(|m| {
        m.remove(&Symbol::from("WIPRO"));
    });
}
