use crate::application::SymbolSnapshot;
use crate::domain::market_data::Symbol;
use futures::future::AbortHandle;
use leptos::*;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// Reactive session state scoped to the currently selected symbol.
/// Replaced wholesale on every completed fetch cycle.
pub struct Globals {
    pub current_symbol: RwSignal<Symbol>,
    pub fetch_generation: RwSignal<u64>,
    pub snapshot: RwSignal<Option<SymbolSnapshot>>,
    pub is_loading: RwSignal<bool>,
    pub status: RwSignal<String>,
    pub fetch_abort_handles: RwSignal<HashMap<Symbol, AbortHandle>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        current_symbol: create_rw_signal(Symbol::from("TCS")),
        fetch_generation: create_rw_signal(0),
        snapshot: create_rw_signal(None),
        is_loading: create_rw_signal(false),
        status: create_rw_signal(String::new()),
        fetch_abort_handles: create_rw_signal(HashMap::new()),
    })
}
