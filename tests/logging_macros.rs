use std::sync::{Arc, Mutex};
use stock_sentiment_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, init_logger};
use stock_sentiment_wasm::{log_debug, log_error, log_info, log_warn};

struct CapturingLogger {
    entries: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        self.entries
            .lock()
            .unwrap()
            .push((entry.level, format!("{} | {}", entry.component, entry.message)));
    }
}

#[test]
fn macros_route_through_the_global_logger() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    init_logger(Box::new(CapturingLogger { entries: entries.clone() }));

    log_debug!(LogComponent::Domain("Aligner"), "truncated to {} points", 3);
    log_info!(LogComponent::Infrastructure("StockAPI"), "loaded {} bars", 12);
    log_warn!(LogComponent::Application("SymbolData"), "empty news");
    log_error!(LogComponent::Presentation("Fetch"), "render failed");

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 4);
    assert_eq!(captured[0], (LogLevel::Debug, "DOM:Aligner | truncated to 3 points".to_string()));
    assert_eq!(captured[1], (LogLevel::Info, "INF:StockAPI | loaded 12 bars".to_string()));
    assert_eq!(captured[2], (LogLevel::Warn, "APP:SymbolData | empty news".to_string()));
    assert_eq!(captured[3], (LogLevel::Error, "PRE:Fetch | render failed".to_string()));
}
