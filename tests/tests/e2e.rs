//! Full-stack tests: real engine, real orchestrator and parser, real
//! message router, with only the HTTP transport and the clock replaced.

use async_trait::async_trait;
use focusgate_application::ports::{
    BlocklistUpdatePort, FilterEnginePort, SettingsStore,
};
use focusgate_application::use_cases::{
    AddCustomDomainUseCase, FetchBlocklistUseCase, GetBlockedPageUrlUseCase,
    RemoveCustomDomainUseCase, SetActiveUseCase, UpdateBlocklistsUseCase,
};
use focusgate_application::{MessageRouter, Request, Response};
use focusgate_domain::config::FetchConfig;
use focusgate_domain::{BlocklistSource, FilterError, Settings};
use focusgate_engine::fetch::{BlocklistFetcher, BlocklistOrchestrator, FetchTransport};
use focusgate_engine::storage::MemoryStore;
use focusgate_engine::{FilterEngine, ManualClock};
use std::collections::HashMap;
use std::sync::Arc;

struct TableTransport {
    bodies: HashMap<String, String>,
}

#[async_trait]
impl FetchTransport for TableTransport {
    async fn get_text(&self, url: &str) -> Result<String, FilterError> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| FilterError::Network(format!("unreachable: {url}")))
    }
}

struct Stack {
    store: Arc<MemoryStore>,
    engine: Arc<FilterEngine>,
    clock: Arc<ManualClock>,
    router: MessageRouter,
}

fn source(id: &str, url: &str) -> BlocklistSource {
    BlocklistSource::new(Arc::from(id), Arc::from(id), Arc::from(url), true)
}

/// Three community sources, one of which is unreachable.
fn stack() -> Stack {
    let mut settings = Settings::default();
    settings.blocklist_sources = vec![
        source("porn", "https://lists.example.dev/porn"),
        source("gambling", "https://lists.example.dev/gambling"),
        source("broken", "https://lists.example.dev/broken"),
    ];
    let store = Arc::new(MemoryStore::new(settings));

    let transport = TableTransport {
        bodies: HashMap::from([
            (
                "https://lists.example.dev/porn".to_string(),
                "0.0.0.0 adult-site.com\n# comment\n127.0.0.1 gambling.net\ninvalid line\n"
                    .to_string(),
            ),
            (
                "https://lists.example.dev/gambling".to_string(),
                "0.0.0.0 betting.example.dev\n0.0.0.0 gambling.net\n".to_string(),
            ),
        ]),
    };
    let config = FetchConfig {
        timeout_secs: 5,
        attempts: 1,
        min_bytes: 8,
        cache_ttl_secs: 3600,
    };

    let clock = Arc::new(ManualClock::new(1_000_000));
    let engine = Arc::new(FilterEngine::new(clock.clone()));
    let engine_port: Arc<dyn FilterEnginePort> = engine.clone();
    let store_port: Arc<dyn SettingsStore> = store.clone();
    let updater: Arc<dyn BlocklistUpdatePort> = Arc::new(BlocklistOrchestrator::new(
        BlocklistFetcher::new(transport, &config, clock.clone()),
        store_port.clone(),
        engine_port.clone(),
        2,
    ));

    let router = MessageRouter::new(
        AddCustomDomainUseCase::new(store_port.clone(), engine_port.clone()),
        RemoveCustomDomainUseCase::new(store_port.clone(), engine_port.clone()),
        SetActiveUseCase::new(store_port.clone(), engine_port.clone()),
        FetchBlocklistUseCase::new(updater.clone()),
        UpdateBlocklistsUseCase::new(updater),
        GetBlockedPageUrlUseCase::new("blocked.html".to_string()),
    );

    Stack {
        store,
        engine,
        clock,
        router,
    }
}

fn request(json: &str) -> Request {
    serde_json::from_str(json).unwrap()
}

#[tokio::test]
async fn hosts_file_parsing_keeps_exactly_the_valid_targets() {
    let stack = stack();

    let response = stack
        .router
        .handle(request(
            r#"{"action":"fetchBlocklist","url":"https://lists.example.dev/porn"}"#,
        ))
        .await;

    match response {
        Response::Fetched {
            success, domains, ..
        } => {
            assert!(success);
            assert_eq!(domains, vec!["adult-site.com", "gambling.net"]);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[tokio::test]
async fn custom_domain_blocks_its_subdomains() {
    let stack = stack();

    let response = stack
        .router
        .handle(request(
            r#"{"action":"addCustomDomain","domain":"example.com"}"#,
        ))
        .await;
    assert!(matches!(response, Response::Ack { success: true, .. }));

    assert!(stack.engine.evaluate(1, "https://example.com/").is_blocked());
    assert!(stack
        .engine
        .evaluate(1, "https://shop.example.com/deals")
        .is_blocked());
    assert!(!stack.engine.evaluate(1, "https://example.org/").is_blocked());

    // Persisted, so a fresh engine rebuild sees it too.
    let settings = stack.store.load().await.unwrap();
    assert!(settings.custom_domains.contains(&"example.com".to_string()));
}

#[tokio::test]
async fn kill_switch_disables_and_reenables_via_the_router() {
    let stack = stack();
    stack
        .router
        .handle(request(
            r#"{"action":"addCustomDomain","domain":"timesink.io"}"#,
        ))
        .await;

    stack
        .router
        .handle(request(r#"{"action":"setActive","active":false}"#))
        .await;
    assert!(!stack.engine.evaluate(1, "https://timesink.io/").is_blocked());

    stack.clock.advance(10_000);
    stack
        .router
        .handle(request(r#"{"action":"setActive","active":true}"#))
        .await;
    assert!(stack.engine.evaluate(1, "https://timesink.io/").is_blocked());

    let settings = stack.store.load().await.unwrap();
    assert!(settings.is_active);
}

#[tokio::test]
async fn update_reports_partial_success_when_one_source_fails() {
    let stack = stack();

    let response = stack
        .router
        .handle(request(r#"{"action":"updateBlocklists"}"#))
        .await;

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["successfulSources"], 2);
    assert_eq!(json["totalSources"], 3);
    assert_eq!(json["totalDomains"], 3);

    // The merged set is live in the engine.
    assert!(stack.engine.evaluate(1, "https://adult-site.com/").is_blocked());
    assert!(stack
        .engine
        .evaluate(1, "https://betting.example.dev/")
        .is_blocked());
}

#[tokio::test]
async fn router_resolves_every_request_even_on_invalid_input() {
    let stack = stack();

    let response = stack
        .router
        .handle(request(
            r#"{"action":"addCustomDomain","domain":"not a domain"}"#,
        ))
        .await;
    match response {
        Response::Ack { success, error } => {
            assert!(!success);
            assert!(error.unwrap().contains("spaces"));
        }
        other => panic!("unexpected response: {other:?}"),
    }

    let response = stack.router.handle(request(r#"{"action":"getCurrentTab"}"#)).await;
    assert!(matches!(response, Response::CurrentTab { url: None }));

    stack.router.note_navigation("https://adult-site.com/").await;
    let response = stack.router.handle(request(r#"{"action":"getCurrentTab"}"#)).await;
    match response {
        Response::CurrentTab { url } => assert_eq!(url.as_deref(), Some("https://adult-site.com/")),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[tokio::test]
async fn blocked_page_url_is_built_from_the_verdict() {
    let stack = stack();

    let response = stack
        .router
        .handle(request(
            r#"{"action":"getBlockedPageUrl","reason":"search","url":"https://www.google.com/search?q=x","keyword":"porn","query":"free porn"}"#,
        ))
        .await;

    match response {
        Response::BlockedUrl { blocked_url } => {
            assert!(blocked_url.starts_with("blocked.html?reason=search"));
            assert!(blocked_url.contains("keyword=porn"));
            assert!(blocked_url.contains("query=free+porn"));
        }
        other => panic!("unexpected response: {other:?}"),
    }
}
