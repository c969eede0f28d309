use url::Url;

/// Known search engines and where they carry the query.
///
/// A trailing dot in the host pattern matches any TLD of that brand
/// (`google.` covers google.com and google.co.uk); otherwise the
/// pattern matches the host or any subdomain of it.
struct SearchEngine {
    host: &'static str,
    param: &'static str,
    path_hint: &'static str,
}

const ENGINES: &[SearchEngine] = &[
    SearchEngine { host: "google.", param: "q", path_hint: "/search" },
    SearchEngine { host: "bing.com", param: "q", path_hint: "/search" },
    SearchEngine { host: "duckduckgo.com", param: "q", path_hint: "/" },
    SearchEngine { host: "search.yahoo.com", param: "p", path_hint: "/search" },
    SearchEngine { host: "yandex.", param: "text", path_hint: "/search" },
    SearchEngine { host: "ecosia.org", param: "q", path_hint: "/search" },
    SearchEngine { host: "search.brave.com", param: "q", path_hint: "/search" },
    SearchEngine { host: "startpage.com", param: "query", path_hint: "/sp" },
    SearchEngine { host: "baidu.com", param: "wd", path_hint: "/s" },
];

fn matches_host(host: &str, pattern: &str) -> bool {
    if let Some(brand) = pattern.strip_suffix('.') {
        let brand_dot = format!("{brand}.");
        host.starts_with(&brand_dot) || host.contains(&format!(".{brand_dot}"))
    } else {
        host == pattern || host.ends_with(&format!(".{pattern}"))
    }
}

/// Extracts the search query when the URL is a search on a known
/// engine: the path must look like a search or the engine's query
/// parameter must be present and non-empty.
pub fn extract_search_query(url: &Url) -> Option<String> {
    let host = url.host_str()?.trim_start_matches("www.");
    let engine = ENGINES.iter().find(|e| matches_host(host, e.host))?;

    let query = url
        .query_pairs()
        .find(|(name, _)| name == engine.param)
        .map(|(_, value)| value.into_owned())?;

    if query.trim().is_empty() {
        return None;
    }
    if !url.path().starts_with(engine.path_hint) && url.path() != "/" {
        return None;
    }
    Some(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_of(url: &str) -> Option<String> {
        extract_search_query(&Url::parse(url).unwrap())
    }

    #[test]
    fn google_search_across_tlds() {
        assert_eq!(
            query_of("https://www.google.com/search?q=free+stuff"),
            Some("free stuff".to_string())
        );
        assert_eq!(
            query_of("https://google.co.uk/search?q=hello"),
            Some("hello".to_string())
        );
    }

    #[test]
    fn yahoo_uses_p_parameter() {
        assert_eq!(
            query_of("https://search.yahoo.com/search?p=weather"),
            Some("weather".to_string())
        );
    }

    #[test]
    fn duckduckgo_query_on_root_path() {
        assert_eq!(
            query_of("https://duckduckgo.com/?q=rust+lang"),
            Some("rust lang".to_string())
        );
    }

    #[test]
    fn non_search_engine_yields_none() {
        assert_eq!(query_of("https://shop.example.dev/search?q=shoes"), None);
    }

    #[test]
    fn engine_without_query_param_yields_none() {
        assert_eq!(query_of("https://www.google.com/maps"), None);
        assert_eq!(query_of("https://www.google.com/search?q="), None);
    }
}
