use focusgate_domain::BlockHit;
use url::form_urlencoded;

/// Builds the blocked-page redirect URL:
/// `<blocked-page>?reason=...&domain=...&url=...&keyword=...&query=...`
/// with parameters present only when the verdict carries them.
pub struct GetBlockedPageUrlUseCase {
    blocked_page: String,
}

impl GetBlockedPageUrlUseCase {
    pub fn new(blocked_page: String) -> Self {
        Self { blocked_page }
    }

    pub fn execute(&self, hit: &BlockHit) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());
        params.append_pair("reason", hit.reason.as_str());
        if let Some(domain) = &hit.domain {
            params.append_pair("domain", domain);
        }
        params.append_pair("url", &hit.url);
        if let Some(keyword) = &hit.keyword {
            params.append_pair("keyword", keyword);
        }
        if let Some(query) = &hit.query {
            params.append_pair("query", query);
        }
        format!("{}?{}", self.blocked_page, params.finish())
    }
}
