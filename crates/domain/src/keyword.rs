/// Minimum accepted keyword length after trimming.
pub const MIN_KEYWORD_LEN: usize = 2;

/// Default keyword vocabulary shipped with a fresh install.
///
/// Covers the adult-content terms the community lists target; users
/// extend the set through the settings surface.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "porn", "porno", "pornography", "xxx", "sex", "sexy", "nude", "nudes",
    "naked", "nsfw", "hentai", "erotic", "erotica", "xvideos", "xnxx",
    "xhamster", "redtube", "youporn", "pornhub", "onlyfans", "camgirl",
    "camgirls", "webcam sex", "livecam", "stripchat", "chaturbate", "escort",
    "escorts", "hookup", "milf", "fetish", "bdsm", "blowjob", "handjob",
    "threesome", "orgy", "anal", "creampie", "cumshot", "deepthroat",
    "dildo", "vibrator", "stripper", "striptease", "lingerie sex",
    "adult video", "adult movie", "adult chat", "adult dating", "sexcam",
    "sexchat", "sextape", "smut", "voyeur", "upskirt", "lewd", "rule34",
    "ecchi", "futanari", "doujin",
];

/// Normalizes a keyword to its stored form: lowercase, trimmed,
/// minimum length enforced.
pub fn normalize_keyword(input: &str) -> Result<String, String> {
    let keyword = input.trim().to_lowercase();
    if keyword.len() < MIN_KEYWORD_LEN {
        return Err(format!(
            "keyword must be at least {MIN_KEYWORD_LEN} characters"
        ));
    }
    Ok(keyword)
}

/// The default keyword set as owned strings, for seeding fresh settings.
pub fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}
