// ABOUTME: Static heuristic phrase and keyword sets used by the classifiers.
// ABOUTME: Exact-match title sets as const slices, substring sets as Aho-Corasick matchers.

//! Heuristic phrase data.
//!
//! These sets are the configuration of the extraction heuristics. Exact-match
//! sets (titles compared with `==` after lowercasing) are plain const slices;
//! substring sets are compiled once into Aho-Corasick automata so a single
//! scan answers "does this text contain any listed phrase".
//!
//! All entries are lowercase; callers lowercase their input before matching.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

/// Phrases that mark a title or summary as navigation chrome, promos, or
/// other non-news boilerplate. Matched as substrings.
pub const NOISE_KEYWORDS: &[&str] = &[
    "subscribe",
    "newsletter",
    "download",
    "app",
    "cookie",
    "privacy policy",
    "terms of service",
    "copyright",
    "all rights reserved",
    "most watched",
    "trending now",
    "latest news",
    "also in news",
    "more to explore",
    "read more",
    "click here",
    "advertise",
    "contact us",
    "about us",
    "follow us",
    "social media",
    "login",
    "sign up",
    "register",
    "wait for it",
    "congratulations",
    "you are now subscribed",
    "stock recommendations",
    "buy/sell signals",
    "market calendar",
    "find your first",
    "board meeting",
    "quarterly results",
];

/// Titles that are exactly a navigation or widget label. Matched whole.
pub const NAVIGATION_TITLES: &[&str] = &[
    "stock recommendations",
    "buy/sell signals",
    "market calendar",
    "bse announcement",
    "find your first",
    "latest news",
    "trending",
    "most watched",
    "also in news",
    "more to explore",
    "newsnews",
    "currency converter",
    "calendar spread",
    "digital real estate",
    "india inc's scorecard",
    "cryptocurrencybitcoin",
    "currenciesforex",
    "commoditybullion",
    "ipostartups",
];

/// Single-word or near-empty titles that carry no headline content.
pub const TRIVIAL_TITLES: &[&str] = &["news", "newsnews", "latest", "more", "read", "watch"];

/// Titles that are section headers rather than headlines. Matched whole.
pub const SECTION_HEADER_TITLES: &[&str] = &[
    "india news",
    "economy news",
    "politics news",
    "sports news",
    "science news",
    "defence news",
    "international news",
    "company news",
    "market calendar",
    "stock recommendations",
];

/// Summaries that are generic site furniture rather than article text.
/// Matched as substrings.
pub const GENERIC_SUMMARIES: &[&str] = &[
    "trending in markets",
    "quick links",
    "discover bonds that meet",
    "board meeting",
    "quarterly results",
    "download the mint app",
    "read premium stories",
    "got a confidential news tip",
    "subscribe",
    "download the app",
    "read premium",
    "sign up",
    "log in",
];

/// Filler words that, inside a very short summary, mark it as a widget label.
pub const SHORT_SUMMARY_FILLERS: &[&str] = &["trending", "links", "discover", "find"];

/// Phrases that reveal a title to be a market-section header.
pub const SECTION_INDICATORS: &[&str] = &[
    "bitcoin, blockchain",
    "forex & futures",
    "startups, grey market",
    "bullion, base metals",
    "all else",
    "scorecard",
];

/// Phrases that disqualify a paragraph from section content.
pub const BOILERPLATE_PHRASES: &[&str] = &[
    "cookie",
    "privacy",
    "terms",
    "copyright",
    "menu",
    "navigation",
];

/// Substrings of a link destination that mark it as navigation, scripting,
/// auth flows, or social-network chrome.
pub const LINK_SKIP_PATTERNS: &[&str] = &[
    "#",
    "javascript:",
    "mailto:",
    "tel:",
    "/login",
    "/register",
    "/signup",
    "/logout",
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "instagram.com",
    "youtube.com",
];

/// Anchor texts that are bare symbols or arrow glyphs.
pub const BARE_LINK_GLYPHS: &[&str] = &["#", "...", "»", "«", "←", "→"];

pub static NOISE_MATCHER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(NOISE_KEYWORDS).unwrap());
pub static GENERIC_SUMMARY_MATCHER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(GENERIC_SUMMARIES).unwrap());
pub static SHORT_FILLER_MATCHER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(SHORT_SUMMARY_FILLERS).unwrap());
pub static SECTION_INDICATOR_MATCHER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(SECTION_INDICATORS).unwrap());
pub static BOILERPLATE_MATCHER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(BOILERPLATE_PHRASES).unwrap());
pub static LINK_SKIP_MATCHER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(LINK_SKIP_PATTERNS).unwrap());
