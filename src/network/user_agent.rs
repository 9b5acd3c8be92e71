//! User agent generation

use rand::seq::SliceRandom;

const CHROME_VERSIONS: [&str; 4] = ["122.0.0.0", "123.0.0.0", "124.0.0.0", "125.0.0.0"];
const FIREFOX_VERSIONS: [&str; 3] = ["123.0", "124.0", "125.0"];

const OS_STRINGS: [&str; 4] = [
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
    "X11; Ubuntu; Linux x86_64",
];

/// Generate a random but realistic browser user agent string
pub fn generate_user_agent() -> String {
    let mut rng = rand::thread_rng();
    let os = OS_STRINGS.choose(&mut rng).unwrap();

    if rand::random::<bool>() {
        let chrome = CHROME_VERSIONS.choose(&mut rng).unwrap();
        format!(
            "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
            os, chrome
        )
    } else {
        let firefox = FIREFOX_VERSIONS.choose(&mut rng).unwrap();
        format!(
            "Mozilla/5.0 ({}; rv:{}) Gecko/20100101 Firefox/{}",
            os, firefox, firefox
        )
    }
}

/// Standard accept header for HTML requests
pub fn accept_html() -> &'static str {
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"
}

/// Standard accept-language header
pub fn accept_language() -> &'static str {
    "en-US,en;q=0.9"
}
