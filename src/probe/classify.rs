// src/probe/classify.rs
// =============================================================================
// This module decides what kind of page a response body actually is.
//
// The problem: we cannot know what a "real" application looks like, so we
// do the opposite - we positively identify the known hosting-platform
// placeholder pages (error pages, maintenance pages, the "Welcome to your
// new app" page) and treat everything that is NOT one of those as a sign
// of genuine content.
//
// The checks run in a fixed order, first match wins:
// 1. Platform soft-failure markers (several variants, including the
//    locale-specific support phone numbers on branded outage pages)
// 2. The generic application-error page marker
// 3. The welcome/new-app page marker
// 4. A generic HTML page (<html and <body tags, any case)
// 5. Fallback: a short preview of whatever the body is
//
// The order is load-bearing. A platform error page is itself valid HTML,
// so every marker check must run BEFORE the HTML check or placeholder
// pages would be misreported as live applications.
//
// Everything here is pure: bytes in, verdict out. No I/O, no state.
//
// Rust concepts:
// - Enums with data: A closed set of verdicts, some carrying details
// - match: Exhaustive handling of every verdict
// - Cow<str>: What String::from_utf8_lossy returns (borrowed or owned)
// =============================================================================

// Markers for platform soft-failure pages. Each entry is
// (marker substring, human label for the report).
//
// These are matched literally, in order. The phone numbers are the
// locale-specific support lines printed on the platform's branded outage
// pages - if one shows up in a body, we are looking at the platform
// talking, not the application.
const SOFT_FAILURE_MARKERS: &[(&str, &str)] = &[
    (
        "herokucdn.com/error-pages/no-such-app.html",
        "platform no-such-app page",
    ),
    (
        "herokucdn.com/error-pages/maintenance-mode.html",
        "platform maintenance page",
    ),
    ("1-800-667-6389", "platform outage page (US support line)"),
    ("0800-082-2269", "platform outage page (UK support line)"),
];

// The generic Heroku application-error page always references this URL
const APPLICATION_ERROR_MARKER: &str = "www.herokucdn.com/error-pages/application-error.html";

// The page Heroku serves for a freshly created app with nothing deployed
const WELCOME_MARKER: &str = "Welcome to your new app";

// How many bytes of an unrecognized body we quote in the report
const PREVIEW_LEN: usize = 50;

// The verdict for one response body
//
// Every body maps to exactly one of these - classification never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// A platform soft-failure page (no-such-app, maintenance, outage)
    SoftFailure {
        marker: &'static str,
        label: &'static str,
    },
    /// The platform's generic application-error page
    ApplicationError,
    /// The platform's welcome/new-app placeholder page
    WelcomePage,
    /// A generic HTML page that is none of the above
    HtmlPage,
    /// Not HTML and not a known platform page; holds a body preview
    Preview(String),
}

impl Verdict {
    /// Whether this verdict counts as a reachable application
    ///
    /// Only the platform placeholder pages are unreachable - any other
    /// content (HTML or not) is treated as the application answering.
    pub fn accessible(&self) -> bool {
        match self {
            Verdict::SoftFailure { .. } | Verdict::ApplicationError | Verdict::WelcomePage => false,
            Verdict::HtmlPage | Verdict::Preview(_) => true,
        }
    }

    /// The free-text notes column for the report
    pub fn notes(&self) -> String {
        match self {
            Verdict::SoftFailure { marker, label } => {
                format!("{} (matched \"{}\")", label, marker)
            }
            Verdict::ApplicationError => "Heroku application error page".to_string(),
            Verdict::WelcomePage => "Heroku welcome page".to_string(),
            Verdict::HtmlPage => "HTML page".to_string(),
            Verdict::Preview(preview) => preview.clone(),
        }
    }
}

// Classifies a response body
//
// Parameters:
//   body: the raw response bytes (may be empty, may not be valid UTF-8)
//
// Returns: the first matching Verdict in precedence order
pub fn classify(body: &[u8]) -> Verdict {
    // Render the body as text once; invalid UTF-8 becomes replacement
    // characters, which is fine because all our markers are plain ASCII
    let text = String::from_utf8_lossy(body);

    // 1. Platform soft-failure pages, most specific first
    for &(marker, label) in SOFT_FAILURE_MARKERS {
        if text.contains(marker) {
            return Verdict::SoftFailure { marker, label };
        }
    }

    // 2. The generic application-error page
    if text.contains(APPLICATION_ERROR_MARKER) {
        return Verdict::ApplicationError;
    }

    // 3. The welcome/new-app page
    if text.contains(WELCOME_MARKER) {
        return Verdict::WelcomePage;
    }

    // 4. A generic web page: needs both an <html and a <body tag
    if is_html(&text) {
        return Verdict::HtmlPage;
    }

    // 5. Found something else - quote the start of it
    Verdict::Preview(preview_notes(body))
}

// Indicates if the body looks like a web page
//
// Accepts any casing of the tags (<html>, <HTML>, <Html>, ...), and
// matches tag prefixes so attributes don't get in the way
// (e.g. <html lang="en">).
fn is_html(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.contains("<html") && lower.contains("<body")
}

// Builds the fallback preview notes
//
// Quotes the first min(50, len) bytes of the body, rendered lossily as
// text, with a trailing ellipsis:
//   "found this (first 50 bytes): <!DOCTYPE json garbage...."
fn preview_notes(body: &[u8]) -> String {
    let len = body.len().min(PREVIEW_LEN);
    let preview = String::from_utf8_lossy(&body[..len]);
    format!("found this (first {} bytes): {}...", len, preview)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_page_is_accessible() {
        let body = b"<html><head></head><body>my real app</body></html>";
        let verdict = classify(body);
        assert_eq!(verdict, Verdict::HtmlPage);
        assert!(verdict.accessible());
        assert_eq!(verdict.notes(), "HTML page");
    }

    #[test]
    fn test_uppercase_html_tags() {
        let body = b"<HTML><BODY>shouting</BODY></HTML>";
        assert_eq!(classify(body), Verdict::HtmlPage);
    }

    #[test]
    fn test_html_tag_with_attributes() {
        let body = b"<html lang=\"en\"><body class=\"x\">hi</body></html>";
        assert_eq!(classify(body), Verdict::HtmlPage);
    }

    #[test]
    fn test_html_without_body_falls_through_to_preview() {
        let body = b"<html>no body tag here</html>";
        let verdict = classify(body);
        assert!(matches!(verdict, Verdict::Preview(_)));
        assert!(verdict.accessible());
    }

    #[test]
    fn test_welcome_page_beats_html_check() {
        // The welcome page IS valid HTML; the marker check must win
        let body = b"<html><body>Welcome to your new app</body></html>";
        let verdict = classify(body);
        assert_eq!(verdict, Verdict::WelcomePage);
        assert!(!verdict.accessible());
    }

    #[test]
    fn test_application_error_page() {
        let body =
            b"<html><body><iframe src=\"//www.herokucdn.com/error-pages/application-error.html\"></iframe></body></html>";
        let verdict = classify(body);
        assert_eq!(verdict, Verdict::ApplicationError);
        assert!(!verdict.accessible());
    }

    #[test]
    fn test_no_such_app_page_names_the_marker() {
        let body = b"<html><body><iframe src=\"//herokucdn.com/error-pages/no-such-app.html\"></iframe></body></html>";
        let verdict = classify(body);
        assert!(!verdict.accessible());
        assert!(verdict.notes().contains("no-such-app"));
        assert!(verdict
            .notes()
            .contains("herokucdn.com/error-pages/no-such-app.html"));
    }

    #[test]
    fn test_support_phone_number_marker() {
        let body = b"<html><body>We are on it. Call 1-800-667-6389 for help.</body></html>";
        let verdict = classify(body);
        assert!(!verdict.accessible());
        assert!(verdict.notes().contains("1-800-667-6389"));
    }

    #[test]
    fn test_soft_failure_beats_application_error() {
        // Both markers present: the soft-failure table is checked first
        let body = b"herokucdn.com/error-pages/no-such-app.html and www.herokucdn.com/error-pages/application-error.html";
        assert!(matches!(classify(body), Verdict::SoftFailure { .. }));
    }

    #[test]
    fn test_short_body_previews_every_byte() {
        let body = b"0123456789"; // 10 bytes, no markers, not HTML
        let verdict = classify(body);
        assert_eq!(
            verdict.notes(),
            "found this (first 10 bytes): 0123456789..."
        );
        assert!(verdict.accessible());
    }

    #[test]
    fn test_long_body_previews_exactly_fifty_bytes() {
        let body = vec![b'x'; 1000];
        let verdict = classify(&body);
        let expected = format!("found this (first 50 bytes): {}...", "x".repeat(50));
        assert_eq!(verdict.notes(), expected);
    }

    #[test]
    fn test_empty_body_previews_zero_bytes() {
        let verdict = classify(b"");
        assert_eq!(verdict.notes(), "found this (first 0 bytes): ...");
        assert!(verdict.accessible());
    }

    #[test]
    fn test_non_utf8_body_does_not_panic() {
        let body = vec![0xff, 0xfe, 0x01, 0x02];
        let verdict = classify(&body);
        assert!(matches!(verdict, Verdict::Preview(_)));
    }
}
