//! CSS for the landing page.
//!
//! Plain, text-first layout: one narrow centered column, hairline separators
//! between sections, light palette by default and a dark palette under
//! `prefers-color-scheme: dark`.
//!
//! # Customization
//!
//! ```rust
//! use nla_site::styles::SITE_CSS;
//!
//! let my_css = ".section-title { letter-spacing: 0.02em; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.contains("--container-max"));
//! ```

/// Complete stylesheet, inlined into the document head.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --text-strong: #111827;
    --text-body: #4b5563;
    --text-muted: #6b7280;
    --border: #e5e7eb;
    --panel: #f3f4f6;
    --panel-border: #d1d5db;
    --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 48rem;
}

@media (prefers-color-scheme: dark) {
    :root {
        --bg: #000000;
        --text-strong: #ffffff;
        --text-body: #9ca3af;
        --text-muted: #6b7280;
        --border: #1f2937;
        --panel: #111827;
        --panel-border: #1f2937;
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text-body);
    font-family: var(--font-sans);
    line-height: 1.5;
}

.page {
    min-height: 100vh;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem;
}

/* Navbar */
.navbar {
    border-bottom: 1px solid var(--border);
}

.navbar-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 3.5rem;
}

.navbar-title {
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--text-strong);
}

.navbar-link {
    font-size: 0.75rem;
    color: var(--text-body);
    text-decoration: none;
}

.navbar-link:hover {
    color: var(--text-strong);
}

/* Sections */
.content-section {
    padding: 3rem 0;
    border-top: 1px solid var(--border);
}

.content-section.hero {
    border-top: none;
    text-align: center;
}

.hero-title {
    margin: 0 0 0.75rem;
    font-size: 2.25rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    color: var(--text-strong);
}

.hero-subtitle {
    margin: 0 0 0.5rem;
    font-size: 1.125rem;
}

.hero-description {
    margin: 0;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.section-title {
    margin: 0 0 1.5rem;
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--text-strong);
}

.block + .block {
    margin-top: 2rem;
}

.block-title {
    margin: 0 0 0.75rem;
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--text-strong);
}

.prose {
    margin: 0;
    font-size: 0.875rem;
    line-height: 1.625;
}

.labelled-list {
    margin: 0;
    padding: 0;
    list-style: none;
    font-size: 0.875rem;
}

.labelled-list li {
    margin-bottom: 0.5rem;
    line-height: 1.625;
}

.item-label {
    margin-right: 0.25rem;
    font-weight: 500;
    color: var(--text-strong);
}

.bullet-grid {
    display: grid;
    gap: 0.5rem 2rem;
    margin: 0;
    padding: 0;
    list-style: none;
    font-size: 0.875rem;
}

@media (min-width: 768px) {
    .hero-title {
        font-size: 3rem;
    }

    .bullet-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

/* Demo */
.demo-frame {
    aspect-ratio: 16 / 9;
    margin-bottom: 2rem;
    background: var(--panel);
    border: 1px solid var(--panel-border);
    border-radius: 0.25rem;
}

.demo-frame iframe {
    width: 100%;
    height: 100%;
    border: 0;
    border-radius: 0.25rem;
}

.usage-example {
    margin: 0;
    padding: 1rem;
    overflow-x: auto;
    background: var(--panel);
    border: 1px solid var(--panel-border);
    border-radius: 0.25rem;
    font-family: var(--font-mono);
    font-size: 0.75rem;
    line-height: 1.625;
    white-space: pre;
}

/* Footer */
.site-footer {
    padding: 2rem 0;
    border-top: 1px solid var(--border);
}

.copyright {
    margin: 0;
    text-align: center;
    font-size: 0.75rem;
    color: var(--text-muted);
}
"#;

/// Content-Security-Policy for the rendered page.
///
/// The page ships no scripts. Frames are only allowed when the demo video is
/// embedded.
pub fn content_security_policy(allow_video: bool) -> String {
    let mut policy = String::from(
        "default-src 'none'; style-src 'unsafe-inline'; img-src 'self' data:; base-uri 'none'; form-action 'none'",
    );
    if allow_video {
        policy.push_str("; frame-src ");
        policy.push_str(crate::content::DEMO_VIDEO_ORIGIN);
    }
    policy
}
