//! Layout shell: the `<html>` document, head metadata, navbar and footer.
//!
//! Everything here depends only on [`SiteConfig`]; page content arrives
//! through `children`.

use leptos::prelude::*;

use super::icons::{ICON_FACEBOOK, Icon};
use super::styles::SITE_CSS;
use crate::config::SiteConfig;

const LOGO_PATH: &str = "/logo.png";

const FONTS_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Cairo:wght@400;600;700&family=Geist:wght@400;600&family=Geist+Mono&display=swap";

/// Locally hosted variable font used for display headings.
const PLAYPEN_FONT_FACE: &str = r#"
@font-face {
    font-family: 'Playpen Sans Arabic';
    src: url('/fonts/PlaypenSansArabic-VariableFont_wght.ttf') format('truetype');
    font-display: swap;
}
"#;

#[component]
pub fn SiteLayout(site: SiteConfig, children: Children) -> impl IntoView {
    let sign_up_path = site.sign_up_path.clone();
    let social_url = site.social_url.clone();

    view! {
        <html lang="ar" dir="rtl">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{site.title}</title>
                <meta name="description" content=site.description />
                <link rel="icon" type="image/png" href=LOGO_PATH />
                <link rel="shortcut icon" href=LOGO_PATH />
                <link rel="apple-touch-icon" href=LOGO_PATH />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" href=FONTS_STYLESHEET />
                <style>{PLAYPEN_FONT_FACE}</style>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div class="shell">
                    <Navbar sign_up_path=sign_up_path />
                    <main>{children()}</main>
                    <Footer social_url=social_url />
                </div>
            </body>
        </html>
    }
}

#[component]
fn Navbar(sign_up_path: String) -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="container">
                <a class="navbar-brand" href="/">
                    <img src=LOGO_PATH alt="E Score" />
                    <span>"E Score"</span>
                </a>
                <nav class="navbar-links">
                    <a href="#courses-section">"الكورسات"</a>
                    <a class="btn btn-primary" href=sign_up_path>"سجل الآن"</a>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn Footer(social_url: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-links">
                    <a href="/">"الرئيسية"</a>
                    <a href="#courses-section">"الكورسات"</a>
                    <a href=social_url target="_blank" rel="noopener noreferrer" aria-label="فيسبوك">
                        <Icon path=ICON_FACEBOOK size="18" />
                    </a>
                </div>
                <p>"© E Score. جميع الحقوق محفوظة"</p>
            </div>
        </footer>
    }
}
