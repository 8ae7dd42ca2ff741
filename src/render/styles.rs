//! Inline CSS for the landing page.
//!
//! The page ships as a single HTML document, so the stylesheet is inlined
//! into `<head>`. Palette: dark brown `#361e01`, gold `#ab8302`, cream
//! `#fcfaed`.

/// Complete stylesheet for the landing page.
pub const SITE_CSS: &str = r#"
:root {
    --brown: #361e01;
    --gold: #ab8302;
    --cream: #fcfaed;
    --muted: #f1ede4;
    --muted-text: #6b6257;
    --radius: 0.75rem;
    --font-body: 'Cairo', 'Playpen Sans Arabic', system-ui, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-body);
    color: var(--brown);
    background: #ffffff;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    max-width: 100%;
    display: block;
}

.shell {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

.shell > main {
    flex: 1;
}

.container {
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1rem;
}

/* Navbar */
.navbar {
    position: fixed;
    inset: 0 0 auto 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--muted);
}

.navbar .container {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4.5rem;
}

.navbar-brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 700;
}

.navbar-brand img {
    width: 2.5rem;
    height: 2.5rem;
}

.navbar-links {
    display: flex;
    align-items: center;
    gap: 1.25rem;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.65rem 1.5rem;
    border-radius: 0.5rem;
    font-weight: 600;
    border: 1px solid var(--brown);
    transition: opacity 0.2s ease;
}

.btn:hover {
    opacity: 0.9;
}

.btn-primary {
    background: var(--brown);
    color: #ffffff;
}

.btn-outline {
    background: transparent;
    color: var(--brown);
}

.btn-block {
    width: 100%;
}

.btn-lg {
    padding: 0.85rem 2rem;
    font-size: 1.1rem;
}

/* Sections */
section {
    padding: 5rem 0;
}

.section-heading {
    text-align: center;
    margin-bottom: 3rem;
}

.section-heading h2 {
    font-size: 2.25rem;
    margin: 0 0 1rem;
}

.section-heading p,
.muted {
    color: var(--muted-text);
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    overflow: hidden;
    padding-top: 6rem;
}

.hero-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}

.hero-media {
    position: relative;
    display: flex;
    justify-content: center;
    align-items: flex-end;
    gap: 1.5rem;
}

.hero-background {
    position: absolute;
    inset: -10%;
    z-index: -1;
    opacity: 0.6;
}

.teacher {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.75rem;
    font-weight: 700;
}

.teacher img {
    border-radius: 9999px;
    border: 4px solid var(--brown);
    object-fit: cover;
    width: 9rem;
    height: 9rem;
}

.teacher.featured img {
    width: 12rem;
    height: 12rem;
}

.slogans {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    margin-top: 2rem;
}

.slogan {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    background: var(--cream);
    border: 1px solid var(--brown);
    border-radius: var(--radius);
    padding: 0.5rem 1rem;
    font-weight: 700;
}

.slogan img {
    width: 2rem;
    height: 2rem;
}

.hero-copy {
    text-align: center;
}

.hero-logo {
    width: 10rem;
    margin: 0 auto 1rem;
}

.hashtag {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--gold);
}

.bubbles {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    margin: 1.5rem 0;
}

.bubble {
    background: var(--cream);
    border: 1px solid var(--brown);
    border-radius: 1.5rem;
    padding: 0.75rem 1.25rem;
    font-weight: 600;
}

.chips {
    display: flex;
    justify-content: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.chip {
    display: inline-flex;
    align-items: center;
    gap: 0.35rem;
    font-weight: 700;
}

.accent {
    color: var(--gold);
}

.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
    flex-direction: column;
    align-items: center;
    color: var(--muted-text);
    transition: opacity 0.3s ease;
}

.scroll-indicator.is-hidden {
    opacity: 0;
    pointer-events: none;
}

.scroll-indicator svg {
    animation: nudge 1.5s ease-in-out infinite;
}

.scroll-indicator svg:nth-child(2) { animation-delay: 0.2s; }
.scroll-indicator svg:nth-child(3) { animation-delay: 0.4s; }

@keyframes nudge {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(10px); }
}

/* Social */
.social-card,
.support-card,
.testimonial,
.feature {
    background: var(--cream);
    border: 1px solid var(--brown);
    border-radius: var(--radius);
    padding: 1.5rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.social-card {
    max-width: 24rem;
    margin: 0 auto;
}

.social-head {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}

.social-badge {
    width: 4rem;
    height: 4rem;
    border-radius: 9999px;
    background: #2563eb;
    color: #ffffff;
    display: flex;
    align-items: center;
    justify-content: center;
}

.social-follow {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.round-link {
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    background: var(--brown);
    color: #ffffff;
    display: flex;
    align-items: center;
    justify-content: center;
}

.support-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1.5rem;
    max-width: 56rem;
    margin: 5rem auto 0;
}

.support-card {
    position: relative;
    padding-top: 2.5rem;
}

.support-icon {
    position: absolute;
    top: -1.5rem;
    right: 1.5rem;
    width: 4rem;
    height: 4rem;
    border-radius: 9999px;
    border: 2px solid var(--brown);
    background: var(--cream);
    display: flex;
    align-items: center;
    justify-content: center;
}

/* Courses */
#courses-section {
    scroll-margin-top: 80px;
}

.courses-grid {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
}

.course-card,
.course-card-skeleton {
    width: 20rem;
    background: #ffffff;
    border: 1px solid var(--brown);
    border-radius: var(--radius);
    overflow: hidden;
}

.course-card-media {
    aspect-ratio: 16 / 9;
    background: var(--muted);
}

.course-card-media img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.course-card-body {
    padding: 1rem;
}

.course-card-title {
    font-size: 1.125rem;
    margin: 0 0 0.5rem;
}

.course-card-meta {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: var(--muted-text);
    margin-bottom: 1rem;
}

.meta-item {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.quiz-count {
    margin-right: 0.5rem;
}

.course-card-skeleton {
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.skeleton-media {
    aspect-ratio: 16 / 9;
    background: var(--muted);
}

.skeleton-line {
    height: 1rem;
    border-radius: 0.25rem;
    background: var(--muted);
    margin: 1rem;
}

.skeleton-line.short {
    width: 50%;
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

.empty-state {
    text-align: center;
    max-width: 28rem;
    padding: 3rem 0;
}

.empty-icon {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1rem;
    border-radius: 9999px;
    background: var(--muted);
    display: flex;
    align-items: center;
    justify-content: center;
}

/* Testimonials and features */
.card-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.testimonial-head {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}

.testimonial-head img {
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    object-fit: cover;
}

.stars {
    display: flex;
    color: #facc15;
    margin-top: 1rem;
}

.feature {
    text-align: center;
}

.feature-icon {
    color: var(--gold);
    margin-bottom: 1rem;
}

.cta {
    text-align: center;
}

/* Footer */
.footer {
    border-top: 1px solid var(--muted);
    padding: 2rem 0;
    text-align: center;
    color: var(--muted-text);
}

.footer-links {
    display: flex;
    justify-content: center;
    gap: 1.5rem;
    margin-bottom: 1rem;
}

@media (max-width: 768px) {
    .hero-grid,
    .support-grid,
    .card-grid {
        grid-template-columns: 1fr;
    }

    .hero-copy {
        order: -1;
    }

    .scroll-indicator {
        display: none;
    }

    .course-card,
    .course-card-skeleton {
        width: 100%;
    }
}
"#;
