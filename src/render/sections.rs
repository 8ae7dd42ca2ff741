//! Static page sections around the course grid.

use leptos::prelude::*;

use super::icons::{
    ICON_ARROW_LEFT, ICON_ARROW_RIGHT, ICON_AWARD, ICON_CHECK, ICON_CHEVRON_DOWN,
    ICON_CHEVRON_RIGHT, ICON_FACEBOOK, ICON_HEART, ICON_LIGHTBULB, ICON_STAR, ICON_USERS, Icon,
};
use crate::home::HERO_SECTION_ID;

struct Teacher {
    name: &'static str,
    image: &'static str,
    featured: bool,
}

const TEACHERS: [Teacher; 3] = [
    Teacher { name: "علاء الجبيلي", image: "/teacher-image.png", featured: false },
    Teacher { name: "عبد الكريم الزيات", image: "/teacher-image2.png", featured: true },
    Teacher { name: "رضا المطراوي", image: "/teacher-image3.png", featured: false },
];

/// Slogan text with an optional decorative image.
const SLOGANS: [(&str, Option<&str>); 3] = [
    ("لغتك قوتك", Some("/pi.png")),
    ("مستقبلك يبدأ هنا", Some("/calculator.png")),
    ("لغة للنجاح", None),
];

const CATEGORIES: [&str; 3] = ["لغات", "مدارس عربي", "كورسات"];

pub struct Testimonial {
    pub name: &'static str,
    pub grade: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "عصام اسامة",
        grade: "الصف الأول الثانوي",
        quote: "تجربة رائعة مع المنصة شرح مميز وطريقة سهلة في توصيل المعلومة",
    },
    Testimonial {
        name: "سيف طارق",
        grade: "الصف الثاني الثانوي",
        quote: "المنهج منظم جداً والشرح واضح، ساعدوني في فهم الانجليزي بشكل أفضل",
    },
    Testimonial {
        name: "عمر جمال",
        grade: "الصف الأول الثانوي",
        quote: "أفضل منصة متخصصة لكورسات الانجليزي",
    },
];

const STAR_COUNT: usize = 5;

#[component]
pub fn HeroSection(sign_up_path: String, hero_visible: bool) -> impl IntoView {
    view! {
        <section id=HERO_SECTION_ID class="hero">
            <div class="container hero-grid">
                <div class="hero-media">
                    <img class="hero-background" src="/background.png" alt="" />
                    {TEACHERS.iter().map(|teacher| {
                        let class = if teacher.featured { "teacher featured" } else { "teacher" };
                        view! {
                            <div class=class>
                                <img src=teacher.image alt=teacher.name />
                                <span>{teacher.name}</span>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="hero-copy">
                    <img class="hero-logo" src="/logo.png" alt="منصة E Score" />
                    <p class="hashtag">"طور_لغتك_طور_مستقبلك#"</p>
                    <div class="bubbles">
                        <div class="bubble">"مدرسين لغة إنجليزية معتمدين دوليا"</div>
                        <div class="bubble">"أكثر من25 سنين خبرة في تدريس مناهج اللغة الإنجليزية"</div>
                    </div>
                    <div class="chips">
                        {CATEGORIES.iter().map(|category| view! {
                            <span class="chip">
                                <Icon path=ICON_CHECK size="16" />
                                {*category}
                            </span>
                        }).collect::<Vec<_>>()}
                    </div>
                    <p>"انضم إلينا في رحلتنا في " <span class="accent">"2026"</span></p>
                    <a class="btn btn-primary btn-lg" href=sign_up_path>
                        "تسجيل الدخول"
                        <Icon path=ICON_ARROW_RIGHT size="16" />
                    </a>
                    <div class="slogans">
                        {SLOGANS.iter().map(|(text, image)| view! {
                            <div class="slogan">
                                {image.map(|src| view! { <img src=src alt="" /> })}
                                <span>{*text}</span>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <ScrollIndicator visible=hero_visible />
        </section>
    }
}

/// Decorative hint that jumps to the course grid; hidden once the hero has
/// scrolled out of view.
#[component]
pub fn ScrollIndicator(visible: bool) -> impl IntoView {
    let class = if visible { "scroll-indicator" } else { "scroll-indicator is-hidden" };
    view! {
        <a id="scroll-indicator" class=class href="#courses-section" aria-label="الكورسات المتاحة">
            <Icon path=ICON_CHEVRON_DOWN size="32" />
            <Icon path=ICON_CHEVRON_DOWN size="32" />
            <Icon path=ICON_CHEVRON_DOWN size="32" />
        </a>
    }
}

#[component]
pub fn SocialSection(social_url: String) -> impl IntoView {
    view! {
        <section class="social">
            <div class="container">
                <div class="section-heading">
                    <h2>"متابعينا على السوشيال ميديا"</h2>
                    <svg width="50" height="30" viewBox="0 0 50 30" fill="none" class="accent" aria-hidden="true">
                        <path
                            d="M25 5 L25 25 M15 15 L25 25 L35 15"
                            stroke="currentColor"
                            stroke-width="3"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        ></path>
                    </svg>
                </div>

                <div class="social-card">
                    <div class="social-head">
                        <div class="social-badge">
                            <Icon path=ICON_FACEBOOK size="32" />
                        </div>
                        <div>
                            <h3>"1.5k"</h3>
                            <p>"فيسبوك"</p>
                        </div>
                    </div>
                    <div class="social-follow" dir="ltr">
                        <a
                            class="round-link"
                            href=social_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <Icon path=ICON_ARROW_LEFT size="20" />
                        </a>
                        <p>"تابعنا من هنا"</p>
                    </div>
                </div>

                <div class="support-grid">
                    <div class="support-card">
                        <div class="support-icon">
                            <Icon path=ICON_LIGHTBULB size="32" />
                        </div>
                        <h3>"الدعم العلمي"</h3>
                        <p class="muted">"مستعدين نجاوب على أسئلتك طول اليوم"</p>
                    </div>
                    <div class="support-card">
                        <div class="support-icon">
                            <Icon path=ICON_HEART size="32" />
                        </div>
                        <h3>"الدعم النفسي"</h3>
                        <p class="muted">"متفهمين حاجتك و معاك بشكل مستمر"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="testimonials">
            <div class="container">
                <div class="section-heading">
                    <h2>"آراء الطلاب"</h2>
                    <p>"ماذا يقول طلابنا عن تجربتهم معنا"</p>
                </div>
                <div class="card-grid">
                    {TESTIMONIALS.iter().map(|t| view! {
                        <div class="testimonial">
                            <div class="testimonial-head">
                                <img src="/male.png" alt=t.name />
                                <div>
                                    <h4>{t.name}</h4>
                                    <p class="muted">{t.grade}</p>
                                </div>
                            </div>
                            <p class="muted">{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                            <div class="stars">
                                {(0..STAR_COUNT).map(|_| view! {
                                    <Icon path=ICON_STAR size="16" fill="currentColor" />
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="section-heading">
                    <h2>"مميزات المنصة"</h2>
                    <p>"اكتشف ما يجعل منصتنا مميزة"</p>
                </div>
                <div class="card-grid">
                    <div class="feature">
                        <div class="feature-icon"><Icon path=ICON_STAR size="40" /></div>
                        <h3>"جودة عالية"</h3>
                        <p class="muted">"أفضل منصة متخصصة لكورسات الانجليزي"</p>
                    </div>
                    <div class="feature">
                        <div class="feature-icon"><Icon path=ICON_USERS size="40" /></div>
                        <h3>"مجتمع نشط"</h3>
                        <p class="muted">"انضم إلى مجتمع من الطلاب النشطين والمتفوقين والأوائل"</p>
                    </div>
                    <div class="feature">
                        <div class="feature-icon"><Icon path=ICON_AWARD size="40" /></div>
                        <h3>"شهادات تقدير"</h3>
                        <p class="muted">"احصل على شهادات تقدير عند إكمال الكورسات"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CtaSection(sign_up_path: String) -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container">
                <h2>"ابدأ رحلة التعلم معنا"</h2>
                <p class="muted">"انضم إلينا اليوم وابدأ رحلة النجاح"</p>
                <a class="btn btn-primary btn-lg" href=sign_up_path>
                    "سجل الآن"
                    <Icon path=ICON_CHEVRON_RIGHT size="16" />
                </a>
            </div>
        </section>
    }
}
