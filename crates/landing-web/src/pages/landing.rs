//! Landing Page
//!
//! Static marketing copy. Every block scrolls in through `AnimateIn`; links
//! are handed to the router as-is.

use leptos::prelude::*;
use leptos_router::components::A;

use landing_core::TransitionDuration;

use crate::components::{AnimateIn, Icon, IconKind, SkillsOrbit};

/// Column stagger used across card grids
const STAGGER: [TransitionDuration; 4] = [
    TransitionDuration::Fast,
    TransitionDuration::Medium,
    TransitionDuration::Slow,
    TransitionDuration::Slower,
];

struct Track {
    title: &'static str,
    perks: &'static [&'static str],
}

static TRACKS: [Track; 3] = [
    Track {
        title: "Full-Time Jobs",
        perks: &[
            "Verified Employers",
            "Resume Optimization",
            "Unlimited Applications",
            "Real-Time Tracking",
            "Salary Transparency",
        ],
    },
    Track {
        title: "Internships",
        perks: &[
            "Guaranteed Pay",
            "Expert Mentorship",
            "Skill Certifications",
            "Portfolio Building",
            "Job Pipeline",
        ],
    },
    Track {
        title: "Freelancing",
        perks: &[
            "Zero Platform Fees",
            "Protected Community",
            "Instant Payments",
            "Smart Matching",
            "Direct Communication",
        ],
    },
];

struct Step {
    title: &'static str,
    body: &'static str,
}

static STEPS: [Step; 3] = [
    Step {
        title: "Build Your Profile",
        body: "Showcase your skills, set your availability, and tell us what kind of projects excite you. Our AI creates a personalized experience from day one.",
    },
    Step {
        title: "Join & Collaborate",
        body: "Get matched with projects and teammates. Work together using our integrated tools, learn from each other, and deliver amazing results.",
    },
    Step {
        title: "Get Hired & Grow",
        body: "Your completed projects become verified portfolio pieces. Companies reach out directly, and your proven experience opens doors to dream opportunities.",
    },
];

struct Story {
    quote: &'static str,
    author: &'static str,
    metric: &'static str,
}

static STORIES: [Story; 4] = [
    Story {
        quote: "The AI helped me optimize my profile and I landed my dream job within 3 weeks. Zero platform fees let me build my portfolio without any budget constraints.",
        author: "Arjun Sharma",
        metric: "Dream Job in 3 Weeks",
    },
    Story {
        quote: "Finally a platform that doesn't take 25% commission. I can focus on quality relationships and projects, and I met amazing clients through the social feed.",
        author: "Priya Singh",
        metric: "Zero Fees",
    },
    Story {
        quote: "The free ATS and unlimited job postings saved us thousands. We hire both full-time and contract workers without agency fees.",
        author: "Rohit Gupta",
        metric: "No Agency Fees",
    },
    Story {
        quote: "I can apply to unlimited internships and freelance projects. Got my first internship and 3 freelance projects within a month.",
        author: "Ananya Reddy",
        metric: "4 Opportunities Found",
    },
];

/// Brand mark: white "100", blue "Networks"
#[component]
fn Brand() -> impl IntoView {
    view! {
        <span class="font-black italic font-brand">
            <span class="text-white">"100"</span>
            <span class="text-brand-blue">"Networks"</span>
        </span>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing min-h-screen bg-black text-white font-sans overflow-x-hidden">
            <header class="relative z-50 bg-black backdrop-blur-md">
                <div class="flex items-center justify-between h-16 md:h-20 px-4 md:px-6">
                    <A href="/" attr:class="text-xl md:text-2xl">
                        <Brand />
                    </A>
                    <nav class="flex items-center space-x-1 md:space-x-4">
                        <A href="/individual" attr:class="btn btn-outline">"For Individual"</A>
                        <A href="/company" attr:class="btn btn-outline">"For Company"</A>
                    </nav>
                </div>
            </header>

            <section class="hero relative min-h-screen flex flex-col items-center justify-center text-center px-4 md:px-6">
                <AnimateIn delay=TransitionDuration::Fast>
                    <h1 class="text-4xl sm:text-5xl md:text-7xl lg:text-8xl font-black mb-6 md:mb-8 leading-tight">
                        "The Better Career"<br />
                        <span class="text-blue-400">"Social Network"</span>
                    </h1>
                </AnimateIn>
                <AnimateIn delay=TransitionDuration::Medium>
                    <p class="text-lg sm:text-xl md:text-2xl text-gray-300 mb-8 md:mb-12 max-w-4xl mx-auto">
                        "Jobs, internships and freelancing in one place. Zero platform fees, unlimited applications."
                    </p>
                </AnimateIn>
                <AnimateIn delay=TransitionDuration::Slow>
                    <A href="/explore" attr:class="btn btn-primary inline-flex items-center gap-2">
                        "Explore Opportunities"
                        <Icon kind=IconKind::ArrowRight class="w-5 h-5" />
                    </A>
                </AnimateIn>
                <AnimateIn delay=TransitionDuration::Slower class="grid grid-cols-3 gap-4 md:gap-8 mt-12 md:mt-16">
                    <HeroStat title="Jobs" caption="Full-Time Career Opportunities" />
                    <HeroStat title="Internships" caption="Paid Learning Experiences" />
                    <HeroStat title="Freelancing" caption="Project-Based Work" />
                </AnimateIn>
            </section>

            <section class="py-16 md:py-24 px-4 md:px-6">
                <AnimateIn delay=TransitionDuration::Fast>
                    <h2 class="section-title">"What Makes Us " <span class="text-blue-400">"Different"</span></h2>
                </AnimateIn>
                <div class="grid md:grid-cols-3 gap-6 md:gap-8 max-w-6xl mx-auto">
                    {TRACKS
                        .iter()
                        .zip(STAGGER)
                        .map(|(track, delay)| {
                            view! {
                                <AnimateIn delay=delay class="card">
                                    <h3 class="card-title">{track.title}</h3>
                                    <ul class="space-y-3">
                                        {track
                                            .perks
                                            .iter()
                                            .map(|perk| view! { <li class="perk">{*perk}</li> })
                                            .collect_view()}
                                    </ul>
                                </AnimateIn>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="py-16 md:py-24 px-4 md:px-6 text-center">
                <AnimateIn>
                    <h2 class="section-title">
                        "Building the Future"<br />
                        <span class="text-accent">"One Project at a Time"</span>
                    </h2>
                </AnimateIn>
                <AnimateIn delay=TransitionDuration::Medium>
                    <p class="text-lg md:text-xl text-gray-300 mb-12 max-w-4xl mx-auto">
                        <Brand />
                        " is changing how Gen Z finds work, through meaningful collaboration and opportunity."
                    </p>
                </AnimateIn>
                <AnimateIn delay=TransitionDuration::Slow threshold=0.2>
                    <SkillsOrbit />
                </AnimateIn>
            </section>

            <section class="py-16 md:py-24 px-4 md:px-6">
                <AnimateIn>
                    <h2 class="section-title">"Your Journey on " <Brand /></h2>
                </AnimateIn>
                <div class="grid md:grid-cols-3 gap-6 md:gap-8 max-w-6xl mx-auto">
                    {STEPS
                        .iter()
                        .enumerate()
                        .zip(STAGGER)
                        .map(|((i, step), delay)| {
                            view! {
                                <AnimateIn delay=delay class="card">
                                    <span class="step-number">{i + 1}</span>
                                    <h3 class="card-title">{step.title}</h3>
                                    <p class="text-gray-300">{step.body}</p>
                                </AnimateIn>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="py-16 md:py-24 px-4 md:px-6">
                <AnimateIn>
                    <h2 class="section-title">"Real Stories, " <span class="text-accent">"Real Success"</span></h2>
                </AnimateIn>
                <div class="grid md:grid-cols-2 gap-6 md:gap-8 max-w-6xl mx-auto">
                    {STORIES
                        .iter()
                        .zip(STAGGER)
                        .map(|(story, delay)| {
                            let initial = story.author.chars().next().unwrap_or('?');
                            view! {
                                <AnimateIn delay=delay class="card">
                                    <span class="metric">{story.metric}</span>
                                    <p class="text-gray-300 italic mb-6">"\u{201c}" {story.quote} "\u{201d}"</p>
                                    <div class="flex items-center gap-3">
                                        <div class="avatar">{initial}</div>
                                        <p class="font-bold">{story.author}</p>
                                    </div>
                                </AnimateIn>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="py-16 md:py-24 px-4 md:px-6 text-center">
                <AnimateIn>
                    <h2 class="section-title">
                        "Ready to Build"<br />
                        <span class="text-blue-400">"Your Future?"</span>
                    </h2>
                </AnimateIn>
                <AnimateIn delay=TransitionDuration::Fast>
                    <p class="text-lg md:text-xl text-gray-300 mb-8 max-w-4xl mx-auto">
                        "Join thousands who are building careers with zero platform fees, unlimited opportunities, and free access to all features."
                    </p>
                </AnimateIn>
                <AnimateIn delay=TransitionDuration::Medium class="flex flex-col sm:flex-row gap-4 justify-center">
                    <input type="email" class="input" placeholder="Enter your email address" />
                    <A href="/explore" attr:class="btn btn-primary inline-flex items-center gap-2">
                        <Icon kind=IconKind::Zap class="w-5 h-5" />
                        "Get Started"
                    </A>
                </AnimateIn>
            </section>

            <footer class="border-t border-gray-800 py-12 px-4 md:px-6">
                <div class="flex flex-col md:flex-row items-center justify-between gap-6 max-w-6xl mx-auto">
                    <Brand />
                    <div class="flex gap-6 text-gray-400">
                        <span class="inline-flex items-center gap-2"><Icon kind=IconKind::Users class="w-4 h-4" />"Community"</span>
                        <span class="inline-flex items-center gap-2"><Icon kind=IconKind::Briefcase class="w-4 h-4" />"Careers"</span>
                    </div>
                    <p class="text-gray-500 text-sm">"© 100Networks"</p>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn HeroStat(title: &'static str, caption: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-blue-400 text-2xl md:text-3xl font-bold mb-2">{title}</div>
            <div class="text-gray-300 text-sm md:text-base">{caption}</div>
        </div>
    }
}
