//! Skills Orbit

use leptos::prelude::*;

use landing_core::OrbitLayout;

use super::icons::{Icon, IconKind};

/// One icon on the orbit ring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitItem {
    pub icon: IconKind,
    pub name: &'static str,
    /// Icon size and tint
    pub class: &'static str,
}

pub const SKILLS: [OrbitItem; 6] = [
    OrbitItem { icon: IconKind::Code, name: "Code", class: "w-8 h-8 text-cyan-300" },
    OrbitItem { icon: IconKind::PenTool, name: "Design", class: "w-8 h-8 text-pink-300" },
    OrbitItem { icon: IconKind::BarChart, name: "Marketing", class: "w-8 h-8 text-emerald-300" },
    OrbitItem { icon: IconKind::Mic, name: "Audio", class: "w-8 h-8 text-purple-300" },
    OrbitItem { icon: IconKind::Camera, name: "Video", class: "w-8 h-8 text-orange-300" },
    OrbitItem { icon: IconKind::Layers, name: "PM", class: "w-8 h-8 text-yellow-300" },
];

pub fn skills_layout() -> OrbitLayout<OrbitItem, 6> {
    OrbitLayout::new(SKILLS)
}

/// Six skill icons circling a pulsing "100" badge
#[component]
pub fn SkillsOrbit() -> impl IntoView {
    let layout = skills_layout();

    let ring = layout
        .placements()
        .into_iter()
        .map(|placement| {
            let style = layout.style_for(&placement);
            let item = *placement.item;
            view! {
                <div class="orbit-item" style=style title=item.name>
                    <div class="orbit-icon">
                        <Icon kind=item.icon class=item.class />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="orbit">
            <div class="orbit-ring animate-pulse"></div>
            {ring}
            <div class="orbit-core">
                <div class="orbit-core-label font-brand text-accent animate-pulse">"100"</div>
            </div>
        </div>
    }
}
