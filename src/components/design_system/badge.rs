use leptos::prelude::*;

/// Badge variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-stone-200 text-stone-700 border-stone-300",
            BadgeVariant::Success => "bg-emerald-100 text-emerald-800 border-emerald-300",
            BadgeVariant::Warning => "bg-amber-100 text-amber-800 border-amber-300",
            BadgeVariant::Danger => "bg-rose-100 text-rose-800 border-rose-300",
            BadgeVariant::Info => "bg-sky-100 text-sky-800 border-sky-300",
        }
    }
}

/// A small inline status badge
#[component]
pub fn Badge(
    /// The visual variant of the badge
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let base_class = "text-xs px-2 py-0.5 rounded-full border font-medium inline-flex items-center";
    let full_class = format!("{base_class} {} {class}", variant.class());

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
