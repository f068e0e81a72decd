//! UI Components

use std::sync::Arc;

use leptos::prelude::*;

use landing_core::{
    BodyStyle, CheckoutMode, DisclosureItem, ExclusiveDisclosureList, Media, MediaSlot,
    SiteConfig,
};

use crate::api;

/// Starts a hosted checkout for one price.
///
/// Falls back to the configured price and mode when none are given. The
/// button is disabled and shows a spinner while the session request runs.
#[component]
pub fn ButtonCheckout(
    #[prop(into, optional)] price_id: Option<String>,
    #[prop(optional)] mode: Option<CheckoutMode>,
    #[prop(into, default = "Get Launchpad".into())] text: String,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let (pending, set_pending) = signal(false);

    let mut defaults = config.checkout_defaults();
    if let Some(price_id) = price_id {
        defaults.price_id = price_id;
    }
    if let Some(mode) = mode {
        defaults.mode = mode;
    }

    let initiator = Arc::new(
        api::checkout_initiator(&config, defaults)
            .with_pending_observer(move |busy| set_pending.set(busy)),
    );

    let checkout = move |_| {
        let initiator = initiator.clone();
        leptos::task::spawn_local(async move {
            initiator.activate_default().await;
        });
    };

    view! {
        <button
            class="btn btn-primary btn-wide rounded-full"
            on:click=checkout
            disabled=move || pending.get()
        >
            <Show when=move || pending.get()>
                <span class="loading loading-spinner loading-xs"></span>
            </Show>
            {text}
        </button>
    }
}

/// Link to the external scheduling page
#[component]
pub fn ButtonBookACall(
    #[prop(into, default = "Book A Call".into())] text: String,
    #[prop(into, optional)] extra_style: Option<String>,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let class = format!("btn {} rounded-full", extra_style.unwrap_or_default());

    view! {
        <a class=class href=config.booking_url>
            {text}
        </a>
    }
}

/// Feature list where exactly one item is open, next to its media
#[component]
pub fn FeaturesAccordion(items: Vec<DisclosureItem>) -> impl IntoView {
    let list = match ExclusiveDisclosureList::new(items) {
        Ok(list) => RwSignal::new(list),
        Err(e) => {
            tracing::warn!(error = %e, "Features accordion has nothing to show");
            return ().into_any();
        }
    };
    let count = list.with_untracked(|l| l.items().len());

    view! {
        <section class="py-24 md:py-32 space-y-24 md:space-y-32 max-w-7xl mx-auto bg-base-100" id="features">
            <div class="px-8">
                <h2 class="font-extrabold text-4xl lg:text-6xl tracking-tight mb-12 md:mb-24">
                    "Everything you need to ship features fast"
                    <span class="bg-neutral text-neutral-content px-2 md:px-4 ml-1 md:ml-1.5 leading-relaxed whitespace-nowrap">
                        "and get your idea to market"
                    </span>
                </h2>
                <div class="flex flex-col md:flex-row gap-12 md:gap-24">
                    <div class="grid grid-cols-1 items-stretch gap-8 sm:gap-12 lg:grid-cols-2 lg:gap-20">
                        <ul class="w-full">
                            {(0..count)
                                .map(|index| view! { <AccordionItem list=list index=index /> })
                                .collect_view()}
                        </ul>
                        {move || {
                            let media = list.with(|l| l.expanded_item().media.clone());
                            view! { <FeatureMedia media=media /> }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn AccordionItem(list: RwSignal<ExclusiveDisclosureList>, index: usize) -> impl IntoView {
    let item = list.with_untracked(|l| l.items()[index].clone());
    let body_ref = NodeRef::<leptos::html::Div>::new();

    let is_open = move || list.with(|l| l.is_expanded(index));
    let body_style = move || {
        let measured = body_ref
            .get()
            .and_then(|el| u32::try_from(el.scroll_height()).ok());
        list.with(|l| l.body_style(index, measured))
    };

    view! {
        <li>
            <button
                class="relative flex gap-2 items-center w-full py-5 text-base font-medium text-left md:text-lg"
                aria-expanded=move || is_open().to_string()
                on:click=move |ev| {
                    ev.prevent_default();
                    list.update(|l| {
                        l.select(index);
                    });
                }
            >
                <span class="duration-100" class:text-primary=is_open>
                    {item.icon.map(|d| view! {
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 24 24"
                            stroke-width="1.5"
                            stroke="currentColor"
                            class="w-6 h-6"
                        >
                            <path stroke-linecap="round" stroke-linejoin="round" d=d />
                        </svg>
                    })}
                </span>
                <span
                    class="flex-1 text-base-content"
                    class:text-primary=is_open
                    class:font-semibold=is_open
                >
                    <h3 class="inline">{item.title}</h3>
                </span>
            </button>

            <div
                node_ref=body_ref
                class="text-base-content-secondary overflow-hidden"
                style:transition=BodyStyle::transition_css()
                style:max-height=move || body_style().max_height.css()
                style:opacity=move || body_style().opacity_css()
            >
                <div class="pb-5 leading-relaxed">{item.body}</div>
            </div>
        </li>
    }
}

/// Video, image or an empty box of the same size
#[component]
fn FeatureMedia(media: Option<Media>) -> impl IntoView {
    let style = "rounded-2xl aspect-square w-full sm:w-[26rem]";

    match MediaSlot::for_media(media.as_ref()) {
        MediaSlot::Video { source, format, playback, width, height } => view! {
            <video
                class=style
                autoplay=playback.autoplay
                muted=playback.muted
                loop=playback.looped
                playsinline=playback.inline
                controls=playback.controls
                width=width.to_string()
                height=height.to_string()
            >
                <source src=source.to_string() type=format.to_string() />
            </video>
        }
        .into_any(),
        MediaSlot::Image { source, alt, width, height } => view! {
            <img
                src=source.to_string()
                alt=alt.to_string()
                class=format!("{style} object-cover object-center")
                width=width.to_string()
                height=height.to_string()
            />
        }
        .into_any(),
        MediaSlot::Placeholder => view! { <div class=format!("{style} !border-none")></div> }.into_any(),
    }
}
