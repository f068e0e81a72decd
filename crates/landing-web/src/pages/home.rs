//! Home Page

use leptos::prelude::*;

use crate::components::{ButtonBookACall, FeaturesAccordion};
use crate::content;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <FeaturesAccordion items=content::features() />
            <Cta />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="max-w-7xl mx-auto bg-base-100 flex flex-col lg:flex-row items-center justify-center gap-16 lg:gap-20 px-8 py-8 lg:py-20">
            <div class="flex flex-col gap-10 lg:gap-14 items-center justify-center text-center lg:text-left lg:items-start">
                <h1 class="font-extrabold text-4xl lg:text-6xl tracking-tight md:-mb-4">
                    "Build your " <u>"startup"</u> " or " <u>"product"</u>
                    <br />
                    " in " <u>"weeks"</u> ", not " <s>"months"</s>
                </h1>
                <p class="text-lg opacity-80 leading-relaxed">
                    "Your own " <b>"world-class"</b> " product team at a fraction of the cost."
                </p>
                <ButtonBookACall extra_style="btn-primary btn-wide" />
            </div>
        </section>
    }
}

#[component]
fn Cta() -> impl IntoView {
    view! {
        <section class="relative hero overflow-hidden min-h-screen">
            <img
                src=content::cta_background()
                alt="Background"
                class="object-cover w-full absolute inset-0 h-full"
            />
            <div class="relative hero-overlay bg-neutral bg-opacity-70"></div>
            <div class="relative hero-content text-center text-neutral-content p-8">
                <div class="flex flex-col items-center max-w-xl p-8 md:p-0">
                    <h2 class="font-bold text-3xl md:text-5xl tracking-tight mb-8 md:mb-12">
                        "Let's get ready to launch"
                    </h2>
                    <p class="text-lg opacity-80 mb-12 md:mb-16">
                        "Don't waste time building the traditional way"
                    </p>
                    <ButtonBookACall extra_style="btn-primary btn-wide" />
                </div>
            </div>
        </section>
    }
}
