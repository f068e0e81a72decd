//! Pricing Page

use leptos::prelude::*;

use crate::components::{ButtonBookACall, ButtonCheckout};

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing">
            <h1>"Pricing"</h1>
            <p class="subtitle">"Ship your product in days, not months"</p>

            <div class="plans">
                <div class="plan featured">
                    <span class="badge">"Popular"</span>
                    <h2>"Starter"</h2>
                    <div class="price">"$169"<span>"/once"</span></div>
                    <ul>
                        <li>"Landing page & components"</li>
                        <li>"Checkout & webhooks"</li>
                        <li>"Lifetime updates"</li>
                    </ul>
                    <ButtonCheckout />
                </div>

                <div class="plan">
                    <h2>"Custom"</h2>
                    <div class="price">"Let's talk"</div>
                    <ul>
                        <li>"Dedicated product team"</li>
                        <li>"Custom integrations"</li>
                    </ul>
                    <ButtonBookACall />
                </div>
            </div>
        </div>
    }
}
