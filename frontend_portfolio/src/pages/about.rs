// frontend_portfolio/src/pages/about.rs
use yew::prelude::*;

use crate::components::container::Container;
use crate::config_file::SITE_CONFIG;
use crate::content::{ABOUT_METADATA, BIOGRAPHY, HEADING, PORTRAIT, SOCIAL_LINKS};
use crate::metadata::use_page_metadata;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_page_metadata(ABOUT_METADATA, SITE_CONFIG.site_name);

    html! {
        <Container class={classes!("mt-16", "sm:mt-32")}>
            <div class="grid grid-cols-1 gap-y-16 lg:grid-cols-2 lg:grid-rows-[auto_1fr] lg:gap-y-12">
                <div class="lg:pl-20">
                    <div class="max-w-xs px-2.5 lg:max-w-none">
                        <img
                            src={PORTRAIT.src_with_base(SITE_CONFIG.asset_base_url)}
                            alt={PORTRAIT.alt}
                            width={PORTRAIT.width.to_string()}
                            height={PORTRAIT.height.to_string()}
                            sizes={PORTRAIT.sizes}
                            decoding="async"
                            class="aspect-square rotate-3 rounded-2xl bg-zinc-100 object-cover dark:bg-zinc-800"
                        />
                    </div>
                </div>
                <div class="lg:order-first lg:row-span-2">
                    <h1 class="text-4xl font-bold tracking-tight text-zinc-800 sm:text-5xl dark:text-zinc-100">
                        { HEADING }
                    </h1>
                    <div class="mt-6 space-y-7 text-base text-zinc-600 dark:text-zinc-400">
                        { for BIOGRAPHY.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                    </div>
                </div>
                <div class="lg:pl-20">
                    <ul role="list">
                        { for SOCIAL_LINKS.iter().map(|entry| entry.view()) }
                    </ul>
                </div>
            </div>
        </Container>
    }
}
