// frontend_portfolio/src/components/social_link.rs
use yew::prelude::*;

use super::icons::{Icon, IconSvg};

const LINK_CLASS: &str = "group flex text-sm font-medium text-zinc-800 transition hover:text-teal-500 dark:text-zinc-200 dark:hover:text-teal-500";
const ICON_CLASS: &str = "h-6 w-6 flex-none fill-zinc-500 transition group-hover:fill-teal-500";

/// A fixed social/contact link: where it goes, what it says and which icon it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLinkEntry {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub class: Option<&'static str>,
}

impl SocialLinkEntry {
    pub const fn new(label: &'static str, href: &'static str, icon: Icon) -> Self {
        Self {
            label,
            href,
            icon,
            class: None,
        }
    }

    pub const fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn view(&self) -> Html {
        html! {
            <SocialLink href={self.href} icon={self.icon} class={Classes::from(self.class)}>
                { self.label }
            </SocialLink>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SocialLinkProps {
    pub href: AttrValue,
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// List item holding a link with an icon and a label.
///
/// `href` is rendered as given; `mailto:` and other schemes are left to the browser.
#[function_component(SocialLink)]
pub fn social_link(props: &SocialLinkProps) -> Html {
    html! {
        <li class={classes!(props.class.clone(), "flex")}>
            <a href={props.href.clone()} class={LINK_CLASS}>
                <IconSvg icon={props.icon} class={Classes::from(ICON_CLASS)} />
                <span class="ml-4">{ for props.children.iter() }</span>
            </a>
        </li>
    }
}
