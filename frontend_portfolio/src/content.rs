//! Fixed copy and assets of the About page.

use crate::components::icons::Icon;
use crate::components::social_link::SocialLinkEntry;
use crate::metadata::PageMetadata;

pub const ABOUT_METADATA: PageMetadata = PageMetadata {
    title: "About",
    description: "I\u{2019}m Andrew Strigalev. I live in Warsaw, Poland.",
};

pub const HEADING: &str = "I\u{2019}m Andrew Strigalev. I live in Warsaw, Poland, where I create.";

/// Biography paragraphs in reading order.
pub const BIOGRAPHY: [&str; 4] = [
    "I've always enjoyed building things. Doing something that has the \
     potential to benefit someone, or simply to leave my mark on the \
     development of humanity, is what I strive for.",
    "Ever since I was a kid, I have been very fond of strategy games. \
     Building, developing civilisations, managing and performing various \
     tasks was more fun for me than playing football, for example. As I \
     remember now, my favourite games were Warcraft 3, Red Alert 3, \
     Command & Conquer, Heroes of Might and Magic 3/4/5.",
    "I believe that I was finding a way to fulfill my desires in such games. \
     I also liked to read the histories of various scholars and the myths \
     of ancient Greece. In general, all books that have to do with facts or \
     knowledge. Compared to encyclopedias, I was rarely interested in \
     fiction. I am a man of axioms, order is often important to me. At the \
     same time, I realize that not everything is perfect and may not become \
     so. But without a measure of the ideal, you can't make up your path. \
     The main thing is the fervor and aspiration with which you will walk \
     on the path of eternal perfection.",
    "Today I'm working to make your holiday better as part of the Canvas \
     Reply and Easyjet pro team. I also have my own personal start-up called \
     Tapply. It's an e-commerce solution that allows you to create your own \
     app in a couple of steps in the growing Telegram ecosystem. During my \
     time, I have been a developer in such projects as EasyJet, Absolute \
     Labs, Interactio and others. I also act as a teamlead in Wisy, a \
     startup related to investing in cryptocurrency. I define the \
     architecture and fully responsible for releases and updates of the \
     application and managing a team of 4 developers.",
];

/// Static image asset plus the hints the browser needs to size it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortraitImage {
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
    /// Empty for a decorative image; the attribute is still rendered.
    pub alt: &'static str,
    pub sizes: &'static str,
}

impl PortraitImage {
    pub fn src_with_base(&self, asset_base_url: &str) -> String {
        format!(
            "{}/{}",
            asset_base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

pub const PORTRAIT: PortraitImage = PortraitImage {
    path: "img/avatar.png",
    width: 800,
    height: 800,
    alt: "",
    sizes: "(min-width: 1024px) 32rem, 20rem",
};

pub const SOCIAL_LINKS: [SocialLinkEntry; 5] = [
    SocialLinkEntry::new("Follow on X", "https://x.com/andrewsagtech", Icon::X),
    SocialLinkEntry::new(
        "Follow on Instagram",
        "https://www.instagram.com/andrewtheswag/",
        Icon::Instagram,
    )
    .with_class("mt-4"),
    SocialLinkEntry::new(
        "Follow on GitHub",
        "https://github.com/makemesuffer",
        Icon::GitHub,
    )
    .with_class("mt-4"),
    SocialLinkEntry::new(
        "Follow on LinkedIn",
        "https://www.linkedin.com/in/andrew-strigaliov-113721216/",
        Icon::LinkedIn,
    )
    .with_class("mt-4"),
    SocialLinkEntry::new("andrew@sagtech.io", "mailto:andrew@sagtech.io", Icon::Mail)
        .with_class("mt-8 border-t border-zinc-100 pt-8 dark:border-zinc-700/40"),
];
