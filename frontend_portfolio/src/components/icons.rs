// frontend_portfolio/src/components/icons.rs
use yew::prelude::*;

const VIEW_BOX: &str = "0 0 24 24";

/// Icons the site knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Mail,
    X,
    Instagram,
    GitHub,
    LinkedIn,
}

/// One `<path>` of an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconPath {
    pub d: &'static str,
    pub even_odd: bool,
}

impl IconPath {
    const fn filled(d: &'static str) -> Self {
        Self { d, even_odd: false }
    }

    const fn even_odd(d: &'static str) -> Self {
        Self { d, even_odd: true }
    }
}

const MAIL_PATHS: &[IconPath] = &[IconPath::even_odd(
    "M6 5a3 3 0 0 0-3 3v8a3 3 0 0 0 3 3h12a3 3 0 0 0 3-3V8a3 3 0 0 0-3-3H6Zm.245 2.187a.75.75 0 0 0-.99 1.126l6.25 5.5a.75.75 0 0 0 .99 0l6.25-5.5a.75.75 0 0 0-.99-1.126L12 12.251 6.245 7.187Z",
)];

const X_PATHS: &[IconPath] = &[IconPath::filled(
    "M13.3174 10.7749L19.1457 4H17.7646L12.7039 9.88256L8.66193 4H4L10.1122 12.8955L4 20H5.38119L10.7254 13.7878L14.994 20H19.656L13.3171 10.7749H13.3174ZM11.4257 12.9738L10.8064 12.0881L5.87886 5.03974H8.00029L11.9769 10.728L12.5962 11.6137L17.7652 19.0075H15.6438L11.4257 12.9742V12.9738Z",
)];

const INSTAGRAM_PATHS: &[IconPath] = &[
    IconPath::filled(
        "M12 3c-2.444 0-2.75.01-3.71.054-.959.044-1.613.196-2.185.418A4.412 4.412 0 0 0 4.51 4.511c-.5.5-.809 1.002-1.039 1.594-.222.572-.374 1.226-.418 2.184C3.01 9.25 3 9.556 3 12s.01 2.75.054 3.71c.044.959.196 1.613.418 2.185.23.592.538 1.094 1.039 1.595.5.5 1.002.808 1.594 1.038.572.222 1.226.374 2.184.418C9.25 20.99 9.556 21 12 21s2.75-.01 3.71-.054c.959-.044 1.613-.196 2.185-.419a4.412 4.412 0 0 0 1.595-1.038c.5-.5.808-1.002 1.038-1.594.222-.572.374-1.226.418-2.184.044-.96.054-1.267.054-3.711s-.01-2.75-.054-3.71c-.044-.959-.196-1.613-.419-2.185A4.412 4.412 0 0 0 19.49 4.51c-.5-.5-1.002-.809-1.594-1.039-.572-.222-1.226-.374-2.184-.418C14.75 3.01 14.444 3 12 3Zm0 1.622c2.403 0 2.688.009 3.637.052.877.04 1.354.187 1.67.31.421.163.72.358 1.036.673.315.315.51.615.673 1.035.123.317.27.794.31 1.671.043.95.052 1.234.052 3.637s-.009 2.688-.052 3.637c-.04.877-.187 1.354-.31 1.67-.163.421-.358.72-.673 1.036a2.79 2.79 0 0 1-1.035.673c-.317.123-.794.27-1.671.31-.95.043-1.234.052-3.637.052s-2.688-.009-3.637-.052c-.877-.04-1.354-.187-1.67-.31a2.789 2.789 0 0 1-1.036-.673 2.79 2.79 0 0 1-.673-1.035c-.123-.317-.27-.794-.31-1.671-.043-.95-.052-1.234-.052-3.637s.009-2.688.052-3.637c.04-.877.187-1.354.31-1.67.163-.421.358-.72.673-1.036.315-.315.615-.51 1.035-.673.317-.123.794-.27 1.671-.31.95-.043 1.234-.052 3.637-.052Z",
    ),
    IconPath::filled(
        "M12 15a3 3 0 1 1 0-6 3 3 0 0 1 0 6Zm0-7.622a4.622 4.622 0 1 0 0 9.244 4.622 4.622 0 0 0 0-9.244Zm5.884-.182a1.08 1.08 0 1 1-2.16 0 1.08 1.08 0 0 1 2.16 0Z",
    ),
];

const GITHUB_PATHS: &[IconPath] = &[IconPath::even_odd(
    "M12 2C6.475 2 2 6.588 2 12.253c0 4.537 2.862 8.369 6.838 9.727.5.09.687-.218.687-.487 0-.243-.013-1.05-.013-1.91C7 20.059 6.35 18.957 6.15 18.38c-.113-.295-.6-1.205-1.025-1.448-.35-.192-.85-.667-.013-.68.788-.012 1.35.744 1.538 1.051.9 1.551 2.338 1.116 2.912.846.088-.666.35-1.115.638-1.371-2.225-.256-4.55-1.14-4.55-5.062 0-1.115.387-2.038 1.025-2.756-.1-.256-.45-1.307.1-2.717 0 0 .837-.269 2.75 1.051.8-.23 1.65-.346 2.5-.346.85 0 1.7.115 2.5.346 1.912-1.333 2.75-1.05 2.75-1.05.55 1.409.2 2.46.1 2.716.637.718 1.025 1.628 1.025 2.756 0 3.934-2.337 4.806-4.562 5.062.362.32.675.936.675 1.897 0 1.371-.013 2.473-.013 2.82 0 .268.188.589.688.486a10.039 10.039 0 0 0 4.932-3.74A10.447 10.447 0 0 0 22 12.253C22 6.588 17.525 2 12 2Z",
)];

const LINKEDIN_PATHS: &[IconPath] = &[IconPath::filled(
    "M18.335 18.339H15.67v-4.177c0-.996-.02-2.278-1.39-2.278-1.389 0-1.601 1.084-1.601 2.205v4.25h-2.666V9.75h2.56v1.17h.035c.358-.674 1.228-1.387 2.528-1.387 2.7 0 3.2 1.778 3.2 3.58v4.796ZM7.003 8.575a1.546 1.546 0 0 1-1.548-1.549 1.548 1.548 0 1 1 1.547 1.549Zm1.336 9.764H5.666V9.75H8.34v8.589ZM19.67 3H4.329C3.593 3 3 3.58 3 4.297v15.406C3 20.42 3.594 21 4.328 21h15.338C20.4 21 21 20.42 21 19.703V4.297C21 3.58 20.4 3 19.666 3h.003Z",
)];

impl Icon {
    pub fn view_box(self) -> &'static str {
        VIEW_BOX
    }

    pub fn paths(self) -> &'static [IconPath] {
        match self {
            Icon::Mail => MAIL_PATHS,
            Icon::X => X_PATHS,
            Icon::Instagram => INSTAGRAM_PATHS,
            Icon::GitHub => GITHUB_PATHS,
            Icon::LinkedIn => LINKEDIN_PATHS,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconSvgProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

/// Decorative inline SVG; hidden from assistive technology.
#[function_component(IconSvg)]
pub fn icon_svg(props: &IconSvgProps) -> Html {
    html! {
        <svg viewBox={props.icon.view_box()} aria-hidden="true" class={props.class.clone()}>
            { for props.icon.paths().iter().map(|path| {
                let rule = path.even_odd.then_some("evenodd");
                html! { <path fill-rule={rule} clip-rule={rule} d={path.d} /> }
            }) }
        </svg>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use scraper::{Html as HtmlDocument, Selector};
    use yew::ServerRenderer;

    const ICONS: [Icon; 5] = [
        Icon::Mail,
        Icon::X,
        Icon::Instagram,
        Icon::GitHub,
        Icon::LinkedIn,
    ];

    async fn render(icon: Icon, class: Option<&'static str>) -> String {
        ServerRenderer::<IconSvg>::with_props(move || IconSvgProps {
            icon,
            class: Classes::from(class),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[test]
    fn every_icon_has_geometry() {
        for icon in ICONS {
            assert_eq!(icon.view_box(), "0 0 24 24");
            assert!(!icon.paths().is_empty(), "{icon:?} has no paths");
            assert!(icon.paths().iter().all(|path| !path.d.is_empty()));
        }
    }

    #[test]
    fn mail_and_github_use_even_odd_fill() {
        assert!(Icon::Mail.paths().iter().all(|p| p.even_odd));
        assert!(Icon::GitHub.paths().iter().all(|p| p.even_odd));
        assert!(Icon::X.paths().iter().all(|p| !p.even_odd));
    }

    #[tokio::test]
    async fn renders_aria_hidden_svg_with_class() {
        let html = render(Icon::Mail, Some("h-6 w-6")).await;
        let document = HtmlDocument::parse_fragment(&html);
        let svg_selector = Selector::parse("svg").unwrap();
        let svg = document.select(&svg_selector).next().expect("svg rendered");

        assert_eq!(svg.value().attr("aria-hidden"), Some("true"));
        assert_eq!(svg.value().attr("class"), Some("h-6 w-6"));

        let path_selector = Selector::parse("path").unwrap();
        let path = document.select(&path_selector).next().expect("path rendered");
        assert_eq!(path.value().attr("fill-rule"), Some("evenodd"));
        assert_eq!(path.value().attr("d"), Some(MAIL_PATHS[0].d));
    }

    #[tokio::test]
    async fn omits_class_attribute_when_unstyled() {
        let html = render(Icon::GitHub, None).await;
        let document = HtmlDocument::parse_fragment(&html);
        let svg = document
            .select(&Selector::parse("svg").unwrap())
            .next()
            .expect("svg rendered");

        assert_eq!(svg.value().attr("class"), None);
    }

    #[tokio::test]
    async fn shape_does_not_depend_on_class() {
        let plain = render(Icon::Instagram, None).await;
        let styled = render(Icon::Instagram, Some("fill-zinc-500")).await;
        let path_selector = Selector::parse("path").unwrap();

        let paths = |html: &str| -> Vec<String> {
            HtmlDocument::parse_fragment(html)
                .select(&path_selector)
                .filter_map(|p| p.value().attr("d").map(str::to_owned))
                .collect()
        };

        assert_eq!(paths(&plain).len(), 2);
        assert_eq!(paths(&plain), paths(&styled));
    }
}
