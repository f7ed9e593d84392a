// frontend_portfolio/src/metadata.rs
use gloo::console::error;
use yew::prelude::*;

use crate::error::FrontendError;

const DESCRIPTION_SELECTOR: &str = r#"meta[name="description"]"#;

/// Title and description a page contributes to the document head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

impl PageMetadata {
    /// `"{title} - {site_name}"`, or the bare title when there is no site name.
    pub fn document_title(&self, site_name: &str) -> String {
        let site_name = site_name.trim();
        if site_name.is_empty() {
            self.title.to_string()
        } else {
            format!("{} - {}", self.title, site_name)
        }
    }
}

/// Write the title and `<meta name="description">` into the live document.
pub fn apply_metadata(metadata: &PageMetadata, site_name: &str) -> Result<(), FrontendError> {
    let document = gloo::utils::document();
    document.set_title(&metadata.document_title(site_name));

    let description = match document
        .query_selector(DESCRIPTION_SELECTOR)
        .map_err(FrontendError::dom)?
    {
        Some(element) => element,
        None => {
            let head = document.head().ok_or(FrontendError::MissingHead)?;
            let element = document.create_element("meta").map_err(FrontendError::dom)?;
            element
                .set_attribute("name", "description")
                .map_err(FrontendError::dom)?;
            head.append_child(&element).map_err(FrontendError::dom)?;
            element
        }
    };

    description
        .set_attribute("content", metadata.description)
        .map_err(FrontendError::dom)
}

/// Apply page metadata once mounted. Does nothing during server rendering.
#[hook]
pub fn use_page_metadata(metadata: PageMetadata, site_name: &'static str) {
    use_effect_with((metadata, site_name), |(metadata, site_name)| {
        if let Err(err) = apply_metadata(metadata, site_name) {
            error!(format!("Failed to apply metadata for {}: {err}", metadata.title));
        }
        || ()
    });
}

#[cfg(test)]
mod tests {
    use super::PageMetadata;

    const PAGE: PageMetadata = PageMetadata {
        title: "About",
        description: "A page.",
    };

    #[test]
    fn appends_site_name_to_title() {
        assert_eq!(PAGE.document_title("Andrew Strigalev"), "About - Andrew Strigalev");
    }

    #[test]
    fn blank_site_name_leaves_bare_title() {
        assert_eq!(PAGE.document_title(""), "About");
        assert_eq!(PAGE.document_title("  "), "About");
    }
}
