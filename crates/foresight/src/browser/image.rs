//! Logo image loading.

use foresight_core::EngineError;
use web_sys::HtmlImageElement;

/// An image element loading in the background.
#[derive(Debug, Clone)]
pub struct LogoImage {
    element: HtmlImageElement,
}

impl LogoImage {
    /// Start loading `url`.
    pub fn load(url: &str) -> Result<Self, EngineError> {
        let element = HtmlImageElement::new()
            .map_err(|e| EngineError::ContextUnavailable(format!("image element: {e:?}")))?;
        element.set_src(url);
        log::debug!("loading logo from {url}");
        Ok(Self { element })
    }

    /// True once the image has decoded. A broken image never becomes ready.
    pub fn is_ready(&self) -> bool {
        self.element.complete() && self.element.natural_width() > 0
    }

    /// The underlying element.
    pub fn element(&self) -> &HtmlImageElement {
        &self.element
    }
}
