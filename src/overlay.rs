use crate::config::LightboxConfig;
use crate::error::{describe_js, LightboxError};
use crate::state::{ClickOutcome, ClickTarget, DisplayMode, Lightbox};
use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement};

// The container click listener lives for the whole page; it is registered
// at most once.
thread_local! {
    static LISTENER_INSTALLED: Cell<bool> = const { Cell::new(false) };
    static ACTIVE_CONFIG: RefCell<Option<LightboxConfig>> = const { RefCell::new(None) };
}

/// Controller for the overlay container and the image nested inside it.
///
/// Holds only element ids. Both elements are looked up in the document on
/// every call, so markup re-rendered by the host is picked up as-is.
#[derive(Clone, Debug, Default)]
pub struct Overlay {
    config: LightboxConfig,
}

impl Overlay {
    pub fn new(config: LightboxConfig) -> Self {
        Self { config }
    }

    /// The overlay registered by [`Overlay::install`], or the default ids if
    /// nothing has been installed yet.
    pub fn active() -> Self {
        ACTIVE_CONFIG
            .with(|c| c.borrow().clone())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn is_installed() -> bool {
        LISTENER_INSTALLED.with(Cell::get)
    }

    fn document() -> Result<Document, LightboxError> {
        web_sys::window()
            .ok_or(LightboxError::NoWindow)?
            .document()
            .ok_or(LightboxError::NoDocument)
    }

    fn element(document: &Document, id: &str) -> Result<Element, LightboxError> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| LightboxError::MissingElement { id: id.to_string() })
    }

    fn container(&self, document: &Document) -> Result<HtmlElement, LightboxError> {
        let id = &self.config.container_id;
        Self::element(document, id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| LightboxError::WrongElementType {
                id: id.clone(),
                expected: "HtmlElement",
            })
    }

    fn content(&self, document: &Document) -> Result<HtmlImageElement, LightboxError> {
        let id = &self.config.content_id;
        Self::element(document, id)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| LightboxError::WrongElementType {
                id: id.clone(),
                expected: "HtmlImageElement",
            })
    }

    fn elements(&self) -> Result<(HtmlElement, HtmlImageElement), LightboxError> {
        let document = Self::document()?;
        Ok((self.container(&document)?, self.content(&document)?))
    }

    /// The source is the raw `src` attribute, not the resolved `img.src`
    /// URL, so it compares equal to what was passed to [`Overlay::show`].
    fn read(container: &HtmlElement, content: &HtmlImageElement) -> Lightbox {
        let display = container
            .style()
            .get_property_value("display")
            .unwrap_or_default();
        Lightbox {
            mode: DisplayMode::from_css(&display),
            source: content.get_attribute("src").unwrap_or_default(),
        }
    }

    fn write(
        &self,
        container: &HtmlElement,
        content: &HtmlImageElement,
        lightbox: &Lightbox,
    ) -> Result<(), LightboxError> {
        container
            .style()
            .set_property("display", lightbox.mode.css_value())
            .map_err(|_| LightboxError::Style {
                id: self.config.container_id.clone(),
            })?;
        content.set_src(&lightbox.source);
        Ok(())
    }

    /// Reads the document state, applies `step` to it and writes it back.
    fn transition<T>(&self, step: impl FnOnce(&mut Lightbox) -> T) -> Result<T, LightboxError> {
        let (container, content) = self.elements()?;
        let mut lightbox = Self::read(&container, &content);
        let result = step(&mut lightbox);
        self.write(&container, &content, &lightbox)?;
        Ok(result)
    }

    /// Opens the overlay on `source`. The string is assigned unchecked.
    pub fn show(&self, source: &str) -> Result<(), LightboxError> {
        log::debug!("lightbox: show {}", source);
        self.transition(|lightbox| lightbox.show(source))
    }

    /// Closes the overlay and empties the image source, which makes the
    /// browser abort any pending load or stream for it.
    pub fn hide(&self) -> Result<(), LightboxError> {
        log::debug!("lightbox: hide");
        self.transition(Lightbox::hide)
    }

    /// Reads the current state back from the document.
    pub fn state(&self) -> Result<Lightbox, LightboxError> {
        let (container, content) = self.elements()?;
        Ok(Self::read(&container, &content))
    }

    /// Applies the backdrop rule to a click delivered to the container.
    /// The event is never stopped or prevented.
    pub fn handle_click(&self, event: &Event) -> Result<ClickOutcome, LightboxError> {
        let (container, content) = self.elements()?;
        let target = classify_target(event, &container);

        let mut lightbox = Self::read(&container, &content);
        let outcome = lightbox.on_click(target);
        if outcome == ClickOutcome::Dismiss {
            log::trace!("lightbox: backdrop click");
            self.write(&container, &content, &lightbox)?;
        }
        Ok(outcome)
    }

    /// Registers the container click listener. Returns `Ok(false)` without
    /// touching the document when a listener is already installed.
    pub fn install(&self) -> Result<bool, LightboxError> {
        if Self::is_installed() {
            log::debug!("lightbox: listener already installed");
            return Ok(false);
        }

        let document = Self::document()?;
        let container = self.container(&document)?;

        let overlay = self.clone();
        let handler = Closure::<dyn Fn(Event)>::new(move |event: Event| {
            if let Err(e) = overlay.handle_click(&event) {
                log::error!("lightbox: {}", e);
            }
        });
        container
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(|e| LightboxError::Listener(describe_js(&e)))?;
        handler.forget();

        LISTENER_INSTALLED.with(|flag| flag.set(true));
        ACTIVE_CONFIG.with(|c| *c.borrow_mut() = Some(self.config.clone()));
        log::debug!(
            "lightbox: listening on #{} (content #{})",
            self.config.container_id,
            self.config.content_id
        );
        Ok(true)
    }
}

/// Exact identity between the event target and the container. Nested
/// wrappers around the image count as descendants, not as backdrop.
pub fn classify_target(event: &Event, container: &Element) -> ClickTarget {
    match event.target() {
        Some(target) if js_sys::Object::is(&target, container) => ClickTarget::Container,
        _ => ClickTarget::Descendant,
    }
}
