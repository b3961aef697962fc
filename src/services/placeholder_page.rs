//! Placeholder (lazy) page controller.
//!
//! Restored background tabs are opened on a lightweight placeholder page
//! instead of their real destination. The page wears the destination's title
//! and favicon and only navigates once the user actually looks at it.
//!
//! The destination travels in the placeholder's own query string:
//! `<page>?url=<destination>&title=<title>&favIconUrl=<favicon>`.

use tracing::{debug, warn};
use url::Url;

use crate::types::session::TabRecord;
use crate::types::settings::PlaceholderSettings;

const PARAM_URL: &str = "url";
const PARAM_TITLE: &str = "title";
const PARAM_FAVICON: &str = "favIconUrl";

/// Destination carried by a placeholder page URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceholderTarget {
    pub url: Option<String>,
    pub title: Option<String>,
    pub fav_icon_url: Option<String>,
}

impl PlaceholderTarget {
    pub fn for_tab(tab: &TabRecord) -> Self {
        Self {
            url: Some(tab.url.clone()),
            title: non_empty(&tab.title),
            fav_icon_url: non_empty(&tab.fav_icon_url),
        }
    }

    /// Reads the target from a placeholder page URL. Unparseable URLs yield an
    /// empty target.
    pub fn from_page_url(page_url: &str) -> Self {
        let Ok(parsed) = Url::parse(page_url) else {
            return Self::default();
        };

        let mut target = Self::default();
        for (key, value) in parsed.query_pairs() {
            let value = non_empty(&value);
            match key.as_ref() {
                PARAM_URL => target.url = value,
                PARAM_TITLE => target.title = value,
                PARAM_FAVICON => target.fav_icon_url = value,
                _ => {}
            }
        }
        target
    }

    /// Builds the placeholder URL for this target on top of `page_url`.
    /// Each parameter is encoded independently.
    pub fn to_page_url(&self, page_url: &str) -> Result<String, url::ParseError> {
        let mut url = Url::parse(page_url)?;
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            if let Some(target) = &self.url {
                query.append_pair(PARAM_URL, target);
            }
            if let Some(title) = &self.title {
                query.append_pair(PARAM_TITLE, title);
            }
            if let Some(favicon) = &self.fav_icon_url {
                query.append_pair(PARAM_FAVICON, favicon);
            }
        }
        Ok(url.into())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Favicon service URL for the destination's host, if it has one.
pub fn favicon_fallback(service_url: &str, target_url: &str) -> Option<String> {
    let host = Url::parse(target_url).ok()?.host_str()?.to_string();
    let mut service = Url::parse(service_url).ok()?;
    service.query_pairs_mut().append_pair("domain", &host);
    Some(service.into())
}

/// The page environment the controller drives.
pub trait PlaceholderDocument {
    fn set_title(&mut self, title: &str);
    fn set_favicon(&mut self, href: &str);
    /// Shows the destination as text, for when navigation never happens.
    fn show_destination(&mut self, url: &str);
    fn is_hidden(&self) -> bool;
    /// Navigates away, replacing the current history entry.
    fn replace_location(&mut self, url: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderState {
    Pending,
    Navigated,
}

/// Events that reveal the user is looking at the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Focus,
    Click,
}

pub struct PlaceholderPage<D: PlaceholderDocument> {
    document: D,
    target: PlaceholderTarget,
    state: PlaceholderState,
}

impl<D: PlaceholderDocument> PlaceholderPage<D> {
    /// Loads the page from its own URL: disguises the document, then
    /// navigates right away if the page is already visible.
    pub fn load(page_url: &str, document: D, settings: &PlaceholderSettings) -> Self {
        let mut page = Self {
            document,
            target: PlaceholderTarget::from_page_url(page_url),
            state: PlaceholderState::Pending,
        };
        page.disguise(settings);

        if !page.document.is_hidden() {
            page.navigate();
        }
        page
    }

    fn disguise(&mut self, settings: &PlaceholderSettings) {
        if let Some(title) = &self.target.title {
            self.document.set_title(title);
        }

        let favicon = match (&self.target.fav_icon_url, &self.target.url) {
            (Some(favicon), _) => Some(favicon.clone()),
            (None, Some(url)) => favicon_fallback(&settings.favicon_service_url, url),
            (None, None) => None,
        };
        if let Some(favicon) = favicon {
            self.document.set_favicon(&favicon);
        }

        if let Some(url) = &self.target.url {
            self.document.show_destination(url);
        }
    }

    pub fn handle_event(&mut self, event: PageEvent) -> bool {
        debug!(?event, state = ?self.state, "Placeholder page event");
        self.navigate()
    }

    /// Performs the one-way navigation. Returns true only for the call that
    /// actually navigated.
    pub fn navigate(&mut self) -> bool {
        if self.state == PlaceholderState::Navigated {
            return false;
        }
        let Some(url) = self.target.url.clone() else {
            return false;
        };
        self.document.replace_location(&url);
        self.state = PlaceholderState::Navigated;
        true
    }

    pub fn state(&self) -> PlaceholderState {
        self.state
    }

    pub fn target(&self) -> &PlaceholderTarget {
        &self.target
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}

/// Placeholder URL for a saved tab. Falls back to the real URL when the
/// configured page URL is unusable.
pub fn placeholder_url_for(settings: &PlaceholderSettings, tab: &TabRecord) -> String {
    match PlaceholderTarget::for_tab(tab).to_page_url(&settings.page_url) {
        Ok(url) => url,
        Err(e) => {
            warn!(error = %e, page_url = %settings.page_url, "Bad placeholder page URL, loading tab directly");
            tab.url.clone()
        }
    }
}
