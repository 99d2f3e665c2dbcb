//! URL building for links, hash tags and map locations.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::options::Options;
use crate::{ConvertError, Result};

/// Host that root and project-relative links point to
pub const SCRAPBOX_ORIGIN: &str = "https://scrapbox.io";

const GOOGLE_MAPS_ORIGIN: &str = "https://www.google.com/maps";

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Resolve a project-relative page title to an absolute URL.
///
/// A configured relative link handler wins over the project name. With
/// neither configured the link cannot be resolved.
pub fn resolve_relative_link(link: &str, options: &Options) -> Result<String> {
    if let Some(handler) = &options.relative_link {
        return Ok(handler(link));
    }

    match &options.project_name {
        Some(project) => Ok(format!("{}/{}/{}", SCRAPBOX_ORIGIN, project, link)),
        None => Err(ConvertError::MissingProjectName {
            link: link.to_string(),
        }),
    }
}

/// URL of a root-relative path such as `/help-jp/Links`
pub(crate) fn root_link(href: &str) -> String {
    format!("{}{}", SCRAPBOX_ORIGIN, href)
}

/// Google Maps URL for a place at the given coordinates.
///
/// The place is decoded first so names that are already percent-encoded
/// are not encoded twice. An empty place yields a bare coordinate URL.
pub fn google_map_url(place: &str, latitude: f64, longitude: f64, zoom: u32) -> String {
    let coordinates = format!("@{},{},{}z", latitude, longitude, zoom);

    if place.is_empty() {
        return format!("{}/{}", GOOGLE_MAPS_ORIGIN, coordinates);
    }

    let decoded = percent_decode_str(place).decode_utf8_lossy();
    let segment = utf8_percent_encode(&decoded, COMPONENT);
    format!("{}/place/{}/{}", GOOGLE_MAPS_ORIGIN, segment, coordinates)
}
