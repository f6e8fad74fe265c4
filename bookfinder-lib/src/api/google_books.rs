use log::{info, trace};
use serde::Deserialize;

use crate::Error;

use super::Client;

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Maximum number of volumes requested from, and accepted of, the API.
pub const MAX_RESULTS: usize = 20;

pub(crate) fn search_volumes<C: Client>(query: &str) -> Result<Vec<Volume>, Error> {
    info!("Searching for volumes matching '{query}' using Google Books API");
    let url = format!("{GOOGLE_BOOKS_URL}?q={query}&maxResults={MAX_RESULTS}");

    let client = C::default();
    let GoogleModel { items } = client.get_json(&url)?;

    trace!("Request was successful with {} items", items.len());

    Ok(items)
}

/// The API omits the `items` array entirely when a query matches nothing,
/// which deserializes the same as an empty result set.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    #[serde(default)]
    items: Vec<Volume>,
}

/// One raw item of a volume search response.
///
/// Every field below the top level is optional on the wire, so presence
/// checks are explicit at the use site rather than assumed at this boundary.
#[derive(Clone, Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub struct Volume {
    /// Opaque volume identifier assigned by the API.
    pub id: Option<String>,
    /// Nested bibliographic metadata, when present.
    #[serde(rename = "volumeInfo")]
    pub volume_info: Option<VolumeInfo>,
}

/// Volume information from the Google Books API.
#[derive(Clone, Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub struct VolumeInfo {
    /// Title of the volume.
    pub title: Option<String>,
    /// Authors of the volume.
    pub authors: Option<Vec<String>>,
    /// Publication date, often just a year.
    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,
    /// Cover image links of the volume.
    #[serde(rename = "imageLinks")]
    pub image_links: Option<ImageLinks>,
    /// ISBN-style identifiers of the volume.
    #[serde(rename = "industryIdentifiers")]
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
}

/// Cover image links of a volume.
#[derive(Clone, Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub struct ImageLinks {
    /// Standard thumbnail URL.
    pub thumbnail: Option<String>,
    /// Smaller thumbnail variant.
    #[serde(rename = "smallThumbnail")]
    pub small_thumbnail: Option<String>,
}

/// An ISBN-style identifier of a volume, tagged with its scheme.
#[derive(Clone, Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub struct IndustryIdentifier {
    /// Identifier scheme, `ISBN_13` or `ISBN_10`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The identifier value itself.
    pub identifier: String,
}

impl Volume {
    /// Returns the ISBN-13 identifier of the volume, if it carries one.
    ///
    /// Volumes without an `industryIdentifiers` collection, or without an
    /// `ISBN_13` entry within it, have no identifier. An ISBN-10 is never
    /// used as a substitute.
    #[must_use]
    pub fn isbn_13(&self) -> Option<&str> {
        self.volume_info
            .as_ref()?
            .industry_identifiers
            .as_ref()?
            .iter()
            .find(|id| id.kind == "ISBN_13")
            .map(|id| id.identifier.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{assert_url, impl_json_producer, MockClient, NetworkErrorProducer},
        ErrorKind,
    };

    const GOOGLE_VOLUMES_JSON: &str = include_str!("../../tests/data/google_volumes_json.txt");

    impl_json_producer! {
        ValidJsonProducer => Ok(GOOGLE_VOLUMES_JSON.to_owned()),
        NoItemsProducer => Ok(r#"{ "kind": "books#volumes", "totalItems": 0 }"#.to_owned()),
        EmptyItemsProducer => Ok(r#"{ "items": [] }"#.to_owned()),
    }

    #[test]
    fn url_includes_query_and_max_results() {
        let volumes = super::search_volumes::<MockClient<ValidJsonProducer>>("dune")
            .expect("ValidJsonProducer always produces a valid json String to be deserialized");

        assert!(!volumes.is_empty());
        assert_url!("https://www.googleapis.com/books/v1/volumes?q=dune&maxResults=20");
    }

    #[test]
    fn missing_items_array_is_an_empty_result_set() {
        let volumes = super::search_volumes::<MockClient<NoItemsProducer>>("dune")
            .expect("A response without items should not be an error");

        assert!(volumes.is_empty());
    }

    #[test]
    fn empty_items_array_is_an_empty_result_set() {
        let volumes = super::search_volumes::<MockClient<EmptyItemsProducer>>("dune")
            .expect("A response with no items should not be an error");

        assert!(volumes.is_empty());
    }

    #[test]
    fn network_error_propagates() {
        let err = super::search_volumes::<MockClient<NetworkErrorProducer>>("dune")
            .expect_err("NetworkErrorProducer should always cause an error");

        assert_eq!(ErrorKind::IO, err.kind());
    }

    #[test]
    fn volumes_can_be_derived_from_json() {
        let volumes = super::search_volumes::<MockClient<ValidJsonProducer>>("dune")
            .expect("ValidJsonProducer always produces a valid json String to be deserialized");

        assert_eq!(3, volumes.len());

        let info = volumes[0].volume_info.as_ref().unwrap();
        assert_eq!(Some("Dune"), info.title.as_deref());
        assert_eq!(Some("1965"), info.published_date.as_deref());
        assert_eq!(
            "Frank Herbert",
            info.authors.as_ref().unwrap()[0].as_str()
        );
        assert_eq!(Some("9780441013593"), volumes[0].isbn_13());
    }

    #[test]
    fn isbn_10_is_not_used_as_a_substitute() {
        let volumes = super::search_volumes::<MockClient<ValidJsonProducer>>("dune")
            .expect("ValidJsonProducer always produces a valid json String to be deserialized");

        // The third fixture volume only carries an ISBN-10.
        assert!(volumes[2].isbn_13().is_none());
    }
}
