use crate::api::google_books::Volume;

const GOODREADS_URL: &str = "https://www.goodreads.com/book/isbn/";
const BOOKFINDER_URL: &str = "https://www.bookfinder.com/search/";

/// A displayable projection of one [`Volume`], keyed by its ISBN-13.
///
/// Rows are derived on every render and never persisted.
#[derive(Clone, Debug)]
pub struct BookRow {
    /// The ISBN-13 identifier the outbound links are built from.
    pub isbn: String,
    /// Title of the volume, empty when the API omits one.
    pub title: String,
    /// Cover thumbnail URL, when the volume has one.
    pub thumbnail: Option<String>,
    /// Publication date as reported by the API, often just a year.
    pub published_date: Option<String>,
    /// Authors of the volume, each rendered on its own line.
    pub authors: Vec<String>,
    /// Link to the Goodreads review page for this ISBN.
    pub goodreads_url: String,
    /// Link to the BookFinder price comparison page for this ISBN.
    pub bookfinder_url: String,
}

impl BookRow {
    /// Projects a raw volume into a row, or `None` when the volume carries
    /// no ISBN-13 and is therefore dropped from the result table.
    #[must_use]
    pub fn from_volume(volume: &Volume) -> Option<Self> {
        let isbn = volume.isbn_13()?.to_owned();

        // isbn_13 returning a value guarantees volume_info is present.
        let info = volume.volume_info.as_ref()?;

        Some(Self {
            title: info.title.clone().unwrap_or_default(),
            thumbnail: info
                .image_links
                .as_ref()
                .and_then(|links| links.thumbnail.clone()),
            published_date: info.published_date.clone(),
            authors: info.authors.clone().unwrap_or_default(),
            goodreads_url: format!("{GOODREADS_URL}{isbn}"),
            bookfinder_url: format!("{BOOKFINDER_URL}?isbn={isbn}&st=xl&ac=qr"),
            isbn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BookRow;
    use crate::api::google_books::{ImageLinks, IndustryIdentifier, Volume, VolumeInfo};

    fn volume(identifiers: Option<Vec<IndustryIdentifier>>) -> Volume {
        Volume {
            id: Some("B1hSG45JCX0C".to_owned()),
            volume_info: Some(VolumeInfo {
                title: Some("Dune".to_owned()),
                authors: Some(vec!["Frank Herbert".to_owned()]),
                published_date: Some("1965".to_owned()),
                image_links: Some(ImageLinks {
                    thumbnail: Some("http://books.google.com/thumb".to_owned()),
                    small_thumbnail: None,
                }),
                industry_identifiers: identifiers,
            }),
        }
    }

    fn isbn_13(identifier: &str) -> IndustryIdentifier {
        IndustryIdentifier {
            kind: "ISBN_13".to_owned(),
            identifier: identifier.to_owned(),
        }
    }

    #[test]
    fn volume_with_isbn_13_produces_exactly_one_row() {
        let row = BookRow::from_volume(&volume(Some(vec![isbn_13("9780441013593")])))
            .expect("A volume with an ISBN-13 should produce a row");

        assert_eq!("9780441013593", row.isbn);
        assert_eq!("Dune", row.title);
        assert_eq!(Some("1965"), row.published_date.as_deref());
        assert_eq!(vec!["Frank Herbert".to_owned()], row.authors);
    }

    #[test]
    fn both_links_embed_the_same_isbn() {
        let row = BookRow::from_volume(&volume(Some(vec![isbn_13("9780441013593")])))
            .expect("A volume with an ISBN-13 should produce a row");

        assert_eq!(
            "https://www.goodreads.com/book/isbn/9780441013593",
            row.goodreads_url
        );
        assert_eq!(
            "https://www.bookfinder.com/search/?isbn=9780441013593&st=xl&ac=qr",
            row.bookfinder_url
        );
    }

    #[test]
    fn volume_without_identifiers_produces_no_row() {
        assert!(BookRow::from_volume(&volume(None)).is_none());
    }

    #[test]
    fn volume_with_only_isbn_10_produces_no_row() {
        let identifiers = vec![IndustryIdentifier {
            kind: "ISBN_10".to_owned(),
            identifier: "0441013597".to_owned(),
        }];

        assert!(BookRow::from_volume(&volume(Some(identifiers))).is_none());
    }

    #[test]
    fn volume_without_volume_info_produces_no_row() {
        let volume = Volume {
            id: None,
            volume_info: None,
        };

        assert!(BookRow::from_volume(&volume).is_none());
    }

    #[test]
    fn missing_optional_fields_render_as_empty() {
        let volume = Volume {
            id: None,
            volume_info: Some(VolumeInfo {
                title: None,
                authors: None,
                published_date: None,
                image_links: None,
                industry_identifiers: Some(vec![isbn_13("9780441013593")]),
            }),
        };

        let row = BookRow::from_volume(&volume)
            .expect("An ISBN-13 is the only required field for a row");

        assert_eq!("", row.title);
        assert!(row.thumbnail.is_none());
        assert!(row.published_date.is_none());
        assert!(row.authors.is_empty());
    }
}
