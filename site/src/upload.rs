use base64::{Engine, engine::general_purpose::STANDARD};
use mime_guess::mime;
use thiserror::Error;
use tracing::debug;

// value for the html accept attribute on upload inputs
pub const ACCEPTED_IMAGE_TYPES: &str = "image/png, image/jpeg";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IngestError {
    #[error("{0} is empty")]
    Empty(String),
    #[error("{name} is {mime}, expected a png or jpeg image")]
    UnsupportedType { name: String, mime: String },
}

// uploaded images never leave the page: the file is inlined as a data uri and that
// string is stored wherever a url would go
pub fn image_data_uri(file_name: &str, bytes: &[u8]) -> Result<String, IngestError> {
    if bytes.is_empty() {
        return Err(IngestError::Empty(file_name.to_owned()));
    }

    let guess = mime_guess::from_path(file_name).first_or_octet_stream();
    if guess != mime::IMAGE_PNG && guess != mime::IMAGE_JPEG {
        return Err(IngestError::UnsupportedType {
            name: file_name.to_owned(),
            mime: guess.essence_str().to_owned(),
        });
    }

    debug!({file = file_name, bytes = bytes.len()}, "inlining uploaded image");

    Ok(format!(
        "data:{};base64,{}",
        guess.essence_str(),
        STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_is_inlined() {
        let uri = image_data_uri("portrait.png", b"\x89PNG").unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn jpeg_extensions() {
        assert!(image_data_uri("a.jpg", b"x").unwrap().starts_with("data:image/jpeg;base64,"));
        assert!(image_data_uri("a.JPEG", b"x").unwrap().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn other_types_are_rejected() {
        assert_eq!(
            image_data_uri("clip.gif", b"GIF89a"),
            Err(IngestError::UnsupportedType {
                name: String::from("clip.gif"),
                mime: String::from("image/gif"),
            })
        );
        assert!(matches!(
            image_data_uri("notes", b"abc"),
            Err(IngestError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn empty_file_is_rejected() {
        assert_eq!(
            image_data_uri("blank.png", b""),
            Err(IngestError::Empty(String::from("blank.png")))
        );
    }
}
