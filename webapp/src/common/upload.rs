use dioxus::prelude::*;
use tracing::{error, warn};

use crate::common::dom::alert;
use site::upload::image_data_uri;

// reads the first selected file of an <input type="file"> and inlines it as a
// data uri.  problems are reported to the user and yield None
pub async fn read_image_upload(evt: &FormEvent) -> Option<String> {
    let engine = evt.files()?;
    let name = engine.files().into_iter().next()?;

    let Some(bytes) = engine.read_file(&name).await else {
        error!("failed to read uploaded file {name}");
        return None;
    };

    match image_data_uri(&name, &bytes) {
        Ok(uri) => Some(uri),
        Err(err) => {
            warn!("rejected upload: {err}");
            alert(&err.to_string());
            None
        }
    }
}
