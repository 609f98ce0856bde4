//! Create Upload Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use comanda_app::domain::assets::data::ImageUpload;

use crate::{extensions::*, state::State, uploads::errors::into_status_error};

/// Image Uploaded Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImageUploadedResponse {
    /// Public URL of the hosted image
    pub url: String,
}

/// Create Upload Handler
///
/// Accepts a multipart form with a single `image` part and forwards it to
/// the asset host, answering with the hosted URL.
#[endpoint(
    tags("uploads"),
    summary = "Upload Image",
    responses(
        (status_code = StatusCode::OK, description = "Image stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing image file"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ImageUploadedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let file = req
        .file("image")
        .await
        .ok_or_else(|| StatusError::bad_request().brief("Missing image file"))?;

    let upload = ImageUpload {
        file_name: file.name().map(ToString::to_string),
        bytes: tokio::fs::read(file.path())
            .await
            .or_500("failed to read uploaded file")?,
    };

    let stored = state
        .app
        .assets
        .store_image(upload)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ImageUploadedResponse { url: stored.url }))
}
