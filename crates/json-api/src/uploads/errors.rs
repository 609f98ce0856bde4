//! Upload Errors

use salvo::http::StatusError;
use tracing::error;

use comanda_app::domain::assets::AssetStoreError;

pub(crate) fn into_status_error(error: AssetStoreError) -> StatusError {
    error!("image upload failed: {error}");

    StatusError::internal_server_error().brief("Image upload failed")
}
