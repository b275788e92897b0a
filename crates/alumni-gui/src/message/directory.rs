//! Alumni directory messages.

use alumni_client::ApiError;
use alumni_model::AlumniProfile;

use crate::state::TabInstance;

#[derive(Debug, Clone)]
pub enum DirectoryMessage {
    /// Search box edited
    SearchChanged(String),

    /// Search button pressed
    SearchPressed,

    /// `GET /api/alumni` finished
    Loaded {
        instance: TabInstance,
        result: Result<Vec<AlumniProfile>, ApiError>,
    },
}
