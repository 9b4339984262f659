/// Error categories for the font-resource and Sixel-parser engine.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A setter received a value outside its supported enum of options.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The host font subsystem rejected a built [`FontResourceImage`],
    /// leaving the resource constructed but without a usable handle.
    ///
    /// [`FontResourceImage`]: vtraster_data::FontResourceImage
    #[error("Resource build failed")]
    ResourceBuildFailed,
}

impl Error {
    pub(crate) fn invalid_configuration(detail: impl Into<String>) -> Self {
        Self::InvalidConfiguration(detail.into())
    }
}
