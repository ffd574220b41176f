use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampaignError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CampaignResult<T> = Result<T, CampaignError>;
