use thiserror::Error;

use wsdl2ts_wsdl::error as wsdl;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error parsing WSDL")]
    WsdlError(#[from] wsdl::Error),

    #[error("Unknown type definition tag {0}")]
    UnknownDefinitionTag(String),

    #[error("Unable to write output")]
    IoError(#[from] std::io::Error),
}
